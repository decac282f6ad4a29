use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::ErrorBanner;
use crate::models::Credentials;
use crate::state::{Session, SessionPhase};

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub session: Session,
    pub on_login: Callback<Credentials>,
    pub on_dismiss_error: Callback<()>,
}

/// Texto del botón de login según la fase de la sesión
pub fn submit_label(phase: SessionPhase) -> &'static str {
    match phase {
        SessionPhase::Authenticating => "Signing in...",
        SessionPhase::Failed => "Try again",
        SessionPhase::Idle | SessionPhase::Authenticated => "Sign in",
    }
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let loading = props.session.is_loading();

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let credentials = Credentials::new((*email).trim(), (*password).clone());
            if !loading && credentials.is_complete() {
                on_login.emit(credentials);
            }
        })
    };

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <h1>{"Admin Console"}</h1>
                    <p>{"Sign in to your account"}</p>
                </div>

                if let Some(error) = props.session.error() {
                    <ErrorBanner message={error.to_string()} on_dismiss={props.on_dismiss_error.clone()} />
                }

                <form class="login-form" {onsubmit}>
                    <div class="form-group">
                        <label for="email">{"Email address"}</label>
                        <input
                            id="email"
                            type="email"
                            autocomplete="username"
                            required=true
                            value={(*email).clone()}
                            oninput={on_email}
                            disabled={loading}
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            id="password"
                            type="password"
                            autocomplete="current-password"
                            required=true
                            value={(*password).clone()}
                            oninput={on_password}
                            disabled={loading}
                        />
                    </div>
                    <button type="submit" class="btn-primary" disabled={loading}>
                        { submit_label(props.session.phase()) }
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SessionAction;

    #[test]
    fn button_label_follows_session_phase() {
        let idle = Session::default();
        assert_eq!(submit_label(idle.phase()), "Sign in");

        let signing_in = idle.clone().reduce(SessionAction::LoginStarted);
        assert_eq!(submit_label(signing_in.phase()), "Signing in...");

        let failed = signing_in.reduce(SessionAction::LoginFailed { message: "Login failed".into() });
        assert_eq!(submit_label(failed.phase()), "Try again");

        // Dismissing the error goes back to the plain prompt
        assert_eq!(submit_label(failed.reduce(SessionAction::ClearError).phase()), "Sign in");
    }
}
