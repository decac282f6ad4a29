use yew::prelude::*;

#[function_component(Spinner)]
pub fn spinner() -> Html {
    html! {
        <div class="spinner-container">
            <div class="spinner"></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
    #[prop_or_default]
    pub on_dismiss: Option<Callback<()>>,
}

/// Banner de error no fatal, opcionalmente descartable
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let dismiss = props.on_dismiss.clone().map(|on_dismiss| {
        let onclick = Callback::from(move |_: MouseEvent| on_dismiss.emit(()));
        html! {
            <button type="button" class="error-banner-close" onclick={onclick} title="Dismiss">{"×"}</button>
        }
    });

    html! {
        <div class="error-banner" role="alert">
            <span class="error-banner-text">{ &props.message }</span>
            { for dismiss }
        </div>
    }
}
