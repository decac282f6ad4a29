use yew::prelude::*;

use super::{Dashboard, LoginScreen, NavBar, Page, StatusPanel};
use crate::config::CONFIG;
use crate::hooks::use_session;
use crate::services::ApiClient;
use crate::state::RootState;
use crate::utils::storage::LocalTokenStore;

#[function_component(App)]
pub fn app() -> Html {
    // Store central, rehidratado desde localStorage
    let store = use_reducer(|| RootState::from_storage(&LocalTokenStore));
    let api = (*use_state(ApiClient::new)).clone();
    let page = use_state(|| Page::Dashboard);
    let session = use_session(store.clone(), api.clone());

    if !store.session.is_authenticated() {
        return html! {
            <LoginScreen
                session={store.session.clone()}
                on_login={session.login}
                on_dismiss_error={session.clear_error}
            />
        };
    }

    let on_navigate = {
        let page = page.clone();
        Callback::from(move |next: Page| page.set(next))
    };

    let content = match *page {
        Page::Dashboard => html! { <Dashboard state={store.dashboard.clone()} /> },
        Page::Status => html! {
            <StatusPanel api={api} poll_interval_ms={CONFIG.status_poll_interval_ms()} />
        },
    };

    html! {
        <div class="admin-app">
            <NavBar
                current={*page}
                username={store.profile.display_name().to_string()}
                {on_navigate}
                on_logout={session.logout}
            />
            <main class="admin-main">{ content }</main>
        </div>
    }
}
