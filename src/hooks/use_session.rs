// ============================================================================
// USE SESSION HOOK - login / logout / clear error sobre el store
// ============================================================================

use yew::prelude::*;

use crate::models::Credentials;
use crate::services::{perform_login, perform_logout, ApiClient};
use crate::state::{AppStore, ProfileAction, SessionAction};
use crate::utils::storage::LocalTokenStore;

pub struct UseSessionHandle {
    pub login: Callback<Credentials>,
    pub logout: Callback<()>,
    pub clear_error: Callback<()>,
}

#[hook]
pub fn use_session(store: AppStore, api: ApiClient) -> UseSessionHandle {
    // Login callback
    let login = {
        let store = store.clone();
        Callback::from(move |credentials: Credentials| {
            store.dispatch(SessionAction::LoginStarted.into());

            let store = store.clone();
            let api = api.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let action = perform_login(&api, &LocalTokenStore, &credentials).await;
                if matches!(action, SessionAction::LoginSucceeded { .. }) {
                    store.dispatch(
                        ProfileAction::SignedIn {
                            username: credentials.username.clone(),
                        }
                        .into(),
                    );
                }
                store.dispatch(action.into());
            });
        })
    };

    // Logout callback
    let logout = {
        let store = store.clone();
        Callback::from(move |_| {
            store.dispatch(perform_logout(&LocalTokenStore).into());
        })
    };

    let clear_error = Callback::from(move |_| {
        store.dispatch(SessionAction::ClearError.into());
    });

    UseSessionHandle {
        login,
        logout,
        clear_error,
    }
}
