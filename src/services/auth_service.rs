use crate::models::Credentials;
use crate::state::SessionAction;
use crate::utils::constants::{LOGIN_FAILED_MESSAGE, TOKEN_NOT_SAVED_MESSAGE};
use crate::utils::storage::TokenStore;

use super::api_client::Backend;
use super::error::ApiError;

/// Perform login and persist the returned token.
///
/// Never fails: the outcome is the session action to dispatch. A token that cannot be
/// persisted is treated as a failed login.
pub async fn perform_login<B, S>(backend: &B, store: &S, credentials: &Credentials) -> SessionAction
where
    B: Backend,
    S: TokenStore,
{
    let response = match backend.login(credentials).await {
        Ok(response) => response,
        Err(e) => {
            log::error!("❌ Login fallido para {}: {}", credentials.username, e);
            return SessionAction::LoginFailed {
                message: login_error_message(&e),
            };
        }
    };

    if response.access_token.is_empty() {
        log::error!("❌ Respuesta de login sin access_token");
        return SessionAction::LoginFailed {
            message: LOGIN_FAILED_MESSAGE.to_string(),
        };
    }

    if let Err(e) = store.save(&response.access_token) {
        log::error!("❌ No se pudo guardar el token: {}", e);
        return SessionAction::LoginFailed {
            message: TOKEN_NOT_SAVED_MESSAGE.to_string(),
        };
    }

    log::info!("✅ Login exitoso: {}", credentials.username);
    SessionAction::LoginSucceeded {
        token: response.access_token,
    }
}

/// Clear the persisted token. The in-memory session is reset even if storage fails.
pub fn perform_logout<S: TokenStore>(store: &S) -> SessionAction {
    if let Err(e) = store.clear() {
        log::error!("❌ Error eliminando token de storage: {}", e);
    }
    log::info!("👋 Logout");
    SessionAction::LoggedOut
}

/// Mensaje para el usuario: el del servidor si lo hay
pub fn login_error_message(error: &ApiError) -> String {
    error
        .server_message()
        .unwrap_or(LOGIN_FAILED_MESSAGE)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api_client::fake::FakeBackend;
    use crate::state::Session;
    use crate::utils::storage::memory::MemoryTokenStore;

    fn credentials() -> Credentials {
        Credentials::new("admin@example.com", "secret")
    }

    #[tokio::test]
    async fn successful_login_persists_server_token() {
        let backend = FakeBackend::healthy();
        let store = MemoryTokenStore::default();

        let action = perform_login(&backend, &store, &credentials()).await;
        assert_eq!(action, SessionAction::LoginSucceeded { token: "server-token".into() });
        assert_eq!(store.raw().as_deref(), Some("server-token"));

        let session = Session::default().reduce(SessionAction::LoginStarted).reduce(action);
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("server-token"));

        // A restart sees the same session
        assert_eq!(Session::from_storage(&store).token(), Some("server-token"));
    }

    #[tokio::test]
    async fn rejected_login_uses_server_message() {
        let backend = FakeBackend {
            login: Err(ApiError::Rejected {
                status: 401,
                message: Some("Incorrect username or password".into()),
            }),
            ..FakeBackend::healthy()
        };
        let store = MemoryTokenStore::default();

        let action = perform_login(&backend, &store, &credentials()).await;
        assert_eq!(
            action,
            SessionAction::LoginFailed { message: "Incorrect username or password".into() }
        );
        assert_eq!(store.raw(), None);

        let session = Session::default().reduce(action);
        assert!(!session.is_authenticated());
        assert!(session.error().is_some());
    }

    #[tokio::test]
    async fn network_failure_reports_generic_message() {
        let backend = FakeBackend {
            login: Err(ApiError::Network("connection refused".into())),
            ..FakeBackend::healthy()
        };
        let action = perform_login(&backend, &MemoryTokenStore::default(), &credentials()).await;
        assert_eq!(action, SessionAction::LoginFailed { message: "Login failed".into() });
        assert_eq!(backend.login_calls.get(), 1);
    }

    #[tokio::test]
    async fn unpersistable_token_fails_login() {
        let backend = FakeBackend::healthy();
        let action = perform_login(&backend, &MemoryTokenStore::failing(), &credentials()).await;
        assert_eq!(
            action,
            SessionAction::LoginFailed {
                message: TOKEN_NOT_SAVED_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn logout_clears_storage() {
        let store = MemoryTokenStore::with_token("abc");
        assert_eq!(perform_logout(&store), SessionAction::LoggedOut);
        assert_eq!(store.load(), None);

        // Storage failure still logs out
        assert_eq!(perform_logout(&MemoryTokenStore::failing()), SessionAction::LoggedOut);
    }
}
