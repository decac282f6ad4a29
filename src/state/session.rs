// ============================================================================
// SESSION STATE - Estado de autenticación (slice `auth` del store)
// ============================================================================

use crate::utils::storage::TokenStore;

/// Fase derivada de la sesión
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Authenticating,
    Authenticated,
    Failed,
}

/// Registro de autenticación del cliente.
///
/// Authentication is derived from the token rather than stored next to it, so a
/// session can never claim to be authenticated without a token.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    token: Option<String>,
    loading: bool,
    error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    LoginStarted,
    LoginSucceeded { token: String },
    LoginFailed { message: String },
    LoggedOut,
    ClearError,
}

impl Session {
    /// Rehidrata la sesión desde el almacenamiento durable
    pub fn from_storage<S: TokenStore>(store: &S) -> Self {
        let token = store.load();
        if token.is_some() {
            log::info!("✅ Token encontrado en storage, sesión restaurada");
        }
        Self {
            token,
            loading: false,
            error: None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn phase(&self) -> SessionPhase {
        if self.loading {
            SessionPhase::Authenticating
        } else if self.token.is_some() {
            SessionPhase::Authenticated
        } else if self.error.is_some() {
            SessionPhase::Failed
        } else {
            SessionPhase::Idle
        }
    }

    pub fn reduce(self, action: SessionAction) -> Self {
        match action {
            SessionAction::LoginStarted => Self {
                loading: true,
                error: None,
                ..self
            },
            SessionAction::LoginSucceeded { token } => Self {
                token: Some(token),
                loading: false,
                error: None,
            },
            // The token is left as it was: a failed attempt never sets one
            SessionAction::LoginFailed { message } => Self {
                loading: false,
                error: Some(message),
                ..self
            },
            SessionAction::LoggedOut => Self::default(),
            SessionAction::ClearError => Self { error: None, ..self },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::memory::MemoryTokenStore;

    fn authenticated(token: &str) -> Session {
        Session::default().reduce(SessionAction::LoginSucceeded { token: token.to_string() })
    }

    #[test]
    fn initial_state_mirrors_storage() {
        let session = Session::from_storage(&MemoryTokenStore::with_token("persisted"));
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("persisted"));
        assert!(!session.is_loading());
        assert_eq!(session.error(), None);

        let session = Session::from_storage(&MemoryTokenStore::default());
        assert!(!session.is_authenticated());
        assert_eq!(session.phase(), SessionPhase::Idle);
    }

    #[test]
    fn login_started_sets_loading_and_clears_error() {
        let session = Session::default()
            .reduce(SessionAction::LoginFailed { message: "nope".into() })
            .reduce(SessionAction::LoginStarted);
        assert!(session.is_loading());
        assert_eq!(session.error(), None);
        assert_eq!(session.phase(), SessionPhase::Authenticating);
    }

    #[test]
    fn login_success_authenticates_with_server_token() {
        let session = Session::default()
            .reduce(SessionAction::LoginStarted)
            .reduce(SessionAction::LoginSucceeded { token: "abc".into() });
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("abc"));
        assert!(!session.is_loading());
        assert_eq!(session.phase(), SessionPhase::Authenticated);
    }

    #[test]
    fn login_failure_records_error_without_token() {
        let session = Session::default()
            .reduce(SessionAction::LoginStarted)
            .reduce(SessionAction::LoginFailed { message: "Login failed".into() });
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
        assert_eq!(session.error(), Some("Login failed"));
        assert!(!session.is_loading());
        assert_eq!(session.phase(), SessionPhase::Failed);
    }

    #[test]
    fn logout_resets_from_any_state() {
        let states = [
            Session::default(),
            authenticated("abc"),
            authenticated("abc").reduce(SessionAction::LoginStarted),
            Session::default().reduce(SessionAction::LoginFailed { message: "x".into() }),
        ];
        for state in states {
            let session = state.reduce(SessionAction::LoggedOut);
            assert_eq!(session, Session::default());
            assert!(!session.is_authenticated());
        }
    }

    #[test]
    fn clear_error_only_touches_error() {
        let failed = authenticated("abc").reduce(SessionAction::LoginFailed { message: "x".into() });
        let cleared = failed.clone().reduce(SessionAction::ClearError);
        assert_eq!(cleared.error(), None);
        assert_eq!(cleared.token(), failed.token());
        assert_eq!(cleared.is_loading(), failed.is_loading());
    }
}
