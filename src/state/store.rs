// ============================================================================
// ROOT STORE - auth + dashboard + profile
// ============================================================================

use std::rc::Rc;

use yew::functional::{Reducible, UseReducerHandle};

use super::dashboard::{DashboardAction, DashboardState};
use super::profile::{ProfileAction, ProfileState};
use super::session::{Session, SessionAction};
use crate::utils::storage::TokenStore;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RootState {
    pub session: Session,
    pub dashboard: DashboardState,
    pub profile: ProfileState,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    Session(SessionAction),
    Dashboard(DashboardAction),
    Profile(ProfileAction),
}

impl From<SessionAction> for AppAction {
    fn from(action: SessionAction) -> Self {
        AppAction::Session(action)
    }
}

impl From<DashboardAction> for AppAction {
    fn from(action: DashboardAction) -> Self {
        AppAction::Dashboard(action)
    }
}

impl From<ProfileAction> for AppAction {
    fn from(action: ProfileAction) -> Self {
        AppAction::Profile(action)
    }
}

/// Handle del store que se pasa a los componentes por props
pub type AppStore = UseReducerHandle<RootState>;

impl RootState {
    pub fn from_storage<S: TokenStore>(store: &S) -> Self {
        Self {
            session: Session::from_storage(store),
            ..Self::default()
        }
    }

    pub fn apply(self, action: AppAction) -> Self {
        match action {
            AppAction::Session(action) => {
                let logged_out = action == SessionAction::LoggedOut;
                let profile = if logged_out {
                    self.profile.reduce(ProfileAction::Cleared)
                } else {
                    self.profile
                };
                Self {
                    session: self.session.reduce(action),
                    profile,
                    ..self
                }
            }
            AppAction::Dashboard(action) => Self {
                dashboard: self.dashboard.reduce(action),
                ..self
            },
            AppAction::Profile(action) => Self {
                profile: self.profile.reduce(action),
                ..self
            },
        }
    }
}

impl Reducible for RootState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).clone().apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::memory::MemoryTokenStore;

    #[test]
    fn actions_route_to_their_slice() {
        let state = RootState::default()
            .apply(SessionAction::LoginSucceeded { token: "t".into() }.into())
            .apply(ProfileAction::SignedIn { username: "ops@example.com".into() }.into())
            .apply(DashboardAction::LoadFailed("boom".into()).into());

        assert!(state.session.is_authenticated());
        assert_eq!(state.profile.display_name(), "ops@example.com");
        assert_eq!(state.dashboard.error.as_deref(), Some("boom"));
    }

    #[test]
    fn logout_clears_profile_but_not_dashboard() {
        let state = RootState::from_storage(&MemoryTokenStore::with_token("t"))
            .apply(ProfileAction::SignedIn { username: "ops".into() }.into())
            .apply(DashboardAction::LoadStarted.into())
            .apply(SessionAction::LoggedOut.into());

        assert!(!state.session.is_authenticated());
        assert_eq!(state.profile, ProfileState::default());
        assert!(state.dashboard.loading);
    }

    #[test]
    fn reducible_returns_new_state() {
        let state = Rc::new(RootState::default());
        let next = state.clone().reduce(SessionAction::LoginStarted.into());
        assert!(next.session.is_loading());
        assert!(!state.session.is_loading());
    }
}
