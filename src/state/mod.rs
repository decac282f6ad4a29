// ============================================================================
// STATE MODULE - store central con reducers puros por slice
// ============================================================================

pub mod session;
pub mod dashboard;
pub mod profile;
pub mod store;

pub use session::{Session, SessionAction, SessionPhase};
pub use dashboard::{DashboardAction, DashboardState};
pub use profile::{ProfileAction, ProfileState};
pub use store::{AppAction, AppStore, RootState};
