pub mod use_session;
pub mod use_status_poller;

pub use use_session::{use_session, UseSessionHandle};
pub use use_status_poller::{use_status_poller, RepeatingTimer, StatusPoller, UseStatusPollerHandle};
