pub mod auth;
pub mod status;
pub mod dashboard;

pub use auth::{ApiErrorBody, Credentials, LoginResponse};
pub use status::{HealthResponse, ServiceStatus, StatusReport, StatusSnapshot};
pub use dashboard::{ActivityItem, SeriesPoint, StatCard};
