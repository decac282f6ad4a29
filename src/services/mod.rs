pub mod error;
pub mod api_client;
pub mod auth_service;
pub mod status_service;

pub use error::ApiError;
pub use api_client::{ApiClient, Backend};
pub use auth_service::*;
pub use status_service::*;
