// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use gloo_net::http::{Request, Response};

use crate::config::CONFIG;
use crate::models::{ApiErrorBody, Credentials, HealthResponse, LoginResponse};
use crate::utils::constants::{HEALTH_PATH, LOGIN_PATH, METRICS_PATH};

use super::error::ApiError;

/// Frontera HTTP con el backend.
///
/// Flows in `auth_service` and `status_service` are generic over this so they can run
/// against an in-memory backend in tests.
#[allow(async_fn_in_trait)]
pub trait Backend {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;
    async fn health(&self) -> Result<HealthResponse, ApiError>;
    /// Raw metrics body; the format is owned by the backend.
    async fn metrics(&self) -> Result<String, ApiError>;
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(&CONFIG.api_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Backend for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let url = self.url(LOGIN_PATH);
        log::info!("🔐 POST {} (usuario: {})", url, credentials.username);

        let response = Request::post(&url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header("X-Requested-With", "XMLHttpRequest")
            .body(encode_login_form(credentials))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(rejection(response).await);
        }
        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn health(&self) -> Result<HealthResponse, ApiError> {
        let response = Request::get(&self.url(HEALTH_PATH))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(rejection(response).await);
        }
        response
            .json::<HealthResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn metrics(&self) -> Result<String, ApiError> {
        let response = Request::get(&self.url(METRICS_PATH))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(rejection(response).await);
        }
        Ok(response.text().await?)
    }
}

/// Cuerpo `application/x-www-form-urlencoded` que espera el endpoint de login
pub fn encode_login_form(credentials: &Credentials) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair("username", &credentials.username)
        .append_pair("password", &credentials.password)
        .finish()
}

async fn rejection(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = ApiErrorBody::parse(&body).and_then(ApiErrorBody::into_message);
    log::warn!("⚠️ HTTP {} {}: {:?}", status, response.url(), message);
    ApiError::Rejected { status, message }
}

#[cfg(test)]
pub mod fake {
    use std::cell::Cell;

    use super::*;

    /// Backend en memoria con respuestas fijas
    pub struct FakeBackend {
        pub login: Result<LoginResponse, ApiError>,
        pub health: Result<HealthResponse, ApiError>,
        pub metrics: Result<String, ApiError>,
        pub login_calls: Cell<usize>,
    }

    impl FakeBackend {
        pub fn healthy() -> Self {
            Self {
                login: Ok(LoginResponse {
                    access_token: "server-token".to_string(),
                    token_type: Some("bearer".to_string()),
                }),
                health: Ok(HealthResponse {
                    status: "healthy".to_string(),
                    database: Some("healthy".to_string()),
                }),
                metrics: Ok("requests_total 12".to_string()),
                login_calls: Cell::new(0),
            }
        }
    }

    impl Backend for FakeBackend {
        async fn login(&self, _credentials: &Credentials) -> Result<LoginResponse, ApiError> {
            self.login_calls.set(self.login_calls.get() + 1);
            self.login.clone()
        }

        async fn health(&self) -> Result<HealthResponse, ApiError> {
            self.health.clone()
        }

        async fn metrics(&self) -> Result<String, ApiError> {
            self.metrics.clone()
        }
    }
}
