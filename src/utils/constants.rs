/// URL base del backend cuando no hay `API_URL` configurada
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Clave de localStorage donde vive el bearer token
pub const STORAGE_KEY_TOKEN: &str = "token";

pub const DEFAULT_STATUS_POLL_INTERVAL_SECONDS: u32 = 30;
/// Mayor intervalo cuyo valor en ms cabe en el i32 de `setInterval`
pub const MAX_STATUS_POLL_INTERVAL_SECONDS: u32 = i32::MAX as u32 / 1000;

pub const HEALTH_PATH: &str = "/health";
pub const METRICS_PATH: &str = "/metrics";
pub const LOGIN_PATH: &str = "/api/auth/login";

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";
pub const STATUS_FAILED_MESSAGE: &str = "Failed to fetch status information";

/// Mensaje al usuario cuando el token no se puede guardar en el navegador
pub const TOKEN_NOT_SAVED_MESSAGE: &str = "Could not save your session in this browser";
