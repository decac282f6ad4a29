use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Error,
    #[default]
    Unknown,
}

impl ServiceStatus {
    /// Interpreta el string de estado del backend
    pub fn from_backend(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("healthy") => ServiceStatus::Healthy,
            Some("error") | Some("unhealthy") => ServiceStatus::Error,
            _ => ServiceStatus::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceStatus::Healthy => "healthy",
            ServiceStatus::Error => "error",
            ServiceStatus::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Respuesta de `GET /health`. Extra fields (environment, version) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub database: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StatusSnapshot {
    pub backend: ServiceStatus,
    pub database: ServiceStatus,
    pub last_checked: Option<DateTime<Utc>>,
    pub metrics: Option<String>,
}

impl StatusSnapshot {
    /// Snapshot from a pair of successful health and metrics reads
    pub fn checked(health: &HealthResponse, metrics: &str, now: DateTime<Utc>) -> Self {
        Self {
            backend: ServiceStatus::from_backend(Some(&health.status)),
            database: ServiceStatus::from_backend(health.database.as_deref()),
            last_checked: Some(now),
            metrics: Some(format_metrics(metrics)),
        }
    }

    /// Both services degrade to `Error`; previous metrics are not carried over.
    pub fn failed(now: DateTime<Utc>) -> Self {
        Self {
            backend: ServiceStatus::Error,
            database: ServiceStatus::Error,
            last_checked: Some(now),
            metrics: None,
        }
    }
}

/// Resultado de un ciclo de polling
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatusReport {
    pub snapshot: StatusSnapshot,
    pub error: Option<String>,
}

/// Pretty-prints JSON metrics; any other body is returned as-is.
pub fn format_metrics(raw: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(value @ (serde_json::Value::Object(_) | serde_json::Value::Array(_))) => {
            serde_json::to_string_pretty(&value).unwrap_or_else(|_| raw.to_string())
        }
        _ => raw.to_string(),
    }
}
