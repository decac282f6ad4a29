use serde::{Deserialize, Serialize};

use crate::utils::constants::{
    DEFAULT_API_URL, DEFAULT_STATUS_POLL_INTERVAL_SECONDS, MAX_STATUS_POLL_INTERVAL_SECONDS,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
    pub status_poll_interval_seconds: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            status_poll_interval_seconds: DEFAULT_STATUS_POLL_INTERVAL_SECONDS,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            "API_URL" => option_env!("API_URL"),
            "ENVIRONMENT" => option_env!("ENVIRONMENT"),
            "ENABLE_LOGGING" => option_env!("ENABLE_LOGGING"),
            "LOG_LEVEL" => option_env!("LOG_LEVEL"),
            "STATUS_POLL_INTERVAL_SECONDS" => option_env!("STATUS_POLL_INTERVAL_SECONDS"),
            _ => None,
        })
    }

    /// Builds a config from any key lookup; missing or malformed values keep their defaults.
    pub fn from_lookup<'a, F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).map(str::trim).filter(|v| !v.is_empty());

        Self {
            api_url: non_empty("API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            environment: non_empty("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: non_empty("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: non_empty("LOG_LEVEL")
                .map(str::to_lowercase)
                .unwrap_or(defaults.log_level),
            status_poll_interval_seconds: non_empty("STATUS_POLL_INTERVAL_SECONDS")
                .and_then(|v| v.parse::<u32>().ok())
                .filter(|secs| (1..=MAX_STATUS_POLL_INTERVAL_SECONDS).contains(secs))
                .unwrap_or(defaults.status_poll_interval_seconds),
        }
    }

    /// Nivel de log efectivo; con logging deshabilitado solo se emiten errores
    pub fn log_level(&self) -> log::Level {
        if !self.enable_logging {
            return log::Level::Error;
        }
        match self.log_level.as_str() {
            "trace" => log::Level::Trace,
            "debug" => log::Level::Debug,
            "warn" => log::Level::Warn,
            "error" => log::Level::Error,
            _ => log::Level::Info,
        }
    }

    /// Intervalo en ms; `setInterval` takes an i32, so the result never exceeds `i32::MAX`.
    pub fn status_poll_interval_ms(&self) -> u32 {
        self.status_poll_interval_seconds
            .saturating_mul(1000)
            .min(i32::MAX as u32)
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
