use chrono::{DateTime, Utc};
use futures_util::future::join;

use crate::models::{HealthResponse, StatusReport, StatusSnapshot};
use crate::utils::constants::STATUS_FAILED_MESSAGE;

use super::api_client::Backend;
use super::error::ApiError;

/// Consulta health y metrics en paralelo y arma el snapshot
pub async fn check_status<B: Backend>(backend: &B) -> StatusReport {
    let (health, metrics) = join(backend.health(), backend.metrics()).await;
    build_report(health, metrics, Utc::now())
}

/// Merge both reads into one report; either failure degrades the whole snapshot.
pub fn build_report(
    health: Result<HealthResponse, ApiError>,
    metrics: Result<String, ApiError>,
    now: DateTime<Utc>,
) -> StatusReport {
    match (health, metrics) {
        (Ok(health), Ok(metrics)) => {
            log::info!("✅ Status: backend={} database={:?}", health.status, health.database);
            StatusReport {
                snapshot: StatusSnapshot::checked(&health, &metrics, now),
                error: None,
            }
        }
        (health, metrics) => {
            if let Err(e) = &health {
                log::error!("❌ Error consultando health: {}", e);
            }
            if let Err(e) = &metrics {
                log::error!("❌ Error consultando metrics: {}", e);
            }
            StatusReport {
                snapshot: StatusSnapshot::failed(now),
                error: Some(STATUS_FAILED_MESSAGE.to_string()),
            }
        }
    }
}
