// ============================================================================
// STATUS PANEL - health del backend / base de datos + métricas
// ============================================================================

use yew::prelude::*;

use super::{ErrorBanner, Spinner};
use crate::config::CONFIG;
use crate::hooks::use_status_poller;
use crate::models::{ServiceStatus, StatusSnapshot};
use crate::services::ApiClient;

#[derive(Properties, PartialEq)]
pub struct StatusPanelProps {
    pub api: ApiClient,
    pub poll_interval_ms: u32,
}

/// Clase CSS del badge según estado
pub fn status_badge_class(status: ServiceStatus) -> &'static str {
    match status {
        ServiceStatus::Healthy => "badge badge-healthy",
        ServiceStatus::Error => "badge badge-error",
        ServiceStatus::Unknown => "badge badge-unknown",
    }
}

pub fn last_checked_label(snapshot: &StatusSnapshot) -> String {
    snapshot
        .last_checked
        .map(|at| at.with_timezone(&chrono::Local).format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "never".to_string())
}

#[function_component(StatusPanel)]
pub fn status_panel(props: &StatusPanelProps) -> Html {
    let poller = use_status_poller(props.api.clone(), props.poll_interval_ms);

    let Some(report) = (*poller.report).clone() else {
        return html! { <Spinner /> };
    };
    let snapshot = &report.snapshot;

    let on_refresh = {
        let refresh = poller.refresh.clone();
        Callback::from(move |_: MouseEvent| refresh.emit(()))
    };

    let service = |title: &'static str, status: ServiceStatus| {
        html! {
            <div class="status-card">
                <h3>{ title }</h3>
                <span class={status_badge_class(status)}>{ status.as_str() }</span>
            </div>
        }
    };

    html! {
        <div class="status-page">
            <section class="panel">
                <div class="panel-header">
                    <h2>{"System Status"}</h2>
                    <button type="button" class="btn-primary" onclick={on_refresh}>{"Refresh"}</button>
                </div>

                if let Some(error) = &report.error {
                    <ErrorBanner message={error.clone()} />
                }

                <div class="status-grid">
                    { service("Backend Status", snapshot.backend) }
                    { service("Database Status", snapshot.database) }
                </div>
                <div class="status-checked">
                    { format!("Last checked: {}", last_checked_label(snapshot)) }
                </div>
            </section>

            <section class="panel">
                <h3>{"System Metrics"}</h3>
                {
                    match &snapshot.metrics {
                        Some(metrics) => html! { <pre class="metrics">{ metrics }</pre> },
                        None => html! { <div class="muted">{"No metrics available"}</div> },
                    }
                }
            </section>

            <section class="panel">
                <h3>{"Network Information"}</h3>
                <div class="info-grid">
                    <div class="info-card">
                        <h4>{"API Endpoint"}</h4>
                        <p>{ props.api.base_url() }</p>
                    </div>
                    <div class="info-card">
                        <h4>{"Environment"}</h4>
                        <p>{ &CONFIG.environment }</p>
                    </div>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn badge_class_follows_status() {
        assert_eq!(status_badge_class(ServiceStatus::Healthy), "badge badge-healthy");
        assert_eq!(status_badge_class(ServiceStatus::Error), "badge badge-error");
        assert_eq!(status_badge_class(ServiceStatus::Unknown), "badge badge-unknown");
    }

    #[test]
    fn unchecked_snapshot_reads_never() {
        assert_eq!(last_checked_label(&StatusSnapshot::default()), "never");
        let checked = StatusSnapshot::failed(Utc::now());
        assert_eq!(last_checked_label(&checked).len(), "00:00:00".len());
    }
}
