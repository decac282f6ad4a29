use crate::models::dashboard::demo::sample_series;
use crate::models::SeriesPoint;

/// Slice `dashboard`: serie del gráfico de actividad
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub series: Vec<SeriesPoint>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            series: sample_series(),
            loading: false,
            error: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    LoadStarted,
    SeriesLoaded(Vec<SeriesPoint>),
    LoadFailed(String),
}

impl DashboardState {
    pub fn reduce(self, action: DashboardAction) -> Self {
        match action {
            DashboardAction::LoadStarted => Self {
                loading: true,
                error: None,
                ..self
            },
            DashboardAction::SeriesLoaded(series) => Self {
                series,
                loading: false,
                error: None,
            },
            // Keep the last series so the chart does not go blank
            DashboardAction::LoadFailed(message) => Self {
                loading: false,
                error: Some(message),
                ..self
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_seeded_with_sample_series() {
        let state = DashboardState::default();
        assert_eq!(state.series.len(), 6);
        assert_eq!(state.series[3], SeriesPoint::new("Apr", 800.0));
    }

    #[test]
    fn failure_keeps_previous_series() {
        let state = DashboardState::default()
            .reduce(DashboardAction::LoadStarted)
            .reduce(DashboardAction::LoadFailed("timeout".into()));
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("timeout"));
        assert_eq!(state.series, sample_series());

        let state = state.reduce(DashboardAction::SeriesLoaded(vec![SeriesPoint::new("Jul", 1.0)]));
        assert_eq!(state.error, None);
        assert_eq!(state.series.len(), 1);
    }
}
