use serde::{Deserialize, Serialize};

/// Un punto de la serie del gráfico de actividad
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(label: &str, value: f64) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub tone: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityItem {
    pub title: String,
    pub description: String,
    pub when: &'static str,
}

/// Datos de demo para el dashboard
pub mod demo {
    use super::{ActivityItem, SeriesPoint, StatCard};

    pub fn sample_series() -> Vec<SeriesPoint> {
        vec![
            SeriesPoint::new("Jan", 400.0),
            SeriesPoint::new("Feb", 300.0),
            SeriesPoint::new("Mar", 600.0),
            SeriesPoint::new("Apr", 800.0),
            SeriesPoint::new("May", 500.0),
            SeriesPoint::new("Jun", 700.0),
        ]
    }

    pub fn stat_cards() -> Vec<StatCard> {
        vec![
            StatCard { title: "Total Users", value: "1,234", tone: "blue" },
            StatCard { title: "Active Sessions", value: "567", tone: "green" },
            StatCard { title: "API Requests", value: "89,012", tone: "purple" },
        ]
    }

    pub fn recent_activity() -> Vec<ActivityItem> {
        (1..=3)
            .map(|n| ActivityItem {
                title: format!("Activity {}", n),
                description: format!("Description of activity {}", n),
                when: "2 hours ago",
            })
            .collect()
    }
}
