// ============================================================================
// LINE CHART - gráfico SVG simple para la serie de actividad
// ============================================================================

use yew::prelude::*;

use crate::models::SeriesPoint;

const GRID_LINES: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub points: Vec<ChartPoint>,
    /// Top of the y axis; never zero
    pub y_max: f64,
}

impl ChartLayout {
    /// Atributo `points` de la `<polyline>`
    pub fn polyline(&self) -> String {
        self.points
            .iter()
            .map(|p| format!("{:.1},{:.1}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Y coordinate for a value on this layout's scale
    pub fn y_for(&self, value: f64, height: f64, padding: f64) -> f64 {
        let plot_height = (height - 2.0 * padding).max(0.0);
        height - padding - (value / self.y_max) * plot_height
    }
}

/// Points spread evenly on x and scaled on y so the largest value touches the top.
pub fn chart_layout(series: &[SeriesPoint], width: f64, height: f64, padding: f64) -> ChartLayout {
    let y_max = series
        .iter()
        .map(|p| p.value)
        .fold(0.0_f64, f64::max);
    let y_max = if y_max > 0.0 { y_max } else { 1.0 };

    let plot_width = (width - 2.0 * padding).max(0.0);
    let step = if series.len() > 1 {
        plot_width / (series.len() - 1) as f64
    } else {
        0.0
    };

    let mut layout = ChartLayout {
        points: Vec::with_capacity(series.len()),
        y_max,
    };
    for (i, point) in series.iter().enumerate() {
        let x = if series.len() == 1 {
            padding + plot_width / 2.0
        } else {
            padding + step * i as f64
        };
        let y = layout.y_for(point.value.max(0.0), height, padding);
        layout.points.push(ChartPoint {
            x,
            y,
            label: point.label.clone(),
            value: point.value,
        });
    }
    layout
}

#[derive(Properties, PartialEq)]
pub struct LineChartProps {
    pub series: Vec<SeriesPoint>,
    #[prop_or(720)]
    pub width: u32,
    #[prop_or(320)]
    pub height: u32,
}

#[function_component(LineChart)]
pub fn line_chart(props: &LineChartProps) -> Html {
    let width = props.width as f64;
    let height = props.height as f64;
    let padding = 40.0;
    let layout = chart_layout(&props.series, width, height, padding);

    let grid = (0..=GRID_LINES).map(|i| {
        let value = layout.y_max * i as f64 / GRID_LINES as f64;
        let y = layout.y_for(value, height, padding);
        html! {
            <g class="chart-grid">
                <line x1={padding.to_string()} x2={(width - padding).to_string()}
                      y1={y.to_string()} y2={y.to_string()} stroke-dasharray="3 3" />
                <text x={(padding - 8.0).to_string()} y={(y + 4.0).to_string()} text-anchor="end">
                    { format!("{}", value.round()) }
                </text>
            </g>
        }
    });

    let markers = layout.points.iter().map(|p| {
        html! {
            <g class="chart-point">
                <circle cx={p.x.to_string()} cy={p.y.to_string()} r="4">
                    <title>{ format!("{}: {}", p.label, p.value) }</title>
                </circle>
                <text x={p.x.to_string()} y={(height - padding + 18.0).to_string()} text-anchor="middle">
                    { &p.label }
                </text>
            </g>
        }
    });

    html! {
        <svg class="line-chart" viewBox={format!("0 0 {} {}", props.width, props.height)}
             preserveAspectRatio="xMidYMid meet">
            { for grid }
            <polyline class="chart-line" fill="none" stroke="#3B82F6" stroke-width="2"
                      points={layout.polyline()} />
            { for markers }
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn largest_value_touches_top_and_zero_sits_on_axis() {
        let series = vec![SeriesPoint::new("a", 0.0), SeriesPoint::new("b", 50.0), SeriesPoint::new("c", 100.0)];
        let layout = chart_layout(&series, 200.0, 120.0, 10.0);

        assert_eq!(layout.y_max, 100.0);
        assert_eq!(layout.points[0].x, 10.0);
        assert_eq!(layout.points[2].x, 190.0);
        assert_eq!(layout.points[0].y, 110.0);
        assert_eq!(layout.points[1].y, 60.0);
        assert_eq!(layout.points[2].y, 10.0);
        assert_eq!(layout.polyline(), "10.0,110.0 100.0,60.0 190.0,10.0");
    }

    #[test]
    fn degenerate_series_do_not_divide_by_zero() {
        let layout = chart_layout(&[], 200.0, 120.0, 10.0);
        assert!(layout.points.is_empty());
        assert_eq!(layout.y_max, 1.0);

        let zeros = vec![SeriesPoint::new("a", 0.0), SeriesPoint::new("b", 0.0)];
        let layout = chart_layout(&zeros, 200.0, 120.0, 10.0);
        assert!(layout.points.iter().all(|p| p.y == 110.0));

        let single = chart_layout(&[SeriesPoint::new("only", 5.0)], 200.0, 120.0, 10.0);
        assert_eq!(single.points[0].x, 100.0);
        assert_eq!(single.points[0].y, 10.0);
    }
}
