//! SVG overlay chart for an aligned history/forecast pair.
//!
//! Renders the historical series as a solid line and the forecast as a
//! dashed one on the shared label axis. Null slots break the line instead
//! of being bridged, so the handoff between the two series stays visible.

use contracts::dashboards::d100_inventory_overview::AlignedSeries;
use leptos::prelude::*;

use crate::shared::date_utils::tick_label;
use crate::shared::number_format::format_int;

const HISTORY_COLOR: &str = "#1976d2";
const FORECAST_COLOR: &str = "#9c27b0";
const GRID_COLOR: &str = "#e0e0e0";
const AXIS_TICKS: usize = 6;

struct Frame {
    width: f64,
    height: f64,
    top: f64,
    right: f64,
    bottom: f64,
    left: f64,
}

impl Frame {
    fn full() -> Self {
        Frame {
            width: 860.0,
            height: 300.0,
            top: 16.0,
            right: 16.0,
            bottom: 28.0,
            left: 48.0,
        }
    }

    fn compact() -> Self {
        Frame {
            width: 240.0,
            height: 80.0,
            top: 4.0,
            right: 4.0,
            bottom: 4.0,
            left: 4.0,
        }
    }

    fn inner_width(&self) -> f64 {
        self.width - self.left - self.right
    }

    fn inner_height(&self) -> f64 {
        self.height - self.top - self.bottom
    }

    fn x(&self, index: usize, len: usize) -> f64 {
        let span = (len.saturating_sub(1)).max(1) as f64;
        self.left + index as f64 / span * self.inner_width()
    }

    fn y(&self, value: f64, max: f64) -> f64 {
        self.top + self.inner_height() - value / max * self.inner_height()
    }
}

/// Contiguous runs of present values as `(start index, values)`.
///
/// Each run becomes one SVG path; the gaps between runs are exactly the
/// null-sentinel slots of the aligned series.
fn value_runs(values: &[Option<f64>]) -> Vec<(usize, Vec<f64>)> {
    let mut runs = Vec::new();
    let mut current: Option<(usize, Vec<f64>)> = None;
    for (index, slot) in values.iter().enumerate() {
        match slot {
            Some(value) => match current.as_mut() {
                Some((_, run)) => run.push(*value),
                None => current = Some((index, vec![*value])),
            },
            None => {
                if let Some(run) = current.take() {
                    runs.push(run);
                }
            }
        }
    }
    if let Some(run) = current {
        runs.push(run);
    }
    runs
}

/// Paths for multi-point runs plus lone points to mark with a dot.
fn render_series(
    values: &[Option<f64>],
    frame: &Frame,
    len: usize,
    max: f64,
) -> (Vec<String>, Vec<(f64, f64)>) {
    let mut paths = Vec::new();
    let mut dots = Vec::new();
    for (start, run) in value_runs(values) {
        if run.len() == 1 {
            dots.push((frame.x(start, len), frame.y(run[0], max)));
            continue;
        }
        let mut d = String::new();
        for (offset, value) in run.iter().enumerate() {
            let cmd = if offset == 0 { "M" } else { " L" };
            d.push_str(&format!(
                "{}{:.1} {:.1}",
                cmd,
                frame.x(start + offset, len),
                frame.y(*value, max)
            ));
        }
        paths.push(d);
    }
    (paths, dots)
}

#[component]
pub fn OverlayLineChart(
    /// Aligned series to plot
    series: AlignedSeries,
    /// Sparkline mode for product cards: no axes or grid
    #[prop(default = false)]
    compact: bool,
) -> impl IntoView {
    if series.is_empty() {
        return view! { <p class="line-chart__empty">"No chart data available."</p> }.into_any();
    }

    let frame = if compact {
        Frame::compact()
    } else {
        Frame::full()
    };
    let len = series.len();
    let max = series.max_value().unwrap_or(0.0).max(1.0);

    let (history_paths, history_dots) = render_series(&series.historical, &frame, len, max);
    let (forecast_paths, forecast_dots) = render_series(&series.forecast, &frame, len, max);

    let grid = (!compact)
        .then(|| {
            [0.0f64, 0.25, 0.5, 0.75, 1.0]
                .iter()
                .map(|frac| {
                    let value = max * frac;
                    let y = frame.y(value, max);
                    view! {
                        <line
                            x1=frame.left
                            y1=y
                            x2={frame.width - frame.right}
                            y2=y
                            stroke=GRID_COLOR
                            stroke-width="1"
                        />
                        <text
                            x={frame.left - 6.0}
                            y={y + 3.0}
                            text-anchor="end"
                            class="line-chart__tick"
                        >
                            {format_int(value)}
                        </text>
                    }
                })
                .collect::<Vec<_>>()
        });

    let ticks = (!compact)
        .then(|| {
            let step = len.div_ceil(AXIS_TICKS).max(1);
            series
                .labels
                .iter()
                .enumerate()
                .step_by(step)
                .map(|(index, label)| {
                    view! {
                        <text
                            x=frame.x(index, len)
                            y={frame.height - 8.0}
                            text-anchor="middle"
                            class="line-chart__tick"
                        >
                            {tick_label(label)}
                        </text>
                    }
                })
                .collect::<Vec<_>>()
        });

    let stroke_width = if compact { "2" } else { "2.5" };

    view! {
        <svg
            class="line-chart"
            viewBox=format!("0 0 {} {}", frame.width, frame.height)
            role="img"
        >
            {grid}
            {ticks}
            {history_paths
                .into_iter()
                .map(|d| {
                    view! {
                        <path d=d fill="none" stroke=HISTORY_COLOR stroke-width=stroke_width />
                    }
                })
                .collect::<Vec<_>>()}
            {forecast_paths
                .into_iter()
                .map(|d| {
                    view! {
                        <path
                            d=d
                            fill="none"
                            stroke=FORECAST_COLOR
                            stroke-width=stroke_width
                            stroke-dasharray="6 4"
                        />
                    }
                })
                .collect::<Vec<_>>()}
            {history_dots
                .into_iter()
                .map(|(cx, cy)| view! { <circle cx=cx cy=cy r="2.5" fill=HISTORY_COLOR /> })
                .collect::<Vec<_>>()}
            {forecast_dots
                .into_iter()
                .map(|(cx, cy)| view! { <circle cx=cx cy=cy r="2.5" fill=FORECAST_COLOR /> })
                .collect::<Vec<_>>()}
        </svg>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_split_on_null_slots() {
        let values = vec![Some(1.0), Some(2.0), None, None, Some(3.0), Some(4.0)];
        assert_eq!(
            value_runs(&values),
            vec![(0, vec![1.0, 2.0]), (4, vec![3.0, 4.0])]
        );
    }

    #[test]
    fn lone_values_form_single_element_runs() {
        let values = vec![None, Some(5.0), None];
        assert_eq!(value_runs(&values), vec![(1, vec![5.0])]);
    }

    #[test]
    fn all_null_yields_no_runs() {
        assert!(value_runs(&[None, None]).is_empty());
        assert!(value_runs(&[]).is_empty());
    }
}
