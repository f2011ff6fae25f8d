//! Composition engine: pure transforms from an analytics payload to the
//! chart-ready view model.
//!
//! Nothing here touches the network, the clock, or any other ambient state;
//! the same `(payload, horizon)` always composes the same view model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::dto::{DashboardPayload, ProductSeries, TimeSeriesPoint};
use super::horizon::{ForecastHorizon, LOOKBACK_POINTS};
use super::status::{classify, StockBand};

// ---------------------------------------------------------------------------
// Window selector
// ---------------------------------------------------------------------------

/// Truncate a history/forecast pair to the charting window: the last
/// `lookback` historical points and the first `horizon` forecast points.
///
/// Short input is returned whole; this never errors and never copies.
pub fn select_window<'a>(
    historical: &'a [TimeSeriesPoint],
    forecast: &'a [TimeSeriesPoint],
    lookback: usize,
    horizon: usize,
) -> (&'a [TimeSeriesPoint], &'a [TimeSeriesPoint]) {
    let start = historical.len().saturating_sub(lookback);
    let end = horizon.min(forecast.len());
    (&historical[start..], &forecast[..end])
}

// ---------------------------------------------------------------------------
// Series aligner
// ---------------------------------------------------------------------------

/// Two series merged onto one shared label axis.
///
/// `historical[i]` and `forecast[i]` are parallel to `labels`; each slot
/// holds a value for exactly one of the two series and `None` for the
/// other. The padding is deliberate: an overlay chart renders a visible
/// handoff between the solid and dashed line instead of a fabricated
/// connecting sample.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlignedSeries {
    pub labels: Vec<String>,
    pub historical: Vec<Option<f64>>,
    pub forecast: Vec<Option<f64>>,
}

impl AlignedSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Largest plotted value across both series, for axis scaling.
    pub fn max_value(&self) -> Option<f64> {
        self.historical
            .iter()
            .chain(self.forecast.iter())
            .flatten()
            .copied()
            .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
    }
}

/// Merge a historical and a forecast sequence onto one label axis.
///
/// Labels are the historical dates followed by the forecast dates, each
/// input's relative order preserved. The engine assumes historical dates
/// precede forecast dates chronologically; that assumption is the upstream
/// producer's contract and is checked by [`scan_series_order`], never
/// silently repaired here. A point with a missing value keeps its label and
/// aligns as `None`.
pub fn align(historical: &[TimeSeriesPoint], forecast: &[TimeSeriesPoint]) -> AlignedSeries {
    let total = historical.len() + forecast.len();
    let mut aligned = AlignedSeries {
        labels: Vec::with_capacity(total),
        historical: Vec::with_capacity(total),
        forecast: Vec::with_capacity(total),
    };
    for point in historical {
        aligned.labels.push(point.date.clone());
        aligned.historical.push(point.value);
        aligned.forecast.push(None);
    }
    for point in forecast {
        aligned.labels.push(point.date.clone());
        aligned.historical.push(None);
        aligned.forecast.push(point.value);
    }
    aligned
}

// ---------------------------------------------------------------------------
// Series-order scan
// ---------------------------------------------------------------------------

/// Which input series an issue was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesKind {
    Historical,
    Forecast,
}

/// A violation of the upstream ordering contract.
///
/// These are reported, not fixed: the aligner keeps the producer's order so
/// a chart never shows silently reshuffled data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SeriesOrderIssue {
    /// `series[index]` is dated before its predecessor.
    OutOfOrder { series: SeriesKind, index: usize },
    /// The first forecast date does not come after the last historical date.
    HistoryOverlapsForecast,
}

impl fmt::Display for SeriesOrderIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesOrderIssue::OutOfOrder { series, index } => {
                let name = match series {
                    SeriesKind::Historical => "historical",
                    SeriesKind::Forecast => "forecast",
                };
                write!(f, "{name} series runs backwards at index {index}")
            }
            SeriesOrderIssue::HistoryOverlapsForecast => {
                write!(f, "forecast starts before the historical series ends")
            }
        }
    }
}

/// Parse the date part of a label, tolerating a trailing time component.
fn parse_date(label: &str) -> Option<NaiveDate> {
    let date_part = label.split('T').next().unwrap_or(label);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

fn scan_one(points: &[TimeSeriesPoint], kind: SeriesKind, issues: &mut Vec<SeriesOrderIssue>) {
    let mut prev: Option<NaiveDate> = None;
    for (index, point) in points.iter().enumerate() {
        // Unparseable dates are a tolerated gap, not an ordering verdict.
        let Some(date) = parse_date(&point.date) else {
            continue;
        };
        if let Some(prev) = prev {
            if date < prev {
                issues.push(SeriesOrderIssue::OutOfOrder {
                    series: kind,
                    index,
                });
            }
        }
        prev = Some(date);
    }
}

/// Check both series against the producer's ordering contract: each series
/// ascending, and the forecast strictly after the history.
pub fn scan_series_order(
    historical: &[TimeSeriesPoint],
    forecast: &[TimeSeriesPoint],
) -> Vec<SeriesOrderIssue> {
    let mut issues = Vec::new();
    scan_one(historical, SeriesKind::Historical, &mut issues);
    scan_one(forecast, SeriesKind::Forecast, &mut issues);

    let last_historical = historical.iter().rev().find_map(|p| parse_date(&p.date));
    let first_forecast = forecast.iter().find_map(|p| parse_date(&p.date));
    if let (Some(last), Some(first)) = (last_historical, first_forecast) {
        if first <= last {
            issues.push(SeriesOrderIssue::HistoryOverlapsForecast);
        }
    }
    issues
}

// ---------------------------------------------------------------------------
// View model
// ---------------------------------------------------------------------------

/// Chart and caption data for one product card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCardModel {
    pub product: String,
    pub image_url: Option<String>,
    pub units_sold: f64,
    pub chart: AlignedSeries,
}

/// Everything the rendering layer needs, fully derived.
///
/// Rendering code consumes this plus the raw payload scalars; it must not
/// re-derive aggregates itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardViewModel {
    /// Aggregate sales-and-forecast overlay, windowed and aligned.
    pub overview: AlignedSeries,
    /// Sum of the first `horizon` forecast values, missing values counting 0.
    pub forecast_total: f64,
    /// Classification of the payload's opaque `stock_status` label.
    pub stock_band: StockBand,
    pub fast_selling: Vec<ProductCardModel>,
    pub slow_selling: Vec<ProductCardModel>,
    /// Ordering-contract violations found in the aggregate series.
    pub order_issues: Vec<SeriesOrderIssue>,
}

fn product_card(product: &ProductSeries, horizon_days: usize) -> ProductCardModel {
    let (trend, forecast) =
        select_window(&product.trend, &product.forecast, LOOKBACK_POINTS, horizon_days);
    ProductCardModel {
        product: product.product.clone(),
        image_url: product.image_url.clone(),
        units_sold: product.units_sold,
        chart: align(trend, forecast),
    }
}

/// Compose the full view model for one payload and horizon.
///
/// The aggregate series and every product series go through the same
/// window-then-align pipeline, products in payload order.
pub fn build_view_model(
    payload: &DashboardPayload,
    horizon: ForecastHorizon,
) -> DashboardViewModel {
    let horizon_days = horizon.as_days() as usize;
    let (trend, forecast) = select_window(
        &payload.sales_trend,
        &payload.forecast,
        LOOKBACK_POINTS,
        horizon_days,
    );
    let forecast_total = forecast.iter().map(TimeSeriesPoint::value_or_zero).sum();

    DashboardViewModel {
        overview: align(trend, forecast),
        forecast_total,
        stock_band: classify(&payload.stock_status),
        fast_selling: payload
            .fast_selling
            .iter()
            .map(|p| product_card(p, horizon_days))
            .collect(),
        slow_selling: payload
            .slow_selling
            .iter()
            .map(|p| product_card(p, horizon_days))
            .collect(),
        order_issues: scan_series_order(&payload.sales_trend, &payload.forecast),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(date: &str, value: f64) -> TimeSeriesPoint {
        TimeSeriesPoint {
            date: date.to_string(),
            value: Some(value),
            value_lower: None,
            value_upper: None,
        }
    }

    fn blank_point(date: &str) -> TimeSeriesPoint {
        TimeSeriesPoint {
            date: date.to_string(),
            value: None,
            value_lower: None,
            value_upper: None,
        }
    }

    fn daily(start_day: u32, count: usize, value: f64) -> Vec<TimeSeriesPoint> {
        (0..count)
            .map(|i| point(&format!("2024-03-{:02}", start_day + i as u32), value))
            .collect()
    }

    #[test]
    fn window_keeps_short_input_whole() {
        let historical = daily(1, 4, 1.0);
        let forecast = daily(5, 2, 2.0);
        let (h, f) = select_window(&historical, &forecast, 30, 5);
        assert_eq!(h.len(), 4);
        assert_eq!(f.len(), 2);
    }

    #[test]
    fn window_truncates_both_ends() {
        let historical: Vec<_> = (0..50).map(|i| point(&format!("d{i}"), i as f64)).collect();
        let forecast: Vec<_> = (0..10).map(|i| point(&format!("f{i}"), i as f64)).collect();
        let (h, f) = select_window(&historical, &forecast, 30, 5);
        assert_eq!(h.len(), 30);
        // Last 30 elements in original order.
        assert_eq!(h[0].value, Some(20.0));
        assert_eq!(h[29].value, Some(49.0));
        assert_eq!(f.len(), 5);
        assert_eq!(f[0].value, Some(0.0));
    }

    #[test]
    fn window_of_empty_input_is_empty() {
        let (h, f) = select_window(&[], &[], 30, 60);
        assert!(h.is_empty());
        assert!(f.is_empty());
    }

    #[test]
    fn align_concatenates_labels() {
        let historical = daily(1, 7, 1.0);
        let forecast = daily(8, 3, 2.0);
        let aligned = align(&historical, &forecast);
        assert_eq!(aligned.len(), historical.len() + forecast.len());
        assert_eq!(aligned.labels[0], "2024-03-01");
        assert_eq!(aligned.labels[9], "2024-03-10");
    }

    #[test]
    fn align_pads_each_series_with_none() {
        let historical = daily(1, 3, 5.0);
        let forecast = daily(4, 2, 9.0);
        let aligned = align(&historical, &forecast);
        for i in 0..3 {
            assert_eq!(aligned.historical[i], Some(5.0));
            assert_eq!(aligned.forecast[i], None);
        }
        for i in 3..5 {
            assert_eq!(aligned.historical[i], None);
            assert_eq!(aligned.forecast[i], Some(9.0));
        }
    }

    #[test]
    fn align_handles_empty_sides() {
        let forecast = daily(1, 2, 1.0);
        let aligned = align(&[], &forecast);
        assert_eq!(aligned.len(), 2);
        assert_eq!(aligned.historical, vec![None, None]);

        let empty = align(&[], &[]);
        assert!(empty.is_empty());
        assert_eq!(empty.max_value(), None);
    }

    #[test]
    fn align_keeps_label_for_missing_value() {
        let historical = vec![point("2024-03-01", 4.0), blank_point("2024-03-02")];
        let aligned = align(&historical, &[]);
        assert_eq!(aligned.labels.len(), 2);
        assert_eq!(aligned.historical, vec![Some(4.0), None]);
    }

    #[test]
    fn max_value_spans_both_series() {
        let aligned = align(&daily(1, 2, 3.0), &daily(3, 2, 11.0));
        assert_eq!(aligned.max_value(), Some(11.0));
    }

    #[test]
    fn scan_is_silent_on_clean_series() {
        let issues = scan_series_order(&daily(1, 5, 1.0), &daily(6, 3, 1.0));
        assert!(issues.is_empty());
    }

    #[test]
    fn scan_reports_backward_step() {
        let historical = vec![
            point("2024-03-05", 1.0),
            point("2024-03-06", 1.0),
            point("2024-03-02", 1.0),
        ];
        let issues = scan_series_order(&historical, &daily(7, 1, 1.0));
        assert_eq!(
            issues,
            vec![SeriesOrderIssue::OutOfOrder {
                series: SeriesKind::Historical,
                index: 2,
            }]
        );
    }

    #[test]
    fn scan_reports_overlap() {
        let issues = scan_series_order(&daily(1, 5, 1.0), &daily(5, 2, 1.0));
        assert_eq!(issues, vec![SeriesOrderIssue::HistoryOverlapsForecast]);
    }

    #[test]
    fn scan_skips_unparseable_dates() {
        let historical = vec![point("not-a-date", 1.0), point("2024-03-01", 1.0)];
        assert!(scan_series_order(&historical, &[]).is_empty());
    }

    fn sample_payload() -> DashboardPayload {
        DashboardPayload {
            file_name: "sales.csv".to_string(),
            sales_trend: vec![point("2024-03-01", 10.0), point("2024-03-02", 20.0)],
            forecast: vec![point("2024-03-03", 15.0), point("2024-03-04", 25.0)],
            fast_selling: vec![ProductSeries {
                product: "SKU-1".to_string(),
                image_url: None,
                units_sold: 120.0,
                current_stock: Some(30.0),
                trend: vec![point("2024-03-01", 4.0)],
                forecast: vec![point("2024-03-03", 5.0), point("2024-03-04", 6.0)],
            }],
            slow_selling: vec![],
            total_units_sold: 30.0,
            current_stock_total: 500.0,
            days_to_stockout: Some(12.3),
            stockout_date: "2024-03-14".to_string(),
            reorder_qty: 75.0,
            reorder_point: 40.0,
            reorder_by_date: "N/A".to_string(),
            stock_status: "Low Stock".to_string(),
        }
    }

    #[test]
    fn builds_the_worked_scenario() {
        // H = [(d1, 10), (d2, 20)], F = [(d3, 15), (d4, 25)], horizon covers F.
        let vm = build_view_model(&sample_payload(), ForecastHorizon::Days3);
        assert_eq!(
            vm.overview.labels,
            vec!["2024-03-01", "2024-03-02", "2024-03-03", "2024-03-04"]
        );
        assert_eq!(vm.overview.historical, vec![Some(10.0), Some(20.0), None, None]);
        assert_eq!(vm.overview.forecast, vec![None, None, Some(15.0), Some(25.0)]);
        assert_eq!(vm.forecast_total, 40.0);
        assert_eq!(vm.stock_band, StockBand::LowStock);
        assert!(vm.order_issues.is_empty());
    }

    #[test]
    fn forecast_total_respects_the_horizon() {
        let mut payload = sample_payload();
        payload.forecast = daily(3, 10, 2.0);
        let vm = build_view_model(&payload, ForecastHorizon::Days3);
        assert_eq!(vm.forecast_total, 6.0);
    }

    #[test]
    fn forecast_total_counts_missing_values_as_zero() {
        let mut payload = sample_payload();
        payload.forecast = vec![
            point("2024-03-03", 15.0),
            blank_point("2024-03-04"),
            point("2024-03-05", 5.0),
        ];
        let vm = build_view_model(&payload, ForecastHorizon::Days3);
        assert_eq!(vm.forecast_total, 20.0);
    }

    #[test]
    fn products_go_through_the_same_pipeline_in_order() {
        let mut payload = sample_payload();
        payload.slow_selling = vec![
            ProductSeries {
                product: "SKU-9".to_string(),
                image_url: Some("http://img/9.png".to_string()),
                units_sold: 3.0,
                current_stock: None,
                trend: daily(1, 40, 1.0),
                forecast: vec![],
            },
            ProductSeries {
                product: "SKU-2".to_string(),
                image_url: None,
                units_sold: 7.0,
                current_stock: None,
                trend: vec![],
                forecast: vec![],
            },
        ];
        let vm = build_view_model(&payload, ForecastHorizon::Days5);

        let card = &vm.fast_selling[0];
        assert_eq!(card.product, "SKU-1");
        assert_eq!(card.chart.labels, vec!["2024-03-01", "2024-03-03", "2024-03-04"]);
        assert_eq!(card.chart.forecast, vec![None, Some(5.0), Some(6.0)]);

        // Input order preserved, look-back applied per product.
        assert_eq!(vm.slow_selling[0].product, "SKU-9");
        assert_eq!(vm.slow_selling[0].chart.len(), 30);
        assert_eq!(vm.slow_selling[1].product, "SKU-2");
        assert!(vm.slow_selling[1].chart.is_empty());
    }

    #[test]
    fn build_is_deterministic() {
        let payload = sample_payload();
        let first = build_view_model(&payload, ForecastHorizon::Days30);
        let second = build_view_model(&payload, ForecastHorizon::Days30);
        assert_eq!(first, second);
    }
}
