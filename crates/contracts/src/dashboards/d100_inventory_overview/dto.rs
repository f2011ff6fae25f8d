use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Time series
// ---------------------------------------------------------------------------

/// One observation of a sales or forecast series.
///
/// The analytics service uses two wire spellings for the same shape:
/// historical rows come as `{"date": ..., "units_sold": ...}` and forecast
/// rows as `{"ds": ..., "yhat": ..., "yhat_lower": ..., "yhat_upper": ...}`.
/// Both deserialize into this one canonical struct via serde aliases.
///
/// A missing `value` is data the service could not produce for that day; it
/// contributes `None` to an aligned chart sample and `0` to any aggregate.
/// That substitution rule is defined here once and relied on everywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// ISO-8601 calendar date, unique per series.
    #[serde(alias = "ds")]
    pub date: String,
    /// Observed or predicted units for that date.
    #[serde(default, alias = "units_sold", alias = "yhat")]
    pub value: Option<f64>,
    /// Lower bound of the prediction interval (forecast points only).
    #[serde(default, alias = "yhat_lower", skip_serializing_if = "Option::is_none")]
    pub value_lower: Option<f64>,
    /// Upper bound of the prediction interval (forecast points only).
    #[serde(default, alias = "yhat_upper", skip_serializing_if = "Option::is_none")]
    pub value_upper: Option<f64>,
}

impl TimeSeriesPoint {
    /// Value with the missing-data substitution applied.
    pub fn value_or_zero(&self) -> f64 {
        self.value.unwrap_or(0.0)
    }
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

/// Sales history and forecast for a single product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSeries {
    /// Product identifier, unique within one payload.
    pub product: String,
    /// Optional product image; the UI hides it when absent or broken.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Aggregate units sold over the whole history.
    #[serde(default)]
    pub units_sold: f64,
    /// Latest stock snapshot for this product, when inventory data existed.
    #[serde(default)]
    pub current_stock: Option<f64>,
    /// Daily sales history, ascending by date.
    #[serde(default)]
    pub trend: Vec<TimeSeriesPoint>,
    /// Per-day forecast, ascending by date.
    #[serde(default)]
    pub forecast: Vec<TimeSeriesPoint>,
}

// ---------------------------------------------------------------------------
// Dashboard payload
// ---------------------------------------------------------------------------

/// Full response of `GET /dashboard_data`.
///
/// All scalar metrics are computed by the analytics service; the frontend
/// only displays them. A payload is immutable once constructed — a horizon
/// change produces a fresh payload via re-fetch, never an in-place edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardPayload {
    /// Handle of the uploaded dataset this payload was derived from.
    pub file_name: String,
    /// Aggregate (all products) daily sales history.
    #[serde(default)]
    pub sales_trend: Vec<TimeSeriesPoint>,
    /// Aggregate forecast for the requested horizon.
    #[serde(default)]
    pub forecast: Vec<TimeSeriesPoint>,
    #[serde(default)]
    pub fast_selling: Vec<ProductSeries>,
    #[serde(default)]
    pub slow_selling: Vec<ProductSeries>,
    #[serde(default)]
    pub total_units_sold: f64,
    #[serde(default)]
    pub current_stock_total: f64,
    /// `None` when average daily sales are zero and no stockout is projected.
    #[serde(default)]
    pub days_to_stockout: Option<f64>,
    /// "N/A" when no stockout is projected.
    #[serde(default)]
    pub stockout_date: String,
    #[serde(default)]
    pub reorder_qty: f64,
    #[serde(default)]
    pub reorder_point: f64,
    #[serde(default)]
    pub reorder_by_date: String,
    /// Opaque status label, classified by [`super::status::classify`].
    #[serde(default)]
    pub stock_status: String,
}

/// Response of `POST /upload`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub filename: String,
}
