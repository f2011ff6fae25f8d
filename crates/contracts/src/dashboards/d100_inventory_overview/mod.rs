//! Inventory overview dashboard: wire types and the composition engine that
//! turns an analytics payload into chart-ready series and summary metrics.

pub mod compose;
pub mod dto;
pub mod horizon;
pub mod status;

pub use compose::{
    align, build_view_model, scan_series_order, select_window, AlignedSeries,
    DashboardViewModel, ProductCardModel, SeriesKind, SeriesOrderIssue,
};
pub use dto::{DashboardPayload, ProductSeries, TimeSeriesPoint, UploadResponse};
pub use horizon::{ForecastHorizon, LOOKBACK_POINTS};
pub use status::{classify, StockBand};
