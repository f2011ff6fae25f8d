use serde::{Deserialize, Serialize};

/// Discrete stock-health band, ordered from most to least severe.
///
/// The band drives presentation only. What *triggers* a status is decided
/// entirely by the analytics service; it arrives as the opaque
/// `stock_status` string on the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockBand {
    Understocked,
    LowStock,
    Healthy,
}

/// Map a status label to its band.
///
/// Exact match on the two critical labels; any other value, including an
/// empty or unknown one, falls back to the least severe band. Unrecognized
/// input is never an error.
pub fn classify(status: &str) -> StockBand {
    match status {
        "Understocked" => StockBand::Understocked,
        "Low Stock" => StockBand::LowStock,
        _ => StockBand::Healthy,
    }
}

impl StockBand {
    /// Card background tint.
    pub fn background(self) -> &'static str {
        match self {
            StockBand::Understocked => "#ffebee",
            StockBand::LowStock => "#fff8e1",
            StockBand::Healthy => "#e8f5e9",
        }
    }

    /// Text color paired with [`Self::background`].
    pub fn foreground(self) -> &'static str {
        match self {
            StockBand::Understocked => "#c62828",
            StockBand::LowStock => "#ef6c00",
            StockBand::Healthy => "#2e7d32",
        }
    }
}
