use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How many of the most recent historical points the charts consider.
pub const LOOKBACK_POINTS: usize = 30;

/// Forecast length selectable by the user.
///
/// The analytics service accepts a wider range, but the dashboard only ever
/// requests one of these magnitudes; anything else is rejected at the
/// boundary before a request is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForecastHorizon {
    Days3,
    Days5,
    Days30,
    Days60,
}

impl ForecastHorizon {
    /// All selectable horizons, in display order.
    pub const ALL: [ForecastHorizon; 4] = [
        ForecastHorizon::Days3,
        ForecastHorizon::Days5,
        ForecastHorizon::Days30,
        ForecastHorizon::Days60,
    ];

    pub fn as_days(self) -> u32 {
        match self {
            ForecastHorizon::Days3 => 3,
            ForecastHorizon::Days5 => 5,
            ForecastHorizon::Days30 => 30,
            ForecastHorizon::Days60 => 60,
        }
    }

    /// Parse a raw day count coming from the UI or a URL.
    pub fn try_from_days(days: u32) -> anyhow::Result<Self> {
        match days {
            3 => Ok(ForecastHorizon::Days3),
            5 => Ok(ForecastHorizon::Days5),
            30 => Ok(ForecastHorizon::Days30),
            60 => Ok(ForecastHorizon::Days60),
            other => bail!("forecast horizon must be one of 3, 5, 30, 60 days, got {other}"),
        }
    }
}

impl Default for ForecastHorizon {
    fn default() -> Self {
        ForecastHorizon::Days30
    }
}

impl fmt::Display for ForecastHorizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Next {} days", self.as_days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_enumerated_set() {
        for h in ForecastHorizon::ALL {
            assert_eq!(ForecastHorizon::try_from_days(h.as_days()).unwrap(), h);
        }
    }

    #[test]
    fn rejects_everything_else() {
        for days in [0, 1, 2, 4, 7, 14, 31, 90, 365] {
            assert!(ForecastHorizon::try_from_days(days).is_err());
        }
    }

    #[test]
    fn default_is_thirty_days() {
        assert_eq!(ForecastHorizon::default().as_days(), 30);
        assert_eq!(ForecastHorizon::default().to_string(), "Next 30 days");
    }
}
