//! Date formatting for display and chart axes.

fn split_ymd(date_str: &str) -> Option<(&str, &str, &str)> {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    let mut parts = date_part.splitn(3, '-');
    let year = parts.next()?;
    let month = parts.next()?;
    let day = parts.next()?;
    (year.len() == 4 && !month.is_empty() && !day.is_empty()).then_some((year, month, day))
}

/// ISO date to DD.MM.YYYY; anything unrecognized passes through unchanged
/// (the backend sends "N/A" for dates it could not derive).
pub fn format_date(date_str: &str) -> String {
    match split_ymd(date_str) {
        Some((year, month, day)) => format!("{}.{}.{}", day, month, year),
        None => date_str.to_string(),
    }
}

/// Short DD.MM tick label for chart axes.
pub fn tick_label(date_str: &str) -> String {
    match split_ymd(date_str) {
        Some((_, month, day)) => format!("{}.{}", day, month),
        None => date_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_plain_iso_dates() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26Z"), "15.03.2024");
    }

    #[test]
    fn makes_short_axis_ticks() {
        assert_eq!(tick_label("2024-03-15"), "15.03");
    }

    #[test]
    fn passes_through_non_dates() {
        assert_eq!(format_date("N/A"), "N/A");
        assert_eq!(format_date(""), "");
        assert_eq!(tick_label("n/a"), "n/a");
    }
}
