/// Date display formatting.
///
/// The portal renders all dates as dd/mm/yyyy, whatever separator the
/// backend used. Unparseable input is shown as received.
use contracts::domain::dates::parse_flex;

pub fn display_date(raw: &str) -> String {
    match parse_flex(raw) {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => raw.to_string(),
    }
}

/// Table-cell variant: empty or unparseable dates render as a dash.
pub fn display_date_or_dash(raw: &str) -> String {
    match parse_flex(raw) {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_date() {
        assert_eq!(display_date("2024-03-15"), "15/03/2024");
        assert_eq!(display_date("2024/03/15T00:00:00Z"), "15/03/2024");
        assert_eq!(display_date("pending"), "pending");
    }

    #[test]
    fn test_display_date_or_dash() {
        assert_eq!(display_date_or_dash("2024-12-01"), "01/12/2024");
        assert_eq!(display_date_or_dash(""), "—");
    }
}
