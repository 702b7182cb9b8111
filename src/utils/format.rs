use num_format::{Locale, ToFormattedString};

/// Formats an integer with French digit grouping (narrow no-break spaces).
pub fn format_count(value: u64) -> String {
    value.to_formatted_string(&Locale::fr)
}

/// Formats a measurement value: grouped integer part, one decimal kept only
/// when the value is not whole.
pub fn format_value(value: f64) -> String {
    // Round to one decimal first so both branches agree at the boundary
    // (123.95 renders as "124", not "123,9").
    let tenths = (value * 10.0).round().abs() as u64;
    let whole = tenths / 10;
    let decimal = tenths % 10;
    if decimal == 0 {
        format_count(whole)
    } else {
        format!("{},{}", format_count(whole), decimal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count_groups_thousands() {
        let formatted = format_count(1_234_567);
        assert!(formatted.starts_with('1'));
        assert!(formatted.ends_with("567"));
        assert_ne!(formatted, "1234567");
    }

    #[test]
    fn test_format_value_whole_number() {
        assert_eq!(format_value(120.0), "120");
    }

    #[test]
    fn test_format_value_keeps_one_decimal() {
        assert_eq!(format_value(123.4), "123,4");
    }

    #[test]
    fn test_format_value_rounds_up_at_boundary() {
        assert_eq!(format_value(123.95), "124");
        assert_eq!(format_value(0.26), "0,3");
    }
}
