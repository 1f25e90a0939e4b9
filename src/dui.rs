//! National-id (DUI) formatting.
//!
//! The store keeps the 9 raw digits (`123456789`); screens show them with a
//! hyphen before the check digit (`12345678-9`). Both conversions are total:
//! malformed input degrades to a best-effort string instead of an error.

/// Number of digits in a DUI.
pub const DUI_DIGITS: usize = 9;

/// Converts a stored DUI to its display form, `XXXXXXXX-X`.
///
/// Non-digits are dropped, short values are left-padded with zeros and
/// long values keep their last 9 digits. Empty input stays empty.
pub fn to_display(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    let padded = format!("{:0>width$}", digits, width = DUI_DIGITS);
    // ASCII only, so byte slicing is on char boundaries.
    let last = &padded[padded.len() - DUI_DIGITS..];

    format!("{}-{}", &last[..DUI_DIGITS - 1], &last[DUI_DIGITS - 1..])
}

/// Converts a displayed DUI back to storage form: digits only, at most 9.
pub fn to_storage(display: &str) -> String {
    display
        .chars()
        .filter(char::is_ascii_digit)
        .take(DUI_DIGITS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_nine_digits() {
        assert_eq!(to_display("123456789"), "12345678-9");
        assert_eq!(to_display("987654321"), "98765432-1");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(to_display(""), "");
        assert_eq!(to_storage(""), "");
    }

    #[test]
    fn display_pads_short_values() {
        assert_eq!(to_display("12345"), "00001234-5");
        assert_eq!(to_display("7"), "00000000-7");
    }

    #[test]
    fn display_keeps_last_nine_of_long_values() {
        assert_eq!(to_display("1234567890"), "23456789-0");
    }

    #[test]
    fn display_tolerates_formatted_and_garbage_input() {
        assert_eq!(to_display("12345678-9"), "12345678-9");
        assert_eq!(to_display("abc"), "00000000-0");
        assert_eq!(to_display(" 1 2 3 "), "00000012-3");
    }

    #[test]
    fn display_ignores_non_ascii_digits() {
        // Arabic-Indic digits are not DUI digits.
        assert_eq!(to_display("١٢٣123"), "00000012-3");
    }

    #[test]
    fn storage_strips_hyphen_and_truncates() {
        assert_eq!(to_storage("12345678-9"), "123456789");
        assert_eq!(to_storage("1234-5678-9012"), "123456789");
        assert_eq!(to_storage("DUI: 0000-1"), "00001");
    }

    #[test]
    fn storage_inverts_display_for_nine_digit_values() {
        for s in ["000000000", "123456789", "987654321", "100000001", "999999999"] {
            assert_eq!(to_storage(&to_display(s)), s);
        }
    }

    #[test]
    fn display_inverts_storage_for_formatted_values() {
        assert_eq!(to_display(&to_storage("12345678-9")), "12345678-9");
    }
}
