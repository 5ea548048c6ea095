//! Human-readable byte sizes for validation messages.

/// Binary (base-1024) unit labels.
const UNITS: [&str; 9] = ["Bytes", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Format a byte count with base-1024 units and `decimals` fraction digits.
///
/// `0` is rendered as `"0 Bytes"`. Values are not trimmed, so
/// `5 * 1024 * 1024` with two decimals is `"5.00 MB"`.
#[must_use]
#[allow(clippy::cast_precision_loss)] // display only; sizes far below 2^52
pub fn format_bytes(bytes: u64, decimals: usize) -> String {
    if bytes == 0 {
        return "0 Bytes".to_owned();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{value:.decimals$} {}", UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_bytes() {
        assert_eq!(format_bytes(0, 2), "0 Bytes");
    }

    #[test]
    fn below_one_kilobyte_stays_in_bytes() {
        assert_eq!(format_bytes(512, 2), "512.00 Bytes");
        assert_eq!(format_bytes(1023, 0), "1023 Bytes");
    }

    #[test]
    fn unit_boundaries() {
        assert_eq!(format_bytes(1024, 2), "1.00 KB");
        assert_eq!(format_bytes(1536, 1), "1.5 KB");
        assert_eq!(format_bytes(5 * 1024 * 1024, 2), "5.00 MB");
        assert_eq!(format_bytes(3 * 1024 * 1024 * 1024, 0), "3 GB");
    }

    #[test]
    fn largest_values_stop_at_the_last_unit() {
        // u64::MAX is 16 EB; never indexes past the table.
        let formatted = format_bytes(u64::MAX, 2);
        assert!(formatted.ends_with(" EB"), "got {formatted}");
    }
}
