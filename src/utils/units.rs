//! Unit conversion utilities

use crate::common::config::AppConfig;

/// Convert a byte count to tebibytes using single precision
#[inline]
pub fn bytes_to_tib(bytes: u64) -> f32 {
    bytes as f32 / AppConfig::BYTES_PER_TIB as f32
}

/// Percentage of `part` in `whole` using single precision
#[inline]
pub fn percent_of(part: u64, whole: u64) -> f32 {
    part as f32 / whole as f32 * 100.0
}

/// Format a value with two decimal places
#[inline]
pub fn two_decimals(value: f32) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_to_tib() {
        assert_eq!(bytes_to_tib(1 << 40), 1.0);
        assert_eq!(bytes_to_tib(1 << 39), 0.5);
        assert_eq!(bytes_to_tib(0), 0.0);
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(1 << 39, 1 << 40), 50.0);
        assert_eq!(percent_of(3, 4), 75.0);
        assert_eq!(percent_of(0, 10), 0.0);
    }

    #[test]
    fn test_two_decimals() {
        assert_eq!(two_decimals(50.0), "50.00");
        assert_eq!(two_decimals(0.5), "0.50");
        assert_eq!(two_decimals(12.3456), "12.35");
    }
}
