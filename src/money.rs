//! Money Formatting
//!
//! Rupiah display helpers.

use num_format::{Locale, ToFormattedString};

/// Format an integer Rupiah amount with id-ID grouping, e.g. `Rp 15.000`
pub fn format_rupiah(amount: i64) -> String {
    format!("Rp {}", amount.to_formatted_string(&Locale::id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rupiah_grouping() {
        assert_eq!(format_rupiah(0), "Rp 0");
        assert_eq!(format_rupiah(5000), "Rp 5.000");
        assert_eq!(format_rupiah(38000), "Rp 38.000");
        assert_eq!(format_rupiah(1_500_000), "Rp 1.500.000");
    }
}
