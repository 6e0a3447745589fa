//! Sampling and report configuration.
//!
//! All values are compile-time constants with `const` assertions, so a bad
//! edit fails the build instead of misbehaving on the bench.

// =============================================================================
// Acquisition
// =============================================================================

/// Time between two acquisition cycles, in milliseconds.
pub const SAMPLE_PERIOD_MS: u64 = 500;

/// Voltage that maps to the converter's maximum count (probe full scale).
pub const ADC_FULL_SCALE_VOLTS: f32 = 5.0;

/// Maximum count of the 12-bit converter.
pub const ADC_MAX_COUNT: u16 = 4095;

const _: () = assert!(SAMPLE_PERIOD_MS > 0);
const _: () = assert!(ADC_MAX_COUNT > 0);

// =============================================================================
// Reports
// =============================================================================

/// Number of data rows in the CSV dump.
pub const CSV_ROWS: usize = 20;

/// First line of the CSV dump.
pub const CSV_HEADER: &str = "Fine Voltage, Coarse Voltage\n";

/// Widest row the CSV renderer can produce for in-range voltages ("5.00,5.00\n").
pub const CSV_ROW_MAX_LEN: usize = 10;

/// Capacity of the CSV response buffer.
pub const CSV_CAPACITY: usize = 512;

/// Capacity of the HTML response buffer.
pub const HTML_CAPACITY: usize = 1024;

/// `<title>` of the index page.
pub const PAGE_TITLE: &str = "Oil Debris Tester";

/// Heading of the index page.
pub const PAGE_HEADING: &str = "Oil Debris Testing Page";

const _: () = assert!(CSV_ROWS > 0);
const _: () = assert!(CSV_HEADER.len() + CSV_ROWS * CSV_ROW_MAX_LEN <= CSV_CAPACITY);

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_header_is_one_line() {
        assert!(CSV_HEADER.ends_with('\n'));
        assert_eq!(CSV_HEADER.matches('\n').count(), 1);
    }

    #[test]
    fn test_row_max_len_matches_format() {
        assert_eq!("5.00,5.00\n".len(), CSV_ROW_MAX_LEN);
    }
}
