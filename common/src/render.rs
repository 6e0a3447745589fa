//! Text rendering of the wear channels for the web pages.
//!
//! Renderers write into any [`core::fmt::Write`], so the firmware can fill a
//! fixed-capacity [`heapless::String`] and tests can inspect the output. Every
//! CSV row reads the channels afresh; no lock is held while formatting.
//!
//! # Pages
//!
//! - [`write_csv`]: `Fine Voltage, Coarse Voltage` header then [`CSV_ROWS`]
//!   rows of the latest sample
//! - [`write_index_page`]: landing page linking to the CSV dump

use core::fmt::{self, Write};

use heapless::String;

use crate::channels::WearChannels;
use crate::config::{CSV_CAPACITY, CSV_HEADER, CSV_ROWS, HTML_CAPACITY, PAGE_HEADING, PAGE_TITLE};

/// Path the index page links to for the CSV dump.
pub const CSV_LINK: &str = "/csv";

// =============================================================================
// CSV
// =============================================================================

/// Write the CSV header and `rows` rows of the latest voltages.
///
/// The dump is a repeated view of the current sample, not a history.
pub fn write_csv<W: Write>(
    out: &mut W,
    channels: &WearChannels,
    rows: usize,
) -> fmt::Result {
    out.write_str(CSV_HEADER)?;
    for _ in 0..rows {
        let fine = channels.fine.read();
        let coarse = channels.coarse.read();
        writeln!(out, "{fine:.2},{coarse:.2}")?;
    }
    Ok(())
}

/// Render the standard CSV dump into a fixed buffer.
pub fn render_csv(channels: &WearChannels) -> Result<String<CSV_CAPACITY>, fmt::Error> {
    let mut body = String::new();
    write_csv(&mut body, channels, CSV_ROWS)?;
    Ok(body)
}

// =============================================================================
// HTML
// =============================================================================

/// Write the shared `<head>` block with viewport, title and style.
pub fn write_html_header<W: Write>(
    out: &mut W,
    title: &str,
) -> fmt::Result {
    out.write_str("<!DOCTYPE html> <html>\n")?;
    out.write_str(
        "<head><meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0, user-scalable=no\">\n",
    )?;
    writeln!(out, "<title> {title}</title>")?;
    out.write_str(
        "<style>html { font-family: Helvetica; display: inline-block; margin: 0px auto; text-align: center;}\n",
    )?;
    out.write_str("body{margin-top: 50px;} h1 {color: #4444AA;margin: 50px auto 30px;}\n")?;
    out.write_str("p {font-size: 24px;color: #222222;margin-bottom: 10px;}\n")?;
    out.write_str("</style>\n</head>\n")
}

/// Write the landing page.
pub fn write_index_page<W: Write>(out: &mut W) -> fmt::Result {
    write_html_header(out, PAGE_TITLE)?;
    out.write_str("<body>\n<div id=\"webpage\">\n")?;
    writeln!(out, "<h1>{PAGE_HEADING}</h1>")?;
    writeln!(out, "<p><a href=\"{CSV_LINK}\">Debris Test Data</a></p>")?;
    out.write_str("</div>\n</body>\n</html>\n")
}

/// Render the landing page into a fixed buffer.
pub fn render_index_page() -> Result<String<HTML_CAPACITY>, fmt::Error> {
    let mut body = String::new();
    write_index_page(&mut body)?;
    Ok(body)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channels::WearSample;

    #[test]
    fn test_csv_before_first_sample() {
        let channels = WearChannels::new();
        let csv = render_csv(&channels).unwrap();

        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Fine Voltage, Coarse Voltage"));
        assert!(lines.all(|line| line == "0.00,0.00"));
    }

    #[test]
    fn test_csv_has_header_and_fixed_row_count() {
        let channels = WearChannels::new();
        channels.publish(WearSample::new(1.234, 4.5));
        let csv = render_csv(&channels).unwrap();

        assert!(csv.starts_with(CSV_HEADER));
        assert_eq!(csv.lines().count(), CSV_ROWS + 1);
        assert!(csv.ends_with('\n'));
    }

    #[test]
    fn test_csv_rows_repeat_latest_sample() {
        let channels = WearChannels::new();
        channels.publish(WearSample::new(0.5, 2.0));
        channels.publish(WearSample::new(1.234, 4.5));
        let csv = render_csv(&channels).unwrap();

        for row in csv.lines().skip(1) {
            assert_eq!(row, "1.23,4.50");
        }
    }

    #[test]
    fn test_csv_full_scale_fits_buffer() {
        let channels = WearChannels::new();
        channels.publish(WearSample::new(5.0, 5.0));
        let csv = render_csv(&channels).unwrap();
        assert_eq!(csv.len(), CSV_HEADER.len() + CSV_ROWS * "5.00,5.00\n".len());
    }

    #[test]
    fn test_csv_custom_row_count() {
        let channels = WearChannels::new();
        let mut out: String<128> = String::new();
        write_csv(&mut out, &channels, 2).unwrap();
        assert_eq!(out.as_str(), "Fine Voltage, Coarse Voltage\n0.00,0.00\n0.00,0.00\n");
    }

    #[test]
    fn test_csv_overflow_is_an_error() {
        let channels = WearChannels::new();
        let mut out: String<16> = String::new();
        assert!(write_csv(&mut out, &channels, CSV_ROWS).is_err());
    }

    #[test]
    fn test_index_page() {
        let page = render_index_page().unwrap();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title> Oil Debris Tester</title>"));
        assert!(page.contains("<h1>Oil Debris Testing Page</h1>"));
        assert!(page.contains("href=\"/csv\""));
        assert!(page.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_html_header_uses_title() {
        let mut out: String<512> = String::new();
        write_html_header(&mut out, "Bench").unwrap();
        assert!(out.contains("<title> Bench</title>"));
        assert!(out.ends_with("</head>\n"));
    }
}
