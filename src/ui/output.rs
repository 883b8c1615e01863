//! Output and reporting functions for the tomorrow tool.

use crate::error::Result;
use crate::tomorrow::Tomorrow;
use std::io::Write;
use tracing::warn;

/// Header printed before the two renderings.
pub const TOMORROW_HEADER: &str = "明日の日付は:";

/// Printed instead of the renderings when tomorrow's date is unavailable.
pub const TOMORROW_UNAVAILABLE: &str = "明日の日付を取得できませんでした。";

/// Prints tomorrow's date, or a failure line if it could not be produced.
///
/// Failures are reported on `out` and logged; they never abort the tool.
///
/// # Arguments
/// * `out` - Destination for the report
/// * `tomorrow` - The computed date, or the error that prevented it
/// * `json` - Whether to print the JSON form instead of the text form
pub fn print_tomorrow_report<W: Write>(out: &mut W, tomorrow: Result<Tomorrow>, json: bool) {
    let written = tomorrow.and_then(|tomorrow| {
        if json {
            write_tomorrow_json(out, &tomorrow)
        } else {
            write_tomorrow_text(out, &tomorrow)
        }
    });

    if let Err(e) = written {
        warn!(error = %e, "could not report tomorrow's date");
        let _ = writeln!(out, "{}", TOMORROW_UNAVAILABLE);
    }
}

/// Writes the header, the ISO date and the localized date, one per line.
pub fn write_tomorrow_text<W: Write>(out: &mut W, tomorrow: &Tomorrow) -> Result<()> {
    writeln!(out, "{}", TOMORROW_HEADER)?;
    writeln!(out, "{}", tomorrow.iso())?;
    writeln!(out, "{}", tomorrow.localized())?;
    Ok(())
}

/// Writes both renderings as a pretty-printed JSON object.
///
/// # Format
/// ```text
/// {
///   "iso": "2024-03-05",
///   "localized": "2024年3月5日"
/// }
/// ```
pub fn write_tomorrow_json<W: Write>(out: &mut W, tomorrow: &Tomorrow) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &tomorrow.report())?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use chrono::NaiveDate;

    fn fixed() -> Tomorrow {
        Tomorrow::from_today(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()).unwrap()
    }

    #[test]
    fn test_text_output() {
        let mut buffer = Vec::new();
        write_tomorrow_text(&mut buffer, &fixed()).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "明日の日付は:\n2024-03-05\n2024年3月5日\n"
        );
    }

    #[test]
    fn test_json_output() {
        let mut buffer = Vec::new();
        write_tomorrow_json(&mut buffer, &fixed()).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["iso"], "2024-03-05");
        assert_eq!(value["localized"], "2024年3月5日");
    }

    #[test]
    fn test_report_prints_text_by_default() {
        let mut buffer = Vec::new();
        print_tomorrow_report(&mut buffer, Ok(fixed()), false);

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output.lines().count(), 3);
        assert!(output.contains("2024年3月5日"));
    }

    #[test]
    fn test_report_prints_failure_line_when_date_is_unavailable() {
        let mut buffer = Vec::new();
        print_tomorrow_report(&mut buffer, Err(Error::DateOutOfRange), false);

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "明日の日付を取得できませんでした。\n"
        );
    }
}
