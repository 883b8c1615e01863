//! Tomorrow's date in ISO and Japanese renderings.
//!
//! The date is computed once and both renderings read from that single value,
//! so the two lines printed by one run never disagree around midnight.

use crate::error::{Error, Result};
use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;
use tracing::debug;

/// The calendar day after "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tomorrow {
    date: NaiveDate,
}

/// Serializable form of both renderings.
#[derive(Debug, Serialize)]
pub struct TomorrowReport {
    /// `YYYY-MM-DD`
    pub iso: String,
    /// `YYYY年M月D日`
    pub localized: String,
}

impl Tomorrow {
    /// Returns the day following `today`, or `None` past the last supported date.
    pub fn from_today(today: NaiveDate) -> Option<Self> {
        today.succ_opt().map(|date| Tomorrow { date })
    }

    /// Reads the local clock once and returns the following calendar day.
    pub fn now() -> Result<Self> {
        let today = Local::now().date_naive();
        let tomorrow = Self::from_today(today).ok_or(Error::DateOutOfRange)?;
        debug!(%today, tomorrow = %tomorrow.date, "computed tomorrow's date");
        Ok(tomorrow)
    }

    /// Returns the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// `YYYY-MM-DD`, zero padded.
    pub fn iso(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// `YYYY年M月D日`, without zero padding on month and day.
    pub fn localized(&self) -> String {
        format!(
            "{}年{}月{}日",
            self.date.year(),
            self.date.month(),
            self.date.day()
        )
    }

    /// Bundles both renderings for serialization.
    ///
    /// # Returns
    /// A [`TomorrowReport`] whose fields come from this single date
    pub fn report(&self) -> TomorrowReport {
        TomorrowReport {
            iso: self.iso(),
            localized: self.localized(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_renderings_for_fixed_date() {
        let tomorrow = Tomorrow::from_today(date(2024, 3, 4)).unwrap();

        assert_eq!(tomorrow.iso(), "2024-03-05");
        assert_eq!(tomorrow.localized(), "2024年3月5日");
    }

    #[test]
    fn test_month_and_year_rollover() {
        let tomorrow = Tomorrow::from_today(date(2024, 1, 31)).unwrap();
        assert_eq!(tomorrow.iso(), "2024-02-01");

        let tomorrow = Tomorrow::from_today(date(2025, 12, 31)).unwrap();
        assert_eq!(tomorrow.iso(), "2026-01-01");
        assert_eq!(tomorrow.localized(), "2026年1月1日");
    }

    #[test]
    fn test_leap_day() {
        let tomorrow = Tomorrow::from_today(date(2024, 2, 28)).unwrap();
        assert_eq!(tomorrow.localized(), "2024年2月29日");

        let tomorrow = Tomorrow::from_today(date(2023, 2, 28)).unwrap();
        assert_eq!(tomorrow.localized(), "2023年3月1日");
    }

    #[test]
    fn test_last_supported_date_has_no_tomorrow() {
        assert!(Tomorrow::from_today(NaiveDate::MAX).is_none());
    }

    #[test]
    fn test_report_uses_both_renderings() {
        let tomorrow = Tomorrow::from_today(date(2024, 10, 9)).unwrap();
        let report = tomorrow.report();

        assert_eq!(report.iso, "2024-10-10");
        assert_eq!(report.localized, "2024年10月10日");
    }
}
