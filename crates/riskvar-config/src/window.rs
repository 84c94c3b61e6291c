//! Historical lookback window.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Inclusive date range of price history used for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookbackWindow {
    /// First date requested (inclusive)
    pub start: NaiveDate,
    /// Last date requested (inclusive)
    pub end: NaiveDate,
}

impl LookbackWindow {
    /// Window of `lookback_days` calendar days ending the day before `run_date`.
    ///
    /// The run date itself is excluded so a partially traded session never
    /// enters the sample. Dates that would fall before the earliest
    /// representable date clamp to `NaiveDate::MIN`.
    ///
    /// ```rust
    /// use chrono::NaiveDate;
    /// use riskvar_config::LookbackWindow;
    ///
    /// let run = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    /// let window = LookbackWindow::ending_before(run, 730);
    /// assert_eq!(window.start, NaiveDate::from_ymd_opt(2023, 1, 2).unwrap());
    /// assert_eq!(window.end, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    /// ```
    #[must_use]
    pub fn ending_before(run_date: NaiveDate, lookback_days: u32) -> Self {
        let back = |days: u32| {
            run_date
                .checked_sub_days(Days::new(u64::from(days)))
                .unwrap_or(NaiveDate::MIN)
        };
        Self {
            start: back(lookback_days),
            end: back(1),
        }
    }

    /// Number of calendar days covered, counting both ends.
    #[must_use]
    pub fn calendar_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl std::fmt::Display for LookbackWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_excludes_run_date() {
        let run = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let window = LookbackWindow::ending_before(run, 730);
        assert_eq!(window.end, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(window.start, NaiveDate::from_ymd_opt(2022, 3, 2).unwrap());
        assert_eq!(window.calendar_days(), 730);
    }

    #[test]
    fn test_huge_lookback_clamps_instead_of_overflowing() {
        let run = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let window = LookbackWindow::ending_before(run, u32::MAX);
        assert_eq!(window.start, NaiveDate::MIN);
        assert_eq!(window.end, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());

        let edge = LookbackWindow::ending_before(NaiveDate::MIN, 10);
        assert_eq!(edge.start, NaiveDate::MIN);
        assert_eq!(edge.end, NaiveDate::MIN);
    }

    #[test]
    fn test_display() {
        let run = NaiveDate::from_ymd_opt(2024, 1, 11).unwrap();
        let window = LookbackWindow::ending_before(run, 10);
        assert_eq!(window.to_string(), "2024-01-01 to 2024-01-10");
    }
}
