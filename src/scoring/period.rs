//! Period resolution for monthly scoring.
//!
//! This module converts a `YYYY-MM` period token into an inclusive
//! calendar-month date range and enumerates the business days within it.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// One calendar month identified by a `YYYY-MM` token.
///
/// Parsing is strict: exactly four year digits, a hyphen, and exactly two
/// month digits. Anything else is a caller error, never silently
/// defaulted.
///
/// # Example
///
/// ```
/// use merit_engine::scoring::Period;
/// use chrono::NaiveDate;
///
/// let period: Period = "2025-08".parse().unwrap();
/// assert_eq!(period.first_day(), NaiveDate::from_ymd_opt(2025, 8, 1).unwrap());
/// assert_eq!(period.last_day(), NaiveDate::from_ymd_opt(2025, 8, 31).unwrap());
/// assert_eq!(period.to_string(), "2025-08");
///
/// assert!("2025/08".parse::<Period>().is_err());
/// assert!("2025-8".parse::<Period>().is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    /// Creates a period from a year and a 1-based month.
    ///
    /// Returns an error for months outside 1..=12.
    pub fn new(year: i32, month: u32) -> Result<Self, EngineError> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::InvalidPeriod {
                token: format!("{year:04}-{month:02}"),
                message: "month must be between 01 and 12".to_string(),
            });
        }
        Ok(Self { year, month })
    }

    /// Returns the year of the period.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the 1-based month of the period.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the first day of the month.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("Valid month start")
    }

    /// Returns the last day of the month (inclusive).
    pub fn last_day(&self) -> NaiveDate {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .expect("Valid month start")
            .pred_opt()
            .expect("Valid month end")
    }

    /// Checks if a date falls within this period (inclusive on both ends).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first_day() && date <= self.last_day()
    }

    /// Enumerates the business days (Monday through Friday) of the month
    /// in ascending order.
    ///
    /// Holidays are not considered; a business day is any weekday.
    ///
    /// # Example
    ///
    /// ```
    /// use merit_engine::scoring::Period;
    ///
    /// // August 2025 starts on a Friday and has 31 days.
    /// let period: Period = "2025-08".parse().unwrap();
    /// assert_eq!(period.business_days().len(), 21);
    /// ```
    pub fn business_days(&self) -> Vec<NaiveDate> {
        let end = self.last_day();
        let mut days = Vec::new();
        let mut day = self.first_day();
        while day <= end {
            if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
                days.push(day);
            }
            day += Duration::days(1);
        }
        days
    }
}

impl FromStr for Period {
    type Err = EngineError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = |message: &str| EngineError::InvalidPeriod {
            token: token.to_string(),
            message: message.to_string(),
        };

        let Some((year_part, month_part)) = token.split_once('-') else {
            return Err(invalid("expected YYYY-MM"));
        };
        if year_part.len() != 4 || !year_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("year must be exactly four digits"));
        }
        if month_part.len() != 2 || !month_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("month must be exactly two digits"));
        }

        let year: i32 = year_part
            .parse()
            .map_err(|_| invalid("year is out of range"))?;
        let month: u32 = month_part
            .parse()
            .map_err(|_| invalid("month is out of range"))?;

        Self::new(year, month).map_err(|_| invalid("month must be between 01 and 12"))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl TryFrom<String> for Period {
    type Error = EngineError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        token.parse()
    }
}

impl From<Period> for String {
    fn from(period: Period) -> Self {
        period.to_string()
    }
}
