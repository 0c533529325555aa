//! Decimal-year epochs.

use crate::error::HelmertError;

/// An instant expressed in decimal years (e.g. `2023.02`).
///
/// This is the time type threaded through the transform. It wraps an
/// `f64` to keep epochs apart from coordinates in signatures.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Epoch {
    years: f64,
}

impl Epoch {
    /// Create an epoch from a decimal year.
    pub const fn new(years: f64) -> Self {
        Self { years }
    }

    /// Create an epoch from a Gregorian calendar date.
    ///
    /// `day` may carry a fractional part (`8.5` is noon on the 8th). The
    /// decimal year is `year + (day_of_year - 1) / days_in_year`.
    pub fn from_calendar(year: i32, month: u32, day: f64) -> Result<Self, HelmertError> {
        if !(1..=12).contains(&month) {
            return Err(HelmertError::InvalidInput("month must be in 1..=12"));
        }
        let month_len = days_in_month(year, month) as f64;
        if !day.is_finite() || day < 1.0 || day >= month_len + 1.0 {
            return Err(HelmertError::InvalidInput("day outside the month"));
        }
        let days_before: u32 = (1..month).map(|m| days_in_month(year, m)).sum();
        let year_len = if is_leap_year(year) { 366.0 } else { 365.0 };
        let day_of_year = days_before as f64 + day;
        Ok(Self {
            years: year as f64 + (day_of_year - 1.0) / year_len,
        })
    }

    /// Decimal years.
    pub fn years(self) -> f64 {
        self.years
    }

    /// Signed interval `self - earlier`, in years.
    pub fn years_since(self, earlier: Epoch) -> f64 {
        self.years - earlier.years
    }

    pub fn is_finite(self) -> bool {
        self.years.is_finite()
    }
}

impl From<f64> for Epoch {
    fn from(years: f64) -> Self {
        Self::new(years)
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}
