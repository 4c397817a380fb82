//! Reporting period navigation and month calendars.
//!
//! Months are zero-based throughout this module (`0` = January). The
//! navigator keeps a `(year, month)` cursor inside a closed range of years and
//! never moves past either end.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Indonesian month names, indexed by zero-based month.
pub const MONTH_NAMES: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Default lowest navigable year.
pub const DEFAULT_MIN_YEAR: i32 = 2020;

/// Default highest navigable year.
pub const DEFAULT_MAX_YEAR: i32 = 2035;

/// The closed range of years the navigator may visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodBounds {
    /// Lowest navigable year (inclusive).
    pub min_year: i32,
    /// Highest navigable year (inclusive).
    pub max_year: i32,
}

impl PeriodBounds {
    /// Creates bounds, rejecting an empty range.
    pub fn new(min_year: i32, max_year: i32) -> AppResult<Self> {
        if min_year > max_year {
            return Err(AppError::ConfigInvalid {
                message: format!("min_year {} is after max_year {}", min_year, max_year),
            });
        }
        Ok(Self { min_year, max_year })
    }

    /// Returns true if `year` lies within the bounds.
    pub fn contains(&self, year: i32) -> bool {
        (self.min_year..=self.max_year).contains(&year)
    }
}

impl Default for PeriodBounds {
    fn default() -> Self {
        Self {
            min_year: DEFAULT_MIN_YEAR,
            max_year: DEFAULT_MAX_YEAR,
        }
    }
}

/// Which way to move the period cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// One month forward.
    Next,
    /// One month back.
    Previous,
}

/// A bounded `(year, month)` cursor.
///
/// # Example
///
/// ```
/// use employee_admin::calculation::{Direction, PeriodBounds, PeriodNavigator};
///
/// let bounds = PeriodBounds::new(2020, 2030).unwrap();
/// let mut nav = PeriodNavigator::new(bounds, 2030, 10).unwrap();
///
/// assert!(nav.advance(Direction::Next));
/// assert_eq!((nav.year(), nav.month()), (2030, 11));
///
/// // Clamped at the upper bound.
/// assert!(!nav.advance(Direction::Next));
/// assert_eq!((nav.year(), nav.month()), (2030, 11));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodNavigator {
    year: i32,
    month: u32,
    bounds: PeriodBounds,
}

impl PeriodNavigator {
    /// Creates a navigator at `(year, month)`.
    ///
    /// Fails with [`AppError::InvalidPeriod`] if the month is not in `0..=11`
    /// or the year is outside `bounds`.
    pub fn new(bounds: PeriodBounds, year: i32, month: u32) -> AppResult<Self> {
        if month > 11 || !bounds.contains(year) {
            return Err(AppError::InvalidPeriod { year, month });
        }
        Ok(Self {
            year,
            month,
            bounds,
        })
    }

    /// Creates a navigator at the month containing `date`, clamped into
    /// `bounds`.
    ///
    /// A date before the range starts at the first month of `min_year`; a date
    /// after it starts at the last month of `max_year`.
    pub fn starting_at(date: NaiveDate, bounds: PeriodBounds) -> Self {
        let (year, month) = if date.year() < bounds.min_year {
            (bounds.min_year, 0)
        } else if date.year() > bounds.max_year {
            (bounds.max_year, 11)
        } else {
            (date.year(), date.month0())
        };
        Self {
            year,
            month,
            bounds,
        }
    }

    /// The current year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The current zero-based month.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The navigable range.
    pub fn bounds(&self) -> PeriodBounds {
        self.bounds
    }

    /// Moves one month in `direction`.
    ///
    /// Returns false, leaving the cursor unchanged, when the move would leave
    /// the bounds.
    pub fn advance(&mut self, direction: Direction) -> bool {
        match direction {
            Direction::Next => {
                if self.month < 11 {
                    self.month += 1;
                } else if self.year < self.bounds.max_year {
                    self.month = 0;
                    self.year += 1;
                } else {
                    return false;
                }
            }
            Direction::Previous => {
                if self.month > 0 {
                    self.month -= 1;
                } else if self.year > self.bounds.min_year {
                    self.month = 11;
                    self.year -= 1;
                } else {
                    return false;
                }
            }
        }
        true
    }

    /// Jumps to `year`, keeping the month.
    ///
    /// Returns false, leaving the cursor unchanged, when `year` is outside the
    /// bounds.
    pub fn set_year(&mut self, year: i32) -> bool {
        if !self.bounds.contains(year) {
            return false;
        }
        self.year = year;
        true
    }

    /// The label of the current period.
    pub fn label(&self) -> AppResult<String> {
        period_label(self.month, self.year)
    }
}

/// First day of a zero-based month.
fn first_day(year: i32, month: u32) -> AppResult<NaiveDate> {
    if month > 11 {
        return Err(AppError::InvalidPeriod { year, month });
    }
    NaiveDate::from_ymd_opt(year, month + 1, 1).ok_or(AppError::InvalidPeriod { year, month })
}

/// First and last day of a zero-based month.
///
/// # Example
///
/// ```
/// use employee_admin::calculation::month_range;
/// use chrono::NaiveDate;
///
/// let (first, last) = month_range(2024, 1).unwrap();
/// assert_eq!(first, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
/// assert_eq!(last, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// ```
pub fn month_range(year: i32, month: u32) -> AppResult<(NaiveDate, NaiveDate)> {
    let first = first_day(year, month)?;
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or(AppError::InvalidPeriod { year, month })?;
    Ok((first, last))
}

/// Number of days in a zero-based month, leap years included.
pub fn days_in_month(year: i32, month: u32) -> AppResult<u32> {
    month_range(year, month).map(|(_, last)| last.day())
}

/// Formats a period as `"01–<lastDay> <MonthName> <year>"`.
///
/// # Example
///
/// ```
/// use employee_admin::calculation::period_label;
///
/// assert_eq!(period_label(0, 2024).unwrap(), "01–31 Januari 2024");
/// assert_eq!(period_label(1, 2024).unwrap(), "01–29 Februari 2024");
/// assert_eq!(period_label(1, 2025).unwrap(), "01–28 Februari 2025");
/// ```
pub fn period_label(month: u32, year: i32) -> AppResult<String> {
    let last_day = days_in_month(year, month)?;
    Ok(format!(
        "01–{:02} {} {}",
        last_day, MONTH_NAMES[month as usize], year
    ))
}

/// Number of blank cells before day 1 in a Monday-first week.
pub fn weekday_offset(year: i32, month: u32) -> AppResult<usize> {
    // chrono counts Sunday as 0, the same raw form calendars usually use.
    let raw = first_day(year, month)?.weekday().num_days_from_sunday();
    Ok(((raw + 6) % 7) as usize)
}

/// Calendar cells for a month, weeks starting on Monday.
///
/// The grid opens with one `None` per weekday before day 1, followed by
/// `Some(1)..=Some(last_day)`. There is no trailing padding.
///
/// # Example
///
/// ```
/// use employee_admin::calculation::month_grid;
///
/// // 1 September 2024 is a Sunday.
/// let grid = month_grid(2024, 8).unwrap();
/// assert_eq!(grid.iter().take_while(|c| c.is_none()).count(), 6);
/// assert_eq!(grid.len(), 6 + 30);
/// ```
pub fn month_grid(year: i32, month: u32) -> AppResult<Vec<Option<u32>>> {
    let offset = weekday_offset(year, month)?;
    let days = days_in_month(year, month)?;

    let mut cells = Vec::with_capacity(offset + days as usize);
    cells.extend(std::iter::repeat_n(None, offset));
    cells.extend((1..=days).map(Some));
    Ok(cells)
}
