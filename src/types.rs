use crate::consts::{CUMULATIVE_DAYS, DAYS_IN_MONTH, MAX_MONTH, MAX_YEAR, MIN_DAY};
use crate::policy::LeapYearPolicy;
use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`.
    /// The argument is `u32` because candidate fields come out of the parser
    /// unranged.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u32) -> Result<Self, ParseError> {
        if value == 0 || value > u32::from(MAX_YEAR) {
            return Err(ParseError::InvalidYear(value));
        }
        #[allow(clippy::cast_possible_truncation)]
        let non_zero =
            NonZeroU16::new(value as u16).ok_or(ParseError::InvalidYear(value))?;
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(u32::from(value))
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u32) -> Result<Self, ParseError> {
        if value == 0 || value > u32::from(MAX_MONTH) {
            return Err(ParseError::InvalidMonth(value));
        }
        #[allow(clippy::cast_possible_truncation)]
        let non_zero =
            NonZeroU8::new(value as u8).ok_or(ParseError::InvalidMonth(value))?;
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(u32::from(value))
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month under the
/// leap-year policy it was validated with.
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the
    /// given year and month. The month length comes from the policy's leap
    /// verdict for the year.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or exceeds the
    /// month length.
    pub fn new(
        value: u32,
        year: Year,
        month: Month,
        policy: LeapYearPolicy,
    ) -> Result<Self, ParseError> {
        let max_day = days_in_month(policy.is_leap_year(year.get()), month.get());
        if value == 0 || value > u32::from(max_day) {
            return Err(ParseError::InvalidDay {
                month: month.get(),
                day: value,
                year: year.get(),
            });
        }
        #[allow(clippy::cast_possible_truncation)]
        let non_zero = NonZeroU8::new(value as u8).ok_or(ParseError::InvalidDay {
            month: month.get(),
            day: value,
            year: year.get(),
        })?;
        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate without year/month/policy context, so just check
        // the minimum.
        if value < MIN_DAY {
            return Err(ParseError::InvalidDay {
                month: 0,
                day: u32::from(value),
                year: 0,
            });
        }
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidDay {
            month: 0,
            day: u32::from(value),
            year: 0,
        })?;
        Ok(Self(non_zero))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Calendar table lookups

pub const fn days_in_month(leap: bool, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);
    DAYS_IN_MONTH[leap as usize][month as usize]
}

/// Days elapsed in the year before the first of `month`, for the given leap
/// verdict.
pub const fn days_before_month(leap: bool, month: u8) -> u16 {
    debug_assert!(month != 0 && month <= MAX_MONTH);
    CUMULATIVE_DAYS[leap as usize][month as usize]
}
