mod consts;
mod diff;
mod policy;
mod prelude;
mod types;

pub use consts::*;
pub use diff::{day_number, difference};
pub use policy::{leap_years_between, LeapYearPolicy};
pub use types::{days_before_month, days_in_month, Day, Month, Year};

use crate::prelude::*;

/// A calendar date whose fields have passed range validation.
///
/// Immutable once constructed; two dates with equal fields are
/// interchangeable. Field declaration order (year, month, day) makes the
/// derived `Ord` calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:02}/{:02}/{:04}", "day.get()", "month.get()", "year.get()")]
pub struct Date {
    year: types::Year,
    month: types::Month,
    day: types::Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    /// A character outside digits, '/' and '-'. Catches embedded
    /// whitespace that a bare numeric scan would skip.
    #[display(fmt = "Date contains a character other than digits, '/' and '-'")]
    MalformedCharacters,
    /// The allowed character set, but not three numbers joined by one
    /// consistent separator with nothing trailing.
    #[display(fmt = "Date is not three numbers separated by '/' or '-': {_0}")]
    MalformedStructure(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u32),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u32, year: u16 },
}

impl std::error::Error for ParseError {}

impl Date {
    /// Creates a date from already-validated components.
    pub const fn new(year: types::Year, month: types::Month, day: types::Day) -> Self {
        Self { year, month, day }
    }

    /// Parses a single line of text in `day/month/year` form (or the same
    /// with `-`) and validates its fields under `policy`.
    ///
    /// Leading zeros are fine; the fields are read numerically. A leading
    /// `-` never parses as a sign: it fails the field decomposition and is
    /// rejected as structure.
    ///
    /// # Errors
    /// Returns the first applicable `ParseError`, checked in the order
    /// characters, structure, year, month, day.
    pub fn parse(input: &str, policy: LeapYearPolicy) -> Result<Self, ParseError> {
        if !input
            .chars()
            .all(|c| c.is_ascii_digit() || FIELD_SEPARATORS.contains(&c))
        {
            return Err(ParseError::MalformedCharacters);
        }

        let fields = FIELD_SEPARATORS
            .iter()
            .find_map(|&sep| split_fields(input, sep))
            .ok_or_else(|| ParseError::MalformedStructure(input.to_owned()))?;

        let [day, month, year] = fields.map(|f| parse_field(f, input));
        Self::from_fields(day?, month?, year?, policy)
    }

    /// Validates raw day/month/year fields and assembles a `Date`.
    ///
    /// Checks run in the order year, month, day; the first failing field
    /// wins, so an out-of-range year is reported even when the month and
    /// day are also bad.
    ///
    /// # Errors
    /// Returns `InvalidYear`, `InvalidMonth` or `InvalidDay`.
    pub fn from_fields(
        day: u32,
        month: u32,
        year: u32,
        policy: LeapYearPolicy,
    ) -> Result<Self, ParseError> {
        let year = types::Year::new(year)?;
        let month = types::Month::new(month)?;
        let day = types::Day::new(day, year, month, policy)?;
        Ok(Self { year, month, day })
    }

    /// Returns the year component
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month component
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day-of-month component
    pub const fn day(&self) -> u8 {
        self.day.get()
    }
}

/// Splits `input` into exactly three non-empty all-digit fields joined by
/// `sep`. A fourth field, an empty field (so also a trailing separator) or
/// a field holding the other separator character makes the attempt fail.
fn split_fields(input: &str, sep: char) -> Option<[&str; 3]> {
    let mut parts = input.split(sep);
    let fields = [parts.next()?, parts.next()?, parts.next()?];
    if parts.next().is_some() {
        return None;
    }
    if fields
        .iter()
        .any(|f| f.is_empty() || !f.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }
    Some(fields)
}

/// Numeric read of one all-digit field. Overflowing `u32` means the field
/// cannot be an integer in any valid range, classified as structure.
fn parse_field(field: &str, line: &str) -> Result<u32, ParseError> {
    field
        .parse::<u32>()
        .map_err(|_| ParseError::MalformedStructure(line.to_owned()))
}
