use crate::consts::LEAP_YEAR_CYCLE;
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Rule deciding whether a given year has a 29-day February.
///
/// Neither variant implements the real Gregorian rule. `Ignore` models the
/// historical program that gave every year 365 days, and `NaiveModFour`
/// treats every year divisible by four as a leap year, century years
/// included. Both are kept as selectable policies rather than corrected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "kebab-case")]
pub enum LeapYearPolicy {
    /// Every year has 365 days.
    #[display(fmt = "ignore")]
    Ignore,
    /// A year divisible by four is a leap year, with no century correction.
    #[default]
    #[display(fmt = "naive-mod-four")]
    NaiveModFour,
}

impl LeapYearPolicy {
    /// Leap verdict for `year` under this policy.
    #[inline]
    pub const fn is_leap_year(self, year: u16) -> bool {
        match self {
            Self::Ignore => false,
            Self::NaiveModFour => year % LEAP_YEAR_CYCLE == 0,
        }
    }

    /// Count of leap days that fell in years before `year` under this
    /// policy. The cumulative tables already carry the current year's leap
    /// day, so the count stops at `year - 1`.
    pub const fn leap_days_before(self, year: u16) -> u16 {
        match self {
            Self::Ignore => 0,
            // Year 1 has no predecessor years. Without this arm the swap
            // normalization in leap_years_between would turn (1, 0) into
            // [0, 1] and count year 0.
            Self::NaiveModFour if year <= 1 => 0,
            Self::NaiveModFour => leap_years_between(1, year - 1),
        }
    }
}

/// Number of integers divisible by four in the closed range spanned by the
/// two bounds, taken in either order. Returns 0 when the lower bound,
/// rounded up to the next multiple of four, exceeds the upper bound.
pub const fn leap_years_between(a: u16, b: u16) -> u16 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let first = lo.div_ceil(LEAP_YEAR_CYCLE) * LEAP_YEAR_CYCLE;
    if first > hi {
        0
    } else {
        (hi - first) / LEAP_YEAR_CYCLE + 1
    }
}
