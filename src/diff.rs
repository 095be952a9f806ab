//! Day-number arithmetic: the linear surrogate that makes two dates
//! subtractable.

use crate::consts::DAYS_IN_COMMON_YEAR;
use crate::policy::LeapYearPolicy;
use crate::types::days_before_month;
use crate::Date;

/// Linear day number of `date` under `policy`.
///
/// Strictly increasing in calendar order for a fixed policy, so the
/// difference of two day numbers is the count of days between the dates.
/// There is no epoch alignment; only differences are meaningful.
pub fn day_number(date: Date, policy: LeapYearPolicy) -> i32 {
    let leap = policy.is_leap_year(date.year());
    i32::from(DAYS_IN_COMMON_YEAR) * i32::from(date.year())
        + i32::from(days_before_month(leap, date.month()))
        + i32::from(date.day())
        + i32::from(policy.leap_days_before(date.year()))
}

/// How many days after `from` the date `to` is, under `policy`. Negative
/// when `to` is earlier, zero only for equal dates.
pub fn difference(from: Date, to: Date, policy: LeapYearPolicy) -> i32 {
    day_number(to, policy) - day_number(from, policy)
}
