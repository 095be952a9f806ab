/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of any month
pub const MIN_DAY: u8 = 1;

/// Days in a year that has no leap day
pub const DAYS_IN_COMMON_YEAR: u16 = 365;

/// Separators accepted between the day, month and year fields.
/// Both separators in one date must be the same character; the parser
/// tries them in this order.
pub const FIELD_SEPARATORS: [char; 2] = ['/', '-'];

/// Days in each month, one row per leap verdict (index 0 selects the
/// common year, index 1 the leap year). Element 0 of each row is unused
/// so that month numbers are direct indices.
pub const DAYS_IN_MONTH: [[u8; 13]; 2] = [
    [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31],
    [0, 31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31],
];

/// Cumulative days before the first of each month, same layout as
/// `DAYS_IN_MONTH`: `CUMULATIVE_DAYS[l][m]` is the sum of the month
/// lengths `1..m` under leap verdict `l`. Index 13 is never read.
pub const CUMULATIVE_DAYS: [[u16; 13]; 2] = [
    [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334],
    [0, 0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335],
];

/// Leap years recur every four years under the naive rule
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
