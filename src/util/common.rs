/*!
A collection of calendar related utility functions.

These operate on plain primitive integers and assume their inputs have
already been validated (for example, a `month` is always in `1..=12`). They
are the substrate that `LocalDate` and friends are built on.

# Algorithms

Conversions between Gregorian dates and epoch days are taken from Howard
Hinnant's "chrono-Compatible Low-Level Date Algorithms":
<https://howardhinnant.github.io/date_algorithms.html>

They are written here with 64-bit integers and Euclidean division so that
they work for every year in `-999_999_999..=999_999_999`.
*/

pub(crate) const SECONDS_PER_MINUTE: i64 = 60;
pub(crate) const SECONDS_PER_HOUR: i64 = 3_600;
pub(crate) const SECONDS_PER_DAY: i64 = 86_400;
pub(crate) const NANOS_PER_SECOND: i64 = 1_000_000_000;
pub(crate) const NANOS_PER_MINUTE: i64 = 60 * NANOS_PER_SECOND;
pub(crate) const NANOS_PER_HOUR: i64 = 60 * NANOS_PER_MINUTE;
pub(crate) const NANOS_PER_DAY: i64 = 24 * NANOS_PER_HOUR;

/// Returns true if and only if the given year is a leap year.
///
/// A leap year is a year with 366 days. Typical years have 365 days.
#[inline]
pub(crate) const fn is_leap_year(year: i32) -> bool {
    // A century year is only a leap year when divisible by 400, which for
    // multiples of 25 is the same as divisibility by 16.
    let d = if year % 25 != 0 { 4 } else { 16 };
    (year % d) == 0
}

/// Return the number of days in the given month.
#[inline]
pub(crate) const fn days_in_month(year: i32, month: i8) -> i8 {
    if month == 2 {
        if is_leap_year(year) {
            29
        } else {
            28
        }
    } else {
        30 | (month ^ month >> 3)
    }
}

/// Returns the number of days in the given year.
#[inline]
pub(crate) const fn days_in_year(year: i32) -> i16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Returns the day of the year (1-indexed) for the given date.
#[inline]
pub(crate) const fn day_of_year(year: i32, month: i8, day: i8) -> i16 {
    // The number of days before the first day of each month in a common
    // year.
    const CUMULATIVE: [i16; 12] =
        [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

    let mut doy = CUMULATIVE[(month - 1) as usize] + day as i16;
    if month > 2 && is_leap_year(year) {
        doy += 1;
    }
    doy
}

/// Converts a Gregorian date to days since the Unix epoch.
#[inline]
pub(crate) const fn epoch_day_from_date(year: i32, month: i8, day: i8) -> i64 {
    let month = month as i64;
    let day = day as i64;
    let year = year as i64 - if month <= 2 { 1 } else { 0 };
    let era = year.div_euclid(400);
    let yoe = year.rem_euclid(400);
    let mp = if month > 2 { month - 3 } else { month + 9 };
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Converts days since the Unix epoch to a Gregorian date.
///
/// The epoch day given must correspond to a year in the supported range.
#[inline]
pub(crate) const fn date_from_epoch_day(epoch_day: i64) -> (i32, i8, i8) {
    let z = epoch_day + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };
    (year as i32, month as i8, day as i8)
}

/// Returns the ISO day of the week (Monday is `1`, Sunday is `7`) for the
/// given epoch day.
#[inline]
pub(crate) const fn weekday_from_epoch_day(epoch_day: i64) -> i8 {
    // 1970-01-01 was a Thursday.
    ((epoch_day + 3).rem_euclid(7) + 1) as i8
}

/// Returns the number of months since year zero for the given year and
/// month.
#[inline]
pub(crate) const fn proleptic_month(year: i32, month: i8) -> i64 {
    year as i64 * 12 + (month as i64 - 1)
}
