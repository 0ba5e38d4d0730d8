/*!
Civil dates and times, without an offset or time zone.

The types in this module describe a date and time as it appears on a
calendar or a wall clock. They do not identify a precise instant in time.
Use [`LocalDateTime::at_offset`] to attach a [`ZoneOffset`](crate::tz::ZoneOffset)
and get an [`OffsetDateTime`](crate::OffsetDateTime).

The calendar is the proleptic ISO 8601 calendar: the Gregorian leap year
rules apply to every year, and year `0` is the year before year `1`. Years
range from `-999999999` to `999999999`.

# Example

```
use isochron::civil::{date, datetime, time, LocalDate};

let d = date(2008, 2, 29);
assert!(d.in_leap_year());
assert_eq!(d.plus_years(1)?, date(2009, 2, 28));

let dt = d.at(time(23, 59, 59, 0));
assert_eq!(dt.plus_seconds(1)?, datetime(2008, 3, 1, 0, 0, 0, 0));

assert_eq!(LocalDate::MIN.to_string(), "-999999999-01-01");

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

pub use self::{
    date::LocalDate, datetime::LocalDateTime, time::LocalTime,
    weekday::Weekday,
};

mod date;
mod datetime;
mod time;
mod weekday;

/// Creates a new date in a `const` context.
///
/// This is a convenience for [`LocalDate::constant`].
///
/// # Panics
///
/// This panics when the date is invalid. In a const context, the panic is a
/// compile time error.
#[inline]
pub const fn date(year: i32, month: i8, day: i8) -> LocalDate {
    LocalDate::constant(year, month, day)
}

/// Creates a new time in a `const` context.
///
/// This is a convenience for [`LocalTime::constant`].
///
/// # Panics
///
/// This panics when the time is invalid.
#[inline]
pub const fn time(
    hour: i8,
    minute: i8,
    second: i8,
    nanosecond: i32,
) -> LocalTime {
    LocalTime::constant(hour, minute, second, nanosecond)
}

/// Creates a new datetime in a `const` context.
///
/// This is a convenience for [`LocalDateTime::constant`].
///
/// # Panics
///
/// This panics when the date or time is invalid.
#[inline]
pub const fn datetime(
    year: i32,
    month: i8,
    day: i8,
    hour: i8,
    minute: i8,
    second: i8,
    nanosecond: i32,
) -> LocalDateTime {
    LocalDateTime::constant(year, month, day, hour, minute, second, nanosecond)
}
