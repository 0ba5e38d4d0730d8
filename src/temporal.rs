/*!
Fields and units of time.

A [`Field`] names a single component that can be read from (or set on) a
date, time or datetime. For example, [`Field::DayOfYear`]. A [`Unit`] names an
amount of time that can be added to a value or measured between two values.
For example, [`Unit::Month`].

Both are closed sets. Each value type in this crate documents which fields
and units it supports, and provides `is_supported` style predicates. Asking a
value for a field or unit it doesn't support returns an error for which
[`Error::is_unsupported`](crate::Error::is_unsupported) is true.
*/

use crate::{util::b, Duration, Error};

/// A single component of a date, time or offset.
///
/// # Example
///
/// ```
/// use isochron::{civil::LocalDate, Field};
///
/// let date = LocalDate::constant(2008, 6, 30);
/// assert_eq!(date.get(Field::DayOfYear)?, 182);
/// assert_eq!(date.get(Field::DayOfWeek)?, 1);
/// assert_eq!(date.get_long(Field::EpochDay)?, 14060);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[non_exhaustive]
pub enum Field {
    /// The nanosecond within the second, `0..=999_999_999`.
    NanoOfSecond,
    /// The nanosecond within the day, `0..=86_399_999_999_999`.
    NanoOfDay,
    /// The microsecond within the second, `0..=999_999`.
    MicroOfSecond,
    /// The microsecond within the day, `0..=86_399_999_999`.
    MicroOfDay,
    /// The millisecond within the second, `0..=999`.
    MilliOfSecond,
    /// The millisecond within the day, `0..=86_399_999`.
    MilliOfDay,
    /// The second within the minute, `0..=59`.
    SecondOfMinute,
    /// The second within the day, `0..=86_399`.
    SecondOfDay,
    /// The minute within the hour, `0..=59`.
    MinuteOfHour,
    /// The minute within the day, `0..=1_439`.
    MinuteOfDay,
    /// The hour within the AM or PM half of the day, `0..=11`.
    HourOfAmPm,
    /// The clock hour within the AM or PM half of the day, `1..=12`.
    ClockHourOfAmPm,
    /// The hour within the day, `0..=23`.
    HourOfDay,
    /// The clock hour within the day, `1..=24`.
    ClockHourOfDay,
    /// `0` for AM and `1` for PM.
    AmPmOfDay,
    /// The ISO day of the week, Monday is `1` and Sunday is `7`.
    DayOfWeek,
    /// The day of the week within a week that starts on the first day of the
    /// month, `1..=7`.
    AlignedDayOfWeekInMonth,
    /// The day of the week within a week that starts on the first day of the
    /// year, `1..=7`.
    AlignedDayOfWeekInYear,
    /// The day of the month, `1..=31`.
    DayOfMonth,
    /// The day of the year, `1..=366`.
    DayOfYear,
    /// The number of days since `1970-01-01`.
    EpochDay,
    /// The week of the month, where weeks start on the first day of the
    /// month, `1..=5`.
    AlignedWeekOfMonth,
    /// The week of the year, where weeks start on the first day of the year,
    /// `1..=53`.
    AlignedWeekOfYear,
    /// The month of the year, `1..=12`.
    MonthOfYear,
    /// The number of months since year `0`, i.e., `year * 12 + month - 1`.
    ProlepticMonth,
    /// The year within the era. Year `0` is `1` BCE.
    YearOfEra,
    /// The proleptic year.
    Year,
    /// `0` for BCE and `1` for CE.
    Era,
    /// The number of seconds since `1970-01-01T00:00Z`.
    InstantSeconds,
    /// The total number of seconds of a UTC offset.
    OffsetSeconds,
}

impl Field {
    /// Returns the outer range of values this field can take, as an
    /// inclusive `(min, max)` pair.
    ///
    /// Some fields, like [`Field::DayOfMonth`], have a smaller range for any
    /// particular value. This returns the range over all values.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::Field;
    ///
    /// assert_eq!(Field::DayOfMonth.range(), (1, 31));
    /// assert_eq!(Field::OffsetSeconds.range(), (-64_800, 64_800));
    /// ```
    pub fn range(self) -> (i64, i64) {
        use self::Field::*;

        match self {
            NanoOfSecond => (0, 999_999_999),
            NanoOfDay => (0, b::NanoOfDay::MAX),
            MicroOfSecond => (0, 999_999),
            MicroOfDay => (0, 86_400 * 1_000_000 - 1),
            MilliOfSecond => (0, 999),
            MilliOfDay => (0, 86_400 * 1_000 - 1),
            SecondOfMinute => (0, 59),
            SecondOfDay => (0, 86_399),
            MinuteOfHour => (0, 59),
            MinuteOfDay => (0, 1_439),
            HourOfAmPm => (0, 11),
            ClockHourOfAmPm => (1, 12),
            HourOfDay => (0, 23),
            ClockHourOfDay => (1, 24),
            AmPmOfDay => (0, 1),
            DayOfWeek => (1, 7),
            AlignedDayOfWeekInMonth => (1, 7),
            AlignedDayOfWeekInYear => (1, 7),
            DayOfMonth => (1, 31),
            DayOfYear => (1, 366),
            EpochDay => (b::EpochDay::MIN, b::EpochDay::MAX),
            AlignedWeekOfMonth => (1, 5),
            AlignedWeekOfYear => (1, 53),
            MonthOfYear => (1, 12),
            ProlepticMonth => (b::ProlepticMonth::MIN, b::ProlepticMonth::MAX),
            YearOfEra => (1, i64::from(b::Year::MAX) + 1),
            Year => (i64::from(b::Year::MIN), i64::from(b::Year::MAX)),
            Era => (0, 1),
            InstantSeconds => (i64::MIN, i64::MAX),
            OffsetSeconds => (
                i64::from(b::OffsetTotalSeconds::MIN),
                i64::from(b::OffsetTotalSeconds::MAX),
            ),
        }
    }

    /// Checks that the given value is in this field's outer range.
    ///
    /// # Errors
    ///
    /// When the value is out of range, this returns an error for which
    /// [`Error::is_range`] is true.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::Field;
    ///
    /// assert_eq!(Field::HourOfDay.check(23)?, 23);
    /// assert!(Field::HourOfDay.check(24).unwrap_err().is_range());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn check(self, value: i64) -> Result<i64, Error> {
        let (min, max) = self.range();
        if !(min <= value && value <= max) {
            return Err(Error::range(self.name(), value, min, max));
        }
        Ok(value)
    }

    /// Returns true if this field is a component of a date.
    pub fn is_date_based(self) -> bool {
        use self::Field::*;

        matches!(
            self,
            DayOfWeek
                | AlignedDayOfWeekInMonth
                | AlignedDayOfWeekInYear
                | DayOfMonth
                | DayOfYear
                | EpochDay
                | AlignedWeekOfMonth
                | AlignedWeekOfYear
                | MonthOfYear
                | ProlepticMonth
                | YearOfEra
                | Year
                | Era
        )
    }

    /// Returns true if this field is a component of a time of day.
    pub fn is_time_based(self) -> bool {
        use self::Field::*;

        matches!(
            self,
            NanoOfSecond
                | NanoOfDay
                | MicroOfSecond
                | MicroOfDay
                | MilliOfSecond
                | MilliOfDay
                | SecondOfMinute
                | SecondOfDay
                | MinuteOfHour
                | MinuteOfDay
                | HourOfAmPm
                | ClockHourOfAmPm
                | HourOfDay
                | ClockHourOfDay
                | AmPmOfDay
        )
    }

    /// Returns true when every value of this field fits into an `i32`.
    ///
    /// Values of fields for which this is false can only be read with a
    /// `get_long` method.
    pub(crate) fn fits_i32(self) -> bool {
        let (min, max) = self.range();
        i32::try_from(min).is_ok() && i32::try_from(max).is_ok()
    }

    /// The name of this field as used in error messages.
    pub(crate) fn name(self) -> &'static str {
        use self::Field::*;

        match self {
            NanoOfSecond => "NanoOfSecond",
            NanoOfDay => "NanoOfDay",
            MicroOfSecond => "MicroOfSecond",
            MicroOfDay => "MicroOfDay",
            MilliOfSecond => "MilliOfSecond",
            MilliOfDay => "MilliOfDay",
            SecondOfMinute => "SecondOfMinute",
            SecondOfDay => "SecondOfDay",
            MinuteOfHour => "MinuteOfHour",
            MinuteOfDay => "MinuteOfDay",
            HourOfAmPm => "HourOfAmPm",
            ClockHourOfAmPm => "ClockHourOfAmPm",
            HourOfDay => "HourOfDay",
            ClockHourOfDay => "ClockHourOfDay",
            AmPmOfDay => "AmPmOfDay",
            DayOfWeek => "DayOfWeek",
            AlignedDayOfWeekInMonth => "AlignedDayOfWeekInMonth",
            AlignedDayOfWeekInYear => "AlignedDayOfWeekInYear",
            DayOfMonth => "DayOfMonth",
            DayOfYear => "DayOfYear",
            EpochDay => "EpochDay",
            AlignedWeekOfMonth => "AlignedWeekOfMonth",
            AlignedWeekOfYear => "AlignedWeekOfYear",
            MonthOfYear => "MonthOfYear",
            ProlepticMonth => "ProlepticMonth",
            YearOfEra => "YearOfEra",
            Year => "Year",
            Era => "Era",
            InstantSeconds => "InstantSeconds",
            OffsetSeconds => "OffsetSeconds",
        }
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// A unit of time.
///
/// Units are ordered such that bigger units compare greater than smaller
/// units.
///
/// # Example
///
/// ```
/// use isochron::Unit;
///
/// assert!(Unit::Year > Unit::Nanosecond);
/// assert!(Unit::Day > Unit::HalfDay);
/// assert!(Unit::Forever > Unit::Era);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[non_exhaustive]
pub enum Unit {
    /// A nanosecond is the smallest granularity of time supported.
    Nanosecond = 0,
    /// A microsecond is always 1,000 nanoseconds.
    Microsecond = 1,
    /// A millisecond is always 1,000 microseconds.
    Millisecond = 2,
    /// A second is always 1,000 milliseconds. (Leap seconds are not
    /// modeled.)
    Second = 3,
    /// A minute is always 60 seconds.
    Minute = 4,
    /// An hour is always 60 minutes.
    Hour = 5,
    /// Half of a day, i.e., 12 hours.
    HalfDay = 6,
    /// A civil day, i.e., 24 hours.
    Day = 7,
    /// A week is 7 days.
    Week = 8,
    /// A Gregorian calendar month. It is one of 28, 29, 30 or 31 days.
    Month = 9,
    /// A Gregorian calendar year. It is 365 or 366 days.
    Year = 10,
    /// 10 years.
    Decade = 11,
    /// 100 years.
    Century = 12,
    /// 1,000 years.
    Millennium = 13,
    /// 1,000,000,000 years.
    Era = 14,
    /// An unbounded amount of time. No value supports arithmetic with this
    /// unit.
    Forever = 15,
}

impl Unit {
    /// Returns the (possibly estimated) length of this unit.
    ///
    /// Units of days and smaller are exact. Weeks are exact as well (7
    /// days). Months, years and bigger units are estimated using an average
    /// Gregorian year of 365.2425 days. `Forever` returns the maximum
    /// duration.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::{Duration, Unit};
    ///
    /// assert_eq!(Unit::Hour.duration(), Duration::of_seconds(3600));
    /// assert_eq!(Unit::Year.duration(), Duration::of_seconds(31_556_952));
    /// ```
    pub fn duration(self) -> Duration {
        use self::Unit::*;

        // An estimated Gregorian year, 365.2425 days.
        const YEAR: i64 = 31_556_952;
        match self {
            Nanosecond => Duration::of_nanos(1),
            Microsecond => Duration::of_nanos(1_000),
            Millisecond => Duration::of_nanos(1_000_000),
            Second => Duration::of_seconds(1),
            Minute => Duration::of_seconds(60),
            Hour => Duration::of_seconds(3_600),
            HalfDay => Duration::of_seconds(43_200),
            Day => Duration::of_seconds(86_400),
            Week => Duration::of_seconds(7 * 86_400),
            Month => Duration::of_seconds(YEAR / 12),
            Year => Duration::of_seconds(YEAR),
            Decade => Duration::of_seconds(YEAR * 10),
            Century => Duration::of_seconds(YEAR * 100),
            Millennium => Duration::of_seconds(YEAR * 1_000),
            Era => Duration::of_seconds(YEAR * 1_000_000_000),
            Forever => Duration::MAX,
        }
    }

    /// Returns true when the length of this unit varies, i.e., for months and
    /// anything bigger.
    ///
    /// Days and weeks are considered exact, since this crate only deals with
    /// civil days of 24 hours.
    pub fn is_duration_estimated(self) -> bool {
        self >= Unit::Month
    }

    /// Returns true for days and every bigger unit except `Forever`.
    pub fn is_date_based(self) -> bool {
        Unit::Day <= self && self <= Unit::Era
    }

    /// Returns true for half days and every smaller unit.
    pub fn is_time_based(self) -> bool {
        self <= Unit::HalfDay
    }

    /// Returns the number of nanoseconds in this unit, when it is time based.
    pub(crate) fn nanoseconds(self) -> Option<i64> {
        use self::Unit::*;

        Some(match self {
            Nanosecond => 1,
            Microsecond => 1_000,
            Millisecond => 1_000_000,
            Second => 1_000_000_000,
            Minute => 60_000_000_000,
            Hour => 3_600_000_000_000,
            HalfDay => 43_200_000_000_000,
            Day => 86_400_000_000_000,
            _ => return None,
        })
    }

    /// Returns the number of months in this unit, when it is month based.
    pub(crate) fn months(self) -> Option<i64> {
        use self::Unit::*;

        Some(match self {
            Month => 1,
            Year => 12,
            Decade => 120,
            Century => 1_200,
            Millennium => 12_000,
            _ => return None,
        })
    }

    /// A human readable plural description of this unit of time.
    pub(crate) fn plural(self) -> &'static str {
        use self::Unit::*;

        match self {
            Nanosecond => "nanoseconds",
            Microsecond => "microseconds",
            Millisecond => "milliseconds",
            Second => "seconds",
            Minute => "minutes",
            Hour => "hours",
            HalfDay => "half-days",
            Day => "days",
            Week => "weeks",
            Month => "months",
            Year => "years",
            Decade => "decades",
            Century => "centuries",
            Millennium => "millennia",
            Era => "eras",
            Forever => "forever",
        }
    }
}

impl core::fmt::Display for Unit {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.plural())
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Unit {
    fn arbitrary(g: &mut quickcheck::Gen) -> Unit {
        *g.choose(&[
            Unit::Nanosecond,
            Unit::Microsecond,
            Unit::Millisecond,
            Unit::Second,
            Unit::Minute,
            Unit::Hour,
            Unit::HalfDay,
            Unit::Day,
            Unit::Week,
            Unit::Month,
            Unit::Year,
            Unit::Decade,
            Unit::Century,
            Unit::Millennium,
        ])
        .unwrap()
    }
}
