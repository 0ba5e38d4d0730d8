use crate::{
    civil::{LocalDate, LocalDateTime},
    error::{civil::Error as E, ErrorContext},
    fmt::{
        temporal::{DEFAULT_DATETIME_PARSER, DEFAULT_DATETIME_PRINTER},
        FmtWrite,
    },
    util::{
        b,
        common::{
            NANOS_PER_DAY, NANOS_PER_HOUR, NANOS_PER_MINUTE, NANOS_PER_SECOND,
            SECONDS_PER_DAY,
        },
    },
    Error, Field, Unit,
};

/// A time of day without a date or offset, such as `10:15:30`.
///
/// A `LocalTime` has nanosecond precision. Every value is in the range
/// `00:00..=23:59:59.999999999`.
///
/// # Arithmetic
///
/// Adding hours, minutes, seconds or nanoseconds to a time wraps around
/// midnight. That is, time arithmetic never fails:
///
/// ```
/// use isochron::civil::time;
///
/// assert_eq!(time(23, 0, 0, 0).plus_hours(2), time(1, 0, 0, 0));
/// assert_eq!(time(0, 0, 0, 0).plus_seconds(-1), time(23, 59, 59, 0));
/// assert_eq!(time(12, 0, 0, 0).plus_hours(i64::MAX), time(19, 0, 0, 0));
/// ```
///
/// To carry into the date, use [`LocalDateTime`].
///
/// # Parsing and printing
///
/// Times print as `HH:mm`, followed by `:ss` when the seconds or
/// nanoseconds are non-zero. A fraction is printed in groups of 3, 6 or 9
/// digits, whichever is the shortest that is exact:
///
/// ```
/// use isochron::civil::{time, LocalTime};
///
/// assert_eq!(time(11, 30, 0, 0).to_string(), "11:30");
/// assert_eq!(time(11, 30, 59, 0).to_string(), "11:30:59");
/// assert_eq!(time(11, 30, 0, 500).to_string(), "11:30:00.000000500");
/// assert_eq!(time(11, 30, 0, 120_000_000).to_string(), "11:30:00.120");
///
/// let t: LocalTime = "11:30:00.1".parse()?;
/// assert_eq!(t.nanosecond(), 100_000_000);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct LocalTime {
    hour: i8,
    minute: i8,
    second: i8,
    nanosecond: i32,
}

impl LocalTime {
    /// The first instant of the day, `00:00`.
    pub const MIDNIGHT: LocalTime = LocalTime::constant(0, 0, 0, 0);

    /// The minimum time, which is the same as [`LocalTime::MIDNIGHT`].
    pub const MIN: LocalTime = LocalTime::MIDNIGHT;

    /// Midday, `12:00`.
    pub const NOON: LocalTime = LocalTime::constant(12, 0, 0, 0);

    /// The last nanosecond of the day, `23:59:59.999999999`.
    pub const MAX: LocalTime = LocalTime::constant(23, 59, 59, 999_999_999);

    /// Creates a new time from its components.
    ///
    /// # Errors
    ///
    /// This returns a range error when any component is out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::civil::LocalTime;
    ///
    /// let t = LocalTime::new(23, 59, 59, 999_999_999)?;
    /// assert_eq!(t, LocalTime::MAX);
    /// assert!(LocalTime::new(24, 0, 0, 0).unwrap_err().is_range());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn new(
        hour: i8,
        minute: i8,
        second: i8,
        nanosecond: i32,
    ) -> Result<LocalTime, Error> {
        let hour = b::Hour::check(hour)?;
        let minute = b::Minute::check(minute)?;
        let second = b::Second::check(second)?;
        let nanosecond = b::SubsecNanosecond::check(nanosecond)?;
        Ok(LocalTime { hour, minute, second, nanosecond })
    }

    /// Creates a new time in a `const` context.
    ///
    /// # Panics
    ///
    /// This panics when [`LocalTime::new`] would return an error.
    #[inline]
    pub const fn constant(
        hour: i8,
        minute: i8,
        second: i8,
        nanosecond: i32,
    ) -> LocalTime {
        if !b::Hour::contains(hour as i64) {
            panic!("invalid hour");
        }
        if !b::Minute::contains(minute as i64) {
            panic!("invalid minute");
        }
        if !b::Second::contains(second as i64) {
            panic!("invalid second");
        }
        if !b::SubsecNanosecond::contains(nanosecond as i64) {
            panic!("invalid nanosecond");
        }
        LocalTime { hour, minute, second, nanosecond }
    }

    /// Creates a time from the number of seconds since midnight.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::civil::{time, LocalTime};
    ///
    /// assert_eq!(LocalTime::of_second_of_day(3_661)?, time(1, 1, 1, 0));
    /// assert!(LocalTime::of_second_of_day(86_400).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn of_second_of_day(second: i32) -> Result<LocalTime, Error> {
        let second = b::SecondOfDay::check(second)?;
        Ok(LocalTime::of_nano_of_day_unchecked(
            i64::from(second) * NANOS_PER_SECOND,
        ))
    }

    /// Creates a time from the number of nanoseconds since midnight.
    #[inline]
    pub fn of_nano_of_day(nanos: i64) -> Result<LocalTime, Error> {
        let nanos = b::NanoOfDay::check(nanos)?;
        Ok(LocalTime::of_nano_of_day_unchecked(nanos))
    }

    /// Returns the number of seconds since midnight.
    #[inline]
    pub const fn to_second_of_day(self) -> i32 {
        self.hour as i32 * 3_600 + self.minute as i32 * 60 + self.second as i32
    }

    /// Returns the number of nanoseconds since midnight.
    #[inline]
    pub const fn to_nano_of_day(self) -> i64 {
        self.to_second_of_day() as i64 * NANOS_PER_SECOND
            + self.nanosecond as i64
    }

    /// Returns the hour, from `0` to `23`.
    #[inline]
    pub const fn hour(self) -> i8 {
        self.hour
    }

    /// Returns the minute, from `0` to `59`.
    #[inline]
    pub const fn minute(self) -> i8 {
        self.minute
    }

    /// Returns the second, from `0` to `59`.
    #[inline]
    pub const fn second(self) -> i8 {
        self.second
    }

    /// Returns the fraction of the second in nanoseconds, from `0` to
    /// `999_999_999`.
    #[inline]
    pub const fn nanosecond(self) -> i32 {
        self.nanosecond
    }

    /// Returns this time `hours` later, wrapping around midnight.
    #[inline]
    pub fn plus_hours(self, hours: i64) -> LocalTime {
        self.plus_nanos_wrapping(hours.rem_euclid(24) * NANOS_PER_HOUR)
    }

    /// Returns this time `minutes` later, wrapping around midnight.
    #[inline]
    pub fn plus_minutes(self, minutes: i64) -> LocalTime {
        self.plus_nanos_wrapping(minutes.rem_euclid(1_440) * NANOS_PER_MINUTE)
    }

    /// Returns this time `seconds` later, wrapping around midnight.
    #[inline]
    pub fn plus_seconds(self, seconds: i64) -> LocalTime {
        self.plus_nanos_wrapping(
            seconds.rem_euclid(SECONDS_PER_DAY) * NANOS_PER_SECOND,
        )
    }

    /// Returns this time `nanos` later, wrapping around midnight.
    #[inline]
    pub fn plus_nanos(self, nanos: i64) -> LocalTime {
        self.plus_nanos_wrapping(nanos.rem_euclid(NANOS_PER_DAY))
    }

    /// Returns this time `hours` earlier, wrapping around midnight.
    #[inline]
    pub fn minus_hours(self, hours: i64) -> LocalTime {
        self.plus_hours(-(hours % 24))
    }

    /// Returns this time `minutes` earlier, wrapping around midnight.
    #[inline]
    pub fn minus_minutes(self, minutes: i64) -> LocalTime {
        self.plus_minutes(-(minutes % 1_440))
    }

    /// Returns this time `seconds` earlier, wrapping around midnight.
    #[inline]
    pub fn minus_seconds(self, seconds: i64) -> LocalTime {
        self.plus_seconds(-(seconds % SECONDS_PER_DAY))
    }

    /// Returns this time `nanos` earlier, wrapping around midnight.
    #[inline]
    pub fn minus_nanos(self, nanos: i64) -> LocalTime {
        self.plus_nanos(-(nanos % NANOS_PER_DAY))
    }

    /// Returns this time with the hour changed.
    #[inline]
    pub fn with_hour(self, hour: i8) -> Result<LocalTime, Error> {
        let hour = b::Hour::check(hour)?;
        Ok(LocalTime { hour, ..self })
    }

    /// Returns this time with the minute changed.
    #[inline]
    pub fn with_minute(self, minute: i8) -> Result<LocalTime, Error> {
        let minute = b::Minute::check(minute)?;
        Ok(LocalTime { minute, ..self })
    }

    /// Returns this time with the second changed.
    #[inline]
    pub fn with_second(self, second: i8) -> Result<LocalTime, Error> {
        let second = b::Second::check(second)?;
        Ok(LocalTime { second, ..self })
    }

    /// Returns this time with the fraction of the second changed.
    #[inline]
    pub fn with_nanosecond(self, nanosecond: i32) -> Result<LocalTime, Error> {
        let nanosecond = b::SubsecNanosecond::check(nanosecond)?;
        Ok(LocalTime { nanosecond, ..self })
    }

    /// Truncates this time to the given unit.
    ///
    /// Everything smaller than the unit is set to zero. Truncating to
    /// [`Unit::Day`] returns midnight.
    ///
    /// # Errors
    ///
    /// This returns an unsupported error for units bigger than a day.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::{civil::time, Unit};
    ///
    /// let t = time(17, 42, 31, 123_456_789);
    /// assert_eq!(t.truncated_to(Unit::Second)?, time(17, 42, 31, 0));
    /// assert_eq!(t.truncated_to(Unit::Millisecond)?, time(17, 42, 31, 123_000_000));
    /// assert_eq!(t.truncated_to(Unit::HalfDay)?, time(12, 0, 0, 0));
    /// assert!(t.truncated_to(Unit::Week).unwrap_err().is_unsupported());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn truncated_to(self, unit: Unit) -> Result<LocalTime, Error> {
        let Some(unit_nanos) = unit.nanoseconds() else {
            return Err(Error::unsupported_unit(unit, "truncation"));
        };
        let nod = self.to_nano_of_day();
        Ok(LocalTime::of_nano_of_day_unchecked(nod / unit_nanos * unit_nanos))
    }

    /// Returns true if and only if the given field can be read from a time.
    ///
    /// This is true precisely for the fields that are time based.
    #[inline]
    pub fn is_supported(self, field: Field) -> bool {
        field.is_time_based()
    }

    /// Returns the value of a time based field as a 32-bit integer.
    ///
    /// # Errors
    ///
    /// This returns an error when the field is not time based, or when it is
    /// [`Field::NanoOfDay`] or [`Field::MicroOfDay`].
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::{civil::time, Field};
    ///
    /// let t = time(0, 30, 0, 0);
    /// assert_eq!(t.get(Field::ClockHourOfDay)?, 24);
    /// assert_eq!(t.get(Field::ClockHourOfAmPm)?, 12);
    /// assert_eq!(t.get(Field::MinuteOfDay)?, 30);
    /// assert!(t.get(Field::NanoOfDay).unwrap_err().is_unsupported());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn get(self, field: Field) -> Result<i32, Error> {
        let value = self.get_long(field)?;
        if !field.fits_i32() {
            return Err(Error::field_too_large(field));
        }
        Ok(value as i32)
    }

    /// Returns the value of a time based field.
    pub fn get_long(self, field: Field) -> Result<i64, Error> {
        use crate::Field::*;

        let hour = i64::from(self.hour);
        let nano = i64::from(self.nanosecond);
        let value = match field {
            NanoOfSecond => nano,
            NanoOfDay => self.to_nano_of_day(),
            MicroOfSecond => nano / 1_000,
            MicroOfDay => self.to_nano_of_day() / 1_000,
            MilliOfSecond => nano / 1_000_000,
            MilliOfDay => self.to_nano_of_day() / 1_000_000,
            SecondOfMinute => i64::from(self.second),
            SecondOfDay => i64::from(self.to_second_of_day()),
            MinuteOfHour => i64::from(self.minute),
            MinuteOfDay => hour * 60 + i64::from(self.minute),
            HourOfAmPm => hour % 12,
            ClockHourOfAmPm if hour % 12 == 0 => 12,
            ClockHourOfAmPm => hour % 12,
            HourOfDay => hour,
            ClockHourOfDay if hour == 0 => 24,
            ClockHourOfDay => hour,
            AmPmOfDay => hour / 12,
            _ => return Err(Error::unsupported_field(field, "local time")),
        };
        Ok(value)
    }

    /// Returns this time with the given field set to a new value.
    ///
    /// Fields of the day as a whole (like [`Field::SecondOfDay`]) and the
    /// AM/PM fields move the time within the same day. The others replace the
    /// corresponding component.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::{civil::time, Field};
    ///
    /// let t = time(14, 30, 0, 0);
    /// assert_eq!(t.with_field(Field::AmPmOfDay, 0)?, time(2, 30, 0, 0));
    /// assert_eq!(t.with_field(Field::ClockHourOfAmPm, 12)?, time(12, 30, 0, 0));
    /// assert_eq!(t.with_field(Field::MilliOfSecond, 5)?, time(14, 30, 0, 5_000_000));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn with_field(
        self,
        field: Field,
        value: i64,
    ) -> Result<LocalTime, Error> {
        use crate::Field::*;

        if !self.is_supported(field) {
            return Err(Error::unsupported_field(field, "local time"));
        }
        let value = field.check(value)?;
        let hour = i64::from(self.hour);
        let nod = self.to_nano_of_day();
        let result = match field {
            NanoOfSecond => self.with_nanosecond(value as i32),
            NanoOfDay => LocalTime::of_nano_of_day(value),
            MicroOfSecond => self.with_nanosecond(value as i32 * 1_000),
            MicroOfDay => Ok(self.plus_nanos((value - nod / 1_000) * 1_000)),
            MilliOfSecond => self.with_nanosecond(value as i32 * 1_000_000),
            MilliOfDay => {
                Ok(self.plus_nanos((value - nod / 1_000_000) * 1_000_000))
            }
            SecondOfMinute => self.with_second(value as i8),
            SecondOfDay => Ok(self
                .plus_seconds(value - i64::from(self.to_second_of_day()))),
            MinuteOfHour => self.with_minute(value as i8),
            MinuteOfDay => Ok(self
                .plus_minutes(value - (hour * 60 + i64::from(self.minute)))),
            HourOfAmPm => Ok(self.plus_hours(value - hour % 12)),
            ClockHourOfAmPm => {
                let value = if value == 12 { 0 } else { value };
                Ok(self.plus_hours(value - hour % 12))
            }
            HourOfDay => self.with_hour(value as i8),
            ClockHourOfDay => {
                self.with_hour(if value == 24 { 0 } else { value as i8 })
            }
            AmPmOfDay => Ok(self.plus_hours((value - hour / 12) * 12)),
            _ => Err(Error::unsupported_field(field, "local time")),
        };
        result.with_context(|| E::FailedWithField { field })
    }

    /// Returns true if and only if amounts of the given unit can be added to
    /// a time.
    #[inline]
    pub fn is_supported_unit(self, unit: Unit) -> bool {
        unit.is_time_based()
    }

    /// Adds an amount of the given time based unit, wrapping around
    /// midnight.
    ///
    /// # Errors
    ///
    /// This returns an unsupported error for units of days and bigger.
    pub fn plus_unit(self, amount: i64, unit: Unit) -> Result<LocalTime, Error> {
        let Some(unit_nanos) = unit.nanoseconds().filter(|_| unit.is_time_based())
        else {
            return Err(Error::unsupported_unit(unit, "local time"));
        };
        // Reduce first so that the multiplication can't overflow.
        let per_day = NANOS_PER_DAY / unit_nanos;
        Ok(self.plus_nanos(amount.rem_euclid(per_day) * unit_nanos))
    }

    /// Returns the number of whole units from this time until `end`.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::{civil::time, Unit};
    ///
    /// let start = time(10, 0, 0, 0);
    /// assert_eq!(start.until(time(12, 30, 0, 0), Unit::Hour)?, 2);
    /// assert_eq!(start.until(time(9, 0, 0, 1), Unit::Minute)?, -59);
    /// assert!(start.until(time(12, 0, 0, 0), Unit::Day).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn until(self, end: LocalTime, unit: Unit) -> Result<i64, Error> {
        let Some(unit_nanos) = unit.nanoseconds().filter(|_| unit.is_time_based())
        else {
            return Err(Error::unsupported_unit(unit, "local time"));
        };
        Ok((end.to_nano_of_day() - self.to_nano_of_day()) / unit_nanos)
    }

    /// Combines this time with a date to create a datetime.
    #[inline]
    pub const fn on(self, date: LocalDate) -> LocalDateTime {
        LocalDateTime::from_parts(date, self)
    }

    /// Returns the time `nanos` later, where `nanos` is in
    /// `0..NANOS_PER_DAY`.
    #[inline]
    fn plus_nanos_wrapping(self, nanos: i64) -> LocalTime {
        if nanos == 0 {
            return self;
        }
        let nod = (self.to_nano_of_day() + nanos) % NANOS_PER_DAY;
        LocalTime::of_nano_of_day_unchecked(nod)
    }

    /// Creates a time from a nanosecond of the day in `0..NANOS_PER_DAY`.
    #[inline]
    pub(crate) const fn of_nano_of_day_unchecked(nod: i64) -> LocalTime {
        let hour = (nod / NANOS_PER_HOUR) as i8;
        let minute = ((nod / NANOS_PER_MINUTE) % 60) as i8;
        let second = ((nod / NANOS_PER_SECOND) % 60) as i8;
        let nanosecond = (nod % NANOS_PER_SECOND) as i32;
        LocalTime { hour, minute, second, nanosecond }
    }
}

impl core::fmt::Debug for LocalTime {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl core::fmt::Display for LocalTime {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        DEFAULT_DATETIME_PRINTER
            .print_time(self, FmtWrite(f))
            .map_err(|_| core::fmt::Error)
    }
}

impl core::str::FromStr for LocalTime {
    type Err = Error;

    fn from_str(string: &str) -> Result<LocalTime, Error> {
        DEFAULT_DATETIME_PARSER.parse_time(string.as_bytes())
    }
}

crate::fmt::serde::impl_serde_str!(LocalTime, "a time string");

#[cfg(test)]
impl quickcheck::Arbitrary for LocalTime {
    fn arbitrary(g: &mut quickcheck::Gen) -> LocalTime {
        let nod = i64::arbitrary(g).rem_euclid(NANOS_PER_DAY);
        // Keep small fractions and whole seconds common, since they print
        // differently.
        let nod = match u8::arbitrary(g) % 3 {
            0 => nod - nod % NANOS_PER_SECOND,
            1 => nod - nod % 1_000_000,
            _ => nod,
        };
        LocalTime::of_nano_of_day_unchecked(nod)
    }
}
