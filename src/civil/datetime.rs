use crate::{
    civil::{LocalDate, LocalTime},
    error::{civil::Error as E, ErrorContext},
    fmt::{
        temporal::{DEFAULT_DATETIME_PARSER, DEFAULT_DATETIME_PRINTER},
        FmtWrite,
    },
    tz::ZoneOffset,
    util::{
        arith::Exact,
        b,
        common::{NANOS_PER_DAY, NANOS_PER_SECOND, SECONDS_PER_DAY},
    },
    Duration, Error, Field, OffsetDateTime, Period, Unit,
};

/// A date and a time of day without an offset, such as
/// `2008-06-30T11:30:59`.
///
/// This is the combination of a [`LocalDate`] and a [`LocalTime`]. Unlike a
/// `LocalTime` on its own, arithmetic with units of time carries into the
/// date:
///
/// ```
/// use isochron::civil::datetime;
///
/// let dt = datetime(2008, 12, 31, 23, 30, 0, 0);
/// assert_eq!(dt.plus_hours(1)?, datetime(2009, 1, 1, 0, 30, 0, 0));
/// assert_eq!(dt.plus_nanos(-1)?, datetime(2008, 12, 31, 23, 29, 59, 999_999_999));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// A local datetime is not a point in time. It needs an offset for that. See
/// [`LocalDateTime::at_offset`].
#[derive(Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct LocalDateTime {
    date: LocalDate,
    time: LocalTime,
}

impl LocalDateTime {
    /// The minimum supported datetime, `-999999999-01-01T00:00`.
    pub const MIN: LocalDateTime =
        LocalDateTime::from_parts(LocalDate::MIN, LocalTime::MIN);

    /// The maximum supported datetime,
    /// `+999999999-12-31T23:59:59.999999999`.
    pub const MAX: LocalDateTime =
        LocalDateTime::from_parts(LocalDate::MAX, LocalTime::MAX);

    /// Creates a new datetime from its components.
    ///
    /// # Errors
    ///
    /// This returns a range error when the components don't form a valid
    /// date or a valid time.
    #[inline]
    pub fn new(
        year: i32,
        month: i8,
        day: i8,
        hour: i8,
        minute: i8,
        second: i8,
        nanosecond: i32,
    ) -> Result<LocalDateTime, Error> {
        let date = LocalDate::new(year, month, day)?;
        let time = LocalTime::new(hour, minute, second, nanosecond)?;
        Ok(LocalDateTime { date, time })
    }

    /// Creates a new datetime in a `const` context.
    ///
    /// # Panics
    ///
    /// This panics when [`LocalDateTime::new`] would return an error.
    #[inline]
    pub const fn constant(
        year: i32,
        month: i8,
        day: i8,
        hour: i8,
        minute: i8,
        second: i8,
        nanosecond: i32,
    ) -> LocalDateTime {
        let date = LocalDate::constant(year, month, day);
        let time = LocalTime::constant(hour, minute, second, nanosecond);
        LocalDateTime { date, time }
    }

    /// Creates a datetime from a date and a time.
    #[inline]
    pub const fn from_parts(date: LocalDate, time: LocalTime) -> LocalDateTime {
        LocalDateTime { date, time }
    }

    /// Creates the local datetime at the given number of seconds since the
    /// Unix epoch, as seen at the given offset.
    ///
    /// # Errors
    ///
    /// This returns an error when `nanos` is not in `0..=999_999_999` or when
    /// the result is out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::{civil::{datetime, LocalDateTime}, tz::ZoneOffset};
    ///
    /// let offset = ZoneOffset::of_hours(1)?;
    /// let dt = LocalDateTime::of_epoch_second(1_214_821_859, 500, offset)?;
    /// assert_eq!(dt, datetime(2008, 6, 30, 11, 30, 59, 500));
    /// assert_eq!(dt.to_epoch_second(offset), 1_214_821_859);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn of_epoch_second(
        seconds: i64,
        nanos: i32,
        offset: ZoneOffset,
    ) -> Result<LocalDateTime, Error> {
        let nanos = b::SubsecNanosecond::check(nanos)?;
        let local = seconds.add_exact(
            i64::from(offset.total_seconds()),
            "adding offset to epoch seconds",
        )?;
        b::EpochDay::check(local.div_euclid(SECONDS_PER_DAY))?;
        Ok(LocalDateTime::of_local_second_unchecked(local, nanos))
    }

    /// Returns the number of seconds since the Unix epoch of this datetime
    /// interpreted at the given offset.
    ///
    /// This never overflows since the range of dates is far smaller than the
    /// range of an `i64` number of seconds.
    #[inline]
    pub const fn to_epoch_second(self, offset: ZoneOffset) -> i64 {
        self.date.to_epoch_day() * SECONDS_PER_DAY
            + self.time.to_second_of_day() as i64
            - offset.total_seconds() as i64
    }

    /// Returns the date part.
    #[inline]
    pub const fn date(self) -> LocalDate {
        self.date
    }

    /// Returns the time part.
    #[inline]
    pub const fn time(self) -> LocalTime {
        self.time
    }

    /// Returns the year.
    #[inline]
    pub const fn year(self) -> i32 {
        self.date.year()
    }

    /// Returns the month.
    #[inline]
    pub const fn month(self) -> i8 {
        self.date.month()
    }

    /// Returns the day of the month.
    #[inline]
    pub const fn day(self) -> i8 {
        self.date.day()
    }

    /// Returns the hour.
    #[inline]
    pub const fn hour(self) -> i8 {
        self.time.hour()
    }

    /// Returns the minute.
    #[inline]
    pub const fn minute(self) -> i8 {
        self.time.minute()
    }

    /// Returns the second.
    #[inline]
    pub const fn second(self) -> i8 {
        self.time.second()
    }

    /// Returns the fraction of the second in nanoseconds.
    #[inline]
    pub const fn nanosecond(self) -> i32 {
        self.time.nanosecond()
    }

    /// Returns this datetime with the date replaced.
    #[inline]
    pub const fn with_date(self, date: LocalDate) -> LocalDateTime {
        LocalDateTime { date, ..self }
    }

    /// Returns this datetime with the time replaced.
    #[inline]
    pub const fn with_time(self, time: LocalTime) -> LocalDateTime {
        LocalDateTime { time, ..self }
    }

    /// Returns this datetime with the year changed, clamping the day of the
    /// month.
    #[inline]
    pub fn with_year(self, year: i32) -> Result<LocalDateTime, Error> {
        Ok(self.with_date(self.date.with_year(year)?))
    }

    /// Returns this datetime with the month changed, clamping the day of the
    /// month.
    #[inline]
    pub fn with_month(self, month: i8) -> Result<LocalDateTime, Error> {
        Ok(self.with_date(self.date.with_month(month)?))
    }

    /// Returns this datetime with the day of the month changed.
    #[inline]
    pub fn with_day(self, day: i8) -> Result<LocalDateTime, Error> {
        Ok(self.with_date(self.date.with_day(day)?))
    }

    /// Returns this datetime with the day of the year changed.
    #[inline]
    pub fn with_day_of_year(self, day: i16) -> Result<LocalDateTime, Error> {
        Ok(self.with_date(self.date.with_day_of_year(day)?))
    }

    /// Returns this datetime with the hour changed.
    #[inline]
    pub fn with_hour(self, hour: i8) -> Result<LocalDateTime, Error> {
        Ok(self.with_time(self.time.with_hour(hour)?))
    }

    /// Returns this datetime with the minute changed.
    #[inline]
    pub fn with_minute(self, minute: i8) -> Result<LocalDateTime, Error> {
        Ok(self.with_time(self.time.with_minute(minute)?))
    }

    /// Returns this datetime with the second changed.
    #[inline]
    pub fn with_second(self, second: i8) -> Result<LocalDateTime, Error> {
        Ok(self.with_time(self.time.with_second(second)?))
    }

    /// Returns this datetime with the fraction of the second changed.
    #[inline]
    pub fn with_nanosecond(
        self,
        nanosecond: i32,
    ) -> Result<LocalDateTime, Error> {
        Ok(self.with_time(self.time.with_nanosecond(nanosecond)?))
    }

    /// Returns true if and only if the field can be read from a datetime.
    #[inline]
    pub fn is_supported(self, field: Field) -> bool {
        field.is_date_based() || field.is_time_based()
    }

    /// Returns the value of a field as a 32-bit integer.
    pub fn get(self, field: Field) -> Result<i32, Error> {
        if field.is_time_based() {
            self.time.get(field)
        } else if field.is_date_based() {
            self.date.get(field)
        } else {
            Err(Error::unsupported_field(field, "local datetime"))
        }
    }

    /// Returns the value of a field.
    pub fn get_long(self, field: Field) -> Result<i64, Error> {
        if field.is_time_based() {
            self.time.get_long(field)
        } else if field.is_date_based() {
            self.date.get_long(field)
        } else {
            Err(Error::unsupported_field(field, "local datetime"))
        }
    }

    /// Returns this datetime with a field set to a new value.
    ///
    /// See [`LocalDate::with_field`] and [`LocalTime::with_field`]. Setting a
    /// time field never changes the date.
    pub fn with_field(
        self,
        field: Field,
        value: i64,
    ) -> Result<LocalDateTime, Error> {
        if field.is_time_based() {
            Ok(self.with_time(self.time.with_field(field, value)?))
        } else if field.is_date_based() {
            Ok(self.with_date(self.date.with_field(field, value)?))
        } else {
            Err(Error::unsupported_field(field, "local datetime"))
        }
    }

    /// Returns this datetime `years` later, clamping the day of the month.
    #[inline]
    pub fn plus_years(self, years: i64) -> Result<LocalDateTime, Error> {
        Ok(self.with_date(self.date.plus_years(years)?))
    }

    /// Returns this datetime `months` later, clamping the day of the month.
    #[inline]
    pub fn plus_months(self, months: i64) -> Result<LocalDateTime, Error> {
        Ok(self.with_date(self.date.plus_months(months)?))
    }

    /// Returns this datetime `weeks` later.
    #[inline]
    pub fn plus_weeks(self, weeks: i64) -> Result<LocalDateTime, Error> {
        Ok(self.with_date(self.date.plus_weeks(weeks)?))
    }

    /// Returns this datetime `days` later.
    #[inline]
    pub fn plus_days(self, days: i64) -> Result<LocalDateTime, Error> {
        Ok(self.with_date(self.date.plus_days(days)?))
    }

    /// Returns this datetime `hours` later, carrying into the date.
    #[inline]
    pub fn plus_hours(self, hours: i64) -> Result<LocalDateTime, Error> {
        self.plus_nanos_wide(i128::from(hours) * 3_600 * 1_000_000_000)
    }

    /// Returns this datetime `minutes` later, carrying into the date.
    #[inline]
    pub fn plus_minutes(self, minutes: i64) -> Result<LocalDateTime, Error> {
        self.plus_nanos_wide(i128::from(minutes) * 60 * 1_000_000_000)
    }

    /// Returns this datetime `seconds` later, carrying into the date.
    #[inline]
    pub fn plus_seconds(self, seconds: i64) -> Result<LocalDateTime, Error> {
        self.plus_nanos_wide(i128::from(seconds) * 1_000_000_000)
    }

    /// Returns this datetime `nanos` later, carrying into the date.
    #[inline]
    pub fn plus_nanos(self, nanos: i64) -> Result<LocalDateTime, Error> {
        self.plus_nanos_wide(i128::from(nanos))
    }

    /// Returns this datetime `years` earlier.
    #[inline]
    pub fn minus_years(self, years: i64) -> Result<LocalDateTime, Error> {
        Ok(self.with_date(self.date.minus_years(years)?))
    }

    /// Returns this datetime `months` earlier.
    #[inline]
    pub fn minus_months(self, months: i64) -> Result<LocalDateTime, Error> {
        Ok(self.with_date(self.date.minus_months(months)?))
    }

    /// Returns this datetime `weeks` earlier.
    #[inline]
    pub fn minus_weeks(self, weeks: i64) -> Result<LocalDateTime, Error> {
        Ok(self.with_date(self.date.minus_weeks(weeks)?))
    }

    /// Returns this datetime `days` earlier.
    #[inline]
    pub fn minus_days(self, days: i64) -> Result<LocalDateTime, Error> {
        Ok(self.with_date(self.date.minus_days(days)?))
    }

    /// Returns this datetime `hours` earlier.
    #[inline]
    pub fn minus_hours(self, hours: i64) -> Result<LocalDateTime, Error> {
        self.plus_nanos_wide(-i128::from(hours) * 3_600 * 1_000_000_000)
    }

    /// Returns this datetime `minutes` earlier.
    #[inline]
    pub fn minus_minutes(self, minutes: i64) -> Result<LocalDateTime, Error> {
        self.plus_nanos_wide(-i128::from(minutes) * 60 * 1_000_000_000)
    }

    /// Returns this datetime `seconds` earlier.
    #[inline]
    pub fn minus_seconds(self, seconds: i64) -> Result<LocalDateTime, Error> {
        self.plus_nanos_wide(-i128::from(seconds) * 1_000_000_000)
    }

    /// Returns this datetime `nanos` earlier.
    #[inline]
    pub fn minus_nanos(self, nanos: i64) -> Result<LocalDateTime, Error> {
        self.plus_nanos_wide(-i128::from(nanos))
    }

    /// Adds a duration to this datetime.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::{civil::datetime, Duration};
    ///
    /// let dt = datetime(2008, 6, 30, 23, 59, 59, 0);
    /// let dur = Duration::of_seconds_and_adjustment(1, 5)?;
    /// assert_eq!(dt.plus(dur)?, datetime(2008, 7, 1, 0, 0, 0, 5));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn plus(self, duration: Duration) -> Result<LocalDateTime, Error> {
        self.plus_nanos_wide(duration.to_nanos_wide())
            .context(E::FailedAddDuration)
    }

    /// Subtracts a duration from this datetime.
    #[inline]
    pub fn minus(self, duration: Duration) -> Result<LocalDateTime, Error> {
        self.plus_nanos_wide(-duration.to_nanos_wide())
            .context(E::FailedAddDuration)
    }

    /// Adds a period to the date of this datetime. The time is unchanged.
    #[inline]
    pub fn plus_period(self, period: Period) -> Result<LocalDateTime, Error> {
        Ok(self.with_date(period.add_to(self.date)?))
    }

    /// Subtracts a period from the date of this datetime. The time is
    /// unchanged.
    #[inline]
    pub fn minus_period(self, period: Period) -> Result<LocalDateTime, Error> {
        Ok(self.with_date(period.subtract_from(self.date)?))
    }

    /// Returns true if and only if amounts of the given unit can be added.
    ///
    /// Every unit except [`Unit::Forever`] is supported.
    #[inline]
    pub fn is_supported_unit(self, unit: Unit) -> bool {
        unit != Unit::Forever
    }

    /// Adds an amount of the given unit.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::{civil::datetime, Unit};
    ///
    /// let dt = datetime(2008, 6, 30, 18, 0, 0, 0);
    /// assert_eq!(dt.plus_unit(1, Unit::HalfDay)?, datetime(2008, 7, 1, 6, 0, 0, 0));
    /// assert_eq!(dt.plus_unit(1, Unit::Month)?, datetime(2008, 7, 30, 18, 0, 0, 0));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn plus_unit(
        self,
        amount: i64,
        unit: Unit,
    ) -> Result<LocalDateTime, Error> {
        if unit.is_time_based() {
            let Some(nanos) = unit.nanoseconds() else {
                return Err(Error::unsupported_unit(unit, "local datetime"));
            };
            return self
                .plus_nanos_wide(i128::from(amount) * i128::from(nanos))
                .with_context(|| E::FailedAddUnit { unit });
        }
        if !self.is_supported_unit(unit) {
            return Err(Error::unsupported_unit(unit, "local datetime"));
        }
        Ok(self.with_date(self.date.plus_unit(amount, unit)?))
    }

    /// Returns the number of whole units from this datetime until `end`.
    ///
    /// For units of days and bigger, a partial day at the end doesn't count.
    /// So there are zero days from `2008-06-30T12:00` until
    /// `2008-07-01T11:59`.
    ///
    /// # Errors
    ///
    /// This returns an error for [`Unit::Forever`], and when the number of
    /// nanoseconds between the two datetimes doesn't fit in an `i64`.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::{civil::datetime, Unit};
    ///
    /// let start = datetime(2008, 6, 30, 12, 0, 0, 0);
    /// let end = datetime(2008, 7, 1, 11, 59, 0, 0);
    /// assert_eq!(start.until(end, Unit::Day)?, 0);
    /// assert_eq!(start.until(end, Unit::Hour)?, 23);
    /// assert_eq!(end.until(start, Unit::Minute)?, -1_439);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn until(self, end: LocalDateTime, unit: Unit) -> Result<i64, Error> {
        if unit.is_time_based() {
            let Some(unit_nanos) = unit.nanoseconds() else {
                return Err(Error::unsupported_unit(unit, "local datetime"));
            };
            let amount = (end.to_nanos_wide() - self.to_nanos_wide())
                / i128::from(unit_nanos);
            return i64::try_from(amount).map_err(|_| {
                Error::overflow("computing time between datetimes")
                    .context(E::FailedUntil { unit })
            });
        }
        if !self.is_supported_unit(unit) {
            return Err(Error::unsupported_unit(unit, "local datetime"));
        }
        let mut end_date = end.date;
        if end_date > self.date && end.time < self.time {
            end_date = end_date.minus_days(1)?;
        } else if end_date < self.date && end.time > self.time {
            end_date = end_date.plus_days(1)?;
        }
        self.date.until(end_date, unit)
    }

    /// Truncates the time of this datetime to the given unit.
    ///
    /// # Errors
    ///
    /// This returns an unsupported error for units bigger than a day.
    #[inline]
    pub fn truncated_to(self, unit: Unit) -> Result<LocalDateTime, Error> {
        Ok(self.with_time(self.time.truncated_to(unit)?))
    }

    /// Attaches an offset to this datetime.
    #[inline]
    pub const fn at_offset(self, offset: ZoneOffset) -> OffsetDateTime {
        OffsetDateTime::from_parts(self, offset)
    }

    /// Like `of_epoch_second`, but for a local second and a fraction that
    /// are known to be in range.
    pub(crate) const fn of_local_second_unchecked(
        local: i64,
        nanos: i32,
    ) -> LocalDateTime {
        let date =
            LocalDate::from_epoch_day_unchecked(local.div_euclid(SECONDS_PER_DAY));
        let nod = local.rem_euclid(SECONDS_PER_DAY) * NANOS_PER_SECOND
            + nanos as i64;
        LocalDateTime { date, time: LocalTime::of_nano_of_day_unchecked(nod) }
    }

    /// Adds nanoseconds, carrying whole days into the date.
    fn plus_nanos_wide(self, nanos: i128) -> Result<LocalDateTime, Error> {
        if nanos == 0 {
            return Ok(self);
        }
        let npd = i128::from(NANOS_PER_DAY);
        let total = i128::from(self.time.to_nano_of_day()) + nanos;
        let days = i64::try_from(total.div_euclid(npd))
            .map_err(|_| Error::overflow("adding time to datetime"))?;
        let nod = total.rem_euclid(npd) as i64;
        let date = self.date.plus_days(days)?;
        Ok(LocalDateTime { date, time: LocalTime::of_nano_of_day_unchecked(nod) })
    }

    /// Returns the number of nanoseconds since `1970-01-01T00:00`.
    fn to_nanos_wide(self) -> i128 {
        i128::from(self.date.to_epoch_day()) * i128::from(NANOS_PER_DAY)
            + i128::from(self.time.to_nano_of_day())
    }
}

impl core::fmt::Debug for LocalDateTime {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl core::fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        DEFAULT_DATETIME_PRINTER
            .print_datetime(self, FmtWrite(f))
            .map_err(|_| core::fmt::Error)
    }
}

impl core::str::FromStr for LocalDateTime {
    type Err = Error;

    fn from_str(string: &str) -> Result<LocalDateTime, Error> {
        DEFAULT_DATETIME_PARSER.parse_datetime(string.as_bytes())
    }
}

impl From<LocalDateTime> for LocalDate {
    fn from(dt: LocalDateTime) -> LocalDate {
        dt.date()
    }
}

impl From<LocalDateTime> for LocalTime {
    fn from(dt: LocalDateTime) -> LocalTime {
        dt.time()
    }
}

crate::fmt::serde::impl_serde_str!(LocalDateTime, "a datetime string");

#[cfg(test)]
impl quickcheck::Arbitrary for LocalDateTime {
    fn arbitrary(g: &mut quickcheck::Gen) -> LocalDateTime {
        LocalDateTime::from_parts(
            LocalDate::arbitrary(g),
            LocalTime::arbitrary(g),
        )
    }
}
