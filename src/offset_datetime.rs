use core::cmp::Ordering;

use crate::{
    civil::{LocalDate, LocalDateTime, LocalTime, Weekday},
    clock::Clock,
    error::{offset_datetime::Error as E, ErrorContext},
    fmt::{
        strtime,
        temporal::{DEFAULT_DATETIME_PARSER, DEFAULT_DATETIME_PRINTER},
        FmtWrite,
    },
    tz::{ZoneId, ZoneOffset, ZoneRulesProvider},
    util::b,
    Duration, Error, Field, Instant, Period, Unit, ZonedDateTime,
};

/// A datetime with a fixed offset from UTC, such as
/// `2008-06-30T11:30:59+01:00`.
///
/// An offset datetime is a [`LocalDateTime`] paired with a [`ZoneOffset`].
/// Unlike a local datetime, it identifies a precise [`Instant`]. The local
/// datetime is always kept as given, so `11:30+01:00` and `10:30Z` are
/// different values that identify the same instant.
///
/// # Equality and ordering
///
/// `PartialEq`, `Eq` and `Hash` are structural: both the local datetime and
/// the offset must be equal. Use [`OffsetDateTime::is_equal`] to check
/// whether two values identify the same instant.
///
/// `Ord` sorts by instant first, and then by local datetime. So it is
/// consistent with `Eq`, and the value with the bigger offset sorts first
/// among values for the same instant:
///
/// ```
/// use isochron::OffsetDateTime;
///
/// let a: OffsetDateTime = "2008-06-30T10:00+01:00".parse()?;
/// let b: OffsetDateTime = "2008-06-30T11:00+02:00".parse()?;
/// assert!(a < b);
/// assert!(a.is_equal(&b));
/// assert_eq!(a.to_instant()?, b.to_instant()?);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Arithmetic
///
/// Adding a [`Duration`] or units of time operates on the local datetime,
/// carrying into the date. The offset never changes. Adding a [`Period`]
/// only changes the date.
///
/// ```
/// use isochron::{civil::datetime, tz, Duration, Period};
///
/// let odt = datetime(2008, 1, 31, 23, 0, 0, 0).at_offset(tz::offset(1));
/// assert_eq!(odt.plus(Duration::of_hours(2)?)?.to_string(), "2008-02-01T01:00+01:00");
/// assert_eq!(odt.plus_period(Period::months(1))?.to_string(), "2008-02-29T23:00+01:00");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct OffsetDateTime {
    datetime: LocalDateTime,
    offset: ZoneOffset,
}

impl OffsetDateTime {
    /// The minimum offset datetime, `-999999999-01-01T00:00+18:00`.
    pub const MIN: OffsetDateTime =
        OffsetDateTime::from_parts(LocalDateTime::MIN, ZoneOffset::MAX);

    /// The maximum offset datetime,
    /// `+999999999-12-31T23:59:59.999999999-18:00`.
    pub const MAX: OffsetDateTime =
        OffsetDateTime::from_parts(LocalDateTime::MAX, ZoneOffset::MIN);

    /// Creates a new offset datetime from a date, a time and an offset.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::{civil::{date, time}, tz, OffsetDateTime};
    ///
    /// let odt = OffsetDateTime::new(
    ///     date(2008, 6, 30),
    ///     time(11, 30, 59, 500),
    ///     tz::offset(1),
    /// );
    /// assert_eq!(odt.to_string(), "2008-06-30T11:30:59.000000500+01:00");
    /// ```
    #[inline]
    pub const fn new(
        date: LocalDate,
        time: LocalTime,
        offset: ZoneOffset,
    ) -> OffsetDateTime {
        OffsetDateTime::from_parts(LocalDateTime::from_parts(date, time), offset)
    }

    /// Creates a new offset datetime from a local datetime and an offset.
    #[inline]
    pub const fn from_parts(
        datetime: LocalDateTime,
        offset: ZoneOffset,
    ) -> OffsetDateTime {
        OffsetDateTime { datetime, offset }
    }

    /// Returns the given instant as seen at the given offset.
    ///
    /// This never fails, since every instant can be represented at every
    /// offset.
    #[inline]
    pub fn of_instant(instant: Instant, offset: ZoneOffset) -> OffsetDateTime {
        instant.at_offset(offset)
    }

    /// Returns the current datetime from the given clock, at the clock's
    /// offset.
    #[inline]
    pub fn now(clock: &impl Clock) -> OffsetDateTime {
        OffsetDateTime::of_instant(clock.instant(), clock.offset())
    }

    /// Returns the local datetime.
    #[inline]
    pub const fn datetime(self) -> LocalDateTime {
        self.datetime
    }

    /// Returns the local date.
    #[inline]
    pub const fn date(self) -> LocalDate {
        self.datetime.date()
    }

    /// Returns the local time.
    #[inline]
    pub const fn time(self) -> LocalTime {
        self.datetime.time()
    }

    /// Returns the offset.
    #[inline]
    pub const fn offset(self) -> ZoneOffset {
        self.offset
    }

    /// Returns the year.
    #[inline]
    pub const fn year(self) -> i32 {
        self.datetime.year()
    }

    /// Returns the month, `1..=12`.
    #[inline]
    pub const fn month(self) -> i8 {
        self.datetime.month()
    }

    /// Returns the day of the month.
    #[inline]
    pub const fn day(self) -> i8 {
        self.datetime.day()
    }

    /// Returns the day of the week.
    #[inline]
    pub const fn weekday(self) -> Weekday {
        self.date().weekday()
    }

    /// Returns the day of the year, `1..=366`.
    #[inline]
    pub const fn day_of_year(self) -> i16 {
        self.date().day_of_year()
    }

    /// Returns the hour, `0..=23`.
    #[inline]
    pub const fn hour(self) -> i8 {
        self.datetime.hour()
    }

    /// Returns the minute, `0..=59`.
    #[inline]
    pub const fn minute(self) -> i8 {
        self.datetime.minute()
    }

    /// Returns the second, `0..=59`.
    #[inline]
    pub const fn second(self) -> i8 {
        self.datetime.second()
    }

    /// Returns the fraction of the second in nanoseconds.
    #[inline]
    pub const fn nanosecond(self) -> i32 {
        self.datetime.nanosecond()
    }

    /// Returns true if the field can be read from an offset datetime.
    ///
    /// Every date and time field is supported, along with
    /// [`Field::InstantSeconds`] and [`Field::OffsetSeconds`].
    #[inline]
    pub fn is_supported(self, field: Field) -> bool {
        matches!(field, Field::InstantSeconds | Field::OffsetSeconds)
            || self.datetime.is_supported(field)
    }

    /// Returns the value of a field as a 32-bit integer.
    ///
    /// # Errors
    ///
    /// This returns an unsupported error for fields whose values don't fit
    /// in 32 bits. These are [`Field::InstantSeconds`], [`Field::EpochDay`],
    /// [`Field::ProlepticMonth`], [`Field::NanoOfDay`] and
    /// [`Field::MicroOfDay`]. Use [`OffsetDateTime::get_long`] for those.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::{civil::datetime, tz, Field};
    ///
    /// let odt = datetime(2008, 6, 30, 11, 30, 59, 0).at_offset(tz::offset(1));
    /// assert_eq!(odt.get(Field::HourOfDay)?, 11);
    /// assert_eq!(odt.get(Field::OffsetSeconds)?, 3_600);
    /// assert!(odt.get(Field::InstantSeconds).unwrap_err().is_unsupported());
    /// assert_eq!(odt.get_long(Field::InstantSeconds)?, 1_214_821_859);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn get(self, field: Field) -> Result<i32, Error> {
        match field {
            Field::InstantSeconds => Err(Error::field_too_large(field)),
            Field::OffsetSeconds => Ok(self.offset.total_seconds()),
            _ if self.datetime.is_supported(field) => self.datetime.get(field),
            _ => Err(Error::unsupported_field(field, "offset datetime")),
        }
    }

    /// Returns the value of a field.
    pub fn get_long(self, field: Field) -> Result<i64, Error> {
        match field {
            Field::InstantSeconds => Ok(self.to_epoch_second()),
            Field::OffsetSeconds => Ok(i64::from(self.offset.total_seconds())),
            _ if self.datetime.is_supported(field) => {
                self.datetime.get_long(field)
            }
            _ => Err(Error::unsupported_field(field, "offset datetime")),
        }
    }

    /// Returns true if amounts of the given unit can be added. Every unit
    /// except [`Unit::Forever`] is supported.
    #[inline]
    pub fn is_supported_unit(self, unit: Unit) -> bool {
        self.datetime.is_supported_unit(unit)
    }

    /// Returns this value with the date replaced.
    #[inline]
    pub const fn with_date(self, date: LocalDate) -> OffsetDateTime {
        OffsetDateTime::from_parts(self.datetime.with_date(date), self.offset)
    }

    /// Returns this value with the time replaced.
    #[inline]
    pub const fn with_time(self, time: LocalTime) -> OffsetDateTime {
        OffsetDateTime::from_parts(self.datetime.with_time(time), self.offset)
    }

    /// Returns this value with a field set to a new value.
    ///
    /// Setting [`Field::InstantSeconds`] keeps the offset and the fraction
    /// of the second. Setting [`Field::OffsetSeconds`] keeps the local
    /// datetime. Every other field is set on the local datetime.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::{civil::datetime, tz, Field};
    ///
    /// let odt = datetime(2008, 6, 30, 11, 30, 0, 0).at_offset(tz::offset(1));
    /// let got = odt.with_field(Field::OffsetSeconds, -3_600)?;
    /// assert_eq!(got.to_string(), "2008-06-30T11:30-01:00");
    /// let got = odt.with_field(Field::InstantSeconds, 0)?;
    /// assert_eq!(got.to_string(), "1970-01-01T01:00+01:00");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn with_field(
        self,
        field: Field,
        value: i64,
    ) -> Result<OffsetDateTime, Error> {
        match field {
            Field::InstantSeconds => {
                let instant = Instant::of_epoch_second_and_adjustment(
                    value,
                    i64::from(self.nanosecond()),
                )?;
                Ok(OffsetDateTime::of_instant(instant, self.offset))
            }
            Field::OffsetSeconds => {
                let seconds = b::OffsetTotalSeconds::check(value)?;
                let offset = ZoneOffset::of_total_seconds(seconds)?;
                Ok(self.with_offset_same_local(offset))
            }
            _ if self.datetime.is_supported(field) => {
                Ok(self.with_datetime(self.datetime.with_field(field, value)?))
            }
            _ => Err(Error::unsupported_field(field, "offset datetime")),
        }
    }

    /// Returns this value with the year changed, clamping the day of the
    /// month.
    #[inline]
    pub fn with_year(self, year: i32) -> Result<OffsetDateTime, Error> {
        Ok(self.with_datetime(self.datetime.with_year(year)?))
    }

    /// Returns this value with the month changed, clamping the day of the
    /// month.
    #[inline]
    pub fn with_month(self, month: i8) -> Result<OffsetDateTime, Error> {
        Ok(self.with_datetime(self.datetime.with_month(month)?))
    }

    /// Returns this value with the day of the month changed.
    #[inline]
    pub fn with_day(self, day: i8) -> Result<OffsetDateTime, Error> {
        Ok(self.with_datetime(self.datetime.with_day(day)?))
    }

    /// Returns this value with the day of the year changed.
    #[inline]
    pub fn with_day_of_year(self, day: i16) -> Result<OffsetDateTime, Error> {
        Ok(self.with_datetime(self.datetime.with_day_of_year(day)?))
    }

    /// Returns this value with the hour changed.
    #[inline]
    pub fn with_hour(self, hour: i8) -> Result<OffsetDateTime, Error> {
        Ok(self.with_datetime(self.datetime.with_hour(hour)?))
    }

    /// Returns this value with the minute changed.
    #[inline]
    pub fn with_minute(self, minute: i8) -> Result<OffsetDateTime, Error> {
        Ok(self.with_datetime(self.datetime.with_minute(minute)?))
    }

    /// Returns this value with the second changed.
    #[inline]
    pub fn with_second(self, second: i8) -> Result<OffsetDateTime, Error> {
        Ok(self.with_datetime(self.datetime.with_second(second)?))
    }

    /// Returns this value with the fraction of the second changed.
    #[inline]
    pub fn with_nanosecond(
        self,
        nanosecond: i32,
    ) -> Result<OffsetDateTime, Error> {
        Ok(self.with_datetime(self.datetime.with_nanosecond(nanosecond)?))
    }

    /// Returns this value with the offset replaced, keeping the local
    /// datetime. The result generally identifies a different instant.
    #[inline]
    pub const fn with_offset_same_local(
        self,
        offset: ZoneOffset,
    ) -> OffsetDateTime {
        OffsetDateTime::from_parts(self.datetime, offset)
    }

    /// Returns this value with the offset replaced, adjusting the local
    /// datetime so that the result identifies the same instant.
    ///
    /// # Errors
    ///
    /// This returns an error when the adjusted local datetime is out of
    /// range. This can only happen near [`LocalDateTime::MIN`] and
    /// [`LocalDateTime::MAX`].
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::{civil::datetime, tz, OffsetDateTime};
    ///
    /// let odt = datetime(2008, 6, 30, 23, 30, 0, 0).at_offset(tz::offset(-2));
    /// let got = odt.with_offset_same_instant(tz::offset(2))?;
    /// assert_eq!(got.to_string(), "2008-07-01T03:30+02:00");
    /// assert!(got.is_equal(&odt));
    ///
    /// assert!(OffsetDateTime::MAX.with_offset_same_instant(tz::offset(0)).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn with_offset_same_instant(
        self,
        offset: ZoneOffset,
    ) -> Result<OffsetDateTime, Error> {
        if offset == self.offset {
            return Ok(self);
        }
        let datetime = LocalDateTime::of_epoch_second(
            self.to_epoch_second(),
            self.nanosecond(),
            offset,
        )
        .context(E::FailedWithOffset)?;
        Ok(OffsetDateTime::from_parts(datetime, offset))
    }

    /// Truncates the time to the given unit.
    ///
    /// # Errors
    ///
    /// This returns an unsupported error for units bigger than a day.
    #[inline]
    pub fn truncated_to(self, unit: Unit) -> Result<OffsetDateTime, Error> {
        Ok(self.with_datetime(self.datetime.truncated_to(unit)?))
    }

    /// Adds a duration.
    ///
    /// # Errors
    ///
    /// This returns an error when the local datetime would be out of range.
    pub fn plus(self, duration: Duration) -> Result<OffsetDateTime, Error> {
        let datetime =
            self.datetime.plus(duration).context(E::FailedAddDuration)?;
        Ok(self.with_datetime(datetime))
    }

    /// Subtracts a duration.
    pub fn minus(self, duration: Duration) -> Result<OffsetDateTime, Error> {
        let datetime =
            self.datetime.minus(duration).context(E::FailedAddDuration)?;
        Ok(self.with_datetime(datetime))
    }

    /// Adds a period to the date. The time and offset are unchanged.
    #[inline]
    pub fn plus_period(self, period: Period) -> Result<OffsetDateTime, Error> {
        Ok(self.with_datetime(self.datetime.plus_period(period)?))
    }

    /// Subtracts a period from the date. The time and offset are unchanged.
    #[inline]
    pub fn minus_period(
        self,
        period: Period,
    ) -> Result<OffsetDateTime, Error> {
        Ok(self.with_datetime(self.datetime.minus_period(period)?))
    }

    /// Adds an amount of the given unit.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::{civil::datetime, tz, Unit};
    ///
    /// let odt = datetime(2008, 6, 30, 11, 30, 0, 0).at_offset(tz::offset(1));
    /// let got = odt.plus_unit(3, Unit::Decade)?;
    /// assert_eq!(got.to_string(), "2038-06-30T11:30+01:00");
    /// assert!(odt.plus_unit(1, Unit::Forever).unwrap_err().is_unsupported());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn plus_unit(
        self,
        amount: i64,
        unit: Unit,
    ) -> Result<OffsetDateTime, Error> {
        if !self.is_supported_unit(unit) {
            return Err(Error::unsupported_unit(unit, "offset datetime"));
        }
        let datetime = self
            .datetime
            .plus_unit(amount, unit)
            .with_context(|| E::FailedAddUnit { unit })?;
        Ok(self.with_datetime(datetime))
    }

    /// Subtracts an amount of the given unit.
    pub fn minus_unit(
        self,
        amount: i64,
        unit: Unit,
    ) -> Result<OffsetDateTime, Error> {
        if amount == i64::MIN {
            return self.plus_unit(i64::MAX, unit)?.plus_unit(1, unit);
        }
        self.plus_unit(-amount, unit)
    }

    /// Returns this value `years` later, clamping the day of the month.
    #[inline]
    pub fn plus_years(self, years: i64) -> Result<OffsetDateTime, Error> {
        Ok(self.with_datetime(self.datetime.plus_years(years)?))
    }

    /// Returns this value `months` later, clamping the day of the month.
    #[inline]
    pub fn plus_months(self, months: i64) -> Result<OffsetDateTime, Error> {
        Ok(self.with_datetime(self.datetime.plus_months(months)?))
    }

    /// Returns this value `weeks` later.
    #[inline]
    pub fn plus_weeks(self, weeks: i64) -> Result<OffsetDateTime, Error> {
        Ok(self.with_datetime(self.datetime.plus_weeks(weeks)?))
    }

    /// Returns this value `days` later.
    #[inline]
    pub fn plus_days(self, days: i64) -> Result<OffsetDateTime, Error> {
        Ok(self.with_datetime(self.datetime.plus_days(days)?))
    }

    /// Returns this value `hours` later.
    #[inline]
    pub fn plus_hours(self, hours: i64) -> Result<OffsetDateTime, Error> {
        Ok(self.with_datetime(self.datetime.plus_hours(hours)?))
    }

    /// Returns this value `minutes` later.
    #[inline]
    pub fn plus_minutes(self, minutes: i64) -> Result<OffsetDateTime, Error> {
        Ok(self.with_datetime(self.datetime.plus_minutes(minutes)?))
    }

    /// Returns this value `seconds` later.
    #[inline]
    pub fn plus_seconds(self, seconds: i64) -> Result<OffsetDateTime, Error> {
        Ok(self.with_datetime(self.datetime.plus_seconds(seconds)?))
    }

    /// Returns this value `nanos` later.
    #[inline]
    pub fn plus_nanos(self, nanos: i64) -> Result<OffsetDateTime, Error> {
        Ok(self.with_datetime(self.datetime.plus_nanos(nanos)?))
    }

    /// Returns this value `years` earlier, clamping the day of the month.
    #[inline]
    pub fn minus_years(self, years: i64) -> Result<OffsetDateTime, Error> {
        Ok(self.with_datetime(self.datetime.minus_years(years)?))
    }

    /// Returns this value `months` earlier, clamping the day of the month.
    #[inline]
    pub fn minus_months(self, months: i64) -> Result<OffsetDateTime, Error> {
        Ok(self.with_datetime(self.datetime.minus_months(months)?))
    }

    /// Returns this value `weeks` earlier.
    #[inline]
    pub fn minus_weeks(self, weeks: i64) -> Result<OffsetDateTime, Error> {
        Ok(self.with_datetime(self.datetime.minus_weeks(weeks)?))
    }

    /// Returns this value `days` earlier.
    #[inline]
    pub fn minus_days(self, days: i64) -> Result<OffsetDateTime, Error> {
        Ok(self.with_datetime(self.datetime.minus_days(days)?))
    }

    /// Returns this value `hours` earlier.
    #[inline]
    pub fn minus_hours(self, hours: i64) -> Result<OffsetDateTime, Error> {
        Ok(self.with_datetime(self.datetime.minus_hours(hours)?))
    }

    /// Returns this value `minutes` earlier.
    #[inline]
    pub fn minus_minutes(
        self,
        minutes: i64,
    ) -> Result<OffsetDateTime, Error> {
        Ok(self.with_datetime(self.datetime.minus_minutes(minutes)?))
    }

    /// Returns this value `seconds` earlier.
    #[inline]
    pub fn minus_seconds(
        self,
        seconds: i64,
    ) -> Result<OffsetDateTime, Error> {
        Ok(self.with_datetime(self.datetime.minus_seconds(seconds)?))
    }

    /// Returns this value `nanos` earlier.
    #[inline]
    pub fn minus_nanos(self, nanos: i64) -> Result<OffsetDateTime, Error> {
        Ok(self.with_datetime(self.datetime.minus_nanos(nanos)?))
    }

    /// Returns the number of whole units from this value until `end`.
    ///
    /// `end` is first converted to the offset of this value, so that the
    /// result only depends on the two instants (and, for date units, on this
    /// value's offset).
    ///
    /// # Errors
    ///
    /// This returns an unsupported error for [`Unit::Forever`].
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::{OffsetDateTime, Unit};
    ///
    /// let start: OffsetDateTime = "2008-06-30T11:30+01:00".parse()?;
    /// let end: OffsetDateTime = "2008-07-01T11:29+02:00".parse()?;
    /// assert_eq!(start.until(&end, Unit::Hour)?, 22);
    /// assert_eq!(start.until(&end, Unit::Day)?, 0);
    /// assert_eq!(end.until(&start, Unit::Minute)?, -1_379);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn until(
        &self,
        end: &OffsetDateTime,
        unit: Unit,
    ) -> Result<i64, Error> {
        if !self.is_supported_unit(unit) {
            return Err(Error::unsupported_unit(unit, "offset datetime"));
        }
        let end = end
            .with_offset_same_instant(self.offset)
            .with_context(|| E::FailedUntil { unit })?;
        self.datetime
            .until(end.datetime, unit)
            .with_context(|| E::FailedUntil { unit })
    }

    /// Returns the number of seconds since the Unix epoch.
    ///
    /// This is `epoch_day * 86400 + second_of_day - offset_seconds`. It
    /// never fails.
    #[inline]
    pub const fn to_epoch_second(self) -> i64 {
        self.datetime.to_epoch_second(self.offset)
    }

    /// Returns the instant identified by this value.
    ///
    /// # Errors
    ///
    /// This returns a range error within 18 hours of
    /// [`LocalDateTime::MIN`] and [`LocalDateTime::MAX`], where the instant
    /// would be outside of [`Instant::MIN`] and [`Instant::MAX`].
    #[inline]
    pub fn to_instant(self) -> Result<Instant, Error> {
        self.offset.to_instant(self.datetime)
    }

    /// Returns a zoned datetime whose zone is this value's offset.
    #[inline]
    pub fn to_zoned(self) -> ZonedDateTime {
        ZonedDateTime::from_parts_unchecked(self, ZoneId::fixed(self.offset))
    }

    /// Returns true if both values identify the same instant. Unlike `==`,
    /// the local datetimes and offsets may differ.
    #[inline]
    pub fn is_equal(&self, other: &OffsetDateTime) -> bool {
        self.instant_key() == other.instant_key()
    }

    /// Returns true if this value identifies an instant before `other`.
    #[inline]
    pub fn is_before(&self, other: &OffsetDateTime) -> bool {
        self.instant_key() < other.instant_key()
    }

    /// Returns true if this value identifies an instant after `other`.
    #[inline]
    pub fn is_after(&self, other: &OffsetDateTime) -> bool {
        self.instant_key() > other.instant_key()
    }

    /// Returns the same instant in the given time zone.
    ///
    /// # Errors
    ///
    /// This returns an error when the provider doesn't know the zone, or
    /// when the datetime in that zone would be out of range.
    pub fn at_zone_same_instant(
        &self,
        zone: &ZoneId,
        provider: &dyn ZoneRulesProvider,
    ) -> Result<ZonedDateTime, Error> {
        let instant = self.to_instant().context(E::FailedAtZone)?;
        ZonedDateTime::of_instant(instant, zone, provider)
            .context(E::FailedAtZone)
    }

    /// Returns the same local datetime in the given time zone, keeping this
    /// value's offset where possible.
    ///
    /// When the local datetime falls in a gap, it is moved forward by the
    /// length of the gap and the offset after the gap is used. When it falls
    /// in a fold, this value's offset is kept if it's one of the two valid
    /// offsets. Otherwise, the earlier offset is used.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    ///
    /// use isochron::{
    ///     civil::datetime,
    ///     tz::{self, RulesMap, Transition, TransitionRules, ZoneId},
    /// };
    ///
    /// let (cet, cest) = (tz::offset(1), tz::offset(2));
    /// let paris = TransitionRules::new(cet, [
    ///     Transition::new("2008-03-30T01:00Z".parse()?, cet, cest)?,
    ///     Transition::new("2008-10-26T01:00Z".parse()?, cest, cet)?,
    /// ])?;
    /// let mut provider = RulesMap::new();
    /// provider.insert("Europe/Paris", Arc::new(paris));
    /// let zone = ZoneId::region("Europe/Paris")?;
    ///
    /// // In the gap.
    /// let odt = datetime(2008, 3, 30, 2, 30, 0, 0).at_offset(cet);
    /// let zdt = odt.at_zone_similar_local(&zone, &provider)?;
    /// assert_eq!(zdt.to_string(), "2008-03-30T03:30+02:00[Europe/Paris]");
    ///
    /// // In the fold, keeping the later offset.
    /// let odt = datetime(2008, 10, 26, 2, 30, 0, 0).at_offset(cet);
    /// let zdt = odt.at_zone_similar_local(&zone, &provider)?;
    /// assert_eq!(zdt.to_string(), "2008-10-26T02:30+01:00[Europe/Paris]");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn at_zone_similar_local(
        &self,
        zone: &ZoneId,
        provider: &dyn ZoneRulesProvider,
    ) -> Result<ZonedDateTime, Error> {
        ZonedDateTime::of_local_preferred(
            self.datetime,
            zone,
            provider,
            Some(self.offset),
        )
        .context(E::FailedAtZone)
    }

    /// Returns a value that formats this datetime according to the given
    /// `strftime` style format string.
    ///
    /// See the [`strtime`](crate::fmt::strtime) module for the supported
    /// directives.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::{civil::datetime, tz};
    ///
    /// let odt = datetime(2010, 12, 3, 11, 30, 0, 0).at_offset(tz::offset(1));
    /// let got = odt.strftime("%a %e %b %Y %H:%M:%S %:z").to_string();
    /// assert_eq!(got, "Fri  3 Dec 2010 11:30:00 +01:00");
    /// ```
    #[inline]
    pub fn strftime<'f, F: 'f + ?Sized + AsRef<[u8]>>(
        &self,
        format: &'f F,
    ) -> strtime::Display<'f> {
        strtime::Display::new(format.as_ref(), strtime::BrokenDownTime::from(*self))
    }

    /// Parses an offset datetime from `input` according to the given
    /// `strptime` style format string.
    ///
    /// # Errors
    ///
    /// This returns an error when the input doesn't match the format, and a
    /// missing component error when the format doesn't contain a date, a
    /// time or an offset.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::OffsetDateTime;
    ///
    /// let odt = OffsetDateTime::strptime("%d/%m/%Y %H:%M %z", "03/12/2010 11:30 +0100")?;
    /// assert_eq!(odt.to_string(), "2010-12-03T11:30+01:00");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn strptime(
        format: impl AsRef<[u8]>,
        input: impl AsRef<[u8]>,
    ) -> Result<OffsetDateTime, Error> {
        strtime::parse(format, input)?.to_offset_datetime()
    }

    #[inline]
    const fn with_datetime(self, datetime: LocalDateTime) -> OffsetDateTime {
        OffsetDateTime::from_parts(datetime, self.offset)
    }

    #[inline]
    fn instant_key(&self) -> (i64, i32) {
        (self.to_epoch_second(), self.nanosecond())
    }
}

impl Ord for OffsetDateTime {
    fn cmp(&self, other: &OffsetDateTime) -> Ordering {
        self.instant_key()
            .cmp(&other.instant_key())
            .then_with(|| self.datetime.cmp(&other.datetime))
    }
}

impl PartialOrd for OffsetDateTime {
    fn partial_cmp(&self, other: &OffsetDateTime) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<OffsetDateTime> for LocalDateTime {
    #[inline]
    fn from(odt: OffsetDateTime) -> LocalDateTime {
        odt.datetime()
    }
}

impl TryFrom<OffsetDateTime> for Instant {
    type Error = Error;

    #[inline]
    fn try_from(odt: OffsetDateTime) -> Result<Instant, Error> {
        odt.to_instant()
    }
}

impl core::fmt::Debug for OffsetDateTime {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl core::fmt::Display for OffsetDateTime {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        DEFAULT_DATETIME_PRINTER
            .print_offset_datetime(self, FmtWrite(f))
            .map_err(|_| core::fmt::Error)
    }
}

impl core::str::FromStr for OffsetDateTime {
    type Err = Error;

    fn from_str(string: &str) -> Result<OffsetDateTime, Error> {
        DEFAULT_DATETIME_PARSER.parse_offset_datetime(string.as_bytes())
    }
}

crate::fmt::serde::impl_serde_str!(
    OffsetDateTime,
    "an ISO 8601 datetime string with an offset"
);

#[cfg(test)]
impl quickcheck::Arbitrary for OffsetDateTime {
    fn arbitrary(g: &mut quickcheck::Gen) -> OffsetDateTime {
        OffsetDateTime::from_parts(
            LocalDateTime::arbitrary(g),
            ZoneOffset::arbitrary(g),
        )
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use crate::{
        civil::{date, datetime, time},
        tz::{self, testdata},
    };

    use super::*;

    fn odt(s: &str) -> OffsetDateTime {
        s.parse().unwrap()
    }

    #[test]
    fn end_to_end() {
        let odt = OffsetDateTime::new(
            date(2008, 6, 30),
            time(11, 30, 59, 500),
            ZoneOffset::of_hours(1).unwrap(),
        );
        assert_eq!(odt.to_string(), "2008-06-30T11:30:59.000000500+01:00");
        assert_eq!(odt.to_string().parse::<OffsetDateTime>().unwrap(), odt);
    }

    #[test]
    fn ordering() {
        let a = odt("2008-06-30T10:00+01:00");
        let b = odt("2008-06-30T11:00+02:00");
        assert_eq!(a.cmp(&b), Ordering::Less);
        assert_eq!(a.to_instant().unwrap(), b.to_instant().unwrap());
        assert!(a.is_equal(&b));
        assert!(!a.is_before(&b) && !a.is_after(&b));
        assert_ne!(a, b);

        let c = odt("2008-06-30T11:00:00.000000001+02:00");
        assert!(b < c && b.is_before(&c) && c.is_after(&a));
    }

    #[test]
    fn fields() {
        let odt = odt("2008-06-30T11:30:59.5+01:00");
        assert!(odt.is_supported(Field::InstantSeconds));
        assert!(odt.is_supported(Field::OffsetSeconds));
        assert_eq!(odt.get_long(Field::InstantSeconds).unwrap(), 1_214_821_859);
        assert_eq!(odt.get(Field::MilliOfSecond).unwrap(), 500);
        for field in [
            Field::InstantSeconds,
            Field::EpochDay,
            Field::ProlepticMonth,
            Field::NanoOfDay,
            Field::MicroOfDay,
        ] {
            assert!(odt.get(field).unwrap_err().is_unsupported(), "{field:?}");
            assert!(odt.get_long(field).is_ok(), "{field:?}");
        }
        insta::assert_snapshot!(
            odt.get(Field::InstantSeconds).unwrap_err(),
            @"field `InstantSeconds` is too large for a 32-bit integer (use `get_long` instead)",
        );
        let got = odt.with_field(Field::DayOfMonth, 1).unwrap();
        assert_eq!(got.to_string(), "2008-06-01T11:30:59.500+01:00");
        assert!(odt.with_field(Field::OffsetSeconds, 64_801).unwrap_err().is_range());
    }

    #[test]
    fn offsets() {
        let odt = odt("2008-06-30T11:30+01:00");
        let same_local = odt.with_offset_same_local(tz::offset(-3));
        assert_eq!(same_local.to_string(), "2008-06-30T11:30-03:00");
        let same_instant = odt.with_offset_same_instant(tz::offset(-3)).unwrap();
        assert_eq!(same_instant.to_string(), "2008-06-30T07:30-03:00");
        assert!(same_instant.is_equal(&odt));

        let max = OffsetDateTime::MAX;
        assert_eq!(max.to_string(), "+999999999-12-31T23:59:59.999999999-18:00");
        insta::assert_snapshot!(
            max.with_offset_same_instant(ZoneOffset::UTC).unwrap_err(),
            @"failed to change offset while keeping the same instant: parameter 'epoch-day' with value 365241780472 is not in the required range of -365243219162..=365241780471",
        );
        assert!(max.to_instant().unwrap_err().is_range());
        assert!(OffsetDateTime::MIN.to_instant().unwrap_err().is_range());
        let near_max = max.with_offset_same_local(ZoneOffset::MAX);
        assert_eq!(near_max.to_instant().unwrap(), Instant::MAX);
    }

    #[test]
    fn arithmetic() {
        let start = odt("2008-06-30T23:30+01:00");
        let got = start.plus(Duration::of_minutes(45).unwrap()).unwrap();
        assert_eq!(got, odt("2008-07-01T00:15+01:00"));
        assert_eq!(got.minus(Duration::of_minutes(45).unwrap()).unwrap(), start);
        assert_eq!(start.plus_years(1).unwrap(), odt("2009-06-30T23:30+01:00"));
        assert_eq!(start.minus_unit(2, Unit::HalfDay).unwrap(), odt("2008-06-29T23:30+01:00"));
        assert_eq!(
            start.plus_period(Period::new(0, 1, 1)).unwrap(),
            odt("2008-07-31T23:30+01:00"),
        );
        assert_eq!(start.truncated_to(Unit::Hour).unwrap(), odt("2008-06-30T23:00+01:00"));

        let err = OffsetDateTime::MAX.plus_nanos(1).unwrap_err();
        assert!(err.is_range());
        let err = OffsetDateTime::MAX.plus(Duration::of_nanos(1)).unwrap_err();
        insta::assert_snapshot!(
            err,
            @"failed to add duration to offset datetime: failed to add duration to datetime: parameter 'epoch-day' with value 365241780472 is not in the required range of -365243219162..=365241780471",
        );
    }

    #[test]
    fn until() {
        let start = odt("2008-06-30T11:30+01:00");
        let end = odt("2010-06-30T12:30+02:00");
        assert_eq!(start.until(&end, Unit::Year).unwrap(), 2);
        assert_eq!(start.until(&end, Unit::Month).unwrap(), 24);
        assert_eq!(start.until(&end, Unit::Second).unwrap(), 63_072_000);
        let end = end.minus_nanos(1).unwrap();
        assert_eq!(start.until(&end, Unit::Year).unwrap(), 1);
        assert_eq!(end.until(&start, Unit::Month).unwrap(), -23);
        assert!(start.until(&end, Unit::Forever).unwrap_err().is_unsupported());
    }

    #[test]
    fn zones() {
        let _ = env_logger::try_init();

        let provider = testdata::provider();
        let paris = ZoneId::region("Europe/Paris").unwrap();
        let (cet, cest) = (tz::offset(1), tz::offset(2));

        let odt = datetime(2008, 6, 30, 11, 30, 0, 0).at_offset(cet);
        let zdt = odt.at_zone_same_instant(&paris, &provider).unwrap();
        assert_eq!(zdt.to_string(), "2008-06-30T12:30+02:00[Europe/Paris]");
        let zdt = odt.at_zone_similar_local(&paris, &provider).unwrap();
        assert_eq!(zdt.to_string(), "2008-06-30T11:30+02:00[Europe/Paris]");

        // Gap: moved forward by an hour, offset after.
        let odt = datetime(2008, 3, 30, 2, 0, 0, 0).at_offset(cet);
        let zdt = odt.at_zone_similar_local(&paris, &provider).unwrap();
        assert_eq!(zdt.to_string(), "2008-03-30T03:00+02:00[Europe/Paris]");

        // Fold: the offset is kept when valid, otherwise the earlier one.
        let local = datetime(2008, 10, 26, 2, 30, 0, 0);
        let zdt = local.at_offset(cest).at_zone_similar_local(&paris, &provider).unwrap();
        assert_eq!(zdt.offset(), cest);
        let zdt = local.at_offset(cet).at_zone_similar_local(&paris, &provider).unwrap();
        assert_eq!(zdt.offset(), cet);
        let zdt = local
            .at_offset(tz::offset(5))
            .at_zone_similar_local(&paris, &provider)
            .unwrap();
        assert_eq!(zdt.offset(), cest);

        let fixed = ZoneId::fixed(tz::offset(-5));
        let zdt = odt.at_zone_same_instant(&fixed, &provider).unwrap();
        assert_eq!(zdt.to_string(), "2008-03-29T20:00-05:00");

        let unknown = ZoneId::region("Europe/Berlin").unwrap();
        let err = odt.at_zone_same_instant(&unknown, &provider).unwrap_err();
        assert!(!err.is_unsupported());
        insta::assert_snapshot!(
            err,
            @"failed to convert offset datetime to zoned datetime: failed to find rules for time zone `Europe/Berlin`: time zone region `Europe/Berlin` is unknown to the rules provider",
        );
    }

    #[test]
    fn strtime() {
        let odt = datetime(2010, 12, 3, 11, 30, 0, 0).at_offset(tz::offset(-5));
        assert_eq!(odt.strftime("%Y-%m-%dT%H:%M:%S%z").to_string(), "2010-12-03T11:30:00-0500");
        let got = OffsetDateTime::strptime("%Y-%m-%dT%H:%M:%S%z", "2010-12-03T11:30:00-0500")
            .unwrap();
        assert_eq!(got, odt);

        let err = OffsetDateTime::strptime("%Y-%m-%d %H:%M", "2010-12-03 11:30").unwrap_err();
        assert!(err.is_missing());
    }

    #[test]
    fn now() {
        let instant = Instant::of_epoch_second(1_214_821_859).unwrap();
        let clock = crate::clock::FixedClock::new(instant, tz::offset(1));
        assert_eq!(OffsetDateTime::now(&clock), odt("2008-06-30T11:30:59+01:00"));
    }

    quickcheck::quickcheck! {
        fn prop_roundtrip(odt: OffsetDateTime) -> bool {
            odt.to_string().parse::<OffsetDateTime>().unwrap() == odt
        }

        fn prop_epoch_second(odt: OffsetDateTime) -> bool {
            let expected = odt.date().to_epoch_day() * 86_400
                + i64::from(odt.time().to_second_of_day())
                - i64::from(odt.offset().total_seconds());
            odt.to_epoch_second() == expected
        }

        fn prop_ordering_consistent_with_eq(a: OffsetDateTime, b: OffsetDateTime) -> bool {
            (a.cmp(&b) == Ordering::Equal) == (a == b)
        }
    }
}
