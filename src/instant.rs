use crate::{
    civil::LocalDateTime,
    clock::Clock,
    fmt::{
        temporal::{DEFAULT_DATETIME_PARSER, DEFAULT_DATETIME_PRINTER},
        FmtWrite,
    },
    tz::ZoneOffset,
    util::{b, common::NANOS_PER_SECOND},
    Duration, Error, OffsetDateTime,
};

/// An instant in time on the UTC time-line.
///
/// An `Instant` is a number of seconds, along with a fraction of a second in
/// nanoseconds, since the Unix epoch `1970-01-01T00:00Z`. Leap seconds are
/// not modeled.
///
/// The range of instants is the range of [`LocalDateTime`] narrowed by 18
/// hours at each end, i.e., `-999999999-01-01T18:00Z` to
/// `+999999999-12-31T05:59:59.999999999Z`. This ensures that every instant
/// can be viewed as a local datetime at every [`ZoneOffset`].
///
/// # Parsing and printing
///
/// An instant prints as a UTC datetime with a `Z` suffix. Seconds are always
/// written. When parsing, any offset is accepted and the instant is the
/// datetime at that offset:
///
/// ```
/// use isochron::Instant;
///
/// let instant: Instant = "2008-06-30T11:30:59+01:00".parse()?;
/// assert_eq!(instant.to_string(), "2008-06-30T10:30:59Z");
/// assert_eq!(instant.epoch_second(), 1_214_821_859);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Instant {
    second: i64,
    nanosecond: i32,
}

impl Instant {
    /// The minimum instant, `-999999999-01-01T18:00Z`.
    pub const MIN: Instant =
        Instant { second: b::InstantSecond::MIN, nanosecond: 0 };

    /// The maximum instant, `+999999999-12-31T05:59:59.999999999Z`.
    pub const MAX: Instant =
        Instant { second: b::InstantSecond::MAX, nanosecond: 999_999_999 };

    /// The Unix epoch, `1970-01-01T00:00Z`.
    pub const EPOCH: Instant = Instant { second: 0, nanosecond: 0 };

    /// Returns the current instant from the given clock.
    #[inline]
    pub fn now(clock: &impl Clock) -> Instant {
        clock.instant()
    }

    /// Creates an instant from a number of seconds since the Unix epoch.
    ///
    /// # Errors
    ///
    /// This returns a range error when the instant is outside of
    /// [`Instant::MIN`] and [`Instant::MAX`].
    #[inline]
    pub fn of_epoch_second(second: i64) -> Result<Instant, Error> {
        let second = b::InstantSecond::check(second)?;
        Ok(Instant { second, nanosecond: 0 })
    }

    /// Creates an instant from a number of seconds since the Unix epoch and
    /// an adjustment in nanoseconds.
    ///
    /// The adjustment may be any value, including negative values or values
    /// bigger than one second.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::Instant;
    ///
    /// let instant = Instant::of_epoch_second_and_adjustment(3, -1)?;
    /// assert_eq!(instant.epoch_second(), 2);
    /// assert_eq!(instant.nano(), 999_999_999);
    ///
    /// assert!(Instant::of_epoch_second_and_adjustment(i64::MAX, 0)
    ///     .unwrap_err()
    ///     .is_range());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn of_epoch_second_and_adjustment(
        second: i64,
        nanos_adjustment: i64,
    ) -> Result<Instant, Error> {
        let total = i128::from(second) * i128::from(NANOS_PER_SECOND)
            + i128::from(nanos_adjustment);
        Instant::from_nanos_wide(total)
    }

    /// Creates an instant from a number of milliseconds since the Unix
    /// epoch.
    #[inline]
    pub fn of_epoch_milli(millis: i64) -> Result<Instant, Error> {
        Instant::from_nanos_wide(i128::from(millis) * 1_000_000)
    }

    /// Returns the number of seconds since the Unix epoch. For instants
    /// before the epoch, this is negative and the nanoseconds are still
    /// positive.
    #[inline]
    pub const fn epoch_second(self) -> i64 {
        self.second
    }

    /// Returns the fraction of the second in nanoseconds, which is always in
    /// the range `0..=999_999_999`.
    #[inline]
    pub const fn nano(self) -> i32 {
        self.nanosecond
    }

    /// Returns the number of milliseconds since the Unix epoch, rounded
    /// toward negative infinity.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when the result doesn't fit in an
    /// `i64`. That is, for instants more than about 292 million years from
    /// the epoch.
    pub fn to_epoch_milli(self) -> Result<i64, Error> {
        let millis = self.to_nanos_wide().div_euclid(1_000_000);
        i64::try_from(millis)
            .map_err(|_| Error::overflow("converting instant to millis"))
    }

    /// Adds a duration to this instant.
    ///
    /// # Errors
    ///
    /// This returns a range error when the result is outside of
    /// [`Instant::MIN`] and [`Instant::MAX`].
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::{Duration, Instant};
    ///
    /// let instant = Instant::EPOCH.plus(Duration::of_millis(-1))?;
    /// assert_eq!(instant.to_string(), "1969-12-31T23:59:59.999Z");
    /// assert!(Instant::MAX.plus(Duration::of_nanos(1)).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn plus(self, duration: Duration) -> Result<Instant, Error> {
        Instant::from_nanos_wide(self.to_nanos_wide() + duration.to_nanos_wide())
    }

    /// Subtracts a duration from this instant.
    #[inline]
    pub fn minus(self, duration: Duration) -> Result<Instant, Error> {
        Instant::from_nanos_wide(self.to_nanos_wide() - duration.to_nanos_wide())
    }

    /// Adds a number of seconds to this instant.
    #[inline]
    pub fn plus_seconds(self, seconds: i64) -> Result<Instant, Error> {
        self.plus(Duration::of_seconds(seconds))
    }

    /// Adds a number of milliseconds to this instant.
    #[inline]
    pub fn plus_millis(self, millis: i64) -> Result<Instant, Error> {
        self.plus(Duration::of_millis(millis))
    }

    /// Adds a number of nanoseconds to this instant.
    #[inline]
    pub fn plus_nanos(self, nanos: i64) -> Result<Instant, Error> {
        self.plus(Duration::of_nanos(nanos))
    }

    /// Subtracts a number of seconds from this instant.
    #[inline]
    pub fn minus_seconds(self, seconds: i64) -> Result<Instant, Error> {
        self.minus(Duration::of_seconds(seconds))
    }

    /// Subtracts a number of milliseconds from this instant.
    #[inline]
    pub fn minus_millis(self, millis: i64) -> Result<Instant, Error> {
        self.minus(Duration::of_millis(millis))
    }

    /// Subtracts a number of nanoseconds from this instant.
    #[inline]
    pub fn minus_nanos(self, nanos: i64) -> Result<Instant, Error> {
        self.minus(Duration::of_nanos(nanos))
    }

    /// Returns the duration from this instant until `end`. This is negative
    /// when `end` is before this instant.
    #[inline]
    pub fn duration_until(self, end: Instant) -> Duration {
        Duration::between(self, end)
    }

    /// Returns this instant as seen at the given offset.
    ///
    /// This never fails, since every instant can be represented at every
    /// offset.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::{tz, Instant};
    ///
    /// let odt = Instant::MAX.at_offset(tz::offset(18));
    /// assert_eq!(odt.to_string(), "+999999999-12-31T23:59:59.999999999+18:00");
    /// ```
    #[inline]
    pub fn at_offset(self, offset: ZoneOffset) -> OffsetDateTime {
        OffsetDateTime::from_parts(self.to_datetime_with_offset(offset), offset)
    }

    /// Returns the local datetime of this instant at the given offset.
    #[inline]
    pub(crate) fn to_datetime_with_offset(
        self,
        offset: ZoneOffset,
    ) -> LocalDateTime {
        let local = self.second + i64::from(offset.total_seconds());
        LocalDateTime::of_local_second_unchecked(local, self.nanosecond)
    }

    fn from_nanos_wide(nanos: i128) -> Result<Instant, Error> {
        let wide = i128::from(NANOS_PER_SECOND);
        let second = nanos.div_euclid(wide);
        let (min, max) = (b::InstantSecond::MIN, b::InstantSecond::MAX);
        if !(i128::from(min) <= second && second <= i128::from(max)) {
            return Err(Error::range("instant-seconds", second, min, max));
        }
        Ok(Instant {
            second: second as i64,
            nanosecond: nanos.rem_euclid(wide) as i32,
        })
    }

    fn to_nanos_wide(self) -> i128 {
        i128::from(self.second) * i128::from(NANOS_PER_SECOND)
            + i128::from(self.nanosecond)
    }
}

impl core::fmt::Debug for Instant {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl core::fmt::Display for Instant {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        DEFAULT_DATETIME_PRINTER
            .print_instant(self, FmtWrite(f))
            .map_err(|_| core::fmt::Error)
    }
}

impl core::str::FromStr for Instant {
    type Err = Error;

    fn from_str(string: &str) -> Result<Instant, Error> {
        DEFAULT_DATETIME_PARSER.parse_instant(string.as_bytes())
    }
}

#[cfg(feature = "std")]
impl TryFrom<std::time::SystemTime> for Instant {
    type Error = Error;

    fn try_from(system_time: std::time::SystemTime) -> Result<Instant, Error> {
        let unix_epoch = std::time::SystemTime::UNIX_EPOCH;
        let nanos = match system_time.duration_since(unix_epoch) {
            Ok(duration) => i128::try_from(duration.as_nanos()),
            Err(err) => i128::try_from(err.duration().as_nanos()).map(|n| -n),
        }
        .map_err(|_| Error::overflow("system time nanoseconds"))?;
        Instant::from_nanos_wide(nanos)
    }
}

crate::fmt::serde::impl_serde_str!(Instant, "an ISO 8601 instant string");

#[cfg(test)]
impl quickcheck::Arbitrary for Instant {
    fn arbitrary(g: &mut quickcheck::Gen) -> Instant {
        let span = b::InstantSecond::MAX - b::InstantSecond::MIN + 1;
        let second = b::InstantSecond::MIN + i64::arbitrary(g).rem_euclid(span);
        let nanosecond = i32::arbitrary(g).rem_euclid(1_000_000_000);
        Instant { second, nanosecond }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use crate::{civil::datetime, tz};

    use super::*;

    #[test]
    fn limits() {
        let min = Instant::MIN.to_datetime_with_offset(ZoneOffset::UTC);
        assert_eq!(min, datetime(-999_999_999, 1, 1, 18, 0, 0, 0));
        let min = Instant::MIN.to_datetime_with_offset(ZoneOffset::MIN);
        assert_eq!(min, LocalDateTime::MIN);
        let max = Instant::MAX.to_datetime_with_offset(ZoneOffset::UTC);
        assert_eq!(max, datetime(999_999_999, 12, 31, 5, 59, 59, 999_999_999));
        let max = Instant::MAX.to_datetime_with_offset(ZoneOffset::MAX);
        assert_eq!(max, LocalDateTime::MAX);

        assert!(Instant::of_epoch_second(b::InstantSecond::MAX + 1).is_err());
        assert!(Instant::MIN.minus_nanos(1).unwrap_err().is_range());
        insta::assert_snapshot!(
            Instant::MAX.plus_nanos(1).unwrap_err(),
            @"parameter 'instant-seconds' with value 31556889832716000 is not in the required range of -31557014135532000..=31556889832715999",
        );
    }

    #[test]
    fn millis() {
        let instant = Instant::of_epoch_milli(-1).unwrap();
        assert_eq!((instant.epoch_second(), instant.nano()), (-1, 999_000_000));
        assert_eq!(instant.to_epoch_milli().unwrap(), -1);
        let instant = Instant::of_epoch_second_and_adjustment(-1, 1).unwrap();
        assert_eq!(instant.to_epoch_milli().unwrap(), -1_000);
        assert!(Instant::MAX.to_epoch_milli().unwrap_err().is_overflow());
    }

    #[test]
    fn arithmetic() {
        let start = Instant::of_epoch_second(1_214_821_859).unwrap();
        let end = start.plus_millis(2_500).unwrap();
        assert_eq!(start.duration_until(end), Duration::of_millis(2_500));
        assert_eq!(end.duration_until(start), Duration::of_millis(-2_500));
        assert_eq!(end.minus_seconds(2).unwrap().minus_millis(500).unwrap(), start);
        assert!(start < end);
    }

    #[test]
    fn display_and_parse() {
        assert_eq!(Instant::EPOCH.to_string(), "1970-01-01T00:00:00Z");
        let instant = Instant::of_epoch_second_and_adjustment(0, 1_000).unwrap();
        assert_eq!(instant.to_string(), "1970-01-01T00:00:00.000001Z");

        let instant: Instant = "2008-06-30T11:30:59-01:30".parse().unwrap();
        assert_eq!(instant.at_offset(tz::offset(-1)).to_string(), "2008-06-30T12:00:59-01:00");

        let err = "-999999999-01-01T00:00Z".parse::<Instant>().unwrap_err();
        assert!(err.is_format());
        assert!(err.is_range());
    }

    quickcheck::quickcheck! {
        fn prop_roundtrip(instant: Instant) -> bool {
            instant.to_string().parse::<Instant>().unwrap() == instant
        }

        fn prop_offset_roundtrip(instant: Instant, offset: ZoneOffset) -> bool {
            let odt = instant.at_offset(offset);
            odt.to_instant().unwrap() == instant
        }
    }
}
