use crate::{
    error::{duration::Error as E, ErrorContext},
    fmt::{
        temporal::{DEFAULT_PERIOD_PARSER, DEFAULT_PERIOD_PRINTER},
        FmtWrite,
    },
    util::{
        arith::Exact,
        common::{
            NANOS_PER_SECOND, SECONDS_PER_DAY, SECONDS_PER_HOUR,
            SECONDS_PER_MINUTE,
        },
    },
    Error, Instant, Unit,
};

/// An exact amount of time, such as `34.5 seconds`.
///
/// A duration is a signed number of seconds along with a nanosecond
/// adjustment. The nanosecond adjustment is always in the range
/// `0..=999_999_999`, even when the duration is negative. For example,
/// `-0.5` seconds is represented as `-1` seconds plus `500_000_000`
/// nanoseconds.
///
/// Unlike a [`Period`](crate::Period), a duration has no calendar units. A
/// day in a duration is always exactly 24 hours.
///
/// # Example
///
/// ```
/// use isochron::Duration;
///
/// let dur = Duration::of_seconds_and_adjustment(-1, 500_000_000)?;
/// assert_eq!(dur.seconds(), -1);
/// assert_eq!(dur.nanos(), 500_000_000);
/// assert_eq!(dur.to_string(), "PT-0.5S");
///
/// let dur: Duration = "PT8H6M12.345S".parse()?;
/// assert_eq!(dur.to_millis()?, 29_172_345);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Duration {
    seconds: i64,
    nanos: i32,
}

impl Duration {
    /// A duration of zero time.
    pub const ZERO: Duration = Duration { seconds: 0, nanos: 0 };

    /// The minimum possible duration.
    pub const MIN: Duration = Duration { seconds: i64::MIN, nanos: 0 };

    /// The maximum possible duration.
    pub const MAX: Duration =
        Duration { seconds: i64::MAX, nanos: 999_999_999 };

    /// Creates a duration of the given number of standard 24 hour days.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when the number of seconds doesn't fit
    /// in an `i64`.
    #[inline]
    pub fn of_days(days: i64) -> Result<Duration, Error> {
        let seconds = days.mul_exact(SECONDS_PER_DAY, "days to seconds")?;
        Ok(Duration::of_seconds(seconds))
    }

    /// Creates a duration of the given number of hours.
    #[inline]
    pub fn of_hours(hours: i64) -> Result<Duration, Error> {
        let seconds = hours.mul_exact(SECONDS_PER_HOUR, "hours to seconds")?;
        Ok(Duration::of_seconds(seconds))
    }

    /// Creates a duration of the given number of minutes.
    #[inline]
    pub fn of_minutes(minutes: i64) -> Result<Duration, Error> {
        let seconds =
            minutes.mul_exact(SECONDS_PER_MINUTE, "minutes to seconds")?;
        Ok(Duration::of_seconds(seconds))
    }

    /// Creates a duration of the given number of seconds.
    #[inline]
    pub const fn of_seconds(seconds: i64) -> Duration {
        Duration { seconds, nanos: 0 }
    }

    /// Creates a duration of the given number of milliseconds.
    #[inline]
    pub const fn of_millis(millis: i64) -> Duration {
        let seconds = millis.div_euclid(1_000);
        let nanos = millis.rem_euclid(1_000) as i32 * 1_000_000;
        Duration { seconds, nanos }
    }

    /// Creates a duration of the given number of nanoseconds.
    #[inline]
    pub const fn of_nanos(nanos: i64) -> Duration {
        let seconds = nanos.div_euclid(NANOS_PER_SECOND);
        let nanos = nanos.rem_euclid(NANOS_PER_SECOND) as i32;
        Duration { seconds, nanos }
    }

    /// Creates a duration from a number of seconds and an adjustment in
    /// nanoseconds.
    ///
    /// The adjustment may be any value, including negative values and values
    /// bigger than one second. It is added to the seconds.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when the total exceeds the limits of a
    /// duration.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::Duration;
    ///
    /// let dur = Duration::of_seconds_and_adjustment(3, -2_000_000_001)?;
    /// assert_eq!((dur.seconds(), dur.nanos()), (0, 999_999_999));
    ///
    /// assert!(Duration::of_seconds_and_adjustment(i64::MAX, 1_000_000_000)
    ///     .unwrap_err()
    ///     .is_overflow());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn of_seconds_and_adjustment(
        seconds: i64,
        nanos_adjustment: i64,
    ) -> Result<Duration, Error> {
        let carry = nanos_adjustment.div_euclid(NANOS_PER_SECOND);
        let nanos = nanos_adjustment.rem_euclid(NANOS_PER_SECOND) as i32;
        let seconds = seconds.add_exact(carry, "seconds with adjustment")?;
        Ok(Duration { seconds, nanos })
    }

    /// Creates a duration of `amount` of the given unit.
    ///
    /// Only units with an exact length are supported, i.e., days and
    /// smaller. Weeks, months and bigger units return an unsupported error.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::{Duration, Unit};
    ///
    /// assert_eq!(Duration::of(90, Unit::Minute)?, Duration::of_seconds(5_400));
    /// assert_eq!(Duration::of(3, Unit::Millisecond)?, Duration::of_millis(3));
    /// assert!(Duration::of(1, Unit::Month).unwrap_err().is_unsupported());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn of(amount: i64, unit: Unit) -> Result<Duration, Error> {
        let Some(nanos) = unit.nanoseconds() else {
            return Err(Error::unsupported_unit(unit, "duration"));
        };
        let total = i128::from(amount) * i128::from(nanos);
        Duration::from_nanos_wide(total)
            .with_context(|| E::FailedOfUnit { unit })
    }

    /// Returns the duration from `start` until `end`.
    ///
    /// The result is negative when `end` is before `start`.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::{Duration, Instant};
    ///
    /// let start = Instant::of_epoch_second(10)?;
    /// let end = Instant::of_epoch_milli(9_500)?;
    /// assert_eq!(Duration::between(start, end).to_string(), "PT-0.5S");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn between(start: Instant, end: Instant) -> Duration {
        // Instants span much less than `i64::MAX` seconds, so the
        // difference always fits.
        let seconds = end.epoch_second() - start.epoch_second();
        let nanos = i64::from(end.nano()) - i64::from(start.nano());
        Duration {
            seconds: seconds + nanos.div_euclid(NANOS_PER_SECOND),
            nanos: nanos.rem_euclid(NANOS_PER_SECOND) as i32,
        }
    }

    /// Returns the whole seconds of this duration. This is negative for
    /// negative durations.
    #[inline]
    pub const fn seconds(self) -> i64 {
        self.seconds
    }

    /// Returns the nanosecond adjustment of this duration, which is always
    /// in the range `0..=999_999_999`.
    #[inline]
    pub const fn nanos(self) -> i32 {
        self.nanos
    }

    /// Returns true if this duration has zero length.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.seconds == 0 && self.nanos == 0
    }

    /// Returns true if this duration is less than zero.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.seconds < 0
    }

    /// Returns the sum of two durations.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when the sum exceeds the limits of a
    /// duration.
    #[inline]
    pub fn plus(self, other: Duration) -> Result<Duration, Error> {
        Duration::from_nanos_wide(self.to_nanos_wide() + other.to_nanos_wide())
    }

    /// Returns the difference of two durations.
    #[inline]
    pub fn minus(self, other: Duration) -> Result<Duration, Error> {
        Duration::from_nanos_wide(self.to_nanos_wide() - other.to_nanos_wide())
    }

    /// Adds a number of days to this duration.
    #[inline]
    pub fn plus_days(self, days: i64) -> Result<Duration, Error> {
        self.plus(Duration::of_days(days)?)
    }

    /// Adds a number of hours to this duration.
    #[inline]
    pub fn plus_hours(self, hours: i64) -> Result<Duration, Error> {
        self.plus(Duration::of_hours(hours)?)
    }

    /// Adds a number of minutes to this duration.
    #[inline]
    pub fn plus_minutes(self, minutes: i64) -> Result<Duration, Error> {
        self.plus(Duration::of_minutes(minutes)?)
    }

    /// Adds a number of seconds to this duration.
    #[inline]
    pub fn plus_seconds(self, seconds: i64) -> Result<Duration, Error> {
        self.plus(Duration::of_seconds(seconds))
    }

    /// Adds a number of milliseconds to this duration.
    #[inline]
    pub fn plus_millis(self, millis: i64) -> Result<Duration, Error> {
        self.plus(Duration::of_millis(millis))
    }

    /// Adds a number of nanoseconds to this duration.
    #[inline]
    pub fn plus_nanos(self, nanos: i64) -> Result<Duration, Error> {
        self.plus(Duration::of_nanos(nanos))
    }

    /// Subtracts a number of days from this duration.
    #[inline]
    pub fn minus_days(self, days: i64) -> Result<Duration, Error> {
        self.minus(Duration::of_days(days)?)
    }

    /// Subtracts a number of hours from this duration.
    #[inline]
    pub fn minus_hours(self, hours: i64) -> Result<Duration, Error> {
        self.minus(Duration::of_hours(hours)?)
    }

    /// Subtracts a number of minutes from this duration.
    #[inline]
    pub fn minus_minutes(self, minutes: i64) -> Result<Duration, Error> {
        self.minus(Duration::of_minutes(minutes)?)
    }

    /// Subtracts a number of seconds from this duration.
    #[inline]
    pub fn minus_seconds(self, seconds: i64) -> Result<Duration, Error> {
        self.minus(Duration::of_seconds(seconds))
    }

    /// Subtracts a number of milliseconds from this duration.
    #[inline]
    pub fn minus_millis(self, millis: i64) -> Result<Duration, Error> {
        self.minus(Duration::of_millis(millis))
    }

    /// Subtracts a number of nanoseconds from this duration.
    #[inline]
    pub fn minus_nanos(self, nanos: i64) -> Result<Duration, Error> {
        self.minus(Duration::of_nanos(nanos))
    }

    /// Multiplies this duration by a scalar.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::Duration;
    ///
    /// let dur = Duration::of_millis(1_500).multiplied_by(-3)?;
    /// assert_eq!(dur.to_string(), "PT-4.5S");
    /// assert!(Duration::MAX.multiplied_by(2).unwrap_err().is_overflow());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn multiplied_by(self, scalar: i64) -> Result<Duration, Error> {
        if scalar == 1 || self.is_zero() {
            return Ok(self);
        }
        let total = self
            .to_nanos_wide()
            .checked_mul(i128::from(scalar))
            .ok_or_else(|| Error::overflow("multiplying duration"))?;
        Duration::from_nanos_wide(total)
    }

    /// Divides this duration by a scalar, truncating toward zero at
    /// nanosecond precision.
    ///
    /// # Errors
    ///
    /// This returns an error when `divisor` is zero, or when dividing the
    /// minimum duration by `-1`.
    pub fn divided_by(self, divisor: i64) -> Result<Duration, Error> {
        if divisor == 0 {
            return Err(Error::from(E::DivideByZero));
        }
        if divisor == 1 {
            return Ok(self);
        }
        Duration::from_nanos_wide(self.to_nanos_wide() / i128::from(divisor))
    }

    /// Negates this duration.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when this is [`Duration::MIN`].
    #[inline]
    pub fn negated(self) -> Result<Duration, Error> {
        Duration::from_nanos_wide(-self.to_nanos_wide())
    }

    /// Returns the absolute value of this duration.
    #[inline]
    pub fn abs(self) -> Result<Duration, Error> {
        if self.is_negative() {
            self.negated()
        } else {
            Ok(self)
        }
    }

    /// Returns the total number of whole days, truncating toward zero.
    #[inline]
    pub const fn to_days(self) -> i64 {
        self.to_whole_seconds() / SECONDS_PER_DAY
    }

    /// Returns the total number of whole hours, truncating toward zero.
    #[inline]
    pub const fn to_hours(self) -> i64 {
        self.to_whole_seconds() / SECONDS_PER_HOUR
    }

    /// Returns the total number of whole minutes, truncating toward zero.
    #[inline]
    pub const fn to_minutes(self) -> i64 {
        self.to_whole_seconds() / SECONDS_PER_MINUTE
    }

    /// Returns the total number of milliseconds, truncating toward zero.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when the result doesn't fit in an
    /// `i64`.
    pub fn to_millis(self) -> Result<i64, Error> {
        let millis = self.to_nanos_wide() / 1_000_000;
        i64::try_from(millis)
            .map_err(|_| Error::overflow("converting duration to millis"))
    }

    /// Returns the total number of nanoseconds.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when the result doesn't fit in an
    /// `i64`. That is, for durations longer than about 292 years.
    pub fn to_nanos(self) -> Result<i64, Error> {
        i64::try_from(self.to_nanos_wide())
            .map_err(|_| Error::overflow("converting duration to nanos"))
    }

    /// Returns the seconds of this duration rounded toward zero.
    #[inline]
    const fn to_whole_seconds(self) -> i64 {
        if self.seconds < 0 && self.nanos > 0 {
            self.seconds + 1
        } else {
            self.seconds
        }
    }

    /// Creates a duration from a total number of nanoseconds.
    pub(crate) fn from_nanos_wide(nanos: i128) -> Result<Duration, Error> {
        let wide = i128::from(NANOS_PER_SECOND);
        let seconds = i64::try_from(nanos.div_euclid(wide))
            .map_err(|_| Error::overflow("duration seconds"))?;
        let nanos = nanos.rem_euclid(wide) as i32;
        Ok(Duration { seconds, nanos })
    }

    /// Returns the total number of nanoseconds in this duration.
    #[inline]
    pub(crate) const fn to_nanos_wide(self) -> i128 {
        self.seconds as i128 * NANOS_PER_SECOND as i128 + self.nanos as i128
    }
}

impl core::fmt::Debug for Duration {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if f.alternate() {
            f.debug_struct("Duration")
                .field("seconds", &self.seconds)
                .field("nanos", &self.nanos)
                .finish()
        } else {
            core::fmt::Display::fmt(self, f)
        }
    }
}

impl core::fmt::Display for Duration {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        DEFAULT_PERIOD_PRINTER
            .print_duration(self, FmtWrite(f))
            .map_err(|_| core::fmt::Error)
    }
}

impl core::str::FromStr for Duration {
    type Err = Error;

    fn from_str(string: &str) -> Result<Duration, Error> {
        DEFAULT_PERIOD_PARSER.parse_duration(string.as_bytes())
    }
}

impl TryFrom<core::time::Duration> for Duration {
    type Error = Error;

    fn try_from(d: core::time::Duration) -> Result<Duration, Error> {
        let seconds =
            i64::try_from(d.as_secs()).map_err(|_| E::RangeUnsigned)?;
        // `subsec_nanos` is always less than one second.
        let nanos = d.subsec_nanos() as i32;
        Ok(Duration { seconds, nanos })
    }
}

impl TryFrom<Duration> for core::time::Duration {
    type Error = Error;

    fn try_from(d: Duration) -> Result<core::time::Duration, Error> {
        if d.is_negative() {
            return Err(Error::from(E::ConvertNegative));
        }
        // Non-negative durations have non-negative seconds, and the
        // nanoseconds are always in range.
        Ok(core::time::Duration::new(d.seconds as u64, d.nanos as u32))
    }
}

crate::fmt::serde::impl_serde_str!(Duration, "an ISO 8601 duration string");

#[cfg(test)]
impl quickcheck::Arbitrary for Duration {
    fn arbitrary(g: &mut quickcheck::Gen) -> Duration {
        let seconds = i64::arbitrary(g);
        let nanos = i32::arbitrary(g).rem_euclid(1_000_000_000);
        Duration { seconds, nanos }
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Self>> {
        alloc::boxed::Box::new(
            (self.seconds, self.nanos)
                .shrink()
                .filter(|&(_, nanos)| nanos >= 0)
                .map(|(seconds, nanos)| Duration { seconds, nanos }),
        )
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn constructors() {
        assert_eq!(Duration::of_days(1).unwrap(), Duration::of_seconds(86_400));
        assert_eq!(Duration::of_hours(-2).unwrap(), Duration::of_seconds(-7_200));
        assert_eq!(Duration::of_minutes(3).unwrap(), Duration::of_seconds(180));
        assert!(Duration::of_days(i64::MAX / 86_400 + 1)
            .unwrap_err()
            .is_overflow());

        let dur = Duration::of_millis(-1);
        assert_eq!((dur.seconds(), dur.nanos()), (-1, 999_000_000));
        let dur = Duration::of_nanos(-1_000_000_001);
        assert_eq!((dur.seconds(), dur.nanos()), (-2, 999_999_999));
        let dur = Duration::of_seconds_and_adjustment(-1, 1_000_000_001).unwrap();
        assert_eq!((dur.seconds(), dur.nanos()), (0, 1));
        assert!(Duration::of_seconds_and_adjustment(i64::MIN, -1)
            .unwrap_err()
            .is_overflow());
    }

    #[test]
    fn of_unit() {
        assert_eq!(Duration::of(2, Unit::HalfDay).unwrap(), Duration::of_days(1).unwrap());
        assert_eq!(Duration::of(-5, Unit::Microsecond).unwrap(), Duration::of_nanos(-5_000));
        assert!(Duration::of(1, Unit::Week).unwrap_err().is_unsupported());
        let err = Duration::of(i64::MAX, Unit::Day).unwrap_err();
        assert!(err.is_overflow());
        insta::assert_snapshot!(
            err,
            @"failed to create duration from amount of days: duration seconds overflowed",
        );
    }

    #[test]
    fn arithmetic() {
        let a = Duration::of_millis(1_500);
        let b = Duration::of_millis(-2_250);
        assert_eq!(a.plus(b).unwrap(), Duration::of_millis(-750));
        assert_eq!(a.minus(b).unwrap(), Duration::of_millis(3_750));
        assert_eq!(b.negated().unwrap(), Duration::of_millis(2_250));
        assert_eq!(b.abs().unwrap(), Duration::of_millis(2_250));
        assert_eq!(a.divided_by(-2).unwrap(), Duration::of_millis(-750));
        assert_eq!(Duration::of_nanos(7).divided_by(2).unwrap(), Duration::of_nanos(3));
        assert_eq!(a.plus_seconds(1).unwrap().minus_nanos(500_000_000).unwrap(), Duration::of_seconds(2));
        assert!(Duration::MIN.negated().unwrap_err().is_overflow());
        assert!(Duration::MAX.plus_nanos(1).unwrap_err().is_overflow());
        insta::assert_snapshot!(
            a.divided_by(0).unwrap_err(),
            @"cannot divide duration by zero",
        );
    }

    #[test]
    fn conversions() {
        let dur = Duration::of_seconds_and_adjustment(-90_061, 1).unwrap();
        assert_eq!(dur.to_days(), -1);
        assert_eq!(dur.to_hours(), -25);
        assert_eq!(dur.to_minutes(), -1_501);
        assert_eq!(dur.to_millis().unwrap(), -90_060_999);
        assert_eq!(dur.to_nanos().unwrap(), -90_060_999_999_999);
        assert!(Duration::MAX.to_nanos().unwrap_err().is_overflow());
        assert!(Duration::MAX.to_millis().unwrap_err().is_overflow());

        let std = core::time::Duration::new(5, 7);
        let dur = Duration::try_from(std).unwrap();
        assert_eq!((dur.seconds(), dur.nanos()), (5, 7));
        assert_eq!(core::time::Duration::try_from(dur).unwrap(), std);
        assert!(core::time::Duration::try_from(Duration::of_nanos(-1)).is_err());
        assert!(Duration::try_from(core::time::Duration::MAX).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Duration::ZERO.to_string(), "PT0S");
        assert_eq!(Duration::of_millis(29_172_345).to_string(), "PT8H6M12.345S");
        assert_eq!(Duration::of_days(2).unwrap().to_string(), "PT48H");
        assert_eq!(alloc::format!("{:?}", Duration::of_nanos(-1)), "PT-0.000000001S");
    }

    quickcheck::quickcheck! {
        fn prop_roundtrip(dur: Duration) -> bool {
            dur.to_string().parse::<Duration>().unwrap() == dur
        }

        fn prop_nanos_wide_roundtrip(dur: Duration) -> bool {
            Duration::from_nanos_wide(dur.to_nanos_wide()).unwrap() == dur
        }

        fn prop_plus_minus_inverse(a: Duration, b: Duration) -> quickcheck::TestResult {
            match a.plus(b) {
                Ok(sum) => quickcheck::TestResult::from_bool(sum.minus(b).unwrap() == a),
                Err(_) => quickcheck::TestResult::discard(),
            }
        }
    }
}
