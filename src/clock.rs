/*!
Sources of the current instant.

Nothing in this crate reads the system time on its own. Operations that need
"now", like [`OffsetDateTime::now`](crate::OffsetDateTime::now), take a
[`Clock`]. Use [`SystemClock`] in production and [`FixedClock`] (optionally
wrapped in an [`OffsetClock`]) in tests.

# Example

```
use isochron::{clock::{FixedClock, OffsetClock}, tz, Duration, OffsetDateTime};

let base = FixedClock::new("2008-06-30T10:30:00Z".parse()?, tz::offset(1));
let clock = OffsetClock::new(base, Duration::of_minutes(90)?);
let now = OffsetDateTime::now(&clock);
assert_eq!(now.to_string(), "2008-06-30T13:00+01:00");

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

use crate::{tz::ZoneOffset, Duration, Instant};

/// A source of the current instant, along with an offset to view it at.
pub trait Clock {
    /// Returns the current instant.
    fn instant(&self) -> Instant;

    /// Returns the offset used to convert the current instant to a local
    /// datetime.
    fn offset(&self) -> ZoneOffset;

    /// Returns the current number of milliseconds since the Unix epoch.
    ///
    /// This saturates at the limits of an `i64`.
    fn millis(&self) -> i64 {
        let instant = self.instant();
        instant
            .epoch_second()
            .saturating_mul(1_000)
            .saturating_add(i64::from(instant.nano() / 1_000_000))
    }
}

impl<'a, C: Clock + ?Sized> Clock for &'a C {
    fn instant(&self) -> Instant {
        (**self).instant()
    }

    fn offset(&self) -> ZoneOffset {
        (**self).offset()
    }

    fn millis(&self) -> i64 {
        (**self).millis()
    }
}

/// A clock that reads the system time.
///
/// This requires the `std` feature.
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SystemClock {
    offset: ZoneOffset,
}

#[cfg(feature = "std")]
impl SystemClock {
    /// Returns a system clock with a UTC offset.
    pub const fn utc() -> SystemClock {
        SystemClock { offset: ZoneOffset::UTC }
    }

    /// Returns a system clock with the given offset.
    pub const fn with_offset(offset: ZoneOffset) -> SystemClock {
        SystemClock { offset }
    }
}

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn instant(&self) -> Instant {
        let now = std::time::SystemTime::now();
        match Instant::try_from(now) {
            Ok(instant) => instant,
            Err(_err) => {
                warn!("system time is out of range, saturating: {_err}");
                if now < std::time::SystemTime::UNIX_EPOCH {
                    Instant::MIN
                } else {
                    Instant::MAX
                }
            }
        }
    }

    fn offset(&self) -> ZoneOffset {
        self.offset
    }
}

/// A clock that always returns the same instant.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FixedClock {
    instant: Instant,
    offset: ZoneOffset,
}

impl FixedClock {
    /// Returns a clock that is stopped at the given instant.
    pub const fn new(instant: Instant, offset: ZoneOffset) -> FixedClock {
        FixedClock { instant, offset }
    }
}

impl Clock for FixedClock {
    fn instant(&self) -> Instant {
        self.instant
    }

    fn offset(&self) -> ZoneOffset {
        self.offset
    }
}

/// A clock that shifts the instants of another clock by a fixed duration.
///
/// When the shifted instant would be out of range, it saturates at
/// [`Instant::MIN`] or [`Instant::MAX`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OffsetClock<C> {
    base: C,
    shift: Duration,
}

impl<C: Clock> OffsetClock<C> {
    /// Returns a clock whose instants are those of `base` plus `shift`.
    pub const fn new(base: C, shift: Duration) -> OffsetClock<C> {
        OffsetClock { base, shift }
    }
}

impl<C: Clock> Clock for OffsetClock<C> {
    fn instant(&self) -> Instant {
        match self.base.instant().plus(self.shift) {
            Ok(instant) => instant,
            Err(_) if self.shift.is_negative() => Instant::MIN,
            Err(_) => Instant::MAX,
        }
    }

    fn offset(&self) -> ZoneOffset {
        self.base.offset()
    }
}

#[cfg(test)]
mod tests {
    use crate::tz;

    use super::*;

    #[test]
    fn fixed_and_offset() {
        let instant = Instant::of_epoch_second_and_adjustment(-1, 500_000_000)
            .unwrap();
        let clock = FixedClock::new(instant, tz::offset(2));
        assert_eq!(clock.instant(), instant);
        assert_eq!(clock.offset(), tz::offset(2));
        assert_eq!(clock.millis(), -500);

        let shifted = OffsetClock::new(clock, Duration::of_seconds(2));
        assert_eq!(shifted.millis(), 1_500);
        assert_eq!(shifted.offset(), tz::offset(2));

        let saturated = OffsetClock::new(clock, Duration::MAX);
        assert_eq!(saturated.instant(), Instant::MAX);
        assert_eq!(saturated.millis(), i64::MAX);
        let saturated = OffsetClock::new(clock, Duration::MIN);
        assert_eq!(saturated.instant(), Instant::MIN);
    }

    #[cfg(feature = "std")]
    #[test]
    fn system() {
        let _ = env_logger::try_init();

        let clock = SystemClock::with_offset(tz::offset(-5));
        let first = clock.instant();
        assert!(first > Instant::EPOCH);
        assert!(clock.instant() >= first);
        assert_eq!(clock.offset(), tz::offset(-5));
        assert_eq!(SystemClock::utc().offset(), ZoneOffset::UTC);
    }
}
