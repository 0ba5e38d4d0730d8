/*!
Isochron is an ISO 8601 calendrical library for Rust.

It provides immutable value types for dates, times, UTC offsets and the
amounts of time between them, along with exact arithmetic and canonical
ISO 8601 parsing and printing. Every operation that could silently wrap
around, or produce an invalid date, returns an error instead.

# Overview

The value types are:

* [`civil::LocalDate`], [`civil::LocalTime`] and [`civil::LocalDateTime`]
are "civil" values. They have no offset or time zone, and so don't identify
a precise instant in time.
* [`tz::ZoneOffset`] is a fixed offset from UTC in the range `-18:00` to
`+18:00`.
* [`OffsetDateTime`] pairs a [`civil::LocalDateTime`] with a
[`tz::ZoneOffset`]. It identifies a precise instant.
* [`Instant`] is a point on the UTC time-line, stored as seconds and
nanoseconds since `1970-01-01T00:00Z`.
* [`Period`] is a calendar based amount of years, months and days.
* [`Duration`] is an exact amount of time in seconds and nanoseconds.
* [`ZonedDateTime`] is an [`OffsetDateTime`] associated with a
[`tz::ZoneId`]. The rules for a region come from a
[`tz::ZoneRulesProvider`] supplied by the caller.

All value types are `Copy` (except for the zone aware types, which are
`Clone`), and can be shared freely between threads.

# Example

```
use isochron::{civil::date, tz::ZoneOffset, Duration, OffsetDateTime, Period};

let odt: OffsetDateTime = "2008-06-30T11:30:59.000000500+01:00".parse()?;
assert_eq!(odt.date(), date(2008, 6, 30));
assert_eq!(odt.offset(), ZoneOffset::of_hours(1)?);

let later = odt.plus(Duration::of_seconds_and_adjustment(62, 3)?)?;
assert_eq!(later.to_string(), "2008-06-30T11:32:01.000000503+01:00");

let period = Period::between(date(2010, 2, 28), date(2008, 2, 29));
assert_eq!(period.to_string(), "P-1Y-11M-28D");

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Crate features

* **std** (enabled by default) -
  When enabled, [`Error`] implements `std::error::Error` and the
  [`clock::SystemClock`] is available.
* **logging** -
  When enabled, the `log` crate is used to emit messages where appropriate.
  Generally speaking, this reports parse failures, time zone rule lookups and
  the resolution of gaps and folds.
* **serde** -
  When enabled, every value type implements `Serialize` and `Deserialize`
  using its canonical ISO 8601 string.
*/

#![no_std]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(missing_debug_implementations)]

#[cfg(any(test, feature = "std"))]
extern crate std;

extern crate alloc;

pub use crate::{
    duration::Duration,
    error::Error,
    instant::Instant,
    offset_datetime::OffsetDateTime,
    period::Period,
    temporal::{Field, Unit},
    zoned::ZonedDateTime,
};

#[macro_use]
mod logging;

pub mod civil;
pub mod clock;
mod duration;
mod error;
pub mod fmt;
mod instant;
mod offset_datetime;
mod period;
mod temporal;
pub mod tz;
mod util;
mod zoned;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}

        assert_send_sync::<Error>();
        assert_send_sync::<civil::LocalDate>();
        assert_send_sync::<civil::LocalTime>();
        assert_send_sync::<civil::LocalDateTime>();
        assert_send_sync::<tz::ZoneOffset>();
        assert_send_sync::<tz::ZoneId>();
        assert_send_sync::<Period>();
        assert_send_sync::<Duration>();
        assert_send_sync::<Instant>();
        assert_send_sync::<OffsetDateTime>();
        assert_send_sync::<ZonedDateTime>();
    }
}
