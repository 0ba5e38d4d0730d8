use core::ops::Neg;

use crate::{
    civil::LocalDateTime,
    fmt::{offset as offset_fmt, temporal::DEFAULT_DATETIME_PRINTER, FmtWrite},
    util::b,
    Error, Field, Instant,
};

/// A fixed offset from UTC, from `-18:00` to `+18:00`.
///
/// Negative offsets correspond to time zones west of the prime meridian,
/// while positive offsets correspond to time zones east of the prime
/// meridian. Equivalently, in all cases, `local - offset = UTC`.
///
/// # Display format
///
/// This type implements `Display`, which prints the canonical ID of the
/// offset. The ID is `Z` for UTC. Otherwise it's `±HH:MM`, followed by
/// `:SS` only when the seconds are non-zero:
///
/// ```
/// use isochron::tz::ZoneOffset;
///
/// assert_eq!(ZoneOffset::UTC.to_string(), "Z");
/// assert_eq!(ZoneOffset::of_hours(-5)?.to_string(), "-05:00");
/// assert_eq!(ZoneOffset::of_hours_minutes(5, 30)?.to_string(), "+05:30");
/// assert_eq!(
///     ZoneOffset::of_hours_minutes_seconds(-1, -2, -3)?.to_string(),
///     "-01:02:03",
/// );
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Parsing
///
/// `FromStr` accepts `Z`, or a sign followed by one of `h`, `hh`, `hh:mm`,
/// `hhmm`, `hh:mm:ss` or `hhmmss`. The components must describe an offset in
/// range, so `+18:01` is rejected:
///
/// ```
/// use isochron::tz::ZoneOffset;
///
/// assert_eq!("Z".parse::<ZoneOffset>()?, ZoneOffset::UTC);
/// assert_eq!("+00:00".parse::<ZoneOffset>()?, ZoneOffset::UTC);
/// assert_eq!("-0130".parse::<ZoneOffset>()?.total_seconds(), -5_400);
/// assert_eq!("+5".parse::<ZoneOffset>()?.total_seconds(), 18_000);
/// assert!("+18:01".parse::<ZoneOffset>().is_err());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Ordering
///
/// Offsets are ordered by the instant they produce for the same local
/// datetime. So an offset further ahead of UTC sorts *before* one that is
/// behind it:
///
/// ```
/// use isochron::tz::ZoneOffset;
///
/// assert!(ZoneOffset::of_hours(2)? < ZoneOffset::of_hours(1)?);
/// assert!(ZoneOffset::UTC < ZoneOffset::of_hours(-8)?);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct ZoneOffset {
    seconds: i32,
}

impl ZoneOffset {
    /// The offset for UTC. Its ID is `Z`.
    pub const UTC: ZoneOffset = ZoneOffset { seconds: 0 };

    /// The smallest offset, `-18:00`.
    pub const MIN: ZoneOffset =
        ZoneOffset { seconds: b::OffsetTotalSeconds::MIN };

    /// The largest offset, `+18:00`.
    pub const MAX: ZoneOffset =
        ZoneOffset { seconds: b::OffsetTotalSeconds::MAX };

    /// Creates an offset in a `const` context.
    ///
    /// The fallible non-const version of this constructor is
    /// [`ZoneOffset::of_hours_minutes_seconds`], which documents the rules
    /// the components must follow.
    ///
    /// # Panics
    ///
    /// This panics when the components don't describe a valid offset.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::tz::ZoneOffset;
    ///
    /// const IST: ZoneOffset = ZoneOffset::constant(5, 30, 0);
    /// assert_eq!(IST.total_seconds(), 19_800);
    /// ```
    #[inline]
    pub const fn constant(hours: i8, minutes: i8, seconds: i8) -> ZoneOffset {
        let (h, m, s) = (hours as i64, minutes as i64, seconds as i64);
        if !b::OffsetHours::contains(h)
            || !b::OffsetMinutes::contains(m)
            || !b::OffsetSeconds::contains(s)
        {
            panic!("invalid zone offset component")
        }
        if (h > 0 && (m < 0 || s < 0))
            || (h < 0 && (m > 0 || s > 0))
            || (m > 0 && s < 0)
            || (m < 0 && s > 0)
        {
            panic!("zone offset components must have the same sign")
        }
        let total = h * 3_600 + m * 60 + s;
        if !b::OffsetTotalSeconds::contains(total) {
            panic!("zone offset is not in the range -18:00..=+18:00")
        }
        ZoneOffset { seconds: total as i32 }
    }

    /// Creates an offset from its total number of seconds.
    ///
    /// # Errors
    ///
    /// This returns a range error when `seconds` is not in
    /// `-64_800..=64_800`.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::tz::ZoneOffset;
    ///
    /// assert_eq!(ZoneOffset::of_total_seconds(0)?, ZoneOffset::UTC);
    /// assert_eq!(ZoneOffset::of_total_seconds(-64_800)?, ZoneOffset::MIN);
    /// assert!(ZoneOffset::of_total_seconds(64_801).unwrap_err().is_range());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn of_total_seconds(seconds: i32) -> Result<ZoneOffset, Error> {
        let seconds = b::OffsetTotalSeconds::check(seconds)?;
        Ok(ZoneOffset { seconds })
    }

    /// Creates an offset from a number of hours in `-18..=18`.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::tz::ZoneOffset;
    ///
    /// assert_eq!(ZoneOffset::of_hours(-18)?, ZoneOffset::MIN);
    /// assert!(ZoneOffset::of_hours(19).unwrap_err().is_range());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn of_hours(hours: i32) -> Result<ZoneOffset, Error> {
        ZoneOffset::of_hours_minutes_seconds(hours, 0, 0)
    }

    /// Creates an offset from hours and minutes.
    ///
    /// See [`ZoneOffset::of_hours_minutes_seconds`] for the rules the
    /// components must follow.
    #[inline]
    pub fn of_hours_minutes(
        hours: i32,
        minutes: i32,
    ) -> Result<ZoneOffset, Error> {
        ZoneOffset::of_hours_minutes_seconds(hours, minutes, 0)
    }

    /// Creates an offset from hours, minutes and seconds.
    ///
    /// The components must all have the same sign. A zero component takes on
    /// the sign of the others. So `(1, 30, 0)` and `(0, -30, -15)` are
    /// valid, while `(1, -30, 0)` and `(0, 30, -15)` are not.
    ///
    /// # Errors
    ///
    /// This returns a range error when:
    ///
    /// * `hours` is not in `-18..=18`.
    /// * `minutes` or `seconds` is not in `-59..=59`.
    /// * The signs of the components disagree.
    /// * The total is beyond `±18:00`.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::tz::ZoneOffset;
    ///
    /// let o = ZoneOffset::of_hours_minutes_seconds(-3, -30, 0)?;
    /// assert_eq!(o.total_seconds(), -12_600);
    ///
    /// assert!(ZoneOffset::of_hours_minutes_seconds(1, -1, 0).is_err());
    /// assert!(ZoneOffset::of_hours_minutes_seconds(0, 1, -1).is_err());
    /// assert!(ZoneOffset::of_hours_minutes_seconds(18, 0, 1).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn of_hours_minutes_seconds(
        hours: i32,
        minutes: i32,
        seconds: i32,
    ) -> Result<ZoneOffset, Error> {
        let hours = b::OffsetHours::check(hours)?;
        let minutes = check_same_sign(
            "offset-minutes",
            i64::from(hours),
            i64::from(minutes),
        )?;
        let nonzero = if hours != 0 { i64::from(hours) } else { minutes };
        let seconds =
            check_same_sign("offset-seconds", nonzero, i64::from(seconds))?;
        let total = i64::from(hours) * 3_600 + minutes * 60 + seconds;
        Ok(ZoneOffset { seconds: b::OffsetTotalSeconds::check(total)? })
    }

    /// Returns the total number of seconds in this offset.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::tz::ZoneOffset;
    ///
    /// assert_eq!(ZoneOffset::of_hours_minutes(-1, -30)?.total_seconds(), -5_400);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub const fn total_seconds(self) -> i32 {
        self.seconds
    }

    /// Returns the hours, minutes and seconds components of this offset.
    ///
    /// Every component has the same sign as the offset.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::tz::ZoneOffset;
    ///
    /// let o = ZoneOffset::of_total_seconds(-5_430)?;
    /// assert_eq!(o.parts(), (-1, -30, -30));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub const fn parts(self) -> (i8, i8, i8) {
        let hours = (self.seconds / 3_600) as i8;
        let minutes = ((self.seconds / 60) % 60) as i8;
        let seconds = (self.seconds % 60) as i8;
        (hours, minutes, seconds)
    }

    /// Returns the negation of this offset.
    ///
    /// This never fails since the range of offsets is symmetric.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::tz::ZoneOffset;
    ///
    /// assert_eq!(ZoneOffset::MIN.negate(), ZoneOffset::MAX);
    /// assert_eq!(-ZoneOffset::UTC, ZoneOffset::UTC);
    /// ```
    #[inline]
    pub const fn negate(self) -> ZoneOffset {
        ZoneOffset { seconds: -self.seconds }
    }

    /// Returns true if and only if this offset is behind UTC.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.seconds < 0
    }

    /// Returns the canonical ID of this offset.
    ///
    /// This is the same as the `Display` output.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::tz::ZoneOffset;
    ///
    /// assert_eq!(ZoneOffset::of_total_seconds(3_723)?.id(), "+01:02:03");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn id(self) -> alloc::string::String {
        alloc::string::ToString::to_string(&self)
    }

    /// Returns true if and only if `field` can be read from an offset.
    ///
    /// The only supported field is [`Field::OffsetSeconds`].
    #[inline]
    pub fn is_supported(self, field: Field) -> bool {
        field == Field::OffsetSeconds
    }

    /// Returns the value of the given field.
    ///
    /// # Errors
    ///
    /// This returns an error when the field is not
    /// [`Field::OffsetSeconds`].
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::{tz::ZoneOffset, Field};
    ///
    /// let o = ZoneOffset::of_hours(1)?;
    /// assert_eq!(o.get(Field::OffsetSeconds)?, 3_600);
    /// assert!(o.get(Field::HourOfDay).unwrap_err().is_unsupported());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn get(self, field: Field) -> Result<i32, Error> {
        if !self.is_supported(field) {
            return Err(Error::unsupported_field(field, "zone offset"));
        }
        Ok(self.seconds)
    }

    /// Like [`ZoneOffset::get`], but returns an `i64`.
    #[inline]
    pub fn get_long(self, field: Field) -> Result<i64, Error> {
        self.get(field).map(i64::from)
    }

    /// Converts the given instant to a local datetime using this offset.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::{civil::datetime, tz::ZoneOffset, Instant};
    ///
    /// let o = ZoneOffset::of_hours(-8)?;
    /// assert_eq!(
    ///     o.to_datetime(Instant::EPOCH),
    ///     datetime(1969, 12, 31, 16, 0, 0, 0),
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn to_datetime(self, instant: Instant) -> LocalDateTime {
        instant.to_datetime_with_offset(self)
    }

    /// Converts the given local datetime to an instant using this offset.
    ///
    /// # Errors
    ///
    /// This returns an error when the instant would be outside of
    /// [`Instant::MIN`] and [`Instant::MAX`]. This can only happen within 18
    /// hours of the minimum and maximum local datetimes.
    #[inline]
    pub fn to_instant(self, dt: LocalDateTime) -> Result<Instant, Error> {
        Instant::of_epoch_second_and_adjustment(
            dt.to_epoch_second(self),
            i64::from(dt.time().nanosecond()),
        )
    }
}

/// Checks that `value` is within `-59..=59` and that its sign agrees with
/// the sign of `prior`, which is the nearest bigger component that is
/// non-zero (or zero when there is no such component).
fn check_same_sign(
    what: &'static str,
    prior: i64,
    value: i64,
) -> Result<i64, Error> {
    let (min, max) = if prior > 0 {
        (0, 59)
    } else if prior < 0 {
        (-59, 0)
    } else {
        (-59, 59)
    };
    if !(min <= value && value <= max) {
        return Err(Error::range(what, value, min, max));
    }
    Ok(value)
}

impl Ord for ZoneOffset {
    fn cmp(&self, other: &ZoneOffset) -> core::cmp::Ordering {
        other.seconds.cmp(&self.seconds)
    }
}

impl PartialOrd for ZoneOffset {
    fn partial_cmp(&self, other: &ZoneOffset) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Default for ZoneOffset {
    fn default() -> ZoneOffset {
        ZoneOffset::UTC
    }
}

impl core::fmt::Debug for ZoneOffset {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "ZoneOffset({self})")
    }
}

impl core::fmt::Display for ZoneOffset {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        DEFAULT_DATETIME_PRINTER
            .print_offset(self, FmtWrite(f))
            .map_err(|_| core::fmt::Error)
    }
}

impl core::str::FromStr for ZoneOffset {
    type Err = Error;

    fn from_str(string: &str) -> Result<ZoneOffset, Error> {
        offset_fmt::parse(string.as_bytes())
    }
}

impl Neg for ZoneOffset {
    type Output = ZoneOffset;

    #[inline]
    fn neg(self) -> ZoneOffset {
        self.negate()
    }
}

crate::fmt::serde::impl_serde_str!(ZoneOffset, "a UTC offset string");

#[cfg(test)]
impl quickcheck::Arbitrary for ZoneOffset {
    fn arbitrary(g: &mut quickcheck::Gen) -> ZoneOffset {
        let span = i64::from(b::OffsetTotalSeconds::MAX) * 2 + 1;
        let seconds = i64::from(i32::arbitrary(g)).rem_euclid(span)
            + i64::from(b::OffsetTotalSeconds::MIN);
        ZoneOffset { seconds: seconds as i32 }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn factories() {
        let o = ZoneOffset::of_hours_minutes_seconds(0, 0, 0).unwrap();
        assert_eq!(o, ZoneOffset::UTC);
        let o = ZoneOffset::of_hours_minutes_seconds(0, -30, -15).unwrap();
        assert_eq!(o.total_seconds(), -1_815);
        let o = ZoneOffset::of_hours_minutes_seconds(0, 0, 45).unwrap();
        assert_eq!(o.total_seconds(), 45);
        let o = ZoneOffset::of_hours_minutes_seconds(-18, 0, 0).unwrap();
        assert_eq!(o, ZoneOffset::MIN);

        for (h, m, s) in [
            (1, -1, 0),
            (-1, 1, 0),
            (1, 0, -1),
            (-1, 0, 1),
            (0, 1, -1),
            (0, -1, 1),
            (0, 60, 0),
            (0, 0, -60),
            (19, 0, 0),
            (-19, 0, 0),
            (18, 0, 1),
            (-18, -1, 0),
        ] {
            let err = ZoneOffset::of_hours_minutes_seconds(h, m, s)
                .unwrap_err();
            assert!(err.is_range(), "{h}:{m}:{s} should be a range error");
        }
    }

    #[test]
    fn range_error_message() {
        insta::assert_snapshot!(
            ZoneOffset::of_hours(19).unwrap_err(),
            @"parameter 'offset-hours' with value 19 is not in the required range of -18..=18",
        );
        insta::assert_snapshot!(
            ZoneOffset::of_hours_minutes(1, -30).unwrap_err(),
            @"parameter 'offset-minutes' with value -30 is not in the required range of 0..=59",
        );
    }

    #[test]
    fn ids() {
        let id = |h, m, s| {
            ZoneOffset::of_hours_minutes_seconds(h, m, s).unwrap().id()
        };
        assert_eq!(id(0, 0, 0), "Z");
        assert_eq!(id(1, 0, 0), "+01:00");
        assert_eq!(id(-1, 0, 0), "-01:00");
        assert_eq!(id(0, 0, 1), "+00:00:01");
        assert_eq!(id(0, -1, -1), "-00:01:01");
        assert_eq!(id(18, 0, 0), "+18:00");
        assert_eq!(id(-17, -59, -59), "-17:59:59");
    }

    #[test]
    fn parse_valid() {
        let p = |s: &str| s.parse::<ZoneOffset>().unwrap().total_seconds();
        assert_eq!(p("Z"), 0);
        assert_eq!(p("+00"), 0);
        assert_eq!(p("-00:00"), 0);
        assert_eq!(p("+1"), 3_600);
        assert_eq!(p("-9"), -32_400);
        assert_eq!(p("+01"), 3_600);
        assert_eq!(p("+0130"), 5_400);
        assert_eq!(p("-01:30"), -5_400);
        assert_eq!(p("+013015"), 5_415);
        assert_eq!(p("-01:30:15"), -5_415);
        assert_eq!(p("+18:00"), 64_800);
        assert_eq!(p("-18:00:00"), -64_800);
    }

    #[test]
    fn parse_invalid() {
        for input in [
            "", "ZZ", "0", "+0:00", "+00:0", "+000", "+00000", "+01_00",
            "+01:AA", "+19", "+18:01", "+18:00:01", "+1801", "+180001",
            "@01:00", "+01:00:", "+01:0030", "+0100:30", "z",
        ] {
            let err = input.parse::<ZoneOffset>().unwrap_err();
            assert!(err.is_format(), "{input:?} should fail to parse");
        }
    }

    #[test]
    fn parse_error_messages() {
        insta::assert_snapshot!(
            "+18:01".parse::<ZoneOffset>().unwrap_err(),
            @r#"failed to parse UTC offset from "+18:01" at position 0: parsed UTC offset components do not form a valid offset: parameter 'offset-total-seconds' with value 64860 is not in the required range of -64800..=64800"#,
        );
        insta::assert_snapshot!(
            "+01_00".parse::<ZoneOffset>().unwrap_err(),
            @r#"failed to parse UTC offset from "+01_00" at position 3: parsed value '+01:00', but unparsed input "_00" remains (expected no unparsed input)"#,
        );
        insta::assert_snapshot!(
            "@01:00".parse::<ZoneOffset>().unwrap_err(),
            @r#"failed to parse UTC offset from "@01:00" at position 0: expected `Z`, `+` or `-` at start of UTC offset, but found "@""#,
        );
    }

    #[test]
    fn ordering() {
        let plus2 = ZoneOffset::of_hours(2).unwrap();
        let plus1 = ZoneOffset::of_hours(1).unwrap();
        let minus1 = ZoneOffset::of_hours(-1).unwrap();
        assert!(plus2 < plus1);
        assert!(plus1 < ZoneOffset::UTC);
        assert!(ZoneOffset::UTC < minus1);
        assert_eq!(ZoneOffset::MAX.cmp(&ZoneOffset::MIN), core::cmp::Ordering::Less);
    }

    #[test]
    fn debug() {
        let o = ZoneOffset::of_hours_minutes(-5, -30).unwrap();
        assert_eq!(alloc::format!("{o:?}"), "ZoneOffset(-05:30)");
        assert_eq!(o.negate().to_string(), "+05:30");
    }

    quickcheck::quickcheck! {
        fn prop_roundtrip(offset: ZoneOffset) -> bool {
            offset.to_string().parse::<ZoneOffset>().unwrap() == offset
        }

        fn prop_order_matches_seconds(a: ZoneOffset, b: ZoneOffset) -> bool {
            a.cmp(&b) == b.total_seconds().cmp(&a.total_seconds())
        }
    }
}
