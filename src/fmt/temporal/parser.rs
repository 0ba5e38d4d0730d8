use alloc::sync::Arc;

use crate::{
    civil::{LocalDate, LocalDateTime, LocalTime},
    error::fmt::temporal::Error as E,
    fmt::{offset, util::parse_temporal_fraction, Parsed, Source},
    tz::{Prefix, ZoneId, ZoneIdRepr, ZoneOffset},
    util::{arith::Exact, parse},
    Duration, Error, Instant, OffsetDateTime, Period, ZonedDateTime,
};

/// A parser for the ISO 8601 datetime formats.
///
/// Every public entry point requires that the entire input is consumed.
#[derive(Debug)]
pub(crate) struct DateTimeParser {
    _priv: (),
}

impl DateTimeParser {
    pub(crate) const fn new() -> DateTimeParser {
        DateTimeParser { _priv: () }
    }

    pub(crate) fn parse_date(&self, input: &[u8]) -> Result<LocalDate, Error> {
        let source = Source::new("date", input);
        let parsed = self.parse_date_prefix(&source, input)?;
        source.finish(parsed)
    }

    pub(crate) fn parse_time(&self, input: &[u8]) -> Result<LocalTime, Error> {
        let source = Source::new("time", input);
        let parsed = self.parse_time_prefix(&source, input)?;
        source.finish(parsed)
    }

    pub(crate) fn parse_datetime(
        &self,
        input: &[u8],
    ) -> Result<LocalDateTime, Error> {
        let source = Source::new("datetime", input);
        let parsed = self.parse_datetime_prefix(&source, input)?;
        source.finish(parsed)
    }

    pub(crate) fn parse_offset_datetime(
        &self,
        input: &[u8],
    ) -> Result<OffsetDateTime, Error> {
        let source = Source::new("offset datetime", input);
        let parsed = self.parse_offset_datetime_prefix(&source, input)?;
        source.finish(parsed)
    }

    /// Parses an instant.
    ///
    /// Any offset is accepted. The instant is the datetime at that offset.
    pub(crate) fn parse_instant(&self, input: &[u8]) -> Result<Instant, Error> {
        let source = Source::new("instant", input);
        let Parsed { value: odt, input: rest } =
            self.parse_offset_datetime_prefix(&source, input)?;
        let instant = odt
            .to_instant()
            .map_err(|err| source.fail(input, err.context(E::InvalidInstant)))?;
        source.finish(Parsed { value: instant, input: rest })
    }

    /// Parses a zoned datetime.
    ///
    /// The bracketed zone is optional. When absent, the zone is the offset.
    /// A region zone is not checked against any rules.
    pub(crate) fn parse_zoned(
        &self,
        input: &[u8],
    ) -> Result<ZonedDateTime, Error> {
        let source = Source::new("zoned datetime", input);
        let Parsed { value: odt, input: rest } =
            self.parse_offset_datetime_prefix(&source, input)?;
        let Some((&b'[', inner)) = rest.split_first() else {
            let zone = ZoneId::fixed(odt.offset());
            let zdt = ZonedDateTime::from_parts_unchecked(odt, zone);
            return source.finish(Parsed { value: zdt, input: rest });
        };
        let Some(close) = inner.iter().position(|&b| b == b']') else {
            return Err(source.fail(&inner[inner.len()..], E::ZoneUnclosed));
        };
        let zone = self.parse_zone_id_exact(&source, &inner[..close])?;
        let zdt = ZonedDateTime::from_parts_unchecked(odt, zone);
        source.finish(Parsed { value: zdt, input: &inner[close + 1..] })
    }

    /// Parses a zone identifier: an offset, `UTC`, `GMT` or `UT` optionally
    /// followed by an offset, or a region name.
    pub(crate) fn parse_zone_id(&self, input: &[u8]) -> Result<ZoneId, Error> {
        let source = Source::new("zone id", input);
        self.parse_zone_id_exact(&source, input)
    }

    /// Parses a region name, like `Europe/Paris`.
    pub(crate) fn parse_region(&self, input: &[u8]) -> Result<ZoneId, Error> {
        let source = Source::new("zone region", input);
        self.parse_region_exact(&source, input)
    }

    // OffsetDateTime :::
    //   DateTime Offset
    fn parse_offset_datetime_prefix<'i>(
        &self,
        source: &Source<'i>,
        input: &'i [u8],
    ) -> Result<Parsed<'i, OffsetDateTime>, Error> {
        let Parsed { value: dt, input } =
            self.parse_datetime_prefix(source, input)?;
        let Parsed { value: offset, input } = match input.first() {
            Some(&b'z') => Parsed { value: ZoneOffset::UTC, input: &input[1..] },
            Some(&(b'Z' | b'+' | b'-')) => offset::parse_offset(source, input)?,
            _ => {
                let err = E::expected("UTC offset (`Z`, `+` or `-`)", input);
                return Err(source.fail(input, err));
            }
        };
        Ok(Parsed { value: dt.at_offset(offset), input })
    }

    // DateTime :::
    //   Date DateTimeSeparator Time
    //
    // DateTimeSeparator ::: one of
    //   T t
    fn parse_datetime_prefix<'i>(
        &self,
        source: &Source<'i>,
        input: &'i [u8],
    ) -> Result<Parsed<'i, LocalDateTime>, Error> {
        let Parsed { value: date, input } =
            self.parse_date_prefix(source, input)?;
        let Some((&(b'T' | b't'), rest)) = input.split_first() else {
            return Err(source.fail(input, E::expected("`T`", input)));
        };
        let Parsed { value: time, input } =
            self.parse_time_prefix(source, rest)?;
        Ok(Parsed { value: LocalDateTime::from_parts(date, time), input })
    }

    // Date :::
    //   Year - Month - Day
    fn parse_date_prefix<'i>(
        &self,
        source: &Source<'i>,
        input: &'i [u8],
    ) -> Result<Parsed<'i, LocalDate>, Error> {
        let start = input;
        let Parsed { value: year, input } = self.parse_year(source, input)?;
        let input = self.expect(source, input, b'-', "`-` after year")?;
        let Parsed { value: month, input } =
            parse_two(source, input, E::ParseMonth)?;
        let input = self.expect(source, input, b'-', "`-` after month")?;
        let Parsed { value: day, input } =
            parse_two(source, input, E::ParseDay)?;
        let date = LocalDate::new(year, month, day)
            .map_err(|err| source.fail(start, err.context(E::InvalidDate)))?;
        Ok(Parsed { value: date, input })
    }

    // Time :::
    //   Hour : Minute
    //   Hour : Minute : Second
    //   Hour : Minute : Second TimeFraction
    fn parse_time_prefix<'i>(
        &self,
        source: &Source<'i>,
        input: &'i [u8],
    ) -> Result<Parsed<'i, LocalTime>, Error> {
        let start = input;
        let Parsed { value: hour, input } =
            parse_two(source, input, E::ParseHour)?;
        let input = self.expect(source, input, b':', "`:` after hour")?;
        let Parsed { value: minute, mut input } =
            parse_two(source, input, E::ParseMinute)?;
        let (mut second, mut nanosecond) = (0, 0);
        if let Some((&b':', rest)) = input.split_first() {
            let parsed = parse_two(source, rest, E::ParseSecond)?;
            second = parsed.value;
            let parsed = parse_temporal_fraction(source, parsed.input)?;
            nanosecond = parsed.value.unwrap_or(0);
            input = parsed.input;
        }
        let time = LocalTime::new(hour, minute, second, nanosecond)
            .map_err(|err| source.fail(start, err.context(E::InvalidTime)))?;
        Ok(Parsed { value: time, input })
    }

    // Year :::
    //   DecimalDigit{4}
    //   Sign DecimalDigit{4,9}
    //
    // A `+` sign is only allowed when there are more than four digits.
    fn parse_year<'i>(
        &self,
        source: &Source<'i>,
        input: &'i [u8],
    ) -> Result<Parsed<'i, i32>, Error> {
        let start = input;
        let (sign, input) = match input.split_first() {
            Some((&b'+', rest)) => (Some(1), rest),
            Some((&b'-', rest)) => (Some(-1), rest),
            _ => (None, input),
        };
        let ndigits = input.iter().take_while(|b| b.is_ascii_digit()).count();
        let (digits, rest) = input.split_at(ndigits);
        if ndigits < 4 {
            let err = E::YearTooFewDigits { digits: ndigits };
            return Err(source.fail(input, err));
        } else if ndigits > 9 {
            let err = E::YearTooManyDigits { digits: ndigits };
            return Err(source.fail(input, err));
        }
        let sign = match sign {
            None if ndigits > 4 => {
                return Err(source.fail(start, E::YearRequiresSign));
            }
            Some(1) if ndigits == 4 => {
                return Err(source.fail(start, E::YearPlusSign));
            }
            None => 1,
            Some(sign) => sign,
        };
        // At most nine digits, so this always fits.
        let year = parse::i64(digits)
            .map_err(|err| source.fail(input, err.context(E::ParseYear)))?;
        Ok(Parsed { value: sign * year as i32, input: rest })
    }

    fn parse_zone_id_exact<'i>(
        &self,
        source: &Source<'i>,
        input: &'i [u8],
    ) -> Result<ZoneId, Error> {
        if matches!(input.first(), Some(&(b'Z' | b'+' | b'-'))) {
            let parsed = offset::parse_offset(source, input)?;
            return expect_end(source, parsed).map(ZoneId::fixed);
        }
        for prefix in [Prefix::Utc, Prefix::Gmt, Prefix::Ut] {
            let Some(rest) = input.strip_prefix(prefix.as_str().as_bytes())
            else {
                continue;
            };
            if rest.is_empty() {
                return Ok(ZoneId::prefixed(prefix, ZoneOffset::UTC));
            }
            if matches!(rest.first(), Some(&(b'+' | b'-'))) {
                let parsed = offset::parse_offset(source, rest)?;
                let offset = expect_end(source, parsed)?;
                return Ok(ZoneId::prefixed(prefix, offset));
            }
        }
        self.parse_region_exact(source, input)
    }

    // Region :::
    //   RegionStart RegionChar+
    //
    // RegionStart ::: one of
    //   A-Z a-z
    //
    // RegionChar ::: one of
    //   A-Z a-z 0-9 ~ / . _ + -
    fn parse_region_exact<'i>(
        &self,
        source: &Source<'i>,
        input: &'i [u8],
    ) -> Result<ZoneId, Error> {
        if input.len() < 2 || !input[0].is_ascii_alphabetic() {
            return Err(source.fail(input, E::RegionTooShort));
        }
        for (i, &byte) in input.iter().enumerate() {
            let ok = byte.is_ascii_alphanumeric()
                || matches!(byte, b'~' | b'/' | b'.' | b'_' | b'+' | b'-');
            if !ok {
                return Err(
                    source.fail(&input[i..], E::RegionInvalidByte { byte })
                );
            }
        }
        // Every byte was just checked to be ASCII.
        let name = core::str::from_utf8(input)
            .map_err(|_| source.fail(input, E::RegionTooShort))?;
        trace!("parsed time zone region {name:?}");
        Ok(ZoneId::from_repr(ZoneIdRepr::Region(Arc::from(name))))
    }

    fn expect<'i>(
        &self,
        source: &Source<'i>,
        input: &'i [u8],
        byte: u8,
        what: &'static str,
    ) -> Result<&'i [u8], Error> {
        match input.split_first() {
            Some((&b, rest)) if b == byte => Ok(rest),
            _ => Err(source.fail(input, E::expected(what, input))),
        }
    }
}

/// A parser for ISO 8601 periods and durations.
#[derive(Debug)]
pub(crate) struct PeriodParser {
    _priv: (),
}

impl PeriodParser {
    pub(crate) const fn new() -> PeriodParser {
        PeriodParser { _priv: () }
    }

    // Period :::
    //   Sign? PeriodDesignator Years? Months? Weeks? Days?
    //
    // Years, Months, Weeks, Days :::
    //   Sign? DecimalDigit+ (Y | M | W | D)
    //
    // At least one component is required. Designators are case insensitive.
    // Weeks are folded into days. A leading `-` negates every component.
    pub(crate) fn parse_period(&self, input: &[u8]) -> Result<Period, Error> {
        let source = Source::new("period", input);
        let Parsed { value: negate, input: rest } =
            parse_designator_prefix(&source, input, b'P')?;

        let (mut years, mut months, mut weeks, mut days) = (0, 0, 0, 0);
        let mut found = false;
        let mut rest = rest;
        for (designator, slot) in [
            (b'Y', &mut years),
            (b'M', &mut months),
            (b'W', &mut weeks),
            (b'D', &mut days),
        ] {
            let Some(parsed) = parse_component(&source, rest, designator)?
            else {
                continue;
            };
            *slot = component_to_i32(parsed.value)
                .map_err(|err| source.fail(rest, err))?;
            rest = parsed.input;
            found = true;
        }
        if !found {
            let err = E::EmptyAmount { what: "period" };
            return Err(source.fail(rest, err));
        }
        if let Some((_, _, after)) = split_number(rest) {
            let err = E::expected("`Y`, `M`, `W` or `D` designator", after);
            return Err(source.fail(after, err));
        }

        let days = weeks
            .mul_exact(7, "weeks to days")
            .and_then(|w| w.add_exact(days, "weeks plus days"))
            .map_err(|err| source.fail(input, err))?;
        let mut period = Period::new(years, months, days);
        if negate {
            period = period.negated().map_err(|err| source.fail(input, err))?;
        }
        source.finish(Parsed { value: period, input: rest })
    }

    // Duration :::
    //   Sign? DurationDesignator Days? (TimeDesignator Hours? Minutes?
    //   Seconds?)?
    //
    // Seconds :::
    //   Sign? DecimalDigit+ TimeFraction? S
    //
    // At least one component is required, and at least one must follow a
    // time designator. The fraction carries the sign of the seconds.
    pub(crate) fn parse_duration(
        &self,
        input: &[u8],
    ) -> Result<Duration, Error> {
        let source = Source::new("duration", input);
        let Parsed { value: negate, input: rest } =
            parse_designator_prefix(&source, input, b'P')?;

        let mut total: i128 = 0;
        let mut found = false;
        let mut rest = rest;
        if let Some(parsed) = parse_component(&source, rest, b'D')? {
            total += i128::from(parsed.value) * 86_400_000_000_000;
            rest = parsed.input;
            found = true;
        }
        if let Some((&(b'T' | b't'), after)) = rest.split_first() {
            let mut time_found = false;
            rest = after;
            for (designator, nanos) in
                [(b'H', 3_600_000_000_000), (b'M', 60_000_000_000)]
            {
                if let Some(parsed) =
                    parse_component(&source, rest, designator)?
                {
                    total += i128::from(parsed.value) * nanos;
                    rest = parsed.input;
                    time_found = true;
                }
            }
            if let Some(parsed) = parse_seconds(&source, rest)? {
                total += parsed.value;
                rest = parsed.input;
                time_found = true;
            }
            if !time_found {
                return Err(source.fail(rest, E::EmptyTimeComponents));
            }
            found = true;
        }
        if !found {
            let err = E::EmptyAmount { what: "duration" };
            return Err(source.fail(rest, err));
        }
        if negate {
            total = -total;
        }
        let duration = Duration::from_nanos_wide(total)
            .map_err(|err| source.fail(input, err))?;
        source.finish(Parsed { value: duration, input: rest })
    }
}

/// Narrows a period component to the range of `Period` fields.
fn component_to_i32(n: i64) -> Result<i32, Error> {
    i32::try_from(n)
        .map_err(|_| Error::range("period component", n, i32::MIN, i32::MAX))
}

/// Parses an optional sign followed by the given designator, like `-P`.
/// Returns true when the sign is negative.
fn parse_designator_prefix<'i>(
    source: &Source<'i>,
    input: &'i [u8],
    designator: u8,
) -> Result<Parsed<'i, bool>, Error> {
    let (negate, rest) = match input.split_first() {
        Some((&b'-', rest)) => (true, rest),
        Some((&b'+', rest)) => (false, rest),
        _ => (false, input),
    };
    match rest.split_first() {
        Some((&b, rest)) if b.to_ascii_uppercase() == designator => {
            Ok(Parsed { value: negate, input: rest })
        }
        _ => Err(source.fail(rest, E::expected("`P` designator", rest))),
    }
}

/// Parses `[+-]digits` followed by the given designator.
///
/// When the input doesn't start with a number, or the number is followed
/// by a different designator, nothing is consumed and `None` is returned.
fn parse_component<'i>(
    source: &Source<'i>,
    input: &'i [u8],
    designator: u8,
) -> Result<Option<Parsed<'i, i64>>, Error> {
    let Some((negative, digits, rest)) = split_number(input) else {
        return Ok(None);
    };
    match rest.first() {
        Some(&b) if b.to_ascii_uppercase() == designator => {}
        _ => return Ok(None),
    }
    let n = parse::signed_i64(negative, digits).map_err(|err| {
        source.fail(input, err.context(E::AmountComponent { designator }))
    })?;
    Ok(Some(Parsed { value: n, input: &rest[1..] }))
}

/// Parses `[+-]digits[.fraction]S` as a number of nanoseconds.
fn parse_seconds<'i>(
    source: &Source<'i>,
    input: &'i [u8],
) -> Result<Option<Parsed<'i, i128>>, Error> {
    let Some((negative, digits, rest)) = split_number(input) else {
        return Ok(None);
    };
    let Parsed { value: fraction, input: rest } =
        parse_temporal_fraction(source, rest)?;
    match rest.first() {
        Some(&(b'S' | b's')) => {}
        _ if fraction.is_some() => {
            return Err(source.fail(rest, E::FractionWithoutSeconds));
        }
        _ => return Ok(None),
    }
    let seconds = parse::signed_i64(negative, digits).map_err(|err| {
        source.fail(input, err.context(E::AmountComponent { designator: b'S' }))
    })?;
    let fraction = i128::from(fraction.unwrap_or(0));
    let fraction = if negative { -fraction } else { fraction };
    let nanos = i128::from(seconds) * 1_000_000_000 + fraction;
    Ok(Some(Parsed { value: nanos, input: &rest[1..] }))
}

/// Splits an optionally signed run of ASCII digits off the front of the
/// input. The flag is true for a leading `-`. Returns `None` when there are
/// no digits.
fn split_number(input: &[u8]) -> Option<(bool, &[u8], &[u8])> {
    let (negative, rest) = match input.split_first() {
        Some((&b'-', rest)) => (true, rest),
        Some((&b'+', rest)) => (false, rest),
        _ => (false, input),
    };
    let ndigits = rest.iter().take_while(|b| b.is_ascii_digit()).count();
    if ndigits == 0 {
        return None;
    }
    let (digits, rest) = rest.split_at(ndigits);
    Some((negative, digits, rest))
}

/// Parses exactly two ASCII digits from the start of `input`.
fn parse_two<'i>(
    source: &Source<'i>,
    input: &'i [u8],
    invalid: E,
) -> Result<Parsed<'i, i8>, Error> {
    let Some((digits, rest)) = parse::split(input, 2) else {
        let err = Error::from(E::expected("two digits", input)).context(invalid);
        return Err(source.fail(input, err));
    };
    let n = parse::i64(digits)
        .map_err(|err| source.fail(input, err.context(invalid)))?;
    Ok(Parsed { value: n as i8, input: rest })
}

/// Returns the parsed value only if it consumed everything in its slice.
///
/// This is like `Source::finish`, but for slices that end before the full
/// input does.
fn expect_end<'i, V: core::fmt::Display>(
    source: &Source<'i>,
    parsed: Parsed<'i, V>,
) -> Result<V, Error> {
    if parsed.input.is_empty() {
        return Ok(parsed.value);
    }
    let err = crate::error::fmt::Error::into_full_error(
        &parsed.value,
        parsed.input,
    );
    Err(source.fail(parsed.input, err))
}
