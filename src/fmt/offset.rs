/*!
Parsing of UTC offsets.

The grammar parsed here is:

```text
Offset :::
  Z
  Sign Hour
  Sign Hour : Minute
  Sign Hour : Minute : Second
  Sign Hour Minute
  Sign Hour Minute Second

Sign ::: one of
  + -

Hour :::
  DecimalDigit DecimalDigit
  DecimalDigit              (only when nothing follows)

Minute, Second :::
  DecimalDigit DecimalDigit
```

The separator style is fixed by whatever follows the hours. That is, once a
`:` separates hours and minutes, seconds must also be separated by a `:`.
*/

use crate::{
    error::fmt::offset::Error as E,
    fmt::{Parsed, Source},
    tz::ZoneOffset,
    util::parse,
    Error,
};

/// Parses a UTC offset that must make up the entirety of `input`.
pub(crate) fn parse(input: &[u8]) -> Result<ZoneOffset, Error> {
    let source = Source::new("UTC offset", input);
    let parsed = parse_offset(&source, input)?;
    source.finish(parsed)
}

/// Parses a UTC offset from the beginning of `input`.
///
/// Only a `Z`, `+` or `-` can start an offset. Callers that treat the offset
/// as optional should check for one of those before calling this.
pub(crate) fn parse_offset<'i>(
    source: &Source<'i>,
    input: &'i [u8],
) -> Result<Parsed<'i, ZoneOffset>, Error> {
    let start = input;
    let Some((&first, input)) = input.split_first() else {
        return Err(source.fail(input, E::EndOfInput));
    };
    let sign: i32 = match first {
        b'Z' => return Ok(Parsed { value: ZoneOffset::UTC, input }),
        b'+' => 1,
        b'-' => -1,
        byte => return Err(source.fail(start, E::ExpectedSign { byte })),
    };

    let Parsed { value: hours, input } = parse_hours(source, input)?;
    let (mut minutes, mut seconds) = (0, 0);
    let mut input = input;
    if let Some((&b':', rest)) = input.split_first() {
        let parsed =
            parse_two(source, rest, E::EndOfInputMinute, E::ParseMinutes)?;
        minutes = parsed.value;
        input = parsed.input;
        if let Some((&b':', rest)) = input.split_first() {
            let parsed =
                parse_two(source, rest, E::EndOfInputSecond, E::ParseSeconds)?;
            seconds = parsed.value;
            input = parsed.input;
        }
    } else if starts_with_digit(input) {
        let parsed =
            parse_two(source, input, E::EndOfInputMinute, E::ParseMinutes)?;
        minutes = parsed.value;
        input = parsed.input;
        if starts_with_digit(input) {
            let parsed =
                parse_two(source, input, E::EndOfInputSecond, E::ParseSeconds)?;
            seconds = parsed.value;
            input = parsed.input;
        }
    }

    let offset = ZoneOffset::of_hours_minutes_seconds(
        sign * hours,
        sign * minutes,
        sign * seconds,
    )
    .map_err(|err| source.fail(start, err.context(E::InvalidOffset)))?;
    Ok(Parsed { value: offset, input })
}

fn parse_hours<'i>(
    source: &Source<'i>,
    input: &'i [u8],
) -> Result<Parsed<'i, i32>, Error> {
    match input {
        [] => Err(source.fail(input, E::EndOfInputHour)),
        [digit] => {
            let hours = parse::i64(core::slice::from_ref(digit))
                .map_err(|err| source.fail(input, err.context(E::ParseHours)))?;
            Ok(Parsed { value: hours as i32, input: &input[1..] })
        }
        _ => parse_two(source, input, E::EndOfInputHour, E::ParseHours),
    }
}

/// Parses exactly two ASCII digits from the start of `input`.
fn parse_two<'i>(
    source: &Source<'i>,
    input: &'i [u8],
    end_of_input: E,
    invalid: E,
) -> Result<Parsed<'i, i32>, Error> {
    let Some((digits, rest)) = parse::split(input, 2) else {
        return Err(source.fail(input, end_of_input));
    };
    let n = parse::i64(digits)
        .map_err(|err| source.fail(input, err.context(invalid)))?;
    Ok(Parsed { value: n as i32, input: rest })
}

fn starts_with_digit(input: &[u8]) -> bool {
    input.first().map_or(false, |b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefix(input: &str) -> (i32, &str) {
        let source = Source::new("UTC offset", input.as_bytes());
        let parsed = parse_offset(&source, input.as_bytes()).unwrap();
        let rest = core::str::from_utf8(parsed.input).unwrap();
        (parsed.value.total_seconds(), rest)
    }

    #[test]
    fn prefixes() {
        assert_eq!(prefix("Z[UTC]"), (0, "[UTC]"));
        assert_eq!(prefix("+01:00[Europe/Paris]"), (3_600, "[Europe/Paris]"));
        assert_eq!(prefix("-0530 "), (-19_800, " "));
        assert_eq!(prefix("+01:30:15.5"), (5_415, ".5"));
    }

    #[test]
    fn positions() {
        let pos = |s: &str| parse(s.as_bytes()).unwrap_err().position();
        assert_eq!(pos(""), Some(0));
        assert_eq!(pos("ZZ"), Some(1));
        assert_eq!(pos("+0:00"), Some(1));
        assert_eq!(pos("+00:0"), Some(4));
        assert_eq!(pos("+01:AA"), Some(4));
        assert_eq!(pos("+19"), Some(0));
    }

    #[test]
    fn error_messages() {
        insta::assert_snapshot!(
            parse(b"+01:AA").unwrap_err(),
            @r#"failed to parse UTC offset from "+01:AA" at position 4: failed to parse minutes in UTC offset (requires a two digit integer): invalid digit, expected 0-9 but got A"#,
        );
        insta::assert_snapshot!(
            parse(b"+00:0").unwrap_err(),
            @r#"failed to parse UTC offset from "+00:0" at position 4: expected two digit minute after hours, but found end of input"#,
        );
    }
}
