use crate::{
    error::fmt::util::Error as E,
    fmt::{Parsed, Source},
    util::parse,
    Error,
};

/// Settings for writing an integer as ASCII decimal digits.
///
/// Printing goes through this instead of `core::fmt` since every printed
/// value in this crate is a small integer with at most a little padding.
///
/// A sign is only written for negative numbers unless `force_sign` is used.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DecimalFormatter {
    /// `Some(true)` writes `+0` for zero, `Some(false)` writes `-0`.
    force_sign: Option<bool>,
    min_digits: u8,
    pad: u8,
}

impl DecimalFormatter {
    pub(crate) const fn new() -> DecimalFormatter {
        DecimalFormatter { force_sign: None, min_digits: 0, pad: b'0' }
    }

    #[cfg(test)]
    pub(crate) const fn format(&self, value: i64) -> Decimal {
        Decimal::new(self, value)
    }

    /// Always writes a sign. `zero_is_positive` picks the sign of zero.
    pub(crate) const fn force_sign(
        self,
        zero_is_positive: bool,
    ) -> DecimalFormatter {
        DecimalFormatter { force_sign: Some(zero_is_positive), ..self }
    }

    /// Pads the digits (not counting the sign) to at least `digits` bytes.
    /// Anything above 19 is treated as 19.
    pub(crate) const fn padding(self, digits: u8) -> DecimalFormatter {
        let min_digits =
            if digits > Decimal::MAX_DIGITS { Decimal::MAX_DIGITS } else { digits };
        DecimalFormatter { min_digits, ..self }
    }

    /// The byte used for padding. Defaults to `0`.
    pub(crate) const fn padding_byte(self, byte: u8) -> DecimalFormatter {
        DecimalFormatter { pad: byte, ..self }
    }
}

impl Default for DecimalFormatter {
    fn default() -> DecimalFormatter {
        DecimalFormatter::new()
    }
}

/// An integer rendered into a fixed size buffer, right aligned.
#[derive(Debug)]
pub(crate) struct Decimal {
    buf: [u8; Decimal::CAPACITY as usize],
    start: u8,
}

impl Decimal {
    /// The digits in `u64::MAX`, enough for the magnitude of any `i64`.
    const MAX_DIGITS: u8 = 19;
    /// One extra byte for the sign.
    const CAPACITY: u8 = Decimal::MAX_DIGITS + 1;

    pub(crate) const fn new(formatter: &DecimalFormatter, value: i64) -> Decimal {
        let mut dec =
            Decimal { buf: [0; Decimal::CAPACITY as usize], start: Decimal::CAPACITY };
        let mut magnitude = value.unsigned_abs();
        let mut digits = 0;
        loop {
            dec.start -= 1;
            dec.buf[dec.start as usize] = b'0' + (magnitude % 10) as u8;
            magnitude /= 10;
            digits += 1;
            if magnitude == 0 {
                break;
            }
        }
        // `i64::MIN` has 19 digits, so padding and sign still fit.
        while digits < formatter.min_digits {
            dec.start -= 1;
            dec.buf[dec.start as usize] = formatter.pad;
            digits += 1;
        }
        let sign = match formatter.force_sign {
            _ if value < 0 => Some(b'-'),
            Some(_) if value > 0 => Some(b'+'),
            Some(true) => Some(b'+'),
            Some(false) => Some(b'-'),
            None => None,
        };
        if let Some(sign) = sign {
            dec.start -= 1;
            dec.buf[dec.start as usize] = sign;
        }
        dec
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.buf[usize::from(self.start)..]
    }

    pub(crate) fn as_str(&self) -> &str {
        // SAFETY: Only ASCII digits, signs and the (ASCII) padding byte are
        // ever written to the rendered part of the buffer.
        unsafe { core::str::from_utf8_unchecked(self.as_bytes()) }
    }
}

/// Settings for writing a nanosecond count as the digits after a decimal
/// point.
///
/// Without a precision, trailing zeros are dropped. With `grouped`, the
/// digits are then extended to a multiple of 3, which is how fractional
/// seconds appear in ISO 8601 output (`.5` becomes `.500`).
#[derive(Clone, Copy, Debug)]
pub(crate) struct FractionalFormatter {
    precision: Option<u8>,
    grouped: bool,
}

impl FractionalFormatter {
    pub(crate) const fn new() -> FractionalFormatter {
        FractionalFormatter { precision: None, grouped: false }
    }

    pub(crate) const fn grouped(self, yes: bool) -> FractionalFormatter {
        FractionalFormatter { grouped: yes, ..self }
    }

    pub(crate) const fn format(&self, value: i64) -> Fractional {
        Fractional::new(self, value)
    }

    /// Writes exactly this many digits (at most 9), truncating the rest.
    pub(crate) const fn precision(
        self,
        precision: Option<u8>,
    ) -> FractionalFormatter {
        let precision = match precision {
            Some(p) if p > 9 => Some(9),
            p => p,
        };
        FractionalFormatter { precision, ..self }
    }
}

/// A nanosecond count rendered as 9 zero padded digits, of which a prefix
/// is kept.
///
/// The kept prefix is empty when the precision is `0`, or when no
/// precision is set and the value is `0`.
#[derive(Debug)]
pub(crate) struct Fractional {
    digits: [u8; 9],
    len: u8,
}

impl Fractional {
    /// # Panics
    ///
    /// When `value` is not in `0..=999_999_999`.
    pub(crate) const fn new(
        formatter: &FractionalFormatter,
        value: i64,
    ) -> Fractional {
        assert!(0 <= value && value <= 999_999_999);
        let mut digits = [b'0'; 9];
        let mut rest = value;
        let mut i = digits.len();
        while rest > 0 {
            i -= 1;
            digits[i] = b'0' + (rest % 10) as u8;
            rest /= 10;
        }
        let len = match formatter.precision {
            Some(precision) => precision,
            None => {
                let mut len = 9;
                while len > 0 && digits[len as usize - 1] == b'0' {
                    len -= 1;
                }
                if formatter.grouped {
                    (len + 2) / 3 * 3
                } else {
                    len
                }
            }
        };
        Fractional { digits, len }
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.digits[..usize::from(self.len)]
    }

    pub(crate) fn as_str(&self) -> &str {
        // SAFETY: `digits` only ever holds ASCII digits.
        unsafe { core::str::from_utf8_unchecked(self.as_bytes()) }
    }
}

/// Parses an optional fractional number from the start of `input`.
///
/// If `input` does not begin with a `.` (or a `,`), then this returns `None`
/// and no input is consumed. Otherwise, 1 to 9 ASCII digits are parsed after
/// the decimal separator, and the value returned is in units of nanoseconds.
pub(crate) fn parse_temporal_fraction<'i>(
    source: &Source<'i>,
    input: &'i [u8],
) -> Result<Parsed<'i, Option<i32>>, Error> {
    // TimeFraction :::
    //   TemporalDecimalSeparator DecimalDigit{1,9}
    //
    // TemporalDecimalSeparator ::: one of
    //   . ,
    let Some((&(b'.' | b','), rest)) = input.split_first() else {
        return Ok(Parsed { value: None, input });
    };
    let len = rest.iter().take(9).take_while(|b| b.is_ascii_digit()).count();
    if len == 0 {
        return Err(source.fail(rest, E::MissingFractionalDigits));
    }
    let (digits, after) = rest.split_at(len);
    // At most 9 digits, so this fits in an `i32`.
    let nanoseconds =
        parse::fraction(digits, 9).map_err(|err| source.fail(rest, err))?;
    Ok(Parsed { value: Some(nanoseconds as i32), input: after })
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn decimal() {
        let f = |fmt: DecimalFormatter, n: i64| fmt.format(n).as_str().to_string();
        let d = DecimalFormatter::new();

        assert_eq!(f(d, i64::MIN), "-9223372036854775808");
        assert_eq!(f(d, i64::MAX), "9223372036854775807");
        assert_eq!(f(d.force_sign(true), i64::MAX), "+9223372036854775807");
        assert_eq!(f(d.padding(30), i64::MIN), "-9223372036854775808");
        assert_eq!(f(d, 0), "0");
        assert_eq!(f(d.force_sign(true), 0), "+0");
        assert_eq!(f(d.force_sign(false), 0), "-0");

        // Years.
        assert_eq!(f(d.padding(4), 0), "0000");
        assert_eq!(f(d.padding(4), 44), "0044");
        assert_eq!(f(d.padding(4), -44), "-0044");
        assert_eq!(f(d.padding(4).force_sign(true), 12_345), "+12345");
        assert_eq!(f(d.padding(2).padding_byte(b' '), 7), " 7");
    }

    #[test]
    fn fractional() {
        let f = |fmt: FractionalFormatter, n| fmt.format(n).as_str().to_string();
        let d = FractionalFormatter::new();

        assert_eq!(f(d, 0), "");
        assert_eq!(f(d, 500_000_000), "5");
        assert_eq!(f(d, 123_456_000), "123456");
        assert_eq!(f(d, 789), "000000789");

        assert_eq!(f(d.grouped(true), 0), "");
        assert_eq!(f(d.grouped(true), 500_000_000), "500");
        assert_eq!(f(d.grouped(true), 123_400_000), "123400");
        assert_eq!(f(d.grouped(true), 1_000), "000001");
        assert_eq!(f(d.grouped(true), 500), "000000500");

        assert_eq!(f(d.precision(Some(0)), 999), "");
        assert_eq!(f(d.precision(Some(1)), 0), "0");
        assert_eq!(f(d.precision(Some(6)), 123_000_000), "123000");
        // Truncated, not rounded.
        assert_eq!(f(d.precision(Some(2)), 999_000_000), "99");
        assert_eq!(f(d.precision(Some(12)), 1), "000000001");
    }

    #[test]
    fn temporal_fraction() {
        let parse = |s: &'static str| {
            let source = Source::new("fraction", s.as_bytes());
            parse_temporal_fraction(&source, s.as_bytes())
                .map(|p| (p.value, p.input.len()))
        };

        assert_eq!(parse("").unwrap(), (None, 0));
        assert_eq!(parse("Z").unwrap(), (None, 1));
        assert_eq!(parse(".5").unwrap(), (Some(500_000_000), 0));
        assert_eq!(parse(",000000500Z").unwrap(), (Some(500), 1));
        // A tenth digit is left for the caller.
        assert_eq!(parse(".1234567891").unwrap(), (Some(123_456_789), 1));

        let err = parse(".Z").unwrap_err();
        assert_eq!(err.position(), Some(1));
        insta::assert_snapshot!(
            err,
            @r#"failed to parse fraction from ".Z" at position 1: found decimal separator, but did not find any digits after it"#,
        );
    }
}
