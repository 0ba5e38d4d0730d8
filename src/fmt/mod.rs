/*!
Support for printing and parsing values.

The canonical ISO 8601 formats are available through the `Display` and
`FromStr` implementations on each value type. This module contains the
supporting pieces:

* The [`Write`] trait, which is like [`core::fmt::Write`] but returns this
crate's [`Error`] type. It is implemented for `String`, `Vec<u8>` and, via
the [`StdWrite`] and [`FmtWrite`] adapters, for [`std::io::Write`] and
[`core::fmt::Write`] implementations.
* The [`strtime`] module, which parses and prints values according to a
`strptime`/`strftime` style format string.

# Example

```
use isochron::{fmt::strtime, OffsetDateTime};

let odt: OffsetDateTime = "2010-12-03T11:30:00+01:00".parse()?;
let string = strtime::format("%Y %m %-d %H %M %S %:z", odt)?;
assert_eq!(string, "2010 12 3 11 30 00 +01:00");

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

use alloc::{string::String, vec::Vec};

use crate::{
    error::{fmt::Error as E, IntoError},
    util::parse,
    Error,
};

use self::util::{Decimal, DecimalFormatter, Fractional, FractionalFormatter};

pub(crate) mod offset;
pub(crate) mod serde;
pub mod strtime;
pub(crate) mod temporal;
pub(crate) mod util;

/// The result of parsing a value out of a slice of bytes.
///
/// This contains both the parsed value and the remaining input after the
/// value. This makes it possible to parse, for example, a date as a prefix of
/// a datetime without knowing ahead of time where it ends.
#[derive(Clone, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub(crate) struct Parsed<'i, V> {
    /// The value parsed.
    pub(crate) value: V,
    /// The remaining unparsed input.
    pub(crate) input: &'i [u8],
}

impl<'i, V: core::fmt::Debug> core::fmt::Debug for Parsed<'i, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Parsed")
            .field("value", &self.value)
            .field("input", &crate::util::escape::Bytes(self.input))
            .finish()
    }
}

/// The complete input given to a parser, along with a description of what is
/// being parsed.
///
/// Parsers pass this around so that a failure deep inside a grammar can be
/// reported with the original text and the byte offset of the failure.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Source<'i> {
    what: &'static str,
    full: &'i [u8],
}

impl<'i> Source<'i> {
    pub(crate) fn new(what: &'static str, full: &'i [u8]) -> Source<'i> {
        Source { what, full }
    }

    /// Returns the complete input.
    #[cfg(test)]
    pub(crate) fn full(&self) -> &'i [u8] {
        self.full
    }

    /// Returns an error for a failure that occurred at the start of `at`.
    ///
    /// `at` must be a suffix of the complete input.
    pub(crate) fn fail(&self, at: &'i [u8], err: impl IntoError) -> Error {
        let position = parse::offseter(self.full)(at);
        err.into_error().parse_text(self.what, self.full, position)
    }

    /// Returns the parsed value if and only if it consumed the entire input.
    pub(crate) fn finish<V: core::fmt::Display>(
        &self,
        parsed: Parsed<'i, V>,
    ) -> Result<V, Error> {
        if parsed.input.is_empty() {
            return Ok(parsed.value);
        }
        let err = E::into_full_error(&parsed.value, parsed.input);
        Err(self.fail(parsed.input, err))
    }
}

/// A trait for printing values into a sink.
///
/// This is implemented for `String` and `Vec<u8>`. Use [`StdWrite`] for
/// [`std::io::Write`] implementations and [`FmtWrite`] for
/// [`core::fmt::Write`] implementations.
pub trait Write {
    /// Write the given string to this writer, returning whether the write
    /// succeeded or not.
    fn write_str(&mut self, string: &str) -> Result<(), Error>;

    /// Write the given character to this writer, returning whether the write
    /// succeeded or not.
    #[inline]
    fn write_char(&mut self, char: char) -> Result<(), Error> {
        self.write_str(char.encode_utf8(&mut [0; 4]))
    }
}

impl Write for String {
    #[inline]
    fn write_str(&mut self, string: &str) -> Result<(), Error> {
        self.push_str(string);
        Ok(())
    }
}

impl Write for Vec<u8> {
    #[inline]
    fn write_str(&mut self, string: &str) -> Result<(), Error> {
        self.extend_from_slice(string.as_bytes());
        Ok(())
    }
}

impl<W: ?Sized + Write> Write for &mut W {
    #[inline]
    fn write_str(&mut self, string: &str) -> Result<(), Error> {
        (**self).write_str(string)
    }

    #[inline]
    fn write_char(&mut self, char: char) -> Result<(), Error> {
        (**self).write_char(char)
    }
}

/// An adapter for using `std::io::Write` implementations with `fmt::Write`.
///
/// # Example
///
/// ```
/// use isochron::{
///     civil::date,
///     fmt::{strtime::BrokenDownTime, StdWrite},
/// };
///
/// let mut buf = vec![];
/// let tm = BrokenDownTime::from(date(2008, 6, 30));
/// tm.format("%A, %B %-d, %Y", StdWrite(&mut buf))?;
/// assert_eq!(buf, b"Monday, June 30, 2008");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[cfg(feature = "std")]
#[derive(Clone, Debug)]
pub struct StdWrite<W>(pub W);

#[cfg(feature = "std")]
impl<W: std::io::Write> Write for StdWrite<W> {
    #[inline]
    fn write_str(&mut self, string: &str) -> Result<(), Error> {
        self.0.write_all(string.as_bytes()).map_err(|err| {
            Error::from_args(format_args!("failed to write output: {err}"))
        })
    }
}

/// An adapter for using `core::fmt::Write` implementations with
/// `fmt::Write`.
///
/// This is what the `Display` implementations in this crate use to write
/// into a `core::fmt::Formatter`.
#[derive(Clone, Debug)]
pub struct FmtWrite<W>(pub W);

impl<W: core::fmt::Write> Write for FmtWrite<W> {
    #[inline]
    fn write_str(&mut self, string: &str) -> Result<(), Error> {
        self.0
            .write_str(string)
            .map_err(|_| Error::from(E::StdFmtWriteAdapter))
    }
}

/// Printing helpers available on every `Write` implementation.
pub(crate) trait WriteExt: Write {
    /// Write the given number as a decimal using ASCII digits to this buffer.
    /// The given formatter controls how the decimal is formatted.
    #[inline]
    fn write_int(
        &mut self,
        formatter: &DecimalFormatter,
        n: impl Into<i64>,
    ) -> Result<(), Error> {
        self.write_decimal(&Decimal::new(formatter, n.into()))
    }

    /// Write the given fractional number using ASCII digits to this buffer.
    /// The given formatter controls how the fractional number is formatted.
    #[inline]
    fn write_fraction(
        &mut self,
        formatter: &FractionalFormatter,
        n: impl Into<i64>,
    ) -> Result<(), Error> {
        self.write_fractional(&Fractional::new(formatter, n.into()))
    }

    /// Write the given decimal number to this buffer.
    #[inline]
    fn write_decimal(&mut self, decimal: &Decimal) -> Result<(), Error> {
        self.write_str(decimal.as_str())
    }

    /// Write the given fractional number to this buffer.
    #[inline]
    fn write_fractional(
        &mut self,
        fractional: &Fractional,
    ) -> Result<(), Error> {
        self.write_str(fractional.as_str())
    }
}

impl<W: Write> WriteExt for W {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_reports_trailing_input() {
        let source = Source::new("number", b"123abc");
        let parsed = Parsed { value: 123, input: &source.full()[3..] };
        let err = source.finish(parsed).unwrap_err();
        assert_eq!(err.position(), Some(3));
        insta::assert_snapshot!(
            err,
            @r#"failed to parse number from "123abc" at position 3: parsed value '123', but unparsed input "abc" remains (expected no unparsed input)"#,
        );
    }

    #[test]
    fn write_sinks() {
        let mut s = String::new();
        s.write_str("ab").unwrap();
        (&mut s).write_char('c').unwrap();
        assert_eq!(s, "abc");

        let mut v: Vec<u8> = Vec::new();
        v.write_int(&DecimalFormatter::new().padding(4), 42).unwrap();
        assert_eq!(v, b"0042");

        let mut buf = String::new();
        FmtWrite(&mut buf).write_str("xyz").unwrap();
        assert_eq!(buf, "xyz");
    }
}
