use alloc::boxed::Box;

use crate::{civil::Weekday, error, util::escape};

#[derive(Clone, Debug)]
pub(crate) enum Error {
    ColonCount { directive: u8 },
    DirectiveFailure { directive: u8, colons: u8 },
    ExpectedDigits { what: &'static str },
    ExpectedDirectiveAfterColons,
    ExpectedDirectiveAfterFlag { flag: u8 },
    ExpectedDirectiveAfterWidth,
    ExpectedMatchLiteralByte { expected: u8, found: u8 },
    ExpectedMatchLiteralEndOfInput { expected: u8 },
    ExpectedName { what: &'static str },
    FailedStrftime,
    FailedWidth,
    InvalidDate,
    InvalidTime,
    MismatchDayOfYear { parsed: i16, got: i16 },
    MismatchWeekday { parsed: Weekday, got: Weekday },
    TimeUnitGap { smaller: &'static str, bigger: &'static str },
    Unconsumed { remaining: Box<[u8]> },
    UnexpectedEndAfterPercent,
    UnknownDirective { directive: u8 },
}

impl Error {
    pub(crate) fn unconsumed(remaining: &[u8]) -> Error {
        Error::Unconsumed { remaining: remaining.into() }
    }
}

impl error::IntoError for Error {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::FmtStrtime(err).into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            ColonCount { directive } => write!(
                f,
                "invalid number of `:` in `%{directive}` directive",
                directive = escape::Byte(directive),
            ),
            DirectiveFailure { directive, colons } => {
                f.write_str("%")?;
                for _ in 0..colons {
                    f.write_str(":")?;
                }
                write!(f, "{directive} failed", directive = escape::Byte(directive))
            }
            ExpectedDigits { what } => {
                write!(f, "expected one or more digits for {what}")
            }
            ExpectedDirectiveAfterColons => f.write_str(
                "expected to find directive after colons, \
                 but found end of format string",
            ),
            ExpectedDirectiveAfterFlag { flag } => write!(
                f,
                "expected to find directive after flag `{flag}`, \
                 but found end of format string",
                flag = escape::Byte(flag),
            ),
            ExpectedDirectiveAfterWidth => f.write_str(
                "expected to find directive after width, \
                 but found end of format string",
            ),
            ExpectedMatchLiteralByte { expected, found } => write!(
                f,
                "expected to match literal byte {expected:?} from \
                 format string, but found byte {found:?} in input",
                expected = escape::Byte(expected),
                found = escape::Byte(found),
            ),
            ExpectedMatchLiteralEndOfInput { expected } => write!(
                f,
                "expected to match literal byte {expected:?} from \
                 format string, but found end of input",
                expected = escape::Byte(expected),
            ),
            ExpectedName { what } => {
                write!(f, "expected to find a recognized {what} name")
            }
            FailedStrftime => f.write_str("strftime formatting failed"),
            FailedWidth => f.write_str("failed to parse directive width"),
            InvalidDate => f.write_str("invalid date"),
            InvalidTime => f.write_str("invalid time"),
            MismatchDayOfYear { parsed, got } => write!(
                f,
                "parsed day of year {parsed} does not match \
                 day of year {got} from parsed date",
            ),
            MismatchWeekday { parsed, got } => write!(
                f,
                "parsed weekday {parsed} does not match \
                 weekday {got} from parsed date",
            ),
            TimeUnitGap { smaller, bigger } => write!(
                f,
                "format includes {smaller} but not {bigger} \
                 (smaller time units require all bigger ones)",
            ),
            Unconsumed { ref remaining } => write!(
                f,
                "strptime expects to consume the entire input, \
                 but {remaining:?} remains unparsed",
                remaining = escape::Bytes(remaining),
            ),
            UnexpectedEndAfterPercent => f.write_str(
                "expected to find directive after `%`, \
                 but found end of format string",
            ),
            UnknownDirective { directive } => write!(
                f,
                "found unrecognized directive `{directive}`",
                directive = escape::Byte(directive),
            ),
        }
    }
}
