use crate::{error, util::escape};

#[derive(Clone, Debug)]
pub(crate) enum Error {
    AmountComponent { designator: u8 },
    EmptyAmount { what: &'static str },
    EmptyTimeComponents,
    Expected { expected: &'static str, found: Option<u8> },
    FractionWithoutSeconds,
    InvalidDate,
    InvalidInstant,
    InvalidTime,
    ParseDay,
    ParseHour,
    ParseMinute,
    ParseMonth,
    ParseSecond,
    ParseYear,
    RegionInvalidByte { byte: u8 },
    RegionTooShort,
    YearPlusSign,
    YearRequiresSign,
    YearTooFewDigits { digits: usize },
    YearTooManyDigits { digits: usize },
    ZoneUnclosed,
}

impl Error {
    /// Returns an error for when `expected` was required at the start of
    /// `input`, but something else (or nothing) was found.
    pub(crate) fn expected(expected: &'static str, input: &[u8]) -> Error {
        Error::Expected { expected, found: input.first().copied() }
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
        error::ErrorKind::FmtTemporal(err).into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            AmountComponent { designator } => write!(
                f,
                "failed to parse integer component before `{designator}`",
                designator = escape::Byte(designator),
            ),
            EmptyAmount { what } => write!(
                f,
                "expected at least one component in {what}, \
                 but none were found",
            ),
            EmptyTimeComponents => f.write_str(
                "expected at least one hour, minute or second component \
                 after time designator `T`",
            ),
            Expected { expected, found: None } => {
                write!(f, "expected {expected}, but found end of input")
            }
            Expected { expected, found: Some(byte) } => write!(
                f,
                "expected {expected}, but found {byte:?}",
                byte = escape::Byte(byte),
            ),
            FractionWithoutSeconds => f.write_str(
                "fractional component is only allowed on seconds, \
                 but did not find `S` after it",
            ),
            InvalidDate => {
                f.write_str("parsed date components are not a valid date")
            }
            InvalidInstant => f.write_str(
                "parsed datetime and offset are not in the supported range \
                 of instants",
            ),
            InvalidTime => {
                f.write_str("parsed time components are not a valid time")
            }
            ParseDay => {
                f.write_str("failed to parse day (requires two digits)")
            }
            ParseHour => {
                f.write_str("failed to parse hour (requires two digits)")
            }
            ParseMinute => {
                f.write_str("failed to parse minute (requires two digits)")
            }
            ParseMonth => {
                f.write_str("failed to parse month (requires two digits)")
            }
            ParseSecond => {
                f.write_str("failed to parse second (requires two digits)")
            }
            ParseYear => f.write_str("failed to parse year"),
            RegionInvalidByte { byte } => write!(
                f,
                "invalid byte {byte:?} in time zone region name \
                 (expected ASCII letters, digits or one of `~/._+-`)",
                byte = escape::Byte(byte),
            ),
            RegionTooShort => f.write_str(
                "time zone region name must be at least two bytes long \
                 and start with an ASCII letter",
            ),
            YearPlusSign => f.write_str(
                "a year with exactly four digits must not have a `+` sign",
            ),
            YearRequiresSign => f.write_str(
                "a year with more than four digits requires a `+` or `-` sign",
            ),
            YearTooFewDigits { digits } => write!(
                f,
                "expected at least four digits for year, but found {digits}",
            ),
            YearTooManyDigits { digits } => write!(
                f,
                "expected at most nine digits for year, but found {digits}",
            ),
            ZoneUnclosed => f.write_str(
                "expected `]` to close bracketed time zone, \
                 but found end of input",
            ),
        }
    }
}
