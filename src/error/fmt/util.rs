use crate::{error, util::escape};

#[derive(Clone, Debug)]
pub(crate) enum Error {
    FractionInvalidDigit { byte: u8 },
    FractionNoDigitsFound,
    FractionTooManyDigits { max: usize },
    InvalidDigit { byte: u8 },
    MissingFractionalDigits,
    NoDigitsFound,
    TooBig,
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
        error::ErrorKind::FmtUtil(err).into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            FractionInvalidDigit { byte } => write!(
                f,
                "invalid fractional digit, expected 0-9 but got {byte}",
                byte = escape::Byte(byte),
            ),
            FractionNoDigitsFound => {
                f.write_str("invalid fraction with no digits")
            }
            FractionTooManyDigits { max } => {
                write!(f, "fraction has too many digits (maximum is {max})")
            }
            InvalidDigit { byte } => write!(
                f,
                "invalid digit, expected 0-9 but got {byte}",
                byte = escape::Byte(byte),
            ),
            MissingFractionalDigits => f.write_str(
                "found decimal separator, \
                 but did not find any digits after it",
            ),
            NoDigitsFound => f.write_str("invalid number, no digits found"),
            TooBig => {
                f.write_str("number too big to parse into 64-bit integer")
            }
        }
    }
}
