use crate::{error, util::escape};

#[derive(Clone, Debug)]
pub(crate) enum Error {
    EndOfInput,
    EndOfInputHour,
    EndOfInputMinute,
    EndOfInputSecond,
    ExpectedSign { byte: u8 },
    InvalidOffset,
    ParseHours,
    ParseMinutes,
    ParseSeconds,
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
        error::ErrorKind::FmtOffset(err).into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            EndOfInput => {
                f.write_str("expected UTC offset, but found end of input")
            }
            EndOfInputHour => f.write_str(
                "expected one or two digit hour after sign, \
                 but found end of input",
            ),
            EndOfInputMinute => f.write_str(
                "expected two digit minute after hours, \
                 but found end of input",
            ),
            EndOfInputSecond => f.write_str(
                "expected two digit second after minutes, \
                 but found end of input",
            ),
            ExpectedSign { byte } => write!(
                f,
                "expected `Z`, `+` or `-` at start of UTC offset, \
                 but found {byte:?}",
                byte = escape::Byte(byte),
            ),
            InvalidOffset => f.write_str(
                "parsed UTC offset components do not form a valid offset",
            ),
            ParseHours => f.write_str(
                "failed to parse hours in UTC offset \
                 (requires a one or two digit integer)",
            ),
            ParseMinutes => f.write_str(
                "failed to parse minutes in UTC offset \
                 (requires a two digit integer)",
            ),
            ParseSeconds => f.write_str(
                "failed to parse seconds in UTC offset \
                 (requires a two digit integer)",
            ),
        }
    }
}
