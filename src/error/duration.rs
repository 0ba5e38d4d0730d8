use crate::{error, Unit};

#[derive(Clone, Debug)]
pub(crate) enum Error {
    ConvertNegative,
    DivideByZero,
    FailedOfUnit { unit: Unit },
    RangeUnsigned,
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Duration(err).into()
    }
}

impl error::IntoError for Error {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            ConvertNegative => f.write_str(
                "cannot convert negative duration to unsigned duration",
            ),
            DivideByZero => f.write_str("cannot divide duration by zero"),
            FailedOfUnit { unit } => write!(
                f,
                "failed to create duration from amount of {unit}",
                unit = unit.plural(),
            ),
            RangeUnsigned => f.write_str(
                "unsigned duration exceeds the limits of a signed duration",
            ),
        }
    }
}
