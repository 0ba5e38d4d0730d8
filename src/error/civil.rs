use crate::{error, Field, Unit};

#[derive(Clone, Debug)]
pub(crate) enum Error {
    FailedAddDuration,
    FailedAddUnit { unit: Unit },
    FailedUntil { unit: Unit },
    FailedWithField { field: Field },
    InvalidDayOfYear { year: i32 },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Civil(err).into()
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
            FailedAddDuration => {
                f.write_str("failed to add duration to datetime")
            }
            FailedAddUnit { unit } => {
                write!(f, "failed to add {unit} to date", unit = unit.plural())
            }
            FailedUntil { unit } => write!(
                f,
                "failed to compute amount of {unit} between values",
                unit = unit.plural(),
            ),
            FailedWithField { field } => {
                write!(f, "failed to set field `{field}`")
            }
            InvalidDayOfYear { year } => {
                write!(f, "day-of-year 366 is invalid in non-leap year {year}")
            }
        }
    }
}
