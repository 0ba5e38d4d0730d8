use crate::{error, Unit};

#[derive(Clone, Debug)]
pub(crate) enum Error {
    FailedAddDuration,
    FailedAddUnit { unit: Unit },
    FailedAtZone,
    FailedUntil { unit: Unit },
    FailedWithOffset,
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::OffsetDateTime(err).into()
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
                f.write_str("failed to add duration to offset datetime")
            }
            FailedAddUnit { unit } => write!(
                f,
                "failed to add {unit} to offset datetime",
                unit = unit.plural(),
            ),
            FailedAtZone => f.write_str(
                "failed to convert offset datetime to zoned datetime",
            ),
            FailedUntil { unit } => write!(
                f,
                "failed to compute amount of {unit} between offset datetimes",
                unit = unit.plural(),
            ),
            FailedWithOffset => f.write_str(
                "failed to change offset while keeping the same instant",
            ),
        }
    }
}
