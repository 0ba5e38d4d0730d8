use crate::{error, Period};

#[derive(Clone, Debug)]
pub(crate) enum Error {
    FailedAddTo { period: Period },
    FailedSubtractFrom { period: Period },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Period(err).into()
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
            FailedAddTo { period } => {
                write!(f, "failed to add period `{period}` to date")
            }
            FailedSubtractFrom { period } => {
                write!(f, "failed to subtract period `{period}` from date")
            }
        }
    }
}
