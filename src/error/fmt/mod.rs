use alloc::boxed::Box;

use crate::{error, util::escape};

pub(crate) mod offset;
pub(crate) mod strtime;
pub(crate) mod temporal;
pub(crate) mod util;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    IntoFull { value: Box<str>, unparsed: Box<[u8]> },
    InvalidUtf8,
    StdFmtWriteAdapter,
}

impl Error {
    pub(crate) fn into_full_error(
        value: &dyn core::fmt::Display,
        unparsed: &[u8],
    ) -> Error {
        Error::IntoFull {
            value: alloc::string::ToString::to_string(value).into(),
            unparsed: unparsed.into(),
        }
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
        error::ErrorKind::Fmt(err).into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            IntoFull { ref value, ref unparsed } => write!(
                f,
                "parsed value '{value}', but unparsed input {unparsed:?} \
                 remains (expected no unparsed input)",
                unparsed = escape::Bytes(unparsed),
            ),
            InvalidUtf8 => f.write_str("input is not valid UTF-8"),
            StdFmtWriteAdapter => {
                f.write_str("an error occurred when formatting an argument")
            }
        }
    }
}
