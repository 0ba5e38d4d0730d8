use alloc::boxed::Box;

use crate::{civil::LocalDateTime, error, tz::ZoneOffset};

#[derive(Clone, Debug)]
pub(crate) enum Error {
    FailedRules { zone: Box<str> },
    StrictGap { datetime: LocalDateTime, zone: Box<str> },
    StrictOffset {
        datetime: LocalDateTime,
        offset: ZoneOffset,
        zone: Box<str>,
    },
    TransitionOrder,
    TransitionSameOffset { offset: ZoneOffset },
    TransitionUnchained { expected: ZoneOffset, found: ZoneOffset },
    UnknownRegion { name: Box<str> },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Tz(err).into()
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
            FailedRules { ref zone } => {
                write!(f, "failed to find rules for time zone `{zone}`")
            }
            StrictGap { datetime, ref zone } => write!(
                f,
                "datetime `{datetime}` does not exist in time zone \
                 `{zone}` because it falls in a gap",
            ),
            StrictOffset { datetime, offset, ref zone } => write!(
                f,
                "offset `{offset}` is not valid for datetime `{datetime}` \
                 in time zone `{zone}`",
            ),
            TransitionOrder => f.write_str(
                "transitions must be in strictly increasing order \
                 of their instants",
            ),
            TransitionSameOffset { offset } => write!(
                f,
                "a transition must change the offset, \
                 but both sides of it are `{offset}`",
            ),
            TransitionUnchained { expected, found } => write!(
                f,
                "offset before a transition must be `{expected}` \
                 (the offset in effect before it), but found `{found}`",
            ),
            UnknownRegion { ref name } => write!(
                f,
                "time zone region `{name}` is unknown to the rules provider",
            ),
        }
    }
}
