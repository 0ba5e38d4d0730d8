use alloc::{boxed::Box, sync::Arc};

use crate::{
    temporal::{Field, Unit},
    util::{b::BoundsError, escape},
};

pub(crate) mod civil;
pub(crate) mod duration;
pub(crate) mod fmt;
pub(crate) mod offset_datetime;
pub(crate) mod period;
pub(crate) mod tz;

/// An error that can occur in this crate.
///
/// The most common type of error is a result of a value being out of range or
/// of arithmetic overflowing. But other errors exist as well:
///
/// * Parse errors, which carry the original input and the position at which
/// parsing stopped.
/// * Requests for a [`Field`] or [`Unit`] that a value doesn't support.
/// * A required component that is missing, for example, parsing a datetime
/// with an offset from a format string that has no offset directive.
/// * A time zone region unknown to a
/// [`ZoneRulesProvider`](crate::tz::ZoneRulesProvider).
///
/// # Introspection is limited
///
/// Other than implementing the [`std::error::Error`] trait when the
/// `std` feature is enabled, the [`core::fmt::Debug`] trait and the
/// [`core::fmt::Display`] trait, this error type provides a handful of
/// predicates like [`Error::is_range`] and [`Error::is_overflow`]. The
/// predicates are not exhaustive. That is, there exist some errors that do
/// not return `true` for any of the `Error::is_*` predicates.
///
/// # Design
///
/// This crate follows the "One True God Error Type Pattern," where only one
/// error type exists for a variety of different operations. Errors can be
/// chained: a high level error (like "failed to parse offset") points to the
/// lower level error that caused it (like "hour is out of range"). The
/// `Display` impl prints the whole chain, separated by `: `.
#[derive(Clone)]
pub struct Error {
    /// The internal representation of an error.
    ///
    /// This is in an `Arc` to make an `Error` cheap to clone. It also keeps
    /// the size of an error equal to one word, which matters since nearly
    /// every operation in this crate returns a `Result<T, Error>`.
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Creates a new error value from `core::fmt::Arguments`.
    ///
    /// It is expected to use [`format_args!`](format_args) from
    /// Rust's standard library (available in `core`) to create a
    /// `core::fmt::Arguments`.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::Error;
    ///
    /// let err = Error::from_args(format_args!("something failed"));
    /// assert_eq!(err.to_string(), "something failed");
    /// ```
    pub fn from_args<'a>(message: core::fmt::Arguments<'a>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::from_args(message)))
    }

    /// Returns true when this error originated as a result of a value being
    /// outside of its legal domain.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::{civil::LocalDate, tz::ZoneOffset};
    ///
    /// assert!(LocalDate::new(2023, 2, 29).unwrap_err().is_range());
    /// assert!(ZoneOffset::of_hours(19).unwrap_err().is_range());
    /// ```
    pub fn is_range(&self) -> bool {
        use self::ErrorKind::*;
        matches!(*self.root().kind(), Range(_) | Bounds(_))
    }

    /// Returns true when this error originated as a result of exact integer
    /// arithmetic exceeding the width of its type.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::Period;
    ///
    /// let err = Period::years(i32::MAX).plus_years(1).unwrap_err();
    /// assert!(err.is_overflow());
    /// let err = Period::years(i32::MIN).negated().unwrap_err();
    /// assert!(err.is_overflow());
    /// ```
    pub fn is_overflow(&self) -> bool {
        matches!(*self.root().kind(), ErrorKind::Overflow(_))
    }

    /// Returns true when this error originated from asking a value for a
    /// [`Field`] or [`Unit`] that it does not support.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::{civil::LocalDate, Field};
    ///
    /// let date = LocalDate::constant(2008, 6, 30);
    /// assert!(date.get(Field::HourOfDay).unwrap_err().is_unsupported());
    /// ```
    pub fn is_unsupported(&self) -> bool {
        matches!(*self.root().kind(), ErrorKind::Unsupported(_))
    }

    /// Returns true when this error was produced while parsing text that
    /// didn't match the expected grammar.
    ///
    /// Unlike the other predicates, this checks every error in the causal
    /// chain. This means a parse error whose root cause is a range error will
    /// return `true` for both `is_format` and `is_range`.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::tz::ZoneOffset;
    ///
    /// let err = "+18:01".parse::<ZoneOffset>().unwrap_err();
    /// assert!(err.is_format());
    /// assert!(err.is_range());
    ///
    /// let err = "+01_00".parse::<ZoneOffset>().unwrap_err();
    /// assert!(err.is_format());
    /// assert!(!err.is_range());
    /// ```
    pub fn is_format(&self) -> bool {
        use self::ErrorKind::*;
        self.chain().any(|err| {
            matches!(
                *err.kind(),
                ParseText(_)
                    | Fmt(_)
                    | FmtOffset(_)
                    | FmtStrtime(_)
                    | FmtTemporal(_)
                    | FmtUtil(_)
            )
        })
    }

    /// Returns true when this error originated from a required component
    /// being absent.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::OffsetDateTime;
    ///
    /// // The format has no offset directive.
    /// let err = OffsetDateTime::strptime("%Y-%m-%d %H:%M", "2010-12-03 11:30")
    ///     .unwrap_err();
    /// assert!(err.is_missing());
    /// ```
    pub fn is_missing(&self) -> bool {
        matches!(*self.root().kind(), ErrorKind::Missing(_))
    }

    /// Returns the byte offset into the original input at which parsing
    /// failed, if this error was produced by parsing text.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::Period;
    ///
    /// let err = "P1Y2X".parse::<Period>().unwrap_err();
    /// assert_eq!(err.position(), Some(4));
    /// ```
    pub fn position(&self) -> Option<usize> {
        self.chain().find_map(|err| match *err.kind() {
            ErrorKind::ParseText(ref err) => Some(err.position),
            _ => None,
        })
    }
}

impl Error {
    /// Creates a new error indicating that a `given` value is out of the
    /// specified `min..=max` range. The given `what` label is used in the
    /// error message as a human readable description of what exactly is out
    /// of range. (e.g., "seconds")
    #[inline(never)]
    #[cold]
    pub(crate) fn range(
        what: &'static str,
        given: impl Into<i128>,
        min: impl Into<i128>,
        max: impl Into<i128>,
    ) -> Error {
        Error::from(ErrorKind::Range(RangeError::new(what, given, min, max)))
    }

    /// Creates a new error indicating that an exact arithmetic operation
    /// described by `what` overflowed.
    #[inline(never)]
    #[cold]
    pub(crate) fn overflow(what: &'static str) -> Error {
        Error::from(ErrorKind::Overflow(OverflowError { what }))
    }

    /// Creates a new error indicating that a required component named by
    /// `what` was not provided.
    #[inline(never)]
    #[cold]
    pub(crate) fn missing(what: &'static str) -> Error {
        Error::from(ErrorKind::Missing(MissingError { what }))
    }

    /// Creates a new error indicating that `field` isn't supported by the
    /// value described by `what`.
    #[inline(never)]
    #[cold]
    pub(crate) fn unsupported_field(field: Field, what: &'static str) -> Error {
        Error::from(ErrorKind::Unsupported(UnsupportedError::Field {
            field,
            what,
        }))
    }

    /// Creates a new error indicating that `unit` isn't supported by the
    /// value described by `what`.
    #[inline(never)]
    #[cold]
    pub(crate) fn unsupported_unit(unit: Unit, what: &'static str) -> Error {
        Error::from(ErrorKind::Unsupported(UnsupportedError::Unit {
            unit,
            what,
        }))
    }

    /// Creates a new error indicating that `field` is supported, but its
    /// value can't be represented as a 32-bit integer.
    #[inline(never)]
    #[cold]
    pub(crate) fn field_too_large(field: Field) -> Error {
        Error::from(ErrorKind::Unsupported(UnsupportedError::TooLarge {
            field,
        }))
    }

    /// Creates a new error from a bounds violation in `util::b`.
    #[inline(never)]
    #[cold]
    pub(crate) fn bounds(err: BoundsError) -> Error {
        Error::from(ErrorKind::Bounds(err))
    }

    /// Wraps this error, which must have come from parsing `input`, with the
    /// original input and the position at which parsing stopped.
    #[inline(never)]
    #[cold]
    pub(crate) fn parse_text(
        self,
        what: &'static str,
        input: &[u8],
        position: usize,
    ) -> Error {
        trace!(
            "failed to parse {what} from {input:?} at position {position}: \
             {self}",
            input = escape::Bytes(input),
        );
        let err = Error::from(ErrorKind::ParseText(ParseTextError {
            what,
            input: input.into(),
            position,
        }));
        self.context(err)
    }

    #[inline(always)]
    pub(crate) fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        if err.inner.is_none() {
            err = Error::from(ErrorKind::Unknown);
        }
        let Some(inner) = err.inner.as_mut().and_then(Arc::get_mut) else {
            // Only freshly created errors are used as a consequent, and they
            // are never shared. If that somehow fails to hold, then keep the
            // cause since that's what the predicates look at.
            return self;
        };
        debug_assert!(
            inner.cause.is_none(),
            "cause of consequence must be `None`"
        );
        inner.cause = Some(self);
        err
    }

    /// Returns the root error in this chain.
    fn root(&self) -> &Error {
        let mut err = self;
        while let Some(cause) =
            err.inner.as_ref().and_then(|inner| inner.cause.as_ref())
        {
            err = cause;
        }
        err
    }

    /// Returns a chain of error values.
    ///
    /// This starts with the most recent error added to the chain. That is,
    /// the highest level context. The last error in the chain is always the
    /// "root" cause. That is, the error closest to the point where something
    /// has gone wrong.
    ///
    /// The iterator returned is guaranteed to yield at least one error.
    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    /// Returns the kind of this error.
    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f
                    .debug_struct("Error")
                    .field("kind", &"None")
                    .finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

/// The underlying kind of a [`Error`].
#[derive(Debug)]
enum ErrorKind {
    Adhoc(AdhocError),
    Bounds(BoundsError),
    Civil(self::civil::Error),
    Duration(self::duration::Error),
    Fmt(self::fmt::Error),
    FmtOffset(self::fmt::offset::Error),
    FmtStrtime(self::fmt::strtime::Error),
    FmtTemporal(self::fmt::temporal::Error),
    FmtUtil(self::fmt::util::Error),
    Missing(MissingError),
    OffsetDateTime(self::offset_datetime::Error),
    Overflow(OverflowError),
    ParseText(ParseTextError),
    Period(self::period::Error),
    Range(RangeError),
    Tz(self::tz::Error),
    Unknown,
    Unsupported(UnsupportedError),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match *self {
            Adhoc(ref msg) => msg.fmt(f),
            Bounds(ref err) => err.fmt(f),
            Civil(ref err) => err.fmt(f),
            Duration(ref err) => err.fmt(f),
            Fmt(ref err) => err.fmt(f),
            FmtOffset(ref err) => err.fmt(f),
            FmtStrtime(ref err) => err.fmt(f),
            FmtTemporal(ref err) => err.fmt(f),
            FmtUtil(ref err) => err.fmt(f),
            Missing(ref err) => err.fmt(f),
            OffsetDateTime(ref err) => err.fmt(f),
            Overflow(ref err) => err.fmt(f),
            ParseText(ref err) => err.fmt(f),
            Period(ref err) => err.fmt(f),
            Range(ref err) => err.fmt(f),
            Tz(ref err) => err.fmt(f),
            Unknown => f.write_str("unknown isochron error"),
            Unsupported(ref err) => err.fmt(f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { inner: Some(Arc::new(ErrorInner { kind, cause: None })) }
    }
}

/// A generic error message.
///
/// This is kept around to support the `Error::from_args` public API, which
/// permits callers to manifest their own `Error` values from an arbitrary
/// message. (For example, from inside a [`ZoneRulesProvider`] impl.)
///
/// [`ZoneRulesProvider`]: crate::tz::ZoneRulesProvider
struct AdhocError {
    message: Box<str>,
}

impl AdhocError {
    fn from_args<'a>(message: core::fmt::Arguments<'a>) -> AdhocError {
        use alloc::string::ToString;

        let message = message.to_string().into_boxed_str();
        AdhocError { message }
    }
}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.message, f)
    }
}

impl core::fmt::Debug for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.message, f)
    }
}

/// An error that occurs when an input value is out of bounds.
///
/// The error message produced by this type will include a name describing
/// which input was out of bounds, the value given and its minimum and maximum
/// allowed values.
#[derive(Debug)]
struct RangeError {
    what: &'static str,
    given: i128,
    min: i128,
    max: i128,
}

impl RangeError {
    fn new(
        what: &'static str,
        given: impl Into<i128>,
        min: impl Into<i128>,
        max: impl Into<i128>,
    ) -> RangeError {
        RangeError { what, given: given.into(), min: min.into(), max: max.into() }
    }
}

impl core::fmt::Display for RangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let RangeError { what, given, min, max } = *self;
        write!(
            f,
            "parameter '{what}' with value {given} \
             is not in the required range of {min}..={max}",
        )
    }
}

/// An error that occurs when exact integer arithmetic overflows.
#[derive(Debug)]
struct OverflowError {
    what: &'static str,
}

impl core::fmt::Display for OverflowError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{what} overflowed", what = self.what)
    }
}

/// An error that occurs when a required component is absent.
#[derive(Debug)]
struct MissingError {
    what: &'static str,
}

impl core::fmt::Display for MissingError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "required component '{what}' is missing", what = self.what)
    }
}

/// An error that occurs when a value is asked for a field or unit it doesn't
/// support.
#[derive(Debug)]
enum UnsupportedError {
    Field { field: Field, what: &'static str },
    Unit { unit: Unit, what: &'static str },
    TooLarge { field: Field },
}

impl core::fmt::Display for UnsupportedError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::UnsupportedError::*;

        match *self {
            Field { field, what } => {
                write!(f, "unsupported field `{field}` for {what}")
            }
            Unit { unit, what } => {
                write!(f, "unsupported unit `{unit}` for {what}")
            }
            TooLarge { field } => write!(
                f,
                "field `{field}` is too large for a 32-bit integer \
                 (use `get_long` instead)",
            ),
        }
    }
}

/// The context attached to every top level parse failure.
#[derive(Debug)]
struct ParseTextError {
    what: &'static str,
    input: Box<[u8]>,
    position: usize,
}

impl core::fmt::Display for ParseTextError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "failed to parse {what} from {input:?} at position {position}",
            what = self.what,
            input = escape::Bytes(&self.input),
            position = self.position,
        )
    }
}

/// A simple trait to encapsulate automatic conversion to `Error`.
///
/// This trait basically exists to make `Error::context` work without needing
/// to rely on public `From` impls for every internal error type.
pub(crate) trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

/// A trait for contextualizing error values.
///
/// This makes it easy to contextualize either `Error` or `Result<T, Error>`.
/// Specifically, in the latter case, it absolves one of the need to call
/// `map_err` everywhere one wants to add context to an error.
///
/// This trick was borrowed from `anyhow`.
pub(crate) trait ErrorContext<T, E> {
    /// Contextualize the given consequent error with this (`self`) error as
    /// the cause.
    ///
    /// This is equivalent to saying that "consequent is caused by self."
    fn context(self, consequent: impl IntoError) -> Result<T, Error>;

    /// Like `context`, but hides error construction within a closure.
    ///
    /// This is useful if the creation of the consequent error is not otherwise
    /// guarded and when error construction is potentially "costly" (i.e., it
    /// allocates). The closure avoids paying the cost of contextual error
    /// creation in the happy path.
    fn with_context<C: IntoError>(
        self,
        consequent: impl FnOnce() -> C,
    ) -> Result<T, Error>;
}

impl<T, E> ErrorContext<T, E> for Result<T, E>
where
    E: IntoError,
{
    #[inline(always)]
    fn context(self, consequent: impl IntoError) -> Result<T, Error> {
        self.map_err(|err| {
            err.into_error().context_impl(consequent.into_error())
        })
    }

    #[inline(always)]
    fn with_context<C: IntoError>(
        self,
        consequent: impl FnOnce() -> C,
    ) -> Result<T, Error> {
        self.map_err(|err| {
            err.into_error().context_impl(consequent().into_error())
        })
    }
}
