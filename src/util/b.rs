/*!
The table of numeric boundaries used throughout this crate.

Every field of every value type in this crate is a primitive integer whose
legal values form a contiguous range. Rather than scattering those ranges
around, they are all defined here, along with a uniform way of checking a
value against them.
*/

use crate::Error;

macro_rules! define_bounds {
    ($((
        $name:ident,
        $ty:ty,
        $what:expr,
        $min:expr,
        $max:expr $(,)?
    )),* $(,)?) => {
        $(
            pub(crate) struct $name(());

            impl Bounds for $name {
                const MIN: Self::Primitive = $min;
                const MAX: Self::Primitive = $max;
                type Primitive = $ty;

                #[cold]
                fn error(given: i128) -> BoundsError {
                    BoundsError { what: $what, given, min: $min as i128, max: $max as i128 }
                }
            }

            #[allow(dead_code)]
            impl $name {
                pub(crate) const MIN: $ty = $min;
                pub(crate) const MAX: $ty = $max;

                #[inline(always)]
                pub(crate) fn check(n: impl Into<i64>) -> Result<$ty, BoundsError> {
                    <$name as Bounds>::check(n)
                }

                #[inline(always)]
                pub(crate) const fn contains(n: i64) -> bool {
                    ($min as i64) <= n && n <= ($max as i64)
                }

                #[inline(always)]
                pub(crate) fn parse(bytes: &[u8]) -> Result<$ty, Error> {
                    <$name as Bounds>::parse(bytes)
                }
            }
        )*
    }
}

define_bounds! {
    (AlignedWeekOfMonth, i8, "aligned-week-of-month", 1, 5),
    (AlignedWeekOfYear, i8, "aligned-week-of-year", 1, 53),
    (AmPm, i8, "am-pm-of-day", 0, 1),
    (ClockHour, i8, "clock-hour", 1, 24),
    (ClockHourOfAmPm, i8, "clock-hour-of-am-pm", 1, 12),
    (Day, i8, "day-of-month", 1, 31),
    (DayOfYear, i16, "day-of-year", 1, 366),
    (
        EpochDay,
        i64,
        "epoch-day",
        // -999999999-01-01
        -365_243_219_162,
        // +999999999-12-31
        365_241_780_471,
    ),
    (Hour, i8, "hour", 0, 23),
    (HourOfAmPm, i8, "hour-of-am-pm", 0, 11),
    (
        InstantSecond,
        i64,
        "instant-seconds",
        // -999999999-01-01T18:00Z
        -31_557_014_135_532_000,
        // +999999999-12-31T05:59:59Z
        31_556_889_832_715_999,
    ),
    (Minute, i8, "minute", 0, 59),
    (Month, i8, "month", 1, 12),
    (NanoOfDay, i64, "nano-of-day", 0, 86_399_999_999_999),
    (OffsetHours, i8, "offset-hours", -18, 18),
    (OffsetMinutes, i8, "offset-minutes", -59, 59),
    (OffsetSeconds, i8, "offset-seconds", -59, 59),
    (OffsetTotalSeconds, i32, "offset-total-seconds", -64_800, 64_800),
    (
        ProlepticMonth,
        i64,
        "proleptic-month",
        -999_999_999_i64 * 12,
        999_999_999_i64 * 12 + 11,
    ),
    (Second, i8, "second", 0, 59),
    (SecondOfDay, i32, "second-of-day", 0, 86_399),
    (SubsecNanosecond, i32, "nano-of-second", 0, 999_999_999),
    (Weekday, i8, "day-of-week", 1, 7),
    (Year, i32, "year", -999_999_999, 999_999_999),
    (YearTwoDigit, i8, "year (2 digits)", 0, 99),
}

/// An interface for defining boundaries on integer values.
pub(crate) trait Bounds: Sized {
    /// The minimum boundary value.
    const MIN: Self::Primitive;

    /// The maximum boundary value.
    const MAX: Self::Primitive;

    /// The primitive integer representation for this boundary type.
    ///
    /// This is generally the smallest primitive integer type that fits the
    /// minimum and maximum allowed values.
    type Primitive: Primitive;

    /// Create an error when a value is outside the bounds for this type.
    fn error(given: i128) -> BoundsError;

    /// Converts the 64-bit integer provided into the primitive representation
    /// of these bounds.
    ///
    /// # Errors
    ///
    /// This returns an error if the given integer does not fit in the bounds
    /// prescribed by this trait implementation.
    #[inline(always)]
    fn check(n: impl Into<i64>) -> Result<Self::Primitive, BoundsError> {
        let n = n.into();
        if !(Self::MIN.as_i64() <= n && n <= Self::MAX.as_i64()) {
            return Err(Self::error(i128::from(n)));
        }
        Ok(Self::Primitive::from_i64(n))
    }

    /// Parses a 64-bit integer from the beginning to the end of the given
    /// slice of bytes.
    ///
    /// Note that this can never parse a negative integer since it doesn't
    /// look for a sign. On success, the integer returned is always positive.
    ///
    /// # Errors
    ///
    /// If the given slice is not a valid integer (i.e., overflow or contains
    /// anything other than `[0-9]`) or is not in the bounds for this trait
    /// implementation, then an error is returned.
    #[inline(always)]
    fn parse(bytes: &[u8]) -> Result<Self::Primitive, Error> {
        Ok(Self::check(crate::util::parse::i64(bytes)?)?)
    }
}

/// A simple trait for making `int as int` usable in a generic context.
///
/// All of these methods require callers to ensure the cast is correct.
pub(crate) trait Primitive:
    Clone + Copy + core::fmt::Debug + core::fmt::Display
{
    fn as_i64(self) -> i64;
    fn from_i64(n: i64) -> Self;
}

macro_rules! impl_primitive {
    ($($intty:ty),*) => {
        $(
            impl Primitive for $intty {
                fn as_i64(self) -> i64 { self as i64 }
                fn from_i64(n: i64) -> Self { n as $intty }
            }
        )*
    }
}

impl_primitive!(i8, i16, i32, i64);

/// An error that indicates a value is out of its intended range.
#[derive(Clone, Debug)]
pub(crate) struct BoundsError {
    what: &'static str,
    given: i128,
    min: i128,
    max: i128,
}

impl From<BoundsError> for Error {
    #[cold]
    #[inline(never)]
    fn from(err: BoundsError) -> Error {
        Error::bounds(err)
    }
}

impl crate::error::IntoError for BoundsError {
    fn into_error(self) -> Error {
        self.into()
    }
}

impl core::fmt::Display for BoundsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let BoundsError { what, given, min, max } = *self;
        write!(
            f,
            "parameter '{what}' with value {given} \
             is not in the required range of {min}..={max}",
        )
    }
}
