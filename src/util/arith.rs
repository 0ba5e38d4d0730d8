/*!
Exact integer arithmetic.

Nothing in this crate is permitted to silently wrap around. Every addition,
multiplication and negation whose result could exceed the width of its type
goes through the `Exact` trait, which reports an overflow error instead.
*/

use crate::Error;

/// Arithmetic on primitive signed integers that fails instead of wrapping.
///
/// The `what` parameter describes the operation in error messages, e.g.,
/// `"adding years to period"`.
pub(crate) trait Exact: Sized + Copy {
    fn add_exact(self, rhs: Self, what: &'static str) -> Result<Self, Error>;
    fn sub_exact(self, rhs: Self, what: &'static str) -> Result<Self, Error>;
    fn mul_exact(self, rhs: Self, what: &'static str) -> Result<Self, Error>;
    fn neg_exact(self, what: &'static str) -> Result<Self, Error>;
}

macro_rules! impl_exact {
    ($($ty:ty),*) => {
        $(
            impl Exact for $ty {
                #[inline]
                fn add_exact(
                    self,
                    rhs: $ty,
                    what: &'static str,
                ) -> Result<$ty, Error> {
                    self.checked_add(rhs).ok_or_else(|| Error::overflow(what))
                }

                #[inline]
                fn sub_exact(
                    self,
                    rhs: $ty,
                    what: &'static str,
                ) -> Result<$ty, Error> {
                    self.checked_sub(rhs).ok_or_else(|| Error::overflow(what))
                }

                #[inline]
                fn mul_exact(
                    self,
                    rhs: $ty,
                    what: &'static str,
                ) -> Result<$ty, Error> {
                    self.checked_mul(rhs).ok_or_else(|| Error::overflow(what))
                }

                #[inline]
                fn neg_exact(self, what: &'static str) -> Result<$ty, Error> {
                    self.checked_neg().ok_or_else(|| Error::overflow(what))
                }
            }
        )*
    }
}

impl_exact!(i32, i64);

/// Narrows a 64-bit integer to 32 bits, failing with an overflow error when
/// it doesn't fit.
#[inline]
pub(crate) fn to_i32_exact(n: i64, what: &'static str) -> Result<i32, Error> {
    i32::try_from(n).map_err(|_| Error::overflow(what))
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn add() {
        assert_eq!(1i32.add_exact(2, "test").unwrap(), 3);
        assert_eq!(i32::MAX.add_exact(0, "test").unwrap(), i32::MAX);
        let err = i32::MAX.add_exact(1, "adding").unwrap_err();
        assert!(err.is_overflow());
        assert_eq!(err.to_string(), "adding overflowed");
        assert!(i32::MIN.add_exact(-1, "test").is_err());
        assert!(i64::MAX.add_exact(1, "test").is_err());
        assert_eq!(i64::MIN.add_exact(i64::MAX, "test").unwrap(), -1);
    }

    #[test]
    fn sub() {
        assert_eq!(1i32.sub_exact(2, "test").unwrap(), -1);
        assert!(i32::MIN.sub_exact(1, "test").is_err());
        assert!(0i64.sub_exact(i64::MIN, "test").is_err());
    }

    #[test]
    fn mul() {
        assert_eq!(12i32.mul_exact(-3, "test").unwrap(), -36);
        assert!(i32::MAX.mul_exact(2, "test").is_err());
        assert!(i32::MIN.mul_exact(-1, "test").is_err());
        assert_eq!(i32::MIN.mul_exact(1, "test").unwrap(), i32::MIN);
        assert!(i64::MAX.mul_exact(7, "test").is_err());
    }

    #[test]
    fn neg() {
        assert_eq!(5i32.neg_exact("test").unwrap(), -5);
        assert_eq!(i32::MAX.neg_exact("test").unwrap(), -i32::MAX);
        assert!(i32::MIN.neg_exact("test").unwrap_err().is_overflow());
        assert!(i64::MIN.neg_exact("test").is_err());
    }

    #[test]
    fn narrow() {
        assert_eq!(to_i32_exact(-5, "test").unwrap(), -5);
        assert!(to_i32_exact(i64::from(i32::MAX) + 1, "test").is_err());
        assert!(to_i32_exact(i64::from(i32::MIN) - 1, "test").is_err());
    }

    quickcheck::quickcheck! {
        fn prop_add_matches_i128(a: i32, b: i32) -> bool {
            let wide = i128::from(a) + i128::from(b);
            match a.add_exact(b, "test") {
                Ok(n) => i128::from(n) == wide,
                Err(_) => i32::try_from(wide).is_err(),
            }
        }

        fn prop_mul_matches_i128(a: i64, b: i64) -> bool {
            let wide = i128::from(a) * i128::from(b);
            match a.mul_exact(b, "test") {
                Ok(n) => i128::from(n) == wide,
                Err(_) => i64::try_from(wide).is_err(),
            }
        }
    }
}
