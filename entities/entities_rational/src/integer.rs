//! Integer Capability
//!
//! Describes what a rational number needs from its underlying integer type:
//! exact arithmetic, total ordering, negation, the constants zero and one,
//! and a greatest common divisor.
//!
//! Every arithmetic operation has a checked form. `Rational` computes with
//! the checked forms so that fixed-width backings report overflow instead of
//! wrapping; unbounded backings (such as `malachite::Integer`) never fail
//! except on division by zero.
//!
//! Implementations are provided for the signed primitive integers and, with
//! the `malachite` feature, for `malachite::Integer`.

use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// Integer type usable as the numerator and denominator of a `Rational`.
///
/// # GCD convention
///
/// `gcd` follows the mathematical convention: the result is non-negative,
/// `gcd(x, 0) == |x|` and `gcd(0, 0) == 0`. It returns `None` only when that
/// result is not representable in `Self` (for example `gcd(i64::MIN, 0)`).
pub trait RationalInteger:
    Clone
    + Ord
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity
    fn zero() -> Self;

    /// The multiplicative identity
    fn one() -> Self;

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    fn is_negative(&self) -> bool {
        *self < Self::zero()
    }

    fn checked_add(&self, rhs: &Self) -> Option<Self>;

    fn checked_sub(&self, rhs: &Self) -> Option<Self>;

    fn checked_mul(&self, rhs: &Self) -> Option<Self>;

    /// Truncating division; `None` on a zero divisor or overflow
    fn checked_div(&self, rhs: &Self) -> Option<Self>;

    fn checked_neg(&self) -> Option<Self>;

    /// Greatest common divisor, see the trait documentation for the convention
    fn gcd(&self, other: &Self) -> Option<Self>;
}

macro_rules! impl_rational_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl RationalInteger for $t {
                fn zero() -> Self {
                    0
                }

                fn one() -> Self {
                    1
                }

                fn is_zero(&self) -> bool {
                    *self == 0
                }

                fn is_negative(&self) -> bool {
                    *self < 0
                }

                fn checked_add(&self, rhs: &Self) -> Option<Self> {
                    <$t>::checked_add(*self, *rhs)
                }

                fn checked_sub(&self, rhs: &Self) -> Option<Self> {
                    <$t>::checked_sub(*self, *rhs)
                }

                fn checked_mul(&self, rhs: &Self) -> Option<Self> {
                    <$t>::checked_mul(*self, *rhs)
                }

                fn checked_div(&self, rhs: &Self) -> Option<Self> {
                    <$t>::checked_div(*self, *rhs)
                }

                fn checked_neg(&self) -> Option<Self> {
                    <$t>::checked_neg(*self)
                }

                fn gcd(&self, other: &Self) -> Option<Self> {
                    // Euclid on the magnitudes, which cannot overflow.
                    let (mut a, mut b) = (self.unsigned_abs(), other.unsigned_abs());
                    while b != 0 {
                        let r = a % b;
                        a = b;
                        b = r;
                    }
                    <$t>::try_from(a).ok()
                }
            }
        )*
    };
}

impl_rational_integer!(i8, i16, i32, i64, i128, isize);

#[cfg(feature = "malachite")]
mod bignum {
    use super::RationalInteger;
    use malachite::base::num::arithmetic::traits::{Gcd, UnsignedAbs};
    use malachite::base::num::basic::traits::{One, Zero};
    use malachite::Integer;

    impl RationalInteger for Integer {
        fn zero() -> Self {
            Integer::ZERO
        }

        fn one() -> Self {
            Integer::ONE
        }

        fn is_zero(&self) -> bool {
            *self == Integer::ZERO
        }

        fn is_negative(&self) -> bool {
            *self < Integer::ZERO
        }

        fn checked_add(&self, rhs: &Self) -> Option<Self> {
            Some(self + rhs)
        }

        fn checked_sub(&self, rhs: &Self) -> Option<Self> {
            Some(self - rhs)
        }

        fn checked_mul(&self, rhs: &Self) -> Option<Self> {
            Some(self * rhs)
        }

        fn checked_div(&self, rhs: &Self) -> Option<Self> {
            if *rhs == Integer::ZERO {
                return None;
            }
            Some(self / rhs)
        }

        fn checked_neg(&self) -> Option<Self> {
            Some(-self)
        }

        fn gcd(&self, other: &Self) -> Option<Self> {
            let a = self.unsigned_abs();
            let b = other.unsigned_abs();
            Some(Integer::from(a.gcd(b)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd_convention() {
        assert_eq!(RationalInteger::gcd(&12i64, &18), Some(6));
        assert_eq!(RationalInteger::gcd(&-12i64, &18), Some(6));
        assert_eq!(RationalInteger::gcd(&12i64, &-18), Some(6));
        assert_eq!(RationalInteger::gcd(&-7i32, &0), Some(7));
        assert_eq!(RationalInteger::gcd(&0i32, &-7), Some(7));
        assert_eq!(RationalInteger::gcd(&0i32, &0), Some(0));
    }

    #[test]
    fn test_gcd_unrepresentable() {
        assert_eq!(RationalInteger::gcd(&i64::MIN, &0), None);
        assert_eq!(RationalInteger::gcd(&i8::MIN, &i8::MIN), None);
        assert_eq!(RationalInteger::gcd(&i8::MIN, &6), Some(2));
    }

    #[test]
    fn test_checked_ops() {
        assert_eq!(RationalInteger::checked_add(&i8::MAX, &1), None);
        assert_eq!(RationalInteger::checked_sub(&i8::MIN, &1), None);
        assert_eq!(RationalInteger::checked_mul(&64i8, &2), None);
        assert_eq!(RationalInteger::checked_div(&5i8, &0), None);
        assert_eq!(RationalInteger::checked_div(&i8::MIN, &-1), None);
        assert_eq!(RationalInteger::checked_neg(&i8::MIN), None);
        assert_eq!(RationalInteger::checked_div(&-7i8, &2), Some(-3));
    }

    #[test]
    fn test_sign_helpers() {
        assert!(RationalInteger::is_zero(&0i16));
        assert!(RationalInteger::is_negative(&-1i16));
        assert!(!RationalInteger::is_negative(&0i16));
        assert_eq!(<isize as RationalInteger>::one(), 1);
    }

    #[cfg(feature = "malachite")]
    #[test]
    fn test_bignum_gcd() {
        use malachite::Integer;

        let a = Integer::from(-84);
        let b = Integer::from(36);
        assert_eq!(RationalInteger::gcd(&a, &b), Some(Integer::from(12)));
        assert_eq!(
            RationalInteger::gcd(&Integer::from(0), &Integer::from(0)),
            Some(Integer::from(0))
        );
        assert_eq!(RationalInteger::checked_div(&a, &Integer::from(0)), None);
    }
}
