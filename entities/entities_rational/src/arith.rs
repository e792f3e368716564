//! Rational Arithmetic
//!
//! Addition, subtraction, multiplication, division and negation of rationals
//! that are already in normal form.
//!
//! None of the operations forms the naive cross products `a.n * b.d` and
//! `a.d * b.d` and reduces afterwards. Instead, common factors are divided out
//! before anything is multiplied:
//!
//! - `+`/`-` factor the denominators' gcd first, then cancel the new numerator
//!   against the leftover factor. The two gcd steps together remove every
//!   common factor, so the result needs no extra reduction.
//! - `*` cancels each numerator against the other operand's denominator.
//! - `/` cancels numerator against numerator and denominator against
//!   denominator, then moves the sign of the divisor to the numerator.
//!
//! Every step uses the integer type's checked operations. The `try_*` methods
//! return `RationalError::Overflow` when a step does not fit; the operator
//! forms panic with the primitive integer wording.

use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{RationalError, RationalResult};
use crate::integer::RationalInteger;
use crate::rational::{checked, expect_op, Rational};

impl<T: RationalInteger> Rational<T> {
    /// Add two rational numbers.
    ///
    /// # Returns
    ///
    /// * `Ok(Rational)` holding the sum in normal form
    /// * `Err(RationalError::Overflow)` if an intermediate value does not fit `T`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_rational::Rational;
    ///
    /// let a = Rational::new(1i64, 2).unwrap();
    /// let b = Rational::new(1i64, 3).unwrap();
    /// assert_eq!(a.try_add(&b).unwrap(), Rational::new(5, 6).unwrap());
    /// ```
    pub fn try_add(&self, rhs: &Self) -> RationalResult<Self> {
        self.add_or_sub(rhs, false)
    }

    /// Subtract `rhs` from `self`.
    ///
    /// # Returns
    ///
    /// * `Ok(Rational)` holding the difference in normal form
    /// * `Err(RationalError::Overflow)` if an intermediate value does not fit `T`
    pub fn try_sub(&self, rhs: &Self) -> RationalResult<Self> {
        self.add_or_sub(rhs, true)
    }

    fn add_or_sub(&self, rhs: &Self, subtract: bool) -> RationalResult<Self> {
        let op = if subtract { "subtract" } else { "add" };

        let g = checked(self.denominator().gcd(rhs.denominator()), op)?;
        let lhs_den = checked(self.denominator().checked_div(&g), op)?;
        let rhs_den = checked(rhs.denominator().checked_div(&g), op)?;

        let lhs_term = checked(self.numerator().checked_mul(&rhs_den), op)?;
        let rhs_term = checked(rhs.numerator().checked_mul(&lhs_den), op)?;
        let numerator = if subtract {
            lhs_term.checked_sub(&rhs_term)
        } else {
            lhs_term.checked_add(&rhs_term)
        };
        let numerator = checked(numerator, op)?;

        // Whatever the new numerator still shares with the denominators can
        // only come from `g`.
        let g = checked(numerator.gcd(&g), op)?;
        let numerator = checked(numerator.checked_div(&g), op)?;
        let rhs_den = checked(rhs.denominator().checked_div(&g), op)?;
        let denominator = checked(lhs_den.checked_mul(&rhs_den), op)?;

        Ok(Self::new_raw(numerator, denominator))
    }

    /// Multiply two rational numbers.
    ///
    /// # Returns
    ///
    /// * `Ok(Rational)` holding the product in normal form
    /// * `Err(RationalError::Overflow)` if the product does not fit `T`
    pub fn try_mul(&self, rhs: &Self) -> RationalResult<Self> {
        let g1 = checked(self.numerator().gcd(rhs.denominator()), "multiply")?;
        let g2 = checked(rhs.numerator().gcd(self.denominator()), "multiply")?;

        let lhs_num = checked(self.numerator().checked_div(&g1), "multiply")?;
        let rhs_num = checked(rhs.numerator().checked_div(&g2), "multiply")?;
        let lhs_den = checked(self.denominator().checked_div(&g2), "multiply")?;
        let rhs_den = checked(rhs.denominator().checked_div(&g1), "multiply")?;

        let numerator = checked(lhs_num.checked_mul(&rhs_num), "multiply")?;
        let denominator = checked(lhs_den.checked_mul(&rhs_den), "multiply")?;

        Ok(Self::new_raw(numerator, denominator))
    }

    /// Divide `self` by `rhs`.
    ///
    /// The divisor is checked before anything else, so `0 / 0` is an error
    /// as well.
    ///
    /// # Returns
    ///
    /// * `Ok(Rational)` holding the quotient in normal form
    /// * `Err(RationalError::DivisionByZero)` if `rhs` is zero
    /// * `Err(RationalError::Overflow)` if the quotient does not fit `T`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_rational::{Rational, RationalError};
    ///
    /// let a = Rational::new(1i64, 2).unwrap();
    /// let b = Rational::new(-1i64, 3).unwrap();
    /// assert_eq!(a.try_div(&b).unwrap().to_string(), "-3/2");
    /// assert_eq!(a.try_div(&Rational::from(0)), Err(RationalError::DivisionByZero));
    /// ```
    pub fn try_div(&self, rhs: &Self) -> RationalResult<Self> {
        if rhs.is_zero() {
            log::debug!("rejected division of {} by zero", self);
            return Err(RationalError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok(Self::default());
        }

        let (lhs_num, rhs_num) = match self.numerator().gcd(rhs.numerator()) {
            Some(g_num) => (
                checked(self.numerator().checked_div(&g_num), "divide")?,
                checked(rhs.numerator().checked_div(&g_num), "divide")?,
            ),
            // Two nonzero numerators only have an unrepresentable gcd when
            // both are `T::MIN`.
            None if self.numerator() == rhs.numerator() => (T::one(), T::one()),
            None => checked(None, "divide")?,
        };
        let g_den = checked(self.denominator().gcd(rhs.denominator()), "divide")?;

        let lhs_den = checked(self.denominator().checked_div(&g_den), "divide")?;
        let rhs_den = checked(rhs.denominator().checked_div(&g_den), "divide")?;

        let mut numerator = checked(lhs_num.checked_mul(&rhs_den), "divide")?;
        let mut denominator = checked(lhs_den.checked_mul(&rhs_num), "divide")?;

        if denominator.is_negative() {
            numerator = checked(numerator.checked_neg(), "divide")?;
            denominator = checked(denominator.checked_neg(), "divide")?;
        }

        Ok(Self::new_raw(numerator, denominator))
    }

    /// Negate a rational number.
    ///
    /// The magnitude is unchanged, so no reduction is needed.
    ///
    /// # Returns
    ///
    /// * `Err(RationalError::Overflow)` if the numerator is `T::MIN`
    pub fn try_neg(&self) -> RationalResult<Self> {
        let numerator = checked(self.numerator().checked_neg(), "negate")?;
        Ok(Self::new_raw(numerator, self.denominator().clone()))
    }
}

// The compound forms do the work; the binary forms copy the left operand and
// delegate to them.
macro_rules! impl_arith_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $try_op:ident, $what:literal) => {
        impl<T: RationalInteger> $OpAssign<&Rational<T>> for Rational<T> {
            fn $op_assign(&mut self, rhs: &Rational<T>) {
                *self = expect_op(self.$try_op(rhs), $what);
            }
        }

        impl<T: RationalInteger> $OpAssign<Rational<T>> for Rational<T> {
            fn $op_assign(&mut self, rhs: Rational<T>) {
                self.$op_assign(&rhs);
            }
        }

        impl<T: RationalInteger> $Op<Rational<T>> for Rational<T> {
            type Output = Rational<T>;

            fn $op(mut self, rhs: Rational<T>) -> Rational<T> {
                self.$op_assign(&rhs);
                self
            }
        }

        impl<T: RationalInteger> $Op<&Rational<T>> for Rational<T> {
            type Output = Rational<T>;

            fn $op(mut self, rhs: &Rational<T>) -> Rational<T> {
                self.$op_assign(rhs);
                self
            }
        }

        impl<T: RationalInteger> $Op<Rational<T>> for &Rational<T> {
            type Output = Rational<T>;

            fn $op(self, rhs: Rational<T>) -> Rational<T> {
                let mut res = self.clone();
                res.$op_assign(&rhs);
                res
            }
        }

        impl<T: RationalInteger> $Op<&Rational<T>> for &Rational<T> {
            type Output = Rational<T>;

            fn $op(self, rhs: &Rational<T>) -> Rational<T> {
                let mut res = self.clone();
                res.$op_assign(rhs);
                res
            }
        }
    };
}

impl_arith_op!(Add, add, AddAssign, add_assign, try_add, "add");
impl_arith_op!(Sub, sub, SubAssign, sub_assign, try_sub, "subtract");
impl_arith_op!(Mul, mul, MulAssign, mul_assign, try_mul, "multiply");
impl_arith_op!(Div, div, DivAssign, div_assign, try_div, "divide");

impl<T: RationalInteger> Neg for Rational<T> {
    type Output = Rational<T>;

    fn neg(self) -> Rational<T> {
        expect_op(self.try_neg(), "negate")
    }
}

impl<T: RationalInteger> Neg for &Rational<T> {
    type Output = Rational<T>;

    fn neg(self) -> Rational<T> {
        expect_op(self.try_neg(), "negate")
    }
}

impl<T: RationalInteger> Sum for Rational<T> {
    fn sum<I: Iterator<Item = Rational<T>>>(iter: I) -> Self {
        iter.fold(Rational::default(), |acc, x| acc + x)
    }
}

impl<'a, T: RationalInteger> Sum<&'a Rational<T>> for Rational<T> {
    fn sum<I: Iterator<Item = &'a Rational<T>>>(iter: I) -> Self {
        iter.fold(Rational::default(), |acc, x| acc + x)
    }
}

impl<T: RationalInteger> Product for Rational<T> {
    fn product<I: Iterator<Item = Rational<T>>>(iter: I) -> Self {
        iter.fold(Rational::from_integer(T::one()), |acc, x| acc * x)
    }
}

impl<'a, T: RationalInteger> Product<&'a Rational<T>> for Rational<T> {
    fn product<I: Iterator<Item = &'a Rational<T>>>(iter: I) -> Self {
        iter.fold(Rational::from_integer(T::one()), |acc, x| acc * x)
    }
}

impl<T: RationalInteger> num_traits::Zero for Rational<T> {
    fn zero() -> Self {
        Rational::default()
    }

    fn is_zero(&self) -> bool {
        Rational::is_zero(self)
    }
}

impl<T: RationalInteger> num_traits::One for Rational<T> {
    fn one() -> Self {
        Rational::from_integer(T::one())
    }
}

impl<T: RationalInteger> num_traits::CheckedAdd for Rational<T> {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        self.try_add(v).ok()
    }
}

impl<T: RationalInteger> num_traits::CheckedSub for Rational<T> {
    fn checked_sub(&self, v: &Self) -> Option<Self> {
        self.try_sub(v).ok()
    }
}

impl<T: RationalInteger> num_traits::CheckedMul for Rational<T> {
    fn checked_mul(&self, v: &Self) -> Option<Self> {
        self.try_mul(v).ok()
    }
}

impl<T: RationalInteger> num_traits::CheckedDiv for Rational<T> {
    fn checked_div(&self, v: &Self) -> Option<Self> {
        self.try_div(v).ok()
    }
}

impl<T: RationalInteger> num_traits::CheckedNeg for Rational<T> {
    fn checked_neg(&self) -> Option<Self> {
        self.try_neg().ok()
    }
}
