//! Rational Number Module
//!
//! This module provides exact rational numbers (fractions) over a caller-supplied
//! integer type. Any integer type implementing [`RationalInteger`] can be used:
//! the signed primitives for fixed-width fractions, or `malachite::Integer` for
//! arbitrary precision.
//!
//! # Normal Form
//!
//! Every `Rational` that a public operation returns is in normal form:
//!
//! - the denominator is strictly positive,
//! - numerator and denominator share no common factor other than 1,
//! - zero is always stored as `0/1`.
//!
//! The sign therefore lives in the numerator, and two rationals represent the
//! same number exactly when their numerators and denominators are equal. This
//! is what makes the derived `PartialEq`, `Eq` and `Hash` correct.
//!
//! # Arithmetic
//!
//! Arithmetic combines two normalized operands without building the naive
//! cross products first. Common factors are cancelled before multiplying, so
//! intermediate values stay close to the size of the reduced result (see the
//! `arith` module).
//!
//! # Overflow And Division By Zero
//!
//! The fallible operations (`new`, `try_add`, `try_sub`, `try_mul`, `try_div`,
//! `try_neg`, `try_abs`, `try_recip`) report problems through
//! [`RationalError`]. The operator forms (`+`, `-`, `*`, `/`, unary `-`) panic
//! instead, in every build profile, the way integer division by zero does.
//! Comparison never overflows.
//!
//! # Examples
//!
//! ```rust
//! use entities_rational::Rational;
//!
//! let half = Rational::new(2i64, 4).unwrap();
//! let third = Rational::new(1i64, 3).unwrap();
//!
//! assert_eq!(half, Rational::new(1, 2).unwrap());
//! assert_eq!((half + third).to_string(), "5/6");
//! assert!(third < half);
//! ```

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 */

use crate::error::{RationalError, RationalResult};
use crate::integer::RationalInteger;

/// Exact fraction `numerator / denominator`.
///
/// The value is always kept in normal form (positive denominator, lowest
/// terms, zero as `0/1`). It is a plain value: copying it copies both
/// integers, and no operation shares state between values.
///
/// # Examples
///
/// ```rust
/// use entities_rational::Rational;
///
/// let r = Rational::new(-6i32, -8).unwrap();
/// assert_eq!(*r.numerator(), 3);
/// assert_eq!(*r.denominator(), 4);
/// assert_eq!(r.to_string(), "3/4");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rational<T> {
    numerator: T,
    denominator: T,
}

impl<T: RationalInteger> Rational<T> {
    /// Create a rational number from a numerator and denominator.
    ///
    /// The pair is reduced to lowest terms and the sign is moved to the
    /// numerator.
    ///
    /// # Arguments
    ///
    /// * `numerator` - The numerator of the fraction
    /// * `denominator` - The denominator of the fraction (must not be zero)
    ///
    /// # Returns
    ///
    /// * `Ok(Rational)` in normal form
    /// * `Err(RationalError::ZeroDenominator)` if `denominator` is zero
    /// * `Err(RationalError::Overflow)` if the normal form is not representable
    ///   (for example `i64::MIN / -1`)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_rational::{Rational, RationalError};
    ///
    /// assert_eq!(Rational::new(0i64, -5).unwrap().to_string(), "0/1");
    /// assert_eq!(Rational::new(1i64, 0), Err(RationalError::ZeroDenominator));
    /// ```
    pub fn new(numerator: T, denominator: T) -> RationalResult<Self> {
        if denominator.is_zero() {
            log::debug!("rejected rational {}/{}: zero denominator", numerator, denominator);
            return Err(RationalError::ZeroDenominator);
        }
        let (numerator, denominator) = normalize(numerator, denominator)?;
        Ok(Self::new_raw(numerator, denominator))
    }

    /// Create a rational number equal to an integer (denominator 1).
    pub fn from_integer(value: T) -> Self {
        Self::new_raw(value, T::one())
    }

    /// Wrap a pair that is already known to be in normal form.
    pub(crate) fn new_raw(numerator: T, denominator: T) -> Self {
        debug_assert!(!denominator.is_negative() && !denominator.is_zero());
        Self {
            numerator,
            denominator,
        }
    }

    pub fn numerator(&self) -> &T {
        &self.numerator
    }

    /// Always strictly positive.
    pub fn denominator(&self) -> &T {
        &self.denominator
    }

    /// Split into `(numerator, denominator)`.
    pub fn into_parts(self) -> (T, T) {
        (self.numerator, self.denominator)
    }

    /// Check if the rational number is zero.
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Check if the rational number represents an integer (denominator is 1).
    pub fn is_integer(&self) -> bool {
        self.denominator == T::one()
    }

    /// Check if the rational number is strictly positive.
    pub fn is_positive(&self) -> bool {
        !self.numerator.is_negative() && !self.numerator.is_zero()
    }

    /// Check if the rational number is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// Absolute value.
    ///
    /// # Returns
    ///
    /// * `Err(RationalError::Overflow)` if the magnitude is not representable
    ///   (a numerator of `T::MIN` for a primitive `T`)
    pub fn try_abs(&self) -> RationalResult<Self> {
        if self.is_negative() {
            self.try_neg()
        } else {
            Ok(self.clone())
        }
    }

    /// Absolute value.
    ///
    /// # Panics
    ///
    /// Panics if the magnitude overflows `T`.
    pub fn abs(&self) -> Self {
        expect_op(self.try_abs(), "take absolute value")
    }

    /// Reciprocal `denominator / numerator`.
    ///
    /// Swapping the parts keeps lowest terms; only the sign has to move back
    /// to the numerator.
    ///
    /// # Returns
    ///
    /// * `Err(RationalError::DivisionByZero)` for zero
    /// * `Err(RationalError::Overflow)` if the sign cannot be moved
    pub fn try_recip(&self) -> RationalResult<Self> {
        if self.is_zero() {
            log::debug!("rejected reciprocal of zero");
            return Err(RationalError::DivisionByZero);
        }
        if self.numerator.is_negative() {
            let numerator = checked(self.denominator.checked_neg(), "recip")?;
            let denominator = checked(self.numerator.checked_neg(), "recip")?;
            Ok(Self::new_raw(numerator, denominator))
        } else {
            Ok(Self::new_raw(self.denominator.clone(), self.numerator.clone()))
        }
    }

    /// Reciprocal `denominator / numerator`.
    ///
    /// # Panics
    ///
    /// Panics on zero ("attempt to divide by zero") or on overflow.
    pub fn recip(&self) -> Self {
        expect_op(self.try_recip(), "take reciprocal")
    }
}

/// Reduce `numerator / denominator` to normal form.
///
/// `denominator` must be non-zero.
pub(crate) fn normalize<T: RationalInteger>(
    numerator: T,
    denominator: T,
) -> RationalResult<(T, T)> {
    if numerator.is_zero() {
        return Ok((T::zero(), T::one()));
    }

    let g = match numerator.gcd(&denominator) {
        Some(g) => g,
        // Both parts are nonzero, so an unrepresentable gcd means both are `T::MIN`.
        None if numerator == denominator => return Ok((T::one(), T::one())),
        None => checked(None, "normalize")?,
    };
    let mut numerator = checked(numerator.checked_div(&g), "normalize")?;
    let mut denominator = checked(denominator.checked_div(&g), "normalize")?;

    if denominator.is_negative() {
        numerator = checked(numerator.checked_neg(), "normalize")?;
        denominator = checked(denominator.checked_neg(), "normalize")?;
    }

    Ok((numerator, denominator))
}

/// Turn a failed checked integer operation into `RationalError::Overflow`.
pub(crate) fn checked<T>(value: Option<T>, op: &'static str) -> RationalResult<T> {
    value.ok_or_else(|| {
        log::debug!("rational {} overflowed the integer type", op);
        RationalError::Overflow
    })
}

/// Unwrap the result of a fallible operation for its operator form.
///
/// Panics with the same wording as the primitive integer operators.
pub(crate) fn expect_op<T>(result: RationalResult<T>, op: &'static str) -> T {
    match result {
        Ok(value) => value,
        Err(RationalError::Overflow) => panic!("attempt to {} with overflow", op),
        Err(RationalError::DivisionByZero) | Err(RationalError::ZeroDenominator) => {
            panic!("attempt to divide by zero")
        }
    }
}

impl<T: RationalInteger> From<T> for Rational<T> {
    fn from(value: T) -> Self {
        Self::from_integer(value)
    }
}

impl<T: RationalInteger> TryFrom<(T, T)> for Rational<T> {
    type Error = RationalError;

    fn try_from((numerator, denominator): (T, T)) -> RationalResult<Self> {
        Self::new(numerator, denominator)
    }
}

impl<T: RationalInteger> Default for Rational<T> {
    fn default() -> Self {
        Self::from_integer(T::zero())
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Rational<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_reduces() {
        let r = Rational::new(2i64, 4).unwrap();
        assert_eq!(*r.numerator(), 1);
        assert_eq!(*r.denominator(), 2);
        assert_eq!(r, Rational::new(1, 2).unwrap());
    }

    #[test]
    fn test_new_moves_sign_to_numerator() {
        assert_eq!(Rational::new(1i64, -2).unwrap().into_parts(), (-1, 2));
        assert_eq!(Rational::new(-1i64, -2).unwrap().into_parts(), (1, 2));
        assert_eq!(Rational::new(-2i64, 4).unwrap(), Rational::new(1, -2).unwrap());
    }

    #[test]
    fn test_zero_is_canonical() {
        for d in [-9i64, -1, 1, 2, 7, 1000] {
            let r = Rational::new(0, d).unwrap();
            assert_eq!(r.into_parts(), (0, 1));
            assert_eq!(r, Rational::from(0));
        }
    }

    #[test]
    fn test_zero_denominator() {
        assert_eq!(Rational::new(1i64, 0), Err(RationalError::ZeroDenominator));
        assert_eq!(Rational::new(0i64, 0), Err(RationalError::ZeroDenominator));
        assert_eq!(Rational::try_from((3i32, 0)), Err(RationalError::ZeroDenominator));
    }

    #[test]
    fn test_new_overflow() {
        assert_eq!(Rational::new(i64::MIN, -1), Err(RationalError::Overflow));
        assert_eq!(Rational::new(1i64, i64::MIN), Err(RationalError::Overflow));
        assert_eq!(Rational::new(i8::MIN, i8::MIN).unwrap().into_parts(), (1, 1));
        assert_eq!(Rational::new(i64::MIN, i64::MIN).unwrap(), Rational::from(1));
        assert_eq!(Rational::new(i8::MIN, 2).unwrap().into_parts(), (-64, 1));
    }

    #[test]
    fn test_from_integer() {
        let r = Rational::from(42i32);
        assert_eq!(r.into_parts(), (42, 1));
        assert!(r.is_integer());
        assert_eq!(Rational::<i32>::default(), Rational::from(0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Rational::new(22i64, 7).unwrap().to_string(), "22/7");
        assert_eq!(Rational::new(-3i64, 4).unwrap().to_string(), "-3/4");
        assert_eq!(Rational::from(3i64).to_string(), "3/1");
        assert_eq!(Rational::<i64>::default().to_string(), "0/1");
    }

    #[test]
    fn test_predicates() {
        let neg = Rational::new(-1i32, 3).unwrap();
        let pos = Rational::new(1i32, 3).unwrap();
        let zero = Rational::from(0i32);
        assert!(neg.is_negative() && !neg.is_positive() && !neg.is_zero());
        assert!(pos.is_positive() && !pos.is_negative());
        assert!(zero.is_zero() && !zero.is_positive() && !zero.is_negative());
        assert!(zero.is_integer());
        assert!(!pos.is_integer());
    }

    #[test]
    fn test_abs() {
        assert_eq!(Rational::new(-3i32, 4).unwrap().abs(), Rational::new(3, 4).unwrap());
        assert_eq!(Rational::new(3i32, 4).unwrap().abs(), Rational::new(3, 4).unwrap());
        assert_eq!(
            Rational::from(i32::MIN).try_abs(),
            Err(RationalError::Overflow)
        );
    }

    #[test]
    fn test_recip() {
        assert_eq!(Rational::new(3i32, 4).unwrap().recip(), Rational::new(4, 3).unwrap());
        assert_eq!(Rational::new(-3i32, 4).unwrap().recip().into_parts(), (-4, 3));
        assert_eq!(Rational::from(0i32).try_recip(), Err(RationalError::DivisionByZero));
        assert_eq!(Rational::from(i32::MIN).try_recip(), Err(RationalError::Overflow));
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn test_recip_zero_panics() {
        let _ = Rational::from(0i64).recip();
    }
}
