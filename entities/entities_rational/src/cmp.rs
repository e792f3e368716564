//! Rational Ordering
//!
//! `a < b` is decided by `a.n * b.d < b.n * a.d`, which needs no sign
//! correction because both denominators are positive. When either product
//! overflows the integer type, the comparison expands both fractions as
//! continued fractions instead; that only divides values already in range,
//! so ordering is total for every backing type.

use std::cmp::Ordering;

use crate::integer::RationalInteger;
use crate::rational::Rational;

impl<T: RationalInteger> Ord for Rational<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            return Ordering::Equal;
        }

        let lhs_sign = self.numerator().cmp(&T::zero());
        let rhs_sign = other.numerator().cmp(&T::zero());
        if lhs_sign != rhs_sign {
            return lhs_sign.cmp(&rhs_sign);
        }

        let lhs = self.numerator().checked_mul(other.denominator());
        let rhs = other.numerator().checked_mul(self.denominator());
        if let (Some(lhs), Some(rhs)) = (lhs, rhs) {
            return lhs.cmp(&rhs);
        }

        log::trace!("comparing {} with {} by continued fractions", self, other);
        cmp_continued_fractions(
            self.numerator().clone(),
            self.denominator().clone(),
            other.numerator().clone(),
            other.denominator().clone(),
        )
    }
}

impl<T: RationalInteger> PartialOrd for Rational<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compare `a_num / a_den` with `b_num / b_den` (denominators positive).
///
/// Peels off the integer parts; if they differ that decides, otherwise the
/// remaining fractional parts are compared through their reciprocals, which
/// flips the direction each round.
fn cmp_continued_fractions<T: RationalInteger>(
    mut a_num: T,
    mut a_den: T,
    mut b_num: T,
    mut b_den: T,
) -> Ordering {
    let mut reversed = false;
    loop {
        let (a_q, a_r) = floor_div_rem(a_num, &a_den);
        let (b_q, b_r) = floor_div_rem(b_num, &b_den);

        if a_q != b_q {
            return orient(a_q.cmp(&b_q), reversed);
        }
        if a_r.is_zero() || b_r.is_zero() {
            return orient(a_r.cmp(&b_r), reversed);
        }

        a_num = a_den;
        a_den = a_r;
        b_num = b_den;
        b_den = b_r;
        reversed = !reversed;
    }
}

/// Floor quotient and non-negative remainder for a positive `den`.
///
/// Cannot overflow: a quotient of `T::MIN` only arises for `den == 1`, where
/// the remainder is zero and no correction happens.
fn floor_div_rem<T: RationalInteger>(num: T, den: &T) -> (T, T) {
    let q = num.clone() / den.clone();
    let r = num % den.clone();
    if r.is_negative() {
        (q - T::one(), r + den.clone())
    } else {
        (q, r)
    }
}

fn orient(ord: Ordering, reversed: bool) -> Ordering {
    if reversed {
        ord.reverse()
    } else {
        ord
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn r(n: i64, d: i64) -> Rational<i64> {
        Rational::new(n, d).unwrap()
    }

    #[test]
    fn test_basic_ordering() {
        assert!(r(1, 2) < r(2, 3));
        assert!(!(r(2, 3) < r(1, 2)));
        assert!(r(2, 3) > r(1, 2));
        assert!(r(-1, 2) < r(1, 3));
        assert!(r(-1, 2) < r(-1, 3));
        assert!(r(1, 2) <= r(2, 4));
        assert!(r(1, 2) <= r(2, 3));
        assert_eq!(r(2, 4).cmp(&r(1, 2)), Ordering::Equal);
    }

    #[test]
    fn test_floor_div_rem() {
        assert_eq!(floor_div_rem(7i64, &2), (3, 1));
        assert_eq!(floor_div_rem(-7i64, &2), (-4, 1));
        assert_eq!(floor_div_rem(-6i64, &3), (-2, 0));
        assert_eq!(floor_div_rem(i64::MIN, &1), (i64::MIN, 0));
        assert_eq!(floor_div_rem(i64::MIN, &3), (i64::MIN / 3 - 1, 1));
    }

    #[test]
    fn test_compare_without_overflow() {
        let max = i64::MAX;
        let a = r(max, max - 1);
        let b = r(max - 1, max - 2);
        assert!(a < b);
        assert!(b > a);

        let c = r(-max, max - 1);
        let d = r(-(max - 1), max - 2);
        assert!(d < c);

        let e = r(i64::MIN, max);
        let f = r(i64::MIN + 1, max);
        assert!(e < f);
    }

    #[test]
    fn test_fallback_matches_widened_products() {
        // i8 fractions overflow their cross products constantly; i32 is the
        // exact reference.
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..20_000 {
            let (an, ad) = (rng.gen_range(i8::MIN..=i8::MAX), rng.gen_range(1..=i8::MAX));
            let (bn, bd) = (rng.gen_range(i8::MIN..=i8::MAX), rng.gen_range(1..=i8::MAX));
            let a = Rational::new(an, ad).unwrap();
            let b = Rational::new(bn, bd).unwrap();

            let expected = (an as i32 * bd as i32).cmp(&(bn as i32 * ad as i32));
            assert_eq!(a.cmp(&b), expected, "{} vs {}", a, b);
        }
    }

    #[test]
    fn test_continued_fractions_directly() {
        assert_eq!(cmp_continued_fractions(1i64, 3, 1, 2), Ordering::Less);
        assert_eq!(cmp_continued_fractions(5i64, 3, 8, 5), Ordering::Greater);
        assert_eq!(cmp_continued_fractions(-5i64, 3, -8, 5), Ordering::Less);
        assert_eq!(cmp_continued_fractions(4i64, 2, 2, 1), Ordering::Equal);
    }
}
