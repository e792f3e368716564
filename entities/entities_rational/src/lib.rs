//! Entities Layer: Rational
//!
//! Provides exact rational numbers over a caller-supplied integer type:
//! - Construction and normalization to lowest terms
//! - Addition, subtraction, multiplication, division and negation that
//!   cancel common factors before multiplying
//! - Equality, total ordering and `numerator/denominator` rendering
//!
//! The integer type only needs to implement [`RationalInteger`]. The signed
//! primitives are supported out of the box, and `malachite::Integer` is
//! supported with the (default) `malachite` feature.

mod arith;
mod cmp;
pub mod error;
pub mod integer;
pub mod rational;

pub use error::{RationalError, RationalResult};
pub use integer::RationalInteger;
pub use rational::Rational;
