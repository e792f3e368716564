//! Rational Error Types
//!
//! Errors reported by the fallible (`try_*`) rational operations and by
//! construction from a numerator/denominator pair.

/// Rational operation error types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RationalError {
    /// A fraction was built with a zero denominator
    ZeroDenominator,
    /// The divisor (or the value being inverted) is zero
    DivisionByZero,
    /// An intermediate or final value does not fit the integer type
    Overflow,
}

impl std::fmt::Display for RationalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RationalError::ZeroDenominator => write!(f, "Zero denominator"),
            RationalError::DivisionByZero => write!(f, "Division by zero"),
            RationalError::Overflow => write!(f, "Integer overflow"),
        }
    }
}

impl std::error::Error for RationalError {}

/// Result type for rational operations
pub type RationalResult<T> = Result<T, RationalError>;
