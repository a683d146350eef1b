// ============================================================================
// Numeric Errors
// Error types for amount and price parsing
// ============================================================================

use std::fmt;

/// Errors that can occur while parsing amounts and prices.
///
/// Each variant names the rule the input broke, so callers can report
/// exactly why a value was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input string is empty
    Empty,
    /// Input is not a plain decimal (or `n:d` rational) literal
    Malformed,
    /// Amount carries a minus sign
    Negative,
    /// More fractional digits than the fixed scale can hold
    PrecisionLoss,
    /// Scaled value exceeds the 64-bit (amount) or 32-bit (price) range
    Overflow,
    /// Price is zero or negative
    NonPositive,
    /// Rational price with a zero denominator
    ZeroDenominator,
    /// No convergent fits into two 32-bit integers
    Unrepresentable,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Empty => write!(f, "empty input"),
            NumericError::Malformed => write!(f, "malformed input: not a decimal number"),
            NumericError::Negative => write!(f, "negative value not allowed"),
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: too many fractional digits for the fixed scale"
            ),
            NumericError::Overflow => {
                write!(f, "overflow: value exceeds the representable range")
            },
            NumericError::NonPositive => write!(f, "price must be greater than zero"),
            NumericError::ZeroDenominator => write!(f, "price denominator is zero"),
            NumericError::Unrepresentable => write!(
                f,
                "price cannot be approximated within 32-bit numerator and denominator"
            ),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
