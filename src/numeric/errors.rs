// ============================================================================
// Numeric Errors
// Error types for arbitrary-precision arithmetic operations
// ============================================================================

use std::fmt;

/// Errors that can occur during arbitrary-precision arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// A carry or shift exceeded the representable magnitude under a
    /// defined safety bound (single-word digit operators, 1000-bit
    /// shift-left guard)
    Overflow,
    /// Subtraction where the minuend is smaller than the subtrahend
    Underflow,
    /// Attempted division or modulo by a zero value
    DivisionByZero,
    /// Conversion to Cardinal of a negative value
    InvalidConversion,
    /// Input string could not be parsed as a numeral
    InvalidInput,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum magnitude")
            },
            NumericError::Underflow => {
                write!(f, "arithmetic underflow: minuend smaller than subtrahend")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::InvalidConversion => {
                write!(f, "invalid conversion: negative value has no cardinal form")
            },
            NumericError::InvalidInput => write!(f, "invalid input: could not parse numeral"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::Underflow.to_string(),
            "arithmetic underflow: minuend smaller than subtrahend"
        );
        assert_eq!(NumericError::DivisionByZero.to_string(), "division by zero");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::Overflow, NumericError::Overflow);
        assert_ne!(NumericError::Overflow, NumericError::Underflow);
    }
}
