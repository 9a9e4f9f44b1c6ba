// ============================================================================
// Backend Trait
// Abstract interface for digit-vector arithmetic
// ============================================================================

use crate::digit::DigitVector;
use crate::numeric::NumericResult;
use std::cmp::Ordering;

/// Trait for multi-digit arithmetic over little-endian digit vectors.
///
/// Mutating operations work in place on the first argument; `divide` and
/// `compare` leave their operands untouched. Every operation restores the
/// digit-vector normalization invariant before returning.
///
/// # Thread Safety
/// All implementations must be `Send + Sync`; they are stateless and
/// shared as statics across values.
pub trait Backend: Send + Sync {
    /// `a += b`. Ripple carry; the result grows by at most one digit.
    fn add(&self, a: &mut DigitVector, b: &DigitVector);

    /// `a -= b`. Ripple borrow.
    ///
    /// # Errors
    /// `Underflow` when a borrow would run past the most significant
    /// digit of `a` (i.e. `a < b`). Callers that do not want the error
    /// must check ordering first.
    fn subtract(&self, a: &mut DigitVector, b: &DigitVector) -> NumericResult<()>;

    /// `a *= b`.
    fn multiply(&self, a: &mut DigitVector, b: &DigitVector);

    /// `(quotient, remainder)` of `a / b`.
    ///
    /// # Errors
    /// `DivisionByZero` when `b` is zero.
    fn divide(
        &self,
        a: &DigitVector,
        b: &DigitVector,
    ) -> NumericResult<(DigitVector, DigitVector)>;

    /// Magnitude comparison: vector length first, then top-down digits.
    fn compare(&self, a: &DigitVector, b: &DigitVector) -> Ordering;

    /// `a &= b` over zero-padded vectors.
    fn bitand(&self, a: &mut DigitVector, b: &DigitVector);

    /// `a |= b` over zero-padded vectors.
    fn bitor(&self, a: &mut DigitVector, b: &DigitVector);

    /// `a ^= b` over zero-padded vectors.
    fn bitxor(&self, a: &mut DigitVector, b: &DigitVector);

    /// Complements every digit of `a` in place.
    fn bitnot(&self, a: &mut DigitVector);

    /// `a <<= bits`, propagating carry bits across digit boundaries.
    fn shift_left(&self, a: &mut DigitVector, bits: u32);

    /// `a >>= bits`, propagating borrow bits across digit boundaries.
    fn shift_right(&self, a: &mut DigitVector, bits: u32);

    /// Name of this implementation, for logging and benchmarks.
    fn name(&self) -> &'static str;

    /// Selection priority; higher wins during auto-detection.
    fn priority(&self) -> u8;

    /// Whether this implementation can run on the current platform.
    fn available(&self) -> bool;
}
