// ============================================================================
// Number Core
// One digit vector plus the backend that operates on it
// ============================================================================

use crate::backend::{resolve_backend, Backend, BackendKind};
use crate::digit::DigitVector;
use crate::numeric::NumericResult;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Storage and dispatch shared by every number kind: the magnitude as a
/// digit vector, and the arithmetic backend currently driving it.
///
/// The backend can be swapped at any time on a live value; the digits are
/// never touched by a swap. Equality and hashing look at the digits only,
/// so values computed under different backends compare as values.
#[derive(Clone)]
pub struct NumberCore {
    digits: DigitVector,
    kind: BackendKind,
    backend: &'static dyn Backend,
}

impl NumberCore {
    /// Zero under the given backend kind.
    pub fn new(kind: BackendKind) -> Self {
        Self {
            digits: DigitVector::zero(),
            kind,
            backend: resolve_backend(kind),
        }
    }

    /// A single-word value under the auto-selected backend.
    pub fn from_word(value: u64) -> Self {
        Self::from_vector(DigitVector::from_word(value), BackendKind::default())
    }

    pub fn from_vector(digits: DigitVector, kind: BackendKind) -> Self {
        Self {
            digits,
            kind,
            backend: resolve_backend(kind),
        }
    }

    #[inline]
    pub fn digits(&self) -> &DigitVector {
        &self.digits
    }

    #[inline]
    pub fn kind(&self) -> BackendKind {
        self.kind
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Swaps the arithmetic backend, keeping the digits unchanged.
    pub fn set_backend(&mut self, kind: BackendKind) {
        let backend = resolve_backend(kind);
        tracing::debug!(
            from = self.backend.name(),
            to = backend.name(),
            "backend hot-swap"
        );
        self.kind = kind;
        self.backend = backend;
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.is_zero()
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.digits.is_one()
    }

    #[inline]
    pub fn bit_len(&self) -> u64 {
        self.digits.bit_len()
    }

    pub fn to_u64(&self) -> Option<u64> {
        self.digits.to_u64()
    }

    pub fn add(&mut self, rhs: &Self) {
        self.backend.add(&mut self.digits, &rhs.digits);
    }

    pub fn subtract(&mut self, rhs: &Self) -> NumericResult<()> {
        self.backend.subtract(&mut self.digits, &rhs.digits)
    }

    /// `self -= rhs` where the caller has already established
    /// `self >= rhs`, so the borrow cannot escape.
    pub(crate) fn sub_unchecked(&mut self, rhs: &Self) {
        self.backend
            .subtract(&mut self.digits, &rhs.digits)
            .unwrap_or_else(|_| unreachable!("subtrahend exceeds caller-checked minuend"));
    }

    pub fn multiply(&mut self, rhs: &Self) {
        self.backend.multiply(&mut self.digits, &rhs.digits);
    }

    /// `(quotient, remainder)`, both inheriting this value's backend.
    pub fn div_rem(&self, rhs: &Self) -> NumericResult<(Self, Self)> {
        let (q, r) = self.backend.divide(&self.digits, &rhs.digits)?;
        Ok((
            Self::from_vector(q, self.kind),
            Self::from_vector(r, self.kind),
        ))
    }

    pub fn compare(&self, rhs: &Self) -> Ordering {
        self.backend.compare(&self.digits, &rhs.digits)
    }

    pub fn bitand(&mut self, rhs: &Self) {
        self.backend.bitand(&mut self.digits, &rhs.digits);
    }

    pub fn bitor(&mut self, rhs: &Self) {
        self.backend.bitor(&mut self.digits, &rhs.digits);
    }

    pub fn bitxor(&mut self, rhs: &Self) {
        self.backend.bitxor(&mut self.digits, &rhs.digits);
    }

    pub fn bitnot(&mut self) {
        self.backend.bitnot(&mut self.digits);
    }

    pub fn shift_left(&mut self, bits: u32) {
        self.backend.shift_left(&mut self.digits, bits);
    }

    pub fn shift_right(&mut self, bits: u32) {
        self.backend.shift_right(&mut self.digits, bits);
    }
}

impl Default for NumberCore {
    fn default() -> Self {
        Self::new(BackendKind::default())
    }
}

impl PartialEq for NumberCore {
    fn eq(&self, other: &Self) -> bool {
        self.digits == other.digits
    }
}

impl Eq for NumberCore {}

impl Hash for NumberCore {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.digits.hash(state);
    }
}

impl fmt::Debug for NumberCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberCore")
            .field("digits", &self.digits)
            .field("backend", &self.backend.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hot_swap_preserves_digits() {
        let mut core = NumberCore::from_word(0xfeed);
        let before = core.digits().clone();
        core.set_backend(BackendKind::Naive);
        assert_eq!(core.digits(), &before);
        assert_eq!(core.backend_name(), "Naive");
        core.set_backend(BackendKind::Karatsuba);
        assert_eq!(core.digits(), &before);
        assert_eq!(core.backend_name(), "Karatsuba");
    }

    #[test]
    fn test_equality_ignores_backend() {
        let a = NumberCore::from_vector(DigitVector::from_word(42), BackendKind::Naive);
        let b = NumberCore::from_vector(DigitVector::from_word(42), BackendKind::Karatsuba);
        assert_eq!(a, b);
    }

    #[test]
    fn test_div_rem_inherits_kind() {
        let a = NumberCore::from_vector(DigitVector::from_word(17), BackendKind::Naive);
        let b = NumberCore::from_word(5);
        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(q.to_u64(), Some(3));
        assert_eq!(r.to_u64(), Some(2));
        assert_eq!(q.kind(), BackendKind::Naive);
    }

    #[test]
    fn test_delegated_arithmetic() {
        let mut a = NumberCore::from_word(100);
        a.multiply(&NumberCore::from_word(7));
        a.add(&NumberCore::from_word(1));
        assert_eq!(a.to_u64(), Some(701));
        a.subtract(&NumberCore::from_word(700)).unwrap();
        assert!(a.is_one());
    }
}
