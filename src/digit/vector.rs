// ============================================================================
// Digit Vector
// Little-endian digit sequence shared by all number kinds
// ============================================================================

use super::single::Digit;
use smallvec::{smallvec, SmallVec};
use std::cmp::Ordering;
use std::fmt;

/// Digits kept inline before spilling to the heap; word-sized values
/// never allocate.
const INLINE_DIGITS: usize = 4;

/// An ordered sequence of digits, index 0 least significant.
///
/// Invariant: length >= 1 and the most significant digit is nonzero,
/// except for the canonical zero `[0]`. Backends and the owning number's
/// normalization step are the only producers of digit vectors.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DigitVector {
    pub(crate) digits: SmallVec<[Digit; INLINE_DIGITS]>,
}

impl DigitVector {
    /// The canonical zero vector `[0]`.
    pub fn zero() -> Self {
        Self {
            digits: smallvec![Digit::ZERO],
        }
    }

    /// A single-digit vector.
    pub fn from_word(value: u64) -> Self {
        Self {
            digits: smallvec![Digit::new(value)],
        }
    }

    /// Builds from raw little-endian digits, restoring the invariant.
    pub fn from_digits(digits: impl IntoIterator<Item = Digit>) -> Self {
        let mut v = Self {
            digits: digits.into_iter().collect(),
        };
        v.normalize();
        v
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.len() == 1 && self.digits[0].is_zero()
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == Digit::ONE
    }

    /// Digit at `pos`, zero beyond the top.
    #[inline]
    pub fn get(&self, pos: usize) -> Digit {
        self.digits.get(pos).copied().unwrap_or(Digit::ZERO)
    }

    /// Total bit length of the magnitude; 0 for zero.
    pub fn bit_len(&self) -> u64 {
        if self.is_zero() {
            return 0;
        }
        let top = self.digits[self.digits.len() - 1];
        (self.digits.len() as u64 - 1) * Digit::BITS as u64 + top.bit_len() as u64
    }

    /// Strips most-significant zero digits down to the canonical form.
    pub fn normalize(&mut self) {
        while self.digits.len() > 1 && self.digits[self.digits.len() - 1].is_zero() {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.digits.push(Digit::ZERO);
        }
    }

    /// Magnitude comparison: vector length first, then top-down digits.
    pub fn cmp_magnitude(&self, other: &Self) -> Ordering {
        if self.len() != other.len() {
            return self.len().cmp(&other.len());
        }
        for i in (0..self.len()).rev() {
            match self.digits[i].cmp(&other.digits[i]) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }

    /// Value when it fits in one machine word.
    pub fn to_u64(&self) -> Option<u64> {
        if self.len() == 1 {
            Some(self.digits[0].value())
        } else {
            None
        }
    }

    /// Multiplies the vector by `m` digit positions (value * B^m).
    /// Zero stays the canonical `[0]`.
    pub(crate) fn shift_digits_left(&mut self, m: usize) {
        if m == 0 || self.is_zero() {
            return;
        }
        self.digits.insert_from_slice(0, &vec![Digit::ZERO; m]);
    }

    /// The digits from position `from` upward, as a normalized vector.
    pub(crate) fn upper_window(&self, from: usize) -> Self {
        if from >= self.len() {
            return Self::zero();
        }
        Self::from_digits(self.digits[from..].iter().copied())
    }
}

impl Default for DigitVector {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for DigitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DigitVector(")?;
        for (i, d) in self.digits.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", d)?;
        }
        write!(f, ")")
    }
}
