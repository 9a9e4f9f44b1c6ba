// ============================================================================
// Digit
// One machine word with checked arithmetic primitives
// ============================================================================

use crate::numeric::{NumericError, NumericResult};
use std::fmt;

/// Default digit alphabet: 64 characters, so any base up to 64 works.
pub const DEFAULT_ALPHABET: &str =
    "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ><";

/// Double-width accumulator for single-word products and sums.
type Wide = u128;

/// A single machine-word digit, the atomic unit of multi-precision storage.
///
/// Every primitive returns both the truncated word result and the amount
/// that did not fit: the carry for add/mul/shl, the borrow for sub, the
/// remainder for div, the bits shifted out for shr. Callers decide whether
/// a nonzero overflow is a carry to propagate or an error to raise.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Digit(pub(crate) u64);

impl Digit {
    /// Number of bits in one digit.
    pub const BITS: u32 = u64::BITS;

    /// The zero digit.
    pub const ZERO: Self = Self(0);

    /// The one digit.
    pub const ONE: Self = Self(1);

    /// Largest representable digit.
    pub const MAX: Self = Self(u64::MAX);

    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Sum word plus carry. The carry is always 0 or 1.
    #[inline]
    pub const fn carrying_add(self, rhs: Self) -> (Self, Self) {
        let (word, carry) = self.0.overflowing_add(rhs.0);
        (Self(word), Self(carry as u64))
    }

    /// Difference word plus borrow. The borrow is always 0 or 1.
    #[inline]
    pub const fn borrowing_sub(self, rhs: Self) -> (Self, Self) {
        let (word, borrow) = self.0.overflowing_sub(rhs.0);
        (Self(word), Self(borrow as u64))
    }

    /// Low product word plus high product word.
    #[inline]
    pub const fn widening_mul(self, rhs: Self) -> (Self, Self) {
        let wide = (self.0 as Wide) * (rhs.0 as Wide);
        (Self(wide as u64), Self((wide >> Self::BITS) as u64))
    }

    /// Quotient plus remainder. Divisor zero is a caller-checked
    /// precondition.
    #[inline]
    pub const fn div_rem(self, rhs: Self) -> (Self, Self) {
        (Self(self.0 / rhs.0), Self(self.0 % rhs.0))
    }

    /// Shifted word plus the bits pushed out the top, right-aligned.
    /// `bits` must be below [`Digit::BITS`].
    #[inline]
    pub const fn carrying_shl(self, bits: u32) -> (Self, Self) {
        if bits == 0 {
            return (self, Self::ZERO);
        }
        let wide = (self.0 as Wide) << bits;
        (Self(wide as u64), Self((wide >> Self::BITS) as u64))
    }

    /// Shifted word plus the bits pushed out the bottom, in their original
    /// (low) positions. `bits` must be below [`Digit::BITS`].
    #[inline]
    pub const fn borrowing_shr(self, bits: u32) -> (Self, Self) {
        if bits == 0 {
            return (self, Self::ZERO);
        }
        let mask = (1u64 << bits) - 1;
        (Self(self.0 >> bits), Self(self.0 & mask))
    }

    /// Bit length of the digit value; 0 for the zero digit.
    #[inline]
    pub const fn bit_len(self) -> u32 {
        Self::BITS - self.0.leading_zeros()
    }

    #[inline]
    pub const fn get_bit(self, k: u32) -> bool {
        (self.0 >> k) & 1 == 1
    }

    #[inline]
    pub fn set_bit(&mut self, k: u32, on: bool) {
        if on {
            self.0 |= 1 << k;
        } else {
            self.0 &= !(1 << k);
        }
    }

    /// Validates a base/alphabet combination. Violations are programming
    /// errors, not runtime data conditions.
    pub(crate) fn assert_base(base: u32, alphabet: &str) {
        assert!(
            base > 1 && (base as usize) <= alphabet.chars().count(),
            "invalid base {} for alphabet of length {}",
            base,
            alphabet.chars().count()
        );
    }

    /// The alphabet character for a digit value below `base`.
    pub fn to_char(self, base: u32, alphabet: &str) -> char {
        Self::assert_base(base, alphabet);
        debug_assert!(self.0 < base as u64);
        alphabet
            .chars()
            .nth(self.0 as usize)
            .unwrap_or('0')
    }

    /// The digit value of one alphabet character, or `InvalidInput` when
    /// the character is absent or not below `base`.
    pub fn from_char(c: char, base: u32, alphabet: &str) -> NumericResult<Self> {
        Self::assert_base(base, alphabet);
        match alphabet.chars().position(|a| a == c) {
            Some(d) if (d as u64) < base as u64 => Ok(Self(d as u64)),
            _ => Err(NumericError::InvalidInput),
        }
    }
}

impl From<u64> for Digit {
    #[inline]
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Debug for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digit({})", self.0)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carrying_add() {
        let (word, carry) = Digit::new(3).carrying_add(Digit::new(4));
        assert_eq!(word, Digit::new(7));
        assert_eq!(carry, Digit::ZERO);

        let (word, carry) = Digit::MAX.carrying_add(Digit::ONE);
        assert_eq!(word, Digit::ZERO);
        assert_eq!(carry, Digit::ONE);
    }

    #[test]
    fn test_borrowing_sub() {
        let (word, borrow) = Digit::new(10).borrowing_sub(Digit::new(3));
        assert_eq!(word, Digit::new(7));
        assert_eq!(borrow, Digit::ZERO);

        // 0 - 1 wraps with a single-unit borrow
        let (word, borrow) = Digit::ZERO.borrowing_sub(Digit::ONE);
        assert_eq!(word, Digit::MAX);
        assert_eq!(borrow, Digit::ONE);
    }

    #[test]
    fn test_widening_mul() {
        let (lo, hi) = Digit::new(6).widening_mul(Digit::new(7));
        assert_eq!(lo, Digit::new(42));
        assert_eq!(hi, Digit::ZERO);

        let (lo, hi) = Digit::MAX.widening_mul(Digit::MAX);
        // (2^64 - 1)^2 = 2^128 - 2^65 + 1
        assert_eq!(lo, Digit::ONE);
        assert_eq!(hi, Digit::new(u64::MAX - 1));
    }

    #[test]
    fn test_div_rem() {
        let (q, r) = Digit::new(17).div_rem(Digit::new(5));
        assert_eq!(q, Digit::new(3));
        assert_eq!(r, Digit::new(2));
    }

    #[test]
    fn test_shifts() {
        let (word, out) = Digit::new(0b1011).carrying_shl(Digit::BITS - 2);
        assert_eq!(word.value(), 0b11 << (Digit::BITS - 2));
        assert_eq!(out.value(), 0b10);

        let (word, out) = Digit::new(0b1011).borrowing_shr(2);
        assert_eq!(word.value(), 0b10);
        assert_eq!(out.value(), 0b11);

        let (word, out) = Digit::new(5).carrying_shl(0);
        assert_eq!(word.value(), 5);
        assert_eq!(out, Digit::ZERO);
    }

    #[test]
    fn test_bit_len() {
        assert_eq!(Digit::ZERO.bit_len(), 0);
        assert_eq!(Digit::ONE.bit_len(), 1);
        assert_eq!(Digit::new(255).bit_len(), 8);
        assert_eq!(Digit::MAX.bit_len(), 64);
    }

    #[test]
    fn test_char_round_trip() {
        for base in [2u32, 10, 16, 36, 64] {
            for value in 0..base.min(20) {
                let d = Digit::new(value as u64);
                let c = d.to_char(base, DEFAULT_ALPHABET);
                assert_eq!(Digit::from_char(c, base, DEFAULT_ALPHABET).unwrap(), d);
            }
        }
    }

    #[test]
    fn test_from_char_rejects_out_of_base() {
        assert_eq!(
            Digit::from_char('a', 10, DEFAULT_ALPHABET),
            Err(NumericError::InvalidInput)
        );
        assert_eq!(
            Digit::from_char('?', 64, DEFAULT_ALPHABET),
            Err(NumericError::InvalidInput)
        );
    }

    #[test]
    #[should_panic(expected = "invalid base")]
    fn test_invalid_base_is_fatal() {
        let _ = Digit::ONE.to_char(1, DEFAULT_ALPHABET);
    }
}
