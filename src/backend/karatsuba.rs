// ============================================================================
// Karatsuba Backend
// Divide-and-conquer multiplication above a digit-count threshold
// ============================================================================

use super::naive::NaiveBackend;
use super::traits::Backend;
use crate::digit::DigitVector;
use crate::numeric::NumericResult;
use std::cmp::Ordering;

/// Operand length, in digits, below which the schoolbook loop wins.
/// Below this the recursion overhead costs more than it saves.
pub const KARATSUBA_THRESHOLD: usize = 50;

/// Karatsuba multiplication; every other operation delegates to the
/// schoolbook backend, where the asymptotic trick buys nothing.
///
/// Splitting at `m = ceil(max_len / 2)` digits reduces one n-digit
/// product to three roughly n/2-digit products:
///
/// ```text
/// a = a1*B^m + a0,  b = b1*B^m + b0
/// a*b = z2*B^2m + z1*B^m + z0
/// z0 = a0*b0,  z2 = a1*b1,  z1 = (a0+a1)*(b0+b1) - z0 - z2
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct KaratsubaBackend {
    fallback: NaiveBackend,
}

impl KaratsubaBackend {
    pub const fn new() -> Self {
        Self {
            fallback: NaiveBackend::new(),
        }
    }

    /// Lower `m` digits and the rest, both normalized.
    fn split(v: &DigitVector, m: usize) -> (DigitVector, DigitVector) {
        if m >= v.len() {
            return (v.clone(), DigitVector::zero());
        }
        let low = DigitVector::from_digits(v.digits[..m].iter().copied());
        (low, v.upper_window(m))
    }

    fn mul_recursive(&self, a: &DigitVector, b: &DigitVector) -> DigitVector {
        if a.len().min(b.len()) < KARATSUBA_THRESHOLD {
            let mut out = a.clone();
            self.fallback.multiply(&mut out, b);
            return out;
        }

        let m = (a.len().max(b.len()) + 1) / 2;
        let (a0, a1) = Self::split(a, m);
        let (b0, b1) = Self::split(b, m);

        let z0 = self.mul_recursive(&a0, &b0);
        let z2 = self.mul_recursive(&a1, &b1);

        let mut sum_a = a0;
        self.fallback.add(&mut sum_a, &a1);
        let mut sum_b = b0;
        self.fallback.add(&mut sum_b, &b1);

        // z1 = (a0+a1)(b0+b1) - z0 - z2 >= 0 for all operands
        let mut z1 = self.mul_recursive(&sum_a, &sum_b);
        self.middle_term_sub(&mut z1, &z0);
        self.middle_term_sub(&mut z1, &z2);

        let mut result = z0;
        z1.shift_digits_left(m);
        self.fallback.add(&mut result, &z1);
        let mut high = z2;
        high.shift_digits_left(2 * m);
        self.fallback.add(&mut result, &high);
        result
    }

    fn middle_term_sub(&self, minuend: &mut DigitVector, term: &DigitVector) {
        self.fallback
            .subtract(minuend, term)
            .unwrap_or_else(|_| unreachable!("karatsuba middle term is never negative"));
    }
}

impl Backend for KaratsubaBackend {
    fn add(&self, a: &mut DigitVector, b: &DigitVector) {
        self.fallback.add(a, b);
    }

    fn subtract(&self, a: &mut DigitVector, b: &DigitVector) -> NumericResult<()> {
        self.fallback.subtract(a, b)
    }

    fn multiply(&self, a: &mut DigitVector, b: &DigitVector) {
        if a.is_zero() || b.is_zero() {
            *a = DigitVector::zero();
            return;
        }
        *a = self.mul_recursive(a, b);
    }

    fn divide(
        &self,
        a: &DigitVector,
        b: &DigitVector,
    ) -> NumericResult<(DigitVector, DigitVector)> {
        self.fallback.divide(a, b)
    }

    fn compare(&self, a: &DigitVector, b: &DigitVector) -> Ordering {
        self.fallback.compare(a, b)
    }

    fn bitand(&self, a: &mut DigitVector, b: &DigitVector) {
        self.fallback.bitand(a, b);
    }

    fn bitor(&self, a: &mut DigitVector, b: &DigitVector) {
        self.fallback.bitor(a, b);
    }

    fn bitxor(&self, a: &mut DigitVector, b: &DigitVector) {
        self.fallback.bitxor(a, b);
    }

    fn bitnot(&self, a: &mut DigitVector) {
        self.fallback.bitnot(a);
    }

    fn shift_left(&self, a: &mut DigitVector, bits: u32) {
        self.fallback.shift_left(a, bits);
    }

    fn shift_right(&self, a: &mut DigitVector, bits: u32) {
        self.fallback.shift_right(a, bits);
    }

    fn name(&self) -> &'static str {
        "Karatsuba"
    }

    fn priority(&self) -> u8 {
        10
    }

    fn available(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digit::Digit;
    use proptest::prelude::*;

    fn pattern_vec(len: usize, seed: u64) -> DigitVector {
        DigitVector::from_digits(
            (0..len).map(|i| Digit::new(seed.wrapping_mul(i as u64 + 1).wrapping_add(i as u64))),
        )
    }

    fn naive_product(a: &DigitVector, b: &DigitVector) -> DigitVector {
        let mut out = a.clone();
        NaiveBackend::new().multiply(&mut out, b);
        out
    }

    #[test]
    fn test_small_operands_match_naive() {
        let backend = KaratsubaBackend::new();
        let mut a = DigitVector::from_word(0xdead_beef);
        backend.multiply(&mut a, &DigitVector::from_word(0xcafe));
        assert_eq!(a, naive_product(&DigitVector::from_word(0xdead_beef), &DigitVector::from_word(0xcafe)));
    }

    #[test]
    fn test_around_threshold_matches_naive() {
        let backend = KaratsubaBackend::new();
        for len in [
            KARATSUBA_THRESHOLD - 1,
            KARATSUBA_THRESHOLD,
            KARATSUBA_THRESHOLD + 1,
        ] {
            let a = pattern_vec(len, 0x9e37_79b9_7f4a_7c15);
            let b = pattern_vec(len, 0x2545_f491_4f6c_dd1d);
            let mut got = a.clone();
            backend.multiply(&mut got, &b);
            assert_eq!(got, naive_product(&a, &b), "len={}", len);
        }
    }

    #[test]
    fn test_unbalanced_operands() {
        let backend = KaratsubaBackend::new();
        let a = pattern_vec(3 * KARATSUBA_THRESHOLD, 0x1234_5678);
        let b = pattern_vec(KARATSUBA_THRESHOLD + 3, 0x8765_4321);
        let mut got = a.clone();
        backend.multiply(&mut got, &b);
        assert_eq!(got, naive_product(&a, &b));
    }

    #[test]
    fn test_zero_and_one() {
        let backend = KaratsubaBackend::new();
        let mut a = pattern_vec(2 * KARATSUBA_THRESHOLD, 7);
        let orig = a.clone();
        backend.multiply(&mut a, &DigitVector::from_word(1));
        assert_eq!(a, orig);
        backend.multiply(&mut a, &DigitVector::zero());
        assert!(a.is_zero());
    }

    #[test]
    fn test_metadata_outranks_naive() {
        let backend = KaratsubaBackend::new();
        assert_eq!(backend.name(), "Karatsuba");
        assert!(backend.available());
        assert!(backend.priority() > NaiveBackend::new().priority());
    }

    proptest! {
        #[test]
        fn prop_matches_naive(
            a_words in proptest::collection::vec(any::<u64>(), 1..140),
            b_words in proptest::collection::vec(any::<u64>(), 1..140),
        ) {
            let a = DigitVector::from_digits(a_words.into_iter().map(Digit::new));
            let b = DigitVector::from_digits(b_words.into_iter().map(Digit::new));
            let backend = KaratsubaBackend::new();
            let mut got = a.clone();
            backend.multiply(&mut got, &b);
            prop_assert_eq!(got, naive_product(&a, &b));
        }
    }
}
