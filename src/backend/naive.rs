// ============================================================================
// Naive Backend
// Schoolbook digit-vector arithmetic, the universal fallback
// ============================================================================

use super::traits::Backend;
use crate::digit::{Digit, DigitVector};
use crate::numeric::{NumericError, NumericResult};
use smallvec::smallvec;
use std::cmp::Ordering;

/// Schoolbook implementation of every digit-vector operation.
///
/// Addition and subtraction ripple a 0/1 carry/borrow through the vector,
/// multiplication is the O(n^2) double loop with a double-width per-digit
/// accumulator, division is positional long division with an estimated
/// and then bisection-corrected quotient digit.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveBackend;

impl NaiveBackend {
    pub const fn new() -> Self {
        Self
    }

    /// `v * m` into a fresh vector.
    pub(crate) fn mul_by_digit(v: &DigitVector, m: u64) -> DigitVector {
        if m == 0 || v.is_zero() {
            return DigitVector::zero();
        }
        let mut out = DigitVector {
            digits: smallvec![Digit::ZERO; v.len() + 1],
        };
        let mut carry: u128 = 0;
        for i in 0..v.len() {
            let cur = v.get(i).value() as u128 * m as u128 + carry;
            out.digits[i] = Digit::new(cur as u64);
            carry = cur >> Digit::BITS;
        }
        out.digits[v.len()] = Digit::new(carry as u64);
        out.normalize();
        out
    }

    /// Short division by a single-digit divisor.
    fn divide_by_digit(a: &DigitVector, d: u64) -> (DigitVector, DigitVector) {
        let mut quotient = DigitVector {
            digits: smallvec![Digit::ZERO; a.len()],
        };
        let mut rem: u128 = 0;
        for i in (0..a.len()).rev() {
            let cur = (rem << Digit::BITS) | a.get(i).value() as u128;
            quotient.digits[i] = Digit::new((cur / d as u128) as u64);
            rem = cur % d as u128;
        }
        quotient.normalize();
        (quotient, DigitVector::from_word(rem as u64))
    }

    /// Largest single digit `q` with `b * q <= window`, found by bisection
    /// seeded from the top window digits over the divisor's top digit.
    ///
    /// The estimate `top2(window) / top(divisor)` never undershoots the
    /// true digit by more than rounding, so `estimate + 1` is a sound
    /// upper bound; the bisection then needs at most one trial multiply
    /// per quotient-digit bit.
    fn quotient_digit(b: &DigitVector, window: &DigitVector, div_top: u64) -> u64 {
        let k = window.len();
        let top2: u128 = if k >= 2 {
            ((window.get(k - 1).value() as u128) << Digit::BITS)
                | window.get(k - 2).value() as u128
        } else {
            window.get(k - 1).value() as u128
        };
        let est = top2 / div_top as u128;
        let mut hi = if est >= u64::MAX as u128 {
            u64::MAX
        } else {
            (est as u64).saturating_add(1)
        };
        // window >= b, so the digit is at least 1
        let mut lo = 1u64;
        let mut trials = 0u32;
        while lo < hi {
            let mid = lo + (hi - lo + 1) / 2;
            let t = Self::mul_by_digit(b, mid);
            if t.cmp_magnitude(window) != Ordering::Greater {
                lo = mid;
            } else {
                hi = mid - 1;
            }
            trials += 1;
        }
        tracing::trace!(digit = lo, trials, "quotient digit corrected");
        lo
    }
}

impl Backend for NaiveBackend {
    fn add(&self, a: &mut DigitVector, b: &DigitVector) {
        if b.is_zero() {
            return;
        }
        if a.len() < b.len() {
            a.digits.resize(b.len(), Digit::ZERO);
        }
        let mut carry = Digit::ZERO;
        for i in 0..a.len() {
            let (d1, c1) = a.digits[i].carrying_add(b.get(i));
            let (d2, c2) = d1.carrying_add(carry);
            a.digits[i] = d2;
            // c1 and c2 cannot both be set
            carry = Digit::new(c1.value() + c2.value());
            if i >= b.len() && carry.is_zero() {
                break;
            }
        }
        if !carry.is_zero() {
            a.digits.push(carry);
        }
    }

    fn subtract(&self, a: &mut DigitVector, b: &DigitVector) -> NumericResult<()> {
        if b.is_zero() {
            return Ok(());
        }
        // normalized vectors: longer b means a < b
        if b.len() > a.len() {
            return Err(NumericError::Underflow);
        }
        let mut borrow = Digit::ZERO;
        for i in 0..a.len() {
            let (d1, b1) = a.digits[i].borrowing_sub(b.get(i));
            let (d2, b2) = d1.borrowing_sub(borrow);
            a.digits[i] = d2;
            borrow = Digit::new(b1.value() + b2.value());
            if i >= b.len() && borrow.is_zero() {
                break;
            }
        }
        if !borrow.is_zero() {
            return Err(NumericError::Underflow);
        }
        a.normalize();
        Ok(())
    }

    fn multiply(&self, a: &mut DigitVector, b: &DigitVector) {
        if a.is_zero() || b.is_zero() {
            *a = DigitVector::zero();
            return;
        }
        if b.is_one() {
            return;
        }
        let mut product = DigitVector {
            digits: smallvec![Digit::ZERO; a.len() + b.len()],
        };
        for bi in 0..b.len() {
            let m = b.get(bi).value() as u128;
            let mut carry: u128 = 0;
            for ai in 0..a.len() {
                let cur = product.digits[ai + bi].value() as u128
                    + a.get(ai).value() as u128 * m
                    + carry;
                product.digits[ai + bi] = Digit::new(cur as u64);
                carry = cur >> Digit::BITS;
            }
            // final carry fits the reserved top digit of this row
            let mut idx = bi + a.len();
            while carry > 0 {
                let cur = product.digits[idx].value() as u128 + carry;
                product.digits[idx] = Digit::new(cur as u64);
                carry = cur >> Digit::BITS;
                idx += 1;
            }
        }
        product.normalize();
        *a = product;
    }

    fn divide(
        &self,
        a: &DigitVector,
        b: &DigitVector,
    ) -> NumericResult<(DigitVector, DigitVector)> {
        if b.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        if a.is_zero() {
            return Ok((DigitVector::zero(), DigitVector::zero()));
        }
        if b.is_one() {
            return Ok((a.clone(), DigitVector::zero()));
        }
        if a.cmp_magnitude(b) == Ordering::Less {
            return Ok((DigitVector::zero(), a.clone()));
        }
        if b.len() == 1 {
            return Ok(Self::divide_by_digit(a, b.get(0).value()));
        }

        let div_len = b.len();
        let div_top = b.get(div_len - 1).value();
        let quot_len = a.len() - div_len + 1;
        let mut remainder = a.clone();
        let mut quotient = DigitVector {
            digits: smallvec![Digit::ZERO; quot_len],
        };

        // quotient digits from most to least significant; the window is
        // everything of the remainder at and above the current position
        for q_idx in (0..quot_len).rev() {
            let window = remainder.upper_window(q_idx);
            if window.cmp_magnitude(b) == Ordering::Less {
                continue;
            }
            let q_digit = Self::quotient_digit(b, &window, div_top);
            let mut back = Self::mul_by_digit(b, q_digit);
            back.shift_digits_left(q_idx);
            self.subtract(&mut remainder, &back)?;
            quotient.digits[q_idx] = Digit::new(q_digit);
        }

        quotient.normalize();
        remainder.normalize();
        Ok((quotient, remainder))
    }

    fn compare(&self, a: &DigitVector, b: &DigitVector) -> Ordering {
        a.cmp_magnitude(b)
    }

    fn bitand(&self, a: &mut DigitVector, b: &DigitVector) {
        if a.len() < b.len() {
            a.digits.resize(b.len(), Digit::ZERO);
        }
        for i in 0..a.len() {
            a.digits[i] = Digit::new(a.digits[i].value() & b.get(i).value());
        }
        a.normalize();
    }

    fn bitor(&self, a: &mut DigitVector, b: &DigitVector) {
        if a.len() < b.len() {
            a.digits.resize(b.len(), Digit::ZERO);
        }
        for i in 0..a.len() {
            a.digits[i] = Digit::new(a.digits[i].value() | b.get(i).value());
        }
        a.normalize();
    }

    fn bitxor(&self, a: &mut DigitVector, b: &DigitVector) {
        if a.len() < b.len() {
            a.digits.resize(b.len(), Digit::ZERO);
        }
        for i in 0..a.len() {
            a.digits[i] = Digit::new(a.digits[i].value() ^ b.get(i).value());
        }
        a.normalize();
    }

    fn bitnot(&self, a: &mut DigitVector) {
        for i in 0..a.len() {
            a.digits[i] = Digit::new(!a.digits[i].value());
        }
        a.normalize();
    }

    fn shift_left(&self, a: &mut DigitVector, bits: u32) {
        if bits == 0 || a.is_zero() {
            return;
        }
        let whole = (bits / Digit::BITS) as usize;
        let rem = bits % Digit::BITS;
        if rem > 0 {
            let mut carry = Digit::ZERO;
            for i in 0..a.len() {
                let (word, out) = a.digits[i].carrying_shl(rem);
                a.digits[i] = Digit::new(word.value() | carry.value());
                carry = out;
            }
            if !carry.is_zero() {
                a.digits.push(carry);
            }
        }
        a.shift_digits_left(whole);
    }

    fn shift_right(&self, a: &mut DigitVector, bits: u32) {
        if bits == 0 || a.is_zero() {
            return;
        }
        let whole = (bits / Digit::BITS) as usize;
        let rem = bits % Digit::BITS;
        if whole >= a.len() {
            *a = DigitVector::zero();
            return;
        }
        if whole > 0 {
            a.digits.drain(0..whole);
        }
        if rem > 0 {
            let mut carry = Digit::ZERO;
            for i in (0..a.len()).rev() {
                let (word, out) = a.digits[i].borrowing_shr(rem);
                a.digits[i] = Digit::new(word.value() | (carry.value() << (Digit::BITS - rem)));
                carry = out;
            }
        }
        a.normalize();
    }

    fn name(&self) -> &'static str {
        "Naive"
    }

    fn priority(&self) -> u8 {
        1
    }

    fn available(&self) -> bool {
        true
    }
}
