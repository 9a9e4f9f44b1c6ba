// ============================================================================
// Cardinal
// Unsigned arbitrary-precision integer
// ============================================================================

use super::core::NumberCore;
use crate::backend::BackendKind;
use crate::digit::{Digit, DEFAULT_ALPHABET};
use crate::numeric::{NumericError, NumericResult};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};
use std::str::FromStr;

/// Left shifts may exceed the operand's bit length by at most this many
/// bits; a guard against runaway growth from a bad shift amount, not a
/// hardware limit.
const SHIFT_SLACK_BITS: u64 = 1000;

/// Unsigned arbitrary-precision integer.
///
/// All arithmetic is exposed twice: `checked_*` methods returning
/// [`NumericResult`], and operator traits that wrap them and panic on
/// failure. The operators are a convenience for tests and examples;
/// production code should call the checked forms.
#[derive(Clone, PartialEq, Eq, Hash, Default, Debug)]
pub struct Cardinal {
    core: NumberCore,
}

impl Cardinal {
    pub fn zero() -> Self {
        Self {
            core: NumberCore::default(),
        }
    }

    pub fn one() -> Self {
        Self::from(1u64)
    }

    /// Zero under an explicitly chosen backend.
    pub fn with_backend(kind: BackendKind) -> Self {
        Self {
            core: NumberCore::new(kind),
        }
    }

    pub(crate) fn from_core(core: NumberCore) -> Self {
        Self { core }
    }

    pub(crate) fn core(&self) -> &NumberCore {
        &self.core
    }

    /// Swaps the arithmetic backend in place; the value is unchanged.
    pub fn set_backend(&mut self, kind: BackendKind) {
        self.core.set_backend(kind);
    }

    pub fn backend_name(&self) -> &'static str {
        self.core.backend_name()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.core.is_zero()
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.core.is_one()
    }

    /// Bit length of the value; 0 for zero.
    #[inline]
    pub fn bit_len(&self) -> u64 {
        self.core.bit_len()
    }

    /// Bit `k`, counting from the least significant.
    pub(crate) fn bit(&self, k: u64) -> bool {
        self.core
            .digits()
            .get((k / Digit::BITS as u64) as usize)
            .get_bit((k % Digit::BITS as u64) as u32)
    }

    pub fn to_u64(&self) -> Option<u64> {
        self.core.to_u64()
    }

    // ------------------------------------------------------------------
    // Checked arithmetic
    // ------------------------------------------------------------------

    /// Never fails; the checked form exists for surface uniformity.
    pub fn checked_add(&self, rhs: &Self) -> NumericResult<Self> {
        let mut out = self.clone();
        out.core.add(&rhs.core);
        Ok(out)
    }

    /// # Errors
    /// `Underflow` when `self < rhs`.
    pub fn checked_sub(&self, rhs: &Self) -> NumericResult<Self> {
        let mut out = self.clone();
        out.core.subtract(&rhs.core)?;
        Ok(out)
    }

    pub fn checked_mul(&self, rhs: &Self) -> NumericResult<Self> {
        let mut out = self.clone();
        out.core.multiply(&rhs.core);
        Ok(out)
    }

    /// # Errors
    /// `DivisionByZero` when `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> NumericResult<Self> {
        Ok(self.div_rem(rhs)?.0)
    }

    /// # Errors
    /// `DivisionByZero` when `rhs` is zero.
    pub fn checked_rem(&self, rhs: &Self) -> NumericResult<Self> {
        Ok(self.div_rem(rhs)?.1)
    }

    /// Quotient and remainder in one division.
    ///
    /// # Errors
    /// `DivisionByZero` when `rhs` is zero.
    pub fn div_rem(&self, rhs: &Self) -> NumericResult<(Self, Self)> {
        let (q, r) = self.core.div_rem(&rhs.core)?;
        Ok((Self::from_core(q), Self::from_core(r)))
    }

    /// # Errors
    /// `Overflow` when `bits` exceeds the operand's bit length by more
    /// than the slack bound.
    pub fn checked_shl(&self, bits: u32) -> NumericResult<Self> {
        if !self.is_zero() && bits as u64 > self.bit_len() + SHIFT_SLACK_BITS {
            return Err(NumericError::Overflow);
        }
        let mut out = self.clone();
        out.core.shift_left(bits);
        Ok(out)
    }

    pub fn shr(&self, bits: u32) -> Self {
        let mut out = self.clone();
        out.core.shift_right(bits);
        out
    }

    pub fn and(&self, rhs: &Self) -> Self {
        let mut out = self.clone();
        out.core.bitand(&rhs.core);
        out
    }

    pub fn or(&self, rhs: &Self) -> Self {
        let mut out = self.clone();
        out.core.bitor(&rhs.core);
        out
    }

    pub fn xor(&self, rhs: &Self) -> Self {
        let mut out = self.clone();
        out.core.bitxor(&rhs.core);
        out
    }

    /// Complements every digit of the stored vector.
    pub fn complement(&self) -> Self {
        let mut out = self.clone();
        out.core.bitnot();
        out
    }

    // ------------------------------------------------------------------
    // Number theory
    // ------------------------------------------------------------------

    /// `self^exp` by binary exponentiation. `x^0 == 1`, including `0^0`.
    pub fn pow(&self, exp: u64) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                result.core.multiply(&base.core);
            }
            e >>= 1;
            if e > 0 {
                let square = base.clone();
                base.core.multiply(&square.core);
            }
        }
        result
    }

    /// Euclid's algorithm. `gcd(a, 0) == a`.
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.clone();
        while !b.is_zero() {
            let (_, r) = a
                .div_rem(&b)
                .unwrap_or_else(|_| unreachable!("loop guard keeps the divisor nonzero"));
            a = b;
            b = r;
        }
        a
    }

    /// `lcm(0, x) == 0`.
    pub fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let g = self.gcd(other);
        let (reduced, _) = self
            .div_rem(&g)
            .unwrap_or_else(|_| unreachable!("gcd of nonzero values is nonzero"));
        let mut out = reduced;
        out.core.multiply(&other.core);
        out
    }

    /// Integer square root: the largest `s` with `s*s <= self`, found by
    /// bisection over the bit length.
    pub fn isqrt(&self) -> Self {
        if self.bit_len() <= 1 {
            return self.clone();
        }
        let mut lo = Self::one();
        let mut hi = Self::one();
        hi.core.shift_left((self.bit_len() / 2 + 1) as u32);
        while lo.cmp(&hi) == Ordering::Less {
            // mid = (lo + hi + 1) / 2
            let mut mid = lo.clone();
            mid.core.add(&hi.core);
            mid.core.add(&Self::one().core);
            mid.core.shift_right(1);
            let mut square = mid.clone();
            square.core.multiply(&mid.core);
            if square.cmp(self) != Ordering::Greater {
                lo = mid;
            } else {
                mid.core.sub_unchecked(&Self::one().core);
                hi = mid;
            }
        }
        lo
    }

    /// `self^exp mod modulus` by square-and-multiply over the exponent's
    /// bits, most significant first.
    ///
    /// # Errors
    /// `DivisionByZero` when `modulus` is zero.
    pub fn mod_pow(&self, exp: &Self, modulus: &Self) -> NumericResult<Self> {
        if modulus.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        if modulus.is_one() {
            return Ok(Self::zero());
        }
        let mut result = Self::one();
        let base = self.checked_rem(modulus)?;
        for k in (0..exp.bit_len()).rev() {
            let square = result.clone();
            result.core.multiply(&square.core);
            result = result.checked_rem(modulus)?;
            if exp.bit(k) {
                result.core.multiply(&base.core);
                result = result.checked_rem(modulus)?;
            }
        }
        Ok(result)
    }

    // ------------------------------------------------------------------
    // Base-N text
    // ------------------------------------------------------------------

    /// Renders the value in `base` using `alphabet`. Canonical output:
    /// no leading zero characters except for zero itself.
    pub fn format(&self, base: u32, alphabet: &str) -> String {
        Digit::assert_base(base, alphabet);
        if self.is_zero() {
            return Digit::ZERO.to_char(base, alphabet).to_string();
        }
        let base_core = NumberCore::from_word(base as u64);
        let mut rest = self.core.clone();
        let mut out = Vec::new();
        while !rest.is_zero() {
            let (q, r) = rest
                .div_rem(&base_core)
                .unwrap_or_else(|_| unreachable!("base is validated above one"));
            out.push(r.digits().get(0).to_char(base, alphabet));
            rest = q;
        }
        out.iter().rev().collect()
    }

    /// Parses a numeral in `base` using `alphabet` by repeated
    /// multiply-add.
    ///
    /// # Errors
    /// `InvalidInput` on an empty string or a character outside the
    /// base's slice of the alphabet.
    pub fn parse(text: &str, base: u32, alphabet: &str) -> NumericResult<Self> {
        Digit::assert_base(base, alphabet);
        if text.is_empty() {
            return Err(NumericError::InvalidInput);
        }
        let base_core = NumberCore::from_word(base as u64);
        let mut value = NumberCore::default();
        for c in text.chars() {
            let d = Digit::from_char(c, base, alphabet)?;
            value.multiply(&base_core);
            value.add(&NumberCore::from_word(d.value()));
        }
        Ok(Self::from_core(value))
    }
}

impl From<u64> for Cardinal {
    fn from(value: u64) -> Self {
        Self::from_core(NumberCore::from_word(value))
    }
}

impl From<u32> for Cardinal {
    fn from(value: u32) -> Self {
        Self::from(value as u64)
    }
}

impl PartialOrd for Cardinal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cardinal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.core.compare(&other.core)
    }
}

impl fmt::Display for Cardinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(10, DEFAULT_ALPHABET))
    }
}

impl FromStr for Cardinal {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, 10, DEFAULT_ALPHABET)
    }
}

// Panicking operator surface over the checked methods.

impl Add for Cardinal {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.checked_add(&rhs)
            .expect("cardinal addition failed; use checked_add in production")
    }
}

impl Sub for Cardinal {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.checked_sub(&rhs)
            .expect("cardinal subtraction underflow; use checked_sub in production")
    }
}

impl Mul for Cardinal {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.checked_mul(&rhs)
            .expect("cardinal multiplication failed; use checked_mul in production")
    }
}

impl Div for Cardinal {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        self.checked_div(&rhs)
            .expect("cardinal division by zero; use checked_div in production")
    }
}

impl Rem for Cardinal {
    type Output = Self;
    fn rem(self, rhs: Self) -> Self {
        self.checked_rem(&rhs)
            .expect("cardinal remainder by zero; use checked_rem in production")
    }
}

impl Shl<u32> for Cardinal {
    type Output = Self;
    fn shl(self, bits: u32) -> Self {
        self.checked_shl(bits)
            .expect("cardinal shift overflow; use checked_shl in production")
    }
}

impl Shr<u32> for Cardinal {
    type Output = Self;
    fn shr(self, bits: u32) -> Self {
        Cardinal::shr(&self, bits)
    }
}

impl BitAnd for Cardinal {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        self.and(&rhs)
    }
}

impl BitOr for Cardinal {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        self.or(&rhs)
    }
}

impl BitXor for Cardinal {
    type Output = Self;
    fn bitxor(self, rhs: Self) -> Self {
        self.xor(&rhs)
    }
}

impl Not for Cardinal {
    type Output = Self;
    fn not(self) -> Self {
        self.complement()
    }
}

impl AddAssign for Cardinal {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.clone() + rhs;
    }
}

impl SubAssign for Cardinal {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.clone() - rhs;
    }
}

impl MulAssign for Cardinal {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.clone() * rhs;
    }
}

impl DivAssign for Cardinal {
    fn div_assign(&mut self, rhs: Self) {
        *self = self.clone() / rhs;
    }
}

impl RemAssign for Cardinal {
    fn rem_assign(&mut self, rhs: Self) {
        *self = self.clone() % rhs;
    }
}

impl ShlAssign<u32> for Cardinal {
    fn shl_assign(&mut self, bits: u32) {
        *self = self.clone() << bits;
    }
}

impl ShrAssign<u32> for Cardinal {
    fn shr_assign(&mut self, bits: u32) {
        *self = Cardinal::shr(self, bits);
    }
}

impl BitAndAssign for Cardinal {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = self.and(&rhs);
    }
}

impl BitOrAssign for Cardinal {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.or(&rhs);
    }
}

impl BitXorAssign for Cardinal {
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = self.xor(&rhs);
    }
}
