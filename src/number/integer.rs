// ============================================================================
// Integer
// Sign-magnitude composition over Cardinal
// ============================================================================

use super::cardinal::Cardinal;
use crate::backend::BackendKind;
use crate::digit::DEFAULT_ALPHABET;
use crate::numeric::{NumericError, NumericResult};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{
    Add, AddAssign, BitAnd, BitOr, BitXor, Div, DivAssign, Mul, MulAssign, Neg, Not, Rem,
    RemAssign, Shl, Shr, Sub, SubAssign,
};
use std::str::FromStr;

/// Sign flag of an [`Integer`]. Zero always carries `Plus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sign {
    #[default]
    Plus,
    Minus,
}

impl Sign {
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Self::Plus => Self::Minus,
            Self::Minus => Self::Plus,
        }
    }

    /// `Plus` iff both signs match; multiplication and division sign rule.
    #[inline]
    pub fn xor(self, other: Self) -> Self {
        if self == other {
            Self::Plus
        } else {
            Self::Minus
        }
    }
}

/// Signed arbitrary-precision integer.
///
/// A sign flag over a [`Cardinal`] magnitude. Addition and subtraction
/// dispatch on sign equality; multiplication and division XOR the signs.
/// Bitwise and shift operations act on the magnitude and leave the sign
/// untouched.
#[derive(Clone, PartialEq, Eq, Hash, Default, Debug)]
pub struct Integer {
    sign: Sign,
    magnitude: Cardinal,
}

impl Integer {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn one() -> Self {
        Self::from(1i64)
    }

    /// Builds from parts, canonicalizing a zero magnitude to `Plus`.
    pub fn from_parts(sign: Sign, magnitude: Cardinal) -> Self {
        let sign = if magnitude.is_zero() { Sign::Plus } else { sign };
        Self { sign, magnitude }
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    #[inline]
    pub fn magnitude(&self) -> &Cardinal {
        &self.magnitude
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.sign == Sign::Plus && self.magnitude.is_one()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Minus
    }

    #[inline]
    pub fn bit_len(&self) -> u64 {
        self.magnitude.bit_len()
    }

    pub fn set_backend(&mut self, kind: BackendKind) {
        self.magnitude.set_backend(kind);
    }

    /// -1, 0 or +1.
    pub fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.sign == Sign::Minus {
            -1
        } else {
            1
        }
    }

    pub fn abs(&self) -> Self {
        Self::from_parts(Sign::Plus, self.magnitude.clone())
    }

    pub fn negate(&self) -> Self {
        Self::from_parts(self.sign.flip(), self.magnitude.clone())
    }

    pub fn to_i64(&self) -> Option<i64> {
        let word = self.magnitude.to_u64()?;
        match self.sign {
            Sign::Plus if word <= i64::MAX as u64 => Some(word as i64),
            Sign::Minus if word <= i64::MAX as u64 + 1 => Some((word as i64).wrapping_neg()),
            _ => None,
        }
    }

    pub fn checked_add(&self, rhs: &Self) -> NumericResult<Self> {
        if self.sign == rhs.sign {
            let magnitude = self.magnitude.checked_add(&rhs.magnitude)?;
            return Ok(Self::from_parts(self.sign, magnitude));
        }
        // mixed signs: smaller magnitude off the larger, sign of the larger
        match self.magnitude.cmp(&rhs.magnitude) {
            Ordering::Equal => Ok(Self::zero()),
            Ordering::Greater => {
                let magnitude = self.magnitude.checked_sub(&rhs.magnitude)?;
                Ok(Self::from_parts(self.sign, magnitude))
            }
            Ordering::Less => {
                let magnitude = rhs.magnitude.checked_sub(&self.magnitude)?;
                Ok(Self::from_parts(rhs.sign, magnitude))
            }
        }
    }

    pub fn checked_sub(&self, rhs: &Self) -> NumericResult<Self> {
        self.checked_add(&rhs.negate())
    }

    pub fn checked_mul(&self, rhs: &Self) -> NumericResult<Self> {
        let magnitude = self.magnitude.checked_mul(&rhs.magnitude)?;
        Ok(Self::from_parts(self.sign.xor(rhs.sign), magnitude))
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

    /// Truncated division: quotient sign is the XOR of the operand signs,
    /// remainder sign follows the dividend.
    ///
    /// # Errors
    /// `DivisionByZero` when `rhs` is zero.
    pub fn div_rem(&self, rhs: &Self) -> NumericResult<(Self, Self)> {
        let (q, r) = self.magnitude.div_rem(&rhs.magnitude)?;
        Ok((
            Self::from_parts(self.sign.xor(rhs.sign), q),
            Self::from_parts(self.sign, r),
        ))
    }

    /// `self^exp`; negative base with an odd exponent stays negative.
    pub fn pow(&self, exp: u64) -> Self {
        let sign = if self.sign == Sign::Minus && exp % 2 == 1 {
            Sign::Minus
        } else {
            Sign::Plus
        };
        Self::from_parts(sign, self.magnitude.pow(exp))
    }

    /// Greatest common divisor of the absolute values; always
    /// non-negative.
    pub fn gcd(&self, other: &Self) -> Self {
        Self::from_parts(Sign::Plus, self.magnitude.gcd(&other.magnitude))
    }

    pub fn lcm(&self, other: &Self) -> Self {
        Self::from_parts(Sign::Plus, self.magnitude.lcm(&other.magnitude))
    }

    /// `|self|^exp mod modulus` on the magnitudes.
    ///
    /// # Errors
    /// `DivisionByZero` when `modulus` is zero.
    pub fn mod_pow(&self, exp: &Self, modulus: &Self) -> NumericResult<Self> {
        let magnitude = self
            .magnitude
            .mod_pow(&exp.magnitude, &modulus.magnitude)?;
        Ok(Self::from_parts(Sign::Plus, magnitude))
    }

    pub fn checked_shl(&self, bits: u32) -> NumericResult<Self> {
        Ok(Self::from_parts(self.sign, self.magnitude.checked_shl(bits)?))
    }

    pub fn shr(&self, bits: u32) -> Self {
        Self::from_parts(self.sign, Cardinal::shr(&self.magnitude, bits))
    }

    pub fn and(&self, rhs: &Self) -> Self {
        Self::from_parts(self.sign, self.magnitude.and(&rhs.magnitude))
    }

    pub fn or(&self, rhs: &Self) -> Self {
        Self::from_parts(self.sign, self.magnitude.or(&rhs.magnitude))
    }

    pub fn xor(&self, rhs: &Self) -> Self {
        Self::from_parts(self.sign, self.magnitude.xor(&rhs.magnitude))
    }

    pub fn complement(&self) -> Self {
        Self::from_parts(self.sign, self.magnitude.complement())
    }

    /// Renders in `base`, prefixing `-` for negatives.
    pub fn format(&self, base: u32, alphabet: &str) -> String {
        let digits = self.magnitude.format(base, alphabet);
        match self.sign {
            Sign::Minus => format!("-{}", digits),
            Sign::Plus => digits,
        }
    }

    /// Parses an optional leading `-` followed by a magnitude numeral.
    ///
    /// # Errors
    /// `InvalidInput` on empty or malformed text.
    pub fn parse(text: &str, base: u32, alphabet: &str) -> NumericResult<Self> {
        let (sign, rest) = match text.strip_prefix('-') {
            Some(rest) => (Sign::Minus, rest),
            None => (Sign::Plus, text),
        };
        let magnitude = Cardinal::parse(rest, base, alphabet)?;
        Ok(Self::from_parts(sign, magnitude))
    }
}

impl From<Cardinal> for Integer {
    fn from(magnitude: Cardinal) -> Self {
        Self::from_parts(Sign::Plus, magnitude)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        let sign = if value < 0 { Sign::Minus } else { Sign::Plus };
        Self::from_parts(sign, Cardinal::from(value.unsigned_abs()))
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Self::from_parts(Sign::Plus, Cardinal::from(value))
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self::from(value as i64)
    }
}

impl From<u32> for Integer {
    fn from(value: u32) -> Self {
        Self::from(value as u64)
    }
}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Plus, Sign::Minus) => Ordering::Greater,
            (Sign::Minus, Sign::Plus) => Ordering::Less,
            (Sign::Plus, Sign::Plus) => self.magnitude.cmp(&other.magnitude),
            // more negative magnitude compares smaller
            (Sign::Minus, Sign::Minus) => other.magnitude.cmp(&self.magnitude),
        }
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(10, DEFAULT_ALPHABET))
    }
}

impl FromStr for Integer {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, 10, DEFAULT_ALPHABET)
    }
}

impl Neg for Integer {
    type Output = Self;
    fn neg(self) -> Self {
        self.negate()
    }
}

impl Add for Integer {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.checked_add(&rhs)
            .expect("integer addition failed; use checked_add in production")
    }
}

impl Sub for Integer {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.checked_sub(&rhs)
            .expect("integer subtraction failed; use checked_sub in production")
    }
}

impl Mul for Integer {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.checked_mul(&rhs)
            .expect("integer multiplication failed; use checked_mul in production")
    }
}

impl Div for Integer {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        self.checked_div(&rhs)
            .expect("integer division by zero; use checked_div in production")
    }
}

impl Rem for Integer {
    type Output = Self;
    fn rem(self, rhs: Self) -> Self {
        self.checked_rem(&rhs)
            .expect("integer remainder by zero; use checked_rem in production")
    }
}

impl Shl<u32> for Integer {
    type Output = Self;
    fn shl(self, bits: u32) -> Self {
        self.checked_shl(bits)
            .expect("integer shift overflow; use checked_shl in production")
    }
}

impl Shr<u32> for Integer {
    type Output = Self;
    fn shr(self, bits: u32) -> Self {
        Integer::shr(&self, bits)
    }
}

impl BitAnd for Integer {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        self.and(&rhs)
    }
}

impl BitOr for Integer {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        self.or(&rhs)
    }
}

impl BitXor for Integer {
    type Output = Self;
    fn bitxor(self, rhs: Self) -> Self {
        self.xor(&rhs)
    }
}

impl Not for Integer {
    type Output = Self;
    fn not(self) -> Self {
        self.complement()
    }
}

impl AddAssign for Integer {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.clone() + rhs;
    }
}

impl SubAssign for Integer {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.clone() - rhs;
    }
}

impl MulAssign for Integer {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.clone() * rhs;
    }
}

impl DivAssign for Integer {
    fn div_assign(&mut self, rhs: Self) {
        *self = self.clone() / rhs;
    }
}

impl RemAssign for Integer {
    fn rem_assign(&mut self, rhs: Self) {
        *self = self.clone() % rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(text: &str) -> Integer {
        text.parse().unwrap()
    }

    #[test]
    fn test_zero_canonicalizes_to_plus() {
        let z = Integer::from_parts(Sign::Minus, Cardinal::zero());
        assert_eq!(z.sign(), Sign::Plus);
        assert_eq!(int("-0"), Integer::zero());
        assert_eq!(z.signum(), 0);
    }

    #[test]
    fn test_sign_dispatch_on_addition() {
        assert_eq!(int("7") + int("5"), int("12"));
        assert_eq!(int("-7") + int("-5"), int("-12"));
        assert_eq!(int("7") + int("-5"), int("2"));
        assert_eq!(int("-7") + int("5"), int("-2"));
        assert_eq!(int("5") + int("-5"), Integer::zero());
    }

    #[test]
    fn test_subtraction_crosses_zero() {
        assert_eq!(int("5") - int("10"), int("-5"));
        assert_eq!(int("-5") - int("-10"), int("5"));
        let huge = int("1000000000000000000") - int("999999999999999999");
        assert_eq!(huge, Integer::one());
    }

    #[test]
    fn test_multiplication_sign_rule() {
        assert_eq!(int("-3") * int("4"), int("-12"));
        assert_eq!(int("-3") * int("-4"), int("12"));
        assert_eq!(int("-3") * Integer::zero(), Integer::zero());
    }

    #[test]
    fn test_truncated_div_rem() {
        let (q, r) = int("7").div_rem(&int("-2")).unwrap();
        assert_eq!((q, r), (int("-3"), int("1")));
        let (q, r) = int("-7").div_rem(&int("2")).unwrap();
        assert_eq!((q, r), (int("-3"), int("-1")));
        let (q, r) = int("-7").div_rem(&int("-2")).unwrap();
        assert_eq!((q, r), (int("3"), int("-1")));
    }

    #[test]
    fn test_add_mul_commute_and_associate() {
        let (a, b, c) = (int("-7"), int("13"), int("-21"));
        assert_eq!(a.clone() + b.clone(), b.clone() + a.clone());
        assert_eq!(
            (a.clone() + b.clone()) + c.clone(),
            a.clone() + (b.clone() + c.clone())
        );
        assert_eq!(a.clone() * b.clone(), b.clone() * a.clone());
        assert_eq!((a.clone() * b.clone()) * c.clone(), a * (b * c));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            int("5").checked_div(&Integer::zero()),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_ordering() {
        assert!(int("-10") < int("3"));
        assert!(int("-10") < int("-3"));
        assert!(int("10") > int("3"));
        assert!(int("-3") > int("-10"));
    }

    #[test]
    fn test_abs_negate_signum() {
        assert_eq!(int("-9").abs(), int("9"));
        assert_eq!(int("9").negate(), int("-9"));
        assert_eq!(int("-9").signum(), -1);
        assert_eq!(int("9").signum(), 1);
    }

    #[test]
    fn test_pow_sign() {
        assert_eq!(int("-2").pow(3), int("-8"));
        assert_eq!(int("-2").pow(4), int("16"));
    }

    #[test]
    fn test_gcd_is_absolute() {
        assert_eq!(int("-48").gcd(&int("36")), int("12"));
        assert_eq!(int("-4").lcm(&int("-6")), int("12"));
    }

    #[test]
    fn test_bitwise_keeps_sign() {
        let v = int("-12").and(&int("10"));
        assert_eq!(v, int("-8"));
        assert_eq!(int("-1") << 3, int("-8"));
        assert_eq!(int("-8").shr(3), int("-1"));
    }

    #[test]
    fn test_to_i64_bounds() {
        assert_eq!(int("-9223372036854775808").to_i64(), Some(i64::MIN));
        assert_eq!(int("9223372036854775807").to_i64(), Some(i64::MAX));
        assert_eq!(int("9223372036854775808").to_i64(), None);
        assert_eq!(Integer::from(i64::MIN), int("-9223372036854775808"));
    }

    #[test]
    fn test_format_round_trip_base16() {
        let v = int("-255");
        assert_eq!(v.format(16, DEFAULT_ALPHABET), "-ff");
        assert_eq!(
            Integer::parse("-ff", 16, DEFAULT_ALPHABET).unwrap(),
            v
        );
    }
}
