// ============================================================================
// Number
// Tagged union over Cardinal / Integer / Decimal with promotion
// ============================================================================

use super::cardinal::Cardinal;
use super::decimal::Decimal;
use super::integer::Integer;
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

/// One arbitrary-precision value of any of the three kinds.
///
/// Binary operations promote to the least specific kind that can hold
/// the result: Decimal beats Integer beats Cardinal, with one special
/// case — subtracting a larger Cardinal from a smaller one promotes
/// both sides to Integer instead of underflowing.
///
/// Bitwise and shift operations are defined for the Cardinal/Integer
/// kinds only; calling them on a Decimal is a precondition violation
/// and panics.
#[derive(Clone, Debug)]
pub enum Number {
    Cardinal(Cardinal),
    Integer(Integer),
    Decimal(Decimal),
}

impl Number {
    pub fn zero() -> Self {
        Self::Cardinal(Cardinal::zero())
    }

    pub fn one() -> Self {
        Self::Cardinal(Cardinal::one())
    }

    /// The active kind, for logs and error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Cardinal(_) => "Cardinal",
            Self::Integer(_) => "Integer",
            Self::Decimal(_) => "Decimal",
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Self::Cardinal(c) => c.is_zero(),
            Self::Integer(i) => i.is_zero(),
            Self::Decimal(d) => d.is_zero(),
        }
    }

    pub fn is_one(&self) -> bool {
        match self {
            Self::Cardinal(c) => c.is_one(),
            Self::Integer(i) => i.is_one(),
            Self::Decimal(d) => d.is_one(),
        }
    }

    pub fn is_negative(&self) -> bool {
        self.signum() < 0
    }

    pub fn signum(&self) -> i8 {
        match self {
            Self::Cardinal(c) => u8::from(!c.is_zero()) as i8,
            Self::Integer(i) => i.signum(),
            Self::Decimal(d) => d.signum(),
        }
    }

    /// Bit length of the underlying magnitude.
    pub fn bit_len(&self) -> u64 {
        match self {
            Self::Cardinal(c) => c.bit_len(),
            Self::Integer(i) => i.bit_len(),
            Self::Decimal(d) => d.value().bit_len(),
        }
    }

    /// Swaps the arithmetic backend for the contained value.
    pub fn set_backend(&mut self, kind: BackendKind) {
        match self {
            Self::Cardinal(c) => c.set_backend(kind),
            Self::Integer(i) => i.set_backend(kind),
            Self::Decimal(d) => d.set_backend(kind),
        }
    }

    // ------------------------------------------------------------------
    // Conversions between kinds
    // ------------------------------------------------------------------

    /// The value as an unsigned magnitude; a Decimal is truncated toward
    /// zero first.
    ///
    /// # Errors
    /// `InvalidConversion` when the value is negative.
    pub fn as_cardinal(&self) -> NumericResult<Cardinal> {
        match self {
            Self::Cardinal(c) => Ok(c.clone()),
            Self::Integer(i) if !i.is_negative() => Ok(i.magnitude().clone()),
            Self::Decimal(d) if !d.is_negative() => {
                Ok(d.truncate(0).value().magnitude().clone())
            }
            _ => Err(NumericError::InvalidConversion),
        }
    }

    /// Always succeeds; a Decimal is truncated toward zero.
    pub fn as_integer(&self) -> Integer {
        match self {
            Self::Cardinal(c) => Integer::from(c.clone()),
            Self::Integer(i) => i.clone(),
            Self::Decimal(d) => d.truncate(0).value().clone(),
        }
    }

    /// Always succeeds; Cardinal and Integer embed losslessly.
    pub fn as_decimal(&self) -> Decimal {
        match self {
            Self::Cardinal(c) => Decimal::from(c.clone()),
            Self::Integer(i) => Decimal::from(i.clone()),
            Self::Decimal(d) => d.clone(),
        }
    }

    pub fn to_u64(&self) -> Option<u64> {
        self.as_cardinal().ok()?.to_u64()
    }

    fn any_decimal(&self, rhs: &Self) -> bool {
        matches!(self, Self::Decimal(_)) || matches!(rhs, Self::Decimal(_))
    }

    fn any_integer(&self, rhs: &Self) -> bool {
        matches!(self, Self::Integer(_)) || matches!(rhs, Self::Integer(_))
    }

    // ------------------------------------------------------------------
    // Promoted arithmetic
    // ------------------------------------------------------------------

    pub fn checked_add(&self, rhs: &Self) -> NumericResult<Self> {
        if self.any_decimal(rhs) {
            Ok(Self::Decimal(self.as_decimal().checked_add(&rhs.as_decimal())?))
        } else if self.any_integer(rhs) {
            Ok(Self::Integer(self.as_integer().checked_add(&rhs.as_integer())?))
        } else {
            Ok(Self::Cardinal(self.as_cardinal()?.checked_add(&rhs.as_cardinal()?)?))
        }
    }

    /// Cardinal − Cardinal with a negative result promotes both sides to
    /// Integer instead of underflowing.
    pub fn checked_sub(&self, rhs: &Self) -> NumericResult<Self> {
        if self.any_decimal(rhs) {
            return Ok(Self::Decimal(self.as_decimal().checked_sub(&rhs.as_decimal())?));
        }
        if self.any_integer(rhs) {
            return Ok(Self::Integer(self.as_integer().checked_sub(&rhs.as_integer())?));
        }
        let (a, b) = (self.as_cardinal()?, rhs.as_cardinal()?);
        if a >= b {
            Ok(Self::Cardinal(a.checked_sub(&b)?))
        } else {
            Ok(Self::Integer(
                Integer::from(a).checked_sub(&Integer::from(b))?,
            ))
        }
    }

    pub fn checked_mul(&self, rhs: &Self) -> NumericResult<Self> {
        if self.any_decimal(rhs) {
            Ok(Self::Decimal(self.as_decimal().checked_mul(&rhs.as_decimal())?))
        } else if self.any_integer(rhs) {
            Ok(Self::Integer(self.as_integer().checked_mul(&rhs.as_integer())?))
        } else {
            Ok(Self::Cardinal(self.as_cardinal()?.checked_mul(&rhs.as_cardinal()?)?))
        }
    }

    pub fn checked_div(&self, rhs: &Self) -> NumericResult<Self> {
        if self.any_decimal(rhs) {
            Ok(Self::Decimal(self.as_decimal().checked_div(&rhs.as_decimal())?))
        } else if self.any_integer(rhs) {
            Ok(Self::Integer(self.as_integer().checked_div(&rhs.as_integer())?))
        } else {
            Ok(Self::Cardinal(self.as_cardinal()?.checked_div(&rhs.as_cardinal()?)?))
        }
    }

    /// Remainder is an integral notion; Decimal operands are truncated
    /// to Integer first.
    pub fn checked_rem(&self, rhs: &Self) -> NumericResult<Self> {
        if self.any_decimal(rhs) || self.any_integer(rhs) {
            Ok(Self::Integer(self.as_integer().checked_rem(&rhs.as_integer())?))
        } else {
            Ok(Self::Cardinal(self.as_cardinal()?.checked_rem(&rhs.as_cardinal()?)?))
        }
    }

    pub fn increment(&self) -> NumericResult<Self> {
        self.checked_add(&Self::one())
    }

    /// Decrementing Cardinal zero promotes to `Integer(-1)`.
    pub fn decrement(&self) -> NumericResult<Self> {
        self.checked_sub(&Self::one())
    }

    pub fn negate(&self) -> Self {
        match self {
            Self::Cardinal(c) if c.is_zero() => self.clone(),
            Self::Cardinal(c) => Self::Integer(Integer::from(c.clone()).negate()),
            Self::Integer(i) => Self::Integer(i.negate()),
            Self::Decimal(d) => Self::Decimal(d.negate()),
        }
    }

    pub fn abs(&self) -> Self {
        match self {
            Self::Cardinal(_) => self.clone(),
            Self::Integer(i) => Self::Integer(i.abs()),
            Self::Decimal(d) => Self::Decimal(d.abs()),
        }
    }

    // ------------------------------------------------------------------
    // Bitwise and shifts ({Cardinal, Integer} only)
    // ------------------------------------------------------------------

    fn integral_pair(&self, rhs: &Self, op: &str) -> (Integer, Integer) {
        if self.any_decimal(rhs) {
            panic!("{} is not defined on decimal values; convert to integer first", op);
        }
        (self.as_integer(), rhs.as_integer())
    }

    fn integral_self(&self, op: &str) -> &Self {
        if matches!(self, Self::Decimal(_)) {
            panic!("{} is not defined on decimal values; convert to integer first", op);
        }
        self
    }

    pub fn checked_shl(&self, bits: u32) -> NumericResult<Self> {
        match self.integral_self("shift") {
            Self::Cardinal(c) => Ok(Self::Cardinal(c.checked_shl(bits)?)),
            Self::Integer(i) => Ok(Self::Integer(i.checked_shl(bits)?)),
            Self::Decimal(_) => unreachable!(),
        }
    }

    pub fn shr(&self, bits: u32) -> Self {
        match self.integral_self("shift") {
            Self::Cardinal(c) => Self::Cardinal(Cardinal::shr(c, bits)),
            Self::Integer(i) => Self::Integer(Integer::shr(i, bits)),
            Self::Decimal(_) => unreachable!(),
        }
    }

    pub fn and(&self, rhs: &Self) -> Self {
        if let (Self::Cardinal(a), Self::Cardinal(b)) = (self, rhs) {
            return Self::Cardinal(a.and(b));
        }
        let (a, b) = self.integral_pair(rhs, "bitwise and");
        Self::Integer(a.and(&b))
    }

    pub fn or(&self, rhs: &Self) -> Self {
        if let (Self::Cardinal(a), Self::Cardinal(b)) = (self, rhs) {
            return Self::Cardinal(a.or(b));
        }
        let (a, b) = self.integral_pair(rhs, "bitwise or");
        Self::Integer(a.or(&b))
    }

    pub fn xor(&self, rhs: &Self) -> Self {
        if let (Self::Cardinal(a), Self::Cardinal(b)) = (self, rhs) {
            return Self::Cardinal(a.xor(b));
        }
        let (a, b) = self.integral_pair(rhs, "bitwise xor");
        Self::Integer(a.xor(&b))
    }

    pub fn complement(&self) -> Self {
        match self.integral_self("bitwise not") {
            Self::Cardinal(c) => Self::Cardinal(c.complement()),
            Self::Integer(i) => Self::Integer(i.complement()),
            Self::Decimal(_) => unreachable!(),
        }
    }

    // ------------------------------------------------------------------
    // Number theory (promoted like arithmetic; Decimal truncates)
    // ------------------------------------------------------------------

    /// Raises the value to a non-negative integer power.
    ///
    /// # Errors
    /// `Overflow` when a Decimal result's scale would not fit in `u32`.
    pub fn pow(&self, exp: u64) -> NumericResult<Self> {
        match self {
            Self::Cardinal(c) => Ok(Self::Cardinal(c.pow(exp))),
            Self::Integer(i) => Ok(Self::Integer(i.pow(exp))),
            Self::Decimal(d) => {
                let places = u32::try_from(u128::from(d.places()) * u128::from(exp))
                    .map_err(|_| NumericError::Overflow)?;
                Ok(Self::Decimal(Decimal::from_parts(d.value().pow(exp), places)))
            }
        }
    }

    pub fn gcd(&self, rhs: &Self) -> Self {
        if self.any_decimal(rhs) || self.any_integer(rhs) {
            Self::Integer(self.as_integer().gcd(&rhs.as_integer()))
        } else {
            match (self, rhs) {
                (Self::Cardinal(a), Self::Cardinal(b)) => Self::Cardinal(a.gcd(b)),
                _ => unreachable!(),
            }
        }
    }

    pub fn lcm(&self, rhs: &Self) -> Self {
        if self.any_decimal(rhs) || self.any_integer(rhs) {
            Self::Integer(self.as_integer().lcm(&rhs.as_integer()))
        } else {
            match (self, rhs) {
                (Self::Cardinal(a), Self::Cardinal(b)) => Self::Cardinal(a.lcm(b)),
                _ => unreachable!(),
            }
        }
    }

    /// Integer square root of a non-negative value.
    ///
    /// # Errors
    /// `InvalidConversion` when the value is negative.
    pub fn isqrt(&self) -> NumericResult<Self> {
        Ok(Self::Cardinal(self.as_cardinal()?.isqrt()))
    }

    /// `|self|^|exp| mod |modulus|` over the magnitudes.
    ///
    /// # Errors
    /// `DivisionByZero` when the modulus is zero; `InvalidConversion`
    /// when any operand is negative.
    pub fn mod_pow(&self, exp: &Self, modulus: &Self) -> NumericResult<Self> {
        let base = self.as_cardinal()?;
        Ok(Self::Cardinal(base.mod_pow(
            &exp.as_cardinal()?,
            &modulus.as_cardinal()?,
        )?))
    }

    // ------------------------------------------------------------------
    // Text
    // ------------------------------------------------------------------

    /// Parses a numeral: text containing `.` becomes Decimal (base 10
    /// only), a leading `-` becomes Integer, anything else Cardinal.
    ///
    /// # Errors
    /// `InvalidInput` on malformed text or a `.` outside base 10.
    pub fn parse(text: &str, base: u32, alphabet: &str) -> NumericResult<Self> {
        if text.contains('.') {
            if base != 10 {
                return Err(NumericError::InvalidInput);
            }
            return Ok(Self::Decimal(Decimal::parse(text)?));
        }
        if text.starts_with('-') {
            return Ok(Self::Integer(Integer::parse(text, base, alphabet)?));
        }
        Ok(Self::Cardinal(Cardinal::parse(text, base, alphabet)?))
    }

    /// Canonical rendering: no leading zeros; Decimal display always
    /// strips trailing fractional zeros. Decimal values render in base
    /// 10 only (precondition).
    pub fn format(&self, base: u32, alphabet: &str) -> String {
        match self {
            Self::Cardinal(c) => c.format(base, alphabet),
            Self::Integer(i) => i.format(base, alphabet),
            Self::Decimal(d) => {
                assert!(base == 10, "decimal formatting is defined for base 10 only");
                d.format(None)
            }
        }
    }
}

impl Default for Number {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Cardinal> for Number {
    fn from(value: Cardinal) -> Self {
        Self::Cardinal(value)
    }
}

impl From<Integer> for Number {
    fn from(value: Integer) -> Self {
        Self::Integer(value)
    }
}

impl From<Decimal> for Number {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Self::Cardinal(Cardinal::from(value))
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Self::from(value as u64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        if value < 0 {
            Self::Integer(Integer::from(value))
        } else {
            Self::Cardinal(Cardinal::from(value as u64))
        }
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::from(value as i64)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    /// Value comparison across kinds, promoting the same way the
    /// arithmetic does.
    fn cmp(&self, other: &Self) -> Ordering {
        if self.any_decimal(other) {
            self.as_decimal().cmp(&other.as_decimal())
        } else if self.any_integer(other) {
            self.as_integer().cmp(&other.as_integer())
        } else {
            match (self, other) {
                (Self::Cardinal(a), Self::Cardinal(b)) => a.cmp(b),
                _ => unreachable!(),
            }
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(10, DEFAULT_ALPHABET))
    }
}

impl FromStr for Number {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, 10, DEFAULT_ALPHABET)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Number {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Number {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

impl Neg for Number {
    type Output = Self;
    fn neg(self) -> Self {
        self.negate()
    }
}

impl Add for Number {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.checked_add(&rhs)
            .expect("number addition failed; use checked_add in production")
    }
}

impl Sub for Number {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.checked_sub(&rhs)
            .expect("number subtraction failed; use checked_sub in production")
    }
}

impl Mul for Number {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.checked_mul(&rhs)
            .expect("number multiplication failed; use checked_mul in production")
    }
}

impl Div for Number {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        self.checked_div(&rhs)
            .expect("number division by zero; use checked_div in production")
    }
}

impl Rem for Number {
    type Output = Self;
    fn rem(self, rhs: Self) -> Self {
        self.checked_rem(&rhs)
            .expect("number remainder by zero; use checked_rem in production")
    }
}

impl Shl<u32> for Number {
    type Output = Self;
    fn shl(self, bits: u32) -> Self {
        self.checked_shl(bits)
            .expect("number shift overflow; use checked_shl in production")
    }
}

impl Shr<u32> for Number {
    type Output = Self;
    fn shr(self, bits: u32) -> Self {
        Number::shr(&self, bits)
    }
}

impl BitAnd for Number {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        self.and(&rhs)
    }
}

impl BitOr for Number {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        self.or(&rhs)
    }
}

impl BitXor for Number {
    type Output = Self;
    fn bitxor(self, rhs: Self) -> Self {
        self.xor(&rhs)
    }
}

impl Not for Number {
    type Output = Self;
    fn not(self) -> Self {
        self.complement()
    }
}

impl AddAssign for Number {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.clone() + rhs;
    }
}

impl SubAssign for Number {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.clone() - rhs;
    }
}

impl MulAssign for Number {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.clone() * rhs;
    }
}

impl DivAssign for Number {
    fn div_assign(&mut self, rhs: Self) {
        *self = self.clone() / rhs;
    }
}

impl RemAssign for Number {
    fn rem_assign(&mut self, rhs: Self) {
        *self = self.clone() % rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(text: &str) -> Number {
        text.parse().unwrap()
    }

    #[test]
    fn test_parse_dispatch() {
        assert_eq!(num("42").kind_name(), "Cardinal");
        assert_eq!(num("-42").kind_name(), "Integer");
        assert_eq!(num("4.2").kind_name(), "Decimal");
        assert_eq!(num("-4.2").kind_name(), "Decimal");
        assert_eq!(num(".5").kind_name(), "Decimal");
    }

    #[test]
    fn test_decimal_point_requires_base_ten() {
        assert_eq!(
            Number::parse("1.5", 16, DEFAULT_ALPHABET),
            Err(NumericError::InvalidInput)
        );
    }

    #[test]
    fn test_promotion_table() {
        assert_eq!((num("2") + num("3")).kind_name(), "Cardinal");
        assert_eq!((num("2") + num("-3")).kind_name(), "Integer");
        assert_eq!((num("2") + num("0.5")).kind_name(), "Decimal");
        assert_eq!((num("-2") * num("0.5")).kind_name(), "Decimal");
    }

    #[test]
    fn test_cardinal_subtraction_promotes_on_negative() {
        let d = num("5") - num("10");
        assert_eq!(d.kind_name(), "Integer");
        assert_eq!(d, num("-5"));
        // non-negative difference stays cardinal
        assert_eq!((num("10") - num("5")).kind_name(), "Cardinal");
    }

    #[test]
    fn test_scenario_large_difference() {
        let d = num("1000000000000000000") - num("999999999999999999");
        assert_eq!(d, Number::one());
    }

    #[test]
    fn test_as_cardinal_rejects_negative() {
        assert_eq!(num("-5").as_cardinal(), Err(NumericError::InvalidConversion));
        assert_eq!(num("-0.5").as_cardinal(), Err(NumericError::InvalidConversion));
        assert_eq!(num("5.9").as_cardinal().unwrap(), Cardinal::from(5u64));
    }

    #[test]
    fn test_increment_decrement() {
        assert_eq!(num("41").increment().unwrap(), num("42"));
        let below = Number::zero().decrement().unwrap();
        assert_eq!(below.kind_name(), "Integer");
        assert_eq!(below, num("-1"));
        assert_eq!(num("0.5").increment().unwrap(), num("1.5"));
    }

    #[test]
    fn test_cross_kind_equality() {
        assert_eq!(num("5"), num("5.0"));
        assert_eq!(num("-3"), Number::from(-3i64));
        assert!(num("-3") < num("2.5"));
        assert!(num("7") > num("6.999"));
    }

    #[test]
    fn test_rem_truncates_decimal() {
        let r = num("7.9") % num("3");
        assert_eq!(r, num("1"));
        assert_eq!(r.kind_name(), "Integer");
    }

    #[test]
    #[should_panic(expected = "not defined on decimal")]
    fn test_bitwise_on_decimal_panics() {
        let _ = num("1.5") & num("3");
    }

    #[test]
    #[should_panic(expected = "not defined on decimal")]
    fn test_shift_on_decimal_panics() {
        let _ = num("1.5") << 1;
    }

    #[test]
    fn test_bitwise_promotion() {
        assert_eq!((num("12") & num("10")).kind_name(), "Cardinal");
        assert_eq!(num("12") & num("10"), num("8"));
        assert_eq!((num("12") | num("-10")).kind_name(), "Integer");
    }

    #[test]
    fn test_number_theory_helpers() {
        assert_eq!(num("48").gcd(&num("36")), num("12"));
        assert_eq!(num("-48").gcd(&num("36")), num("12"));
        assert_eq!(num("4").lcm(&num("6")), num("12"));
        assert_eq!(num("144").isqrt().unwrap(), num("12"));
        assert_eq!(num("-1").isqrt(), Err(NumericError::InvalidConversion));
        assert_eq!(
            num("3").mod_pow(&num("4"), &num("5")).unwrap(),
            num("1")
        );
        assert_eq!(num("2").pow(10).unwrap(), num("1024"));
        assert_eq!(num("0.5").pow(2).unwrap(), num("0.25"));
        assert_eq!(num("-2").pow(3).unwrap(), num("-8"));
        // Decimal scale grows with the exponent and must stay within u32
        assert_eq!(num("0.5").pow(u64::from(u32::MAX) + 1), Err(NumericError::Overflow));
    }

    #[test]
    fn test_format_in_base() {
        assert_eq!(num("255").format(16, DEFAULT_ALPHABET), "ff");
        assert_eq!(num("-255").format(16, DEFAULT_ALPHABET), "-ff");
        assert_eq!(num("1.50").format(10, DEFAULT_ALPHABET), "1.5");
    }

    #[test]
    fn test_negate_zero_stays_cardinal() {
        let z = Number::zero().negate();
        assert_eq!(z.kind_name(), "Cardinal");
        assert!(z.is_zero());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let v = num("-123.45");
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "\"-123.45\"");
        let back: Number = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
