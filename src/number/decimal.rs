// ============================================================================
// Decimal
// Fixed-point number: an Integer plus a base-10 scale
// ============================================================================

use super::cardinal::Cardinal;
use super::integer::{Integer, Sign};
use crate::backend::BackendKind;
use crate::numeric::{NumericError, NumericResult};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// Extra fractional digits carried through a division before the result
/// is normalized, so the quotient keeps precision past the target scale.
const GUARD_DIGITS: u32 = 10;

/// Fixed-point arbitrary-precision number with semantic value
/// `value / 10^places`.
///
/// The canonical form has no trailing zero digits in the fractional
/// window; [`Decimal::set_places`] is the one operation allowed to pin a
/// wider scale, so a caller can pad precision before further math.
/// Multiplication also keeps its exact denormalized scale on purpose.
#[derive(Clone, Debug, Default)]
pub struct Decimal {
    value: Integer,
    places: u32,
}

impl Decimal {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn one() -> Self {
        Self {
            value: Integer::one(),
            places: 0,
        }
    }

    /// Builds from parts and normalizes.
    pub fn from_parts(value: Integer, places: u32) -> Self {
        let mut d = Self { value, places };
        d.normalize();
        d
    }

    #[inline]
    pub fn value(&self) -> &Integer {
        &self.value
    }

    #[inline]
    pub fn places(&self) -> u32 {
        self.places
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.cmp_value(&Self::one()) == Ordering::Equal
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.value.is_negative()
    }

    pub fn signum(&self) -> i8 {
        self.value.signum()
    }

    pub fn abs(&self) -> Self {
        Self {
            value: self.value.abs(),
            places: self.places,
        }
    }

    pub fn negate(&self) -> Self {
        Self {
            value: self.value.negate(),
            places: self.places,
        }
    }

    pub fn set_backend(&mut self, kind: BackendKind) {
        self.value.set_backend(kind);
    }

    fn pow10(n: u32) -> Cardinal {
        Cardinal::from(10u64).pow(n as u64)
    }

    /// Scales `value` up by `10^delta`.
    fn scale_up(value: &Integer, delta: u32) -> NumericResult<Integer> {
        if delta == 0 {
            return Ok(value.clone());
        }
        value.checked_mul(&Integer::from(Self::pow10(delta)))
    }

    /// Both operands' integers at the larger of the two scales.
    fn align(&self, rhs: &Self) -> NumericResult<(Integer, Integer, u32)> {
        let places = self.places.max(rhs.places);
        let a = Self::scale_up(&self.value, places - self.places)?;
        let b = Self::scale_up(&rhs.value, places - rhs.places)?;
        Ok((a, b, places))
    }

    /// Strips trailing fractional zero digits; an all-zero value becomes
    /// scale 0.
    pub fn normalize(&mut self) {
        if self.value.is_zero() {
            self.places = 0;
            return;
        }
        let ten = Cardinal::from(10u64);
        while self.places > 0 {
            let (q, r) = self
                .value
                .magnitude()
                .div_rem(&ten)
                .unwrap_or_else(|_| unreachable!("ten is nonzero"));
            if !r.is_zero() {
                break;
            }
            self.value = Integer::from_parts(self.value.sign(), q);
            self.places -= 1;
        }
    }

    /// Pins the scale exactly, padding with zeros or truncating digits.
    /// This is the one path that may leave trailing fractional zeros.
    pub fn set_places(&mut self, places: u32) -> NumericResult<()> {
        if places >= self.places {
            self.value = Self::scale_up(&self.value, places - self.places)?;
        } else {
            let divisor = Self::pow10(self.places - places);
            let (q, _) = self.value.magnitude().div_rem(&divisor)?;
            self.value = Integer::from_parts(self.value.sign(), q);
        }
        self.places = places;
        Ok(())
    }

    /// Drops fractional digits below `places` with half-up rounding on
    /// the first removed digit, in the magnitude domain. No-op when
    /// `places >= self.places`.
    pub fn round(&self, places: u32) -> Self {
        if places >= self.places {
            return self.clone();
        }
        let divisor = Self::pow10(self.places - places);
        let (mut q, r) = self
            .value
            .magnitude()
            .div_rem(&divisor)
            .unwrap_or_else(|_| unreachable!("a power of ten is nonzero"));
        let doubled = r.checked_add(&r).unwrap_or_else(|_| unreachable!("addition is total"));
        if doubled >= divisor {
            q = q
                .checked_add(&Cardinal::one())
                .unwrap_or_else(|_| unreachable!("addition is total"));
        }
        Self::from_parts(Integer::from_parts(self.value.sign(), q), places)
    }

    /// Like [`Decimal::round`] but always toward zero.
    pub fn truncate(&self, places: u32) -> Self {
        if places >= self.places {
            return self.clone();
        }
        let divisor = Self::pow10(self.places - places);
        let (q, _) = self
            .value
            .magnitude()
            .div_rem(&divisor)
            .unwrap_or_else(|_| unreachable!("a power of ten is nonzero"));
        Self::from_parts(Integer::from_parts(self.value.sign(), q), places)
    }

    pub fn checked_add(&self, rhs: &Self) -> NumericResult<Self> {
        let (a, b, places) = self.align(rhs)?;
        Ok(Self::from_parts(a.checked_add(&b)?, places))
    }

    pub fn checked_sub(&self, rhs: &Self) -> NumericResult<Self> {
        let (a, b, places) = self.align(rhs)?;
        Ok(Self::from_parts(a.checked_sub(&b)?, places))
    }

    /// Scales add; the exact product is kept denormalized on purpose, so
    /// no precision of the multiplication result is lost.
    pub fn checked_mul(&self, rhs: &Self) -> NumericResult<Self> {
        Ok(Self {
            value: self.value.checked_mul(&rhs.value)?,
            places: self.places + rhs.places,
        })
    }

    /// Rescales the dividend by guard digits past the larger operand
    /// scale, divides the integers, and normalizes the quotient.
    ///
    /// # Errors
    /// `DivisionByZero` when `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        let target = self.places.max(rhs.places);
        let scaled = Self::scale_up(&self.value, target + GUARD_DIGITS)?;
        let q = scaled.checked_div(&rhs.value)?;
        Ok(Self::from_parts(
            q,
            self.places + target + GUARD_DIGITS - rhs.places,
        ))
    }

    fn cmp_value(&self, other: &Self) -> Ordering {
        match self.align(other) {
            Ok((a, b, _)) => a.cmp(&b),
            // alignment is total: scale_up only multiplies
            Err(_) => unreachable!("scale alignment cannot fail"),
        }
    }

    /// Renders the value, optionally rounded to `places` first. Trailing
    /// fractional zeros are always stripped for display, whatever the
    /// internal scale.
    pub fn format(&self, places: Option<u32>) -> String {
        let mut shown = match places {
            Some(p) => self.round(p),
            None => self.clone(),
        };
        shown.normalize();
        let digits = shown.value.magnitude().to_string();
        let sign = if shown.value.is_negative() { "-" } else { "" };
        if shown.places == 0 {
            return format!("{}{}", sign, digits);
        }
        let places = shown.places as usize;
        // left-pad so the point always has an integer digit before it
        let padded = if digits.len() <= places {
            format!("{}{}", "0".repeat(places + 1 - digits.len()), digits)
        } else {
            digits
        };
        let split = padded.len() - places;
        format!("{}{}.{}", sign, &padded[..split], &padded[split..])
    }

    /// Parses `[-]digits[.digits]`, base 10 only. A bare leading or
    /// trailing point is accepted; the fractional length becomes the
    /// scale.
    ///
    /// # Errors
    /// `InvalidInput` when no digits are present or a character is not a
    /// decimal digit.
    pub fn parse(text: &str) -> NumericResult<Self> {
        let (sign, rest) = match text.strip_prefix('-') {
            Some(rest) => (Sign::Minus, rest),
            None => (Sign::Plus, text),
        };
        let (int_part, frac_part) = match rest.split_once('.') {
            Some((i, f)) => (i, f),
            None => (rest, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(NumericError::InvalidInput);
        }
        if !int_part.chars().chain(frac_part.chars()).all(|c| c.is_ascii_digit()) {
            return Err(NumericError::InvalidInput);
        }
        let mut digits = String::with_capacity(int_part.len() + frac_part.len());
        digits.push_str(int_part);
        digits.push_str(frac_part);
        if digits.is_empty() {
            return Err(NumericError::InvalidInput);
        }
        let magnitude = digits
            .parse::<Cardinal>()
            .map_err(|_| NumericError::InvalidInput)?;
        Ok(Self::from_parts(
            Integer::from_parts(sign, magnitude),
            frac_part.len() as u32,
        ))
    }
}

impl From<Integer> for Decimal {
    fn from(value: Integer) -> Self {
        Self { value, places: 0 }
    }
}

impl From<Cardinal> for Decimal {
    fn from(value: Cardinal) -> Self {
        Self {
            value: Integer::from(value),
            places: 0,
        }
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Self::from(Integer::from(value))
    }
}

impl From<u64> for Decimal {
    fn from(value: u64) -> Self {
        Self::from(Integer::from(value))
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp_value(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_value(other)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(None))
    }
}

impl FromStr for Decimal {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Neg for Decimal {
    type Output = Self;
    fn neg(self) -> Self {
        self.negate()
    }
}

impl Add for Decimal {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.checked_add(&rhs)
            .expect("decimal addition failed; use checked_add in production")
    }
}

impl Sub for Decimal {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.checked_sub(&rhs)
            .expect("decimal subtraction failed; use checked_sub in production")
    }
}

impl Mul for Decimal {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.checked_mul(&rhs)
            .expect("decimal multiplication failed; use checked_mul in production")
    }
}

impl Div for Decimal {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        self.checked_div(&rhs)
            .expect("decimal division by zero; use checked_div in production")
    }
}

impl AddAssign for Decimal {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.clone() + rhs;
    }
}

impl SubAssign for Decimal {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.clone() - rhs;
    }
}

impl MulAssign for Decimal {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.clone() * rhs;
    }
}

impl DivAssign for Decimal {
    fn div_assign(&mut self, rhs: Self) {
        *self = self.clone() / rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr as _;

    fn dec(text: &str) -> Decimal {
        Decimal::parse(text).unwrap()
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!(dec(".5"), dec("0.5"));
        assert_eq!(dec("12."), dec("12"));
        assert_eq!(dec("-0.25").signum(), -1);
        assert_eq!(Decimal::parse("."), Err(NumericError::InvalidInput));
        assert_eq!(Decimal::parse("1.2.3"), Err(NumericError::InvalidInput));
        assert_eq!(Decimal::parse("1,5"), Err(NumericError::InvalidInput));
    }

    #[test]
    fn test_exact_tenths() {
        // the classic binary-float failure case is exact here
        assert_eq!(dec("0.1") + dec("0.2"), dec("0.3"));
    }

    #[test]
    fn test_scaled_multiplication() {
        assert_eq!(dec("19.99") * dec("3"), dec("59.97"));
        // multiplication keeps the summed scale, value comparison still holds
        let p = dec("1.50").checked_mul(&dec("2.0")).unwrap();
        assert_eq!(p, dec("3"));
        assert_eq!(p.format(None), "3");
    }

    #[test]
    fn test_alignment_on_add() {
        assert_eq!(dec("1.5") + dec("0.25"), dec("1.75"));
        assert_eq!(dec("1.5") - dec("1.5"), Decimal::zero());
        assert_eq!((dec("0.5") - dec("1.25")).to_string(), "-0.75");
    }

    #[test]
    fn test_division_with_guard_digits() {
        assert_eq!(dec("1") / dec("8"), dec("0.125"));
        assert_eq!(dec("7.5") / dec("2.5"), dec("3"));
        // 1/3 keeps guard-digit precision past the operand scales
        assert_eq!((dec("1") / dec("3")).to_string(), "0.3333333333");
        assert_eq!(
            dec("1").checked_div(&Decimal::zero()),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(dec("2.345").round(2).to_string(), "2.35");
        assert_eq!(dec("2.344").round(2).to_string(), "2.34");
        assert_eq!(dec("-2.345").round(2).to_string(), "-2.35");
        assert_eq!(dec("2.5").round(0).to_string(), "3");
        // no-op past the current scale
        assert_eq!(dec("2.3").round(5), dec("2.3"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(dec("2.999").truncate(1).to_string(), "2.9");
        assert_eq!(dec("-2.999").truncate(0).to_string(), "-2");
    }

    #[test]
    fn test_set_places_pins_scale() {
        let mut d = dec("1.5");
        d.set_places(4).unwrap();
        assert_eq!(d.places(), 4);
        // display still strips the padding
        assert_eq!(d.to_string(), "1.5");
        d.set_places(0).unwrap();
        assert_eq!(d, dec("1"));
    }

    #[test]
    fn test_normalize_zero() {
        let mut z = dec("0.000");
        z.normalize();
        assert_eq!(z.places(), 0);
        assert_eq!(z.to_string(), "0");
    }

    #[test]
    fn test_format_pads_leading_zero() {
        assert_eq!(dec("0.007").to_string(), "0.007");
        assert_eq!(dec("-0.007").to_string(), "-0.007");
        assert_eq!(dec("123.456").format(Some(1)), "123.5");
    }

    #[test]
    fn test_add_mul_commute_and_associate() {
        let (a, b, c) = (dec("1.25"), dec("-0.5"), dec("3.125"));
        assert_eq!(a.clone() + b.clone(), b.clone() + a.clone());
        assert_eq!(
            (a.clone() + b.clone()) + c.clone(),
            a.clone() + (b.clone() + c.clone())
        );
        assert_eq!(a.clone() * b.clone(), b.clone() * a.clone());
        assert_eq!((a.clone() * b.clone()) * c.clone(), a * (b * c));
    }

    #[test]
    fn test_ordering() {
        assert!(dec("1.5") < dec("1.75"));
        assert!(dec("-1.5") > dec("-1.75"));
        assert!(dec("2") > dec("1.999"));
    }

    #[test]
    fn test_against_oracle() {
        use rust_decimal::Decimal as Oracle;
        let cases = [
            ("12.34", "56.78"),
            ("0.001", "999.999"),
            ("19.99", "3"),
            ("-4.5", "2.25"),
        ];
        for (a, b) in cases {
            let oa = Oracle::from_str(a).unwrap();
            let ob = Oracle::from_str(b).unwrap();
            assert_eq!(
                (dec(a) + dec(b)).to_string(),
                (oa + ob).normalize().to_string(),
                "{} + {}",
                a,
                b
            );
            assert_eq!(
                (dec(a) * dec(b)).format(None),
                (oa * ob).normalize().to_string(),
                "{} * {}",
                a,
                b
            );
        }
    }
}
