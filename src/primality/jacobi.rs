// ============================================================================
// Jacobi Symbol
// Iterative quadratic-reciprocity reduction
// ============================================================================

use crate::number::{Cardinal, Number};
use crate::numeric::{NumericError, NumericResult};

/// Jacobi symbol `(a/n)` for odd positive `n`; 0 when `gcd(a, n) != 1`.
///
/// # Errors
/// `InvalidInput` when `n` is even or zero; `InvalidConversion` on
/// negative operands.
pub fn jacobi(a: &Number, n: &Number) -> NumericResult<i8> {
    jacobi_cardinal(&a.as_cardinal()?, &n.as_cardinal()?)
}

/// Legendre symbol `(2/n)` by the closed form on `n mod 8`; 0 for even
/// `n`.
pub fn legendre_two(n: &Number) -> NumericResult<i8> {
    legendre_two_cardinal(&n.as_cardinal()?)
}

pub(crate) fn jacobi_cardinal(a: &Cardinal, n: &Cardinal) -> NumericResult<i8> {
    if n.is_zero() || !n.bit(0) {
        return Err(NumericError::InvalidInput);
    }
    let eight = Cardinal::from(8u64);
    let four = Cardinal::from(4u64);
    let mut a = a.checked_rem(n)?;
    let mut n = n.clone();
    let mut result = 1i8;
    while !a.is_zero() {
        // factor out twos; each contributes (2/n)
        while !a.bit(0) {
            a = a.shr(1);
            let m8 = n.checked_rem(&eight)?.to_u64().unwrap_or(0);
            if m8 == 3 || m8 == 5 {
                result = -result;
            }
        }
        std::mem::swap(&mut a, &mut n);
        let a4 = a.checked_rem(&four)?.to_u64().unwrap_or(0);
        let n4 = n.checked_rem(&four)?.to_u64().unwrap_or(0);
        if a4 == 3 && n4 == 3 {
            result = -result;
        }
        a = a.checked_rem(&n)?;
    }
    if n.is_one() {
        Ok(result)
    } else {
        Ok(0)
    }
}

pub(crate) fn legendre_two_cardinal(n: &Cardinal) -> NumericResult<i8> {
    let m8 = n.checked_rem(&Cardinal::from(8u64))?.to_u64().unwrap_or(0);
    Ok(match m8 {
        1 | 7 => 1,
        3 | 5 => -1,
        _ => 0,
    })
}
