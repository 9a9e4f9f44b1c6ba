// ============================================================================
// Primality Tests
// Trial division, Euler/Jacobi quadratic-residue test, Miller-Rabin
// ============================================================================

use super::jacobi::{jacobi_cardinal, legendre_two_cardinal};
use super::sieve::sieve_words;
use crate::number::{Cardinal, Number};
use crate::numeric::NumericResult;

/// Deterministic Miller-Rabin witness bases; rounds beyond the list fall
/// back to `2 + (round mod 100)`.
const MR_BASES: [u64; 15] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];

/// Fermat bases for the final check of the quadratic-residue test.
const FERMAT_BASES: [u64; 4] = [2, 3, 5, 7];

/// A small-prime table seeding trial division and the quadratic-residue
/// test bases.
#[derive(Debug, Clone)]
pub struct PrimeTable {
    primes: Vec<u64>,
}

impl PrimeTable {
    /// The first `count` primes.
    pub fn new(count: usize) -> Self {
        let mut primes = sieve_words(Self::sieve_bound(count));
        primes.truncate(count);
        Self { primes }
    }

    /// Upper bound on the `count`-th prime: `n (ln n + ln ln n)` for
    /// `n >= 6`, a fixed cover of the first six primes below that.
    fn sieve_bound(count: usize) -> u64 {
        if count < 6 {
            return 13;
        }
        let n = count as f64;
        (n * (n.ln() + n.ln().ln())).ceil() as u64
    }

    pub fn primes(&self) -> &[u64] {
        &self.primes
    }

    fn max_prime(&self) -> u64 {
        self.primes.last().copied().unwrap_or(0)
    }

    /// Smallest factor found by table trial division; `None` when the
    /// table is exhausted without a verdict.
    fn table_factor(&self, n: &Cardinal, root: &Cardinal) -> NumericResult<Option<Cardinal>> {
        for &p in &self.primes {
            let p = Cardinal::from(p);
            if p.cmp(root) == std::cmp::Ordering::Greater {
                break;
            }
            if n.checked_rem(&p)?.is_zero() {
                return Ok(Some(p));
            }
        }
        Ok(None)
    }

    /// Smallest prime factor of `n`: the table first, then odd
    /// candidates up to the square root. Returns `n` itself when `n` is
    /// prime, and `n` unchanged for `n < 2`.
    pub fn first_factor(&self, n: &Number) -> NumericResult<Number> {
        let n = n.as_cardinal()?;
        let two = Cardinal::from(2u64);
        if n.cmp(&two) == std::cmp::Ordering::Less {
            return Ok(Number::Cardinal(n));
        }
        if !n.bit(0) {
            return Ok(Number::Cardinal(two));
        }
        let root = n.isqrt();
        if let Some(p) = self.table_factor(&n, &root)? {
            return Ok(Number::Cardinal(p));
        }
        // first odd candidate past both the table and 2
        let mut candidate = Cardinal::from((self.max_prime().max(2) + 1) | 1);
        while candidate.cmp(&root) != std::cmp::Ordering::Greater {
            if n.checked_rem(&candidate)?.is_zero() {
                return Ok(Number::Cardinal(candidate));
            }
            candidate = candidate.checked_add(&two)?;
        }
        Ok(Number::Cardinal(n))
    }

    /// Primality by exhaustive trial division.
    pub fn is_prime_td(&self, n: &Number) -> NumericResult<bool> {
        if n.cmp(&Number::from(2u64)) == std::cmp::Ordering::Less {
            return Ok(false);
        }
        Ok(self.first_factor(n)? == *n)
    }

    /// Euler/Jacobi quadratic-residue primality test.
    ///
    /// Trial-divides by the table (an early composite verdict, or an
    /// early prime verdict below the squared table maximum), then for
    /// each of `tests` small prime bases demands agreement between the
    /// Jacobi symbol, Euler's criterion and the reciprocity-derived
    /// expected sign, and finally Fermat-checks a fixed base set.
    pub fn is_prime_qr(&self, n: &Number, tests: usize) -> NumericResult<bool> {
        let n = n.as_cardinal()?;
        let one = Cardinal::one();
        let two = Cardinal::from(2u64);
        if n.cmp(&two) == std::cmp::Ordering::Less {
            return Ok(false);
        }
        if n == two {
            return Ok(true);
        }
        if !n.bit(0) {
            return Ok(false);
        }

        let root = n.isqrt();
        if let Some(p) = self.table_factor(&n, &root)? {
            return Ok(p == n);
        }
        // no table prime divides n; below max^2 that settles it
        let max = Cardinal::from(self.max_prime());
        if n.cmp(&max.checked_mul(&max)?) == std::cmp::Ordering::Less {
            return Ok(true);
        }

        let n_minus_one = n.checked_sub(&one)?;
        let half_exp = n_minus_one.shr(1);
        for &p in self.primes.iter().take(tests) {
            let base = Cardinal::from(p);
            let j = jacobi_cardinal(&base, &n)?;
            if j == 0 {
                return Ok(false);
            }
            let euler = base.mod_pow(&half_exp, &n)?;
            let euler_sign = if euler.is_one() {
                1
            } else if euler == n_minus_one {
                -1
            } else {
                return Ok(false);
            };
            if j != euler_sign || j != self.expected_symbol(p, &n)? {
                return Ok(false);
            }
        }

        for &a in &FERMAT_BASES {
            let a = Cardinal::from(a);
            if a.cmp(&n) != std::cmp::Ordering::Less {
                continue;
            }
            if !a.mod_pow(&n_minus_one, &n)?.is_one() {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// `(p/n)` recomputed through quadratic reciprocity, as an
    /// independent cross-check of the direct Jacobi evaluation.
    fn expected_symbol(&self, p: u64, n: &Cardinal) -> NumericResult<i8> {
        if p == 2 {
            return legendre_two_cardinal(n);
        }
        let p_card = Cardinal::from(p);
        let flip = p % 4 == 3
            && n.checked_rem(&Cardinal::from(4u64))?.to_u64().unwrap_or(0) == 3;
        let folded = n.checked_rem(&p_card)?;
        let inner = jacobi_cardinal(&folded, &p_card)?;
        Ok(if flip { -inner } else { inner })
    }
}

impl Default for PrimeTable {
    fn default() -> Self {
        Self::new(25)
    }
}

/// Miller-Rabin primality test over `rounds` witness bases.
///
/// Writes `n - 1 = d * 2^r` and accepts a base `a` when `a^d == 1` or
/// some square in the chain reaches `n - 1`.
pub fn is_prime_mr(n: &Number, rounds: usize) -> NumericResult<bool> {
    let n = n.as_cardinal()?;
    let one = Cardinal::one();
    let two = Cardinal::from(2u64);
    let three = Cardinal::from(3u64);
    if n.cmp(&two) == std::cmp::Ordering::Less {
        return Ok(false);
    }
    if n == two || n == three {
        return Ok(true);
    }
    if !n.bit(0) {
        return Ok(false);
    }

    let n_minus_one = n.checked_sub(&one)?;
    let mut d = n_minus_one.clone();
    let mut r = 0u64;
    while !d.bit(0) {
        d = d.shr(1);
        r += 1;
    }

    'witness: for round in 0..rounds {
        let raw = if round < MR_BASES.len() {
            MR_BASES[round]
        } else {
            2 + (round as u64 % 100)
        };
        let mut a = Cardinal::from(raw);
        if a.cmp(&n_minus_one) != std::cmp::Ordering::Less {
            a = two.clone();
        }
        let mut x = a.mod_pow(&d, &n)?;
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..r {
            x = x.mod_pow(&two, &n)?;
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return Ok(false);
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(value: u64) -> Number {
        Number::from(value)
    }

    #[test]
    fn test_trial_division_basics() {
        let table = PrimeTable::default();
        assert!(table.is_prime_td(&num(2)).unwrap());
        assert!(!table.is_prime_td(&num(1)).unwrap());
        assert!(!table.is_prime_td(&num(0)).unwrap());
        assert!(table.is_prime_td(&num(97)).unwrap());
        assert!(!table.is_prime_td(&num(172_947_529)).unwrap());
    }

    #[test]
    fn test_first_factor() {
        let table = PrimeTable::default();
        assert_eq!(table.first_factor(&num(91)).unwrap(), num(7));
        assert_eq!(table.first_factor(&num(97)).unwrap(), num(97));
        // smallest factor beyond the default table of 25 primes
        assert_eq!(table.first_factor(&num(101 * 103)).unwrap(), num(101));
        assert_eq!(table.first_factor(&num(172_947_529)).unwrap(), num(307));
        assert_eq!(table.first_factor(&num(1)).unwrap(), num(1));
    }

    #[test]
    fn test_miller_rabin_known_values() {
        assert!(is_prime_mr(&num(2), 5).unwrap());
        assert!(is_prime_mr(&num(3), 5).unwrap());
        assert!(!is_prime_mr(&num(4), 5).unwrap());
        assert!(is_prime_mr(&num(2_147_483_647), 10).unwrap());
        // Carmichael number 307 * 613 * 919
        assert!(!is_prime_mr(&num(172_947_529), 15).unwrap());
        // strong pseudoprime to base 2 alone
        assert!(!is_prime_mr(&num(2047), 5).unwrap());
    }

    #[test]
    fn test_qr_mersenne_prime() {
        let table = PrimeTable::default();
        assert!(table.is_prime_qr(&num(2_147_483_647), 5).unwrap());
    }

    #[test]
    fn test_qr_small_values() {
        let table = PrimeTable::default();
        assert!(table.is_prime_qr(&num(2), 3).unwrap());
        assert!(!table.is_prime_qr(&num(1), 3).unwrap());
        assert!(table.is_prime_qr(&num(97), 3).unwrap());
        assert!(!table.is_prime_qr(&num(91), 3).unwrap());
    }

    #[test]
    fn test_predicates_agree() {
        let table = PrimeTable::default();
        let mut interesting: Vec<u64> = (1..200).collect();
        interesting.extend([
            2_047,
            65_537,
            172_947_529,
            2_147_483_647,
            1_000_000_007,
            1_000_000_008,
        ]);
        for value in interesting {
            let n = num(value);
            let td = table.is_prime_td(&n).unwrap();
            let qr = table.is_prime_qr(&n, 5).unwrap();
            let mr = is_prime_mr(&n, 15).unwrap();
            assert_eq!(td, qr, "QR disagrees with TD for {}", value);
            assert_eq!(td, mr, "MR disagrees with TD for {}", value);
        }
    }

    #[test]
    fn test_table_seeding() {
        let table = PrimeTable::new(5);
        assert_eq!(table.primes(), &[2, 3, 5, 7, 11]);
        let default_table = PrimeTable::default();
        assert_eq!(default_table.primes().len(), 25);
        assert_eq!(*default_table.primes().last().unwrap(), 97);
    }

    #[test]
    fn test_table_seeding_large_counts() {
        // the sieve bound must keep delivering exactly `count` primes
        let table = PrimeTable::new(1000);
        assert_eq!(table.primes().len(), 1000);
        assert_eq!(*table.primes().last().unwrap(), 7919);
        assert_eq!(PrimeTable::new(6).primes(), &[2, 3, 5, 7, 11, 13]);
    }

    #[test]
    fn test_first_factor_with_degenerate_tables() {
        for table in [PrimeTable::new(0), PrimeTable::new(1), PrimeTable::new(2)] {
            assert_eq!(table.first_factor(&num(4)).unwrap(), num(2));
            assert_eq!(table.first_factor(&num(9)).unwrap(), num(3));
            assert_eq!(table.first_factor(&num(15)).unwrap(), num(3));
            assert_eq!(table.first_factor(&num(7)).unwrap(), num(7));
            assert!(!table.is_prime_td(&num(9)).unwrap());
            assert!(table.is_prime_td(&num(13)).unwrap());
            assert_eq!(table.is_prime_td(&num(9)).unwrap(), is_prime_mr(&num(9), 5).unwrap());
        }
    }
}
