// ============================================================================
// Bignum Engine Library
// Arbitrary-precision numeric engine with pluggable multiplication backends
// ============================================================================

//! # Bignum Engine
//!
//! An arbitrary-precision numeric engine built around a shared
//! digit-vector storage model.
//!
//! ## Features
//!
//! - **Pluggable arithmetic backends** (schoolbook vs. Karatsuba
//!   multiplication), hot-swappable on live values
//! - **Three number kinds** — unsigned [`Cardinal`](number::Cardinal),
//!   signed [`Integer`](number::Integer), fixed-point
//!   [`Decimal`](number::Decimal) — unified behind the promoting
//!   [`Number`](number::Number) value type
//! - **Base-N formatting and parsing** with custom digit alphabets up
//!   to base 64
//! - **Primality toolkit**: sieve, Jacobi symbol, Euler/Jacobi
//!   quadratic-residue test, Miller-Rabin and trial division, all in
//!   agreement
//!
//! ## Example
//!
//! ```rust
//! use bignum_engine::prelude::*;
//!
//! let a: Number = "1000000000000000000".parse().unwrap();
//! let b: Number = "999999999999999999".parse().unwrap();
//! assert_eq!((a - b).to_string(), "1");
//!
//! // mixed-kind arithmetic promotes automatically
//! let price: Number = "19.99".parse().unwrap();
//! let total = price * Number::from(3u64);
//! assert_eq!(total.to_string(), "59.97");
//!
//! // primality predicates agree
//! let table = PrimeTable::default();
//! let mersenne = Number::from(2_147_483_647u64);
//! assert!(table.is_prime_qr(&mersenne, 5).unwrap());
//! assert!(is_prime_mr(&mersenne, 10).unwrap());
//! ```

pub mod backend;
pub mod digit;
pub mod number;
pub mod numeric;
pub mod primality;

// Re-exports for convenience
pub mod prelude {
    pub use crate::backend::{Backend, BackendKind, KaratsubaBackend, NaiveBackend};
    pub use crate::digit::DEFAULT_ALPHABET;
    pub use crate::number::{Cardinal, Decimal, Integer, Number, Sign};
    pub use crate::numeric::{NumericError, NumericResult};
    pub use crate::primality::{is_prime_mr, jacobi, sieve, PrimeTable};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_end_to_end_mixed_arithmetic() {
        let a: Number = "1000000000000000000".parse().unwrap();
        let b: Number = "999999999999999999".parse().unwrap();
        assert_eq!(a.clone() - b.clone(), Number::one());

        // cardinal subtraction below zero promotes to integer
        let negative = b - a;
        assert_eq!(negative.kind_name(), "Integer");
        assert_eq!(negative.to_string(), "-1");

        let price: Number = "19.99".parse().unwrap();
        let total = price * Number::from(3u64);
        assert_eq!(total, "59.97".parse().unwrap());
    }

    #[test]
    fn test_backend_equivalence_through_public_api() {
        let digits = "987654321".repeat(40);
        let mut naive: Cardinal = digits.parse().unwrap();
        let mut karatsuba = naive.clone();
        naive.set_backend(BackendKind::Naive);
        karatsuba.set_backend(BackendKind::Karatsuba);
        let factor: Cardinal = "123456789123456789".parse().unwrap();
        assert_eq!(
            naive.checked_mul(&factor).unwrap(),
            karatsuba.checked_mul(&factor).unwrap()
        );
    }

    #[test]
    fn test_decimal_exactness() {
        let tenth: Number = "0.1".parse().unwrap();
        let fifth: Number = "0.2".parse().unwrap();
        assert_eq!(tenth + fifth, "0.3".parse().unwrap());
    }

    #[test]
    fn test_primality_over_numbers() {
        let table = PrimeTable::default();
        let primes = sieve(50);
        for p in &primes {
            assert!(table.is_prime_td(p).unwrap());
            assert!(is_prime_mr(p, 10).unwrap());
        }
        assert_eq!(primes.len(), 15);
    }

    #[test]
    fn test_custom_alphabet_round_trip() {
        let value: Number = "123456789".parse().unwrap();
        let encoded = value.format(64, DEFAULT_ALPHABET);
        let decoded = Number::parse(&encoded, 64, DEFAULT_ALPHABET).unwrap();
        assert_eq!(decoded, value);
    }
}
