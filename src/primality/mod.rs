// ============================================================================
// Primality Module
// Sieve, Jacobi symbol and agreeing primality predicates
// ============================================================================

mod jacobi;
mod sieve;
mod testing;

pub use jacobi::{jacobi, legendre_two};
pub use sieve::sieve;
pub use testing::{is_prime_mr, PrimeTable};
