// ============================================================================
// Sieve of Eratosthenes
// ============================================================================

use crate::number::Number;

/// The ordered primes up to and including `limit`.
pub fn sieve(limit: u64) -> Vec<Number> {
    sieve_words(limit).into_iter().map(Number::from).collect()
}

/// Machine-word sieve backing [`sieve`] and the prime table.
pub(crate) fn sieve_words(limit: u64) -> Vec<u64> {
    if limit < 2 {
        return Vec::new();
    }
    let limit = limit as usize;
    let mut composite = vec![false; limit + 1];
    let mut primes = Vec::new();
    for candidate in 2..=limit {
        if composite[candidate] {
            continue;
        }
        primes.push(candidate as u64);
        let mut multiple = candidate * candidate;
        while multiple <= limit {
            composite[multiple] = true;
            multiple += candidate;
        }
    }
    primes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primes_up_to_thirty() {
        let expected: Vec<u64> = vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29];
        assert_eq!(sieve_words(30), expected);
        assert_eq!(sieve(30), expected.into_iter().map(Number::from).collect::<Vec<_>>());
    }

    #[test]
    fn test_degenerate_limits() {
        assert!(sieve(0).is_empty());
        assert!(sieve(1).is_empty());
        assert_eq!(sieve_words(2), vec![2]);
    }

    #[test]
    fn test_prime_counts() {
        assert_eq!(sieve_words(100).len(), 25);
        assert_eq!(sieve_words(1000).len(), 168);
    }
}
