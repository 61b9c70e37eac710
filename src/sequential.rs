use crate::error::SieveError;
use crate::flags::FlagArray;

/// Classic Sieve of Eratosthenes.
///
/// Marks composites in a single thread and collects the survivors.
/// - Time complexity: O(n log log n)
/// - Space complexity: O(n) - 1 byte per candidate
/// - Deterministic output for a given limit
///
/// Also serves as the phase-1 seed generator for the parallel engine, which
/// calls it with the square root of the real bound.
pub fn sieve(limit: usize) -> Result<Vec<usize>, SieveError> {
    if limit < 2 {
        return Err(SieveError::InvalidBound(limit));
    }

    let flags = FlagArray::allocate(2, limit);

    let mut i = 2;
    while i * i <= limit {
        if flags.is_prime(i) {
            // Start at i*i: smaller multiples were already marked by
            // smaller primes.
            let mut j = i * i;
            while j <= limit {
                flags.mark(j);
                j += i;
            }
        }
        i += 1;
    }

    Ok(flags.surviving())
}
