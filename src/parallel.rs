use std::any::Any;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use crate::error::SieveError;
use crate::flags::FlagArray;
use crate::sequential;

/// Two-phase parallel sieve by range.
///
/// - Phase 1 (sequential, cheap): sieve the primes up to sqrt(limit). That
///   range is too small to be worth parallelizing.
/// - Phase 2 (parallel): mark composites in the high range
///   (sqrt(limit), limit], one logical marking task per small prime, run on
///   a bounded worker pool.
/// - Join all workers, then merge: small primes followed by the unmarked
///   high-range candidates. Every small prime is below every high-range
///   candidate, so plain concatenation keeps the result sorted.
///
/// Worker count defaults to the available CPU parallelism.
pub fn sieve(limit: usize) -> Result<Vec<usize>, SieveError> {
    let workers = thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4);
    sieve_with_workers(limit, workers)
}

/// Same engine with an explicit worker pool size.
///
/// Workers pull prime indexes from a shared atomic counter, so the pool is
/// never larger than the small-prime count and each prime is marked by
/// exactly one worker. Scheduling order between workers does not matter:
/// marks are idempotent and the result is only read after every worker has
/// been joined.
pub fn sieve_with_workers(limit: usize, workers: usize) -> Result<Vec<usize>, SieveError> {
    if limit < 2 {
        return Err(SieveError::InvalidBound(limit));
    }

    let sqrt_limit = isqrt(limit);

    // Phase 1: seed primes up to sqrt(limit). For limit 2 or 3 the seed
    // range is empty and the high range already holds every candidate.
    let small_primes = if sqrt_limit < 2 {
        Vec::new()
    } else {
        sequential::sieve(sqrt_limit)?
    };

    // Phase 2: mark multiples of each small prime in (sqrt(limit), limit]
    let low = sqrt_limit + 1;
    let flags = FlagArray::allocate(low, limit);

    if !small_primes.is_empty() {
        let worker_count = workers.max(1).min(small_primes.len());
        let next_prime = AtomicUsize::new(0);
        let mut first_failure: Option<String> = None;

        thread::scope(|scope| {
            let mut handles = Vec::with_capacity(worker_count);
            for _ in 0..worker_count {
                let flags = &flags;
                let small_primes = &small_primes;
                let next_prime = &next_prime;
                handles.push(scope.spawn(move || {
                    loop {
                        let idx = next_prime.fetch_add(1, Ordering::Relaxed);
                        let Some(&p) = small_primes.get(idx) else {
                            break;
                        };
                        // First multiple of p at or above the range floor,
                        // computed directly rather than by stepping one
                        // candidate at a time.
                        let mut multiple = ((low + p - 1) / p) * p;
                        while multiple <= limit {
                            flags.mark(multiple);
                            multiple += p;
                        }
                    }
                }));
            }

            // Join every worker before any cell is read. A failed worker
            // does not short-circuit the joins; the first failure is kept
            // and surfaced after the barrier.
            for handle in handles {
                if let Err(payload) = handle.join() {
                    if first_failure.is_none() {
                        first_failure = Some(panic_message(payload));
                    }
                }
            }
        });

        if let Some(message) = first_failure {
            return Err(SieveError::TaskFailure(message));
        }
    }

    let mut primes = small_primes;
    primes.extend(flags.surviving());
    Ok(primes)
}

/// Integer square root. The f64 estimate can land one off next to a perfect
/// square at large limits, which would drop the largest seed prime, so it is
/// corrected by integer comparison.
fn isqrt(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;
    while root > 0 && root * root > n {
        root -= 1;
    }
    while (root + 1)
        .checked_mul(root + 1)
        .is_some_and(|square| square <= n)
    {
        root += 1;
    }
    root
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        String::from("marking task panicked")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_bound() {
        assert_eq!(sieve(0), Err(SieveError::InvalidBound(0)));
        assert_eq!(sieve(1), Err(SieveError::InvalidBound(1)));
    }

    #[test]
    fn test_smallest_bounds_have_empty_seed() {
        // sqrt(2) and sqrt(3) are below 2, so phase 2 marks nothing
        assert_eq!(sieve(2).unwrap(), vec![2]);
        assert_eq!(sieve(3).unwrap(), vec![2, 3]);
        assert_eq!(sieve(4).unwrap(), vec![2, 3]);
    }

    #[test]
    fn test_limit_10_scenario() {
        // Seed = [2, 3], high range = [4, 10], survivors = [5, 7]
        assert_eq!(sieve(10).unwrap(), vec![2, 3, 5, 7]);
    }

    #[test]
    fn test_matches_sequential_baseline() {
        for limit in 2..=300 {
            assert_eq!(
                sieve(limit).unwrap(),
                sequential::sieve(limit).unwrap(),
                "parallel and sequential disagree at limit {}",
                limit
            );
        }
    }

    #[test]
    fn test_perfect_square_limits() {
        // The largest seed prime equals sqrt(limit) here; losing it to a
        // sloppy square root would leave p*p unmarked
        for limit in [25, 49, 121, 169, 289] {
            assert_eq!(sieve(limit).unwrap(), sequential::sieve(limit).unwrap());
        }
    }

    #[test]
    fn test_worker_pool_sizes_agree() {
        let expected = sequential::sieve(5000).unwrap();
        for workers in [1, 2, 3, 64] {
            assert_eq!(
                sieve_with_workers(5000, workers).unwrap(),
                expected,
                "wrong result with {} workers",
                workers
            );
        }
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let first = sieve(10_000).unwrap();
        for _ in 0..10 {
            assert_eq!(sieve(10_000).unwrap(), first);
        }
    }

    #[test]
    fn test_isqrt() {
        assert_eq!(isqrt(2), 1);
        assert_eq!(isqrt(3), 1);
        assert_eq!(isqrt(4), 2);
        assert_eq!(isqrt(99), 9);
        assert_eq!(isqrt(100), 10);
        assert_eq!(isqrt(10_000_000_019), 100_000); // just above 100000^2
    }
}
