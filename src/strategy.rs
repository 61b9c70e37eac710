use crate::error::SieveError;
use crate::{parallel, sequential};

/// Named decomposition strategies for [`primes_up_to`].
///
/// Only two engines actually exist: the sequential baseline and the
/// parallel-by-range engine. The remaining names are contract aliases kept
/// for callers that select a strategy by intent; each routes to one of the
/// two engines and is guaranteed to produce the identical result for the
/// same bound.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Single-threaded baseline sieve.
    #[default]
    Sequential,
    /// Two-phase fork-join sieve: sequential seed, then one marking task
    /// per small prime over the high range.
    ByRange,
    /// Decomposition by data chunk. Pending a distinct implementation;
    /// currently routed to the sequential engine.
    ByChunk,
    /// Decomposition by basic-prime partition. Pending a distinct
    /// implementation; currently routed to the sequential engine.
    ByPrimePartition,
    /// Worker-pool execution. The range engine already runs its tasks on a
    /// bounded pool, so this routes there.
    WorkerPool,
}

impl Strategy {
    /// Every named strategy, for exhaustive output-equality checks.
    pub const ALL: [Strategy; 5] = [
        Strategy::Sequential,
        Strategy::ByRange,
        Strategy::ByChunk,
        Strategy::ByPrimePartition,
        Strategy::WorkerPool,
    ];
}

/// Find every prime in [2, limit], ascending.
///
/// The strategy affects only how the work is scheduled, never the output:
/// all strategies return the same sequence for the same limit. Fails with
/// `InvalidBound` for limit <= 1, before any work starts.
pub fn primes_up_to(limit: usize, strategy: Strategy) -> Result<Vec<usize>, SieveError> {
    match strategy {
        Strategy::Sequential | Strategy::ByChunk | Strategy::ByPrimePartition => {
            sequential::sieve(limit)
        }
        Strategy::ByRange | Strategy::WorkerPool => parallel::sieve(limit),
    }
}
