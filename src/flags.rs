use std::sync::atomic::{AtomicBool, Ordering};

/// Shared composite-marker array for a closed candidate range [low, high].
///
/// One `AtomicBool` cell per candidate, indexed by `candidate - low`, so a
/// store to one cell can never disturb a neighbor (no bit packing). A cell
/// only ever moves from "prime" (false) to "composite" (true); the store is
/// idempotent, so any number of tasks may mark the same cell concurrently
/// without losing the write.
///
/// Reading cells is only meaningful after every writer has been joined. The
/// engines enforce this: the thread join supplies the happens-before edge
/// that makes the relaxed stores visible to the reader.
pub struct FlagArray {
    low: usize,
    cells: Vec<AtomicBool>,
}

impl FlagArray {
    /// Allocate a fresh array covering candidates `low..=high`, every cell
    /// initialized to "prime".
    pub fn allocate(low: usize, high: usize) -> FlagArray {
        debug_assert!(low >= 2 && low <= high);
        let cells = (low..=high).map(|_| AtomicBool::new(false)).collect();
        FlagArray { low, cells }
    }

    /// Lowest candidate covered by this array.
    pub fn low(&self) -> usize {
        self.low
    }

    /// Highest candidate covered by this array.
    pub fn high(&self) -> usize {
        self.low + self.cells.len() - 1
    }

    /// Record `candidate` as composite. Safe to call from any number of
    /// threads, targeting the same or different cells.
    pub fn mark(&self, candidate: usize) {
        self.cells[candidate - self.low].store(true, Ordering::Relaxed);
    }

    /// Whether `candidate` is still unmarked.
    pub fn is_prime(&self, candidate: usize) -> bool {
        !self.cells[candidate - self.low].load(Ordering::Relaxed)
    }

    /// Collect every unmarked candidate in ascending order.
    pub fn surviving(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| {
                if cell.load(Ordering::Relaxed) {
                    None
                } else {
                    Some(self.low + i)
                }
            })
            .collect()
    }
}
