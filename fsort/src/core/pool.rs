// src/core/pool.rs
use crate::error::SortError;
use rayon::{ThreadPool, ThreadPoolBuilder};

/// Default number of worker threads used to overlap filesystem calls.
pub const DEFAULT_WORKERS: usize = 5;

/// Builds the bounded pool every parallel step of a run shares.
///
/// # Errors
///
/// Returns [`SortError::InvalidWorkers`] for a zero worker count and
/// [`SortError::ThreadPool`] if the threads cannot be spawned.
pub fn build_pool(workers: usize) -> Result<ThreadPool, SortError> {
    if workers == 0 {
        return Err(SortError::InvalidWorkers(workers));
    }
    ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|index| format!("fsort-worker-{index}"))
        .build()
        .map_err(|err| SortError::ThreadPool(err.to_string()))
}
