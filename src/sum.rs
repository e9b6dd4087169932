//! Recursive array summation, reentrant and non-reentrant
//!
//! [`sum_array`] carries its position as an argument, so any number of
//! threads can call it on the same slice. [`sum_array_non_reentrant`] keeps
//! its position in a [`SharedIndex`] owned by the caller. Two threads
//! sharing one index step on each other's increments and return wrong
//! sums. That hazard is the point of the demo and is left in place.
//!
//! ```text
//!        reentrant                     non-reentrant
//!  ┌──────────┐ ┌──────────┐      ┌──────────┐ ┌──────────┐
//!  │ summer-1 │ │ summer-2 │      │ summer-1 │ │ summer-2 │
//!  │ index: 0 │ │ index: 0 │      └────┬─────┘ └────┬─────┘
//!  │ (stack)  │ │ (stack)  │           │            │
//!  └──────────┘ └──────────┘           ▼            ▼
//!                                  ┌──────────────────────┐
//!                                  │ SharedIndex (no lock)│
//!                                  └──────────────────────┘
//! ```

use crate::error::{Result, TaskError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use tracing::{debug, warn};

/// Input used by the menu and the `sum` subcommand when no values are given
pub const DEMO_VALUES: [i64; 5] = [1, 2, 3, 4, 5];

/// Upper bound on demo threads
pub const MAX_DEMO_THREADS: usize = 64;

/// Sum `values[index..]` recursively
///
/// Returns 0 once `index` reaches the end, including for an empty slice or
/// a start index past the end. Additions wrap on overflow.
pub fn sum_array(values: &[i64], index: usize) -> i64 {
    match values.get(index) {
        Some(&value) => value.wrapping_add(sum_array(values, index + 1)),
        None => 0,
    }
}

/// Cursor shared between callers of [`sum_array_non_reentrant`]
///
/// Reads and writes are individually atomic so concurrent use is memory
/// safe, but an advance is a separate load and store, never a single
/// read-modify-write. Concurrent callers therefore lose and repeat
/// increments. The index is never reset automatically.
#[derive(Debug, Default)]
pub struct SharedIndex {
    value: AtomicUsize,
}

impl SharedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current position
    pub fn get(&self) -> usize {
        self.value.load(Ordering::Relaxed)
    }

    /// Move the cursor back to the start
    pub fn reset(&self) {
        self.value.store(0, Ordering::Relaxed);
    }

    /// Read the position, then store position + 1 in a second step
    fn take(&self) -> usize {
        let current = self.value.load(Ordering::Relaxed);
        thread::yield_now();
        self.value.store(current + 1, Ordering::Relaxed);
        current
    }
}

/// Sum `values` recursively using a cursor that lives outside the call
///
/// Correct only when a single caller uses `index` at a time and the index
/// was reset beforehand.
pub fn sum_array_non_reentrant(values: &[i64], index: &SharedIndex) -> i64 {
    if index.get() >= values.len() {
        return 0;
    }
    // Another caller may have moved the cursor past the end since the check
    match values.get(index.take()) {
        Some(&value) => value.wrapping_add(sum_array_non_reentrant(values, index)),
        None => 0,
    }
}

/// Sum reported by one demo thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadSum {
    pub thread: String,
    pub sum: i64,
}

/// Run `sum_array(values, 0)` on `threads` named threads at once
pub fn run_reentrant_demo(values: &[i64], threads: usize) -> Result<Vec<ThreadSum>> {
    run_threads(threads, |_| sum_array(values, 0))
}

/// Run `sum_array_non_reentrant` on `threads` threads sharing one index
///
/// The threads share a fresh index starting at 0. The returned sums
/// are nondeterministic when more than one thread runs.
pub fn run_non_reentrant_demo(values: &[i64], threads: usize) -> Result<Vec<ThreadSum>> {
    let index = SharedIndex::new();
    let results = run_threads(threads, |_| sum_array_non_reentrant(values, &index))?;

    let expected = sum_array(values, 0);
    let wrong = results.iter().filter(|r| r.sum != expected).count();
    if wrong > 0 {
        warn!(
            wrong,
            expected,
            final_index = index.get(),
            "Non-reentrant sum produced inconsistent results"
        );
    }

    Ok(results)
}

/// Spawn `count` scoped threads named `summer-N` and collect their sums
fn run_threads<F>(count: usize, task: F) -> Result<Vec<ThreadSum>>
where
    F: Fn(usize) -> i64 + Sync,
{
    let task = &task;

    thread::scope(|scope| -> Result<Vec<ThreadSum>> {
        let mut handles = Vec::with_capacity(count);

        for id in 1..=count {
            let name = format!("summer-{}", id);
            let handle = thread::Builder::new()
                .name(name.clone())
                .spawn_scoped(scope, move || task(id))
                .map_err(|e| TaskError::ThreadSpawn {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            handles.push((name, handle));
        }

        handles
            .into_iter()
            .map(|(name, handle)| -> Result<ThreadSum> {
                let sum = handle
                    .join()
                    .map_err(|_| TaskError::ThreadPanicked { name: name.clone() })?;
                debug!(thread = %name, sum, "Thread finished");
                Ok(ThreadSum { thread: name, sum })
            })
            .collect()
    })
}
