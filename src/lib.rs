//! recursion-tasks - Four Recursion Exercises
//!
//! Small, independent routines that each show one recursion technique,
//! reachable from a numbered menu or from subcommands.
//!
//! # Exercises
//!
//! - **Base Conversion**: render a signed integer in any base from 2 to 36,
//!   recursively and iteratively with identical output.
//!
//! - **Directory Size**: recursively sum file sizes under a directory,
//!   skipping excluded extensions (`.tmp`, `.log` by default). Missing or
//!   unreadable paths count as zero.
//!
//! - **Even/Odd**: `is_even` and `is_odd` defined by mutual recursion, with
//!   a constant-time fallback for magnitudes that would overflow the stack.
//!
//! - **Reentrant Sum**: recursive array sum with the index as a parameter,
//!   contrasted with a variant whose index lives in shared state and races
//!   when called from several threads.
//!
//! # Known limitations
//!
//! - The directory walker follows symbolic links without cycle detection.
//! - Recursion depth grows with the input: `|n|` for parity, the slice
//!   length for sums.
//!
//! # Example
//!
//! ```bash
//! # Interactive menu
//! recursion-tasks
//!
//! # Single exercises
//! recursion-tasks convert 255 --base 16
//! recursion-tasks dir-size ~/projects --exclude-ext .o
//! recursion-tasks sum --non-reentrant --threads 8
//! ```

pub mod config;
pub mod convert;
pub mod error;
pub mod menu;
pub mod parity;
pub mod progress;
pub mod sum;
pub mod walker;

pub use config::{CliArgs, Command, WalkConfig};
pub use convert::{string_value, string_value_iterative};
pub use error::{ConvertError, Result, TaskError};
pub use parity::{check_parity, is_even, is_odd};
pub use sum::{sum_array, sum_array_non_reentrant, SharedIndex};
pub use walker::{directory_size, format_size, DirSizeWalker, WalkStats};
