//! Recursive directory size walker
//!
//! Sums file sizes under a root directory on the calling thread. A second
//! thread can poll the walker's counters to drive a progress display.
//!
//! # Architecture
//!
//! ```text
//!                     ┌─────────────────────────┐
//!                     │     DirSizeWalker       │
//!                     │  - read_dir per level   │
//!                     │  - suffix / regex skips │
//!                     └───────────┬─────────────┘
//!                                 │ atomic counters
//!                     ┌───────────▼─────────────┐
//!                     │   progress thread       │
//!                     │   (every 100ms)         │
//!                     └─────────────────────────┘
//! ```

pub mod format;
pub mod size;

pub use format::format_size;
pub use size::{directory_size, DirSizeWalker, WalkProgress, WalkStats};
