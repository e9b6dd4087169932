//! Recursive directory size walker
//!
//! Sums the sizes of regular files under a root directory:
//! 1. Missing or unreadable paths count as zero bytes, never as errors
//! 2. Files whose name ends with an excluded suffix are skipped
//! 3. Subdirectories are walked by recursion on the calling thread
//!
//! Symbolic links are followed and there is no cycle detection. A link
//! pointing back up the tree recurses until `max_depth` (if set) stops it.

use crate::config::WalkConfig;
use std::fs::{self, Metadata};
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::debug;

/// Result from walk operation
#[derive(Debug, Clone, Default)]
pub struct WalkStats {
    pub dirs: u64,
    pub files: u64,
    pub excluded: u64,
    pub bytes: u64,
    pub errors: u64,
    pub duration: Duration,
    pub completed: bool,
}

/// Progress information for display
#[derive(Debug, Clone, Default)]
pub struct WalkProgress {
    pub dirs: u64,
    pub files: u64,
    pub bytes: u64,
    pub elapsed: Duration,
}

impl WalkProgress {
    pub fn entries_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            (self.files + self.dirs) as f64 / secs
        } else {
            0.0
        }
    }
}

/// Total size of the regular files under `path`, skipping `.tmp` and `.log`
pub fn directory_size(path: impl AsRef<Path>) -> u64 {
    DirSizeWalker::new(WalkConfig::default()).walk(path).bytes
}

/// Recursive walker with counters readable from other threads
pub struct DirSizeWalker {
    config: WalkConfig,
    shutdown: Arc<AtomicBool>,
    dirs_count: Arc<AtomicU64>,
    files_count: Arc<AtomicU64>,
    excluded_count: Arc<AtomicU64>,
    bytes_count: Arc<AtomicU64>,
    errors_count: Arc<AtomicU64>,
}

impl DirSizeWalker {
    pub fn new(config: WalkConfig) -> Self {
        Self {
            config,
            shutdown: Arc::new(AtomicBool::new(false)),
            dirs_count: Arc::new(AtomicU64::new(0)),
            files_count: Arc::new(AtomicU64::new(0)),
            excluded_count: Arc::new(AtomicU64::new(0)),
            bytes_count: Arc::new(AtomicU64::new(0)),
            errors_count: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Flag that stops the walk when set
    pub fn shutdown_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.shutdown)
    }

    pub fn progress(&self, elapsed: Duration) -> WalkProgress {
        WalkProgress {
            dirs: self.dirs_count.load(Ordering::Relaxed),
            files: self.files_count.load(Ordering::Relaxed),
            bytes: self.bytes_count.load(Ordering::Relaxed),
            elapsed,
        }
    }

    /// Walk `path` and return the totals
    ///
    /// Counters are reset first, so one walker can be reused for several
    /// roots. The shutdown flag is not reset.
    pub fn walk(&self, path: impl AsRef<Path>) -> WalkStats {
        let root = path.as_ref();
        let start = Instant::now();
        self.reset_counters();

        debug!("Measuring {}", root.display());

        let bytes = match fs::metadata(root) {
            Ok(meta) if meta.is_dir() => self.traverse(root, 0),
            Ok(_) => {
                debug!("Root {} is not a directory", root.display());
                0
            }
            Err(e) => {
                debug!("Root {} not readable: {}", root.display(), e);
                0
            }
        };

        let stats = WalkStats {
            dirs: self.dirs_count.load(Ordering::Relaxed),
            files: self.files_count.load(Ordering::Relaxed),
            excluded: self.excluded_count.load(Ordering::Relaxed),
            bytes,
            errors: self.errors_count.load(Ordering::Relaxed),
            duration: start.elapsed(),
            completed: !self.shutdown.load(Ordering::Relaxed),
        };

        debug!(
            dirs = stats.dirs,
            files = stats.files,
            excluded = stats.excluded,
            bytes = stats.bytes,
            "Walk finished"
        );

        stats
    }

    /// Walk `path` while a background thread reports progress every 100ms
    pub fn run_with_progress<F>(&self, path: impl AsRef<Path>, progress_callback: F) -> WalkStats
    where
        F: Fn(WalkProgress) + Send,
    {
        let start = Instant::now();
        let done = AtomicBool::new(false);
        let done_flag = &done;

        thread::scope(|scope| {
            scope.spawn(move || {
                while !done_flag.load(Ordering::Relaxed) {
                    progress_callback(self.progress(start.elapsed()));
                    thread::sleep(Duration::from_millis(100));
                }
            });

            let stats = self.walk(path);
            done.store(true, Ordering::SeqCst);
            stats
        })
    }

    fn reset_counters(&self) {
        for counter in [
            &self.dirs_count,
            &self.files_count,
            &self.excluded_count,
            &self.bytes_count,
            &self.errors_count,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }

    /// Sum everything inside `dir`
    fn traverse(&self, dir: &Path, depth: usize) -> u64 {
        self.dirs_count.fetch_add(1, Ordering::Relaxed);

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("Cannot read {}: {}", dir.display(), e);
                self.errors_count.fetch_add(1, Ordering::Relaxed);
                return 0;
            }
        };

        let mut total: u64 = 0;
        for entry in entries {
            if self.shutdown.load(Ordering::Relaxed) {
                break;
            }

            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!("Bad entry in {}: {}", dir.display(), e);
                    self.errors_count.fetch_add(1, Ordering::Relaxed);
                    continue;
                }
            };

            total = total.saturating_add(self.process_entry(&entry.path(), depth + 1));
        }

        total
    }

    /// Size contributed by one directory entry
    fn process_entry(&self, path: &Path, depth: usize) -> u64 {
        if self.config.is_excluded(&path.to_string_lossy()) {
            debug!("Excluded by pattern: {}", path.display());
            self.excluded_count.fetch_add(1, Ordering::Relaxed);
            return 0;
        }

        // Follows symlinks
        let meta = match fs::metadata(path) {
            Ok(meta) => meta,
            Err(e) => {
                debug!("Cannot stat {}: {}", path.display(), e);
                self.errors_count.fetch_add(1, Ordering::Relaxed);
                return 0;
            }
        };

        if meta.is_file() {
            self.process_file(path, &meta)
        } else if meta.is_dir() {
            if self.config.max_depth.is_some_and(|max| depth > max) {
                debug!("Depth limit reached at {}", path.display());
                return 0;
            }
            self.traverse(path, depth)
        } else {
            0
        }
    }

    /// Size of a regular file, or 0 when its name is excluded
    fn process_file(&self, path: &Path, meta: &Metadata) -> u64 {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();

        if self.config.has_excluded_suffix(&name) {
            self.excluded_count.fetch_add(1, Ordering::Relaxed);
            return 0;
        }

        let size = meta.len();
        self.files_count.fetch_add(1, Ordering::Relaxed);
        self.bytes_count.fetch_add(size, Ordering::Relaxed);
        size
    }
}
