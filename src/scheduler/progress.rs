//! Progress reporting for background detail loading.
//!
//! Progress is counted in completed chunks and surfaced as a rounded
//! percentage. The counter is atomic so a reporter can be read from the
//! foreground while the scheduler task advances it.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Snapshot passed to progress callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed_chunks: usize,
    pub total_chunks: usize,
    pub percent: u8,
}

/// `round(completed / total * 100)`; an empty run counts as finished.
pub fn percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    let completed = completed.min(total);
    ((completed as f64 / total as f64) * 100.0).round() as u8
}

type ProgressCallback = Box<dyn Fn(Progress) + Send + Sync>;

/// Chunk-level progress reporter.
pub struct ProgressReporter {
    /// Current count of completed chunks
    completed: Arc<AtomicUsize>,
    /// Total number of chunks
    total: Arc<AtomicUsize>,
    /// Optional callback for progress updates
    callback: Option<ProgressCallback>,
}

impl ProgressReporter {
    /// Create a reporter without a callback.
    pub fn new() -> Self {
        Self {
            completed: Arc::new(AtomicUsize::new(0)),
            total: Arc::new(AtomicUsize::new(0)),
            callback: None,
        }
    }

    /// Create a reporter that invokes `callback` after every chunk.
    pub fn with_callback<F>(callback: F) -> Self
    where
        F: Fn(Progress) + Send + Sync + 'static,
    {
        Self {
            callback: Some(Box::new(callback)),
            ..Self::new()
        }
    }

    /// Reset the counters for a run of `total` chunks.
    pub fn start(&self, total: usize) {
        self.completed.store(0, Ordering::SeqCst);
        self.total.store(total, Ordering::SeqCst);
    }

    /// Report that one more chunk has been completed.
    pub fn chunk_completed(&self) -> Progress {
        let completed = self.completed.fetch_add(1, Ordering::SeqCst) + 1;
        let progress = self.snapshot_with(completed);

        if let Some(ref callback) = self.callback {
            callback(progress);
        }

        progress
    }

    /// Get current progress.
    pub fn snapshot(&self) -> Progress {
        self.snapshot_with(self.completed.load(Ordering::SeqCst))
    }

    fn snapshot_with(&self, completed: usize) -> Progress {
        let total = self.total.load(Ordering::SeqCst);
        Progress {
            completed_chunks: completed,
            total_chunks: total,
            percent: percent(completed, total),
        }
    }

    /// Handle for reading progress from elsewhere.
    pub fn watcher(&self) -> ProgressWatcher {
        ProgressWatcher {
            completed: Arc::clone(&self.completed),
            total: Arc::clone(&self.total),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view of a reporter's counters.
#[derive(Debug, Clone)]
pub struct ProgressWatcher {
    completed: Arc<AtomicUsize>,
    total: Arc<AtomicUsize>,
}

impl ProgressWatcher {
    pub fn percent(&self) -> u8 {
        percent(
            self.completed.load(Ordering::SeqCst),
            self.total.load(Ordering::SeqCst),
        )
    }
}
