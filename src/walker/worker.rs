//! Worker thread logic for the parallel walk
//!
//! Each worker:
//! - Pulls a directory from the work queue
//! - Enumerates its immediate children in one pass
//! - Pushes subdirectories back to the work queue
//! - Filters and matches files, emitting hits through the sink
//!
//! Workers are symmetric; there is no coordinator thread deciding who
//! does what. A worker exits when `pop` reports quiescence.

use crate::config::FindConfig;
use crate::error::{WalkOutcome, WorkerError};
use crate::paths;
use crate::report::MatchSink;
use crate::stats::RunStats;
use crate::walker::queue::{TaskGuard, WorkQueue};
use std::fs;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{debug, trace};

/// A worker thread that expands directory tasks
pub struct Worker {
    id: usize,
    handle: Option<JoinHandle<()>>,
}

impl Worker {
    /// Spawn a new worker thread
    pub fn spawn(
        id: usize,
        config: Arc<FindConfig>,
        queue: Arc<WorkQueue>,
        stats: Arc<RunStats>,
        sink: Arc<dyn MatchSink>,
    ) -> Result<Self, WorkerError> {
        let handle = thread::Builder::new()
            .name(format!("walker-{id}"))
            .spawn(move || worker_loop(id, config, queue, stats, sink))
            .map_err(|e| WorkerError::SpawnFailed {
                id,
                reason: e.to_string(),
            })?;

        Ok(Self {
            id,
            handle: Some(handle),
        })
    }

    /// Get worker ID
    pub fn id(&self) -> usize {
        self.id
    }

    /// Wait for the worker to finish
    pub fn join(mut self) -> Result<(), WorkerError> {
        match self.handle.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| WorkerError::Panicked { id: self.id }),
            None => Ok(()),
        }
    }
}

/// Main worker loop: runs until the queue reports quiescence
fn worker_loop(
    id: usize,
    config: Arc<FindConfig>,
    queue: Arc<WorkQueue>,
    stats: Arc<RunStats>,
    sink: Arc<dyn MatchSink>,
) {
    debug!(worker = id, "worker starting");

    while let Some(dir) = queue.pop() {
        // Holds this worker's active slot until the directory is fully
        // expanded, including every early-skip path below
        let _slot = TaskGuard::new(&queue);

        stats.record_dir();

        let outcome = process_directory(&dir, &config, &queue, &stats, sink.as_ref());
        match &outcome {
            WalkOutcome::Success { entries, subdirs } => {
                trace!(worker = id, path = %dir, entries, subdirs, "directory processed");
            }
            WalkOutcome::Skipped { reason } => {
                debug!(worker = id, path = %dir, reason, "directory skipped");
            }
            WalkOutcome::Failed { error } => {
                debug!(worker = id, path = %dir, error = %error, "directory abandoned");
            }
        }
    }

    debug!(worker = id, "worker exiting");
}

/// Expand a single directory: enqueue child directories, match files.
///
/// Every failure in here is non-fatal; the worst outcome is that some
/// entry or subtree goes unscanned and the error counter ticks.
fn process_directory(
    dir: &str,
    config: &FindConfig,
    queue: &WorkQueue,
    stats: &RunStats,
    sink: &dyn MatchSink,
) -> WalkOutcome {
    if !paths::can_list(dir) {
        return WalkOutcome::Skipped {
            reason: "path exceeds working capacity",
        };
    }

    let entries = match fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(error) => {
            stats.record_error();
            return WalkOutcome::Failed { error };
        }
    };

    let mut entry_count = 0usize;
    let mut subdir_count = 0usize;

    // read_dir yields only real children, never `.`/`..`
    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                stats.record_error();
                debug!(path = %dir, error = %e, "unreadable entry");
                continue;
            }
        };
        entry_count += 1;

        let name = entry.file_name();
        let name = name.to_string_lossy();

        let Some(full) = paths::join_child(dir, &name) else {
            trace!(path = %dir, name = %name, "child path exceeds capacity, skipping entry");
            continue;
        };

        let ftype = match entry.file_type() {
            Ok(t) => t,
            Err(e) => {
                stats.record_error();
                debug!(path = %full, error = %e, "cannot classify entry");
                continue;
            }
        };

        if ftype.is_dir() {
            subdir_count += 1;
            queue.push(full);
        } else if ftype.is_symlink() {
            // A link to a directory is never traversed (it can form a
            // cycle); a link to a file is matched like any other file
            match fs::metadata(&full) {
                Ok(meta) if meta.is_dir() => {
                    trace!(path = %full, "skipping link to directory");
                }
                Ok(_) => scan_file(&name, &full, config, stats, sink),
                Err(e) => {
                    trace!(path = %full, error = %e, "skipping unresolvable link");
                }
            }
        } else {
            scan_file(&name, &full, config, stats, sink);
        }
    }

    WalkOutcome::Success {
        entries: entry_count,
        subdirs: subdir_count,
    }
}

/// Count one file and report it if it satisfies the criteria
fn scan_file(name: &str, full: &str, config: &FindConfig, stats: &RunStats, sink: &dyn MatchSink) {
    stats.record_file();

    if config.criteria.matches_file(name, full) {
        stats.record_match();
        sink.emit(full);
    }
}
