//! Walk orchestration
//!
//! `Walker` owns the queue, the shared counters and the sink. `run` seeds
//! the queue with the root, starts the pool, and joins it. There is no
//! completion watchdog: the queue's own termination protocol is what makes
//! every worker return from `pop`, so joining the pool *is* waiting for
//! the walk to finish.

use crate::config::FindConfig;
use crate::error::{Result, WorkerError};
use crate::report::MatchSink;
use crate::stats::{RunStats, StatsSnapshot};
use crate::walker::queue::WorkQueue;
use crate::walker::worker::Worker;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Result of a completed walk
#[derive(Debug)]
pub struct WalkResult {
    /// Directories scanned
    pub dirs_scanned: u64,

    /// Files examined
    pub files_scanned: u64,

    /// Files matched and reported
    pub matches_found: u64,

    /// Non-fatal failures along the way
    pub errors: u64,

    /// Wall-clock time for the walk
    pub duration: Duration,

    /// Worker threads actually started
    pub workers: usize,
}

/// Coordinates the parallel walk
pub struct Walker {
    config: Arc<FindConfig>,
    queue: Arc<WorkQueue>,
    stats: Arc<RunStats>,
    sink: Arc<dyn MatchSink>,
}

impl Walker {
    /// Create a walker ready to run
    pub fn new(config: FindConfig, sink: Arc<dyn MatchSink>) -> Self {
        Self {
            config: Arc::new(config),
            queue: Arc::new(WorkQueue::new()),
            stats: Arc::new(RunStats::default()),
            sink,
        }
    }

    /// Live view of the walk for progress display
    pub fn progress_handle(&self) -> ProgressHandle {
        ProgressHandle {
            stats: Arc::clone(&self.stats),
            queue: Arc::clone(&self.queue),
            start: Instant::now(),
        }
    }

    /// Run the walk to completion
    pub fn run(self) -> Result<WalkResult> {
        let start = Instant::now();
        let root = self.config.root.to_string_lossy().into_owned();

        info!(
            root = %root,
            workers = self.config.worker_count,
            "starting scan"
        );

        // Seed before the pool starts so the first pop finds work
        self.queue.push(root);

        let workers = self.spawn_workers();
        if workers.is_empty() {
            return Err(WorkerError::NoWorkers.into());
        }
        let started = workers.len();

        for worker in workers {
            if let Err(e) = worker.join() {
                warn!(error = %e, "worker failed to join cleanly");
            }
        }

        let snap = self.stats.snapshot();
        let duration = start.elapsed();

        info!(
            dirs = snap.dirs_scanned,
            files = snap.files_scanned,
            matches = snap.matches_found,
            errors = snap.errors,
            duration_ms = duration.as_millis() as u64,
            "scan complete"
        );

        Ok(WalkResult {
            dirs_scanned: snap.dirs_scanned,
            files_scanned: snap.files_scanned,
            matches_found: snap.matches_found,
            errors: snap.errors,
            duration,
            workers: started,
        })
    }

    /// Spawn up to `worker_count` threads.
    ///
    /// A failed spawn degrades parallelism instead of aborting: the walk
    /// proceeds with however many workers were started.
    fn spawn_workers(&self) -> Vec<Worker> {
        let mut workers = Vec::with_capacity(self.config.worker_count);

        for id in 0..self.config.worker_count {
            match Worker::spawn(
                id,
                Arc::clone(&self.config),
                Arc::clone(&self.queue),
                Arc::clone(&self.stats),
                Arc::clone(&self.sink),
            ) {
                Ok(worker) => workers.push(worker),
                Err(e) => {
                    warn!(error = %e, started = workers.len(), "worker spawn failed, continuing with fewer");
                    break;
                }
            }
        }

        workers
    }
}

/// Cloneable live view of a running walk
#[derive(Clone)]
pub struct ProgressHandle {
    stats: Arc<RunStats>,
    queue: Arc<WorkQueue>,
    start: Instant,
}

impl ProgressHandle {
    /// Point-in-time progress snapshot
    pub fn snapshot(&self) -> WalkProgress {
        WalkProgress {
            stats: self.stats.snapshot(),
            queue_len: self.queue.len(),
            elapsed: self.start.elapsed(),
        }
    }
}

/// Progress information for display
#[derive(Debug, Clone)]
pub struct WalkProgress {
    /// Counter values so far
    pub stats: StatsSnapshot,

    /// Directories waiting in the queue
    pub queue_len: usize,

    /// Time since the walk started
    pub elapsed: Duration,
}

impl WalkProgress {
    /// Files examined per second
    pub fn files_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.stats.files_scanned as f64 / secs
        } else {
            0.0
        }
    }
}
