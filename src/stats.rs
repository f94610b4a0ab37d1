//! Shared run counters
//!
//! One `RunStats` is owned by the call that starts a walk and shared into
//! the workers as an `Arc`. The counters are independent monotonic
//! increments with no cross-field invariant, so relaxed atomics suffice;
//! the caller only reads them after every worker has joined.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters mutated by every worker during a walk
#[derive(Debug, Default)]
pub struct RunStats {
    /// Directories scanned (dequeued and counted, readable or not)
    pub dirs_scanned: AtomicU64,

    /// Plain files examined
    pub files_scanned: AtomicU64,

    /// Files that passed the filter and the match predicate
    pub matches_found: AtomicU64,

    /// Non-fatal failures (unreadable directories, unstattable entries)
    pub errors: AtomicU64,
}

impl RunStats {
    pub fn record_dir(&self) {
        self.dirs_scanned.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_file(&self) {
        self.files_scanned.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_match(&self) {
        self.matches_found.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_error(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time copy of all counters
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            dirs_scanned: self.dirs_scanned.load(Ordering::Relaxed),
            files_scanned: self.files_scanned.load(Ordering::Relaxed),
            matches_found: self.matches_found.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
        }
    }
}

/// Plain-value view of [`RunStats`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub dirs_scanned: u64,
    pub files_scanned: u64,
    pub matches_found: u64,
    pub errors: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_stats() {
        let stats = RunStats::default();

        stats.record_dir();
        stats.record_file();
        stats.record_file();
        stats.record_match();
        stats.record_error();

        let snap = stats.snapshot();
        assert_eq!(snap.dirs_scanned, 1);
        assert_eq!(snap.files_scanned, 2);
        assert_eq!(snap.matches_found, 1);
        assert_eq!(snap.errors, 1);
    }
}
