//! Work queue with integrated termination detection
//!
//! A FIFO of directories waiting to be expanded, plus the two pieces of
//! state that let the pool decide, without a coordinator, when the walk is
//! over: the count of workers currently holding a directory, and a one-way
//! `terminated` flag.
//!
//! The active count is incremented at *dequeue*, inside the same critical
//! section that removes the item. An empty pending list therefore means
//! "finished" only when the active count is also zero; while any worker is
//! mid-expansion the queue may yet grow.
//!
//! Wake policy: `push` wakes one sleeper (one item satisfies one
//! consumer); `task_done` wakes all of them, since any sleeper might be
//! the one to observe the empty/zero condition that ends the run.

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use tracing::warn;

#[derive(Debug, Default)]
struct QueueState {
    pending: VecDeque<String>,
    active: usize,
    terminated: bool,
}

/// Thread-safe directory queue shared by the whole worker pool
#[derive(Debug, Default)]
pub struct WorkQueue {
    state: Mutex<QueueState>,
    cond: Condvar,
}

impl WorkQueue {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, QueueState> {
        // A poisoned lock means a worker panicked mid-update; the queue
        // state is still structurally sound, so the walk keeps going.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a directory and wake one blocked consumer.
    ///
    /// Never fails: if the node cannot be allocated the item is dropped
    /// and the subtree silently goes unscanned.
    pub fn push(&self, dir: String) {
        let mut state = self.lock();
        if state.terminated {
            // Unreachable from workers (they only push while active), but
            // a late external push must never resurrect a finished queue.
            return;
        }
        if state.pending.try_reserve(1).is_err() {
            warn!(path = %dir, "out of memory, dropping work item");
            return;
        }
        state.pending.push_back(dir);
        self.cond.notify_one();
    }

    /// Block until a directory is available or the walk is over.
    ///
    /// Returns `None` exactly once the queue is quiescent: nothing
    /// pending and no worker mid-expansion. The first thread to observe
    /// that state flips `terminated` and wakes everyone; every later call
    /// returns `None` without blocking.
    pub fn pop(&self) -> Option<String> {
        let mut state = self.lock();
        loop {
            if state.terminated {
                return None;
            }
            if let Some(dir) = state.pending.pop_front() {
                state.active += 1;
                return Some(dir);
            }
            if state.active == 0 {
                state.terminated = true;
                self.cond.notify_all();
                return None;
            }
            state = self
                .cond
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Release the active slot taken by a successful `pop`.
    ///
    /// Wakes every sleeper: this decrement may be what makes the queue
    /// quiescent, and each of them has to re-check.
    pub fn task_done(&self) {
        let mut state = self.lock();
        debug_assert!(state.active > 0, "task_done without matching pop");
        state.active = state.active.saturating_sub(1);
        self.cond.notify_all();
    }

    /// Number of directories waiting to be expanded
    pub fn len(&self) -> usize {
        self.lock().pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().pending.is_empty()
    }

    /// True once the termination flag has been set
    pub fn is_terminated(&self) -> bool {
        self.lock().terminated
    }
}

/// RAII guard pairing one `pop` with exactly one `task_done`
pub struct TaskGuard<'a> {
    queue: &'a WorkQueue,
}

impl<'a> TaskGuard<'a> {
    pub fn new(queue: &'a WorkQueue) -> Self {
        Self { queue }
    }
}

impl Drop for TaskGuard<'_> {
    fn drop(&mut self) {
        self.queue.task_done();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_queue_basic() {
        let queue = WorkQueue::new();

        queue.push("/test".into());
        assert!(!queue.is_empty());
        assert_eq!(queue.len(), 1);

        let dir = queue.pop().unwrap();
        assert_eq!(dir, "/test");
        assert!(queue.is_empty());
    }

    #[test]
    fn test_empty_queue_terminates_immediately() {
        let queue = WorkQueue::new();

        // Nothing pending, nobody active: first pop ends the walk
        assert!(queue.pop().is_none());
        assert!(queue.is_terminated());

        // And it stays terminated
        assert!(queue.pop().is_none());
    }

    #[test]
    fn test_active_count_defers_termination() {
        let queue = WorkQueue::new();
        queue.push("/a".into());

        let dir = queue.pop().unwrap();
        assert_eq!(dir, "/a");

        // A worker is mid-expansion; it may still push children, so the
        // queue must not be terminated yet
        assert!(!queue.is_terminated());

        queue.push("/a/sub".into());
        queue.task_done();

        assert_eq!(queue.pop().unwrap(), "/a/sub");
        queue.task_done();

        assert!(queue.pop().is_none());
        assert!(queue.is_terminated());
    }

    #[test]
    fn test_push_after_termination_is_dropped() {
        let queue = WorkQueue::new();
        assert!(queue.pop().is_none());

        queue.push("/late".into());
        assert!(queue.is_empty());
        assert!(queue.pop().is_none());
    }

    #[test]
    fn test_task_guard_releases_slot() {
        let queue = WorkQueue::new();
        queue.push("/a".into());

        let _dir = queue.pop().unwrap();
        {
            let _guard = TaskGuard::new(&queue);
        }

        assert!(queue.pop().is_none());
    }

    #[test]
    fn test_blocked_consumer_woken_by_push() {
        let queue = Arc::new(WorkQueue::new());
        queue.push("/root".into());

        // Hold the active slot so the consumer thread blocks instead of
        // terminating
        let root = queue.pop().unwrap();
        assert_eq!(root, "/root");

        let consumer = {
            let queue = Arc::clone(&queue);
            thread::spawn(move || queue.pop())
        };

        thread::sleep(Duration::from_millis(50));
        queue.push("/root/child".into());

        assert_eq!(consumer.join().unwrap().unwrap(), "/root/child");
        queue.task_done(); // child's slot
        queue.task_done(); // root's slot
    }

    #[test]
    fn test_all_sleepers_woken_on_quiescence() {
        let queue = Arc::new(WorkQueue::new());
        queue.push("/root".into());
        let _root = queue.pop().unwrap();

        // Several threads blocked waiting for work
        let sleepers: Vec<_> = (0..4)
            .map(|_| {
                let queue = Arc::clone(&queue);
                thread::spawn(move || queue.pop())
            })
            .collect();

        thread::sleep(Duration::from_millis(50));

        // The last task_done must wake every one of them
        queue.task_done();

        for sleeper in sleepers {
            assert!(sleeper.join().unwrap().is_none());
        }
        assert!(queue.is_terminated());
    }

    #[test]
    fn test_many_workers_drain_synthetic_tree() {
        let queue = Arc::new(WorkQueue::new());
        queue.push("d0".into());

        // Each popped item "d{n}" fans out two children up to a fixed
        // depth; workers both consume and produce, as in the real walk
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let queue = Arc::clone(&queue);
                thread::spawn(move || {
                    let mut seen = 0u64;
                    while let Some(dir) = queue.pop() {
                        let _guard = TaskGuard::new(&queue);
                        seen += 1;
                        let depth: usize =
                            dir.trim_start_matches('d').parse().unwrap();
                        if depth < 6 {
                            queue.push(format!("d{}", depth + 1));
                            queue.push(format!("d{}", depth + 1));
                        }
                    }
                    seen
                })
            })
            .collect();

        let total: u64 = handles.into_iter().map(|h| h.join().unwrap()).sum();
        // Full binary fan-out of depth 6: 2^7 - 1 nodes
        assert_eq!(total, 127);
        assert!(queue.is_terminated());
        assert!(queue.is_empty());
    }
}
