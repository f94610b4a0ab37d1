//! ffind - Parallel Recursive Filename Search
//!
//! Walks a directory tree with a fixed pool of worker threads and reports
//! every file whose name (or full path) contains a case-insensitive
//! substring, optionally restricted to an extension allow-list. Matches
//! stream out as they are found.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Walker                              │
//! │   seed root ──► ┌─────────────────────────┐                 │
//! │                 │        WorkQueue        │                 │
//! │                 │  pending dirs (FIFO)    │                 │
//! │                 │  active-worker count    │                 │
//! │                 │  terminated (one-way)   │                 │
//! │                 └──────┬─────────▲────────┘                 │
//! │                   pop  │         │ push subdirs             │
//! │       ┌────────────────┼─────────┼───────────────┐          │
//! │  ┌────▼────┐      ┌────▼────┐    │    ┌─────────┐│          │
//! │  │Worker 1 │      │Worker 2 │    └────│Worker N ││          │
//! │  │read_dir │      │read_dir │   ...   │read_dir ││          │
//! │  └────┬────┘      └────┬────┘         └────┬────┘│          │
//! │       └────────────────┴───────┬───────────┘     │          │
//! │                                ▼                 │          │
//! │                    ┌──────────────────────┐      │          │
//! │                    │  MatchSink (Mutex)   │──► stdout       │
//! │                    └──────────────────────┘                 │
//! │                    ┌──────────────────────┐                 │
//! │                    │  RunStats (atomics)  │──► summary      │
//! │                    └──────────────────────┘                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The interesting part is termination: workers both consume and produce
//! work, so an empty queue does not mean the walk is over. The queue
//! counts workers holding an unfinished directory and declares the run
//! finished only when nothing is pending *and* that count is zero; the
//! first worker to observe this flips a one-way flag and wakes everyone.
//!
//! Symbolic links to directories are never followed, so cyclic trees
//! terminate. Unreadable directories, overlong paths, and unresolvable
//! entries are skipped and counted, never fatal.
//!
//! # Example
//!
//! ```bash
//! # Every C source or header under ~/src whose name contains "prime"
//! ffind ~/src prime -e c,h
//!
//! # Match on the full path, 16 workers, live progress
//! ffind / libexec -f -t 16 -p
//! ```

pub mod config;
pub mod error;
pub mod matcher;
pub mod paths;
pub mod progress;
pub mod report;
pub mod stats;
pub mod walker;

pub use config::{CliArgs, FindConfig};
pub use error::{FindError, Result};
pub use matcher::MatchCriteria;
pub use report::{MatchSink, StreamSink};
pub use stats::{RunStats, StatsSnapshot};
pub use walker::{Walker, WalkResult};
