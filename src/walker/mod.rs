//! Parallel directory walker
//!
//! # Architecture
//!
//! ```text
//!                  ┌──────────────────────────┐
//!                  │        Work Queue        │
//!                  │  pending dirs (FIFO)     │
//!                  │  active-worker count     │
//!                  │  one-way terminated flag │
//!                  └─────┬──────────────▲─────┘
//!                   pop  │              │ push subdirs
//!        ┌───────────────┼──────────────┼───────────────┐
//!  ┌─────▼─────┐   ┌─────▼─────┐   ┌────┴──────┐        │
//!  │  Worker 1 │   │  Worker 2 │   │  Worker N │  ...   │
//!  │  read_dir │   │  read_dir │   │  read_dir │        │
//!  └─────┬─────┘   └─────┬─────┘   └─────┬─────┘        │
//!        │   matched files through the serialized sink  │
//!        └───────────────┴────────────────┴─────────────┘
//! ```
//!
//! Workers both consume and produce work; the queue alone decides when
//! the walk is over (nothing pending and nobody mid-expansion).

pub mod coordinator;
pub mod queue;
pub mod worker;

pub use coordinator::{ProgressHandle, Walker, WalkProgress, WalkResult};
pub use queue::{TaskGuard, WorkQueue};
pub use worker::Worker;
