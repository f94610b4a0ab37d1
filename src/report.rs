//! Match reporting
//!
//! Workers emit matched paths as they find them. The sink serializes the
//! actual write so concurrent matches never interleave character-by-
//! character; match detection itself takes no lock.

use std::io::Write;
use std::sync::Mutex;
use tracing::debug;

/// Sink accepting one matched path at a time.
///
/// Implementations must serialize concurrent emits internally.
pub trait MatchSink: Send + Sync {
    fn emit(&self, path: &str);
}

/// [`MatchSink`] writing one line per match to any `Write` target.
pub struct StreamSink<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> StreamSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }
}

impl<W: Write + Send> MatchSink for StreamSink<W> {
    fn emit(&self, path: &str) {
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = writeln!(out, "{path}") {
            // A broken pipe mid-run loses output lines, not correctness
            debug!(error = %e, "failed to write match");
        }
    }
}
