//! Configuration types for ffind
//!
//! This module defines:
//! - CLI argument parsing using clap derive macros
//! - Runtime configuration with validation

use crate::error::ConfigError;
use crate::matcher::MatchCriteria;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

/// Maximum reasonable worker count
const MAX_WORKERS: usize = 512;

/// Parallel recursive filename search
#[derive(Parser, Debug, Clone)]
#[command(
    name = "ffind",
    version,
    about = "Parallel recursive filename search",
    long_about = "Walks a directory tree with a pool of worker threads and prints every file\n\
                  whose name (or full path, with -f) contains the given substring,\n\
                  case-insensitively. Symbolic links to directories are never followed.",
    after_help = "EXAMPLES:\n    \
        ffind ~/src prime -e c,h,cpp\n    \
        ffind / vmlinuz -t 16\n    \
        ffind . readme -f -p\n    \
        ffind /var/log '' -e gz       # empty needle: every .gz file"
)]
pub struct CliArgs {
    /// Root directory to scan
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,

    /// Case-insensitive substring to look for (empty matches everything)
    #[arg(value_name = "NEEDLE")]
    pub needle: String,

    /// Comma-separated extension allow-list, no dots (e.g. "c,h,cpp")
    #[arg(short = 'e', long = "ext", default_value = "", value_name = "LIST")]
    pub extensions: String,

    /// Match against the full path instead of the file name
    #[arg(short = 'f', long = "full-path")]
    pub full_path: bool,

    /// Number of worker threads
    #[arg(
        short = 't',
        long = "threads",
        default_value_t = default_workers(),
        value_name = "NUM"
    )]
    pub threads: usize,

    /// Show a live progress line on stderr
    #[arg(short = 'p', long)]
    pub progress: bool,

    /// Suppress the end-of-run summary
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Verbose output (show skipped directories and degraded-mode events)
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

fn default_workers() -> usize {
    num_cpus::get().max(1)
}

/// Validated runtime configuration
#[derive(Debug, Clone)]
pub struct FindConfig {
    /// Root directory to walk
    pub root: PathBuf,

    /// What counts as a match
    pub criteria: MatchCriteria,

    /// Number of worker threads
    pub worker_count: usize,

    /// Show progress indicator
    pub show_progress: bool,

    /// Suppress the summary
    pub quiet: bool,

    /// Verbose logging
    pub verbose: bool,
}

impl FindConfig {
    /// Create and validate configuration from CLI arguments
    pub fn from_args(args: CliArgs) -> Result<Self, ConfigError> {
        if args.threads == 0 || args.threads > MAX_WORKERS {
            return Err(ConfigError::InvalidWorkerCount {
                count: args.threads,
                max: MAX_WORKERS,
            });
        }

        // Fail early on a root that could never be walked; anything that
        // goes wrong after this point is the walk's own business
        let meta = fs::metadata(&args.root).map_err(|e| ConfigError::RootNotFound {
            path: args.root.clone(),
            reason: e.to_string(),
        })?;
        if !meta.is_dir() {
            return Err(ConfigError::NotADirectory { path: args.root });
        }

        Ok(Self {
            root: args.root,
            criteria: MatchCriteria::new(args.needle, &args.extensions, args.full_path),
            worker_count: args.threads,
            show_progress: args.progress,
            quiet: args.quiet,
            verbose: args.verbose,
        })
    }
}
