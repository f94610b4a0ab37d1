//! ffind - Parallel Recursive Filename Search
//!
//! Entry point for the CLI application.

use anyhow::{Context, Result};
use clap::Parser;
use ffind::config::{CliArgs, FindConfig};
use ffind::progress::{print_header, print_summary, ProgressReporter};
use ffind::report::StreamSink;
use ffind::walker::Walker;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse();

    setup_logging(args.verbose);

    let config = FindConfig::from_args(args).context("Invalid configuration")?;

    if config.show_progress && !config.quiet {
        print_header(
            &config.root.display().to_string(),
            &config.criteria.needle,
            config.worker_count,
        );
    }

    let sink = Arc::new(StreamSink::new(std::io::stdout()));
    let quiet = config.quiet;
    let show_progress = config.show_progress;

    let walker = Walker::new(config, sink);

    // Optional spinner on stderr, fed from the live counters
    let ticker = if show_progress {
        let handle = walker.progress_handle();
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);
        let thread = thread::spawn(move || {
            let reporter = ProgressReporter::new();
            while !stop_flag.load(Ordering::Relaxed) {
                reporter.update(&handle.snapshot());
                thread::sleep(Duration::from_millis(100));
            }
            reporter.finish_and_clear();
        });
        Some((stop, thread))
    } else {
        None
    };

    let result = walker.run().context("Walk failed");

    if let Some((stop, thread)) = ticker {
        stop.store(true, Ordering::Relaxed);
        let _ = thread.join();
    }

    let result = result?;

    if !quiet {
        print_summary(&result);
    }

    Ok(())
}

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("ffind=debug,warn")
    } else {
        EnvFilter::new("ffind=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
