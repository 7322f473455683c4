//! post-build hook CLI.
//!
//! Every argument is echoed, none is interpreted, so there is no argument
//! parser here.

use std::io::{self, IsTerminal, Write};

use anyhow::{Context, Result};
use tracing::Level;

use postbuild_core::ambient::{BuildContext, Clock, Environment, SystemClock, SystemEnvironment};
use postbuild_core::report::write_report;

/// Set up logging and print the report for this process.
pub fn run() -> Result<()> {
    init_tracing();

    let stdout = io::stdout();
    run_with(&SystemEnvironment, &SystemClock, stdout.lock())
}

/// Capture all ambient state first so a fault never leaves partial output.
pub fn run_with(env: &impl Environment, clock: &impl Clock, w: impl Write) -> Result<()> {
    let ctx = BuildContext::capture(env, clock).context("failed to read build context")?;
    write_report(&ctx, w)?;
    tracing::debug!("post-build report written");
    Ok(())
}

// stderr only: stdout carries the report.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::WARN)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .try_init();
}
