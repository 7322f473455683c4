//! Ambient process state read once per hook invocation.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};

/// Source of the working directory and invocation arguments.
pub trait Environment {
    fn current_dir(&self) -> Result<PathBuf>;

    /// Full argument list, program name first.
    fn args(&self) -> Vec<String>;
}

/// Source of the current local time.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Reads the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn current_dir(&self) -> Result<PathBuf> {
        env::current_dir().context("failed to read current working directory")
    }

    fn args(&self) -> Vec<String> {
        env::args_os()
            .enumerate()
            .map(|(idx, raw)| match raw.to_str() {
                Some(arg) => arg.to_owned(),
                None => {
                    tracing::warn!(index = idx, "argument is not valid UTF-8, converting lossily");
                    raw.to_string_lossy().into_owned()
                }
            })
            .collect()
    }
}

/// Wall clock in the host's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Snapshot of everything the report prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildContext {
    pub current_dir: PathBuf,
    pub timestamp: DateTime<Local>,
    pub args: Vec<String>,
}

impl BuildContext {
    /// Read directory, clock, and arguments, in that order.
    pub fn capture(env: &impl Environment, clock: &impl Clock) -> Result<Self> {
        let current_dir = env.current_dir()?;
        let timestamp = clock.now();
        let args = env.args();

        tracing::debug!(
            current_dir = %current_dir.display(),
            timestamp = %timestamp,
            args = args.len(),
            "captured build context"
        );

        Ok(Self {
            current_dir,
            timestamp,
            args,
        })
    }
}
