//! External process launching and outcome classification.
//!
//! This module provides:
//! - [`LaunchOutcome`]: classified result of one launch attempt
//! - [`Launcher`]: trait for launch strategies
//! - [`ProcessLauncher`]: production implementation using `std::process::Command`

use std::io;
use std::process::{Command, ExitStatus};

use anyhow::Result;
use which::which;

use crate::error::NandrunError;
use crate::invocation::CommandInvocation;

/// Classified result of attempting to run the flash utility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// The utility ran and exited with status zero.
    Success,
    /// The executable was not found on the search path or filesystem.
    ExecutableNotFound,
    /// The utility ran but exited with a non-zero status.
    Failed(ExitStatus),
}

impl LaunchOutcome {
    /// Returns true if the launch completed successfully.
    pub fn success(&self) -> bool {
        matches!(self, LaunchOutcome::Success)
    }

    /// Returns the exit code of a failed run, if the platform reports one.
    pub fn code(&self) -> Option<i32> {
        match self {
            LaunchOutcome::Failed(status) => status.code(),
            _ => None,
        }
    }
}

/// Trait for launching an assembled invocation.
pub trait Launcher {
    /// Runs the invocation to completion, blocking the caller.
    ///
    /// Missing executables and non-zero exits are classified outcomes, not
    /// errors; `Err` is reserved for faults at the spawn/wait boundary.
    fn launch(&self, invocation: &CommandInvocation) -> Result<LaunchOutcome>;
}

/// Launcher that runs the actual flash utility.
///
/// When `dry_run` is true, the invocation is logged but not executed, and
/// `launch()` reports `Success` without requiring the executable to exist.
///
/// The child inherits stdout and stderr; nothing is captured or relayed.
/// Exactly one child is spawned per call, with no retry and no timeout.
pub struct ProcessLauncher {
    pub dry_run: bool,
}

impl Launcher for ProcessLauncher {
    fn launch(&self, invocation: &CommandInvocation) -> Result<LaunchOutcome> {
        if self.dry_run {
            tracing::info!("dry run: {}", invocation);
            return Ok(LaunchOutcome::Success);
        }

        let program = match which(&invocation.program) {
            Ok(path) => path,
            Err(e) => {
                tracing::debug!("executable lookup failed: {}: {}", invocation.program, e);
                return Ok(LaunchOutcome::ExecutableNotFound);
            }
        };
        tracing::trace!(
            "executable found: {}: {}",
            invocation.program,
            program.to_string_lossy()
        );

        let status = match Command::new(&program).args(&invocation.args).status() {
            Ok(status) => status,
            // Lookup can race with removal of the executable.
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(LaunchOutcome::ExecutableNotFound);
            }
            Err(e) => {
                return Err(NandrunError::io(
                    format!("failed to run {}", invocation.program),
                    e,
                )
                .into());
            }
        };

        tracing::trace!(
            "executed: {}: success={}",
            invocation.program,
            status.success()
        );

        if status.success() {
            Ok(LaunchOutcome::Success)
        } else {
            Ok(LaunchOutcome::Failed(status))
        }
    }
}
