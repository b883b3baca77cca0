//! Translation from form contents to a concrete argument vector.

use std::fmt;

use crate::fields::{FILE_FLAG, FieldSet};
use crate::form::FormState;

/// Formats string arguments into a space-separated, debug-quoted string.
///
/// Used by dry-run output and error messages to consistently format
/// command arguments (e.g., `"-b" "3" "-f" "data.bin"`).
pub(crate) fn format_command_args(args: &[String]) -> String {
    args.iter()
        .map(|a| format!("{:?}", a))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Builder for assembling flash utility arguments.
///
/// Values are trimmed before rendering; a flag is emitted only when its
/// trimmed value is non-empty.
#[derive(Debug, Default)]
pub struct ArgsBuilder {
    args: Vec<String>,
}

impl ArgsBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self { args: Vec::new() }
    }

    /// Append `flag value` if the value is non-empty after trimming.
    pub fn push_flag_value(&mut self, flag: &str, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            return;
        }
        self.args.push(flag.to_string());
        self.args.push(value.to_string());
    }

    /// Return the collected arguments.
    pub fn into_args(self) -> Vec<String> {
        self.args
    }
}

/// One concrete launch request: the program to run and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    /// Name or path of the flash utility executable.
    pub program: String,
    /// Arguments, excluding the program itself.
    pub args: Vec<String>,
}

impl CommandInvocation {
    /// Returns the full argument vector, program first.
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().cloned())
            .collect()
    }
}

impl fmt::Display for CommandInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.args.is_empty() {
            write!(f, "{}", self.program)
        } else {
            write!(f, "{} {}", self.program, format_command_args(&self.args))
        }
    }
}

/// Assembles the invocation for the given form contents.
///
/// Pure and deterministic: field flags are rendered in registry order,
/// each only when its trimmed value is non-empty, and the input file flag
/// comes last. Values are forwarded trimmed but otherwise unvalidated.
pub fn build_invocation(
    fields: &FieldSet,
    form: &FormState,
    executable: &str,
) -> CommandInvocation {
    let mut builder = ArgsBuilder::new();

    for spec in fields.iter() {
        if let Some(value) = form.value(&spec.flag) {
            builder.push_flag_value(&spec.flag, value);
        }
    }

    if let Some(path) = form.trimmed_input_file() {
        builder.push_flag_value(FILE_FLAG, path);
    }

    CommandInvocation {
        program: executable.trim().to_string(),
        args: builder.into_args(),
    }
}
