//! Mutable snapshot of user-entered field values.

use std::collections::HashMap;

/// Current form contents: one textual value per flag, plus the optional
/// input file path.
///
/// The store is keyed by flag; ordering lives in the
/// [`FieldSet`](crate::fields::FieldSet), not here. Created empty, mutated
/// as input arrives, read once per launch, never persisted.
#[derive(Debug, Default, Clone)]
pub struct FormState {
    values: HashMap<String, String>,
    input_file: Option<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for a flag, replacing any previous value.
    pub fn set_value(&mut self, flag: impl Into<String>, value: impl Into<String>) {
        self.values.insert(flag.into(), value.into());
    }

    /// Returns the raw value for a flag, if one was entered.
    pub fn value(&self, flag: &str) -> Option<&str> {
        self.values.get(flag).map(String::as_str)
    }

    pub fn set_input_file(&mut self, path: impl Into<String>) {
        self.input_file = Some(path.into());
    }

    /// Returns the input file path trimmed, or `None` when absent or
    /// whitespace-only.
    pub fn trimmed_input_file(&self) -> Option<&str> {
        self.input_file
            .as_deref()
            .map(str::trim)
            .filter(|path| !path.is_empty())
    }
}
