//! Field registries for the flash utility form.
//!
//! A [`FieldSpec`] pairs a utility flag with its label and help text.
//! A [`FieldSet`] is an explicitly ordered collection of specs; the order
//! of registration is the order in which flags appear in the assembled
//! invocation. The input file is not part of the registry: its flag is
//! fixed and always rendered last.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::NandrunError;

/// Flag reserved for the input file, always appended after all field flags.
pub const FILE_FLAG: &str = "-f";
/// Label of the input file field.
pub const FILE_LABEL: &str = "Input File to Process";
/// Help text of the input file field.
pub const FILE_DESCRIPTION: &str = "Select the input file that needs to be processed.";

/// One registered form input: a utility flag plus its presentation text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldSpec {
    /// Flag token passed to the flash utility (e.g., "-b").
    pub flag: String,
    /// Human-readable field label.
    pub label: String,
    /// Help text for the field (may be empty).
    #[serde(default)]
    pub description: String,
}

impl FieldSpec {
    pub fn new(
        flag: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            flag: flag.into(),
            label: label.into(),
            description: description.into(),
        }
    }
}

/// Ordered registry of form fields.
///
/// Argument order in the assembled invocation follows registration order,
/// so the registry is a sequence rather than a map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSet {
    specs: Vec<FieldSpec>,
}

impl FieldSet {
    pub fn new(specs: Vec<FieldSpec>) -> Self {
        Self { specs }
    }

    /// The documented field registry: flags, labels, and help text as
    /// presented by the annotated front-end variant.
    pub fn standard() -> Self {
        Self::new(vec![
            FieldSpec::new("-b", "Memory Block Number", "Block index in flash memory."),
            FieldSpec::new("-p", "Memory Page Number", "Page index within the block."),
            FieldSpec::new("-s", "Memory Plane Index", "Plane number to read/write."),
            FieldSpec::new("-a", "Column Address (in bytes)", "Byte offset within the page."),
            FieldSpec::new("-S", "Size of Buffer (in bytes)", "Size of data to read/write."),
            FieldSpec::new("-c", "Chip Selection (0 or 1)", "Choose chip 0 or 1."),
        ])
    }

    /// The bare field registry: same flags, terse labels, no help text.
    /// Mirrors the unannotated front-end variant.
    pub fn bare() -> Self {
        Self::new(vec![
            FieldSpec::new("-b", "block", ""),
            FieldSpec::new("-p", "page", ""),
            FieldSpec::new("-s", "plane", ""),
            FieldSpec::new("-a", "column", ""),
            FieldSpec::new("-S", "buffer", ""),
            FieldSpec::new("-c", "chip", ""),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
        self.specs.iter()
    }

    pub fn get(&self, flag: &str) -> Option<&FieldSpec> {
        self.specs.iter().find(|spec| spec.flag == flag)
    }

    pub fn contains(&self, flag: &str) -> bool {
        self.get(flag).is_some()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Checks registry consistency: flags must be non-empty, unique, and
    /// must not claim the reserved input file flag.
    pub fn validate(&self) -> Result<(), NandrunError> {
        let mut seen = HashSet::new();
        for spec in &self.specs {
            if spec.flag.trim().is_empty() {
                return Err(NandrunError::Validation(format!(
                    "field \"{}\" has an empty flag",
                    spec.label
                )));
            }
            if spec.flag == FILE_FLAG {
                return Err(NandrunError::Validation(format!(
                    "flag {} is reserved for the input file",
                    FILE_FLAG
                )));
            }
            if !seen.insert(spec.flag.as_str()) {
                return Err(NandrunError::Validation(format!(
                    "duplicate flag in field registry: {}",
                    spec.flag
                )));
            }
        }
        Ok(())
    }
}
