//! YAML profile loading for declarative launches.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;

use anyhow::Result;
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;

use crate::error::NandrunError;
use crate::fields::{FieldSet, FieldSpec};
use crate::form::FormState;

fn default_executable() -> String {
    "demo.exe".to_string()
}

/// Declarative description of one launch: the executable, the field
/// registry, and the form values to translate.
#[derive(Debug, Deserialize)]
pub struct Profile {
    /// Name or path of the flash utility executable.
    #[serde(default = "default_executable")]
    pub executable: String,
    /// Custom ordered field registry; the standard registry when absent.
    #[serde(default)]
    pub fields: Option<Vec<FieldSpec>>,
    /// Field values keyed by flag (e.g., `"-b": "3"`).
    #[serde(default)]
    pub values: HashMap<String, String>,
    /// Path of the input file to forward, if any.
    #[serde(default)]
    pub input_file: Option<Utf8PathBuf>,
}

impl Profile {
    /// Returns the field registry this profile launches with.
    pub fn field_set(&self) -> FieldSet {
        match &self.fields {
            Some(specs) => FieldSet::new(specs.clone()),
            None => FieldSet::standard(),
        }
    }

    /// Builds the form contents described by this profile.
    pub fn form_state(&self) -> FormState {
        let mut form = FormState::new();
        for (flag, value) in &self.values {
            form.set_value(flag, value);
        }
        if let Some(path) = &self.input_file {
            form.set_input_file(path.as_str());
        }
        form
    }

    /// Checks profile consistency before launching.
    ///
    /// The executable name must be non-empty, the field registry must be
    /// well-formed, and every value must name a registered flag.
    pub fn validate(&self) -> Result<(), NandrunError> {
        if self.executable.trim().is_empty() {
            return Err(NandrunError::Validation(
                "executable name must not be empty".to_string(),
            ));
        }

        let fields = self.field_set();
        fields.validate()?;

        for flag in self.values.keys() {
            if !fields.contains(flag) {
                return Err(NandrunError::Validation(format!(
                    "value given for unregistered flag: {}",
                    flag
                )));
            }
        }

        Ok(())
    }
}

/// Loads a profile from the given YAML file.
pub fn load_profile(path: &Utf8Path) -> Result<Profile> {
    let file = File::open(path).map_err(|e| NandrunError::io(path.to_string(), e))?;
    let reader = BufReader::new(file);
    let profile: Profile = serde_yaml::from_reader(reader)
        .map_err(|e| NandrunError::Config(format!("failed to parse yaml: {}: {}", path, e)))?;
    Ok(profile)
}
