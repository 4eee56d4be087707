// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pattern library files.
//!
//! A pattern library lists custom chord shapes and scales by name, with
//! intervals written in their text form:
//!
//! ```yaml
//! chords:
//!   - name: sus4
//!     intervals: [P4, M2]
//! scales:
//!   - name: hungarian_minor
//!     intervals: [M2, m2, A2, m2, m2, A2, m2]
//! ```
//!
//! YAML is the default format; files ending in `.toml` are read as TOML.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::music::{PatternDefinition, PatternRegistry};

/// Root of a pattern library file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PatternFile {
    /// Custom chord shapes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub chords: Vec<PatternDefinition>,
    /// Custom scales
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scales: Vec<PatternDefinition>,
}

impl PatternFile {
    /// Load a pattern library, picking the format from the file extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read pattern file: {:?}", path))?;
        let file = if is_toml(path) {
            Self::from_toml(&contents)
        } else {
            Self::from_yaml(&contents)
        }
        .with_context(|| format!("Invalid pattern file: {:?}", path))?;
        info!(
            path = %path.display(),
            chords = file.chords.len(),
            scales = file.scales.len(),
            "loaded pattern library"
        );
        Ok(file)
    }

    /// Parse a pattern library from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML pattern library")
    }

    /// Parse a pattern library from TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML pattern library")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize pattern library to YAML")
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize pattern library to TOML")
    }

    /// Save the library, in TOML for `.toml` paths and YAML otherwise
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let text = if is_toml(path) {
            self.to_toml()?
        } else {
            self.to_yaml()?
        };
        fs::write(path, text).with_context(|| format!("Failed to write pattern file: {:?}", path))
    }

    /// Register every definition in a fresh registry
    pub fn into_registry(self) -> Result<PatternRegistry> {
        let mut registry = PatternRegistry::new();
        for def in self.chords {
            let name = def.name.clone();
            registry
                .register_chord(def)
                .with_context(|| format!("Invalid chord definition '{}'", name))?;
        }
        for def in self.scales {
            let name = def.name.clone();
            registry
                .register_scale(def)
                .with_context(|| format!("Invalid scale definition '{}'", name))?;
        }
        Ok(registry)
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}
