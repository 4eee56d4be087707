// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Named chord and scale patterns.
//!
//! Built-in shapes come from [`ChordType`] and [`ScaleType`]; custom
//! definitions (usually loaded from a pattern library file) are checked first.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::chord::{Chord, ChordType};
use super::interval::Interval;
use super::note::Note;
use super::scale::{Scale, ScaleType};
use crate::error::{TheoryError, TheoryResult};

/// A named list of intervals, written as `["M3", "m3"]` in pattern files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternDefinition {
    /// Name used for lookups
    pub name: String,
    /// Stacked intervals (chords) or steps (scales)
    pub intervals: Vec<Interval>,
}

impl PatternDefinition {
    pub fn new(name: impl Into<String>, intervals: impl Into<Vec<Interval>>) -> Self {
        Self {
            name: name.into(),
            intervals: intervals.into(),
        }
    }

    /// Build a chord on `root` from this definition
    pub fn to_chord(&self, root: Note) -> TheoryResult<Chord> {
        Chord::new(root, self.intervals.clone())
    }

    /// Build a scale on `root` from this definition
    pub fn to_scale(&self, root: Note) -> TheoryResult<Scale> {
        Scale::new(root, self.intervals.clone())
    }

    fn validate(&self) -> TheoryResult<()> {
        if self.name.trim().is_empty() {
            return Err(TheoryError::invalid("name", "A pattern needs a name"));
        }
        if self.intervals.is_empty() {
            return Err(TheoryError::invalid(
                "intervals",
                format!("Pattern '{}' has no intervals", self.name),
            ));
        }
        Ok(())
    }
}

/// Registry for custom chord and scale definitions
#[derive(Debug, Clone, Default)]
pub struct PatternRegistry {
    chords: HashMap<String, PatternDefinition>,
    scales: HashMap<String, PatternDefinition>,
}

impl PatternRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a custom chord shape
    pub fn register_chord(&mut self, def: PatternDefinition) -> TheoryResult<()> {
        def.validate()?;
        if ChordType::from_str(&def.name).is_some() {
            warn!(name = %def.name, "custom chord shadows a built-in chord type");
        }
        debug!(name = %def.name, intervals = def.intervals.len(), "registering chord");
        if let Some(old) = self.chords.insert(def.name.clone(), def) {
            warn!(name = %old.name, "replaced existing custom chord");
        }
        Ok(())
    }

    /// Register a custom scale
    pub fn register_scale(&mut self, def: PatternDefinition) -> TheoryResult<()> {
        def.validate()?;
        if ScaleType::from_str(&def.name).is_some() {
            warn!(name = %def.name, "custom scale shadows a built-in scale type");
        }
        debug!(name = %def.name, steps = def.intervals.len(), "registering scale");
        if let Some(old) = self.scales.insert(def.name.clone(), def) {
            warn!(name = %old.name, "replaced existing custom scale");
        }
        Ok(())
    }

    /// Get a chord by name (checks custom first, then built-in)
    pub fn chord(&self, root: Note, name: &str) -> TheoryResult<Chord> {
        if let Some(def) = self.chords.get(name) {
            return def.to_chord(root);
        }
        match ChordType::from_str(name) {
            Some(chord_type) => Chord::from_type(root, chord_type),
            None => Err(TheoryError::invalid(
                "chord",
                format!("'{}' is not a known chord", name),
            )),
        }
    }

    /// Get a scale by name (checks custom first, then built-in)
    pub fn scale(&self, root: Note, name: &str) -> TheoryResult<Scale> {
        if let Some(def) = self.scales.get(name) {
            return def.to_scale(root);
        }
        match ScaleType::from_str(name) {
            Some(scale_type) => Scale::from_type(root, scale_type),
            None => Err(TheoryError::invalid(
                "scale",
                format!("'{}' is not a known scale", name),
            )),
        }
    }

    /// List all available chord names, sorted
    pub fn available_chords(&self) -> Vec<String> {
        let mut names: Vec<String> = self.chords.keys().cloned().collect();
        names.extend(ChordType::ALL.iter().map(|t| t.key().to_string()));
        names.sort();
        names.dedup();
        names
    }

    /// List all available scale names, sorted
    pub fn available_scales(&self) -> Vec<String> {
        let mut names: Vec<String> = self.scales.keys().cloned().collect();
        names.extend(ScaleType::ALL.iter().map(|t| t.key().to_string()));
        names.sort();
        names.dedup();
        names
    }

    pub fn custom_chord_count(&self) -> usize {
        self.chords.len()
    }

    pub fn custom_scale_count(&self) -> usize {
        self.scales.len()
    }
}
