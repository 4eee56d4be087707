// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale definitions built from a root and a step pattern.
//!
//! Provides the major scale and its modes plus a few other common
//! patterns, note-to-scale-degree mapping, and spelled note output.

use std::fmt;
use std::slice;

use serde::{Deserialize, Serialize};

use super::interval::Interval;
use super::note::Note;
use super::sequence::{spell, NoteSequence};
use crate::error::{TheoryError, TheoryResult};

const W: Interval = Interval::MAJOR_SECOND;
const H: Interval = Interval::MINOR_SECOND;
const AUG2: Interval = Interval::AUGMENTED_SECOND;
const MIN3: Interval = Interval::MINOR_THIRD;
const DIM3: Interval = Interval::DIMINISHED_THIRD;

/// Scale types supported by the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleType {
    // Major scale and modes
    Major,      // Ionian
    Dorian,     // Minor with raised 6th
    Phrygian,   // Minor with lowered 2nd
    Lydian,     // Major with raised 4th
    Mixolydian, // Major with lowered 7th
    Minor,      // Aeolian
    Locrian,    // Diminished

    // Other minor scales
    HarmonicMinor,
    MelodicMinor, // Ascending form

    // Pentatonic scales
    MajorPentatonic,
    MinorPentatonic,

    WholeTone,
}

impl ScaleType {
    pub const ALL: [ScaleType; 12] = [
        ScaleType::Major,
        ScaleType::Dorian,
        ScaleType::Phrygian,
        ScaleType::Lydian,
        ScaleType::Mixolydian,
        ScaleType::Minor,
        ScaleType::Locrian,
        ScaleType::HarmonicMinor,
        ScaleType::MelodicMinor,
        ScaleType::MajorPentatonic,
        ScaleType::MinorPentatonic,
        ScaleType::WholeTone,
    ];

    /// Step pattern for this scale type, closing at the octave
    pub fn intervals(self) -> &'static [Interval] {
        match self {
            ScaleType::Major => Scale::MAJOR,
            ScaleType::Dorian => Scale::DORIAN,
            ScaleType::Phrygian => Scale::PHRYGIAN,
            ScaleType::Lydian => Scale::LYDIAN,
            ScaleType::Mixolydian => Scale::MIXOLYDIAN,
            ScaleType::Minor => Scale::MINOR,
            ScaleType::Locrian => Scale::LOCRIAN,
            ScaleType::HarmonicMinor => Scale::HARMONIC_MINOR,
            ScaleType::MelodicMinor => Scale::MELODIC_MINOR,
            ScaleType::MajorPentatonic => Scale::MAJOR_PENTATONIC,
            ScaleType::MinorPentatonic => Scale::MINOR_PENTATONIC,
            ScaleType::WholeTone => Scale::WHOLE_TONE,
        }
    }

    /// Parse scale type from string
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase().replace([' ', '-', '_'], "");
        match s.as_str() {
            "major" | "ionian" => Some(ScaleType::Major),
            "dorian" => Some(ScaleType::Dorian),
            "phrygian" => Some(ScaleType::Phrygian),
            "lydian" => Some(ScaleType::Lydian),
            "mixolydian" => Some(ScaleType::Mixolydian),
            "minor" | "naturalminor" | "aeolian" => Some(ScaleType::Minor),
            "locrian" => Some(ScaleType::Locrian),
            "harmonicminor" => Some(ScaleType::HarmonicMinor),
            "melodicminor" => Some(ScaleType::MelodicMinor),
            "majorpentatonic" | "pentatonicmajor" => Some(ScaleType::MajorPentatonic),
            "minorpentatonic" | "pentatonicminor" | "pentatonic" => Some(ScaleType::MinorPentatonic),
            "wholetone" => Some(ScaleType::WholeTone),
            _ => None,
        }
    }

    /// Identifier used in configuration files and the registry
    pub fn key(self) -> &'static str {
        match self {
            ScaleType::Major => "major",
            ScaleType::Dorian => "dorian",
            ScaleType::Phrygian => "phrygian",
            ScaleType::Lydian => "lydian",
            ScaleType::Mixolydian => "mixolydian",
            ScaleType::Minor => "minor",
            ScaleType::Locrian => "locrian",
            ScaleType::HarmonicMinor => "harmonic_minor",
            ScaleType::MelodicMinor => "melodic_minor",
            ScaleType::MajorPentatonic => "major_pentatonic",
            ScaleType::MinorPentatonic => "minor_pentatonic",
            ScaleType::WholeTone => "whole_tone",
        }
    }

    /// Get a human-readable name for this scale type
    pub fn name(self) -> &'static str {
        match self {
            ScaleType::Major => "Major",
            ScaleType::Dorian => "Dorian",
            ScaleType::Phrygian => "Phrygian",
            ScaleType::Lydian => "Lydian",
            ScaleType::Mixolydian => "Mixolydian",
            ScaleType::Minor => "Natural Minor",
            ScaleType::Locrian => "Locrian",
            ScaleType::HarmonicMinor => "Harmonic Minor",
            ScaleType::MelodicMinor => "Melodic Minor",
            ScaleType::MajorPentatonic => "Major Pentatonic",
            ScaleType::MinorPentatonic => "Minor Pentatonic",
            ScaleType::WholeTone => "Whole Tone",
        }
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A scale: a root and the steps between consecutive scale notes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scale {
    root: Note,
    configuration: Vec<Interval>,
    notes: Vec<Note>,
}

impl Scale {
    pub const MAJOR: &'static [Interval] = &[W, W, H, W, W, W, H];
    pub const DORIAN: &'static [Interval] = &[W, H, W, W, W, H, W];
    pub const PHRYGIAN: &'static [Interval] = &[H, W, W, W, H, W, W];
    pub const LYDIAN: &'static [Interval] = &[W, W, W, H, W, W, H];
    pub const MIXOLYDIAN: &'static [Interval] = &[W, W, H, W, W, H, W];
    pub const MINOR: &'static [Interval] = &[W, H, W, W, H, W, W];
    pub const LOCRIAN: &'static [Interval] = &[H, W, W, H, W, W, W];
    pub const HARMONIC_MINOR: &'static [Interval] = &[W, H, W, W, H, AUG2, H];
    pub const MELODIC_MINOR: &'static [Interval] = &[W, H, W, W, W, W, H];
    pub const MAJOR_PENTATONIC: &'static [Interval] = &[W, W, MIN3, W, MIN3];
    pub const MINOR_PENTATONIC: &'static [Interval] = &[MIN3, W, W, MIN3, W];
    pub const WHOLE_TONE: &'static [Interval] = &[W, W, W, W, W, DIM3];

    /// Create a scale from a root and its step pattern
    pub fn new(root: Note, configuration: impl Into<Vec<Interval>>) -> TheoryResult<Self> {
        let configuration = configuration.into();
        if configuration.is_empty() {
            return Err(TheoryError::invalid(
                "configuration",
                "A scale needs at least one step",
            ));
        }
        let notes = spell(root, &configuration)?;
        Ok(Self {
            root,
            configuration,
            notes,
        })
    }

    /// Create a scale from root and type
    pub fn from_type(root: Note, scale_type: ScaleType) -> TheoryResult<Self> {
        Self::new(root, scale_type.intervals())
    }

    /// Parse a scale from strings (e.g., "C", "major")
    pub fn parse(root_str: &str, scale_str: &str) -> TheoryResult<Self> {
        let root: Note = root_str.parse()?;
        let scale_type = ScaleType::from_str(scale_str).ok_or_else(|| {
            TheoryError::invalid("scale", format!("'{}' is not a known scale type", scale_str))
        })?;
        Self::from_type(root, scale_type)
    }

    /// Get the root note
    pub fn root(&self) -> Note {
        self.root
    }

    /// Get the step pattern
    pub fn configuration(&self) -> &[Interval] {
        &self.configuration
    }

    /// Get the notes in this scale, including the closing note
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn iter(&self) -> slice::Iter<'_, Note> {
        self.notes.iter()
    }

    /// Regenerate the notes lazily from the root
    pub fn sequence(&self) -> NoteSequence<'_> {
        NoteSequence::new(self.root, &self.configuration)
    }

    /// Get the number of notes in this scale
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Check if this scale is empty (shouldn't happen normally)
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Check if a note is in this scale, ignoring octaves
    pub fn contains(&self, note: &Note, enharmonic: bool) -> bool {
        let wanted = note.to_relative();
        self.notes
            .iter()
            .any(|n| n.to_relative().equals(&wanted, enharmonic))
    }

    /// Get the scale degree (1-based) for a note, if it's in the scale
    pub fn degree_of(&self, note: &Note) -> Option<usize> {
        let wanted = note.to_relative();
        self.notes
            .iter()
            .position(|n| n.to_relative() == wanted)
            .map(|i| i + 1)
    }

    /// Get the note at a given scale degree (1-based)
    pub fn note_at_degree(&self, degree: usize) -> Option<Note> {
        if degree == 0 || degree > self.len() {
            return None;
        }
        Some(self.notes[degree - 1])
    }

    /// Compare root and step pattern
    pub fn equals(&self, other: &Scale) -> bool {
        self.root == other.root && self.configuration == other.configuration
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, note) in self.notes.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", note)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Scale {
    type Item = &'a Note;
    type IntoIter = slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(s: &str) -> Note {
        s.parse().unwrap()
    }

    fn scale(root: &str, configuration: &[Interval]) -> String {
        Scale::new(n(root), configuration).unwrap().to_string()
    }

    #[test]
    fn test_new_keeps_root_and_configuration() {
        let s = Scale::new(n("A"), [Interval::MAJOR_SECOND]).unwrap();
        assert_eq!(s.root(), n("A"));
        assert_eq!(s.configuration(), &[Interval::MAJOR_SECOND]);
        assert_eq!(s.notes(), &[n("A"), n("B")]);
    }

    #[test]
    fn test_empty_configuration_rejected() {
        assert!(matches!(
            Scale::new(n("F#"), Vec::<Interval>::new()),
            Err(TheoryError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_major() {
        assert_eq!(scale("A", Scale::MAJOR), "A B C# D E F# G# A");
        assert_eq!(scale("C#", Scale::MAJOR), "C# D# E# F# G# A# B# C#");
    }

    #[test]
    fn test_dorian() {
        assert_eq!(scale("Bb", Scale::DORIAN), "Bb C Db Eb F G Ab Bb");
        assert_eq!(scale("F#", Scale::DORIAN), "F# G# A B C# D# E F#");
    }

    #[test]
    fn test_phrygian() {
        assert_eq!(scale("G", Scale::PHRYGIAN), "G Ab Bb C D Eb F G");
        assert_eq!(scale("Ab", Scale::PHRYGIAN), "Ab Bbb Cb Db Eb Fb Gb Ab");
    }

    #[test]
    fn test_lydian() {
        assert_eq!(scale("E", Scale::LYDIAN), "E F# G# A# B C# D# E");
        assert_eq!(scale("Db", Scale::LYDIAN), "Db Eb F G Ab Bb C Db");
    }

    #[test]
    fn test_mixolydian() {
        assert_eq!(scale("F", Scale::MIXOLYDIAN), "F G A Bb C D Eb F");
        assert_eq!(scale("C#", Scale::MIXOLYDIAN), "C# D# E# F# G# A# B C#");
    }

    #[test]
    fn test_minor() {
        assert_eq!(scale("A", Scale::MINOR), "A B C D E F G A");
        assert_eq!(scale("C#", Scale::MINOR), "C# D# E F# G# A B C#");
    }

    #[test]
    fn test_locrian() {
        assert_eq!(scale("Cb", Scale::LOCRIAN), "Cb Dbb Ebb Fb Gbb Abb Bbb Cb");
        assert_eq!(scale("G", Scale::LOCRIAN), "G Ab Bb C Db Eb F G");
    }

    #[test]
    fn test_other_scales() {
        assert_eq!(scale("A", Scale::HARMONIC_MINOR), "A B C D E F G# A");
        assert_eq!(scale("C", Scale::MELODIC_MINOR), "C D Eb F G A B C");
        assert_eq!(scale("C", Scale::MAJOR_PENTATONIC), "C D E G A C");
        assert_eq!(scale("A", Scale::MINOR_PENTATONIC), "A C D E G A");
        assert_eq!(scale("C", Scale::WHOLE_TONE), "C D E F# G# A# C");
    }

    #[test]
    fn test_absolute_scale_closes_an_octave_up() {
        assert_eq!(scale("G3", Scale::MAJOR), "G3 A3 B3 C4 D4 E4 F#4 G4");
    }

    #[test]
    fn test_equals() {
        let eb_major = Scale::new(n("Eb"), Scale::MAJOR).unwrap();
        assert!(eb_major.equals(&Scale::new(n("Eb"), Scale::MAJOR).unwrap()));
        assert!(!Scale::new(n("Eb"), Scale::LOCRIAN)
            .unwrap()
            .equals(&Scale::new(n("Eb"), Scale::MINOR).unwrap()));
        assert!(!Scale::new(n("Fb"), Scale::MINOR)
            .unwrap()
            .equals(&Scale::new(n("E"), Scale::MINOR).unwrap()));
    }

    #[test]
    fn test_scale_type_from_str() {
        assert_eq!(ScaleType::from_str("major"), Some(ScaleType::Major));
        assert_eq!(ScaleType::from_str("Minor"), Some(ScaleType::Minor));
        assert_eq!(ScaleType::from_str("aeolian"), Some(ScaleType::Minor));
        assert_eq!(ScaleType::from_str("harmonic_minor"), Some(ScaleType::HarmonicMinor));
        assert_eq!(ScaleType::from_str("unknown"), None);
        for scale_type in ScaleType::ALL {
            assert_eq!(ScaleType::from_str(scale_type.key()), Some(scale_type));
        }
    }

    #[test]
    fn test_scale_contains() {
        let c_major = Scale::from_type(n("C"), ScaleType::Major).unwrap();
        assert!(c_major.contains(&n("C"), false));
        assert!(c_major.contains(&n("G4"), false));
        assert!(!c_major.contains(&n("C#"), false));
        assert!(!c_major.contains(&n("B#"), false));
        assert!(c_major.contains(&n("B#"), true));
    }

    #[test]
    fn test_scale_degree() {
        let c_major = Scale::from_type(n("C"), ScaleType::Major).unwrap();
        assert_eq!(c_major.degree_of(&n("C")), Some(1));
        assert_eq!(c_major.degree_of(&n("E")), Some(3));
        assert_eq!(c_major.degree_of(&n("B")), Some(7));
        assert_eq!(c_major.degree_of(&n("F#")), None);
    }

    #[test]
    fn test_scale_note_at_degree() {
        let c_major = Scale::from_type(n("C"), ScaleType::Major).unwrap();
        assert_eq!(c_major.note_at_degree(1), Some(n("C")));
        assert_eq!(c_major.note_at_degree(5), Some(n("G")));
        assert_eq!(c_major.note_at_degree(8), Some(n("C")));
        assert_eq!(c_major.note_at_degree(0), None);
        assert_eq!(c_major.note_at_degree(9), None);
    }

    #[test]
    fn test_parse_scale() {
        assert_eq!(
            Scale::parse("D", "dorian").unwrap().to_string(),
            "D E F G A B C D"
        );
        assert!(Scale::parse("D", "bebop").is_err());
    }
}
