// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chords as a root plus stacked intervals.
//!
//! Each interval is the step from one chord tone to the next, so a chord
//! with `n` intervals has `n + 1` notes. Provides the common triad and
//! seventh shapes, inversion, and equality with optional enharmonic and
//! inversion relaxation.

use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::slice;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::interval::{Interval, SEMITONES_PER_OCTAVE};
use super::note::{Note, MAX_OCTAVE};
use super::sequence::{spell, NoteSequence};
use crate::error::{TheoryError, TheoryResult};

const M3: Interval = Interval::MAJOR_THIRD;
const MIN3: Interval = Interval::MINOR_THIRD;

/// Built-in chord shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordType {
    MajorTriad,
    MinorTriad,
    DiminishedTriad,
    MajorSeventh,
    MinorSeventh,
    DominantSeventh,
    DiminishedSeventh,
    HalfDiminishedSeventh,
}

impl ChordType {
    pub const ALL: [ChordType; 8] = [
        ChordType::MajorTriad,
        ChordType::MinorTriad,
        ChordType::DiminishedTriad,
        ChordType::MajorSeventh,
        ChordType::MinorSeventh,
        ChordType::DominantSeventh,
        ChordType::DiminishedSeventh,
        ChordType::HalfDiminishedSeventh,
    ];

    /// Stacked intervals for this shape
    pub fn intervals(self) -> &'static [Interval] {
        match self {
            ChordType::MajorTriad => Chord::MAJOR_TRIAD,
            ChordType::MinorTriad => Chord::MINOR_TRIAD,
            ChordType::DiminishedTriad => Chord::DIMINISHED_TRIAD,
            ChordType::MajorSeventh => Chord::MAJOR_SEVENTH,
            ChordType::MinorSeventh => Chord::MINOR_SEVENTH,
            ChordType::DominantSeventh => Chord::DOMINANT_SEVENTH,
            ChordType::DiminishedSeventh => Chord::DIMINISHED_SEVENTH,
            ChordType::HalfDiminishedSeventh => Chord::HALF_DIMINISHED_SEVENTH,
        }
    }

    /// Parse chord type from string
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase().replace([' ', '-', '_'], "");
        match s.as_str() {
            "major" | "majortriad" | "maj" => Some(ChordType::MajorTriad),
            "minor" | "minortriad" | "min" => Some(ChordType::MinorTriad),
            "diminished" | "diminishedtriad" | "dim" => Some(ChordType::DiminishedTriad),
            "majorseventh" | "maj7" => Some(ChordType::MajorSeventh),
            "minorseventh" | "min7" | "m7" => Some(ChordType::MinorSeventh),
            "dominantseventh" | "dominant" | "7" => Some(ChordType::DominantSeventh),
            "diminishedseventh" | "dim7" => Some(ChordType::DiminishedSeventh),
            "halfdiminishedseventh" | "halfdiminished" | "m7b5" => {
                Some(ChordType::HalfDiminishedSeventh)
            }
            _ => None,
        }
    }

    /// Identifier used in configuration files and the registry
    pub fn key(self) -> &'static str {
        match self {
            ChordType::MajorTriad => "major_triad",
            ChordType::MinorTriad => "minor_triad",
            ChordType::DiminishedTriad => "diminished_triad",
            ChordType::MajorSeventh => "major_seventh",
            ChordType::MinorSeventh => "minor_seventh",
            ChordType::DominantSeventh => "dominant_seventh",
            ChordType::DiminishedSeventh => "diminished_seventh",
            ChordType::HalfDiminishedSeventh => "half_diminished_seventh",
        }
    }

    /// Get a human-readable name for this chord type
    pub fn name(self) -> &'static str {
        match self {
            ChordType::MajorTriad => "Major Triad",
            ChordType::MinorTriad => "Minor Triad",
            ChordType::DiminishedTriad => "Diminished Triad",
            ChordType::MajorSeventh => "Major Seventh",
            ChordType::MinorSeventh => "Minor Seventh",
            ChordType::DominantSeventh => "Dominant Seventh",
            ChordType::DiminishedSeventh => "Diminished Seventh",
            ChordType::HalfDiminishedSeventh => "Half-Diminished Seventh",
        }
    }
}

impl fmt::Display for ChordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// How strictly two chords are compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChordEquality {
    /// Compare notes and intervals by sound instead of spelling
    pub enharmonic: bool,
    /// Compare the chords' pitch classes regardless of order or octave
    pub ignore_inversion: bool,
}

impl ChordEquality {
    /// Ordered comparison of root and intervals by spelling
    pub fn exact() -> Self {
        Self::default()
    }

    pub fn enharmonic(mut self) -> Self {
        self.enharmonic = true;
        self
    }

    pub fn ignore_inversion(mut self) -> Self {
        self.ignore_inversion = true;
        self
    }
}

#[derive(Debug, PartialEq, Eq, Hash)]
enum PitchKey {
    Spelled(Note),
    Value(i32),
}

/// A chord: a root and the intervals stacked above it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord {
    root: Note,
    intervals: Vec<Interval>,
    notes: Vec<Note>,
}

impl Chord {
    pub const MAJOR_TRIAD: &'static [Interval] = &[M3, MIN3];
    pub const MINOR_TRIAD: &'static [Interval] = &[MIN3, M3];
    pub const DIMINISHED_TRIAD: &'static [Interval] = &[MIN3, MIN3];
    pub const MAJOR_SEVENTH: &'static [Interval] = &[M3, MIN3, M3];
    pub const MINOR_SEVENTH: &'static [Interval] = &[MIN3, M3, MIN3];
    pub const DOMINANT_SEVENTH: &'static [Interval] = &[M3, MIN3, MIN3];
    pub const DIMINISHED_SEVENTH: &'static [Interval] = &[MIN3, MIN3, MIN3];
    pub const HALF_DIMINISHED_SEVENTH: &'static [Interval] = &[MIN3, MIN3, M3];

    /// Create a chord from its root and stacked intervals.
    ///
    /// At least one interval is required. Every note is spelled up front,
    /// so intervals that cannot be spelled from this root are rejected here.
    pub fn new(root: Note, intervals: impl Into<Vec<Interval>>) -> TheoryResult<Self> {
        let intervals = intervals.into();
        if intervals.is_empty() {
            return Err(TheoryError::invalid(
                "intervals",
                "A chord must have at least two notes!",
            ));
        }
        let notes = spell(root, &intervals)?;
        Ok(Self {
            root,
            intervals,
            notes,
        })
    }

    /// Create a chord of a built-in shape
    pub fn from_type(root: Note, chord_type: ChordType) -> TheoryResult<Self> {
        Self::new(root, chord_type.intervals())
    }

    /// Parse a chord from strings (e.g., "C", "major")
    pub fn parse(root_str: &str, type_str: &str) -> TheoryResult<Self> {
        let root: Note = root_str.parse()?;
        let chord_type = ChordType::from_str(type_str).ok_or_else(|| {
            TheoryError::invalid("chord", format!("'{}' is not a known chord type", type_str))
        })?;
        Self::from_type(root, chord_type)
    }

    pub fn root(&self) -> Note {
        self.root
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Notes from the root upwards
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn iter(&self) -> slice::Iter<'_, Note> {
        self.notes.iter()
    }

    /// Regenerate the notes lazily from the root
    pub fn sequence(&self) -> NoteSequence<'_> {
        NoteSequence::new(self.root, &self.intervals)
    }

    /// Number of notes (always at least two)
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Invert the chord `times` times.
    ///
    /// Each inversion moves the lowest note to the top. Absolute notes are
    /// raised by whole octaves until they sit above the current top note.
    /// The intervals are then re-derived from the rotated notes; `self` is
    /// left untouched.
    pub fn invert(&self, times: usize) -> TheoryResult<Chord> {
        debug!(chord = %self, times, "inverting chord");
        let mut notes: VecDeque<Note> = self.notes.iter().copied().collect();

        for _ in 0..times {
            let Some(mut note) = notes.pop_front() else {
                break;
            };
            if let (Some(octave), Some(top)) = (note.octave(), notes.back()) {
                let diff = top.difference(&note)?;
                if diff < 0 {
                    let raise = diff.unsigned_abs().div_ceil(SEMITONES_PER_OCTAVE as u32);
                    let raised = u32::from(octave) + raise;
                    if raised > u32::from(MAX_OCTAVE) {
                        return Err(TheoryError::OutOfRange {
                            position: note.value() + (raise as i32) * SEMITONES_PER_OCTAVE,
                        });
                    }
                    note = note.with_octave(raised as u8)?;
                    debug!(note = %note, raise, "raised rotated note");
                }
            }
            notes.push_back(note);
        }

        let intervals = notes
            .iter()
            .zip(notes.iter().skip(1))
            .map(|(low, high)| low.interval_between(high))
            .collect::<TheoryResult<Vec<_>>>()?;
        Chord::new(notes[0], intervals)
    }

    /// Compare two chords.
    ///
    /// By default the root and each interval must match in order. With
    /// `ignore_inversion` the full note lists are compared as multisets with
    /// octaves stripped; with `enharmonic` spellings that sound the same match.
    pub fn equals(&self, other: &Chord, options: ChordEquality) -> bool {
        if options.ignore_inversion {
            return self.notes.len() == other.notes.len()
                && pitch_counts(&self.notes, options.enharmonic)
                    == pitch_counts(&other.notes, options.enharmonic);
        }
        self.root.equals(&other.root, options.enharmonic)
            && self.intervals.len() == other.intervals.len()
            && self
                .intervals
                .iter()
                .zip(&other.intervals)
                .all(|(a, b)| a.equals(b, options.enharmonic))
    }
}

fn pitch_counts(notes: &[Note], enharmonic: bool) -> HashMap<PitchKey, usize> {
    let mut counts = HashMap::new();
    for note in notes {
        let relative = note.to_relative();
        let key = if enharmonic {
            PitchKey::Value(relative.value())
        } else {
            PitchKey::Spelled(relative)
        };
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

impl fmt::Display for Chord {
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

impl<'a> IntoIterator for &'a Chord {
    type Item = &'a Note;
    type IntoIter = slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}
