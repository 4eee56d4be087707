// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Western music theory primitives.
//!
//! Notes (relative pitch classes or absolute piano keys), intervals with
//! quality and size, and the chords and scales spelled from them.
//!
//! ```
//! use theory::{Chord, Note};
//!
//! let root: Note = "Eb4".parse().unwrap();
//! let chord = Chord::new(root, Chord::MAJOR_TRIAD).unwrap();
//! assert_eq!(chord.to_string(), "Eb4 G4 Bb4");
//! ```

pub mod config;
pub mod error;
pub mod music;

pub use config::PatternFile;
pub use error::{TheoryError, TheoryResult};
pub use music::{
    Accidental, Chord, ChordEquality, ChordType, Interval, Letter, Note, NoteSequence,
    PatternDefinition, PatternRegistry, Quality, Scale, ScaleType,
};
