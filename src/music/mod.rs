// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory core.
//!
//! Notes, intervals, and the chords and scales built by stacking
//! intervals on a root note.

pub mod chord;
pub mod interval;
pub mod lookup;
pub mod note;
pub mod registry;
pub mod scale;
pub mod sequence;

pub use chord::{Chord, ChordEquality, ChordType};
pub use interval::{Interval, Quality, SEMITONES_PER_OCTAVE};
pub use lookup::TwoWayMap;
pub use note::{Accidental, Letter, Note, C0_POSITION, C8_POSITION, MAX_OCTAVE};
pub use registry::{PatternDefinition, PatternRegistry};
pub use scale::{Scale, ScaleType};
pub use sequence::{spell, NoteSequence};
