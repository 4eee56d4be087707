// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Spelled notes and the arithmetic between them.
//!
//! A note is a letter plus an accidental, optionally pinned to an octave.
//! Relative notes are pitch classes (0-11); absolute notes sit on one of
//! the 88 piano keys, counted from A0 = 0, so C0 = -9 and C8 = 87.
//!
//! Spelling matters: `C#` and `Db` have the same value but are different
//! notes, and interval arithmetic always preserves the letter distance.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::interval::{Interval, Quality, SEMITONES_PER_OCTAVE};
use super::lookup::TwoWayMap;
use crate::error::{TheoryError, TheoryResult};

/// Absolute position of C0 (A0 is position 0)
pub const C0_POSITION: i32 = -9;

/// Absolute position of C8, the top key of the piano
pub const C8_POSITION: i32 = 87;

/// Highest octave number an absolute note may carry
pub const MAX_OCTAVE: u8 = 8;

/// Letter -> semitone offset within an octave
static LETTER_VALUES: LazyLock<TwoWayMap<Letter, i32>> = LazyLock::new(|| {
    TwoWayMap::new([
        (Letter::C, 0),
        (Letter::D, 2),
        (Letter::E, 4),
        (Letter::F, 5),
        (Letter::G, 7),
        (Letter::A, 9),
        (Letter::B, 11),
    ])
});

/// Letter -> zero-based degree of the C major scale
static DEGREE_VALUES: LazyLock<TwoWayMap<Letter, i32>> =
    LazyLock::new(|| Letter::ALL.iter().copied().zip(0..).collect());

/// Accidental -> semitone delta
static ACCIDENTAL_VALUES: LazyLock<TwoWayMap<Accidental, i32>> = LazyLock::new(|| {
    TwoWayMap::new([
        (Accidental::Flat, -1),
        (Accidental::DoubleFlat, -2),
        (Accidental::TripleFlat, -3),
        (Accidental::Sharp, 1),
        (Accidental::DoubleSharp, 2),
        (Accidental::TripleSharp, 3),
        (Accidental::Natural, 0),
    ])
});

/// Note letter, like the white keys of a piano
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// All letters in diatonic order
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Semitone offset above C (0-11)
    pub fn offset(self) -> i32 {
        LETTER_VALUES.get(&self).copied().unwrap_or(0)
    }

    /// Zero-based degree (C = 0, B = 6)
    pub fn degree(self) -> i32 {
        DEGREE_VALUES.get(&self).copied().unwrap_or(0)
    }

    /// Letter whose offset is exactly `offset`, if any
    pub fn from_offset(offset: i32) -> Option<Self> {
        LETTER_VALUES.get_rev(&offset).copied()
    }

    /// Letter at a degree, wrapping every 7
    pub fn from_degree(degree: i32) -> Self {
        Letter::ALL[degree.rem_euclid(7) as usize]
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }

    /// Step a letter by a generic interval size.
    ///
    /// Sizes count inclusively: 1 (or -1) is the letter itself, 2 is the
    /// next letter up, -2 the next letter down. Zero is rejected.
    pub fn add(self, degree: i32) -> TheoryResult<Self> {
        if degree == 0 {
            return Err(TheoryError::invalid("degree", "Degree is invalid"));
        }
        let index = self.degree();
        if degree == 1 {
            return Ok(self);
        }
        if degree > 1 {
            return Ok(Letter::from_degree(index + (degree - 1) % 7));
        }
        // truncating remainder, so it lies in -6..=6
        let remainder = (index + degree) % 7;
        let target = if remainder > 0 {
            remainder + 1
        } else {
            remainder + 8
        };
        Ok(Letter::from_degree(target))
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Chromatic modifier applied to a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accidental {
    #[default]
    Natural,
    Sharp,
    Flat,
    DoubleSharp,
    TripleSharp,
    DoubleFlat,
    TripleFlat,
}

impl Accidental {
    /// Every accidental, in the order tried when spelling a note
    pub const RESOLUTION_ORDER: [Accidental; 7] = [
        Accidental::Natural,
        Accidental::Sharp,
        Accidental::Flat,
        Accidental::DoubleSharp,
        Accidental::DoubleFlat,
        Accidental::TripleSharp,
        Accidental::TripleFlat,
    ];

    /// Semitone delta (-3..=3)
    pub fn delta(self) -> i32 {
        ACCIDENTAL_VALUES.get(&self).copied().unwrap_or(0)
    }

    /// Accidental with exactly this delta, if any
    pub fn from_delta(delta: i32) -> Option<Self> {
        ACCIDENTAL_VALUES.get_rev(&delta).copied()
    }

    /// Textual symbol: `""`, `"#"`, `"b"`, `"x"`, `"#x"`, `"bb"`, `"bbb"`
    pub fn symbol(self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
            Accidental::DoubleSharp => "x",
            Accidental::TripleSharp => "#x",
            Accidental::DoubleFlat => "bb",
            Accidental::TripleFlat => "bbb",
        }
    }

    pub fn from_symbol(s: &str) -> Option<Self> {
        Accidental::RESOLUTION_ORDER
            .iter()
            .copied()
            .find(|a| a.symbol() == s)
    }

    /// English name
    pub fn name(self) -> &'static str {
        match self {
            Accidental::Natural => "natural",
            Accidental::Sharp => "sharp",
            Accidental::Flat => "flat",
            Accidental::DoubleSharp => "double sharp",
            Accidental::TripleSharp => "triple sharp",
            Accidental::DoubleFlat => "double flat",
            Accidental::TripleFlat => "triple flat",
        }
    }

    /// Alternative spelling: `##` for a double sharp, `n` for a natural
    pub fn alternative(self) -> &'static str {
        match self {
            Accidental::DoubleSharp => "##",
            Accidental::Natural => "n",
            other => other.symbol(),
        }
    }
}

impl fmt::Display for Accidental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A spelled note, either a pitch class or a pitch on the piano
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Note {
    /// Octave-agnostic pitch class, e.g. `C#`
    Relative { letter: Letter, accidental: Accidental },
    /// Pitch bound to an octave (0-8), e.g. `C#4`
    Absolute {
        letter: Letter,
        accidental: Accidental,
        octave: u8,
    },
}

impl Note {
    /// Create a relative note
    pub fn new(letter: Letter, accidental: Accidental) -> Self {
        Note::Relative { letter, accidental }
    }

    /// Create an absolute note, rejecting octaves above 8
    pub fn absolute(letter: Letter, accidental: Accidental, octave: u8) -> TheoryResult<Self> {
        if octave > MAX_OCTAVE {
            return Err(TheoryError::invalid("octave", "This is not a valid octave"));
        }
        Ok(Note::Absolute {
            letter,
            accidental,
            octave,
        })
    }

    pub fn letter(&self) -> Letter {
        match *self {
            Note::Relative { letter, .. } | Note::Absolute { letter, .. } => letter,
        }
    }

    pub fn accidental(&self) -> Accidental {
        match *self {
            Note::Relative { accidental, .. } | Note::Absolute { accidental, .. } => accidental,
        }
    }

    /// Octave of an absolute note, `None` for a relative one
    pub fn octave(&self) -> Option<u8> {
        match *self {
            Note::Relative { .. } => None,
            Note::Absolute { octave, .. } => Some(octave),
        }
    }

    pub fn is_absolute(&self) -> bool {
        matches!(self, Note::Absolute { .. })
    }

    pub fn is_relative(&self) -> bool {
        matches!(self, Note::Relative { .. })
    }

    /// Same spelling with the octave dropped
    pub fn to_relative(&self) -> Note {
        Note::new(self.letter(), self.accidental())
    }

    /// Same spelling pinned to `octave`
    pub fn with_octave(&self, octave: u8) -> TheoryResult<Note> {
        Note::absolute(self.letter(), self.accidental(), octave)
    }

    /// Whether all notes are relative, or all are absolute
    pub fn all_same_type(notes: &[Note]) -> bool {
        match notes.first() {
            None => true,
            Some(first) => notes.iter().all(|n| n.is_absolute() == first.is_absolute()),
        }
    }

    fn chroma(&self) -> i32 {
        self.letter().offset() + self.accidental().delta()
    }

    /// Position of the note.
    ///
    /// Relative notes wrap into 0..=11. Absolute notes do not wrap, so
    /// `B#3` has the same value as `C4` and `Cb4` the same as `B3`.
    pub fn value(&self) -> i32 {
        match *self {
            Note::Relative { .. } => self.chroma().rem_euclid(SEMITONES_PER_OCTAVE),
            Note::Absolute { octave, .. } => {
                C0_POSITION + octave as i32 * SEMITONES_PER_OCTAVE + self.chroma()
            }
        }
    }

    /// Half steps from this note to `other`.
    ///
    /// Absolute notes give the plain signed distance. For relative notes a
    /// downward result `d` is reported as `-(12 + d)`, so `F#` to `C` is -6.
    pub fn difference(&self, other: &Note) -> TheoryResult<i32> {
        match (self, other) {
            (Note::Relative { .. }, Note::Relative { .. }) => {
                let diff = other.value() - self.value();
                if diff < 0 {
                    Ok(-(SEMITONES_PER_OCTAVE + diff))
                } else {
                    Ok(diff)
                }
            }
            (Note::Absolute { .. }, Note::Absolute { .. }) => Ok(other.value() - self.value()),
            _ => Err(TheoryError::NotSameType),
        }
    }

    /// Build an absolute note from a piano position and the accidental it should carry.
    ///
    /// Fails with `ImpossibleQuality` if no letter spelled with `accidental`
    /// lands on `position`.
    pub fn from_absolute_position(position: i32, accidental: Accidental) -> TheoryResult<Note> {
        if !(C0_POSITION..=C8_POSITION).contains(&position) {
            return Err(TheoryError::OutOfRange { position });
        }
        let from_c0 = position - C0_POSITION;
        let mut octave = from_c0 / SEMITONES_PER_OCTAVE;
        let mut remainder = from_c0 % SEMITONES_PER_OCTAVE - accidental.delta();
        if remainder < 0 {
            remainder += SEMITONES_PER_OCTAVE;
            octave -= 1;
        } else if remainder >= SEMITONES_PER_OCTAVE {
            remainder -= SEMITONES_PER_OCTAVE;
            octave += 1;
        }
        let letter = Letter::from_offset(remainder).ok_or_else(|| {
            TheoryError::impossible(format!(
                "no note spelled with '{}' exists at position {}",
                accidental, position
            ))
        })?;
        // B#-1 style spellings carry below the bottom octave
        let octave = u8::try_from(octave).map_err(|_| TheoryError::OutOfRange { position })?;
        Note::absolute(letter, accidental, octave)
    }

    /// Add an interval, keeping the spelling implied by its size.
    ///
    /// The target letter comes from the size, then accidentals are tried in
    /// [`Accidental::RESOLUTION_ORDER`] until one lands on the right pitch.
    pub fn add_interval(&self, interval: &Interval) -> TheoryResult<Note> {
        let size = i32::try_from(interval.size())
            .map_err(|_| TheoryError::invalid("interval", "Interval is too wide"))?;
        let next_letter = self.letter().add(size)?;
        let semitones = interval.semitones();

        let base = match self {
            Note::Relative { .. } => self.value(),
            Note::Absolute { .. } => self.value() - C0_POSITION,
        };
        let target = (base + semitones).rem_euclid(SEMITONES_PER_OCTAVE);

        let accidental = Accidental::RESOLUTION_ORDER
            .iter()
            .copied()
            .find(|a| {
                (next_letter.offset() + a.delta()).rem_euclid(SEMITONES_PER_OCTAVE) == target
            })
            .ok_or_else(|| {
                TheoryError::impossible(format!(
                    "no accidental spells {} above {}",
                    interval, self
                ))
            })?;

        match self {
            Note::Relative { .. } => Ok(Note::new(next_letter, accidental)),
            Note::Absolute { .. } => {
                Note::from_absolute_position(self.value() + semitones, accidental)
            }
        }
    }

    /// Name the interval from this note up to `other`.
    ///
    /// The size comes from the letter distance plus any whole octaves
    /// between absolute notes; the quality is the first candidate whose
    /// semitone count matches.
    pub fn interval_between(&self, other: &Note) -> TheoryResult<Interval> {
        let difference = self.difference(other)?.abs();

        let mut relative_size = other.letter().degree() - self.letter().degree() + 1;
        if relative_size <= 0 {
            relative_size += 7;
        }
        let octaves = match self {
            Note::Absolute { .. } => difference / SEMITONES_PER_OCTAVE,
            Note::Relative { .. } => 0,
        };
        let size = match octaves {
            0 => relative_size,
            1 => 8 + relative_size - 1,
            _ => 8 + (octaves - 1) * 7 + (relative_size - 1),
        };
        let size = size as u32;

        let candidates: &[Quality] = if Interval::check_is_perfect_interval(size) {
            &Quality::PERFECT_ORDER
        } else {
            &Quality::IMPERFECT_ORDER
        };
        for &quality in candidates {
            let interval = Interval::new(quality, size)?;
            if interval.semitones() == difference {
                return Ok(interval);
            }
        }
        Err(TheoryError::impossible(format!(
            "interval from {} to {} is too wide for any quality, use an enharmonic spelling instead",
            self, other
        )))
    }

    /// Compare spelling and octave, or only the value when `enharmonic` is set.
    ///
    /// The enharmonic comparison does not check the note types.
    pub fn equals(&self, other: &Note, enharmonic: bool) -> bool {
        if enharmonic {
            self.value() == other.value()
        } else {
            self == other
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter(), self.accidental())?;
        if let Some(octave) = self.octave() {
            write!(f, "{}", octave)?;
        }
        Ok(())
    }
}

impl FromStr for Note {
    type Err = TheoryError;

    /// Parse `Letter[Accidental][Octave]`, e.g. `"C"`, `"F#"`, `"Cbb5"`, `"B#x2"`
    ///
    /// Accepted grammar: `^[A-G](#x|#|x|b+)?(\d)?$`. Runs of four or more
    /// flats match the grammar but have no accidental, and octave 9 is out
    /// of range.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let whole = || TheoryError::invalid("str", "The whole string representation is invalid");
        let mut chars: VecDeque<char> = s.chars().collect();

        let letter = chars
            .pop_front()
            .and_then(Letter::from_char)
            .ok_or_else(whole)?;

        let mut symbol = String::new();
        match chars.front() {
            Some('#') => {
                symbol.push('#');
                chars.pop_front();
                if chars.front() == Some(&'x') {
                    symbol.push('x');
                    chars.pop_front();
                }
            }
            Some('x') => {
                symbol.push('x');
                chars.pop_front();
            }
            Some('b') => {
                while chars.front() == Some(&'b') {
                    symbol.push('b');
                    chars.pop_front();
                }
            }
            _ => {}
        }

        let octave = match chars.pop_front() {
            None => None,
            Some(c) => Some(c.to_digit(10).ok_or_else(whole)? as u8),
        };
        if !chars.is_empty() {
            return Err(whole());
        }

        let accidental = Accidental::from_symbol(&symbol)
            .ok_or_else(|| TheoryError::invalid("accidental", "This is not a valid accidental"))?;
        match octave {
            None => Ok(Note::new(letter, accidental)),
            Some(octave) => Note::absolute(letter, accidental, octave),
        }
    }
}

impl TryFrom<String> for Note {
    type Error = TheoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Note> for String {
    fn from(note: Note) -> Self {
        note.to_string()
    }
}
