// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Intervals as quality + generic size.
//!
//! An interval is stored without the notes on either end. Sizes count
//! letters inclusively (1 = unison, 8 = octave, above 8 = compound), and
//! the quality inflects that size chromatically.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::lookup::TwoWayMap;
use crate::error::{TheoryError, TheoryResult};

/// Semitones per octave
pub const SEMITONES_PER_OCTAVE: i32 = 12;

/// Simple sizes (1-7) to semitones above the lower note
static SIZE_VALUES: LazyLock<TwoWayMap<u32, i32>> =
    LazyLock::new(|| TwoWayMap::new([(1, 0), (2, 2), (3, 4), (4, 5), (5, 7), (6, 9), (7, 11)]));

/// Perfect qualities and how far they move the size
static PERFECT_QUALITY_VALUES: LazyLock<TwoWayMap<Quality, i32>> = LazyLock::new(|| {
    TwoWayMap::new([
        (Quality::Perfect, 0),
        (Quality::Augmented, 1),
        (Quality::Diminished, -1),
    ])
});

/// Imperfect qualities and how far they move the size
static IMPERFECT_QUALITY_VALUES: LazyLock<TwoWayMap<Quality, i32>> = LazyLock::new(|| {
    TwoWayMap::new([
        (Quality::Diminished, -2),
        (Quality::Minor, -1),
        (Quality::Major, 0),
        (Quality::Augmented, 1),
    ])
});

/// Interval quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quality {
    Perfect,
    Major,
    Minor,
    Augmented,
    Diminished,
}

impl Quality {
    /// Resolution order when naming an imperfect size
    pub const IMPERFECT_ORDER: [Quality; 4] = [
        Quality::Major,
        Quality::Minor,
        Quality::Augmented,
        Quality::Diminished,
    ];

    /// Resolution order when naming a perfect size
    pub const PERFECT_ORDER: [Quality; 3] =
        [Quality::Perfect, Quality::Diminished, Quality::Augmented];

    /// Single-character symbol used in interval strings
    pub fn symbol(self) -> char {
        match self {
            Quality::Perfect => 'P',
            Quality::Major => 'M',
            Quality::Minor => 'm',
            Quality::Augmented => 'A',
            Quality::Diminished => 'd',
        }
    }

    /// Parse a quality symbol (case-sensitive: `M` is major, `m` is minor)
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'P' => Some(Quality::Perfect),
            'M' => Some(Quality::Major),
            'm' => Some(Quality::Minor),
            'A' => Some(Quality::Augmented),
            'd' => Some(Quality::Diminished),
            _ => None,
        }
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            Quality::Perfect => "perfect",
            Quality::Major => "major",
            Quality::Minor => "minor",
            Quality::Augmented => "augmented",
            Quality::Diminished => "diminished",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A musical interval such as `m3`, `P5` or `A11`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Interval {
    quality: Quality,
    size: u32,
}

impl Interval {
    pub const PERFECT_UNISON: Interval = Interval::known(Quality::Perfect, 1);
    pub const MINOR_SECOND: Interval = Interval::known(Quality::Minor, 2);
    pub const MAJOR_SECOND: Interval = Interval::known(Quality::Major, 2);
    pub const AUGMENTED_SECOND: Interval = Interval::known(Quality::Augmented, 2);
    pub const DIMINISHED_THIRD: Interval = Interval::known(Quality::Diminished, 3);
    pub const MINOR_THIRD: Interval = Interval::known(Quality::Minor, 3);
    pub const MAJOR_THIRD: Interval = Interval::known(Quality::Major, 3);
    pub const PERFECT_FOURTH: Interval = Interval::known(Quality::Perfect, 4);
    pub const PERFECT_FIFTH: Interval = Interval::known(Quality::Perfect, 5);
    pub const PERFECT_OCTAVE: Interval = Interval::known(Quality::Perfect, 8);

    /// Largest size accepted, so that [`Interval::semitones`] and note
    /// arithmetic on top of it stay within `i32`
    pub const MAX_SIZE: u32 = 1_000_000_000;

    /// Only for quality/size pairs known to be valid at compile time
    const fn known(quality: Quality, size: u32) -> Self {
        Self { quality, size }
    }

    /// Create an interval, checking the quality against the size class
    pub fn new(quality: Quality, size: u32) -> TheoryResult<Self> {
        if size == 0 {
            return Err(TheoryError::invalid("size", "An interval size starts at 1"));
        }
        if size > Self::MAX_SIZE {
            return Err(TheoryError::invalid(
                "size",
                format!("{} is wider than the largest interval ({})", size, Self::MAX_SIZE),
            ));
        }
        let valid = if Self::check_is_perfect_interval(size) {
            PERFECT_QUALITY_VALUES.get(&quality).is_some()
        } else {
            IMPERFECT_QUALITY_VALUES.get(&quality).is_some()
        };
        if !valid {
            return Err(TheoryError::invalid(
                "quality",
                format!("{} does not exist for this interval class", quality.name()),
            ));
        }
        Ok(Self { quality, size })
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }

    /// Generic size (1 = unison, 8 = octave)
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Whether a generic size is perfect (unison, fourth, fifth and their compounds)
    pub fn check_is_perfect_interval(size: u32) -> bool {
        matches!(size % 7, 1 | 4 | 5)
    }

    pub fn is_perfect_interval(&self) -> bool {
        Self::check_is_perfect_interval(self.size)
    }

    /// Whole octaves contained in the size, counting the octave itself as one
    fn octaves(&self) -> u32 {
        let size = self.size as i64;
        let remaining = size - 8;
        if remaining == 0 {
            1
        } else if remaining < 0 {
            0
        } else {
            1 + (remaining / 7) as u32
        }
    }

    /// Number of semitones spanned by the interval
    pub fn semitones(&self) -> i32 {
        let octaves = self.octaves();
        // (size + octaves) % 8 always lands on 1..=7
        let simple = SIZE_VALUES
            .get(&((self.size + octaves) % 8))
            .copied()
            .unwrap_or(0);
        let table = if self.is_perfect_interval() {
            &PERFECT_QUALITY_VALUES
        } else {
            &IMPERFECT_QUALITY_VALUES
        };
        let delta = table.get(&self.quality).copied().unwrap_or(0);
        octaves as i32 * SEMITONES_PER_OCTAVE + simple + delta
    }

    /// Compare exactly, or by semitone count when `enharmonic` is set
    pub fn equals(&self, other: &Interval, enharmonic: bool) -> bool {
        if enharmonic {
            self.is_enharmonic_to(other)
        } else {
            self == other
        }
    }

    /// Two intervals spanning the same number of semitones
    pub fn is_enharmonic_to(&self, other: &Interval) -> bool {
        self.semitones() == other.semitones()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.quality, self.size)
    }
}

impl FromStr for Interval {
    type Err = TheoryError;

    /// Parse `<quality><size>`, e.g. `"m3"`, `"P5"`, `"d24"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let symbol = chars
            .next()
            .ok_or_else(|| TheoryError::invalid("str", "The interval string is empty"))?;
        let digits = chars.as_str();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(TheoryError::invalid(
                "size",
                format!("'{}' is not a valid interval size", digits),
            ));
        }
        let size: u32 = digits
            .parse()
            .map_err(|_| TheoryError::invalid("size", format!("'{}' is too large", digits)))?;
        let quality = Quality::from_symbol(symbol).ok_or_else(|| {
            TheoryError::invalid("quality", format!("'{}' is not an interval quality", symbol))
        })?;
        Interval::new(quality, size)
    }
}

impl TryFrom<String> for Interval {
    type Error = TheoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Interval> for String {
    fn from(interval: Interval) -> Self {
        interval.to_string()
    }
}
