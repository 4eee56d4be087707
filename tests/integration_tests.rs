// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Integration tests for the theory crate
//!
//! These tests exercise the public API across notes, intervals, chords,
//! scales and pattern library files.

use std::fs;

use theory::music::{C0_POSITION, C8_POSITION};
use theory::{
    Accidental, Chord, ChordEquality, ChordType, Interval, Letter, Note, PatternDefinition,
    PatternFile, Scale, ScaleType, TheoryError,
};

fn n(s: &str) -> Note {
    s.parse().unwrap()
}

fn iv(s: &str) -> Interval {
    s.parse().unwrap()
}

#[test]
fn test_absolute_position_round_trip() {
    let mut resolved = 0;
    for position in C0_POSITION..=C8_POSITION {
        for accidental in Accidental::RESOLUTION_ORDER {
            if let Ok(note) = Note::from_absolute_position(position, accidental) {
                assert_eq!(note.value(), position, "{} at {}", note, position);
                assert_eq!(note.accidental(), accidental);
                resolved += 1;
            }
        }
    }
    // every white and black key resolves with at least one accidental
    assert!(resolved > (C8_POSITION - C0_POSITION) as usize);
}

#[test]
fn test_every_natural_resolves() {
    for position in C0_POSITION..=C8_POSITION {
        let natural = Note::from_absolute_position(position, Accidental::Natural);
        let sharp = Note::from_absolute_position(position, Accidental::Sharp);
        assert!(natural.is_ok() || sharp.is_ok(), "position {}", position);
    }
}

#[test]
fn test_interval_string_round_trip() {
    let mut checked = 0;
    for size in 1..=24u32 {
        let qualities: &[char] = if Interval::check_is_perfect_interval(size) {
            &['P', 'A', 'd']
        } else {
            &['M', 'm', 'A', 'd']
        };
        for quality in qualities {
            let text = format!("{}{}", quality, size);
            assert_eq!(iv(&text).to_string(), text);
            checked += 1;
        }
    }
    assert!(checked > 80);
}

#[test]
fn test_add_interval_examples() {
    assert!(n("A").add_interval(&iv("M3")).unwrap().equals(&n("C#"), false));
    assert!(n("F#").add_interval(&iv("m3")).unwrap().equals(&n("A"), false));
}

#[test]
fn test_named_chords() {
    assert_eq!(Chord::new(n("C"), Chord::MAJOR_TRIAD).unwrap().to_string(), "C E G");
    assert_eq!(
        Chord::new(n("Ab"), Chord::DOMINANT_SEVENTH).unwrap().to_string(),
        "Ab C Eb Gb"
    );
}

#[test]
fn test_named_scale() {
    assert_eq!(
        Scale::new(n("A"), Scale::MAJOR).unwrap().to_string(),
        "A B C# D E F# G# A"
    );
}

#[test]
fn test_full_inversion_cycle_relative() {
    for chord_type in ChordType::ALL {
        let chord = Chord::from_type(n("Eb"), chord_type).unwrap();
        let cycled = chord.invert(chord.intervals().len() + 1).unwrap();
        assert!(
            cycled.equals(&chord, ChordEquality::exact()),
            "{} cycled to {}",
            chord,
            cycled
        );
    }
}

#[test]
fn test_full_inversion_cycle_absolute() {
    let chord = Chord::new(n("C4"), Chord::MAJOR_SEVENTH).unwrap();
    let cycled = chord.invert(4).unwrap();
    assert_eq!(cycled.to_string(), "C5 E5 G5 B5");
    assert!(cycled.equals(&chord, ChordEquality::exact().ignore_inversion()));
    assert!(!cycled.equals(&chord, ChordEquality::exact()));
    for (low, high) in chord.iter().zip(cycled.iter()) {
        assert_eq!(high.value() - low.value(), 12);
    }
    // the source chord is untouched
    assert_eq!(chord.to_string(), "C4 E4 G4 B4");
}

#[test]
fn test_interval_between_round_trip() {
    let low = n("Db4");
    let high = n("Fb5");
    let interval = low.interval_between(&high).unwrap();
    assert_eq!(interval, iv("m10"));
    assert!(low.add_interval(&interval).unwrap().equals(&high, false));
}

#[test]
fn test_mixed_types_fail() {
    let relative = n("C");
    let absolute = n("C4");
    assert_eq!(relative.difference(&absolute), Err(TheoryError::NotSameType));
    assert_eq!(absolute.difference(&relative), Err(TheoryError::NotSameType));
    assert_eq!(
        relative.interval_between(&absolute),
        Err(TheoryError::NotSameType)
    );
    assert_eq!(
        absolute.interval_between(&relative),
        Err(TheoryError::NotSameType)
    );
}

#[test]
fn test_scales_close_at_octave() {
    for scale_type in ScaleType::ALL {
        for root in ["C", "F#", "Bb", "G"] {
            let scale = Scale::from_type(n(root), scale_type).unwrap();
            let notes = scale.notes();
            assert_eq!(notes.first(), notes.last(), "{} {}", root, scale_type);
            assert_eq!(notes.len(), scale.configuration().len() + 1);
        }
    }
}

#[test]
fn test_sequence_matches_cached_notes() {
    let chord = Chord::new(n("G3"), Chord::HALF_DIMINISHED_SEVENTH).unwrap();
    let regenerated: Vec<Note> = chord.sequence().map(Result::unwrap).collect();
    assert_eq!(regenerated, chord.notes());
    let again: Vec<Note> = chord.sequence().map(Result::unwrap).collect();
    assert_eq!(regenerated, again);
}

#[test]
fn test_letter_stepping() {
    assert_eq!(Letter::C.add(3).unwrap(), Letter::E);
    assert_eq!(Letter::B.add(2).unwrap(), Letter::C);
    assert!(Letter::G.add(0).is_err());
}

#[test]
fn test_pattern_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("patterns.yaml");

    let library = PatternFile {
        chords: vec![PatternDefinition::new("sus2", vec![iv("M2"), iv("P4")])],
        scales: vec![PatternDefinition::new(
            "hungarian_minor",
            vec![iv("M2"), iv("m2"), iv("A2"), iv("m2"), iv("m2"), iv("A2"), iv("m2")],
        )],
    };
    library.save(&path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("A2"));

    let loaded = PatternFile::load(&path).unwrap();
    assert_eq!(loaded, library);

    let registry = loaded.into_registry().unwrap();
    assert_eq!(registry.chord(n("A"), "sus2").unwrap().to_string(), "A B E");
    assert_eq!(
        registry.scale(n("A"), "hungarian_minor").unwrap().to_string(),
        "A B C D# E F G# A"
    );
}

#[test]
fn test_pattern_file_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("patterns.toml");
    fs::write(
        &path,
        r#"
[[scales]]
name = "blues"
intervals = ["m3", "M2", "m2", "A1", "m3", "M2"]
"#,
    )
    .unwrap();

    let registry = PatternFile::load(&path).unwrap().into_registry().unwrap();
    assert_eq!(
        registry.scale(n("A"), "blues").unwrap().to_string(),
        "A C D Eb E G A"
    );
    assert!(registry.available_scales().contains(&"blues".to_string()));
}

#[test]
fn test_pattern_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let err = PatternFile::load(dir.path().join("absent.yaml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read pattern file"));
}
