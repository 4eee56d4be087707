// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for the theory crate
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Note and interval parsing
//! - Interval addition and derivation
//! - Chord and scale construction
//! - Chord inversion and equality

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use theory::music::{C0_POSITION, C8_POSITION};
use theory::{Accidental, Chord, ChordEquality, ChordType, Interval, Note, Scale, ScaleType};

const NOTE_NAMES: [&str; 17] = [
    "C", "C#", "Db", "D", "D#", "Eb", "E", "F", "F#", "Gb", "G", "G#", "Ab", "A", "A#", "Bb", "B",
];

const INTERVAL_NAMES: [&str; 12] = [
    "m2", "M2", "m3", "M3", "P4", "A4", "d5", "P5", "m6", "M6", "m7", "M7",
];

fn random_notes(rng: &mut StdRng, count: usize) -> Vec<Note> {
    (0..count)
        .filter_map(|_| {
            let name = NOTE_NAMES[rng.gen_range(0..NOTE_NAMES.len())];
            let octave = rng.gen_range(1..=6);
            format!("{}{}", name, octave).parse().ok()
        })
        .collect()
}

fn random_intervals(rng: &mut StdRng, count: usize) -> Vec<Interval> {
    (0..count)
        .filter_map(|_| INTERVAL_NAMES[rng.gen_range(0..INTERVAL_NAMES.len())].parse().ok())
        .collect()
}

/// Benchmark parsing the two text forms
fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    group.bench_function("note", |b| {
        b.iter(|| {
            for name in NOTE_NAMES {
                black_box(black_box(name).parse::<Note>().ok());
            }
        })
    });

    group.bench_function("absolute_note", |b| {
        b.iter(|| black_box("Gbb7").parse::<Note>().ok())
    });

    group.bench_function("interval", |b| {
        b.iter(|| {
            for name in INTERVAL_NAMES {
                black_box(black_box(name).parse::<Interval>().ok());
            }
        })
    });

    group.finish();
}

/// Benchmark interval addition (the core spelling operation)
fn bench_add_interval(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let notes = random_notes(&mut rng, 256);
    let intervals = random_intervals(&mut rng, 256);
    let relative: Vec<Note> = notes.iter().map(Note::to_relative).collect();

    let mut group = c.benchmark_group("add_interval");

    group.bench_function("relative", |b| {
        b.iter(|| {
            for (note, interval) in relative.iter().zip(&intervals) {
                black_box(note.add_interval(interval).ok());
            }
        })
    });

    group.bench_function("absolute", |b| {
        b.iter(|| {
            for (note, interval) in notes.iter().zip(&intervals) {
                black_box(note.add_interval(interval).ok());
            }
        })
    });

    group.finish();
}

/// Benchmark naming the interval between two notes
fn bench_interval_between(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let lows = random_notes(&mut rng, 256);
    let highs = random_notes(&mut rng, 256);

    c.bench_function("interval_between", |b| {
        b.iter(|| {
            for (low, high) in lows.iter().zip(&highs) {
                black_box(low.interval_between(high).ok());
            }
        })
    });
}

/// Benchmark resolving every piano key with every accidental
fn bench_absolute_position(c: &mut Criterion) {
    c.bench_function("from_absolute_position", |b| {
        b.iter(|| {
            for position in C0_POSITION..=C8_POSITION {
                for accidental in Accidental::RESOLUTION_ORDER {
                    black_box(Note::from_absolute_position(black_box(position), accidental).ok());
                }
            }
        })
    });
}

/// Benchmark chord and scale construction
fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    let root: Note = "F#3".parse().unwrap();

    for chord_type in [ChordType::MajorTriad, ChordType::DominantSeventh, ChordType::HalfDiminishedSeventh] {
        group.bench_with_input(
            BenchmarkId::new("chord", chord_type.key()),
            &chord_type,
            |b, &chord_type| b.iter(|| Chord::from_type(black_box(root), chord_type).ok()),
        );
    }

    for scale_type in [ScaleType::Major, ScaleType::HarmonicMinor, ScaleType::WholeTone] {
        group.bench_with_input(
            BenchmarkId::new("scale", scale_type.key()),
            &scale_type,
            |b, &scale_type| b.iter(|| Scale::from_type(black_box(root), scale_type).ok()),
        );
    }

    group.finish();
}

/// Benchmark chord inversion with octave raising
fn bench_inversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("inversion");
    let chord = Chord::from_type("C3".parse().unwrap(), ChordType::MajorSeventh).unwrap();

    for times in [1usize, 4, 8].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(times), times, |b, &times| {
            b.iter(|| chord.invert(black_box(times)).ok())
        });
    }

    group.finish();
}

/// Benchmark the equality modes
fn bench_chord_equality(c: &mut Criterion) {
    let mut group = c.benchmark_group("chord_equality");
    let a = Chord::from_type("Eb".parse().unwrap(), ChordType::MinorSeventh).unwrap();
    let b_chord = a.invert(2).unwrap();

    let modes = [
        ("exact", ChordEquality::exact()),
        ("ignore_inversion", ChordEquality::exact().ignore_inversion()),
        ("enharmonic", ChordEquality::exact().enharmonic().ignore_inversion()),
    ];
    for (name, options) in modes {
        group.bench_function(name, |b| b.iter(|| black_box(a.equals(&b_chord, options))));
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parsing,
    bench_add_interval,
    bench_interval_between,
    bench_absolute_position,
    bench_construction,
    bench_inversion,
    bench_chord_equality,
);

criterion_main!(benches);
