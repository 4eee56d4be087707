// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use anyhow::{anyhow, Context, Result};
use std::env;
use theory::{ChordType, Interval, Note, PatternFile, PatternRegistry, ScaleType};
use tracing::Level;

fn print_usage() {
    println!("THEORY - Notes, intervals, chords and scales");
    println!();
    println!("Usage: theory [--verbose] [--config FILE] <COMMAND>");
    println!();
    println!("Commands:");
    println!("  --chord <ROOT> <TYPE> [--invert N]  Spell a chord (e.g. --chord Eb4 maj7)");
    println!("  --scale <ROOT> <TYPE>               Spell a scale (e.g. --scale F# dorian)");
    println!("  --interval <FROM> <TO>              Name the interval between two notes");
    println!("  --add <NOTE> <INTERVAL>             Add an interval to a note (e.g. --add C4 m10)");
    println!("  --list                              List available chord and scale names");
    println!("  --help                              Show this help message");
    println!();
    println!("Options:");
    println!("  --config <FILE>   Load custom chords and scales from a YAML or TOML file");
    println!("  --verbose         Show debug logging on stderr");
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_note(s: &str) -> Result<Note> {
    s.parse().with_context(|| format!("Invalid note: {}", s))
}

fn show_chord(registry: &PatternRegistry, root: &str, name: &str, invert: usize) -> Result<()> {
    let root = parse_note(root)?;
    let chord = registry.chord(root, name)?;
    let chord = if invert > 0 {
        chord
            .invert(invert)
            .with_context(|| format!("Cannot invert {} {} times", chord, invert))?
    } else {
        chord
    };

    println!("{}", chord);
    let intervals: Vec<String> = chord.intervals().iter().map(|i| i.to_string()).collect();
    println!("Intervals: {}", intervals.join(" "));
    Ok(())
}

fn show_scale(registry: &PatternRegistry, root: &str, name: &str) -> Result<()> {
    let root = parse_note(root)?;
    let scale = registry.scale(root, name)?;

    println!("{}", scale);
    let steps: Vec<String> = scale.configuration().iter().map(|i| i.to_string()).collect();
    println!("Steps: {}", steps.join(" "));
    Ok(())
}

fn show_interval(from: &str, to: &str) -> Result<()> {
    let from = parse_note(from)?;
    let to = parse_note(to)?;
    let interval = from
        .interval_between(&to)
        .with_context(|| format!("Cannot name the interval from {} to {}", from, to))?;
    println!("{} ({} semitones)", interval, interval.semitones());
    Ok(())
}

fn show_addition(note: &str, interval: &str) -> Result<()> {
    let note = parse_note(note)?;
    let interval: Interval = interval
        .parse()
        .with_context(|| format!("Invalid interval: {}", interval))?;
    let result = note
        .add_interval(&interval)
        .with_context(|| format!("Cannot add {} to {}", interval, note))?;
    println!("{}", result);
    Ok(())
}

fn list_patterns(registry: &PatternRegistry) {
    println!("Chords:");
    for name in registry.available_chords() {
        match ChordType::from_str(&name) {
            Some(t) if t.key() == name => println!("  {:<20} {}", name, t.name()),
            _ => println!("  {}", name),
        }
    }
    println!();
    println!("Scales:");
    for name in registry.available_scales() {
        match ScaleType::from_str(&name) {
            Some(t) if t.key() == name => println!("  {:<20} {}", name, t.name()),
            _ => println!("  {}", name),
        }
    }
}

fn require<'a>(args: &'a [String], index: usize, message: &str) -> Result<&'a str> {
    args.get(index)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("{}", message))
}

fn main() -> Result<()> {
    let mut args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        println!("THEORY - Notes, intervals, chords and scales");
        println!("Run with --help for usage information");
        return Ok(());
    }

    let verbose = if let Some(pos) = args.iter().position(|a| a == "--verbose" || a == "-v") {
        args.remove(pos);
        true
    } else {
        false
    };
    init_logging(verbose);

    let registry = if let Some(pos) = args.iter().position(|a| a == "--config") {
        require(&args, pos + 1, "--config requires a file path")?;
        let path = args.remove(pos + 1);
        args.remove(pos);
        PatternFile::load(&path)?.into_registry()?
    } else {
        PatternRegistry::new()
    };

    let Some(command) = args.first() else {
        print_usage();
        return Ok(());
    };

    match command.as_str() {
        "--chord" => {
            let root = require(&args, 1, "--chord requires a root note and a chord type")?;
            let name = require(&args, 2, "--chord requires a root note and a chord type")?;
            let invert: usize = match args.get(3).map(String::as_str) {
                Some("--invert") => {
                    let n = require(&args, 4, "--invert requires a count")?;
                    n.parse()
                        .map_err(|_| anyhow!("Invalid inversion count: {}", n))?
                }
                Some(other) => return Err(anyhow!("Unexpected argument: {}", other)),
                None => 0,
            };
            show_chord(&registry, root, name, invert)?;
        }
        "--scale" => {
            let root = require(&args, 1, "--scale requires a root note and a scale type")?;
            let name = require(&args, 2, "--scale requires a root note and a scale type")?;
            show_scale(&registry, root, name)?;
        }
        "--interval" => {
            let from = require(&args, 1, "--interval requires two notes")?;
            let to = require(&args, 2, "--interval requires two notes")?;
            show_interval(from, to)?;
        }
        "--add" => {
            let note = require(&args, 1, "--add requires a note and an interval")?;
            let interval = require(&args, 2, "--add requires a note and an interval")?;
            show_addition(note, interval)?;
        }
        "--list" => {
            list_patterns(&registry);
        }
        "--help" | "-h" => {
            print_usage();
        }
        other => {
            eprintln!("Unknown option: {}", other);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
