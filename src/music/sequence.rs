// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Lazy note sequences built from a root and a list of steps.

use std::slice;

use super::interval::Interval;
use super::note::Note;
use crate::error::TheoryResult;

/// Iterator over the notes produced by stacking intervals on a root.
///
/// Yields the root first, then each note reached by adding the next
/// interval to the previous note, for `intervals.len() + 1` notes in total.
/// If a step cannot be spelled the error is yielded and the sequence ends.
///
/// Each sequence owns its own cursor, so any number of them can walk the
/// same intervals independently.
#[derive(Debug, Clone)]
pub struct NoteSequence<'a> {
    pending: Option<TheoryResult<Note>>,
    intervals: slice::Iter<'a, Interval>,
}

impl<'a> NoteSequence<'a> {
    pub fn new(root: Note, intervals: &'a [Interval]) -> Self {
        Self {
            pending: Some(Ok(root)),
            intervals: intervals.iter(),
        }
    }
}

impl Iterator for NoteSequence<'_> {
    type Item = TheoryResult<Note>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.pending.take()?;
        if let Ok(note) = &current {
            self.pending = self.intervals.next().map(|step| note.add_interval(step));
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.pending {
            Some(_) => (1, Some(self.intervals.len() + 1)),
            None => (0, Some(0)),
        }
    }
}

/// Spell every note of a sequence, failing on the first step that cannot be spelled
pub fn spell(root: Note, intervals: &[Interval]) -> TheoryResult<Vec<Note>> {
    NoteSequence::new(root, intervals).collect()
}
