// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types shared by every music theory operation.

use thiserror::Error;

/// Errors raised by note, interval, chord and scale operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TheoryError {
    /// A constructor or method received a malformed value
    #[error("[{property}]: {reason}")]
    InvalidInput {
        /// Which property was rejected
        property: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// No accidental or quality can spell the requested result
    #[error("impossible quality: {0}")]
    ImpossibleQuality(String),

    /// A relative note was combined with an absolute one
    #[error("the notes are not the same type")]
    NotSameType,

    /// An absolute position fell outside C0..=C8
    #[error("position {position} is outside the piano range (C0..=C8)")]
    OutOfRange {
        /// The offending absolute position
        position: i32,
    },
}

impl TheoryError {
    pub(crate) fn invalid(property: &'static str, reason: impl Into<String>) -> Self {
        TheoryError::InvalidInput {
            property,
            reason: reason.into(),
        }
    }

    pub(crate) fn impossible(reason: impl Into<String>) -> Self {
        TheoryError::ImpossibleQuality(reason.into())
    }
}

/// Result type for music theory operations
pub type TheoryResult<T> = Result<T, TheoryError>;
