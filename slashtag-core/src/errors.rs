//! errors.rs - Custom error types for the slashtag-core library.
//!
//! This module defines a structured error enum for the library. Rule-table
//! errors are fatal to a run; corpus errors are scoped to a single file.
//!
//! License: MIT OR APACHE 2.0

use std::path::PathBuf;
use thiserror::Error;

/// This enum represents all possible error types in the `slashtag-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SlashtagError {
    /// The rule-table file is missing or unreadable.
    #[error("Failed to read rule table {}: {source}", .path.display())]
    RuleTableIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A pattern string does not follow the `pos(:sub|&fus|-sfx)*(|stem)?` grammar.
    #[error("Malformed pattern '{pattern}': {reason}")]
    MalformedPattern { pattern: String, reason: String },

    /// A rule-table row could not be read as a `pattern,tag` pair.
    #[error("Malformed rule table row {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    /// A corpus file could not be read or parsed.
    #[error("Failed to read corpus file {}: {reason}", .path.display())]
    CorpusRead { path: PathBuf, reason: String },

    /// Several rule-table errors collected during one compile pass.
    #[error("Failed to compile {count} rule(s):\n{details}")]
    RuleCompilation { count: usize, details: String },
}

impl SlashtagError {
    /// Builds a `MalformedPattern` error for `pattern`.
    pub fn malformed_pattern(pattern: &str, reason: impl Into<String>) -> Self {
        SlashtagError::MalformedPattern {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns true when this error should abort the whole run.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, SlashtagError::CorpusRead { .. })
    }
}
