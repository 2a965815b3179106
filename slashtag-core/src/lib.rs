// slashtag-core/src/lib.rs
//! # slashtag Core Library
//!
//! `slashtag-core` rewrites MOR part-of-speech tags from morphologically
//! tagged transcripts into a target tagset, driven by a two-column rule table.
//! It compiles the table into a priority-ordered list of sparse match
//! specifications and, for each word, emits the tag of the first rule that
//! matches, falling back to the word's own tag.
//!
//! ## Modules
//!
//! * `config`: Loads `RuleTable`s from CSV files or the bundled default table.
//! * `rules`: Parses pattern strings into `MatchSpec`s and compiles tables into `CompiledRules`.
//! * `word`: The `TaggedWord` capability and the `MorWord` value type.
//! * `engine`: Defines the `TranslationEngine` trait.
//! * `engines`: Contains concrete implementations of `TranslationEngine`.
//! * `corpus`: The `CorpusReader` seam and a TalkBank XML reader.
//! * `document`: Turns utterances into `word/tag` lines.
//! * `errors`: The `SlashtagError` taxonomy.
//!
//! ## Usage Example
//!
//! ```rust
//! use slashtag_core::{compile_rules, MorWord, RuleEngine, TranslationEngine};
//!
//! let rules = compile_rules([("n", "NOUN"), ("n:prop", "PROPN"), ("pro:indef-PL", "INDEFPL")])?;
//! let engine = RuleEngine::new(rules);
//!
//! let paris = MorWord::new("Paris", "n").with_sub_pos(["prop"]);
//! assert_eq!(engine.translate(&paris), ("Paris".to_string(), "PROPN".to_string()));
//!
//! // No rule for `v`: the original tag is kept.
//! let go = MorWord::new("go", "v");
//! assert_eq!(engine.translate(&go), ("go".to_string(), "v".to_string()));
//! # Ok::<(), slashtag_core::SlashtagError>(())
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`SlashtagError`]. Rule-table errors are fatal
//! for a run; corpus errors are scoped to one file. Translating a word never
//! fails.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod corpus;
pub mod document;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod rules;
pub mod word;

/// Re-exports the rule-table types.
pub use config::{RuleRow, RuleTable, DEFAULT_RULE_TABLE_NAME};

/// Re-exports the custom error type for clear error reporting.
pub use errors::SlashtagError;

pub use engine::TranslationEngine;
pub use engines::rule_engine::{make_translator, RuleEngine};

pub use rules::compiler::{compile_rules, compile_table, CompiledRule, CompiledRules};
pub use rules::pattern::{parse_pattern, MatchSpec, ParsedPattern};

pub use word::{MorField, MorWord, TaggedWord};

pub use corpus::{CorpusReader, TalkBankReader, Utterance};
pub use document::{render_line, translate_document, translate_file, translate_utterance, DocumentOptions};
