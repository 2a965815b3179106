// File: slashtag-core/src/document.rs

//! `document.rs`
//! Straight-line document translation on top of a `TranslationEngine`.
//!
//! Each utterance becomes one line of whitespace-joined `word/tag` tokens,
//! optionally prefixed with `"SPEAKER: "`.

use log::debug;
use std::path::Path;

use crate::corpus::{CorpusReader, Utterance};
use crate::engine::TranslationEngine;
use crate::errors::SlashtagError;

/// Switches for document translation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentOptions {
    /// Only translate utterances by this speaker code (e.g. `CHI`).
    pub speaker: Option<String>,
    /// Prefix each line with the speaker code.
    pub speaker_labels: bool,
}

impl DocumentOptions {
    fn includes(&self, utterance: &Utterance) -> bool {
        self.speaker.as_deref().map_or(true, |s| s == utterance.speaker)
    }
}

/// Translates every word of one utterance.
pub fn translate_utterance(engine: &dyn TranslationEngine, utterance: &Utterance) -> Vec<(String, String)> {
    utterance.words.iter().map(|w| engine.translate(w)).collect()
}

/// Renders translated pairs as a single slash/tag line.
pub fn render_line(speaker: &str, pairs: &[(String, String)], options: &DocumentOptions) -> String {
    let tokens = pairs
        .iter()
        .map(|(word, tag)| format!("{}/{}", word, tag))
        .collect::<Vec<String>>()
        .join(" ");
    if options.speaker_labels {
        format!("{}: {}", speaker, tokens)
    } else {
        tokens
    }
}

/// Translates a sequence of utterances into output lines.
///
/// Utterances filtered out by speaker, or with no MOR-tagged words, produce no line.
pub fn translate_document(
    engine: &dyn TranslationEngine,
    utterances: &[Utterance],
    options: &DocumentOptions,
) -> Vec<String> {
    utterances
        .iter()
        .filter(|u| options.includes(u))
        .filter(|u| !u.words.is_empty())
        .map(|u| render_line(&u.speaker, &translate_utterance(engine, u), options))
        .collect()
}

/// Reads one corpus file and translates it.
pub fn translate_file(
    engine: &dyn TranslationEngine,
    reader: &dyn CorpusReader,
    path: &Path,
    options: &DocumentOptions,
) -> Result<Vec<String>, SlashtagError> {
    let utterances = reader.read_utterances(path)?;
    let lines = translate_document(engine, &utterances, options);
    debug!("Translated {} of {} utterances from {}.", lines.len(), utterances.len(), path.display());
    Ok(lines)
}
