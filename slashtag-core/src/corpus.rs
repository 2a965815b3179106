// slashtag-core/src/corpus.rs
//! Corpus reading.
//!
//! The engine does not care where words come from. [`CorpusReader`] is the
//! seam; [`TalkBankReader`] is a small reader for TalkBank XML transcripts that
//! pulls the `%mor` decomposition out of each `<w>` element.
//!
//! It is not a validator. Elements it does not know are skipped and clitics
//! (`<mor-post>`) are ignored. Compounds keep their parts joined with `+`, both
//! in the surface text (`ice+cream`) and in the stem. A compound stem can never
//! equal a `\w+` rule stem, so stem rules do not match compounds.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info};
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use std::path::Path;

use crate::errors::SlashtagError;
use crate::word::MorWord;

/// One speaker turn with its MOR-tagged words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Utterance {
    pub speaker: String,
    pub words: Vec<MorWord>,
}

/// Produces utterances from a corpus file.
pub trait CorpusReader {
    fn read_utterances(&self, path: &Path) -> Result<Vec<Utterance>, SlashtagError>;
}

/// Reader for TalkBank XML (`<CHAT>` documents).
#[derive(Debug, Clone, Copy, Default)]
pub struct TalkBankReader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Suffix,
    Fusion,
    Other,
}

/// A `<w>` element being assembled.
#[derive(Debug, Default)]
struct PendingWord {
    text: String,
    mor: MorWord,
    has_pos: bool,
    pos_closed: bool,
    first_mw_closed: bool,
    marker: Option<Marker>,
}

impl PendingWord {
    fn accepts_components(&self, stack: &[String]) -> bool {
        !self.first_mw_closed && !stack.iter().any(|n| n == "mor-post")
    }

    fn push_mor_text(&mut self, stack: &[String], text: &str) {
        if !self.accepts_components(stack) {
            return;
        }
        let in_compound = stack.iter().any(|n| n == "mwc");
        let top = stack.last().map(String::as_str);
        let parent = stack.len().checked_sub(2).map(|i| stack[i].as_str());
        match (parent, top) {
            (Some("pos"), Some("c")) if !self.pos_closed => {
                self.mor.pos.push_str(text);
                self.has_pos = true;
            }
            (Some("pos"), Some("s")) if !self.pos_closed => self.mor.sub_pos.push(text.to_string()),
            (_, Some("stem")) if in_compound => match self.mor.stem.as_mut() {
                Some(stem) => {
                    stem.push('+');
                    stem.push_str(text);
                }
                None => self.mor.stem = Some(text.to_string()),
            },
            (_, Some("stem")) if self.mor.stem.is_none() => self.mor.stem = Some(text.to_string()),
            (_, Some("mk")) => match self.marker {
                Some(Marker::Suffix) => self.mor.sfx.push(text.to_string()),
                Some(Marker::Fusion) => self.mor.sxfx.push(text.to_string()),
                _ => {}
            },
            _ => {}
        }
    }

    fn finish(mut self) -> Option<MorWord> {
        if !self.has_pos {
            return None;
        }
        self.mor.word = self.text;
        Some(self.mor)
    }
}

fn local_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).into_owned()
}

fn marker_kind(e: &BytesStart<'_>) -> Result<Marker, quick_xml::Error> {
    let kind = match e.try_get_attribute("type")? {
        Some(attr) => attr.unescape_value()?.into_owned(),
        None => return Ok(Marker::Other),
    };
    Ok(match kind.as_str() {
        "sfx" => Marker::Suffix,
        "sfxf" => Marker::Fusion,
        _ => Marker::Other,
    })
}

impl TalkBankReader {
    pub fn new() -> Self {
        Self
    }

    /// Parses an in-memory TalkBank XML document. `origin` only labels errors.
    pub fn parse_str(&self, xml: &str, origin: &Path) -> Result<Vec<Utterance>, SlashtagError> {
        let fail = |reason: String| SlashtagError::CorpusRead {
            path: origin.to_path_buf(),
            reason,
        };

        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut utterances = Vec::new();
        let mut stack: Vec<String> = Vec::new();
        let mut utterance: Option<Utterance> = None;
        let mut word: Option<PendingWord> = None;

        loop {
            let event = reader
                .read_event()
                .map_err(|e| fail(format!("XML error at byte {}: {}", reader.buffer_position(), e)))?;
            match event {
                Event::Start(e) => {
                    let name = local_name(&e);
                    match name.as_str() {
                        "u" => {
                            let speaker = match e.try_get_attribute("who").map_err(|e| fail(e.to_string()))? {
                                Some(attr) => attr.unescape_value().map_err(|e| fail(e.to_string()))?.into_owned(),
                                None => String::new(),
                            };
                            utterance = Some(Utterance { speaker, words: Vec::new() });
                        }
                        "w" if utterance.is_some() => word = Some(PendingWord::default()),
                        "mk" => {
                            if let Some(w) = word.as_mut() {
                                w.marker = Some(marker_kind(&e).map_err(|e| fail(e.to_string()))?);
                            }
                        }
                        _ => {}
                    }
                    stack.push(name);
                }
                Event::End(_) => {
                    let name = stack.pop().unwrap_or_default();
                    match name.as_str() {
                        "u" => {
                            if let Some(u) = utterance.take() {
                                utterances.push(u);
                            }
                        }
                        "w" => {
                            if let (Some(w), Some(u)) = (word.take(), utterance.as_mut()) {
                                if let Some(mor) = w.finish() {
                                    u.words.push(mor);
                                }
                            }
                        }
                        "pos" => {
                            if let Some(w) = word.as_mut() {
                                w.pos_closed |= w.has_pos;
                            }
                        }
                        "mw" if !stack.iter().any(|n| n == "mwc") => {
                            if let Some(w) = word.as_mut() {
                                w.first_mw_closed = true;
                            }
                        }
                        "mwc" => {
                            if let Some(w) = word.as_mut() {
                                w.first_mw_closed = true;
                            }
                        }
                        "mk" => {
                            if let Some(w) = word.as_mut() {
                                w.marker = None;
                            }
                        }
                        _ => {}
                    }
                }
                Event::Empty(e) => {
                    // `<wk/>` separates the parts of a compound's surface form.
                    if let Some(w) = word.as_mut() {
                        if local_name(&e) == "wk" && !stack.iter().any(|n| n == "mor") {
                            w.text.push('+');
                        }
                    }
                }
                Event::Text(t) => {
                    if let Some(w) = word.as_mut() {
                        let text = t.unescape().map_err(|e| fail(e.to_string()))?;
                        if stack.iter().any(|n| n == "mor") {
                            w.push_mor_text(&stack, &text);
                        } else {
                            w.text.push_str(&text);
                        }
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        debug!("Parsed {} utterances from {}.", utterances.len(), origin.display());
        Ok(utterances)
    }
}

impl CorpusReader for TalkBankReader {
    fn read_utterances(&self, path: &Path) -> Result<Vec<Utterance>, SlashtagError> {
        info!("Reading corpus file: {}", path.display());
        let xml = std::fs::read_to_string(path).map_err(|e| SlashtagError::CorpusRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        self.parse_str(&xml, path)
    }
}
