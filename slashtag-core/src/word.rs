// slashtag-core/src/word.rs
//! The tagged-word capability consumed by the translation engine.
//!
//! A corpus reader hands the engine one value per word. The engine only needs
//! a closed set of attributes, so the capability is a trait with one accessor
//! per [`MorField`] instead of a by-name lookup.
//!
//! License: MIT OR APACHE 2.0

/// The morphological components a rule can constrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MorField {
    Pos,
    SubPos,
    Sxfx,
    Sfx,
    Stem,
}

impl MorField {
    /// The delimiter that introduces this field in a pattern string.
    /// `Pos` has none; it is always the leading token.
    pub fn delimiter(self) -> Option<char> {
        match self {
            MorField::Pos => None,
            MorField::SubPos => Some(':'),
            MorField::Sxfx => Some('&'),
            MorField::Sfx => Some('-'),
            MorField::Stem => Some('|'),
        }
    }

    /// Maps a pattern delimiter back to its field.
    pub fn from_delimiter(c: char) -> Option<Self> {
        match c {
            ':' => Some(MorField::SubPos),
            '&' => Some(MorField::Sxfx),
            '-' => Some(MorField::Sfx),
            '|' => Some(MorField::Stem),
            _ => None,
        }
    }
}

/// Anything the engine can translate.
///
/// Empty list fields and a `None` stem mean the word has no such component.
/// An absent component never equals a rule value, because rule values are
/// always non-empty.
pub trait TaggedWord {
    /// Surface text.
    fn word(&self) -> &str;
    /// Original part-of-speech tag.
    fn pos(&self) -> &str;
    fn sub_pos(&self) -> &[String];
    fn sxfx(&self) -> &[String];
    fn sfx(&self) -> &[String];
    fn stem(&self) -> Option<&str>;
}

/// A word with its MOR decomposition, as produced by the bundled corpus reader.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MorWord {
    pub word: String,
    pub pos: String,
    pub sub_pos: Vec<String>,
    pub sxfx: Vec<String>,
    pub sfx: Vec<String>,
    pub stem: Option<String>,
}

impl MorWord {
    pub fn new(word: impl Into<String>, pos: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            pos: pos.into(),
            ..Default::default()
        }
    }

    pub fn with_sub_pos<I, S>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sub_pos = parts.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sxfx<I, S>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sxfx = parts.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sfx<I, S>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sfx = parts.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_stem(mut self, stem: impl Into<String>) -> Self {
        self.stem = Some(stem.into());
        self
    }
}

impl TaggedWord for MorWord {
    fn word(&self) -> &str {
        &self.word
    }
    fn pos(&self) -> &str {
        &self.pos
    }
    fn sub_pos(&self) -> &[String] {
        &self.sub_pos
    }
    fn sxfx(&self) -> &[String] {
        &self.sxfx
    }
    fn sfx(&self) -> &[String] {
        &self.sfx
    }
    fn stem(&self) -> Option<&str> {
        self.stem.as_deref()
    }
}
