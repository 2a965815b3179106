//! pattern.rs - Parsing of compact MOR pattern strings into match specifications.
//!
//! A pattern is a part-of-speech followed by any number of delimited parts:
//!
//! ```text
//! pos ( ":" subpos | "&" fusion | "-" suffix )* ( "|" stem )?
//! ```
//!
//! Each part is a run of word characters (`\w+`). List-valued parts accumulate
//! in pattern order; a repeated stem overwrites the earlier one.
//!
//! License: MIT OR APACHE 2.0

use lazy_static::lazy_static;
use log::warn;
use regex::Regex;
use serde::Serialize;
use std::fmt;

use crate::errors::SlashtagError;
use crate::word::{MorField, TaggedWord};

lazy_static! {
    /// One token: a word run at the start of the pattern or right after a delimiter.
    static ref PATTERN_TOKEN: Regex = Regex::new(r"(?:^|[:&|-])\w+").unwrap();
}

/// Sparse description of the MOR components a word must carry.
///
/// `pos` is always compared. Every other field is a wildcard while empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct MatchSpec {
    pub pos: String,
    #[serde(rename = "subPos", skip_serializing_if = "Vec::is_empty")]
    pub sub_pos: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sxfx: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sfx: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stem: Option<String>,
}

impl MatchSpec {
    /// A specification constraining only the part of speech.
    pub fn for_pos(pos: impl Into<String>) -> Self {
        Self {
            pos: pos.into(),
            ..Default::default()
        }
    }

    /// Number of components constrained beyond `pos`.
    pub fn component_count(&self) -> usize {
        self.sub_pos.len() + self.sxfx.len() + self.sfx.len() + usize::from(self.stem.is_some())
    }

    /// Fields this specification actually compares, `Pos` first.
    pub fn constrained_fields(&self) -> Vec<MorField> {
        let mut fields = vec![MorField::Pos];
        if !self.sub_pos.is_empty() {
            fields.push(MorField::SubPos);
        }
        if !self.sxfx.is_empty() {
            fields.push(MorField::Sxfx);
        }
        if !self.sfx.is_empty() {
            fields.push(MorField::Sfx);
        }
        if self.stem.is_some() {
            fields.push(MorField::Stem);
        }
        fields
    }

    /// Compares a single field against the word. Unset fields always match.
    pub fn field_matches<W: TaggedWord + ?Sized>(&self, field: MorField, word: &W) -> bool {
        match field {
            MorField::Pos => self.pos == word.pos(),
            MorField::SubPos => self.sub_pos.is_empty() || self.sub_pos.as_slice() == word.sub_pos(),
            MorField::Sxfx => self.sxfx.is_empty() || self.sxfx.as_slice() == word.sxfx(),
            MorField::Sfx => self.sfx.is_empty() || self.sfx.as_slice() == word.sfx(),
            MorField::Stem => match &self.stem {
                Some(stem) => word.stem() == Some(stem.as_str()),
                None => true,
            },
        }
    }

    /// True when every constrained field equals the word's value exactly,
    /// including order and length for list fields.
    pub fn matches<W: TaggedWord + ?Sized>(&self, word: &W) -> bool {
        self.constrained_fields()
            .into_iter()
            .all(|field| self.field_matches(field, word))
    }
}

impl fmt::Display for MatchSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pos)?;
        for s in &self.sub_pos {
            write!(f, ":{}", s)?;
        }
        for s in &self.sxfx {
            write!(f, "&{}", s)?;
        }
        for s in &self.sfx {
            write!(f, "-{}", s)?;
        }
        if let Some(stem) = &self.stem {
            write!(f, "|{}", stem)?;
        }
        Ok(())
    }
}

/// A parsed pattern together with its priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPattern {
    pub spec: MatchSpec,
    /// Number of delimited tokens the pattern was built from.
    pub priority: usize,
}

/// Parses a pattern string such as `"pro:indef-PL"` or `"neo|weekaweela"`.
///
/// Surrounding whitespace is ignored. Anything else the tokenizer does not
/// consume makes the pattern malformed.
pub fn parse_pattern(pattern: &str) -> Result<ParsedPattern, SlashtagError> {
    let text = pattern.trim();
    if text.is_empty() {
        return Err(SlashtagError::malformed_pattern(pattern, "pattern is empty"));
    }

    let mut spec = MatchSpec::default();
    let mut priority = 0;
    let mut cursor = 0;

    for (index, token) in PATTERN_TOKEN.find_iter(text).enumerate() {
        if token.start() != cursor {
            return Err(SlashtagError::malformed_pattern(
                pattern,
                format!("unexpected text '{}'", &text[cursor..token.start()]),
            ));
        }
        cursor = token.end();

        let raw = token.as_str();
        let mut chars = raw.chars();
        let lead = chars.next().and_then(MorField::from_delimiter);

        if index == 0 {
            if lead.is_some() {
                return Err(SlashtagError::malformed_pattern(pattern, "missing part of speech"));
            }
            spec.pos = raw.to_string();
            continue;
        }

        let value = chars.as_str().to_string();
        priority += 1;
        match lead {
            Some(MorField::SubPos) => spec.sub_pos.push(value),
            Some(MorField::Sxfx) => spec.sxfx.push(value),
            Some(MorField::Sfx) => spec.sfx.push(value),
            Some(MorField::Stem) => {
                if let Some(previous) = spec.stem.replace(value) {
                    warn!("Pattern '{}' repeats its stem; '{}' is overridden.", pattern, previous);
                }
            }
            // The tokenizer only yields delimiter-led runs after the first token.
            Some(MorField::Pos) | None => {
                return Err(SlashtagError::malformed_pattern(pattern, format!("unexpected token '{}'", raw)));
            }
        }
    }

    if cursor == 0 {
        return Err(SlashtagError::malformed_pattern(pattern, "missing part of speech"));
    }
    if cursor != text.len() {
        return Err(SlashtagError::malformed_pattern(
            pattern,
            format!("unexpected text '{}'", &text[cursor..]),
        ));
    }

    Ok(ParsedPattern { spec, priority })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::MorWord;

    fn spec(p: &str) -> MatchSpec {
        parse_pattern(p).unwrap().spec
    }

    #[test]
    fn test_parse_subpos_and_suffix() {
        let parsed = parse_pattern("pro:indef-PL").unwrap();
        assert_eq!(parsed.spec.pos, "pro");
        assert_eq!(parsed.spec.sub_pos, vec!["indef"]);
        assert_eq!(parsed.spec.sfx, vec!["PL"]);
        assert!(parsed.spec.sxfx.is_empty());
        assert_eq!(parsed.spec.stem, None);
        assert_eq!(parsed.priority, 2);
    }

    #[test]
    fn test_parse_stem() {
        let parsed = parse_pattern("neo|weekaweela").unwrap();
        assert_eq!(parsed.spec, MatchSpec {
            pos: "neo".to_string(),
            stem: Some("weekaweela".to_string()),
            ..Default::default()
        });
        assert_eq!(parsed.priority, 1);
    }

    #[test]
    fn test_parse_mixed_order_keeps_per_field_order() {
        let s = spec("v-PAST:aux&3S-PL:cop&PRES");
        assert_eq!(s.pos, "v");
        assert_eq!(s.sub_pos, vec!["aux", "cop"]);
        assert_eq!(s.sxfx, vec!["3S", "PRES"]);
        assert_eq!(s.sfx, vec!["PAST", "PL"]);
    }

    #[test]
    fn test_bare_pos_has_zero_priority() {
        let parsed = parse_pattern("n").unwrap();
        assert_eq!(parsed.spec, MatchSpec::for_pos("n"));
        assert_eq!(parsed.priority, 0);
        assert_eq!(parsed.spec.component_count(), 0);
    }

    #[test]
    fn test_repeated_stem_last_wins() {
        let parsed = parse_pattern("n|cat|dog").unwrap();
        assert_eq!(parsed.spec.stem.as_deref(), Some("dog"));
        assert_eq!(parsed.priority, 2);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(spec("  n:prop "), spec("n:prop"));
    }

    #[test]
    fn test_malformed_patterns_are_rejected() {
        for bad in ["", "   ", ":prop", "|dog", "n x", "n::prop", "n-", "n;stem", "-PL"] {
            let err = parse_pattern(bad).unwrap_err();
            match err {
                SlashtagError::MalformedPattern { pattern, .. } => assert_eq!(pattern, bad),
                other => panic!("unexpected error for {:?}: {}", bad, other),
            }
        }
    }

    #[test]
    fn test_display_renders_canonical_form() {
        assert_eq!(spec("n-PL:prop|dog").to_string(), "n:prop-PL|dog");
    }

    #[test]
    fn test_empty_spec_fields_are_wildcards() {
        let s = MatchSpec::for_pos("n");
        let word = MorWord::new("dogs", "n").with_sfx(["PL"]).with_stem("dog");
        assert!(s.matches(&word));
        assert!(!s.matches(&MorWord::new("run", "v")));
    }

    #[test]
    fn test_list_fields_compare_exactly() {
        let s = spec("v&PAST&3S");
        assert!(s.matches(&MorWord::new("x", "v").with_sxfx(["PAST", "3S"])));
        assert!(!s.matches(&MorWord::new("x", "v").with_sxfx(["3S", "PAST"])));
        assert!(!s.matches(&MorWord::new("x", "v").with_sxfx(["PAST"])));
        assert!(!s.matches(&MorWord::new("x", "v")));
    }

    #[test]
    fn test_stem_requires_present_stem() {
        let s = spec("n|dog");
        assert!(s.matches(&MorWord::new("dog", "n").with_stem("dog")));
        assert!(!s.matches(&MorWord::new("dog", "n")));
        assert!(!s.matches(&MorWord::new("cat", "n").with_stem("cat")));
    }
}
