// slashtag-core/src/engine.rs
//! Defines the core `TranslationEngine` trait.
//!
//! The trait decouples document translation from how a replacement tag is
//! chosen, so the orchestration layer can be driven by any engine.
//!
//! License: MIT OR APACHE 2.0

use crate::rules::compiler::CompiledRules;
use crate::word::TaggedWord;

/// Chooses an output tag for each tagged word.
///
/// Implementations must be total: every word gets a tag. They must also be
/// deterministic and free of interior mutability, which is why `Send + Sync`
/// is required.
pub trait TranslationEngine: Send + Sync {
    /// The replacement tag for `word`, or `None` to keep the word's own tag.
    fn replacement_for(&self, word: &dyn TaggedWord) -> Option<&str>;

    /// Translates a word into a `(text, tag)` pair.
    fn translate(&self, word: &dyn TaggedWord) -> (String, String) {
        let tag = self.replacement_for(word).unwrap_or_else(|| word.pos());
        (word.word().to_string(), tag.to_string())
    }

    /// The rules the engine matches against, in match order.
    fn compiled_rules(&self) -> &CompiledRules;
}
