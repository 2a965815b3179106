// slashtag-core/src/engines/rule_engine.rs
//! A `TranslationEngine` that scans the compiled rules in priority order and
//! takes the first one whose specification matches the word.
//! License: MIT OR APACHE 2.0

use log::trace;
use std::sync::Arc;

use crate::config::RuleTable;
use crate::engine::TranslationEngine;
use crate::errors::SlashtagError;
use crate::rules::compiler::{compile_table, CompiledRule, CompiledRules};
use crate::word::TaggedWord;

#[derive(Debug, Clone)]
pub struct RuleEngine {
    compiled_rules: Arc<CompiledRules>,
}

impl RuleEngine {
    pub fn new(compiled_rules: CompiledRules) -> Self {
        Self::from_shared(Arc::new(compiled_rules))
    }

    pub fn from_shared(compiled_rules: Arc<CompiledRules>) -> Self {
        Self { compiled_rules }
    }

    /// Compiles `table` and wraps the result. Fails if any row is malformed.
    pub fn from_table(table: &RuleTable) -> Result<Self, SlashtagError> {
        let compiled = compile_table(table)?;
        Ok(Self::new(compiled))
    }

    /// The first rule, in priority order, whose specification matches `word`.
    pub fn find_rule(&self, word: &dyn TaggedWord) -> Option<&CompiledRule> {
        let found = self.compiled_rules.iter().find(|rule| rule.spec.matches(word));
        match found {
            Some(rule) => trace!("'{}' matched rule '{}' -> '{}'", word.word(), rule.source, rule.replacement),
            None => trace!("'{}' ({}) matched no rule; keeping its tag", word.word(), word.pos()),
        }
        found
    }

    pub fn shared_rules(&self) -> Arc<CompiledRules> {
        Arc::clone(&self.compiled_rules)
    }
}

impl TranslationEngine for RuleEngine {
    fn replacement_for(&self, word: &dyn TaggedWord) -> Option<&str> {
        self.find_rule(word).map(|rule| rule.replacement.as_str())
    }

    fn compiled_rules(&self) -> &CompiledRules {
        &self.compiled_rules
    }
}

/// Builds a translation function over an already compiled rule list.
///
/// The returned closure only reads the rules, so it can be cloned into
/// worker threads alongside the `Arc`.
pub fn make_translator(rules: Arc<CompiledRules>) -> impl Fn(&dyn TaggedWord) -> (String, String) + Send + Sync {
    let engine = RuleEngine::from_shared(rules);
    move |word: &dyn TaggedWord| engine.translate(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::compiler::compile_rules;
    use crate::word::MorWord;

    fn engine(rows: &[(&str, &str)]) -> RuleEngine {
        RuleEngine::new(compile_rules(rows.iter().copied()).unwrap())
    }

    #[test]
    fn test_specific_rule_wins_over_general() {
        let e = engine(&[("n", "NOUN"), ("n:prop", "PROPN")]);
        let paris = MorWord::new("Paris", "n").with_sub_pos(["prop"]);
        assert_eq!(e.translate(&paris), ("Paris".to_string(), "PROPN".to_string()));
        let dog = MorWord::new("dog", "n");
        assert_eq!(e.translate(&dog), ("dog".to_string(), "NOUN".to_string()));
    }

    #[test]
    fn test_pos_only_rule_is_a_wildcard() {
        let e = engine(&[("n", "NOUN")]);
        let word = MorWord::new("dogs", "n")
            .with_sub_pos(["x"])
            .with_sxfx(["y"])
            .with_sfx(["PL"])
            .with_stem("dog");
        assert_eq!(e.replacement_for(&word), Some("NOUN"));
    }

    #[test]
    fn test_unmatched_word_keeps_its_tag() {
        let e = engine(&[("n", "NOUN")]);
        let go = MorWord::new("go", "v");
        assert_eq!(e.replacement_for(&go), None);
        assert_eq!(e.translate(&go), ("go".to_string(), "v".to_string()));
    }

    #[test]
    fn test_equal_priority_first_in_table_wins() {
        let e = engine(&[("n:prop", "FIRST"), ("n-PL", "SECOND")]);
        let w = MorWord::new("Smiths", "n").with_sub_pos(["prop"]).with_sfx(["PL"]);
        assert_eq!(e.replacement_for(&w), Some("FIRST"));
    }

    #[test]
    fn test_translation_is_deterministic() {
        let e = engine(&[("n", "NOUN"), ("pro:indef-PL", "INDEFPL")]);
        let w = MorWord::new("some", "pro").with_sub_pos(["indef"]).with_sfx(["PL"]);
        assert_eq!(e.translate(&w), e.translate(&w));
    }

    #[test]
    fn test_make_translator_matches_engine() {
        let rules = Arc::new(compile_rules([("n:prop", "PROPN")]).unwrap());
        let translate = make_translator(Arc::clone(&rules));
        let w = MorWord::new("Paris", "n").with_sub_pos(["prop"]);
        assert_eq!(translate(&w), ("Paris".to_string(), "PROPN".to_string()));
        assert_eq!(translate(&MorWord::new("a", "det")), ("a".to_string(), "det".to_string()));
    }

    #[test]
    fn test_empty_rule_list_always_falls_back() {
        let e = RuleEngine::new(CompiledRules::default());
        let w = MorWord::new("dog", "n");
        assert_eq!(e.translate(&w).1, "n");
    }
}
