//! compiler.rs - Compiles rule-table rows into a priority-ordered rule list.
//!
//! Each row's pattern is parsed into a [`MatchSpec`]. The resulting rules are
//! stable-sorted by priority, highest first, so a specific rule is always tried
//! before a more general one and rules of equal priority keep table order.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use serde::Serialize;

use crate::config::{RuleRow, RuleTable};
use crate::errors::SlashtagError;
use crate::rules::pattern::{parse_pattern, MatchSpec};

/// A single compiled rewrite rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompiledRule {
    /// What a word must look like for this rule to apply.
    pub spec: MatchSpec,
    /// The tag emitted when the rule applies.
    pub replacement: String,
    /// Number of components the pattern constrains beyond `pos`.
    pub priority: usize,
    /// The pattern exactly as written in the table.
    pub source: String,
}

/// The full compiled rule list, in match order.
///
/// Immutable once built; share it by reference or `Arc` across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompiledRules {
    pub rules: Vec<CompiledRule>,
}

impl CompiledRules {
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CompiledRule> {
        self.rules.iter()
    }

    /// `(spec, replacement)` pairs in final match order.
    pub fn pairs(&self) -> impl Iterator<Item = (&MatchSpec, &str)> {
        self.rules.iter().map(|r| (&r.spec, r.replacement.as_str()))
    }
}

/// Compiles `(pattern, replacement)` rows into priority order.
///
/// Every malformed pattern is reported; if any row fails, no rules are returned.
pub fn compile_rules<I, P, T>(rows: I) -> Result<CompiledRules, SlashtagError>
where
    I: IntoIterator<Item = (P, T)>,
    P: AsRef<str>,
    T: Into<String>,
{
    let mut compiled = Vec::new();
    let mut errors = Vec::new();

    for (pattern, replacement) in rows {
        let pattern = pattern.as_ref();
        match parse_pattern(pattern) {
            Ok(parsed) => {
                let replacement = replacement.into();
                debug!(
                    target: "slashtag_core::compiler",
                    "Rule '{}' -> '{}' compiled with priority {}.",
                    pattern, replacement, parsed.priority
                );
                compiled.push(CompiledRule {
                    spec: parsed.spec,
                    replacement,
                    priority: parsed.priority,
                    source: pattern.to_string(),
                });
            }
            Err(e) => errors.push(e),
        }
    }

    match errors.len() {
        0 => {}
        1 => return Err(errors.remove(0)),
        count => {
            let details = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<String>>()
                .join("\n");
            return Err(SlashtagError::RuleCompilation { count, details });
        }
    }

    // `sort_by` is stable: equal priorities keep table order.
    compiled.sort_by(|a, b| b.priority.cmp(&a.priority));

    debug!("Finished compiling rules. Total compiled: {}.", compiled.len());
    Ok(CompiledRules { rules: compiled })
}

/// Compiles every row of a loaded [`RuleTable`].
pub fn compile_table(table: &RuleTable) -> Result<CompiledRules, SlashtagError> {
    compile_rules(
        table
            .rows
            .iter()
            .map(|RuleRow { pattern, tag, .. }| (pattern.as_str(), tag.clone())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specific_rules_sort_first() {
        let compiled = compile_rules([("n", "NOUN"), ("n:prop", "PROPN")]).unwrap();
        let sources: Vec<&str> = compiled.iter().map(|r| r.source.as_str()).collect();
        assert_eq!(sources, vec!["n:prop", "n"]);
        assert_eq!(compiled.rules[0].priority, 1);
        assert_eq!(compiled.rules[1].priority, 0);
    }

    #[test]
    fn test_equal_priority_keeps_table_order() {
        let rows = [
            ("v", "VERB"),
            ("n:prop", "PROPN"),
            ("adj", "ADJ"),
            ("n-PL", "NNS"),
            ("pro:indef-PL", "INDEFPL"),
            ("n", "NOUN"),
        ];
        let compiled = compile_rules(rows).unwrap();
        let order: Vec<&str> = compiled.pairs().map(|(_, tag)| tag).collect();
        assert_eq!(order, vec!["INDEFPL", "PROPN", "NNS", "VERB", "ADJ", "NOUN"]);
    }

    #[test]
    fn test_single_bad_row_reports_pattern() {
        let err = compile_rules([("n", "NOUN"), (":prop", "X")]).unwrap_err();
        assert!(matches!(err, SlashtagError::MalformedPattern { ref pattern, .. } if pattern == ":prop"));
    }

    #[test]
    fn test_all_bad_rows_are_collected() {
        let err = compile_rules([("", "A"), ("n", "NOUN"), ("n x", "B")]).unwrap_err();
        match err {
            SlashtagError::RuleCompilation { count, details } => {
                assert_eq!(count, 2);
                assert!(details.contains("'n x'"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_empty_table_compiles_to_nothing() {
        let compiled = compile_rules(Vec::<(String, String)>::new()).unwrap();
        assert!(compiled.is_empty());
    }
}
