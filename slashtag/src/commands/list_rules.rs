//! `--list-rules`: shows the compiled rules in the order they are tried.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

use slashtag_core::{CompiledRules, MatchSpec};

/// One rule as shown to the user.
#[derive(Debug, Serialize)]
pub struct RuleListing<'a> {
    /// 1-based position in match order.
    pub rank: usize,
    pub priority: usize,
    pub pattern: &'a str,
    pub tag: &'a str,
    pub spec: &'a MatchSpec,
}

pub fn rule_listings(rules: &CompiledRules) -> Vec<RuleListing<'_>> {
    rules
        .iter()
        .enumerate()
        .map(|(i, rule)| RuleListing {
            rank: i + 1,
            priority: rule.priority,
            pattern: &rule.source,
            tag: &rule.replacement,
            spec: &rule.spec,
        })
        .collect()
}

/// Writes the listing as pretty-printed JSON.
pub fn print_rules(rules: &CompiledRules, out: &mut dyn Write) -> Result<()> {
    let json = serde_json::to_string_pretty(&rule_listings(rules)).context("Failed to serialize rule listing")?;
    writeln!(out, "{}", json).context("Failed to write rule listing")?;
    Ok(())
}
