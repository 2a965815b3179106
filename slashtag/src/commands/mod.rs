//! Command implementations for the slashtag binary.

pub mod list_rules;
pub mod translate;
