// slashtag/src/lib.rs
//! # slashtag CLI
//!
//! Command-line front end for `slashtag-core`: loads a rule table, reads
//! TalkBank XML transcripts and prints slash/tag lines.

pub mod cli;
pub mod commands;
pub mod logger;
