// slashtag/src/cli.rs
//! This file defines the command-line interface (CLI) for the slashtag application.
//! License: MIT OR Apache-2.0

use clap::Parser;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "slashtag",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Convert MOR-tagged TalkBank transcripts to slash/tag text",
    long_about = "slashtag reads TalkBank XML transcripts and prints one line per utterance as whitespace-separated word/tag tokens. MOR tags are rewritten through a two-column CSV rule table (pattern,tag); the most specific matching rule wins, and words no rule matches keep their original part of speech.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Corpus files to translate.
    #[arg(value_name = "FILE", required_unless_present = "list_rules", help = "TalkBank XML corpus files to translate.")]
    pub corpora: Vec<PathBuf>,

    /// Path to the rule table (CSV: pattern,tag). Uses the bundled table when absent.
    #[arg(long, short = 'r', value_name = "FILE", env = "SLASHTAG_RULES", help = "Rule table to use instead of the bundled one.")]
    pub rules: Option<PathBuf>,

    /// Only translate utterances by this speaker.
    #[arg(long, short = 's', value_name = "CODE", help = "Only translate utterances by this speaker code (e.g. CHI).")]
    pub speaker: Option<String>,

    /// Prefix each output line with its speaker code.
    #[arg(long = "speaker-labels", short = 'l', help = "Prefix each line with \"SPEAKER: \".")]
    pub speaker_labels: bool,

    /// Write output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Print the compiled rules in match order as JSON and exit.
    #[arg(long = "list-rules", help = "Print the compiled rules in match order as JSON and exit.")]
    pub list_rules: bool,

    /// Disable informational messages
    #[arg(long, short = 'q', conflicts_with = "debug", help = "Suppress all log output.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for the slashtag crates)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_list_rules_needs_no_corpus() {
        let cli = Cli::try_parse_from(["slashtag", "--list-rules"]).unwrap();
        assert!(cli.list_rules);
        assert!(cli.corpora.is_empty());
    }

    #[test]
    fn test_full_invocation() {
        let cli = Cli::try_parse_from([
            "slashtag", "-s", "CHI", "-l", "--rules", "my.csv", "a.xml", "b.xml",
        ])
        .unwrap();
        assert_eq!(cli.speaker.as_deref(), Some("CHI"));
        assert!(cli.speaker_labels);
        assert_eq!(cli.rules, Some(PathBuf::from("my.csv")));
        assert_eq!(cli.corpora, vec![PathBuf::from("a.xml"), PathBuf::from("b.xml")]);
    }
}
