//! Rule-table configuration for `slashtag-core`.
//!
//! A rule table is a header-less, two-column CSV file: a MOR pattern and the
//! tag that replaces it. Standard CSV quoting is accepted, cells are trimmed,
//! blank lines are skipped and lines starting with `#` are comments.
//!
//! License: MIT OR Apache-2.0

use log::{debug, info};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::errors::SlashtagError;

/// Name reported for the embedded default table.
pub const DEFAULT_RULE_TABLE_NAME: &str = "larc_tags.csv";

/// One `pattern,tag` row as read from the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleRow {
    pub pattern: String,
    pub tag: String,
    /// 1-based line number in the source table.
    pub line: u64,
}

/// The raw rows of a rule table, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleTable {
    pub rows: Vec<RuleRow>,
    /// Where the rows came from, for log and error messages.
    pub source: String,
}

impl RuleTable {
    /// Loads a rule table from a CSV file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SlashtagError> {
        let path = path.as_ref();
        info!("Loading rule table from: {}", path.display());
        let file = File::open(path).map_err(|source| SlashtagError::RuleTableIo {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_reader(file, path.display().to_string())?;
        info!("Loaded {} rules from file {}.", table.rows.len(), path.display());
        Ok(table)
    }

    /// Loads the rule table bundled with the library.
    pub fn load_default_rules() -> Result<Self, SlashtagError> {
        debug!("Loading default rule table from embedded string...");
        let default_csv = include_str!("../config/larc_tags.csv");
        let table = Self::from_reader(default_csv.as_bytes(), DEFAULT_RULE_TABLE_NAME.to_string())?;
        debug!("Loaded {} default rules.", table.rows.len());
        Ok(table)
    }

    /// Parses rule rows from any CSV source.
    pub fn from_reader<R: Read>(reader: R, source: String) -> Result<Self, SlashtagError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .comment(Some(b'#'))
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rows = Vec::new();
        for result in csv_reader.records() {
            let record = result.map_err(|e| read_error(e, &source))?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            if record.len() != 2 {
                return Err(SlashtagError::MalformedRow {
                    line,
                    reason: format!("expected 2 columns (pattern, tag), found {}", record.len()),
                });
            }

            rows.push(RuleRow {
                pattern: record[0].to_string(),
                tag: record[1].to_string(),
                line,
            });
        }

        Ok(Self { rows, source })
    }

    /// Convenience for tables held in memory.
    pub fn from_csv_str(text: &str) -> Result<Self, SlashtagError> {
        Self::from_reader(text.as_bytes(), "<inline>".to_string())
    }

    /// The rows as `(pattern, tag)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rows.iter().map(|r| (r.pattern.as_str(), r.tag.as_str()))
    }
}

/// I/O failures while reading keep their `RuleTableIo` meaning; everything
/// else the csv reader reports is a row problem.
fn read_error(err: csv::Error, source: &str) -> SlashtagError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    let reason = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(io) => SlashtagError::RuleTableIo {
            path: PathBuf::from(source),
            source: io,
        },
        _ => SlashtagError::MalformedRow { line, reason },
    }
}
