//! Translate command: turns corpus files into slash/tag lines.

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;
use std::path::{Path, PathBuf};

use slashtag_core::{
    translate_file, CorpusReader, DocumentOptions, RuleEngine, RuleTable, TranslationEngine,
};

/// Options for a translation run.
#[derive(Debug, Clone, Default)]
pub struct TranslateOptions {
    pub corpora: Vec<PathBuf>,
    pub document: DocumentOptions,
}

/// What happened during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_translated: usize,
    pub files_failed: usize,
    pub lines_written: usize,
}

/// Loads and compiles the rule table. Any failure here aborts the run.
pub fn load_engine(rules: Option<&Path>) -> Result<RuleEngine> {
    let table = match rules {
        Some(path) => RuleTable::load_from_file(path)
            .with_context(|| format!("Failed to load rule table {}", path.display()))?,
        None => RuleTable::load_default_rules().context("Failed to load the bundled rule table")?,
    };
    let engine = RuleEngine::from_table(&table)
        .with_context(|| format!("Failed to compile rule table {}", table.source))?;
    info!("Compiled {} rules from {}.", engine.compiled_rules().len(), table.source);
    Ok(engine)
}

/// Translates every corpus file in order.
///
/// A file that cannot be read is reported on `err_out` and skipped; the
/// remaining files are still translated.
pub fn run_translate(
    engine: &dyn TranslationEngine,
    reader: &dyn CorpusReader,
    opts: &TranslateOptions,
    out: &mut dyn Write,
    err_out: &mut dyn Write,
) -> Result<RunSummary> {
    info!("Starting slashtag translation of {} file(s).", opts.corpora.len());
    let mut summary = RunSummary::default();

    for path in &opts.corpora {
        match translate_file(engine, reader, path, &opts.document) {
            Ok(lines) => {
                for line in &lines {
                    writeln!(out, "{}", line).context("Failed to write output")?;
                }
                summary.files_translated += 1;
                summary.lines_written += lines.len();
            }
            Err(e) => {
                debug!("Skipping {}: {}", path.display(), e);
                writeln!(err_out, "Error: {}", e).context("Failed to write error message")?;
                summary.files_failed += 1;
            }
        }
    }
    out.flush().context("Failed to flush output")?;

    debug!(
        "Translation finished: {} file(s) translated, {} failed, {} line(s) written.",
        summary.files_translated, summary.files_failed, summary.lines_written
    );
    Ok(summary)
}
