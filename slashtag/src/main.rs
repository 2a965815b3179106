// slashtag/src/main.rs
//! slashtag entry point.
//!
//! Compiles the rule table first; if that fails nothing is translated and the
//! process exits non-zero. Corpus files that cannot be read are reported and
//! skipped.

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use std::fs::File;
use std::io::{self, BufWriter, Write};

use slashtag::cli::Cli;
use slashtag::commands::list_rules::print_rules;
use slashtag::commands::translate::{load_engine, run_translate, TranslateOptions};
use slashtag::logger;
use slashtag_core::{DocumentOptions, TalkBankReader, TranslationEngine};

fn main() -> Result<()> {
    let args = Cli::parse();

    let level = if args.quiet {
        Some(LevelFilter::Off)
    } else if args.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);
    info!("slashtag started. Version: {}", env!("CARGO_PKG_VERSION"));

    let engine = load_engine(args.rules.as_deref())?;

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => {
            info!("Writing output to file: {}", path.display());
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    if args.list_rules {
        print_rules(engine.compiled_rules(), &mut out)?;
        out.flush().context("Failed to flush output")?;
        return Ok(());
    }

    let opts = TranslateOptions {
        corpora: args.corpora,
        document: DocumentOptions {
            speaker: args.speaker,
            speaker_labels: args.speaker_labels,
        },
    };
    let summary = run_translate(&engine, &TalkBankReader::new(), &opts, &mut out, &mut io::stderr())?;
    info!(
        "slashtag finished: {} file(s) translated, {} skipped.",
        summary.files_translated, summary.files_failed
    );
    Ok(())
}
