// slashtag/src/logger.rs
//! Logger setup for the slashtag binary.
//!
//! Logs always go to stderr so they never mix with translated output.

use env_logger::{Builder, Env, Target};
use log::{debug, LevelFilter};

const CRATES: [&str; 2] = ["slashtag", "slashtag_core"];

/// Initialises `env_logger` from `RUST_LOG` (default `warn`).
///
/// `Some(level)` forces that level for the slashtag crates; `LevelFilter::Off`
/// silences everything. Repeated calls keep the first logger and note the
/// refusal at debug level.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder.target(Target::Stderr).format_timestamp(None);

    match level {
        Some(LevelFilter::Off) => {
            builder.filter_level(LevelFilter::Off);
        }
        Some(level) => {
            for name in CRATES {
                builder.filter_module(name, level);
            }
        }
        None => {}
    }

    if let Err(e) = builder.try_init() {
        debug!("Logger already initialised, keeping it: {}", e);
    }
}
