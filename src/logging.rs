//! Diagnostic logging to stderr.
//!
//! Reports meant for the user go to stdout through [`output`](crate::output);
//! `tracing` events are for diagnosing the tool itself. `RUST_LOG` wins when
//! set, otherwise the level is `warn`, or `debug` with `--verbose`.

use std::error::Error;
use tracing_subscriber::EnvFilter;

pub fn init(verbose: bool) -> Result<(), Box<dyn Error + Send + Sync>> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()?;

    Ok(())
}
