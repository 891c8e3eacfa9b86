//! File-level entry points for [`csskeys`].
//!
//! The `csskeys` crate works purely on in-memory text. This crate adds the
//! pieces around it: reading stylesheets from disk, a combined error type,
//! and a file logger for the parser's diagnostics.
//!
//! ```no_run
//! use csskeys_rs::{load_stylesheet, print_table};
//!
//! let (source, table) = load_stylesheet("styles/map.css")?;
//! print!("{}", print_table(&source, &table));
//! # Ok::<(), csskeys_rs::CsskeysError>(())
//! ```

pub mod error;
pub mod log_init;

use std::path::Path;

pub use csskeys::{
    KeyRecord, KeyTable, ParseError, ParseOptions, ParseOutcome, Parser, RecordKind, SourceBuffer,
    StateFlags, print_table,
};
pub use error::{CsskeysError, Result};
pub use log_init::init_logger;

// Re-export the log crate so callers can configure their own logger.
pub use log;

/// Reads and normalizes a stylesheet file.
pub fn load_file(path: impl AsRef<Path>) -> Result<SourceBuffer> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    log::debug!("loaded {} ({} bytes)", path.display(), bytes.len());
    Ok(SourceBuffer::from_bytes(bytes)?)
}

/// Reads a stylesheet file and parses it with default limits.
pub fn load_stylesheet(path: impl AsRef<Path>) -> Result<(SourceBuffer, KeyTable)> {
    load_stylesheet_with(path, ParseOptions::default())
}

/// Reads a stylesheet file and parses it with the given limits.
pub fn load_stylesheet_with(
    path: impl AsRef<Path>,
    options: ParseOptions,
) -> Result<(SourceBuffer, KeyTable)> {
    let source = load_file(path)?;
    let table = Parser::new(options).parse_to_table(&source)?;
    Ok((source, table))
}
