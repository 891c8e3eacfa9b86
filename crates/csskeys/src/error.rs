//! Error types for key table parsing.
//!
//! Every failure the parser can hit is reported through [`ParseError`].
//! Nothing in this crate aborts the process on bad input or exhausted
//! resources.

use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors that can occur while preprocessing, parsing or printing a stylesheet.
///
/// # Examples
///
/// ```rust
/// use csskeys::{ParseError, Parser, SourceBuffer};
///
/// // The second block is never closed.
/// let source = SourceBuffer::new(".a { x: 1; } .b { y: 2;");
/// let result = Parser::default().parse_to_table(&source);
/// assert!(matches!(result, Err(ParseError::MalformedBlock { .. })));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The source is larger than the configured maximum size.
    #[error("stylesheet is too large: {len} bytes (maximum {max})")]
    InputTooLarge { len: usize, max: usize },

    /// A materializing table is smaller than the number of records the input
    /// produces, or the global record limit was reached.
    #[error("key table capacity exceeded: {required} records required, capacity is {capacity}")]
    CapacityExceeded { required: usize, capacity: usize },

    /// A single selector, key or value token is too long to be recorded.
    #[error("token at offset {offset} is {len} bytes long (maximum {max})")]
    TokenTooLong { offset: usize, len: usize, max: usize },

    /// The record storage could not be allocated.
    #[error("out of memory allocating key table")]
    OutOfMemory,

    /// A `{` was found with no matching `}` before the end of the text.
    #[error("unterminated block starting at offset {offset}")]
    MalformedBlock { offset: usize },

    /// The destination buffer handed to the flag codec is too small.
    #[error("output buffer too small: {required} bytes required, {available} available")]
    BufferTooSmall { required: usize, available: usize },

    /// The source bytes are not valid UTF-8.
    #[error("stylesheet is not valid UTF-8")]
    InvalidEncoding(#[from] FromUtf8Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ParseError>;
