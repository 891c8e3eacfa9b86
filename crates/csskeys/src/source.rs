//! Source text ownership and preprocessing.
//!
//! The parser never mutates the text it indexes. Instead, a [`SourceBuffer`]
//! takes its own copy of the stylesheet and normalizes it once, up front:
//!
//! - tab, carriage return, `"` and `'` become a space
//! - newline becomes `;`, the statement separator
//! - every `/* ... */` comment, delimiters included, is blanked with spaces
//!
//! Normalization never changes the length, so every offset recorded against
//! the buffer is also a valid offset into the caller's original text.

use nom::bytes::complete::take_until;

use crate::error::Result;
use crate::table::KeyRecord;

/// Byte that newlines are rewritten to.
pub const STATEMENT_SEPARATOR: u8 = b';';

/// Normalizes control characters and blanks comments, in place.
///
/// An unterminated comment is left untouched, together with everything
/// after it.
///
/// ```
/// let mut css = *b"a:\t1;/* x */\nb: 'q';";
/// csskeys::preprocess(&mut css);
/// assert_eq!(&css, b"a: 1;       ;b:  q ;");
/// ```
pub fn preprocess(buf: &mut [u8]) {
    for byte in buf.iter_mut() {
        match *byte {
            b'\t' | b'\r' | b'"' | b'\'' => *byte = b' ',
            b'\n' => *byte = STATEMENT_SEPARATOR,
            _ => {}
        }
    }

    let mut pos = 0;
    while let Some((start, end)) = next_comment(&buf[pos..]) {
        buf[pos + start..pos + end].fill(b' ');
        pos += end;
    }
}

/// Finds the next complete comment, returning its span relative to `input`.
fn next_comment(input: &[u8]) -> Option<(usize, usize)> {
    let (rest, before) = take_until::<_, _, nom::error::Error<&[u8]>>(&b"/*"[..])(input).ok()?;
    let body = &rest[2..];
    let (_, inner) = take_until::<_, _, nom::error::Error<&[u8]>>(&b"*/"[..])(body).ok()?;
    let start = before.len();
    Some((start, start + 2 + inner.len() + 2))
}

/// A normalized stylesheet that key records point into.
///
/// The buffer must outlive every table built from it; records only store
/// offsets and lengths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBuffer {
    text: String,
}

impl SourceBuffer {
    /// Copies and normalizes `text`.
    pub fn new(text: &str) -> Self {
        let mut bytes = text.as_bytes().to_vec();
        preprocess(&mut bytes);
        // Only ASCII bytes and whole comments are rewritten, so the bytes
        // stay valid UTF-8.
        let text = String::from_utf8(bytes)
            .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned());
        Self { text }
    }

    /// Normalizes raw bytes, failing if they are not UTF-8.
    pub fn from_bytes(mut bytes: Vec<u8>) -> Result<Self> {
        preprocess(&mut bytes);
        Ok(Self {
            text: String::from_utf8(bytes)?,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The text a record refers to. Out-of-range records yield `""`.
    pub fn text(&self, record: &KeyRecord) -> &str {
        self.slice(record.offset(), record.len())
    }

    /// The text at `offset..offset + len`, or `""` if that range is not
    /// inside the buffer.
    pub fn slice(&self, offset: usize, len: usize) -> &str {
        offset
            .checked_add(len)
            .and_then(|end| self.text.get(offset..end))
            .unwrap_or("")
    }
}

impl From<&str> for SourceBuffer {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for SourceBuffer {
    fn from(text: String) -> Self {
        Self::new(&text)
    }
}
