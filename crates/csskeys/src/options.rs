//! Parser limits.
//!
//! The record layout this crate mirrors packs offsets into 20 bits, table
//! indices into 12 bits and token lengths into 8 bits. [`ParseOptions`]
//! defaults to exactly those ceilings and never lets a caller go past them.

/// Largest source the 20-bit offset field can address (1 MiB).
pub const MAX_SOURCE_LEN: usize = 1 << 20;

/// Largest number of records a 12-bit index can address.
pub const MAX_RECORDS: usize = 0xFFF;

/// Token lengths must stay below this value to fit the 8-bit length field.
pub const MAX_TOKEN_LEN: usize = 0xFF;

/// Limits applied while parsing.
///
/// # Example
///
/// ```
/// use csskeys::ParseOptions;
///
/// let options = ParseOptions::default().with_max_token_len(64);
/// assert_eq!(options.max_token_len(), 64);
/// assert_eq!(options.max_records(), 4095);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    max_source_len: usize,
    max_records: usize,
    max_token_len: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_source_len: MAX_SOURCE_LEN,
            max_records: MAX_RECORDS,
            max_token_len: MAX_TOKEN_LEN,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum accepted source size in bytes, clamped to 1 MiB.
    pub fn with_max_source_len(mut self, len: usize) -> Self {
        self.max_source_len = len.min(MAX_SOURCE_LEN);
        self
    }

    /// Sets the maximum number of records in one table, clamped to 4095.
    pub fn with_max_records(mut self, records: usize) -> Self {
        self.max_records = records.min(MAX_RECORDS);
        self
    }

    /// Sets the token length limit. A token whose length reaches this value
    /// is rejected. Clamped to 255.
    pub fn with_max_token_len(mut self, len: usize) -> Self {
        self.max_token_len = len.min(MAX_TOKEN_LEN);
        self
    }

    pub fn max_source_len(&self) -> usize {
        self.max_source_len
    }

    pub fn max_records(&self) -> usize {
        self.max_records
    }

    pub fn max_token_len(&self) -> usize {
        self.max_token_len
    }
}
