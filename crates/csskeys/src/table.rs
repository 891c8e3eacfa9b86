//! Key records and the capacity-bounded key table.
//!
//! A [`KeyTable`] is an ordered list of [`KeyRecord`]s. Records never own
//! text: each one is an offset and a length into the
//! [`SourceBuffer`](crate::SourceBuffer) it was parsed from, plus a kind,
//! state flags and (for selectors) a link to the first property record of
//! the block the selector owns.
//!
//! Tables are sized by the caller. [`KeyTable::new`] with capacity 0 gives a
//! probe table that the parser only counts into; any other capacity gives a
//! materializing table that records are written to.

use crate::error::{ParseError, Result};
use crate::flags::StateFlags;
use crate::options::{MAX_RECORDS, ParseOptions};

/// What a record stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// `.name`
    Class,
    /// `#name`
    Id,
    /// `*`
    Wildcard,
    /// Property name, left of `:`.
    Key,
    /// Property value, right of `:`.
    Value,
}

impl RecordKind {
    /// Kind of a selector token, decided by its leading marker byte.
    pub fn from_marker(marker: u8) -> Option<Self> {
        match marker {
            b'.' => Some(Self::Class),
            b'#' => Some(Self::Id),
            b'*' => Some(Self::Wildcard),
            _ => None,
        }
    }

    pub fn is_selector(self) -> bool {
        matches!(self, Self::Class | Self::Id | Self::Wildcard)
    }
}

/// One parsed selector, key or value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyRecord {
    kind: RecordKind,
    flags: StateFlags,
    offset: usize,
    len: usize,
    link: usize,
}

impl KeyRecord {
    pub fn new(kind: RecordKind, offset: usize, len: usize) -> Self {
        Self {
            kind,
            flags: StateFlags::empty(),
            offset,
            len,
            link: 0,
        }
    }

    pub fn with_flags(mut self, flags: StateFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_link(mut self, link: usize) -> Self {
        self.link = link;
        self
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// State flags. Always empty for keys and values.
    pub fn flags(&self) -> StateFlags {
        self.flags
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `(offset, len)` into the source buffer.
    pub fn span(&self) -> (usize, usize) {
        (self.offset, self.len)
    }

    /// Index of the first property record owned by this selector. When the
    /// selector owns no properties this is the index just past its own
    /// selector group. Meaningless for keys and values.
    pub fn link(&self) -> usize {
        self.link
    }

    pub fn is_selector(&self) -> bool {
        self.kind.is_selector()
    }

    pub(crate) fn set_link(&mut self, link: usize) {
        self.link = link;
    }
}

/// Caller-sized storage for key records.
///
/// # Example
///
/// ```
/// use csskeys::{KeyTable, ParseOutcome, Parser, SourceBuffer};
///
/// let source = SourceBuffer::new(".a { x: 1; }");
/// let parser = Parser::default();
///
/// let ParseOutcome::NeedCapacity(n) = parser.parse(&source, None).unwrap() else {
///     unreachable!()
/// };
/// let mut table = KeyTable::new(n).unwrap();
/// assert_eq!(parser.parse(&source, Some(&mut table)).unwrap(), ParseOutcome::Parsed(3));
/// assert_eq!(table.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyTable {
    records: Vec<KeyRecord>,
    capacity: usize,
}

impl KeyTable {
    /// Allocates room for `capacity` records.
    ///
    /// Fails with [`ParseError::CapacityExceeded`] above the 4095 record
    /// ceiling and with [`ParseError::OutOfMemory`] if the storage cannot be
    /// reserved.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity > MAX_RECORDS {
            return Err(ParseError::CapacityExceeded {
                required: capacity,
                capacity: MAX_RECORDS,
            });
        }

        let mut records = Vec::new();
        records
            .try_reserve_exact(capacity)
            .map_err(|_| ParseError::OutOfMemory)?;

        Ok(Self { records, capacity })
    }

    /// Declared capacity. Zero means the table is only used for probing.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of records written by the last successful parse.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[KeyRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&KeyRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KeyRecord> {
        self.records.iter()
    }

    /// Drops every record, keeping the capacity.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// The key/value records owned by the selector at `index`, as pairs.
    ///
    /// Returns an empty iterator for non-selector indices.
    pub fn properties(&self, index: usize) -> impl Iterator<Item = (&KeyRecord, &KeyRecord)> {
        let start = match self.records.get(index) {
            Some(record) if record.is_selector() => record.link(),
            _ => self.records.len(),
        };
        let owned = self.records.get(start..).unwrap_or_default();
        let end = owned
            .iter()
            .position(KeyRecord::is_selector)
            .unwrap_or(owned.len());

        owned[..end].chunks_exact(2).filter_map(|pair| match pair {
            [key, value] if key.kind() == RecordKind::Key && value.kind() == RecordKind::Value => {
                Some((key, value))
            }
            _ => None,
        })
    }

    pub(crate) fn records_mut(&mut self) -> &mut [KeyRecord] {
        &mut self.records
    }
}

impl<'a> IntoIterator for &'a KeyTable {
    type Item = &'a KeyRecord;
    type IntoIter = std::slice::Iter<'a, KeyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Central write path shared by the probe and materializing passes.
///
/// Both passes push exactly the same records in the same order; the only
/// difference is whether a table is attached to receive them.
pub(crate) struct TableBuilder<'t> {
    table: Option<&'t mut KeyTable>,
    count: usize,
    max_records: usize,
    max_token_len: usize,
}

impl<'t> TableBuilder<'t> {
    pub(crate) fn new(table: Option<&'t mut KeyTable>, options: &ParseOptions) -> Self {
        Self {
            table,
            count: 0,
            max_records: options.max_records(),
            max_token_len: options.max_token_len(),
        }
    }

    /// Records pushed so far, written or not.
    pub(crate) fn count(&self) -> usize {
        self.count
    }

    pub(crate) fn push(&mut self, record: KeyRecord) -> Result<()> {
        if record.len() >= self.max_token_len {
            return Err(ParseError::TokenTooLong {
                offset: record.offset(),
                len: record.len(),
                max: self.max_token_len,
            });
        }

        if self.count >= self.max_records {
            return Err(ParseError::CapacityExceeded {
                required: self.count + 1,
                capacity: self.max_records,
            });
        }

        if let Some(table) = self.table.as_deref_mut() {
            if table.records.len() < table.capacity {
                table.records.push(record);
            }
        }

        log::trace!(
            "record {}: {:?} at {}+{}",
            self.count,
            record.kind(),
            record.offset(),
            record.len()
        );
        self.count += 1;
        Ok(())
    }
}
