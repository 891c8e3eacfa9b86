//! State flag vocabulary and the flag codec.
//!
//! A selector header may carry bare keywords after its class tokens
//! (`.polygon hidden dragging { ... }`). Each keyword of the fixed
//! [`VOCABULARY`] owns one bit of a 16-bit mask: the keyword at index `i`
//! owns bit `i`. Keywords outside the vocabulary carry no bit.
//!
//! The codec converts in both directions:
//!
//! - keyword(s) to mask: [`StateFlags::from_keyword`], [`StateFlags::from_keywords`]
//! - mask to text: the [`Display`](std::fmt::Display) impl and [`flags_to_string`],
//!   which also answers size queries when no destination is given.

use std::fmt;

use bitflags::bitflags;

use crate::error::{ParseError, Result};

/// The ordered keyword vocabulary. Bit `i` of a [`StateFlags`] mask is
/// named by `VOCABULARY[i]`.
pub const VOCABULARY: [&str; 11] = [
    "readonly", "hidden", "hilight", "pickup", "dragging", "deleting", "fault", "flash", "zoomin",
    "zoomout", "panning",
];

/// A mask is 16 bits wide; the vocabulary uses the low 11.
pub const MAX_FLAG_BITS: usize = 16;

bitflags! {
    /// State bits attached to a selector record.
    ///
    /// # Example
    ///
    /// ```
    /// use csskeys::StateFlags;
    ///
    /// let flags = StateFlags::from_keywords("hidden zoomin");
    /// assert!(flags.contains(StateFlags::HIDDEN | StateFlags::ZOOMIN));
    /// assert_eq!(flags.to_string(), "hidden zoomin");
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StateFlags: u16 {
        const READONLY = 1 << 0;
        const HIDDEN   = 1 << 1;
        const HILIGHT  = 1 << 2;
        const PICKUP   = 1 << 3;
        const DRAGGING = 1 << 4;
        const DELETING = 1 << 5;
        const FAULT    = 1 << 6;
        const FLASH    = 1 << 7;
        const ZOOMIN   = 1 << 8;
        const ZOOMOUT  = 1 << 9;
        const PANNING  = 1 << 10;
    }
}

impl StateFlags {
    /// Looks up a single keyword. Matching is exact and case-sensitive.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        VOCABULARY
            .iter()
            .position(|word| *word == keyword)
            .map(|bit| Self::from_bits_retain(1u16 << bit))
    }

    /// Ors together every vocabulary keyword found in `text`, which may be
    /// separated by spaces, commas or pipes. Unknown words are ignored.
    pub fn from_keywords(text: &str) -> Self {
        text.split([' ', ',', '|'])
            .filter_map(Self::from_keyword)
            .fold(Self::empty(), |acc, flag| acc | flag)
    }

    /// The vocabulary keywords set in this mask, in vocabulary order.
    /// Bits with no vocabulary entry are skipped.
    pub fn keywords(self) -> impl Iterator<Item = &'static str> {
        VOCABULARY
            .iter()
            .enumerate()
            .filter(move |(bit, _)| self.bits() & (1u16 << *bit) != 0)
            .map(|(_, word)| *word)
    }

    /// Length in bytes of the space-joined keyword string.
    pub fn encoded_len(self) -> usize {
        let (count, letters) = self
            .keywords()
            .fold((0usize, 0usize), |(count, letters), word| {
                (count + 1, letters + word.len())
            });
        letters + count.saturating_sub(1)
    }
}

impl fmt::Display for StateFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.keywords().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(word)?;
        }
        Ok(())
    }
}

/// Writes the keywords of `flags` into `out`, space separated.
///
/// With `out == None` nothing is written and the required length is
/// returned, so callers can size a buffer first and write second. With a
/// destination, returns the number of bytes written, or
/// [`ParseError::BufferTooSmall`] if the text does not fit.
///
/// ```
/// use csskeys::{StateFlags, flags_to_string};
///
/// let flags = StateFlags::READONLY | StateFlags::PANNING;
/// let needed = flags_to_string(flags, None).unwrap();
/// let mut buf = vec![0u8; needed];
/// let written = flags_to_string(flags, Some(&mut buf)).unwrap();
/// assert_eq!(&buf[..written], b"readonly panning");
/// ```
pub fn flags_to_string(flags: StateFlags, out: Option<&mut [u8]>) -> Result<usize> {
    let required = flags.encoded_len();
    let Some(buf) = out else {
        return Ok(required);
    };

    if buf.len() < required {
        return Err(ParseError::BufferTooSmall {
            required,
            available: buf.len(),
        });
    }

    let mut pos = 0;
    for word in flags.keywords() {
        if pos > 0 {
            buf[pos] = b' ';
            pos += 1;
        }
        buf[pos..pos + word.len()].copy_from_slice(word.as_bytes());
        pos += word.len();
    }
    Ok(pos)
}
