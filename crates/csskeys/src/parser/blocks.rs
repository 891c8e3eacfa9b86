//! Block location: finding each `{ ... }` span and the selector header in
//! front of it.

use nom::{
    IResult,
    bytes::complete::{take_till, take_until},
    character::complete::char,
    sequence::delimited,
};

use crate::error::{ParseError, Result};

/// A located block.
///
/// `header` runs from the end of the previous block (or the start of the
/// text) up to the `{`; `body` is everything between the braces. Both borrow
/// from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    pub header: &'a str,
    pub body: &'a str,
    /// Byte offset of the opening `{`.
    pub open: usize,
}

impl<'a> Block<'a> {
    /// The selector header: the header text from its first `.`, `#` or `*`
    /// marker onwards. `None` if the header has no marker, in which case the
    /// block produces no records.
    pub fn selector(&self) -> Option<&'a str> {
        let parsed: IResult<&str, &str> = take_till(is_selector_marker)(self.header);
        match parsed {
            Ok((selector, _)) if !selector.is_empty() => Some(selector),
            _ => None,
        }
    }
}

pub fn is_selector_marker(c: char) -> bool {
    matches!(c, '.' | '#' | '*')
}

/// Yields every block of a stylesheet in source order.
///
/// Blocks cannot nest: a body ends at the first `}` after its `{`. A `{`
/// with no closing `}` yields [`ParseError::MalformedBlock`] and ends the
/// iteration; text after the last block is ignored.
///
/// ```
/// use csskeys::parser::blocks::BlockLocator;
///
/// let blocks: Vec<_> = BlockLocator::new(".a { x: 1; } #b {}")
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(blocks.len(), 2);
/// assert_eq!(blocks[1].selector(), Some("#b "));
/// ```
pub struct BlockLocator<'a> {
    source: &'a str,
    pos: usize,
    done: bool,
}

impl<'a> BlockLocator<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            done: false,
        }
    }
}

impl<'a> Iterator for BlockLocator<'a> {
    type Item = Result<Block<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let rest = &self.source[self.pos..];
        let found: IResult<&str, &str> = take_until("{")(rest);
        let Ok((braced, header)) = found else {
            self.done = true;
            return None;
        };

        let open = self.pos + header.len();
        let closed: IResult<&str, &str> = delimited(char('{'), take_until("}"), char('}'))(braced);
        match closed {
            Ok((remaining, body)) => {
                self.pos = self.source.len() - remaining.len();
                log::debug!("block at {}..{}", open, self.pos);
                Some(Ok(Block { header, body, open }))
            }
            Err(_) => {
                self.done = true;
                Some(Err(ParseError::MalformedBlock { offset: open }))
            }
        }
    }
}
