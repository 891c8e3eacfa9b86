//! Selector header classification and state flag extraction.
//!
//! A header such as `.a c .b d e` is split into tokens on spaces, commas,
//! pipes and statement separators. Tokens starting with `.`, `#` or `*` are
//! class tokens and become selector records; every other token is a keyword.
//!
//! A class token collects the vocabulary keywords that follow it up to the
//! next comma (or the end of the header):
//!
//! ```text
//! .a .b C D E {...}   a and b both get C D E
//! .a, .b c d e {...}  only b gets c d e
//! .a c .b d e {...}   a gets c d e, b gets d e
//! .a c, .b d e {...}  a gets c, b gets d e
//! ```

use crate::flags::StateFlags;
use crate::table::RecordKind;

/// A header token, positioned relative to the start of the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderToken<'a> {
    pub text: &'a str,
    pub offset: usize,
}

impl HeaderToken<'_> {
    /// Selector kind if this is a class token, `None` for keywords.
    pub fn selector_kind(&self) -> Option<RecordKind> {
        self.text.bytes().next().and_then(RecordKind::from_marker)
    }

    fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

/// A class token with its resolved flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassSelector<'a> {
    pub kind: RecordKind,
    pub flags: StateFlags,
    pub text: &'a str,
    /// Offset relative to the start of the header.
    pub offset: usize,
}

fn is_separator(byte: u8) -> bool {
    matches!(byte, b' ' | b',' | b'|' | b';')
}

/// Splits a header into its tokens, in order.
pub fn tokenize_header(header: &str) -> Vec<HeaderToken<'_>> {
    let mut tokens = Vec::new();
    let mut start = None;

    for (i, byte) in header.bytes().enumerate() {
        match (is_separator(byte), start) {
            (true, Some(s)) => {
                tokens.push(HeaderToken {
                    text: &header[s..i],
                    offset: s,
                });
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }

    if let Some(s) = start {
        tokens.push(HeaderToken {
            text: &header[s..],
            offset: s,
        });
    }
    tokens
}

/// Resolves every class token of `header` together with its state flags.
pub fn classify(header: &str) -> Vec<ClassSelector<'_>> {
    let tokens = tokenize_header(header);

    tokens
        .iter()
        .enumerate()
        .filter_map(|(i, token)| {
            let kind = token.selector_kind()?;

            let group_end = header[token.end()..]
                .find(',')
                .map_or(header.len(), |pos| token.end() + pos);

            let flags = tokens[i + 1..]
                .iter()
                .take_while(|other| other.offset < group_end)
                .filter(|other| other.selector_kind().is_none())
                .filter_map(|other| StateFlags::from_keyword(other.text))
                .fold(StateFlags::empty(), |acc, flag| acc | flag);

            log::trace!("selector {:?} flags {:?}", token.text, flags);
            Some(ClassSelector {
                kind,
                flags,
                text: token.text,
                offset: token.offset,
            })
        })
        .collect()
}
