//! Property tokenizing: splitting a block body into `key: value;` pairs.

use nom::{IResult, bytes::complete::take_until};

/// One `key: value` pair, both sides trimmed. The slices borrow from the
/// block body, so their offsets in the source can be recovered with
/// [`nom::Offset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Property<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

/// Iterates the properties of one block body in source order.
///
/// A key runs from the last `;` before its `:` to the `:`; a value runs from
/// the `:` to the next `;`, or to the end of the body for the last pair.
/// Iteration stops once no further `:` is found.
///
/// ```
/// use csskeys::parser::properties::PropertyTokenizer;
///
/// let pairs: Vec<_> = PropertyTokenizer::new(" width: 3px; color: #00FFFF ")
///     .map(|p| (p.key, p.value))
///     .collect();
/// assert_eq!(pairs, vec![("width", "3px"), ("color", "#00FFFF")]);
/// ```
pub struct PropertyTokenizer<'a> {
    rest: &'a str,
}

impl<'a> PropertyTokenizer<'a> {
    pub fn new(body: &'a str) -> Self {
        Self { rest: body }
    }
}

impl<'a> Iterator for PropertyTokenizer<'a> {
    type Item = Property<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let found: IResult<&str, &str> = take_until(":")(self.rest);
        let (after_key, key_region) = found.ok()?;

        let key = key_region.rsplit(';').next().unwrap_or(key_region);
        let after_colon = &after_key[1..];

        let split: IResult<&str, &str> = take_until(";")(after_colon);
        let value_region = match split {
            Ok((remaining, value)) => {
                self.rest = &remaining[1..];
                value
            }
            Err(_) => {
                self.rest = "";
                after_colon
            }
        };

        Some(Property {
            key: trim_token(key),
            value: trim_token(value_region),
        })
    }
}

/// Strips delimiter and space bytes from both ends of a token.
pub fn trim_token(token: &str) -> &str {
    token
        .trim_start_matches([':', ';', ' '])
        .trim_end_matches([';', '}', ' '])
}
