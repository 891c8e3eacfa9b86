//! Stylesheet parsing into a key table.
//!
//! The pipeline, in order:
//!
//! - [`blocks`]: locate each `{ ... }` block and its selector header
//! - [`selectors`]: split the header into class tokens and resolve their flags
//! - [`properties`]: split the block body into `key: value` pairs
//! - the table builder appends every token as a [`KeyRecord`]
//! - [`linker`]: stamp each selector with the index of the block it owns
//!
//! ## Capacity negotiation
//!
//! [`Parser::parse`] is called twice. Without a table (or with a table of
//! capacity 0) it only counts, and reports the count as
//! [`ParseOutcome::NeedCapacity`]. Called again with a table of at least that
//! capacity, it performs the identical walk, writes the records and returns
//! [`ParseOutcome::Parsed`]. [`Parser::parse_to_table`] does both steps.
//!
//! ```rust
//! use csskeys::{Parser, RecordKind, SourceBuffer};
//!
//! let source = SourceBuffer::new(".polygon { border-width: 3px; fill-color: #00FFFF; }");
//! let table = Parser::default().parse_to_table(&source).unwrap();
//!
//! assert_eq!(table.len(), 5);
//! assert_eq!(table.records()[0].kind(), RecordKind::Class);
//! assert_eq!(table.records()[0].link(), 1);
//! assert_eq!(source.text(&table.records()[4]), "#00FFFF");
//! ```

pub mod blocks;
pub mod linker;
pub mod properties;
pub mod selectors;

use nom::Offset;

use crate::error::{ParseError, Result};
use crate::options::ParseOptions;
use crate::source::SourceBuffer;
use crate::table::{KeyRecord, KeyTable, RecordKind, TableBuilder};

use self::blocks::BlockLocator;
use self::linker::link_selectors;
use self::properties::PropertyTokenizer;

/// Successful result of [`Parser::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome {
    /// The table now holds this many records, fully linked.
    Parsed(usize),
    /// Probe result: a table with at least this capacity is required.
    NeedCapacity(usize),
}

/// Parses normalized stylesheets into key tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    options: ParseOptions,
}

impl Parser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Runs one negotiation phase over `source`.
    ///
    /// With `table == None` or a zero-capacity table this is a probe: nothing
    /// is written and a non-empty stylesheet yields
    /// [`ParseOutcome::NeedCapacity`]. Otherwise records are written and
    /// linked, and [`ParseOutcome::Parsed`] carries their count.
    ///
    /// On any error the table is left empty; a half-filled table is never
    /// exposed.
    pub fn parse(
        &self,
        source: &SourceBuffer,
        mut table: Option<&mut KeyTable>,
    ) -> Result<ParseOutcome> {
        if source.len() > self.options.max_source_len() {
            return Err(ParseError::InputTooLarge {
                len: source.len(),
                max: self.options.max_source_len(),
            });
        }

        let capacity = table.as_deref().map_or(0, KeyTable::capacity);
        if let Some(table) = table.as_deref_mut() {
            table.clear();
        }

        let walked = self.walk(source, table.as_deref_mut());
        let count = match walked {
            Ok(count) => count,
            Err(err) => {
                log::debug!("parse failed: {err}");
                if let Some(table) = table.as_deref_mut() {
                    table.clear();
                }
                return Err(err);
            }
        };

        if capacity == 0 {
            log::debug!("probe counted {count} records");
            return Ok(match count {
                0 => ParseOutcome::Parsed(0),
                n => ParseOutcome::NeedCapacity(n),
            });
        }

        let Some(table) = table else {
            return Ok(ParseOutcome::NeedCapacity(count));
        };

        if count > capacity {
            table.clear();
            return Err(ParseError::CapacityExceeded {
                required: count,
                capacity,
            });
        }

        link_selectors(table.records_mut());
        log::debug!("parsed {count} records");
        Ok(ParseOutcome::Parsed(count))
    }

    /// Probes, allocates a table of the reported size and materializes it.
    pub fn parse_to_table(&self, source: &SourceBuffer) -> Result<KeyTable> {
        match self.parse(source, None)? {
            ParseOutcome::Parsed(_) => Ok(KeyTable::default()),
            ParseOutcome::NeedCapacity(required) => {
                let mut table = KeyTable::new(required)?;
                match self.parse(source, Some(&mut table))? {
                    ParseOutcome::Parsed(_) => Ok(table),
                    ParseOutcome::NeedCapacity(required) => Err(ParseError::CapacityExceeded {
                        required,
                        capacity: table.capacity(),
                    }),
                }
            }
        }
    }

    /// The single traversal shared by both phases. Returns the record count.
    fn walk(&self, source: &SourceBuffer, table: Option<&mut KeyTable>) -> Result<usize> {
        let text = source.as_str();
        let mut builder = TableBuilder::new(table, &self.options);

        for block in BlockLocator::new(text) {
            let block = block?;

            let Some(header) = block.selector() else {
                log::warn!("skipping block at offset {}: no selector", block.open);
                continue;
            };

            let header_offset = text.offset(header);
            let classes = selectors::classify(header);
            let first_property = builder.count() + classes.len();

            for class in classes {
                let offset = header_offset + class.offset;
                let record = KeyRecord::new(class.kind, offset, class.text.len())
                    .with_flags(class.flags)
                    .with_link(first_property);
                builder.push(record)?;
            }

            for property in PropertyTokenizer::new(block.body) {
                builder.push(KeyRecord::new(
                    RecordKind::Key,
                    text.offset(property.key),
                    property.key.len(),
                ))?;
                builder.push(KeyRecord::new(
                    RecordKind::Value,
                    text.offset(property.value),
                    property.value.len(),
                ))?;
            }
        }

        Ok(builder.count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::StateFlags;

    fn parse(css: &str) -> (SourceBuffer, KeyTable) {
        let source = SourceBuffer::new(css);
        let table = Parser::default().parse_to_table(&source).unwrap();
        (source, table)
    }

    fn describe(source: &SourceBuffer, table: &KeyTable) -> Vec<(RecordKind, String)> {
        table
            .iter()
            .map(|r| (r.kind(), source.text(r).to_string()))
            .collect()
    }

    #[test]
    fn literal_polygon_block() {
        let (source, table) = parse(".polygon { border-width: 3px; fill-color: #00FFFF; }");
        assert_eq!(
            describe(&source, &table),
            vec![
                (RecordKind::Class, ".polygon".to_string()),
                (RecordKind::Key, "border-width".to_string()),
                (RecordKind::Value, "3px".to_string()),
                (RecordKind::Key, "fill-color".to_string()),
                (RecordKind::Value, "#00FFFF".to_string()),
            ]
        );
        assert_eq!(table.records()[0].flags(), StateFlags::empty());
        assert_eq!(table.records()[0].link(), 1);
    }

    #[test]
    fn probe_reports_required_capacity() {
        let source = SourceBuffer::new(".a { x: 1; } .b .c { y: 2; }");
        let parser = Parser::default();
        assert_eq!(parser.parse(&source, None), Ok(ParseOutcome::NeedCapacity(7)));

        let mut probe = KeyTable::new(0).unwrap();
        assert_eq!(
            parser.parse(&source, Some(&mut probe)),
            Ok(ParseOutcome::NeedCapacity(7))
        );
        assert!(probe.is_empty());
    }

    #[test]
    fn materialize_with_spare_capacity() {
        let source = SourceBuffer::new(".a { x: 1; }");
        let mut table = KeyTable::new(10).unwrap();
        assert_eq!(
            Parser::default().parse(&source, Some(&mut table)),
            Ok(ParseOutcome::Parsed(3))
        );
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn small_table_is_a_capacity_error() {
        let source = SourceBuffer::new(".a { x: 1; y: 2; }");
        let mut table = KeyTable::new(2).unwrap();
        assert_eq!(
            Parser::default().parse(&source, Some(&mut table)),
            Err(ParseError::CapacityExceeded {
                required: 5,
                capacity: 2
            })
        );
        assert!(table.is_empty());
    }

    #[test]
    fn empty_stylesheet_parses_to_nothing() {
        let (_, table) = parse("  /* nothing */  ");
        assert!(table.is_empty());
        assert_eq!(
            Parser::default().parse(&SourceBuffer::new(""), None),
            Ok(ParseOutcome::Parsed(0))
        );
    }

    #[test]
    fn block_without_selector_is_skipped() {
        let (source, table) = parse("body { x: 1; } .a { y: 2; }");
        assert_eq!(table.len(), 3);
        assert_eq!(source.text(&table.records()[0]), ".a");
        assert_eq!(source.text(&table.records()[1]), "y");
    }

    #[test]
    fn malformed_block_clears_table() {
        let source = SourceBuffer::new(".a { x: 1; } .b { y: 2;");
        let mut table = KeyTable::new(16).unwrap();
        assert_eq!(
            Parser::default().parse(&source, Some(&mut table)),
            Err(ParseError::MalformedBlock { offset: 16 })
        );
        assert!(table.is_empty());
    }

    #[test]
    fn oversized_source_is_rejected() {
        let parser = Parser::new(ParseOptions::default().with_max_source_len(8));
        let source = SourceBuffer::new(".abc { x: 1; }");
        assert_eq!(
            parser.parse(&source, None),
            Err(ParseError::InputTooLarge { len: 14, max: 8 })
        );
    }

    #[test]
    fn long_token_is_rejected() {
        let parser = Parser::new(ParseOptions::default().with_max_token_len(5));
        let source = SourceBuffer::new(".a { width: 1; }");
        assert_eq!(
            parser.parse_to_table(&source),
            Err(ParseError::TokenTooLong {
                offset: 5,
                len: 5,
                max: 5
            })
        );
    }

    #[test]
    fn record_limit_is_enforced() {
        let parser = Parser::new(ParseOptions::default().with_max_records(4));
        let source = SourceBuffer::new(".a { x: 1; y: 2; }");
        assert_eq!(
            parser.parse(&source, None),
            Err(ParseError::CapacityExceeded {
                required: 5,
                capacity: 4
            })
        );
    }

    #[test]
    fn multiline_source_keeps_offsets() {
        let css = ".a,\n.b hidden\n{\n  color: red;\n}\n";
        let (source, table) = parse(css);
        assert_eq!(source.len(), css.len());
        let texts: Vec<_> = table
            .iter()
            .map(|r| &css[r.offset()..r.offset() + r.len()])
            .collect();
        assert_eq!(texts, vec![".a", ".b", "color", "red"]);
        assert_eq!(table.records()[0].flags(), StateFlags::empty());
        assert_eq!(table.records()[1].flags(), StateFlags::HIDDEN);
    }
}
