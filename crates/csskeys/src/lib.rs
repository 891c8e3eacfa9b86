//! # csskeys - zero-copy key tables for a small stylesheet dialect
//!
//! Parses stylesheets made of `.class`, `#id` and `*` selectors, each followed
//! by a `{ key: value; ... }` block, into a flat table of records that point
//! back into the source text by offset and length.
//!
//! Selector headers may also carry state keywords (`readonly`, `hidden`,
//! `dragging`, ...) that are folded into a 16-bit [`StateFlags`] mask on the
//! selectors they apply to.
//!
//! ## Quick Start
//!
//! ```rust
//! use csskeys::{Parser, SourceBuffer, StateFlags, print_table};
//!
//! let source = SourceBuffer::new(
//!     r#"
//!     .polygon hidden {
//!         border-width: 3px;
//!         fill-color: #00FFFF;
//!     }
//! "#,
//! );
//!
//! let table = Parser::default().parse_to_table(&source).expect("valid stylesheet");
//! assert_eq!(table.len(), 5);
//!
//! let polygon = &table.records()[0];
//! assert_eq!(source.text(polygon), ".polygon");
//! assert!(polygon.flags().contains(StateFlags::HIDDEN));
//!
//! let text = print_table(&source, &table);
//! assert!(text.starts_with(".polygon hidden {"));
//! ```
//!
//! ## Grammar
//!
//! ```text
//! stylesheet      := block*
//! block           := selector-header '{' property* '}'
//! selector-header := header-token (sep header-token)*     sep: ' ' ',' '|'
//! property        := key ':' value ';'
//! ```
//!
//! Comments (`/* */`) are blanked before tokenizing. Nested blocks, at-rules
//! and combinators are not supported.
//!
//! ## Modules
//!
//! - [`source`]: the normalized [`SourceBuffer`] and [`preprocess`]
//! - [`parser`]: block location, selector and property tokenizing, linking
//! - [`table`]: [`KeyRecord`] and the caller-sized [`KeyTable`]
//! - [`flags`]: the keyword vocabulary and flag codec
//! - [`printer`]: rendering a table back to text
//! - [`options`]: parser limits
//! - [`error`]: [`ParseError`]

pub mod error;
pub mod flags;
pub mod options;
pub mod parser;
pub mod printer;
pub mod source;
pub mod table;

pub use error::{ParseError, Result};
pub use flags::{StateFlags, VOCABULARY, flags_to_string};
pub use options::ParseOptions;
pub use parser::{ParseOutcome, Parser};
pub use printer::{Printer, print_table};
pub use source::{SourceBuffer, preprocess};
pub use table::{KeyRecord, KeyTable, RecordKind};
