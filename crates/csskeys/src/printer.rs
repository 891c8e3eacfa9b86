//! Pretty-printing a key table back into stylesheet text.
//!
//! Selectors that share one property block (a linked run) are printed on a
//! single header line, joined with `, `, each followed by its own flag
//! keywords. Because commas end a keyword group, re-parsing the output gives
//! every selector exactly the flags it had.
//!
//! ```text
//! .a hidden, .b {
//!   x: 1;
//! }
//! ```

use std::fmt;

use crate::source::SourceBuffer;
use crate::table::KeyTable;

/// [`Display`](fmt::Display) adapter over a table and the buffer it indexes.
pub struct Printer<'a> {
    source: &'a SourceBuffer,
    table: &'a KeyTable,
}

impl<'a> Printer<'a> {
    pub fn new(source: &'a SourceBuffer, table: &'a KeyTable) -> Self {
        Self { source, table }
    }
}

impl fmt::Display for Printer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let records = self.table.records();
        let mut index = 0;

        while index < records.len() {
            let first = &records[index];
            if !first.is_selector() {
                index += 1;
                continue;
            }

            let run_end = records[index..]
                .iter()
                .position(|r| !r.is_selector() || r.link() != first.link())
                .map_or(records.len(), |pos| index + pos);

            for (n, selector) in records[index..run_end].iter().enumerate() {
                if n > 0 {
                    f.write_str(", ")?;
                }
                f.write_str(self.source.text(selector))?;
                if !selector.flags().is_empty() {
                    write!(f, " {}", selector.flags())?;
                }
            }
            writeln!(f, " {{")?;

            for (key, value) in self.table.properties(index) {
                writeln!(
                    f,
                    "  {}: {};",
                    self.source.text(key),
                    self.source.text(value)
                )?;
            }
            writeln!(f, "}}")?;

            index = run_end;
        }
        Ok(())
    }
}

/// Renders `table` as stylesheet text.
pub fn print_table(source: &SourceBuffer, table: &KeyTable) -> String {
    Printer::new(source, table).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;

    fn reprint(css: &str) -> String {
        let source = SourceBuffer::new(css);
        let table = Parser::default().parse_to_table(&source).unwrap();
        print_table(&source, &table)
    }

    #[test]
    fn prints_one_block() {
        insta::assert_snapshot!(reprint(".polygon { border-width: 3px; fill-color: #00FFFF; }"), @r"
        .polygon {
          border-width: 3px;
          fill-color: #00FFFF;
        }
        ");
    }

    #[test]
    fn prints_runs_on_one_line_with_flags() {
        insta::assert_snapshot!(reprint(".a .b hidden { x: 1; } #c, * readonly { y: 2; }"), @r"
        .a hidden, .b hidden {
          x: 1;
        }
        #c, * readonly {
          y: 2;
        }
        ");
    }

    #[test]
    fn empty_block_prints_closing_line_next() {
        assert_eq!(reprint(".a {}"), ".a {\n}\n");
    }

    #[test]
    fn empty_table_prints_nothing() {
        assert_eq!(reprint(""), "");
    }
}
