//! Linking selectors to the property block they own.

use crate::table::KeyRecord;

/// Stamps every selector record with the index of the first property record
/// of its block.
///
/// Consecutive selectors form a run; when the first non-selector after a run
/// is reached, every selector in the run is linked to it. A run that reaches
/// the end of the table is left as the builder wrote it. Tables shorter than
/// two records, or not starting with a selector, are left untouched.
pub fn link_selectors(records: &mut [KeyRecord]) {
    if records.len() < 2 || !records[0].is_selector() {
        return;
    }

    let mut run_start = Some(0);
    for index in 1..records.len() {
        match (records[index].is_selector(), run_start) {
            (false, Some(start)) => {
                for record in &mut records[start..index] {
                    record.set_link(index);
                }
                run_start = None;
            }
            (true, None) => run_start = Some(index),
            _ => {}
        }
    }
}
