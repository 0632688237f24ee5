//! Built-in sample data for the `demo` command.

use crate::record::Record;

/// Six records over three keys, with duplicates out of identifier order.
#[must_use]
pub fn sample_records() -> Vec<Record> {
    vec![
        Record::new(5, "Alice"),
        Record::new(2, "Bob"),
        Record::new(8, "Alice"),
        Record::new(1, "Charlie"),
        Record::new(3, "Bob"),
        Record::new(9, "Alice"),
    ]
}
