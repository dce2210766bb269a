//! A sample element type and the dataset used to demonstrate [`reverse`].
//!
//! [`reverse`]: crate::reverse

use crate::reverse::reverse;

/// A record with a single text field.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Record {
    name: String,
}

impl Record {
    /// Creates a new record with the given name.
    pub fn new<S: Into<String>>(name: S) -> Record {
        Record { name: name.into() }
    }

    /// Returns this record's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Consumes this record and returns its name.
    pub fn into_name(self) -> String {
        self.name
    }
}

/// The two-record sample dataset: `world` followed by `hello`.
pub fn sample() -> Vec<Record> {
    vec![Record::new("world"), Record::new("hello")]
}

/// Removes the last record and returns its name.
///
/// Returns `None` if `records` is empty.
pub fn pop_name(records: &mut Vec<Record>) -> Option<String> {
    records.pop().map(Record::into_name)
}

/// Reverses the sample dataset and returns the name of its last record.
///
/// ```rust
/// assert_eq!(seqrev::reversed_last_name(), Some("world".to_string()));
/// ```
pub fn reversed_last_name() -> Option<String> {
    let objects = sample();
    let mut reversed = reverse(&objects);
    pop_name(&mut reversed)
}
