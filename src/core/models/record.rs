//! Generated records and the deduplicating result set

use std::collections::HashSet;
use std::fmt;

/// Fixed fourth field of every generated record
pub const TRAILING_FIELD: &str = "000";

/// Field separator used by records and normalized lines
pub const SEPARATOR: char = '|';

/// A generated record: `identifier|MM|YYYY|000`
///
/// Records built by the expander always end in a valid check digit. The
/// constructor does not enforce that, which is why the finalizer re-validates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Record {
    identifier: String,
    month: String,
    year: String,
}

impl Record {
    /// Create a record from its fields
    #[must_use]
    pub fn new(identifier: impl Into<String>, month: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            month: month.into(),
            year: year.into(),
        }
    }

    /// Identifier digits, check digit last
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Two-digit month
    #[must_use]
    pub fn month(&self) -> &str {
        &self.month
    }

    /// Four-digit year
    #[must_use]
    pub fn year(&self) -> &str {
        &self.year
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{SEPARATOR}{}{SEPARATOR}{}{SEPARATOR}{TRAILING_FIELD}",
            self.identifier, self.month, self.year
        )
    }
}

/// Insertion-ordered set of unique records
///
/// Uniqueness is over the whole record, so the same identifier with a
/// different month or year is a distinct entry.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    records: Vec<Record>,
    seen: HashSet<Record>,
}

impl ResultSet {
    /// Create an empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, returning `false` if it was already present
    pub fn insert(&mut self, record: Record) -> bool {
        if self.seen.contains(&record) {
            return false;
        }
        self.seen.insert(record.clone());
        self.records.push(record);
        true
    }

    /// Whether the set holds this record
    #[must_use]
    pub fn contains(&self, record: &Record) -> bool {
        self.seen.contains(record)
    }

    /// Number of unique records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Consume the set, keeping insertion order
    #[must_use]
    pub fn into_vec(self) -> Vec<Record> {
        self.records
    }
}

impl Extend<Record> for ResultSet {
    fn extend<T: IntoIterator<Item = Record>>(&mut self, iter: T) {
        for record in iter {
            self.insert(record);
        }
    }
}

impl FromIterator<Record> for ResultSet {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
