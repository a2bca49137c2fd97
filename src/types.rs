//! Core data model types for address extraction.
//!
//! The reader produces [`Row`]s, the formatter turns each complete row into an
//! [`AddressRecord`] and then a [`FormattedAddress`], and the writer serializes the
//! formatted list.

use std::fmt;
use std::sync::Arc;

use csv::StringRecord;

/// One record of the input table, keyed by the header row.
///
/// The header record is shared by every row read from the same file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    headers: Arc<StringRecord>,
    values: StringRecord,
}

impl Row {
    /// Create a row from a shared header record and its values.
    pub fn new(headers: Arc<StringRecord>, values: StringRecord) -> Self {
        Self { headers, values }
    }

    /// Returns the value of column `name`, if the column exists and the record has a value for it.
    ///
    /// If the header repeats a name, the last occurrence wins.
    pub fn get(&self, name: &str) -> Option<&str> {
        let (idx, _) = self
            .headers
            .iter()
            .enumerate()
            .filter(|(_, h)| *h == name)
            .last()?;
        self.values.get(idx)
    }

    /// Iterate `(column, value)` pairs in header order.
    ///
    /// Columns without a value in this record are omitted; values beyond the header are ignored.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().zip(self.values.iter())
    }
}

/// Names of the columns an [`AddressRecord`] is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressColumns {
    pub house_number: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postcode: String,
}

impl Default for AddressColumns {
    /// OpenStreetMap `addr:*` tag names.
    fn default() -> Self {
        Self {
            house_number: "addr:housenumber".to_string(),
            street: "addr:street".to_string(),
            city: "addr:city".to_string(),
            state: "addr:state".to_string(),
            postcode: "addr:postcode".to_string(),
        }
    }
}

/// Trimmed address fields of a single row. Absent fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressRecord {
    pub house_number: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postcode: String,
}

/// A display string such as `123 Main St, Philadelphia, PA, 19107`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FormattedAddress(String);

impl FormattedAddress {
    pub(crate) fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for FormattedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FormattedAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
