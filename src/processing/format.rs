//! Address extraction and formatting for a single [`Row`].

use crate::types::{AddressColumns, AddressRecord, FormattedAddress, Row};

const SEGMENT_SEPARATOR: &str = ", ";

impl AddressRecord {
    /// Read the address columns from `row`, trimming surrounding whitespace.
    ///
    /// Absent columns become empty strings.
    pub fn from_row(row: &Row, columns: &AddressColumns) -> Self {
        let field = |name: &str| row.get(name).unwrap_or("").trim().to_owned();
        Self {
            house_number: field(&columns.house_number),
            street: field(&columns.street),
            city: field(&columns.city),
            state: field(&columns.state),
            postcode: field(&columns.postcode),
        }
    }

    /// Returns `true` when both mandatory fields (house number and street) are non-empty.
    pub fn is_complete(&self) -> bool {
        !self.house_number.is_empty() && !self.street.is_empty()
    }

    /// Compose `number street[, city][, state][, postcode]`, skipping empty optional segments.
    ///
    /// Does not check completeness; see [`Self::is_complete`].
    pub fn format(&self) -> FormattedAddress {
        let mut out = format!("{} {}", self.house_number, self.street);
        for segment in [&self.city, &self.state, &self.postcode] {
            if !segment.is_empty() {
                out.push_str(SEGMENT_SEPARATOR);
                out.push_str(segment);
            }
        }
        FormattedAddress::new(out)
    }
}

/// Format `row`, or return `None` if it lacks a house number or street.
pub fn format_row(row: &Row, columns: &AddressColumns) -> Option<FormattedAddress> {
    let record = AddressRecord::from_row(row, columns);
    record.is_complete().then(|| record.format())
}
