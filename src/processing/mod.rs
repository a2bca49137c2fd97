//! Row filtering and address formatting.
//!
//! - [`format::format_row`]: formats one [`crate::types::Row`], or drops it when the house number
//!   or street is missing
//! - [`collect_addresses`]: applies that to a whole row stream and tallies what was kept

pub mod format;

pub use format::format_row;

use crate::error::ExtractResult;
use crate::types::{AddressColumns, FormattedAddress, Row};

/// Formatted addresses in input order, plus row tallies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectedAddresses {
    pub addresses: Vec<FormattedAddress>,
    /// Data rows read (header excluded).
    pub rows_read: usize,
    /// Rows dropped for lacking a house number or street.
    pub skipped: usize,
}

/// Format every row of `rows`, stopping at the first read error.
pub fn collect_addresses<I>(rows: I, columns: &AddressColumns) -> ExtractResult<CollectedAddresses>
where
    I: IntoIterator<Item = ExtractResult<Row>>,
{
    let mut out = CollectedAddresses::default();
    for row in rows {
        let row = row?;
        out.rows_read += 1;
        match format_row(&row, columns) {
            Some(addr) => out.addresses.push(addr),
            None => out.skipped += 1,
        }
    }
    Ok(out)
}
