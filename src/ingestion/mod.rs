//! Input readers.
//!
//! [`csv::open_rows`] opens a delimited file and yields one [`crate::types::Row`] per data line.

pub mod csv;

pub use self::csv::{open_rows, RowReader};
