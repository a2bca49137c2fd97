//! `address-codegen` turns a CSV export of address points (OpenStreetMap `addr:*` columns) into a
//! TypeScript module exporting the addresses as a `const` string array.
//!
//! The primary entrypoint is [`pipeline::extract_addresses`], which runs three stages:
//!
//! 1. [`ingestion`]: read the CSV lazily as header-keyed [`types::Row`]s
//! 2. [`processing`]: trim the address fields, drop rows without a house number or street, and
//!    format the rest as `number street[, city][, state][, postcode]`
//! 3. [`output`]: write `// Auto-generated address list` followed by
//!    `export const <name> = [ ... ];`
//!
//! ## Example
//!
//! ```no_run
//! use address_codegen::pipeline::{extract_addresses, ExtractOptions};
//!
//! # fn main() -> Result<(), address_codegen::ExtractError> {
//! let opts = ExtractOptions {
//!     input_path: "exports/addresses.csv".into(),
//!     output_path: "web/src/data/addresses.ts".into(),
//!     ..Default::default()
//! };
//! let report = extract_addresses(&opts)?;
//! println!("{}", report.summary());
//! # Ok(())
//! # }
//! ```
//!
//! Each stage can also be used on its own:
//!
//! ```rust
//! use address_codegen::ingestion::RowReader;
//! use address_codegen::output::render_module;
//! use address_codegen::processing::collect_addresses;
//! use address_codegen::types::AddressColumns;
//!
//! let csv = "addr:housenumber,addr:street,addr:state\n10 , Oak Rd,PA\n,Broad St,PA\n";
//! let rows = RowReader::from_reader(csv.as_bytes()).unwrap();
//! let collected = collect_addresses(rows, &AddressColumns::default()).unwrap();
//! assert_eq!(collected.skipped, 1);
//!
//! let module = render_module(&collected.addresses, "addresses");
//! assert!(module.contains("  \"10 Oak Rd, PA\",\n"));
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: CSV row reader
//! - [`processing`]: row filtering and address formatting
//! - [`output`]: TypeScript module generation
//! - [`pipeline`]: end-to-end run with default paths and observer reporting
//! - [`observability`]: observer trait and the stderr observer
//! - [`types`]: row and address types
//! - [`error`]: error type shared by all stages

pub mod error;
pub mod ingestion;
pub mod observability;
pub mod output;
pub mod pipeline;
pub mod processing;
pub mod types;

pub use error::{ExtractError, ExtractResult};
