//! TypeScript module generation.
//!
//! The generated file has this exact shape:
//!
//! ```text
//! // Auto-generated address list
//! export const phillyAddresses = [
//!   "123 Main St, Philadelphia, PA, 19107",
//!   "45 Elm Ave",
//! ];
//! ```

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{ExtractError, ExtractResult};

/// First line of every generated file.
pub const HEADER_COMMENT: &str = "// Auto-generated address list";

/// Render `addresses` as a TypeScript module exporting a `const` array named `export_name`.
pub fn render_module<S: AsRef<str>>(addresses: &[S], export_name: &str) -> String {
    let mut out = String::new();
    out.push_str(HEADER_COMMENT);
    out.push('\n');
    out.push_str(&format!("export const {export_name} = [\n"));
    for addr in addresses {
        out.push_str("  ");
        out.push_str(&string_literal(addr.as_ref()));
        out.push_str(",\n");
    }
    out.push_str("];\n");
    out
}

/// Quote `s` as a double-quoted string literal.
///
/// JSON string syntax is a subset of ECMAScript string literal syntax, so the result evaluates
/// back to exactly `s`.
pub fn string_literal(s: &str) -> String {
    serde_json::Value::String(s.to_owned()).to_string()
}

/// Write the module to `path`, creating missing parent directories and replacing any existing
/// file. Returns the number of entries written.
pub fn write_module<S: AsRef<str>>(
    path: impl AsRef<Path>,
    addresses: &[S],
    export_name: &str,
) -> ExtractResult<usize> {
    let path = path.as_ref();
    let write_err = |source: std::io::Error| ExtractError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(write_err)?;
    }

    let rendered = render_module(addresses, export_name);
    let mut w = BufWriter::new(File::create(path).map_err(write_err)?);
    w.write_all(rendered.as_bytes()).map_err(write_err)?;
    w.flush().map_err(write_err)?;

    Ok(addresses.len())
}
