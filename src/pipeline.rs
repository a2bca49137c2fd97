//! End-to-end extraction: read the CSV, format addresses, write the TypeScript module.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::ExtractResult;
use crate::ingestion::open_rows;
use crate::observability::{ExtractContext, ExtractObserver, ExtractSeverity, ExtractStats};
use crate::output::write_module;
use crate::processing::collect_addresses;
use crate::types::AddressColumns;

/// Input table read by the `extract-addresses` binary.
pub const DEFAULT_INPUT_PATH: &str = "phillyaddresses.csv";
/// Module written by the `extract-addresses` binary.
pub const DEFAULT_OUTPUT_PATH: &str = "src/data/phillyAddresses.ts";
/// Name of the exported array in the generated module.
pub const DEFAULT_EXPORT_NAME: &str = "phillyAddresses";

/// Options controlling an extraction run.
///
/// [`Default`] gives the fixed paths the binary uses.
#[derive(Clone)]
pub struct ExtractOptions {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Identifier of the exported `const`.
    pub export_name: String,
    pub columns: AddressColumns,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn ExtractObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: ExtractSeverity,
}

impl fmt::Debug for ExtractOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractOptions")
            .field("input_path", &self.input_path)
            .field("output_path", &self.output_path)
            .field("export_name", &self.export_name)
            .field("columns", &self.columns)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            export_name: DEFAULT_EXPORT_NAME.to_string(),
            columns: AddressColumns::default(),
            observer: None,
            alert_at_or_above: ExtractSeverity::Critical,
        }
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractReport {
    pub output_path: PathBuf,
    pub stats: ExtractStats,
}

impl ExtractReport {
    /// One-line summary printed by the binary, e.g.
    /// `Extracted 2 addresses to src/data/phillyAddresses.ts`.
    pub fn summary(&self) -> String {
        format!(
            "Extracted {} addresses to {}",
            self.stats.emitted,
            self.output_path.display()
        )
    }
}

/// Run the full pipeline described by `options`.
///
/// The output file is only touched after every input row has been read, so a read failure
/// leaves any previous output in place.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with row tallies
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the severity is >= `options.alert_at_or_above`
///
/// ```no_run
/// use std::sync::Arc;
///
/// use address_codegen::observability::StdErrObserver;
/// use address_codegen::pipeline::{extract_addresses, ExtractOptions};
///
/// # fn main() -> Result<(), address_codegen::ExtractError> {
/// let opts = ExtractOptions {
///     observer: Some(Arc::new(StdErrObserver)),
///     ..Default::default()
/// };
/// let report = extract_addresses(&opts)?;
/// println!("{}", report.summary());
/// # Ok(())
/// # }
/// ```
pub fn extract_addresses(options: &ExtractOptions) -> ExtractResult<ExtractReport> {
    let ctx = ExtractContext {
        input: options.input_path.clone(),
        output: options.output_path.clone(),
    };

    let result = run(
        &options.input_path,
        &options.output_path,
        &options.export_name,
        &options.columns,
    );

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(report) => obs.on_success(&ctx, report.stats),
            Err(e) => {
                let sev = ExtractSeverity::of(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

fn run(
    input: &Path,
    output: &Path,
    export_name: &str,
    columns: &AddressColumns,
) -> ExtractResult<ExtractReport> {
    // Scoped so the input handle is released before the output is opened.
    let collected = {
        let rows = open_rows(input)?;
        collect_addresses(rows, columns)?
    };

    let emitted = write_module(output, &collected.addresses, export_name)?;

    Ok(ExtractReport {
        output_path: output.to_path_buf(),
        stats: ExtractStats {
            rows_read: collected.rows_read,
            emitted,
            skipped: collected.skipped,
        },
    })
}
