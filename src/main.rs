use std::process::ExitCode;
use std::sync::Arc;

use address_codegen::observability::StdErrObserver;
use address_codegen::pipeline::{extract_addresses, ExtractOptions};

fn main() -> ExitCode {
    let opts = ExtractOptions {
        observer: Some(Arc::new(StdErrObserver)),
        ..Default::default()
    };

    match extract_addresses(&opts) {
        Ok(report) => {
            println!("{}", report.summary());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
