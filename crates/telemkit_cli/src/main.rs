//! Command-line entry point: convert one CSV file into a styled XLSX
//! workbook.

use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use telemkit_convert::{EnumConvertError, convert_records};
use telemkit_io_xlsx::XlsxCellSink;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Convert delimited telemetry records into a styled XLSX workbook.
#[derive(Parser, Debug)]
#[command(name = "telemkit", version, about)]
struct Cli {
    /// Input CSV path.
    input: PathBuf,
    /// Output XLSX path; defaults to the input path with an `.xlsx` extension.
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(path_file_out) => {
            println!(
                "✓ Converted {} -> {}",
                cli.input.display(),
                path_file_out.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("ERROR: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<PathBuf, EnumConvertError> {
    if !cli.input.exists() {
        return Err(EnumConvertError::FileNotFound(cli.input.clone()));
    }
    let path_file_out = cli
        .output
        .clone()
        .unwrap_or_else(|| cli.input.with_extension("xlsx"));

    let file_in = File::open(&cli.input)?;
    let reader = csv::ReaderBuilder::new().flexible(true).from_reader(file_in);

    let mut sink = XlsxCellSink::create(path_file_out.clone()).map_err(EnumConvertError::Sink)?;
    let report = convert_records(reader, &mut sink)?;
    sink.close().map_err(EnumConvertError::Sink)?;

    for c_warning in &report.warnings {
        warn!("{c_warning}");
    }
    info!(
        n_rows = report.n_rows,
        n_cols = report.n_cols,
        "conversion complete"
    );

    Ok(path_file_out)
}
