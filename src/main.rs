use clap::Parser;
use clap::error::ErrorKind;
use miette::Result;
use payroll_tax::application::engine::TaxEngine;
use payroll_tax::infrastructure::export::{ExportFormat, ExportOptions, export_results};
use payroll_tax::interfaces::config_reader::ConfigReader;
use payroll_tax::interfaces::csv::employee_reader::EmployeeReader;
use payroll_tax::{error::PayrollError, logging};
use std::ffi::OsString;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Insurance config file (`key = value` per line)
    #[arg(short = 'c', long = "config")]
    config: PathBuf,

    /// Employee data CSV (`employee_id,income`, no header)
    #[arg(short = 'd', long = "userdata")]
    userdata: PathBuf,

    /// Where to write the results
    #[arg(short = 'o', long = "output")]
    output: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    format: ExportFormat,

    /// Write a header row (CSV only)
    #[arg(long)]
    header: bool,

    /// Number of worker tasks used to compute the results
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    workers: u16,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Parses arguments, reporting bad or missing ones as a parameter error.
/// `--help` and `--version` still print and exit through clap.
fn parse_cli<I, T>(args: I) -> Result<Cli, PayrollError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).or_else(|err| match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => err.exit(),
        _ => {
            let message = err.to_string();
            let message = message.trim_start_matches("error: ").trim_end();
            Err(PayrollError::Parameter(message.to_string()))
        }
    })
}

fn open(path: &Path, what: &str) -> Result<File, PayrollError> {
    File::open(path).map_err(|e| {
        PayrollError::Parameter(format!("cannot open {what} `{}`: {e}", path.display()))
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = parse_cli(std::env::args_os())?;
    logging::init(cli.verbose);

    let config = ConfigReader::new(open(&cli.config, "config file")?).read_config()?;
    info!(total_rate = %config.total_rate(), floor = %config.floor(), ceiling = %config.ceiling(), "config loaded");

    let records = EmployeeReader::new(open(&cli.userdata, "user data file")?).read_all()?;
    info!(employees = records.len(), "user data loaded");

    let engine = TaxEngine::new(config);
    let results = engine
        .compute_all_concurrent(records, usize::from(cli.workers))
        .await?;

    let options = ExportOptions {
        format: cli.format,
        header: cli.header,
    };
    export_results(&cli.output, &results, options)?;

    Ok(())
}
