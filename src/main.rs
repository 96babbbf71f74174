//! Geourl binary entry point.

use clap::Parser;
use geourl::cli::translate_cmd;
use geourl::decimal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Translate geo location urls or strings into other destination urls.
#[derive(Parser)]
#[command(name = "geourl", version, about)]
struct Cli {
    /// Geo location url or string.
    #[arg(value_name = "GEO_STRING", required = true)]
    geo_string: Vec<String>,

    /// Print every positive-confidence match instead of only the best one.
    #[arg(long)]
    all: bool,

    /// Emit machine-readable JSON instead of plain URLs.
    #[arg(long)]
    json: bool,

    /// Significant digits for computed coordinate values.
    #[arg(long, value_name = "DIGITS", default_value_t = decimal::DEFAULT_PRECISION)]
    precision: u32,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if cli.json {
        std::env::set_var("GEOURL_JSON", "1");
    }

    // Must be set before any extraction starts; read-only afterwards.
    decimal::set_precision(cli.precision);

    match translate_cmd::run(&cli.geo_string, cli.all) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
