use anyhow::Result;
use clap::Parser;
use tracing::error;

use loyalee::{analyze_logs, print_report, utils, AnalysisConfig, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    utils::setup_logging(args.verbose);
    utils::validate_args(&args)?;

    let config = AnalysisConfig::from(&args);
    match analyze_logs(&config) {
        Ok(report) => print_report(&report, &args),
        Err(e) => {
            error!(error = %e, "Analysis failed");
            std::process::exit(1);
        }
    }
}
