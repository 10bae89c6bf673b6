use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "loyalee",
    about = "Find customers who came back on both days and browsed at least two pages each time",
    version,
    long_about = None
)]
pub struct Args {
    /// Log file for the first day
    #[arg(long, default_value = "day1_log.txt")]
    pub day1: PathBuf,

    /// Log file for the second day
    #[arg(long, default_value = "day2_log.txt")]
    pub day2: PathBuf,

    /// Minimum number of distinct pages a customer must view on each day
    #[arg(short, long, default_value_t = 2)]
    pub min_pages: usize,

    /// Print the full report as JSON
    #[arg(long)]
    pub json: bool,

    /// Print a per-day summary after the result
    #[arg(short, long)]
    pub summary: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
