pub mod analysis;
pub mod args;
pub mod classifier;
pub mod config;
pub mod error;
pub mod parser;
pub mod report;
pub mod utils;
pub mod visits;

pub use analysis::{analyze_logs, print_report};
pub use args::Args;
pub use classifier::{find_loyal_customers, LoyaltyCriteria};
pub use config::AnalysisConfig;
pub use error::LogError;
pub use parser::{parse_line, parse_log, LineParse, LogLine, ParsedLog};
pub use report::{DaySummary, LoyaltyReport};
pub use visits::DailyVisitMap;
