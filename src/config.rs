use std::path::PathBuf;

use crate::args::Args;
use crate::classifier::LoyaltyCriteria;

pub const DEFAULT_DAY1_LOG: &str = "day1_log.txt";
pub const DEFAULT_DAY2_LOG: &str = "day2_log.txt";

/// Everything an analysis run needs, resolved up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub day1_log: PathBuf,
    pub day2_log: PathBuf,
    pub criteria: LoyaltyCriteria,
}

impl AnalysisConfig {
    pub fn new(day1_log: impl Into<PathBuf>, day2_log: impl Into<PathBuf>) -> Self {
        Self {
            day1_log: day1_log.into(),
            day2_log: day2_log.into(),
            criteria: LoyaltyCriteria::default(),
        }
    }

    pub fn with_criteria(mut self, criteria: LoyaltyCriteria) -> Self {
        self.criteria = criteria;
        self
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DAY1_LOG, DEFAULT_DAY2_LOG)
    }
}

impl From<&Args> for AnalysisConfig {
    fn from(args: &Args) -> Self {
        Self::new(&args.day1, &args.day2).with_criteria(LoyaltyCriteria::new(args.min_pages))
    }
}
