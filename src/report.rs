use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::parser::{ParsedLog, TimeSpan};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySummary {
    pub path: PathBuf,
    pub found: bool,
    pub customers: usize,
    pub records: usize,
    pub malformed_lines: usize,
    pub time_span: Option<TimeSpan>,
}

impl DaySummary {
    pub fn missing(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            found: false,
            customers: 0,
            records: 0,
            malformed_lines: 0,
            time_span: None,
        }
    }

    pub fn from_parsed(path: &Path, parsed: &ParsedLog) -> Self {
        Self {
            path: path.to_path_buf(),
            found: true,
            customers: parsed.visits.len(),
            records: parsed.records,
            malformed_lines: parsed.malformed_lines,
            time_span: parsed.time_span,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoyaltyReport {
    pub loyal_customers: Vec<String>,
    pub min_pages_per_day: usize,
    pub day1: DaySummary,
    pub day2: DaySummary,
}

impl LoyaltyReport {
    pub fn result_line(&self) -> String {
        format!("Loyal Customers: {:?}", self.loyal_customers)
    }
}
