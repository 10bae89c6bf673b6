use anyhow::Result;
use std::path::Path;
use std::time::Instant;
use tracing::{error, info};

use crate::parser::{self, ParsedLog};
use crate::report::{DaySummary, LoyaltyReport};
use crate::utils::format_number;
use crate::{AnalysisConfig, Args};

/// Parses both daily logs and classifies their customers.
///
/// A missing log is not an error: it is reported and contributes no
/// customers, so the loyal list comes back empty. Other I/O failures propagate.
pub fn analyze_logs(config: &AnalysisConfig) -> Result<LoyaltyReport> {
    let total_start_time = Instant::now();
    info!(
        action = "start",
        component = "loyalty_analysis",
        day1_log = ?config.day1_log,
        day2_log = ?config.day2_log,
        min_pages_per_day = config.criteria.min_pages_per_day,
        "Starting loyalty analysis"
    );

    let (day1, day1_summary) = load_day(&config.day1_log)?;
    let (day2, day2_summary) = load_day(&config.day2_log)?;

    let loyal_customers = config.criteria.classify(&day1.visits, &day2.visits);

    info!(
        action = "complete",
        component = "loyalty_analysis",
        loyal_customers = loyal_customers.len(),
        duration_ms = total_start_time.elapsed().as_millis(),
        "Loyalty analysis completed"
    );

    Ok(LoyaltyReport {
        loyal_customers,
        min_pages_per_day: config.criteria.min_pages_per_day,
        day1: day1_summary,
        day2: day2_summary,
    })
}

fn load_day(path: &Path) -> Result<(ParsedLog, DaySummary)> {
    match parser::parse_log(path) {
        Ok(parsed) => {
            let summary = DaySummary::from_parsed(path, &parsed);
            Ok((parsed, summary))
        }
        Err(e) if e.is_not_found() => {
            error!(action = "load", component = "daily_log", file_path = ?path, error = %e, "Log file missing, treating as empty");
            Ok((ParsedLog::default(), DaySummary::missing(path)))
        }
        Err(e) => Err(e.into()),
    }
}

pub fn render_summary(report: &LoyaltyReport) -> String {
    let mut out = format!(
        "\n--- Loyalty Analysis (at least {} pages per day) ---\n",
        report.min_pages_per_day
    );

    for (label, day) in [("Day 1", &report.day1), ("Day 2", &report.day2)] {
        if !day.found {
            out.push_str(&format!("{}: {} (not found)\n", label, day.path.display()));
            continue;
        }

        out.push_str(&format!("{}: {}\n", label, day.path.display()));
        out.push_str(&format!(
            "- Customers: {}\n- Records: {}\n- Malformed lines skipped: {}\n",
            format_number(day.customers),
            format_number(day.records),
            format_number(day.malformed_lines)
        ));
        if let Some(span) = &day.time_span {
            out.push_str(&format!(
                "- Time range: {} to {}\n",
                span.first.format("%Y-%m-%d %H:%M:%S"),
                span.last.format("%Y-%m-%d %H:%M:%S")
            ));
        }
    }

    out.push_str(&format!(
        "Loyal customers found: {}\n",
        format_number(report.loyal_customers.len())
    ));
    out
}

pub fn print_report(report: &LoyaltyReport, args: &Args) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("{}", report.result_line());
    if args.summary {
        print!("{}", render_summary(report));
    }
    Ok(())
}
