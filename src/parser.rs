use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

use crate::error::{LogError, Result};
use crate::visits::DailyVisitMap;

const NAIVE_TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// One `timestamp,page_id,customer_id` record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub timestamp: String,
    pub page_id: String,
    pub customer_id: String,
}

impl LogLine {
    /// Best-effort interpretation of the raw timestamp field.
    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.timestamp)
    }
}

/// Outcome of splitting a single raw line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineParse {
    Record(LogLine),
    Malformed,
}

/// Earliest and latest interpretable timestamps seen in a log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeSpan {
    pub first: DateTime<Utc>,
    pub last: DateTime<Utc>,
}

impl TimeSpan {
    fn observe(span: &mut Option<TimeSpan>, at: DateTime<Utc>) {
        *span = Some(match *span {
            Some(seen) => TimeSpan {
                first: seen.first.min(at),
                last: seen.last.max(at),
            },
            None => TimeSpan { first: at, last: at },
        });
    }
}

#[derive(Debug, Default, Clone)]
pub struct ParsedLog {
    pub visits: DailyVisitMap,
    pub records: usize,
    pub malformed_lines: usize,
    pub time_span: Option<TimeSpan>,
}

pub fn parse_line(line: &str) -> LineParse {
    let mut fields = line.trim().split(',');
    match (fields.next(), fields.next(), fields.next(), fields.next()) {
        (Some(timestamp), Some(page_id), Some(customer_id), None) => LineParse::Record(LogLine {
            timestamp: timestamp.to_string(),
            page_id: page_id.to_string(),
            customer_id: customer_id.to_string(),
        }),
        _ => LineParse::Malformed,
    }
}

/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS` (space or `T`, read as UTC) and
/// integer Unix seconds. Anything else yields `None`.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_TIMESTAMP_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    raw.parse::<i64>()
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
}

pub fn parse_log(path: &Path) -> Result<ParsedLog> {
    let start_time = Instant::now();
    info!(action = "start", component = "log_parse", file_path = ?path, "Parsing daily log");

    let file = File::open(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            LogError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            LogError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let parsed = parse_reader(BufReader::new(file), path).map_err(|source| LogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        action = "complete",
        component = "log_parse",
        file_path = ?path,
        customers = parsed.visits.len(),
        records = parsed.records,
        malformed_lines = parsed.malformed_lines,
        duration_ms = start_time.elapsed().as_millis(),
        "Daily log parsed"
    );
    Ok(parsed)
}

/// Builds a [`ParsedLog`] from any line source. `source` only labels diagnostics.
pub fn parse_reader<R: BufRead>(mut reader: R, source: &Path) -> io::Result<ParsedLog> {
    let mut parsed = ParsedLog::default();
    let mut buf = Vec::new();
    let mut line_number = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_number += 1;

        let line = String::from_utf8_lossy(&buf);
        match parse_line(&line) {
            LineParse::Record(record) => {
                if let Some(at) = record.timestamp_utc() {
                    TimeSpan::observe(&mut parsed.time_span, at);
                }
                parsed.visits.record(&record.customer_id, &record.page_id);
                parsed.records += 1;
            }
            LineParse::Malformed => {
                parsed.malformed_lines += 1;
                warn!(
                    action = "skip",
                    component = "log_parse",
                    file_path = ?source,
                    line_number,
                    line = %line.trim(),
                    "Skipping malformed line"
                );
            }
        }
    }

    Ok(parsed)
}
