//! End-to-end checks through the public library API

use loyalee::{analyze_logs, find_loyal_customers, parse_log, AnalysisConfig, LoyaltyCriteria};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write(temp_dir: &TempDir, name: &str, lines: &[&str]) -> PathBuf {
    let path = temp_dir.path().join(name);
    fs::write(&path, lines.join("\n")).unwrap();
    path
}

#[test]
fn test_worked_example_maps_and_result() {
    let temp_dir = TempDir::new().unwrap();
    let day1 = write(&temp_dir, "day1_log.txt", &["t1,p1,C1", "t2,p2,C1", "t3,p1,C2"]);
    let day2 = write(
        &temp_dir,
        "day2_log.txt",
        &["t1,p3,C1", "t2,p4,C1", "t3,p1,C2", "t4,p2,C2"],
    );

    let day1_map = parse_log(&day1).unwrap().visits;
    let day2_map = parse_log(&day2).unwrap().visits;

    let c1_day1 = day1_map.pages("C1").unwrap();
    assert_eq!(c1_day1.len(), 2);
    assert!(c1_day1.contains("p1") && c1_day1.contains("p2"));
    assert_eq!(day1_map.page_count("C2"), 1);
    assert!(day2_map.pages("C1").unwrap().contains("p3"));
    assert_eq!(day2_map.page_count("C2"), 2);

    assert_eq!(find_loyal_customers(&day1_map, &day2_map), vec!["C1"]);

    let report = analyze_logs(&AnalysisConfig::new(day1, day2)).unwrap();
    assert_eq!(report.result_line(), r#"Loyal Customers: ["C1"]"#);
}

#[test]
fn test_realistic_logs_with_noise() {
    let temp_dir = TempDir::new().unwrap();
    let day1 = write(
        &temp_dir,
        "mon.log",
        &[
            "2024-05-06T08:00:00Z,/home,alice",
            "2024-05-06T08:01:00Z,/pricing,alice",
            "2024-05-06T08:02:00Z,/home,bob",
            "2024-05-06T08:03:00Z,/home,bob",
            "corrupted entry without separators",
            "2024-05-06T09:00:00Z,/docs,carol",
            "2024-05-06T09:05:00Z,/blog,carol",
            "2024-05-06T09:06:00Z,/blog,carol,extra",
            "",
        ],
    );
    let day2 = write(
        &temp_dir,
        "tue.log",
        &[
            "2024-05-07T10:00:00Z,/docs,carol",
            "2024-05-07T10:10:00Z,/home,carol",
            "2024-05-07T10:20:00Z,/home,bob",
            "2024-05-07T10:30:00Z,/about,bob",
            "2024-05-07T11:00:00Z,/home,alice",
            "2024-05-07T11:00:00Z,/home,alice",
        ],
    );

    let report = analyze_logs(&AnalysisConfig::new(day1, day2)).unwrap();
    // bob saw one page on day one, alice one page on day two
    assert_eq!(report.loyal_customers, vec!["carol"]);
    assert_eq!(report.day1.malformed_lines, 2);
    assert_eq!(report.day1.records, 6);
    assert_eq!(report.day2.customers, 3);
}

#[test]
fn test_both_files_missing() {
    let temp_dir = TempDir::new().unwrap();
    let config = AnalysisConfig::new(
        temp_dir.path().join("day1_log.txt"),
        temp_dir.path().join("day2_log.txt"),
    );

    let report = analyze_logs(&config).unwrap();
    assert!(report.loyal_customers.is_empty());
    assert!(!report.day1.found && !report.day2.found);
}

#[test]
fn test_stricter_threshold() {
    let temp_dir = TempDir::new().unwrap();
    let day1 = write(&temp_dir, "a.log", &["t,p1,C1", "t,p2,C1", "t,p3,C1", "t,p1,C2", "t,p2,C2"]);
    let day2 = write(&temp_dir, "b.log", &["t,p1,C1", "t,p2,C1", "t,p3,C1", "t,p1,C2", "t,p2,C2"]);

    let config = AnalysisConfig::new(day1, day2).with_criteria(LoyaltyCriteria::new(3));
    assert_eq!(analyze_logs(&config).unwrap().loyal_customers, vec!["C1"]);
}
