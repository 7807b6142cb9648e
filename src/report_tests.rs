use crate::catalog::RuleCode;
use crate::checker::ViolationLog;

use super::*;

#[test]
fn violations_sort_by_file_then_line_then_code() {
    let mut log = ViolationLog::new();
    log.record("b.py", 1, RuleCode::S001, None);
    log.record("a.py", 9, RuleCode::S005, None);
    log.record("a.py", 2, RuleCode::S011, Some("X"));
    log.record("a.py", 2, RuleCode::S002, None);

    let report = Report::build(log, 2);
    let keys: Vec<(&str, usize, RuleCode)> = report
        .violations()
        .iter()
        .map(|v| (v.file.as_str(), v.line, v.code))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("a.py", 2, RuleCode::S002),
            ("a.py", 2, RuleCode::S011),
            ("a.py", 9, RuleCode::S005),
            ("b.py", 1, RuleCode::S001),
        ]
    );
}

#[test]
fn smaller_line_sorts_first_regardless_of_insertion_order() {
    let mut log = ViolationLog::new();
    log.record("a.py", 10, RuleCode::S001, None);
    log.record("a.py", 3, RuleCode::S001, None);

    let report = Report::build(log, 1);
    assert_eq!(report.violations()[0].line, 3);
    assert_eq!(report.violations()[1].line, 10);
}

#[test]
fn file_sort_is_case_insensitive() {
    let mut log = ViolationLog::new();
    log.record("Zebra.py", 1, RuleCode::S001, None);
    log.record("apple.py", 1, RuleCode::S001, None);

    let report = Report::build(log, 2);
    assert_eq!(report.violations()[0].file, "apple.py");
}

#[test]
fn detection_order_breaks_remaining_ties() {
    let mut log = ViolationLog::new();
    log.record("a.py", 1, RuleCode::S011, Some("First"));
    log.record("a.py", 1, RuleCode::S011, Some("Second"));

    let report = Report::build(log, 1);
    let names: Vec<&str> = report
        .violations()
        .iter()
        .filter_map(|v| v.placeholder.as_deref())
        .collect();
    assert_eq!(names, vec!["First", "Second"]);
}

#[test]
fn totals_reflect_log_and_file_count() {
    let mut log = ViolationLog::new();
    log.record("a.py", 1, RuleCode::S001, None);
    log.record("a.py", 2, RuleCode::S003, None);

    let report = Report::build(log, 5);
    assert_eq!(report.total_violations(), 2);
    assert_eq!(report.files_analyzed(), 5);
}

#[test]
fn empty_log_builds_empty_report() {
    let report = Report::build(ViolationLog::new(), 0);
    assert!(report.violations().is_empty());
    assert_eq!(report.total_violations(), 0);
}
