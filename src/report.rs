use serde::Serialize;

use crate::checker::{Violation, ViolationLog};

/// Final ordered report: all violations sorted by file path (case
/// insensitive), line number and rule code, with detection order as the
/// last tie-break, plus the aggregate counts for the summary line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    violations: Vec<Violation>,
    files_analyzed: usize,
}

impl Report {
    #[must_use]
    pub fn build(log: ViolationLog, files_analyzed: usize) -> Self {
        let mut violations = log.into_entries();
        violations.sort_by_cached_key(Violation::sort_key);
        Self {
            violations,
            files_analyzed,
        }
    }

    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    #[must_use]
    pub fn total_violations(&self) -> usize {
        self.violations.len()
    }

    #[must_use]
    pub const fn files_analyzed(&self) -> usize {
        self.files_analyzed
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
