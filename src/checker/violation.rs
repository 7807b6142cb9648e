use serde::Serialize;

use crate::catalog::RuleCode;

/// One reported style issue. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Path of the offending file, separators normalized to `/`.
    pub file: String,
    /// 1-based line number.
    pub line: usize,
    pub code: RuleCode,
    /// Offending identifier, substituted into the message template.
    pub placeholder: Option<String>,
    /// Detection-order index, the final sort tie-break.
    pub order: usize,
}

impl Violation {
    /// Rendered catalog message for this violation.
    #[must_use]
    pub fn message(&self) -> String {
        self.code.message(self.placeholder.as_deref())
    }

    /// Report sort key: file path (case-insensitive), line, rule code,
    /// detection order.
    #[must_use]
    pub fn sort_key(&self) -> (String, usize, RuleCode, usize) {
        (self.file.to_lowercase(), self.line, self.code, self.order)
    }
}

/// Ordered log of every violation detected during one run.
///
/// Not thread-safe; one log serves one sequential run. The detection-order
/// counter advances on every record call.
#[derive(Debug, Default)]
pub struct ViolationLog {
    entries: Vec<Violation>,
    next_order: usize,
}

impl ViolationLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, file: &str, line: usize, code: RuleCode, placeholder: Option<&str>) {
        let order = self.next_order;
        self.next_order += 1;
        self.entries.push(Violation {
            file: file.replace('\\', "/"),
            line,
            code,
            placeholder: placeholder.map(str::to_string),
            order,
        });
    }

    #[must_use]
    pub fn entries(&self) -> &[Violation] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn into_entries(self) -> Vec<Violation> {
        self.entries
    }
}

#[cfg(test)]
#[path = "violation_tests.rs"]
mod tests;
