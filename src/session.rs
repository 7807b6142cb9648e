use std::fs;
use std::path::Path;

use crate::checker::{LineChecker, TreeChecker, ViolationLog};
use crate::error::{Result, StyleGuardError};
use crate::parser::parse_module;

/// Per-file parse diagnostic, surfaced alongside the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiagnostic {
    pub file: String,
    pub message: String,
}

/// Everything a finished session hands to the report builder.
#[derive(Debug)]
pub struct SessionResult {
    pub log: ViolationLog,
    pub diagnostics: Vec<ParseDiagnostic>,
    pub files_analyzed: usize,
}

/// Drives both rule passes over a sequence of files, owning all run state:
/// the violation log, the per-file line-rule state, the processed-file
/// counter and any parse diagnostics.
///
/// Files must be fed in their final (sorted) order: detection-order indexes
/// depend on it.
pub struct AnalysisSession {
    log: ViolationLog,
    line_checker: LineChecker,
    tree_checker: TreeChecker,
    files_analyzed: usize,
    diagnostics: Vec<ParseDiagnostic>,
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            log: ViolationLog::new(),
            line_checker: LineChecker::new(),
            tree_checker: TreeChecker::new(),
            files_analyzed: 0,
            diagnostics: Vec::new(),
        }
    }

    /// Read and analyze one file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn analyze_file(&mut self, path: &Path) -> Result<()> {
        let source = fs::read_to_string(path).map_err(|source| StyleGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        self.analyze_source(&path.to_string_lossy(), &source);
        Ok(())
    }

    /// Analyze already-read source text. Empty files are skipped (the
    /// scanner filters them out; this guards direct callers).
    pub fn analyze_source(&mut self, file: &str, source: &str) {
        if source.is_empty() {
            return;
        }
        self.files_analyzed += 1;

        self.line_checker.reset();
        for (idx, text) in source.lines().enumerate() {
            self.line_checker
                .check_line(file, idx + 1, text, &mut self.log);
        }

        // A file that fails to parse keeps its line-pass results; only the
        // structural pass is skipped.
        match parse_module(source) {
            Ok(module) => self.tree_checker.check_module(file, &module, &mut self.log),
            Err(err) => self.diagnostics.push(ParseDiagnostic {
                file: file.to_string(),
                message: err.to_string(),
            }),
        }
    }

    #[must_use]
    pub const fn files_analyzed(&self) -> usize {
        self.files_analyzed
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[ParseDiagnostic] {
        &self.diagnostics
    }

    #[must_use]
    pub fn finish(self) -> SessionResult {
        SessionResult {
            log: self.log,
            diagnostics: self.diagnostics,
            files_analyzed: self.files_analyzed,
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
