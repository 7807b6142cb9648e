use serde::Serialize;

use crate::catalog::RuleCode;
use crate::error::Result;
use crate::report::Report;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    summary: Summary,
    violations: Vec<JsonViolation>,
}

#[derive(Serialize)]
struct Summary {
    total_violations: usize,
    files_analyzed: usize,
}

#[derive(Serialize)]
struct JsonViolation {
    file: String,
    line: usize,
    code: RuleCode,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<String>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                total_violations: report.total_violations(),
                files_analyzed: report.files_analyzed(),
            },
            violations: report
                .violations()
                .iter()
                .map(|v| JsonViolation {
                    file: v.file.clone(),
                    line: v.line,
                    code: v.code,
                    message: v.message(),
                    placeholder: v.placeholder.clone(),
                })
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
