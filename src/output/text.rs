use std::fmt::Write;

use crate::error::Result;
use crate::report::Report;

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const RESET: &str = "\x1b[0m";
}

/// Renders the report in the canonical line-per-violation format:
///
/// ```text
/// <file_path>: Line <line_number>: <RULE_CODE> <message>
/// ```
///
/// followed by the summary line.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                // Check if stdout is a TTY
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, code: &str) -> String {
        if self.use_colors {
            format!("{}{code}{}", ansi::RED, ansi::RESET)
        } else {
            code.to_string()
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = String::new();
        for violation in report.violations() {
            let _ = writeln!(
                output,
                "{}: Line {}: {} {}",
                violation.file,
                violation.line,
                self.colorize(violation.code.as_str()),
                violation.message()
            );
        }
        let _ = writeln!(
            output,
            "Total error count: {} in {} file(s)",
            report.total_violations(),
            report.files_analyzed()
        );
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
