use regex::Regex;

use crate::catalog::RuleCode;

use super::violation::ViolationLog;

/// Longest allowed visible line length.
pub const MAX_LINE_LENGTH: usize = 79;
/// Required indentation unit.
const INDENT_UNIT: usize = 4;
/// Blank lines allowed between two code lines.
const BLANK_RUN_LIMIT: usize = 2;

/// The pattern pass: applies the line rules S001-S008 to raw text lines.
///
/// Carries the only cross-line state, the consecutive-blank-line counter.
/// Call `reset` at the start of every file.
pub struct LineChecker {
    blank_run: usize,
    class_space: Regex,
    def_space: Regex,
    class_name: Regex,
    camel_case: Regex,
}

impl Default for LineChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl LineChecker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            blank_run: 0,
            class_space: Regex::new(r"^class {2,}").expect("Invalid regex"),
            def_space: Regex::new(r"(?:^|\s)def {2,}").expect("Invalid regex"),
            class_name: Regex::new(r"^\s*class\s+([A-Za-z_][A-Za-z0-9_]*)")
                .expect("Invalid regex"),
            camel_case: Regex::new(r"^[A-Z][a-zA-Z0-9]*$").expect("Invalid regex"),
        }
    }

    /// Reset per-file state. Call before each file.
    pub const fn reset(&mut self) {
        self.blank_run = 0;
    }

    /// Apply every line rule to one line, in catalog order.
    pub fn check_line(&mut self, file: &str, lineno: usize, line: &str, log: &mut ViolationLog) {
        let blank = line.trim().is_empty();

        if line_too_long(line) {
            log.record(file, lineno, RuleCode::S001, None);
        }
        if !blank && bad_indentation(line) {
            log.record(file, lineno, RuleCode::S002, None);
        }
        if unnecessary_semicolon(line) {
            log.record(file, lineno, RuleCode::S003, None);
        }
        if missing_comment_space(line) {
            log.record(file, lineno, RuleCode::S004, None);
        }
        if todo_comment(line) {
            log.record(file, lineno, RuleCode::S005, None);
        }
        if blank {
            self.blank_run += 1;
        } else {
            if self.blank_run > BLANK_RUN_LIMIT {
                log.record(file, lineno, RuleCode::S006, None);
            }
            self.blank_run = 0;
        }
        if self.class_space.is_match(line) || self.def_space.is_match(line) {
            log.record(file, lineno, RuleCode::S007, None);
        }
        if let Some(name) = self.bad_class_name(line) {
            log.record(file, lineno, RuleCode::S008, Some(name));
        }
    }

    /// The class identifier on a class-definition line, when it is not
    /// CamelCase.
    fn bad_class_name<'a>(&self, line: &'a str) -> Option<&'a str> {
        let captures = self.class_name.captures(line)?;
        let name = captures.get(1)?.as_str();
        (!self.camel_case.is_match(name)).then_some(name)
    }
}

fn line_too_long(line: &str) -> bool {
    line.chars().count() > MAX_LINE_LENGTH
}

/// Leading whitespace not a multiple of four. Blank lines are exempt (the
/// caller skips them) and so are full-line comments.
fn bad_indentation(line: &str) -> bool {
    if line.trim_start().starts_with('#') {
        return false;
    }
    let indent = line.chars().take_while(|c| c.is_whitespace()).count();
    indent % INDENT_UNIT != 0
}

/// Trailing semicolon at end of line, or a semicolon separated from a
/// comment marker by one or two spaces.
fn unnecessary_semicolon(line: &str) -> bool {
    if line.trim_end().ends_with(';') {
        return true;
    }
    line.char_indices().any(|(i, c)| {
        if c != ';' {
            return false;
        }
        let rest = &line[i + 1..];
        let spaces = rest.chars().take_while(|&c| c == ' ').count();
        (1..=2).contains(&spaces) && rest[spaces..].starts_with('#')
    })
}

/// An inline comment with fewer than two whitespace characters between the
/// code and the marker. Applies only to lines with exactly one marker.
fn missing_comment_space(line: &str) -> bool {
    if line.matches('#').count() != 1 {
        return false;
    }
    let Some(marker) = line.find('#') else {
        return false;
    };
    let prefix = &line[..marker];
    if prefix.trim().is_empty() {
        return false;
    }
    let mut before = prefix.chars().rev();
    let last = before.next();
    let second_last = before.next();
    !(last.is_some_and(char::is_whitespace) && second_last.is_some_and(char::is_whitespace))
}

/// A comment that eventually says "todo", in any case.
fn todo_comment(line: &str) -> bool {
    line.find('#')
        .is_some_and(|i| line[i..].to_lowercase().contains("todo"))
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
