use indexmap::IndexSet;
use regex::Regex;

use crate::catalog::RuleCode;
use crate::parser::{FunctionDef, Module, Visit, walk_module};

use super::violation::ViolationLog;

/// The structural pass: applies the tree rules S009-S012 to the parsed
/// module. Each rule walks the full tree exactly once.
pub struct TreeChecker {
    snake_case: Regex,
}

impl Default for TreeChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeChecker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            snake_case: Regex::new(r"^_?[a-z]+(?:_[a-z]+)*$").expect("Invalid regex"),
        }
    }

    pub fn check_module(&self, file: &str, module: &Module, log: &mut ViolationLog) {
        let mut functions = FunctionNames {
            checker: self,
            file,
            log: &mut *log,
        };
        walk_module(module, &mut functions);

        let mut arguments = ArgumentNames {
            file,
            log: &mut *log,
        };
        walk_module(module, &mut arguments);

        let mut variables = VariableNames {
            file,
            log: &mut *log,
            seen: IndexSet::new(),
        };
        walk_module(module, &mut variables);

        let mut defaults = MutableDefaults { file, log };
        walk_module(module, &mut defaults);
    }
}

fn has_uppercase(name: &str) -> bool {
    name.chars().any(char::is_uppercase)
}

/// S009: function names must be snake_case. Reserved `__`-prefixed names
/// are exempt.
struct FunctionNames<'a> {
    checker: &'a TreeChecker,
    file: &'a str,
    log: &'a mut ViolationLog,
}

impl Visit for FunctionNames<'_> {
    fn visit_function_def(&mut self, def: &FunctionDef) {
        if def.name.starts_with("__") {
            return;
        }
        if !self.checker.snake_case.is_match(&def.name) {
            self.log
                .record(self.file, def.line, RuleCode::S009, Some(&def.name));
        }
    }
}

/// S010: positional argument names must be lowercase.
struct ArgumentNames<'a> {
    file: &'a str,
    log: &'a mut ViolationLog,
}

impl Visit for ArgumentNames<'_> {
    fn visit_function_def(&mut self, def: &FunctionDef) {
        for param in &def.params {
            if has_uppercase(&param.name) {
                self.log
                    .record(self.file, param.line, RuleCode::S010, Some(&param.name));
            }
        }
    }
}

/// S011: referenced names must be lowercase. Deduplicated by bare name,
/// first traversal occurrence wins; scope is deliberately ignored (the
/// same name in two functions is checked once).
struct VariableNames<'a> {
    file: &'a str,
    log: &'a mut ViolationLog,
    seen: IndexSet<String>,
}

impl Visit for VariableNames<'_> {
    fn visit_name(&mut self, id: &str, line: usize) {
        if !self.seen.insert(id.to_string()) {
            return;
        }
        if has_uppercase(id) {
            self.log.record(self.file, line, RuleCode::S011, Some(id));
        }
    }
}

/// S012: default values that are mutable literal containers. Defaults pair
/// with the trailing parameters; a leading `self` receiver is excluded
/// from the pairing (explicit special case, not receiver detection).
struct MutableDefaults<'a> {
    file: &'a str,
    log: &'a mut ViolationLog,
}

impl Visit for MutableDefaults<'_> {
    fn visit_function_def(&mut self, def: &FunctionDef) {
        let params = match def.params.first() {
            Some(first) if first.name == "self" => &def.params[1..],
            _ => &def.params[..],
        };
        let mut fired: Vec<(usize, &str)> = Vec::new();
        for (param, default) in params.iter().rev().zip(def.defaults.iter().rev()) {
            if default.is_mutable_literal() {
                fired.push((default.line(), &param.name));
            }
        }
        for (line, name) in fired.into_iter().rev() {
            self.log.record(self.file, line, RuleCode::S012, Some(name));
        }
    }
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tests;
