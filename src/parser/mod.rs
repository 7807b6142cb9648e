mod ast;
mod lexer;
mod parse;
mod visit;

pub use ast::{ClassDef, Expr, FunctionDef, Module, Param, PlainStmt, Stmt};
pub use lexer::{LogicalLine, Tok, TokKind, lex};
pub use parse::parse_module;
pub use visit::{Visit, walk_module};

use thiserror::Error;

/// Failure to parse a source file into a tree.
///
/// Per-file and recoverable: the caller skips the structural pass for the
/// file, keeps its line-pass results, and continues with the remaining
/// files.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {message}")]
pub struct ParseError {
    pub line: usize,
    pub message: String,
}

impl ParseError {
    pub(crate) fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}
