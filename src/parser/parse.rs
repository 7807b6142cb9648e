use super::ast::{ClassDef, Expr, FunctionDef, Module, Param, PlainStmt, Stmt};
use super::lexer::{LogicalLine, Tok, TokKind, lex};
use super::ParseError;

/// Parse source text into a module tree.
///
/// # Errors
/// Returns a `ParseError` on lexical errors (unterminated strings,
/// unbalanced brackets) and malformed `def`/`class` headers.
pub fn parse_module(source: &str) -> Result<Module, ParseError> {
    let lines = lex(source)?;
    let mut parser = Parser { lines, pos: 0 };
    let body = parser.parse_block(None)?;
    Ok(Module { body })
}

struct Parser {
    lines: Vec<LogicalLine>,
    pos: usize,
}

impl Parser {
    /// Parse consecutive logical lines indented deeper than `parent_indent`
    /// (all remaining lines when `None`).
    fn parse_block(&mut self, parent_indent: Option<usize>) -> Result<Vec<Stmt>, ParseError> {
        let mut body = Vec::new();
        while let Some(line) = self.lines.get(self.pos) {
            if let Some(parent) = parent_indent
                && line.indent <= parent
            {
                break;
            }
            let line = line.clone();
            self.pos += 1;
            body.push(self.parse_stmt(&line)?);
        }
        Ok(body)
    }

    fn parse_stmt(&mut self, line: &LogicalLine) -> Result<Stmt, ParseError> {
        let toks = &line.toks;
        let offset = usize::from(
            toks[0].is_keyword("async") && toks.get(1).is_some_and(|t| t.is_keyword("def")),
        );
        if toks[offset].is_keyword("def") {
            self.parse_function_def(line, offset)
        } else if toks[0].is_keyword("class") {
            self.parse_class_def(line)
        } else {
            Ok(Stmt::Plain(PlainStmt {
                line: line.line,
                exprs: collect_names(toks),
            }))
        }
    }

    fn parse_function_def(
        &mut self,
        line: &LogicalLine,
        offset: usize,
    ) -> Result<Stmt, ParseError> {
        let toks = &line.toks;
        let Some(TokKind::Ident(name)) = toks.get(offset + 1).map(|t| &t.kind) else {
            return Err(ParseError::new(
                line.line,
                "expected function name after 'def'",
            ));
        };
        let name = name.clone();
        let open = offset + 2;
        if !toks.get(open).is_some_and(|t| t.is_op("(")) {
            return Err(ParseError::new(
                line.line,
                "expected '(' after function name",
            ));
        }
        let close = matching_close(toks, open)
            .ok_or_else(|| ParseError::new(line.line, "unterminated parameter list"))?;
        let (params, defaults) = parse_params(&toks[open + 1..close])?;
        let colon = find_top_level(&toks[close + 1..], ":")
            .map(|i| i + close + 1)
            .ok_or_else(|| ParseError::new(line.line, "expected ':' after function signature"))?;
        let body = self.parse_suite(line, colon)?;
        Ok(Stmt::FunctionDef(FunctionDef {
            name,
            line: line.line,
            params,
            defaults,
            body,
        }))
    }

    fn parse_class_def(&mut self, line: &LogicalLine) -> Result<Stmt, ParseError> {
        let toks = &line.toks;
        let Some(TokKind::Ident(name)) = toks.get(1).map(|t| &t.kind) else {
            return Err(ParseError::new(
                line.line,
                "expected class name after 'class'",
            ));
        };
        let name = name.clone();
        let mut bases = Vec::new();
        let mut after_header = 2;
        if toks.get(2).is_some_and(|t| t.is_op("(")) {
            let close = matching_close(toks, 2)
                .ok_or_else(|| ParseError::new(line.line, "unterminated base class list"))?;
            bases = collect_names(&toks[2..=close]);
            after_header = close + 1;
        }
        let colon = find_top_level(&toks[after_header..], ":")
            .map(|i| i + after_header)
            .ok_or_else(|| ParseError::new(line.line, "expected ':' in class definition"))?;
        let body = self.parse_suite(line, colon)?;
        Ok(Stmt::ClassDef(ClassDef {
            name,
            line: line.line,
            bases,
            body,
        }))
    }

    /// Body of a compound header: any inline statement after the colon,
    /// followed by the indented block.
    fn parse_suite(&mut self, line: &LogicalLine, colon: usize) -> Result<Vec<Stmt>, ParseError> {
        let mut body = Vec::new();
        if colon + 1 < line.toks.len() {
            body.push(Stmt::Plain(PlainStmt {
                line: line.line,
                exprs: collect_names(&line.toks[colon + 1..]),
            }));
        }
        body.extend(self.parse_block(Some(line.indent))?);
        Ok(body)
    }
}

/// Index of the bracket closing `toks[open]`, within one logical line.
fn matching_close(toks: &[Tok], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, tok) in toks.iter().enumerate().skip(open) {
        if let TokKind::Op(op) = &tok.kind {
            match op.as_str() {
                "(" | "[" | "{" => depth += 1,
                ")" | "]" | "}" => {
                    depth = depth.checked_sub(1)?;
                    if depth == 0 {
                        return Some(i);
                    }
                }
                _ => {}
            }
        }
    }
    None
}

/// Position of the first `op` token at bracket depth zero.
fn find_top_level(toks: &[Tok], op: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, tok) in toks.iter().enumerate() {
        if let TokKind::Op(o) = &tok.kind {
            match o.as_str() {
                "(" | "[" | "{" => depth += 1,
                ")" | "]" | "}" => depth = depth.saturating_sub(1),
                _ if depth == 0 && o == op => return Some(i),
                _ => {}
            }
        }
    }
    None
}

/// Split a token span at depth-zero commas.
fn split_top_level(toks: &[Tok]) -> Vec<&[Tok]> {
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (i, tok) in toks.iter().enumerate() {
        if let TokKind::Op(op) = &tok.kind {
            match op.as_str() {
                "(" | "[" | "{" => depth += 1,
                ")" | "]" | "}" => depth = depth.saturating_sub(1),
                "," if depth == 0 => {
                    pieces.push(&toks[start..i]);
                    start = i + 1;
                }
                _ => {}
            }
        }
    }
    pieces.push(&toks[start..]);
    pieces
}

/// Positional parameters and their (tail-aligned) default expressions.
/// `*`/`**` end the positional section; a bare `/` marker is skipped.
fn parse_params(span: &[Tok]) -> Result<(Vec<Param>, Vec<Expr>), ParseError> {
    let mut params = Vec::new();
    let mut defaults = Vec::new();
    for piece in split_top_level(span) {
        let Some(first) = piece.first() else {
            continue;
        };
        if first.is_op("*") || first.is_op("**") {
            break;
        }
        if first.is_op("/") {
            continue;
        }
        let TokKind::Ident(name) = &first.kind else {
            return Err(ParseError::new(first.line, "expected parameter name"));
        };
        params.push(Param {
            name: name.clone(),
            line: first.line,
        });
        if let Some(eq) = find_top_level(piece, "=") {
            defaults.push(classify_expr(&piece[eq + 1..]));
        }
    }
    Ok((params, defaults))
}

/// Classify an expression span by its leading token; composite variants
/// carry the name references found anywhere in the span.
fn classify_expr(span: &[Tok]) -> Expr {
    let Some(first) = span.first() else {
        return Expr::Other {
            line: 0,
            names: Vec::new(),
        };
    };
    let line = first.line;
    match &first.kind {
        TokKind::Op(op) if op == "[" => Expr::List {
            line,
            names: collect_names(span),
        },
        TokKind::Op(op) if op == "{" => classify_brace(span, line),
        TokKind::Op(op) if op == "(" => Expr::Tuple {
            line,
            names: collect_names(span),
        },
        TokKind::Number if span.len() == 1 => Expr::Number { line },
        TokKind::Str if span.len() == 1 => Expr::Str { line },
        TokKind::Ident(id) => {
            if span.get(1).is_some_and(|t| t.is_op("(")) {
                Expr::Call {
                    line,
                    names: collect_names(span),
                }
            } else if span.len() == 1 {
                Expr::Name {
                    id: id.clone(),
                    line,
                }
            } else {
                Expr::Other {
                    line,
                    names: collect_names(span),
                }
            }
        }
        _ => Expr::Other {
            line,
            names: collect_names(span),
        },
    }
}

/// A brace display is a dict when empty, or when a `:` or `**` appears at
/// the top nesting level; otherwise it is a set.
fn classify_brace(span: &[Tok], line: usize) -> Expr {
    let names = collect_names(span);
    let inner_end = matching_close(span, 0).unwrap_or(span.len());
    let inner = &span[1..inner_end];
    if inner.is_empty()
        || find_top_level(inner, ":").is_some()
        || find_top_level(inner, "**").is_some()
    {
        Expr::Dict { line, names }
    } else {
        Expr::Set { line, names }
    }
}

/// Collect the identifiers of a token span that stand for name references:
/// not keywords, not attribute names after `.`, and not keyword-argument
/// names inside call parentheses. Import statements contribute none.
pub(super) fn collect_names(toks: &[Tok]) -> Vec<Expr> {
    if toks
        .first()
        .is_some_and(|t| t.is_keyword("import") || t.is_keyword("from"))
    {
        return Vec::new();
    }
    let mut names = Vec::new();
    let mut stack: Vec<char> = Vec::new();
    for (i, tok) in toks.iter().enumerate() {
        match &tok.kind {
            TokKind::Op(op) => match op.as_str() {
                "(" => stack.push('('),
                "[" => stack.push('['),
                "{" => stack.push('{'),
                ")" | "]" | "}" => {
                    stack.pop();
                }
                _ => {}
            },
            TokKind::Ident(id) => {
                if i > 0 && toks[i - 1].is_op(".") {
                    continue;
                }
                if stack.last() == Some(&'(') && toks.get(i + 1).is_some_and(|t| t.is_op("=")) {
                    continue;
                }
                names.push(Expr::Name {
                    id: id.clone(),
                    line: tok.line,
                });
            }
            _ => {}
        }
    }
    names
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
