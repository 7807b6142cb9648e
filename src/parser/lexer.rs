use super::ParseError;

/// Python keywords. Identifiers matching one of these never become name
/// references.
pub const KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break",
    "class", "continue", "def", "del", "elif", "else", "except", "finally",
    "for", "from", "global", "if", "import", "in", "is", "lambda", "nonlocal",
    "not", "or", "pass", "raise", "return", "try", "while", "with", "yield",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokKind {
    Ident(String),
    Keyword(&'static str),
    Number,
    Str,
    Op(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tok {
    pub kind: TokKind,
    pub line: usize,
}

impl Tok {
    #[must_use]
    pub fn is_op(&self, op: &str) -> bool {
        matches!(&self.kind, TokKind::Op(o) if o == op)
    }

    #[must_use]
    pub fn is_keyword(&self, keyword: &str) -> bool {
        matches!(&self.kind, TokKind::Keyword(k) if *k == keyword)
    }
}

/// One logical source line: physical lines joined over open brackets and
/// trailing backslashes, with comments and blank lines removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// Leading whitespace count of the first physical line.
    pub indent: usize,
    /// 1-based number of the first physical line.
    pub line: usize,
    pub toks: Vec<Tok>,
}

/// Tokenize source text into logical lines.
///
/// # Errors
/// Returns a `ParseError` on unterminated strings and unbalanced brackets.
pub fn lex(source: &str) -> Result<Vec<LogicalLine>, ParseError> {
    Lexer::new(source).run()
}

const THREE_CHAR_OPS: &[&str] = &["**=", "//=", "<<=", ">>=", "..."];
const TWO_CHAR_OPS: &[&str] = &[
    "**", "//", "<<", ">>", "<=", ">=", "==", "!=", "->", ":=", "+=", "-=",
    "*=", "/=", "%=", "&=", "|=", "^=", "@=",
];

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

const fn brackets_match(open: char, close: char) -> bool {
    matches!((open, close), ('(', ')') | ('[', ']') | ('{', '}'))
}

struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    physical_start: bool,
    ws_run: usize,
    toks: Vec<Tok>,
    indent: usize,
    start_line: usize,
    open_brackets: Vec<(char, usize)>,
    logical: Vec<LogicalLine>,
}

impl Lexer {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            physical_start: true,
            ws_run: 0,
            toks: Vec::new(),
            indent: 0,
            start_line: 1,
            open_brackets: Vec::new(),
            logical: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Vec<LogicalLine>, ParseError> {
        while let Some(&c) = self.chars.get(self.pos) {
            match c {
                '\n' => {
                    self.pos += 1;
                    if self.open_brackets.is_empty() {
                        self.flush_line();
                    }
                    self.line += 1;
                    self.physical_start = true;
                    self.ws_run = 0;
                }
                '\\' if self.chars.get(self.pos + 1) == Some(&'\n') => {
                    self.pos += 2;
                    self.line += 1;
                }
                ' ' | '\t' => {
                    if self.physical_start {
                        self.ws_run += 1;
                    }
                    self.pos += 1;
                }
                '\r' => self.pos += 1,
                '#' => {
                    while self.chars.get(self.pos).is_some_and(|&c| c != '\n') {
                        self.pos += 1;
                    }
                }
                '\'' | '"' => self.lex_string()?,
                '(' | '[' | '{' => {
                    self.begin_token();
                    self.open_brackets.push((c, self.line));
                    self.push_op(c.to_string());
                    self.pos += 1;
                }
                ')' | ']' | '}' => self.lex_close_bracket(c)?,
                c if c.is_ascii_digit() => self.lex_number(),
                c if is_ident_start(c) => self.lex_word()?,
                _ => self.lex_operator(),
            }
        }
        if let Some(&(open, line)) = self.open_brackets.first() {
            return Err(ParseError::new(line, format!("unclosed '{open}'")));
        }
        self.flush_line();
        Ok(self.logical)
    }

    /// Fix the indent and starting line of the logical line on its first
    /// token.
    fn begin_token(&mut self) {
        if self.toks.is_empty() {
            self.indent = self.ws_run;
            self.start_line = self.line;
        }
        self.physical_start = false;
    }

    fn flush_line(&mut self) {
        if !self.toks.is_empty() {
            self.logical.push(LogicalLine {
                indent: self.indent,
                line: self.start_line,
                toks: std::mem::take(&mut self.toks),
            });
        }
    }

    fn push_op(&mut self, op: String) {
        self.toks.push(Tok {
            kind: TokKind::Op(op),
            line: self.line,
        });
    }

    fn lex_close_bracket(&mut self, close: char) -> Result<(), ParseError> {
        self.begin_token();
        match self.open_brackets.pop() {
            Some((open, _)) if brackets_match(open, close) => {}
            Some((open, line)) => {
                return Err(ParseError::new(
                    self.line,
                    format!("closing '{close}' does not match '{open}' opened on line {line}"),
                ));
            }
            None => {
                return Err(ParseError::new(self.line, format!("unmatched '{close}'")));
            }
        }
        self.push_op(close.to_string());
        self.pos += 1;
        Ok(())
    }

    fn lex_string(&mut self) -> Result<(), ParseError> {
        self.begin_token();
        let quote = self.chars[self.pos];
        let start_line = self.line;
        let triple = self.chars.get(self.pos + 1) == Some(&quote)
            && self.chars.get(self.pos + 2) == Some(&quote);
        self.pos += if triple { 3 } else { 1 };
        loop {
            let Some(&c) = self.chars.get(self.pos) else {
                return Err(ParseError::new(start_line, "unterminated string literal"));
            };
            if c == '\\' {
                if self.chars.get(self.pos + 1) == Some(&'\n') {
                    self.line += 1;
                }
                self.pos += 2;
            } else if c == '\n' {
                if !triple {
                    return Err(ParseError::new(start_line, "unterminated string literal"));
                }
                self.line += 1;
                self.pos += 1;
            } else if c == quote {
                if !triple {
                    self.pos += 1;
                    break;
                }
                if self.chars.get(self.pos + 1) == Some(&quote)
                    && self.chars.get(self.pos + 2) == Some(&quote)
                {
                    self.pos += 3;
                    break;
                }
                self.pos += 1;
            } else {
                self.pos += 1;
            }
        }
        self.toks.push(Tok {
            kind: TokKind::Str,
            line: start_line,
        });
        Ok(())
    }

    fn lex_number(&mut self) {
        self.begin_token();
        let line = self.line;
        while self
            .chars
            .get(self.pos)
            .is_some_and(|&c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
        {
            self.pos += 1;
        }
        self.toks.push(Tok {
            kind: TokKind::Number,
            line,
        });
    }

    fn lex_word(&mut self) -> Result<(), ParseError> {
        self.begin_token();
        let start = self.pos;
        let line = self.line;
        while self.chars.get(self.pos).is_some_and(|&c| is_ident_continue(c)) {
            self.pos += 1;
        }
        let word: String = self.chars[start..self.pos].iter().collect();
        // A short r/b/u/f prefix glued to a quote starts a string literal.
        if word.len() <= 2
            && word.chars().all(|c| "rbufRBUF".contains(c))
            && self
                .chars
                .get(self.pos)
                .is_some_and(|&c| c == '\'' || c == '"')
        {
            return self.lex_string();
        }
        let kind = match KEYWORDS.iter().find(|k| **k == word) {
            Some(&k) => TokKind::Keyword(k),
            None => TokKind::Ident(word),
        };
        self.toks.push(Tok { kind, line });
        Ok(())
    }

    fn lex_operator(&mut self) {
        self.begin_token();
        for (len, table) in [(3, THREE_CHAR_OPS), (2, TWO_CHAR_OPS)] {
            if self.pos + len <= self.chars.len() {
                let op: String = self.chars[self.pos..self.pos + len].iter().collect();
                if table.contains(&op.as_str()) {
                    self.pos += len;
                    self.push_op(op);
                    return;
                }
            }
        }
        let op = self.chars[self.pos].to_string();
        self.pos += 1;
        self.push_op(op);
    }
}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod tests;
