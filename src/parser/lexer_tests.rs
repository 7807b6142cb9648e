use super::*;

fn lex_ok(source: &str) -> Vec<LogicalLine> {
    lex(source).expect("lexing should succeed")
}

#[test]
fn empty_source_has_no_logical_lines() {
    assert!(lex_ok("").is_empty());
    assert!(lex_ok("\n\n\n").is_empty());
}

#[test]
fn comment_only_lines_produce_no_tokens() {
    assert!(lex_ok("# a comment\n   # another\n").is_empty());
}

#[test]
fn simple_assignment_tokens() {
    let lines = lex_ok("x = 5\n");
    assert_eq!(lines.len(), 1);
    let toks = &lines[0].toks;
    assert_eq!(toks.len(), 3);
    assert_eq!(toks[0].kind, TokKind::Ident("x".to_string()));
    assert!(toks[1].is_op("="));
    assert_eq!(toks[2].kind, TokKind::Number);
}

#[test]
fn indent_is_counted_per_logical_line() {
    let lines = lex_ok("def f():\n    return 1\n");
    assert_eq!(lines[0].indent, 0);
    assert_eq!(lines[1].indent, 4);
}

#[test]
fn keywords_are_distinguished_from_identifiers() {
    let lines = lex_ok("def func():\n");
    assert!(lines[0].toks[0].is_keyword("def"));
    assert_eq!(lines[0].toks[1].kind, TokKind::Ident("func".to_string()));
}

#[test]
fn trailing_comment_is_stripped() {
    let lines = lex_ok("x = 1  # set x\n");
    assert_eq!(lines[0].toks.len(), 3);
}

#[test]
fn bracketed_lines_join() {
    let lines = lex_ok("items = [\n    1,\n    2,\n]\n");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].line, 1);
}

#[test]
fn backslash_continuation_joins() {
    let lines = lex_ok("total = 1 + \\\n    2\n");
    assert_eq!(lines.len(), 1);
}

#[test]
fn line_numbers_advance_across_multiline_strings() {
    let lines = lex_ok("s = \"\"\"first\nsecond\n\"\"\"\nx = 1\n");
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1].line, 4);
}

#[test]
fn string_contents_are_opaque() {
    let lines = lex_ok("s = 'def not_a_def():'\n");
    let toks = &lines[0].toks;
    assert_eq!(toks.len(), 3);
    assert_eq!(toks[2].kind, TokKind::Str);
}

#[test]
fn prefixed_strings_lex_as_strings() {
    let lines = lex_ok("p = rb'\\x00'\nq = f\"{x}\"\n");
    assert_eq!(lines[0].toks[2].kind, TokKind::Str);
    assert_eq!(lines[1].toks[2].kind, TokKind::Str);
}

#[test]
fn escaped_quote_stays_inside_string() {
    let lines = lex_ok("s = 'it\\'s'\n");
    assert_eq!(lines[0].toks.len(), 3);
}

#[test]
fn multi_char_operators_lex_as_one_token() {
    let lines = lex_ok("x == y != z -> a\n");
    let ops: Vec<bool> = vec![
        lines[0].toks[1].is_op("=="),
        lines[0].toks[3].is_op("!="),
        lines[0].toks[5].is_op("->"),
    ];
    assert_eq!(ops, vec![true, true, true]);
}

#[test]
fn walrus_is_not_a_colon() {
    let lines = lex_ok("if (n := 10) > 5:\n");
    assert!(lines[0].toks.iter().any(|t| t.is_op(":=")));
}

#[test]
fn unterminated_string_is_an_error() {
    let err = lex("s = 'open\n").unwrap_err();
    assert!(err.message.contains("unterminated"));
    assert_eq!(err.line, 1);
}

#[test]
fn unclosed_bracket_is_an_error() {
    let err = lex("items = [1, 2\n").unwrap_err();
    assert!(err.message.contains("unclosed"));
}

#[test]
fn mismatched_bracket_is_an_error() {
    let err = lex("items = [1, 2)\n").unwrap_err();
    assert!(err.message.contains("does not match"));
}

#[test]
fn unmatched_close_is_an_error() {
    let err = lex("x = 1)\n").unwrap_err();
    assert!(err.message.contains("unmatched"));
}

#[test]
fn final_line_without_newline_is_kept() {
    let lines = lex_ok("x = 1");
    assert_eq!(lines.len(), 1);
}
