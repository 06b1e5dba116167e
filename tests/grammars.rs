//! End-to-end grammars built only from the public API
//!
//! The arithmetic grammar is recursive (parentheses), so it lives in a static
//! and refers back to itself through `lazy`.

use once_cell::sync::Lazy as LazyStatic;
use pegcomb::prelude::*;
use pegcomb::{parse_all, parse_all_with};
use std::thread;

fn sym(c: char) -> impl Parser<Output = char> + Send + Sync {
    char_(c).capture().then_ignore(whitespaces()).map(|(c,)| c)
}

static EXPR: LazyStatic<BoxedParser<i64>> = LazyStatic::new(|| {
    let number = regex("[0-9]+")
        .try_map(|m| m.as_str().parse::<i64>())
        .named("number")
        .capture()
        .then_ignore(whitespaces())
        .map(|(n,)| n);
    let atom = number.or(between(sym('('), lazy(|| &*EXPR), sym(')')));
    let product = left_associative(atom, sym('*').or(sym('/')), |a, op, b| match op {
        '*' => a.wrapping_mul(b),
        _ if b == 0 => 0,
        _ => a.wrapping_div(b),
    });
    left_associative(product, sym('+').or(sym('-')), |a, op, b| match op {
        '+' => a.wrapping_add(b),
        _ => a.wrapping_sub(b),
    })
    .boxed()
});

// Left recursive on purpose: left = left 'a' / 'a'
static LEFT: LazyStatic<BoxedParser<usize>> = LazyStatic::new(|| {
    lazy(|| &*LEFT)
        .capture()
        .then_ignore(char_('a'))
        .map(|(n,)| n + 1)
        .or(char_('a').map(|_| 1usize))
        .boxed()
});

fn eval(src: &str) -> Result<i64, ParseError> {
    parse_all(&*EXPR, src, true)
}

fn nested(depth: usize) -> String {
    format!("{}1{}", "(".repeat(depth), ")".repeat(depth))
}

/// Deep grammars recurse once per nesting level, so give them room
fn with_big_stack<F, T>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    thread::Builder::new()
        .stack_size(256 * 1024 * 1024)
        .spawn(f)
        .unwrap()
        .join()
        .unwrap()
}

#[test]
fn test_arithmetic() {
    assert_eq!(eval("2*(3+4)").unwrap(), 14);
    assert_eq!(eval("1 + 2 * 3").unwrap(), 7);
    assert_eq!(eval("10-4-3").unwrap(), 3);
    assert_eq!(eval("8/2/2").unwrap(), 2);
    assert_eq!(eval("((7))").unwrap(), 7);
}

#[test]
fn test_arithmetic_without_memoization() {
    assert_eq!(parse_all(&*EXPR, "2*(3+4)", false).unwrap(), 14);
    assert_eq!(parse_all(&*EXPR, "(1+2)*(3+4)-5", false).unwrap(), 16);
}

#[test]
fn test_dangling_operator_reports_what_was_expected() {
    let err = eval("1+*2").unwrap_err();

    assert!(err.is_extra_characters());
    assert_eq!(err.position(), 1);
    let diagnostics = err.diagnostics().unwrap();
    assert_eq!(diagnostics.position(), 2);
    assert!(diagnostics.expected.contains(&"number".to_string()));
}

#[test]
fn test_unclosed_parenthesis() {
    let err = eval("(1+2").unwrap_err();

    assert!(err.is_unmatched_input());
    assert_eq!(err.position(), 0);
    assert_eq!(err.diagnostics().unwrap().position(), 4);
}

#[test]
fn test_error_message_points_at_failure() {
    let err = eval("1 +\n2 * x").unwrap_err();
    let message = err.to_string();

    assert!(message.contains("line 2, column 5"));
    assert!(message.contains("Expected one of: number"));
    assert!(message.contains("  > 2 | 2 * x"));
}

#[test]
fn test_number_overflow_is_a_transform_error() {
    let err = eval("1+99999999999999999999").unwrap_err();

    assert!(matches!(err, ParseError::Transform { position: 2, .. }));
}

#[test]
fn test_cache_is_used() {
    let mut ctx = ParseContext::new("2*(3+4)", ParseOptions::default());
    assert_eq!(ctx.parse(&*EXPR, 0).unwrap().value, 14);

    let stats = ctx.cache_stats();
    assert!(stats.entries > 0);
    assert!(stats.misses >= stats.entries);

    let mut ctx = ParseContext::new("2*(3+4)", ParseOptions::new().with_memoization(false));
    assert_eq!(ctx.parse(&*EXPR, 0).unwrap().value, 14);
    assert_eq!(ctx.cache_stats().entries, 0);
}

#[test]
fn test_deep_nesting() {
    let (memoized, plain) = with_big_stack(|| {
        let src = nested(100);
        (
            parse_all(&*EXPR, &src, true).ok(),
            parse_all(&*EXPR, &src, false).ok(),
        )
    });

    assert_eq!(memoized, Some(1));
    assert_eq!(plain, Some(1));
}

#[test]
fn test_recursion_limit() {
    let err = with_big_stack(|| {
        let src = nested(200);
        let options = ParseOptions::new().with_max_depth(64);
        parse_all_with(&*EXPR, &src, options)
            .map_err(|err| err.to_string())
            .unwrap_err()
    });

    assert!(err.starts_with("Recursion limit of 64 exceeded"));
}

#[test]
fn test_left_recursion_is_no_match() {
    // Re-entry at the same offset fails, so the rule grows by one step at most
    assert_eq!(parse_all(&*LEFT, "a", true).unwrap(), 1);
    assert_eq!(parse_all(&*LEFT, "aa", true).unwrap(), 2);

    let err = parse_all(&*LEFT, "aaa", true).unwrap_err();
    assert!(err.is_extra_characters());
    assert_eq!(err.position(), 2);
}

#[test]
fn test_left_recursion_without_memoization_hits_the_depth_limit() {
    let options = ParseOptions::new().with_max_depth(100);
    assert_eq!(parse_all_with(&*LEFT, "aa", options).unwrap(), 2);

    let err = parse_all_with(&*LEFT, "aa", options.with_memoization(false)).unwrap_err();
    assert!(matches!(
        err,
        ParseError::RecursionLimit {
            limit: 100,
            position: 0
        }
    ));
}

#[test]
fn test_located_items() {
    let item = regex("[a-z]+").text().located();
    let list = separated_list(item, sym(','));

    let items = list.parse_all("ab,\ncd, ef").unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!((items[0].line, items[0].column), (1, 1));
    assert_eq!((items[1].line, items[1].column), (2, 1));
    assert_eq!((items[2].line, items[2].column), (2, 5));
    assert_eq!(items[2].value, "ef");
    assert_eq!((items[2].start, items[2].end), (8, 10));
}

#[test]
fn test_keyword_versus_identifier() {
    let keyword = string("let").capture().then_ignore(negative_lookahead(regex("[a-z0-9_]")));
    let identifier = regex("[a-z_][a-z0-9_]*").text();
    let token = keyword.map(|(kw,)| format!("kw:{kw}")).or(identifier.map(|id| format!("id:{id}")));

    assert_eq!(token.parse_all("let").unwrap(), "kw:let");
    assert_eq!(token.parse_all("letter").unwrap(), "id:letter");
}

#[test]
fn test_grammar_is_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| thread::spawn(move || eval(&format!("{i}*10+1")).unwrap()))
        .collect();
    let results: Vec<i64> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(results, vec![1, 11, 21, 31]);
}
