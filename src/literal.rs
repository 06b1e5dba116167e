use crate::context::ParseContext;
use crate::parser::{ParseResult, Parser};
use crate::text::escape_double_quote;
use std::borrow::Cow;
use std::fmt;

/// The source from `start` on, or `None` if `start` is not a valid character boundary
fn rest<'src>(ctx: &ParseContext<'src, '_>, start: usize) -> Option<&'src str> {
    ctx.src().get(start..)
}

/// Parser that matches one specific character
pub struct CharParser {
    expected: char,
}

impl CharParser {
    pub fn new(expected: char) -> Self {
        CharParser { expected }
    }
}

impl Parser for CharParser {
    type Output = char;

    fn parse_or_none<'p>(
        &'p self,
        ctx: &mut ParseContext<'_, 'p>,
        start: usize,
    ) -> Option<ParseResult<char>> {
        let ch = rest(ctx, start)?.chars().next()?;
        (ch == self.expected).then(|| ParseResult::new(ch, start, start + ch.len_utf8()))
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.expected.escape_default())
    }
}

/// Match exactly `expected`
pub fn char_(expected: char) -> CharParser {
    CharParser::new(expected)
}

/// Parser that matches an exact, case-sensitive string
pub struct StringParser {
    expected: Cow<'static, str>,
}

impl StringParser {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        StringParser {
            expected: expected.into(),
        }
    }
}

impl Parser for StringParser {
    type Output = String;

    fn parse_or_none<'p>(
        &'p self,
        ctx: &mut ParseContext<'_, 'p>,
        start: usize,
    ) -> Option<ParseResult<String>> {
        rest(ctx, start)?
            .starts_with(self.expected.as_ref())
            .then(|| ParseResult::new(self.expected.to_string(), start, start + self.expected.len()))
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", escape_double_quote(&self.expected))
    }
}

/// Match exactly `expected`, yielding the matched text
pub fn string(expected: impl Into<Cow<'static, str>>) -> StringParser {
    StringParser::new(expected)
}

/// Alias for [`string`]
pub fn literal(expected: impl Into<Cow<'static, str>>) -> StringParser {
    StringParser::new(expected)
}

/// Parser that consumes any single character
pub struct AnyChar;

impl Parser for AnyChar {
    type Output = char;

    fn parse_or_none<'p>(
        &'p self,
        ctx: &mut ParseContext<'_, 'p>,
        start: usize,
    ) -> Option<ParseResult<char>> {
        let ch = rest(ctx, start)?.chars().next()?;
        Some(ParseResult::new(ch, start, start + ch.len_utf8()))
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(".")
    }
}

pub fn any_char() -> AnyChar {
    AnyChar
}

/// Parser that consumes one character accepted by a predicate
pub struct CharWhere<F> {
    description: Cow<'static, str>,
    predicate: F,
}

impl<F> CharWhere<F>
where
    F: Fn(char) -> bool,
{
    pub fn new(description: impl Into<Cow<'static, str>>, predicate: F) -> Self {
        CharWhere {
            description: description.into(),
            predicate,
        }
    }
}

impl<F> Parser for CharWhere<F>
where
    F: Fn(char) -> bool + 'static,
{
    type Output = char;

    fn parse_or_none<'p>(
        &'p self,
        ctx: &mut ParseContext<'_, 'p>,
        start: usize,
    ) -> Option<ParseResult<char>> {
        let ch = rest(ctx, start)?.chars().next()?;
        (self.predicate)(ch).then(|| ParseResult::new(ch, start, start + ch.len_utf8()))
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.description)
    }
}

/// Match one character satisfying `predicate`; `description` is used when rendering the parser
pub fn char_where<F>(description: impl Into<Cow<'static, str>>, predicate: F) -> CharWhere<F>
where
    F: Fn(char) -> bool + 'static,
{
    CharWhere::new(description, predicate)
}
