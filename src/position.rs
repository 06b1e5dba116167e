use crate::context::ParseContext;
use crate::parser::{ParseResult, Parser};
use std::fmt;

/// A parsed value together with where it was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located<T> {
    pub value: T,
    /// Start position (inclusive)
    pub start: usize,
    /// End position (exclusive)
    pub end: usize,
    /// 1-based line of `start`
    pub line: usize,
    /// 1-based column of `start`, in characters
    pub column: usize,
}

impl<T> Located<T> {
    /// Get the length of the span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A parser combinator that captures the position of a successful parse
pub struct Position<P> {
    parser: P,
}

impl<P> Position<P> {
    pub fn new(parser: P) -> Self {
        Position { parser }
    }
}

impl<P> Parser for Position<P>
where
    P: Parser,
{
    type Output = Located<P::Output>;

    fn parse_or_none<'p>(
        &'p self,
        ctx: &mut ParseContext<'_, 'p>,
        start: usize,
    ) -> Option<ParseResult<Self::Output>> {
        let result = ctx.parse(&self.parser, start)?;
        let location = ctx.location(result.start);
        let located = Located {
            value: result.value,
            start: result.start,
            end: result.end,
            line: location.line,
            column: location.column,
        };
        Some(ParseResult::new(located, result.start, result.end))
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.parser.describe(f)
    }
}

/// Extension trait to add position tracking to any parser
pub trait PositionExt: Parser + Sized {
    /// Wrap this parser to capture its location
    fn located(self) -> Position<Self> {
        Position::new(self)
    }
}

impl<P> PositionExt for P where P: Parser {}

/// Convenience function to create a Position combinator
pub fn position<P: Parser>(parser: P) -> Position<P> {
    Position::new(parser)
}
