use crate::context::ParseContext;
use crate::parser::{Describe, ParseResult, Parser};
use std::fmt;

/// Parser combinator that performs positive lookahead
///
/// Succeeds with the wrapped parser's value if it would match at the current
/// position, but reports a zero-width span. Never consumes any input.
pub struct Lookahead<P> {
    parser: P,
}

impl<P> Lookahead<P> {
    pub fn new(parser: P) -> Self {
        Lookahead { parser }
    }
}

impl<P> Parser for Lookahead<P>
where
    P: Parser,
{
    type Output = P::Output;

    fn parse_or_none<'p>(
        &'p self,
        ctx: &mut ParseContext<'_, 'p>,
        start: usize,
    ) -> Option<ParseResult<Self::Output>> {
        let matched = ctx.parse(&self.parser, start)?;
        Some(ParseResult::new(matched.value, start, start))
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "&{}", Describe(&self.parser))
    }
}

/// Convenience function to create a Lookahead parser
pub fn lookahead<P: Parser>(parser: P) -> Lookahead<P> {
    Lookahead::new(parser)
}

/// Extension trait to add .and() method support for parsers
pub trait LookaheadExt: Parser + Sized {
    /// Positive lookahead, the PEG `&` operator
    fn and(self) -> Lookahead<Self> {
        Lookahead::new(self)
    }
}

/// Implement LookaheadExt for all parsers
impl<P> LookaheadExt for P where P: Parser {}
