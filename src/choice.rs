use crate::context::ParseContext;
use crate::parser::{Describe, ParseResult, Parser};
use std::fmt;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// The second parser always starts from the original offset. Once the first
/// one matches the choice is committed; the second is never consulted.
pub struct Choice<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Choice<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Choice { parser1, parser2 }
    }
}

impl<P1, P2, O> Parser for Choice<P1, P2>
where
    P1: Parser<Output = O>,
    P2: Parser<Output = O>,
    O: Clone + 'static,
{
    type Output = O;

    fn parse_or_none<'p>(
        &'p self,
        ctx: &mut ParseContext<'_, 'p>,
        start: usize,
    ) -> Option<ParseResult<O>> {
        if let Some(result) = ctx.parse(&self.parser1, start) {
            return Some(result);
        }
        ctx.parse(&self.parser2, start)
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} / {})", Describe(&self.parser1), Describe(&self.parser2))
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt: Parser + Sized {
    fn or<P>(self, other: P) -> Choice<Self, P>
    where
        P: Parser<Output = Self::Output>,
    {
        Choice::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<P> OrExt for P where P: Parser {}

/// Convenience function to create a Choice parser
pub fn choice<P1, P2, O>(parser1: P1, parser2: P2) -> Choice<P1, P2>
where
    P1: Parser<Output = O>,
    P2: Parser<Output = O>,
    O: Clone + 'static,
{
    Choice::new(parser1, parser2)
}
