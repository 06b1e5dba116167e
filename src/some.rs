use crate::context::ParseContext;
use crate::many::repeat;
use crate::parser::{Describe, ParseResult, Parser};
use std::fmt;

/// Parser combinator that matches one or more occurrences of the given parser
///
/// At least one iteration has to consume input; a zero-width first match
/// counts as a failure.
pub struct OneOrMore<P> {
    parser: P,
}

impl<P> OneOrMore<P> {
    pub fn new(parser: P) -> Self {
        OneOrMore { parser }
    }
}

impl<P> Parser for OneOrMore<P>
where
    P: Parser,
{
    type Output = Vec<P::Output>;

    fn parse_or_none<'p>(
        &'p self,
        ctx: &mut ParseContext<'_, 'p>,
        start: usize,
    ) -> Option<ParseResult<Self::Output>> {
        let (values, end) = repeat(&self.parser, ctx, start);
        if values.is_empty() || ctx.is_aborted() {
            return None;
        }
        Some(ParseResult::new(values, start, end))
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+", Describe(&self.parser))
    }
}

/// Convenience function to create a OneOrMore parser
pub fn some<P: Parser>(parser: P) -> OneOrMore<P> {
    OneOrMore::new(parser)
}

/// Extension trait to add .one_or_more() method support for parsers
pub trait SomeExt: Parser + Sized {
    fn one_or_more(self) -> OneOrMore<Self> {
        OneOrMore::new(self)
    }
}

/// Implement SomeExt for all parsers
impl<P> SomeExt for P where P: Parser {}
