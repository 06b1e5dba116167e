use crate::context::ParseContext;
use crate::parser::{Describe, ParseResult, Parser};
use std::fmt;

/// Parser combinator that wraps a value into a one-element tuple
pub struct Capture<P> {
    parser: P,
}

impl<P> Capture<P> {
    pub fn new(parser: P) -> Self {
        Capture { parser }
    }
}

impl<P> Parser for Capture<P>
where
    P: Parser,
{
    type Output = (P::Output,);

    fn parse_or_none<'p>(
        &'p self,
        ctx: &mut ParseContext<'_, 'p>,
        start: usize,
    ) -> Option<ParseResult<Self::Output>> {
        ctx.parse(&self.parser, start)
            .map(|result| result.map_value(|value| (value,)))
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.parser.describe(f)
    }
}

/// Parser combinator that keeps the span of a match but drops its value
pub struct Ignore<P> {
    parser: P,
}

impl<P> Ignore<P> {
    pub fn new(parser: P) -> Self {
        Ignore { parser }
    }
}

impl<P> Parser for Ignore<P>
where
    P: Parser,
{
    type Output = ();

    fn parse_or_none<'p>(
        &'p self,
        ctx: &mut ParseContext<'_, 'p>,
        start: usize,
    ) -> Option<ParseResult<()>> {
        ctx.parse(&self.parser, start)
            .map(|result| result.map_value(|_| ()))
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Describe(&self.parser))
    }
}

pub fn capture<P: Parser>(parser: P) -> Capture<P> {
    Capture::new(parser)
}

pub fn ignore<P: Parser>(parser: P) -> Ignore<P> {
    Ignore::new(parser)
}

/// Extension trait to add .capture() and .ignore() method support for parsers
pub trait CaptureExt: Parser + Sized {
    fn capture(self) -> Capture<Self> {
        Capture::new(self)
    }

    fn ignore(self) -> Ignore<Self> {
        Ignore::new(self)
    }
}

/// Implement CaptureExt for all parsers
impl<P> CaptureExt for P where P: Parser {}
