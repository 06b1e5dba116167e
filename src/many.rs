use crate::context::ParseContext;
use crate::parser::{Describe, ParseResult, Parser};
use std::fmt;

/// Run `parser` repeatedly from `start`, collecting values until it fails or stops advancing
///
/// An iteration that matches without consuming input ends the loop and is not
/// included, which keeps repetition of zero-width parsers finite.
pub(crate) fn repeat<'p, P: Parser + ?Sized>(
    parser: &'p P,
    ctx: &mut ParseContext<'_, 'p>,
    start: usize,
) -> (Vec<P::Output>, usize) {
    let mut values = Vec::new();
    let mut offset = start;

    while let Some(result) = ctx.parse(parser, offset) {
        if result.end <= offset {
            break;
        }
        values.push(result.value);
        offset = result.end;
    }

    (values, offset)
}

/// Parser combinator that matches zero or more occurrences of the given parser
pub struct ZeroOrMore<P> {
    parser: P,
}

impl<P> ZeroOrMore<P> {
    pub fn new(parser: P) -> Self {
        ZeroOrMore { parser }
    }
}

impl<P> Parser for ZeroOrMore<P>
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
        if ctx.is_aborted() {
            return None;
        }
        Some(ParseResult::new(values, start, end))
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}*", Describe(&self.parser))
    }
}

/// Convenience function to create a ZeroOrMore parser
pub fn many<P: Parser>(parser: P) -> ZeroOrMore<P> {
    ZeroOrMore::new(parser)
}

/// Extension trait to add .zero_or_more() method support for parsers
pub trait ManyExt: Parser + Sized {
    fn zero_or_more(self) -> ZeroOrMore<Self> {
        ZeroOrMore::new(self)
    }
}

/// Implement ManyExt for all parsers
impl<P> ManyExt for P where P: Parser {}
