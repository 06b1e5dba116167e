use crate::context::ParseContext;
use crate::parser::{Describe, ParseResult, Parser};
use std::fmt;

/// Parser combinator that makes a parser optional
///
/// Yields `Some(value)` when the parser matches and `None` with a zero-width
/// span when it does not. Never fails.
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<P> Parser for Optional<P>
where
    P: Parser,
{
    type Output = Option<P::Output>;

    fn parse_or_none<'p>(
        &'p self,
        ctx: &mut ParseContext<'_, 'p>,
        start: usize,
    ) -> Option<ParseResult<Self::Output>> {
        match ctx.parse(&self.parser, start) {
            Some(result) => Some(result.map_value(Some)),
            None if ctx.is_aborted() => None,
            None => Some(ParseResult::new(None, start, start)),
        }
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}?", Describe(&self.parser))
    }
}

pub fn optional<P: Parser>(parser: P) -> Optional<P> {
    Optional::new(parser)
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt: Parser + Sized {
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }
}

/// Implement OptionalExt for all parsers
impl<P> OptionalExt for P where P: Parser {}
