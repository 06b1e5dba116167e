use crate::context::ParseContext;
use crate::parser::{Describe, ParseResult, Parser};
use std::fmt;

/// Parser combinator that matches content enclosed by an opening and closing delimiter
///
/// Only the content's value is kept; the span covers both delimiters.
pub struct Between<P1, P2, P3> {
    open: P1,
    content: P2,
    close: P3,
}

impl<P1, P2, P3> Between<P1, P2, P3> {
    pub fn new(open: P1, content: P2, close: P3) -> Self {
        Between {
            open,
            content,
            close,
        }
    }
}

impl<P1, P2, P3> Parser for Between<P1, P2, P3>
where
    P1: Parser,
    P2: Parser,
    P3: Parser,
{
    type Output = P2::Output;

    fn parse_or_none<'p>(
        &'p self,
        ctx: &mut ParseContext<'_, 'p>,
        start: usize,
    ) -> Option<ParseResult<Self::Output>> {
        let open = ctx.parse(&self.open, start)?;
        let content = ctx.parse(&self.content, open.end)?;
        let close = ctx.parse(&self.close, content.end)?;
        Some(ParseResult::new(content.value, start, close.end))
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({} {} {})",
            Describe(&self.open),
            Describe(&self.content),
            Describe(&self.close)
        )
    }
}

/// Convenience function to create a Between parser
pub fn between<P1, P2, P3>(open: P1, content: P2, close: P3) -> Between<P1, P2, P3>
where
    P1: Parser,
    P2: Parser,
    P3: Parser,
{
    Between::new(open, content, close)
}
