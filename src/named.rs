use crate::context::ParseContext;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;
use std::fmt;

/// Parser combinator that attaches a diagnostic name without changing what is matched
///
/// The name is what shows up under "Expected one of: ..." when this parser
/// fails at the deepest failure offset. Unnamed parsers never appear there.
pub struct Named<P> {
    parser: P,
    name: Cow<'static, str>,
}

impl<P> Named<P> {
    pub fn new(parser: P, name: impl Into<Cow<'static, str>>) -> Self {
        Named {
            parser,
            name: name.into(),
        }
    }
}

impl<P> Parser for Named<P>
where
    P: Parser,
{
    type Output = P::Output;

    fn parse_or_none<'p>(
        &'p self,
        ctx: &mut ParseContext<'_, 'p>,
        start: usize,
    ) -> Option<ParseResult<Self::Output>> {
        ctx.parse(&self.parser, start)
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

pub fn named<P: Parser>(name: impl Into<Cow<'static, str>>, parser: P) -> Named<P> {
    Named::new(parser, name)
}

/// Extension trait to add .named() method support for parsers
pub trait NamedExt: Parser + Sized {
    fn named(self, name: impl Into<Cow<'static, str>>) -> Named<Self> {
        Named::new(self, name)
    }
}

/// Implement NamedExt for all parsers
impl<P> NamedExt for P where P: Parser {}
