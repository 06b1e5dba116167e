use crate::context::ParseContext;
use crate::parser::{Describe, ParseResult, Parser};
use std::borrow::Cow;
use std::fmt;

/// Parser that applies a predicate function to filter the output of another parser
///
/// A rejected value is an ordinary no-match at the parser's start offset, so
/// an enclosing choice moves on to its next alternative.
pub struct FilterParser<P, F> {
    parser: P,
    predicate: F,
    description: Cow<'static, str>,
}

impl<P, F> FilterParser<P, F> {
    pub fn new(parser: P, predicate: F, description: Cow<'static, str>) -> Self {
        Self {
            parser,
            predicate,
            description,
        }
    }
}

impl<P, F, T> Parser for FilterParser<P, F>
where
    P: Parser<Output = T>,
    F: Fn(&T) -> bool + 'static,
    T: Clone + 'static,
{
    type Output = T;

    fn parse_or_none<'p>(
        &'p self,
        ctx: &mut ParseContext<'_, 'p>,
        start: usize,
    ) -> Option<ParseResult<T>> {
        let result = ctx.parse(&self.parser, start)?;
        (self.predicate)(&result.value).then_some(result)
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", Describe(&self.parser), self.description)
    }
}

/// Extension trait to add filter method to all parsers
pub trait FilterExt: Parser {
    fn filter<F>(
        self,
        predicate: F,
        description: impl Into<Cow<'static, str>>,
    ) -> FilterParser<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Output) -> bool + 'static,
    {
        FilterParser::new(self, predicate, description.into())
    }
}

impl<P: Parser> FilterExt for P {}
