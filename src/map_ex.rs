use crate::context::ParseContext;
use crate::parser::{ParseResult, Parser};
use std::fmt;

/// Parser combinator that transforms a result with access to the parse context
///
/// The mapper sees the whole [`ParseResult`], so it can recover the matched
/// text, the span, or a line and column through the context.
pub struct MapEx<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> MapEx<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        MapEx { parser, mapper }
    }
}

impl<P, F, T, U> Parser for MapEx<P, F>
where
    P: Parser<Output = T>,
    F: Fn(&ParseContext<'_, '_>, ParseResult<T>) -> U + 'static,
    U: Clone + 'static,
{
    type Output = U;

    fn parse_or_none<'p>(
        &'p self,
        ctx: &mut ParseContext<'_, 'p>,
        start: usize,
    ) -> Option<ParseResult<U>> {
        let result = ctx.parse(&self.parser, start)?;
        let (start, end) = (result.start, result.end);
        let value = (self.mapper)(&*ctx, result);
        Some(ParseResult::new(value, start, end))
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.parser.describe(f)
    }
}

pub fn map_ex<P, F, T, U>(parser: P, mapper: F) -> MapEx<P, F>
where
    P: Parser<Output = T>,
    F: Fn(&ParseContext<'_, '_>, ParseResult<T>) -> U + 'static,
    U: Clone + 'static,
{
    MapEx::new(parser, mapper)
}

/// Mapper used by [`MapExExt::text`]
pub type TextMapper<T> = fn(&ParseContext<'_, '_>, ParseResult<T>) -> String;

/// Extension trait to add .map_ex() method support for parsers
pub trait MapExExt: Parser + Sized {
    fn map_ex<F, U>(self, mapper: F) -> MapEx<Self, F>
    where
        F: Fn(&ParseContext<'_, '_>, ParseResult<Self::Output>) -> U + 'static,
        U: Clone + 'static,
    {
        MapEx::new(self, mapper)
    }

    /// Replace the value with the matched source text, line endings normalized
    fn text(self) -> MapEx<Self, TextMapper<Self::Output>> {
        let mapper: TextMapper<Self::Output> = |ctx, result| result.text(ctx);
        MapEx::new(self, mapper)
    }
}

/// Implement MapExExt for all parsers
impl<P> MapExExt for P where P: Parser {}
