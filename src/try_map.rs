use crate::context::ParseContext;
use crate::parser::{ParseResult, Parser};
use std::error::Error;
use std::fmt;

/// Parser combinator that transforms the output with a fallible function
///
/// An `Err` from the mapper is not a grammar failure: it aborts the whole
/// parse and surfaces from the driver as
/// [`ParseError::Transform`](crate::ParseError::Transform), positioned at the
/// start of the match that was being converted.
pub struct TryMap<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> TryMap<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        TryMap { parser, mapper }
    }
}

impl<P, F> fmt::Debug for TryMap<P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryMap")
            .field("parser", &std::any::type_name::<P>())
            .field("mapper", &"<function>")
            .finish()
    }
}

impl<P, F, T, U, E> Parser for TryMap<P, F>
where
    P: Parser<Output = T>,
    F: Fn(T) -> Result<U, E> + 'static,
    U: Clone + 'static,
    E: Into<Box<dyn Error + Send + Sync>>,
{
    type Output = U;

    fn parse_or_none<'p>(
        &'p self,
        ctx: &mut ParseContext<'_, 'p>,
        start: usize,
    ) -> Option<ParseResult<U>> {
        let result = ctx.parse(&self.parser, start)?;
        match (self.mapper)(result.value) {
            Ok(value) => Some(ParseResult::new(value, result.start, result.end)),
            Err(err) => {
                ctx.abort(result.start, err);
                None
            }
        }
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.parser.describe(f)
    }
}

/// Extension trait to add .try_map() method support for parsers
pub trait TryMapExt: Parser + Sized {
    fn try_map<F, U, E>(self, mapper: F) -> TryMap<Self, F>
    where
        F: Fn(Self::Output) -> Result<U, E> + 'static,
        U: Clone + 'static,
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        TryMap::new(self, mapper)
    }
}

/// Implement TryMapExt for all parsers
impl<P> TryMapExt for P where P: Parser {}

/// Convenience function to create a TryMap parser
pub fn try_map<P, F, T, U, E>(parser: P, mapper: F) -> TryMap<P, F>
where
    P: Parser<Output = T>,
    F: Fn(T) -> Result<U, E> + 'static,
    U: Clone + 'static,
    E: Into<Box<dyn Error + Send + Sync>>,
{
    TryMap::new(parser, mapper)
}
