use crate::context::ParseContext;
use crate::parser::{ParseResult, Parser};
use std::fmt;

/// Parser combinator that transforms the output of a parser using a mapping function
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<P, F, T, U> Parser for Map<P, F>
where
    P: Parser<Output = T>,
    F: Fn(T) -> U + 'static,
    U: Clone + 'static,
{
    type Output = U;

    fn parse_or_none<'p>(
        &'p self,
        ctx: &mut ParseContext<'_, 'p>,
        start: usize,
    ) -> Option<ParseResult<U>> {
        let result = ctx.parse(&self.parser, start)?;
        Some(result.map_value(&self.mapper))
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.parser.describe(f)
    }
}

/// Convenience function to create a Map parser
pub fn map<P, F, T, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<Output = T>,
    F: Fn(T) -> U + 'static,
    U: Clone + 'static,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt: Parser + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U + 'static,
        U: Clone + 'static,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<P> MapExt for P where P: Parser {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::CaptureExt;
    use crate::choice::OrExt;
    use crate::literal::char_;
    use crate::pattern::regex;
    use crate::sequence::SequenceExt;

    #[derive(Debug, Clone, PartialEq)]
    enum Token {
        Letter(char),
        Number(i64),
    }

    #[test]
    fn test_map_char_to_digit() {
        let mut ctx = ParseContext::with_source("7");
        let parser = char_('7').map(|c| c.to_digit(10));

        assert_eq!(ctx.parse(&parser, 0).unwrap().value, Some(7));
    }

    #[test]
    fn test_map_keeps_span() {
        let mut ctx = ParseContext::with_source("x123");
        let parser = regex("[0-9]+").map(|m| m.as_str().len());

        let result = ctx.parse(&parser, 1).unwrap();
        assert_eq!(result.value, 3);
        assert_eq!((result.start, result.end), (1, 4));
    }

    #[test]
    fn test_map_into_tokens() {
        let number = regex("[0-9]+").map(|m| Token::Number(m.as_str().parse().unwrap_or(0)));
        let letter = regex("[a-z]").map(|m| Token::Letter(m.as_str().chars().next().unwrap_or('?')));
        let token = number.or(letter);

        let mut ctx = ParseContext::with_source("42x");
        assert_eq!(ctx.parse(&token, 0).unwrap().value, Token::Number(42));
        assert_eq!(ctx.parse(&token, 2).unwrap().value, Token::Letter('x'));
    }

    #[test]
    fn test_map_destructures_tuples() {
        let mut ctx = ParseContext::with_source("ab");
        let parser = map(
            char_('a').capture().then_capture(char_('b')),
            |(a, b)| format!("{b}{a}"),
        );

        assert_eq!(ctx.parse(&parser, 0).unwrap().value, "ba");
    }

    #[test]
    fn test_map_not_called_on_failure() {
        let mut ctx = ParseContext::with_source("b");
        let parser = char_('a').map(|_| -> u8 { panic!("mapper must not run") });
        assert!(ctx.parse(&parser, 0).is_none());
    }
}
