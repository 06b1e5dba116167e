use crate::context::ParseContext;
use crate::parser::{Describe, ParseResult, Parser};
use std::fmt;

/// Parser combinator that performs negative lookahead
///
/// Succeeds with () if the given parser fails at the current position.
/// Fails if the given parser succeeds.
/// Never consumes any input regardless of outcome.
pub struct Not<P> {
    parser: P,
}

impl<P> Not<P> {
    pub fn new(parser: P) -> Self {
        Not { parser }
    }
}

impl<P> Parser for Not<P>
where
    P: Parser,
{
    type Output = ();

    fn parse_or_none<'p>(
        &'p self,
        ctx: &mut ParseContext<'_, 'p>,
        start: usize,
    ) -> Option<ParseResult<()>> {
        match ctx.parse(&self.parser, start) {
            Some(_) => None,
            None if ctx.is_aborted() => None,
            None => Some(ParseResult::new((), start, start)),
        }
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "!{}", Describe(&self.parser))
    }
}

/// Convenience function to create a Not parser for negative lookahead
pub fn not<P: Parser>(parser: P) -> Not<P> {
    Not::new(parser)
}

/// Alias for [`not`]
pub fn negative_lookahead<P: Parser>(parser: P) -> Not<P> {
    Not::new(parser)
}

/// Extension trait to add .not() method support for parsers
pub trait NotExt: Parser + Sized {
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

/// Implement NotExt for all parsers
impl<P> NotExt for P where P: Parser {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::CaptureExt;
    use crate::literal::{any_char, char_, string};
    use crate::many::many;
    use crate::sequence::SequenceExt;

    #[test]
    fn test_not_succeeds_when_inner_fails() {
        let mut ctx = ParseContext::with_source("abc");
        let parser = not(char_('x'));
        let result = ctx.parse(&parser, 0).unwrap();

        assert_eq!((result.start, result.end), (0, 0));
    }

    #[test]
    fn test_not_fails_when_inner_matches() {
        let mut ctx = ParseContext::with_source("abc");
        let parser = char_('a').not();
        assert!(ctx.parse(&parser, 0).is_none());
    }

    #[test]
    fn test_not_at_end_of_input() {
        let mut ctx = ParseContext::with_source("");
        let parser = not(any_char());
        assert!(ctx.parse(&parser, 0).is_some());
    }

    #[test]
    fn test_not_as_exclusion() {
        // Everything up to the closing quote
        let mut ctx = ParseContext::with_source("abc\"rest");
        let body = many(negative_lookahead(char_('"')).then_capture(any_char()));

        let result = ctx.parse(&body, 0).unwrap();
        assert_eq!(result.value, vec![('a',), ('b',), ('c',)]);
        assert_eq!(result.end, 3);
    }

    #[test]
    fn test_keyword_not_followed_by_identifier_char() {
        let keyword = string("if")
            .capture()
            .then_ignore(char_where_alnum().not());

        let mut ctx = ParseContext::with_source("if x");
        assert!(ctx.parse(&keyword, 0).is_some());

        let mut ctx = ParseContext::with_source("iffy");
        assert!(ctx.parse(&keyword, 0).is_none());
    }

    fn char_where_alnum() -> impl Parser<Output = char> {
        crate::literal::char_where("alphanumeric", |c| c.is_alphanumeric())
    }

    #[test]
    fn test_not_description() {
        assert_eq!(Describe(&not(char_('a'))).to_string(), "!'a'");
    }
}
