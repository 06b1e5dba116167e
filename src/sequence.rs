use crate::capture::{Capture, Ignore};
use crate::context::ParseContext;
use crate::parser::{Describe, ParseResult, Parser};
use crate::tuple::{Concat, Tuple};
use std::fmt;

/// Parser combinator that runs two parsers one after the other and concatenates their tuples
///
/// Both sides must produce tuples. Wrap plain values with
/// [`capture`](crate::capture::capture) to keep them, or with
/// [`ignore`](crate::capture::ignore) to drop them, so the arity of the
/// result is always spelled out by the grammar.
///
/// Example:
/// ```
/// use pegcomb::capture::CaptureExt;
/// use pegcomb::literal::char_;
/// use pegcomb::sequence::SequenceExt;
/// use pegcomb::driver::ParseAllExt;
///
/// let parser = char_('a')
///     .capture()
///     .then_capture(char_('b'))
///     .then_capture(char_('c'));
/// assert_eq!(parser.parse_all("abc").unwrap(), ('a', 'b', 'c'));
/// ```
pub struct Sequence<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Sequence<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Sequence { parser1, parser2 }
    }
}

impl<P1, P2> Parser for Sequence<P1, P2>
where
    P1: Parser,
    P2: Parser,
    P1::Output: Concat<P2::Output>,
    P2::Output: Tuple,
{
    type Output = <P1::Output as Concat<P2::Output>>::Output;

    fn parse_or_none<'p>(
        &'p self,
        ctx: &mut ParseContext<'_, 'p>,
        start: usize,
    ) -> Option<ParseResult<Self::Output>> {
        let first = ctx.parse(&self.parser1, start)?;
        let second = ctx.parse(&self.parser2, first.end)?;
        Some(ParseResult::new(
            first.value.concat(second.value),
            start,
            second.end,
        ))
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {})", Describe(&self.parser1), Describe(&self.parser2))
    }
}

/// Convenience function to create a Sequence parser
pub fn sequence<P1, P2>(parser1: P1, parser2: P2) -> Sequence<P1, P2>
where
    P1: Parser,
    P2: Parser,
    P1::Output: Concat<P2::Output>,
    P2::Output: Tuple,
{
    Sequence::new(parser1, parser2)
}

/// Extension trait to add .then() and its shorthands to tuple-producing parsers
pub trait SequenceExt: Parser + Sized {
    fn then<P>(self, other: P) -> Sequence<Self, P>
    where
        P: Parser,
        Self::Output: Concat<P::Output>,
        P::Output: Tuple,
    {
        Sequence::new(self, other)
    }

    /// Append `other`'s value as one more tuple element
    fn then_capture<P>(self, other: P) -> Sequence<Self, Capture<P>>
    where
        P: Parser,
        Self::Output: Concat<(P::Output,)>,
    {
        Sequence::new(self, Capture::new(other))
    }

    /// Require `other` to match next without adding to the tuple
    fn then_ignore<P>(self, other: P) -> Sequence<Self, Ignore<P>>
    where
        P: Parser,
        Self::Output: Concat<()>,
    {
        Sequence::new(self, Ignore::new(other))
    }
}

/// Implement SequenceExt for all parsers
impl<P> SequenceExt for P where P: Parser {}
