use crate::context::ParseContext;
use crate::parser::{Describe, ParseResult, Parser};
use std::fmt;

/// Parser combinator that matches a list of items separated by a parser
///
/// This combinator parses at least one item, followed by zero or more
/// occurrences of (separator + item). It returns a vector of all items.
///
/// # Examples
/// - `"a,b,c"` with separator `,` → `vec!["a", "b", "c"]`
/// - `"1;2;3"` with separator `;` → `vec![1, 2, 3]`
///
/// # Note
/// - Requires at least one element
/// - A trailing separator is left unconsumed
/// - Does not handle whitespace automatically
pub struct SeparatedList<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> SeparatedList<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        SeparatedList { parser, separator }
    }
}

impl<P, PS> Parser for SeparatedList<P, PS>
where
    P: Parser,
    PS: Parser,
{
    type Output = Vec<P::Output>;

    fn parse_or_none<'p>(
        &'p self,
        ctx: &mut ParseContext<'_, 'p>,
        start: usize,
    ) -> Option<ParseResult<Self::Output>> {
        let first = ctx.parse(&self.parser, start)?;
        let mut results = vec![first.value];
        let mut offset = first.end;

        loop {
            let Some(separator) = ctx.parse(&self.separator, offset) else {
                break;
            };
            let Some(item) = ctx.parse(&self.parser, separator.end) else {
                break;
            };
            if item.end <= offset {
                break;
            }
            results.push(item.value);
            offset = item.end;
        }

        if ctx.is_aborted() {
            return None;
        }
        Some(ParseResult::new(results, start, offset))
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({} ({} {})*)",
            Describe(&self.parser),
            Describe(&self.separator),
            Describe(&self.parser)
        )
    }
}

/// Convenience function to create a SeparatedList parser
pub fn separated_list<P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS>
where
    P: Parser,
    PS: Parser,
{
    SeparatedList::new(parser, separator)
}
