use crate::context::ParseContext;
use crate::parser::{ParseResult, Parser};
use std::fmt;

/// Zero-width parser that only succeeds at offset 0
pub struct StartOfInput;

impl Parser for StartOfInput {
    type Output = ();

    fn parse_or_none<'p>(
        &'p self,
        _ctx: &mut ParseContext<'_, 'p>,
        start: usize,
    ) -> Option<ParseResult<()>> {
        (start == 0).then(|| ParseResult::new((), start, start))
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<start of input>")
    }
}

/// Zero-width parser that only succeeds once the whole source is consumed
pub struct EndOfInput;

impl Parser for EndOfInput {
    type Output = ();

    fn parse_or_none<'p>(
        &'p self,
        ctx: &mut ParseContext<'_, 'p>,
        start: usize,
    ) -> Option<ParseResult<()>> {
        (start == ctx.src().len()).then(|| ParseResult::new((), start, start))
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<end of input>")
    }
}

pub fn start_of_input() -> StartOfInput {
    StartOfInput
}

pub fn end_of_input() -> EndOfInput {
    EndOfInput
}
