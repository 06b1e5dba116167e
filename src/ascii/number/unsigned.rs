use super::{NumberError, scan_digits};
use crate::context::ParseContext;
use crate::parser::{ParseResult, Parser};
use std::fmt;

/// Parser that matches one or more ASCII digits and returns them as a u64
///
/// The whole digit run is consumed; a run that does not fit in a `u64`
/// aborts the parse with [`NumberError::TooLarge`].
pub fn u64() -> UIntParser {
    UIntParser
}

pub struct UIntParser;

impl Parser for UIntParser {
    type Output = u64;

    fn parse_or_none<'p>(
        &'p self,
        ctx: &mut ParseContext<'_, 'p>,
        start: usize,
    ) -> Option<ParseResult<u64>> {
        let end = scan_digits(ctx.src(), start);
        if end == start {
            return None;
        }

        let digits = &ctx.src()[start..end];
        match digits.parse::<u64>() {
            Ok(value) => Some(ParseResult::new(value, start, end)),
            Err(_) => {
                ctx.abort(start, NumberError::TooLarge(digits.to_string()));
                None
            }
        }
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("/[0-9]+/")
    }
}
