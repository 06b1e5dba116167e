use super::{NumberError, scan_digits, scan_sign};
use crate::context::ParseContext;
use crate::parser::{ParseResult, Parser};
use std::fmt;

/// Parser that matches ASCII integer numbers (positive or negative)
///
/// An optional `+` or `-` is followed by one or more digits. Values outside
/// the `i64` range abort the parse with [`NumberError::TooLarge`].
pub fn i64() -> IntParser {
    IntParser
}

pub struct IntParser;

impl Parser for IntParser {
    type Output = i64;

    fn parse_or_none<'p>(
        &'p self,
        ctx: &mut ParseContext<'_, 'p>,
        start: usize,
    ) -> Option<ParseResult<i64>> {
        let digits_start = scan_sign(ctx.src(), start);
        let end = scan_digits(ctx.src(), digits_start);
        if end == digits_start {
            return None;
        }

        let text = &ctx.src()[start..end];
        match text.parse::<i64>() {
            Ok(value) => Some(ParseResult::new(value, start, end)),
            Err(_) => {
                ctx.abort(start, NumberError::TooLarge(text.to_string()));
                None
            }
        }
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("/[+-]?[0-9]+/")
    }
}
