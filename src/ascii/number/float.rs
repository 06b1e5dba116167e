use super::{NumberError, scan_digits, scan_sign};
use crate::context::ParseContext;
use crate::parser::{ParseResult, Parser};
use std::fmt;

/// Parser for int.uint format (e.g., 123.456, -42.789)
///
/// Both the integer and the fractional part need at least one digit.
pub fn f64() -> FloatParser {
    FloatParser
}

pub struct FloatParser;

impl Parser for FloatParser {
    type Output = f64;

    fn parse_or_none<'p>(
        &'p self,
        ctx: &mut ParseContext<'_, 'p>,
        start: usize,
    ) -> Option<ParseResult<f64>> {
        let src = ctx.src();
        let int_start = scan_sign(src, start);
        let int_end = scan_digits(src, int_start);
        if int_end == int_start || src.as_bytes().get(int_end) != Some(&b'.') {
            return None;
        }
        let end = scan_digits(src, int_end + 1);
        if end == int_end + 1 {
            return None;
        }

        let text = &src[start..end];
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Some(ParseResult::new(value, start, end)),
            _ => {
                ctx.abort(start, NumberError::FloatOverflow(text.to_string()));
                None
            }
        }
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("/[+-]?[0-9]+\\.[0-9]+/")
    }
}
