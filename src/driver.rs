use crate::context::ParseContext;
use crate::error::{Diagnostics, ParseError};
use crate::options::ParseOptions;
use crate::parser::Parser;
use crate::text::{escape_double_quote, truncate};
use log::debug;

/// Characters of unconsumed input quoted in an extra-characters error
const REMAINDER_PREVIEW_CHARS: usize = 10;

/// Parse the whole of `src` with `parser`
///
/// The parser runs once at offset 0 on a fresh context. Anything short of
/// consuming the entire input is an error.
pub fn parse_all<P>(parser: &P, src: &str, use_memoization: bool) -> Result<P::Output, ParseError>
where
    P: Parser + ?Sized,
{
    parse_all_with(parser, src, ParseOptions::new().with_memoization(use_memoization))
}

/// [`parse_all`] with full control over the parse options
pub fn parse_all_with<P>(parser: &P, src: &str, options: ParseOptions) -> Result<P::Output, ParseError>
where
    P: Parser + ?Sized,
{
    let mut ctx = ParseContext::new(src, options);
    debug!(
        "parsing {} bytes (memoization: {})",
        src.len(),
        options.use_memoization
    );

    let result = ctx.parse(parser, 0);
    let stats = ctx.cache_stats();
    debug!(
        "parse finished: matched={}, deepest failure at {}, cache hits={} misses={} entries={}",
        result.is_some(),
        ctx.error_position(),
        stats.hits,
        stats.misses,
        stats.entries
    );

    if let Some(err) = ctx.take_abort() {
        return Err(err);
    }
    let Some(result) = result else {
        return Err(ParseError::UnmatchedInput {
            diagnostics: Diagnostics::capture(&ctx),
        });
    };
    if result.end != src.len() {
        let remainder = escape_double_quote(&truncate(
            &src[result.end..],
            REMAINDER_PREVIEW_CHARS,
            "...",
        ));
        // A failure recorded before the end of the match is stale
        let offset = ctx.error_position().max(result.end);
        return Err(ParseError::ExtraCharacters {
            position: result.end,
            remainder,
            diagnostics: Diagnostics::at(&ctx, offset),
        });
    }
    Ok(result.value)
}

/// Extension trait to run any parser over a complete input
pub trait ParseAllExt: Parser {
    fn parse_all(&self, src: &str) -> Result<Self::Output, ParseError> {
        parse_all_with(self, src, ParseOptions::default())
    }

    fn parse_all_with(&self, src: &str, options: ParseOptions) -> Result<Self::Output, ParseError> {
        parse_all_with(self, src, options)
    }

    /// Parse or panic with the rendered error
    #[track_caller]
    fn parse_all_or_panic(&self, src: &str) -> Self::Output {
        match self.parse_all(src) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Parse, discarding the error
    fn parse_all_or_none(&self, src: &str) -> Option<Self::Output> {
        self.parse_all(src).ok()
    }
}

impl<P> ParseAllExt for P where P: Parser + ?Sized {}
