use crate::context::ParseContext;
use crate::text::normalize_newlines;
use std::fmt;
use std::sync::Arc;

/// Core parser trait for parser combinators
///
/// A parser is an immutable description of what to match. Everything that
/// changes during a parse (source text, memo table, failure diagnostics) lives
/// in the [`ParseContext`], so one parser value can be shared by any number of
/// independent parses, including parses running on different threads.
pub trait Parser: 'static {
    type Output: Clone + 'static;

    /// Attempt to match at byte offset `start`
    ///
    /// Returns `None` when the parser does not apply at `start`. A failed
    /// attempt never consumes input. Combinators reach their children through
    /// [`ParseContext::parse`] rather than calling this method directly, so that
    /// memoization and failure tracking observe every attempt.
    /// Children are borrowed from `self` for `'p`; a parser built on the fly
    /// inside this method cannot be handed to the context.
    fn parse_or_none<'p>(
        &'p self,
        ctx: &mut ParseContext<'_, 'p>,
        start: usize,
    ) -> Option<ParseResult<Self::Output>>;

    /// Diagnostic label surfaced in "Expected one of: ..." messages
    fn name(&self) -> Option<&str> {
        None
    }

    /// Render the parser definition in PEG-like notation
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(std::any::type_name::<Self>())
    }
}

/// The outcome of a successful match: a value and the byte span it covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult<T> {
    pub value: T,
    /// Start position (inclusive)
    pub start: usize,
    /// End position (exclusive)
    pub end: usize,
}

impl<T> ParseResult<T> {
    pub fn new(value: T, start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "result span {start}..{end} is inverted");
        ParseResult { value, start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Zero-width results come from lookaheads, optionals and other epsilon rules
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn map_value<U>(self, f: impl FnOnce(T) -> U) -> ParseResult<U> {
        ParseResult::new(f(self.value), self.start, self.end)
    }

    /// The matched slice of the source, verbatim
    pub fn raw_text<'src>(&self, ctx: &ParseContext<'src, '_>) -> &'src str {
        &ctx.src()[self.start..self.end]
    }

    /// The matched slice of the source with line endings normalized to `\n`
    pub fn text(&self, ctx: &ParseContext<'_, '_>) -> String {
        normalize_newlines(self.raw_text(ctx))
    }
}

/// A type-erased, shareable parser
///
/// Boxing is required wherever a grammar refers to itself, since a recursive
/// parser type would otherwise have infinite size.
pub type BoxedParser<T> = Arc<dyn Parser<Output = T> + Send + Sync>;

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt: Parser + Sized + Send + Sync {
    fn boxed(self) -> BoxedParser<Self::Output> {
        Arc::new(self)
    }
}

impl<P> BoxedExt for P where P: Parser + Send + Sync {}

/// `Display` adapter over [`Parser::describe`]
pub struct Describe<'a, P: ?Sized>(pub &'a P);

impl<P: Parser + ?Sized> fmt::Display for Describe<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.describe(f)
    }
}

/// The diagnostic name if one was attached, otherwise the rendered definition
pub fn name_or_description<P: Parser + ?Sized>(parser: &P) -> String {
    match parser.name() {
        Some(name) => name.to_string(),
        None => Describe(parser).to_string(),
    }
}

// Smart pointers delegate straight to the pointee. Their own slot in the
// parent parser is what the context memoizes on.

impl<P: Parser + ?Sized> Parser for Box<P> {
    type Output = P::Output;

    fn parse_or_none<'p>(
        &'p self,
        ctx: &mut ParseContext<'_, 'p>,
        start: usize,
    ) -> Option<ParseResult<Self::Output>> {
        (**self).parse_or_none(ctx, start)
    }

    fn name(&self) -> Option<&str> {
        (**self).name()
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).describe(f)
    }
}

impl<P: Parser + ?Sized> Parser for Arc<P> {
    type Output = P::Output;

    fn parse_or_none<'p>(
        &'p self,
        ctx: &mut ParseContext<'_, 'p>,
        start: usize,
    ) -> Option<ParseResult<Self::Output>> {
        (**self).parse_or_none(ctx, start)
    }

    fn name(&self) -> Option<&str> {
        (**self).name()
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).describe(f)
    }
}

impl<P: Parser + ?Sized> Parser for &'static P {
    type Output = P::Output;

    fn parse_or_none<'p>(
        &'p self,
        ctx: &mut ParseContext<'_, 'p>,
        start: usize,
    ) -> Option<ParseResult<Self::Output>> {
        (**self).parse_or_none(ctx, start)
    }

    fn name(&self) -> Option<&str> {
        (**self).name()
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).describe(f)
    }
}
