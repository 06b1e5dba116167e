use crate::error::{Location, ParseError};
use crate::options::ParseOptions;
use crate::parser::{Describe, ParseResult, Parser};
use log::{trace, warn};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

/// Parser identity (address and concrete type) plus start offset
type CacheKey = (usize, TypeId, usize);

enum Memo {
    /// The parser is still running at this offset; seeing it again means left recursion
    InProgress,
    Failed,
    Matched(Box<dyn Any>),
}

/// Cache counters for one parse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    pub entries: usize,
}

/// Per-parse state: the source text, the packrat cache and failure diagnostics
///
/// A context lives for exactly one top-level parse. It is not meant to be
/// shared between threads; parsers are, contexts are not.
///
/// `'p` is how long every parser run through the context stays alive. The
/// cache remembers parsers by address, and tying them to `'p` keeps an address
/// from being freed and reused by another parser while the cache still holds it.
pub struct ParseContext<'src, 'p> {
    src: &'src str,
    options: ParseOptions,
    cache: HashMap<CacheKey, Memo>,
    error_position: usize,
    suggested_parsers: Vec<String>,
    depth: usize,
    aborted: Option<ParseError>,
    hits: usize,
    misses: usize,
    parsers: PhantomData<&'p ()>,
}

impl<'src, 'p> ParseContext<'src, 'p> {
    pub fn new(src: &'src str, options: ParseOptions) -> Self {
        ParseContext {
            src,
            options,
            cache: HashMap::new(),
            error_position: 0,
            suggested_parsers: Vec::new(),
            depth: 0,
            aborted: None,
            hits: 0,
            misses: 0,
            parsers: PhantomData,
        }
    }

    /// Context with default options (memoization on, no depth limit)
    pub fn with_source(src: &'src str) -> Self {
        Self::new(src, ParseOptions::default())
    }

    pub fn src(&self) -> &'src str {
        self.src
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    pub fn use_memoization(&self) -> bool {
        self.options.use_memoization
    }

    /// The deepest offset at which any attempted parser failed so far
    pub fn error_position(&self) -> usize {
        self.error_position
    }

    /// Names of the parsers that failed at [`error_position`](Self::error_position),
    /// de-duplicated, in the order they were first tried
    pub fn suggested_parsers(&self) -> &[String] {
        &self.suggested_parsers
    }

    pub fn cache_stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.cache.len(),
        }
    }

    /// Line and column of a byte offset in the source
    pub fn location(&self, offset: usize) -> Location {
        Location::locate(self.src, offset)
    }

    /// Run `parser` at `start`, going through the memo table when enabled
    ///
    /// The memo key is the parser's address together with its concrete type.
    /// `parser` is borrowed for `'p`, so it outlives every later lookup and no
    /// other parser can take over its address. Two live values of the same
    /// zero-sized type may share an address; they carry no state and match
    /// the same input.
    ///
    /// A parser built inside `parse_or_none` does not live long enough:
    ///
    /// ```compile_fail
    /// use pegcomb::prelude::*;
    ///
    /// fn run_literal(ctx: &mut ParseContext<'_, '_>, text: &'static str) -> bool {
    ///     let parser = string(text);
    ///     ctx.parse(&parser, 0).is_some()
    /// }
    /// ```
    pub fn parse<P>(&mut self, parser: &'p P, start: usize) -> Option<ParseResult<P::Output>>
    where
        P: Parser + ?Sized,
    {
        if self.aborted.is_some() {
            return None;
        }
        if let Some(limit) = self.options.max_depth {
            if self.depth >= limit {
                warn!("recursion limit of {limit} reached at offset {start}");
                self.aborted = Some(ParseError::RecursionLimit {
                    limit,
                    position: start,
                });
                return None;
            }
        }
        if !self.options.use_memoization {
            return self.invoke(parser, start);
        }

        let key = (
            (parser as *const P).cast::<()>() as usize,
            TypeId::of::<P>(),
            start,
        );
        match self.cache.get(&key) {
            Some(Memo::InProgress) => {
                warn!(
                    "left recursion in {} at offset {start}; treating as no match",
                    Describe(parser)
                );
                return None;
            }
            Some(Memo::Failed) => {
                self.hits += 1;
                return None;
            }
            Some(Memo::Matched(result)) => {
                self.hits += 1;
                return result.downcast_ref::<ParseResult<P::Output>>().cloned();
            }
            None => {}
        }

        self.misses += 1;
        self.cache.insert(key, Memo::InProgress);
        let result = self.invoke(parser, start);
        if self.aborted.is_some() {
            self.cache.remove(&key);
            return None;
        }
        let memo = match &result {
            Some(matched) => Memo::Matched(Box::new(matched.clone())),
            None => Memo::Failed,
        };
        self.cache.insert(key, memo);
        result
    }

    fn invoke<P>(&mut self, parser: &'p P, start: usize) -> Option<ParseResult<P::Output>>
    where
        P: Parser + ?Sized,
    {
        self.depth += 1;
        let result = parser.parse_or_none(self, start);
        self.depth -= 1;
        if result.is_none() && self.aborted.is_none() {
            self.record_failure(parser.name(), start);
        }
        result
    }

    fn record_failure(&mut self, name: Option<&str>, start: usize) {
        if start > self.error_position {
            trace!("deepest failure moved {} -> {start}", self.error_position);
            self.error_position = start;
            self.suggested_parsers.clear();
        }
        if start == self.error_position {
            if let Some(name) = name {
                if !self.suggested_parsers.iter().any(|known| known == name) {
                    self.suggested_parsers.push(name.to_string());
                }
            }
        }
    }

    /// Stop the whole parse with a transform error raised at `position`
    ///
    /// Every later [`parse`](Self::parse) call returns `None`, so no enclosing
    /// choice, optional or repetition recovers from it. The driver reports it
    /// as [`ParseError::Transform`]. Only the first abort is kept.
    pub fn abort(
        &mut self,
        position: usize,
        error: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) {
        if self.aborted.is_some() {
            return;
        }
        let source = error.into();
        warn!("parse aborted at offset {position}: {source}");
        self.aborted = Some(ParseError::Transform { position, source });
    }

    pub fn is_aborted(&self) -> bool {
        self.aborted.is_some()
    }

    pub(crate) fn take_abort(&mut self) -> Option<ParseError> {
        self.aborted.take()
    }
}

impl fmt::Debug for ParseContext<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseContext")
            .field("src_len", &self.src.len())
            .field("options", &self.options)
            .field("cache_entries", &self.cache.len())
            .field("error_position", &self.error_position)
            .field("suggested_parsers", &self.suggested_parsers)
            .field("aborted", &self.aborted.is_some())
            .finish()
    }
}
