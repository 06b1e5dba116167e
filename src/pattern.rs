use crate::context::ParseContext;
use crate::parser::{ParseResult, Parser};
use regex::Regex;
use regex_automata::{Anchored, Input, PatternID, meta};
use std::fmt;
use std::sync::Arc;

/// Syntax flags for [`RegexParser::with_syntax`]
pub use regex_automata::util::syntax::Config as SyntaxConfig;

/// Why a pattern failed to compile
pub use regex_automata::meta::BuildError as PatternError;

/// One capture group of a [`RegexMatch`], with absolute source offsets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl Group {
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// The match object produced by [`RegexParser`]
///
/// Owns its text so it can outlive the parse and be cached. Group 0 is the
/// whole match; groups that did not participate are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegexMatch {
    groups: Vec<Option<Group>>,
    names: Arc<[Option<String>]>,
}

impl RegexMatch {
    /// The whole matched text
    pub fn as_str(&self) -> &str {
        self.groups[0].as_ref().map_or("", |group| group.as_str())
    }

    pub fn start(&self) -> usize {
        self.groups[0].as_ref().map_or(0, |group| group.start)
    }

    pub fn end(&self) -> usize {
        self.groups[0].as_ref().map_or(0, |group| group.end)
    }

    /// Capture group by index
    pub fn get(&self, index: usize) -> Option<&Group> {
        self.groups.get(index)?.as_ref()
    }

    /// Capture group by name
    pub fn name(&self, name: &str) -> Option<&Group> {
        let index = self
            .names
            .iter()
            .position(|candidate| candidate.as_deref() == Some(name))?;
        self.get(index)
    }

    /// Number of groups including the whole match
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

enum Engine {
    /// Anchored search over the whole source
    Meta(meta::Regex),
    /// A regex compiled by the caller, searched from the offset
    Compiled(Regex),
}

/// Parser that matches a regular expression anchored at the current offset
///
/// The match must begin exactly at the offset, but the pattern sees the whole
/// source: `\b` and `\B` look at the character before the offset, and `^`
/// only matches at the start of the source (or of a line under multi-line
/// mode). Lookaround is not available; combine with [`not`](crate::not::not)
/// or [`lookahead`](crate::lookahead::lookahead) instead.
pub struct RegexParser {
    source: String,
    engine: Engine,
    names: Arc<[Option<String>]>,
}

impl RegexParser {
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        Self::with_syntax(pattern, SyntaxConfig::new())
    }

    /// Compile `pattern` with the given syntax flags
    pub fn with_syntax(pattern: &str, syntax: SyntaxConfig) -> Result<Self, PatternError> {
        let compiled = meta::Regex::builder().syntax(syntax).build(pattern)?;
        let names = compiled
            .group_info()
            .pattern_names(PatternID::ZERO)
            .map(|name| name.map(str::to_string))
            .collect();
        Ok(RegexParser {
            source: pattern.to_string(),
            engine: Engine::Meta(compiled),
            names,
        })
    }

    /// Wrap a regex compiled by the caller, keeping every builder option
    ///
    /// A compiled [`Regex`] cannot be re-anchored, so at an offset where it
    /// does not match the search runs on through the rest of the source
    /// before giving up. Prefer [`with_syntax`](Self::with_syntax) for
    /// patterns tried at many offsets.
    pub fn from_compiled(compiled: Regex) -> Self {
        let names = compiled
            .capture_names()
            .map(|name| name.map(str::to_string))
            .collect();
        RegexParser {
            source: compiled.as_str().to_string(),
            engine: Engine::Compiled(compiled),
            names,
        }
    }

    /// The pattern as written by the caller
    pub fn pattern(&self) -> &str {
        &self.source
    }

    fn captures(&self, src: &str, start: usize) -> Option<Vec<Option<Group>>> {
        let group = |start: usize, end: usize| Group {
            text: src[start..end].to_string(),
            start,
            end,
        };
        match &self.engine {
            Engine::Meta(compiled) => {
                let input = Input::new(src).range(start..).anchored(Anchored::Yes);
                let mut captures = compiled.create_captures();
                compiled.search_captures(&input, &mut captures);
                if !captures.is_match() {
                    return None;
                }
                let groups = (0..captures.group_len())
                    .map(|index| captures.get_group(index).map(|span| group(span.start, span.end)))
                    .collect();
                Some(groups)
            }
            Engine::Compiled(compiled) => {
                let captures = compiled.captures_at(src, start)?;
                if captures.get(0)?.start() != start {
                    return None;
                }
                let groups = captures
                    .iter()
                    .map(|m| m.map(|m| group(m.start(), m.end())))
                    .collect();
                Some(groups)
            }
        }
    }
}

impl Parser for RegexParser {
    type Output = RegexMatch;

    fn parse_or_none<'p>(
        &'p self,
        ctx: &mut ParseContext<'_, 'p>,
        start: usize,
    ) -> Option<ParseResult<RegexMatch>> {
        let src = ctx.src();
        if !src.is_char_boundary(start) {
            return None;
        }
        let groups = self.captures(src, start)?;
        let end = groups.first()?.as_ref()?.end;

        Some(ParseResult::new(
            RegexMatch {
                groups,
                names: self.names.clone(),
            },
            start,
            end,
        ))
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.source)
    }
}

/// Match `pattern` at the current offset
///
/// # Panics
///
/// Panics if `pattern` is not a valid regular expression; use [`try_regex`]
/// for patterns that are not known up front.
pub fn regex(pattern: &str) -> RegexParser {
    RegexParser::new(pattern).unwrap_or_else(|err| panic!("invalid pattern /{pattern}/: {err}"))
}

pub fn try_regex(pattern: &str) -> Result<RegexParser, PatternError> {
    RegexParser::new(pattern)
}

/// Build a parser from an already compiled expression
///
/// See [`RegexParser::from_compiled`] for the cost of a failed match.
pub fn from_regex(compiled: &Regex) -> RegexParser {
    RegexParser::from_compiled(compiled.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Describe;
    use regex::RegexBuilder;

    #[test]
    fn test_regex_anchored_at_start() {
        let mut ctx = ParseContext::with_source("abc123");
        let parser = regex("[0-9]+");

        assert!(ctx.parse(&parser, 0).is_none());
        let result = ctx.parse(&parser, 3).unwrap();
        assert_eq!(result.value.as_str(), "123");
        assert_eq!((result.start, result.end), (3, 6));
        assert_eq!((result.value.start(), result.value.end()), (3, 6));
    }

    #[test]
    fn test_regex_does_not_search_ahead() {
        let mut ctx = ParseContext::with_source("xx42");
        let parser = regex("[0-9]+");
        assert!(ctx.parse(&parser, 0).is_none());
    }

    #[test]
    fn test_regex_groups() {
        let mut ctx = ParseContext::with_source("key=value;");
        let parser = regex(r"(?P<key>\w+)=(\w+)");

        let result = ctx.parse(&parser, 0).unwrap();
        let m = result.value;
        assert_eq!(m.len(), 3);
        assert_eq!(m.name("key").unwrap().as_str(), "key");
        assert_eq!(m.get(2).unwrap().as_str(), "value");
        assert_eq!(m.get(2).unwrap().start, 4);
        assert!(m.get(3).is_none());
        assert_eq!(result.end, 9);
    }

    #[test]
    fn test_regex_unmatched_group() {
        let mut ctx = ParseContext::with_source("a");
        let parser = regex("a(b)?");
        let result = ctx.parse(&parser, 0).unwrap();
        assert!(result.value.get(1).is_none());
    }

    #[test]
    fn test_regex_alternation_is_anchored_as_a_whole() {
        let mut ctx = ParseContext::with_source("xb");
        let parser = regex("a|b");
        assert!(ctx.parse(&parser, 0).is_none());
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(try_regex("(").is_err());
    }

    #[test]
    #[should_panic(expected = "invalid pattern")]
    fn test_regex_panics_on_invalid_pattern() {
        regex("[");
    }

    #[test]
    fn test_word_boundary_sees_the_previous_character() {
        let parser = regex(r"\bfoo");

        let mut ctx = ParseContext::with_source("afoo");
        assert!(ctx.parse(&parser, 1).is_none());

        let mut ctx = ParseContext::with_source("a foo");
        assert_eq!(ctx.parse(&parser, 2).unwrap().value.as_str(), "foo");
    }

    #[test]
    fn test_not_word_boundary_inside_a_word() {
        let mut ctx = ParseContext::with_source("afoo");
        let parser = regex(r"\Bfoo");
        assert_eq!(ctx.parse(&parser, 1).unwrap().end, 4);
    }

    #[test]
    fn test_caret_matches_only_at_start_of_source() {
        let mut ctx = ParseContext::with_source("ab\nb");
        let parser = regex("^b");
        assert!(ctx.parse(&parser, 1).is_none());
        assert!(ctx.parse(&parser, 3).is_none());

        let parser = regex("(?m)^b");
        assert!(ctx.parse(&parser, 1).is_none());
        assert!(ctx.parse(&parser, 3).is_some());
    }

    #[test]
    fn test_offset_inside_a_character_does_not_match() {
        let mut ctx = ParseContext::with_source("λx");
        let parser = regex("[^λ]*");
        assert!(ctx.parse(&parser, 1).is_none());
        assert_eq!(ctx.parse(&parser, 2).unwrap().value.as_str(), "x");
    }

    #[test]
    fn test_with_syntax_flags() {
        let parser =
            RegexParser::with_syntax("abc", SyntaxConfig::new().case_insensitive(true)).unwrap();
        let mut ctx = ParseContext::with_source("xABC");

        let result = ctx.parse(&parser, 1).unwrap();
        assert_eq!(result.value.as_str(), "ABC");
        assert_eq!((result.start, result.end), (1, 4));
    }

    #[test]
    fn test_from_compiled() {
        let compiled = Regex::new("[a-z]+").unwrap();
        let parser = from_regex(&compiled);
        assert_eq!(parser.pattern(), "[a-z]+");
        assert_eq!(Describe(&parser).to_string(), "/[a-z]+/");
    }

    #[test]
    fn test_from_compiled_keeps_builder_options() {
        let compiled = RegexBuilder::new("abc").case_insensitive(true).build().unwrap();
        let parser = from_regex(&compiled);

        let mut ctx = ParseContext::with_source("ABC");
        assert_eq!(ctx.parse(&parser, 0).unwrap().value.as_str(), "ABC");
    }

    #[test]
    fn test_from_compiled_is_anchored_with_context() {
        let parser = from_regex(&Regex::new(r"\b(?P<word>[a-z]+)").unwrap());
        let mut ctx = ParseContext::with_source("xx ab");

        assert!(ctx.parse(&parser, 0).is_some());
        assert!(ctx.parse(&parser, 1).is_none());
        assert!(ctx.parse(&parser, 2).is_none());
        let result = ctx.parse(&parser, 3).unwrap();
        assert_eq!(result.value.name("word").unwrap().start, 3);
    }
}
