use crate::context::ParseContext;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// A byte offset resolved to a 1-based line and column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Byte offset in the source
    pub offset: usize,
    pub line: usize,
    /// Counted in characters from the start of the line
    pub column: usize,
}

impl Location {
    /// Resolve `offset` against `src`
    ///
    /// Offsets past the end are clamped to the source length, offsets inside a
    /// multi-byte character are moved back to its first byte. Line breaks are
    /// `\n`, `\r\n` and a lone `\r`, the same set [`ParseResult::text`]
    /// normalizes.
    ///
    /// [`ParseResult::text`]: crate::ParseResult::text
    pub fn locate(src: &str, offset: usize) -> Self {
        let mut offset = offset.min(src.len());
        while !src.is_char_boundary(offset) {
            offset -= 1;
        }

        let mut line = 1;
        let mut line_start = 0;
        for (_, next) in line_breaks(src).take_while(|&(_, next)| next <= offset) {
            line += 1;
            line_start = next;
        }
        let column = src[line_start..offset].chars().count() + 1;

        Location {
            offset,
            line,
            column,
        }
    }
}

/// Line breaks as `(break_start, next_line_start)` pairs; `\r\n` counts once
fn line_breaks(src: &str) -> impl Iterator<Item = (usize, usize)> + '_ {
    let bytes = src.as_bytes();
    bytes
        .iter()
        .enumerate()
        .filter_map(move |(index, &byte)| match byte {
            b'\r' if bytes.get(index + 1) == Some(&b'\n') => Some((index, index + 2)),
            b'\r' => Some((index, index + 1)),
            b'\n' if index > 0 && bytes[index - 1] == b'\r' => None,
            b'\n' => Some((index, index + 1)),
            _ => None,
        })
}

/// Split `src` into lines on the breaks [`line_breaks`] finds
fn split_lines(src: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut line_start = 0;
    for (line_end, next) in line_breaks(src) {
        lines.push(&src[line_start..line_end]);
        line_start = next;
    }
    lines.push(&src[line_start..]);
    lines
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Render up to 2 lines around `location`, marking the offending line and column
fn context_lines(src: &str, location: Location) -> Vec<String> {
    let first = location.line.saturating_sub(2).max(1);
    let last = location.line + 2;
    let mut lines = Vec::new();

    for (index, content) in split_lines(src).into_iter().enumerate() {
        let number = index + 1;
        if number < first {
            continue;
        }
        if number > last {
            break;
        }

        let prefix = if number == location.line {
            format!("  > {} | ", number)
        } else {
            format!("    {} | ", number)
        };
        lines.push(format!("{}{}", prefix, content));

        if number == location.line {
            let pointer_offset = prefix.len() + location.column - 1;
            lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
        }
    }

    lines
}

/// Snapshot of where a parse went wrong and what would have been accepted there
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostics {
    pub location: Location,
    /// Named parsers that failed at the deepest failure offset
    pub expected: Vec<String>,
    /// Source excerpt around the failure with a pointer line
    pub context: Vec<String>,
}

impl Diagnostics {
    /// Capture the deepest failure recorded by `ctx`
    pub fn capture(ctx: &ParseContext<'_, '_>) -> Self {
        Self::at(ctx, ctx.error_position())
    }

    /// Diagnostics pointing at `offset`
    ///
    /// The context's expectations are only listed when `offset` is the deepest
    /// failure offset they were recorded at.
    pub fn at(ctx: &ParseContext<'_, '_>, offset: usize) -> Self {
        let location = ctx.location(offset);
        let expected = if offset == ctx.error_position() {
            ctx.suggested_parsers().to_vec()
        } else {
            Vec::new()
        };
        Diagnostics {
            location,
            expected,
            context: context_lines(ctx.src(), location),
        }
    }

    pub fn position(&self) -> usize {
        self.location.offset
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Syntax error at {} (offset {})",
            self.location, self.location.offset
        )?;
        if !self.expected.is_empty() {
            write!(f, "\nExpected one of: {}", self.expected.join(", "))?;
        }
        for line in &self.context {
            write!(f, "\n{}", line)?;
        }
        Ok(())
    }
}

/// Why a top-level parse produced no value
#[derive(Debug, Error)]
pub enum ParseError {
    /// Nothing matched at the start of the input
    #[error("Failed to parse.\n{diagnostics}")]
    UnmatchedInput { diagnostics: Diagnostics },

    /// A prefix matched but input remained after `position`
    #[error("Extra characters found after position {position}: \"{remainder}\"\n{diagnostics}")]
    ExtraCharacters {
        position: usize,
        /// First characters of the unconsumed input, truncated and escaped
        remainder: String,
        diagnostics: Diagnostics,
    },

    /// A user transform rejected a matched value
    #[error("Transform failed at position {position}: {source}")]
    Transform {
        position: usize,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },

    #[error("Recursion limit of {limit} exceeded at position {position}")]
    RecursionLimit { limit: usize, position: usize },
}

impl ParseError {
    /// Offset the error is reported at
    ///
    /// Unmatched input always reports offset 0, the position the top-level
    /// parser was tried at; the deepest failure is in [`diagnostics`](Self::diagnostics).
    pub fn position(&self) -> usize {
        match self {
            ParseError::UnmatchedInput { .. } => 0,
            ParseError::ExtraCharacters { position, .. } => *position,
            ParseError::Transform { position, .. } => *position,
            ParseError::RecursionLimit { position, .. } => *position,
        }
    }

    pub fn diagnostics(&self) -> Option<&Diagnostics> {
        match self {
            ParseError::UnmatchedInput { diagnostics } => Some(diagnostics),
            ParseError::ExtraCharacters { diagnostics, .. } => Some(diagnostics),
            ParseError::Transform { .. } | ParseError::RecursionLimit { .. } => None,
        }
    }

    pub fn is_unmatched_input(&self) -> bool {
        matches!(self, ParseError::UnmatchedInput { .. })
    }

    pub fn is_extra_characters(&self) -> bool {
        matches!(self, ParseError::ExtraCharacters { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_empty_source() {
        let location = Location::locate("", 0);
        assert_eq!(location, Location { offset: 0, line: 1, column: 1 });
    }

    #[test]
    fn test_locate_past_end_is_clamped() {
        let location = Location::locate("line1\nline2", 42);
        assert_eq!(location.offset, 11);
        assert_eq!(location.line, 2);
        assert_eq!(location.column, 6);
    }

    #[test]
    fn test_locate_after_trailing_newline() {
        let location = Location::locate("hello\n", 6);
        assert_eq!(location.line, 2);
        assert_eq!(location.column, 1);
    }

    #[test]
    fn test_locate_after_lone_carriage_return() {
        let location = Location::locate("a\rb", 2);
        assert_eq!((location.line, location.column), (2, 1));
    }

    #[test]
    fn test_locate_crlf_is_one_line_break() {
        let src = "a\r\nb\rc\nd";
        assert_eq!(Location::locate(src, 3).line, 2);
        assert_eq!(Location::locate(src, 5).line, 3);
        let location = Location::locate(src, 7);
        assert_eq!((location.line, location.column), (4, 1));
    }

    #[test]
    fn test_locate_agrees_with_normalized_text() {
        let src = "x\r\ry\r\nz";
        let normalized = crate::text::normalize_newlines(src);
        let location = Location::locate(src, src.find('z').unwrap());
        let expected = Location::locate(&normalized, normalized.find('z').unwrap());
        assert_eq!((location.line, location.column), (expected.line, expected.column));
    }

    #[test]
    fn test_locate_counts_characters_not_bytes() {
        // 'é' is two bytes
        let location = Location::locate("éa!", 3);
        assert_eq!(location.column, 3);
    }

    #[test]
    fn test_locate_inside_multibyte_character() {
        let location = Location::locate("é", 1);
        assert_eq!(location.offset, 0);
    }

    #[test]
    fn test_context_lines_window() {
        let src = "one\ntwo\nthree\nfour\nfive\nsix\nseven";
        let location = Location::locate(src, src.find("four").unwrap() + 1);
        let lines = context_lines(src, location);

        assert_eq!(lines.first().unwrap(), "    2 | two");
        assert!(lines.contains(&"  > 4 | four".to_string()));
        assert!(lines.contains(&"         ^--- here".to_string()));
        assert_eq!(lines.last().unwrap(), "    6 | six");
        assert!(!lines.iter().any(|line| line.contains("seven")));
    }

    #[test]
    fn test_context_lines_strip_carriage_returns() {
        let src = "ab\r\ncd";
        let lines = context_lines(src, Location::locate(src, 0));
        assert_eq!(lines[0], "  > 1 | ab");
    }

    #[test]
    fn test_context_lines_split_on_lone_carriage_returns() {
        let src = "one\rtwo\rthree";
        let lines = context_lines(src, Location::locate(src, 5));
        assert_eq!(lines[0], "    1 | one");
        assert_eq!(lines[1], "  > 2 | two");
        assert_eq!(lines[2], "         ^--- here");
        assert_eq!(lines[3], "    3 | three");
    }

    #[test]
    fn test_context_lines_empty_source() {
        let lines = context_lines("", Location::locate("", 0));
        assert_eq!(lines, vec!["  > 1 | ".to_string(), "        ^--- here".to_string()]);
    }

    #[test]
    fn test_diagnostics_display() {
        let diagnostics = Diagnostics {
            location: Location::locate("1 + x", 4),
            expected: vec!["number".to_string(), "'('".to_string()],
            context: Vec::new(),
        };

        assert_eq!(
            diagnostics.to_string(),
            "Syntax error at line 1, column 5 (offset 4)\nExpected one of: number, '('"
        );
    }

    #[test]
    fn test_error_positions() {
        let diagnostics = Diagnostics {
            location: Location::locate("abc", 2),
            expected: Vec::new(),
            context: Vec::new(),
        };

        let unmatched = ParseError::UnmatchedInput {
            diagnostics: diagnostics.clone(),
        };
        assert_eq!(unmatched.position(), 0);
        assert!(unmatched.is_unmatched_input());
        assert_eq!(unmatched.diagnostics().unwrap().position(), 2);

        let extra = ParseError::ExtraCharacters {
            position: 1,
            remainder: "bc".to_string(),
            diagnostics,
        };
        assert_eq!(extra.position(), 1);
        assert!(extra.to_string().starts_with("Extra characters found after position 1: \"bc\""));

        let limit = ParseError::RecursionLimit { limit: 8, position: 3 };
        assert_eq!(limit.position(), 3);
        assert!(limit.diagnostics().is_none());
    }
}
