//! # pegcomb - Packrat PEG Parser Combinators
//!
//! Build a parser by composing small typed parser values, then run it over a
//! complete input to get either a typed value or a positioned error.
//!
//! The library emphasizes:
//!
//! - **PEG semantics**: ordered choice commits to the first alternative that matches
//! - **Linear time**: every `(parser, offset)` attempt is memoized per parse
//! - **Typed sequences**: `.then()` concatenates tuples without erasing element types
//! - **Useful failures**: the deepest failure offset and the named parsers expected there
//!
//! ```
//! use pegcomb::prelude::*;
//!
//! let number = regex("[0-9]+").map(|m| m.as_str().parse::<i64>().unwrap_or(0));
//! let product = left_associative(number, char_('*'), |a, _, b| a * b);
//! let sum = left_associative(product, char_('+'), |a, _, b| a + b);
//!
//! assert_eq!(sum.parse_all("2+3*4").unwrap(), 14);
//! assert!(sum.parse_all("2+").unwrap_err().is_extra_characters());
//! ```

pub mod ascii;
pub mod between;
pub mod boundary;
pub mod capture;
pub mod choice;
pub mod context;
pub mod driver;
pub mod error;
pub mod filter;
pub mod lazy;
pub mod left_assoc;
pub mod literal;
pub mod lookahead;
pub mod many;
pub mod map;
pub mod map_ex;
pub mod named;
pub mod not;
pub mod optional;
pub mod options;
pub mod parser;
pub mod pattern;
pub mod position;
pub mod separated_list;
pub mod sequence;
pub mod some;
pub mod text;
pub mod try_map;
pub mod tuple;

pub use between::between;
pub use boundary::{end_of_input, start_of_input};
pub use capture::{capture, ignore};
pub use choice::choice;
pub use context::{CacheStats, ParseContext};
pub use driver::{parse_all, parse_all_with};
pub use error::{Diagnostics, Location, ParseError};
pub use lazy::lazy;
pub use left_assoc::{Fold, fold, fold_left, left_associative};
pub use literal::{any_char, char_, char_where, literal, string};
pub use lookahead::lookahead;
pub use many::many;
pub use map::map;
pub use map_ex::map_ex;
pub use named::named;
pub use not::{negative_lookahead, not};
pub use optional::optional;
pub use options::ParseOptions;
pub use parser::{BoxedParser, ParseResult, Parser};
pub use pattern::{RegexMatch, RegexParser, from_regex, regex, try_regex};
pub use position::{Located, position};
pub use separated_list::separated_list;
pub use sequence::sequence;
pub use some::some;
pub use try_map::try_map;
pub use tuple::{Concat, Tuple};

/// Everything needed to write a grammar, including the method-style extension traits
pub mod prelude {
    pub use crate::ascii::{whitespace, whitespaces};
    pub use crate::capture::CaptureExt;
    pub use crate::choice::OrExt;
    pub use crate::driver::ParseAllExt;
    pub use crate::filter::FilterExt;
    pub use crate::lookahead::LookaheadExt;
    pub use crate::many::ManyExt;
    pub use crate::map::MapExt;
    pub use crate::map_ex::MapExExt;
    pub use crate::named::NamedExt;
    pub use crate::not::NotExt;
    pub use crate::optional::OptionalExt;
    pub use crate::parser::BoxedExt;
    pub use crate::position::PositionExt;
    pub use crate::sequence::SequenceExt;
    pub use crate::some::SomeExt;
    pub use crate::try_map::TryMapExt;
    pub use crate::{
        BoxedParser, Fold, ParseContext, ParseError, ParseOptions, ParseResult, Parser, any_char,
        between, capture, char_, char_where, choice, end_of_input, fold, fold_left, ignore, lazy,
        left_associative, literal, lookahead, many, map, map_ex, named, negative_lookahead, not,
        optional, regex, separated_list, sequence, some, start_of_input, string,
    };
}
