use crate::choice::OrExt;
use crate::map::MapExt;
use crate::parser::Parser;
use thiserror::Error;

pub mod digit;
pub mod float;
pub mod signed;
pub mod unsigned;

pub use digit::digit;
pub use float::{FloatParser, f64};
pub use signed::{IntParser, i64};
pub use unsigned::{UIntParser, u64};

#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    I64(i64),
    F64(f64),
}

/// Raised through the parse context when matched digits do not fit the target type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    #[error("number too large: {0}")]
    TooLarge(String),
    #[error("floating point overflow: {0}")]
    FloatOverflow(String),
}

/// End offset of the run of ASCII digits starting at `start`
pub(crate) fn scan_digits(src: &str, start: usize) -> usize {
    let run = src
        .get(start..)
        .map_or(0, |rest| rest.bytes().take_while(u8::is_ascii_digit).count());
    start + run
}

/// End offset after an optional `+` or `-` at `start`
pub(crate) fn scan_sign(src: &str, start: usize) -> usize {
    match src.as_bytes().get(start) {
        Some(b'-' | b'+') => start + 1,
        _ => start,
    }
}

/// Parser that matches either an integer or a float and returns a Number enum
pub fn number() -> impl Parser<Output = Number> + Send + Sync {
    f64().map(Number::F64).or(i64().map(Number::I64))
}
