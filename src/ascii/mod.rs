//! ASCII building blocks: digits, numbers and whitespace

pub mod number;
pub mod whitespace;

pub use number::{Number, NumberError, digit, f64, i64, number, u64};
pub use whitespace::{whitespace, whitespaces};
