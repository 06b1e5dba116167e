use crate::literal::char_where;
use crate::parser::Parser;

/// Parser that matches a single ASCII digit (0-9)
pub fn digit() -> impl Parser<Output = char> + Send + Sync {
    char_where("digit", |c: char| c.is_ascii_digit())
}
