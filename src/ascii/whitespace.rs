use crate::capture::CaptureExt;
use crate::literal::char_where;
use crate::many::ManyExt;
use crate::parser::Parser;

/// Parser that matches a single ASCII whitespace character (space, tab, newline, carriage return)
pub fn whitespace() -> impl Parser<Output = char> + Send + Sync {
    char_where("whitespace", |c: char| matches!(c, ' ' | '\t' | '\n' | '\r'))
}

/// Parser that skips any amount of ASCII whitespace, including none
pub fn whitespaces() -> impl Parser<Output = ()> + Send + Sync {
    whitespace().zero_or_more().ignore()
}
