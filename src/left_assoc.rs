use crate::context::ParseContext;
use crate::parser::{Describe, ParseResult, Parser};
use std::fmt;
use std::rc::Rc;

/// Parser for `term (operator term)*` that folds the operands from the left
///
/// `1-2-3` becomes `combine(combine(1, -, 2), -, 3)`. An operator that is not
/// followed by a term is left unconsumed.
pub struct LeftAssociative<T, O, F> {
    term: T,
    operator: O,
    combine: F,
}

impl<T, O, F> LeftAssociative<T, O, F> {
    pub fn new(term: T, operator: O, combine: F) -> Self {
        LeftAssociative {
            term,
            operator,
            combine,
        }
    }
}

impl<T, O, F, V> Parser for LeftAssociative<T, O, F>
where
    T: Parser<Output = V>,
    O: Parser,
    F: Fn(V, O::Output, V) -> V + 'static,
    V: Clone + 'static,
{
    type Output = V;

    fn parse_or_none<'p>(
        &'p self,
        ctx: &mut ParseContext<'_, 'p>,
        start: usize,
    ) -> Option<ParseResult<V>> {
        let first = ctx.parse(&self.term, start)?;
        let mut value = first.value;
        let mut offset = first.end;

        loop {
            let Some(operator) = ctx.parse(&self.operator, offset) else {
                break;
            };
            let Some(right) = ctx.parse(&self.term, operator.end) else {
                break;
            };
            if right.end <= offset {
                break;
            }
            value = (self.combine)(value, operator.value, right.value);
            offset = right.end;
        }

        if ctx.is_aborted() {
            return None;
        }
        Some(ParseResult::new(value, start, offset))
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({} ({} {})*)",
            Describe(&self.term),
            Describe(&self.operator),
            Describe(&self.term)
        )
    }
}

/// Build one precedence level of a left-associative infix grammar
///
/// Chain calls to layer precedence: the `term` of a looser level is the
/// result of the tighter one.
pub fn left_associative<T, O, F, V>(term: T, operator: O, combine: F) -> LeftAssociative<T, O, F>
where
    T: Parser<Output = V>,
    O: Parser,
    F: Fn(V, O::Output, V) -> V + 'static,
    V: Clone + 'static,
{
    LeftAssociative::new(term, operator, combine)
}

/// A pending operation that already holds its right-hand operand
pub type Fold<T> = Rc<dyn Fn(T) -> T>;

/// Wrap a closure as a [`Fold`]
pub fn fold<T, F>(f: F) -> Fold<T>
where
    F: Fn(T) -> T + 'static,
{
    Rc::new(f)
}

/// Parser for `term operation*`, applying each parsed operation to the accumulated value
///
/// Each operation parser matches an operator together with its right operand
/// and yields the function that applies it.
pub struct FoldLeft<T, O> {
    term: T,
    operations: O,
}

impl<T, O> FoldLeft<T, O> {
    pub fn new(term: T, operations: O) -> Self {
        FoldLeft { term, operations }
    }
}

impl<T, O, V> Parser for FoldLeft<T, O>
where
    T: Parser<Output = V>,
    O: Parser<Output = Fold<V>>,
    V: Clone + 'static,
{
    type Output = V;

    fn parse_or_none<'p>(
        &'p self,
        ctx: &mut ParseContext<'_, 'p>,
        start: usize,
    ) -> Option<ParseResult<V>> {
        let first = ctx.parse(&self.term, start)?;
        let mut value = first.value;
        let mut offset = first.end;

        while let Some(operation) = ctx.parse(&self.operations, offset) {
            if operation.end <= offset {
                break;
            }
            value = (operation.value)(value);
            offset = operation.end;
        }

        if ctx.is_aborted() {
            return None;
        }
        Some(ParseResult::new(value, start, offset))
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {}*)", Describe(&self.term), Describe(&self.operations))
    }
}

pub fn fold_left<T, O, V>(term: T, operations: O) -> FoldLeft<T, O>
where
    T: Parser<Output = V>,
    O: Parser<Output = Fold<V>>,
    V: Clone + 'static,
{
    FoldLeft::new(term, operations)
}
