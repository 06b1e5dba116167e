use crate::context::ParseContext;
use crate::parser::{ParseResult, Parser};
use once_cell::sync::OnceCell;
use std::fmt;

/// A lazy parser that defers the construction of the actual parser until parse time.
/// This is useful for breaking mutual recursion between parsers.
///
/// The factory runs at most once; the parser it returns is kept and reused
/// for every later parse, so its address stays stable for memoization.
///
/// A grammar that refers to itself has to name a type for the recursive rule,
/// which is what [`BoxedParser`](crate::parser::BoxedParser) is for:
///
/// ```
/// use once_cell::sync::Lazy as LazyStatic;
/// use pegcomb::capture::CaptureExt;
/// use pegcomb::choice::OrExt;
/// use pegcomb::lazy::lazy;
/// use pegcomb::literal::char_;
/// use pegcomb::map::MapExt;
/// use pegcomb::parser::{BoxedExt, BoxedParser};
/// use pegcomb::sequence::SequenceExt;
/// use pegcomb::driver::ParseAllExt;
///
/// // nested = "(" nested ")" / "x", counting the parentheses
/// static NESTED: LazyStatic<BoxedParser<usize>> = LazyStatic::new(|| {
///     char_('(')
///         .ignore()
///         .then_capture(lazy(|| &*NESTED))
///         .then_ignore(char_(')'))
///         .map(|(depth,)| depth + 1)
///         .or(char_('x').map(|_| 0usize))
///         .boxed()
/// });
///
/// assert_eq!(NESTED.parse_all("((x))").unwrap(), 2);
/// ```
pub struct Lazy<F, P> {
    factory: F,
    cell: OnceCell<P>,
}

impl<F, P> Lazy<F, P>
where
    F: Fn() -> P,
{
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            cell: OnceCell::new(),
        }
    }

    fn resolve(&self) -> &P {
        self.cell.get_or_init(&self.factory)
    }
}

impl<F, P> Parser for Lazy<F, P>
where
    F: Fn() -> P + 'static,
    P: Parser,
{
    type Output = P::Output;

    fn parse_or_none<'p>(
        &'p self,
        ctx: &mut ParseContext<'_, 'p>,
        start: usize,
    ) -> Option<ParseResult<Self::Output>> {
        ctx.parse(self.resolve(), start)
    }

    fn name(&self) -> Option<&str> {
        self.cell.get().and_then(|parser| parser.name())
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Resolving here could recurse forever on a self-referential grammar
        f.write_str("<lazy>")
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<F, P>(factory: F) -> Lazy<F, P>
where
    F: Fn() -> P + 'static,
    P: Parser,
{
    Lazy::new(factory)
}
