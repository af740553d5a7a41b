pub mod eval;
pub mod naive;

use std::fmt;

use recursion_schemes::{MappableFrame, PartiallyApplied};

/// Simple expression language over integers, with a variadic `max`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprFrame<A> {
    Add(A, A),
    Sub(A, A),
    Mul(A, A),
    Max(Vec<A>),
    LiteralInt(i64),
}

impl MappableFrame for ExprFrame<PartiallyApplied> {
    type Frame<X> = ExprFrame<X>;

    #[inline(always)]
    fn map_frame<A, B>(input: Self::Frame<A>, mut f: impl FnMut(A) -> B) -> Self::Frame<B> {
        match input {
            ExprFrame::Add(a, b) => ExprFrame::Add(f(a), f(b)),
            ExprFrame::Sub(a, b) => ExprFrame::Sub(f(a), f(b)),
            ExprFrame::Mul(a, b) => ExprFrame::Mul(f(a), f(b)),
            ExprFrame::Max(xs) => ExprFrame::Max(xs.into_iter().map(f).collect()),
            ExprFrame::LiteralInt(x) => ExprFrame::LiteralInt(x),
        }
    }
}

// fully parenthesized: one layer of `print`, with children already rendered
impl<A: fmt::Display> fmt::Display for ExprFrame<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprFrame::Add(a, b) => write!(f, "({} + {})", a, b),
            ExprFrame::Sub(a, b) => write!(f, "({} - {})", a, b),
            ExprFrame::Mul(a, b) => write!(f, "({} * {})", a, b),
            ExprFrame::Max(xs) => {
                write!(f, "max(")?;
                for (i, x) in xs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", x)?;
                }
                write!(f, ")")
            }
            ExprFrame::LiteralInt(x) => write!(f, "{}", x),
        }
    }
}
