use std::ops::ControlFlow;

/// A child position produced mid-unfold by an apomorphism: either an already
/// finished value (`Left`) or a seed that still needs to be unfolded (`Right`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }
}

/// The `either` capability: dispatch a tagged value to the continuation matching its tag.
///
/// Implemented for [`Either`] (`Left` is finished) and for [`ControlFlow`] (`Break` is finished),
/// so an r-coalgebra can use whichever reads better at the call site.
pub trait Choice {
    /// a finished value, used as-is
    type Done;
    /// a seed requiring further unfolding
    type Seed;

    fn either<Out>(
        self,
        done: impl FnOnce(Self::Done) -> Out,
        seed: impl FnOnce(Self::Seed) -> Out,
    ) -> Out;
}

impl<L, R> Choice for Either<L, R> {
    type Done = L;
    type Seed = R;

    #[inline(always)]
    fn either<Out>(self, done: impl FnOnce(L) -> Out, seed: impl FnOnce(R) -> Out) -> Out {
        match self {
            Either::Left(l) => done(l),
            Either::Right(r) => seed(r),
        }
    }
}

impl<B, C> Choice for ControlFlow<B, C> {
    type Done = B;
    type Seed = C;

    #[inline(always)]
    fn either<Out>(self, done: impl FnOnce(B) -> Out, seed: impl FnOnce(C) -> Out) -> Out {
        match self {
            ControlFlow::Break(b) => done(b),
            ControlFlow::Continue(c) => seed(c),
        }
    }
}
