/// A single 'frame' of some recursive structure, with the recursive positions
/// abstracted out as the type parameter of `Frame`. For example, `enum ExprFrame<A> { Literal(i64), Add(A, A) }`
/// is one layer of an expression tree.
///
/// This is the `map` capability: every combinator in this crate drives its
/// traversal through `map_frame`, which decides the order in which children
/// are visited while the combinator decides what happens to each child.
///
/// # Implementing this trait
///
/// Rust does not allow implementing a trait for a partially applied type (`Option`
/// as opposed to `Option<usize>`), so this trait is implemented on a marker token,
/// conventionally the frame type applied to the uninhabited [`PartiallyApplied`] enum:
///
/// ```rust
/// # use recursion_schemes::{MappableFrame, PartiallyApplied};
/// #[derive(Debug, PartialEq, Eq)]
/// enum PairFrame<A> {
///     Both(A, A),
///     Neither,
/// }
///
/// impl MappableFrame for PairFrame<PartiallyApplied> {
///     type Frame<X> = PairFrame<X>;
///
///     fn map_frame<A, B>(input: Self::Frame<A>, mut f: impl FnMut(A) -> B) -> Self::Frame<B> {
///         match input {
///             PairFrame::Both(a, b) => PairFrame::Both(f(a), f(b)),
///             PairFrame::Neither => PairFrame::Neither,
///         }
///     }
/// }
///
/// let mapped = PairFrame::<PartiallyApplied>::map_frame(PairFrame::Both(1, 2), |n| n * 10);
/// assert_eq!(mapped, PairFrame::Both(10, 20));
/// ```
///
/// # Laws
///
/// `map_frame(frame, |x| x)` must equal `frame`, and mapping `f` then `g` must equal
/// mapping `|x| g(f(x))`. Additionally, for frames of identical shape `map_frame` must
/// visit child positions in the same order on every call: the stack safe fold maps each
/// layer twice and relies on both passes agreeing.
pub trait MappableFrame {
    /// the frame type that is mapped over by `map_frame`
    type Frame<X>;

    /// Apply some function `f` to each recursive position inside a frame
    fn map_frame<A, B>(input: Self::Frame<A>, f: impl FnMut(A) -> B) -> Self::Frame<B>;
}

/// An uninhabited type used to define [`MappableFrame`] instances for partially-applied types.
///
/// For example: the `MappableFrame` instance for `MyFrame<A>` cannot be written over the
/// partially-applied type `MyFrame`, so instead we write it over `MyFrame<PartiallyApplied>`
#[derive(Clone, Copy, Debug)]
pub enum PartiallyApplied {}

// a layer with zero or one recursive positions, eg peano naturals
impl MappableFrame for Option<PartiallyApplied> {
    type Frame<X> = Option<X>;

    #[inline(always)]
    fn map_frame<A, B>(input: Self::Frame<A>, f: impl FnMut(A) -> B) -> Self::Frame<B> {
        input.map(f)
    }
}

// a layer carrying some fixed value alongside exactly one recursive position
impl<Fst> MappableFrame for (Fst, PartiallyApplied) {
    type Frame<X> = (Fst, X);

    #[inline(always)]
    fn map_frame<A, B>(input: Self::Frame<A>, mut f: impl FnMut(A) -> B) -> Self::Frame<B> {
        (input.0, f(input.1))
    }
}
