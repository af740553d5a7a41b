use crate::arena::{cata, try_cata};
use crate::either::Choice;
use crate::frame::MappableFrame;
use crate::schemes::{ana_recursive, apo_recursive, cata_recursive, para_recursive};

/// The `unfix` capability: a recursive type that can be taken apart one layer at a time.
///
/// For example:
///
/// ```rust
/// use recursion_schemes::{Collapsible, CollapsibleExt, MappableFrame, PartiallyApplied};
///
/// enum IntTreeFrame<A> {
///     Leaf { value: usize },
///     Node { left: A, right: A },
/// }
///
/// impl MappableFrame for IntTreeFrame<PartiallyApplied> {
///     type Frame<X> = IntTreeFrame<X>;
///
///     fn map_frame<A, B>(input: Self::Frame<A>, mut f: impl FnMut(A) -> B) -> Self::Frame<B> {
///         match input {
///             IntTreeFrame::Leaf { value } => IntTreeFrame::Leaf { value },
///             IntTreeFrame::Node { left, right } => IntTreeFrame::Node {
///                 left: f(left),
///                 right: f(right),
///             },
///         }
///     }
/// }
///
/// enum IntTree {
///     Leaf { value: usize },
///     Node { left: Box<Self>, right: Box<Self> },
/// }
///
/// impl<'a> Collapsible for &'a IntTree {
///     type FrameToken = IntTreeFrame<PartiallyApplied>;
///
///     fn into_frame(self) -> <Self::FrameToken as MappableFrame>::Frame<Self> {
///         match self {
///             IntTree::Leaf { value } => IntTreeFrame::Leaf { value: *value },
///             IntTree::Node { left, right } => IntTreeFrame::Node {
///                 left: left.as_ref(),
///                 right: right.as_ref(),
///             },
///         }
///     }
/// }
///
/// let tree = IntTree::Node {
///     left: Box::new(IntTree::Leaf { value: 1 }),
///     right: Box::new(IntTree::Leaf { value: 2 }),
/// };
///
/// let sum = tree.collapse_frames(|frame| match frame {
///     IntTreeFrame::Leaf { value } => value,
///     IntTreeFrame::Node { left, right } => left + right,
/// });
///
/// assert_eq!(sum, 3);
/// ```
pub trait Collapsible
where
    Self: Sized,
{
    type FrameToken: MappableFrame;

    /// Given an instance of this type, generate a frame holding the data owned by it,
    /// with any recursive instances of `Self` owned by this node as the frame elements
    fn into_frame(self) -> <Self::FrameToken as MappableFrame>::Frame<Self>;
}

/// The `fix` capability: a recursive type that can be assembled one layer at a time.
pub trait Expandable
where
    Self: Sized,
{
    type FrameToken: MappableFrame;

    /// Given a frame whose recursive positions are already complete values of this type,
    /// close it into a single value
    fn from_frame(val: <Self::FrameToken as MappableFrame>::Frame<Self>) -> Self;
}

/// Method-call syntax for the folds in this crate, available on every [`Collapsible`] type.
pub trait CollapsibleExt: Collapsible {
    /// Stack safe catamorphism, see [`crate::cata`]
    fn collapse_frames<Out>(
        self,
        collapse_frame: impl FnMut(<Self::FrameToken as MappableFrame>::Frame<Out>) -> Out,
    ) -> Out;

    /// Stack safe catamorphism with a fallible algebra, see [`crate::try_cata`]
    fn try_collapse_frames<Out, E>(
        self,
        collapse_frame: impl FnMut(<Self::FrameToken as MappableFrame>::Frame<Out>) -> Result<Out, E>,
    ) -> Result<Out, E>;

    /// Recursive catamorphism, see [`crate::cata_recursive`]
    fn collapse_frames_recursive<Out>(
        self,
        collapse_frame: impl FnMut(<Self::FrameToken as MappableFrame>::Frame<Out>) -> Out,
    ) -> Out;

    /// Paramorphism, see [`crate::para_recursive`]
    fn collapse_frames_with_originals<Out>(
        self,
        collapse_frame: impl FnMut(<Self::FrameToken as MappableFrame>::Frame<(Self, Out)>) -> Out,
    ) -> Out
    where
        Self: Clone;
}

impl<X: Collapsible> CollapsibleExt for X {
    fn collapse_frames<Out>(
        self,
        collapse_frame: impl FnMut(<Self::FrameToken as MappableFrame>::Frame<Out>) -> Out,
    ) -> Out {
        cata(self, collapse_frame)
    }

    fn try_collapse_frames<Out, E>(
        self,
        collapse_frame: impl FnMut(<Self::FrameToken as MappableFrame>::Frame<Out>) -> Result<Out, E>,
    ) -> Result<Out, E> {
        try_cata(self, collapse_frame)
    }

    fn collapse_frames_recursive<Out>(
        self,
        collapse_frame: impl FnMut(<Self::FrameToken as MappableFrame>::Frame<Out>) -> Out,
    ) -> Out {
        cata_recursive(self, collapse_frame)
    }

    fn collapse_frames_with_originals<Out>(
        self,
        collapse_frame: impl FnMut(<Self::FrameToken as MappableFrame>::Frame<(Self, Out)>) -> Out,
    ) -> Out
    where
        Self: Clone,
    {
        para_recursive(self, collapse_frame)
    }
}

/// Associated-function syntax for the unfolds in this crate, available on every [`Expandable`] type.
pub trait ExpandableExt: Expandable {
    /// Anamorphism, see [`crate::ana_recursive`]
    fn expand_frames_recursive<In>(
        input: In,
        expand_frame: impl FnMut(In) -> <Self::FrameToken as MappableFrame>::Frame<In>,
    ) -> Self;

    /// Apomorphism, see [`crate::apo_recursive`]
    fn expand_frames_until<In, C>(
        input: In,
        expand_frame: impl FnMut(In) -> <Self::FrameToken as MappableFrame>::Frame<C>,
    ) -> Self
    where
        C: Choice<Done = Self, Seed = In>;
}

impl<X: Expandable> ExpandableExt for X {
    fn expand_frames_recursive<In>(
        input: In,
        expand_frame: impl FnMut(In) -> <Self::FrameToken as MappableFrame>::Frame<In>,
    ) -> Self {
        ana_recursive(input, expand_frame)
    }

    fn expand_frames_until<In, C>(
        input: In,
        expand_frame: impl FnMut(In) -> <Self::FrameToken as MappableFrame>::Frame<C>,
    ) -> Self
    where
        C: Choice<Done = Self, Seed = In>,
    {
        apo_recursive(input, expand_frame)
    }
}
