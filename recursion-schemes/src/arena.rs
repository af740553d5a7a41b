use std::collections::VecDeque;
use std::convert::Infallible;
use std::fmt;

use crate::frame::MappableFrame;
use crate::recursive::Collapsible;

type Layer<T, X> = <<T as Collapsible>::FrameToken as MappableFrame>::Frame<X>;

/// Handle standing in for a child layer during the stack safe fold: the position
/// of that child's layer in the arena, in breadth-first discovery order.
///
/// The top layer is always `#0`, and every layer's children have larger indices than it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArenaIndex(usize);

impl ArenaIndex {
    fn head() -> Self {
        ArenaIndex(0)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ArenaIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Receives a callback for each step of [`cata_observed`]. Every method defaults to a no-op,
/// and `()` is the observer used by [`cata`] and [`try_cata`].
///
/// Observers only see the traversal, they can't alter it.
pub trait Observer<F: MappableFrame, Out> {
    /// a layer was exposed and its children (if any) replaced by the arena indices of their layers
    fn discovered(
        &mut self,
        _idx: ArenaIndex,
        _parent: Option<ArenaIndex>,
        _layer: &F::Frame<ArenaIndex>,
    ) {
    }

    /// second pass over a layer with children: every child index replaced by its collapsed value
    fn resolved(&mut self, _idx: ArenaIndex, _layer: &F::Frame<Out>) {}

    /// the algebra was applied to the layer at `idx`
    fn collapsed(&mut self, _idx: ArenaIndex, _out: &Out) {}
}

impl<F: MappableFrame, Out> Observer<F, Out> for () {}

enum Slot<Linked, Out> {
    // has children, waiting for the reduction pass
    Linked(Linked),
    Collapsed(Out),
    Consumed,
}

/// Stack safe catamorphism: collapse `x` into a single value, one layer at a time,
/// without using the call stack.
///
/// The result is identical to [`crate::cata_recursive`] for any `alg` without side effects:
/// `alg` is applied exactly once per layer, and never before it has been applied to all
/// of that layer's children. Structures of any depth are supported, at the cost of
/// holding every layer in a heap-allocated arena and mapping over each layer with
/// children twice.
///
/// ```rust
/// use recursion_schemes::{cata, Collapsible, PartiallyApplied};
///
/// struct Countdown(u64);
///
/// impl Collapsible for Countdown {
///     type FrameToken = Option<PartiallyApplied>;
///
///     fn into_frame(self) -> Option<Self> {
///         self.0.checked_sub(1).map(Countdown)
///     }
/// }
///
/// // far deeper than the call stack would allow with naive recursion
/// let depth = cata(Countdown(1_000_000), |frame: Option<u64>| frame.map_or(0, |n| n + 1));
/// assert_eq!(depth, 1_000_000);
/// ```
///
/// Only types with the `unfix` capability can be collapsed:
///
/// ```compile_fail
/// use recursion_schemes::cata;
///
/// struct Opaque(u64);
///
/// let _ = cata(Opaque(3), |frame: Option<u64>| frame.unwrap_or(0));
/// ```
pub fn cata<T, Out>(
    x: T,
    alg: impl FnMut(<T::FrameToken as MappableFrame>::Frame<Out>) -> Out,
) -> Out
where
    T: Collapsible,
{
    cata_observed(x, alg, &mut ())
}

/// [`cata`], reporting each step of the traversal to `observer`.
pub fn cata_observed<T, Out, O>(
    x: T,
    mut alg: impl FnMut(<T::FrameToken as MappableFrame>::Frame<Out>) -> Out,
    observer: &mut O,
) -> Out
where
    T: Collapsible,
    O: Observer<T::FrameToken, Out>,
{
    match collapse_in_arena(x, |layer| Ok::<Out, Infallible>(alg(layer)), observer) {
        Ok(out) => out,
        Err(never) => match never {},
    }
}

/// [`cata`] with a fallible algebra. The first error returned by `alg` is returned unchanged,
/// and `alg` is not called again after it.
pub fn try_cata<T, Out, E>(
    x: T,
    alg: impl FnMut(<T::FrameToken as MappableFrame>::Frame<Out>) -> Result<Out, E>,
) -> Result<Out, E>
where
    T: Collapsible,
{
    collapse_in_arena(x, alg, &mut ())
}

fn collapse_in_arena<T, Out, E, O>(
    x: T,
    mut alg: impl FnMut(Layer<T, Out>) -> Result<Out, E>,
    observer: &mut O,
) -> Result<Out, E>
where
    T: Collapsible,
    O: Observer<T::FrameToken, Out>,
{
    let mut frontier: VecDeque<(Option<ArenaIndex>, Layer<T, T>)> =
        VecDeque::from([(None, x.into_frame())]);
    let mut arena: Vec<Slot<Layer<T, ArenaIndex>, Out>> = Vec::new();
    // layers with at least one child, in discovery order
    let mut branches: Vec<ArenaIndex> = Vec::new();

    // discovery: breadth first, each child is exposed as soon as its parent is visited
    while let Some((parent, layer)) = frontier.pop_front() {
        let idx = ArenaIndex(arena.len());
        let mut has_children = false;

        let linked = <T::FrameToken as MappableFrame>::map_frame(layer, |child: T| {
            has_children = true;
            frontier.push_back((Some(idx), child.into_frame()));
            // idx of pointed-to layer determined from arena + frontier size
            ArenaIndex(arena.len() + frontier.len())
        });
        observer.discovered(idx, parent, &linked);

        if has_children {
            branches.push(idx);
            arena.push(Slot::Linked(linked));
        } else {
            // a leaf is never revisited: collapse it here
            let leaf = <T::FrameToken as MappableFrame>::map_frame(linked, |_: ArenaIndex| -> Out {
                unreachable!("map_frame found a child in a layer it previously reported as a leaf")
            });
            let out = alg(leaf)?;
            observer.collapsed(idx, &out);
            arena.push(Slot::Collapsed(out));
        }
    }

    // reduction: children are always discovered after their parent, so reverse
    // discovery order collapses every child before the layer that refers to it
    for idx in branches.into_iter().rev() {
        let linked = match std::mem::replace(&mut arena[idx.0], Slot::Consumed) {
            Slot::Linked(linked) => linked,
            _ => unreachable!("layer {} reduced twice", idx),
        };

        let resolved = <T::FrameToken as MappableFrame>::map_frame(linked, |child| {
            take_collapsed(&mut arena, child)
        });
        observer.resolved(idx, &resolved);

        let out = alg(resolved)?;
        observer.collapsed(idx, &out);
        arena[idx.0] = Slot::Collapsed(out);
    }

    Ok(take_collapsed(&mut arena, ArenaIndex::head()))
}

fn take_collapsed<Linked, Out>(arena: &mut [Slot<Linked, Out>], idx: ArenaIndex) -> Out {
    match std::mem::replace(&mut arena[idx.0], Slot::Consumed) {
        Slot::Collapsed(out) => out,
        _ => unreachable!("layer {} read before it was collapsed, or read twice", idx),
    }
}
