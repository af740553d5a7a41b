//! Recursive implementations of the core recursion schemes.
//!
//! Each of these recurses through `map_frame` on the host call stack, one frame
//! per layer of depth, and can overflow it on sufficiently deep structures.
//! [`crate::cata`] is the stack safe alternative for folds.

use crate::either::Choice;
use crate::frame::MappableFrame;
use crate::recursive::{Collapsible, Expandable};

/// Catamorphism: collapse `x` into a single value, one layer at a time.
///
/// Each layer is exposed via [`Collapsible::into_frame`], its children are collapsed first
/// (depth first, post order), and `alg` is applied to the layer of collapsed children.
///
/// NOTE: not stack safe, prefer [`crate::cata`] for structures of unknown depth
pub fn cata_recursive<T, Out>(
    x: T,
    mut alg: impl FnMut(<T::FrameToken as MappableFrame>::Frame<Out>) -> Out,
) -> Out
where
    T: Collapsible,
{
    fn go<T, Out, Alg>(x: T, alg: &mut Alg) -> Out
    where
        T: Collapsible,
        Alg: FnMut(<T::FrameToken as MappableFrame>::Frame<Out>) -> Out,
    {
        let layer = <T::FrameToken as MappableFrame>::map_frame(x.into_frame(), |child| {
            go::<T, Out, Alg>(child, &mut *alg)
        });
        alg(layer)
    }

    go::<T, Out, _>(x, &mut alg)
}

/// Anamorphism: expand `seed` into a recursive structure, one layer at a time.
///
/// Terminates only if `coalg` eventually produces a layer with no recursive positions
/// along every path.
pub fn ana_recursive<T, Seed>(
    seed: Seed,
    mut coalg: impl FnMut(Seed) -> <T::FrameToken as MappableFrame>::Frame<Seed>,
) -> T
where
    T: Expandable,
{
    fn go<T, Seed, Coalg>(seed: Seed, coalg: &mut Coalg) -> T
    where
        T: Expandable,
        Coalg: FnMut(Seed) -> <T::FrameToken as MappableFrame>::Frame<Seed>,
    {
        let layer = coalg(seed);
        let layer = <T::FrameToken as MappableFrame>::map_frame(layer, |child| {
            go::<T, Seed, Coalg>(child, &mut *coalg)
        });
        T::from_frame(layer)
    }

    go::<T, Seed, _>(seed, &mut coalg)
}

/// Hylomorphism: expand `seed` with `coalg` and collapse the result with `alg`
/// without ever building the intermediate structure.
///
/// Only the `map` capability is needed, so the frame token `F` is named explicitly:
///
/// ```rust
/// use recursion_schemes::{hylo_recursive, PartiallyApplied};
///
/// // sum of 1..=10, counting down through an `Option` frame
/// let sum = hylo_recursive::<Option<PartiallyApplied>, _, _>(
///     10u64,
///     |n| if n == 0 { None } else { Some(n - 1) },
///     |frame: Option<(u64, u64)>| match frame {
///         None => (0, 0),
///         Some((depth, acc)) => (depth + 1, acc + depth + 1),
///     },
/// );
/// assert_eq!(sum.1, 55);
/// ```
pub fn hylo_recursive<F, Seed, Out>(
    seed: Seed,
    mut coalg: impl FnMut(Seed) -> F::Frame<Seed>,
    mut alg: impl FnMut(F::Frame<Out>) -> Out,
) -> Out
where
    F: MappableFrame,
{
    fn go<F, Seed, Out, Coalg, Alg>(seed: Seed, coalg: &mut Coalg, alg: &mut Alg) -> Out
    where
        F: MappableFrame,
        Coalg: FnMut(Seed) -> F::Frame<Seed>,
        Alg: FnMut(F::Frame<Out>) -> Out,
    {
        let layer = coalg(seed);
        let layer = F::map_frame(layer, |child| {
            go::<F, Seed, Out, Coalg, Alg>(child, &mut *coalg, &mut *alg)
        });
        alg(layer)
    }

    go::<F, Seed, Out, _, _>(seed, &mut coalg, &mut alg)
}

/// Paramorphism: like [`cata_recursive`], but at each recursive position `ralg`
/// sees both the original substructure and its collapsed value.
///
/// `T: Clone` because every child is kept as well as consumed; borrowed views
/// (`&'a MyTree`) are `Copy` and make this free.
pub fn para_recursive<T, Out>(
    x: T,
    mut ralg: impl FnMut(<T::FrameToken as MappableFrame>::Frame<(T, Out)>) -> Out,
) -> Out
where
    T: Collapsible + Clone,
{
    fn go<T, Out, RAlg>(x: T, ralg: &mut RAlg) -> Out
    where
        T: Collapsible + Clone,
        RAlg: FnMut(<T::FrameToken as MappableFrame>::Frame<(T, Out)>) -> Out,
    {
        let layer = <T::FrameToken as MappableFrame>::map_frame(x.into_frame(), |child: T| {
            let collapsed = go::<T, Out, RAlg>(child.clone(), &mut *ralg);
            (child, collapsed)
        });
        ralg(layer)
    }

    go::<T, Out, _>(x, &mut ralg)
}

/// Apomorphism: like [`ana_recursive`], but `rcoalg` may mark any child position
/// as already finished, which stops unfolding along that branch only.
///
/// ```rust
/// use recursion_schemes::{apo_recursive, Either, Expandable, PartiallyApplied};
///
/// #[derive(Debug, PartialEq)]
/// struct Peano(u32);
///
/// impl Expandable for Peano {
///     type FrameToken = Option<PartiallyApplied>;
///
///     fn from_frame(val: Option<Peano>) -> Self {
///         Peano(val.map_or(0, |Peano(n)| n + 1))
///     }
/// }
///
/// // count down from a seed, but jump straight to a finished 100 at 5
/// let n: Peano = apo_recursive(8u32, |seed| match seed {
///     0 => None,
///     5 => Some(Either::Left(Peano(100))),
///     n => Some(Either::Right(n - 1)),
/// });
/// assert_eq!(n, Peano(104));
/// ```
pub fn apo_recursive<T, Seed, C>(
    seed: Seed,
    mut rcoalg: impl FnMut(Seed) -> <T::FrameToken as MappableFrame>::Frame<C>,
) -> T
where
    T: Expandable,
    C: Choice<Done = T, Seed = Seed>,
{
    fn go<T, Seed, C, RCoalg>(seed: Seed, rcoalg: &mut RCoalg) -> T
    where
        T: Expandable,
        C: Choice<Done = T, Seed = Seed>,
        RCoalg: FnMut(Seed) -> <T::FrameToken as MappableFrame>::Frame<C>,
    {
        let layer = rcoalg(seed);
        let layer = <T::FrameToken as MappableFrame>::map_frame(layer, |child: C| {
            child.either(|done| done, |seed| go::<T, Seed, C, RCoalg>(seed, &mut *rcoalg))
        });
        T::from_frame(layer)
    }

    go::<T, Seed, C, _>(seed, &mut rcoalg)
}
