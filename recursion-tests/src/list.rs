use std::borrow::Borrow;
use std::collections::VecDeque;
use std::fmt;

use recursion_schemes::{Collapsible, Either, Expandable, MappableFrame, PartiallyApplied};

/// One cell of a singly linked list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFrame<Elem, Next> {
    Cons(Elem, Next),
    Nil,
}

impl<Elem> MappableFrame for ListFrame<Elem, PartiallyApplied> {
    type Frame<Next> = ListFrame<Elem, Next>;

    #[inline(always)]
    fn map_frame<A, B>(input: Self::Frame<A>, mut f: impl FnMut(A) -> B) -> Self::Frame<B> {
        match input {
            ListFrame::Cons(elem, next) => ListFrame::Cons(elem, f(next)),
            ListFrame::Nil => ListFrame::Nil,
        }
    }
}

/// Boxed cons list. Long lists are fine: building, dropping, comparing and
/// printing are all iterative.
pub struct ConsList<A> {
    head: Option<Box<Node<A>>>,
}

struct Node<A> {
    elem: A,
    next: ConsList<A>,
}

impl<A> ConsList<A> {
    pub fn nil() -> Self {
        ConsList { head: None }
    }

    pub fn cons(elem: A, next: Self) -> Self {
        ConsList {
            head: Some(Box::new(Node { elem, next })),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn iter(&self) -> Iter<'_, A> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

pub struct Iter<'a, A> {
    next: Option<&'a Node<A>>,
}

impl<'a, A> Iterator for Iter<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.head.as_deref();
            &node.elem
        })
    }
}

impl<A> FromIterator<A> for ConsList<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        let elems: Vec<A> = iter.into_iter().collect();
        elems
            .into_iter()
            .rev()
            .fold(ConsList::nil(), |acc, elem| ConsList::cons(elem, acc))
    }
}

impl<A> Drop for ConsList<A> {
    fn drop(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.head.take();
        }
    }
}

impl<A: Clone> Clone for ConsList<A> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<A: PartialEq> PartialEq for ConsList<A> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<A: Eq> Eq for ConsList<A> {}

impl<A: fmt::Debug> fmt::Debug for ConsList<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<A> Collapsible for ConsList<A> {
    type FrameToken = ListFrame<A, PartiallyApplied>;

    fn into_frame(mut self) -> ListFrame<A, Self> {
        match self.head.take() {
            Some(node) => {
                let Node { elem, next } = *node;
                ListFrame::Cons(elem, next)
            }
            None => ListFrame::Nil,
        }
    }
}

impl<'a, A> Collapsible for &'a ConsList<A> {
    type FrameToken = ListFrame<&'a A, PartiallyApplied>;

    fn into_frame(self) -> ListFrame<&'a A, Self> {
        match &self.head {
            Some(node) => ListFrame::Cons(&node.elem, &node.next),
            None => ListFrame::Nil,
        }
    }
}

impl<A> Expandable for ConsList<A> {
    type FrameToken = ListFrame<A, PartiallyApplied>;

    fn from_frame(val: ListFrame<A, Self>) -> Self {
        match val {
            ListFrame::Cons(elem, next) => ConsList::cons(elem, next),
            ListFrame::Nil => ConsList::nil(),
        }
    }
}

/// Borrowed view of a slice as a list, sharing `ListFrame` with `ConsList`
#[derive(Debug, Clone, Copy)]
pub struct Slice<'a, A>(pub &'a [A]);

impl<'a, A> Collapsible for Slice<'a, A> {
    type FrameToken = ListFrame<&'a A, PartiallyApplied>;

    #[inline(always)]
    fn into_frame(self) -> ListFrame<&'a A, Self> {
        match self.0.split_first() {
            Some((first, rest)) => ListFrame::Cons(first, Slice(rest)),
            None => ListFrame::Nil,
        }
    }
}

/// Owned, array-backed list, sharing `ListFrame` with `ConsList`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Array<A>(pub VecDeque<A>);

impl<A> FromIterator<A> for Array<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Array(iter.into_iter().collect())
    }
}

impl<A> Collapsible for Array<A> {
    type FrameToken = ListFrame<A, PartiallyApplied>;

    fn into_frame(mut self) -> ListFrame<A, Self> {
        match self.0.pop_front() {
            Some(first) => ListFrame::Cons(first, self),
            None => ListFrame::Nil,
        }
    }
}

impl<A> Expandable for Array<A> {
    type FrameToken = ListFrame<A, PartiallyApplied>;

    fn from_frame(val: ListFrame<A, Self>) -> Self {
        match val {
            ListFrame::Cons(elem, mut rest) => {
                rest.0.push_front(elem);
                rest
            }
            ListFrame::Nil => Array(VecDeque::new()),
        }
    }
}

pub fn sum<E: Borrow<i64>>(frame: ListFrame<E, i64>) -> i64 {
    match frame {
        ListFrame::Cons(elem, acc) => elem.borrow() + acc,
        ListFrame::Nil => 0,
    }
}

pub fn product<E: Borrow<i64>>(frame: ListFrame<E, i64>) -> i64 {
    match frame {
        ListFrame::Cons(elem, acc) => elem.borrow() * acc,
        ListFrame::Nil => 1,
    }
}

pub fn length<E>(frame: ListFrame<E, usize>) -> usize {
    match frame {
        ListFrame::Cons(_, acc) => acc + 1,
        ListFrame::Nil => 0,
    }
}

pub fn squares<E: Borrow<i64>>(frame: ListFrame<E, ConsList<i64>>) -> ConsList<i64> {
    match frame {
        ListFrame::Cons(elem, rest) => ConsList::cons(elem.borrow() * elem.borrow(), rest),
        ListFrame::Nil => ConsList::nil(),
    }
}

pub fn sum_of_squares<E: Borrow<i64>>(frame: ListFrame<E, i64>) -> i64 {
    match frame {
        ListFrame::Cons(elem, acc) => elem.borrow() * elem.borrow() + acc,
        ListFrame::Nil => 0,
    }
}

/// coalgebra: `seed, seed + 1, ..., n`
pub fn up_to(n: i64) -> impl Fn(i64) -> ListFrame<i64, i64> + Copy {
    move |seed| {
        if seed > n {
            ListFrame::Nil
        } else {
            ListFrame::Cons(seed, seed + 1)
        }
    }
}

/// r-algebra: sum, ignoring the original tail
pub fn para_sum<E: Borrow<i64>, T>(frame: ListFrame<E, (T, i64)>) -> i64 {
    match frame {
        ListFrame::Cons(elem, (_, acc)) => elem.borrow() + acc,
        ListFrame::Nil => 0,
    }
}

/// r-algebra: every suffix of the list, longest first, ending with the empty one
pub fn tails<'a>(
    frame: ListFrame<&'a i64, (&'a ConsList<i64>, Vec<Vec<i64>>)>,
) -> Vec<Vec<i64>> {
    match frame {
        ListFrame::Cons(elem, (rest, mut acc)) => {
            let whole = std::iter::once(*elem).chain(rest.iter().copied()).collect();
            acc.insert(0, whole);
            acc
        }
        ListFrame::Nil => vec![Vec::new()],
    }
}

/// r-coalgebra: count up from the seed, stopping with a finished singleton list at
/// the first value satisfying `stop`
pub fn count_until(
    stop: impl Fn(i64) -> bool,
) -> impl Fn(i64) -> ListFrame<i64, Either<ConsList<i64>, i64>> {
    move |seed| {
        let next = seed + 1;
        if stop(next) {
            ListFrame::Cons(seed, Either::Left(ConsList::cons(next, ConsList::nil())))
        } else {
            ListFrame::Cons(seed, Either::Right(next))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use recursion_schemes::{
        ana_recursive, apo_recursive, cata, cata_recursive, hylo_recursive, para_recursive,
        CollapsibleExt, ExpandableExt,
    };

    fn list(xs: &[i64]) -> ConsList<i64> {
        xs.iter().copied().collect()
    }

    fn arb_frame() -> impl Strategy<Value = ListFrame<i64, u8>> {
        prop_oneof![
            Just(ListFrame::Nil),
            (any::<i64>(), any::<u8>()).prop_map(|(e, n)| ListFrame::Cons(e, n)),
        ]
    }

    // every fold is checked against both catamorphisms
    fn fold_both<'a, Out: PartialEq + fmt::Debug>(
        xs: &'a ConsList<i64>,
        alg: impl Fn(ListFrame<&'a i64, Out>) -> Out,
    ) -> Out {
        let iterative = cata(xs, &alg);
        let recursive = cata_recursive(xs, &alg);
        assert_eq!(iterative, recursive);
        iterative
    }

    #[test]
    fn folds() {
        assert_eq!(fold_both(&list(&(0..10).collect::<Vec<_>>()), length), 10);
        assert_eq!(fold_both(&ConsList::nil(), sum), 0);
        assert_eq!(fold_both(&list(&[1]), sum), 1);
        assert_eq!(fold_both(&list(&[1, 2, 3]), sum), 6);
        assert_eq!(fold_both(&list(&[2, 3, 4]), product), 24);
        assert_eq!(fold_both(&list(&[1, 2, 3]), squares), list(&[1, 4, 9]));
        assert_eq!(fold_both(&list(&[1, 4, 9]), sum), 14);
        assert_eq!(fold_both(&list(&[1, 2, 3]), sum_of_squares), 14);
    }

    #[test]
    fn empty_list_never_reduces_a_child() {
        let mut seen = Vec::new();
        let out = cata(&ConsList::<i64>::nil(), |frame: ListFrame<&i64, i64>| {
            seen.push(matches!(frame, ListFrame::Nil));
            sum(frame)
        });
        assert_eq!(out, 0);
        assert_eq!(seen, vec![true]);
    }

    #[test]
    fn owned_list_folds() {
        assert_eq!(list(&[5, 6, 7]).collapse_frames(sum), 18);
        assert_eq!(list(&[5, 6, 7]).collapse_frames_recursive(sum), 18);
    }

    #[test]
    fn slice_folds() {
        let xs = Slice(&[1i64, 2, 3]);
        assert_eq!(cata(xs, sum), 6);
        assert_eq!(cata_recursive(xs, sum), 6);

        let ys = Slice(&[2i64, 3, 4]);
        assert_eq!(cata(ys, product), 24);
        assert_eq!(cata_recursive(ys, product), 24);
    }

    #[test]
    fn array_folds() {
        let xs: Array<i64> = [1, 2, 3].into_iter().collect();
        assert_eq!(cata(xs.clone(), sum), 6);
        assert_eq!(cata_recursive(xs, sum), 6);

        let ys: Array<i64> = [2, 3, 4].into_iter().collect();
        assert_eq!(ys.collapse_frames(product), 24);
    }

    #[test]
    fn unfolds() {
        let built: ConsList<i64> = ana_recursive(0, up_to(3));
        assert_eq!(built, list(&[0, 1, 2, 3]));

        let built: Array<i64> = Array::expand_frames_recursive(0, up_to(3));
        assert_eq!(built, Array(VecDeque::from(vec![0, 1, 2, 3])));
    }

    #[test]
    fn hylo_sums_without_building() {
        type F = ListFrame<i64, PartiallyApplied>;
        assert_eq!(hylo_recursive::<F, _, _>(0, up_to(0), sum), 0);
        assert_eq!(hylo_recursive::<F, _, _>(0, up_to(10), sum), 55);
        assert_eq!(hylo_recursive::<F, _, _>(0, up_to(100), sum), 5050);
    }

    #[test]
    fn para_sum_ignores_originals() {
        assert_eq!(para_recursive(&ConsList::<i64>::nil(), para_sum), 0);
        let xs = list(&(0..=10).collect::<Vec<_>>());
        assert_eq!(para_recursive(&xs, para_sum), 55);

        let arr = Slice(&[0i64, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        assert_eq!(para_recursive(arr, para_sum), 55);
    }

    #[test]
    fn para_tails_sees_untouched_remainder() {
        let xs = list(&[1, 2, 3]);
        let all = (&xs).collapse_frames_with_originals(tails);
        assert_eq!(all, vec![vec![1, 2, 3], vec![2, 3], vec![3], vec![]]);
    }

    #[test]
    fn apo_stops_at_first_match() {
        let built: ConsList<i64> = apo_recursive(0, count_until(|n| n == 1));
        assert_eq!(built, list(&[0, 1]));

        let built: ConsList<i64> =
            ConsList::expand_frames_until(0, count_until(|n| n > 10 && is_square(n)));
        assert_eq!(built, list(&(0..=16).collect::<Vec<_>>()));
    }

    fn is_square(n: i64) -> bool {
        let root = (n as f64).sqrt() as i64;
        root * root == n
    }

    #[test]
    fn long_list_is_stack_safe() {
        let xs: ConsList<i64> = (0..100_000).collect();
        assert_eq!(cata(&xs, length), 100_000);
        assert_eq!(cata(&xs, sum), (0..100_000).sum::<i64>());

        let big = vec![1i64; 1_000_000];
        assert_eq!(cata(Slice(&big), sum), 1_000_000);

        // owned, consuming one cell at a time
        assert_eq!(xs.collapse_frames(length), 100_000);
    }

    proptest! {
        #[test]
        fn iterative_matches_recursive(xs in proptest::collection::vec(-1000i64..1000, 0..200)) {
            let cons = list(&xs);
            prop_assert_eq!(cata(&cons, sum), cata_recursive(&cons, sum));
            prop_assert_eq!(cata(Slice(&xs), sum_of_squares), cata_recursive(Slice(&xs), sum_of_squares));
            prop_assert_eq!(cata(&cons, squares), cata_recursive(&cons, squares));
            prop_assert_eq!(cata(&cons, sum), xs.iter().sum::<i64>());
        }

        #[test]
        fn hylo_is_cata_after_ana(n in 0i64..300) {
            let fused = hylo_recursive::<ListFrame<i64, PartiallyApplied>, _, _>(0, up_to(n), sum);
            let built: ConsList<i64> = ana_recursive(0, up_to(n));
            prop_assert_eq!(fused, cata_recursive(built, sum));
        }

        #[test]
        fn map_frame_identity(frame in arb_frame()) {
            let mapped = ListFrame::<i64, PartiallyApplied>::map_frame(frame, |x| x);
            prop_assert_eq!(mapped, frame);
        }

        #[test]
        fn map_frame_composition(frame in arb_frame()) {
            let f = |x: u8| x as u32 + 1;
            let g = |x: u32| x * 3;
            let fused = ListFrame::<i64, PartiallyApplied>::map_frame(frame, |x| g(f(x)));
            let split = ListFrame::<i64, PartiallyApplied>::map_frame(
                ListFrame::<i64, PartiallyApplied>::map_frame(frame, f),
                g,
            );
            prop_assert_eq!(fused, split);
        }
    }
}
