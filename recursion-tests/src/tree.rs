use recursion_schemes::{Collapsible, Expandable, MappableFrame, PartiallyApplied};

/// Binary tree with values at the leaves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tree {
    Empty,
    Leaf(i64),
    Node(Box<Tree>, Box<Tree>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeFrame<A> {
    Empty,
    Leaf(i64),
    Node(A, A),
}

impl MappableFrame for TreeFrame<PartiallyApplied> {
    type Frame<X> = TreeFrame<X>;

    #[inline(always)]
    fn map_frame<A, B>(input: Self::Frame<A>, mut f: impl FnMut(A) -> B) -> Self::Frame<B> {
        match input {
            TreeFrame::Empty => TreeFrame::Empty,
            TreeFrame::Leaf(x) => TreeFrame::Leaf(x),
            TreeFrame::Node(a, b) => TreeFrame::Node(f(a), f(b)),
        }
    }
}

impl<'a> Collapsible for &'a Tree {
    type FrameToken = TreeFrame<PartiallyApplied>;

    fn into_frame(self) -> TreeFrame<Self> {
        match self {
            Tree::Empty => TreeFrame::Empty,
            Tree::Leaf(x) => TreeFrame::Leaf(*x),
            Tree::Node(a, b) => TreeFrame::Node(a, b),
        }
    }
}

impl Expandable for Tree {
    type FrameToken = TreeFrame<PartiallyApplied>;

    fn from_frame(val: TreeFrame<Self>) -> Self {
        match val {
            TreeFrame::Empty => Tree::Empty,
            TreeFrame::Leaf(x) => Tree::Leaf(x),
            TreeFrame::Node(a, b) => Tree::Node(Box::new(a), Box::new(b)),
        }
    }
}

pub fn node(a: Tree, b: Tree) -> Tree {
    Tree::Node(Box::new(a), Box::new(b))
}

pub fn sum(frame: TreeFrame<i64>) -> i64 {
    match frame {
        TreeFrame::Empty => 0,
        TreeFrame::Leaf(x) => x,
        TreeFrame::Node(a, b) => a + b,
    }
}

pub fn depth(frame: TreeFrame<usize>) -> usize {
    match frame {
        TreeFrame::Empty | TreeFrame::Leaf(_) => 1,
        TreeFrame::Node(a, b) => 1 + a.max(b),
    }
}

/// leaf values, left to right
pub fn leaves(frame: TreeFrame<Vec<i64>>) -> Vec<i64> {
    match frame {
        TreeFrame::Empty => Vec::new(),
        TreeFrame::Leaf(x) => vec![x],
        TreeFrame::Node(mut a, b) => {
            a.extend(b);
            a
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use recursion_schemes::{ana_recursive, cata, cata_recursive, hylo_recursive};

    fn arb_tree() -> impl Strategy<Value = Tree> {
        let leaf = prop_oneof![
            Just(Tree::Empty),
            any::<i32>().prop_map(|x| Tree::Leaf(x as i64)),
        ];
        leaf.prop_recursive(
            10,  // 10 levels deep
            512, // Shoot for maximum size of 512 nodes
            2,   // binary
            |inner| (inner.clone(), inner).prop_map(|(a, b)| node(a, b)),
        )
    }

    fn arb_frame() -> impl Strategy<Value = TreeFrame<u16>> {
        prop_oneof![
            Just(TreeFrame::Empty),
            any::<i64>().prop_map(TreeFrame::Leaf),
            (any::<u16>(), any::<u16>()).prop_map(|(a, b)| TreeFrame::Node(a, b)),
        ]
    }

    fn naive_sum(tree: &Tree) -> i64 {
        match tree {
            Tree::Empty => 0,
            Tree::Leaf(x) => *x,
            Tree::Node(a, b) => naive_sum(a) + naive_sum(b),
        }
    }

    // balanced tree with leaves lo..hi
    fn range_coalg((lo, hi): (i64, i64)) -> TreeFrame<(i64, i64)> {
        match hi - lo {
            0 => TreeFrame::Empty,
            1 => TreeFrame::Leaf(lo),
            _ => {
                let mid = lo + (hi - lo) / 2;
                TreeFrame::Node((lo, mid), (mid, hi))
            }
        }
    }

    #[test]
    fn sums_nested_tree() {
        // [[], [[1], [[2], [3]]]]
        let tree = node(
            Tree::Empty,
            node(Tree::Leaf(1), node(Tree::Leaf(2), Tree::Leaf(3))),
        );
        assert_eq!(cata(&tree, sum), 6);
        assert_eq!(cata_recursive(&tree, sum), 6);
        assert_eq!(cata(&tree, depth), 4);
        assert_eq!(cata(&tree, leaves), vec![1, 2, 3]);
    }

    #[test]
    fn empty_tree() {
        assert_eq!(cata(&Tree::Empty, sum), 0);
        assert_eq!(cata(&Tree::Empty, leaves), Vec::<i64>::new());
    }

    #[test]
    fn balanced_unfold() {
        let tree: Tree = ana_recursive((0, 8), range_coalg);
        assert_eq!(cata(&tree, leaves), (0..8).collect::<Vec<_>>());
        assert_eq!(cata(&tree, depth), 4);

        let fused = hylo_recursive::<TreeFrame<PartiallyApplied>, _, _>((0, 8), range_coalg, sum);
        assert_eq!(fused, 28);
    }

    proptest! {
        #[test]
        fn iterative_matches_recursive(tree in arb_tree()) {
            let expected = naive_sum(&tree);
            prop_assert_eq!(cata(&tree, sum), expected);
            prop_assert_eq!(cata_recursive(&tree, sum), expected);
            prop_assert_eq!(cata(&tree, leaves), cata_recursive(&tree, leaves));
            prop_assert_eq!(cata(&tree, depth), cata_recursive(&tree, depth));
        }

        #[test]
        fn hylo_is_cata_after_ana(lo in -50i64..50, len in 0i64..200) {
            let seed = (lo, lo + len);
            let fused = hylo_recursive::<TreeFrame<PartiallyApplied>, _, _>(seed, range_coalg, sum);
            let built: Tree = ana_recursive(seed, range_coalg);
            prop_assert_eq!(fused, cata_recursive(&built, sum));
        }

        #[test]
        fn map_frame_identity(frame in arb_frame()) {
            prop_assert_eq!(TreeFrame::<PartiallyApplied>::map_frame(frame, |x| x), frame);
        }
    }
}
