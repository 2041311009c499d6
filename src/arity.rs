/// Index arithmetic of an array-backed complete tree.
///
/// A node at slot `i` keeps its children at
/// `first_child(i) .. first_child(i) + BRANCH` (truncated to the live part of
/// the array) and its parent at `parent(i)`. [`Binary`] and [`KAry`] are the
/// two provided layouts; a branching factor below 2 is rejected when the
/// arity is first used.
pub trait Arity {
    /// Number of children per node. At least 2.
    const BRANCH: usize;

    /// Parent slot of node `i`. Must not be called with `i == 0`.
    #[inline]
    fn parent(i: usize) -> usize {
        (i - 1) / Self::BRANCH
    }

    /// Leftmost child slot of node `i`.
    #[inline]
    fn first_child(i: usize) -> usize {
        Self::BRANCH * i + 1
    }
}

/// Two children per node, with the slot arithmetic done by shifts.
#[derive(Debug, Clone, Copy)]
pub struct Binary;

impl Arity for Binary {
    const BRANCH: usize = 2;

    #[inline]
    fn parent(i: usize) -> usize {
        (i - 1) >> 1
    }

    #[inline]
    fn first_child(i: usize) -> usize {
        (i << 1) + 1
    }
}

/// `K` children per node. Wider nodes trade deeper trees for more
/// comparisons per level, which pays off when sift-ups dominate sift-downs.
///
/// Instantiating `KAry` with `K < 2` fails to compile.
#[derive(Debug, Clone, Copy)]
pub struct KAry<const K: usize>;

impl<const K: usize> Arity for KAry<K> {
    const BRANCH: usize = {
        assert!(K >= 2, "a k-ary heap needs at least two children per node");
        K
    };
}
