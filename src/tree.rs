//! An ordered BST that doesn't balance itself on every mutation. It is built
//! balanced, may drift out of balance as values are inserted, and can be
//! rebuilt balanced on demand with [`Tree::rebalance`].
//!
//! # Examples
//!
//! ```
//! use rebalancing_bst::tree::Tree;
//!
//! let mut tree = Tree::new(vec![5, 3, 8, 1, 4, 7, 9]);
//! assert_eq!(tree.inorder(), vec![1, 3, 4, 5, 7, 8, 9]);
//! assert_eq!(tree.height(), 2);
//! assert!(tree.is_balanced());
//!
//! // Inserting an ascending run grows the right spine.
//! for value in 10..15 {
//!     tree.insert(value).unwrap();
//! }
//! assert!(!tree.is_balanced());
//!
//! // Rebuilding restores the balance without losing anything.
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.inorder(), vec![1, 3, 4, 5, 7, 8, 9, 10, 11, 12, 13, 14]);
//!
//! // Duplicates and missing values are reported, not ignored.
//! assert!(tree.insert(5).is_err());
//! assert!(tree.delete(&42).is_err());
//! assert_eq!(tree.delete(&5), Ok(5));
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::mem;

use tracing::{debug, trace};

use crate::error::{DuplicateValueError, ValueNotFoundError};
use crate::node::Node;
use crate::traverse::{Inorder, Iter, LevelOrder, Postorder, Preorder};
use crate::util::{self, Link};

/// A Binary Search Tree of distinct values. This can be used for inserting,
/// finding, and deleting values, walking them in any of four orders, and
/// checking and restoring balance.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

/// Tears the tree down one node at a time. Letting `Box` drop recursively
/// would use a stack frame per level of a degenerate tree.
impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

/// Copies the nodes children-first, so each copy can take ownership of its
/// already copied children. Keeps the shape and never recurses.
impl<T: Clone> Clone for Tree<T> {
    fn clone(&self) -> Self {
        let mut copied: Vec<Box<Node<T>>> = Vec::with_capacity(self.len);
        for source in self.postorder_iter() {
            let mut node = Node::new(source.value.clone());
            // The right subtree was copied last, so it's on top.
            if source.right.is_some() {
                node.right = copied.pop();
            }
            if source.left.is_some() {
                node.left = copied.pop();
            }
            copied.push(Box::new(node));
        }

        Self {
            root: copied.pop(),
            len: self.len,
        }
    }
}

/// Two trees are equal when they hold the same values in the same shape. The
/// preorder sequence of a BST pins down its shape, so that's what's compared.
impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self
                .preorder_iter()
                .map(Node::value)
                .eq(other.preorder_iter().map(Node::value))
    }
}

impl<T: Eq> Eq for Tree<T> {}

/// Prints the values in level order rather than the nested nodes, which
/// would recurse once per level.
impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("level_order", &LevelOrderValues(self))
            .finish()
    }
}

struct LevelOrderValues<'a, T>(&'a Tree<T>);

impl<T: fmt::Debug> fmt::Debug for LevelOrderValues<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.0.level_order_iter().map(Node::value))
            .finish()
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self::new(values)
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Tree<T> {
    /// Builds a balanced tree from `values`. The values may come in any order
    /// and may repeat; each distinct value is stored once.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalancing_bst::tree::Tree;
    ///
    /// let tree = Tree::new(vec![3, 1, 2, 3, 1]);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(2));
    /// ```
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        let mut values: Vec<T> = values.into_iter().collect();
        values.sort_unstable();
        values.dedup();

        let len = values.len();
        let root = util::build_sorted(&mut values.into_iter(), len);

        Self { root, len }
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Adds `value` to the tree. The new node is hung off the first empty slot
    /// found by descending from the root; nothing is rebalanced, so a run of
    /// ascending (or descending) inserts makes the tree lopsided.
    ///
    /// # Errors
    ///
    /// [`DuplicateValueError`] if `value` is already in the tree, which is left
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalancing_bst::error::DuplicateValueError;
    /// use rebalancing_bst::tree::Tree;
    ///
    /// let mut tree = Tree::default();
    ///
    /// assert_eq!(tree.insert(1), Ok(()));
    /// assert_eq!(tree.insert(1), Err(DuplicateValueError));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> Result<(), DuplicateValueError>
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        let mut depth = 0;
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    trace!(depth, "rejected duplicate insert");
                    return Err(DuplicateValueError);
                }
            };
            depth += 1;
        }

        *link = Some(Box::new(Node::new(value)));
        self.len += 1;
        trace!(depth, len = self.len, "inserted value");

        Ok(())
    }

    /// Removes `value` from the tree and returns it.
    ///
    /// A node with two children keeps its place in the tree and takes on the
    /// value of its in-order successor (the leftmost node of its own right
    /// subtree). The successor's node is unlinked and its right child, if
    /// any, moves up into the successor's old slot. A node with fewer
    /// children is simply replaced by its only child, if it has one.
    ///
    /// # Errors
    ///
    /// [`ValueNotFoundError`] if `value` isn't in the tree, which is left
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalancing_bst::error::ValueNotFoundError;
    /// use rebalancing_bst::tree::Tree;
    ///
    /// let mut tree = Tree::new(vec![1, 2, 3]);
    ///
    /// assert_eq!(tree.delete(&2), Ok(2));
    /// assert_eq!(tree.delete(&2), Err(ValueNotFoundError));
    /// assert_eq!(tree.inorder(), vec![1, 3]);
    /// ```
    pub fn delete(&mut self, value: &T) -> Result<T, ValueNotFoundError>
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        loop {
            let ordering = match link.as_deref() {
                Some(node) => value.cmp(&node.value),
                None => {
                    trace!("value to delete not found");
                    return Err(ValueNotFoundError);
                }
            };
            if ordering == Ordering::Equal {
                break;
            }

            let node = link.as_mut().ok_or(ValueNotFoundError)?;
            link = match ordering {
                Ordering::Less => &mut node.left,
                _ => &mut node.right,
            };
        }

        let removed = remove(link).ok_or(ValueNotFoundError)?;
        self.len -= 1;
        trace!(len = self.len, "deleted value");

        Ok(removed)
    }

    /// Finds the node holding `value`, if there is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalancing_bst::tree::Tree;
    ///
    /// let tree = Tree::new(vec![1, 2, 3]);
    ///
    /// assert_eq!(tree.find(&3).map(|n| *n.value()), Some(3));
    /// assert!(tree.find(&4).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(node),
            };
        }

        None
    }

    /// Whether `value` is in the tree.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    /// The values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.inorder_iter())
    }

    /// Walks the nodes breadth-first: the root, then each level left to right.
    pub fn level_order_iter(&self) -> LevelOrder<'_, T> {
        LevelOrder::new(self.root())
    }

    /// Walks the nodes depth-first, each node before its subtrees.
    pub fn preorder_iter(&self) -> Preorder<'_, T> {
        Preorder::new(self.root())
    }

    /// Walks the nodes depth-first, each node between its left and right
    /// subtrees. Values come out in ascending order.
    pub fn inorder_iter(&self) -> Inorder<'_, T> {
        Inorder::new(self.root())
    }

    /// Walks the nodes depth-first, each node after its subtrees.
    pub fn postorder_iter(&self) -> Postorder<'_, T> {
        Postorder::new(self.root())
    }

    /// Calls `visit` on every node in level order.
    pub fn level_order_each<F: FnMut(&Node<T>)>(&self, visit: F) {
        self.level_order_iter().for_each(visit)
    }

    /// Calls `visit` on every node in preorder.
    pub fn preorder_each<F: FnMut(&Node<T>)>(&self, visit: F) {
        self.preorder_iter().for_each(visit)
    }

    /// Calls `visit` on every node in order.
    pub fn inorder_each<F: FnMut(&Node<T>)>(&self, visit: F) {
        self.inorder_iter().for_each(visit)
    }

    /// Calls `visit` on every node in postorder.
    pub fn postorder_each<F: FnMut(&Node<T>)>(&self, visit: F) {
        self.postorder_iter().for_each(visit)
    }

    /// The values in level order. Empty for an empty tree.
    pub fn level_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.level_order_iter().map(|n| n.value.clone()).collect()
    }

    /// The values in preorder.
    pub fn preorder(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.preorder_iter().map(|n| n.value.clone()).collect()
    }

    /// The values in ascending order.
    pub fn inorder(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// The values in postorder.
    pub fn postorder(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.postorder_iter().map(|n| n.value.clone()).collect()
    }

    /// The number of edges from the root down to the node holding the same
    /// value as `target`, or `None` if the tree is empty or no such node lies
    /// on the path.
    ///
    /// The path is found by comparing values on the way down, so `target` is
    /// expected to be a node of this tree (e.g. one returned by
    /// [`find`][Tree::find]). Given a node from elsewhere, this reports where
    /// an equal value sits in this tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalancing_bst::tree::Tree;
    ///
    /// let tree = Tree::new(vec![1, 2, 3]);
    ///
    /// let root = tree.root().unwrap();
    /// let three = tree.find(&3).unwrap();
    /// assert_eq!(tree.depth(root), Some(0));
    /// assert_eq!(tree.depth(three), Some(1));
    /// ```
    pub fn depth(&self, target: &Node<T>) -> Option<usize>
    where
        T: Ord,
    {
        let mut current = self.root();
        let mut depth = 0;
        while let Some(node) = current {
            current = match target.value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(depth),
            };
            depth += 1;
        }

        None
    }

    /// The number of edges on the longest path from the root down to a leaf.
    /// A single node has a height of 0 and an empty tree a height of -1.
    pub fn height(&self) -> isize {
        util::height(self.root())
    }

    /// The height of the subtree rooted at `node`, measured like
    /// [`height`][Tree::height].
    pub fn height_of(&self, node: &Node<T>) -> isize {
        util::height(Some(node))
    }

    /// Whether the root's left and right subtrees differ in height by less
    /// than two. An empty tree is balanced.
    ///
    /// Only the root is checked; deeper nodes may be arbitrarily lopsided.
    /// See [`is_fully_balanced`][Tree::is_fully_balanced] for the stricter
    /// check.
    pub fn is_balanced(&self) -> bool {
        self.root().map_or(true, |root| self.is_balanced_at(root))
    }

    /// Whether `node`'s left and right subtrees differ in height by less than
    /// two. Only `node` itself is checked.
    pub fn is_balanced_at(&self, node: &Node<T>) -> bool {
        let left = util::height(node.left());
        let right = util::height(node.right());

        (left - right).abs() < 2
    }

    /// Whether every node in the tree passes [`is_balanced_at`][Tree::is_balanced_at].
    pub fn is_fully_balanced(&self) -> bool {
        self.level_order_iter().all(|node| self.is_balanced_at(node))
    }

    /// Rebuilds the tree balanced, from its current values, if the root isn't
    /// balanced (see [`is_balanced`][Tree::is_balanced]). Otherwise this does
    /// nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalancing_bst::tree::Tree;
    ///
    /// let mut tree = Tree::default();
    /// for value in 0..4 {
    ///     tree.insert(value).unwrap();
    /// }
    /// assert_eq!(tree.height(), 3);
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.height(), 2);
    /// assert_eq!(tree.level_order(), vec![2, 1, 3, 0]);
    /// ```
    pub fn rebalance(&mut self)
    where
        T: Ord,
    {
        if self.is_balanced() {
            debug!(len = self.len, "tree already balanced, skipping rebuild");
            return;
        }

        let height = self.height();
        let values = self.take_level_order();
        *self = Self::new(values);
        debug!(
            len = self.len,
            from_height = height,
            to_height = self.height(),
            "rebuilt tree"
        );
    }

    /// Empties the tree, handing back its values in level order.
    fn take_level_order(&mut self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.len);
        let mut queue: VecDeque<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            let Node { value, left, right } = *node;
            values.push(value);
            queue.extend(left);
            queue.extend(right);
        }
        self.len = 0;

        values
    }
}

/// Removes the value of the node in `link`, restructuring beneath `link` to
/// keep the BST invariant. Returns `None` if `link` is empty.
fn remove<T>(link: &mut Link<T>) -> Option<T> {
    let node = link.as_mut()?;
    if node.left.is_some() && node.right.is_some() {
        let successor = take_leftmost(&mut node.right)?;
        return Some(mem::replace(&mut node.value, successor));
    }

    let Node { value, left, right } = *link.take()?;
    *link = left.or(right);

    Some(value)
}

/// Unlinks the leftmost node of the subtree in `link` and returns its value.
/// Its right child, if any, takes its place.
fn take_leftmost<T>(mut link: &mut Link<T>) -> Option<T> {
    while link.as_ref()?.left.is_some() {
        link = &mut link.as_mut()?.left;
    }

    let Node { value, right, .. } = *link.take()?;
    *link = right;

    Some(value)
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and a set.
    /// This way we can ensure that after a random smattering of inserts,
    /// deletes, and rebalances we have the same values in both.
    fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
    where
        T: Ord + Clone + std::fmt::Debug,
    {
        for op in ops {
            match op {
                Op::Insert(v) => {
                    let inserted = bst.insert(v.clone()).is_ok();
                    assert_eq!(inserted, set.insert(v.clone()));
                }
                Op::Delete(v) => {
                    assert_eq!(bst.delete(v).ok(), set.take(v));
                }
                Op::Rebalance => {
                    bst.rebalance();
                    assert!(bst.is_balanced());
                }
            }
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::default();
            let mut set = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut set);
            tree.len() == set.len() && tree.iter().eq(set.iter())
        }
    }

    quickcheck::quickcheck! {
        fn inorder_is_ascending(xs: Vec<i16>) -> bool {
            let mut tree = Tree::default();
            for x in xs {
                let _ = tree.insert(x);
            }

            tree.inorder().windows(2).all(|w| w[0] < w[1])
        }
    }

    quickcheck::quickcheck! {
        fn build_is_balanced(xs: Vec<i16>) -> bool {
            let tree = Tree::new(xs);
            let n = tree.len() as f64;
            let bound = (n + 1.0).log2().ceil() as isize - 1;

            tree.is_fully_balanced() && tree.height() <= bound
        }
    }

    quickcheck::quickcheck! {
        fn traversals_visit_every_value(xs: Vec<i8>) -> bool {
            let tree = Tree::new(xs);
            let mut sorted = tree.inorder();

            let mut level_order = tree.level_order();
            let mut preorder = tree.preorder();
            let mut postorder = tree.postorder();
            level_order.sort_unstable();
            preorder.sort_unstable();
            postorder.sort_unstable();
            sorted.dedup();

            level_order == sorted && preorder == sorted && postorder == sorted
        }
    }

    quickcheck::quickcheck! {
        fn every_found_node_has_a_depth(xs: Vec<i8>) -> bool {
            let tree = Tree::new(xs);

            tree.level_order_iter()
                .all(|n| tree.depth(n).map_or(false, |d| d as isize <= tree.height()))
        }
    }
}
