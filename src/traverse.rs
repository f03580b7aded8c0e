//! Lazy traversals over the nodes of a [`Tree`][crate::tree::Tree].
//!
//! Each traversal keeps an explicit queue or stack rather than recursing, so
//! walking a degenerate (list shaped) tree needs no more call stack than
//! walking a balanced one. None of them touch the shape of the tree.
//!
//! ```
//! use rebalancing_bst::tree::Tree;
//!
//! let tree = Tree::new(vec![1, 2, 3]);
//!
//! let level_order: Vec<_> = tree.level_order_iter().map(|n| *n.value()).collect();
//! assert_eq!(level_order, vec![2, 1, 3]);
//!
//! let postorder: Vec<_> = tree.postorder_iter().map(|n| *n.value()).collect();
//! assert_eq!(postorder, vec![1, 3, 2]);
//! ```

use std::collections::VecDeque;

use crate::node::Node;

/// Breadth-first: the root, then each depth level from left to right.
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> LevelOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.children());
        Some(node)
    }
}

/// Depth-first: a node, then its left subtree, then its right subtree.
pub struct Preorder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Preorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so left comes off first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node)
    }
}

/// Depth-first: a node's left subtree, then the node, then its right subtree.
/// For a valid BST this yields values in ascending order.
pub struct Inorder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Inorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut inorder = Self { stack: Vec::new() };
        inorder.push_left_spine(root);
        inorder
    }

    /// Stacks `node` and every left descendant along its left edge.
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Inorder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node)
    }
}

/// Depth-first: a node's left subtree, then its right subtree, then the node.
pub struct Postorder<'a, T> {
    /// Each entry is a node and whether its children have already been stacked.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> Postorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.map(|n| (n, false)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Postorder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(node);
            }

            self.stack.push((node, true));
            self.stack.extend(node.right().map(|n| (n, false)));
            self.stack.extend(node.left().map(|n| (n, false)));
        }
    }
}

/// The values of an [`Inorder`] walk, in ascending order.
pub struct Iter<'a, T>(Inorder<'a, T>);

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(inorder: Inorder<'a, T>) -> Self {
        Self(inorder)
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(Node::value)
    }
}
