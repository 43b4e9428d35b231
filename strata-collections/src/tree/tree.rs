/*
   Tree: A binary tree whose shape is decided by insertion order
   alone. Every new value takes the first free slot in level order,
   so the tree is always complete.

   Copyright 2026 The Strata Authors

   Licensed under the Apache License, Version 2.0 (the "License");
   you may not use this file except in compliance with the License.
   You may obtain a copy of the License at

       http://www.apache.org/licenses/LICENSE-2.0

   Unless required by applicable law or agreed to in writing, software
   distributed under the License is distributed on an "AS IS" BASIS,
   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
   See the License for the specific language governing permissions and
   limitations under the License.
*/

use crate::queue::queue::Queue;
use crate::tree::{iter::Iter, iter::Nodes, node::TreeNode};
use core::fmt;
use core::iter::FromIterator;
use tracing::trace;

/// A binary tree filled in level order.
///
/// [`insert()`](#method.insert) places every new value in the first
/// free slot found by a breadth-first walk from the root, so all
/// levels above the deepest are full and the deepest level fills from
/// left to right. The shape depends only on the number of values
/// inserted, never on the values themselves.
///
/// The tree renders with `Display` as one line per level, for example
/// `[1]\n[2, 3]\n`, and as `Tree{empty}` when it has no nodes.
///
/// Every operation walks the tree with a queue or an explicit stack,
/// so a deep tree built with
/// [`from_root()`](#method.from_root) can be traversed, cloned,
/// compared and dropped without overflowing the call stack.
///
/// # Getting Started
///
/// ```
/// use strata::collections::Tree;
///
/// let tree: Tree<u8> = (1..=5).collect();
/// //       1
/// //     /   \
/// //    2     3
/// //   / \
/// //  4   5
/// assert_eq!(tree.level_order(), vec![&1, &2, &3, &4, &5]);
/// assert_eq!(tree.in_order(), vec![&4, &2, &5, &1, &3]);
/// assert_eq!(tree.max_depth(), 3);
/// assert_eq!(tree.min_depth(), 2);
/// assert_eq!(tree.count_leaves(), 3);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Tree<T> {
    root: Option<Box<TreeNode<T>>>,
    size: usize,
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Tree::new()
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Tree::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.insert(elem);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("size", &self.size)
            .field("elems", &self.level_order())
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "Tree{{empty}}");
        }
        for level in self.levels() {
            write!(f, "[")?;
            for (i, e) in level.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", e)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

impl<T> Tree<T> {
    /// Creates an empty tree.
    ///
    /// # Examples
    /// ```
    /// use strata::collections::Tree;
    /// let tree = Tree::<u8>::new();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.max_depth(), 0);
    /// ```
    pub fn new() -> Tree<T> {
        Tree {
            root: None,
            size: 0,
        }
    }

    /// Creates a tree from a manually built root node. The number of
    /// nodes is counted once here. The tree does not have to be
    /// complete; later inserts fill the first free slot in level
    /// order.
    ///
    /// This operation should complete in *O*(*n*) time.
    pub fn from_root(root: TreeNode<T>) -> Tree<T> {
        let size = Nodes::new(Some(&root)).count();
        Tree {
            root: Some(Box::new(root)),
            size,
        }
    }

    /// Returns the number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the root node or `None` if the tree is empty.
    pub fn root(&self) -> Option<&TreeNode<T>> {
        self.root.as_deref()
    }

    /// Returns an iterator over the values in level order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root(), self.size)
    }

    /// Removes and drops all the nodes.
    pub fn clear(&mut self) {
        if self.root.is_some() {
            trace!(size = self.size, "clearing tree");
        }
        let mut stack: Vec<Box<TreeNode<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.size = 0;
    }

    /// Inserts a value into the first free slot in level order.
    ///
    /// The slot is found by a breadth-first walk from the root: each
    /// dequeued node either has a free left or right slot that takes
    /// the value, or its children are enqueued and the walk goes on.
    ///
    /// This operation should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use strata::collections::Tree;
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    /// tree.insert(3);
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.left().map(|n| n.value()), Some(&2));
    /// assert_eq!(root.right().map(|n| n.value()), Some(&3));
    /// ```
    pub fn insert(&mut self, elem: T) {
        let mut slot = Some(Box::new(TreeNode::new(elem)));

        match self.root.as_deref_mut() {
            None => self.root = slot,
            Some(root) => {
                let mut queue = Queue::new();
                queue.push(root);
                while let Some(current) = queue.dequeue() {
                    if current.left.is_none() {
                        current.left = slot.take();
                        break;
                    }
                    if let Some(left) = current.left.as_deref_mut() {
                        queue.push(left);
                    }

                    if current.right.is_none() {
                        current.right = slot.take();
                        break;
                    }
                    if let Some(right) = current.right.as_deref_mut() {
                        queue.push(right);
                    }
                }
            }
        }
        self.size += 1;
        trace!(size = self.size, "tree insert");
    }

    /// Returns the values grouped by level, from the root down and
    /// left to right within a level.
    ///
    /// # Examples
    /// ```
    /// use strata::collections::Tree;
    /// let tree: Tree<u8> = (1..=4).collect();
    /// assert_eq!(tree.levels(), vec![vec![&1], vec![&2, &3], vec![&4]]);
    /// ```
    pub fn levels(&self) -> Vec<Vec<&T>> {
        let mut levels = Vec::new();
        let mut queue = Queue::new();
        if let Some(root) = self.root() {
            queue.push(root);
        }

        while !queue.is_empty() {
            let level_len = queue.len();
            let mut level = Vec::with_capacity(level_len);
            for _ in 0..level_len {
                if let Some(current) = queue.dequeue() {
                    level.push(&current.val);
                    if let Some(left) = current.left() {
                        queue.push(left);
                    }
                    if let Some(right) = current.right() {
                        queue.push(right);
                    }
                }
            }
            levels.push(level);
        }
        levels
    }

    /// Returns the values in level order (breadth first).
    pub fn level_order(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// Returns the values in order: left subtree, node, right
    /// subtree.
    pub fn in_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.size);
        let mut stack = Vec::new();
        let mut current = self.root();
        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left();
            }
            match stack.pop() {
                None => break,
                Some(node) => {
                    out.push(&node.val);
                    current = node.right();
                }
            }
        }
        out
    }

    /// Returns the values in pre-order: node, left subtree, right
    /// subtree.
    ///
    /// # Examples
    /// ```
    /// use strata::collections::Tree;
    /// let tree: Tree<u8> = (1..=5).collect();
    /// assert_eq!(tree.pre_order(), vec![&1, &2, &4, &5, &3]);
    /// ```
    pub fn pre_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.size);
        let mut stack: Vec<&TreeNode<T>> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            out.push(&node.val);
            stack.extend(node.right());
            stack.extend(node.left());
        }
        out
    }

    /// Returns the values in post-order: left subtree, right subtree,
    /// node.
    ///
    /// # Examples
    /// ```
    /// use strata::collections::Tree;
    /// let tree: Tree<u8> = (1..=5).collect();
    /// assert_eq!(tree.post_order(), vec![&4, &5, &2, &3, &1]);
    /// ```
    pub fn post_order(&self) -> Vec<&T> {
        // node, right, left reversed
        let mut out = Vec::with_capacity(self.size);
        let mut stack: Vec<&TreeNode<T>> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            out.push(&node.val);
            stack.extend(node.left());
            stack.extend(node.right());
        }
        out.reverse();
        out
    }

    /// Returns `true` if the tree contains a value equal to the given
    /// value. The tree is scanned in level order.
    ///
    /// This operation should complete in *O*(*n*) time
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.search(x).is_some()
    }

    /// Returns the first node in level order holding a value equal to
    /// the given value, or `None` if there is no such node. The node
    /// borrows the tree.
    ///
    /// This operation should complete in *O*(*n*) time
    ///
    /// # Examples
    /// ```
    /// use strata::collections::Tree;
    /// let tree: Tree<u8> = (1..=3).collect();
    ///
    /// let node = tree.search(&1).unwrap();
    /// assert_eq!(node.right().map(|n| n.value()), Some(&3));
    /// assert!(tree.search(&9).is_none());
    /// ```
    pub fn search(&self, x: &T) -> Option<&TreeNode<T>>
    where
        T: PartialEq<T>,
    {
        self.nodes().find(|n| n.val == *x)
    }

    /// Returns the number of nodes on the longest path from the root
    /// down to a leaf, or 0 for an empty tree.
    pub fn max_depth(&self) -> usize {
        self.levels().len()
    }

    /// Returns the number of nodes on the shortest path from the root
    /// down to a leaf, or 0 for an empty tree. A node with a single
    /// child is not a leaf, so only the existing child is followed.
    ///
    /// # Examples
    /// ```
    /// use strata::collections::{Tree, TreeNode};
    /// let mut mid = TreeNode::new(2);
    /// mid.set_left(TreeNode::new(3));
    /// let mut root = TreeNode::new(1);
    /// root.set_left(mid);
    ///
    /// let chain = Tree::from_root(root);
    /// assert_eq!(chain.min_depth(), 3);
    /// assert_eq!(chain.max_depth(), 3);
    /// ```
    pub fn min_depth(&self) -> usize {
        let mut queue = Queue::new();
        if let Some(root) = self.root() {
            queue.push((root, 1));
        }
        // the first leaf in level order is the shallowest
        while let Some((node, depth)) = queue.dequeue() {
            if node.is_leaf() {
                return depth;
            }
            if let Some(left) = node.left() {
                queue.push((left, depth + 1));
            }
            if let Some(right) = node.right() {
                queue.push((right, depth + 1));
            }
        }
        0
    }

    /// Returns the number of nodes that have no children.
    pub fn count_leaves(&self) -> usize {
        self.nodes().filter(|n| n.is_leaf()).count()
    }

    fn nodes(&self) -> Nodes<'_, T> {
        Nodes::new(self.root())
    }
}
