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

use core::fmt;

/// A node of the [`Tree`](../tree/struct.Tree.html). Each node owns
/// its children.
///
/// Nodes handed out by the tree (for instance by
/// [`search()`](../tree/struct.Tree.html#method.search)) borrow the
/// tree. Detached nodes can be built with [`TreeNode::new`] and
/// turned into a tree with
/// [`Tree::from_root`](../tree/struct.Tree.html#method.from_root).
///
/// # Examples
/// ```
/// use strata::collections::{Tree, TreeNode};
///
/// let mut root = TreeNode::new(1);
/// root.set_left(TreeNode::new(2));
/// root.set_right(TreeNode::new(3));
///
/// assert_eq!(root.left().map(|n| n.value()), Some(&2));
/// assert!(!root.is_leaf());
///
/// let tree = Tree::from_root(root);
/// assert_eq!(tree.len(), 3);
/// ```
///
/// Dropping, cloning and comparing nodes walk the subtree with an
/// explicit stack, so arbitrarily deep chains are handled. The
/// `Debug` output is shallow: the node's value and the values of its
/// direct children.
pub struct TreeNode<T> {
    pub(crate) val: T,
    pub(crate) left: Option<Box<TreeNode<T>>>,
    pub(crate) right: Option<Box<TreeNode<T>>>,
}

impl<T> Drop for TreeNode<T> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<TreeNode<T>>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T: Clone> Clone for TreeNode<T> {
    fn clone(&self) -> Self {
        let mut root = TreeNode::new(self.val.clone());
        // copies of the descendants in pre-order with (parent, is_left);
        // a parent of None is the root
        let mut copies: Vec<(TreeNode<T>, Option<usize>, bool)> = Vec::new();
        let mut stack: Vec<(&TreeNode<T>, Option<usize>)> = vec![(self, None)];
        while let Some((src, idx)) = stack.pop() {
            if let Some(right) = src.right() {
                copies.push((TreeNode::new(right.val.clone()), idx, false));
                stack.push((right, Some(copies.len() - 1)));
            }
            if let Some(left) = src.left() {
                copies.push((TreeNode::new(left.val.clone()), idx, true));
                stack.push((left, Some(copies.len() - 1)));
            }
        }

        // children always sit after their parent, so popping from the
        // back attaches every node only once its subtree is complete
        while let Some((node, parent, is_left)) = copies.pop() {
            let parent = match parent {
                Some(i) => &mut copies[i].0,
                None => &mut root,
            };
            if is_left {
                parent.left = Some(Box::new(node));
            } else {
                parent.right = Some(Box::new(node));
            }
        }
        root
    }
}

impl<T: PartialEq> PartialEq for TreeNode<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.val != b.val {
                return false;
            }
            for (x, y) in [(a.left(), b.left()), (a.right(), b.right())] {
                match (x, y) {
                    (None, None) => {}
                    (Some(x), Some(y)) => stack.push((x, y)),
                    _ => return false,
                }
            }
        }
        true
    }
}

impl<T: Eq> Eq for TreeNode<T> {}

impl<T: fmt::Debug> fmt::Debug for TreeNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeNode")
            .field("val", &self.val)
            .field("left", &self.left().map(|n| &n.val))
            .field("right", &self.right().map(|n| &n.val))
            .finish()
    }
}

impl<T> TreeNode<T> {
    /// Creates a detached node with no children.
    pub fn new(val: T) -> TreeNode<T> {
        TreeNode {
            val,
            left: None,
            right: None,
        }
    }

    /// Returns a reference to the value held by this node.
    pub fn value(&self) -> &T {
        &self.val
    }

    /// Returns the left child or `None` if there is none.
    pub fn left(&self) -> Option<&TreeNode<T>> {
        self.left.as_deref()
    }

    /// Returns the right child or `None` if there is none.
    pub fn right(&self) -> Option<&TreeNode<T>> {
        self.right.as_deref()
    }

    /// Returns true if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Sets the left child and returns the previous one.
    pub fn set_left(&mut self, child: TreeNode<T>) -> Option<TreeNode<T>> {
        self.left.replace(Box::new(child)).map(|n| *n)
    }

    /// Sets the right child and returns the previous one.
    pub fn set_right(&mut self, child: TreeNode<T>) -> Option<TreeNode<T>> {
        self.right.replace(Box::new(child)).map(|n| *n)
    }
}
