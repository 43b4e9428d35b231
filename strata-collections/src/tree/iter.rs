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
use crate::tree::node::TreeNode;

/// Breadth-first walk over the nodes of a tree.
pub(crate) struct Nodes<'a, T> {
    queue: Queue<&'a TreeNode<T>>,
}

impl<'a, T> Nodes<'a, T> {
    pub(crate) fn new(root: Option<&'a TreeNode<T>>) -> Nodes<'a, T> {
        let mut queue = Queue::new();
        if let Some(root) = root {
            queue.push(root);
        }
        Nodes { queue }
    }
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = &'a TreeNode<T>;
    fn next(&mut self) -> Option<&'a TreeNode<T>> {
        let current = self.queue.dequeue()?;
        if let Some(left) = current.left() {
            self.queue.push(left);
        }
        if let Some(right) = current.right() {
            self.queue.push(right);
        }
        Some(current)
    }
}

/// An iterator over the values of the
/// [`Tree`](../tree/struct.Tree.html) in level order: level by level
/// from the root, left to right within a level.
///
/// This struct is created by the
/// [`.iter()`](../tree/struct.Tree.html#method.iter) method.
///
/// # Examples
/// ```
/// use strata::collections::Tree;
/// use strata::collections::tree::Iter;
///
/// let tree: Tree<u8> = (1..=3).collect();
/// let mut iter: Iter<u8> = tree.iter();
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next(), Some(&3));
/// assert_eq!(iter.next(), None);
/// ```
pub struct Iter<'a, T> {
    nodes: Nodes<'a, T>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a TreeNode<T>>, len: usize) -> Iter<'a, T> {
        Iter {
            nodes: Nodes::new(root),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        let node = self.nodes.next()?;
        self.remaining -= 1;
        Some(&node.val)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
