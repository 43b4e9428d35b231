/*
   Linked List: A singly linked list that owns its nodes and can be
   switched between a linear and a circular form. In the circular
   form the tail links back to the head without owning it.

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

use core::ptr;

/// A node of the [`LinkedList`](../list/struct.LinkedList.html).
///
/// The list owns every node reachable from its head. The `next`
/// pointer of the tail is either null or, when the list is circular,
/// a non-owning link back to the head.
///
/// References to nodes are handed out by
/// [`find()`](../list/struct.LinkedList.html#method.find) and are
/// borrowed from the list, so they cannot outlive it or survive a
/// mutation of it.
#[derive(Debug)]
pub struct ListNode<T> {
    pub(super) val: T,
    pub(super) next: *mut ListNode<T>,
}

impl<T> ListNode<T> {
    /// Allocates a detached node on the heap and returns the raw
    /// pointer. Ownership passes to the caller, which must eventually
    /// reclaim it with [`ListNode::free`].
    pub(super) fn alloc(val: T) -> *mut ListNode<T> {
        Box::into_raw(Box::new(ListNode {
            val,
            next: ptr::null_mut(),
        }))
    }

    /// Reclaims a node allocated by [`ListNode::alloc`] and returns its
    /// value. The node must already be unlinked from the list.
    pub(super) unsafe fn free(ptr: *mut ListNode<T>) -> T {
        Box::from_raw(ptr).val
    }

    /// Returns a reference to the value held by this node.
    ///
    /// # Examples
    /// ```
    /// use strata::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// list.append(7);
    ///
    /// let node = list.find(&7).unwrap();
    /// assert_eq!(node.value(), &7);
    /// ```
    pub fn value(&self) -> &T {
        &self.val
    }

    /// Returns the node that follows this one or `None` if this is
    /// the tail of a linear list. On a circular list the tail is
    /// followed by the head.
    ///
    /// # Examples
    /// ```
    /// use strata::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::circular();
    /// list.append(1);
    /// list.append(2);
    ///
    /// let tail = list.find(&2).unwrap();
    /// assert_eq!(tail.next().map(|n| n.value()), Some(&1));
    /// ```
    pub fn next(&self) -> Option<&ListNode<T>> {
        unsafe { self.next.as_ref() }
    }
}
