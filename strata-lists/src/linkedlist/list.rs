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

use crate::linkedlist::{error::IndexError, iter::Iter, iter::IterMut, node::ListNode};
use core::fmt;
use core::iter::FromIterator;
use core::ptr;
use tracing::{debug, trace};

/// A singly linked list that owns its nodes and can be switched
/// between a linear and a circular form at any time.
///
/// Elements can be appended and prepended in constant time. Index
/// based inserts, reads and removes walk the list from the head and
/// complete in linear time. There are no back links, so removing the
/// tail also requires a walk to find its predecessor.
///
/// When the list is circular the `next` link of the tail points back
/// to the head. This link never owns the head: every traversal visits
/// exactly [`len()`](#method.len) nodes and the list frees exactly
/// that many nodes when it is cleared or dropped.
///
/// # Getting Started
///
/// To get started add the strata dependency to Cargo.toml and the
/// use declaration in your source.
///
/// ```text
/// [dependencies]
/// strata = "0.1.0"
/// ```
///
/// ```
/// use strata::lists::LinkedList;
///
/// let mut list = LinkedList::<u8>::new();
/// for i in 0..10 {
///     list.append(i);
/// }
///
/// for e in list.iter() {
///     println!("{}", e);
/// }
/// ```
pub struct LinkedList<T> {
    pub(super) head: *mut ListNode<T>,
    pub(super) tail: *mut ListNode<T>,
    len: usize,
    circular: bool,
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        LinkedList::new()
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.append(elem);
        }
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        let mut list = LinkedList::new();
        list.extend(self.iter().cloned());
        if self.circular {
            list.make_circular();
        }
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("len", &self.len)
            .field("circular", &self.circular)
            .field("elems", &DebugElems(self))
            .finish()
    }
}

struct DebugElems<'a, T>(&'a LinkedList<T>);

impl<'a, T: fmt::Debug> fmt::Debug for DebugElems<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "LinkedList{{empty}}");
        }
        write!(f, "LinkedList{{")?;
        for (i, e) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", e)?;
        }
        if self.circular {
            write!(f, " -> (circular)")?;
        }
        write!(f, "}}")
    }
}

impl<T> LinkedList<T> {
    /// Creates an empty linear linked list.
    ///
    /// # Examples
    ///
    /// ```
    /// use strata::lists::LinkedList;
    /// let list = LinkedList::<u8>::new();
    /// assert!(list.is_empty());
    /// assert!(!list.is_circular());
    /// ```
    pub fn new() -> LinkedList<T> {
        LinkedList {
            head: ptr::null_mut(),
            tail: ptr::null_mut(),
            len: 0,
            circular: false,
        }
    }

    /// Creates an empty circular linked list. Every element added to
    /// this list keeps the tail linked back to the head.
    ///
    /// # Examples
    ///
    /// ```
    /// use strata::lists::LinkedList;
    /// let list = LinkedList::<u8>::circular();
    /// assert!(list.is_empty());
    /// assert!(list.is_circular());
    /// ```
    pub fn circular() -> LinkedList<T> {
        LinkedList {
            circular: true,
            ..LinkedList::new()
        }
    }

    /// Returns an iterator over the list from head to tail.
    ///
    /// # Examples
    /// ```
    /// use strata::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// list.prepend(1);
    /// list.prepend(2);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns an iterator over the list with mutable references that
    /// allows the values to be modified.
    ///
    /// # Examples
    /// ```
    /// use strata::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// list.append(1);
    /// list.append(2);
    ///
    /// for e in list.iter_mut() {
    ///     *e *= 10;
    /// }
    /// assert_eq!(list.to_vec(), vec![10, 20]);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Returns the number of elements in the list.
    ///
    /// This method should complete in *O*(*1*) time.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list is empty.
    ///
    /// This method should complete in *O*(*1*) time.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the tail of the list links back to the head.
    pub fn is_circular(&self) -> bool {
        self.circular
    }

    /// Removes and drops all the elements from this list. The list
    /// keeps its circular or linear form.
    ///
    /// This method should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use strata::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::circular();
    /// list.append(1);
    /// list.append(2);
    ///
    /// list.clear();
    /// assert!(list.is_empty());
    /// assert!(list.is_circular());
    /// ```
    pub fn clear(&mut self) {
        let mut cur = self.head;
        for _ in 0..self.len {
            unsafe {
                let next = (*cur).next;
                drop(ListNode::free(cur));
                cur = next;
            }
        }
        self.head = ptr::null_mut();
        self.tail = ptr::null_mut();
        self.len = 0;
    }

    /// Adds an element to the end (tail) of the list.
    ///
    /// This operation should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use strata::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// list.append(1);
    /// list.append(2);
    /// assert_eq!(list.get_last(), Some(&2));
    /// ```
    pub fn append(&mut self, elem: T) {
        let raw_n = ListNode::alloc(elem);

        unsafe {
            if self.tail.is_null() {
                self.head = raw_n;
            } else {
                (*self.tail).next = raw_n;
            }
            self.tail = raw_n;
            self.link_tail();
        }
        self.len += 1;
    }

    /// Adds an element to the front (head) of the list.
    ///
    /// This operation should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use strata::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// list.prepend(1);
    /// list.prepend(2);
    /// assert_eq!(list.get_first(), Some(&2));
    /// ```
    pub fn prepend(&mut self, elem: T) {
        let raw_n = ListNode::alloc(elem);

        unsafe {
            (*raw_n).next = self.head;
            if self.tail.is_null() {
                self.tail = raw_n;
            }
            self.head = raw_n;
            self.link_tail();
        }
        self.len += 1;
    }

    /// Inserts an element so that it ends up at the specified
    /// index. An index of 0 prepends and an index equal to
    /// [`len()`](#method.len) appends. Any larger index leaves the
    /// list untouched and hands the element back inside the error.
    ///
    /// This operation should complete in *O*(*i*) time.
    ///
    /// # Examples
    /// ```
    /// use strata::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// list.append(1);
    /// list.append(3);
    ///
    /// assert!(list.insert_at(1, 2).is_ok());
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    ///
    /// let err = list.insert_at(9, 4).unwrap_err();
    /// assert_eq!(err.into_inner(), 4);
    /// assert_eq!(list.len(), 3);
    /// ```
    pub fn insert_at(&mut self, index: usize, elem: T) -> Result<(), IndexError<T>> {
        if index > self.len {
            debug!(index, len = self.len, "list insert index out of bounds");
            return Err(IndexError::new(index, self.len, elem));
        }
        if index == 0 {
            self.prepend(elem);
            return Ok(());
        }
        if index == self.len {
            self.append(elem);
            return Ok(());
        }

        let prev = self.ptr_at(index - 1);
        let raw_n = ListNode::alloc(elem);
        unsafe {
            (*raw_n).next = (*prev).next;
            (*prev).next = raw_n;
        }
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at the head of the list or
    /// `None` if the list is empty.
    ///
    /// This operation should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use strata::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// assert_eq!(list.remove_first(), None);
    ///
    /// list.append(1);
    /// list.append(2);
    /// assert_eq!(list.remove_first(), Some(1));
    /// assert_eq!(list.remove_first(), Some(2));
    /// assert_eq!(list.remove_first(), None);
    /// ```
    pub fn remove_first(&mut self) -> Option<T> {
        if self.head.is_null() {
            return None;
        }

        let ptr = self.head;
        unsafe {
            if self.head == self.tail {
                self.head = ptr::null_mut();
                self.tail = ptr::null_mut();
            } else {
                self.head = (*ptr).next;
                self.link_tail();
            }
            self.len -= 1;
            Some(ListNode::free(ptr))
        }
    }

    /// Removes and returns the element at the tail of the list or
    /// `None` if the list is empty.
    ///
    /// The list has no back links so this operation walks the list to
    /// find the new tail and should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use strata::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// assert_eq!(list.remove_last(), None);
    ///
    /// list.append(1);
    /// list.append(2);
    /// assert_eq!(list.remove_last(), Some(2));
    /// assert_eq!(list.remove_last(), Some(1));
    /// assert_eq!(list.remove_last(), None);
    /// ```
    pub fn remove_last(&mut self) -> Option<T> {
        if self.tail.is_null() {
            return None;
        }
        if self.head == self.tail {
            return self.remove_first();
        }

        let prev = self.ptr_at(self.len - 2);
        Some(unsafe { self.unlink_next(prev) })
    }

    /// Removes and returns the element at the specified index or
    /// `None` if the index is out of bounds.
    ///
    /// This operation should complete in *O*(*i*) time.
    ///
    /// # Examples
    /// ```
    /// use strata::lists::LinkedList;
    /// let mut list: LinkedList<u8> = (1..=4).collect();
    ///
    /// assert_eq!(list.remove_at(1), Some(2));
    /// assert_eq!(list.remove_at(3), None);
    /// assert_eq!(list.to_vec(), vec![1, 3, 4]);
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        if index == 0 {
            return self.remove_first();
        }

        let prev = self.ptr_at(index - 1);
        Some(unsafe { self.unlink_next(prev) })
    }

    /// Removes the first element, scanning from the head, that is
    /// equal to the specified value. Returns true if an element was
    /// removed. Later elements with the same value are kept.
    ///
    /// This operation should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use strata::lists::LinkedList;
    /// let mut list: LinkedList<u8> = vec![1, 2, 1].into_iter().collect();
    ///
    /// assert!(list.remove(&1));
    /// assert_eq!(list.to_vec(), vec![2, 1]);
    /// assert!(!list.remove(&7));
    /// ```
    pub fn remove(&mut self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        if self.head.is_null() {
            return false;
        }

        unsafe {
            if (*self.head).val == *x {
                self.remove_first();
                return true;
            }

            // Walk the remaining len - 1 successors so that a circular
            // list stops before it gets back to the head.
            let mut prev = self.head;
            for _ in 1..self.len {
                let cur = (*prev).next;
                if (*cur).val == *x {
                    drop(self.unlink_next(prev));
                    return true;
                }
                prev = cur;
            }
        }
        false
    }

    /// Returns a reference to the element at the specified index or
    /// `None` if the index is out of bounds.
    ///
    /// This operation should complete in *O*(*i*) time.
    ///
    /// # Examples
    /// ```
    /// use strata::lists::LinkedList;
    /// let list: LinkedList<u8> = (10..13).collect();
    /// assert_eq!(list.get(1), Some(&11));
    /// assert_eq!(list.get(3), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        unsafe { Some(&(*self.ptr_at(index)).val) }
    }

    /// Returns a mutable reference to the element at the specified
    /// index or `None` if the index is out of bounds.
    ///
    /// This operation should complete in *O*(*i*) time.
    ///
    /// # Examples
    /// ```
    /// use strata::lists::LinkedList;
    /// let mut list: LinkedList<u8> = (10..13).collect();
    /// if let Some(x) = list.get_mut(1) {
    ///     *x = 100;
    /// }
    /// assert_eq!(list.get(1), Some(&100));
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        unsafe { Some(&mut (*self.ptr_at(index)).val) }
    }

    /// Returns a reference to the head of the list or `None` if the
    /// list is empty.
    ///
    /// This method should complete in *O*(*1*) time.
    pub fn get_first(&self) -> Option<&T> {
        if self.head.is_null() {
            return None;
        }
        unsafe { Some(&(*self.head).val) }
    }

    /// Returns a reference to the tail of the list or `None` if the
    /// list is empty.
    ///
    /// This method should complete in *O*(*1*) time.
    pub fn get_last(&self) -> Option<&T> {
        if self.tail.is_null() {
            return None;
        }
        unsafe { Some(&(*self.tail).val) }
    }

    /// Returns `true` if the list contains an element equal to the
    /// given value.
    ///
    /// This operation should complete in *O*(*n*) time
    ///
    /// # Examples
    ///
    /// ```
    /// use strata::lists::LinkedList;
    /// let list: LinkedList<u8> = (0..3).collect();
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Returns the index of the first element equal to the given
    /// value or `None` if there is no such element.
    ///
    /// This operation should complete in *O*(*n*) time
    ///
    /// # Examples
    ///
    /// ```
    /// use strata::lists::LinkedList;
    /// let list: LinkedList<u8> = vec![5, 6, 5].into_iter().collect();
    ///
    /// assert_eq!(list.index_of(&5), Some(0));
    /// assert_eq!(list.index_of(&6), Some(1));
    /// assert_eq!(list.index_of(&7), None);
    /// ```
    pub fn index_of(&self, x: &T) -> Option<usize>
    where
        T: PartialEq<T>,
    {
        self.iter().position(|e| e == x)
    }

    /// Returns the first node holding a value equal to the given
    /// value or `None` if there is no such node. The returned node
    /// borrows the list.
    ///
    /// This operation should complete in *O*(*n*) time
    ///
    /// # Examples
    ///
    /// ```
    /// use strata::lists::LinkedList;
    /// let list: LinkedList<u8> = (1..4).collect();
    ///
    /// let node = list.find(&2).unwrap();
    /// assert_eq!(node.value(), &2);
    /// assert_eq!(node.next().map(|n| n.value()), Some(&3));
    /// assert!(list.find(&9).is_none());
    /// ```
    pub fn find(&self, x: &T) -> Option<&ListNode<T>>
    where
        T: PartialEq<T>,
    {
        let mut cur = self.head;
        for _ in 0..self.len {
            unsafe {
                if (*cur).val == *x {
                    return Some(&*cur);
                }
                cur = (*cur).next;
            }
        }
        None
    }

    /// Reverses the order of the elements in place. A circular list
    /// stays circular.
    ///
    /// This operation should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use strata::lists::LinkedList;
    /// let mut list: LinkedList<u8> = (1..4).collect();
    /// list.make_circular();
    ///
    /// list.reverse();
    /// assert_eq!(list.to_vec(), vec![3, 2, 1]);
    /// assert!(list.is_circular());
    /// ```
    pub fn reverse(&mut self) {
        if self.head == self.tail {
            return;
        }

        let was_circular = self.circular;
        self.break_circle();

        let mut prev: *mut ListNode<T> = ptr::null_mut();
        let mut cur = self.head;
        self.tail = self.head;
        unsafe {
            while !cur.is_null() {
                let next = (*cur).next;
                (*cur).next = prev;
                prev = cur;
                cur = next;
            }
        }
        self.head = prev;

        if was_circular {
            self.make_circular();
        }
    }

    /// Links the tail back to the head. Has no effect if the list is
    /// already circular.
    ///
    /// This method should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use strata::lists::LinkedList;
    /// let mut list: LinkedList<u8> = (1..3).collect();
    /// list.make_circular();
    /// assert!(list.is_circular());
    ///
    /// let tail = list.find(&2).unwrap();
    /// assert_eq!(tail.next().map(|n| n.value()), Some(&1));
    /// ```
    pub fn make_circular(&mut self) {
        if self.circular {
            return;
        }
        self.circular = true;
        unsafe {
            self.link_tail();
        }
        trace!(len = self.len, "list made circular");
    }

    /// Unlinks the tail from the head. Has no effect if the list is
    /// already linear.
    ///
    /// This method should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use strata::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::circular();
    /// list.append(1);
    /// list.break_circle();
    /// assert!(!list.is_circular());
    /// assert!(list.find(&1).unwrap().next().is_none());
    /// ```
    pub fn break_circle(&mut self) {
        if !self.circular {
            return;
        }
        self.circular = false;
        unsafe {
            self.link_tail();
        }
        trace!(len = self.len, "list circle broken");
    }

    /// Returns a vector holding clones of the elements in order from
    /// head to tail. The vector is independent of the list.
    ///
    /// This operation should complete in *O*(*n*) time.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Calls the closure on each element in order from head to tail.
    ///
    /// # Examples
    /// ```
    /// use strata::lists::LinkedList;
    /// let list: LinkedList<u32> = (1..4).collect();
    /// let mut sum = 0u32;
    /// list.for_each(|e| sum += e);
    /// assert_eq!(sum, 6);
    /// ```
    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(f);
    }

    ////////////////////
    //Private Helpers
    ////////////////////

    /// Sets the `next` link of the tail to the head if the list is
    /// circular and to null otherwise. Does nothing on an empty list.
    unsafe fn link_tail(&mut self) {
        if self.tail.is_null() {
            return;
        }
        (*self.tail).next = if self.circular {
            self.head
        } else {
            ptr::null_mut()
        };
    }

    /// Returns the raw pointer to the node at the specified
    /// index. The index must be less than the length of the list.
    fn ptr_at(&self, index: usize) -> *mut ListNode<T> {
        debug_assert!(index < self.len);
        let mut cur = self.head;
        for _ in 0..index {
            unsafe {
                cur = (*cur).next;
            }
        }
        cur
    }

    /// Unlinks and frees the node immediately after `prev` and
    /// returns its value. The node after `prev` must not be the head,
    /// so `prev` can never be the tail.
    unsafe fn unlink_next(&mut self, prev: *mut ListNode<T>) -> T {
        let target = (*prev).next;
        (*prev).next = (*target).next;
        if self.tail == target {
            self.tail = prev;
        }
        self.len -= 1;
        ListNode::free(target)
    }
}
