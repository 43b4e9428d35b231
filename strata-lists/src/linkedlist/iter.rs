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
use crate::linkedlist::{list::LinkedList, node::ListNode};
use core::marker::PhantomData;

/// An iterator over the elements of the
/// [`LinkedList`](LinkedList) from head to tail.
///
/// This struct is created by the [`.iter()`](LinkedList#method.iter)
/// method of the [`LinkedList`](LinkedList). It yields exactly
/// [`len()`](LinkedList#method.len) elements, also when the list is
/// circular.
///
/// # Examples
/// ```
/// use strata::lists::LinkedList;
/// use strata::lists::linkedlist::Iter;
///
/// let mut list = LinkedList::<u8>::circular();
/// list.append(1);
/// list.append(2);
/// list.append(3);
///
/// let mut iter: Iter<u8> = list.iter();
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next(), Some(&3));
/// assert_eq!(iter.next(), None);
/// ```
#[derive(Debug)]
pub struct Iter<'a, T> {
    cursor: *const ListNode<T>,
    remaining: usize,
    marker: PhantomData<&'a ListNode<T>>,
}

/// An iterator over the elements of the [`LinkedList`] with mutable
/// references that allows the values to be modified in place.
///
/// This struct is created by the
/// [`.iter_mut()`](LinkedList#method.iter_mut) method of the
/// [`LinkedList`](LinkedList).
///
/// # Examples
/// ```
/// use strata::lists::LinkedList;
/// use strata::lists::linkedlist::IterMut;
///
/// let mut list = LinkedList::<u8>::new();
/// list.append(1);
/// list.append(2);
///
/// let iter_mut: IterMut<u8> = list.iter_mut();
/// for e in iter_mut {
///     *e += 100;
/// }
///
/// assert_eq!(list.to_vec(), vec![101, 102]);
/// ```
#[derive(Debug)]
pub struct IterMut<'a, T> {
    cursor: *mut ListNode<T>,
    remaining: usize,
    marker: PhantomData<&'a mut ListNode<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(list: &'a LinkedList<T>) -> Iter<'a, T> {
        Iter {
            cursor: list.head,
            remaining: list.len(),
            marker: PhantomData,
        }
    }
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut LinkedList<T>) -> IterMut<'a, T> {
        IterMut {
            cursor: list.head,
            remaining: list.len(),
            marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        unsafe {
            let node = &*self.cursor;
            self.cursor = node.next;
            self.remaining -= 1;
            Some(&node.val)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;
    fn next(&mut self) -> Option<&'a mut T> {
        if self.remaining == 0 {
            return None;
        }
        unsafe {
            let node = &mut *self.cursor;
            self.cursor = node.next;
            self.remaining -= 1;
            Some(&mut node.val)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}
