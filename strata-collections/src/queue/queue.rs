/*
   Queue: A first in first out sequence that can optionally be
   bounded by a capacity. Enqueueing into a full bounded queue is
   rejected and the element is handed back to the caller.

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

use crate::queue::{error::CapacityError, iter::IntoIter, iter::Iter};
use core::fmt;
use core::iter::FromIterator;
use std::collections::VecDeque;
use tracing::debug;

/// A first in first out queue that can optionally be bounded by a
/// capacity.
///
/// Elements are enqueued at the tail and dequeued from the head in
/// constant time. An unbounded queue accepts every element. A bounded
/// queue rejects an element when it already holds `capacity`
/// elements and hands the element back inside a
/// [`CapacityError`](../error/struct.CapacityError.html), leaving
/// the queue unchanged.
///
/// Collecting an iterator into a `Queue` yields an unbounded queue.
/// Use [`enqueue_all()`](#method.enqueue_all) to fill a bounded one.
///
/// # Getting Started
///
/// ```
/// use strata::collections::Queue;
///
/// let mut queue = Queue::bounded(2);
/// assert!(queue.enqueue(1).is_ok());
/// assert!(queue.enqueue(2).is_ok());
/// assert!(queue.enqueue(3).is_err());
/// assert!(queue.is_full());
///
/// assert_eq!(queue.dequeue(), Some(1));
/// assert_eq!(queue.dequeue(), Some(2));
/// assert_eq!(queue.dequeue(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    elems: VecDeque<T>,
    // 0 means unbounded
    capacity: usize,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Queue::new()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.elems.into_iter())
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            elems: iter.into_iter().collect(),
            capacity: 0,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Queue[")?;
        for (i, e) in self.elems.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", e)?;
        }
        write!(f, "]")?;
        if self.capacity > 0 {
            write!(f, " ({}/{})", self.elems.len(), self.capacity)?;
        }
        Ok(())
    }
}

impl<T> Queue<T> {
    /// Creates an empty unbounded queue.
    ///
    /// # Examples
    /// ```
    /// use strata::collections::Queue;
    /// let queue = Queue::<u8>::new();
    /// assert!(queue.is_empty());
    /// assert_eq!(queue.capacity(), None);
    /// ```
    pub fn new() -> Queue<T> {
        Queue {
            elems: VecDeque::new(),
            capacity: 0,
        }
    }

    /// Creates an empty queue that holds at most `capacity`
    /// elements. A capacity of 0 creates an unbounded queue.
    ///
    /// # Examples
    /// ```
    /// use strata::collections::Queue;
    /// let queue = Queue::<u8>::bounded(5);
    /// assert_eq!(queue.capacity(), Some(5));
    /// assert!(!queue.is_full());
    ///
    /// let queue = Queue::<u8>::bounded(0);
    /// assert_eq!(queue.capacity(), None);
    /// ```
    pub fn bounded(capacity: usize) -> Queue<T> {
        Queue {
            elems: VecDeque::new(),
            capacity,
        }
    }

    /// Returns the capacity of a bounded queue or `None` if the queue
    /// is unbounded.
    pub fn capacity(&self) -> Option<usize> {
        if self.capacity == 0 {
            None
        } else {
            Some(self.capacity)
        }
    }

    /// Returns the number of elements in the queue.
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    /// Returns true if the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// Returns true if the queue is bounded and holds as many
    /// elements as its capacity. An unbounded queue is never full.
    ///
    /// # Examples
    /// ```
    /// use strata::collections::Queue;
    /// let mut queue = Queue::bounded(1);
    /// assert!(!queue.is_full());
    /// queue.enqueue(1).unwrap();
    /// assert!(queue.is_full());
    /// ```
    pub fn is_full(&self) -> bool {
        self.capacity > 0 && self.elems.len() >= self.capacity
    }

    /// Removes and drops all the elements. The capacity is kept.
    pub fn clear(&mut self) {
        self.elems.clear();
    }

    /// Returns an iterator over the queue from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.elems.iter())
    }

    /// Adds an element to the tail of the queue.
    ///
    /// If the queue is bounded and full the queue is left unchanged
    /// and the element is returned inside the error.
    ///
    /// This operation should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use strata::collections::Queue;
    /// let mut queue = Queue::bounded(1);
    /// assert!(queue.enqueue("a").is_ok());
    /// assert_eq!(queue.enqueue("b").unwrap_err().into_inner(), "b");
    /// assert_eq!(queue.len(), 1);
    /// ```
    pub fn enqueue(&mut self, elem: T) -> Result<(), CapacityError<T>> {
        if self.is_full() {
            debug!(
                capacity = self.capacity,
                len = self.elems.len(),
                "queue at capacity, rejecting element"
            );
            return Err(CapacityError::new(self.capacity, elem));
        }
        self.elems.push_back(elem);
        Ok(())
    }

    /// Enqueues the elements in order until the iterator is exhausted
    /// or the queue rejects an element, and returns the number of
    /// elements enqueued. The rejected element is dropped and the
    /// rest of the iterator is not consumed.
    ///
    /// # Examples
    /// ```
    /// use strata::collections::Queue;
    /// let mut queue = Queue::bounded(3);
    /// assert_eq!(queue.enqueue_all(1..=5), 3);
    /// assert_eq!(queue.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn enqueue_all<I>(&mut self, elems: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let mut accepted = 0;
        for elem in elems {
            if self.enqueue(elem).is_err() {
                debug!(accepted, "enqueue_all stopped at capacity");
                break;
            }
            accepted += 1;
        }
        accepted
    }

    /// Removes and returns the element at the head of the queue or
    /// `None` if the queue is empty.
    ///
    /// This operation should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use strata::collections::Queue;
    /// let mut queue: Queue<u8> = (1..3).collect();
    /// assert_eq!(queue.dequeue(), Some(1));
    /// assert_eq!(queue.dequeue(), Some(2));
    /// assert_eq!(queue.dequeue(), None);
    /// ```
    pub fn dequeue(&mut self) -> Option<T> {
        self.elems.pop_front()
    }

    /// Removes up to `n` elements from the head of the queue and
    /// returns them in order. Returns `None` only if the queue is
    /// empty; asking for more elements than the queue holds returns
    /// all of them.
    ///
    /// This operation should complete in *O*(*k*) time where *k* is
    /// the number of elements removed.
    ///
    /// # Examples
    /// ```
    /// use strata::collections::Queue;
    /// let mut queue: Queue<u8> = (1..4).collect();
    /// assert_eq!(queue.dequeue_n(2), Some(vec![1, 2]));
    /// assert_eq!(queue.dequeue_n(5), Some(vec![3]));
    /// assert_eq!(queue.dequeue_n(1), None);
    /// ```
    pub fn dequeue_n(&mut self, n: usize) -> Option<Vec<T>> {
        if self.elems.is_empty() {
            return None;
        }
        let count = n.min(self.elems.len());
        Some(self.elems.drain(..count).collect())
    }

    /// Returns a reference to the element at the head of the queue or
    /// `None` if the queue is empty.
    pub fn peek(&self) -> Option<&T> {
        self.elems.front()
    }

    /// Returns a reference to the element at the tail of the queue or
    /// `None` if the queue is empty.
    ///
    /// # Examples
    /// ```
    /// use strata::collections::Queue;
    /// let queue: Queue<u8> = (10..13).collect();
    /// assert_eq!(queue.peek(), Some(&10));
    /// assert_eq!(queue.peek_last(), Some(&12));
    /// assert_eq!(queue.len(), 3);
    /// ```
    pub fn peek_last(&self) -> Option<&T> {
        self.elems.back()
    }

    /// Returns `true` if the queue contains an element equal to the
    /// given value.
    ///
    /// This operation should complete in *O*(*n*) time
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.elems.contains(x)
    }

    /// Returns a vector holding clones of the elements from head to
    /// tail. The vector is independent of the queue.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.elems.iter().cloned().collect()
    }

    /// Calls the closure on each element from head to tail without
    /// removing anything.
    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(&T),
    {
        self.elems.iter().for_each(f);
    }

    /// Returns a new queue with the same capacity holding clones of
    /// the elements for which the predicate returns true, in their
    /// original order. This queue is not modified.
    ///
    /// # Examples
    /// ```
    /// use strata::collections::Queue;
    /// let mut queue = Queue::bounded(10);
    /// queue.enqueue_all(1..=6);
    ///
    /// let even = queue.filter(|e| e % 2 == 0);
    /// assert_eq!(even.to_vec(), vec![2, 4, 6]);
    /// assert_eq!(even.capacity(), Some(10));
    /// assert_eq!(queue.len(), 6);
    /// ```
    pub fn filter<F>(&self, mut f: F) -> Queue<T>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        Queue {
            elems: self.elems.iter().filter(|e| f(*e)).cloned().collect(),
            capacity: self.capacity,
        }
    }

    /// Adds an element to the tail of an unbounded work queue. Used by
    /// the tree walks, which never bound their queues.
    pub(crate) fn push(&mut self, elem: T) {
        debug_assert!(self.capacity == 0);
        self.elems.push_back(elem);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;
    use tracing_test::traced_test;

    macro_rules! assert_queue {
        ($q:ident, [$($val:expr),*]) => {
            let expected: Vec<i32> = vec![$($val),*];
            assert_eq!($q.to_vec(), expected);
            assert_eq!($q.len(), expected.len());
            assert_eq!($q.is_empty(), expected.is_empty());
            assert_eq!($q.peek(), expected.first());
            assert_eq!($q.peek_last(), expected.last());
            if let Some(cap) = $q.capacity() {
                assert!($q.len() <= cap);
            }
        };
    }

    #[test]
    fn test_new() {
        let q = Queue::<i32>::new();
        assert_queue!(q, []);
        assert_eq!(q.capacity(), None);
        assert!(!q.is_full());

        let q = Queue::<i32>::bounded(5);
        assert_queue!(q, []);
        assert_eq!(q.capacity(), Some(5));
        assert!(!q.is_full());
    }

    #[test]
    fn test_enqueue() {
        let mut q = Queue::new();
        for i in 1..=3 {
            assert!(q.enqueue(i).is_ok());
        }
        assert_queue!(q, [1, 2, 3]);
        assert!(!q.is_full());
    }

    #[test]
    fn test_enqueue_bounded() {
        let mut q = Queue::bounded(2);
        assert!(q.enqueue(1).is_ok());
        assert!(!q.is_full());
        assert!(q.enqueue(2).is_ok());
        assert!(q.is_full());

        let err = q.enqueue(3).unwrap_err();
        assert_eq!(err.capacity(), 2);
        assert_eq!(err.into_inner(), 3);
        assert_queue!(q, [1, 2]);
        assert!(q.is_full());

        // room frees up once an element is dequeued
        assert_eq!(q.dequeue(), Some(1));
        assert!(q.enqueue(3).is_ok());
        assert_queue!(q, [2, 3]);
    }

    #[test]
    fn test_dequeue() {
        let mut q: Queue<i32> = (1..=3).collect();
        assert_eq!(q.dequeue(), Some(1));
        assert_queue!(q, [2, 3]);
        assert_eq!(q.dequeue(), Some(2));
        assert_eq!(q.dequeue(), Some(3));
        assert_queue!(q, []);
        assert_eq!(q.dequeue(), None);
    }

    #[test]
    fn test_enqueue_all() {
        let mut q = Queue::new();
        assert_eq!(q.enqueue_all(vec![1, 2, 3, 4, 5]), 5);
        assert_queue!(q, [1, 2, 3, 4, 5]);

        let mut q = Queue::bounded(3);
        assert!(q.enqueue(0).is_ok());
        assert_eq!(q.enqueue_all(vec![1, 2, 3, 4, 5]), 2);
        assert_queue!(q, [0, 1, 2]);
        assert!(q.is_full());
        assert_eq!(q.enqueue_all(vec![9]), 0);
    }

    #[test]
    fn test_enqueue_all_stops_at_first_rejection() {
        let mut q = Queue::bounded(2);
        let mut source = vec![1, 2, 3, 4].into_iter();
        assert_eq!(q.enqueue_all(&mut source), 2);
        // 3 was offered and rejected, 4 was never pulled
        assert_eq!(source.next(), Some(4));
    }

    #[test]
    fn test_dequeue_n() {
        let mut q = Queue::new();
        assert_eq!(q.dequeue_n(3), None);

        q.enqueue_all(1..=5);
        assert_eq!(q.dequeue_n(3), Some(vec![1, 2, 3]));
        assert_queue!(q, [4, 5]);
        assert_eq!(q.dequeue_n(0), Some(vec![]));
        assert_queue!(q, [4, 5]);
        assert_eq!(q.dequeue_n(5), Some(vec![4, 5]));
        assert_queue!(q, []);
        assert_eq!(q.dequeue_n(1), None);
    }

    #[test]
    fn test_contains() {
        let q: Queue<i32> = vec![10, 20, 30].into_iter().collect();
        assert!(q.contains(&20));
        assert!(!q.contains(&40));
    }

    #[test]
    fn test_to_vec_is_independent() {
        let mut q: Queue<i32> = (1..=3).collect();
        let mut v = q.to_vec();
        v.push(4);
        q.dequeue();
        assert_eq!(v, vec![1, 2, 3, 4]);
        assert_queue!(q, [2, 3]);
    }

    #[test]
    fn test_clone() {
        let mut q = Queue::bounded(3);
        q.enqueue_all(vec![1, 2, 3]);
        let mut copy = q.clone();
        assert!(copy.is_full());
        assert_eq!(copy.capacity(), Some(3));
        assert_eq!(copy.dequeue(), Some(1));
        assert_queue!(copy, [2, 3]);
        assert_queue!(q, [1, 2, 3]);
    }

    #[test]
    fn test_for_each() {
        let q: Queue<i32> = (1..=4).collect();
        let mut sum = 0;
        q.for_each(|e| sum += e);
        assert_eq!(sum, 10);
        assert_queue!(q, [1, 2, 3, 4]);
    }

    #[test]
    fn test_filter() {
        let mut q = Queue::bounded(8);
        q.enqueue_all(1..=6);
        let odd = q.filter(|e| e % 2 == 1);
        assert_queue!(odd, [1, 3, 5]);
        assert_eq!(odd.capacity(), Some(8));
        assert_queue!(q, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_clear() {
        let mut q = Queue::bounded(2);
        q.enqueue_all(vec![1, 2]);
        q.clear();
        assert_queue!(q, []);
        assert_eq!(q.capacity(), Some(2));
    }

    #[test]
    fn test_iter() {
        let q: Queue<i32> = (1..=3).collect();
        assert_eq!(q.iter().len(), 3);
        assert_eq!(q.iter().rev().collect::<Vec<_>>(), vec![&3, &2, &1]);
        assert_eq!((&q).into_iter().count(), 3);
        assert_eq!(q.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_fmt() {
        let q: Queue<i32> = (1..=3).collect();
        assert_eq!(q.to_string(), "Queue[1, 2, 3]");
        let mut q = Queue::bounded(4);
        q.enqueue_all(vec![1, 2]);
        assert_eq!(q.to_string(), "Queue[1, 2] (2/4)");
        assert_eq!(Queue::<i32>::new().to_string(), "Queue[]");
    }

    #[test]
    fn test_with_structs() {
        #[derive(Debug, Clone, PartialEq)]
        struct Job {
            id: u32,
            name: String,
        }

        let mut q = Queue::new();
        q.enqueue_all((0..3).map(|id| Job {
            id,
            name: format!("job-{}", id),
        }));
        assert!(q.contains(&Job {
            id: 1,
            name: "job-1".to_string()
        }));
        assert_eq!(q.dequeue().map(|j| j.name), Some("job-0".to_string()));
    }

    #[test]
    #[traced_test]
    fn test_logs() {
        let mut q = Queue::bounded(1);
        assert_eq!(q.enqueue_all(vec![1, 2]), 1);
        assert!(logs_contain("queue at capacity, rejecting element"));
        assert!(logs_contain("enqueue_all stopped at capacity"));
    }

    proptest! {
        #[test]
        fn prop_fifo_order(vals in prop::collection::vec(any::<i32>(), 0..64)) {
            let mut q = Queue::new();
            prop_assert_eq!(q.enqueue_all(vals.clone()), vals.len());
            let mut out = Vec::new();
            while let Some(v) = q.dequeue() {
                out.push(v);
            }
            prop_assert_eq!(out, vals);
        }

        #[test]
        fn prop_bounded_never_exceeds_capacity(
            cap in 1..16usize,
            ops in prop::collection::vec(prop::option::of(any::<i32>()), 0..64),
        ) {
            let mut q = Queue::bounded(cap);
            for op in ops {
                match op {
                    Some(v) => {
                        let was_full = q.is_full();
                        prop_assert_eq!(q.enqueue(v).is_err(), was_full);
                    }
                    None => {
                        q.dequeue();
                    }
                }
                prop_assert!(q.len() <= cap);
                prop_assert_eq!(q.is_full(), q.len() == cap);
            }
        }

        #[test]
        fn prop_dequeue_n_takes_min(
            vals in prop::collection::vec(any::<i32>(), 0..32),
            n in 0..40usize,
        ) {
            let mut q: Queue<i32> = vals.iter().cloned().collect();
            match q.dequeue_n(n) {
                None => prop_assert!(vals.is_empty()),
                Some(taken) => {
                    let k = n.min(vals.len());
                    prop_assert_eq!(&taken[..], &vals[..k]);
                    prop_assert_eq!(q.to_vec(), vals[k..].to_vec());
                }
            }
        }
    }
}
