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

use std::collections::vec_deque;

macro_rules! queue_iter {
    ($(#[$meta:meta])* $iter_name: ident, $inner: ty, $item: ty $(, $lt: lifetime)?) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $iter_name<$($lt,)? T> {
            inner: $inner,
        }

        impl<$($lt,)? T> $iter_name<$($lt,)? T> {
            pub(super) fn new(inner: $inner) -> Self {
                $iter_name { inner }
            }
        }

        impl<$($lt,)? T> Iterator for $iter_name<$($lt,)? T> {
            type Item = $item;
            fn next(&mut self) -> Option<Self::Item> {
                self.inner.next()
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.inner.size_hint()
            }
        }

        impl<$($lt,)? T> DoubleEndedIterator for $iter_name<$($lt,)? T> {
            fn next_back(&mut self) -> Option<Self::Item> {
                self.inner.next_back()
            }
        }

        impl<$($lt,)? T> ExactSizeIterator for $iter_name<$($lt,)? T> {}
    };
}

queue_iter!(
    /// An iterator over the elements of the
    /// [`Queue`](../queue/struct.Queue.html) from head to tail.
    ///
    /// This struct is created by the
    /// [`.iter()`](../queue/struct.Queue.html#method.iter) method.
    ///
    /// # Examples
    /// ```
    /// use strata::collections::Queue;
    /// use strata::collections::queue::Iter;
    ///
    /// let queue: Queue<u8> = (1..4).collect();
    /// let mut iter: Iter<u8> = queue.iter();
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next_back(), Some(&3));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    Iter,
    vec_deque::Iter<'a, T>,
    &'a T,
    'a
);

queue_iter!(
    /// An owning iterator that dequeues the elements of the
    /// [`Queue`](../queue/struct.Queue.html) from head to tail.
    ///
    /// This struct is created by calling `into_iter()` on a queue.
    IntoIter,
    vec_deque::IntoIter<T>,
    T
);
