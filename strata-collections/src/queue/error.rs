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

use core::fmt;

/// Error returned by [`enqueue()`](../queue/struct.Queue.html#method.enqueue)
/// when a bounded queue is already at capacity. Contains the element
/// that could not be enqueued.
///
/// # Examples
/// ```
/// use strata::collections::Queue;
/// let mut queue = Queue::bounded(1);
/// assert!(queue.enqueue(1).is_ok());
///
/// let err = queue.enqueue(2).unwrap_err();
/// assert_eq!(err.capacity(), 1);
/// assert_eq!(err.into_inner(), 2);
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CapacityError<T> {
    capacity: usize,
    val: T,
}

impl<T> CapacityError<T> {
    pub(super) fn new(capacity: usize, val: T) -> CapacityError<T> {
        CapacityError { capacity, val }
    }

    /// Returns the capacity of the queue that rejected the element.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the element that could not be enqueued.
    pub fn into_inner(self) -> T {
        self.val
    }
}

impl<T> fmt::Display for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "queue is full (capacity {})", self.capacity)
    }
}

impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapacityError")
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

impl<T> std::error::Error for CapacityError<T> {}
