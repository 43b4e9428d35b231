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

use core::fmt;

/// Error returned by
/// [`insert_at()`](../list/struct.LinkedList.html#method.insert_at)
/// when the index is past the end of the list. The element that could
/// not be inserted is handed back to the caller.
///
/// # Examples
/// ```
/// use strata::lists::LinkedList;
/// let mut list = LinkedList::<u8>::new();
/// let err = list.insert_at(3, 42).unwrap_err();
/// assert_eq!(err.index(), 3);
/// assert_eq!(err.list_len(), 0);
/// assert_eq!(err.into_inner(), 42);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct IndexError<T> {
    index: usize,
    len: usize,
    val: T,
}

impl<T> IndexError<T> {
    pub(super) fn new(index: usize, len: usize, val: T) -> IndexError<T> {
        IndexError { index, len, val }
    }

    /// Returns the index that was out of bounds.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the length of the list at the time of the failed
    /// insert.
    pub fn list_len(&self) -> usize {
        self.len
    }

    /// Returns the element that could not be inserted.
    pub fn into_inner(self) -> T {
        self.val
    }
}

impl<T> fmt::Display for IndexError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {} is out of bounds for a list of length {}",
            self.index, self.len
        )
    }
}

impl<T> fmt::Debug for IndexError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexError")
            .field("index", &self.index)
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

impl<T> std::error::Error for IndexError<T> {}
