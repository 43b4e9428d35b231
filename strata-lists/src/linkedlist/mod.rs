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

//! A singly linked list that owns its nodes. Elements can be added
//! at either end in constant time and at any index in linear time.
//!
//! The list can be made circular at any time with
//! [`make_circular()`](list::LinkedList#method.make_circular), in
//! which case the tail links back to the head. That link is only used
//! for traversal: the list always walks exactly `len` nodes, so none
//! of the operations loop forever on a circular list.
//!
pub mod error;
pub mod iter;
pub mod list;
pub mod node;
