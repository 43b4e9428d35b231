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

//! A binary tree filled in level order. This is not a search tree:
//! values are never compared on insert. Breadth-first walks are
//! driven by the [`Queue`](crate::queue::queue::Queue) of this crate.
pub mod iter;
pub mod node;
pub mod tree;
