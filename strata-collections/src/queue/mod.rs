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

//! A first in first out queue backed by a ring buffer. A queue
//! created with [`Queue::bounded`](queue::Queue::bounded) never holds
//! more elements than its capacity.
pub mod error;
pub mod iter;
pub mod queue;
