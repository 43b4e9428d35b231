//! Small generic containers with simple, well tested semantics: a
//! singly linked list that can be made circular, a FIFO queue that
//! can be bounded, and a binary tree filled in level order.
//!
//! None of the containers lock internally. Callers that share one
//! across threads must wrap the whole container in their own lock.

/// List data structures
pub mod lists {
    pub use strata_lists::linkedlist::list::LinkedList;
    /// This module contains structs specific to the [`LinkedList`]
    pub mod linkedlist {
        pub use strata_lists::linkedlist::error::IndexError;
        pub use strata_lists::linkedlist::iter::Iter;
        pub use strata_lists::linkedlist::iter::IterMut;
        pub use strata_lists::linkedlist::node::ListNode;
    }
}

/// Queue and tree collections
pub mod collections {
    /// This module contains structs specific to the [`Queue`](Queue)
    pub mod queue {
        /// Error returned when a bounded [`Queue`](super::Queue) is
        /// full. Holds the rejected element.
        pub use strata_collections::queue::error::CapacityError;
        /// An owning iterator over the elements of a
        /// [`Queue`](super::Queue).
        pub use strata_collections::queue::iter::IntoIter;
        /// An iterator over the elements of a [`Queue`](super::Queue).
        pub use strata_collections::queue::iter::Iter;
    }

    /// This module contains structs specific to the [`Tree`](Tree)
    pub mod tree {
        /// A level order iterator over the values of a
        /// [`Tree`](super::Tree).
        pub use strata_collections::tree::iter::Iter;
    }

    pub use strata_collections::queue::queue::Queue;
    pub use strata_collections::tree::node::TreeNode;
    pub use strata_collections::tree::tree::Tree;
}
