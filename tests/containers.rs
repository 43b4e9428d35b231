use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::collections::VecDeque;
use strata::collections::{Queue, Tree, TreeNode};
use strata::lists::LinkedList;

#[test]
fn list_append_and_prepend_order() {
    let mut appended = LinkedList::new();
    let mut prepended = LinkedList::new();
    for i in 0..5 {
        appended.append(i);
        prepended.prepend(i);
    }
    assert_eq!(appended.to_vec(), vec![0, 1, 2, 3, 4]);
    assert_eq!(prepended.to_vec(), vec![4, 3, 2, 1, 0]);
}

#[test]
fn circular_list_tail_links_to_head() {
    let mut list: LinkedList<u32> = (1..=4).collect();
    list.make_circular();
    list.make_circular();
    assert!(list.is_circular());

    list.remove_last();
    list.prepend(0);
    list.remove(&2);
    assert!(list.insert_at(2, 9).is_ok());
    assert_eq!(list.to_vec(), vec![0, 1, 9, 3]);

    let tail = list.find(list.get_last().unwrap()).unwrap();
    assert_eq!(tail.next().map(|n| *n.value()), list.get_first().copied());

    list.reverse();
    list.reverse();
    assert!(list.is_circular());
    assert_eq!(list.to_vec(), vec![0, 1, 9, 3]);

    list.break_circle();
    list.break_circle();
    let tail = list.find(&3).unwrap();
    assert!(tail.next().is_none());
}

#[test]
fn list_remove_takes_leftmost_duplicate() {
    let mut list: LinkedList<&str> = vec!["a", "b", "a", "c", "a"].into_iter().collect();
    assert!(list.remove(&"a"));
    assert_eq!(list.to_vec(), vec!["b", "a", "c", "a"]);
    assert_eq!(list.index_of(&"a"), Some(1));
}

#[test]
fn bounded_queue_rejects_past_capacity() {
    let mut queue = Queue::bounded(2);
    assert!(queue.enqueue(1).is_ok());
    assert!(queue.enqueue(2).is_ok());
    assert!(queue.enqueue(3).is_err());
    assert_eq!(queue.len(), 2);
    assert!(queue.is_full());
}

#[test]
fn dequeue_n_past_len_drains_queue() {
    let mut queue: Queue<u8> = (1..=3).collect();
    assert_eq!(queue.dequeue_n(10), Some(vec![1, 2, 3]));
    assert!(queue.is_empty());
    assert_eq!(queue.dequeue_n(10), None);
}

#[test]
fn tree_shape_after_five_inserts() {
    let mut tree = Tree::new();
    for i in 1..=5 {
        tree.insert(i);
    }
    assert_eq!(tree.level_order(), vec![&1, &2, &3, &4, &5]);
    assert_eq!(tree.in_order(), vec![&4, &2, &5, &1, &3]);
    assert_eq!(tree.pre_order(), vec![&1, &2, &4, &5, &3]);
    assert_eq!(tree.post_order(), vec![&4, &5, &2, &3, &1]);
    assert_eq!(tree.max_depth(), 3);
    assert_eq!(tree.min_depth(), 2);
    assert_eq!(tree.count_leaves(), 3);
    assert_eq!(tree.to_string(), "[1]\n[2, 3]\n[4, 5]\n");
}

#[test]
fn tree_with_structs() {
    #[derive(Debug, Clone, PartialEq)]
    struct Person {
        name: &'static str,
        age: u32,
    }

    let tree: Tree<Person> = vec![
        Person { name: "Alice", age: 30 },
        Person { name: "Bob", age: 25 },
    ]
    .into_iter()
    .collect();

    assert_eq!(tree.len(), 2);
    assert_eq!(tree.level_order()[0].name, "Alice");
    let bob = tree.search(&Person { name: "Bob", age: 25 }).unwrap();
    assert!(bob.is_leaf());
}

#[test]
fn manual_tree_keeps_filling_in_level_order() {
    let mut root = TreeNode::new('a');
    root.set_right(TreeNode::new('c'));
    let mut tree = Tree::from_root(root);
    assert_eq!(tree.len(), 2);

    // the free left slot of the root is taken first
    tree.insert('b');
    assert_eq!(tree.levels(), vec![vec![&'a'], vec![&'b', &'c']]);
}

#[test]
fn display_is_never_empty() {
    let list: LinkedList<u8> = LinkedList::new();
    let queue: Queue<u8> = Queue::new();
    let tree: Tree<u8> = Tree::new();
    assert!(!list.to_string().is_empty());
    assert!(!queue.to_string().is_empty());
    assert!(!tree.to_string().is_empty());
}

#[derive(Debug, Clone)]
enum Op {
    Push(u8),
    PushFront(u8),
    Pop,
    Remove(u8),
    Reverse,
    ToggleCircle,
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<u8>().prop_map(Op::Push),
        any::<u8>().prop_map(Op::PushFront),
        Just(Op::Pop),
        (0..8u8).prop_map(Op::Remove),
        Just(Op::Reverse),
        Just(Op::ToggleCircle),
        Just(Op::Clear),
    ]
}

/// Number of levels of a complete tree holding `n` nodes.
fn complete_depth(n: usize) -> usize {
    let mut depth = 0;
    while (1usize << depth) <= n {
        depth += 1;
    }
    depth
}

const QUEUE_CAPACITY: usize = 8;

proptest! {
    #[test]
    fn interleaved_ops_match_vec_models(ops in prop::collection::vec(op(), 0..64)) {
        let mut list = LinkedList::new();
        let mut queue = Queue::bounded(QUEUE_CAPACITY);
        let mut tree = Tree::new();
        let mut list_model: Vec<u8> = Vec::new();
        let mut queue_model: VecDeque<u8> = VecDeque::new();
        let mut tree_model: Vec<u8> = Vec::new();

        for op in ops {
            match op {
                Op::Push(v) => {
                    list.append(v);
                    list_model.push(v);
                    let accepted = queue.enqueue(v).is_ok();
                    prop_assert_eq!(accepted, queue_model.len() < QUEUE_CAPACITY);
                    if accepted {
                        queue_model.push_back(v);
                    }
                    tree.insert(v);
                    tree_model.push(v);
                }
                Op::PushFront(v) => {
                    list.prepend(v);
                    list_model.insert(0, v);
                }
                Op::Pop => {
                    let expected = if list_model.is_empty() {
                        None
                    } else {
                        Some(list_model.remove(0))
                    };
                    prop_assert_eq!(list.remove_first(), expected);
                    prop_assert_eq!(queue.dequeue(), queue_model.pop_front());
                }
                Op::Remove(v) => {
                    let pos = list_model.iter().position(|e| *e == v);
                    prop_assert_eq!(list.index_of(&v), pos);
                    if let Some(i) = pos {
                        list_model.remove(i);
                    }
                    prop_assert_eq!(list.remove(&v), pos.is_some());
                    prop_assert_eq!(tree.contains(&v), tree_model.contains(&v));
                }
                Op::Reverse => {
                    list.reverse();
                    list_model.reverse();
                }
                Op::ToggleCircle => {
                    if list.is_circular() {
                        list.break_circle();
                    } else {
                        list.make_circular();
                    }
                }
                Op::Clear => {
                    queue.clear();
                    queue_model.clear();
                    tree.clear();
                    tree_model.clear();
                }
            }

            prop_assert_eq!(list.len(), list_model.len());
            prop_assert_eq!(list.to_vec(), list_model.clone());
            prop_assert_eq!(list.get_first(), list_model.first());
            prop_assert_eq!(list.get_last(), list_model.last());

            prop_assert_eq!(queue.len(), queue_model.len());
            prop_assert_eq!(queue.to_vec(), queue_model.iter().copied().collect::<Vec<_>>());
            prop_assert_eq!(queue.peek(), queue_model.front());

            prop_assert_eq!(tree.len(), tree_model.len());
            prop_assert_eq!(tree.level_order(), tree_model.iter().collect::<Vec<_>>());
            prop_assert_eq!(tree.max_depth(), complete_depth(tree_model.len()));
        }
    }
}
