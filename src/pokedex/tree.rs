//! Binary search tree operations over owned [`Link`]s.
//!
//! Every mutating function takes the current root by value and returns the
//! new root, so callers always write `root = op(root.take(), ..)`. Nodes are
//! moved between slots, never copied. There is no rebalancing: the shape is a
//! function of insertion order only.

use super::node::{Link, PokemonNode};
use crate::events::{EventBus, PokedexEvent};
use schema::RecordTemplate;
use std::cmp::Ordering;

/// What to do when an insert meets an identity that is already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Tell the user (a `DuplicateRecord` event).
    Report,
    /// Drop quietly (a silent `DuplicateDropped` event).
    Silent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// The new node was dropped and the tree is unchanged.
    Duplicate,
}

/// Node accounting for one [`absorb_tree`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AbsorbStats {
    pub moved: usize,
    pub dropped: usize,
}

/// Insert `node` by identity. A duplicate is dropped together with anything
/// it still owns.
pub fn insert_node(
    root: Link,
    node: Box<PokemonNode>,
    policy: DuplicatePolicy,
    bus: &mut EventBus,
) -> (Link, InsertOutcome) {
    match root {
        None => (Some(node), InsertOutcome::Inserted),
        Some(mut current) => {
            let outcome = match node.id().cmp(&current.id()) {
                Ordering::Less => {
                    let (left, outcome) = insert_node(current.left.take(), node, policy, bus);
                    current.left = left;
                    outcome
                }
                Ordering::Greater => {
                    let (right, outcome) = insert_node(current.right.take(), node, policy, bus);
                    current.right = right;
                    outcome
                }
                Ordering::Equal => {
                    let id = node.template().user_id();
                    bus.push(match policy {
                        DuplicatePolicy::Report => PokedexEvent::DuplicateRecord { id },
                        DuplicatePolicy::Silent => PokedexEvent::DuplicateDropped { id },
                    });
                    InsertOutcome::Duplicate
                }
            };
            (Some(current), outcome)
        }
    }
}

/// Find a node by identity.
///
/// This is an exhaustive depth-first scan (current, left subtree, right
/// subtree) that does not use the ordering, so it costs O(size).
pub fn search_node(root: Option<&PokemonNode>, id: u16) -> Option<&PokemonNode> {
    let node = root?;
    if node.id() == id {
        return Some(node);
    }
    search_node(node.left(), id).or_else(|| search_node(node.right(), id))
}

/// Remove the node with identity `id`.
///
/// Returns the new root and the removed node's template, or the unchanged
/// root and `None` when the identity is absent. A node with two children is
/// replaced by its left subtree after the right subtree has been re-inserted
/// into it.
pub fn remove_node(
    root: Link,
    id: u16,
    bus: &mut EventBus,
) -> (Link, Option<&'static RecordTemplate>) {
    let mut current = match root {
        Some(node) => node,
        None => return (None, None),
    };

    match id.cmp(&current.id()) {
        Ordering::Less => {
            let (left, removed) = remove_node(current.left.take(), id, bus);
            current.left = left;
            (Some(current), removed)
        }
        Ordering::Greater => {
            let (right, removed) = remove_node(current.right.take(), id, bus);
            current.right = right;
            (Some(current), removed)
        }
        Ordering::Equal => {
            let template = current.template();
            let replacement = match (current.left.take(), current.right.take()) {
                (Some(left), Some(right)) => {
                    // Every id on the right is greater than every id on the
                    // left, so this lands on the rightmost empty slot.
                    let (merged, _) = insert_node(Some(left), right, DuplicatePolicy::Silent, bus);
                    merged
                }
                (Some(only), None) | (None, Some(only)) => Some(only),
                (None, None) => None,
            };
            (replacement, Some(template))
        }
    }
}

/// Move every node of `source` into `target`.
///
/// Source nodes are detached in post-order and inserted one at a time with
/// the `Silent` policy; identities already in `target` are dropped.
pub fn absorb_tree(target: Link, source: Link, bus: &mut EventBus) -> (Link, AbsorbStats) {
    let mut stats = AbsorbStats::default();
    let merged = absorb_into(target, source, bus, &mut stats);
    (merged, stats)
}

fn absorb_into(target: Link, source: Link, bus: &mut EventBus, stats: &mut AbsorbStats) -> Link {
    let mut node = match source {
        Some(node) => node,
        None => return target,
    };

    let target = absorb_into(target, node.left.take(), bus, stats);
    let target = absorb_into(target, node.right.take(), bus, stats);

    let (target, outcome) = insert_node(target, node, DuplicatePolicy::Silent, bus);
    match outcome {
        InsertOutcome::Inserted => stats.moved += 1,
        InsertOutcome::Duplicate => stats.dropped += 1,
    }
    target
}

/// Number of nodes in the tree.
pub fn count_nodes(root: Option<&PokemonNode>) -> usize {
    match root {
        None => 0,
        Some(node) => 1 + count_nodes(node.left()) + count_nodes(node.right()),
    }
}

/// Number of levels; 0 for an empty tree.
pub fn height(root: Option<&PokemonNode>) -> usize {
    match root {
        None => 0,
        Some(node) => 1 + height(node.left()).max(height(node.right())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::get_template;

    fn node(id: u16) -> Box<PokemonNode> {
        PokemonNode::new(get_template(id).unwrap())
    }

    #[test]
    fn test_insert_into_empty_tree_becomes_root() {
        let mut bus = EventBus::new();
        let (root, outcome) = insert_node(None, node(10), DuplicatePolicy::Report, &mut bus);
        assert_eq!(outcome, InsertOutcome::Inserted);
        assert_eq!(root.as_ref().map(|n| n.id()), Some(10));
        assert!(bus.is_empty());
    }

    #[test]
    fn test_duplicate_policy_controls_event() {
        let mut bus = EventBus::new();
        let (root, _) = insert_node(None, node(3), DuplicatePolicy::Report, &mut bus);
        let (root, reported) = insert_node(root, node(3), DuplicatePolicy::Report, &mut bus);
        let (root, silent) = insert_node(root, node(3), DuplicatePolicy::Silent, &mut bus);

        assert_eq!(reported, InsertOutcome::Duplicate);
        assert_eq!(silent, InsertOutcome::Duplicate);
        assert_eq!(count_nodes(root.as_deref()), 1);
        assert_eq!(
            bus.events(),
            &[
                PokedexEvent::DuplicateRecord { id: 4 },
                PokedexEvent::DuplicateDropped { id: 4 },
            ]
        );
    }

    #[test]
    fn test_search_misses_on_empty_tree() {
        assert!(search_node(None, 0).is_none());
    }

    #[test]
    fn test_remove_missing_id_returns_same_root() {
        let mut bus = EventBus::new();
        let (root, _) = insert_node(None, node(5), DuplicatePolicy::Report, &mut bus);
        let before: *const PokemonNode = root.as_deref().unwrap();
        let (root, removed) = remove_node(root, 9, &mut bus);
        assert!(removed.is_none());
        assert!(std::ptr::eq(before, root.as_deref().unwrap()));
    }

    #[test]
    fn test_height_of_ascending_inserts_is_degenerate() {
        let mut bus = EventBus::new();
        let mut root = None;
        for id in 0..6 {
            root = insert_node(root, node(id), DuplicatePolicy::Report, &mut bus).0;
        }
        assert_eq!(height(root.as_deref()), 6);
    }
}
