//! Visitor-driven walks over a Pokedex tree.
//!
//! All walks are read-only and call the visitor exactly once per node.

use super::node::PokemonNode;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraversalOrder {
    LevelOrder,
    PreOrder,
    InOrder,
    PostOrder,
    Alphabetical,
}

impl TraversalOrder {
    /// Display menu order: 1 = BFS, 2 = pre, 3 = in, 4 = post, 5 = alphabetical.
    pub const MENU: [TraversalOrder; 5] = [
        TraversalOrder::LevelOrder,
        TraversalOrder::PreOrder,
        TraversalOrder::InOrder,
        TraversalOrder::PostOrder,
        TraversalOrder::Alphabetical,
    ];

    pub fn from_choice(choice: i64) -> Option<TraversalOrder> {
        usize::try_from(choice)
            .ok()
            .and_then(|choice| choice.checked_sub(1))
            .and_then(|index| Self::MENU.get(index).copied())
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TraversalOrder::LevelOrder => "BFS (Level-Order)",
            TraversalOrder::PreOrder => "Pre-Order",
            TraversalOrder::InOrder => "In-Order",
            TraversalOrder::PostOrder => "Post-Order",
            TraversalOrder::Alphabetical => "Alphabetical (by name)",
        };
        write!(f, "{}", label)
    }
}

/// Walk the tree in `order`, calling `visit` for every node.
pub fn traverse<'a, F>(root: Option<&'a PokemonNode>, order: TraversalOrder, visit: F)
where
    F: FnMut(&'a PokemonNode),
{
    match order {
        TraversalOrder::LevelOrder => level_order(root, visit),
        TraversalOrder::PreOrder => pre_order(root, visit),
        TraversalOrder::InOrder => in_order(root, visit),
        TraversalOrder::PostOrder => post_order(root, visit),
        TraversalOrder::Alphabetical => alphabetical(root, visit),
    }
}

/// Node, left subtree, right subtree.
pub fn pre_order<'a, F>(root: Option<&'a PokemonNode>, mut visit: F)
where
    F: FnMut(&'a PokemonNode),
{
    walk_pre(root, &mut visit);
}

fn walk_pre<'a, F>(node: Option<&'a PokemonNode>, visit: &mut F)
where
    F: FnMut(&'a PokemonNode),
{
    if let Some(node) = node {
        visit(node);
        walk_pre(node.left(), visit);
        walk_pre(node.right(), visit);
    }
}

/// Left subtree, node, right subtree. Yields ascending identities.
pub fn in_order<'a, F>(root: Option<&'a PokemonNode>, mut visit: F)
where
    F: FnMut(&'a PokemonNode),
{
    walk_in(root, &mut visit);
}

fn walk_in<'a, F>(node: Option<&'a PokemonNode>, visit: &mut F)
where
    F: FnMut(&'a PokemonNode),
{
    if let Some(node) = node {
        walk_in(node.left(), visit);
        visit(node);
        walk_in(node.right(), visit);
    }
}

/// Left subtree, right subtree, node.
pub fn post_order<'a, F>(root: Option<&'a PokemonNode>, mut visit: F)
where
    F: FnMut(&'a PokemonNode),
{
    walk_post(root, &mut visit);
}

fn walk_post<'a, F>(node: Option<&'a PokemonNode>, visit: &mut F)
where
    F: FnMut(&'a PokemonNode),
{
    if let Some(node) = node {
        walk_post(node.left(), visit);
        walk_post(node.right(), visit);
        visit(node);
    }
}

/// Visit depth 0, then depth 1, and so on, stopping at the first empty level.
///
/// Each level is reached by a fresh depth-first descent that expands the left
/// subtree before the right one at every branch. This is not a queue-based
/// walk, and the cost is O(size * height).
pub fn level_order<'a, F>(root: Option<&'a PokemonNode>, mut visit: F)
where
    F: FnMut(&'a PokemonNode),
{
    if root.is_none() {
        return;
    }
    let mut level = 0;
    while visit_level(root, level, &mut visit) {
        level += 1;
    }
}

/// Visit every node at exactly `level` below `node`. Returns whether any
/// node exists at that depth.
pub fn visit_level<'a, F>(node: Option<&'a PokemonNode>, level: usize, visit: &mut F) -> bool
where
    F: FnMut(&'a PokemonNode),
{
    match node {
        None => false,
        Some(node) if level == 0 => {
            visit(node);
            true
        }
        Some(node) => {
            let left = visit_level(node.left(), level - 1, visit);
            let right = visit_level(node.right(), level - 1, visit);
            left || right
        }
    }
}

/// Collect every node, stable-sort by name (byte order), then visit.
pub fn alphabetical<'a, F>(root: Option<&'a PokemonNode>, mut visit: F)
where
    F: FnMut(&'a PokemonNode),
{
    for node in collect_sorted_by_name(root) {
        visit(node);
    }
}

/// All nodes in pre-order.
pub fn collect_all(root: Option<&PokemonNode>) -> Vec<&PokemonNode> {
    let mut nodes = Vec::new();
    pre_order(root, |node| nodes.push(node));
    nodes
}

/// All nodes ordered by name using byte-wise comparison.
pub fn collect_sorted_by_name(root: Option<&PokemonNode>) -> Vec<&PokemonNode> {
    let mut nodes = collect_all(root);
    nodes.sort_by(|a, b| a.name().as_bytes().cmp(b.name().as_bytes()));
    nodes
}
