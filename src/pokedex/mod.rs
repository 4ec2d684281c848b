//! Per-owner Pokedex: a binary search tree of catalog records keyed by
//! identity, plus the record-level operations the shells call.
//!
//! Operations here take the 1-based ids users type; the tree functions in
//! [`tree`] work on 0-based identities.

pub mod fight;
pub mod node;
pub mod traversal;
pub mod tree;

#[cfg(test)]
pub(crate) mod tests;

pub use fight::{fight_score, FightOutcome};
pub use node::{Link, PokemonNode, RecordSummary};
pub use traversal::TraversalOrder;
pub use tree::{AbsorbStats, DuplicatePolicy, InsertOutcome};

use crate::catalog;
use crate::errors::{PokedexResult, RecordError};
use crate::events::{EventBus, PokedexEvent};
use schema::RecordTemplate;

/// A record replaced by its next evolutionary stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evolution {
    pub from: &'static RecordTemplate,
    pub to: &'static RecordTemplate,
}

/// One owner's tree of records.
#[derive(Debug, Default)]
pub struct Pokedex {
    root: Link,
}

impl Pokedex {
    pub fn new() -> Self {
        Self { root: None }
    }

    /// A Pokedex holding a single starter record.
    pub fn with_starter(template: &'static RecordTemplate) -> Self {
        Self {
            root: Some(PokemonNode::new(template)),
        }
    }

    pub fn root(&self) -> Option<&PokemonNode> {
        self.root.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        tree::count_nodes(self.root())
    }

    pub fn height(&self) -> usize {
        tree::height(self.root())
    }

    /// Insert a catalog record by 1-based id, reporting duplicates.
    pub fn insert_record(
        &mut self,
        user_id: i64,
        bus: &mut EventBus,
    ) -> PokedexResult<&'static RecordTemplate> {
        let template = catalog::template_for_user_id(user_id)?;
        match self.insert_template(template, DuplicatePolicy::Report, bus) {
            InsertOutcome::Inserted => {
                bus.push(PokedexEvent::RecordAdded {
                    id: template.user_id(),
                    name: template.name.clone(),
                });
                Ok(template)
            }
            InsertOutcome::Duplicate => Err(RecordError::DuplicateRecord(template.user_id()).into()),
        }
    }

    /// Insert a template directly with the given duplicate policy.
    pub fn insert_template(
        &mut self,
        template: &'static RecordTemplate,
        policy: DuplicatePolicy,
        bus: &mut EventBus,
    ) -> InsertOutcome {
        let (root, outcome) =
            tree::insert_node(self.root.take(), PokemonNode::new(template), policy, bus);
        self.root = root;
        outcome
    }

    /// Release the record with a 1-based id.
    pub fn remove_record(
        &mut self,
        user_id: i64,
        bus: &mut EventBus,
    ) -> PokedexResult<&'static RecordTemplate> {
        if self.is_empty() {
            return Err(RecordError::EmptyPokedex.into());
        }

        let removed =
            catalog::identity_for_user_id(user_id).and_then(|id| self.remove_identity(id, bus));
        match removed {
            Some(template) => {
                bus.push(PokedexEvent::RecordRemoved {
                    id: template.user_id(),
                    name: template.name.clone(),
                });
                Ok(template)
            }
            None => {
                bus.push(PokedexEvent::RecordNotFound { id: user_id });
                Err(RecordError::RecordNotFound(user_id).into())
            }
        }
    }

    /// Remove by 0-based identity. The tree is untouched when it is absent.
    pub fn remove_identity(
        &mut self,
        id: u16,
        bus: &mut EventBus,
    ) -> Option<&'static RecordTemplate> {
        let (root, removed) = tree::remove_node(self.root.take(), id, bus);
        self.root = root;
        removed
    }

    /// Find a record by 1-based id. O(size), see [`tree::search_node`].
    pub fn find_record(&self, user_id: i64) -> Option<&PokemonNode> {
        catalog::identity_for_user_id(user_id).and_then(|id| tree::search_node(self.root(), id))
    }

    /// Replace the record with its catalog successor (identity + 1).
    ///
    /// If the successor is already present the insert is reported as a
    /// duplicate; the old record is still gone.
    pub fn evolve_record(&mut self, user_id: i64, bus: &mut EventBus) -> PokedexResult<Evolution> {
        if self.is_empty() {
            return Err(RecordError::EmptyPokedex.into());
        }

        let from = self
            .find_record(user_id)
            .map(PokemonNode::template)
            .ok_or(RecordError::RecordNotFound(user_id))?;
        if !from.can_evolve {
            return Err(RecordError::CannotEvolve {
                name: from.name.clone(),
                id: from.user_id(),
            }
            .into());
        }
        let to = catalog::get_template(from.id + 1)?;

        self.remove_identity(from.id, bus);
        bus.push(PokedexEvent::RecordEvolved {
            from_id: from.user_id(),
            from_name: from.name.clone(),
            to_id: to.user_id(),
            to_name: to.name.clone(),
        });
        self.insert_template(to, DuplicatePolicy::Report, bus);

        Ok(Evolution { from, to })
    }

    /// Score two records of this Pokedex against each other.
    pub fn fight(
        &self,
        first_id: i64,
        second_id: i64,
        bus: &mut EventBus,
    ) -> PokedexResult<FightOutcome> {
        if self.is_empty() {
            return Err(RecordError::EmptyPokedex.into());
        }

        let first = self
            .find_record(first_id)
            .ok_or(RecordError::RecordNotFound(first_id))?;
        let second = self
            .find_record(second_id)
            .ok_or(RecordError::RecordNotFound(second_id))?;

        let outcome = FightOutcome::resolve(first.template(), second.template());
        bus.push(PokedexEvent::FightResolved {
            first_name: outcome.first.name.clone(),
            first_score: outcome.first_score.into_inner(),
            second_name: outcome.second.name.clone(),
            second_score: outcome.second_score.into_inner(),
            winner: outcome.winner().map(|winner| winner.name.clone()),
        });
        Ok(outcome)
    }

    /// Move every record of `other` into this Pokedex, dropping identities
    /// that are already present. An empty Pokedex takes the other tree as is.
    pub fn absorb(&mut self, mut other: Pokedex, bus: &mut EventBus) -> AbsorbStats {
        if self.is_empty() {
            let moved = other.len();
            self.root = other.root.take();
            return AbsorbStats { moved, dropped: 0 };
        }

        let (root, stats) = tree::absorb_tree(self.root.take(), other.root.take(), bus);
        self.root = root;
        stats
    }

    /// Hand the whole tree to the caller, leaving this Pokedex empty.
    pub fn take(&mut self) -> Pokedex {
        Pokedex {
            root: self.root.take(),
        }
    }

    pub fn traverse<'a, F>(&'a self, order: TraversalOrder, visit: F)
    where
        F: FnMut(&'a PokemonNode),
    {
        traversal::traverse(self.root(), order, visit);
    }

    /// Record summaries in the requested order.
    pub fn summaries(&self, order: TraversalOrder) -> Vec<RecordSummary> {
        let mut summaries = Vec::with_capacity(self.len());
        self.traverse(order, |node| summaries.push(node.summary()));
        summaries
    }

    /// 1-based ids in the requested order.
    pub fn ids(&self, order: TraversalOrder) -> Vec<u32> {
        let mut ids = Vec::new();
        self.traverse(order, |node| ids.push(node.template().user_id()));
        ids
    }

    /// Display listing in the requested order, one record per line.
    pub fn display(&self, order: TraversalOrder) -> PokedexResult<String> {
        if self.is_empty() {
            return Err(RecordError::EmptyPokedex.into());
        }
        let lines: Vec<String> = self
            .summaries(order)
            .iter()
            .map(|summary| summary.to_string())
            .collect();
        Ok(lines.join("\n"))
    }
}
