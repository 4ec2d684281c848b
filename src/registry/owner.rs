use crate::pokedex::Pokedex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A generational handle to an owner slot in a [`Registry`](super::Registry).
///
/// The generation is bumped every time a slot is freed, so a handle kept
/// across a removal no longer resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}

/// A named participant holding exactly one Pokedex.
#[derive(Debug, Default)]
pub struct Owner {
    name: String,
    pokedex: Pokedex,
}

impl Owner {
    pub fn new(name: impl Into<String>, pokedex: Pokedex) -> Self {
        Self {
            name: name.into(),
            pokedex,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pokedex(&self) -> &Pokedex {
        &self.pokedex
    }

    pub fn pokedex_mut(&mut self) -> &mut Pokedex {
        &mut self.pokedex
    }

    pub fn into_pokedex(self) -> Pokedex {
        self.pokedex
    }
}

/// A live owner plus its ring links (slot indices of its neighbours).
#[derive(Debug)]
pub(crate) struct RingEntry {
    pub(crate) owner: Owner,
    pub(crate) next: u32,
    pub(crate) prev: u32,
}

/// One arena slot. `entry` is `Some` only while the owner is registered.
#[derive(Debug)]
pub(crate) struct OwnerSlot {
    pub(crate) generation: u32,
    pub(crate) entry: Option<RingEntry>,
}
