//! The owner registry: a circular doubly-linked ring of owners.
//!
//! Owners live in a slot arena addressed by generational [`OwnerId`]s; ring
//! links are slot indices. The empty ring is an explicit state (`anchors` is
//! `None`), and a singleton links to itself in both directions.

pub mod commands;
pub mod owner;
pub mod walk;

#[cfg(test)]
mod tests;

pub use owner::{Owner, OwnerId};
pub use walk::{Direction, DirectionalWalk};

use crate::errors::{RegistryError, RegistryResult};
use owner::{OwnerSlot, RingEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Anchors {
    head: u32,
    tail: u32,
}

#[derive(Debug, Default)]
pub struct Registry {
    slots: Vec<OwnerSlot>,
    /// Indices of vacant slots, reused before the arena grows.
    free_slots: Vec<u32>,
    anchors: Option<Anchors>,
    count: usize,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_slots: Vec::new(),
            anchors: None,
            count: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn head(&self) -> Option<OwnerId> {
        self.head_index()
            .and_then(|index| self.live_entry(index))
            .map(|(id, _)| id)
    }

    pub fn tail(&self) -> Option<OwnerId> {
        self.anchors
            .and_then(|anchors| self.live_entry(anchors.tail))
            .map(|(id, _)| id)
    }

    pub fn get(&self, id: OwnerId) -> RegistryResult<&Owner> {
        self.entry(id).map(|entry| &entry.owner)
    }

    pub fn get_mut(&mut self, id: OwnerId) -> RegistryResult<&mut Owner> {
        self.entry_mut(id).map(|entry| &mut entry.owner)
    }

    /// The owner after `id` in the ring.
    pub fn next(&self, id: OwnerId) -> RegistryResult<OwnerId> {
        let next = self.entry(id)?.next;
        self.live_id(next)
    }

    /// The owner before `id` in the ring.
    pub fn prev(&self, id: OwnerId) -> RegistryResult<OwnerId> {
        let prev = self.entry(id)?.prev;
        self.live_id(prev)
    }

    /// Splice `owner` in after the current tail; it becomes the new tail.
    pub fn insert(&mut self, owner: Owner) -> RegistryResult<OwnerId> {
        let index = self.next_free_index();
        let (prev, next) = match self.anchors {
            None => (index, index),
            Some(anchors) => (anchors.tail, anchors.head),
        };

        if let Some(anchors) = self.anchors {
            self.link_mut(anchors.tail)?.next = index;
            self.link_mut(anchors.head)?.prev = index;
        }
        let id = self.occupy(index, RingEntry { owner, next, prev });

        self.anchors = Some(match self.anchors {
            None => Anchors { head: index, tail: index },
            Some(anchors) => Anchors {
                head: anchors.head,
                tail: index,
            },
        });
        self.count += 1;
        Ok(id)
    }

    /// Unlink an owner and hand it back. Head and tail follow their
    /// neighbours; removing the last owner empties the ring.
    pub fn remove(&mut self, id: OwnerId) -> RegistryResult<Owner> {
        let (prev, next) = {
            let entry = self.entry(id)?;
            (entry.prev, entry.next)
        };
        let anchors = self.anchors.ok_or_else(|| {
            RegistryError::InconsistentRing("live owner in an empty ring".to_string())
        })?;

        if self.count == 1 {
            self.anchors = None;
        } else {
            self.link_mut(prev)?.next = next;
            self.link_mut(next)?.prev = prev;
            self.anchors = Some(Anchors {
                head: if anchors.head == id.index { next } else { anchors.head },
                tail: if anchors.tail == id.index { prev } else { anchors.tail },
            });
        }

        let entry = self
            .slots
            .get_mut(id.index as usize)
            .and_then(|slot| slot.entry.take())
            .ok_or(RegistryError::StaleOwner)?;
        self.free_slots.push(id.index);
        self.count -= 1;
        Ok(entry.owner)
    }

    /// First owner whose name matches exactly, scanning `len()` steps from
    /// the head.
    pub fn find_by_name(&self, name: &str) -> Option<OwnerId> {
        self.iter()
            .find(|(_, owner)| owner.name() == name)
            .map(|(id, _)| id)
    }

    /// Exchange the names and Pokedexes of two owners. Ring links stay put.
    pub fn swap(&mut self, a: OwnerId, b: OwnerId) -> RegistryResult<()> {
        self.entry(a)?;
        self.entry(b)?;
        if a == b {
            return Ok(());
        }

        let (low, high) = if a.index < b.index {
            (a.index as usize, b.index as usize)
        } else {
            (b.index as usize, a.index as usize)
        };
        let (front, back) = self.slots.split_at_mut(high);
        let first = front.get_mut(low).and_then(|slot| slot.entry.as_mut());
        let second = back.first_mut().and_then(|slot| slot.entry.as_mut());
        match (first, second) {
            (Some(first), Some(second)) => {
                std::mem::swap(&mut first.owner, &mut second.owner);
                Ok(())
            }
            _ => Err(RegistryError::StaleOwner),
        }
    }

    /// Bubble sort by name: `len() - 1` passes of `len() - 1` adjacent
    /// compares from the head, swapping when the first name is greater.
    /// Returns the number of swaps.
    pub fn sort_by_name(&mut self) -> RegistryResult<usize> {
        let anchors = match self.anchors {
            Some(anchors) if self.count >= 2 => anchors,
            _ => return Ok(0),
        };

        let mut swaps = 0;
        for _ in 1..self.count {
            let mut current = anchors.head;
            for _ in 1..self.count {
                let (current_id, entry) = self.ring_entry(current)?;
                let next = entry.next;
                let (next_id, next_entry) = self.ring_entry(next)?;
                let out_of_order = entry.owner.name() > next_entry.owner.name();

                if out_of_order {
                    self.swap(current_id, next_id)?;
                    swaps += 1;
                }
                current = next;
            }
        }
        Ok(swaps)
    }

    /// One forward lap from the head.
    pub fn iter(&self) -> DirectionalWalk<'_> {
        self.walk(Direction::Forward, self.count)
    }

    /// `steps` owners starting at the head, following `direction` and
    /// wrapping around the ring.
    pub fn walk(&self, direction: Direction, steps: usize) -> DirectionalWalk<'_> {
        DirectionalWalk::new(self, direction, steps)
    }

    /// Owner names in ring order from the head.
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|(_, owner)| owner.name()).collect()
    }

    /// The owner at a 1-based position counted forward from the head.
    pub fn owner_at(&self, position: i64) -> RegistryResult<OwnerId> {
        if self.is_empty() {
            return Err(RegistryError::NoOwners);
        }
        usize::try_from(position)
            .ok()
            .and_then(|position| position.checked_sub(1))
            .and_then(|offset| self.iter().nth(offset))
            .map(|(id, _)| id)
            .ok_or(RegistryError::InvalidPosition(position))
    }

    /// Drop every owner and return how many there were.
    pub fn clear(&mut self) -> usize {
        let owners = self.count;
        self.slots.clear();
        self.free_slots.clear();
        self.anchors = None;
        self.count = 0;
        owners
    }

    /// Check the ring: anchors match the count, every link round-trips, the
    /// head is reached again after exactly `len()` forward steps, and every
    /// live slot is on the ring.
    pub fn verify_ring(&self) -> RegistryResult<()> {
        let live = self
            .slots
            .iter()
            .filter(|slot| slot.entry.is_some())
            .count();
        if live != self.count {
            return Err(RegistryError::InconsistentRing(format!(
                "{} live slots for a count of {}",
                live, self.count
            )));
        }

        let anchors = match (self.anchors, self.count) {
            (None, 0) => return Ok(()),
            (Some(anchors), count) if count > 0 => anchors,
            (anchors, count) => {
                return Err(RegistryError::InconsistentRing(format!(
                    "anchors {:?} with a count of {}",
                    anchors, count
                )))
            }
        };

        let (_, head) = self.ring_entry(anchors.head)?;
        let (_, tail) = self.ring_entry(anchors.tail)?;
        if head.prev != anchors.tail || tail.next != anchors.head {
            return Err(RegistryError::InconsistentRing(
                "head and tail are not adjacent".to_string(),
            ));
        }

        let mut visited = vec![false; self.slots.len()];
        let mut current = anchors.head;
        for _ in 0..self.count {
            let (_, entry) = self.ring_entry(current)?;
            let seen = visited.get_mut(current as usize).ok_or_else(|| {
                RegistryError::InconsistentRing(format!("slot {} out of range", current))
            })?;
            if *seen {
                return Err(RegistryError::InconsistentRing(format!(
                    "slot {} reached twice in one lap",
                    current
                )));
            }
            *seen = true;

            let (_, next) = self.ring_entry(entry.next)?;
            if next.prev != current {
                return Err(RegistryError::InconsistentRing(format!(
                    "slot {} -> {} does not link back",
                    current, entry.next
                )));
            }
            current = entry.next;
        }

        if current != anchors.head {
            return Err(RegistryError::InconsistentRing(
                "one lap does not return to the head".to_string(),
            ));
        }
        Ok(())
    }

    pub(crate) fn head_index(&self) -> Option<u32> {
        self.anchors.map(|anchors| anchors.head)
    }

    /// The live entry at a raw slot index, with its current handle.
    pub(crate) fn live_entry(&self, index: u32) -> Option<(OwnerId, &RingEntry)> {
        self.slots.get(index as usize).and_then(|slot| {
            slot.entry.as_ref().map(|entry| {
                (
                    OwnerId {
                        index,
                        generation: slot.generation,
                    },
                    entry,
                )
            })
        })
    }

    fn live_id(&self, index: u32) -> RegistryResult<OwnerId> {
        self.ring_entry(index).map(|(id, _)| id)
    }

    /// Like `live_entry`, for indices reached through ring links.
    fn ring_entry(&self, index: u32) -> RegistryResult<(OwnerId, &RingEntry)> {
        self.live_entry(index).ok_or_else(|| {
            RegistryError::InconsistentRing(format!("link to vacant slot {}", index))
        })
    }

    fn entry(&self, id: OwnerId) -> RegistryResult<&RingEntry> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.entry.as_ref())
            .ok_or(RegistryError::StaleOwner)
    }

    fn entry_mut(&mut self, id: OwnerId) -> RegistryResult<&mut RingEntry> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.entry.as_mut())
            .ok_or(RegistryError::StaleOwner)
    }

    fn link_mut(&mut self, index: u32) -> RegistryResult<&mut RingEntry> {
        self.slots
            .get_mut(index as usize)
            .and_then(|slot| slot.entry.as_mut())
            .ok_or_else(|| {
                RegistryError::InconsistentRing(format!("link to vacant slot {}", index))
            })
    }

    /// The slot the next insert will use: a recycled one if any.
    fn next_free_index(&self) -> u32 {
        self.free_slots
            .last()
            .copied()
            .unwrap_or(self.slots.len() as u32)
    }

    /// Place `entry` in the slot `next_free_index` picked. A recycled slot
    /// gets a new generation so old handles to it stop resolving.
    fn occupy(&mut self, index: u32, entry: RingEntry) -> OwnerId {
        if self.free_slots.last() == Some(&index) {
            self.free_slots.pop();
            let slot = &mut self.slots[index as usize];
            slot.generation += 1;
            slot.entry = Some(entry);
            OwnerId {
                index,
                generation: slot.generation,
            }
        } else {
            self.slots.push(OwnerSlot {
                generation: 0,
                entry: Some(entry),
            });
            OwnerId {
                index,
                generation: 0,
            }
        }
    }
}
