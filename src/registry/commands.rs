//! Owner-level commands built on the ring primitives. These report what
//! happened on the caller's [`EventBus`].

use super::{Owner, OwnerId, Registry};
use crate::catalog::Starter;
use crate::errors::{PokedexResult, RegistryError, RegistryResult};
use crate::events::{EventBus, PokedexEvent};
use crate::pokedex::{AbsorbStats, Pokedex};

impl Registry {
    /// Start a new Pokedex for `name` holding one starter record.
    ///
    /// Names are unique by exact, case-sensitive match.
    pub fn create_owner(
        &mut self,
        name: &str,
        starter: Starter,
        bus: &mut EventBus,
    ) -> PokedexResult<OwnerId> {
        if self.find_by_name(name).is_some() {
            return Err(RegistryError::DuplicateOwnerName(name.to_string()).into());
        }

        let template = starter.template()?;
        let id = self.insert(Owner::new(name, Pokedex::with_starter(template)))?;
        bus.push(PokedexEvent::OwnerCreated {
            owner: name.to_string(),
            starter: template.name.clone(),
        });
        Ok(id)
    }

    /// Remove an owner together with its whole Pokedex.
    pub fn delete_owner(&mut self, id: OwnerId, bus: &mut EventBus) -> RegistryResult<()> {
        let owner = self.remove(id)?;
        bus.push(PokedexEvent::PokedexDeleted {
            owner: owner.name().to_string(),
        });
        Ok(())
    }

    /// Move every record of `source` into `target`, then remove `source`.
    ///
    /// All lookups and checks happen before anything is touched.
    pub fn merge_owners(
        &mut self,
        target: &str,
        source: &str,
        bus: &mut EventBus,
    ) -> RegistryResult<AbsorbStats> {
        if self.len() < 2 {
            return Err(RegistryError::NotEnoughOwners {
                required: 2,
                found: self.len(),
            });
        }
        let target_id = self
            .find_by_name(target)
            .ok_or_else(|| RegistryError::MergeTargetNotFound(target.to_string()))?;
        let source_id = self
            .find_by_name(source)
            .ok_or_else(|| RegistryError::MergeSourceNotFound(source.to_string()))?;
        if target_id == source_id {
            return Err(RegistryError::SelfMerge(target.to_string()));
        }

        let absorbed = self.remove(source_id)?.into_pokedex();
        let stats = self.get_mut(target_id)?.pokedex_mut().absorb(absorbed, bus);

        bus.push(PokedexEvent::PokedexesMerged {
            target: target.to_string(),
            source: source.to_string(),
            moved: stats.moved,
            dropped: stats.dropped,
        });
        bus.push(PokedexEvent::OwnerRemovedAfterMerge {
            owner: source.to_string(),
        });
        Ok(stats)
    }

    /// Sort the ring by owner name, or report that there is nothing to sort.
    pub fn sort_owners(&mut self, bus: &mut EventBus) -> RegistryResult<usize> {
        if self.len() < 2 {
            bus.push(PokedexEvent::SortSkipped { count: self.len() });
            return Ok(0);
        }
        let swaps = self.sort_by_name()?;
        bus.push(PokedexEvent::OwnersSorted { count: self.len() });
        Ok(swaps)
    }

    /// Tear the registry down at exit.
    pub fn shutdown(&mut self, bus: &mut EventBus) {
        let owners = self.clear();
        bus.push(PokedexEvent::RegistryCleared { owners });
    }
}
