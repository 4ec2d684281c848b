//! Text command handlers shared by the interactive menu and the MCP servers.
//!
//! Every handler runs one registry or Pokedex operation and returns the text
//! a user should see. `Err` carries the message for a rejected command.

use crate::catalog::{self, Starter};
use crate::errors::{CatalogError, PokedexError, RecordError, RegistryError};
use crate::events::EventBus;
use crate::pokedex::TraversalOrder;
use crate::registry::{Direction, OwnerId, Registry};

/// Join the user-facing lines of a bus.
pub fn render(bus: &EventBus) -> String {
    bus.formatted_lines().join("\n")
}

/// Numbered owner list, or a notice when there are none.
pub fn display_owner_list(registry: &Registry) -> String {
    if registry.is_empty() {
        return "No existing Pokedexes.".to_string();
    }
    let mut output = String::from("Existing Pokedexes:\n");
    for (position, name) in registry.names().iter().enumerate() {
        output.push_str(&format!("{}. {}\n", position + 1, name));
    }
    output
}

pub fn display_starter_menu() -> String {
    let mut output = String::from("Choose Starter:\n");
    for (position, starter) in Starter::ALL.iter().enumerate() {
        if let Ok(template) = starter.template() {
            output.push_str(&format!("{}. {}\n", position + 1, template.name));
        }
    }
    output
}

pub fn display_traversal_menu() -> String {
    let mut output = String::from("Display:\n");
    for (position, order) in TraversalOrder::MENU.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", position + 1, order));
    }
    output
}

/// Resolve an owner by exact name.
pub fn owner_by_name(registry: &Registry, name: &str) -> Result<OwnerId, String> {
    registry
        .find_by_name(name.trim())
        .ok_or_else(|| format!("Owner '{}' not found.", name.trim()))
}

/// Resolve an owner by its 1-based position in the owner list.
pub fn owner_at(registry: &Registry, position: i64) -> Result<OwnerId, String> {
    registry.owner_at(position).map_err(|err| match err {
        RegistryError::NoOwners => "No existing Pokedexes.".to_string(),
        _ => "Invalid choice.".to_string(),
    })
}

/// Create an owner with the starter at menu `choice` (1-3).
pub fn create_pokedex(
    registry: &mut Registry,
    name: &str,
    starter_choice: i64,
) -> Result<String, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Owner name cannot be empty.".to_string());
    }
    if registry.find_by_name(name).is_some() {
        return Err(format!(
            "Owner '{}' already exists. Not creating a new Pokedex.",
            name
        ));
    }
    let starter = Starter::from_choice(starter_choice).map_err(|_| "Invalid choice.".to_string())?;

    let mut bus = EventBus::new();
    registry
        .create_owner(name, starter, &mut bus)
        .map_err(|err| err.to_string())?;
    Ok(render(&bus))
}

pub fn add_pokemon(registry: &mut Registry, owner: OwnerId, id: i64) -> Result<String, String> {
    let mut bus = EventBus::new();
    let pokedex = registry.get_mut(owner).map_err(|err| err.to_string())?.pokedex_mut();
    match pokedex.insert_record(id, &mut bus) {
        Ok(_) => Ok(render(&bus)),
        Err(PokedexError::Catalog(CatalogError::InvalidId(_))) => Err("Invalid ID.".to_string()),
        Err(PokedexError::Record(RecordError::DuplicateRecord(_))) => Err(render(&bus)),
        Err(err) => Err(err.to_string()),
    }
}

pub fn release_pokemon(registry: &mut Registry, owner: OwnerId, id: i64) -> Result<String, String> {
    let mut bus = EventBus::new();
    let pokedex = registry.get_mut(owner).map_err(|err| err.to_string())?.pokedex_mut();
    match pokedex.remove_record(id, &mut bus) {
        Ok(_) => Ok(render(&bus)),
        Err(PokedexError::Record(RecordError::EmptyPokedex)) => {
            Err("No Pokemon to release.".to_string())
        }
        Err(PokedexError::Record(RecordError::RecordNotFound(_))) => Err(render(&bus)),
        Err(err) => Err(err.to_string()),
    }
}

/// List an owner's records in the traversal picked by menu `choice` (1-5).
pub fn display_pokedex(registry: &Registry, owner: OwnerId, choice: i64) -> Result<String, String> {
    let pokedex = registry.get(owner).map_err(|err| err.to_string())?.pokedex();
    if pokedex.is_empty() {
        return Err("Pokedex is empty.".to_string());
    }
    let order = TraversalOrder::from_choice(choice).ok_or_else(|| "Invalid choice.".to_string())?;
    pokedex.display(order).map_err(|err| err.to_string())
}

pub fn evolve_pokemon(registry: &mut Registry, owner: OwnerId, id: i64) -> Result<String, String> {
    let mut bus = EventBus::new();
    let pokedex = registry.get_mut(owner).map_err(|err| err.to_string())?.pokedex_mut();
    match pokedex.evolve_record(id, &mut bus) {
        Ok(_) => Ok(render(&bus)),
        Err(PokedexError::Record(RecordError::EmptyPokedex)) => {
            Err("Cannot evolve. Pokedex empty.".to_string())
        }
        Err(PokedexError::Record(RecordError::RecordNotFound(id))) => {
            Err(format!("No Pokemon ID {} found.", id))
        }
        Err(PokedexError::Record(RecordError::CannotEvolve { name, id })) => {
            Err(format!("{} (ID {}) cannot evolve.", name, id))
        }
        Err(err) => Err(err.to_string()),
    }
}

pub fn pokemon_fight(
    registry: &Registry,
    owner: OwnerId,
    first: i64,
    second: i64,
) -> Result<String, String> {
    let mut bus = EventBus::new();
    let pokedex = registry.get(owner).map_err(|err| err.to_string())?.pokedex();
    match pokedex.fight(first, second, &mut bus) {
        Ok(_) => Ok(render(&bus)),
        Err(PokedexError::Record(RecordError::EmptyPokedex)) => {
            Err("Pokedex is empty.".to_string())
        }
        Err(PokedexError::Record(RecordError::RecordNotFound(_))) => {
            Err("One or both Pokemon IDs not found.".to_string())
        }
        Err(err) => Err(err.to_string()),
    }
}

pub fn delete_pokedex(registry: &mut Registry, owner: OwnerId) -> Result<String, String> {
    let mut bus = EventBus::new();
    registry
        .delete_owner(owner, &mut bus)
        .map_err(|err| err.to_string())?;
    Ok(format!("{}\nPokedex deleted.", render(&bus)))
}

/// Merge `source`'s Pokedex into `target`'s and remove `source`.
pub fn merge_pokedexes(
    registry: &mut Registry,
    target: &str,
    source: &str,
) -> Result<String, String> {
    let mut bus = EventBus::new();
    match registry.merge_owners(target.trim(), source.trim(), &mut bus) {
        Ok(_) => Ok(render(&bus)),
        Err(RegistryError::NotEnoughOwners { .. }) => Err("Not enough owners to merge.".to_string()),
        Err(err) => Err(format!("{}.", err)),
    }
}

pub fn sort_owners(registry: &mut Registry) -> Result<String, String> {
    let mut bus = EventBus::new();
    registry
        .sort_owners(&mut bus)
        .map_err(|err| err.to_string())?;
    Ok(render(&bus))
}

/// Walk the ring from the head `times` steps in `direction` ("F" or "B").
pub fn print_owners_directional(
    registry: &Registry,
    direction: &str,
    times: i64,
) -> Result<String, String> {
    if registry.is_empty() {
        return Err("No owners.".to_string());
    }
    let direction = Direction::parse(direction).ok_or_else(|| "Invalid direction.".to_string())?;
    let steps = usize::try_from(times).unwrap_or(0);

    let lines: Vec<String> = registry
        .walk(direction, steps)
        .enumerate()
        .map(|(step, (_, owner))| format!("[{}] {}", step + 1, owner.name()))
        .collect();
    Ok(lines.join("\n"))
}

/// Catalog details for a name or a 1-based id.
pub fn lookup_pokemon(query: &str) -> String {
    let query = query.trim();
    if query.is_empty() {
        return "What Pokemon do you want to look up? (e.g., 'Pikachu' or '25')".to_string();
    }

    let template = match query.parse::<i64>() {
        Ok(id) => catalog::template_for_user_id(id).ok(),
        Err(_) => catalog::lookup_by_name(query),
    };
    match template {
        Some(template) => format!(
            "--- Pokemon Details ---\n{}",
            crate::pokedex::RecordSummary::from(template)
        ),
        None => format!("The Pokemon '{}' was not found.", query),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn registry_with_ash() -> (Registry, OwnerId) {
        let mut registry = Registry::new();
        create_pokedex(&mut registry, "  Ash ", 2).unwrap();
        let ash = owner_by_name(&registry, "Ash").unwrap();
        (registry, ash)
    }

    #[test]
    fn test_create_and_list() {
        let mut registry = Registry::new();
        assert_eq!(display_owner_list(&registry), "No existing Pokedexes.");

        assert_eq!(
            create_pokedex(&mut registry, "Ash", 3),
            Ok("New Pokedex created for Ash with starter Squirtle.".to_string())
        );
        assert_eq!(
            create_pokedex(&mut registry, "Ash", 1),
            Err("Owner 'Ash' already exists. Not creating a new Pokedex.".to_string())
        );
        assert_eq!(
            create_pokedex(&mut registry, "Misty", 9),
            Err("Invalid choice.".to_string())
        );
        assert_eq!(display_owner_list(&registry), "Existing Pokedexes:\n1. Ash\n");
    }

    #[test]
    fn test_record_commands() {
        let (mut registry, ash) = registry_with_ash();

        assert_eq!(
            add_pokemon(&mut registry, ash, 25),
            Ok("Pokemon Pikachu (ID 25) added.".to_string())
        );
        assert_eq!(
            add_pokemon(&mut registry, ash, 25),
            Err("Pokemon with ID 25 is already in the Pokedex. No changes made.".to_string())
        );
        assert_eq!(add_pokemon(&mut registry, ash, 999), Err("Invalid ID.".to_string()));
        assert_eq!(
            evolve_pokemon(&mut registry, ash, 4),
            Ok("Pokemon evolved from Charmander (ID 4) to Charmeleon (ID 5).".to_string())
        );
        assert_eq!(
            pokemon_fight(&registry, ash, 5, 4),
            Err("One or both Pokemon IDs not found.".to_string())
        );
        assert_eq!(
            release_pokemon(&mut registry, ash, 40),
            Err("Pokemon with ID 40 not found.".to_string())
        );
        assert_eq!(
            release_pokemon(&mut registry, ash, 25),
            Ok("Removing Pokemon Pikachu (ID 25).".to_string())
        );
        assert_eq!(
            display_pokedex(&registry, ash, 3),
            Ok("ID: 5, Name: Charmeleon, Type: FIRE, HP: 58, Attack: 64, Can Evolve: Yes".to_string())
        );
        assert_eq!(display_pokedex(&registry, ash, 7), Err("Invalid choice.".to_string()));
    }

    #[test]
    fn test_directional_print() {
        let mut registry = Registry::new();
        assert_eq!(
            print_owners_directional(&registry, "F", 2),
            Err("No owners.".to_string())
        );
        create_pokedex(&mut registry, "Ash", 1).unwrap();
        create_pokedex(&mut registry, "Misty", 3).unwrap();

        assert_eq!(
            print_owners_directional(&registry, "b", 3),
            Ok("[1] Ash\n[2] Misty\n[3] Ash".to_string())
        );
        assert_eq!(
            print_owners_directional(&registry, "x", 3),
            Err("Invalid direction.".to_string())
        );
    }

    #[test]
    fn test_merge_and_delete() {
        let (mut registry, _) = registry_with_ash();
        assert_eq!(
            merge_pokedexes(&mut registry, "Ash", "Misty"),
            Err("Not enough owners to merge.".to_string())
        );
        create_pokedex(&mut registry, "Misty", 2).unwrap();
        create_pokedex(&mut registry, "Brock", 1).unwrap();

        assert_eq!(
            merge_pokedexes(&mut registry, "Ash", "Misty"),
            Ok("Merging Ash and Misty...\nMerge completed.\n\
                Owner 'Misty' has been removed after merging."
                .to_string())
        );
        let brock = owner_at(&registry, 2).unwrap();
        assert_eq!(
            delete_pokedex(&mut registry, brock),
            Ok("Deleting Brock's entire Pokedex...\nPokedex deleted.".to_string())
        );
        assert_eq!(display_owner_list(&registry), "Existing Pokedexes:\n1. Ash\n");
    }

    #[test]
    fn test_lookup_pokemon() {
        assert!(lookup_pokemon("pikachu").contains("Name: Pikachu"));
        assert!(lookup_pokemon("151").contains("Name: Mew"));
        assert_eq!(lookup_pokemon("Agumon"), "The Pokemon 'Agumon' was not found.");
    }
}
