use crate::catalog::Starter;
use crate::errors::RegistryResult;
use crate::events::EventBus;
use crate::pokedex::tests::common::pokedex_with;
use crate::registry::{Owner, OwnerId, Registry};

/// Builds a registry with one owner per name, each holding the given ids.
///
/// # Example
/// ```
/// let registry = registry_with(&[("Ash", &[1]), ("Misty", &[1, 7])]);
/// assert_eq!(registry.names(), vec!["Ash", "Misty"]);
/// ```
pub fn registry_with(owners: &[(&str, &[i64])]) -> Registry {
    let mut registry = Registry::new();
    for (name, ids) in owners {
        assert_ok(registry.insert(Owner::new(*name, pokedex_with(ids))));
    }
    registry
}

/// Builds a registry of starter-only owners through `create_owner`.
pub fn registry_of(names: &[&str]) -> Registry {
    let mut registry = Registry::new();
    let mut bus = EventBus::new();
    for name in names {
        if let Err(err) = registry.create_owner(name, Starter::Bulbasaur, &mut bus) {
            panic!("Failed to create owner {}: {}", name, err);
        }
    }
    registry
}

pub fn id_of(registry: &Registry, name: &str) -> OwnerId {
    match registry.find_by_name(name) {
        Some(id) => id,
        None => panic!("No owner named {}", name),
    }
}

/// Helper function to assert that a Result is Ok and return the value.
pub fn assert_ok<T>(result: RegistryResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("Expected Ok but got error: {}", err),
    }
}

/// Asserts the structural ring checks plus the head/tail adjacency through
/// the public API.
pub fn assert_ring(registry: &Registry) {
    assert_ok(registry.verify_ring());
    match (registry.head(), registry.tail()) {
        (None, None) => assert_eq!(registry.len(), 0),
        (Some(head), Some(tail)) => {
            assert_eq!(assert_ok(registry.prev(head)), tail);
            assert_eq!(assert_ok(registry.next(tail)), head);

            let mut current = head;
            for _ in 0..registry.len() {
                current = assert_ok(registry.next(current));
            }
            assert_eq!(current, head, "a forward lap must return to the head");
        }
        anchors => panic!("Half-set anchors: {:?}", anchors),
    }
}
