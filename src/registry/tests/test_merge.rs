#[cfg(test)]
mod tests {
    use crate::errors::RegistryError;
    use crate::events::{EventBus, PokedexEvent};
    use crate::pokedex::{AbsorbStats, TraversalOrder};
    use crate::registry::tests::common::{assert_ok, assert_ring, id_of, registry_with};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_merge_misty_into_ash() {
        let mut registry = registry_with(&[("Ash", &[1]), ("Misty", &[1, 7])]);
        let mut bus = EventBus::new();

        let stats = assert_ok(registry.merge_owners("Ash", "Misty", &mut bus));

        assert_eq!(stats, AbsorbStats { moved: 1, dropped: 1 });
        assert_eq!(registry.len(), 1);
        assert!(registry.find_by_name("Misty").is_none());
        let ash = assert_ok(registry.get(id_of(&registry, "Ash")));
        assert_eq!(ash.pokedex().ids(TraversalOrder::InOrder), vec![1, 7]);
        assert_eq!(
            bus.formatted_lines(),
            vec![
                "Merging Ash and Misty...\nMerge completed.".to_string(),
                "Owner 'Misty' has been removed after merging.".to_string(),
            ]
        );
        assert_ring(&registry);
    }

    #[test]
    fn test_merge_into_empty_pokedex_moves_tree() {
        let mut registry = registry_with(&[("Ash", &[]), ("Brock", &[74, 95, 111])]);
        let mut bus = EventBus::new();

        let stats = assert_ok(registry.merge_owners("Ash", "Brock", &mut bus));

        assert_eq!(stats, AbsorbStats { moved: 3, dropped: 0 });
        let ash = assert_ok(registry.get(id_of(&registry, "Ash")));
        assert_eq!(ash.pokedex().ids(TraversalOrder::PreOrder), vec![74, 95, 111]);
    }

    #[test]
    fn test_merge_keeps_other_owners_linked() {
        let mut registry = registry_with(&[
            ("Brock", &[74]),
            ("Misty", &[120, 54]),
            ("Ash", &[25, 54]),
            ("Gary", &[133]),
        ]);
        let mut bus = EventBus::new();

        assert_ok(registry.merge_owners("Gary", "Misty", &mut bus));

        assert_eq!(registry.names(), vec!["Brock", "Ash", "Gary"]);
        let gary = assert_ok(registry.get(id_of(&registry, "Gary")));
        assert_eq!(gary.pokedex().ids(TraversalOrder::InOrder), vec![54, 120, 133]);
        assert_eq!(
            bus.events().last(),
            Some(&PokedexEvent::OwnerRemovedAfterMerge {
                owner: "Misty".to_string()
            })
        );
        assert_ring(&registry);
    }

    #[test]
    fn test_merge_needs_two_owners() {
        let mut registry = registry_with(&[("Ash", &[1])]);
        let mut bus = EventBus::new();

        assert_eq!(
            registry.merge_owners("Ash", "Ash", &mut bus),
            Err(RegistryError::NotEnoughOwners {
                required: 2,
                found: 1
            })
        );
        assert!(bus.is_empty());
    }

    #[test]
    fn test_merge_rejects_unknown_names_before_mutation() {
        let mut registry = registry_with(&[("Ash", &[1]), ("Misty", &[7])]);
        let mut bus = EventBus::new();

        assert_eq!(
            registry.merge_owners("Brock", "Misty", &mut bus),
            Err(RegistryError::MergeTargetNotFound("Brock".to_string()))
        );
        assert_eq!(
            registry.merge_owners("Ash", "misty", &mut bus),
            Err(RegistryError::MergeSourceNotFound("misty".to_string()))
        );
        assert_eq!(registry.names(), vec!["Ash", "Misty"]);
        assert!(bus.is_empty());
    }

    #[test]
    fn test_self_merge_is_rejected() {
        let mut registry = registry_with(&[("Ash", &[1, 4]), ("Misty", &[7])]);
        let mut bus = EventBus::new();

        assert_eq!(
            registry.merge_owners("Ash", "Ash", &mut bus),
            Err(RegistryError::SelfMerge("Ash".to_string()))
        );
        let ash = assert_ok(registry.get(id_of(&registry, "Ash")));
        assert_eq!(ash.pokedex().len(), 2);
        assert_eq!(registry.len(), 2);
    }
}
