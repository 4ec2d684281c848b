#[cfg(test)]
mod tests {
    use crate::errors::{PokedexError, RecordError};
    use crate::events::{EventBus, PokedexEvent};
    use crate::pokedex::tests::common::{
        assert_ok, assert_search_order, balanced_pokedex, pokedex_with,
    };
    use crate::pokedex::{Pokedex, TraversalOrder};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::leaf(10, vec![50, 20, 30, 80, 70, 90])]
    #[case::two_children(20, vec![50, 10, 30, 80, 70, 90])]
    #[case::root(50, vec![20, 10, 30, 80, 70, 90])]
    #[case::right_two_children(80, vec![50, 20, 10, 30, 70, 90])]
    fn test_remove_shapes(#[case] user_id: i64, #[case] expected_pre_order: Vec<u32>) {
        let mut pokedex = balanced_pokedex();
        let mut bus = EventBus::new();

        let removed = assert_ok(pokedex.remove_record(user_id, &mut bus));

        assert_eq!(removed.user_id(), user_id as u32);
        assert_eq!(pokedex.ids(TraversalOrder::PreOrder), expected_pre_order);
        assert_eq!(pokedex.len(), 6);
        assert_search_order(&pokedex);
    }

    #[test]
    fn test_remove_node_with_single_child() {
        let mut pokedex = balanced_pokedex();
        let mut bus = EventBus::new();
        assert_ok(pokedex.remove_record(10, &mut bus));

        // 20 now only has its right child 30, which takes its place.
        assert_ok(pokedex.remove_record(20, &mut bus));

        assert_eq!(pokedex.ids(TraversalOrder::PreOrder), vec![50, 30, 80, 70, 90]);
        assert_eq!(
            bus.formatted_lines(),
            vec![
                "Removing Pokemon Caterpie (ID 10).".to_string(),
                "Removing Pokemon Raticate (ID 20).".to_string(),
            ]
        );
    }

    #[test]
    fn test_two_child_relink_is_silent() {
        let mut pokedex = balanced_pokedex();
        let mut bus = EventBus::new();

        assert_ok(pokedex.remove_record(50, &mut bus));

        assert_eq!(
            bus.events(),
            &[PokedexEvent::RecordRemoved {
                id: 50,
                name: "Diglett".to_string()
            }]
        );
    }

    #[rstest]
    #[case(42)]
    #[case(0)]
    #[case(-3)]
    fn test_remove_missing_id_is_idempotent(#[case] user_id: i64) {
        let mut pokedex = balanced_pokedex();
        let before = pokedex.ids(TraversalOrder::PreOrder);
        let mut bus = EventBus::new();

        for _ in 0..2 {
            let result = pokedex.remove_record(user_id, &mut bus);
            assert_eq!(
                result,
                Err(PokedexError::Record(RecordError::RecordNotFound(user_id)))
            );
            assert_eq!(pokedex.ids(TraversalOrder::PreOrder), before);
        }
        assert_eq!(
            bus.events(),
            &[
                PokedexEvent::RecordNotFound { id: user_id },
                PokedexEvent::RecordNotFound { id: user_id },
            ]
        );
    }

    #[test]
    fn test_remove_from_empty_pokedex() {
        let mut pokedex = Pokedex::new();
        let mut bus = EventBus::new();

        let result = pokedex.remove_record(1, &mut bus);

        assert_eq!(result, Err(PokedexError::Record(RecordError::EmptyPokedex)));
        assert!(bus.is_empty());
    }

    #[test]
    fn test_release_everything_in_any_order() {
        let mut pokedex = pokedex_with(&[64, 12, 150, 3, 33, 99, 101, 1, 151, 77, 40]);
        let mut bus = EventBus::new();

        for (released, user_id) in [33, 64, 1, 151, 12, 99, 3, 40, 150, 77, 101]
            .into_iter()
            .enumerate()
        {
            assert_ok(pokedex.remove_record(user_id, &mut bus));
            assert_eq!(pokedex.len(), 10 - released);
            assert_search_order(&pokedex);
            assert!(pokedex.find_record(user_id).is_none());
        }
        assert!(pokedex.is_empty());
    }
}
