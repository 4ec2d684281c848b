#[cfg(test)]
mod tests {
    use crate::errors::{PokedexError, RecordError};
    use crate::pokedex::tests::common::{assert_ok, balanced_pokedex, pokedex_with};
    use crate::pokedex::traversal::{collect_sorted_by_name, visit_level};
    use crate::pokedex::{Pokedex, TraversalOrder};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(TraversalOrder::LevelOrder, vec![1, 4, 7])]
    #[case(TraversalOrder::PreOrder, vec![1, 4, 7])]
    #[case(TraversalOrder::InOrder, vec![1, 4, 7])]
    #[case(TraversalOrder::PostOrder, vec![7, 4, 1])]
    fn test_starter_chain(#[case] order: TraversalOrder, #[case] expected: Vec<u32>) {
        // 1 is the root, 4 its right child, 7 the right child of 4.
        let pokedex = pokedex_with(&[1, 4, 7]);
        assert_eq!(pokedex.ids(order), expected);
    }

    #[rstest]
    #[case(TraversalOrder::LevelOrder, vec![50, 20, 80, 10, 30, 70, 90])]
    #[case(TraversalOrder::PreOrder, vec![50, 20, 10, 30, 80, 70, 90])]
    #[case(TraversalOrder::InOrder, vec![10, 20, 30, 50, 70, 80, 90])]
    #[case(TraversalOrder::PostOrder, vec![10, 30, 20, 70, 90, 80, 50])]
    fn test_balanced_tree_orders(#[case] order: TraversalOrder, #[case] expected: Vec<u32>) {
        assert_eq!(balanced_pokedex().ids(order), expected);
    }

    #[test]
    fn test_level_order_on_irregular_shape() {
        //        50
        //     20    80
        //       30 70
        //      25    75
        let pokedex = pokedex_with(&[50, 20, 80, 30, 70, 25, 75]);
        assert_eq!(
            pokedex.ids(TraversalOrder::LevelOrder),
            vec![50, 20, 80, 30, 70, 25, 75]
        );
    }

    #[test]
    fn test_visit_level_reports_empty_levels() {
        let pokedex = pokedex_with(&[2, 1, 3]);
        let mut seen = Vec::new();
        let mut record = |node: &crate::pokedex::PokemonNode| seen.push(node.id());

        assert!(visit_level(pokedex.root(), 1, &mut record));
        assert!(!visit_level(pokedex.root(), 2, &mut record));
        assert_eq!(seen, vec![0, 2]);
    }

    #[test]
    fn test_alphabetical_ignores_tree_shape() {
        // Bulbasaur, Charmander, Squirtle, Pikachu
        let pokedex = pokedex_with(&[1, 4, 7, 25]);
        assert_eq!(pokedex.ids(TraversalOrder::Alphabetical), vec![1, 4, 25, 7]);

        let names: Vec<&str> = collect_sorted_by_name(pokedex.root())
            .iter()
            .map(|node| node.name())
            .collect();
        assert_eq!(names, vec!["Bulbasaur", "Charmander", "Pikachu", "Squirtle"]);
    }

    #[test]
    fn test_every_order_visits_each_record_once() {
        let pokedex = pokedex_with(&[64, 12, 150, 3, 33, 99, 101, 1, 151, 77, 40]);
        let mut expected = pokedex.ids(TraversalOrder::InOrder);
        expected.sort_unstable();

        for order in TraversalOrder::MENU {
            let mut ids = pokedex.ids(order);
            ids.sort_unstable();
            assert_eq!(ids, expected, "{} did not visit each record once", order);
        }
        // Walks are read-only.
        assert_eq!(pokedex.len(), 11);
    }

    #[test]
    fn test_display_listing() {
        let pokedex = pokedex_with(&[7, 1]);
        let listing = assert_ok(pokedex.display(TraversalOrder::InOrder));
        assert_eq!(
            listing,
            "ID: 1, Name: Bulbasaur, Type: GRASS, HP: 45, Attack: 49, Can Evolve: Yes\n\
             ID: 7, Name: Squirtle, Type: WATER, HP: 44, Attack: 48, Can Evolve: Yes"
        );
    }

    #[test]
    fn test_display_of_empty_pokedex() {
        assert_eq!(
            Pokedex::new().display(TraversalOrder::PreOrder),
            Err(PokedexError::Record(RecordError::EmptyPokedex))
        );
    }
}
