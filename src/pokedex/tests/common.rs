use crate::errors::PokedexResult;
use crate::events::EventBus;
use crate::pokedex::{Pokedex, TraversalOrder};

/// Builds a Pokedex by inserting 1-based ids in the given order.
///
/// # Example
/// ```
/// let pokedex = pokedex_with(&[50, 20, 80]);
/// assert_eq!(pokedex.ids(TraversalOrder::PreOrder), vec![50, 20, 80]);
/// ```
pub fn pokedex_with(ids: &[i64]) -> Pokedex {
    let mut bus = EventBus::new();
    let mut pokedex = Pokedex::new();
    for id in ids {
        assert_ok(pokedex.insert_record(*id, &mut bus));
    }
    pokedex
}

/// A seven-node tree that is complete to depth 2:
///
/// ```text
///         50
///      20    80
///    10  30 70  90
/// ```
pub fn balanced_pokedex() -> Pokedex {
    pokedex_with(&[50, 20, 80, 10, 30, 70, 90])
}

/// Helper function to assert that a Result is Ok and return the value.
pub fn assert_ok<T>(result: PokedexResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("Expected Ok but got error: {}", err),
    }
}

/// Asserts the search-tree ordering: in-order ids are strictly ascending.
pub fn assert_search_order(pokedex: &Pokedex) {
    let ids = pokedex.ids(TraversalOrder::InOrder);
    assert!(
        ids.windows(2).all(|pair| pair[0] < pair[1]),
        "In-order ids are not strictly ascending: {:?}",
        ids
    );
    assert_eq!(ids.len(), pokedex.len());
}
