// In: src/lib.rs

//! Pokedex Manager
//!
//! Per-owner Pokedexes stored as binary search trees of catalog records, and
//! a circular registry of owners. The record catalog is compiled in at build
//! time.

// --- MODULE DECLARATIONS ---
pub mod catalog;
pub mod errors;
pub mod events;
pub mod interface;
pub mod pokedex;
pub mod registry;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{PokemonType, RecordTemplate};

// --- From this crate's modules (`src/`) ---

// Catalog access.
pub use catalog::{get_template, lookup_by_name, template_for_user_id, Starter};

// Pokedex trees and their walks.
pub use pokedex::{
    AbsorbStats, DuplicatePolicy, Evolution, FightOutcome, InsertOutcome, Pokedex, PokemonNode,
    RecordSummary, TraversalOrder,
};

// The owner ring.
pub use registry::{Direction, DirectionalWalk, Owner, OwnerId, Registry};

// Event reporting.
pub use events::{EventBus, PokedexEvent};

// Crate-specific error and result types.
pub use errors::{
    CatalogError, CatalogResult, PokedexError, PokedexResult, RecordError, RecordResult,
    RegistryError, RegistryResult,
};
