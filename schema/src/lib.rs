// Pokedex Manager Schema - Shared type definitions
// This crate contains the record catalog types that are shared between
// the main pokedex-manager crate and its build script, enabling the use of
// postcard for a compact compiled-in catalog.

// Re-export the main types
pub use pokemon_types::*;
pub use species_data::*;

pub mod pokemon_types;
pub mod species_data;
