use crate::PokemonType;
use serde::{Deserialize, Serialize};

/// One immutable entry of the record catalog.
///
/// `id` is the 0-based identity and doubles as the search key of every
/// Pokedex tree. User-facing ids are `id + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordTemplate {
    pub id: u16,
    pub name: String,
    pub pokemon_type: PokemonType,
    pub hp: u16,
    pub attack: u16,
    pub can_evolve: bool,
}

impl RecordTemplate {
    /// The 1-based id shown to users.
    pub fn user_id(&self) -> u32 {
        u32::from(self.id) + 1
    }
}

/// Serialize a full catalog to the postcard wire format.
pub fn encode_catalog(templates: &[RecordTemplate]) -> Result<Vec<u8>, postcard::Error> {
    postcard::to_allocvec(templates)
}

/// Decode a catalog previously produced by [`encode_catalog`].
pub fn decode_catalog(bytes: &[u8]) -> Result<Vec<RecordTemplate>, postcard::Error> {
    postcard::from_bytes(bytes)
}
