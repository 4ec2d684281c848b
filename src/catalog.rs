//! The compiled-in record catalog.
//!
//! `build.rs` turns `data/catalog.ron` into postcard bytes plus a phf name
//! index; this module decodes the bytes once and hands out `&'static`
//! references. Templates are never copied into a Pokedex.

use crate::errors::{CatalogError, CatalogResult};
use schema::RecordTemplate;
use std::sync::LazyLock;

// Include the generated catalog data
include!(concat!(env!("OUT_DIR"), "/generated_catalog.rs"));

// Decoded once on first access
static CATALOG: LazyLock<Vec<RecordTemplate>> = LazyLock::new(|| {
    decode_compiled(CATALOG_BYTES).unwrap_or_else(|e| panic!("{}", e))
});

fn decode_compiled(bytes: &[u8]) -> CatalogResult<Vec<RecordTemplate>> {
    schema::decode_catalog(bytes).map_err(|e| CatalogError::MalformedData(e.to_string()))
}

/// 0-based identity of the Bulbasaur starter.
pub const BULBASAUR: u16 = 0;
/// 0-based identity of the Charmander starter.
pub const CHARMANDER: u16 = 3;
/// 0-based identity of the Squirtle starter.
pub const SQUIRTLE: u16 = 6;

/// The full catalog, ordered by identity.
pub fn catalog() -> &'static [RecordTemplate] {
    CATALOG.as_slice()
}

/// Number of templates in the catalog.
pub fn catalog_size() -> usize {
    catalog().len()
}

/// Look up a template by its 0-based identity.
pub fn get_template(id: u16) -> CatalogResult<&'static RecordTemplate> {
    catalog()
        .get(usize::from(id))
        .ok_or(CatalogError::InvalidId(i64::from(id) + 1))
}

/// Look up a template by the 1-based id users type in.
pub fn template_for_user_id(user_id: i64) -> CatalogResult<&'static RecordTemplate> {
    match identity_for_user_id(user_id) {
        Some(id) if usize::from(id) < catalog_size() => get_template(id),
        _ => Err(CatalogError::InvalidId(user_id)),
    }
}

/// Convert a 1-based user id into a 0-based identity without checking the
/// catalog bounds. Returns `None` for values that cannot be an identity.
pub fn identity_for_user_id(user_id: i64) -> Option<u16> {
    user_id
        .checked_sub(1)
        .and_then(|id| u16::try_from(id).ok())
}

/// Case-insensitive lookup by display name.
pub fn lookup_by_name(name: &str) -> Option<&'static RecordTemplate> {
    let key = name.trim().to_ascii_lowercase();
    CATALOG_BY_NAME
        .get(key.as_str())
        .and_then(|id| catalog().get(usize::from(*id)))
}

/// The starters offered when a new Pokedex is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Starter {
    Bulbasaur,
    Charmander,
    Squirtle,
}

impl Starter {
    pub const ALL: [Starter; 3] = [Starter::Bulbasaur, Starter::Charmander, Starter::Squirtle];

    /// Map a menu choice (1-3) to a starter.
    pub fn from_choice(choice: i64) -> CatalogResult<Starter> {
        match choice {
            1 => Ok(Starter::Bulbasaur),
            2 => Ok(Starter::Charmander),
            3 => Ok(Starter::Squirtle),
            other => Err(CatalogError::InvalidStarter(other)),
        }
    }

    pub fn template_id(self) -> u16 {
        match self {
            Starter::Bulbasaur => BULBASAUR,
            Starter::Charmander => CHARMANDER,
            Starter::Squirtle => SQUIRTLE,
        }
    }

    pub fn template(self) -> CatalogResult<&'static RecordTemplate> {
        get_template(self.template_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::PokemonType;

    #[test]
    fn test_catalog_is_contiguous() {
        assert_eq!(catalog_size(), 151);
        for (position, template) in catalog().iter().enumerate() {
            assert_eq!(usize::from(template.id), position);
        }
    }

    #[test]
    fn test_truncated_catalog_is_malformed() {
        let truncated = &CATALOG_BYTES[..4];
        assert!(matches!(
            decode_compiled(truncated),
            Err(CatalogError::MalformedData(_))
        ));
    }

    #[test]
    fn test_template_fields() {
        let charizard = get_template(5).unwrap();
        assert_eq!(charizard.name, "Charizard");
        assert_eq!(charizard.pokemon_type, PokemonType::Fire);
        assert_eq!((charizard.hp, charizard.attack), (78, 84));
        assert!(!charizard.can_evolve);
    }

    #[rstest]
    #[case(1, Some("Bulbasaur"))]
    #[case(151, Some("Mew"))]
    #[case(0, None)]
    #[case(152, None)]
    #[case(-4, None)]
    fn test_user_id_bounds(#[case] user_id: i64, #[case] expected: Option<&str>) {
        let result = template_for_user_id(user_id);
        match expected {
            Some(name) => assert_eq!(result.unwrap().name, name),
            None => assert_eq!(result, Err(CatalogError::InvalidId(user_id))),
        }
    }

    #[test]
    fn test_templates_are_shared_references() {
        let first = template_for_user_id(25).unwrap();
        let second = lookup_by_name("pikachu").unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_lookup_by_name_ignores_case_and_whitespace() {
        assert_eq!(lookup_by_name("  MR. MIME ").map(|t| t.id), Some(121));
        assert_eq!(lookup_by_name("Farfetch'd").map(|t| t.id), Some(82));
        assert!(lookup_by_name("Missingno").is_none());
    }

    #[test]
    fn test_starters() {
        let names: Vec<&str> = Starter::ALL
            .iter()
            .map(|starter| starter.template().unwrap().name.as_str())
            .collect();
        assert_eq!(names, vec!["Bulbasaur", "Charmander", "Squirtle"]);
        assert_eq!(Starter::from_choice(2), Ok(Starter::Charmander));
        assert_eq!(Starter::from_choice(4), Err(CatalogError::InvalidStarter(4)));
    }
}
