use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString};

/// Category tag carried by every catalog record.
///
/// Displays and parses in upper case ("GRASS", "FIRE", ...), which is the
/// form used in record listings.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum PokemonType {
    Grass,
    Fire,
    Water,
    Bug,
    Normal,
    Poison,
    Electric,
    Ground,
    Fairy,
    Fighting,
    Psychic,
    Rock,
    Ghost,
    Dragon,
    Ice,
}
