use schema::{PokemonType, RecordTemplate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An owning child slot. Each node is owned by exactly one parent slot (or
/// by the Pokedex root), so a tree can never share or alias nodes.
pub type Link = Option<Box<PokemonNode>>;

/// A node of a Pokedex tree.
#[derive(Debug)]
pub struct PokemonNode {
    pub(crate) template: &'static RecordTemplate,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl PokemonNode {
    /// Create a detached leaf for a catalog template.
    pub fn new(template: &'static RecordTemplate) -> Box<PokemonNode> {
        Box::new(PokemonNode {
            template,
            left: None,
            right: None,
        })
    }

    pub fn template(&self) -> &'static RecordTemplate {
        self.template
    }

    /// The 0-based identity; the tree's search key.
    pub fn id(&self) -> u16 {
        self.template.id
    }

    pub fn name(&self) -> &'static str {
        let template: &'static RecordTemplate = self.template;
        template.name.as_str()
    }

    pub fn left(&self) -> Option<&PokemonNode> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&PokemonNode> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn summary(&self) -> RecordSummary {
        RecordSummary::from(self.template)
    }
}

impl fmt::Display for PokemonNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}

/// A flat, user-facing view of one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSummary {
    pub id: u32,
    pub name: String,
    pub pokemon_type: PokemonType,
    pub hp: u16,
    pub attack: u16,
    pub can_evolve: bool,
}

impl From<&RecordTemplate> for RecordSummary {
    fn from(template: &RecordTemplate) -> Self {
        RecordSummary {
            id: template.user_id(),
            name: template.name.clone(),
            pokemon_type: template.pokemon_type,
            hp: template.hp,
            attack: template.attack,
            can_evolve: template.can_evolve,
        }
    }
}

impl fmt::Display for RecordSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Type: {}, HP: {}, Attack: {}, Can Evolve: {}",
            self.id,
            self.name,
            self.pokemon_type,
            self.hp,
            self.attack,
            if self.can_evolve { "Yes" } else { "No" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::get_template;

    #[test]
    fn test_new_node_is_leaf() {
        let node = PokemonNode::new(get_template(24).unwrap());
        assert!(node.is_leaf());
        assert_eq!(node.id(), 24);
        assert_eq!(node.name(), "Pikachu");
    }

    #[test]
    fn test_display_matches_listing_format() {
        let node = PokemonNode::new(get_template(0).unwrap());
        assert_eq!(
            node.to_string(),
            "ID: 1, Name: Bulbasaur, Type: GRASS, HP: 45, Attack: 49, Can Evolve: Yes"
        );
    }
}
