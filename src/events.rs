use serde::{Deserialize, Serialize};

/// Something observable that happened while operating on Pokedexes or the
/// owner registry. Ids carried by events are the 1-based ids users see.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum PokedexEvent {
    // Records
    RecordAdded {
        id: u32,
        name: String,
    },
    DuplicateRecord {
        id: u32,
    },
    /// A duplicate dropped while relinking or merging; never shown to users.
    DuplicateDropped {
        id: u32,
    },
    RecordRemoved {
        id: u32,
        name: String,
    },
    RecordNotFound {
        id: i64,
    },
    RecordEvolved {
        from_id: u32,
        from_name: String,
        to_id: u32,
        to_name: String,
    },
    FightResolved {
        first_name: String,
        first_score: f64,
        second_name: String,
        second_score: f64,
        winner: Option<String>,
    },

    // Owners
    OwnerCreated {
        owner: String,
        starter: String,
    },
    PokedexDeleted {
        owner: String,
    },
    PokedexesMerged {
        target: String,
        source: String,
        moved: usize,
        dropped: usize,
    },
    OwnerRemovedAfterMerge {
        owner: String,
    },
    OwnersSorted {
        count: usize,
    },
    SortSkipped {
        count: usize,
    },
    RegistryCleared {
        owners: usize,
    },
}

impl PokedexEvent {
    /// Formats the event into the line shown to users.
    /// Returns None for silent events that should not produce user-visible text.
    pub fn format(&self) -> Option<String> {
        match self {
            // === Record Events ===
            PokedexEvent::RecordAdded { id, name } => {
                Some(format!("Pokemon {} (ID {}) added.", name, id))
            }
            PokedexEvent::DuplicateRecord { id } => Some(format!(
                "Pokemon with ID {} is already in the Pokedex. No changes made.",
                id
            )),
            PokedexEvent::DuplicateDropped { .. } => None,
            PokedexEvent::RecordRemoved { id, name } => {
                Some(format!("Removing Pokemon {} (ID {}).", name, id))
            }
            PokedexEvent::RecordNotFound { id } => {
                Some(format!("Pokemon with ID {} not found.", id))
            }
            PokedexEvent::RecordEvolved {
                from_id,
                from_name,
                to_id,
                to_name,
            } => Some(format!(
                "Pokemon evolved from {} (ID {}) to {} (ID {}).",
                from_name, from_id, to_name, to_id
            )),
            PokedexEvent::FightResolved {
                first_name,
                first_score,
                second_name,
                second_score,
                winner,
            } => {
                let verdict = match winner {
                    Some(name) => format!("{} wins!", name),
                    None => "It's a tie!".to_string(),
                };
                Some(format!(
                    "Pokemon 1: {} (Score = {:.2})\nPokemon 2: {} (Score = {:.2})\n{}",
                    first_name, first_score, second_name, second_score, verdict
                ))
            }

            // === Owner Events ===
            PokedexEvent::OwnerCreated { owner, starter } => Some(format!(
                "New Pokedex created for {} with starter {}.",
                owner, starter
            )),
            PokedexEvent::PokedexDeleted { owner } => {
                Some(format!("Deleting {}'s entire Pokedex...", owner))
            }
            PokedexEvent::PokedexesMerged { target, source, .. } => Some(format!(
                "Merging {} and {}...\nMerge completed.",
                target, source
            )),
            PokedexEvent::OwnerRemovedAfterMerge { owner } => Some(format!(
                "Owner '{}' has been removed after merging.",
                owner
            )),
            PokedexEvent::OwnersSorted { .. } => Some("Owners sorted by name.".to_string()),
            PokedexEvent::SortSkipped { .. } => {
                Some("0 or 1 owners only => no need to sort.".to_string())
            }
            PokedexEvent::RegistryCleared { .. } => None,
        }
    }
}

/// Event bus for collecting Pokedex and registry events.
///
/// ## Usage Examples
///
/// ```rust,ignore
/// let mut bus = EventBus::new();
/// registry.create_owner("Ash", Starter::Bulbasaur, &mut bus)?;
///
/// bus.print_formatted();                     // User-facing lines
/// bus.print_debug_with_message("Events:");   // Raw events with a header
/// println!("{}", bus);                       // Display trait
/// ```
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<PokedexEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: PokedexEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[PokedexEvent] {
        &self.events
    }

    /// Print all events in debug format with indentation.
    pub fn print_debug(&self) {
        for event in &self.events {
            println!("  {:?}", event);
        }
    }

    /// Print all events in debug format with a custom prefix message.
    pub fn print_debug_with_message(&self, message: &str) {
        println!("{}", message);
        self.print_debug();
    }

    /// Print the user-facing text of every event, skipping silent ones.
    pub fn print_formatted(&self) {
        for line in self.formatted_lines() {
            println!("{}", line);
        }
    }

    /// Print the user-facing text of every event after a custom prefix message.
    pub fn print_formatted_with_message(&self, message: &str) {
        println!("{}", message);
        self.print_formatted();
    }

    /// The user-facing lines of all non-silent events, in order.
    pub fn formatted_lines(&self) -> Vec<String> {
        self.events.iter().filter_map(PokedexEvent::format).collect()
    }

    /// Return true if the event bus contains no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Return the number of events in the bus.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl std::fmt::Display for EventBus {
    /// Shows debug format of all events.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for event in &self.events {
            writeln!(f, "  {:?}", event)?;
        }
        Ok(())
    }
}
