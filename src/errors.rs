use std::fmt;

/// Main error type for the Pokedex manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PokedexError {
    /// Error related to catalog lookup
    Catalog(CatalogError),
    /// Error related to records inside a single Pokedex
    Record(RecordError),
    /// Error related to the owner registry
    Registry(RegistryError),
}

/// Errors related to the compiled-in record catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The requested 1-based id is outside the catalog
    InvalidId(i64),
    /// The starter choice is not one of the offered starters
    InvalidStarter(i64),
    /// Catalog data is malformed or incomplete
    MalformedData(String),
}

/// Errors related to records stored in a Pokedex tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The record is already present; nothing was changed
    DuplicateRecord(u32),
    /// No record with this 1-based id is present
    RecordNotFound(i64),
    /// The record is a terminal stage
    CannotEvolve { name: String, id: u32 },
    /// The operation needs at least one record
    EmptyPokedex,
}

/// Errors related to the owner registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// An owner with exactly this name already exists
    DuplicateOwnerName(String),
    /// No owner with this name exists
    OwnerNotFound(String),
    /// The owner that should receive a merge does not exist
    MergeTargetNotFound(String),
    /// The owner that should be absorbed by a merge does not exist
    MergeSourceNotFound(String),
    /// Both sides of a merge name the same owner
    SelfMerge(String),
    /// The operation needs more owners than are registered
    NotEnoughOwners { required: usize, found: usize },
    /// The registry is empty
    NoOwners,
    /// A 1-based menu position outside the registry
    InvalidPosition(i64),
    /// The handle refers to an owner that has been removed
    StaleOwner,
    /// The ring links no longer form a single cycle
    InconsistentRing(String),
}

impl fmt::Display for PokedexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PokedexError::Catalog(err) => write!(f, "Catalog error: {}", err),
            PokedexError::Record(err) => write!(f, "Record error: {}", err),
            PokedexError::Registry(err) => write!(f, "Registry error: {}", err),
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::InvalidId(id) => write!(f, "Invalid ID: {}", id),
            CatalogError::InvalidStarter(choice) => write!(f, "Invalid starter choice: {}", choice),
            CatalogError::MalformedData(details) => write!(f, "Malformed catalog data: {}", details),
        }
    }
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::DuplicateRecord(id) => {
                write!(f, "Pokemon with ID {} is already in the Pokedex", id)
            }
            RecordError::RecordNotFound(id) => write!(f, "No Pokemon ID {} found", id),
            RecordError::CannotEvolve { name, id } => write!(f, "{} (ID {}) cannot evolve", name, id),
            RecordError::EmptyPokedex => write!(f, "Pokedex is empty"),
        }
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateOwnerName(name) => write!(f, "Owner '{}' already exists", name),
            RegistryError::OwnerNotFound(name) => write!(f, "Owner '{}' not found", name),
            RegistryError::MergeTargetNotFound(name) => {
                write!(f, "Merge target '{}' not found", name)
            }
            RegistryError::MergeSourceNotFound(name) => {
                write!(f, "Merge source '{}' not found", name)
            }
            RegistryError::SelfMerge(name) => write!(f, "Cannot merge '{}' into itself", name),
            RegistryError::NotEnoughOwners { required, found } => write!(
                f,
                "Not enough owners: {} required, {} registered",
                required, found
            ),
            RegistryError::NoOwners => write!(f, "No existing Pokedexes"),
            RegistryError::InvalidPosition(position) => {
                write!(f, "No Pokedex at position {}", position)
            }
            RegistryError::StaleOwner => write!(f, "Owner handle is no longer valid"),
            RegistryError::InconsistentRing(details) => {
                write!(f, "Inconsistent owner ring: {}", details)
            }
        }
    }
}

impl std::error::Error for PokedexError {}
impl std::error::Error for CatalogError {}
impl std::error::Error for RecordError {}
impl std::error::Error for RegistryError {}

impl From<CatalogError> for PokedexError {
    fn from(err: CatalogError) -> Self {
        PokedexError::Catalog(err)
    }
}

impl From<RecordError> for PokedexError {
    fn from(err: RecordError) -> Self {
        PokedexError::Record(err)
    }
}

impl From<RegistryError> for PokedexError {
    fn from(err: RegistryError) -> Self {
        PokedexError::Registry(err)
    }
}

/// Type alias for Results using PokedexError
pub type PokedexResult<T> = Result<T, PokedexError>;

/// Type alias for Results using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Type alias for Results using RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Type alias for Results using RegistryError
pub type RegistryResult<T> = Result<T, RegistryError>;
