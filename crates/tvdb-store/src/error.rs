//! Error types for catalog operations.

use std::fmt;

use thiserror::Error;
use tvdb_types::{ReleaseDate, TypeError};

/// The kind of entity or relationship an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Service,
    Series,
    Season,
    Episode,
    Actor,
    User,
    Favorite,
    Review,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Service => "transmission service",
            EntityKind::Series => "tv series",
            EntityKind::Season => "season",
            EntityKind::Episode => "episode",
            EntityKind::Actor => "actor",
            EntityKind::User => "user",
            EntityKind::Favorite => "favorite",
            EntityKind::Review => "review",
        };
        f.write_str(name)
    }
}

/// Coarse classification callers can match on without destructuring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    DuplicateKey,
    NotFound,
    InvalidOrdering,
    CapacityExceeded,
    InvalidArgument,
    Internal,
}

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// An entity or relationship with this natural key already exists.
    #[error("{entity} already exists: {key}")]
    DuplicateKey { entity: EntityKind, key: String },

    /// A referenced key does not exist.
    #[error("{entity} not found: {key}")]
    NotFound { entity: EntityKind, key: String },

    /// A new season would be released before the series' latest season.
    #[error("season of {series} released {requested} precedes latest season released {latest}")]
    InvalidOrdering {
        series: String,
        latest: ReleaseDate,
        requested: ReleaseDate,
    },

    /// The season already holds its declared number of episodes.
    #[error("season {season} of {series} already holds {capacity} episode(s)")]
    CapacityExceeded {
        series: String,
        season: u32,
        capacity: u32,
    },

    /// Malformed date or out-of-range score.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The store lock was poisoned by a panicking writer.
    #[error("catalog lock poisoned")]
    LockPoisoned,
}

impl CatalogError {
    pub fn duplicate(entity: EntityKind, key: impl Into<String>) -> Self {
        Self::DuplicateKey {
            entity,
            key: key.into(),
        }
    }

    pub fn not_found(entity: EntityKind, key: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            key: key.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::DuplicateKey { .. } => ErrorKind::DuplicateKey,
            CatalogError::NotFound { .. } => ErrorKind::NotFound,
            CatalogError::InvalidOrdering { .. } => ErrorKind::InvalidOrdering,
            CatalogError::CapacityExceeded { .. } => ErrorKind::CapacityExceeded,
            CatalogError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            CatalogError::LockPoisoned => ErrorKind::Internal,
        }
    }
}

impl From<TypeError> for CatalogError {
    fn from(err: TypeError) -> Self {
        CatalogError::InvalidArgument(err.to_string())
    }
}

/// Convenience type alias for catalog operations.
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
