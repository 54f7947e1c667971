//! Entity store and relationship layer for the TV series catalog.
//!
//! # Architecture
//!
//! - **Entity store**: transmission services, series, actors and users, each
//!   keyed by its natural identity and unique within its collection.
//! - **Relationship layer**: cast membership, seasons and episodes, favorites
//!   and reviews, all stored as keys into the entity collections.
//! - **Mutation API**: [`CatalogWriter`], which validates every precondition
//!   before committing so that failures never leave partial state.
//!
//! # Modules
//!
//! - [`error`] — [`CatalogError`] and its [`ErrorKind`] classification
//! - [`config`] — [`CatalogConfig`] policies
//! - [`traits`] — [`CatalogReader`] / [`CatalogWriter`] boundaries
//! - [`state`] / [`relations`] — The unlocked collections and their rules
//! - [`memory`] — Lock-guarded [`InMemoryCatalog`]

pub mod config;
pub mod error;
pub mod memory;
pub mod relations;
pub mod state;
pub mod traits;

pub use config::{CatalogConfig, ReviewPolicy, ServicePolicy};
pub use error::{CatalogError, CatalogResult, EntityKind, ErrorKind};
pub use memory::InMemoryCatalog;
pub use state::CatalogState;
pub use traits::{CatalogReader, CatalogStats, CatalogWriter};
