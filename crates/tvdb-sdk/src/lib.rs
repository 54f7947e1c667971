//! High-level API for the TV series catalog.
//!
//! [`TvSeriesDb`] is the main entry point for applications embedding the
//! catalog: it registers entities, links them, and answers the aggregate
//! queries, accepting dates and scores in their textual/raw forms.

pub mod database;
pub mod error;

pub use database::TvSeriesDb;
pub use error::{SdkError, SdkResult};

// Re-export key types
pub use tvdb_query::{AwaitedSeason, MissingEpisodesReport, NO_SUGGESTION};
pub use tvdb_store::{
    CatalogConfig, CatalogError, CatalogStats, ErrorKind, ReviewPolicy, ServicePolicy,
};
pub use tvdb_types::{Actor, ReleaseDate, Season, TransmissionService, TvSeries, User};
