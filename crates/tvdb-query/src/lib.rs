//! Query and aggregation engine for the TV series catalog.
//!
//! Every builder here is read-only and generic over
//! [`CatalogReader`](tvdb_store::CatalogReader), so it works against any
//! store backend:
//! - [`MissingEpisodes`] — seasons still lacking episodes, per series
//! - [`SuggestionEngine`] — unliked series in a user's favorite genre
//! - [`RatingAggregator`] — review averages, most awaited season, best actors

pub mod missing;
pub mod ratings;
pub mod suggest;

pub use missing::{MissingEpisodes, MissingEpisodesReport};
pub use ratings::{AwaitedSeason, RatingAggregator};
pub use suggest::{SuggestionEngine, NO_SUGGESTION};
