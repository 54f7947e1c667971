//! The [`CatalogWriter`] and [`CatalogReader`] traits defining the storage
//! interface.
//!
//! Writers validate every precondition before committing anything: a failed
//! call leaves the catalog exactly as it was. Readers return owned snapshots,
//! so a caller never observes a half-applied mutation.

use serde::Serialize;
use tvdb_types::{Actor, ReleaseDate, Score, TransmissionService, TvSeries, User};

use crate::error::{CatalogError, CatalogResult, EntityKind};

/// Write boundary: entity registration and relationship insertion.
pub trait CatalogWriter: Send + Sync {
    /// Register transmission services. Returns the number registered so far.
    fn add_transmission_services(&self, names: &[&str]) -> CatalogResult<usize>;

    /// Register a series on an existing service. Returns the number of series.
    fn add_series(&self, title: &str, service: &str, genre: &str) -> CatalogResult<usize>;

    /// Register an actor keyed by `"name surname"`. Returns the number of actors.
    fn add_actor(&self, name: &str, surname: &str, nationality: &str) -> CatalogResult<usize>;

    /// Register a user. Returns the number of users.
    fn add_user(&self, username: &str, favorite_genre: &str) -> CatalogResult<usize>;

    /// Append actors to a series' cast. Returns the resulting cast size.
    fn add_cast(&self, title: &str, actors: &[&str]) -> CatalogResult<usize>;

    /// Append a season numbered `season_count + 1`. Returns the new season count.
    fn add_season(
        &self,
        title: &str,
        episode_target: u32,
        release_date: ReleaseDate,
    ) -> CatalogResult<u32>;

    /// Append an episode to a season. Returns the season's episode count.
    fn add_episode(&self, title: &str, season: u32, episode: &str) -> CatalogResult<usize>;

    /// Add a series to a user's favorites. Returns the favorites count.
    fn like_series(&self, username: &str, title: &str) -> CatalogResult<usize>;

    /// Record a review. Returns the series' new average score.
    fn add_review(&self, username: &str, title: &str, score: Score) -> CatalogResult<f64>;
}

/// Read boundary: exact-key lookups and ordered listings.
///
/// Listings are sorted by natural key.
pub trait CatalogReader: Send + Sync {
    fn has_service(&self, name: &str) -> CatalogResult<bool>;

    fn services(&self) -> CatalogResult<Vec<TransmissionService>>;

    /// Returns `Ok(None)` if the series does not exist.
    fn series(&self, title: &str) -> CatalogResult<Option<TvSeries>>;

    fn all_series(&self) -> CatalogResult<Vec<TvSeries>>;

    /// Look up an actor by `"name surname"`.
    fn actor(&self, key: &str) -> CatalogResult<Option<Actor>>;

    fn actors(&self) -> CatalogResult<Vec<Actor>>;

    fn user(&self, username: &str) -> CatalogResult<Option<User>>;

    fn users(&self) -> CatalogResult<Vec<User>>;

    /// Titles of the series whose cast contains the actor, alphabetical and
    /// without duplicates.
    fn series_of_actor(&self, key: &str) -> CatalogResult<Vec<String>> {
        let actor = self
            .actor(key)?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Actor, key))?;
        Ok(self
            .all_series()?
            .into_iter()
            .filter(|s| s.has_actor(&actor.id))
            .map(|s| s.title)
            .collect())
    }

    /// Entity counts per collection.
    fn stats(&self) -> CatalogResult<CatalogStats> {
        let series = self.all_series()?;
        Ok(CatalogStats {
            services: self.services()?.len(),
            seasons: series.iter().map(|s| s.seasons.len()).sum(),
            episodes: series
                .iter()
                .flat_map(|s| s.seasons.values())
                .map(|s| s.episode_count())
                .sum(),
            reviews: series.iter().map(|s| s.reviews.len()).sum(),
            series: series.len(),
            actors: self.actors()?.len(),
            users: self.users()?.len(),
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub services: usize,
    pub series: usize,
    pub seasons: usize,
    pub episodes: usize,
    pub actors: usize,
    pub users: usize,
    pub reviews: usize,
}
