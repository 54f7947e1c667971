//! In-memory catalog store.
//!
//! [`InMemoryCatalog`] keeps the whole [`CatalogState`] behind one `RwLock`.
//! Each write holds the lock across its full validate-then-commit sequence,
//! which is what keeps the uniqueness, capacity and ordering checks sound
//! when the catalog is shared between threads.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;
use tvdb_types::{Actor, ReleaseDate, Score, TransmissionService, TvSeries, User};

use crate::config::CatalogConfig;
use crate::error::{CatalogError, CatalogResult};
use crate::state::CatalogState;
use crate::traits::{CatalogReader, CatalogWriter};

/// An in-memory implementation of [`CatalogReader`] and [`CatalogWriter`].
///
/// Data is lost when the catalog is dropped.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    config: CatalogConfig,
    inner: RwLock<CatalogState>,
}

impl InMemoryCatalog {
    /// Create an empty catalog with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CatalogConfig) -> Self {
        Self {
            config,
            inner: RwLock::new(CatalogState::new()),
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    fn read(&self) -> CatalogResult<RwLockReadGuard<'_, CatalogState>> {
        self.inner.read().map_err(|_| CatalogError::LockPoisoned)
    }

    fn write(&self) -> CatalogResult<RwLockWriteGuard<'_, CatalogState>> {
        self.inner.write().map_err(|_| CatalogError::LockPoisoned)
    }
}

/// Log the outcome of a mutation and pass it through.
fn logged<T: std::fmt::Debug>(op: &'static str, result: CatalogResult<T>) -> CatalogResult<T> {
    match &result {
        Ok(value) => debug!(op, result = ?value, "catalog updated"),
        Err(err) => debug!(op, error = %err, "catalog mutation rejected"),
    }
    result
}

impl CatalogWriter for InMemoryCatalog {
    fn add_transmission_services(&self, names: &[&str]) -> CatalogResult<usize> {
        let mut state = self.write()?;
        debug!(services = ?names, policy = ?self.config.service_policy, "registering services");
        logged(
            "add_transmission_services",
            state.insert_services(names, self.config.service_policy),
        )
    }

    fn add_series(&self, title: &str, service: &str, genre: &str) -> CatalogResult<usize> {
        let mut state = self.write()?;
        debug!(series = %title, service = %service, genre = %genre, "registering series");
        logged("add_series", state.insert_series(title, service, genre))
    }

    fn add_actor(&self, name: &str, surname: &str, nationality: &str) -> CatalogResult<usize> {
        let mut state = self.write()?;
        debug!(name = %name, surname = %surname, "registering actor");
        logged("add_actor", state.insert_actor(name, surname, nationality))
    }

    fn add_user(&self, username: &str, favorite_genre: &str) -> CatalogResult<usize> {
        let mut state = self.write()?;
        debug!(user = %username, genre = %favorite_genre, "registering user");
        logged("add_user", state.insert_user(username, favorite_genre))
    }

    fn add_cast(&self, title: &str, actors: &[&str]) -> CatalogResult<usize> {
        let mut state = self.write()?;
        debug!(series = %title, actors = ?actors, "adding cast");
        logged("add_cast", state.add_cast(title, actors))
    }

    fn add_season(
        &self,
        title: &str,
        episode_target: u32,
        release_date: ReleaseDate,
    ) -> CatalogResult<u32> {
        let mut state = self.write()?;
        debug!(series = %title, episodes = episode_target, released = %release_date, "adding season");
        logged("add_season", state.add_season(title, episode_target, release_date))
    }

    fn add_episode(&self, title: &str, season: u32, episode: &str) -> CatalogResult<usize> {
        let mut state = self.write()?;
        debug!(series = %title, season, episode = %episode, "adding episode");
        logged("add_episode", state.add_episode(title, season, episode))
    }

    fn like_series(&self, username: &str, title: &str) -> CatalogResult<usize> {
        let mut state = self.write()?;
        debug!(user = %username, series = %title, "adding favorite");
        logged("like_series", state.like_series(username, title))
    }

    fn add_review(&self, username: &str, title: &str, score: Score) -> CatalogResult<f64> {
        let mut state = self.write()?;
        debug!(user = %username, series = %title, score = score.value(), "adding review");
        logged(
            "add_review",
            state.add_review(username, title, score, self.config.review_policy),
        )
    }
}

impl CatalogReader for InMemoryCatalog {
    fn has_service(&self, name: &str) -> CatalogResult<bool> {
        Ok(self.read()?.services.contains(name))
    }

    fn services(&self) -> CatalogResult<Vec<TransmissionService>> {
        Ok(self
            .read()?
            .services
            .iter()
            .map(TransmissionService::new)
            .collect())
    }

    fn series(&self, title: &str) -> CatalogResult<Option<TvSeries>> {
        Ok(self.read()?.series.get(title).cloned())
    }

    fn all_series(&self) -> CatalogResult<Vec<TvSeries>> {
        Ok(self.read()?.series.values().cloned().collect())
    }

    fn actor(&self, key: &str) -> CatalogResult<Option<Actor>> {
        Ok(self.read()?.actors.get(key).cloned())
    }

    fn actors(&self) -> CatalogResult<Vec<Actor>> {
        Ok(self.read()?.actors.values().cloned().collect())
    }

    fn user(&self, username: &str) -> CatalogResult<Option<User>> {
        Ok(self.read()?.users.get(username).cloned())
    }

    fn users(&self) -> CatalogResult<Vec<User>> {
        Ok(self.read()?.users.values().cloned().collect())
    }

    fn series_of_actor(&self, key: &str) -> CatalogResult<Vec<String>> {
        self.read()?.appearances_of(key)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use proptest::prelude::*;
    use tvdb_types::ActorId;

    use super::*;
    use crate::config::{ReviewPolicy, ServicePolicy};
    use crate::error::{EntityKind, ErrorKind};

    fn date(s: &str) -> ReleaseDate {
        ReleaseDate::parse_season(s).unwrap()
    }

    fn seeded() -> InMemoryCatalog {
        let catalog = InMemoryCatalog::new();
        catalog.add_transmission_services(&["Netflix", "Prime"]).unwrap();
        catalog.add_series("Dark", "Netflix", "Thriller").unwrap();
        catalog.add_series("The Boys", "Prime", "Action").unwrap();
        catalog.add_actor("Louis", "Hofmann", "German").unwrap();
        catalog.add_user("ann", "Thriller").unwrap();
        catalog
    }

    #[test]
    fn lookups_return_supplied_attributes() {
        let catalog = seeded();

        let series = catalog.series("Dark").unwrap().unwrap();
        assert_eq!(series.service, "Netflix");
        assert_eq!(series.genre, "Thriller");

        let actor = catalog.actor("Louis Hofmann").unwrap().unwrap();
        assert_eq!(actor.id, ActorId::from_parts("Louis", "Hofmann"));
        assert_eq!(actor.name, "Louis");
        assert_eq!(actor.surname, "Hofmann");
        assert_eq!(actor.nationality, "German");

        let user = catalog.user("ann").unwrap().unwrap();
        assert_eq!(user.favorite_genre, "Thriller");
        assert!(user.favorites.is_empty());

        assert!(catalog.has_service("Prime").unwrap());
        assert!(catalog.series("Lost").unwrap().is_none());
    }

    #[test]
    fn listings_are_alphabetical() {
        let catalog = seeded();
        catalog.add_series("Babylon Berlin", "Netflix", "Drama").unwrap();
        let titles: Vec<String> =
            catalog.all_series().unwrap().into_iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["Babylon Berlin", "Dark", "The Boys"]);
        let services: Vec<String> =
            catalog.services().unwrap().into_iter().map(|s| s.name).collect();
        assert_eq!(services, vec!["Netflix", "Prime"]);
    }

    #[test]
    fn series_of_actor_uses_index() {
        let catalog = seeded();
        catalog.add_cast("The Boys", &["Louis Hofmann"]).unwrap();
        catalog.add_cast("Dark", &["Louis Hofmann", "Louis Hofmann"]).unwrap();
        assert_eq!(catalog.series_of_actor("Louis Hofmann").unwrap(), vec!["Dark", "The Boys"]);
        assert_eq!(
            catalog.series_of_actor("Nobody").unwrap_err().kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn stats_count_everything() {
        let catalog = seeded();
        catalog.add_season("Dark", 2, date("01:12:2017")).unwrap();
        catalog.add_episode("Dark", 1, "Secrets").unwrap();
        catalog.add_review("ann", "Dark", Score::new(9).unwrap()).unwrap();

        let stats = catalog.stats().unwrap();
        assert_eq!(stats.services, 2);
        assert_eq!(stats.series, 2);
        assert_eq!(stats.seasons, 1);
        assert_eq!(stats.episodes, 1);
        assert_eq!(stats.actors, 1);
        assert_eq!(stats.users, 1);
        assert_eq!(stats.reviews, 1);
    }

    #[test]
    fn config_drives_policies() {
        let catalog = InMemoryCatalog::with_config(CatalogConfig::lenient());
        assert_eq!(catalog.config().review_policy, ReviewPolicy::Replace);
        assert_eq!(catalog.config().service_policy, ServicePolicy::Lenient);

        catalog.add_transmission_services(&["Netflix"]).unwrap();
        assert_eq!(catalog.add_transmission_services(&["Netflix", "Hulu"]).unwrap(), 2);

        catalog.add_series("Dark", "Netflix", "Thriller").unwrap();
        catalog.add_user("ann", "Thriller").unwrap();
        catalog.add_review("ann", "Dark", Score::new(3).unwrap()).unwrap();
        let avg = catalog.add_review("ann", "Dark", Score::new(7).unwrap()).unwrap();
        assert_eq!(avg, 7.0);
    }

    #[test]
    fn default_rejects_duplicate_service() {
        let catalog = seeded();
        let err = catalog.add_transmission_services(&["Netflix"]).unwrap_err();
        assert_eq!(err, CatalogError::duplicate(EntityKind::Service, "Netflix"));
    }

    #[test]
    fn concurrent_likes_are_serialized() {
        let catalog = Arc::new(seeded());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let catalog = Arc::clone(&catalog);
                thread::spawn(move || catalog.like_series("ann", "Dark").is_ok())
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();
        assert_eq!(successes, 1);
        assert_eq!(catalog.user("ann").unwrap().unwrap().favorites.len(), 1);
    }

    fn snapshot(catalog: &InMemoryCatalog) -> CatalogState {
        catalog.read().unwrap().clone()
    }

    proptest! {
        #[test]
        fn duplicate_inserts_leave_store_unchanged(
            names in proptest::collection::btree_set("[a-z]{1,8}", 1..6),
            pick in any::<prop::sample::Index>(),
        ) {
            let names: Vec<String> = names.into_iter().collect();
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let dup = pick.get(&refs).to_string();

            let catalog = InMemoryCatalog::new();
            catalog.add_transmission_services(&refs).unwrap();
            for name in &refs {
                catalog.add_series(name, refs[0], "Drama").unwrap();
                catalog.add_actor(name, "Surname", "Nowhere").unwrap();
                catalog.add_user(name, "Drama").unwrap();
            }
            let before = snapshot(&catalog);

            let errors = [
                catalog.add_transmission_services(&[dup.as_str()]).unwrap_err(),
                catalog.add_series(&dup, refs[0], "Comedy").unwrap_err(),
                catalog.add_actor(&dup, "Surname", "Elsewhere").unwrap_err(),
                catalog.add_user(&dup, "Comedy").unwrap_err(),
            ];
            for err in errors {
                prop_assert_eq!(err.kind(), ErrorKind::DuplicateKey);
            }
            prop_assert_eq!(snapshot(&catalog), before);
        }
    }
}
