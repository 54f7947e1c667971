//! Canonical entity collections.
//!
//! [`CatalogState`] is the unlocked data behind [`InMemoryCatalog`]. Every
//! mutating method checks all of its preconditions first and only then
//! touches the collections, so an `Err` always means nothing changed.
//!
//! [`InMemoryCatalog`]: crate::memory::InMemoryCatalog

use std::collections::{BTreeMap, BTreeSet};

use tvdb_types::{Actor, ActorId, TvSeries, User};

use crate::config::ServicePolicy;
use crate::error::{CatalogError, CatalogResult, EntityKind};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogState {
    pub(crate) services: BTreeSet<String>,
    pub(crate) series: BTreeMap<String, TvSeries>,
    pub(crate) actors: BTreeMap<ActorId, Actor>,
    pub(crate) users: BTreeMap<String, User>,
    /// Actor -> titles whose cast lists them. Maintained by `add_cast`.
    pub(crate) appearances: BTreeMap<ActorId, BTreeSet<String>>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_services(
        &mut self,
        names: &[&str],
        policy: ServicePolicy,
    ) -> CatalogResult<usize> {
        let mut fresh = BTreeSet::new();
        for name in names {
            let duplicate = self.services.contains(*name) || !fresh.insert(*name);
            if duplicate && policy == ServicePolicy::Strict {
                return Err(CatalogError::duplicate(EntityKind::Service, *name));
            }
        }

        self.services.extend(fresh.into_iter().map(str::to_string));
        Ok(self.services.len())
    }

    pub fn insert_series(
        &mut self,
        title: &str,
        service: &str,
        genre: &str,
    ) -> CatalogResult<usize> {
        if !self.services.contains(service) {
            return Err(CatalogError::not_found(EntityKind::Service, service));
        }
        if self.series.contains_key(title) {
            return Err(CatalogError::duplicate(EntityKind::Series, title));
        }

        self.series
            .insert(title.to_string(), TvSeries::new(title, service, genre));
        Ok(self.series.len())
    }

    pub fn insert_actor(
        &mut self,
        name: &str,
        surname: &str,
        nationality: &str,
    ) -> CatalogResult<usize> {
        let actor = Actor::new(name, surname, nationality);
        if self.actors.contains_key(&actor.id) {
            return Err(CatalogError::duplicate(EntityKind::Actor, actor.id.as_str()));
        }

        self.actors.insert(actor.id.clone(), actor);
        Ok(self.actors.len())
    }

    pub fn insert_user(&mut self, username: &str, favorite_genre: &str) -> CatalogResult<usize> {
        if self.users.contains_key(username) {
            return Err(CatalogError::duplicate(EntityKind::User, username));
        }

        self.users
            .insert(username.to_string(), User::new(username, favorite_genre));
        Ok(self.users.len())
    }

    pub fn series_ref(&self, title: &str) -> CatalogResult<&TvSeries> {
        self.series
            .get(title)
            .ok_or_else(|| CatalogError::not_found(EntityKind::Series, title))
    }

    pub(crate) fn series_mut(&mut self, title: &str) -> CatalogResult<&mut TvSeries> {
        self.series
            .get_mut(title)
            .ok_or_else(|| CatalogError::not_found(EntityKind::Series, title))
    }

    pub fn user_ref(&self, username: &str) -> CatalogResult<&User> {
        self.users
            .get(username)
            .ok_or_else(|| CatalogError::not_found(EntityKind::User, username))
    }

    pub fn actor_ref(&self, key: &str) -> CatalogResult<&Actor> {
        self.actors
            .get(key)
            .ok_or_else(|| CatalogError::not_found(EntityKind::Actor, key))
    }

    pub fn appearances_of(&self, key: &str) -> CatalogResult<Vec<String>> {
        self.actor_ref(key)?;
        Ok(self
            .appearances
            .get(key)
            .map(|titles| titles.iter().cloned().collect())
            .unwrap_or_default())
    }
}
