//! Relationship layer: cast membership, seasons and episodes, favorites and
//! reviews. Every relationship is stored as a key into the entity
//! collections of [`CatalogState`].

use tvdb_types::{ActorId, ReleaseDate, Review, Score, Season};

use crate::config::ReviewPolicy;
use crate::error::{CatalogError, CatalogResult, EntityKind};
use crate::state::CatalogState;

impl CatalogState {
    pub fn add_cast(&mut self, title: &str, actors: &[&str]) -> CatalogResult<usize> {
        self.series_ref(title)?;
        let ids = actors
            .iter()
            .map(|key| self.actor_ref(key).map(|actor| actor.id.clone()))
            .collect::<CatalogResult<Vec<ActorId>>>()?;

        for id in &ids {
            self.appearances
                .entry(id.clone())
                .or_default()
                .insert(title.to_string());
        }
        let series = self.series_mut(title)?;
        series.cast.extend(ids);
        Ok(series.cast.len())
    }

    pub fn add_season(
        &mut self,
        title: &str,
        episode_target: u32,
        release_date: ReleaseDate,
    ) -> CatalogResult<u32> {
        let series = self.series_mut(title)?;
        if let Some(latest) = series.latest_release_date() {
            if release_date.is_before(&latest) {
                return Err(CatalogError::InvalidOrdering {
                    series: title.to_string(),
                    latest,
                    requested: release_date,
                });
            }
        }

        let number = series.season_count() + 1;
        series
            .seasons
            .insert(number, Season::new(title, number, episode_target, release_date));
        Ok(series.season_count())
    }

    pub fn add_episode(&mut self, title: &str, season: u32, episode: &str) -> CatalogResult<usize> {
        let series = self.series_mut(title)?;
        let target = series
            .seasons
            .get_mut(&season)
            .ok_or_else(|| {
                CatalogError::not_found(EntityKind::Season, format!("{title} {season}"))
            })?;

        if target.is_full() {
            return Err(CatalogError::CapacityExceeded {
                series: title.to_string(),
                season,
                capacity: target.episode_target,
            });
        }
        if target.has_episode(episode) {
            return Err(CatalogError::duplicate(
                EntityKind::Episode,
                format!("{title} {season}: {episode}"),
            ));
        }

        target.episodes.push(episode.to_string());
        Ok(target.episode_count())
    }

    pub fn like_series(&mut self, username: &str, title: &str) -> CatalogResult<usize> {
        self.user_ref(username)?;
        self.series_ref(title)?;

        let user = self
            .users
            .get_mut(username)
            .ok_or_else(|| CatalogError::not_found(EntityKind::User, username))?;
        if user.likes(title) {
            return Err(CatalogError::duplicate(
                EntityKind::Favorite,
                format!("{username} -> {title}"),
            ));
        }

        user.favorites.insert(title.to_string());
        Ok(user.favorites.len())
    }

    pub fn add_review(
        &mut self,
        username: &str,
        title: &str,
        score: Score,
        policy: ReviewPolicy,
    ) -> CatalogResult<f64> {
        self.user_ref(username)?;
        let series = self.series_mut(title)?;

        if series.reviews.contains_key(username) && policy == ReviewPolicy::Reject {
            return Err(CatalogError::duplicate(
                EntityKind::Review,
                format!("{username} -> {title}"),
            ));
        }

        series.reviews.insert(
            username.to_string(),
            Review {
                series: title.to_string(),
                username: username.to_string(),
                score,
            },
        );
        // At least one review exists now.
        Ok(series
            .average_score()
            .unwrap_or_else(|| f64::from(score.value())))
    }
}
