//! TOML scenario files replayed into a [`TvSeriesDb`].
//!
//! Tables are applied in dependency order: services, series, actors, casts,
//! seasons, episodes, users, likes, reviews. The first failing entry aborts
//! the replay.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tracing::info;
use tvdb_sdk::TvSeriesDb;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scenario {
    pub services: Vec<String>,
    pub series: Vec<SeriesEntry>,
    pub actors: Vec<ActorEntry>,
    pub casts: Vec<CastEntry>,
    pub seasons: Vec<SeasonEntry>,
    pub episodes: Vec<EpisodeEntry>,
    pub users: Vec<UserEntry>,
    pub likes: Vec<LikeEntry>,
    pub reviews: Vec<ReviewEntry>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SeriesEntry {
    pub title: String,
    pub service: String,
    pub genre: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ActorEntry {
    pub name: String,
    pub surname: String,
    pub nationality: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CastEntry {
    pub series: String,
    /// Actors as "name surname".
    pub actors: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SeasonEntry {
    pub series: String,
    pub episodes: u32,
    /// `dd:mm:yyyy`
    pub release_date: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct EpisodeEntry {
    pub series: String,
    pub season: u32,
    pub titles: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UserEntry {
    pub username: String,
    pub genre: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LikeEntry {
    pub user: String,
    pub series: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ReviewEntry {
    pub user: String,
    pub series: String,
    pub score: i64,
}

impl Scenario {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        Self::from_toml(&raw).with_context(|| format!("parsing scenario {}", path.display()))
    }

    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn apply(&self, db: &TvSeriesDb) -> anyhow::Result<()> {
        if !self.services.is_empty() {
            let services: Vec<&str> = self.services.iter().map(String::as_str).collect();
            db.add_transmission_service(&services)
                .context("registering transmission services")?;
        }

        for entry in &self.series {
            db.add_tv_series(&entry.title, &entry.service, &entry.genre)
                .with_context(|| format!("adding series {:?}", entry.title))?;
        }
        for entry in &self.actors {
            db.add_actor(&entry.name, &entry.surname, &entry.nationality)
                .with_context(|| format!("adding actor {} {}", entry.name, entry.surname))?;
        }
        for entry in &self.casts {
            let actors: Vec<&str> = entry.actors.iter().map(String::as_str).collect();
            db.add_cast(&entry.series, &actors)
                .with_context(|| format!("casting {:?}", entry.series))?;
        }
        for entry in &self.seasons {
            db.add_season(&entry.series, entry.episodes, &entry.release_date)
                .with_context(|| format!("adding season of {:?} ({})", entry.series, entry.release_date))?;
        }
        for entry in &self.episodes {
            for title in &entry.titles {
                db.add_episode(&entry.series, entry.season, title)
                    .with_context(|| {
                        format!("adding episode {:?} to {:?} season {}", title, entry.series, entry.season)
                    })?;
            }
        }
        for entry in &self.users {
            db.add_user(&entry.username, &entry.genre)
                .with_context(|| format!("adding user {:?}", entry.username))?;
        }
        for entry in &self.likes {
            db.like_tv_series(&entry.user, &entry.series)
                .with_context(|| format!("{:?} liking {:?}", entry.user, entry.series))?;
        }
        for entry in &self.reviews {
            db.add_review(&entry.user, &entry.series, entry.score)
                .with_context(|| format!("{:?} reviewing {:?}", entry.user, entry.series))?;
        }

        info!(
            series = self.series.len(),
            actors = self.actors.len(),
            users = self.users.len(),
            reviews = self.reviews.len(),
            "scenario applied"
        );
        Ok(())
    }
}
