//! Catalog entities.
//!
//! Entities hold references to each other only by natural key (service name,
//! series title, [`ActorId`], username). The store owning them is the single
//! source of truth; nothing here is shared by pointer.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::identity::ActorId;
use crate::score::{mean, Score};
use crate::temporal::ReleaseDate;

/// A platform broadcasting TV series.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TransmissionService {
    pub name: String,
}

impl TransmissionService {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub name: String,
    pub surname: String,
    pub nationality: String,
}

impl Actor {
    pub fn new(name: &str, surname: &str, nationality: &str) -> Self {
        Self {
            id: ActorId::from_parts(name, surname),
            name: name.to_string(),
            surname: surname.to_string(),
            nationality: nationality.to_string(),
        }
    }
}

/// A numbered group of episodes inside a series.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    /// 1-based, assigned at creation.
    pub number: u32,
    pub series: String,
    /// Declared number of episodes the season will hold.
    pub episode_target: u32,
    pub release_date: ReleaseDate,
    /// Episode titles in insertion order.
    pub episodes: Vec<String>,
}

impl Season {
    pub fn new(series: &str, number: u32, episode_target: u32, release_date: ReleaseDate) -> Self {
        Self {
            number,
            series: series.to_string(),
            episode_target,
            release_date,
            episodes: Vec::new(),
        }
    }

    pub fn episode_count(&self) -> usize {
        self.episodes.len()
    }

    pub fn has_episode(&self, title: &str) -> bool {
        self.episodes.iter().any(|e| e == title)
    }

    /// `true` once the season holds its declared number of episodes.
    pub fn is_full(&self) -> bool {
        self.episodes.len() >= self.episode_target as usize
    }

    /// `true` while fewer episodes are recorded than declared.
    pub fn is_missing_episodes(&self) -> bool {
        !self.is_full()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub series: String,
    pub username: String,
    pub score: Score,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TvSeries {
    pub title: String,
    pub service: String,
    pub genre: String,
    /// Cast in insertion order; the same actor may appear more than once.
    pub cast: Vec<ActorId>,
    pub seasons: BTreeMap<u32, Season>,
    /// Reviews keyed by username.
    pub reviews: BTreeMap<String, Review>,
}

impl TvSeries {
    pub fn new(title: &str, service: &str, genre: &str) -> Self {
        Self {
            title: title.to_string(),
            service: service.to_string(),
            genre: genre.to_string(),
            cast: Vec::new(),
            seasons: BTreeMap::new(),
            reviews: BTreeMap::new(),
        }
    }

    pub fn season_count(&self) -> u32 {
        self.seasons.len() as u32
    }

    /// The season with the highest number.
    pub fn latest_season(&self) -> Option<&Season> {
        self.seasons.last_key_value().map(|(_, season)| season)
    }

    pub fn latest_release_date(&self) -> Option<ReleaseDate> {
        self.latest_season().map(|s| s.release_date)
    }

    pub fn has_actor(&self, actor: &ActorId) -> bool {
        self.cast.contains(actor)
    }

    /// Mean of all review scores, `None` when unreviewed.
    pub fn average_score(&self) -> Option<f64> {
        mean(self.reviews.values().map(|r| f64::from(r.score.value())))
    }

    /// Numbers of seasons still lacking episodes, ascending.
    pub fn incomplete_seasons(&self) -> Vec<u32> {
        self.seasons
            .values()
            .filter(|s| s.is_missing_episodes())
            .map(|s| s.number)
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub favorite_genre: String,
    /// Titles of liked series.
    pub favorites: BTreeSet<String>,
}

impl User {
    pub fn new(username: &str, favorite_genre: &str) -> Self {
        Self {
            username: username.to_string(),
            favorite_genre: favorite_genre.to_string(),
            favorites: BTreeSet::new(),
        }
    }

    pub fn likes(&self, title: &str) -> bool {
        self.favorites.contains(title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> ReleaseDate {
        ReleaseDate::parse_season(s).unwrap()
    }

    fn review(series: &str, user: &str, score: i64) -> Review {
        Review {
            series: series.into(),
            username: user.into(),
            score: Score::new(score).unwrap(),
        }
    }

    #[test]
    fn latest_season_is_highest_number() {
        let mut series = TvSeries::new("Dark", "Netflix", "Thriller");
        assert!(series.latest_season().is_none());

        series.seasons.insert(1, Season::new("Dark", 1, 10, date("01:12:2017")));
        series.seasons.insert(2, Season::new("Dark", 2, 8, date("21:06:2019")));

        assert_eq!(series.latest_season().unwrap().number, 2);
        assert_eq!(series.latest_release_date(), Some(date("21:06:2019")));
    }

    #[test]
    fn has_actor_matches_cast_keys() {
        let mut series = TvSeries::new("Dark", "Netflix", "Thriller");
        let louis = ActorId::from_parts("Louis", "Hofmann");
        assert!(!series.has_actor(&louis));
        series.cast.push(louis.clone());
        assert!(series.has_actor(&louis));
        assert!(!series.has_actor(&ActorId::from_key("Lisa Vicari")));
    }

    #[test]
    fn average_score_undefined_without_reviews() {
        let mut series = TvSeries::new("Dark", "Netflix", "Thriller");
        assert_eq!(series.average_score(), None);

        series.reviews.insert("ann".into(), review("Dark", "ann", 9));
        series.reviews.insert("bob".into(), review("Dark", "bob", 6));
        assert_eq!(series.average_score(), Some(7.5));
    }

    #[test]
    fn season_capacity() {
        let mut season = Season::new("Dark", 1, 2, date("01:12:2017"));
        assert!(season.is_missing_episodes());
        season.episodes.push("Secrets".into());
        season.episodes.push("Lies".into());
        assert!(season.is_full());
        assert!(season.has_episode("Lies"));
    }

    #[test]
    fn zero_target_season_is_full() {
        let season = Season::new("Dark", 1, 0, date("01:12:2017"));
        assert!(season.is_full());
    }

    #[test]
    fn incomplete_seasons_ascending() {
        let mut series = TvSeries::new("Dark", "Netflix", "Thriller");
        let mut full = Season::new("Dark", 2, 1, date("01:01:2019"));
        full.episodes.push("Ep".into());
        series.seasons.insert(1, Season::new("Dark", 1, 3, date("01:01:2018")));
        series.seasons.insert(2, full);
        series.seasons.insert(3, Season::new("Dark", 3, 3, date("01:01:2020")));
        assert_eq!(series.incomplete_seasons(), vec![1, 3]);
    }

    #[test]
    fn actor_identity_from_parts() {
        let actor = Actor::new("Louis", "Hofmann", "German");
        assert_eq!(actor.id.as_str(), "Louis Hofmann");
    }
}
