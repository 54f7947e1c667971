//! Review-driven aggregates.
//!
//! A series without reviews has no average. Aggregates never treat that as
//! zero: unreviewed favorites are skipped by [`RatingAggregator::average_rating`],
//! rank below every reviewed series in
//! [`RatingAggregator::most_awaited_season`], and disqualify their cast in
//! [`RatingAggregator::best_actors`].

use std::fmt;

use serde::Serialize;
use tracing::trace;
use tvdb_store::{CatalogError, CatalogReader, CatalogResult, EntityKind};
use tvdb_types::{mean, ReleaseDate, TvSeries};

/// The latest season of the most awaited series.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AwaitedSeason {
    pub title: String,
    pub season: u32,
    pub release_date: ReleaseDate,
    pub average: Option<f64>,
}

/// Renders as `"<title> <seasonNumber>"`.
impl fmt::Display for AwaitedSeason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.title, self.season)
    }
}

pub struct RatingAggregator;

impl RatingAggregator {
    pub fn series_average<R: CatalogReader + ?Sized>(
        reader: &R,
        title: &str,
    ) -> CatalogResult<Option<f64>> {
        let series = reader
            .series(title)?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Series, title))?;
        Ok(series.average_score())
    }

    /// Mean of the averages of the user's reviewed favorites.
    pub fn average_rating<R: CatalogReader + ?Sized>(
        reader: &R,
        username: &str,
    ) -> CatalogResult<Option<f64>> {
        let user = reader
            .user(username)?
            .ok_or_else(|| CatalogError::not_found(EntityKind::User, username))?;

        let mut averages = Vec::with_capacity(user.favorites.len());
        for title in &user.favorites {
            if let Some(avg) = reader.series(title)?.and_then(|s| s.average_score()) {
                averages.push(avg);
            }
        }

        let rating = mean(averages);
        trace!(user = %username, rating = ?rating, "average rating computed");
        Ok(rating)
    }

    /// Among series whose latest season is released strictly after
    /// `current`, the best-reviewed one; ties go to the alphabetically first
    /// title.
    pub fn most_awaited_season<R: CatalogReader + ?Sized>(
        reader: &R,
        current: ReleaseDate,
    ) -> CatalogResult<Option<AwaitedSeason>> {
        let mut best: Option<AwaitedSeason> = None;

        // Series arrive in title order, so keeping the incumbent on ties
        // keeps the alphabetically first title.
        for series in reader.all_series()? {
            let Some(latest) = series.latest_season() else {
                continue;
            };
            if !latest.release_date.is_after(&current) {
                continue;
            }

            let candidate = AwaitedSeason {
                title: series.title.clone(),
                season: latest.number,
                release_date: latest.release_date,
                average: series.average_score(),
            };
            let replace = match &best {
                None => true,
                Some(incumbent) => outranks(candidate.average, incumbent.average),
            };
            if replace {
                best = Some(candidate);
            }
        }

        trace!(current = %current, awaited = ?best, "most awaited season selected");
        Ok(best)
    }

    /// Actors whose every series belongs to `service` and averages strictly
    /// above `threshold`, as `"name surname"`, alphabetical. Actors that
    /// appear in no series never qualify.
    pub fn best_actors<R: CatalogReader + ?Sized>(
        reader: &R,
        service: &str,
        threshold: f64,
    ) -> CatalogResult<Vec<String>> {
        if !reader.has_service(service)? {
            return Err(CatalogError::not_found(EntityKind::Service, service));
        }

        let mut best = Vec::new();
        for actor in reader.actors()? {
            let titles = reader.series_of_actor(actor.id.as_str())?;
            if titles.is_empty() {
                continue;
            }
            let mut qualifies = true;
            for title in &titles {
                let series = reader
                    .series(title)?
                    .ok_or_else(|| CatalogError::not_found(EntityKind::Series, title.as_str()))?;
                if !rates_above(&series, service, threshold) {
                    qualifies = false;
                    break;
                }
            }
            if qualifies {
                best.push(actor.id.to_string());
            }
        }

        trace!(service = %service, actors = best.len(), "best actors computed");
        Ok(best)
    }
}

fn rates_above(series: &TvSeries, service: &str, threshold: f64) -> bool {
    series.service == service && series.average_score().is_some_and(|avg| avg > threshold)
}

/// A reviewed series outranks an unreviewed one; otherwise higher wins.
fn outranks(candidate: Option<f64>, incumbent: Option<f64>) -> bool {
    match (candidate, incumbent) {
        (Some(c), Some(i)) => c > i,
        (Some(_), None) => true,
        (None, _) => false,
    }
}
