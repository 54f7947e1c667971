use std::path::Path;

use tracing::info;
use tvdb_query::{
    AwaitedSeason, MissingEpisodes, MissingEpisodesReport, RatingAggregator, SuggestionEngine,
};
use tvdb_store::{CatalogConfig, CatalogReader, CatalogStats, CatalogWriter, InMemoryCatalog};
use tvdb_types::{Actor, ReleaseDate, Score, TransmissionService, TvSeries, User};

use crate::error::{SdkError, SdkResult};

/// High-level TV series catalog API.
///
/// Takes string dates and raw integer scores, validates them, and routes the
/// call to the store or the query engine.
#[derive(Debug, Default)]
pub struct TvSeriesDb {
    catalog: InMemoryCatalog,
}

impl TvSeriesDb {
    /// An empty catalog with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CatalogConfig) -> Self {
        Self {
            catalog: InMemoryCatalog::with_config(config),
        }
    }

    /// An empty catalog configured from a TOML file.
    pub fn from_config_file(path: impl AsRef<Path>) -> SdkResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: CatalogConfig =
            toml::from_str(&raw).map_err(|e| SdkError::Config(format!("{}: {e}", path.display())))?;
        info!(path = %path.display(), ?config, "loaded catalog configuration");
        Ok(Self::with_config(config))
    }

    pub fn config(&self) -> &CatalogConfig {
        self.catalog.config()
    }

    // ---- Entity registration ----

    /// Register services. Returns the number registered so far.
    pub fn add_transmission_service(&self, services: &[&str]) -> SdkResult<usize> {
        Ok(self.catalog.add_transmission_services(services)?)
    }

    pub fn add_tv_series(&self, title: &str, service: &str, genre: &str) -> SdkResult<usize> {
        Ok(self.catalog.add_series(title, service, genre)?)
    }

    pub fn add_actor(&self, name: &str, surname: &str, nationality: &str) -> SdkResult<usize> {
        Ok(self.catalog.add_actor(name, surname, nationality)?)
    }

    pub fn add_user(&self, username: &str, favorite_genre: &str) -> SdkResult<usize> {
        Ok(self.catalog.add_user(username, favorite_genre)?)
    }

    // ---- Relationships ----

    /// Append `"name surname"` actors to a cast. Returns the cast size.
    pub fn add_cast(&self, title: &str, actors: &[&str]) -> SdkResult<usize> {
        Ok(self.catalog.add_cast(title, actors)?)
    }

    /// Add a season released on `release_date` (`dd:mm:yyyy`). Returns the
    /// number of seasons of the series.
    pub fn add_season(&self, title: &str, episodes: u32, release_date: &str) -> SdkResult<u32> {
        let date = ReleaseDate::parse_season(release_date)?;
        Ok(self.catalog.add_season(title, episodes, date)?)
    }

    pub fn add_episode(&self, title: &str, season: u32, episode: &str) -> SdkResult<usize> {
        Ok(self.catalog.add_episode(title, season, episode)?)
    }

    pub fn like_tv_series(&self, username: &str, title: &str) -> SdkResult<usize> {
        Ok(self.catalog.like_series(username, title)?)
    }

    /// Record a review scored `0..=10`. Returns the series' new average.
    pub fn add_review(&self, username: &str, title: &str, score: i64) -> SdkResult<f64> {
        let score = Score::new(score)?;
        Ok(self.catalog.add_review(username, title, score)?)
    }

    // ---- Queries ----

    pub fn check_missing_episodes(&self) -> SdkResult<MissingEpisodesReport> {
        Ok(MissingEpisodes::report(&self.catalog)?)
    }

    /// Unliked series in the user's favorite genre, or `[""]`.
    pub fn suggest_tv_series(&self, username: &str) -> SdkResult<Vec<String>> {
        Ok(SuggestionEngine::suggest(&self.catalog, username)?)
    }

    pub fn average_rating(&self, username: &str) -> SdkResult<Option<f64>> {
        Ok(RatingAggregator::average_rating(&self.catalog, username)?)
    }

    pub fn series_average(&self, title: &str) -> SdkResult<Option<f64>> {
        Ok(RatingAggregator::series_average(&self.catalog, title)?)
    }

    /// `"<title> <season>"` for `current_date` given as `dd::mm::yyyy`.
    pub fn most_awaited_season(&self, current_date: &str) -> SdkResult<Option<String>> {
        let current = ReleaseDate::parse_query(current_date)?;
        Ok(self.most_awaited(current)?.map(|awaited| awaited.to_string()))
    }

    pub fn most_awaited(&self, current: ReleaseDate) -> SdkResult<Option<AwaitedSeason>> {
        Ok(RatingAggregator::most_awaited_season(&self.catalog, current)?)
    }

    pub fn best_actors(&self, service: &str) -> SdkResult<Vec<String>> {
        let threshold = self.config().best_actor_threshold;
        Ok(RatingAggregator::best_actors(&self.catalog, service, threshold)?)
    }

    pub fn series_of_actor(&self, actor: &str) -> SdkResult<Vec<String>> {
        Ok(self.catalog.series_of_actor(actor)?)
    }

    // ---- Lookups ----

    pub fn transmission_services(&self) -> SdkResult<Vec<TransmissionService>> {
        Ok(self.catalog.services()?)
    }

    pub fn tv_series(&self, title: &str) -> SdkResult<Option<TvSeries>> {
        Ok(self.catalog.series(title)?)
    }

    pub fn all_tv_series(&self) -> SdkResult<Vec<TvSeries>> {
        Ok(self.catalog.all_series()?)
    }

    pub fn actor(&self, key: &str) -> SdkResult<Option<Actor>> {
        Ok(self.catalog.actor(key)?)
    }

    pub fn actors(&self) -> SdkResult<Vec<Actor>> {
        Ok(self.catalog.actors()?)
    }

    pub fn user(&self, username: &str) -> SdkResult<Option<User>> {
        Ok(self.catalog.user(username)?)
    }

    pub fn users(&self) -> SdkResult<Vec<User>> {
        Ok(self.catalog.users()?)
    }

    pub fn stats(&self) -> SdkResult<CatalogStats> {
        Ok(self.catalog.stats()?)
    }

    pub fn catalog(&self) -> &InMemoryCatalog {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tvdb_store::{ErrorKind, ReviewPolicy};

    use super::*;

    fn kind<T: std::fmt::Debug>(result: SdkResult<T>) -> ErrorKind {
        result.unwrap_err().kind().unwrap()
    }

    #[test]
    fn end_to_end_capacity() {
        let db = TvSeriesDb::new();
        assert_eq!(db.add_transmission_service(&["Netflix"]).unwrap(), 1);
        assert_eq!(db.add_tv_series("X", "Netflix", "Drama").unwrap(), 1);
        assert_eq!(db.add_actor("John", "Doe", "American").unwrap(), 1);
        assert_eq!(db.add_cast("X", &["John Doe"]).unwrap(), 1);
        assert_eq!(db.add_season("X", 2, "01:01:2020").unwrap(), 1);
        assert_eq!(db.add_episode("X", 1, "Ep1").unwrap(), 1);
        assert_eq!(db.add_episode("X", 1, "Ep2").unwrap(), 2);

        assert!(db.check_missing_episodes().unwrap().get("X").is_none());
        assert_eq!(kind(db.add_episode("X", 1, "Ep3")), ErrorKind::CapacityExceeded);
    }

    #[test]
    fn season_ordering_keeps_first_season() {
        let db = TvSeriesDb::new();
        db.add_transmission_service(&["Netflix"]).unwrap();
        db.add_tv_series("X", "Netflix", "Drama").unwrap();
        db.add_season("X", 3, "01:01:2020").unwrap();

        assert_eq!(kind(db.add_season("X", 3, "01:01:2019")), ErrorKind::InvalidOrdering);
        assert_eq!(db.tv_series("X").unwrap().unwrap().season_count(), 1);
    }

    #[test]
    fn malformed_inputs_are_invalid_arguments() {
        let db = TvSeriesDb::new();
        db.add_transmission_service(&["Netflix"]).unwrap();
        db.add_tv_series("X", "Netflix", "Drama").unwrap();
        db.add_user("ann", "Drama").unwrap();

        assert_eq!(kind(db.add_season("X", 3, "2020-01-01")), ErrorKind::InvalidArgument);
        assert_eq!(kind(db.add_review("ann", "X", 11)), ErrorKind::InvalidArgument);
        assert_eq!(kind(db.add_review("ann", "X", -1)), ErrorKind::InvalidArgument);
        assert_eq!(kind(db.most_awaited_season("01:01:2020")), ErrorKind::InvalidArgument);
    }

    #[test]
    fn unknown_season_series() {
        let db = TvSeriesDb::new();
        assert_eq!(kind(db.add_season("Nope", 3, "01:01:2020")), ErrorKind::NotFound);
    }

    #[test]
    fn suggestions_and_sentinel() {
        let db = TvSeriesDb::new();
        db.add_transmission_service(&["Netflix"]).unwrap();
        db.add_tv_series("Dark", "Netflix", "Thriller").unwrap();
        db.add_user("ann", "Drama").unwrap();
        assert_eq!(db.suggest_tv_series("ann").unwrap(), vec![""]);

        db.add_tv_series("The Crown", "Netflix", "Drama").unwrap();
        db.add_tv_series("Babylon Berlin", "Netflix", "Drama").unwrap();
        assert_eq!(
            db.suggest_tv_series("ann").unwrap(),
            vec!["Babylon Berlin", "The Crown"]
        );
    }

    #[test]
    fn reviews_and_awaited() {
        let db = TvSeriesDb::new();
        db.add_transmission_service(&["Netflix", "Prime"]).unwrap();
        db.add_tv_series("Dark", "Netflix", "Thriller").unwrap();
        db.add_tv_series("Rings", "Prime", "Fantasy").unwrap();
        db.add_user("ann", "Thriller").unwrap();
        db.add_user("bob", "Fantasy").unwrap();

        assert_eq!(db.add_review("ann", "Dark", 9).unwrap(), 9.0);
        assert_eq!(db.add_review("bob", "Dark", 10).unwrap(), 9.5);
        assert_eq!(db.add_review("ann", "Rings", 4).unwrap(), 4.0);
        assert_eq!(kind(db.add_review("ann", "Dark", 1)), ErrorKind::DuplicateKey);

        db.like_tv_series("ann", "Dark").unwrap();
        db.like_tv_series("ann", "Rings").unwrap();
        assert_eq!(db.average_rating("ann").unwrap(), Some((9.5 + 4.0) / 2.0));

        db.add_season("Dark", 8, "01:12:2030").unwrap();
        db.add_season("Rings", 8, "01:09:2031").unwrap();
        assert_eq!(
            db.most_awaited_season("01::01::2025").unwrap().as_deref(),
            Some("Dark 1")
        );
        assert_eq!(db.most_awaited_season("01::01::2032").unwrap(), None);
    }

    #[test]
    fn best_actors_per_service() {
        let db = TvSeriesDb::new();
        db.add_transmission_service(&["Netflix"]).unwrap();
        db.add_tv_series("Dark", "Netflix", "Thriller").unwrap();
        db.add_actor("Louis", "Hofmann", "German").unwrap();
        db.add_user("ann", "Thriller").unwrap();
        db.add_cast("Dark", &["Louis Hofmann"]).unwrap();
        db.add_review("ann", "Dark", 9).unwrap();

        assert_eq!(db.best_actors("Netflix").unwrap(), vec!["Louis Hofmann"]);
        assert_eq!(db.series_of_actor("Louis Hofmann").unwrap(), vec!["Dark"]);
        assert_eq!(kind(db.best_actors("Hulu")), ErrorKind::NotFound);
    }

    #[test]
    fn threshold_comes_from_config() {
        let db = TvSeriesDb::with_config(CatalogConfig {
            best_actor_threshold: 9.0,
            ..Default::default()
        });
        db.add_transmission_service(&["Netflix"]).unwrap();
        db.add_tv_series("Dark", "Netflix", "Thriller").unwrap();
        db.add_actor("Louis", "Hofmann", "German").unwrap();
        db.add_user("ann", "Thriller").unwrap();
        db.add_cast("Dark", &["Louis Hofmann"]).unwrap();
        db.add_review("ann", "Dark", 9).unwrap();

        assert!(db.best_actors("Netflix").unwrap().is_empty());
    }

    #[test]
    fn config_file_loading() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "review_policy = \"replace\"").unwrap();

        let db = TvSeriesDb::from_config_file(file.path()).unwrap();
        assert_eq!(db.config().review_policy, ReviewPolicy::Replace);
    }

    #[test]
    fn bad_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "review_policy = 3").unwrap();
        let err = TvSeriesDb::from_config_file(file.path()).unwrap_err();
        assert!(matches!(err, SdkError::Config(_)));
        assert!(err.kind().is_none());

        let missing = TvSeriesDb::from_config_file("/nonexistent/tvdb.toml").unwrap_err();
        assert!(matches!(missing, SdkError::Io(_)));
    }

    #[test]
    fn lookups_and_stats() {
        let db = TvSeriesDb::new();
        db.add_transmission_service(&["Prime", "Netflix"]).unwrap();
        db.add_actor("John", "Doe", "American").unwrap();
        db.add_user("ann", "Drama").unwrap();

        let names: Vec<String> = db
            .transmission_services()
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Netflix", "Prime"]);
        assert_eq!(db.actor("John Doe").unwrap().unwrap().nationality, "American");
        assert_eq!(db.actors().unwrap().len(), 1);
        assert_eq!(db.users().unwrap()[0].username, "ann");
        assert!(db.all_tv_series().unwrap().is_empty());
        assert_eq!(db.stats().unwrap().services, 2);
    }
}
