use tracing::trace;
use tvdb_store::{CatalogError, CatalogReader, CatalogResult, EntityKind};

/// Sole element of the result when nothing can be suggested.
pub const NO_SUGGESTION: &str = "";

/// Genre-based series suggestions.
pub struct SuggestionEngine;

impl SuggestionEngine {
    /// Titles in the user's favorite genre that the user has not liked yet,
    /// alphabetical. When there are none the result is `[""]`, never empty.
    pub fn suggest<R: CatalogReader + ?Sized>(
        reader: &R,
        username: &str,
    ) -> CatalogResult<Vec<String>> {
        let user = reader
            .user(username)?
            .ok_or_else(|| CatalogError::not_found(EntityKind::User, username))?;

        let mut titles: Vec<String> = reader
            .all_series()?
            .into_iter()
            .filter(|s| s.genre == user.favorite_genre && !user.likes(&s.title))
            .map(|s| s.title)
            .collect();

        trace!(user = %username, suggestions = titles.len(), "suggestions computed");
        if titles.is_empty() {
            titles.push(NO_SUGGESTION.to_string());
        }
        Ok(titles)
    }
}
