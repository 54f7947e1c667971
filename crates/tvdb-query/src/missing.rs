use std::collections::BTreeMap;

use serde::Serialize;
use tracing::trace;
use tvdb_store::{CatalogReader, CatalogResult};

/// Series title -> ascending numbers of seasons with fewer episodes than
/// declared. Series without such seasons are absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MissingEpisodesReport {
    seasons: BTreeMap<String, Vec<u32>>,
}

impl MissingEpisodesReport {
    pub fn is_empty(&self) -> bool {
        self.seasons.is_empty()
    }

    pub fn len(&self) -> usize {
        self.seasons.len()
    }

    pub fn get(&self, title: &str) -> Option<&[u32]> {
        self.seasons.get(title).map(Vec::as_slice)
    }

    /// Entries in alphabetical title order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u32])> {
        self.seasons
            .iter()
            .map(|(title, seasons)| (title.as_str(), seasons.as_slice()))
    }
}

/// Builder for [`MissingEpisodesReport`].
pub struct MissingEpisodes;

impl MissingEpisodes {
    pub fn report<R: CatalogReader + ?Sized>(reader: &R) -> CatalogResult<MissingEpisodesReport> {
        let seasons: BTreeMap<String, Vec<u32>> = reader
            .all_series()?
            .into_iter()
            .filter_map(|series| {
                let incomplete = series.incomplete_seasons();
                (!incomplete.is_empty()).then_some((series.title, incomplete))
            })
            .collect();

        trace!(series = seasons.len(), "missing-episodes report built");
        Ok(MissingEpisodesReport { seasons })
    }
}
