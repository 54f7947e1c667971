use serde::{Deserialize, Serialize};

/// How a second review by the same user for the same series is handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewPolicy {
    /// Fail with `DuplicateKey`.
    #[default]
    Reject,
    /// Overwrite the previous score.
    Replace,
}

/// How already-registered names passed to service registration are handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServicePolicy {
    /// Fail the whole call with `DuplicateKey`.
    #[default]
    Strict,
    /// Skip duplicates and register the rest.
    Lenient,
}

/// Configuration for the catalog store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub review_policy: ReviewPolicy,
    pub service_policy: ServicePolicy,
    /// Average a series must strictly exceed for its cast to count as best actors.
    pub best_actor_threshold: f64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            review_policy: ReviewPolicy::Reject,
            service_policy: ServicePolicy::Strict,
            best_actor_threshold: 8.0,
        }
    }
}

impl CatalogConfig {
    /// Duplicate-tolerant configuration: repeated services are skipped and
    /// repeated reviews overwrite.
    pub fn lenient() -> Self {
        Self {
            review_policy: ReviewPolicy::Replace,
            service_policy: ServicePolicy::Lenient,
            ..Default::default()
        }
    }
}
