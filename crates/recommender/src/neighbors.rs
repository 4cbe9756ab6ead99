//! Neighbor ranking.
//!
//! ## Algorithm
//! 1. Correlate the target user with every other user in the dataset
//! 2. Sort by correlation, highest first (undefined correlations last)
//! 3. Equal correlations keep dataset order (the sort is stable)

use crate::error::{RecommendError, Result};
use crate::types::SimilarityEntry;
use data_loader::Dataset;
use similarity::pearson;
use std::cmp::Ordering;
use tracing::debug;

/// Rank every user other than `target` by similarity to `target`.
///
/// Fails with `UserNotFound` if `target` is not in the dataset.
pub fn rank_neighbors(dataset: &Dataset, target: &str) -> Result<Vec<SimilarityEntry>> {
    let target_profile = dataset
        .get_profile(target)
        .ok_or_else(|| RecommendError::UserNotFound {
            user: target.to_string(),
        })?;

    let mut ranked: Vec<SimilarityEntry> = dataset
        .iter()
        .filter(|(user, _)| user.as_str() != target)
        .map(|(user, profile)| SimilarityEntry::new(user.clone(), pearson(target_profile, profile)))
        .collect();

    ranked.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
    });

    debug!("Ranked {} neighbors for {}", ranked.len(), target);
    Ok(ranked)
}
