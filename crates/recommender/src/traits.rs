//! Core trait for aggregating neighbor ratings into recommendations.

use crate::error::Result;
use crate::types::{Recommendation, SimilarityEntry};
use data_loader::{Dataset, RatingProfile};

/// Turns a ranked neighbor list into an ordered recommendation list.
///
/// Implementations only read from the dataset; `Send + Sync` lets a single
/// Recommender serve concurrent readers.
pub trait Aggregator: Send + Sync {
    /// Returns the name of this aggregator (for logging/debugging)
    fn name(&self) -> &str;

    /// Aggregate neighbor ratings for items absent from `target`.
    ///
    /// # Arguments
    /// * `target` - The profile of the user being recommended to
    /// * `neighbors` - Every other user, ranked by similarity (highest first)
    /// * `dataset` - The dataset the neighbors' profiles are read from
    ///
    /// # Returns
    /// * `Ok(Vec<Recommendation>)` - Sorted by score, highest first
    /// * `Err` - If a neighbor is missing or weights cannot be normalized
    fn aggregate(
        &self,
        target: &RatingProfile,
        neighbors: &[SimilarityEntry],
        dataset: &Dataset,
    ) -> Result<Vec<Recommendation>>;
}
