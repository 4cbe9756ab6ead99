//! Aggregation strategies.
//!
//! - `NearestNeighborAggregator`: k == 1, the top neighbor's raw ratings
//! - `WeightedKnnAggregator`: k > 1, similarity-weighted sum over the top k

pub mod nearest;
pub mod weighted;

// Re-export for convenience
pub use nearest::NearestNeighborAggregator;
pub use weighted::{normalized_weights, WeightedKnnAggregator};

use crate::error::{RecommendError, Result};
use data_loader::{Dataset, RatingProfile};

/// Look up a neighbor's profile, surfacing a missing one as `UserNotFound`
pub(crate) fn neighbor_profile<'a>(dataset: &'a Dataset, user: &str) -> Result<&'a RatingProfile> {
    dataset
        .get_profile(user)
        .ok_or_else(|| RecommendError::UserNotFound {
            user: user.to_string(),
        })
}
