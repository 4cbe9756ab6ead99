//! Error types for recommendation queries.
//!
//! Every error is scoped to a single query: the Recommender and its dataset
//! stay valid for the next call.

use data_loader::UserId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecommendError {
    /// The queried user (or a neighbor) is not a key in the dataset
    #[error("User not found in dataset: {user}")]
    UserNotFound { user: UserId },

    /// The selected neighbors' weights sum to zero, so they cannot be normalized
    #[error("Neighbor weights sum to {weight_sum}; cannot normalize")]
    DegenerateWeights { weight_sum: f64 },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, RecommendError>;
