//! The user-based collaborative filtering recommender.

use crate::config::RecommenderConfig;
use crate::error::{RecommendError, Result};
use crate::neighbors::rank_neighbors;
use crate::strategies::{NearestNeighborAggregator, WeightedKnnAggregator};
use crate::traits::Aggregator;
use crate::types::{Recommendation, SimilarityEntry};
use data_loader::Dataset;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Recommends unseen items to a user from the ratings of similar users.
///
/// The dataset is shared, never copied or mutated, so one Recommender (or many
/// sharing the same `Arc<Dataset>`) can serve queries from several threads.
pub struct Recommender {
    dataset: Arc<Dataset>,
    config: RecommenderConfig,
    aggregator: Box<dyn Aggregator>,
}

impl Recommender {
    /// Create a new Recommender
    ///
    /// ## Parameters
    /// - `dataset`: Shared reference to the ratings data
    /// - `config`: Neighbor count `k` and result cap `m`
    ///
    /// `k == 1` uses the nearest neighbor's raw ratings; `k > 1` uses a
    /// similarity-weighted average over the top `k` neighbors.
    pub fn new(dataset: Arc<Dataset>, config: RecommenderConfig) -> Self {
        let aggregator: Box<dyn Aggregator> = if config.k == 1 {
            Box::new(NearestNeighborAggregator)
        } else {
            Box::new(WeightedKnnAggregator::new(config.k))
        };
        debug!(
            "Recommender using {} (k = {}, m = {})",
            aggregator.name(),
            config.k,
            config.m
        );

        Self {
            dataset,
            config,
            aggregator,
        }
    }

    /// Create a Recommender with k = 1 and m = 10
    pub fn with_defaults(dataset: Arc<Dataset>) -> Self {
        Self::new(dataset, RecommenderConfig::default())
    }

    pub fn k(&self) -> usize {
        self.config.k
    }

    pub fn m(&self) -> usize {
        self.config.m
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    /// Every other user, ranked by similarity to `user` (highest first)
    pub fn rank_neighbors(&self, user: &str) -> Result<Vec<SimilarityEntry>> {
        rank_neighbors(&self.dataset, user)
    }

    /// Recommend items `user` has not rated, highest predicted score first.
    ///
    /// Covers every unseen item found among the selected neighbors; the list
    /// is not truncated to `m` (see `recommend_top`).
    #[instrument(skip(self), fields(k = self.config.k))]
    pub fn recommend(&self, user: &str) -> Result<Vec<Recommendation>> {
        let target = self
            .dataset
            .get_profile(user)
            .ok_or_else(|| RecommendError::UserNotFound {
                user: user.to_string(),
            })?;

        let neighbors = self.rank_neighbors(user)?;
        let recommendations = self
            .aggregator
            .aggregate(target, &neighbors, &self.dataset)?;

        debug!("Generated {} recommendations", recommendations.len());
        Ok(recommendations)
    }

    /// Like `recommend`, but returns at most `m` recommendations
    pub fn recommend_top(&self, user: &str) -> Result<Vec<Recommendation>> {
        let mut recommendations = self.recommend(user)?;
        recommendations.truncate(self.config.m);
        Ok(recommendations)
    }
}
