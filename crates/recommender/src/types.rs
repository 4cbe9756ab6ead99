//! Query-time types: ranked neighbors, neighbor weights, recommendations.

use data_loader::{ItemId, UserId};
use serde::Serialize;
use similarity::Correlation;

/// Another user together with their similarity to the target user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityEntry {
    pub user: UserId,
    pub similarity: Correlation,
}

impl SimilarityEntry {
    pub fn new(user: impl Into<UserId>, similarity: Correlation) -> Self {
        Self {
            user: user.into(),
            similarity,
        }
    }
}

/// A neighbor's normalized contribution to the weighted aggregate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NeighborWeight {
    pub user: UserId,
    pub weight: f64,
}

/// A predicted score for an item the target user has not rated
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub item: ItemId,
    pub score: f64,
}

impl Recommendation {
    pub fn new(item: impl Into<ItemId>, score: f64) -> Self {
        Self {
            item: item.into(),
            score,
        }
    }
}

/// Stable sort, highest score first. Equal scores keep their encounter order.
pub(crate) fn sort_by_score_desc(recommendations: &mut [Recommendation]) {
    recommendations.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
