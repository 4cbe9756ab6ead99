//! Weighted k-nearest-neighbor recommendations.
//!
//! ## Algorithm
//! 1. Take the top k neighbors (fewer if the dataset has fewer)
//! 2. Weight each by `(similarity + 1) / 2`, then divide by the sum of weights
//! 3. For every item a neighbor rated and the target did not:
//!    `score[item] += rating * weight`, rounded to 2 decimals after every addition
//! 4. Sort by score, highest first
//!
//! Undefined similarities weigh in at -0.5. A zero weight sum is a
//! `DegenerateWeights` error.

use super::neighbor_profile;
use crate::error::{RecommendError, Result};
use crate::traits::Aggregator;
use crate::types::{sort_by_score_desc, NeighborWeight, Recommendation, SimilarityEntry};
use data_loader::{Dataset, ItemId, RatingProfile};
use similarity::round2;
use std::collections::HashMap;
use tracing::debug;

pub struct WeightedKnnAggregator {
    k: usize,
}

impl WeightedKnnAggregator {
    /// Create a new WeightedKnnAggregator consulting up to `k` neighbors
    pub fn new(k: usize) -> Self {
        Self { k }
    }
}

/// Normalize neighbor similarities into weights that sum to one.
///
/// Returns a new sequence in the same order as `neighbors`.
pub fn normalized_weights(neighbors: &[SimilarityEntry]) -> Result<Vec<NeighborWeight>> {
    let raw: Vec<f64> = neighbors.iter().map(|n| n.similarity.weight()).collect();
    let weight_sum: f64 = raw.iter().sum();

    if weight_sum == 0.0 {
        return Err(RecommendError::DegenerateWeights { weight_sum });
    }

    Ok(neighbors
        .iter()
        .zip(raw)
        .map(|(neighbor, weight)| NeighborWeight {
            user: neighbor.user.clone(),
            weight: weight / weight_sum,
        })
        .collect())
}

impl Aggregator for WeightedKnnAggregator {
    fn name(&self) -> &str {
        "WeightedKnnAggregator"
    }

    fn aggregate(
        &self,
        target: &RatingProfile,
        neighbors: &[SimilarityEntry],
        dataset: &Dataset,
    ) -> Result<Vec<Recommendation>> {
        let top = &neighbors[..self.k.min(neighbors.len())];
        if top.is_empty() {
            return Ok(Vec::new());
        }

        let weights = normalized_weights(top)?;

        // Scores in first-encounter order, with an index for O(1) updates
        let mut recommendations: Vec<Recommendation> = Vec::new();
        let mut positions: HashMap<ItemId, usize> = HashMap::new();

        for neighbor in &weights {
            debug!("Neighbor {} weight {:.4}", neighbor.user, neighbor.weight);
            let profile = neighbor_profile(dataset, &neighbor.user)?;

            for (item, rating) in profile.iter() {
                if target.contains(item) {
                    continue;
                }
                let contribution = rating * neighbor.weight;
                match positions.get(item) {
                    Some(&idx) => {
                        let entry = &mut recommendations[idx];
                        entry.score = round2(contribution + entry.score);
                    }
                    None => {
                        positions.insert(item.clone(), recommendations.len());
                        recommendations.push(Recommendation::new(item.clone(), round2(contribution)));
                    }
                }
            }
        }

        sort_by_score_desc(&mut recommendations);
        Ok(recommendations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neighbors::rank_neighbors;
    use data_loader::sample::song_ratings;
    use similarity::{Correlation, Incomparable};

    fn entry(user: &str, score: f64) -> SimilarityEntry {
        SimilarityEntry::new(user, Correlation::Defined(score))
    }

    #[test]
    fn test_normalized_weights() {
        let weights = normalized_weights(&[entry("a", 1.0), entry("b", 0.0)]).unwrap();

        assert_eq!(weights.len(), 2);
        assert_eq!(weights[0].user, "a");
        assert!((weights[0].weight - 2.0 / 3.0).abs() < 1e-12);
        assert!((weights[1].weight - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalized_weights_leaves_input_untouched() {
        let neighbors = vec![entry("a", 0.5), entry("b", 0.5)];
        let before = neighbors.clone();

        normalized_weights(&neighbors).unwrap();
        assert_eq!(neighbors, before);
    }

    #[test]
    fn test_zero_weight_sum() {
        // -1.0 maps to weight 0.0
        let err = normalized_weights(&[entry("a", -1.0), entry("b", -1.0)]).unwrap_err();
        assert_eq!(err, RecommendError::DegenerateWeights { weight_sum: 0.0 });

        // An undefined similarity (-0.5) cancels a zero correlation (+0.5)
        let cancelling = vec![
            entry("a", 0.0),
            SimilarityEntry::new("b", Correlation::Undefined(Incomparable::NoSharedItems)),
        ];
        assert!(matches!(
            normalized_weights(&cancelling),
            Err(RecommendError::DegenerateWeights { .. })
        ));
    }

    #[test]
    fn test_song_k3() {
        let dataset = song_ratings();
        let hailey = dataset.get_profile("Hailey").unwrap();
        let ranked = rank_neighbors(&dataset, "Hailey").unwrap();

        let recs = WeightedKnnAggregator::new(3)
            .aggregate(hailey, &ranked, &dataset)
            .unwrap();

        assert_eq!(
            recs,
            vec![
                Recommendation::new("Phoenix", 5.01),
                Recommendation::new("Blues Traveler", 2.76),
                Recommendation::new("Slightly Stoopid", 2.4),
            ]
        );
    }

    #[test]
    fn test_shared_unseen_item_is_combined() {
        let mut dataset = Dataset::new();
        dataset.insert_profile("A", [("x", 1.0), ("y", 2.0)].into_iter().collect());
        dataset.insert_profile("B", [("x", 1.0), ("y", 2.0), ("z", 4.0)].into_iter().collect());
        dataset.insert_profile("C", [("x", 2.0), ("y", 4.0), ("z", 2.0)].into_iter().collect());

        let target = dataset.get_profile("A").unwrap();
        let ranked = rank_neighbors(&dataset, "A").unwrap();
        let recs = WeightedKnnAggregator::new(2)
            .aggregate(target, &ranked, &dataset)
            .unwrap();

        // Both neighbors correlate perfectly: 4.0 * 0.5 + 2.0 * 0.5
        assert_eq!(recs, vec![Recommendation::new("z", 3.0)]);
    }

    #[test]
    fn test_running_sum_rounds_halves_to_even() {
        let mut dataset = Dataset::new();
        dataset.insert_profile("T", [("a", 1.0), ("b", 2.0)].into_iter().collect());
        for neighbor in ["N1", "N2", "N3", "N4"] {
            dataset.insert_profile(
                neighbor,
                [("a", 1.0), ("b", 2.0), ("z", 2.5)].into_iter().collect(),
            );
        }

        let target = dataset.get_profile("T").unwrap();
        let ranked = rank_neighbors(&dataset, "T").unwrap();
        let recs = WeightedKnnAggregator::new(4)
            .aggregate(target, &ranked, &dataset)
            .unwrap();

        // 0.625 -> 0.62 -> 1.25 -> 1.88 -> 2.5
        assert_eq!(recs, vec![Recommendation::new("z", 2.5)]);
    }

    #[test]
    fn test_k_larger_than_neighbor_count() {
        let dataset = song_ratings();
        let sam = dataset.get_profile("Sam").unwrap();
        let ranked = rank_neighbors(&dataset, "Sam").unwrap();

        let all = WeightedKnnAggregator::new(ranked.len())
            .aggregate(sam, &ranked, &dataset)
            .unwrap();
        let capped = WeightedKnnAggregator::new(100)
            .aggregate(sam, &ranked, &dataset)
            .unwrap();

        assert_eq!(all, capped);
    }
}
