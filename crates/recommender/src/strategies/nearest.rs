//! Single nearest-neighbor recommendations.
//!
//! The top-ranked neighbor's ratings on items the target has not rated are
//! returned unchanged as predicted scores.

use super::neighbor_profile;
use crate::error::Result;
use crate::traits::Aggregator;
use crate::types::{sort_by_score_desc, Recommendation, SimilarityEntry};
use data_loader::{Dataset, RatingProfile};
use tracing::debug;

pub struct NearestNeighborAggregator;

impl Aggregator for NearestNeighborAggregator {
    fn name(&self) -> &str {
        "NearestNeighborAggregator"
    }

    fn aggregate(
        &self,
        target: &RatingProfile,
        neighbors: &[SimilarityEntry],
        dataset: &Dataset,
    ) -> Result<Vec<Recommendation>> {
        let Some(nearest) = neighbors.first() else {
            return Ok(Vec::new());
        };
        debug!(
            "Nearest neighbor is {} (similarity {})",
            nearest.user, nearest.similarity
        );

        let mut recommendations: Vec<Recommendation> = neighbor_profile(dataset, &nearest.user)?
            .iter()
            .filter(|(item, _)| !target.contains(item))
            .map(|(item, rating)| Recommendation::new(item.clone(), rating))
            .collect();

        sort_by_score_desc(&mut recommendations);
        Ok(recommendations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neighbors::rank_neighbors;
    use data_loader::sample::song_ratings;
    use similarity::Correlation;

    #[test]
    fn test_nearest_neighbor_unseen_items() {
        let dataset = song_ratings();
        let hailey = dataset.get_profile("Hailey").unwrap();
        let ranked = rank_neighbors(&dataset, "Hailey").unwrap();

        let recs = NearestNeighborAggregator
            .aggregate(hailey, &ranked, &dataset)
            .unwrap();

        // Jordyn is Hailey's nearest neighbor
        assert_eq!(
            recs,
            vec![
                Recommendation::new("Phoenix", 5.0),
                Recommendation::new("Slightly Stoopid", 4.5),
            ]
        );
    }

    #[test]
    fn test_equal_scores_keep_item_order() {
        let dataset = song_ratings();
        let veronica = dataset.get_profile("Veronica").unwrap();
        let ranked = rank_neighbors(&dataset, "Veronica").unwrap();

        let recs = NearestNeighborAggregator
            .aggregate(veronica, &ranked, &dataset)
            .unwrap();

        assert_eq!(
            recs,
            vec![
                Recommendation::new("Broken Bells", 2.0),
                Recommendation::new("Vampire Weekend", 2.0),
            ]
        );
    }

    #[test]
    fn test_no_neighbors() {
        let dataset = song_ratings();
        let target = dataset.get_profile("Bill").unwrap();

        let recs = NearestNeighborAggregator.aggregate(target, &[], &dataset).unwrap();
        assert!(recs.is_empty());
    }

    #[test]
    fn test_missing_neighbor_profile() {
        let dataset = song_ratings();
        let target = dataset.get_profile("Bill").unwrap();
        let ghost = vec![SimilarityEntry::new("Ghost", Correlation::Defined(0.9))];

        let err = NearestNeighborAggregator
            .aggregate(target, &ghost, &dataset)
            .unwrap_err();
        assert!(matches!(err, crate::RecommendError::UserNotFound { .. }));
    }
}
