//! Core domain types for user/item rating data.
//!
//! This module defines the fundamental data structures used throughout the system:
//! - Type aliases for domain clarity (UserId, ItemId, RatingValue)
//! - RatingProfile: one user's ratings, keyed by item
//! - Dataset: every user's RatingProfile, keyed by user
//!
//! Both maps are `BTreeMap`s so iteration order is deterministic. Everything
//! downstream that talks about "encounter order" means ascending identifier order.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

// =============================================================================
// Type Aliases
// =============================================================================

/// Identifier for a user (e.g. "Angelica")
pub type UserId = String;

/// Identifier for a rated item (e.g. "Blues Traveler")
pub type ItemId = String;

/// A rating value; the range is defined by the application (e.g. 0.0 - 5.0)
pub type RatingValue = f64;

// =============================================================================
// RatingProfile
// =============================================================================

/// All ratings made by a single user.
///
/// Item identifiers are unique by construction: rating the same item twice
/// replaces the earlier value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingProfile {
    ratings: BTreeMap<ItemId, RatingValue>,
}

impl RatingProfile {
    /// Creates an empty profile
    pub fn new() -> Self {
        Self {
            ratings: BTreeMap::new(),
        }
    }

    /// Get the rating for an item, if the user rated it
    pub fn get(&self, item: &str) -> Option<RatingValue> {
        self.ratings.get(item).copied()
    }

    /// Whether the user rated this item
    pub fn contains(&self, item: &str) -> bool {
        self.ratings.contains_key(item)
    }

    /// Insert or replace a rating, returning the previous value if any
    pub fn insert(&mut self, item: impl Into<ItemId>, rating: RatingValue) -> Option<RatingValue> {
        self.ratings.insert(item.into(), rating)
    }

    /// Iterate over (item, rating) pairs in ascending item order
    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, RatingValue)> {
        self.ratings.iter().map(|(item, &rating)| (item, rating))
    }

    /// Iterate over rated items in ascending order
    pub fn items(&self) -> impl Iterator<Item = &ItemId> {
        self.ratings.keys()
    }

    /// Items rated by both profiles, in ascending order
    pub fn shared_items<'a>(&'a self, other: &'a RatingProfile) -> impl Iterator<Item = &'a ItemId> {
        self.ratings.keys().filter(move |item| other.contains(item))
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    /// Mean of all ratings, or None for an empty profile
    pub fn mean(&self) -> Option<RatingValue> {
        if self.ratings.is_empty() {
            return None;
        }
        let total: RatingValue = self.ratings.values().sum();
        Some(total / self.ratings.len() as RatingValue)
    }
}

impl<I: Into<ItemId>> FromIterator<(I, RatingValue)> for RatingProfile {
    fn from_iter<T: IntoIterator<Item = (I, RatingValue)>>(iter: T) -> Self {
        Self {
            ratings: iter
                .into_iter()
                .map(|(item, rating)| (item.into(), rating))
                .collect(),
        }
    }
}

// =============================================================================
// Dataset - The In-Memory Ratings Store
// =============================================================================

/// Every user's rating profile.
///
/// The dataset is built once (from a file or in code), then shared read-only
/// through an `Arc`. The mutators below exist for the loading phase only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    pub(crate) profiles: BTreeMap<UserId, RatingProfile>,
}

impl Dataset {
    /// Creates a new, empty Dataset
    pub fn new() -> Self {
        Self {
            profiles: BTreeMap::new(),
        }
    }

    /// Get a user's profile
    ///
    /// Returns `None` if the user is unknown
    pub fn get_profile(&self, user: &str) -> Option<&RatingProfile> {
        self.profiles.get(user)
    }

    pub fn contains_user(&self, user: &str) -> bool {
        self.profiles.contains_key(user)
    }

    /// Iterate over user identifiers in ascending order
    pub fn users(&self) -> impl Iterator<Item = &UserId> {
        self.profiles.keys()
    }

    /// Iterate over (user, profile) pairs in ascending user order
    pub fn iter(&self) -> impl Iterator<Item = (&UserId, &RatingProfile)> {
        self.profiles.iter()
    }

    /// Number of users
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Insert a whole profile, replacing any existing one for this user
    pub fn insert_profile(&mut self, user: impl Into<UserId>, profile: RatingProfile) {
        self.profiles.insert(user.into(), profile);
    }

    /// Insert a single rating, creating the user's profile on first use
    ///
    /// Returns the previous rating if this (user, item) pair was already present
    pub fn insert_rating(
        &mut self,
        user: impl Into<UserId>,
        item: impl Into<ItemId>,
        rating: RatingValue,
    ) -> Option<RatingValue> {
        self.profiles
            .entry(user.into())
            .or_default()
            .insert(item, rating)
    }

    /// Get counts for debugging/validation: (users, distinct items, ratings)
    pub fn counts(&self) -> (usize, usize, usize) {
        let items: BTreeSet<&ItemId> = self.profiles.values().flat_map(|p| p.items()).collect();
        let total_ratings = self.profiles.values().map(|p| p.len()).sum();
        (self.profiles.len(), items.len(), total_ratings)
    }
}

impl<U: Into<UserId>> FromIterator<(U, RatingProfile)> for Dataset {
    fn from_iter<T: IntoIterator<Item = (U, RatingProfile)>>(iter: T) -> Self {
        Self {
            profiles: iter
                .into_iter()
                .map(|(user, profile)| (user.into(), profile))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_replaces_duplicate_item() {
        let mut profile = RatingProfile::new();
        assert_eq!(profile.insert("Phoenix", 4.0), None);
        assert_eq!(profile.insert("Phoenix", 2.5), Some(4.0));

        assert_eq!(profile.len(), 1);
        assert_eq!(profile.get("Phoenix"), Some(2.5));
    }

    #[test]
    fn test_shared_items_in_ascending_order() {
        let a: RatingProfile = [("z", 1.0), ("b", 2.0), ("a", 3.0)].into_iter().collect();
        let b: RatingProfile = [("a", 1.0), ("z", 1.0), ("q", 1.0)].into_iter().collect();

        let shared: Vec<&ItemId> = a.shared_items(&b).collect();
        assert_eq!(shared, vec!["a", "z"]);
    }

    #[test]
    fn test_profile_mean() {
        let profile: RatingProfile = [("a", 2.0), ("b", 4.0)].into_iter().collect();
        assert_eq!(profile.mean(), Some(3.0));
        assert_eq!(RatingProfile::new().mean(), None);
    }

    #[test]
    fn test_dataset_counts() {
        let mut dataset = Dataset::new();
        dataset.insert_rating("alice", "apple", 4.0);
        dataset.insert_rating("alice", "pony", 2.0);
        dataset.insert_rating("bob", "apple", 5.0);

        assert_eq!(dataset.counts(), (2, 2, 3));
        assert!(dataset.contains_user("bob"));
        assert!(dataset.get_profile("carol").is_none());
    }

    #[test]
    fn test_dataset_json_shape() {
        let json = r#"{"alice": {"apple": 4.0}, "bob": {"apple": 5.0, "pony": 1.5}}"#;
        let dataset: Dataset = serde_json::from_str(json).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.get_profile("bob").unwrap().get("pony"), Some(1.5));
    }
}
