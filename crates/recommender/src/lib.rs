//! # Recommender Crate
//!
//! User-based collaborative filtering: "users who rate like you also liked..."
//!
//! ## Components
//!
//! ### Neighbor ranking
//! Every other user is scored against the target with the Pearson correlation
//! from the `similarity` crate and sorted, most similar first.
//!
//! ### Aggregation
//! - k = 1: the nearest neighbor's ratings on unseen items, unchanged
//! - k > 1: a similarity-weighted sum over the top k neighbors
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::sample::song_ratings;
//! use recommender::{Recommender, RecommenderConfig};
//! use std::sync::Arc;
//!
//! let dataset = Arc::new(song_ratings());
//! let recommender = Recommender::new(dataset, RecommenderConfig::new(3, 10));
//!
//! for rec in recommender.recommend("Hailey")? {
//!     println!("{}: {:.2}", rec.item, rec.score);
//! }
//! ```

// Public modules
pub mod config;
pub mod error;
pub mod types;
pub mod traits;
pub mod neighbors;
pub mod strategies;
pub mod recommender;

// Re-export commonly used types
pub use config::{RecommenderConfig, DEFAULT_K, DEFAULT_M};
pub use error::{RecommendError, Result};
pub use recommender::Recommender;
pub use traits::Aggregator;
pub use types::{NeighborWeight, Recommendation, SimilarityEntry};
pub use strategies::{normalized_weights, NearestNeighborAggregator, WeightedKnnAggregator};
