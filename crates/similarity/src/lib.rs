//! # Similarity Crate
//!
//! Pairwise similarity between two users' rating profiles.
//!
//! The only metric is the Pearson product-moment correlation over the items
//! both users rated. When the correlation is undefined (no shared items, or
//! no variance in the shared ratings) the result is `Correlation::Undefined`,
//! which ranks below every defined correlation.
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::sample::song_ratings;
//! use similarity::pearson;
//!
//! let dataset = song_ratings();
//! let angelica = dataset.get_profile("Angelica").unwrap();
//! let bill = dataset.get_profile("Bill").unwrap();
//!
//! assert_eq!(pearson(angelica, bill).score(), -0.9);
//! ```

pub mod types;
pub mod pearson;

pub use types::{Correlation, Incomparable, SENTINEL_SCORE};
pub use pearson::{pearson, round2};
