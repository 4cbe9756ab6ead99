//! # Data Loader Crate
//!
//! This crate handles loading and holding user/item rating datasets.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (RatingProfile, Dataset)
//! - **parser**: Parse `user::item::rating` and JSON files into a Dataset
//! - **index**: Load a dataset from disk and validate it
//! - **sample**: A small built-in music ratings dataset
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Dataset;
//! use std::path::Path;
//!
//! let dataset = Dataset::load_from_file(Path::new("data/songs.dat"))?;
//!
//! let profile = dataset.get_profile("Angelica").unwrap();
//! println!("Angelica rated {} items", profile.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;
pub mod sample;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{
    // Type aliases
    UserId,
    ItemId,
    RatingValue,
    // Core types
    RatingProfile,
    Dataset,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_creation() {
        let dataset = Dataset::new();
        let (users, items, ratings) = dataset.counts();

        assert_eq!(users, 0);
        assert_eq!(items, 0);
        assert_eq!(ratings, 0);
    }

    #[test]
    fn test_insert_profile() {
        let mut dataset = Dataset::new();
        let profile: RatingProfile = [("Phoenix", 5.0), ("The Strokes", 2.5)].into_iter().collect();

        dataset.insert_profile("Angelica", profile.clone());

        let retrieved = dataset.get_profile("Angelica").unwrap();
        assert_eq!(retrieved, &profile);
        assert_eq!(retrieved.get("The Strokes"), Some(2.5));
    }

    #[test]
    fn test_empty_queries() {
        let dataset = Dataset::new();

        assert!(dataset.get_profile("nobody").is_none());
        assert!(!dataset.contains_user("nobody"));
        assert_eq!(dataset.users().count(), 0);
    }
}
