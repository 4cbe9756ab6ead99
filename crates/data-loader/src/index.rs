//! Dataset loading and integrity checks.
//!
//! This module ties the parsers together:
//! - Pick a parser from the file extension
//! - Validate the loaded ratings before anyone queries them

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::path::Path;
use tracing::info;

impl Dataset {
    /// Load a ratings dataset from a file
    ///
    /// This is the main entry point for loading data.
    ///
    /// Steps:
    /// 1. Parse the file (`.json` as nested JSON, anything else as `user::item::rating` lines)
    /// 2. Validate data integrity
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading ratings dataset from {:?}", path);

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let dataset = if is_json {
            parser::parse_json(path)?
        } else {
            parser::parse_ratings(path)?
        };

        let (users, items, ratings) = dataset.counts();
        info!("Loaded {} users, {} items, {} ratings", users, items, ratings);

        dataset.validate()?;
        Ok(dataset)
    }

    /// Validate data integrity
    ///
    /// Every rating must be a finite number: NaN and infinities have no
    /// place in a similarity computation and would make ranking order undefined.
    /// Users with an empty profile are allowed.
    pub fn validate(&self) -> Result<()> {
        for (user, profile) in &self.profiles {
            if user.is_empty() {
                return Err(DataLoadError::ValidationError(
                    "empty user identifier".to_string(),
                ));
            }
            for (item, rating) in profile.iter() {
                if item.is_empty() {
                    return Err(DataLoadError::ValidationError(format!(
                        "empty item identifier in profile of {}",
                        user
                    )));
                }
                if !rating.is_finite() {
                    return Err(DataLoadError::InvalidValue {
                        field: format!("rating of {} for {}", user, item),
                        value: rating.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}
