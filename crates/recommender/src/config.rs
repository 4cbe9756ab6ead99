//! Recommender configuration.
//!
//! Invalid values never fail construction: they are replaced by the default
//! and a warning is logged.

use serde::Serialize;
use tracing::warn;

/// Default number of nearest neighbors consulted
pub const DEFAULT_K: usize = 1;

/// Default cap on the number of recommendations returned by `recommend_top`
pub const DEFAULT_M: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecommenderConfig {
    /// Number of nearest neighbors (always > 0)
    pub k: usize,
    /// Result-count cap (always > 0)
    pub m: usize,
}

impl RecommenderConfig {
    /// Build a configuration from raw caller input.
    ///
    /// `k <= 0` falls back to 1 and `m <= 0` falls back to 10, each with a warning.
    pub fn new(k: i64, m: i64) -> Self {
        Self {
            k: sanitize("k", k, DEFAULT_K),
            m: sanitize("m", m, DEFAULT_M),
        }
    }

    /// Set the neighbor count (same fallback policy as `new`)
    pub fn with_k(mut self, k: i64) -> Self {
        self.k = sanitize("k", k, DEFAULT_K);
        self
    }

    /// Set the result cap (same fallback policy as `new`)
    pub fn with_m(mut self, m: i64) -> Self {
        self.m = sanitize("m", m, DEFAULT_M);
        self
    }
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            k: DEFAULT_K,
            m: DEFAULT_M,
        }
    }
}

fn sanitize(name: &str, value: i64, default: usize) -> usize {
    match usize::try_from(value) {
        Ok(v) if v > 0 => v,
        _ => {
            warn!(
                parameter = name,
                value,
                default,
                "invalid value of {} (must be > 0); defaulting to {}",
                name,
                default
            );
            default
        }
    }
}
