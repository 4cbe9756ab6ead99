//! Pearson correlation between two rating profiles.
//!
//! ## Algorithm
//! Over the items both users rated (n of them):
//! 1. Accumulate sum(x), sum(y), sum(x*y), sum(x^2), sum(y^2)
//! 2. denominator = sqrt(sum(x^2) - sum(x)^2 / n) * sqrt(sum(y^2) - sum(y)^2 / n)
//! 3. r = (sum(x*y) - sum(x) * sum(y) / n) / denominator, rounded to 2 decimals
//!
//! n == 0 yields `Correlation::Undefined(NoSharedItems)`. If either user gave
//! every shared item the same rating, the result is `Undefined(ZeroVariance)`.
//! That check compares the ratings themselves: the variance term can cancel to
//! a tiny non-zero value for ratings such as 0.3 or 4.1.

use crate::types::{Correlation, Incomparable};
use data_loader::RatingProfile;
use tracing::warn;

/// Round to two decimal places, exact halves to even (0.625 -> 0.62)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Running sums over the shared ratings
#[derive(Debug, Default)]
struct Moments {
    n: usize,
    sum_x: f64,
    sum_y: f64,
    sum_xy: f64,
    sum_x2: f64,
    sum_y2: f64,
    /// First shared rating on each side, and whether a different one was seen
    first: Option<(f64, f64)>,
    x_varies: bool,
    y_varies: bool,
}

impl Moments {
    fn over_shared(x: &RatingProfile, y: &RatingProfile) -> Self {
        let mut moments = Moments::default();
        for (item, rx) in x.iter() {
            if let Some(ry) = y.get(item) {
                match moments.first {
                    None => moments.first = Some((rx, ry)),
                    Some((fx, fy)) => {
                        moments.x_varies |= rx != fx;
                        moments.y_varies |= ry != fy;
                    }
                }
                moments.n += 1;
                moments.sum_x += rx;
                moments.sum_y += ry;
                moments.sum_xy += rx * ry;
                moments.sum_x2 += rx * rx;
                moments.sum_y2 += ry * ry;
            }
        }
        moments
    }

    fn is_constant(&self) -> bool {
        !self.x_varies || !self.y_varies
    }
}

/// Pearson correlation of two users' ratings over the items they share.
///
/// Symmetric in its arguments. Logs a warning when the correlation is undefined.
pub fn pearson(x: &RatingProfile, y: &RatingProfile) -> Correlation {
    let m = Moments::over_shared(x, y);

    if m.n == 0 {
        warn!("pearson: profiles share no rated items; correlation undefined");
        return Correlation::Undefined(Incomparable::NoSharedItems);
    }

    let n = m.n as f64;
    let denominator =
        (m.sum_x2 - m.sum_x * m.sum_x / n).sqrt() * (m.sum_y2 - m.sum_y * m.sum_y / n).sqrt();

    // Cancellation can leave a tiny negative variance, which sqrt turns into NaN
    if m.is_constant() || denominator == 0.0 || denominator.is_nan() {
        warn!(
            shared_items = m.n,
            "pearson: no variance in shared ratings; correlation undefined"
        );
        return Correlation::Undefined(Incomparable::ZeroVariance);
    }

    let r = (m.sum_xy - m.sum_x * m.sum_y / n) / denominator;
    Correlation::Defined(round2(r).clamp(-1.0, 1.0))
}
