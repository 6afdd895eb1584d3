//! Position-derived ratings.
//!
//! A show's score is a pure function of its index and the list length, so it
//! can never drift from the authoritative order. Ratings are recomputed on
//! every read and never stored.

use serde::{Deserialize, Serialize};

use crate::item::Show;

/// A show paired with the rating its current position implies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedShow {
    pub show: Show,
    pub position: usize,
    pub rating: f64,
}

/// Map a list position to a score in `[1.0, 10.0]`.
///
/// The top entry always reads 10.0 and, for lists of two or more, the bottom
/// entry always reads 1.0, with the rest spaced evenly and rounded to one
/// decimal place.
pub fn derived_rating(index: usize, total: usize) -> f64 {
    if total <= 1 {
        return 10.0;
    }
    let step = 9.0 / (total - 1) as f64;
    let raw = 10.0 - index as f64 * step;
    (raw.clamp(1.0, 10.0) * 10.0).round() / 10.0
}
