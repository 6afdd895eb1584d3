//! Genre-frequency aggregation over the ranked list.
//!
//! Pure computation: counts genre tags across ranked shows, weighting each
//! occurrence by the show's derived rating so top-ranked tastes dominate,
//! then orders wish-list candidates by how well their genres match.

use std::collections::HashMap;

use crate::item::Show;
use crate::list::{RankedList, WishList};
use crate::rating::derived_rating;

/// How strongly a genre features in the user's ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct GenreAffinity {
    pub genre: String,
    /// Shows in the ranked list carrying this tag.
    pub count: usize,
    /// Sum of derived ratings of those shows.
    pub weight: f64,
}

/// Aggregate genre affinities, strongest first (ties break alphabetically).
pub fn genre_affinities(ranked: &RankedList) -> Vec<GenreAffinity> {
    let total = ranked.len();
    let mut tally: HashMap<&str, (usize, f64)> = HashMap::new();
    for (index, show) in ranked.items().iter().enumerate() {
        let rating = derived_rating(index, total);
        for genre in &show.genre_tags {
            let entry = tally.entry(genre.as_str()).or_insert((0, 0.0));
            entry.0 += 1;
            entry.1 += rating;
        }
    }
    let mut affinities: Vec<GenreAffinity> = tally
        .into_iter()
        .map(|(genre, (count, weight))| GenreAffinity {
            genre: genre.to_string(),
            count,
            weight,
        })
        .collect();
    affinities.sort_by(|a, b| {
        b.weight
            .partial_cmp(&a.weight)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.genre.cmp(&b.genre))
    });
    affinities
}

/// Wish-list entries ordered by genre affinity, best match first.
/// Entries with equal scores keep their creation order.
pub fn ranked_wish_candidates<'a>(ranked: &RankedList, wish: &'a WishList) -> Vec<&'a Show> {
    let affinities = genre_affinities(ranked);
    let weights: HashMap<&str, f64> = affinities
        .iter()
        .map(|a| (a.genre.as_str(), a.weight))
        .collect();
    let mut scored: Vec<(f64, &Show)> = wish
        .items()
        .iter()
        .map(|show| {
            let score = show
                .genre_tags
                .iter()
                .filter_map(|g| weights.get(g.as_str()))
                .sum();
            (score, show)
        })
        .collect();
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored.into_iter().map(|(_, show)| show).collect()
}
