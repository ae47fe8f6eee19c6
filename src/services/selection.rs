use std::collections::HashSet;

use rand::Rng;

use crate::models::{Movie, SelectionMode};

/// Maximum number of movies in one display list.
pub const DISPLAY_LIMIT: usize = 3;

/// Reduces a raw result set to at most [`DISPLAY_LIMIT`] movies.
///
/// An empty result set yields an empty list in either mode.
pub fn select<R: Rng>(movies: Vec<Movie>, mode: SelectionMode, rng: &mut R) -> Vec<Movie> {
    match mode {
        SelectionMode::TopRated => top_rated(movies),
        SelectionMode::Random => sample(movies, rng),
    }
}

/// Stable sort by descending vote average, truncated to the display limit.
fn top_rated(mut movies: Vec<Movie>) -> Vec<Movie> {
    movies.sort_by(|a, b| {
        b.vote_average
            .partial_cmp(&a.vote_average)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    movies.truncate(DISPLAY_LIMIT);
    movies
}

/// Draws uniform indices, tracking already-chosen ones, until the display
/// limit is reached or the pool is exhausted. Output order is draw order.
fn sample<R: Rng>(movies: Vec<Movie>, rng: &mut R) -> Vec<Movie> {
    if movies.is_empty() {
        return Vec::new();
    }

    let mut chosen = HashSet::new();
    let mut picked = Vec::new();
    while picked.len() < DISPLAY_LIMIT && chosen.len() < movies.len() {
        let index = rng.random_range(0..movies.len());
        if chosen.insert(index) {
            picked.push(movies[index].clone());
        }
    }
    picked
}
