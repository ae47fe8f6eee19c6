use serde::{Deserialize, Serialize};

pub mod filters;
pub mod genre;
pub mod screen;

pub use filters::{Decade, FilterSelection, SelectionMode};
pub use genre::Genre;
pub use screen::{reduce, ScreenEvent, ScreenState};

/// Base URL for TMDB poster images at card width.
const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w342";

/// Raw movie record from the TMDB discover endpoint.
///
/// TMDB omits fields freely, so everything beyond the id and title is
/// default-tolerant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub genre_ids: Vec<i32>,
}

/// Display-ready card returned to the screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieCard {
    pub id: u64,
    pub title: String,
    pub overview: String,
    /// Full poster URL; `None` when the catalog has no poster for the movie.
    pub poster_url: Option<String>,
    /// Vote average on the 0-10 scale.
    pub rating: f64,
    pub release_date: String,
    /// Comma-separated genre names resolved from the static taxonomy.
    pub genres: String,
}

impl From<Movie> for MovieCard {
    fn from(movie: Movie) -> Self {
        let poster_url = movie
            .poster_path
            .filter(|path| !path.is_empty())
            .map(|path| format!("{}{}", POSTER_BASE_URL, path));

        Self {
            id: movie.id,
            title: movie.title,
            overview: movie.overview,
            poster_url,
            rating: movie.vote_average,
            release_date: movie.release_date,
            genres: genre::genre_names(&movie.genre_ids),
        }
    }
}
