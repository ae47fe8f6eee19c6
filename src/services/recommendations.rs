use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{
    error::AppResult,
    models::{FilterSelection, MovieCard, SelectionMode},
    services::{discovery::DiscoverQuery, providers::CatalogProvider, selection},
};

/// Produces the screen's display list: one discover query against the
/// catalog, reduced to at most three display-ready cards.
#[derive(Clone)]
pub struct Recommender {
    provider: Arc<dyn CatalogProvider>,
}

impl Recommender {
    pub fn new(provider: Arc<dyn CatalogProvider>) -> Self {
        Self { provider }
    }

    pub async fn recommend(
        &self,
        filters: &FilterSelection,
        mode: SelectionMode,
    ) -> AppResult<Vec<MovieCard>> {
        let mut rng = SmallRng::from_os_rng();
        self.recommend_with_rng(filters, mode, &mut rng).await
    }

    /// Same as [`recommend`](Self::recommend) with a caller-supplied RNG, so
    /// random selection is reproducible under a fixed seed.
    pub async fn recommend_with_rng<R: Rng + Send>(
        &self,
        filters: &FilterSelection,
        mode: SelectionMode,
        rng: &mut R,
    ) -> AppResult<Vec<MovieCard>> {
        let query = DiscoverQuery::from_filters(filters);
        let movies = self.provider.discover(&query).await?;

        tracing::info!(
            provider = self.provider.name(),
            results = movies.len(),
            mode = ?mode,
            "Catalog fetch completed"
        );

        let picked = selection::select(movies, mode, rng);
        Ok(picked.into_iter().map(MovieCard::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Genre, Movie};
    use crate::services::providers::MockCatalogProvider;

    fn movie(id: u64, rating: f64) -> Movie {
        Movie {
            id,
            title: format!("Movie {}", id),
            overview: String::new(),
            poster_path: None,
            vote_average: rating,
            release_date: String::new(),
            genre_ids: vec![28],
        }
    }

    #[tokio::test]
    async fn test_recommend_passes_built_query_to_provider() {
        let mut provider = MockCatalogProvider::new();
        provider
            .expect_discover()
            .withf(|query| {
                query
                    .params
                    .iter()
                    .any(|(key, value)| *key == "with_genres" && value == "28")
            })
            .returning(|_| Ok(vec![]));
        provider.expect_name().return_const("mock");

        let recommender = Recommender::new(Arc::new(provider));
        let filters = FilterSelection {
            genre: Some(Genre::Action),
            decade: None,
        };

        let cards = recommender
            .recommend(&filters, SelectionMode::TopRated)
            .await
            .unwrap();
        assert!(cards.is_empty());
    }

    #[tokio::test]
    async fn test_recommend_top_rated_caps_at_three_cards() {
        let mut provider = MockCatalogProvider::new();
        provider.expect_discover().returning(|_| {
            Ok(vec![
                movie(1, 4.0),
                movie(2, 9.0),
                movie(3, 6.5),
                movie(4, 8.1),
                movie(5, 7.7),
            ])
        });
        provider.expect_name().return_const("mock");

        let recommender = Recommender::new(Arc::new(provider));
        let cards = recommender
            .recommend(&FilterSelection::default(), SelectionMode::TopRated)
            .await
            .unwrap();

        assert_eq!(cards.len(), 3);
        let ids: Vec<u64> = cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 4, 5]);
        assert_eq!(cards[0].genres, "Action");
    }

    #[tokio::test]
    async fn test_recommend_random_is_seed_reproducible() {
        let results = vec![
            movie(1, 4.0),
            movie(2, 9.0),
            movie(3, 6.5),
            movie(4, 8.1),
            movie(5, 7.7),
            movie(6, 2.3),
        ];

        let mut provider = MockCatalogProvider::new();
        let fixture = results.clone();
        provider
            .expect_discover()
            .returning(move |_| Ok(fixture.clone()));
        provider.expect_name().return_const("mock");

        let recommender = Recommender::new(Arc::new(provider));

        let mut first_rng = SmallRng::seed_from_u64(99);
        let first = recommender
            .recommend_with_rng(&FilterSelection::default(), SelectionMode::Random, &mut first_rng)
            .await
            .unwrap();

        let mut second_rng = SmallRng::seed_from_u64(99);
        let second = recommender
            .recommend_with_rng(&FilterSelection::default(), SelectionMode::Random, &mut second_rng)
            .await
            .unwrap();

        assert_eq!(first.len(), 3);
        assert_eq!(first, second);
    }
}
