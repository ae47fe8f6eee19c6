/// TMDB catalog provider
///
/// Talks to the TMDB v3 `/discover/movie` endpoint. The API key travels as a
/// query parameter; an empty key is sent as-is and simply fails
/// authentication upstream.
use reqwest::Client as HttpClient;
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::Movie,
    services::{discovery::DiscoverQuery, providers::CatalogProvider},
};

/// Discover response envelope. `results` is optional so that a malformed or
/// truncated upstream response degrades to an empty page instead of a parse
/// failure.
#[derive(Debug, Deserialize)]
struct DiscoverResponse {
    results: Option<Vec<Movie>>,
}

#[derive(Clone)]
pub struct TmdbCatalog {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    language: String,
}

impl TmdbCatalog {
    pub fn new(api_key: String, api_url: String, language: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            language,
        }
    }
}

#[async_trait::async_trait]
impl CatalogProvider for TmdbCatalog {
    async fn discover(&self, query: &DiscoverQuery) -> AppResult<Vec<Movie>> {
        let url = format!("{}/discover/movie", self.api_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", self.language.as_str()),
            ])
            .query(&query.params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "TMDB API returned status {}: {}",
                status, body
            )));
        }

        let page: DiscoverResponse = response.json().await?;
        let movies = match page.results {
            Some(results) => results,
            None => {
                tracing::warn!(
                    provider = "tmdb",
                    "Discover response missing `results`, treating as empty page"
                );
                Vec::new()
            }
        };

        tracing::info!(
            provider = "tmdb",
            results = movies.len(),
            "Discover completed"
        );

        Ok(movies)
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
