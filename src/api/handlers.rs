use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::{
    reduce, Decade, FilterSelection, Genre, MovieCard, ScreenEvent, ScreenState, SelectionMode,
};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    #[serde(default)]
    pub genre: Option<Genre>,
    #[serde(default)]
    pub decade: Option<Decade>,
    #[serde(default)]
    pub mode: SelectionMode,
}

/// The filter options the screen renders as its filter bar.
#[derive(Debug, Serialize)]
pub struct FilterCatalog {
    pub genres: Vec<GenreOption>,
    pub decades: Vec<DecadeOption>,
    pub modes: Vec<SelectionMode>,
}

#[derive(Debug, Serialize)]
pub struct GenreOption {
    pub value: Genre,
    pub tmdb_id: i32,
    pub name: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DecadeOption {
    pub value: Decade,
    pub name: &'static str,
    pub start_year: i32,
}

// Handlers

pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// GET /filters - supported genres, decades, and selection modes
pub async fn get_filters() -> Json<FilterCatalog> {
    let genres = Genre::ALL
        .into_iter()
        .map(|genre| GenreOption {
            value: genre,
            tmdb_id: genre.tmdb_id(),
            name: genre.display_name(),
        })
        .collect();

    let decades = Decade::ALL
        .into_iter()
        .map(|decade| DecadeOption {
            value: decade,
            name: decade.display_name(),
            start_year: decade.start_year(),
        })
        .collect();

    Json(FilterCatalog {
        genres,
        decades,
        modes: vec![SelectionMode::Random, SelectionMode::TopRated],
    })
}

/// GET /recommendations - stateless fetch-and-select for the given filters
pub async fn get_recommendations(
    State(state): State<AppState>,
    Query(params): Query<RecommendationQuery>,
) -> AppResult<Json<Vec<MovieCard>>> {
    let filters = FilterSelection {
        genre: params.genre,
        decade: params.decade,
    };

    let cards = state.recommender.recommend(&filters, params.mode).await?;
    Ok(Json(cards))
}

/// GET /screen - current view state
pub async fn get_screen(State(state): State<AppState>) -> Json<ScreenState> {
    Json(state.screen.read().await.clone())
}

/// POST /screen/events - apply a filter or mode event to the screen
pub async fn post_screen_event(
    State(state): State<AppState>,
    Json(event): Json<ScreenEvent>,
) -> AppResult<Json<ScreenState>> {
    if matches!(
        event,
        ScreenEvent::FetchStarted | ScreenEvent::FetchResolved(_) | ScreenEvent::FetchFailed
    ) {
        return Err(AppError::InvalidInput(
            "fetch lifecycle events are driven by the fetch endpoint".to_string(),
        ));
    }

    let mut screen = state.screen.write().await;
    *screen = reduce(screen.clone(), event);
    Ok(Json(screen.clone()))
}

/// POST /screen/fetch - the screen's "Get Movies" flow
///
/// Fetches with the current filters and reduces the outcome into the view
/// state. A failed fetch collapses to an empty display list rather than an
/// error response; the screen shows its empty-state message either way.
pub async fn post_screen_fetch(State(state): State<AppState>) -> Json<ScreenState> {
    let (filters, mode) = {
        let mut screen = state.screen.write().await;
        *screen = reduce(screen.clone(), ScreenEvent::FetchStarted);
        (screen.filters(), screen.mode)
    };

    let event = match state.recommender.recommend(&filters, mode).await {
        Ok(cards) => ScreenEvent::FetchResolved(cards),
        Err(error) => {
            tracing::warn!(error = %error, "Fetch failed, presenting empty display list");
            ScreenEvent::FetchFailed
        }
    };

    let mut screen = state.screen.write().await;
    *screen = reduce(screen.clone(), event);
    Json(screen.clone())
}
