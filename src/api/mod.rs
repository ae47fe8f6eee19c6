mod handlers;
mod routes;
mod state;

pub use handlers::{DecadeOption, FilterCatalog, GenreOption, RecommendationQuery};
pub use routes::create_router;
pub use state::AppState;
