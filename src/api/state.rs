use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::ScreenState;
use crate::services::{providers::CatalogProvider, Recommender};

/// Shared application state
///
/// One screen per server instance, mirroring the single-screen app: the view
/// state lives behind a lock and is only mutated through the reducer.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Recommender,
    pub screen: Arc<RwLock<ScreenState>>,
}

impl AppState {
    /// Creates application state backed by the given catalog provider
    pub fn new(provider: Arc<dyn CatalogProvider>) -> Self {
        Self {
            recommender: Recommender::new(provider),
            screen: Arc::new(RwLock::new(ScreenState::default())),
        }
    }
}
