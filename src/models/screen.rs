use serde::{Deserialize, Serialize};

use super::{Decade, FilterSelection, Genre, MovieCard, SelectionMode};
use crate::services::selection::DISPLAY_LIMIT;

/// The recommendation screen's view state: selected filters, selection mode,
/// the loading flag, and the last display list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ScreenState {
    pub genre: Option<Genre>,
    pub decade: Option<Decade>,
    pub mode: SelectionMode,
    pub loading: bool,
    /// At most three cards; cleared when a fetch fails.
    pub displayed: Vec<MovieCard>,
}

impl ScreenState {
    pub fn filters(&self) -> FilterSelection {
        FilterSelection {
            genre: self.genre,
            decade: self.decade,
        }
    }
}

/// Events the screen reacts to. Filter and mode events come from the client;
/// the fetch lifecycle events are emitted by the fetch flow itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ScreenEvent {
    SetGenre(Option<Genre>),
    SetDecade(Option<Decade>),
    SetMode(SelectionMode),
    FetchStarted,
    FetchResolved(Vec<MovieCard>),
    FetchFailed,
}

/// Pure reducer over screen events. All view-state mutation goes through here,
/// keeping the selection logic and the state transitions independently
/// testable.
pub fn reduce(mut state: ScreenState, event: ScreenEvent) -> ScreenState {
    match event {
        ScreenEvent::SetGenre(genre) => state.genre = genre,
        ScreenEvent::SetDecade(decade) => state.decade = decade,
        ScreenEvent::SetMode(mode) => state.mode = mode,
        ScreenEvent::FetchStarted => state.loading = true,
        ScreenEvent::FetchResolved(mut cards) => {
            cards.truncate(DISPLAY_LIMIT);
            state.displayed = cards;
            state.loading = false;
        }
        ScreenEvent::FetchFailed => {
            state.displayed.clear();
            state.loading = false;
        }
    }
    state
}
