use serde::{Deserialize, Serialize};

use super::Genre;

/// Release-decade filter. Each variant covers exactly ten years starting at
/// `start_year`; "All" is the absence of a filter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Decade {
    #[serde(rename = "2020s")]
    Y2020s,
    #[serde(rename = "2010s")]
    Y2010s,
    #[serde(rename = "2000s")]
    Y2000s,
}

impl Decade {
    /// Every decade offered by the filter bar, newest first.
    pub const ALL: [Decade; 3] = [Decade::Y2020s, Decade::Y2010s, Decade::Y2000s];

    /// First year of the decade; the window ends at `start_year() + 9`.
    pub fn start_year(self) -> i32 {
        match self {
            Decade::Y2020s => 2020,
            Decade::Y2010s => 2010,
            Decade::Y2000s => 2000,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Decade::Y2020s => "2020s",
            Decade::Y2010s => "2010s",
            Decade::Y2000s => "2000s",
        }
    }
}

/// How the final display list is derived from the raw result set.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// Three distinct picks drawn uniformly at random.
    #[default]
    Random,
    /// Top three by descending vote average.
    TopRated,
}

/// The user's current filter choices; `None` means "All".
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterSelection {
    pub genre: Option<Genre>,
    pub decade: Option<Decade>,
}
