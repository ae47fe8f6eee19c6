use serde::{Deserialize, Serialize};

/// Quick-filter genres the screen exposes, backed by TMDB genre ids.
///
/// The filter bar only offers a handful of genres; "All" is the absence of a
/// filter (`Option<Genre>::None`) rather than a sentinel id.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Genre {
    Action,
    Comedy,
    Drama,
    Horror,
    Romance,
}

impl Genre {
    /// Every genre offered by the filter bar, in display order.
    pub const ALL: [Genre; 5] = [
        Genre::Action,
        Genre::Comedy,
        Genre::Drama,
        Genre::Horror,
        Genre::Romance,
    ];

    /// TMDB genre id used in discover queries.
    pub fn tmdb_id(self) -> i32 {
        match self {
            Genre::Action => 28,
            Genre::Comedy => 35,
            Genre::Drama => 18,
            Genre::Horror => 27,
            Genre::Romance => 10749,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::Horror => "Horror",
            Genre::Romance => "Romance",
        }
    }
}

/// Complete TMDB genre taxonomy, used to render the genre line on cards.
const GENRE_NAMES: &[(i32, &str)] = &[
    (28, "Action"),
    (12, "Adventure"),
    (16, "Animation"),
    (35, "Comedy"),
    (80, "Crime"),
    (99, "Documentary"),
    (18, "Drama"),
    (10751, "Family"),
    (14, "Fantasy"),
    (36, "History"),
    (27, "Horror"),
    (10402, "Music"),
    (9648, "Mystery"),
    (10749, "Romance"),
    (878, "Science Fiction"),
    (10770, "TV Movie"),
    (53, "Thriller"),
    (10752, "War"),
    (37, "Western"),
];

/// Looks up the display name for a TMDB genre id.
pub fn genre_name(id: i32) -> Option<&'static str> {
    GENRE_NAMES
        .iter()
        .find(|(genre_id, _)| *genre_id == id)
        .map(|(_, name)| *name)
}

/// Renders a set of TMDB genre ids as a comma-separated list of names.
///
/// Unknown ids render as "Unknown"; an empty id set renders as "Unknown".
pub fn genre_names(ids: &[i32]) -> String {
    if ids.is_empty() {
        return "Unknown".to_string();
    }

    ids.iter()
        .map(|id| genre_name(*id).unwrap_or("Unknown"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tmdb_ids() {
        assert_eq!(Genre::Action.tmdb_id(), 28);
        assert_eq!(Genre::Comedy.tmdb_id(), 35);
        assert_eq!(Genre::Drama.tmdb_id(), 18);
        assert_eq!(Genre::Horror.tmdb_id(), 27);
        assert_eq!(Genre::Romance.tmdb_id(), 10749);
    }

    #[test]
    fn test_genre_serde() {
        let json = serde_json::to_string(&Genre::Action).unwrap();
        assert_eq!(json, "\"action\"");

        let genre: Genre = serde_json::from_str("\"romance\"").unwrap();
        assert_eq!(genre, Genre::Romance);
    }

    #[test]
    fn test_genre_name_known() {
        assert_eq!(genre_name(878), Some("Science Fiction"));
        assert_eq!(genre_name(37), Some("Western"));
    }

    #[test]
    fn test_genre_name_unknown() {
        assert_eq!(genre_name(424242), None);
    }

    #[test]
    fn test_genre_names_joined() {
        assert_eq!(genre_names(&[28, 35]), "Action, Comedy");
    }

    #[test]
    fn test_genre_names_unknown_id() {
        assert_eq!(genre_names(&[28, 424242]), "Action, Unknown");
    }

    #[test]
    fn test_genre_names_empty() {
        assert_eq!(genre_names(&[]), "Unknown");
    }
}
