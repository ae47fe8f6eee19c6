use crate::models::FilterSelection;

/// Parameter set for a TMDB `/discover/movie` request, built from the
/// screen's filter selection.
///
/// The query always targets the first page of popular movies; a genre filter
/// and a ten-year release-date window are appended only when selected. The
/// API key and language are the provider's concern, not the builder's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoverQuery {
    pub params: Vec<(&'static str, String)>,
}

impl DiscoverQuery {
    pub fn from_filters(filters: &FilterSelection) -> Self {
        let mut params = vec![
            ("sort_by", "popularity.desc".to_string()),
            ("include_adult", "false".to_string()),
            ("include_video", "false".to_string()),
            ("page", "1".to_string()),
        ];

        if let Some(genre) = filters.genre {
            params.push(("with_genres", genre.tmdb_id().to_string()));
        }

        if let Some(decade) = filters.decade {
            let start = decade.start_year();
            params.push(("primary_release_date.gte", format!("{}-01-01", start)));
            params.push(("primary_release_date.lte", format!("{}-12-31", start + 9)));
        }

        Self { params }
    }

    #[cfg(test)]
    fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Decade, Genre};

    #[test]
    fn test_query_with_genre_and_decade() {
        let filters = FilterSelection {
            genre: Some(Genre::Action),
            decade: Some(Decade::Y2010s),
        };

        let query = DiscoverQuery::from_filters(&filters);
        assert_eq!(query.get("with_genres"), Some("28"));
        assert_eq!(query.get("primary_release_date.gte"), Some("2010-01-01"));
        assert_eq!(query.get("primary_release_date.lte"), Some("2019-12-31"));
    }

    #[test]
    fn test_query_without_filters() {
        let query = DiscoverQuery::from_filters(&FilterSelection::default());
        assert_eq!(query.get("with_genres"), None);
        assert_eq!(query.get("primary_release_date.gte"), None);
        assert_eq!(query.get("primary_release_date.lte"), None);
    }

    #[test]
    fn test_query_fixed_params() {
        let query = DiscoverQuery::from_filters(&FilterSelection::default());
        assert_eq!(query.get("sort_by"), Some("popularity.desc"));
        assert_eq!(query.get("include_adult"), Some("false"));
        assert_eq!(query.get("include_video"), Some("false"));
        assert_eq!(query.get("page"), Some("1"));
    }

    #[test]
    fn test_query_decade_window_is_ten_years() {
        for decade in Decade::ALL {
            let filters = FilterSelection {
                genre: None,
                decade: Some(decade),
            };
            let query = DiscoverQuery::from_filters(&filters);
            let start = decade.start_year();
            assert_eq!(
                query.get("primary_release_date.gte"),
                Some(format!("{}-01-01", start).as_str())
            );
            assert_eq!(
                query.get("primary_release_date.lte"),
                Some(format!("{}-12-31", start + 9).as_str())
            );
        }
    }
}
