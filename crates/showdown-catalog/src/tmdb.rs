//! TMDB (The Movie Database) source plugin
//!
//! API docs: https://developer.themoviedb.org/docs
//! Rate limit: ~50 requests/second per IP (v3 API key auth)

use serde::Deserialize;
use tracing::debug;

use crate::config::TmdbConfig;
use crate::http::HttpClient;
use crate::source::{CatalogError, CatalogSourceInfo};
use crate::types::{CatalogCandidate, ShowDetails};
use showdown_core::CatalogId;

/// TMDB search response wrapper
#[derive(Debug, Deserialize)]
struct TmdbSearchResponse {
    results: Vec<TmdbSearchResult>,
}

/// Single series from TMDB search results
#[derive(Debug, Deserialize)]
struct TmdbSearchResult {
    id: CatalogId,
    name: String,
    first_air_date: Option<String>,
    poster_path: Option<String>,
    overview: Option<String>,
}

/// Series details response
#[derive(Debug, Deserialize)]
struct TmdbDetailsResponse {
    id: CatalogId,
    name: String,
    first_air_date: Option<String>,
    poster_path: Option<String>,
    overview: Option<String>,
    genres: Option<Vec<TmdbGenre>>,
}

#[derive(Debug, Deserialize)]
struct TmdbGenre {
    name: String,
}

/// TMDB dates are `YYYY-MM-DD`; only the year is kept.
fn parse_year(date: Option<&str>) -> Option<i32> {
    date?.get(0..4)?.parse().ok()
}

pub struct TmdbSource {
    http: HttpClient,
    config: TmdbConfig,
}

impl TmdbSource {
    pub fn new(config: TmdbConfig) -> Result<Self, CatalogError> {
        let http = HttpClient::new("showdown/0.1").map_err(CatalogError::Http)?;
        Ok(Self { http, config })
    }

    pub fn info() -> CatalogSourceInfo {
        CatalogSourceInfo {
            id: "tmdb",
            name: "The Movie Database",
            description: "Community-built movie and TV metadata",
            base_url: "https://api.themoviedb.org/3",
            rate_limit_per_second: 50.0,
            requires_api_key: true,
        }
    }

    /// Parse a TMDB series-search response
    pub fn parse_search_response(json: &str) -> Result<Vec<CatalogCandidate>, CatalogError> {
        let response: TmdbSearchResponse = serde_json::from_str(json)
            .map_err(|e| CatalogError::Parse(format!("Invalid TMDB JSON: {e}")))?;
        Ok(response
            .results
            .into_iter()
            .map(|r| CatalogCandidate {
                external_id: r.id,
                title: r.name,
                year: parse_year(r.first_air_date.as_deref()),
                poster_ref: r.poster_path,
                overview: r.overview,
            })
            .collect())
    }

    /// Parse a TMDB series-details response
    pub fn parse_details_response(json: &str) -> Result<ShowDetails, CatalogError> {
        let response: TmdbDetailsResponse = serde_json::from_str(json)
            .map_err(|e| CatalogError::Parse(format!("Invalid TMDB JSON: {e}")))?;
        Ok(ShowDetails {
            external_id: response.id,
            title: response.name,
            year: parse_year(response.first_air_date.as_deref()),
            poster_ref: response.poster_path,
            overview: response.overview,
            genre_tags: response
                .genres
                .unwrap_or_default()
                .into_iter()
                .map(|g| g.name)
                .collect(),
        })
    }

    /// Search series by title.
    pub async fn search_by_title(
        &self,
        query: &str,
    ) -> Result<Vec<CatalogCandidate>, CatalogError> {
        if query.trim().is_empty() {
            return Err(CatalogError::InvalidQuery("empty query".to_string()));
        }
        let url = format!("{}/search/tv", self.config.base_url);
        let body = self
            .http
            .get_with_params(
                &url,
                &[
                    ("api_key", self.config.api_key.as_str()),
                    ("language", self.config.language.as_str()),
                    ("query", query),
                ],
            )
            .await?;
        let candidates = Self::parse_search_response(&body)?;
        debug!(query, hits = candidates.len(), "tmdb search");
        Ok(candidates)
    }

    /// Fetch full descriptive fields for one series.
    pub async fn get_details(&self, external_id: CatalogId) -> Result<ShowDetails, CatalogError> {
        let url = format!("{}/tv/{external_id}", self.config.base_url);
        let body = self
            .http
            .get_with_params(
                &url,
                &[
                    ("api_key", self.config.api_key.as_str()),
                    ("language", self.config.language.as_str()),
                ],
            )
            .await?;
        Self::parse_details_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_JSON: &str = r#"{
        "page": 1,
        "results": [
            {
                "id": 1399,
                "name": "Game of Thrones",
                "first_air_date": "2011-04-17",
                "poster_path": "/u3bZgnGQ9T01sWNhyveQz0wH0Hl.jpg",
                "overview": "Seven noble families fight for control of Westeros.",
                "genre_ids": [18, 10765],
                "vote_average": 8.456
            },
            {
                "id": 138757,
                "name": "Game of Thrones: The Last Watch",
                "first_air_date": null,
                "poster_path": null,
                "overview": null
            }
        ],
        "total_pages": 1,
        "total_results": 2
    }"#;

    const DETAILS_JSON: &str = r#"{
        "id": 1396,
        "name": "Breaking Bad",
        "first_air_date": "2008-01-20",
        "poster_path": "/ztkUQFLlC19CCMYHW9o1zWhJRNq.jpg",
        "overview": "A high school chemistry teacher turns to crime.",
        "genres": [
            {"id": 18, "name": "Drama"},
            {"id": 80, "name": "Crime"}
        ],
        "number_of_seasons": 5
    }"#;

    #[test]
    fn parses_search_results() {
        let candidates = TmdbSource::parse_search_response(SEARCH_JSON).unwrap();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].external_id, 1399);
        assert_eq!(candidates[0].title, "Game of Thrones");
        assert_eq!(candidates[0].year, Some(2011));
        assert!(candidates[0].poster_ref.is_some());
        assert_eq!(candidates[1].year, None);
        assert_eq!(candidates[1].poster_ref, None);
    }

    #[test]
    fn parses_details_with_genre_names() {
        let details = TmdbSource::parse_details_response(DETAILS_JSON).unwrap();
        assert_eq!(details.external_id, 1396);
        assert_eq!(details.year, Some(2008));
        assert_eq!(details.genre_tags, vec!["Drama", "Crime"]);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = TmdbSource::parse_search_response("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn year_parsing_tolerates_odd_dates() {
        assert_eq!(parse_year(Some("2011-04-17")), Some(2011));
        assert_eq!(parse_year(Some("")), None);
        assert_eq!(parse_year(Some("soon")), None);
        assert_eq!(parse_year(None), None);
    }
}
