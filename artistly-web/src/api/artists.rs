//! Artist directory endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use artistly_common::directory::{filter_artists, results_summary, DirectoryFilter};
use artistly_common::models::{Artist, CategoryId, Category};

use crate::{ApiError, ApiResult, AppState};

/// Query parameters for the directory page
#[derive(Debug, Default, Deserialize)]
pub struct DirectoryQuery {
    /// Free-text search over name and bio
    #[serde(default)]
    pub q: String,
    /// Comma-separated category ids, e.g. `singers,djs`
    pub category: Option<String>,
    /// `all` or a city label
    pub location: Option<String>,
    /// `all` or a fee range label
    pub fee_range: Option<String>,
}

impl DirectoryQuery {
    /// Parse the raw parameters into a directory selection
    pub fn into_filter(self) -> ApiResult<DirectoryFilter> {
        let mut filter = DirectoryFilter {
            query: self.q,
            ..DirectoryFilter::default()
        };

        if let Some(raw) = self.category {
            for id in raw.split(',').map(str::trim).filter(|id| !id.is_empty()) {
                filter.toggle_category(id.parse::<CategoryId>()?, true);
            }
        }
        if let Some(raw) = self.location.filter(|raw| !raw.is_empty()) {
            filter.location = raw.parse()?;
        }
        if let Some(raw) = self.fee_range.filter(|raw| !raw.is_empty()) {
            filter.fee_range = raw.parse()?;
        }

        Ok(filter)
    }
}

/// Artist card: the listing plus its resolved category badges
#[derive(Debug, Serialize)]
pub struct ArtistCard<'a> {
    #[serde(flatten)]
    pub artist: &'a Artist,
    pub category_badges: Vec<String>,
}

impl<'a> ArtistCard<'a> {
    pub fn new(artist: &'a Artist) -> Self {
        let category_badges = artist
            .categories
            .iter()
            .map(|id| Category::lookup(*id).badge())
            .collect();
        Self { artist, category_badges }
    }
}

#[derive(Debug, Serialize)]
pub struct DirectoryResponse<'a> {
    pub total_results: usize,
    pub summary: String,
    pub active_filter_count: usize,
    pub artists: Vec<ArtistCard<'a>>,
}

/// GET /api/artists
pub async fn list_artists(
    State(state): State<AppState>,
    Query(query): Query<DirectoryQuery>,
) -> ApiResult<Json<serde_json::Value>> {
    let filter = query.into_filter()?;
    let visible = filter_artists(state.artists.iter(), &filter);

    let response = DirectoryResponse {
        total_results: visible.len(),
        summary: results_summary(visible.len()),
        active_filter_count: filter.active_filter_count(),
        artists: visible.into_iter().map(ArtistCard::new).collect(),
    };

    to_json(&response)
}

/// GET /api/artists/:id
pub async fn get_artist(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<serde_json::Value>> {
    let artist = state
        .artists
        .iter()
        .find(|artist| artist.id == id)
        .ok_or_else(|| ApiError::NotFound(format!("Artist {}", id)))?;

    to_json(&ArtistCard::new(artist))
}

// Responses borrow from the shared catalog, so they are rendered before the
// handler returns.
fn to_json<T: Serialize>(value: &T) -> ApiResult<Json<serde_json::Value>> {
    serde_json::to_value(value)
        .map(Json)
        .map_err(|e| ApiError::Internal(e.to_string()))
}
