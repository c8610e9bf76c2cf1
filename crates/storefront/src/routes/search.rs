//! Search route handler.

use axum::{
    Json,
    extract::{Query, State},
};
use cakes_n_bells_core::search::search as search_catalog;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::models::ProductCard;
use crate::state::AppState;

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Search dropdown content.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchView {
    pub query: String,
    pub results: Vec<ProductCard>,
    /// Set when nothing matched and `results` holds popular suggestions.
    pub is_fallback: bool,
}

/// Search products by name.
#[instrument(skip(state))]
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<SearchView> {
    let catalog = state.catalog().await;
    let wishlist = state.wishlist().await;
    let found = search_catalog(&catalog, &query.q);

    tracing::debug!(
        results = found.products.len(),
        is_fallback = found.is_fallback,
        "Search complete"
    );

    Json(SearchView {
        results: ProductCard::list(found.products.iter().copied(), &wishlist),
        is_fallback: found.is_fallback,
        query: query.q,
    })
}
