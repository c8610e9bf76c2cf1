//! Category listing route handler.

use axum::{
    Json,
    extract::{Path, State},
};
use cakes_n_bells_core::types::Category;
use serde::Serialize;
use tracing::instrument;

use crate::models::ProductCard;
use crate::state::AppState;

/// Products in one category.
#[derive(Debug, Serialize)]
pub struct CategoryView {
    pub category: String,
    pub products: Vec<ProductCard>,
}

/// List the products of a category. Unknown categories list nothing.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Json<CategoryView> {
    let catalog = state.catalog().await;
    let wishlist = state.wishlist().await;

    let products = category
        .parse::<Category>()
        .map(|c| ProductCard::list(catalog.by_category(c), &wishlist))
        .unwrap_or_default();

    Json(CategoryView { category, products })
}
