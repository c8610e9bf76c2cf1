//! Wishlist route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use cakes_n_bells_core::types::ProductId;
use serde::Serialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::models::ProductCard;
use crate::state::AppState;

/// Wishlist page content.
#[derive(Debug, Serialize)]
pub struct WishlistView {
    /// Badge count: every wishlisted ID, including products since deleted.
    pub count: usize,
    /// Wishlisted products still in the catalog.
    pub products: Vec<ProductCard>,
}

/// Result of a wishlist toggle.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleResponse {
    pub product_id: ProductId,
    pub wishlisted: bool,
    pub count: usize,
}

/// Display the wishlist.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<WishlistView> {
    let catalog = state.catalog().await;
    let wishlist = state.wishlist().await;

    Json(WishlistView {
        count: wishlist.len(),
        products: ProductCard::list(wishlist.products(&catalog), &wishlist),
    })
}

/// Add a product to the wishlist, or remove it if already present.
///
/// Unknown products can be removed but not added.
#[instrument(skip(state))]
pub async fn toggle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ToggleResponse>> {
    let known = state.catalog().await.find(&id).is_some();
    if !known && !state.wishlist().await.contains(&id) {
        return Err(AppError::NotFound("Product not found".to_string()));
    }

    let product_id = ProductId::new(id);
    let (wishlisted, count) = state.toggle_wishlist(&product_id).await?;
    tracing::debug!(product_id = %product_id, wishlisted, count, "Wishlist toggled");

    Ok(Json(ToggleResponse {
        product_id,
        wishlisted,
        count,
    }))
}
