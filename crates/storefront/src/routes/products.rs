//! Product route handlers.

use axum::{
    Json,
    extract::{Path, State},
    response::Redirect,
};
use cakes_n_bells_core::types::{Quote, Unit};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::models::ProductDetail;
use crate::models::session::set_pending_item;
use crate::state::AppState;

/// Unit and quantity chosen on the product page.
#[derive(Debug, Default, Deserialize)]
pub struct BuyRequest {
    /// Defaults to the product's preselected unit.
    pub unit: Option<Unit>,
    /// Defaults to one; zero is raised to one.
    pub quantity: Option<u32>,
}

/// Display the product detail page.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductDetail>> {
    let catalog = state.catalog().await;
    let wishlist = state.wishlist().await;

    let product = catalog
        .find(&id)
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(ProductDetail::new(
        product,
        wishlist.contains(product.id.as_str()),
    )))
}

/// Start a purchase: price the chosen unit and quantity and go to checkout.
#[instrument(skip(state, session))]
pub async fn buy(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Json(request): Json<BuyRequest>,
) -> Result<Redirect> {
    let item = {
        let catalog = state.catalog().await;
        let product = catalog
            .find(&id)
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;
        Quote::for_product(product, request.unit, request.quantity.unwrap_or(1))
            .map_err(|_| AppError::BadRequest("Order total is too large".to_string()))?
            .into_item(product)
    };

    set_pending_item(&session, &item).await?;

    add_breadcrumb(
        "purchase",
        "Item chosen",
        Some(&[("product_id", id.as_str()), ("unit", item.weight.as_str())]),
    );
    tracing::info!(
        product_id = %id,
        unit = %item.weight,
        quantity = item.quantity,
        total = %item.total_price,
        "Purchase started"
    );

    Ok(Redirect::to("/checkout"))
}
