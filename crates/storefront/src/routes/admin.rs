//! Admin route handlers.
//!
//! Catalog management behind the shared admin password. Every change is
//! written to the store before the live catalog reflects it.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use cakes_n_bells_core::images::prepare_for_save;
use cakes_n_bells_core::types::{Category, PaymentTier, PriceMap, Product, ProductId};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::middleware::{RequireAdmin, clear_admin_authenticated, set_admin_authenticated};
use crate::state::AppState;

// =============================================================================
// Authentication
// =============================================================================

/// Admin login form.
#[derive(Deserialize)]
pub struct LoginForm {
    pub password: String,
}

/// Login state reported back to the client.
#[derive(Debug, Serialize)]
pub struct LoginStatus {
    pub authenticated: bool,
}

/// Log in with the admin password.
#[instrument(skip(state, session, form))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<LoginForm>,
) -> Result<Json<LoginStatus>> {
    if !state.authenticator().authenticate(&form.password).is_granted() {
        tracing::warn!("Admin login rejected");
        return Err(AppError::Unauthorized("Incorrect password".to_string()));
    }

    set_admin_authenticated(&session).await?;
    add_breadcrumb("admin", "Logged in", None);
    tracing::info!("Admin logged in");

    Ok(Json(LoginStatus {
        authenticated: true,
    }))
}

/// Log out of the admin panel.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<StatusCode> {
    clear_admin_authenticated(&session).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Products
// =============================================================================

/// Product fields as edited in the admin panel.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub sections: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub prices: PriceMap,
    /// Raw links as pasted; normalized before saving.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub payment_tier: PaymentTier,
}

impl ProductInput {
    fn into_product(self, id: ProductId) -> Result<Product> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::BadRequest("Product name is required".to_string()));
        }
        let non_positive = self
            .prices
            .units()
            .into_iter()
            .filter_map(|unit| self.prices.get(unit))
            .any(|price| price.is_zero() || price.is_sign_negative());
        if non_positive {
            return Err(AppError::BadRequest("Prices must be positive".to_string()));
        }

        Ok(Product {
            id,
            name: name.to_owned(),
            category: self.category,
            sections: self.sections,
            description: self.description,
            prices: self.prices,
            images: prepare_for_save(&self.images),
            payment_tier: self.payment_tier,
        })
    }
}

/// List every product.
#[instrument(skip(state))]
pub async fn list_products(_admin: RequireAdmin, State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog().await.products().to_vec())
}

/// Create a product with a generated ID.
#[instrument(skip(state, input))]
pub async fn create_product(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<ProductInput>,
) -> Result<impl IntoResponse> {
    let product = input.into_product(ProductId::generate())?;

    let created = product.clone();
    state
        .update_products(move |catalog| catalog.add_product(product))
        .await?;

    tracing::info!(product_id = %created.id, name = %created.name, "Product created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace an existing product.
#[instrument(skip(state, input))]
pub async fn update_product(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<ProductInput>,
) -> Result<Json<Product>> {
    let product = input.into_product(ProductId::new(id))?;

    let updated = product.clone();
    let found = state
        .update_products(move |catalog| catalog.update_product(product))
        .await?;
    if !found {
        return Err(AppError::NotFound("Product not found".to_string()));
    }

    tracing::info!(product_id = %updated.id, "Product updated");
    Ok(Json(updated))
}

/// Delete a product.
#[instrument(skip(state))]
pub async fn delete_product(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let removed = state
        .update_products(|catalog| catalog.delete_product(&id))
        .await?;
    if !removed {
        return Err(AppError::NotFound("Product not found".to_string()));
    }

    tracing::info!(product_id = %id, "Product deleted");
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Collections
// =============================================================================

/// New collection form.
#[derive(Debug, Deserialize)]
pub struct SectionForm {
    pub name: String,
}

/// List the collections in display order.
#[instrument(skip(state))]
pub async fn list_sections(_admin: RequireAdmin, State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog().await.sections().to_vec())
}

/// Add a collection. Adding an existing name changes nothing.
#[instrument(skip(state))]
pub async fn create_section(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(form): Json<SectionForm>,
) -> Result<impl IntoResponse> {
    if form.name.trim().is_empty() {
        return Err(AppError::BadRequest("Collection name is required".to_string()));
    }

    let (added, sections) = state
        .update_sections(|catalog| (catalog.add_section(&form.name), catalog.sections().to_vec()))
        .await?;

    let status = if added {
        tracing::info!(section = %form.name.trim(), "Collection added");
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(sections)))
}

/// Remove a collection. Products keep the tag.
#[instrument(skip(state))]
pub async fn delete_section(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode> {
    let removed = state
        .update_sections(|catalog| catalog.delete_section(&name))
        .await?;
    if !removed {
        return Err(AppError::NotFound("Collection not found".to_string()));
    }

    tracing::info!(section = %name, "Collection removed");
    Ok(StatusCode::NO_CONTENT)
}
