//! Landing page route handler.

use axum::{Json, extract::State};
use cakes_n_bells_core::types::Category;
use serde::Serialize;
use tracing::instrument;

use crate::models::{ProductCard, SectionView};
use crate::state::AppState;

/// Landing page content.
#[derive(Debug, Serialize)]
pub struct HomeView {
    /// Collections that currently have products, in admin order.
    pub sections: Vec<SectionView>,
    /// The confectionery shelf.
    pub confectionery: Vec<ProductCard>,
}

/// Display the landing page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Json<HomeView> {
    let catalog = state.catalog().await;
    let wishlist = state.wishlist().await;

    Json(HomeView {
        sections: SectionView::non_empty(&catalog, &wishlist),
        confectionery: ProductCard::list(catalog.by_category(Category::Confectionery), &wishlist),
    })
}
