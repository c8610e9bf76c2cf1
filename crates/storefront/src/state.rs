//! Application state shared across handlers.

use std::sync::Arc;

use cakes_n_bells_core::auth::Authenticator;
use cakes_n_bells_core::payment::PaymentLinkBuilder;
use cakes_n_bells_core::types::ProductId;
use cakes_n_bells_core::{Catalog, Wishlist};
use tokio::sync::{RwLock, RwLockReadGuard};

use crate::config::StorefrontConfig;
use crate::db::{CatalogRepository, KeyValueStore, RepositoryError, WishlistRepository};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The catalog and wishlist are
/// loaded once here and every mutation writes the affected document back to
/// the store before it becomes visible. Writes run on tokio's blocking pool.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    store: Arc<dyn KeyValueStore>,
    catalog: RwLock<Catalog>,
    wishlist: RwLock<Wishlist>,
    authenticator: Box<dyn Authenticator>,
    payments: PaymentLinkBuilder,
}

impl AppState {
    /// Create a new application state, loading shop data from `store`.
    ///
    /// # Arguments
    ///
    /// * `config` - Storefront configuration
    /// * `store` - Backing document store
    #[must_use]
    pub fn new(config: StorefrontConfig, store: Arc<dyn KeyValueStore>) -> Self {
        let authenticator = Box::new(config.admin.authenticator());
        Self::with_authenticator(config, store, authenticator)
    }

    /// Create a new application state with a custom admin gate.
    #[must_use]
    pub fn with_authenticator(
        config: StorefrontConfig,
        store: Arc<dyn KeyValueStore>,
        authenticator: Box<dyn Authenticator>,
    ) -> Self {
        let catalog = CatalogRepository::new(store.as_ref()).load();
        let wishlist = WishlistRepository::new(store.as_ref()).load();
        let payments = config.payment.link_builder();

        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                catalog: RwLock::new(catalog),
                wishlist: RwLock::new(wishlist),
                authenticator,
                payments,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the backing document store.
    #[must_use]
    pub fn store(&self) -> &dyn KeyValueStore {
        self.inner.store.as_ref()
    }

    /// Get the admin password gate.
    #[must_use]
    pub fn authenticator(&self) -> &dyn Authenticator {
        self.inner.authenticator.as_ref()
    }

    /// Get the UPI link builder.
    #[must_use]
    pub fn payments(&self) -> &PaymentLinkBuilder {
        &self.inner.payments
    }

    /// Read access to the catalog.
    pub async fn catalog(&self) -> RwLockReadGuard<'_, Catalog> {
        self.inner.catalog.read().await
    }

    /// Read access to the wishlist.
    pub async fn wishlist(&self) -> RwLockReadGuard<'_, Wishlist> {
        self.inner.wishlist.read().await
    }

    /// Apply a change to the product list and persist it.
    ///
    /// The change is made on a copy; the shared catalog only changes once the
    /// write succeeds.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the product list cannot be written.
    pub async fn update_products<R>(
        &self,
        change: impl FnOnce(&mut Catalog) -> R,
    ) -> Result<R, RepositoryError> {
        let mut guard = self.inner.catalog.write().await;
        let mut next = guard.clone();
        let result = change(&mut next);
        *guard = self
            .persist(next, |store, catalog: &Catalog| {
                CatalogRepository::new(store).save_products(catalog.products())
            })
            .await?;
        Ok(result)
    }

    /// Apply a change to the collection list and persist it.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the collection list cannot be written.
    pub async fn update_sections<R>(
        &self,
        change: impl FnOnce(&mut Catalog) -> R,
    ) -> Result<R, RepositoryError> {
        let mut guard = self.inner.catalog.write().await;
        let mut next = guard.clone();
        let result = change(&mut next);
        *guard = self
            .persist(next, |store, catalog: &Catalog| {
                CatalogRepository::new(store).save_sections(catalog.sections())
            })
            .await?;
        Ok(result)
    }

    /// Toggle a product on the wishlist and persist it.
    ///
    /// Returns whether the product is now wishlisted, and the new count.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the wishlist cannot be written.
    pub async fn toggle_wishlist(&self, id: &ProductId) -> Result<(bool, usize), RepositoryError> {
        let mut guard = self.inner.wishlist.write().await;
        let mut next = guard.clone();
        let wishlisted = next.toggle(id);
        let next = self
            .persist(next, |store, wishlist: &Wishlist| {
                WishlistRepository::new(store).save(wishlist)
            })
            .await?;
        let count = next.len();
        *guard = next;
        Ok((wishlisted, count))
    }

    /// Write `value` to the store on the blocking pool and hand it back.
    ///
    /// Callers keep their write guard across the await, so the value only
    /// becomes visible after the write lands.
    async fn persist<T, F>(&self, value: T, write: F) -> Result<T, RepositoryError>
    where
        T: Send + 'static,
        F: FnOnce(&dyn KeyValueStore, &T) -> Result<(), RepositoryError> + Send + 'static,
    {
        let store = Arc::clone(&self.inner.store);
        tokio::task::spawn_blocking(move || {
            write(store.as_ref(), &value)?;
            Ok(value)
        })
        .await?
    }
}
