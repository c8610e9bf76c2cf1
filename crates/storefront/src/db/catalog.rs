//! Catalog repository: products and collections.

use cakes_n_bells_core::types::Product;
use cakes_n_bells_core::{Catalog, defaults};
use tracing::instrument;

use super::{KeyValueStore, RepositoryError, load_or_default, save};

/// Key for the product list.
pub const PRODUCTS_KEY: &str = "shop_products";
/// Key for the collection list.
pub const SECTIONS_KEY: &str = "shop_sections";

/// Repository for catalog documents.
pub struct CatalogRepository<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> CatalogRepository<'a> {
    /// Create a new catalog repository.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Load the catalog. Each list falls back to its defaults independently.
    #[instrument(skip(self))]
    pub fn load(&self) -> Catalog {
        let products: Vec<Product> = load_or_default(self.store, PRODUCTS_KEY, defaults::products);
        let sections: Vec<String> = load_or_default(self.store, SECTIONS_KEY, defaults::sections);
        tracing::info!(
            products = products.len(),
            sections = sections.len(),
            "catalog loaded"
        );
        Catalog::new(products, sections)
    }

    /// Write the product list.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the document cannot be written.
    #[instrument(skip_all, fields(count = products.len()))]
    pub fn save_products(&self, products: &[Product]) -> Result<(), RepositoryError> {
        save(self.store, PRODUCTS_KEY, products)
    }

    /// Write the collection list.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the document cannot be written.
    #[instrument(skip_all, fields(count = sections.len()))]
    pub fn save_sections(&self, sections: &[String]) -> Result<(), RepositoryError> {
        save(self.store, SECTIONS_KEY, sections)
    }

    /// Write both lists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if either document cannot be written.
    pub fn save(&self, catalog: &Catalog) -> Result<(), RepositoryError> {
        self.save_products(catalog.products())?;
        self.save_sections(catalog.sections())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use cakes_n_bells_core::types::{Category, PaymentTier, PriceMap, ProductId};

    use super::*;
    use crate::db::MemoryStore;

    #[test]
    fn test_empty_store_loads_defaults() {
        let store = MemoryStore::new();
        let catalog = CatalogRepository::new(&store).load();
        assert_eq!(catalog, defaults::catalog());
    }

    #[test]
    fn test_saved_catalog_reloads() {
        let store = MemoryStore::new();
        let repo = CatalogRepository::new(&store);

        let mut catalog = defaults::catalog();
        catalog.add_product(Product {
            id: ProductId::new("k3x9a0b2c"),
            name: "Red Velvet".to_string(),
            category: Category::Cake,
            sections: vec!["Wedding Cakes".to_string()],
            description: String::new(),
            prices: PriceMap::by_weight(450, 850),
            images: vec!["https://placehold.co/600x600?text=No+Image".to_string()],
            payment_tier: PaymentTier::Luxury,
        });
        catalog.delete_section("Anniversary Cakes");
        repo.save(&catalog).unwrap();

        assert_eq!(repo.load(), catalog);
    }

    #[test]
    fn test_lists_fall_back_independently() {
        let store = MemoryStore::new();
        store.put(SECTIONS_KEY, r#"["Only"]"#).unwrap();
        store.put(PRODUCTS_KEY, "garbage").unwrap();

        let catalog = CatalogRepository::new(&store).load();
        assert_eq!(catalog.sections(), ["Only".to_string()]);
        assert_eq!(catalog.products().len(), defaults::products().len());
    }

    #[test]
    fn test_reads_numeric_prices() {
        let store = MemoryStore::new();
        store
            .put(
                PRODUCTS_KEY,
                r#"[{"id":"vanilla","name":"Vanilla Cake","category":"Cake",
                    "sections":[],"description":"","prices":{"0.5kg":380,"1kg":700},
                    "images":[],"paymentTier":"standard"}]"#,
            )
            .unwrap();

        let catalog = CatalogRepository::new(&store).load();
        let vanilla = catalog.find("vanilla").unwrap();
        assert_eq!(vanilla.prices.base_price(), 380.into());
    }
}
