//! In-memory catalog and wishlist.
//!
//! Both are plain list structures. Persistence is the caller's concern: the
//! storefront loads them once at startup and writes each back wholesale after
//! every mutation.

use serde::{Deserialize, Serialize};

use crate::types::{Category, Product, ProductId};

/// Product list plus the collection (section) list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
    sections: Vec<String>,
}

impl Catalog {
    /// Create a catalog from its two lists.
    #[must_use]
    pub const fn new(products: Vec<Product>, sections: Vec<String>) -> Self {
        Self { products, sections }
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All collection names in display order.
    #[must_use]
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products in a category, in catalog order.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(move |p| p.category == category)
    }

    /// Cakes tagged with a collection, as listed under that collection's
    /// heading on the landing page.
    pub fn in_section<'a>(&'a self, section: &'a str) -> impl Iterator<Item = &'a Product> {
        self.by_category(Category::Cake)
            .filter(move |p| p.in_section(section))
    }

    /// Append a product. IDs are not checked for uniqueness.
    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Replace the product with the same ID.
    ///
    /// Returns false (and changes nothing) if no product has that ID.
    pub fn update_product(&mut self, product: Product) -> bool {
        match self.products.iter_mut().find(|p| p.id == product.id) {
            Some(slot) => {
                *slot = product;
                true
            }
            None => false,
        }
    }

    /// Remove every product with the given ID. Returns true if any was removed.
    pub fn delete_product(&mut self, id: &str) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        self.products.len() != before
    }

    /// Add a collection. The name is trimmed; blank or duplicate names are
    /// ignored. Returns true if the list changed.
    pub fn add_section(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.sections.iter().any(|s| s == name) {
            return false;
        }
        self.sections.push(name.to_owned());
        true
    }

    /// Remove a collection from the collection list.
    ///
    /// Products keep the tag; it simply stops being shown.
    pub fn delete_section(&mut self, name: &str) -> bool {
        let before = self.sections.len();
        self.sections.retain(|s| s != name);
        self.sections.len() != before
    }

    /// Consume the catalog and return its lists.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Product>, Vec<String>) {
        (self.products, self.sections)
    }
}

/// Set of wishlisted product IDs, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wishlist(Vec<ProductId>);

impl Wishlist {
    /// Create a wishlist from stored IDs.
    #[must_use]
    pub const fn new(ids: Vec<ProductId>) -> Self {
        Self(ids)
    }

    /// Flip membership of an ID. Returns true if the ID is now wishlisted.
    pub fn toggle(&mut self, id: &ProductId) -> bool {
        if self.contains(id.as_str()) {
            self.0.retain(|existing| existing != id);
            false
        } else {
            self.0.push(id.clone());
            true
        }
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|existing| existing == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn ids(&self) -> &[ProductId] {
        &self.0
    }

    /// Catalog products on the wishlist, in catalog order. IDs of deleted
    /// products are skipped.
    pub fn products<'a>(&'a self, catalog: &'a Catalog) -> impl Iterator<Item = &'a Product> {
        catalog
            .products()
            .iter()
            .filter(move |p| self.contains(p.id.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PaymentTier, PriceMap};

    fn product(id: &str, category: Category, sections: &[&str]) -> Product {
        Product {
            id: ProductId::new(id),
            name: id.to_string(),
            category,
            sections: sections.iter().map(|s| (*s).to_string()).collect(),
            description: String::new(),
            prices: PriceMap::per_piece(10),
            images: Vec::new(),
            payment_tier: PaymentTier::Standard,
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                product("vanilla", Category::Cake, &["Birthday Cakes"]),
                product("mango", Category::Cake, &["Birthday Cakes", "Celebration Cakes"]),
                product("donuts", Category::Confectionery, &["Birthday Cakes"]),
            ],
            vec!["Birthday Cakes".to_string(), "Celebration Cakes".to_string()],
        )
    }

    #[test]
    fn test_in_section_only_lists_cakes() {
        let catalog = catalog();
        let ids: Vec<_> = catalog
            .in_section("Birthday Cakes")
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["vanilla", "mango"]);
    }

    #[test]
    fn test_update_replaces_by_id() {
        let mut catalog = catalog();
        let mut updated = product("mango", Category::Cake, &[]);
        updated.name = "Alphonso Mango".to_string();

        assert!(catalog.update_product(updated));
        assert_eq!(catalog.find("mango").map(|p| p.name.as_str()), Some("Alphonso Mango"));
        assert_eq!(catalog.products().len(), 3);
    }

    #[test]
    fn test_update_missing_is_noop() {
        let mut catalog = catalog();
        assert!(!catalog.update_product(product("ghost", Category::Cake, &[])));
        assert!(catalog.find("ghost").is_none());
    }

    #[test]
    fn test_delete_product() {
        let mut catalog = catalog();
        assert!(catalog.delete_product("vanilla"));
        assert!(!catalog.delete_product("vanilla"));
        assert!(catalog.find("vanilla").is_none());
    }

    #[test]
    fn test_add_section_trims_and_dedupes() {
        let mut catalog = catalog();
        assert!(catalog.add_section("  Wedding Cakes "));
        assert!(!catalog.add_section("Wedding Cakes"));
        assert!(!catalog.add_section("   "));
        assert_eq!(catalog.sections().last().map(String::as_str), Some("Wedding Cakes"));
    }

    #[test]
    fn test_delete_section_leaves_product_tags() {
        let mut catalog = catalog();
        assert!(catalog.delete_section("Celebration Cakes"));
        assert!(!catalog.sections().iter().any(|s| s == "Celebration Cakes"));

        let mango = catalog.find("mango").expect("mango exists");
        assert!(mango.in_section("Celebration Cakes"));
    }

    #[test]
    fn test_wishlist_toggle_on_off_on() {
        let mut wishlist = Wishlist::default();
        let id = ProductId::new("vanilla");
        assert!(wishlist.toggle(&id));
        assert!(!wishlist.toggle(&id));
        assert!(wishlist.toggle(&id));
        assert!(wishlist.contains("vanilla"));
        assert_eq!(wishlist.len(), 1);
    }

    #[test]
    fn test_wishlist_toggle_off_on_off() {
        let id = ProductId::new("vanilla");
        let mut wishlist = Wishlist::new(vec![id.clone()]);
        assert!(!wishlist.toggle(&id));
        assert!(wishlist.toggle(&id));
        assert!(!wishlist.toggle(&id));
        assert!(!wishlist.contains("vanilla"));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_wishlist_skips_stale_ids() {
        let catalog = catalog();
        let wishlist = Wishlist::new(vec![ProductId::new("deleted"), ProductId::new("donuts")]);
        let ids: Vec<_> = wishlist.products(&catalog).map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["donuts"]);
        assert_eq!(wishlist.len(), 2);
    }
}
