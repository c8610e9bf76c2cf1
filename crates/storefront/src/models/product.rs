//! Product display data returned by the storefront routes.

use cakes_n_bells_core::images::{CARD_PLACEHOLDER, DETAIL_PLACEHOLDER, primary_image};
use cakes_n_bells_core::types::{Category, PaymentTier, PriceMap, Product, ProductId, Unit};
use cakes_n_bells_core::{Catalog, Wishlist};
use rust_decimal::Decimal;
use serde::Serialize;

/// Product card shown in grids, search results and the wishlist.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub image: String,
    pub base_price: Decimal,
    pub base_unit_label: &'static str,
    pub payment_tier: PaymentTier,
    pub wishlisted: bool,
}

impl ProductCard {
    #[must_use]
    pub fn new(product: &Product, wishlisted: bool) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            category: product.category,
            image: primary_image(&product.images, CARD_PLACEHOLDER).to_owned(),
            base_price: product.prices.base_price(),
            base_unit_label: product.prices.base_unit_label(),
            payment_tier: product.payment_tier,
            wishlisted,
        }
    }

    /// Cards for a list of products, flagged against the wishlist.
    pub fn list<'a>(
        products: impl IntoIterator<Item = &'a Product>,
        wishlist: &Wishlist,
    ) -> Vec<Self> {
        products
            .into_iter()
            .map(|p| Self::new(p, wishlist.contains(p.id.as_str())))
            .collect()
    }
}

/// Full product page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub description: String,
    /// Never empty: a placeholder stands in for products without images.
    pub images: Vec<String>,
    pub prices: PriceMap,
    /// Selectable weights; empty for per-piece products.
    pub weights: Vec<Unit>,
    pub default_unit: Unit,
    pub sections: Vec<String>,
    pub payment_tier: PaymentTier,
    pub wishlisted: bool,
}

impl ProductDetail {
    #[must_use]
    pub fn new(product: &Product, wishlisted: bool) -> Self {
        let images = if product.images.is_empty() {
            vec![DETAIL_PLACEHOLDER.to_owned()]
        } else {
            product.images.clone()
        };

        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            category: product.category,
            description: product.description.clone(),
            images,
            prices: product.prices.clone(),
            weights: product.prices.weights(),
            default_unit: product.default_unit(),
            sections: product.sections.clone(),
            payment_tier: product.payment_tier,
            wishlisted,
        }
    }
}

/// A landing page collection with its cakes.
#[derive(Debug, Clone, Serialize)]
pub struct SectionView {
    pub name: String,
    pub products: Vec<ProductCard>,
}

impl SectionView {
    /// Collections with at least one cake, in collection order.
    #[must_use]
    pub fn non_empty(catalog: &Catalog, wishlist: &Wishlist) -> Vec<Self> {
        catalog
            .sections()
            .iter()
            .map(|name| Self {
                name: name.clone(),
                products: ProductCard::list(catalog.in_section(name), wishlist),
            })
            .filter(|section| !section.products.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use cakes_n_bells_core::defaults;

    use super::*;

    #[test]
    fn test_card_placeholder_for_imageless_product() {
        let mut product = defaults::products().remove(0);
        product.images.clear();
        let card = ProductCard::new(&product, false);
        assert_eq!(card.image, CARD_PLACEHOLDER);

        let detail = ProductDetail::new(&product, true);
        assert_eq!(detail.images, vec![DETAIL_PLACEHOLDER.to_string()]);
        assert!(detail.wishlisted);
    }

    #[test]
    fn test_card_pricing_labels() {
        let catalog = defaults::catalog();
        let donuts = ProductCard::new(catalog.find("donuts").expect("donuts"), false);
        assert_eq!(donuts.base_price, Decimal::from(49));
        assert_eq!(donuts.base_unit_label, "/ piece");

        let vanilla = ProductDetail::new(catalog.find("vanilla").expect("vanilla"), false);
        assert_eq!(vanilla.weights, vec![Unit::HalfKg, Unit::OneKg]);
        assert_eq!(vanilla.default_unit, Unit::HalfKg);
    }

    #[test]
    fn test_empty_sections_are_skipped() {
        let mut catalog = defaults::catalog();
        catalog.add_section("Wedding Cakes");
        let sections = SectionView::non_empty(&catalog, &Wishlist::default());
        let names: Vec<_> = sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Birthday Cakes", "Anniversary Cakes", "Celebration Cakes"]
        );
    }
}
