//! Checkout-time order records.
//!
//! None of these types are persisted. An order lives only as long as the
//! visitor's session, between the product page and the payment screen.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::id::ProductId;
use super::product::{Product, Unit};

/// How the customer intends to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    /// Cash on delivery.
    #[default]
    #[serde(rename = "COD")]
    CashOnDelivery,
    /// UPI transfer via the generated QR code.
    #[serde(rename = "UPI")]
    Upi,
}

impl PaymentMethod {
    /// Returns the short method code (`COD`, `UPI`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CashOnDelivery => "COD",
            Self::Upi => "UPI",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single line being ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: ProductId,
    pub name: String,
    /// Chosen selling unit.
    pub weight: Unit,
    pub quantity: u32,
    pub total_price: Decimal,
}

/// Delivery and payment details entered at checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    pub full_name: String,
    pub mobile: String,
    pub address: String,
    pub pincode: String,
    pub payment_method: PaymentMethod,
}

/// A validated order handed from checkout to the payment screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub item: OrderItem,
    pub customer: CustomerDetails,
}

/// Error returned when a quote's total does not fit in a [`Decimal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("order total overflows for quantity {quantity}")]
pub struct QuoteOverflow {
    pub quantity: u32,
}

/// Price quote for a product, unit and quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub unit: Unit,
    pub quantity: u32,
    /// Zero when the product is not sold in the chosen unit.
    pub unit_price: Decimal,
    pub total_price: Decimal,
}

impl Quote {
    /// Smallest orderable quantity.
    pub const MIN_QUANTITY: u32 = 1;

    /// Quote a product. `unit` defaults to the product's preselected unit and
    /// `quantity` is clamped to at least one.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteOverflow`] if unit price times quantity is out of range.
    pub fn for_product(
        product: &Product,
        unit: Option<Unit>,
        quantity: u32,
    ) -> Result<Self, QuoteOverflow> {
        let unit = unit.unwrap_or_else(|| product.default_unit());
        let quantity = quantity.max(Self::MIN_QUANTITY);
        let unit_price = product.prices.get(unit).unwrap_or(Decimal::ZERO);
        let total_price = unit_price
            .checked_mul(Decimal::from(quantity))
            .ok_or(QuoteOverflow { quantity })?;

        Ok(Self {
            unit,
            quantity,
            unit_price,
            total_price,
        })
    }

    /// Turn the quote into the order line carried to checkout.
    #[must_use]
    pub fn into_item(self, product: &Product) -> OrderItem {
        OrderItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            weight: self.unit,
            quantity: self.quantity,
            total_price: self.total_price,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{Category, PaymentTier, PriceMap};

    fn product(prices: PriceMap) -> Product {
        Product {
            id: ProductId::new("blueberry"),
            name: "Blueberry Cake".to_string(),
            category: Category::Cake,
            sections: Vec::new(),
            description: String::new(),
            prices,
            images: Vec::new(),
            payment_tier: PaymentTier::Premium,
        }
    }

    #[test]
    fn test_quote_multiplies_unit_price() {
        let quote = Quote::for_product(&product(PriceMap::by_weight(400, 760)), Some(Unit::OneKg), 2).unwrap();
        assert_eq!(quote.unit_price, Decimal::from(760));
        assert_eq!(quote.total_price, Decimal::from(1520));
    }

    #[test]
    fn test_quote_defaults_unit_and_clamps_quantity() {
        let quote = Quote::for_product(&product(PriceMap::by_weight(400, 760)), None, 0).unwrap();
        assert_eq!(quote.unit, Unit::HalfKg);
        assert_eq!(quote.quantity, 1);
        assert_eq!(quote.total_price, Decimal::from(400));
    }

    #[test]
    fn test_quote_unpriced_unit_is_zero() {
        let quote = Quote::for_product(&product(PriceMap::per_piece(49)), Some(Unit::OneKg), 3).unwrap();
        assert_eq!(quote.total_price, Decimal::ZERO);
    }

    #[test]
    fn test_quote_overflow_is_an_error() {
        let p = product(PriceMap {
            piece: Some(Decimal::MAX),
            ..PriceMap::default()
        });
        assert_eq!(
            Quote::for_product(&p, Some(Unit::Piece), 2),
            Err(QuoteOverflow { quantity: 2 })
        );
        assert!(Quote::for_product(&p, Some(Unit::Piece), 1).is_ok());
    }

    #[test]
    fn test_into_item() {
        let p = product(PriceMap::by_weight(400, 760));
        let item = Quote::for_product(&p, Some(Unit::OneKg), 1)
            .unwrap()
            .into_item(&p);
        assert_eq!(item.product_id, "blueberry");
        assert_eq!(item.name, "Blueberry Cake");
        assert_eq!(item.total_price, Decimal::from(760));
    }

    #[test]
    fn test_payment_method_codes() {
        let json = serde_json::to_string(&PaymentMethod::Upi).expect("serialize");
        assert_eq!(json, "\"UPI\"");
        let cod: PaymentMethod = serde_json::from_str("\"COD\"").expect("deserialize");
        assert_eq!(cod, PaymentMethod::CashOnDelivery);
    }
}
