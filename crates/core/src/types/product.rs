//! Catalog product model.
//!
//! The serialized shape (camelCase fields, unit keys such as `"0.5kg"`) is the
//! persisted catalog format, so existing catalog JSON loads unchanged.

use core::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    /// Weight-priced baked goods.
    #[default]
    Cake,
    /// Per-piece confections and party boxes.
    Confectionery,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 2] = [Self::Cake, Self::Confectionery];

    /// Returns the category name as used in URLs and persisted data.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cake => "Cake",
            Self::Confectionery => "Confectionery",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Cake" => Ok(Self::Cake),
            "Confectionery" => Ok(Self::Confectionery),
            _ => Err(format!("invalid category: {s}")),
        }
    }
}

/// Payment tier of a product.
///
/// Selects the payee identifier embedded in the payment link and the colour
/// of the amount badge. Otherwise cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentTier {
    #[default]
    Standard,
    Premium,
    Luxury,
}

impl PaymentTier {
    /// Returns the lowercase tier label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Premium => "premium",
            Self::Luxury => "luxury",
        }
    }

    /// Badge colour shown next to the payable amount.
    #[must_use]
    pub const fn badge_color(self) -> &'static str {
        match self {
            Self::Standard => "blue",
            Self::Premium => "pink",
            Self::Luxury => "purple",
        }
    }
}

impl fmt::Display for PaymentTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::Standard),
            "premium" => Ok(Self::Premium),
            "luxury" => Ok(Self::Luxury),
            _ => Err(format!("invalid payment tier: {s}")),
        }
    }
}

/// Error returned when parsing an unknown [`Unit`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown unit: {0}")]
pub struct UnitParseError(pub String);

/// Selling unit a price is quoted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "0.5kg")]
    HalfKg,
    #[serde(rename = "1kg")]
    OneKg,
    #[serde(rename = "piece")]
    Piece,
}

impl Unit {
    /// Returns the unit label (`0.5kg`, `1kg`, `piece`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HalfKg => "0.5kg",
            Self::OneKg => "1kg",
            Self::Piece => "piece",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0.5kg" => Ok(Self::HalfKg),
            "1kg" => Ok(Self::OneKg),
            "piece" => Ok(Self::Piece),
            _ => Err(UnitParseError(s.to_owned())),
        }
    }
}

/// Sparse price table keyed by selling unit.
///
/// Nothing enforces that at least one entry is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceMap {
    #[serde(rename = "0.5kg", default, skip_serializing_if = "Option::is_none")]
    pub half_kg: Option<Decimal>,
    #[serde(rename = "1kg", default, skip_serializing_if = "Option::is_none")]
    pub one_kg: Option<Decimal>,
    #[serde(rename = "piece", default, skip_serializing_if = "Option::is_none")]
    pub piece: Option<Decimal>,
}

impl PriceMap {
    /// Weight-priced table (half kilogram and one kilogram).
    #[must_use]
    pub fn by_weight(half_kg: u32, one_kg: u32) -> Self {
        Self {
            half_kg: Some(Decimal::from(half_kg)),
            one_kg: Some(Decimal::from(one_kg)),
            piece: None,
        }
    }

    /// Per-piece table.
    #[must_use]
    pub fn per_piece(piece: u32) -> Self {
        Self {
            piece: Some(Decimal::from(piece)),
            ..Self::default()
        }
    }

    /// Price for a unit, if the product is sold in that unit.
    #[must_use]
    pub const fn get(&self, unit: Unit) -> Option<Decimal> {
        match unit {
            Unit::HalfKg => self.half_kg,
            Unit::OneKg => self.one_kg,
            Unit::Piece => self.piece,
        }
    }

    /// Returns true if no unit is priced.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.half_kg.is_none() && self.one_kg.is_none() && self.piece.is_none()
    }

    /// Priced units in table order.
    #[must_use]
    pub fn units(&self) -> Vec<Unit> {
        [Unit::HalfKg, Unit::OneKg, Unit::Piece]
            .into_iter()
            .filter(|unit| self.get(*unit).is_some())
            .collect()
    }

    /// Selectable weights: every priced unit except `piece`.
    #[must_use]
    pub fn weights(&self) -> Vec<Unit> {
        self.units()
            .into_iter()
            .filter(|unit| *unit != Unit::Piece)
            .collect()
    }

    /// Headline price for product cards: half kilogram, else piece, else zero.
    #[must_use]
    pub fn base_price(&self) -> Decimal {
        self.half_kg.or(self.piece).unwrap_or(Decimal::ZERO)
    }

    /// Unit label shown next to [`Self::base_price`].
    #[must_use]
    pub const fn base_unit_label(&self) -> &'static str {
        if self.piece.is_some() {
            "/ piece"
        } else {
            "/ 0.5kg"
        }
    }
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    /// Collection tags. May reference collections that no longer exist.
    #[serde(default)]
    pub sections: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub prices: PriceMap,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub payment_tier: PaymentTier,
}

impl Product {
    /// Unit preselected on the product page: half kilogram when priced,
    /// otherwise piece.
    #[must_use]
    pub const fn default_unit(&self) -> Unit {
        if self.prices.half_kg.is_some() {
            Unit::HalfKg
        } else {
            Unit::Piece
        }
    }

    /// Returns true if the product carries the given collection tag.
    #[must_use]
    pub fn in_section(&self, section: &str) -> bool {
        self.sections.iter().any(|s| s == section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cake() -> Product {
        Product {
            id: ProductId::new("vanilla"),
            name: "Vanilla Cake".to_string(),
            category: Category::Cake,
            sections: vec!["Birthday Cakes".to_string()],
            description: String::new(),
            prices: PriceMap::by_weight(380, 700),
            images: Vec::new(),
            payment_tier: PaymentTier::Standard,
        }
    }

    #[test]
    fn test_unit_round_trips_through_str() {
        for unit in [Unit::HalfKg, Unit::OneKg, Unit::Piece] {
            assert_eq!(unit.as_str().parse::<Unit>(), Ok(unit));
        }
        assert!("2kg".parse::<Unit>().is_err());
    }

    #[test]
    fn test_price_map_uses_unit_keys() {
        let json = serde_json::to_value(PriceMap::by_weight(380, 700)).expect("serialize");
        assert!(json.get("0.5kg").is_some());
        assert!(json.get("1kg").is_some());
        assert!(json.get("piece").is_none());
    }

    #[test]
    fn test_price_map_accepts_numbers() {
        let prices: PriceMap = serde_json::from_str(r#"{"piece": 39}"#).expect("deserialize");
        assert_eq!(prices.piece, Some(Decimal::from(39)));
        assert_eq!(prices.half_kg, None);
    }

    #[test]
    fn test_weights_exclude_piece() {
        let mut prices = PriceMap::by_weight(380, 700);
        prices.piece = Some(Decimal::from(50));
        assert_eq!(prices.weights(), vec![Unit::HalfKg, Unit::OneKg]);
        assert!(PriceMap::per_piece(49).weights().is_empty());
    }

    #[test]
    fn test_base_price() {
        assert_eq!(PriceMap::by_weight(380, 700).base_price(), Decimal::from(380));
        assert_eq!(PriceMap::per_piece(49).base_price(), Decimal::from(49));
        assert_eq!(PriceMap::default().base_price(), Decimal::ZERO);
        assert_eq!(PriceMap::per_piece(49).base_unit_label(), "/ piece");
        assert_eq!(PriceMap::by_weight(1, 2).base_unit_label(), "/ 0.5kg");
    }

    #[test]
    fn test_default_unit() {
        assert_eq!(cake().default_unit(), Unit::HalfKg);

        let mut only_kilo = cake();
        only_kilo.prices.half_kg = None;
        assert_eq!(only_kilo.default_unit(), Unit::Piece);
    }

    #[test]
    fn test_product_json_shape() {
        let json = serde_json::to_value(cake()).expect("serialize");
        assert_eq!(json["paymentTier"], "standard");
        assert_eq!(json["category"], "Cake");
        assert_eq!(json["sections"][0], "Birthday Cakes");
    }

    #[test]
    fn test_product_missing_optional_fields() {
        let product: Product =
            serde_json::from_str(r#"{"id": "x", "name": "X", "category": "Confectionery"}"#)
                .expect("deserialize");
        assert!(product.sections.is_empty());
        assert!(product.prices.is_empty());
        assert_eq!(product.payment_tier, PaymentTier::Standard);
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("Cake".parse::<Category>(), Ok(Category::Cake));
        assert!("cake".parse::<Category>().is_err());
    }
}
