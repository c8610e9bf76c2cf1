//! Core types for the Cakes N Bells storefront.
//!
//! This module provides type-safe wrappers for the catalog and checkout
//! domain.

pub mod id;
pub mod order;
pub mod product;

pub use id::*;
pub use order::{CustomerDetails, Order, OrderItem, PaymentMethod, Quote, QuoteOverflow};
pub use product::{Category, PaymentTier, PriceMap, Product, Unit, UnitParseError};
