//! Cakes N Bells Core - Shared domain library.
//!
//! This crate holds everything about the shop that doesn't touch the network
//! or the disk:
//! - `storefront` - HTTP service for customers and the admin panel
//! - `cli` - Command-line tools for seeding data and previewing links
//!
//! # Architecture
//!
//! The core crate contains only types, pure functions and traits - no I/O,
//! no HTTP. Persistence and sessions live in the storefront.
//!
//! # Modules
//!
//! - [`types`] - Products, prices, units and checkout-time order records
//! - [`catalog`] - Product and collection lists, wishlist
//! - [`search`] - Product name relevance scoring
//! - [`checkout`] - Checkout form validation
//! - [`payment`] - UPI deep link and QR code URLs
//! - [`handoff`] - Prefilled WhatsApp order message
//! - [`auth`] - Admin password gate
//! - [`images`] - Image link normalisation and placeholders
//! - [`defaults`] - Built-in catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod catalog;
pub mod checkout;
pub mod defaults;
pub mod handoff;
pub mod images;
pub mod payment;
pub mod search;
pub mod types;

pub use auth::{AuthOutcome, Authenticator, DigestGate};
pub use catalog::{Catalog, Wishlist};
pub use checkout::{CheckoutField, FieldErrors};
pub use payment::{PayeeDirectory, PaymentLinkBuilder, PaymentLinks};
pub use search::SearchResults;
pub use types::*;
