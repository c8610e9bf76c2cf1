//! Response and session models for the storefront.

pub mod product;
pub mod session;

pub use product::{ProductCard, ProductDetail, SectionView};
pub use session::keys as session_keys;
