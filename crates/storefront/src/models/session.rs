//! Session-related types.
//!
//! The purchase flow is carried entirely in the visitor's session: the item
//! chosen on the product page, then the order once checkout validates. Both
//! vanish with the session; there is no server-side order record.

use cakes_n_bells_core::types::{Order, OrderItem};
use tower_sessions::Session;

/// Session keys for purchase and admin state.
pub mod keys {
    /// Key for the item picked on the product page, awaiting checkout.
    pub const PENDING_ITEM: &str = "pending_item";

    /// Key for the validated order awaiting payment.
    pub const ORDER: &str = "order";

    /// Key for the admin login flag.
    pub const ADMIN_AUTHENTICATED: &str = "admin_authenticated";
}

/// Get the pending checkout item from the session.
pub async fn pending_item(session: &Session) -> Option<OrderItem> {
    session
        .get::<OrderItem>(keys::PENDING_ITEM)
        .await
        .ok()
        .flatten()
}

/// Start a new purchase. Any order from a previous purchase is dropped.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_pending_item(
    session: &Session,
    item: &OrderItem,
) -> Result<(), tower_sessions::session::Error> {
    session.remove::<Order>(keys::ORDER).await?;
    session.insert(keys::PENDING_ITEM, item).await
}

/// Get the validated order from the session.
pub async fn current_order(session: &Session) -> Option<Order> {
    session.get::<Order>(keys::ORDER).await.ok().flatten()
}

/// Store the validated order.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_order(
    session: &Session,
    order: &Order,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::ORDER, order).await
}
