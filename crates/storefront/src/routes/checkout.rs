//! Checkout route handlers.
//!
//! Checkout only accepts a visitor who picked an item on a product page; any
//! other visit goes back to the landing page.

use axum::{
    Json,
    response::{IntoResponse, Redirect, Response},
};
use cakes_n_bells_core::checkout::{sanitize_postal_code, validate};
use cakes_n_bells_core::types::{CustomerDetails, Order, OrderItem, PaymentMethod};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::models::session::{pending_item, set_current_order};

/// Checkout page content.
#[derive(Debug, Serialize)]
pub struct CheckoutView {
    pub item: OrderItem,
}

/// Delivery details as submitted by the checkout form.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckoutForm {
    pub full_name: String,
    pub mobile: String,
    pub address: String,
    pub pincode: String,
    pub payment_method: PaymentMethod,
}

impl CheckoutForm {
    /// Customer details with the pincode reduced to its digits.
    fn into_details(self) -> CustomerDetails {
        CustomerDetails {
            full_name: self.full_name,
            mobile: self.mobile,
            address: self.address,
            pincode: sanitize_postal_code(&self.pincode),
            payment_method: self.payment_method,
        }
    }
}

/// Display the checkout page for the pending item.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Response {
    match pending_item(&session).await {
        Some(item) => Json(CheckoutView { item }).into_response(),
        None => Redirect::to("/").into_response(),
    }
}

/// Validate the delivery details and continue to payment.
#[instrument(skip(session, form))]
pub async fn submit(session: Session, Json(form): Json<CheckoutForm>) -> Result<Response> {
    let Some(item) = pending_item(&session).await else {
        return Ok(Redirect::to("/").into_response());
    };

    let customer = form.into_details();
    if let Err(errors) = validate(&customer) {
        tracing::debug!(fields = errors.len(), "Checkout rejected");
        return Err(errors.into());
    }

    let order = Order { item, customer };
    set_current_order(&session, &order).await?;

    add_breadcrumb(
        "checkout",
        "Order validated",
        Some(&[
            ("product_id", order.item.product_id.as_str()),
            ("payment_method", order.customer.payment_method.as_str()),
        ]),
    );
    tracing::info!(
        product_id = %order.item.product_id,
        payment_method = %order.customer.payment_method,
        "Checkout complete"
    );

    Ok(Redirect::to("/payment").into_response())
}
