//! Payment route handlers.
//!
//! The shop never takes payment itself. The payment screen shows a UPI QR
//! code (or cash-on-delivery instructions) and confirmation hands the order
//! over to the business on WhatsApp.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use cakes_n_bells_core::handoff::handoff_link;
use cakes_n_bells_core::payment::tier_for;
use cakes_n_bells_core::types::{
    CustomerDetails, Order, OrderItem, PaymentMethod, PaymentTier,
};
use rust_decimal::Decimal;
use serde::Serialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::add_breadcrumb;
use crate::models::session::current_order;
use crate::state::AppState;

/// UPI payment instructions.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpiView {
    pub payee_id: String,
    pub deep_link: String,
    pub qr_url: String,
    /// Number to call if the transfer fails.
    pub contact_number: String,
}

/// Payment page content.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentView {
    pub item: OrderItem,
    pub customer: CustomerDetails,
    pub tier: PaymentTier,
    pub badge_color: &'static str,
    pub amount: Decimal,
    pub payment_method: PaymentMethod,
    /// Present only for UPI orders.
    pub upi: Option<UpiView>,
}

/// Display the payment page for the validated order.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Response {
    let Some(Order { item, customer }) = current_order(&session).await else {
        return Redirect::to("/").into_response();
    };

    let tier = tier_for(&*state.catalog().await, &item.product_id);
    let amount = item.total_price;
    let payment_method = customer.payment_method;

    let upi = (payment_method == PaymentMethod::Upi).then(|| {
        let links = state.payments().build(tier, amount);
        UpiView {
            payee_id: links.payee_id,
            deep_link: links.deep_link,
            qr_url: links.qr_url,
            contact_number: state.config().payment.contact_number.clone(),
        }
    });

    Json(PaymentView {
        item,
        customer,
        tier,
        badge_color: tier.badge_color(),
        amount,
        payment_method,
        upi,
    })
    .into_response()
}

/// Confirm the order by opening a WhatsApp chat with the order message.
#[instrument(skip(state, session))]
pub async fn confirm(State(state): State<AppState>, session: Session) -> Redirect {
    let Some(order) = current_order(&session).await else {
        return Redirect::to("/");
    };

    let tier = tier_for(&*state.catalog().await, &order.item.product_id);
    let link = handoff_link(&state.config().whatsapp_number, &order, tier);

    add_breadcrumb(
        "payment",
        "Order handed off",
        Some(&[("product_id", order.item.product_id.as_str())]),
    );
    tracing::info!(
        product_id = %order.item.product_id,
        payment_method = %order.customer.payment_method,
        tier = %tier,
        "Order handed off to WhatsApp"
    );

    Redirect::to(&link)
}
