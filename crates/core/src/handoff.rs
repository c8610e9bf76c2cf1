//! Order handoff to the shop's WhatsApp chat.
//!
//! There is no backend order record: confirming an order opens a chat with
//! the shop, prefilled with everything the shop needs to fulfil it.

use crate::types::{Order, PaymentMethod, PaymentTier};

/// Business number orders are sent to.
pub const DEFAULT_WHATSAPP_NUMBER: &str = "+919438394676";

/// Prefilled chat message for an order.
#[must_use]
pub fn order_message(order: &Order, tier: PaymentTier) -> String {
    let (status, closing) = match order.customer.payment_method {
        PaymentMethod::Upi => (
            "*UPI PAYMENT DONE. SCREENSHOT ATTACHED.*",
            "UPI payment done. Screenshot attached.",
        ),
        PaymentMethod::CashOnDelivery => ("*COD DELIVERY*", "Cash on Delivery order"),
    };
    let customer = &order.customer;
    let item = &order.item;

    format!(
        "{status}\n\n\
         *Customer Details:*\n\
         Name: {name}\n\
         Mobile: {mobile}\n\
         Address: {address}\n\
         Pincode: {pincode}\n\n\
         *Order Summary:*\n\
         Product: {product}\n\
         Spec: {unit}\n\
         Quantity: {quantity}\n\
         Total Amount: \u{20b9}{total}\n\
         Tier: {tier}\n\n\
         {closing}",
        name = customer.full_name,
        mobile = customer.mobile,
        address = customer.address,
        pincode = customer.pincode,
        product = item.name,
        unit = item.weight,
        quantity = item.quantity,
        total = item.total_price.normalize(),
        tier = tier.as_str().to_uppercase(),
    )
}

/// `wa.me` link for a business number and message.
///
/// Everything but digits is stripped from the number.
#[must_use]
pub fn whatsapp_link(business_number: &str, message: &str) -> String {
    let digits: String = business_number
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    format!("https://wa.me/{digits}?text={}", urlencoding::encode(message))
}

/// Message and link for an order in one step.
#[must_use]
pub fn handoff_link(business_number: &str, order: &Order, tier: PaymentTier) -> String {
    whatsapp_link(business_number, &order_message(order, tier))
}
