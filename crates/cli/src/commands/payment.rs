//! Payment link preview.
//!
//! Uses the payment settings from the environment, so the output matches
//! what the storefront would show for the same order.

use cakes_n_bells_core::types::PaymentTier;
use cakes_n_bells_storefront::config::StorefrontConfig;
use rust_decimal::Decimal;

/// Print the payee, UPI deep link and QR image URL for a tier and amount.
///
/// # Errors
///
/// Returns an error if the tier or amount cannot be parsed, or if the
/// configuration is invalid.
#[allow(clippy::print_stdout)]
pub fn preview(tier: &str, amount: &str) -> Result<(), Box<dyn std::error::Error>> {
    let tier: PaymentTier = tier.parse()?;
    let amount: Decimal = amount.parse()?;
    if amount <= Decimal::ZERO {
        return Err(format!("Amount must be positive: {amount}").into());
    }

    let config = StorefrontConfig::from_env()?;
    let links = config.payment.link_builder().build(tier, amount);

    println!("Tier:      {} ({})", links.tier, links.badge_color);
    println!("Payee:     {}", links.payee_id);
    println!("Deep link: {}", links.deep_link);
    println!("QR code:   {}", links.qr_url);
    Ok(())
}
