//! UPI payment link and QR code URL construction.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::catalog::Catalog;
use crate::types::{PaymentTier, ProductId};

/// Payee identifier used for every tier unless configured otherwise.
pub const DEFAULT_PAYEE_ID: &str = "9322820147-2@axl";
/// Merchant name embedded in the deep link.
pub const DEFAULT_MERCHANT_NAME: &str = "cakes n bells";
/// Number shown next to the QR code for manual transfers.
pub const DEFAULT_CONTACT_NUMBER: &str = "9322820147";
pub const DEFAULT_QR_SIZE: u32 = 300;
pub const DEFAULT_QR_COLOR: &str = "da82b8";

const QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Payee identifier per payment tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayeeDirectory {
    pub standard: String,
    pub premium: String,
    pub luxury: String,
}

impl PayeeDirectory {
    /// Payee identifier for a tier.
    #[must_use]
    pub fn payee(&self, tier: PaymentTier) -> &str {
        match tier {
            PaymentTier::Standard => &self.standard,
            PaymentTier::Premium => &self.premium,
            PaymentTier::Luxury => &self.luxury,
        }
    }
}

impl Default for PayeeDirectory {
    fn default() -> Self {
        Self {
            standard: DEFAULT_PAYEE_ID.to_owned(),
            premium: DEFAULT_PAYEE_ID.to_owned(),
            luxury: DEFAULT_PAYEE_ID.to_owned(),
        }
    }
}

/// Everything the payment screen needs for a UPI order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentLinks {
    pub tier: PaymentTier,
    pub badge_color: &'static str,
    pub amount: Decimal,
    pub payee_id: String,
    pub deep_link: String,
    pub qr_url: String,
}

/// Builds UPI deep links and QR image URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentLinkBuilder {
    payees: PayeeDirectory,
    merchant_name: String,
    qr_size: u32,
    qr_color: String,
}

impl PaymentLinkBuilder {
    #[must_use]
    pub fn new(
        payees: PayeeDirectory,
        merchant_name: impl Into<String>,
        qr_size: u32,
        qr_color: impl Into<String>,
    ) -> Self {
        Self {
            payees,
            merchant_name: merchant_name.into(),
            qr_size,
            qr_color: qr_color.into(),
        }
    }

    #[must_use]
    pub const fn payees(&self) -> &PayeeDirectory {
        &self.payees
    }

    /// `upi://pay` link for an amount payable to the tier's payee.
    ///
    /// The merchant name goes in as-is; only the QR URL percent-encodes.
    #[must_use]
    pub fn deep_link(&self, tier: PaymentTier, amount: Decimal) -> String {
        format!(
            "upi://pay?pa={}&pn={}&cu=INR&am={}",
            self.payees.payee(tier),
            self.merchant_name,
            amount.normalize()
        )
    }

    /// QR image URL encoding the given deep link.
    #[must_use]
    pub fn qr_url(&self, deep_link: &str) -> String {
        format!(
            "{QR_ENDPOINT}?size={size}x{size}&data={data}&color={color}",
            size = self.qr_size,
            data = urlencoding::encode(deep_link),
            color = self.qr_color
        )
    }

    /// Build the full set of payment links for a tier and amount.
    #[must_use]
    pub fn build(&self, tier: PaymentTier, amount: Decimal) -> PaymentLinks {
        let deep_link = self.deep_link(tier, amount);
        let qr_url = self.qr_url(&deep_link);
        PaymentLinks {
            tier,
            badge_color: tier.badge_color(),
            amount,
            payee_id: self.payees.payee(tier).to_owned(),
            deep_link,
            qr_url,
        }
    }
}

impl Default for PaymentLinkBuilder {
    fn default() -> Self {
        Self::new(
            PayeeDirectory::default(),
            DEFAULT_MERCHANT_NAME,
            DEFAULT_QR_SIZE,
            DEFAULT_QR_COLOR,
        )
    }
}

/// Tier of the ordered product; standard when it has since been deleted.
#[must_use]
pub fn tier_for(catalog: &Catalog, product_id: &ProductId) -> PaymentTier {
    catalog
        .find(product_id.as_str())
        .map_or(PaymentTier::Standard, |p| p.payment_tier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults;

    #[test]
    fn test_deep_link_shape() {
        let builder = PaymentLinkBuilder::default();
        assert_eq!(
            builder.deep_link(PaymentTier::Premium, Decimal::from(760)),
            "upi://pay?pa=9322820147-2@axl&pn=cakes n bells&cu=INR&am=760"
        );
    }

    #[test]
    fn test_amount_drops_trailing_zeros() {
        let builder = PaymentLinkBuilder::default();
        let amount = Decimal::new(76050, 2);
        assert!(builder
            .deep_link(PaymentTier::Standard, amount)
            .ends_with("&am=760.5"));
    }

    #[test]
    fn test_qr_url_encodes_deep_link() {
        let builder = PaymentLinkBuilder::default();
        let links = builder.build(PaymentTier::Luxury, Decimal::from(820));
        assert!(links.qr_url.starts_with(
            "https://api.qrserver.com/v1/create-qr-code/?size=300x300&data=upi%3A%2F%2Fpay%3Fpa%3D9322820147-2%40axl"
        ));
        assert!(links.qr_url.contains("pn%3Dcakes%20n%20bells"));
        assert!(links.qr_url.ends_with("&color=da82b8"));
        assert_eq!(links.badge_color, "purple");
    }

    #[test]
    fn test_payee_per_tier() {
        let payees = PayeeDirectory {
            standard: "std@upi".to_string(),
            premium: "pre@upi".to_string(),
            luxury: "lux@upi".to_string(),
        };
        let builder = PaymentLinkBuilder::new(payees, "Shop", 200, "000000");
        let links = builder.build(PaymentTier::Premium, Decimal::from(1));
        assert_eq!(links.payee_id, "pre@upi");
        assert!(links.deep_link.starts_with("upi://pay?pa=pre@upi&pn=Shop"));
        assert!(links.qr_url.contains("size=200x200"));
    }

    #[test]
    fn test_tier_for_missing_product_is_standard() {
        let catalog = defaults::catalog();
        assert_eq!(tier_for(&catalog, &ProductId::new("blueberry")), PaymentTier::Premium);
        assert_eq!(tier_for(&catalog, &ProductId::new("gone")), PaymentTier::Standard);
    }
}
