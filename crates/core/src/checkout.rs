//! Checkout form validation.
//!
//! Validation is all-or-nothing and purely a UX gate: every failing field gets
//! a message, and the order only proceeds when the map is empty.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::CustomerDetails;

// ASCII digits only; `\d` would also accept other Unicode digit classes.
static MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("valid mobile regex"));
static PINCODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{6}$").expect("valid pincode regex"));

/// Checkout form fields that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CheckoutField {
    FullName,
    Mobile,
    Address,
    Pincode,
}

/// Per-field validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<CheckoutField, &'static str>);

impl FieldErrors {
    fn insert(&mut self, field: CheckoutField, message: &'static str) {
        self.0.insert(field, message);
    }

    /// Message for a field, if it failed.
    #[must_use]
    pub fn get(&self, field: CheckoutField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl core::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let messages: Vec<&str> = self.0.values().copied().collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for FieldErrors {}

/// Returns true if `mobile` is exactly ten ASCII digits.
#[must_use]
pub fn is_valid_mobile(mobile: &str) -> bool {
    MOBILE_RE.is_match(mobile)
}

/// Returns true if `pincode` is exactly six ASCII digits.
#[must_use]
pub fn is_valid_pincode(pincode: &str) -> bool {
    PINCODE_RE.is_match(pincode)
}

/// Strip everything but ASCII digits from postal code input.
///
/// Applied to input as it is received, not by [`validate`].
#[must_use]
pub fn sanitize_postal_code(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Validate checkout details.
///
/// # Errors
///
/// Returns every failing field with its message.
pub fn validate(form: &CustomerDetails) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    if form.full_name.is_empty() {
        errors.insert(CheckoutField::FullName, "Full Name is required");
    }

    if form.mobile.is_empty() {
        errors.insert(CheckoutField::Mobile, "Mobile number is required");
    } else if !is_valid_mobile(&form.mobile) {
        errors.insert(CheckoutField::Mobile, "Enter a valid 10-digit number");
    }

    if form.address.is_empty() {
        errors.insert(CheckoutField::Address, "Full Address is required");
    }

    if form.pincode.is_empty() {
        errors.insert(CheckoutField::Pincode, "Pincode is required");
    } else if !is_valid_pincode(&form.pincode) {
        errors.insert(CheckoutField::Pincode, "Enter a valid 6-digit pincode");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        tracing::debug!(failed = errors.len(), "checkout validation failed");
        Err(errors)
    }
}
