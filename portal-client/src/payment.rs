//! Hosted payment checkout
//!
//! The registration fee is collected through a hosted checkout page: the
//! portal constructs the checkout URL, the vendor completes payment in
//! the browser, and the gateway reports back through a callback. Per the
//! product's current design the success flag of that callback is trusted
//! as-is; no server-side verification happens on this side.

use serde::{Deserialize, Serialize};

/// One-time business registration fee, in paise (₹1200).
pub const REGISTRATION_FEE_PAISE: u64 = 120_000;

/// Parameters of a hosted checkout session.
#[derive(Debug, Clone, Serialize)]
pub struct HostedCheckout {
    /// Publishable gateway key id.
    pub key_id: String,
    /// Amount in the currency's minor unit.
    pub amount: u64,
    pub currency: String,
    /// Merchant display name shown on the checkout page.
    pub name: String,
    pub description: String,
}

impl HostedCheckout {
    /// Checkout session for the business registration fee.
    pub fn registration_fee(key_id: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            amount: REGISTRATION_FEE_PAISE,
            currency: "INR".to_string(),
            name: "EzyFix Vendor".to_string(),
            description: "Business Registration Fee".to_string(),
        }
    }

    /// URL of the hosted checkout page for this session.
    pub fn checkout_url(&self) -> String {
        format!(
            "https://checkout.razorpay.com/v1/checkout.html?key_id={}&amount={}&currency={}&name={}&description={}",
            self.key_id,
            self.amount,
            self.currency,
            urlencode(&self.name),
            urlencode(&self.description),
        )
    }

    /// Amount in rupees for display.
    pub fn amount_rupees(&self) -> f64 {
        self.amount as f64 / 100.0
    }
}

/// Gateway callback after the vendor finishes (or abandons) checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentCallback {
    /// Gateway payment id, present on success.
    #[serde(default)]
    pub payment_id: Option<String>,
    pub success: bool,
}

impl PaymentCallback {
    pub fn succeeded(payment_id: impl Into<String>) -> Self {
        Self {
            payment_id: Some(payment_id.into()),
            success: true,
        }
    }

    pub fn cancelled() -> Self {
        Self {
            payment_id: None,
            success: false,
        }
    }
}

/// Minimal percent-encoding for the query values above (spaces and
/// reserved separators only; gateway keys and amounts are URL-safe).
fn urlencode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_fee_session() {
        let session = HostedCheckout::registration_fee("rzp_test_key");
        assert_eq!(session.amount, REGISTRATION_FEE_PAISE);
        assert_eq!(session.amount_rupees(), 1200.0);
        assert_eq!(session.currency, "INR");
    }

    #[test]
    fn checkout_url_encodes_display_fields() {
        let url = HostedCheckout::registration_fee("rzp_test_key").checkout_url();
        assert!(url.starts_with("https://checkout.razorpay.com/v1/checkout.html?key_id=rzp_test_key"));
        assert!(url.contains("description=Business%20Registration%20Fee"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn callback_constructors() {
        assert!(PaymentCallback::succeeded("pay_1").success);
        let cancelled = PaymentCallback::cancelled();
        assert!(!cancelled.success);
        assert!(cancelled.payment_id.is_none());
    }
}
