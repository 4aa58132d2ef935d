//! Coupon models

use serde::{Deserialize, Serialize};

/// Discount type of a coupon.
///
/// The wire carries the display strings verbatim (`Percentage (%)`,
/// `Fixed Amount`); parsing is tolerant because the listing endpoint is
/// not strict about them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiscountType {
    #[default]
    Percentage,
    Fixed,
}

impl DiscountType {
    pub const PERCENTAGE_WIRE: &'static str = "Percentage (%)";
    pub const FIXED_WIRE: &'static str = "Fixed Amount";

    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::Percentage => Self::PERCENTAGE_WIRE,
            Self::Fixed => Self::FIXED_WIRE,
        }
    }

    /// Tolerant parse: anything mentioning "fixed" is a fixed amount,
    /// everything else is treated as a percentage.
    pub fn from_wire(value: &str) -> Self {
        if value.to_ascii_lowercase().contains("fixed") {
            Self::Fixed
        } else {
            Self::Percentage
        }
    }

    /// Discounted price for `price` under this discount, floored at 0.
    pub fn apply(&self, price: f64, discount_value: f64) -> f64 {
        let result = match self {
            Self::Percentage => price - price * discount_value / 100.0,
            Self::Fixed => price - discount_value,
        };
        result.max(0.0)
    }
}

impl std::fmt::Display for DiscountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl Serialize for DiscountType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

impl<'de> Deserialize<'de> for DiscountType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&raw))
    }
}

/// Coupon detail record (`GET /api/coupons/{id}`), snake_case wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Coupon {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub discount_type: DiscountType,
    #[serde(default)]
    pub discount_value: f64,
    #[serde(default)]
    pub minimum_purchase: Option<f64>,
    #[serde(default)]
    pub terms_and_conditions: String,
    /// `YYYY-MM-DD`
    #[serde(default)]
    pub activation_date: String,
    /// `YYYY-MM-DD`
    #[serde(default)]
    pub expiration_date: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: f64,
}

/// Coupon list record (`GET /api/coupons/my-coupons`), camelCase wire.
///
/// The listing endpoint is loose: ids come under `couponId` or
/// `customCouponId`, counters and status may be absent. Defaults follow
/// what the portal displays for missing values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponSummary {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub coupon_id: Option<String>,
    #[serde(default)]
    pub custom_coupon_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub discount_value: f64,
    #[serde(default)]
    pub discount_type: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub redeemed: u64,
    #[serde(default)]
    pub purchased: u64,
    #[serde(default)]
    pub price: f64,
}

impl CouponSummary {
    /// Display identifier: `couponId`, falling back to `customCouponId`,
    /// then `N/A`.
    pub fn display_id(&self) -> &str {
        self.coupon_id
            .as_deref()
            .or(self.custom_coupon_id.as_deref())
            .unwrap_or("N/A")
    }

    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }

    pub fn category_or_default(&self) -> &str {
        self.category.as_deref().unwrap_or("General")
    }

    /// Status label; the backend omits it for freshly created coupons.
    pub fn status_label(&self) -> &str {
        self.status.as_deref().unwrap_or("Active")
    }

    pub fn is_active(&self) -> bool {
        self.status_label().trim().eq_ignore_ascii_case("active")
    }

    /// Combined discount column, e.g. `20 Percentage (%)`.
    pub fn discount_label(&self) -> String {
        format!("{} {}", self.discount_value, self.discount_type)
            .trim_end()
            .to_string()
    }
}

/// Image attached to a coupon create/update request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CouponImage {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Validated output of the coupon create/edit form.
///
/// Values stay as the strings the form collected; the multipart builders
/// transmit them verbatim under the backend's field names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CouponInput {
    pub title: String,
    pub description: String,
    pub discount_type: DiscountType,
    pub discount_value: String,
    pub minimum_purchase: String,
    pub terms_and_conditions: String,
    pub activation_date: String,
    pub expiration_date: String,
    pub category: String,
    pub price: String,
    pub image: Option<CouponImage>,
}

/// `POST /api/coupons/create` response.
#[derive(Debug, Clone, Deserialize)]
pub struct CouponCreated {
    pub coupon_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discount_type_wire_round() {
        assert_eq!(DiscountType::from_wire("Percentage (%)"), DiscountType::Percentage);
        assert_eq!(DiscountType::from_wire("Fixed Amount"), DiscountType::Fixed);
        assert_eq!(DiscountType::from_wire("fixed"), DiscountType::Fixed);
        assert_eq!(DiscountType::from_wire(""), DiscountType::Percentage);
    }

    #[test]
    fn percentage_discount_formula() {
        assert_eq!(DiscountType::Percentage.apply(1000.0, 20.0), 800.0);
        assert_eq!(DiscountType::Percentage.apply(1000.0, 100.0), 0.0);
    }

    #[test]
    fn fixed_discount_floors_at_zero() {
        assert_eq!(DiscountType::Fixed.apply(500.0, 200.0), 300.0);
        assert_eq!(DiscountType::Fixed.apply(100.0, 250.0), 0.0);
    }

    #[test]
    fn summary_display_id_fallback_chain() {
        let mut summary = CouponSummary::default();
        assert_eq!(summary.display_id(), "N/A");

        summary.custom_coupon_id = Some("EZY-AB12CD".into());
        assert_eq!(summary.display_id(), "EZY-AB12CD");

        summary.coupon_id = Some("srv-9".into());
        assert_eq!(summary.display_id(), "srv-9");
    }

    #[test]
    fn summary_defaults_match_display_rules() {
        let summary: CouponSummary = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        assert_eq!(summary.title_or_default(), "Untitled");
        assert_eq!(summary.category_or_default(), "General");
        assert_eq!(summary.status_label(), "Active");
        assert!(summary.is_active());
        assert_eq!(summary.redeemed, 0);
    }

    #[test]
    fn summary_status_comparison_is_case_insensitive() {
        let summary: CouponSummary =
            serde_json::from_str(r#"{"id": 1, "status": " ACTIVE "}"#).unwrap();
        assert!(summary.is_active());

        let expired: CouponSummary =
            serde_json::from_str(r#"{"id": 2, "status": "Expired"}"#).unwrap();
        assert!(!expired.is_active());
    }
}
