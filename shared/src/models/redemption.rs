//! Redemption models
//!
//! The redemption endpoints mix camelCase and snake_case in the same
//! object; the renames below reproduce the wire exactly.

use serde::{Deserialize, Serialize};

/// Status string the backend uses for a completed verification.
pub const REDEEM_STATUS_SUCCESSFUL: &str = "successful";

/// A redeemed-coupon row (`GET /api/coupons/redeemed/all`), also nested
/// as `couponData` in a verification response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RedemptionRecord {
    #[serde(rename = "originalCouponId", default)]
    pub original_coupon_id: String,
    #[serde(default)]
    pub redemption_code: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub price: f64,
    /// RFC 3339 timestamp, absent for pending rows.
    #[serde(default)]
    pub redeemed_time: Option<String>,
    /// `pending` or `successful`; compared case-insensitively.
    #[serde(default)]
    pub status: Option<String>,
}

impl RedemptionRecord {
    pub fn is_successful(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|s| s.trim().eq_ignore_ascii_case(REDEEM_STATUS_SUCCESSFUL))
    }

    /// Category/business column: category, else business name, else `-`.
    pub fn source_label(&self) -> &str {
        self.category
            .as_deref()
            .or(self.business_name.as_deref())
            .unwrap_or("-")
    }
}

/// `POST /api/coupons/verify-redeem` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyRedeemRequest {
    #[serde(rename = "redeemedCouponId")]
    pub redeemed_coupon_id: String,
    pub redemption_code: String,
}

/// `POST /api/coupons/verify-redeem` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VerifyRedeemResponse {
    #[serde(rename = "redeemStatus", default)]
    pub redeem_status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "couponData", default)]
    pub coupon_data: Option<RedemptionRecord>,
}

impl VerifyRedeemResponse {
    pub fn is_successful(&self) -> bool {
        self.redeem_status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case(REDEEM_STATUS_SUCCESSFUL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_request_uses_wire_names() {
        let request = VerifyRedeemRequest {
            redeemed_coupon_id: "EZY-1A2B3C".into(),
            redemption_code: "493817".into(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["redeemedCouponId"], "EZY-1A2B3C");
        assert_eq!(json["redemption_code"], "493817");
        assert!(json.get("redeemedCouponID").is_none());
    }

    #[test]
    fn verify_response_success_detection() {
        let ok: VerifyRedeemResponse = serde_json::from_str(
            r#"{"redeemStatus":"successful","couponData":{"originalCouponId":"EZY-XYZ123","redemption_code":"1","price":50}}"#,
        )
        .unwrap();
        assert!(ok.is_successful());
        assert_eq!(ok.coupon_data.unwrap().original_coupon_id, "EZY-XYZ123");

        let failed: VerifyRedeemResponse =
            serde_json::from_str(r#"{"redeemStatus":"failed","message":"Invalid code"}"#).unwrap();
        assert!(!failed.is_successful());
        assert_eq!(failed.message.as_deref(), Some("Invalid code"));
    }

    #[test]
    fn record_status_and_source_fallbacks() {
        let record: RedemptionRecord = serde_json::from_str(
            r#"{"originalCouponId":"EZY-A","redemption_code":"7","price":10,"status":"Successful","business_name":"Chai Point"}"#,
        )
        .unwrap();
        assert!(record.is_successful());
        assert_eq!(record.source_label(), "Chai Point");

        let pending = RedemptionRecord::default();
        assert!(!pending.is_successful());
        assert_eq!(pending.source_label(), "-");
    }
}
