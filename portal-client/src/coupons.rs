//! Coupon API
//!
//! Typed methods for coupon CRUD and the redemption verification flow.
//! Create and update go over multipart (the image rides along with the
//! fields), and the two endpoints expect different key spellings:
//! create wants the form's camelCase names, update wants snake_case.

use crate::{ClientError, ClientResult, HttpClient};
use reqwest::multipart::{Form, Part};
use shared::models::{
    Coupon, CouponCreated, CouponImage, CouponInput, CouponSummary, RedemptionRecord,
    VerifyRedeemRequest, VerifyRedeemResponse,
};

/// Multipart keys for `POST /api/coupons/create`, paired with the form
/// values they carry. The image travels separately as `companyLogo`.
pub(crate) fn create_fields(input: &CouponInput, display_id: &str) -> Vec<(&'static str, String)> {
    vec![
        ("couponTitle", input.title.clone()),
        ("description", input.description.clone()),
        ("discountType", input.discount_type.as_wire().to_string()),
        ("discountValue", input.discount_value.clone()),
        ("minimumPurchase", input.minimum_purchase.clone()),
        ("termsAndConditions", input.terms_and_conditions.clone()),
        ("activationDate", input.activation_date.clone()),
        ("expirationDate", input.expiration_date.clone()),
        ("category", input.category.clone()),
        ("price", input.price.clone()),
        ("customCouponId", display_id.to_string()),
    ]
}

/// Multipart keys for `PUT /api/coupons/{id}`; the optional image part
/// is named `image` here.
pub(crate) fn update_fields(input: &CouponInput) -> Vec<(&'static str, String)> {
    vec![
        ("title", input.title.clone()),
        ("description", input.description.clone()),
        ("discount_type", input.discount_type.as_wire().to_string()),
        ("discount_value", input.discount_value.clone()),
        ("minimum_purchase", input.minimum_purchase.clone()),
        ("terms_and_conditions", input.terms_and_conditions.clone()),
        ("activation_date", input.activation_date.clone()),
        ("expiration_date", input.expiration_date.clone()),
        ("category", input.category.clone()),
        ("price", input.price.clone()),
    ]
}

fn image_part(image: &CouponImage) -> ClientResult<Part> {
    Part::bytes(image.data.clone())
        .file_name(image.file_name.clone())
        .mime_str(&image.content_type)
        .map_err(ClientError::Http)
}

fn form_from(fields: Vec<(&'static str, String)>) -> Form {
    fields
        .into_iter()
        .fold(Form::new(), |form, (key, value)| form.text(key, value))
}

impl HttpClient {
    /// Create a coupon (`POST /api/coupons/create`).
    ///
    /// `display_id` is the client-generated `EZY-XXXXXX` placeholder; the
    /// id in the response is the authoritative one.
    pub async fn create_coupon(
        &self,
        input: &CouponInput,
        display_id: &str,
    ) -> ClientResult<CouponCreated> {
        let mut form = form_from(create_fields(input, display_id));
        let image = input
            .image
            .as_ref()
            .ok_or_else(|| ClientError::Validation("coupon image is required".to_string()))?;
        form = form.part("companyLogo", image_part(image)?);

        self.post_multipart("/api/coupons/create", form).await
    }

    /// Fetch one coupon for editing (`GET /api/coupons/{id}`).
    pub async fn coupon(&self, id: &str) -> ClientResult<Coupon> {
        self.get(&format!("/api/coupons/{id}")).await
    }

    /// Update a coupon (`PUT /api/coupons/{id}`). The image is only sent
    /// when the vendor picked a replacement.
    pub async fn update_coupon(&self, id: &str, input: &CouponInput) -> ClientResult<()> {
        let mut form = form_from(update_fields(input));
        if let Some(image) = &input.image {
            form = form.part("image", image_part(image)?);
        }

        // Update responses carry no useful body.
        let _: serde_json::Value = self
            .put_multipart(&format!("/api/coupons/{id}"), form)
            .await?;
        Ok(())
    }

    /// Delete a coupon (`DELETE /api/coupons/{id}`).
    pub async fn delete_coupon(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("/api/coupons/{id}")).await
    }

    /// List this vendor's coupons (`GET /api/coupons/my-coupons`).
    pub async fn my_coupons(&self) -> ClientResult<Vec<CouponSummary>> {
        self.get("/api/coupons/my-coupons").await
    }

    /// List every redemption for this vendor
    /// (`GET /api/coupons/redeemed/all`).
    pub async fn redeemed_coupons(&self) -> ClientResult<Vec<RedemptionRecord>> {
        self.get("/api/coupons/redeemed/all").await
    }

    /// Verify a customer-presented code pair
    /// (`POST /api/coupons/verify-redeem`). The backend is the sole
    /// arbiter of the outcome.
    pub async fn verify_redeem(
        &self,
        request: &VerifyRedeemRequest,
    ) -> ClientResult<VerifyRedeemResponse> {
        self.post("/api/coupons/verify-redeem", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::DiscountType;

    fn sample_input() -> CouponInput {
        CouponInput {
            title: "20% Off All Coffee".into(),
            description: "Weekday mornings only".into(),
            discount_type: DiscountType::Percentage,
            discount_value: "20".into(),
            minimum_purchase: "500".into(),
            terms_and_conditions: "One per customer".into(),
            activation_date: "2026-09-01".into(),
            expiration_date: "2026-12-31".into(),
            category: "Restaurants/cafe/Dining".into(),
            price: "1000".into(),
            image: None,
        }
    }

    #[test]
    fn create_fields_use_camel_case_keys() {
        let fields = create_fields(&sample_input(), "EZY-AB12CD");
        let keys: Vec<_> = fields.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec![
                "couponTitle",
                "description",
                "discountType",
                "discountValue",
                "minimumPurchase",
                "termsAndConditions",
                "activationDate",
                "expirationDate",
                "category",
                "price",
                "customCouponId",
            ]
        );
        assert!(fields.contains(&("customCouponId", "EZY-AB12CD".to_string())));
        assert!(fields.contains(&("discountType", "Percentage (%)".to_string())));
    }

    #[test]
    fn update_fields_use_snake_case_keys() {
        let fields = update_fields(&sample_input());
        let keys: Vec<_> = fields.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec![
                "title",
                "description",
                "discount_type",
                "discount_value",
                "minimum_purchase",
                "terms_and_conditions",
                "activation_date",
                "expiration_date",
                "category",
                "price",
            ]
        );
        assert!(!keys.contains(&"customCouponId"));
    }
}
