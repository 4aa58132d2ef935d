//! Coupon create/edit form
//!
//! Field values stay as typed (the backend receives them verbatim);
//! validation parses them on the side. The image is required on create
//! only; an edit keeps the stored image unless a replacement is picked.

use chrono::{Local, NaiveDate};
use shared::FieldErrors;
use shared::models::{Coupon, CouponImage, CouponInput, DiscountType};

const DATE_FMT: &str = "%Y-%m-%d";

/// Transient state of the coupon form.
#[derive(Debug, Clone, PartialEq)]
pub struct CouponForm {
    pub title: String,
    pub description: String,
    /// Wire string of the discount type; the select defaults to
    /// percentage, so this is never empty in practice.
    pub discount_type: String,
    pub discount_value: String,
    pub minimum_purchase: String,
    pub terms_and_conditions: String,
    /// `YYYY-MM-DD`
    pub activation_date: String,
    /// `YYYY-MM-DD`
    pub expiration_date: String,
    pub category: String,
    pub price: String,
    pub image: Option<CouponImage>,
    /// Create forms require an image; edit forms do not.
    require_image: bool,
}

impl CouponForm {
    /// Blank form for the create page.
    pub fn for_create() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            discount_type: DiscountType::PERCENTAGE_WIRE.to_string(),
            discount_value: String::new(),
            minimum_purchase: String::new(),
            terms_and_conditions: String::new(),
            activation_date: String::new(),
            expiration_date: String::new(),
            category: String::new(),
            price: String::new(),
            image: None,
            require_image: true,
        }
    }

    /// Form prefilled from a fetched coupon, for the edit page.
    pub fn for_edit(coupon: &Coupon) -> Self {
        Self {
            title: coupon.title.clone(),
            description: coupon.description.clone(),
            discount_type: coupon.discount_type.as_wire().to_string(),
            discount_value: trim_number(coupon.discount_value),
            minimum_purchase: coupon.minimum_purchase.map(trim_number).unwrap_or_default(),
            terms_and_conditions: coupon.terms_and_conditions.clone(),
            activation_date: coupon.activation_date.clone(),
            expiration_date: coupon.expiration_date.clone(),
            category: coupon.category.clone(),
            price: trim_number(coupon.price),
            image: None,
            require_image: false,
        }
    }

    pub fn discount_type(&self) -> DiscountType {
        DiscountType::from_wire(&self.discount_type)
    }

    /// Validate against `today`. The key set is exactly the fields the
    /// vendor still has to fix.
    pub fn validate(&self, today: NaiveDate) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.title.trim().is_empty() {
            errors.insert("couponTitle", "Coupon Title is required.");
        }
        if self.category.trim().is_empty() {
            errors.insert("category", "Category is required.");
        }
        if self.description.trim().is_empty() {
            errors.insert("description", "Description is required.");
        }
        if self.discount_type.trim().is_empty() {
            errors.insert("discountType", "Discount type is required.");
        }
        if self.discount_value.trim().is_empty() {
            errors.insert("discountValue", "Discount value is required.");
        } else if !is_non_negative_number(&self.discount_value) {
            errors.insert("discountValue", "Discount value must be a valid number.");
        }
        if !self.minimum_purchase.trim().is_empty()
            && !is_non_negative_number(&self.minimum_purchase)
        {
            errors.insert("minimumPurchase", "Minimum purchase must be a valid number.");
        }
        if self.price.trim().is_empty() {
            errors.insert("price", "Coupon price is required.");
        } else if !is_non_negative_number(&self.price) {
            errors.insert("price", "Coupon price must be a valid number.");
        }
        if self.terms_and_conditions.trim().is_empty() {
            errors.insert("termsAndConditions", "Terms and Conditions are required.");
        }

        let activation = self.date_field(
            &self.activation_date,
            "activationDate",
            "Activation date is required.",
            &mut errors,
        );
        let expiration = self.date_field(
            &self.expiration_date,
            "expirationDate",
            "Expiration date is required.",
            &mut errors,
        );

        if let Some(activation) = activation {
            if activation < today {
                errors.insert("activationDate", "Activation date cannot be in the past.");
            }
            if let Some(expiration) = expiration {
                if expiration < activation {
                    errors.insert(
                        "expirationDate",
                        "Expiration date must be on or after the activation date.",
                    );
                } else if expiration < today {
                    errors.insert("expirationDate", "Expiration date cannot be in the past.");
                }
            }
        }

        if self.require_image && self.image.is_none() {
            errors.insert("couponImage", "Coupon image is required.");
        }

        errors
    }

    /// Validate against the current local date.
    pub fn validate_today(&self) -> FieldErrors {
        self.validate(Local::now().date_naive())
    }

    fn date_field(
        &self,
        raw: &str,
        key: &str,
        required_message: &str,
        errors: &mut FieldErrors,
    ) -> Option<NaiveDate> {
        let raw = raw.trim();
        if raw.is_empty() {
            errors.insert(key, required_message);
            return None;
        }
        match NaiveDate::parse_from_str(raw, DATE_FMT) {
            Ok(date) => Some(date),
            Err(_) => {
                errors.insert(key, "Enter a valid date (YYYY-MM-DD).");
                None
            }
        }
    }

    /// Live-preview discounted price: `None` until the price and a
    /// positive discount value both parse, otherwise the discounted
    /// amount floored at 0.
    pub fn discounted_price(&self) -> Option<f64> {
        let price: f64 = self.price.trim().parse().ok()?;
        let discount: f64 = self.discount_value.trim().parse().ok()?;
        if discount <= 0.0 {
            return None;
        }
        Some(self.discount_type().apply(price, discount))
    }

    /// Convert to the client payload. Call only after `validate`.
    pub fn to_input(&self) -> CouponInput {
        CouponInput {
            title: self.title.clone(),
            description: self.description.clone(),
            discount_type: self.discount_type(),
            discount_value: self.discount_value.clone(),
            minimum_purchase: self.minimum_purchase.clone(),
            terms_and_conditions: self.terms_and_conditions.clone(),
            activation_date: self.activation_date.clone(),
            expiration_date: self.expiration_date.clone(),
            category: self.category.clone(),
            price: self.price.clone(),
            image: self.image.clone(),
        }
    }
}

fn is_non_negative_number(raw: &str) -> bool {
    raw.trim().parse::<f64>().is_ok_and(|n| n.is_finite() && n >= 0.0)
}

/// Render a wire number the way the form displays it (no trailing `.0`
/// for whole amounts).
fn trim_number(value: f64) -> String {
    if value == value.trunc() {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
