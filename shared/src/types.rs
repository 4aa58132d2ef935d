//! Small shared vocabulary: display-id generation and the fixed select
//! option catalogs used by the registration and coupon forms.

use rand::Rng;

/// Prefix of the client-generated display coupon id.
pub const COUPON_ID_PREFIX: &str = "EZY";

/// Length of the random portion of a display coupon id.
pub const COUPON_CODE_LEN: usize = 6;

const CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate a display coupon id of the form `EZY-XXXXXX`.
///
/// This id exists purely for optimistic display while the create request
/// is in flight; the authoritative identifier is always the one the
/// backend returns.
pub fn display_coupon_id() -> String {
    let mut rng = rand::thread_rng();
    let code: String = (0..COUPON_CODE_LEN)
        .map(|_| CODE_CHARSET[rng.gen_range(0..CODE_CHARSET.len())] as char)
        .collect();
    format!("{COUPON_ID_PREFIX}-{code}")
}

/// Business types offered during registration.
pub const BUSINESS_TYPES: &[&str] = &[
    "Restaurants/cafe/Dining",
    "Fashion",
    "Hotel & Stays",
    "SPA & Salons",
    "Electronics",
    "Furniture",
    "Fun & Activity",
    "Other Service",
];

/// Coupon categories offered in the create/edit form.
pub const COUPON_CATEGORIES: &[&str] = &[
    "Restaurants/cafe/Dining",
    "Fashion",
    "Hotel & Stays",
    "SPA & Salons",
    "Electronics",
    "Furniture",
    "Fun & Activity",
    "Other Services",
];

/// Provinces/states offered during registration.
pub const PROVINCES: &[&str] = &[
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
    "Andaman and Nicobar Islands",
    "Chandigarh",
    "Dadra and Nagar Haveli and Daman and Diu",
    "Delhi",
    "Jammu and Kashmir",
    "Ladakh",
    "Lakshadweep",
    "Puducherry",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_id_shape() {
        let id = display_coupon_id();
        assert_eq!(id.len(), COUPON_ID_PREFIX.len() + 1 + COUPON_CODE_LEN);
        assert!(id.starts_with("EZY-"));
        assert!(
            id[4..]
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        );
    }
}
