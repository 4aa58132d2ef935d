//! Vendor account models

use serde::{Deserialize, Serialize};

/// Registration submission payload (`POST /api/auth/register`).
///
/// Sent exactly as collected by the three-step wizard; the backend
/// expects camelCase keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorRegistration {
    pub business_name: String,
    pub business_type: String,
    pub business_description: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub street_address: String,
    pub city: String,
    pub province: String,
    pub postal_code: String,
    pub google_maps_link: String,
    pub username: String,
    pub password: String,
}

/// Vendor profile record (`GET /api/auth/profile/{id}`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VendorProfile {
    #[serde(default)]
    pub contact_person: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub business_name: String,
    #[serde(default)]
    pub business_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub maps_link: String,
    /// Data-URL encoded image, when the vendor has uploaded one.
    #[serde(rename = "profileImage", default)]
    pub profile_image: String,
}

/// Profile update payload (`PUT /api/auth/update/{id}`).
///
/// The portal always sends the full field set, mirroring the edit form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VendorProfileUpdate {
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub business_name: String,
    pub business_type: String,
    pub description: String,
    pub address: String,
    pub maps_link: String,
    #[serde(rename = "profileImage")]
    pub profile_image: String,
}

impl VendorProfile {
    /// Build the full-field update payload from the current record.
    pub fn to_update(&self) -> VendorProfileUpdate {
        VendorProfileUpdate {
            contact_person: self.contact_person.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            business_name: self.business_name.clone(),
            business_type: self.business_type.clone(),
            description: self.description.clone(),
            address: self.address.clone(),
            maps_link: self.maps_link.clone(),
            profile_image: self.profile_image.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_serializes_camel_case() {
        let payload = VendorRegistration {
            business_name: "Chai Point".into(),
            business_type: "Restaurants/cafe/Dining".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["businessName"], "Chai Point");
        assert!(json.get("business_name").is_none());
        assert!(json.get("googleMapsLink").is_some());
    }

    #[test]
    fn profile_tolerates_missing_fields() {
        let profile: VendorProfile =
            serde_json::from_str(r#"{"contact_person":"Asha","email":"a@b.c"}"#).unwrap();
        assert_eq!(profile.contact_person, "Asha");
        assert_eq!(profile.business_name, "");
        assert_eq!(profile.profile_image, "");
    }
}
