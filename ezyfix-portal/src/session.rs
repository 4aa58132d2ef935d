//! Vendor session persistence
//!
//! The browser build of this portal kept the signed-in vendor in local
//! storage under fixed keys; here the same record lives in a JSON file
//! under the data directory, serialized with the same keys. The session
//! is created only by a successful login or registration and removed in
//! full on logout; pages never write to it piecemeal behind the app's
//! back.

use serde::{Deserialize, Serialize};
use shared::response::VendorId;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The signed-in vendor, as persisted between runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VendorSession {
    #[serde(rename = "VendorToken")]
    pub token: String,
    #[serde(rename = "VendorId")]
    pub vendor_id: Option<VendorId>,
    #[serde(rename = "vendorName", default)]
    pub name: String,
    #[serde(rename = "vendorEmail", default)]
    pub email: String,
    #[serde(rename = "vendorPhone", default)]
    pub phone: String,
    #[serde(rename = "vendorBusiness", default)]
    pub business: String,
    #[serde(rename = "vendorBusinessType", default)]
    pub business_type: String,
    #[serde(rename = "vendorAddress", default)]
    pub address: String,
    #[serde(rename = "vendorGoogleMapsLink", default)]
    pub google_maps_link: String,
    #[serde(rename = "vendorDescription", default)]
    pub description: String,
    /// Data-URL encoded profile image cache.
    #[serde(rename = "vendorProfileImage", default)]
    pub profile_image: String,
    /// Authoritative id of the most recently created coupon.
    #[serde(rename = "lastCreatedCouponId", default)]
    pub last_created_coupon_id: Option<String>,
}

impl VendorSession {
    /// Session installed after a successful registration: the issued
    /// token plus the profile fields the vendor just typed in.
    pub fn from_registration(
        token: String,
        vendor_id: Option<VendorId>,
        form: &shared::models::VendorRegistration,
    ) -> Self {
        Self {
            token,
            vendor_id,
            name: form.contact_person.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            business: form.business_name.clone(),
            business_type: form.business_type.clone(),
            address: form.street_address.clone(),
            google_maps_link: form.google_maps_link.clone(),
            description: form.business_description.clone(),
            ..Default::default()
        }
    }

    /// Session installed after a successful login. Profile fields fill
    /// in lazily when the profile page first fetches them.
    pub fn from_login(token: String, vendor_id: VendorId) -> Self {
        Self {
            token,
            vendor_id: Some(vendor_id),
            ..Default::default()
        }
    }

    /// Cache an image as a data URL, as the profile page stores it.
    pub fn cache_profile_image(&mut self, content_type: &str, data: &[u8]) {
        use base64::{Engine, engine::general_purpose::STANDARD};
        self.profile_image = format!("data:{};base64,{}", content_type, STANDARD.encode(data));
    }
}

/// File-backed store for the vendor session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted session, if one exists and parses.
    pub fn load(&self) -> Result<Option<VendorSession>, SessionError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        let session = serde_json::from_str(&raw)?;
        Ok(Some(session))
    }

    /// Persist the session, creating the data directory on first use.
    pub fn save(&self, session: &VendorSession) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    /// Logout teardown: remove every persisted key at once.
    pub fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, SessionStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));
        (dir, store)
    }

    #[test]
    fn missing_file_loads_as_none() {
        let (_dir, store) = store();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let (_dir, store) = store();
        let session = VendorSession {
            token: "tok-123".into(),
            vendor_id: Some(VendorId::from("42")),
            name: "Asha".into(),
            business: "Chai Point".into(),
            ..Default::default()
        };
        store.save(&session).unwrap();
        assert_eq!(store.load().unwrap(), Some(session));
    }

    #[test]
    fn persisted_keys_match_the_storage_contract() {
        let (_dir, store) = store();
        let mut session = VendorSession {
            token: "tok-123".into(),
            ..Default::default()
        };
        session.last_created_coupon_id = Some("srv-9".into());
        store.save(&session).unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["VendorToken"], "tok-123");
        assert_eq!(value["lastCreatedCouponId"], "srv-9");
        assert!(value.get("vendorName").is_some());
        assert!(value.get("token").is_none());
    }

    #[test]
    fn clear_removes_the_file_and_is_idempotent() {
        let (_dir, store) = store();
        store.save(&VendorSession::default()).unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
        store.clear().unwrap();
    }

    #[test]
    fn profile_image_cache_is_a_data_url() {
        let mut session = VendorSession::default();
        session.cache_profile_image("image/png", &[1, 2, 3]);
        assert!(session.profile_image.starts_with("data:image/png;base64,"));
    }
}
