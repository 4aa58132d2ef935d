//! Account API
//!
//! Typed methods for the backend's vendor-account endpoints.

use crate::{ClientResult, HttpClient};
use shared::models::{VendorProfile, VendorProfileUpdate, VendorRegistration};
use shared::response::{LoginResponse, RegisterResponse, VendorId};

impl HttpClient {
    /// Login with email and password (`POST /api/auth/login`).
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        #[derive(serde::Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        self.post("/api/auth/login", &LoginRequest { email, password })
            .await
    }

    /// Submit a completed registration (`POST /api/auth/register`).
    pub async fn register(
        &self,
        registration: &VendorRegistration,
    ) -> ClientResult<RegisterResponse> {
        self.post("/api/auth/register", registration).await
    }

    /// Fetch a vendor profile (`GET /api/auth/profile/{id}`).
    pub async fn profile(&self, vendor_id: &VendorId) -> ClientResult<VendorProfile> {
        self.get(&format!("/api/auth/profile/{vendor_id}")).await
    }

    /// Update a vendor profile (`PUT /api/auth/update/{id}`).
    ///
    /// The backend echoes the updated record; callers that only care
    /// about success can discard it.
    pub async fn update_profile(
        &self,
        vendor_id: &VendorId,
        update: &VendorProfileUpdate,
    ) -> ClientResult<serde_json::Value> {
        self.put(&format!("/api/auth/update/{vendor_id}"), update)
            .await
    }
}
