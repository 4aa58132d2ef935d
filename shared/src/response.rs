//! Auth wire types
//!
//! Response shapes of the backend's account endpoints, plus the loose
//! error body it returns on failure. The backend is not under this
//! repository's control, so these types are deliberately tolerant:
//! optional fields default, and ids accept either JSON numbers or
//! strings.

use serde::{Deserialize, Serialize};

/// Vendor identifier as issued by the backend.
///
/// Stored and transmitted as a string (it is used as a URL path segment
/// and a storage value), but accepted from the wire as either a string
/// or a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VendorId(pub String);

impl VendorId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VendorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VendorId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for VendorId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Visitor;

        impl serde::de::Visitor<'_> for Visitor {
            type Value = VendorId;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a vendor id as a string or number")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<VendorId, E> {
                Ok(VendorId(v.to_string()))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<VendorId, E> {
                Ok(VendorId(v.to_string()))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<VendorId, E> {
                Ok(VendorId(v.to_string()))
            }
        }

        deserializer.deserialize_any(Visitor)
    }
}

/// `POST /api/auth/login` response.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub vendor: VendorIdentity,
}

/// Nested vendor reference in the login response.
#[derive(Debug, Clone, Deserialize)]
pub struct VendorIdentity {
    pub id: VendorId,
}

/// `POST /api/auth/register` response.
///
/// Some backend deployments omit the id; callers must treat it as
/// optional and warn rather than fail.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    pub token: String,
    #[serde(default)]
    pub id: Option<VendorId>,
}

/// Error body shape of backend failures.
///
/// The account endpoints report errors under `msg`, the coupon endpoints
/// under `message`; both are optional in practice.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Best server-provided message, if any.
    pub fn into_message(self) -> Option<String> {
        self.msg.or(self.message).filter(|m| !m.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vendor_id_accepts_number_or_string() {
        let from_number: VendorId = serde_json::from_str("42").unwrap();
        let from_string: VendorId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(from_number, from_string);
        assert_eq!(from_number.as_str(), "42");
    }

    #[test]
    fn login_response_parses_nested_vendor() {
        let body = r#"{"access_token":"tok-1","vendor":{"id":7,"email":"v@example.com"}}"#;
        let parsed: LoginResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.access_token, "tok-1");
        assert_eq!(parsed.vendor.id.as_str(), "7");
    }

    #[test]
    fn error_body_prefers_msg_over_message() {
        let both: ApiErrorBody =
            serde_json::from_str(r#"{"msg":"Email already registered","message":"dup"}"#).unwrap();
        assert_eq!(
            both.into_message().as_deref(),
            Some("Email already registered")
        );

        let neither: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(neither.into_message(), None);
    }
}
