//! Portal Client - HTTP client for the EzyFix backend
//!
//! Typed access to the vendor-facing REST API: one method per backend
//! operation, returning `ClientResult`. Also hosts the clients for the
//! two external collaborators of the registration flow: the identity
//! verification service (email OTP) and the hosted payment checkout.

pub mod config;
pub mod coupons;
pub mod error;
pub mod http;
pub mod payment;
pub mod vendors;
pub mod verify;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use payment::{HostedCheckout, PaymentCallback, REGISTRATION_FEE_PAISE};
pub use verify::{VerifyClient, VerifyOutcome};

// Re-export shared wire types for convenience
pub use shared::response::{LoginResponse, RegisterResponse, VendorId};
