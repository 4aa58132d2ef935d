//! Shared types for the EzyFix vendor portal
//!
//! Plain records exchanged with the remote REST backend, plus the small
//! vocabulary types (validation error map, display-id generation, select
//! option catalogs) used by both the API client and the portal app. The
//! frontend holds no authoritative state: everything here mirrors what
//! the backend sends or expects on the wire.

pub mod error;
pub mod models;
pub mod response;
pub mod types;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::FieldErrors;
pub use response::{ApiErrorBody, LoginResponse, RegisterResponse, VendorId};
