//! Data models
//!
//! Records exchanged with the backend API. Field renames follow the wire
//! exactly: the backend mixes camelCase (registration, coupon listing)
//! and snake_case (coupon detail, profile, redemption), and the mapping
//! is part of the contract.

pub mod coupon;
pub mod redemption;
pub mod vendor;

// Re-exports
pub use coupon::*;
pub use redemption::*;
pub use vendor::*;
