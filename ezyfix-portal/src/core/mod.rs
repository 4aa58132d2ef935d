//! Client-side core logic
//!
//! Everything here is plain state + validation with no IO, so the
//! testable properties of the portal (step gating, error maps, price
//! math, pagination bounds) live against these modules rather than the
//! pages.

pub mod coupon_form;
pub mod pagination;
pub mod registration;
pub mod stats;

pub use coupon_form::CouponForm;
pub use pagination::Paginator;
pub use registration::{RegistrationWizard, Step, SubmitBlocked};
pub use stats::DashboardStats;
