//! EzyFix Vendor Portal
//!
//! Terminal frontend for the EzyFix local-deals platform: vendors
//! register a business, log in, create and manage discount coupons,
//! watch coupon performance, and redeem customer codes. All state of
//! record lives behind the REST backend; this app keeps only the signed
//! -in session on disk and transient form state in memory.

pub mod app;
pub mod config;
pub mod core;
pub mod pages;
pub mod session;
pub mod ui;

pub use app::App;
pub use config::AppConfig;
