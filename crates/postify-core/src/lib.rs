//! postify/crates/postify-core/src/lib.rs
//!
//! The central domain logic and interface definitions for Postify.

pub mod error;
pub mod models;
pub mod service;
pub mod traits;
pub mod validation;

// Re-exporting for easier access in other crates
pub use error::*;
pub use models::*;
pub use service::*;
pub use traits::*;
