//! Shared types for the storefront client
//!
//! Backend wire types, the view models they are transformed into, the
//! response envelope, and leaf utilities (CDN image URLs, form validation).
//! Nothing in this crate performs I/O.

pub mod client;
pub mod error;
pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::TransformError;
pub use response::ApiResponse;
pub use util::RawId;
