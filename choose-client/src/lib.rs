//! Storefront client - typed access to the shop's REST API
//!
//! Wraps the backend's `{success, data, message}` envelope, bearer-token
//! session handling and the DTO to view-model transforms from `shared`.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod session;

pub use client::ShopClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use session::{FileTokenStore, MemoryTokenStore, SessionExpired, TokenStore};

// Re-export shared types for convenience
pub use shared::models;
pub use shared::util;
