//! Data models
//!
//! Each module pairs the backend wire shape (`*Dto`) with the view model
//! callers receive, plus the request payloads for that resource.
//! All view-model IDs are `String`; wire IDs are [`RawId`](crate::util::RawId).

pub mod cart;
pub mod category;
pub mod inquiry;
pub mod order;
pub mod product;
pub mod reply_template;
pub mod user;

// Re-exports
pub use cart::*;
pub use category::*;
pub use inquiry::*;
pub use order::*;
pub use product::*;
pub use reply_template::*;
pub use user::*;
