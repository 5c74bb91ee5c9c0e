//! Resource clients
//!
//! One client per backend resource. Each borrows the transport, holds no
//! state of its own, and returns view models from `shared::models`.

pub mod auth;
pub mod cart;
pub mod categories;
pub mod featured;
pub mod inquiries;
pub mod orders;
pub mod products;
pub mod reply_templates;
pub mod users;
pub mod variants;

pub use auth::AuthApi;
pub use cart::CartApi;
pub use categories::CategoriesApi;
pub use featured::FeaturedApi;
pub use inquiries::InquiriesApi;
pub use orders::OrdersApi;
pub use products::ProductsApi;
pub use reply_templates::ReplyTemplatesApi;
pub use users::UsersApi;
pub use variants::VariantsApi;

use crate::{ClientError, ClientResult};

/// Turns a 404 into `Ok(None)` for single-entity lookups and updates.
pub(crate) trait NotFoundExt<T> {
    fn or_not_found(self) -> ClientResult<Option<T>>;
}

impl<T> NotFoundExt<T> for ClientResult<T> {
    fn or_not_found(self) -> ClientResult<Option<T>> {
        match self {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Same as [`NotFoundExt`] but for 401, used by "who am I" lookups.
pub(crate) fn unauthorized_as_none<T>(result: ClientResult<T>) -> ClientResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(ClientError::Http { status: 401, .. }) => Ok(None),
        Err(e) => Err(e),
    }
}
