//! Error types for the shared crate

use thiserror::Error;

/// A backend payload that cannot be turned into a view model.
///
/// These are integrity violations in the response, not recoverable cases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// Cart item came back without its variant
    #[error("CartItem missing variant information")]
    MissingVariant,
}
