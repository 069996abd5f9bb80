//! Store boundary error model.

use thiserror::Error;

use makerstock_core::ItemId;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store operation error.
///
/// These are **infrastructure errors** (backend unavailable, write refused)
/// as opposed to domain errors. Backend detail is flattened to text so
/// concrete storage crates never leak into the trait signatures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing store could not serve the request.
    #[error("store backend failure: {0}")]
    Backend(String),

    /// A write targeted an item the store does not hold.
    #[error("item {0} is not in the store")]
    MissingItem(ItemId),
}

impl StoreError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }

    pub fn missing_item(item_id: ItemId) -> Self {
        Self::MissingItem(item_id)
    }
}
