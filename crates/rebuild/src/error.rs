//! Rebuild error taxonomy.

use thiserror::Error;

use makerstock_core::ItemId;
use makerstock_measure::MeasureError;
use makerstock_store::StoreError;

/// Failures caught at per-item granularity during a rebuild.
///
/// Every variant is downgraded into a report detail entry for the item it
/// concerns; none of them aborts a batch. The only fatal path is failing to
/// read a store snapshot up front, which surfaces as a bare [`StoreError`]
/// before any item has been touched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RebuildError {
    /// A line's unit or magnitude is unusable for the item's kind.
    #[error(transparent)]
    Measure(#[from] MeasureError),

    /// A product's component points to a missing or wrongly-typed material.
    #[error("component material {material_id} is {reason}")]
    DanglingComponentReference {
        material_id: ItemId,
        reason: &'static str,
    },

    /// Transaction history references an item the catalog no longer contains.
    #[error("item {0} is referenced by transaction history but missing from the catalog")]
    UnknownItem(ItemId),

    /// Writing the recomputed item back to the catalog failed.
    #[error("persistence failure: {0}")]
    Persistence(#[from] StoreError),
}

impl RebuildError {
    pub fn dangling(material_id: ItemId, reason: &'static str) -> Self {
        Self::DanglingComponentReference {
            material_id,
            reason,
        }
    }

    pub fn unknown_item(item_id: ItemId) -> Self {
        Self::UnknownItem(item_id)
    }
}
