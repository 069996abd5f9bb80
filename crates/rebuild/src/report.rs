//! The rebuild result value.

use serde::Serialize;

use makerstock_core::ItemId;

/// One failure, keyed by the item it concerns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RebuildDetail {
    pub item_id: ItemId,
    pub message: String,
}

impl RebuildDetail {
    pub fn new(item_id: ItemId, message: impl Into<String>) -> Self {
        Self {
            item_id,
            message: message.into(),
        }
    }
}

/// Immutable summary of one rebuild run.
///
/// The engine neither persists nor renders this; a host hands it to its
/// operator surface, typically by serializing it as-is. `errors` always
/// equals the length of `details`, held by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RebuildReport {
    /// Items attempted, whether or not anything was written.
    pub processed: usize,
    /// Items whose stored values actually changed.
    pub updated: usize,
    /// Failures recorded, one per detail entry.
    pub errors: usize,
    pub details: Vec<RebuildDetail>,
}

impl RebuildReport {
    pub fn new(processed: usize, updated: usize, details: Vec<RebuildDetail>) -> Self {
        Self {
            processed,
            updated,
            errors: details.len(),
            details,
        }
    }

    /// Whether the run finished without a single detail entry.
    pub fn is_clean(&self) -> bool {
        self.errors == 0
    }
}
