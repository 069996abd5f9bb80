//! Purchasing records as reconciliation consumes them.
//!
//! Order entry itself lives with external collaborators; this crate carries
//! the flattened purchase line (line + owning order's status and timestamp)
//! and the status lifecycle, no IO and no order workflow.

pub mod line;

pub use line::{PurchaseLine, PurchaseStatus};
