//! Sales records as reconciliation consumes them.
//!
//! Mirrors `makerstock-purchasing`: the flattened sale line with its owning
//! sale's status and timestamp, nothing of the order workflow itself.

pub mod line;

pub use line::{SaleLine, SaleStatus};
