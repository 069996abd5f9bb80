//! `makerstock-rebuild` — the inventory reconciliation engine.
//!
//! Derives authoritative item state (`quantity_on_hand`, `cost`) purely from
//! the immutable purchase/sale history, regenerates the product→material
//! composition graph, and reports per-item failures without ever aborting a
//! batch. Both operator commands live on [`RebuildService`].

pub mod components;
pub mod error;
pub mod reconciler;
pub mod report;
pub mod service;

pub use components::{ComponentIssue, build_edges};
pub use error::RebuildError;
pub use reconciler::{DerivedState, LineRef, TotalDrift, reconcile};
pub use report::{RebuildDetail, RebuildReport};
pub use service::RebuildService;
