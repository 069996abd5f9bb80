//! `makerstock-valuation` — line-item valuation arithmetic.
//!
//! One entry point: [`line_total`]. The reconciler replays every contributing
//! line through it, and order-entry collaborators can price lines with the
//! same arithmetic so stored and derived totals agree.

pub mod line_total;

pub use line_total::{Discount, line_total};
