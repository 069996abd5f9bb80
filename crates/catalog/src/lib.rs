//! `makerstock-catalog` — catalog items and the composition data model.
//!
//! Items are the records reconciliation derives state for. The engine reads
//! everything here and writes back exactly two fields (`quantity_on_hand`,
//! `cost`), through one mutator.

pub mod component;
pub mod item;

pub use component::{ComponentEdge, ComponentSpec};
pub use item::{Item, ItemType, PriceType};
