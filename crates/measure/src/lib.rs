//! `makerstock-measure` — measurement kinds, unit vocabularies and conversion.
//!
//! Stock moves in exactly one of five kinds (quantity, weight, length, area,
//! volume), each with its own unit vocabulary. This crate owns the
//! [`Measurement`] value, the [`UnitRegistry`] conversion tables and the
//! measurement error taxonomy; everything downstream (valuation, the rebuild
//! engine) speaks these types.

pub mod error;
pub mod kind;
pub mod measurement;
pub mod registry;
pub mod unit;

pub use error::{MeasureError, MeasureResult};
pub use kind::MeasurementKind;
pub use measurement::Measurement;
pub use registry::UnitRegistry;
pub use unit::UnitOfMeasure;
