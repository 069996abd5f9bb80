//! Measurement error model.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::kind::MeasurementKind;
use crate::unit::UnitOfMeasure;

/// Result type for measurement and conversion operations.
pub type MeasureResult<T> = Result<T, MeasureError>;

/// Errors raised when measurements are validated, converted or totalled.
///
/// Every variant is a deterministic data fault. During a rebuild they are
/// downgraded to per-item report details; they never abort a batch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeasureError {
    /// The unit is not registered under the measurement kind in play.
    #[error("unit {unit} is not valid for {kind} measurements")]
    UnitMismatch {
        kind: MeasurementKind,
        unit: UnitOfMeasure,
    },

    /// A stock-moving line must carry a strictly positive magnitude.
    #[error("magnitude {magnitude} is not a valid stock movement")]
    InvalidMeasurement { magnitude: Decimal },

    /// A conversion or total left the representable decimal range.
    #[error("{context} overflow")]
    Overflow { context: &'static str },
}

impl MeasureError {
    pub fn unit_mismatch(kind: MeasurementKind, unit: UnitOfMeasure) -> Self {
        Self::UnitMismatch { kind, unit }
    }

    pub fn invalid_measurement(magnitude: Decimal) -> Self {
        Self::InvalidMeasurement { magnitude }
    }

    pub fn overflow(context: &'static str) -> Self {
        Self::Overflow { context }
    }
}
