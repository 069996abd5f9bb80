//! The measurement value carried by items and transaction lines.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use makerstock_core::ValueObject;

use crate::error::{MeasureError, MeasureResult};
use crate::kind::MeasurementKind;
use crate::unit::UnitOfMeasure;

/// One magnitude in one unit.
///
/// This is the tagged union that replaces the five parallel per-kind magnitude
/// fields of the raw records: the kind is carried by the unit itself, so a
/// measurement whose unit disagrees with its kind cannot be constructed at
/// all. Lines and items agree on kind exactly when their units do.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    magnitude: Decimal,
    unit: UnitOfMeasure,
}

impl Measurement {
    /// Measurement of `magnitude` in `unit`. The kind is the unit's kind.
    pub fn new(magnitude: Decimal, unit: UnitOfMeasure) -> Self {
        Self { magnitude, unit }
    }

    /// Measurement validated against a claimed kind.
    ///
    /// Ingestion boundaries use this when kind and unit arrive as separate
    /// fields; a unit outside the kind's vocabulary is a [`MeasureError::UnitMismatch`].
    pub fn of_kind(
        kind: MeasurementKind,
        magnitude: Decimal,
        unit: UnitOfMeasure,
    ) -> MeasureResult<Self> {
        if unit.kind() != kind {
            return Err(MeasureError::unit_mismatch(kind, unit));
        }
        Ok(Self { magnitude, unit })
    }

    /// Discrete count measurement (`each` units).
    pub fn count(count: Decimal) -> Self {
        Self {
            magnitude: count,
            unit: UnitOfMeasure::Each,
        }
    }

    pub fn magnitude(&self) -> Decimal {
        self.magnitude
    }

    pub fn unit(&self) -> UnitOfMeasure {
        self.unit
    }

    pub fn kind(&self) -> MeasurementKind {
        self.unit.kind()
    }

    /// Magnitude of a line that moves stock.
    ///
    /// Received purchases and completed sales represent physical stock
    /// entering or leaving; a zero or negative magnitude on such a line is
    /// corrupt data, surfaced as [`MeasureError::InvalidMeasurement`].
    pub fn positive_magnitude(&self) -> MeasureResult<Decimal> {
        if self.magnitude <= Decimal::ZERO {
            return Err(MeasureError::invalid_measurement(self.magnitude));
        }
        Ok(self.magnitude)
    }
}

impl ValueObject for Measurement {}

impl core::fmt::Display for Measurement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.magnitude, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn kind_is_the_units_kind() {
        let m = Measurement::new(dec!(2.5), UnitOfMeasure::Kilogram);
        assert_eq!(m.kind(), MeasurementKind::Weight);
    }

    #[test]
    fn of_kind_rejects_units_outside_the_vocabulary() {
        let err =
            Measurement::of_kind(MeasurementKind::Length, dec!(1), UnitOfMeasure::Gram).unwrap_err();
        assert_eq!(
            err,
            MeasureError::unit_mismatch(MeasurementKind::Length, UnitOfMeasure::Gram)
        );
    }

    #[test]
    fn of_kind_accepts_units_inside_the_vocabulary() {
        let m = Measurement::of_kind(MeasurementKind::Volume, dec!(0.75), UnitOfMeasure::Liter)
            .unwrap();
        assert_eq!(m.magnitude(), dec!(0.75));
        assert_eq!(m.unit(), UnitOfMeasure::Liter);
    }

    #[test]
    fn positive_magnitude_accepts_positive_values() {
        let m = Measurement::count(dec!(3));
        assert_eq!(m.positive_magnitude().unwrap(), dec!(3));
    }

    #[test]
    fn positive_magnitude_rejects_zero_and_negative_values() {
        for magnitude in [dec!(0), dec!(-1.5)] {
            let err = Measurement::new(magnitude, UnitOfMeasure::Meter)
                .positive_magnitude()
                .unwrap_err();
            assert_eq!(err, MeasureError::invalid_measurement(magnitude));
        }
    }

    #[test]
    fn display_reads_magnitude_then_symbol() {
        let m = Measurement::new(dec!(12), UnitOfMeasure::SquareFoot);
        assert_eq!(m.to_string(), "12 sqft");
    }
}
