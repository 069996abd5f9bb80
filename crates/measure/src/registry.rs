//! Immutable unit-conversion registry.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{MeasureError, MeasureResult};
use crate::kind::MeasurementKind;
use crate::measurement::Measurement;
use crate::unit::UnitOfMeasure;

/// Conversion-factor table, built once and shared by reference.
///
/// Every factor maps a unit onto its kind's base unit (g, mm, sqm, l, each).
/// Conversion between two units of one kind goes through that base:
/// `value × factor(from) ÷ factor(to)`. The registry never changes after
/// construction; hosts build one [`UnitRegistry::standard`] at startup and
/// hand the engine a reference.
#[derive(Debug, Clone)]
pub struct UnitRegistry {
    factors: HashMap<UnitOfMeasure, Decimal>,
}

/// Factor from `unit` to its kind's base unit. Exact decimal definitions:
/// avoirdupois weight, international yard and pound, US liquid volume.
fn standard_factor(unit: UnitOfMeasure) -> Decimal {
    match unit {
        UnitOfMeasure::Each => Decimal::ONE,

        UnitOfMeasure::Ounce => dec!(28.349523125),
        UnitOfMeasure::Pound => dec!(453.59237),
        UnitOfMeasure::Gram => Decimal::ONE,
        UnitOfMeasure::Kilogram => dec!(1000),

        UnitOfMeasure::Millimeter => Decimal::ONE,
        UnitOfMeasure::Centimeter => dec!(10),
        UnitOfMeasure::Meter => dec!(1000),
        UnitOfMeasure::Inch => dec!(25.4),
        UnitOfMeasure::Foot => dec!(304.8),
        UnitOfMeasure::Yard => dec!(914.4),

        UnitOfMeasure::SquareFoot => dec!(0.09290304),
        UnitOfMeasure::SquareMeter => Decimal::ONE,
        UnitOfMeasure::SquareYard => dec!(0.83612736),
        UnitOfMeasure::Acre => dec!(4046.8564224),
        UnitOfMeasure::Hectare => dec!(10000),

        UnitOfMeasure::Milliliter => dec!(0.001),
        UnitOfMeasure::Liter => Decimal::ONE,
        UnitOfMeasure::Gallon => dec!(3.785411784),
        UnitOfMeasure::FluidOunce => dec!(0.0295735295625),
        UnitOfMeasure::CubicFoot => dec!(28.316846592),
        UnitOfMeasure::CubicMeter => dec!(1000),
    }
}

impl UnitRegistry {
    /// Registry over the full standard unit vocabulary.
    pub fn standard() -> Self {
        let factors = UnitOfMeasure::ALL
            .into_iter()
            .map(|unit| (unit, standard_factor(unit)))
            .collect();
        Self { factors }
    }

    /// Factor from `unit` to the base unit of `kind`.
    ///
    /// Fails with [`MeasureError::UnitMismatch`] when the unit is not
    /// registered under that kind.
    pub fn factor(&self, kind: MeasurementKind, unit: UnitOfMeasure) -> MeasureResult<Decimal> {
        if unit.kind() != kind {
            return Err(MeasureError::unit_mismatch(kind, unit));
        }
        self.factors
            .get(&unit)
            .copied()
            .ok_or_else(|| MeasureError::unit_mismatch(kind, unit))
    }

    /// Convert `value` from one unit of `kind` to another.
    ///
    /// Fails with [`MeasureError::Overflow`] when the result leaves the
    /// decimal range.
    pub fn convert(
        &self,
        value: Decimal,
        from: UnitOfMeasure,
        to: UnitOfMeasure,
        kind: MeasurementKind,
    ) -> MeasureResult<Decimal> {
        let from_factor = self.factor(kind, from)?;
        let to_factor = self.factor(kind, to)?;
        if from == to {
            return Ok(value);
        }
        value
            .checked_mul(from_factor)
            .and_then(|in_base| in_base.checked_div(to_factor))
            .ok_or(MeasureError::overflow("unit conversion"))
    }

    /// Re-express a whole measurement in a sibling unit of the same kind.
    pub fn measure_in(
        &self,
        measurement: &Measurement,
        to: UnitOfMeasure,
    ) -> MeasureResult<Measurement> {
        let converted = self.convert(
            measurement.magnitude(),
            measurement.unit(),
            to,
            measurement.kind(),
        )?;
        Ok(Measurement::new(converted, to))
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
