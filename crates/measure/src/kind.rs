//! The five measurement kinds stock can be tracked in.

use serde::{Deserialize, Serialize};

use crate::unit::UnitOfMeasure;

/// The single dimension by which an item's stock moves.
///
/// Exactly one kind is active per item; purchase and sale lines for that item
/// carry measurements of the same kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementKind {
    Quantity,
    Weight,
    Length,
    Area,
    Volume,
}

impl MeasurementKind {
    pub const ALL: [MeasurementKind; 5] = [
        MeasurementKind::Quantity,
        MeasurementKind::Weight,
        MeasurementKind::Length,
        MeasurementKind::Area,
        MeasurementKind::Volume,
    ];

    /// Canonical unit conversion factors are expressed against.
    pub fn base_unit(self) -> UnitOfMeasure {
        match self {
            MeasurementKind::Quantity => UnitOfMeasure::Each,
            MeasurementKind::Weight => UnitOfMeasure::Gram,
            MeasurementKind::Length => UnitOfMeasure::Millimeter,
            MeasurementKind::Area => UnitOfMeasure::SquareMeter,
            MeasurementKind::Volume => UnitOfMeasure::Liter,
        }
    }

    /// Unit vocabulary registered under this kind.
    pub fn units(self) -> &'static [UnitOfMeasure] {
        match self {
            MeasurementKind::Quantity => &[UnitOfMeasure::Each],
            MeasurementKind::Weight => &[
                UnitOfMeasure::Ounce,
                UnitOfMeasure::Pound,
                UnitOfMeasure::Gram,
                UnitOfMeasure::Kilogram,
            ],
            MeasurementKind::Length => &[
                UnitOfMeasure::Millimeter,
                UnitOfMeasure::Centimeter,
                UnitOfMeasure::Meter,
                UnitOfMeasure::Inch,
                UnitOfMeasure::Foot,
                UnitOfMeasure::Yard,
            ],
            MeasurementKind::Area => &[
                UnitOfMeasure::SquareFoot,
                UnitOfMeasure::SquareMeter,
                UnitOfMeasure::SquareYard,
                UnitOfMeasure::Acre,
                UnitOfMeasure::Hectare,
            ],
            MeasurementKind::Volume => &[
                UnitOfMeasure::Milliliter,
                UnitOfMeasure::Liter,
                UnitOfMeasure::Gallon,
                UnitOfMeasure::FluidOunce,
                UnitOfMeasure::CubicFoot,
                UnitOfMeasure::CubicMeter,
            ],
        }
    }
}

impl core::fmt::Display for MeasurementKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            MeasurementKind::Quantity => "quantity",
            MeasurementKind::Weight => "weight",
            MeasurementKind::Length => "length",
            MeasurementKind::Area => "area",
            MeasurementKind::Volume => "volume",
        };
        f.write_str(name)
    }
}
