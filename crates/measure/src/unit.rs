//! Units of measure and their wire tokens.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use makerstock_core::DomainError;

use crate::kind::MeasurementKind;

/// A concrete unit some magnitude is expressed in.
///
/// The serde names double as the catalog's wire tokens; `Display`/`FromStr`
/// speak the same vocabulary so ingestion code can normalize free-form unit
/// strings once, at the boundary.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitOfMeasure {
    #[serde(rename = "each")]
    Each,
    #[serde(rename = "oz")]
    Ounce,
    #[serde(rename = "lb")]
    Pound,
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "mm")]
    Millimeter,
    #[serde(rename = "cm")]
    Centimeter,
    #[serde(rename = "m")]
    Meter,
    #[serde(rename = "in")]
    Inch,
    #[serde(rename = "ft")]
    Foot,
    #[serde(rename = "yd")]
    Yard,
    #[serde(rename = "sqft")]
    SquareFoot,
    #[serde(rename = "sqm")]
    SquareMeter,
    #[serde(rename = "sqyd")]
    SquareYard,
    #[serde(rename = "acre")]
    Acre,
    #[serde(rename = "ha")]
    Hectare,
    #[serde(rename = "ml")]
    Milliliter,
    #[serde(rename = "l")]
    Liter,
    #[serde(rename = "gal")]
    Gallon,
    #[serde(rename = "floz")]
    FluidOunce,
    #[serde(rename = "cu_ft")]
    CubicFoot,
    #[serde(rename = "cu_m")]
    CubicMeter,
}

impl UnitOfMeasure {
    pub const ALL: [UnitOfMeasure; 22] = [
        UnitOfMeasure::Each,
        UnitOfMeasure::Ounce,
        UnitOfMeasure::Pound,
        UnitOfMeasure::Gram,
        UnitOfMeasure::Kilogram,
        UnitOfMeasure::Millimeter,
        UnitOfMeasure::Centimeter,
        UnitOfMeasure::Meter,
        UnitOfMeasure::Inch,
        UnitOfMeasure::Foot,
        UnitOfMeasure::Yard,
        UnitOfMeasure::SquareFoot,
        UnitOfMeasure::SquareMeter,
        UnitOfMeasure::SquareYard,
        UnitOfMeasure::Acre,
        UnitOfMeasure::Hectare,
        UnitOfMeasure::Milliliter,
        UnitOfMeasure::Liter,
        UnitOfMeasure::Gallon,
        UnitOfMeasure::FluidOunce,
        UnitOfMeasure::CubicFoot,
        UnitOfMeasure::CubicMeter,
    ];

    /// The measurement kind this unit is registered under.
    pub fn kind(self) -> MeasurementKind {
        match self {
            UnitOfMeasure::Each => MeasurementKind::Quantity,
            UnitOfMeasure::Ounce
            | UnitOfMeasure::Pound
            | UnitOfMeasure::Gram
            | UnitOfMeasure::Kilogram => MeasurementKind::Weight,
            UnitOfMeasure::Millimeter
            | UnitOfMeasure::Centimeter
            | UnitOfMeasure::Meter
            | UnitOfMeasure::Inch
            | UnitOfMeasure::Foot
            | UnitOfMeasure::Yard => MeasurementKind::Length,
            UnitOfMeasure::SquareFoot
            | UnitOfMeasure::SquareMeter
            | UnitOfMeasure::SquareYard
            | UnitOfMeasure::Acre
            | UnitOfMeasure::Hectare => MeasurementKind::Area,
            UnitOfMeasure::Milliliter
            | UnitOfMeasure::Liter
            | UnitOfMeasure::Gallon
            | UnitOfMeasure::FluidOunce
            | UnitOfMeasure::CubicFoot
            | UnitOfMeasure::CubicMeter => MeasurementKind::Volume,
        }
    }

    /// Short token used in wire payloads, catalog rows and error messages.
    pub fn symbol(self) -> &'static str {
        match self {
            UnitOfMeasure::Each => "each",
            UnitOfMeasure::Ounce => "oz",
            UnitOfMeasure::Pound => "lb",
            UnitOfMeasure::Gram => "g",
            UnitOfMeasure::Kilogram => "kg",
            UnitOfMeasure::Millimeter => "mm",
            UnitOfMeasure::Centimeter => "cm",
            UnitOfMeasure::Meter => "m",
            UnitOfMeasure::Inch => "in",
            UnitOfMeasure::Foot => "ft",
            UnitOfMeasure::Yard => "yd",
            UnitOfMeasure::SquareFoot => "sqft",
            UnitOfMeasure::SquareMeter => "sqm",
            UnitOfMeasure::SquareYard => "sqyd",
            UnitOfMeasure::Acre => "acre",
            UnitOfMeasure::Hectare => "ha",
            UnitOfMeasure::Milliliter => "ml",
            UnitOfMeasure::Liter => "l",
            UnitOfMeasure::Gallon => "gal",
            UnitOfMeasure::FluidOunce => "floz",
            UnitOfMeasure::CubicFoot => "cu_ft",
            UnitOfMeasure::CubicMeter => "cu_m",
        }
    }
}

impl core::fmt::Display for UnitOfMeasure {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for UnitOfMeasure {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UnitOfMeasure::ALL
            .into_iter()
            .find(|unit| unit.symbol() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown unit: {s}")))
    }
}
