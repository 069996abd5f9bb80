//! The catalog item record and its type/pricing enums.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use makerstock_core::{DomainError, DomainResult, Entity, ItemId};
use makerstock_measure::{MeasurementKind, UnitOfMeasure};

use crate::component::ComponentSpec;

/// Role of an item in the composition graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    /// Sold composite; may declare components.
    Product,
    /// Consumed by products; a valid component target.
    Material,
    /// Both sold and consumed.
    Both,
}

/// How a unit value on a line is charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceType {
    /// Per discrete count, whatever the tracked magnitude is.
    Each,
    PerWeightUnit,
    PerLengthUnit,
    PerAreaUnit,
    PerVolumeUnit,
}

impl PriceType {
    /// Kind the unit value is charged against, `None` for discrete pricing.
    pub fn measured_kind(self) -> Option<MeasurementKind> {
        match self {
            PriceType::Each => None,
            PriceType::PerWeightUnit => Some(MeasurementKind::Weight),
            PriceType::PerLengthUnit => Some(MeasurementKind::Length),
            PriceType::PerAreaUnit => Some(MeasurementKind::Area),
            PriceType::PerVolumeUnit => Some(MeasurementKind::Volume),
        }
    }

    /// Whether this price type can be used by an item tracked in `kind`.
    ///
    /// `each` works for any kind (N packages each weighing W); per-unit
    /// pricing must match the tracked dimension or line totals would multiply
    /// across dimensions.
    pub fn compatible_with(self, kind: MeasurementKind) -> bool {
        self.measured_kind().is_none_or(|measured| measured == kind)
    }
}

impl core::fmt::Display for PriceType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let token = match self {
            PriceType::Each => "each",
            PriceType::PerWeightUnit => "per_weight_unit",
            PriceType::PerLengthUnit => "per_length_unit",
            PriceType::PerAreaUnit => "per_area_unit",
            PriceType::PerVolumeUnit => "per_volume_unit",
        };
        f.write_str(token)
    }
}

/// A catalog item.
///
/// Stock is tracked in exactly one measurement kind, carried by `unit`.
/// `quantity_on_hand` and `cost` are derived from transaction history and
/// only ever written through [`Item::apply_derived`]; `price` is operator
/// data and is never derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    item_type: ItemType,
    unit: UnitOfMeasure,
    quantity_on_hand: Decimal,
    cost: Decimal,
    price: Decimal,
    price_type: PriceType,
    components: Vec<ComponentSpec>,
}

impl Item {
    /// Create an item with zero stock and no components.
    ///
    /// `kind` and `unit` arrive as separate fields from catalog storage; the
    /// pair is validated here so no constructed item can disagree with its
    /// own unit.
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        item_type: ItemType,
        kind: MeasurementKind,
        unit: UnitOfMeasure,
        price_type: PriceType,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("item name must not be empty"));
        }
        if unit.kind() != kind {
            return Err(DomainError::invariant(format!(
                "unit {unit} is not valid for {kind} items"
            )));
        }
        if !price_type.compatible_with(kind) {
            return Err(DomainError::invariant(format!(
                "price type {price_type} is not valid for {kind} items"
            )));
        }
        Ok(Self {
            id,
            name,
            item_type,
            unit,
            quantity_on_hand: Decimal::ZERO,
            cost: Decimal::ZERO,
            price: Decimal::ZERO,
            price_type,
            components: Vec::new(),
        })
    }

    /// Set stored stock state (ingestion of an existing catalog row).
    pub fn with_stock(
        mut self,
        quantity_on_hand: Decimal,
        cost: Decimal,
        price: Decimal,
    ) -> DomainResult<Self> {
        if cost < Decimal::ZERO {
            return Err(DomainError::validation("item cost must not be negative"));
        }
        if price < Decimal::ZERO {
            return Err(DomainError::validation("item price must not be negative"));
        }
        // Oversold stock is a legal recorded state, so no sign check here.
        self.quantity_on_hand = quantity_on_hand;
        self.cost = cost;
        self.price = price;
        Ok(self)
    }

    pub fn with_components(mut self, components: Vec<ComponentSpec>) -> Self {
        self.components = components;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn item_type(&self) -> ItemType {
        self.item_type
    }

    pub fn kind(&self) -> MeasurementKind {
        self.unit.kind()
    }

    pub fn unit(&self) -> UnitOfMeasure {
        self.unit
    }

    pub fn quantity_on_hand(&self) -> Decimal {
        self.quantity_on_hand
    }

    pub fn cost(&self) -> Decimal {
        self.cost
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn price_type(&self) -> PriceType {
        self.price_type
    }

    pub fn components(&self) -> &[ComponentSpec] {
        &self.components
    }

    pub fn is_product(&self) -> bool {
        matches!(self.item_type, ItemType::Product | ItemType::Both)
    }

    pub fn is_material(&self) -> bool {
        matches!(self.item_type, ItemType::Material | ItemType::Both)
    }

    /// Write the two derived fields.
    ///
    /// Reconciliation is the only caller; nothing else in the system mutates
    /// `quantity_on_hand` or `cost`, and `price` is deliberately not a
    /// parameter.
    pub fn apply_derived(&mut self, quantity_on_hand: Decimal, cost: Decimal) {
        self.quantity_on_hand = quantity_on_hand;
        self.cost = cost;
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> ItemId {
        self.id
    }
}
