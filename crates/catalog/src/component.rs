//! Declared components and the derived composition graph edge.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use makerstock_core::{ItemId, ValueObject};

/// One declared component of a composite product.
///
/// Raw catalog data references materials in more than one shape (bare id,
/// inline snapshot); ingestion resolves them all to this form before the
/// engine ever sees them. The engine never branches on the original shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSpec {
    pub material_id: ItemId,
    /// How many of the material one unit of the product consumes.
    pub quantity_per_unit: Decimal,
    /// Material weight consumed per product unit, where the source tracked it.
    pub weight_per_unit: Option<Decimal>,
}

impl ComponentSpec {
    pub fn new(material_id: ItemId, quantity_per_unit: Decimal) -> Self {
        Self {
            material_id,
            quantity_per_unit,
            weight_per_unit: None,
        }
    }

    pub fn with_weight(mut self, weight_per_unit: Decimal) -> Self {
        self.weight_per_unit = Some(weight_per_unit);
        self
    }
}

impl ValueObject for ComponentSpec {}

/// Derived product→material association.
///
/// Regenerated wholesale by the relationship rebuild; never hand-edited and
/// never merged incrementally. Ordering is (product, material) so regenerated
/// sets compare deterministically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentEdge {
    pub product_id: ItemId,
    pub material_id: ItemId,
    pub quantity_per_unit: Decimal,
    pub weight_per_unit: Option<Decimal>,
}

impl ComponentEdge {
    pub fn new(product_id: ItemId, spec: &ComponentSpec) -> Self {
        Self {
            product_id,
            material_id: spec.material_id,
            quantity_per_unit: spec.quantity_per_unit,
            weight_per_unit: spec.weight_per_unit,
        }
    }
}

impl ValueObject for ComponentEdge {}
