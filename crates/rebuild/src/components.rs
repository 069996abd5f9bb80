//! Product→material composition graph rebuild.

use std::collections::{BTreeSet, HashMap};

use makerstock_catalog::{ComponentEdge, Item};
use makerstock_core::{Entity, ItemId};

use crate::error::RebuildError;

/// One broken component declaration, keyed by the product that declares it.
///
/// The product is what the operator fixes; the error message names the
/// offending material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentIssue {
    pub product_id: ItemId,
    pub error: RebuildError,
}

/// Regenerate the full edge set from the catalog's declared component lists.
///
/// Every product-type (or dual-type) item contributes one edge per declared
/// component whose target resolves to a material. A broken declaration (the
/// material is missing, or the target is not a material) becomes an issue but
/// never suppresses the product's other, valid edges, and never aborts the
/// scan. Identical declarations collapse into one edge.
pub fn build_edges(catalog: &[Item]) -> (BTreeSet<ComponentEdge>, Vec<ComponentIssue>) {
    let by_id: HashMap<ItemId, &Item> = catalog.iter().map(|item| (item.id(), item)).collect();

    let mut edges = BTreeSet::new();
    let mut issues = Vec::new();

    for product in catalog.iter().filter(|item| item.is_product()) {
        for spec in product.components() {
            match by_id.get(&spec.material_id) {
                Some(target) if target.is_material() => {
                    edges.insert(ComponentEdge::new(product.id(), spec));
                }
                Some(_) => issues.push(ComponentIssue {
                    product_id: product.id(),
                    error: RebuildError::dangling(spec.material_id, "not a material"),
                }),
                None => issues.push(ComponentIssue {
                    product_id: product.id(),
                    error: RebuildError::dangling(spec.material_id, "missing from the catalog"),
                }),
            }
        }
    }

    (edges, issues)
}
