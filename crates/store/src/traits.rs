//! Collaborator store traits.
//!
//! The engine reads catalog, purchase and sale records through these traits
//! and writes back through exactly two catalog methods. Hosts implement them
//! over whatever persistence they run; the in-memory implementations in this
//! crate serve tests and development.

use std::sync::Arc;

use rust_decimal::Decimal;

use makerstock_catalog::{ComponentEdge, Item};
use makerstock_core::ItemId;
use makerstock_purchasing::PurchaseLine;
use makerstock_sales::SaleLine;

use crate::error::StoreResult;

/// Catalog access: the engine's one read-and-write collaborator.
///
/// `list_items` is the snapshot a rebuild works from; an error here aborts
/// the whole run. The two write methods are deliberately narrow: derived
/// fields per item, edge set wholesale. Nothing else on an item is writable
/// from the engine's side.
pub trait CatalogStore: Send + Sync {
    /// Snapshot of every catalog item.
    fn list_items(&self) -> StoreResult<Vec<Item>>;

    /// Single item lookup.
    fn get_item(&self, item_id: ItemId) -> StoreResult<Option<Item>>;

    /// Write back the two derived fields for one item.
    fn update_derived(
        &self,
        item_id: ItemId,
        quantity_on_hand: Decimal,
        cost: Decimal,
    ) -> StoreResult<()>;

    /// Replace the derived composition edge set wholesale. Never a merge.
    fn replace_component_edges(&self, edges: Vec<ComponentEdge>) -> StoreResult<()>;

    /// Current derived edge set.
    fn component_edges(&self) -> StoreResult<Vec<ComponentEdge>>;
}

/// Purchase history access. Lines come back with their owning order's status;
/// the engine does its own status filtering.
pub trait PurchaseStore: Send + Sync {
    /// Snapshot of every purchase line, any status.
    fn list_lines(&self) -> StoreResult<Vec<PurchaseLine>>;
}

/// Sale history access, mirroring [`PurchaseStore`].
pub trait SaleStore: Send + Sync {
    /// Snapshot of every sale line, any status.
    fn list_lines(&self) -> StoreResult<Vec<SaleLine>>;
}

impl<S> CatalogStore for Arc<S>
where
    S: CatalogStore + ?Sized,
{
    fn list_items(&self) -> StoreResult<Vec<Item>> {
        (**self).list_items()
    }

    fn get_item(&self, item_id: ItemId) -> StoreResult<Option<Item>> {
        (**self).get_item(item_id)
    }

    fn update_derived(
        &self,
        item_id: ItemId,
        quantity_on_hand: Decimal,
        cost: Decimal,
    ) -> StoreResult<()> {
        (**self).update_derived(item_id, quantity_on_hand, cost)
    }

    fn replace_component_edges(&self, edges: Vec<ComponentEdge>) -> StoreResult<()> {
        (**self).replace_component_edges(edges)
    }

    fn component_edges(&self) -> StoreResult<Vec<ComponentEdge>> {
        (**self).component_edges()
    }
}

impl<S> PurchaseStore for Arc<S>
where
    S: PurchaseStore + ?Sized,
{
    fn list_lines(&self) -> StoreResult<Vec<PurchaseLine>> {
        (**self).list_lines()
    }
}

impl<S> SaleStore for Arc<S>
where
    S: SaleStore + ?Sized,
{
    fn list_lines(&self) -> StoreResult<Vec<SaleLine>> {
        (**self).list_lines()
    }
}
