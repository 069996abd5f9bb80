//! In-memory store implementations.
//!
//! Intended for tests/dev. Not optimized for performance.

use std::collections::HashMap;
use std::sync::RwLock;

use rust_decimal::Decimal;

use makerstock_catalog::{ComponentEdge, Item};
use makerstock_core::{Entity, ItemId};
use makerstock_purchasing::PurchaseLine;
use makerstock_sales::SaleLine;

use crate::error::{StoreError, StoreResult};
use crate::traits::{CatalogStore, PurchaseStore, SaleStore};

/// In-memory catalog holding items and the derived edge set.
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    items: RwLock<HashMap<ItemId, Item>>,
    edges: RwLock<Vec<ComponentEdge>>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an item (catalog-management stand-in for tests).
    pub fn insert_item(&self, item: Item) -> StoreResult<()> {
        let mut items = self
            .items
            .write()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        items.insert(item.id(), item);
        Ok(())
    }
}

impl CatalogStore for InMemoryCatalogStore {
    fn list_items(&self) -> StoreResult<Vec<Item>> {
        let items = self
            .items
            .read()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        Ok(items.values().cloned().collect())
    }

    fn get_item(&self, item_id: ItemId) -> StoreResult<Option<Item>> {
        let items = self
            .items
            .read()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        Ok(items.get(&item_id).cloned())
    }

    fn update_derived(
        &self,
        item_id: ItemId,
        quantity_on_hand: Decimal,
        cost: Decimal,
    ) -> StoreResult<()> {
        let mut items = self
            .items
            .write()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        let item = items
            .get_mut(&item_id)
            .ok_or(StoreError::MissingItem(item_id))?;
        item.apply_derived(quantity_on_hand, cost);
        Ok(())
    }

    fn replace_component_edges(&self, edges: Vec<ComponentEdge>) -> StoreResult<()> {
        let mut stored = self
            .edges
            .write()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        *stored = edges;
        Ok(())
    }

    fn component_edges(&self) -> StoreResult<Vec<ComponentEdge>> {
        let stored = self
            .edges
            .read()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        Ok(stored.clone())
    }
}

/// In-memory purchase history.
#[derive(Debug, Default)]
pub struct InMemoryPurchaseStore {
    lines: RwLock<Vec<PurchaseLine>>,
}

impl InMemoryPurchaseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&self, line: PurchaseLine) -> StoreResult<()> {
        let mut lines = self
            .lines
            .write()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        lines.push(line);
        Ok(())
    }
}

impl PurchaseStore for InMemoryPurchaseStore {
    fn list_lines(&self) -> StoreResult<Vec<PurchaseLine>> {
        let lines = self
            .lines
            .read()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        Ok(lines.clone())
    }
}

/// In-memory sale history.
#[derive(Debug, Default)]
pub struct InMemorySaleStore {
    lines: RwLock<Vec<SaleLine>>,
}

impl InMemorySaleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&self, line: SaleLine) -> StoreResult<()> {
        let mut lines = self
            .lines
            .write()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        lines.push(line);
        Ok(())
    }
}

impl SaleStore for InMemorySaleStore {
    fn list_lines(&self) -> StoreResult<Vec<SaleLine>> {
        let lines = self
            .lines
            .read()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        Ok(lines.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Utc;
    use makerstock_catalog::{ComponentSpec, ItemType, PriceType};
    use makerstock_measure::{Measurement, MeasurementKind, UnitOfMeasure};
    use makerstock_purchasing::PurchaseStatus;
    use rust_decimal_macros::dec;

    use super::*;

    fn test_item(name: &str) -> Item {
        Item::new(
            ItemId::new(),
            name,
            ItemType::Product,
            MeasurementKind::Quantity,
            UnitOfMeasure::Each,
            PriceType::Each,
        )
        .unwrap()
    }

    #[test]
    fn inserted_items_come_back_from_list_and_get() {
        let store = InMemoryCatalogStore::new();
        let item = test_item("Oak tray");
        let item_id = item.id();
        store.insert_item(item).unwrap();

        assert_eq!(store.list_items().unwrap().len(), 1);
        let fetched = store.get_item(item_id).unwrap().unwrap();
        assert_eq!(fetched.name(), "Oak tray");
        assert!(store.get_item(ItemId::new()).unwrap().is_none());
    }

    #[test]
    fn update_derived_touches_only_the_derived_fields() {
        let store = InMemoryCatalogStore::new();
        let item = test_item("Oak tray")
            .with_stock(dec!(1), dec!(1), dec!(24.99))
            .unwrap();
        let item_id = item.id();
        store.insert_item(item).unwrap();

        store.update_derived(item_id, dec!(7), dec!(2.50)).unwrap();

        let updated = store.get_item(item_id).unwrap().unwrap();
        assert_eq!(updated.quantity_on_hand(), dec!(7));
        assert_eq!(updated.cost(), dec!(2.50));
        assert_eq!(updated.price(), dec!(24.99));
    }

    #[test]
    fn update_derived_on_an_unknown_item_fails() {
        let store = InMemoryCatalogStore::new();
        let missing = ItemId::new();
        let err = store.update_derived(missing, dec!(1), dec!(1)).unwrap_err();
        assert_eq!(err, StoreError::MissingItem(missing));
    }

    #[test]
    fn replace_component_edges_is_a_full_swap() {
        let store = InMemoryCatalogStore::new();
        let first = ComponentEdge::new(ItemId::new(), &ComponentSpec::new(ItemId::new(), dec!(1)));
        let second = ComponentEdge::new(ItemId::new(), &ComponentSpec::new(ItemId::new(), dec!(2)));

        store.replace_component_edges(vec![first]).unwrap();
        store.replace_component_edges(vec![second.clone()]).unwrap();

        assert_eq!(store.component_edges().unwrap(), vec![second]);
    }

    #[test]
    fn stores_work_through_arc_handles() {
        let store = Arc::new(InMemoryPurchaseStore::new());
        store
            .push_line(PurchaseLine::new(
                makerstock_core::PurchaseLineId::new(),
                ItemId::new(),
                dec!(2),
                Measurement::count(dec!(2)),
                dec!(3),
                dec!(6),
                PurchaseStatus::Received,
                Utc::now(),
            ))
            .unwrap();

        fn count_lines<S: PurchaseStore>(store: &S) -> usize {
            store.list_lines().unwrap().len()
        }
        assert_eq!(count_lines(&store), 1);
    }
}
