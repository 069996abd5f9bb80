//! Batch orchestration for the two operator rebuild commands.
//!
//! `RebuildService` composes the three store traits and runs each command as
//! one pipeline:
//!
//! ```text
//! rebuild_inventory
//!   1. Snapshot catalog + purchase lines + sale lines (fatal on failure)
//!   2. Group contributing lines per item
//!   3. Replay each item (pure derivation), write back only real changes
//!   4. Report orphaned references from history
//!   5. Return RebuildReport
//!
//! rebuild_relationships
//!   1. Snapshot catalog (fatal on failure)
//!   2. Regenerate the product→material edge set
//!   3. Replace the stored edge set wholesale
//!   4. Return RebuildReport
//! ```
//!
//! Per-item failures never abort a batch; they become report details. Only
//! the snapshot reads and the wholesale edge write are fatal, because neither
//! can be pinned on a single item.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use tracing::{debug, info, warn};

use makerstock_catalog::Item;
use makerstock_core::{Entity, ItemId};
use makerstock_measure::UnitRegistry;
use makerstock_purchasing::PurchaseLine;
use makerstock_sales::SaleLine;
use makerstock_store::{CatalogStore, PurchaseStore, SaleStore, StoreError};

use crate::components::build_edges;
use crate::error::RebuildError;
use crate::reconciler::reconcile;
use crate::report::{RebuildDetail, RebuildReport};

/// The operator-facing rebuild commands.
///
/// Stateless between invocations: every run re-derives from the stores it
/// was constructed over, never from a previous report. Hosts typically build
/// one service at startup and call it from whatever surface triggers
/// maintenance actions.
#[derive(Debug)]
pub struct RebuildService<C, P, S> {
    catalog: C,
    purchases: P,
    sales: S,
    units: Arc<UnitRegistry>,
}

impl<C, P, S> RebuildService<C, P, S> {
    /// Service over the standard unit registry.
    pub fn new(catalog: C, purchases: P, sales: S) -> Self {
        Self {
            catalog,
            purchases,
            sales,
            units: Arc::new(UnitRegistry::standard()),
        }
    }

    /// Share a registry the host already built at startup.
    pub fn with_registry(mut self, units: Arc<UnitRegistry>) -> Self {
        self.units = units;
        self
    }
}

impl<C, P, S> RebuildService<C, P, S>
where
    C: CatalogStore,
    P: PurchaseStore,
    S: SaleStore,
{
    /// Re-derive `quantity_on_hand` and `cost` for every item from history.
    ///
    /// Returns `Err` only when one of the three snapshot reads fails; every
    /// other failure is downgraded to a report detail for its item.
    pub fn rebuild_inventory(&self) -> Result<RebuildReport, StoreError> {
        // 1) One consistent snapshot of all three stores. Sorted by id so the
        //    report's detail order is stable across runs.
        let mut items = self.catalog.list_items()?;
        items.sort_by_key(|item| item.id());
        let purchase_lines = self.purchases.list_lines()?;
        let sale_lines = self.sales.list_lines()?;

        info!(
            items = items.len(),
            purchase_lines = purchase_lines.len(),
            sale_lines = sale_lines.len(),
            "inventory rebuild started"
        );

        // 2) Group history per item.
        let mut purchases_by_item: HashMap<ItemId, Vec<PurchaseLine>> = HashMap::new();
        for line in purchase_lines {
            purchases_by_item.entry(line.item_id).or_default().push(line);
        }
        let mut sales_by_item: HashMap<ItemId, Vec<SaleLine>> = HashMap::new();
        for line in sale_lines {
            sales_by_item.entry(line.item_id).or_default().push(line);
        }

        // 3) Item ids that contributing history references but the catalog
        //    does not contain.
        let known: BTreeSet<ItemId> = items.iter().map(|item| item.id()).collect();
        let orphaned: BTreeSet<ItemId> = purchases_by_item
            .iter()
            .filter(|(_, lines)| lines.iter().any(|line| line.contributes()))
            .map(|(item_id, _)| *item_id)
            .chain(
                sales_by_item
                    .iter()
                    .filter(|(_, lines)| lines.iter().any(|line| line.contributes()))
                    .map(|(item_id, _)| *item_id),
            )
            .filter(|item_id| !known.contains(item_id))
            .collect();

        let mut processed = 0;
        let mut updated = 0;
        let mut details = Vec::new();

        // 4) Per-item replay. A failed item is recorded and skipped, never
        //    allowed to abort the batch.
        for item in &items {
            processed += 1;
            let item_purchases = purchases_by_item
                .get(&item.id())
                .map(Vec::as_slice)
                .unwrap_or_default();
            let item_sales = sales_by_item
                .get(&item.id())
                .map(Vec::as_slice)
                .unwrap_or_default();

            match self.reconcile_one(item, item_purchases, item_sales) {
                Ok(true) => updated += 1,
                Ok(false) => {}
                Err(error) => {
                    warn!(item = %item.id(), error = %error, "item reconciliation failed");
                    details.push(RebuildDetail::new(item.id(), error.to_string()));
                }
            }
        }

        // 5) Orphaned references count as processed but nothing is written.
        for item_id in orphaned {
            processed += 1;
            let error = RebuildError::unknown_item(item_id);
            warn!(item = %item_id, error = %error, "item reconciliation failed");
            details.push(RebuildDetail::new(item_id, error.to_string()));
        }

        let report = RebuildReport::new(processed, updated, details);
        info!(
            processed = report.processed,
            updated = report.updated,
            errors = report.errors,
            "inventory rebuild finished"
        );
        Ok(report)
    }

    /// Replay one item; `Ok(true)` means stored values changed and were written.
    fn reconcile_one(
        &self,
        item: &Item,
        purchases: &[PurchaseLine],
        sales: &[SaleLine],
    ) -> Result<bool, RebuildError> {
        let derived = reconcile(item, purchases, sales, &self.units)?;

        for drift in &derived.drifts {
            warn!(
                item = %item.id(),
                line = ?drift.line,
                stored = %drift.stored,
                recomputed = %drift.recomputed,
                "stored line total drifts from its recomputed value"
            );
        }

        let quantity_on_hand = derived.quantity_on_hand;
        let cost = derived.resolved_cost(item.cost());
        if quantity_on_hand == item.quantity_on_hand() && cost == item.cost() {
            debug!(item = %item.id(), "item already consistent");
            return Ok(false);
        }

        self.catalog.update_derived(item.id(), quantity_on_hand, cost)?;
        debug!(
            item = %item.id(),
            quantity_on_hand = %quantity_on_hand,
            cost = %cost,
            "item updated"
        );
        Ok(true)
    }

    /// Regenerate the product→material edge set from declared components.
    ///
    /// The stored edge set is replaced wholesale; broken declarations become
    /// report details keyed by the declaring product.
    pub fn rebuild_relationships(&self) -> Result<RebuildReport, StoreError> {
        // 1) Catalog snapshot, sorted for stable issue order.
        let mut items = self.catalog.list_items()?;
        items.sort_by_key(|item| item.id());
        info!(items = items.len(), "relationship rebuild started");

        // 2) Regenerate.
        let (edges, issues) = build_edges(&items);
        let contributing: BTreeSet<ItemId> = edges.iter().map(|edge| edge.product_id).collect();

        let details: Vec<RebuildDetail> = issues
            .iter()
            .map(|issue| {
                warn!(
                    item = %issue.product_id,
                    error = %issue.error,
                    "component declaration skipped"
                );
                RebuildDetail::new(issue.product_id, issue.error.to_string())
            })
            .collect();

        // 3) Full replacement; a failed write fails the command since it
        //    cannot be pinned on one item.
        self.catalog
            .replace_component_edges(edges.into_iter().collect())?;

        let report = RebuildReport::new(items.len(), contributing.len(), details);
        info!(
            processed = report.processed,
            updated = report.updated,
            errors = report.errors,
            "relationship rebuild finished"
        );
        Ok(report)
    }
}
