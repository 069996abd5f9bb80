//! Pure per-item state derivation.
//!
//! Everything here is a deterministic function of one item and its line
//! history. No IO, no logging; the service layer owns orchestration and
//! reporting so this logic stays trivially testable.

use rust_decimal::Decimal;

use makerstock_catalog::Item;
use makerstock_core::{Entity, PurchaseLineId, SaleLineId};
use makerstock_measure::{MeasureError, UnitRegistry};
use makerstock_purchasing::PurchaseLine;
use makerstock_sales::SaleLine;
use makerstock_valuation::{Discount, line_total};

use crate::error::RebuildError;

/// The line whose stored total disagrees with its recomputed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRef {
    Purchase(PurchaseLineId),
    Sale(SaleLineId),
}

/// A stored line total that no longer matches what the valuator computes.
///
/// Stored totals belong to the order-entry collaborators; the engine reports
/// the disagreement and moves on, it never rewrites them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalDrift {
    pub line: LineRef,
    pub stored: Decimal,
    pub recomputed: Decimal,
}

/// Outcome of replaying one item's contributing history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedState {
    /// Net stock in the item's own unit. May be negative (oversold).
    pub quantity_on_hand: Decimal,
    /// Unit cost of the chronologically last received purchase; `None` when
    /// no received purchase exists, meaning the stored cost stands.
    pub cost: Option<Decimal>,
    /// Stored totals that disagree with their recomputed values.
    pub drifts: Vec<TotalDrift>,
}

impl DerivedState {
    /// Cost to persist, carrying the stored value forward when no received
    /// purchase history exists.
    pub fn resolved_cost(&self, stored: Decimal) -> Decimal {
        self.cost.unwrap_or(stored)
    }
}

/// Replay one item's history into derived state.
///
/// Lines may arrive in any status and any order: only received purchases and
/// completed sales contribute, and contributing lines are replayed ascending
/// by transaction date, ties broken on line id (UUIDv7, time-ordered) so the
/// "last received purchase" is deterministic. Each movement is validated
/// strictly positive and converted into the item's own unit before summing,
/// and each stored total is cross-checked through the valuator.
///
/// The first unusable contributing line fails the whole item; the caller
/// records the failure and continues with its next item.
pub fn reconcile(
    item: &Item,
    purchases: &[PurchaseLine],
    sales: &[SaleLine],
    units: &UnitRegistry,
) -> Result<DerivedState, RebuildError> {
    let mut purchases: Vec<&PurchaseLine> =
        purchases.iter().filter(|line| line.contributes()).collect();
    purchases.sort_by_key(|line| (line.occurred_at, line.id()));

    let mut sales: Vec<&SaleLine> = sales.iter().filter(|line| line.contributes()).collect();
    sales.sort_by_key(|line| (line.occurred_at, line.id()));

    let mut quantity_on_hand = Decimal::ZERO;
    let mut cost = None;
    let mut drifts = Vec::new();

    for line in purchases {
        line.measurement.positive_magnitude()?;
        let moved = units.measure_in(&line.measurement, item.unit())?;
        quantity_on_hand = quantity_on_hand
            .checked_add(moved.magnitude())
            .ok_or(MeasureError::overflow("stock total"))?;
        // Ascending replay, so the last assignment is the latest receipt.
        cost = Some(line.unit_cost);

        let discount = Discount::new(line.discount_percentage, line.discount_amount);
        let recomputed = line_total(
            line.unit_cost,
            item.price_type(),
            line.quantity,
            &line.measurement,
            discount,
        )?;
        if recomputed != line.total_cost {
            drifts.push(TotalDrift {
                line: LineRef::Purchase(line.id()),
                stored: line.total_cost,
                recomputed,
            });
        }
    }

    for line in sales {
        line.measurement.positive_magnitude()?;
        let moved = units.measure_in(&line.measurement, item.unit())?;
        quantity_on_hand = quantity_on_hand
            .checked_sub(moved.magnitude())
            .ok_or(MeasureError::overflow("stock total"))?;

        let recomputed = line_total(
            line.unit_price_at_sale,
            item.price_type(),
            line.quantity,
            &line.measurement,
            Discount::NONE,
        )?;
        if recomputed != line.total {
            drifts.push(TotalDrift {
                line: LineRef::Sale(line.id()),
                stored: line.total,
                recomputed,
            });
        }
    }

    Ok(DerivedState {
        quantity_on_hand,
        cost,
        drifts,
    })
}
