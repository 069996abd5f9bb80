use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use makerstock_core::{Entity, ItemId, SaleLineId};
use makerstock_measure::Measurement;

/// Sale status lifecycle.
///
/// Only `completed` means stock has physically left inventory. Refunds are
/// deliberately not contributions: a refunded sale re-enters stock through a
/// catalog adjustment by the order-entry collaborators, not through history
/// replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaleStatus {
    Pending,
    Processing,
    Completed,
    Refunded,
    PartiallyRefunded,
    Cancelled,
}

impl SaleStatus {
    pub const ALL: [SaleStatus; 6] = [
        SaleStatus::Pending,
        SaleStatus::Processing,
        SaleStatus::Completed,
        SaleStatus::Refunded,
        SaleStatus::PartiallyRefunded,
        SaleStatus::Cancelled,
    ];

    /// Whether lines under this status contribute stock to reconciliation.
    pub fn is_completed(self) -> bool {
        matches!(self, SaleStatus::Completed)
    }
}

/// One sale line, flattened with its owning sale's status and timestamp.
///
/// `quantity` is the discrete count sold; `measurement` is the stock movement
/// in the item's tracked kind. `unit_price_at_sale` and `total` are the
/// figures captured at sale time; reconciliation cross-checks them but never
/// rewrites them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleLine {
    pub id: SaleLineId,
    pub item_id: ItemId,
    pub quantity: Decimal,
    pub measurement: Measurement,
    pub unit_price_at_sale: Decimal,
    pub total: Decimal,
    pub status: SaleStatus,
    pub occurred_at: DateTime<Utc>,
}

impl SaleLine {
    pub fn new(
        id: SaleLineId,
        item_id: ItemId,
        quantity: Decimal,
        measurement: Measurement,
        unit_price_at_sale: Decimal,
        total: Decimal,
        status: SaleStatus,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            item_id,
            quantity,
            measurement,
            unit_price_at_sale,
            total,
            status,
            occurred_at,
        }
    }

    /// Whether this line moves stock during reconciliation.
    pub fn contributes(&self) -> bool {
        self.status.is_completed()
    }
}

impl Entity for SaleLine {
    type Id = SaleLineId;

    fn id(&self) -> SaleLineId {
        self.id
    }
}
