use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use makerstock_core::{Entity, ItemId, PurchaseLineId};
use makerstock_measure::Measurement;

/// Purchase order status lifecycle.
///
/// Only `received` means stock has physically entered inventory; every other
/// status is excluded from reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseStatus {
    Ordered,
    Pending,
    Received,
    Cancelled,
}

impl PurchaseStatus {
    pub const ALL: [PurchaseStatus; 4] = [
        PurchaseStatus::Ordered,
        PurchaseStatus::Pending,
        PurchaseStatus::Received,
        PurchaseStatus::Cancelled,
    ];

    /// Whether lines under this status contribute stock to reconciliation.
    pub fn is_received(self) -> bool {
        matches!(self, PurchaseStatus::Received)
    }
}

/// One purchase line, flattened with its owning order's status and timestamp.
///
/// The engine never needs the order aggregate itself; order entry lives with
/// external collaborators and hands reconciliation this shape. `quantity` is
/// the discrete count on the line (the multiplier under `each` pricing);
/// `measurement` is the stock movement in the item's tracked kind. For
/// quantity-kind items the two coincide.
///
/// No stock validation happens here: stored history can be corrupt, and
/// surfacing that per item is the reconciler's job, not ingestion's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseLine {
    pub id: PurchaseLineId,
    pub item_id: ItemId,
    pub quantity: Decimal,
    pub measurement: Measurement,
    pub unit_cost: Decimal,
    pub discount_amount: Option<Decimal>,
    pub discount_percentage: Option<Decimal>,
    pub total_cost: Decimal,
    pub status: PurchaseStatus,
    pub occurred_at: DateTime<Utc>,
}

impl PurchaseLine {
    pub fn new(
        id: PurchaseLineId,
        item_id: ItemId,
        quantity: Decimal,
        measurement: Measurement,
        unit_cost: Decimal,
        total_cost: Decimal,
        status: PurchaseStatus,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            item_id,
            quantity,
            measurement,
            unit_cost,
            discount_amount: None,
            discount_percentage: None,
            total_cost,
            status,
            occurred_at,
        }
    }

    pub fn with_discount(
        mut self,
        percentage: Option<Decimal>,
        amount: Option<Decimal>,
    ) -> Self {
        self.discount_percentage = percentage;
        self.discount_amount = amount;
        self
    }

    /// Whether this line moves stock during reconciliation.
    pub fn contributes(&self) -> bool {
        self.status.is_received()
    }
}

impl Entity for PurchaseLine {
    type Id = PurchaseLineId;

    fn id(&self) -> PurchaseLineId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use makerstock_measure::UnitOfMeasure;
    use rust_decimal_macros::dec;

    use super::*;

    fn test_line(status: PurchaseStatus) -> PurchaseLine {
        PurchaseLine::new(
            PurchaseLineId::new(),
            ItemId::new(),
            dec!(10),
            Measurement::count(dec!(10)),
            dec!(2),
            dec!(20),
            status,
            Utc::now(),
        )
    }

    #[test]
    fn only_received_lines_contribute() {
        for status in PurchaseStatus::ALL {
            assert_eq!(test_line(status).contributes(), status == PurchaseStatus::Received);
        }
    }

    #[test]
    fn statuses_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&PurchaseStatus::Received).unwrap(),
            "\"received\""
        );
        assert_eq!(
            serde_json::from_str::<PurchaseStatus>("\"cancelled\"").unwrap(),
            PurchaseStatus::Cancelled
        );
    }

    #[test]
    fn discounts_default_to_none() {
        let line = test_line(PurchaseStatus::Ordered);
        assert_eq!(line.discount_amount, None);
        assert_eq!(line.discount_percentage, None);

        let discounted = line.with_discount(Some(dec!(10)), Some(dec!(5)));
        assert_eq!(discounted.discount_percentage, Some(dec!(10)));
        assert_eq!(discounted.discount_amount, Some(dec!(5)));
    }

    #[test]
    fn a_weight_line_keeps_count_and_movement_apart() {
        let line = PurchaseLine::new(
            PurchaseLineId::new(),
            ItemId::new(),
            dec!(3),
            Measurement::new(dec!(1.2), UnitOfMeasure::Kilogram),
            dec!(5),
            dec!(15),
            PurchaseStatus::Received,
            Utc::now(),
        );
        assert_eq!(line.quantity, dec!(3));
        assert_eq!(line.measurement.magnitude(), dec!(1.2));
    }
}
