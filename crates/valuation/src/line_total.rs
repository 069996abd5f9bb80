//! Monetary total for one purchase or sale line.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use makerstock_catalog::PriceType;
use makerstock_core::ValueObject;
use makerstock_measure::{MeasureError, MeasureResult, Measurement};

/// Discount captured on a purchase line. Both parts are optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Discount {
    pub percentage: Option<Decimal>,
    pub amount: Option<Decimal>,
}

impl Discount {
    pub const NONE: Discount = Discount {
        percentage: None,
        amount: None,
    };

    pub fn new(percentage: Option<Decimal>, amount: Option<Decimal>) -> Self {
        Self { percentage, amount }
    }

    pub fn percentage(percentage: Decimal) -> Self {
        Self {
            percentage: Some(percentage),
            ..Self::NONE
        }
    }

    pub fn amount(amount: Decimal) -> Self {
        Self {
            amount: Some(amount),
            ..Self::NONE
        }
    }

    /// Apply to a subtotal: percentage first, then the flat amount off the
    /// already-discounted figure. Never both against the original subtotal.
    ///
    /// The result is not clamped; a flat amount larger than what remains goes
    /// negative, the same way oversold stock does. Discount figures come from
    /// stored lines, so arithmetic that leaves the decimal range fails with
    /// [`MeasureError::Overflow`] instead of panicking.
    pub fn apply(&self, subtotal: Decimal) -> MeasureResult<Decimal> {
        let mut total = subtotal;
        if let Some(percentage) = self.percentage {
            let cut = total
                .checked_mul(percentage)
                .and_then(|scaled| scaled.checked_div(dec!(100)))
                .ok_or(MeasureError::overflow("discount"))?;
            total = total
                .checked_sub(cut)
                .ok_or(MeasureError::overflow("discount"))?;
        }
        if let Some(amount) = self.amount {
            total = total
                .checked_sub(amount)
                .ok_or(MeasureError::overflow("discount"))?;
        }
        Ok(total)
    }
}

impl ValueObject for Discount {}

/// Compute the monetary total of one line.
///
/// Under `each` pricing the unit value is charged per discrete count, whatever
/// kind the stock moves in (N packages each weighing W cost N × value); every
/// per-unit price type multiplies the unit value by the measurement magnitude
/// directly, with no unit conversion. The chosen multiplier must be strictly
/// positive, and a per-unit price type must agree with the measurement's kind.
pub fn line_total(
    unit_value: Decimal,
    price_type: PriceType,
    quantity: Decimal,
    measurement: &Measurement,
    discount: Discount,
) -> MeasureResult<Decimal> {
    let multiplier = match price_type.measured_kind() {
        None => quantity,
        Some(kind) => {
            if measurement.kind() != kind {
                return Err(MeasureError::unit_mismatch(kind, measurement.unit()));
            }
            measurement.magnitude()
        }
    };
    if multiplier <= Decimal::ZERO {
        return Err(MeasureError::invalid_measurement(multiplier));
    }
    let subtotal = unit_value
        .checked_mul(multiplier)
        .ok_or(MeasureError::overflow("line total"))?;
    discount.apply(subtotal)
}

#[cfg(test)]
mod tests {
    use makerstock_measure::UnitOfMeasure;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn percentage_applies_before_flat_amount() {
        let discount = Discount::new(Some(dec!(10)), Some(dec!(5)));
        // 100 x 0.9 - 5, never 100 - 10 - 5 against the original subtotal.
        assert_eq!(discount.apply(dec!(100)).unwrap(), dec!(85));
    }

    #[test]
    fn each_pricing_charges_per_discrete_count() {
        // Three packages, each 1.2 kg: priced by count, moved by weight.
        let measurement = Measurement::new(dec!(3.6), UnitOfMeasure::Kilogram);
        let total = line_total(dec!(5), PriceType::Each, dec!(3), &measurement, Discount::NONE)
            .unwrap();
        assert_eq!(total, dec!(15));
    }

    #[test]
    fn per_unit_pricing_charges_by_magnitude() {
        let measurement = Measurement::new(dec!(1.2), UnitOfMeasure::Kilogram);
        let total = line_total(
            dec!(5),
            PriceType::PerWeightUnit,
            dec!(1),
            &measurement,
            Discount::NONE,
        )
        .unwrap();
        assert_eq!(total, dec!(6.0));
    }

    #[test]
    fn per_unit_pricing_rejects_a_foreign_kind() {
        let measurement = Measurement::new(dec!(2), UnitOfMeasure::Meter);
        let err = line_total(
            dec!(5),
            PriceType::PerAreaUnit,
            dec!(1),
            &measurement,
            Discount::NONE,
        )
        .unwrap_err();
        match err {
            MeasureError::UnitMismatch { kind, unit } => {
                assert_eq!(kind, makerstock_measure::MeasurementKind::Area);
                assert_eq!(unit, UnitOfMeasure::Meter);
            }
            other => panic!("Expected UnitMismatch, got {other:?}"),
        }
    }

    #[test]
    fn non_positive_multiplier_is_an_invalid_measurement() {
        let zero_count = line_total(
            dec!(5),
            PriceType::Each,
            dec!(0),
            &Measurement::count(dec!(0)),
            Discount::NONE,
        );
        assert_eq!(
            zero_count.unwrap_err(),
            MeasureError::invalid_measurement(dec!(0))
        );

        let negative_weight = Measurement::new(dec!(-2), UnitOfMeasure::Gram);
        let err = line_total(
            dec!(5),
            PriceType::PerWeightUnit,
            dec!(1),
            &negative_weight,
            Discount::NONE,
        )
        .unwrap_err();
        assert_eq!(err, MeasureError::invalid_measurement(dec!(-2)));
    }

    #[test]
    fn flat_amount_alone_subtracts_from_the_subtotal() {
        let measurement = Measurement::count(dec!(2));
        let total = line_total(
            dec!(30),
            PriceType::Each,
            dec!(2),
            &measurement,
            Discount::amount(dec!(9.50)),
        )
        .unwrap();
        assert_eq!(total, dec!(50.50));
    }

    #[test]
    fn over_discounting_goes_negative_not_zero() {
        let discount = Discount::new(Some(dec!(50)), Some(dec!(60)));
        assert_eq!(discount.apply(dec!(100)).unwrap(), dec!(-10));
    }

    #[test]
    fn totals_past_the_decimal_range_are_errors() {
        let err = line_total(
            Decimal::MAX,
            PriceType::Each,
            dec!(2),
            &Measurement::count(dec!(2)),
            Discount::NONE,
        )
        .unwrap_err();
        assert_eq!(err, MeasureError::overflow("line total"));

        let err = Discount::percentage(Decimal::MAX)
            .apply(Decimal::MAX)
            .unwrap_err();
        assert_eq!(err, MeasureError::overflow("discount"));
    }

    #[cfg(test)]
    mod proptest_tests {
        use proptest::prelude::*;

        use super::*;

        fn money() -> impl Strategy<Value = Decimal> {
            (1i64..=10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: the fixed ordering equals the closed formula
            /// subtotal * (1 - p/100) - a.
            #[test]
            fn discount_matches_closed_formula(
                subtotal in money(),
                percentage in 0i64..=100,
                amount in money(),
            ) {
                let percentage = Decimal::from(percentage);
                let discount = Discount::new(Some(percentage), Some(amount));

                let expected =
                    subtotal * (dec!(100) - percentage) / dec!(100) - amount;
                prop_assert_eq!(discount.apply(subtotal).unwrap(), expected);
            }

            /// Property: an empty discount is the identity.
            #[test]
            fn empty_discount_changes_nothing(subtotal in money()) {
                prop_assert_eq!(Discount::NONE.apply(subtotal).unwrap(), subtotal);
            }

            /// Property: totals scale linearly in the unit value when no
            /// discount is in play.
            #[test]
            fn undiscounted_total_is_linear_in_unit_value(
                unit_value in money(),
                count in 1i64..=10_000,
            ) {
                let count = Decimal::from(count);
                let measurement = Measurement::count(count);

                let one = line_total(unit_value, PriceType::Each, count, &measurement, Discount::NONE)
                    .unwrap();
                let two = line_total(unit_value * dec!(2), PriceType::Each, count, &measurement, Discount::NONE)
                    .unwrap();

                prop_assert_eq!(two, one * dec!(2));
            }
        }
    }
}
