// Property-based tests for the per-line calculation
//
// - base is quantity × unit rate at two decimal places
// - the discounted base is never negative, however large the discount
// - the discount never takes off more than the base

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::TestDataFactory;
use proptest::prelude::*;
use quoteflow::line_items::{Discount, LineItemCalculator, LineItemInput};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;

proptest! {
    #[test]
    fn test_discounted_base_never_negative(
        quantity in 1u32..10_000u32,
        rate_paise in 0u64..100_000_000u64,
        flat_off in 0u64..10_000_000_000u64,
        percent_off in 0u32..1_000u32,
    ) {
        let rate = Decimal::new(rate_paise as i64, 2);
        let calculator = LineItemCalculator::new();

        for discount in [Discount::amount(Decimal::from(flat_off)), Discount::percentage(Decimal::from(percent_off))] {
            let line = TestDataFactory::discounted_item(Decimal::from(quantity), rate, discount);
            let amounts = calculator.compute(&line);

            prop_assert!(amounts.discounted_base >= Decimal::ZERO);
            prop_assert!(amounts.discount_amount <= amounts.base);
            prop_assert_eq!(amounts.base - amounts.discount_amount, amounts.discounted_base);
        }
    }

    #[test]
    fn test_base_is_rounded_product(
        quantity in 1u32..1_000u32,
        rate_paise in 0u64..10_000_000u64,
    ) {
        let rate = Decimal::new(rate_paise as i64, 2);
        let line = TestDataFactory::item("Item", Decimal::from(quantity), rate);
        let amounts = LineItemCalculator::new().compute(&line);

        prop_assert_eq!(amounts.base, Decimal::from(quantity) * rate);
        prop_assert!(amounts.base.scale() <= 2);
    }

    #[test]
    fn test_compute_is_deterministic(
        quantity in 1u32..1_000u32,
        rate in 0u32..1_000_000u32,
        percent_off in 0u32..100u32,
    ) {
        let line = TestDataFactory::discounted_item(
            Decimal::from(quantity),
            Decimal::from(rate),
            Discount::percentage(Decimal::from(percent_off)),
        );
        let calculator = LineItemCalculator::new();
        prop_assert_eq!(calculator.compute(&line), calculator.compute(&line));
    }
}

#[test]
fn test_flat_discount_larger_than_base_zeroes_line() {
    let line = TestDataFactory::discounted_item(dec!(1), dec!(100), Discount::amount(dec!(250)));
    let amounts = LineItemCalculator::new().compute(&line);
    assert_eq!(amounts.base, dec!(100));
    assert_eq!(amounts.discount_amount, dec!(100));
    assert_eq!(amounts.discounted_base, Decimal::ZERO);
}

#[test]
fn test_malformed_form_values_fall_back_to_defaults() {
    let input: LineItemInput = serde_json::from_value(json!({
        "description": "Typing in progress",
        "quantity": "abc",
        "unitRate": "12.",
        "itemDiscount": { "value": "-5", "kind": "amount" }
    }))
    .unwrap();

    let item = input.normalize();
    assert_eq!(item.quantity, Decimal::ONE);
    assert_eq!(item.unit_rate, dec!(12));
    assert_eq!(item.item_discount, None);

    let amounts = LineItemCalculator::new().compute(&item);
    assert_eq!(amounts.discounted_base, dec!(12));
}

#[test]
fn test_zero_quantity_is_kept() {
    let input: LineItemInput =
        serde_json::from_value(json!({ "description": "Spare", "quantity": 0, "unitRate": 50 }))
            .unwrap();
    let amounts = LineItemCalculator::new().compute(&input.normalize());
    assert_eq!(amounts.base, Decimal::ZERO);
}
