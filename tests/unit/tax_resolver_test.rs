// Jurisdiction branches and per-item exclusivity of split and unified tax
//
// Four scenarios against a Karnataka, India home at 18%:
// 1. foreign counterparty: no tax
// 2. same region: two equal halves
// 3. other region, same country: unified tax
// 4. region still empty: zero tax, pending

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::TestDataFactory;
use proptest::prelude::*;
use quoteflow::taxes::{Jurisdiction, TaxRegime};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_cross_border_counterparty_pays_no_tax() {
    let resolver = TestDataFactory::resolver(dec!(18));
    let foreign = TestDataFactory::foreign();

    assert_eq!(resolver.regime(&foreign), TaxRegime::CrossBorder);
    let tax = resolver.resolve(dec!(1000), &foreign);
    assert_eq!(tax.split_tax_a, Decimal::ZERO);
    assert_eq!(tax.split_tax_b, Decimal::ZERO);
    assert_eq!(tax.unified_tax, Decimal::ZERO);
}

#[test]
fn test_same_region_splits_rate() {
    let resolver = TestDataFactory::resolver(dec!(18));
    let tax = resolver.resolve(dec!(1000), &TestDataFactory::same_region());

    assert_eq!(tax.split_tax_a, dec!(90));
    assert_eq!(tax.split_tax_b, dec!(90));
    assert_eq!(tax.unified_tax, Decimal::ZERO);
}

#[test]
fn test_other_region_pays_unified_tax() {
    let resolver = TestDataFactory::resolver(dec!(18));
    let tax = resolver.resolve(dec!(1000), &TestDataFactory::other_region());

    assert_eq!(tax.unified_tax, dec!(180));
    assert_eq!(tax.split_tax_a, Decimal::ZERO);
    assert_eq!(tax.split_tax_b, Decimal::ZERO);
}

#[test]
fn test_empty_region_is_pending_not_an_error() {
    let resolver = TestDataFactory::resolver(dec!(18));
    let pending = TestDataFactory::region_pending();

    assert_eq!(resolver.regime(&pending), TaxRegime::Pending);
    assert!(resolver.resolve(dec!(1000), &pending).is_zero());
}

#[test]
fn test_jurisdiction_comparison_ignores_case() {
    let resolver = TestDataFactory::resolver(dec!(18));
    let shouting = Jurisdiction::new("KARNATAKA ", " india");
    assert_eq!(resolver.regime(&shouting), TaxRegime::Split);
}

#[test]
fn test_alternate_rate_without_code_changes() {
    let resolver = TestDataFactory::resolver(dec!(12));
    let tax = resolver.resolve(dec!(1000), &TestDataFactory::same_region());
    assert_eq!(tax.split_tax_a, dec!(60));
    assert_eq!(tax.split_tax_b, dec!(60));
}

fn any_counterparty() -> impl Strategy<Value = Jurisdiction> {
    prop_oneof![
        Just(TestDataFactory::same_region()),
        Just(TestDataFactory::other_region()),
        Just(TestDataFactory::foreign()),
        Just(TestDataFactory::region_pending()),
    ]
}

proptest! {
    #[test]
    fn test_split_and_unified_never_both_present(
        base_paise in 0u64..10_000_000_000u64,
        rate in 0u32..=28u32,
        counterparty in any_counterparty(),
    ) {
        let resolver = TestDataFactory::resolver(Decimal::from(rate));
        let tax = resolver.resolve(Decimal::new(base_paise as i64, 2), &counterparty);

        let split = tax.split_tax_a > Decimal::ZERO || tax.split_tax_b > Decimal::ZERO;
        let unified = tax.unified_tax > Decimal::ZERO;
        prop_assert!(!(split && unified));
        prop_assert_eq!(tax.split_tax_a, tax.split_tax_b);
    }

    #[test]
    fn test_tax_amounts_have_two_decimals(
        base_paise in 0u64..10_000_000_000u64,
        counterparty in any_counterparty(),
    ) {
        let resolver = TestDataFactory::resolver(dec!(18));
        let tax = resolver.resolve(Decimal::new(base_paise as i64, 2), &counterparty);
        prop_assert!(tax.split_tax_a.scale() <= 2);
        prop_assert!(tax.unified_tax.scale() <= 2);
    }
}
