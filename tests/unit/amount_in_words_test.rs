// Amount-in-words transcription (Indian numbering)
//
// - deterministic for any input
// - zero spells "Zero"
// - money amounts carry paise only when there is a fractional part

use proptest::prelude::*;
use quoteflow::documents::{amount_in_words, to_words};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_words_are_deterministic() {
    let first = to_words(272_580);
    for _ in 0..10 {
        assert_eq!(to_words(272_580), first);
    }
    assert_eq!(first, "Two Lakh Seventy Two Thousand Five Hundred Eighty");
}

#[test]
fn test_zero() {
    assert_eq!(to_words(0), "Zero");
    assert_eq!(amount_in_words(Decimal::ZERO).unwrap(), "Rupees Zero Only");
}

#[test]
fn test_round_numbers() {
    assert_eq!(to_words(10), "Ten");
    assert_eq!(to_words(1_000), "One Thousand");
    assert_eq!(to_words(10_00_000), "Ten Lakh");
    assert_eq!(to_words(2_50_00_000), "Two Crore Fifty Lakh");
}

#[test]
fn test_paise_are_spelled_separately() {
    assert_eq!(
        amount_in_words(dec!(77408.25)).unwrap(),
        "Rupees Seventy Seven Thousand Four Hundred Eight and Twenty Five Paise Only"
    );
}

#[test]
fn test_totals_beyond_u64_still_spell() {
    assert_eq!(to_words(100_000_000_000_000_000_000), "Ten Lakh Crore Crore");
    assert_eq!(
        amount_in_words(dec!(100000000000000000000.50)).unwrap(),
        "Rupees Ten Lakh Crore Crore and Fifty Paise Only"
    );

    let largest = amount_in_words(Decimal::MAX).unwrap();
    assert!(largest.starts_with("Rupees "));
    assert!(largest.ends_with(" Only"));
}

#[test]
fn test_sub_paisa_amounts_round_first() {
    assert_eq!(amount_in_words(dec!(99.999)).unwrap(), "Rupees One Hundred Only");
}

proptest! {
    #[test]
    fn test_words_never_empty_and_well_spaced(n in 0u64..1_000_000_000_000u64) {
        let words = to_words(u128::from(n));
        prop_assert!(!words.is_empty());
        prop_assert!(!words.contains("  "));
        prop_assert_eq!(words.trim(), words.as_str());
        prop_assert_eq!(to_words(u128::from(n)), words);
    }

    #[test]
    fn test_whole_amounts_have_no_paise(rupees in 0u64..10_000_000_000u64) {
        let words = amount_in_words(Decimal::from(rupees)).unwrap();
        prop_assert!(words.starts_with("Rupees "));
        prop_assert!(words.ends_with(" Only"));
        prop_assert!(!words.contains("Paise"));
    }
}
