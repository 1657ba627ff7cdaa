//! Integer-to-words transcription in the Indian numbering system
//! (thousand, lakh, crore), as printed on commercial documents.

use rust_decimal::Decimal;

use crate::core::{money, AppError, Result};

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const THOUSAND: u128 = 1_000;
const LAKH: u128 = 1_00_000;
const CRORE: u128 = 1_00_00_000;

/// Spell out a whole number, e.g. `272580` as
/// "Two Lakh Seventy Two Thousand Five Hundred Eighty"
///
/// Wide enough for the integral part of any `Decimal`; counts above a crore
/// recurse ("One Thousand Crore").
pub fn to_words(amount: u128) -> String {
    if amount == 0 {
        return "Zero".to_string();
    }
    spell(amount)
}

fn spell(n: u128) -> String {
    match n {
        0 => String::new(),
        1..=19 => ONES[n as usize].to_string(),
        20..=99 => {
            let tens = TENS[(n / 10) as usize];
            match n % 10 {
                0 => tens.to_string(),
                ones => format!("{} {}", tens, ONES[ones as usize]),
            }
        }
        100..=999 => group(n, 100, "Hundred"),
        1_000..=99_999 => group(n, THOUSAND, "Thousand"),
        1_00_000..=99_99_999 => group(n, LAKH, "Lakh"),
        _ => group(n, CRORE, "Crore"),
    }
}

fn group(n: u128, unit: u128, name: &str) -> String {
    let head = format!("{} {}", spell(n / unit), name);
    match n % unit {
        0 => head,
        rest => format!("{} {}", head, spell(rest)),
    }
}

/// Money amount in words, e.g. "Rupees One Thousand and Fifty Paise Only"
///
/// Negative amounts are never presented on documents and are rejected.
pub fn amount_in_words(amount: Decimal) -> Result<String> {
    if amount < Decimal::ZERO {
        return Err(AppError::validation(format!(
            "Cannot express a negative amount in words: {}",
            amount
        )));
    }

    let amount = money::round(amount);
    let rupees = integral(amount.trunc());
    let paise = integral((amount - amount.trunc()) * Decimal::ONE_HUNDRED);

    Ok(if paise == 0 {
        format!("Rupees {} Only", to_words(rupees))
    } else {
        format!("Rupees {} and {} Paise Only", to_words(rupees), to_words(paise))
    })
}

/// Integral value of a non-negative whole `Decimal`
fn integral(whole: Decimal) -> u128 {
    let mut whole = whole;
    whole.rescale(0);
    whole.mantissa().unsigned_abs()
}
