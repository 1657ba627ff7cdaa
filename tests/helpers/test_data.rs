// Test Data Factory
//
// Builds documents in both shapes the engine sees: the loose JSON sent by the
// editing layer and the strict models used past the boundary.

use quoteflow::config::{BankDetails, BusinessConfig};
use quoteflow::documents::{DocumentMeta, PartyInfo};
use quoteflow::line_items::{Discount, LineItem};
use quoteflow::taxes::{Jurisdiction, TaxRuleResolver};
use quoteflow::totals::{DocumentInput, TotalsAggregator};
use rust_decimal::Decimal;
use serde_json::{json, Value};

pub const HOME_REGION: &str = "Karnataka";
pub const HOME_COUNTRY: &str = "India";

/// Test data factory for documents, parties and engines
pub struct TestDataFactory;

impl TestDataFactory {
    pub fn home() -> Jurisdiction {
        Jurisdiction::new(HOME_REGION, HOME_COUNTRY)
    }

    pub fn same_region() -> Jurisdiction {
        Jurisdiction::new(HOME_REGION, HOME_COUNTRY)
    }

    pub fn other_region() -> Jurisdiction {
        Jurisdiction::new("Maharashtra", HOME_COUNTRY)
    }

    pub fn foreign() -> Jurisdiction {
        Jurisdiction::new("California", "USA")
    }

    pub fn region_pending() -> Jurisdiction {
        Jurisdiction::new("", HOME_COUNTRY)
    }

    /// Engine with the default 18% composite rate
    pub fn aggregator() -> TotalsAggregator {
        TotalsAggregator::new(Self::resolver(Decimal::from(18)))
    }

    pub fn resolver(rate: Decimal) -> TaxRuleResolver {
        TaxRuleResolver::new(Self::home(), rate)
    }

    /// Default business with bank details filled in
    pub fn business_config() -> BusinessConfig {
        BusinessConfig {
            bank: BankDetails {
                bank_name: "State Bank of India".to_string(),
                account_name: "Quoteflow Enterprises".to_string(),
                account_number: "30001234567".to_string(),
                ifsc: "SBIN0000813".to_string(),
                branch: Some("Jayanagar".to_string()),
            },
            ..BusinessConfig::default()
        }
    }

    pub fn item(description: &str, quantity: Decimal, rate: Decimal) -> LineItem {
        LineItem::new(description.to_string(), quantity, rate).expect("valid test item")
    }

    pub fn discounted_item(quantity: Decimal, rate: Decimal, discount: Discount) -> LineItem {
        Self::item("Discounted item", quantity, rate).with_discount(discount)
    }

    /// Two-line document as the editing layer sends it, numbers as strings
    pub fn document_payload(counterparty: &Jurisdiction) -> Value {
        json!({
            "items": [
                {
                    "description": "Solar Panel 540W",
                    "quantity": "4",
                    "unitRate": "14500",
                    "unit": "Nos",
                    "hsnSac": "8541"
                },
                {
                    "description": "Installation",
                    "quantity": 1,
                    "unitRate": 8000,
                    "itemDiscount": { "value": "5", "kind": "percentage" },
                    "hsnSac": "9954"
                }
            ],
            "extraCharges": [{ "description": "Freight", "amount": "1500" }],
            "discounts": [],
            "counterparty": {
                "region": counterparty.region,
                "country": counterparty.country
            }
        })
    }

    pub fn document_input(counterparty: &Jurisdiction) -> DocumentInput {
        serde_json::from_value(Self::document_payload(counterparty)).expect("valid document payload")
    }

    pub fn party(jurisdiction: Jurisdiction) -> PartyInfo {
        PartyInfo {
            name: "Sunrise Traders".to_string(),
            address: "12 MG Road, Bengaluru".to_string(),
            jurisdiction,
            gstin: Some("29ABCDE1234F1Z5".to_string()),
            contact_person: Some("R. Rao".to_string()),
            phone: Some("+91 98450 00000".to_string()),
            ..PartyInfo::default()
        }
    }

    pub fn meta(number: &str) -> DocumentMeta {
        DocumentMeta {
            number: number.to_string(),
            date: chrono::NaiveDate::from_ymd_opt(2024, 4, 1),
            valid_until: chrono::NaiveDate::from_ymd_opt(2024, 4, 30),
            reference: Some("ENQ-77".to_string()),
            terms: vec![
                "50% advance with order".to_string(),
                "Delivery within 3 weeks".to_string(),
            ],
            notes: None,
        }
    }
}
