use std::env;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};
use crate::modules::taxes::{Jurisdiction, TaxRuleResolver};

/// Business constants the engine depends on
///
/// Injected instead of hardcoded so totals can be computed for any home
/// jurisdiction and rate without code changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessConfig {
    /// Where the issuing company is registered
    pub home: Jurisdiction,
    /// Composite tax rate in percent, e.g. 18
    pub composite_tax_rate: Decimal,
    pub tax_labels: TaxLabels,
    pub company: CompanyProfile,
    /// Bank details printed on documents by default
    pub bank: BankDetails,
}

/// Printed names of the tax components
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxLabels {
    pub split_a: String,
    pub split_b: String,
    pub unified: String,
}

impl Default for TaxLabels {
    fn default() -> Self {
        Self {
            split_a: "CGST".to_string(),
            split_b: "SGST".to_string(),
            unified: "IGST".to_string(),
        }
    }
}

/// The issuing company as printed in document headers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub name: String,
    pub address: String,
    pub gstin: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankDetails {
    pub bank_name: String,
    pub account_name: String,
    pub account_number: String,
    pub ifsc: String,
    pub branch: Option<String>,
}

impl BankDetails {
    pub fn is_empty(&self) -> bool {
        self.bank_name.is_empty() && self.account_number.is_empty()
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            home: Jurisdiction::new("Karnataka", "India"),
            composite_tax_rate: Decimal::from(18),
            tax_labels: TaxLabels::default(),
            company: CompanyProfile {
                name: "Quoteflow Enterprises".to_string(),
                address: "Bengaluru, Karnataka".to_string(),
                ..CompanyProfile::default()
            },
            bank: BankDetails::default(),
        }
    }
}

impl BusinessConfig {
    /// Load business constants from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let composite_tax_rate = match env::var("COMPOSITE_TAX_RATE") {
            Ok(raw) => Decimal::from_str(raw.trim())
                .map_err(|_| AppError::Configuration("Invalid COMPOSITE_TAX_RATE".to_string()))?,
            Err(_) => defaults.composite_tax_rate,
        };

        Ok(BusinessConfig {
            home: Jurisdiction::new(
                env::var("HOME_REGION").unwrap_or(defaults.home.region),
                env::var("HOME_COUNTRY").unwrap_or(defaults.home.country),
            ),
            composite_tax_rate,
            tax_labels: TaxLabels {
                split_a: env::var("TAX_LABEL_SPLIT_A").unwrap_or(defaults.tax_labels.split_a),
                split_b: env::var("TAX_LABEL_SPLIT_B").unwrap_or(defaults.tax_labels.split_b),
                unified: env::var("TAX_LABEL_UNIFIED").unwrap_or(defaults.tax_labels.unified),
            },
            company: CompanyProfile {
                name: env::var("COMPANY_NAME").unwrap_or(defaults.company.name),
                address: env::var("COMPANY_ADDRESS").unwrap_or(defaults.company.address),
                gstin: optional_var("COMPANY_GSTIN"),
                phone: optional_var("COMPANY_PHONE"),
                email: optional_var("COMPANY_EMAIL"),
            },
            bank: BankDetails {
                bank_name: env::var("BANK_NAME").unwrap_or_default(),
                account_name: env::var("BANK_ACCOUNT_NAME").unwrap_or_default(),
                account_number: env::var("BANK_ACCOUNT_NUMBER").unwrap_or_default(),
                ifsc: env::var("BANK_IFSC").unwrap_or_default(),
                branch: optional_var("BANK_BRANCH"),
            },
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.home.country.trim().is_empty() {
            return Err(AppError::Configuration(
                "HOME_COUNTRY must not be empty".to_string(),
            ));
        }

        if self.home.region_is_unknown() {
            return Err(AppError::Configuration(
                "HOME_REGION must not be empty".to_string(),
            ));
        }

        TaxRuleResolver::validate_composite_rate(self.composite_tax_rate)?;

        if self.company.name.trim().is_empty() {
            return Err(AppError::Configuration(
                "COMPANY_NAME must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

fn optional_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
