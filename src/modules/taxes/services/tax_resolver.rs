use rust_decimal::Decimal;

use crate::config::BusinessConfig;
use crate::core::error::AppError;
use crate::core::money;
use crate::modules::taxes::models::{Jurisdiction, TaxOutcome, TaxRegime};

/// TaxRuleResolver decides how much tax applies to a taxable base
///
/// The same resolver instance backs both the per-item interactive
/// recalculation and the whole-document submit-time recalculation.
#[derive(Debug, Clone)]
pub struct TaxRuleResolver {
    home: Jurisdiction,
    composite_rate: Decimal,
}

impl TaxRuleResolver {
    /// `composite_rate` is a percentage, e.g. 18 for 9% + 9%
    pub fn new(home: Jurisdiction, composite_rate: Decimal) -> Self {
        Self {
            home,
            composite_rate,
        }
    }

    pub fn from_config(config: &BusinessConfig) -> Self {
        Self::new(config.home.clone(), config.composite_tax_rate)
    }

    pub fn home(&self) -> &Jurisdiction {
        &self.home
    }

    pub fn composite_rate(&self) -> Decimal {
        self.composite_rate
    }

    /// Pick the tax branch for a counterparty, checked in strict order:
    /// foreign country, same region, other known region, unknown region.
    pub fn regime(&self, counterparty: &Jurisdiction) -> TaxRegime {
        if !counterparty.same_country(&self.home) {
            TaxRegime::CrossBorder
        } else if counterparty.same_region(&self.home) {
            TaxRegime::Split
        } else if !counterparty.region_is_unknown() {
            TaxRegime::Unified
        } else {
            TaxRegime::Pending
        }
    }

    /// Tax on `base` for the given counterparty
    pub fn resolve(&self, base: Decimal, counterparty: &Jurisdiction) -> TaxOutcome {
        self.apply(self.regime(counterparty), base)
    }

    /// Tax on `base` under an already decided regime
    pub fn apply(&self, regime: TaxRegime, base: Decimal) -> TaxOutcome {
        match regime {
            TaxRegime::Split => {
                let half_rate = self.composite_rate / Decimal::TWO;
                TaxOutcome::split(money::round(money::percent_of(base, half_rate)))
            }
            TaxRegime::Unified => {
                TaxOutcome::unified(money::round(money::percent_of(base, self.composite_rate)))
            }
            TaxRegime::CrossBorder | TaxRegime::Pending => TaxOutcome::zero(),
        }
    }

    /// Validate a composite rate is a percentage between 0 and 100 with at most 4 decimal places
    pub fn validate_composite_rate(rate: Decimal) -> Result<(), AppError> {
        if rate < Decimal::ZERO {
            return Err(AppError::Configuration(
                "Composite tax rate cannot be negative".to_string(),
            ));
        }

        if rate > Decimal::ONE_HUNDRED {
            return Err(AppError::Configuration(
                "Composite tax rate cannot exceed 100%".to_string(),
            ));
        }

        if rate.normalize().scale() > 4 {
            return Err(AppError::Configuration(
                "Composite tax rate cannot have more than 4 decimal places".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for TaxRuleResolver {
    fn default() -> Self {
        Self::from_config(&BusinessConfig::default())
    }
}
