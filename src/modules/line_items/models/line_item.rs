// A line item is one priced entry of a quotation, proforma invoice or
// purchase order. Only its inputs are stored; base and discounted base are
// always derived by the LineItemCalculator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{lenient, money, AppError, Result};

/// How a discount value is interpreted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountKind {
    /// Flat amount subtracted from the base
    #[default]
    Amount,
    /// Percentage of the base
    Percentage,
}

impl DiscountKind {
    /// Lenient form value: unknown or missing kinds fall back to `Amount`
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_lowercase()).as_deref() {
            Some("percentage") | Some("percent") | Some("%") => DiscountKind::Percentage,
            _ => DiscountKind::Amount,
        }
    }
}

impl std::fmt::Display for DiscountKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiscountKind::Amount => write!(f, "amount"),
            DiscountKind::Percentage => write!(f, "percentage"),
        }
    }
}

/// A discount, either on one item or on the whole document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    pub value: Decimal,
    pub kind: DiscountKind,
}

impl Discount {
    pub fn amount(value: Decimal) -> Self {
        Self {
            value,
            kind: DiscountKind::Amount,
        }
    }

    pub fn percentage(value: Decimal) -> Self {
        Self {
            value,
            kind: DiscountKind::Percentage,
        }
    }

    /// The amount this discount takes off `base`, unrounded
    pub fn amount_off(&self, base: Decimal) -> Decimal {
        match self.kind {
            DiscountKind::Percentage => money::percent_of(base, self.value),
            DiscountKind::Amount => self.value,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}

/// Represents a single line item of a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Description of the product or service
    pub description: String,

    /// Quantity of items
    pub quantity: Decimal,

    /// Price per unit
    pub unit_rate: Decimal,

    /// Optional item-level discount, applied to quantity × unit rate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_discount: Option<Discount>,

    /// Unit of measure, e.g. "Nos" or "Kg"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    /// HSN/SAC classification code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hsn_sac: Option<String>,
}

impl LineItem {
    /// Create a new line item with validation
    ///
    /// # Arguments
    /// * `description` - Product/service description
    /// * `quantity` - Must be positive
    /// * `unit_rate` - Must be non-negative
    pub fn new(description: String, quantity: Decimal, unit_rate: Decimal) -> Result<Self> {
        Self::validate_description(&description)?;
        Self::validate_quantity(quantity)?;
        Self::validate_unit_rate(unit_rate)?;

        Ok(Self {
            description,
            quantity,
            unit_rate,
            item_discount: None,
            unit: None,
            hsn_sac: None,
        })
    }

    pub fn with_discount(mut self, discount: Discount) -> Self {
        self.item_discount = Some(discount);
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_hsn_sac(mut self, code: impl Into<String>) -> Self {
        self.hsn_sac = Some(code.into());
        self
    }

    /// True when a non-zero item discount is set
    pub fn has_discount(&self) -> bool {
        self.item_discount.is_some_and(|d| !d.is_zero())
    }

    fn validate_description(description: &str) -> Result<()> {
        if description.trim().is_empty() {
            return Err(AppError::validation("Line item description cannot be empty"));
        }

        Ok(())
    }

    fn validate_quantity(quantity: Decimal) -> Result<()> {
        if quantity <= Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Quantity must be positive, got: {}",
                quantity
            )));
        }

        Ok(())
    }

    fn validate_unit_rate(unit_rate: Decimal) -> Result<()> {
        if unit_rate < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Unit rate must be non-negative, got: {}",
                unit_rate
            )));
        }

        Ok(())
    }
}

/// Discount as sent by the editing layer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiscountInput {
    pub value: Value,
    pub kind: Option<String>,
}

impl DiscountInput {
    /// Parse into a strict discount; a zero or blank value means no discount
    pub fn normalize(&self) -> Option<Discount> {
        let value = lenient::discount_value(&self.value);
        if value.is_zero() {
            return None;
        }
        Some(Discount {
            value,
            kind: DiscountKind::from_raw(self.kind.as_deref()),
        })
    }
}

/// Line item as sent by the editing layer, numbers possibly still strings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineItemInput {
    pub description: Option<String>,
    pub quantity: Value,
    #[serde(alias = "rate")]
    pub unit_rate: Value,
    pub item_discount: Option<DiscountInput>,
    pub unit: Option<String>,
    pub hsn_sac: Option<String>,
}

impl LineItemInput {
    /// Parse once into a strict line item, never failing
    pub fn normalize(&self) -> LineItem {
        LineItem {
            description: self
                .description
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
            quantity: lenient::quantity(&self.quantity),
            unit_rate: lenient::rate(&self.unit_rate),
            item_discount: self.item_discount.as_ref().and_then(DiscountInput::normalize),
            unit: lenient::text(self.unit.as_deref()),
            hsn_sac: lenient::text(self.hsn_sac.as_deref()),
        }
    }
}
