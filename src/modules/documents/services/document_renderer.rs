use askama::Template;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::config::{BusinessConfig, TaxLabels};
use crate::core::money::format_indian;
use crate::core::Result;
use crate::modules::documents::models::{DocumentKind, DocumentMeta, PartyInfo, RenderOptions};
use crate::modules::documents::services::amount_in_words::amount_in_words;
use crate::modules::taxes::TaxRegime;
use crate::modules::totals::{DocumentComputation, PricedLine, TotalsBreakdown};

/// One row of the totals block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TotalsRow {
    pub label: String,
    pub amount: String,
    /// Subtracted from the running total; printed with a leading minus
    pub deduction: bool,
    /// The grand total row
    pub grand: bool,
}

impl TotalsRow {
    fn plain(label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            label: label.into(),
            amount: format_indian(amount),
            deduction: false,
            grand: false,
        }
    }

    fn deduction(label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            deduction: true,
            ..Self::plain(label, amount)
        }
    }
}

/// Totals block shared by every document kind:
/// subtotal, discounts, tax rows, extra charges, grand total
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TotalsBlock {
    pub rows: Vec<TotalsRow>,
}

impl TotalsBlock {
    pub fn build(
        totals: &TotalsBreakdown,
        regime: TaxRegime,
        labels: &TaxLabels,
        composite_rate: Decimal,
    ) -> Self {
        let mut rows = vec![TotalsRow::plain("Subtotal", totals.taxable_subtotal)];

        if !totals.document_discount_amount.is_zero() {
            rows.push(TotalsRow::deduction("Discount", totals.document_discount_amount));
        }
        if !totals.discounts_total.is_zero() {
            rows.push(TotalsRow::deduction("Other Discounts", totals.discounts_total));
        }

        let rate = composite_rate.normalize();
        let half_rate = (composite_rate / Decimal::TWO).normalize();
        match regime {
            TaxRegime::Split => {
                rows.push(TotalsRow::plain(
                    format!("{} @ {}%", labels.split_a, half_rate),
                    totals.split_tax_a_total,
                ));
                rows.push(TotalsRow::plain(
                    format!("{} @ {}%", labels.split_b, half_rate),
                    totals.split_tax_b_total,
                ));
            }
            TaxRegime::Unified => rows.push(TotalsRow::plain(
                format!("{} @ {}%", labels.unified, rate),
                totals.unified_tax_total,
            )),
            TaxRegime::Pending => {
                rows.push(TotalsRow::plain("Tax (to be determined)", totals.tax_total()))
            }
            TaxRegime::CrossBorder => {
                rows.push(TotalsRow::plain("Tax (not applicable)", totals.tax_total()))
            }
        }

        if !totals.extra_charges_total.is_zero() {
            rows.push(TotalsRow::plain("Extra Charges", totals.extra_charges_total));
        }

        rows.push(TotalsRow {
            grand: true,
            ..TotalsRow::plain("Grand Total", totals.grand_total)
        });

        Self { rows }
    }
}

/// One printed row of the item table
#[derive(Debug, Clone)]
struct ItemRow {
    serial: usize,
    description: String,
    hsn_sac: String,
    quantity: String,
    unit: String,
    rate: String,
    discount: String,
    taxable: String,
    tax: String,
    amount: String,
}

impl ItemRow {
    fn from_line(serial: usize, line: &PricedLine) -> Self {
        let discount = if line.amounts.discount_amount.is_zero() {
            "-".to_string()
        } else {
            format_indian(line.amounts.discount_amount)
        };

        Self {
            serial,
            description: line.item.description.clone(),
            hsn_sac: line.item.hsn_sac.clone().unwrap_or_default(),
            quantity: line.item.quantity.normalize().to_string(),
            unit: line.item.unit.clone().unwrap_or_default(),
            rate: format_indian(line.item.unit_rate),
            discount,
            taxable: format_indian(line.amounts.discounted_base),
            tax: format_indian(line.tax.total()),
            amount: format_indian(line.line_total),
        }
    }
}

#[derive(Template)]
#[template(path = "document.html")]
struct DocumentView<'a> {
    kind: DocumentKind,
    options: RenderOptions,
    show_discount_column: bool,
    item_columns: usize,
    company_name: &'a str,
    company_address: &'a str,
    company_gstin: String,
    company_phone: String,
    company_email: String,
    bank_name: &'a str,
    bank_account_name: &'a str,
    bank_account_number: &'a str,
    bank_ifsc: &'a str,
    bank_branch: String,
    has_bank_details: bool,
    party: &'a PartyInfo,
    party_location: String,
    party_gstin: String,
    party_contact: String,
    number: &'a str,
    date: String,
    valid_until: String,
    reference: String,
    notes: String,
    terms: Vec<String>,
    rows: Vec<ItemRow>,
    totals: TotalsBlock,
    amount_in_words: String,
}

/// DocumentRenderer turns a computed document into printable HTML
///
/// It only formats the figures it is handed; it never recomputes them.
#[derive(Debug, Clone)]
pub struct DocumentRenderer {
    config: BusinessConfig,
}

impl DocumentRenderer {
    pub fn new(config: BusinessConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BusinessConfig {
        &self.config
    }

    pub fn totals_block(&self, computation: &DocumentComputation) -> TotalsBlock {
        TotalsBlock::build(
            &computation.totals,
            computation.regime,
            &self.config.tax_labels,
            self.config.composite_tax_rate,
        )
    }

    pub fn render(
        &self,
        kind: DocumentKind,
        computation: &DocumentComputation,
        party: &PartyInfo,
        meta: &DocumentMeta,
        options: &RenderOptions,
    ) -> Result<String> {
        let company = &self.config.company;
        let bank = &self.config.bank;

        let show_discount_column = options.show_discount_column && computation.has_any_discount();
        // serial, description, quantity, unit, rate, taxable, tax, amount + optional columns
        let item_columns =
            8 + usize::from(options.show_hsn_sac) + usize::from(show_discount_column);

        let view = DocumentView {
            kind,
            options: *options,
            show_discount_column,
            item_columns,
            company_name: &company.name,
            company_address: &company.address,
            company_gstin: company.gstin.clone().unwrap_or_default(),
            company_phone: company.phone.clone().unwrap_or_default(),
            company_email: company.email.clone().unwrap_or_default(),
            bank_name: &bank.bank_name,
            bank_account_name: &bank.account_name,
            bank_account_number: &bank.account_number,
            bank_ifsc: &bank.ifsc,
            bank_branch: bank.branch.clone().unwrap_or_default(),
            has_bank_details: !bank.is_empty(),
            party,
            party_location: party.jurisdiction.to_string(),
            party_gstin: party.gstin.clone().unwrap_or_default(),
            party_contact: party_contact(party),
            number: &meta.number,
            date: format_date(meta.date),
            valid_until: format_date(meta.valid_until),
            reference: meta.reference.clone().unwrap_or_default(),
            notes: meta.notes.clone().unwrap_or_default(),
            terms: meta.terms.clone(),
            rows: computation
                .lines
                .iter()
                .enumerate()
                .map(|(idx, line)| ItemRow::from_line(idx + 1, line))
                .collect(),
            totals: self.totals_block(computation),
            amount_in_words: amount_in_words(computation.totals.grand_total)?,
        };

        let markup = view.render()?;

        debug!(
            kind = %kind,
            number = %meta.number,
            lines = computation.lines.len(),
            bytes = markup.len(),
            "Rendered document"
        );

        Ok(markup)
    }
}

impl Default for DocumentRenderer {
    fn default() -> Self {
        Self::new(BusinessConfig::default())
    }
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%d-%m-%Y").to_string())
        .unwrap_or_default()
}

fn party_contact(party: &PartyInfo) -> String {
    [&party.contact_person, &party.phone, &party.email]
        .into_iter()
        .flatten()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" | ")
}
