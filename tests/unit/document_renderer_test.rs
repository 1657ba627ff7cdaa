// Rendering purity and layout grammar
//
// - one fixed computation renders identical totals figures for every kind
// - option flags add or remove blocks without touching any number
// - the discount column appears only when something is discounted

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::TestDataFactory;
use quoteflow::documents::{DocumentKind, DocumentRenderer, RenderOptions};
use quoteflow::line_items::Discount;
use quoteflow::totals::{DocumentCharge, DocumentComputation};
use rust_decimal_macros::dec;

fn renderer() -> DocumentRenderer {
    DocumentRenderer::new(TestDataFactory::business_config())
}

fn computation(discounted: bool) -> DocumentComputation {
    let mut panel = TestDataFactory::item("Solar Panel 540W", dec!(4), dec!(14500))
        .with_unit("Nos")
        .with_hsn_sac("8541");
    if discounted {
        panel = panel.with_discount(Discount::percentage(dec!(5)));
    }

    TestDataFactory::aggregator().evaluate(
        &[panel, TestDataFactory::item("Installation", dec!(1), dec!(8000))],
        &[DocumentCharge::new("Freight", dec!(1500))],
        &[],
        None,
        &TestDataFactory::other_region(),
    )
}

fn amounts(block: &quoteflow::documents::TotalsBlock) -> Vec<String> {
    block.rows.iter().map(|row| row.amount.clone()).collect()
}

#[test]
fn test_totals_identical_across_kinds() {
    let renderer = renderer();
    let computation = computation(true);
    let party = TestDataFactory::party(TestDataFactory::other_region());
    let meta = TestDataFactory::meta("DOC-1");
    let options = RenderOptions::default();

    let quotation = renderer
        .render(DocumentKind::Quotation, &computation, &party, &meta, &options)
        .unwrap();
    let purchase_order = renderer
        .render(DocumentKind::PurchaseOrder, &computation, &party, &meta, &options)
        .unwrap();

    let block = renderer.totals_block(&computation);
    for row in &block.rows {
        assert!(quotation.contains(&row.amount), "quotation missing {}", row.amount);
        assert!(purchase_order.contains(&row.amount), "purchase order missing {}", row.amount);
    }

    let totals_table = |html: &str| -> String {
        let start = html.find("<table class=\"totals\">").unwrap();
        let end = start + html[start..].find("</table>").unwrap();
        html[start..end].to_string()
    };
    assert_eq!(totals_table(&quotation), totals_table(&purchase_order));
}

#[test]
fn test_totals_block_order() {
    let block = renderer().totals_block(&computation(false));
    let labels: Vec<&str> = block.rows.iter().map(|row| row.label.as_str()).collect();
    assert_eq!(labels, vec!["Subtotal", "IGST @ 18%", "Extra Charges", "Grand Total"]);

    // 58000 + 8000 = 66000, IGST 11880, freight 1500
    assert_eq!(
        amounts(&block),
        vec!["66,000.00", "11,880.00", "1,500.00", "79,380.00"]
    );
}

#[test]
fn test_options_never_change_numbers() {
    let renderer = renderer();
    let computation = computation(true);
    let party = TestDataFactory::party(TestDataFactory::other_region());
    let meta = TestDataFactory::meta("QT-9");

    let full = renderer
        .render(DocumentKind::Quotation, &computation, &party, &meta, &RenderOptions::default())
        .unwrap();
    let minimal = renderer
        .render(DocumentKind::Quotation, &computation, &party, &meta, &RenderOptions::minimal())
        .unwrap();

    for amount in amounts(&renderer.totals_block(&computation)) {
        assert!(full.contains(&amount));
        assert!(minimal.contains(&amount));
    }
    assert!(full.contains("Bank Details"));
    assert!(!minimal.contains("Bank Details"));
    assert!(full.contains("HSN/SAC"));
    assert!(!minimal.contains("HSN/SAC"));
    assert!(!minimal.contains("Amount in words"));
}

#[test]
fn test_discount_column_only_when_discounted() {
    let renderer = renderer();
    let party = TestDataFactory::party(TestDataFactory::other_region());
    let meta = TestDataFactory::meta("PF-3");
    let options = RenderOptions::default();

    let with = renderer
        .render(DocumentKind::ProformaInvoice, &computation(true), &party, &meta, &options)
        .unwrap();
    let without = renderer
        .render(DocumentKind::ProformaInvoice, &computation(false), &party, &meta, &options)
        .unwrap();

    assert!(with.contains("<th>Discount</th>"));
    assert!(!without.contains("<th>Discount</th>"));
}

#[test]
fn test_kind_specific_labels() {
    let renderer = renderer();
    let computation = computation(false);
    let party = TestDataFactory::party(TestDataFactory::other_region());
    let meta = TestDataFactory::meta("PO-42");

    let po = renderer
        .render(DocumentKind::PurchaseOrder, &computation, &party, &meta, &RenderOptions::default())
        .unwrap();
    assert!(po.contains("Purchase Order"));
    assert!(po.contains("PO No."));
    assert!(po.contains("Vendor"));
    assert!(po.contains("Delivery By"));
    assert!(po.contains("30-04-2024"));
    assert!(po.contains("Delivery within 3 weeks"));
}
