//! Tabular-text (CSV) rendering of a report snapshot.
//!
//! Emits a fixed, ordered sequence of labeled sections rather than one
//! rectangular table, so the writer runs in flexible mode. Field quoting
//! (delimiters, quotes, line breaks; embedded quotes doubled) is the `csv`
//! crate's standard behavior.

use stocklens_analytics::ReportSnapshot;
use stocklens_core::format_amount;

use crate::ReportError;

/// Serialize the snapshot into CSV bytes.
pub fn render(snapshot: &ReportSnapshot) -> Result<Vec<u8>, ReportError> {
    let mut wtr = ::csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());

    wtr.write_record(["Inventory Analysis Report", ""])?;
    wtr.write_record([
        "Date".to_string(),
        snapshot.generated_at.format("%Y-%m-%d").to_string(),
    ])?;
    wtr.write_record(["Time Range", snapshot.time_range.as_str()])?;
    wtr.write_record([""])?;

    wtr.write_record(["Summary Metrics", ""])?;
    wtr.write_record([
        "Total Inventory Value".to_string(),
        format_amount(snapshot.totals.total_inventory_value),
    ])?;
    wtr.write_record([
        "Total Items in Stock".to_string(),
        snapshot.totals.total_items.to_string(),
    ])?;
    wtr.write_record([
        "Total Products".to_string(),
        snapshot.totals.total_products.to_string(),
    ])?;
    wtr.write_record([
        "Low Stock Items".to_string(),
        snapshot.totals.low_stock_products.to_string(),
    ])?;
    wtr.write_record([""])?;

    wtr.write_record(["Category Breakdown", ""])?;
    wtr.write_record(["Category Name", "Stock Quantity", "Inventory Value"])?;
    for row in &snapshot.stock_by_category {
        wtr.write_record([
            row.name.clone(),
            row.stock_quantity.to_string(),
            plain_number(row.value),
        ])?;
    }
    wtr.write_record([""])?;

    wtr.write_record(["Top Products by Value", ""])?;
    wtr.write_record(["Product Name", "Value"])?;
    for row in &snapshot.top_products {
        wtr.write_record([row.name.clone(), plain_number(row.value)])?;
    }
    wtr.write_record([""])?;

    wtr.write_record(["Low Stock Items", ""])?;
    wtr.write_record(["Product Name", "Current Stock", "Value"])?;
    for item in &snapshot.low_stock {
        wtr.write_record([
            item.name.clone(),
            item.stock_quantity.to_string(),
            plain_number(item.inventory_value()),
        ])?;
    }

    wtr.flush()?;
    wtr.into_inner()
        .map_err(|e| ReportError::Io(e.into_error()))
}

/// Render an f64 the way the dashboard's numbers read: no trailing `.0` for
/// integral values.
fn plain_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use stocklens_analytics::{FilterSelection, ReportSnapshot};
    use stocklens_catalog::{Category, Product};
    use stocklens_core::{CategoryId, ProductId};

    fn snapshot() -> ReportSnapshot {
        let products = vec![
            Product {
                product_id: ProductId::from_string("A"),
                name: "Widget, Deluxe".to_string(),
                price: 100.0,
                stock_quantity: 5,
                category_id: Some(CategoryId::from_string("C1")),
                supplier: None,
                sku: None,
                location: None,
                rating: None,
                created_at: None,
                photo: None,
            },
            Product {
                product_id: ProductId::from_string("C"),
                name: "Crate".to_string(),
                price: 50.0,
                stock_quantity: 20,
                category_id: Some(CategoryId::from_string("C2")),
                supplier: None,
                sku: None,
                location: None,
                rating: None,
                created_at: None,
                photo: None,
            },
        ];
        let categories = vec![
            Category {
                category_id: CategoryId::from_string("C1"),
                name: "Cat1".to_string(),
            },
            Category {
                category_id: CategoryId::from_string("C2"),
                name: "Cat2".to_string(),
            },
        ];
        ReportSnapshot::compute(
            &products,
            &categories,
            &FilterSelection::default(),
            Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap(),
        )
    }

    #[test]
    fn sections_appear_in_fixed_order() {
        let bytes = render(&snapshot()).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        let header = text.find("Inventory Analysis Report").unwrap();
        let summary = text.find("Summary Metrics").unwrap();
        let categories = text.find("Category Breakdown").unwrap();
        let top = text.find("Top Products by Value").unwrap();
        // "Low Stock Items" also appears as a summary metric; the section
        // header is the last occurrence.
        let low = text.rfind("Low Stock Items,").unwrap();

        assert!(header < summary);
        assert!(summary < categories);
        assert!(categories < top);
        assert!(top < low);
    }

    #[test]
    fn totals_match_the_snapshot_exactly() {
        let snap = snapshot();
        let text = String::from_utf8(render(&snap).unwrap()).unwrap();

        assert!(text.contains("Total Inventory Value,1.5K XAF"));
        assert!(text.contains("Total Items in Stock,25"));
        assert!(text.contains("Total Products,2"));
        assert!(text.contains("Date,2025-03-10"));
        assert!(text.contains("Time Range,30days"));
    }

    #[test]
    fn fields_containing_delimiters_are_quoted() {
        let text = String::from_utf8(render(&snapshot()).unwrap()).unwrap();
        // "Widget, Deluxe" contains the delimiter and must be quoted.
        assert!(text.contains("\"Widget, Deluxe\""));
    }

    #[test]
    fn category_rows_carry_stock_and_value() {
        let text = String::from_utf8(render(&snapshot()).unwrap()).unwrap();
        assert!(text.contains("Cat1,5,500"));
        assert!(text.contains("Cat2,20,1000"));
    }

    #[test]
    fn plain_number_strips_integral_fractions() {
        assert_eq!(plain_number(520.0), "520");
        assert_eq!(plain_number(10.5), "10.5");
        assert_eq!(plain_number(0.0), "0");
    }
}
