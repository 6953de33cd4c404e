//! Multi-sheet XLSX rendering of a report snapshot.
//!
//! Four independent tables: Summary, Categories, Products, Low Stock. Each
//! data sheet starts with a header row; there are no cross-sheet formulas.

use rust_xlsxwriter::{Workbook, Worksheet};

use stocklens_analytics::ReportSnapshot;
use stocklens_catalog::Product;

use crate::ReportError;

/// Serialize the snapshot into XLSX workbook bytes.
pub fn render(snapshot: &ReportSnapshot) -> Result<Vec<u8>, ReportError> {
    let mut workbook = Workbook::new();
    workbook.push_worksheet(summary_sheet(snapshot)?);
    workbook.push_worksheet(categories_sheet(snapshot)?);
    workbook.push_worksheet(products_sheet(snapshot)?);
    workbook.push_worksheet(low_stock_sheet(snapshot)?);
    Ok(workbook.save_to_buffer()?)
}

fn summary_sheet(snapshot: &ReportSnapshot) -> Result<Worksheet, ReportError> {
    let mut ws = Worksheet::new();
    ws.set_name("Summary")?;

    ws.write_string(0, 0, "Inventory Analysis Report")?;
    ws.write_string(1, 0, "Date")?;
    ws.write_string(1, 1, snapshot.generated_at.format("%Y-%m-%d").to_string())?;
    ws.write_string(2, 0, "Time Range")?;
    ws.write_string(2, 1, snapshot.time_range.as_str())?;

    ws.write_string(4, 0, "Summary Metrics")?;
    ws.write_string(5, 0, "Total Inventory Value")?;
    ws.write_number(5, 1, snapshot.totals.total_inventory_value)?;
    ws.write_string(6, 0, "Total Items in Stock")?;
    ws.write_number(6, 1, snapshot.totals.total_items as f64)?;
    ws.write_string(7, 0, "Total Products")?;
    ws.write_number(7, 1, snapshot.totals.total_products as f64)?;
    ws.write_string(8, 0, "Low Stock Items")?;
    ws.write_number(8, 1, snapshot.totals.low_stock_products as f64)?;

    Ok(ws)
}

fn categories_sheet(snapshot: &ReportSnapshot) -> Result<Worksheet, ReportError> {
    let mut ws = Worksheet::new();
    ws.set_name("Categories")?;

    write_header(&mut ws, &["Category Name", "Stock Quantity", "Inventory Value"])?;
    for (i, row) in snapshot.stock_by_category.iter().enumerate() {
        let r = (i + 1) as u32;
        ws.write_string(r, 0, row.name.as_str())?;
        ws.write_number(r, 1, row.stock_quantity as f64)?;
        ws.write_number(r, 2, row.value)?;
    }

    Ok(ws)
}

fn products_sheet(snapshot: &ReportSnapshot) -> Result<Worksheet, ReportError> {
    let mut ws = Worksheet::new();
    ws.set_name("Products")?;

    write_header(
        &mut ws,
        &["Name", "SKU", "Category ID", "Supplier", "Price", "Stock", "Value"],
    )?;
    for (i, product) in snapshot.products.iter().enumerate() {
        let r = (i + 1) as u32;
        ws.write_string(r, 0, product.name.as_str())?;
        ws.write_string(r, 1, product.sku.as_deref().unwrap_or(""))?;
        ws.write_string(
            r,
            2,
            product
                .category_id
                .as_ref()
                .map(|id| id.as_str())
                .unwrap_or(""),
        )?;
        ws.write_string(r, 3, product.supplier.as_deref().unwrap_or(""))?;
        ws.write_number(r, 4, product.price)?;
        ws.write_number(r, 5, f64::from(product.stock_quantity))?;
        ws.write_number(r, 6, product.inventory_value())?;
    }

    Ok(ws)
}

fn low_stock_sheet(snapshot: &ReportSnapshot) -> Result<Worksheet, ReportError> {
    let mut ws = Worksheet::new();
    ws.set_name("Low Stock")?;

    write_header(&mut ws, &["Name", "SKU", "Stock", "Price", "Value"])?;
    for (i, item) in snapshot.low_stock.iter().enumerate() {
        let r = (i + 1) as u32;
        write_low_stock_row(&mut ws, r, item)?;
    }

    Ok(ws)
}

fn write_low_stock_row(ws: &mut Worksheet, r: u32, item: &Product) -> Result<(), ReportError> {
    ws.write_string(r, 0, item.name.as_str())?;
    ws.write_string(r, 1, item.sku.as_deref().unwrap_or(""))?;
    ws.write_number(r, 2, f64::from(item.stock_quantity))?;
    ws.write_number(r, 3, item.price)?;
    ws.write_number(r, 4, item.inventory_value())?;
    Ok(())
}

fn write_header(ws: &mut Worksheet, labels: &[&str]) -> Result<(), ReportError> {
    for (col, label) in labels.iter().enumerate() {
        ws.write_string(0, col as u16, *label)?;
    }
    Ok(())
}
