//! Summary derivations over the filtered product set.
//!
//! Every function here is pure and degrades gracefully to empty collections
//! and zero totals on empty input. The numeric contract throughout: a
//! grouping's `value` is the sum of `price * stock_quantity` over exactly
//! the filtered products belonging to that group.

use serde::Serialize;

use stocklens_catalog::{Category, Product};

/// How many rows the top-products and low-stock views carry.
const TOP_N: usize = 5;

/// Display names longer than this are truncated with an ellipsis marker.
const NAME_DISPLAY_LIMIT: usize = 20;

/// Headline totals for the summary cards.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub total_inventory_value: f64,
    pub total_items: u64,
    pub total_products: usize,
    pub low_stock_products: usize,
}

pub fn totals(filtered: &[Product]) -> Totals {
    Totals {
        total_inventory_value: filtered.iter().map(Product::inventory_value).sum(),
        total_items: filtered.iter().map(|p| u64::from(p.stock_quantity)).sum(),
        total_products: filtered.len(),
        low_stock_products: filtered.iter().filter(|p| p.is_low_stock()).count(),
    }
}

/// Per-category product counts and values; feeds the distribution pie.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySlice {
    pub name: String,
    pub product_count: usize,
    pub value: f64,
}

/// Categories with zero matching products are dropped, not emitted as
/// zero-rows.
pub fn category_distribution(filtered: &[Product], categories: &[Category]) -> Vec<CategorySlice> {
    categories
        .iter()
        .filter_map(|category| {
            let members: Vec<&Product> = filtered
                .iter()
                .filter(|p| p.category_id.as_ref() == Some(&category.category_id))
                .collect();
            if members.is_empty() {
                return None;
            }
            Some(CategorySlice {
                name: category.name.clone(),
                product_count: members.len(),
                value: members.iter().map(|p| p.inventory_value()).sum(),
            })
        })
        .collect()
}

/// Per-category stock and value breakdown; feeds the bar chart and every
/// exporter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    pub name: String,
    pub product_count: usize,
    pub stock_quantity: u64,
    pub value: f64,
}

/// Categories whose matching products hold zero stock are dropped.
pub fn stock_by_category(filtered: &[Product], categories: &[Category]) -> Vec<CategoryBreakdown> {
    categories
        .iter()
        .filter_map(|category| {
            let members: Vec<&Product> = filtered
                .iter()
                .filter(|p| p.category_id.as_ref() == Some(&category.category_id))
                .collect();
            let stock_quantity: u64 = members.iter().map(|p| u64::from(p.stock_quantity)).sum();
            if stock_quantity == 0 {
                return None;
            }
            Some(CategoryBreakdown {
                name: category.name.clone(),
                product_count: members.len(),
                stock_quantity,
                value: members.iter().map(|p| p.inventory_value()).sum(),
            })
        })
        .collect()
}

/// A product ranked by inventory value. The name may be truncated for
/// display; the value is always the exact ranked figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedProduct {
    pub name: String,
    pub value: f64,
}

/// The top five products by `price * stock_quantity`, descending.
pub fn top_products_by_value(filtered: &[Product]) -> Vec<RankedProduct> {
    let mut ranked: Vec<&Product> = filtered.iter().collect();
    ranked.sort_by(|a, b| b.inventory_value().total_cmp(&a.inventory_value()));
    ranked
        .into_iter()
        .take(TOP_N)
        .map(|p| RankedProduct {
            name: truncate_name(&p.name),
            value: p.inventory_value(),
        })
        .collect()
}

fn truncate_name(name: &str) -> String {
    if name.chars().count() > NAME_DISPLAY_LIMIT {
        let mut short: String = name.chars().take(NAME_DISPLAY_LIMIT).collect();
        short.push_str("...");
        short
    } else {
        name.to_string()
    }
}

/// Per-supplier counts and values; feeds the supplier pie.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierSlice {
    pub name: String,
    pub product_count: usize,
    pub value: f64,
}

/// Group by the literal supplier string, case-sensitive. Products with an
/// empty or absent supplier are excluded entirely. Suppliers appear in
/// first-seen order.
pub fn supplier_distribution(filtered: &[Product]) -> Vec<SupplierSlice> {
    let mut order: Vec<&str> = Vec::new();
    for product in filtered {
        if let Some(supplier) = product.supplier.as_deref()
            && !supplier.is_empty()
            && !order.contains(&supplier)
        {
            order.push(supplier);
        }
    }

    order
        .into_iter()
        .map(|supplier| {
            let members: Vec<&Product> = filtered
                .iter()
                .filter(|p| p.supplier.as_deref() == Some(supplier))
                .collect();
            SupplierSlice {
                name: supplier.to_string(),
                product_count: members.len(),
                value: members.iter().map(|p| p.inventory_value()).sum(),
            }
        })
        .collect()
}

/// Products below the low-stock threshold, ascending by stock quantity,
/// capped at five entries. This exact list backs both the on-screen alert
/// table and the exported reports.
pub fn low_stock_items(filtered: &[Product]) -> Vec<Product> {
    let mut low: Vec<Product> = filtered.iter().filter(|p| p.is_low_stock()).cloned().collect();
    low.sort_by_key(|p| p.stock_quantity);
    low.truncate(TOP_N);
    low
}
