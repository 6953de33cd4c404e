//! One-shot report snapshot shared by the dashboard and every exporter.

use chrono::{DateTime, Utc};

use stocklens_catalog::{Category, Product};

use crate::aggregate::{
    CategoryBreakdown, RankedProduct, Totals, low_stock_items, stock_by_category,
    top_products_by_value, totals,
};
use crate::filter::{FilterSelection, TimeRange, filter_products};

/// Everything a report needs, computed exactly once per export or render.
///
/// Exporters must consume this snapshot rather than re-deriving aggregates:
/// computing twice is how displayed and exported figures drift apart under
/// live filter changes.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSnapshot {
    pub generated_at: DateTime<Utc>,
    pub time_range: TimeRange,
    pub totals: Totals,
    pub stock_by_category: Vec<CategoryBreakdown>,
    pub top_products: Vec<RankedProduct>,
    pub low_stock: Vec<Product>,
    /// The full filtered product list (Products sheet of the workbook).
    pub products: Vec<Product>,
}

impl ReportSnapshot {
    pub fn compute(
        products: &[Product],
        categories: &[Category],
        selection: &FilterSelection,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let filtered = filter_products(products, selection);
        Self {
            generated_at,
            time_range: selection.time_range,
            totals: totals(&filtered),
            stock_by_category: stock_by_category(&filtered, categories),
            top_products: top_products_by_value(&filtered),
            low_stock: low_stock_items(&filtered),
            products: filtered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::CategoryFilter;
    use stocklens_core::{CategoryId, ProductId};

    fn product(name: &str, price: f64, stock: u32, category: &str) -> Product {
        Product {
            product_id: ProductId::from_string(name),
            name: name.to_string(),
            price,
            stock_quantity: stock,
            category_id: Some(CategoryId::from_string(category)),
            supplier: None,
            sku: None,
            location: None,
            rating: None,
            created_at: None,
            photo: None,
        }
    }

    fn fixtures() -> (Vec<Product>, Vec<Category>) {
        let products = vec![
            product("A", 100.0, 5, "C1"),
            product("B", 10.0, 2, "C1"),
            product("C", 50.0, 20, "C2"),
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
        (products, categories)
    }

    #[test]
    fn snapshot_and_direct_aggregation_agree() {
        let (products, categories) = fixtures();
        let selection = FilterSelection::default();
        let now = Utc::now();

        let snapshot = ReportSnapshot::compute(&products, &categories, &selection, now);

        assert_eq!(snapshot.totals.total_inventory_value, 1520.0);
        assert_eq!(snapshot.totals.total_items, 27);
        assert_eq!(snapshot.products.len(), 3);
        assert_eq!(snapshot.low_stock, low_stock_items(&snapshot.products));
        assert_eq!(snapshot.top_products, top_products_by_value(&snapshot.products));
    }

    #[test]
    fn category_filter_narrows_the_snapshot() {
        let (products, categories) = fixtures();
        let selection = FilterSelection {
            category: CategoryFilter::Category(CategoryId::from_string("C2")),
            ..FilterSelection::default()
        };

        let snapshot = ReportSnapshot::compute(&products, &categories, &selection, Utc::now());

        assert_eq!(snapshot.products.len(), 1);
        assert_eq!(snapshot.totals.total_inventory_value, 1000.0);
        assert_eq!(snapshot.stock_by_category.len(), 1);
        assert_eq!(snapshot.stock_by_category[0].name, "Cat2");
        assert_eq!(snapshot.stock_by_category[0].stock_quantity, 20);
    }
}
