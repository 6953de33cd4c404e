use serde::{Deserialize, Serialize};

use stocklens_catalog::Product;
use stocklens_core::CategoryId;

/// Time range selector for the dashboard. Changing it regenerates the mocked
/// stock-movement series only; category/supplier/total computations depend
/// solely on the product list and the other two filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "7days")]
    Days7,
    #[default]
    #[serde(rename = "30days")]
    Days30,
    #[serde(rename = "90days")]
    Days90,
    #[serde(rename = "year")]
    Year,
    #[serde(rename = "all")]
    All,
}

impl TimeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Days7 => "7days",
            TimeRange::Days30 => "30days",
            TimeRange::Days90 => "90days",
            TimeRange::Year => "year",
            TimeRange::All => "all",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Days7 => "Last 7 Days",
            TimeRange::Days30 => "Last 30 Days",
            TimeRange::Days90 => "Last 90 Days",
            TimeRange::Year => "Last Year",
            TimeRange::All => "All Time",
        }
    }

    /// Number of days of movement history to synthesize. "All time" has no
    /// persisted ground truth, so it falls back to the 30-day window.
    pub fn series_days(&self) -> u32 {
        match self {
            TimeRange::Days7 => 7,
            TimeRange::Days30 => 30,
            TimeRange::Days90 => 90,
            TimeRange::Year => 365,
            TimeRange::All => 30,
        }
    }
}

/// Category selector. `All` includes every record, categorized or not.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(CategoryId),
}

impl CategoryFilter {
    fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(id) => product.category_id.as_ref() == Some(id),
        }
    }
}

/// Supplier selector. Matching is exact and case-sensitive on the literal
/// supplier string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SupplierFilter {
    #[default]
    All,
    Supplier(String),
}

impl SupplierFilter {
    fn matches(&self, product: &Product) -> bool {
        match self {
            SupplierFilter::All => true,
            SupplierFilter::Supplier(name) => product.supplier.as_deref() == Some(name.as_str()),
        }
    }
}

/// The active dashboard filter state. Unset selectors default to "all".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSelection {
    pub time_range: TimeRange,
    pub category: CategoryFilter,
    pub supplier: SupplierFilter,
}

/// Select the subset of products passing the category and supplier filters.
/// Pure; no error conditions.
pub fn filter_products(products: &[Product], selection: &FilterSelection) -> Vec<Product> {
    products
        .iter()
        .filter(|p| selection.category.matches(p) && selection.supplier.matches(p))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stocklens_core::ProductId;

    fn product(id: &str, category: Option<&str>, supplier: Option<&str>) -> Product {
        Product {
            product_id: ProductId::from_string(id),
            name: id.to_string(),
            price: 1.0,
            stock_quantity: 1,
            category_id: category.map(CategoryId::from_string),
            supplier: supplier.map(str::to_string),
            sku: None,
            location: None,
            rating: None,
            created_at: None,
            photo: None,
        }
    }

    #[test]
    fn default_selection_includes_everything() {
        let products = vec![
            product("a", Some("c1"), Some("Acme")),
            product("b", None, None),
        ];
        let filtered = filter_products(&products, &FilterSelection::default());
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn category_filter_excludes_uncategorized_products() {
        let products = vec![
            product("a", Some("c1"), None),
            product("b", Some("c2"), None),
            product("c", None, None),
        ];
        let selection = FilterSelection {
            category: CategoryFilter::Category(CategoryId::from_string("c1")),
            ..FilterSelection::default()
        };
        let filtered = filter_products(&products, &selection);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].product_id, ProductId::from_string("a"));
    }

    #[test]
    fn supplier_filter_is_case_sensitive_and_exact() {
        let products = vec![
            product("a", None, Some("Acme")),
            product("b", None, Some("acme")),
            product("c", None, None),
        ];
        let selection = FilterSelection {
            supplier: SupplierFilter::Supplier("Acme".to_string()),
            ..FilterSelection::default()
        };
        let filtered = filter_products(&products, &selection);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].product_id, ProductId::from_string("a"));
    }

    #[test]
    fn both_filters_must_match() {
        let products = vec![
            product("a", Some("c1"), Some("Acme")),
            product("b", Some("c1"), Some("Bolt Co")),
            product("c", Some("c2"), Some("Acme")),
        ];
        let selection = FilterSelection {
            category: CategoryFilter::Category(CategoryId::from_string("c1")),
            supplier: SupplierFilter::Supplier("Acme".to_string()),
            ..FilterSelection::default()
        };
        let filtered = filter_products(&products, &selection);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].product_id, ProductId::from_string("a"));
    }

    #[test]
    fn time_range_wire_names_round_trip() {
        for range in [
            TimeRange::Days7,
            TimeRange::Days30,
            TimeRange::Days90,
            TimeRange::Year,
            TimeRange::All,
        ] {
            let json = serde_json::to_string(&range).unwrap();
            assert_eq!(json, format!("\"{}\"", range.as_str()));
            let back: TimeRange = serde_json::from_str(&json).unwrap();
            assert_eq!(back, range);
        }
    }
}
