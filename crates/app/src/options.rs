//! Filter dropdown option derivation.

use stocklens_analytics::{CategoryFilter, SupplierFilter};
use stocklens_catalog::{Category, Product};

/// A dropdown entry: display label plus the filter it selects.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOption<F> {
    pub label: String,
    pub filter: F,
}

/// Supplier options: "All Suppliers" first, then each distinct non-empty
/// supplier in the order it first appears in the product list.
pub fn supplier_options(products: &[Product]) -> Vec<FilterOption<SupplierFilter>> {
    let mut options = vec![FilterOption {
        label: "All Suppliers".to_string(),
        filter: SupplierFilter::All,
    }];
    for product in products {
        if let Some(supplier) = &product.supplier
            && !supplier.is_empty()
            && !options.iter().any(|o| o.label == *supplier)
        {
            options.push(FilterOption {
                label: supplier.clone(),
                filter: SupplierFilter::Supplier(supplier.clone()),
            });
        }
    }
    options
}

/// Category options: "All Categories" first, then every known category.
pub fn category_options(categories: &[Category]) -> Vec<FilterOption<CategoryFilter>> {
    let mut options = vec![FilterOption {
        label: "All Categories".to_string(),
        filter: CategoryFilter::All,
    }];
    for category in categories {
        options.push(FilterOption {
            label: category.name.clone(),
            filter: CategoryFilter::Category(category.category_id.clone()),
        });
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use stocklens_core::{CategoryId, ProductId};

    fn product(id: &str, supplier: Option<&str>) -> Product {
        Product {
            product_id: ProductId::from_string(id),
            name: format!("Product {id}"),
            price: 1.0,
            stock_quantity: 1,
            category_id: None,
            supplier: supplier.map(str::to_string),
            sku: None,
            location: None,
            rating: None,
            created_at: None,
            photo: None,
        }
    }

    #[test]
    fn suppliers_are_unique_nonempty_and_in_first_seen_order() {
        let products = vec![
            product("1", Some("Zeta")),
            product("2", None),
            product("3", Some("Acme")),
            product("4", Some("")),
            product("5", Some("Zeta")),
        ];
        let options = supplier_options(&products);
        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["All Suppliers", "Zeta", "Acme"]);
        assert_eq!(options[0].filter, SupplierFilter::All);
        assert_eq!(
            options[1].filter,
            SupplierFilter::Supplier("Zeta".to_string())
        );
    }

    #[test]
    fn categories_lead_with_the_all_option() {
        let categories = vec![Category {
            category_id: CategoryId::from_string("c1"),
            name: "Electronics".to_string(),
        }];
        let options = category_options(&categories);
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].label, "All Categories");
        assert_eq!(options[0].filter, CategoryFilter::All);
        assert_eq!(options[1].label, "Electronics");
    }
}
