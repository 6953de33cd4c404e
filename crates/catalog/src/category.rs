use serde::{Deserialize, Serialize};

use stocklens_core::CategoryId;

/// Display name for products whose category id matches no known category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Category record as served by the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub category_id: CategoryId,
    pub name: String,
}

/// Resolve a product's display category: the matching category name, or
/// [`UNCATEGORIZED`] when the reference is absent or dangling.
pub fn category_name<'a>(categories: &'a [Category], id: Option<&CategoryId>) -> &'a str {
    id.and_then(|id| categories.iter().find(|c| &c.category_id == id))
        .map(|c| c.name.as_str())
        .unwrap_or(UNCATEGORIZED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_categories_and_falls_back_otherwise() {
        let categories = vec![
            Category {
                category_id: CategoryId::from_string("c-1"),
                name: "Tools".to_string(),
            },
            Category {
                category_id: CategoryId::from_string("c-2"),
                name: "Fasteners".to_string(),
            },
        ];

        let known = CategoryId::from_string("c-2");
        let dangling = CategoryId::from_string("c-9");

        assert_eq!(category_name(&categories, Some(&known)), "Fasteners");
        assert_eq!(category_name(&categories, Some(&dangling)), UNCATEGORIZED);
        assert_eq!(category_name(&categories, None), UNCATEGORIZED);
    }
}
