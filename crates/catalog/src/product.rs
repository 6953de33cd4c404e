use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stocklens_core::{CategoryId, DomainError, DomainResult, ProductId};

/// A product is "low stock" below this many units. Fixed policy, not
/// configurable.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Product record as served by the remote API (camelCase on the wire).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: ProductId,
    pub name: String,
    /// Non-negative, currency-agnostic unit price.
    pub price: f64,
    pub stock_quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// 0–5 stars.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Reference to an externally hosted image, if one was uploaded.
    #[serde(default)]
    pub photo: Option<String>,
}

impl Product {
    /// Value this product contributes to inventory totals.
    pub fn inventory_value(&self) -> f64 {
        self.price * f64::from(self.stock_quantity)
    }

    pub fn is_low_stock(&self) -> bool {
        self.stock_quantity < LOW_STOCK_THRESHOLD
    }

    /// Whether this product participates in supplier groupings. Records with
    /// an empty or absent supplier are excluded entirely (no "unknown"
    /// bucket).
    pub fn has_supplier(&self) -> bool {
        self.supplier.as_deref().is_some_and(|s| !s.is_empty())
    }
}

/// Payload for creating a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub stock_quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
}

impl NewProduct {
    /// Required-field enforcement. Runs before any network call so a
    /// malformed submission never reaches the gateway.
    pub fn validate(&self) -> DomainResult<()> {
        validate_fields(Some(&self.name), self.price, self.rating)
    }
}

/// Partial update payload; absent fields are left untouched by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
}

impl ProductPatch {
    pub fn validate(&self) -> DomainResult<()> {
        validate_fields(self.name.as_deref(), self.price.unwrap_or(0.0), self.rating)
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

fn validate_fields(name: Option<&str>, price: f64, rating: Option<f32>) -> DomainResult<()> {
    if let Some(name) = name
        && name.trim().is_empty()
    {
        return Err(DomainError::validation("name cannot be empty"));
    }
    if !price.is_finite() || price < 0.0 {
        return Err(DomainError::validation("price must be a non-negative number"));
    }
    if let Some(rating) = rating
        && !(0.0..=5.0).contains(&rating)
    {
        return Err(DomainError::validation("rating must be between 0 and 5"));
    }
    Ok(())
}
