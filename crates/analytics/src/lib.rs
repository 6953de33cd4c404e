//! Pure derivation layer: filtered product sets, summary rows, and totals.
//!
//! Everything in this crate is a deterministic function of its inputs —
//! no IO, no clocks, no hidden state. The one exception is the mocked
//! stock-movement series, which is explicitly seeded and non-authoritative.

pub mod aggregate;
pub mod filter;
pub mod snapshot;
pub mod timeseries;

pub use aggregate::{
    CategoryBreakdown, CategorySlice, RankedProduct, SupplierSlice, Totals, category_distribution,
    low_stock_items, stock_by_category, supplier_distribution, top_products_by_value, totals,
};
pub use filter::{CategoryFilter, FilterSelection, SupplierFilter, TimeRange, filter_products};
pub use snapshot::ReportSnapshot;
pub use timeseries::{StockMovementPoint, stock_movement_series};
