//! Dashboard application layer: UI state container, filter dropdown
//! options, and export orchestration.

pub mod export;
pub mod options;
pub mod state;

pub use export::run_export;
pub use options::{FilterOption, category_options, supplier_options};
pub use state::{Action, DashboardState, ModalState, reduce};
