//! Dashboard state container.
//!
//! All UI state lives in one value and changes only through [`reduce`].
//! Transitions are pure; the caller owns when and where the new state is
//! stored.

use stocklens_analytics::{CategoryFilter, FilterSelection, SupplierFilter, TimeRange};
use stocklens_core::ProductId;

/// Product create/edit modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Create,
    Edit(ProductId),
}

/// Complete dashboard UI state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub filters: FilterSelection,
    pub export_menu_open: bool,
    pub product_modal: ModalState,
}

/// Every state transition the dashboard can perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetTimeRange(TimeRange),
    SetCategoryFilter(CategoryFilter),
    SetSupplierFilter(SupplierFilter),
    ToggleExportMenu,
    CloseExportMenu,
    OpenCreateProduct,
    OpenEditProduct(ProductId),
    CloseProductModal,
}

/// Apply one action. Filter changes leave the menus and modal untouched;
/// menu and modal actions leave the filters untouched.
pub fn reduce(mut state: DashboardState, action: Action) -> DashboardState {
    match action {
        Action::SetTimeRange(range) => state.filters.time_range = range,
        Action::SetCategoryFilter(filter) => state.filters.category = filter,
        Action::SetSupplierFilter(filter) => state.filters.supplier = filter,
        Action::ToggleExportMenu => state.export_menu_open = !state.export_menu_open,
        Action::CloseExportMenu => state.export_menu_open = false,
        Action::OpenCreateProduct => state.product_modal = ModalState::Create,
        Action::OpenEditProduct(id) => state.product_modal = ModalState::Edit(id),
        Action::CloseProductModal => state.product_modal = ModalState::Closed,
    }
    state
}
