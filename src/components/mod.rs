//! UI Components
//!
//! Leptos components for the lists overview and the planner.

mod delete_confirm_button;
mod lists_manager;
mod new_entry_modal;
mod pack_table;
mod planner_page;
mod quick_items;
mod status_banner;

pub use delete_confirm_button::DeleteConfirmButton;
pub use lists_manager::ListsManager;
pub use new_entry_modal::NewEntryModal;
pub use pack_table::PackTable;
pub use planner_page::PlannerPage;
pub use quick_items::QuickItems;
pub use status_banner::{Status, StatusBanner, SAVED_BANNER_MS};
