//! Planner
//!
//! Client core of the list editor:
//! - editor: in-memory list and its mutations
//! - view: table projection of the editor state
//! - dispatch: user events to mutations, re-renders and effects

mod dispatch;
mod editor;
mod view;

pub use dispatch::{dispatch, Effect, PlannerEvent, QUICK_ITEMS};
pub use editor::EditorState;
pub use view::{render_table, TableView, TABLE_HEADERS};
