//! Event Dispatcher
//!
//! Turns one user interaction into one editor mutation, the re-render it
//! needs, and whatever has to happen outside the editor afterwards.

use super::editor::{EditorState, QuickAdd, RowKey};
use super::view::RenderPatch;

/// Labels offered as one-click add buttons
pub const QUICK_ITEMS: &[&str] = &[
    "clothes",
    "socks",
    "food",
    "swimsuit",
    "phone charger",
    "first-aid kit",
];

/// Interactions the planner page can emit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannerEvent {
    NewEntry { label: String, to_pack: u32 },
    QuickItem(String),
    Check(RowKey),
    Delete(RowKey),
    Save,
    Back,
}

/// Work left to the page after the mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Push the full list
    Save,
    /// Push the full list, then re-fetch it for store-assigned ids
    SaveAndReload,
    NavigateToManager,
    /// Show a message without touching the store
    Report(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub patch: RenderPatch,
    pub effect: Effect,
}

impl Dispatch {
    fn new(patch: RenderPatch, effect: Effect) -> Self {
        Self { patch, effect }
    }
}

/// Apply `event` to `state`
pub fn dispatch(state: &mut EditorState, event: PlannerEvent) -> Dispatch {
    log::debug!("[PLANNER] dispatch {:?}", event);
    match event {
        PlannerEvent::Check(key) => match state.toggle_check(&key) {
            Ok(_) => Dispatch::new(RenderPatch::UpdateRow(key), Effect::None),
            Err(e) => Dispatch::new(RenderPatch::None, Effect::Report(e.to_string())),
        },
        PlannerEvent::Delete(key) => {
            if state.delete_item(&key).is_some() {
                Dispatch::new(RenderPatch::RemoveRow(key), Effect::None)
            } else {
                Dispatch::new(RenderPatch::None, Effect::None)
            }
        }
        PlannerEvent::NewEntry { label, to_pack } => match state.add_entry(&label, to_pack) {
            Ok(_) => Dispatch::new(RenderPatch::Rebuild, Effect::None),
            Err(e) => Dispatch::new(RenderPatch::None, Effect::Report(e.to_string())),
        },
        PlannerEvent::QuickItem(label) => {
            if let QuickAdd::Incremented(n) = state.quick_add(&label) {
                log::debug!("[PLANNER] quick item {:?} raised {} row(s)", label, n);
            }
            // Quick items persist immediately, unlike every other edit.
            Dispatch::new(RenderPatch::Rebuild, Effect::SaveAndReload)
        }
        PlannerEvent::Save => Dispatch::new(RenderPatch::None, Effect::Save),
        PlannerEvent::Back => Dispatch::new(RenderPatch::None, Effect::NavigateToManager),
    }
}
