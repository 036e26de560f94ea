//! Status Banner Component
//!
//! One-line feedback for loads and saves.

use leptos::prelude::*;

/// How long "Saved" stays on screen
pub const SAVED_BANNER_MS: u32 = 2_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Idle,
    Loading,
    Saving,
    Saved,
    Failed(String),
}

impl Status {
    fn text(&self) -> Option<String> {
        match self {
            Status::Idle => None,
            Status::Loading => Some("Loading…".to_string()),
            Status::Saving => Some("Saving…".to_string()),
            Status::Saved => Some("Saved".to_string()),
            Status::Failed(msg) => Some(msg.clone()),
        }
    }

    fn class(&self) -> &'static str {
        match self {
            Status::Failed(_) => "status-banner error",
            Status::Saved => "status-banner ok",
            _ => "status-banner",
        }
    }
}

#[component]
pub fn StatusBanner(status: RwSignal<Status>) -> impl IntoView {
    move || {
        let current = status.get();
        current.text().map(|text| {
            view! { <div class=current.class() role="status">{text}</div> }
        })
    }
}
