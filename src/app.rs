//! Packing-list Frontend App
//!
//! Switches between the lists overview and the planner.

use leptos::prelude::*;

use crate::components::{ListsManager, PlannerPage};
use crate::config::ClientConfig;
use crate::context::{AppContext, Page};

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_window();
    log::info!("[APP] Using packing API at {}", config.api_base);

    let (page, set_page) = signal(Page::Manager);

    // Provide context to all children
    provide_context(AppContext::new((page, set_page), config));

    view! {
        <main class="app-layout">
            // Each page is rebuilt on entry and disposed on exit, together
            // with every handler it registered.
            {move || match page.get() {
                Page::Manager => view! { <ListsManager /> }.into_any(),
                Page::Planner(id) => view! { <PlannerPage list_id=id /> }.into_any(),
            }}
        </main>
    }
}
