//! Quick Items Component
//!
//! One button per catalog label; each click adds or raises that item.

use leptos::prelude::*;

use crate::planner::{PlannerEvent, QUICK_ITEMS};

#[component]
pub fn QuickItems(on_event: Callback<PlannerEvent>) -> impl IntoView {
    view! {
        <section class="quick-items">
            {QUICK_ITEMS.iter().map(|label| {
                let label = label.to_string();
                let text = label.clone();
                view! {
                    <button
                        class="quick-item-btn"
                        on:click=move |_| on_event.run(PlannerEvent::QuickItem(label.clone()))
                    >
                        {text}
                    </button>
                }
            }).collect_view()}
        </section>
    }
}
