//! New Entry Modal Component
//!
//! Form for adding an item with a target count to the open list.

use leptos::prelude::*;

use crate::planner::PlannerEvent;

#[component]
pub fn NewEntryModal(
    show: ReadSignal<bool>,
    set_show: WriteSignal<bool>,
    on_event: Callback<PlannerEvent>,
) -> impl IntoView {
    let (label, set_label) = signal(String::new());
    let (count, set_count) = signal(String::from("1"));

    let close = move || {
        set_label.set(String::new());
        set_count.set(String::from("1"));
        set_show.set(false);
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let to_pack = count.get().trim().parse::<u32>().unwrap_or(1);
        on_event.run(PlannerEvent::NewEntry { label: label.get(), to_pack });
        close();
    };

    view! {
        <Show when=move || show.get()>
            <div class="modal-backdrop">
                <form class="modal new-entry-form" on:submit=submit>
                    <h2>"New Entry"</h2>
                    <label>
                        "Item"
                        <input
                            type="text"
                            placeholder="Item name..."
                            prop:value=move || label.get()
                            on:input=move |ev| set_label.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "To Pack"
                        <input
                            type="number"
                            min="1"
                            prop:value=move || count.get()
                            on:input=move |ev| set_count.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="modal-actions">
                        <button type="submit">"Add"</button>
                        <button type="button" class="cancel-btn" on:click=move |_| close()>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
