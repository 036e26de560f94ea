//! Lists Manager Component
//!
//! Overview of every stored list with create, open and delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::PackingApi;
use crate::components::DeleteConfirmButton;
use crate::context::{AppContext, Page};
use crate::models::{NewPackList, PackListSummary};

#[component]
pub fn ListsManager() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (lists, set_lists) = signal(Vec::<PackListSummary>::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (new_name, set_new_name) = signal(String::new());

    // Load summaries on mount and whenever the trigger changes
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let api = ctx.api();
        log::debug!("[MANAGER] Loading lists, trigger={}", trigger);
        spawn_local(async move {
            match api.list_summaries().await {
                Ok(loaded) => {
                    log::debug!("[MANAGER] Loaded {} lists", loaded.len());
                    set_lists.set(loaded);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(format!("Could not load lists: {}", e))),
            }
        });
    });

    let create_list = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get().trim().to_string();
        if name.is_empty() {
            return;
        }
        let api = ctx.api();
        spawn_local(async move {
            let body = NewPackList { name, items: Vec::new() };
            match api.create(&body).await {
                Ok(created) => {
                    set_new_name.set(String::new());
                    ctx.navigate(Page::Planner(created.id));
                }
                Err(e) => set_error.set(Some(format!("Could not create list: {}", e))),
            }
        });
    };

    view! {
        <section class="lists-manager">
            <h1>"Packing Lists"</h1>

            <form class="new-list-form" on:submit=create_list>
                <input
                    type="text"
                    placeholder="New list name..."
                    prop:value=move || new_name.get()
                    on:input=move |ev| set_new_name.set(event_target_value(&ev))
                />
                <button type="submit">"Create"</button>
            </form>

            {move || error.get().map(|msg| view! { <div class="status-banner error">{msg}</div> })}

            <ul class="lists">
                <For
                    each=move || lists.get()
                    key=|l| (l.id.clone(), l.name.clone(), l.packed, l.to_pack)
                    children=move |summary| {
                        let open_id = summary.id.clone();
                        let delete_id = summary.id.clone();
                        let ratio = summary.ratio();
                        let on_delete = Callback::new(move |_: ()| {
                            let id = delete_id.clone();
                            let api = ctx.api();
                            spawn_local(async move {
                                match api.delete_by_id(&id).await {
                                    Ok(()) => set_reload_trigger.update(|v| *v += 1),
                                    Err(e) => set_error.set(Some(format!("Could not delete list: {}", e))),
                                }
                            });
                        });
                        view! {
                            <li class="list-row">
                                <button
                                    class="list-open-btn"
                                    on:click=move |_| ctx.navigate(Page::Planner(open_id.clone()))
                                >
                                    {summary.name}
                                </button>
                                <span class="list-ratio">{ratio}</span>
                                <DeleteConfirmButton button_class="delete-btn" on_confirm=on_delete />
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}
