//! Planner Page Component
//!
//! Option bar, quick items and the item table for one list. Owns the
//! editor state and the single event callback every control reports to.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{NewEntryModal, PackTable, QuickItems, Status, StatusBanner, SAVED_BANNER_MS};
use crate::context::{AppContext, Page};
use crate::planner::{dispatch, render_table, Effect, EditorState, PlannerEvent, TableView};

#[component]
pub fn PlannerPage(list_id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let editor = RwSignal::new(None::<EditorState>);
    let table = RwSignal::new(TableView::default());
    let status = RwSignal::new(Status::Loading);
    let (show_modal, set_show_modal) = signal(false);

    // Initial load; nothing is shown until the whole list has arrived
    let api = ctx.api();
    spawn_local(async move {
        match EditorState::load(&api, &list_id).await {
            Ok(state) => {
                table.set(render_table(&state));
                editor.set(Some(state));
                status.set(Status::Idle);
            }
            Err(e) => {
                log::warn!("[PLANNER] Load of {} failed: {}", list_id, e);
                status.set(Status::Failed(format!("Could not load list: {}", e)));
            }
        }
    });

    let persist = move |reload: bool| {
        let Some(snapshot) = editor.get_untracked() else { return };
        let api = ctx.api();
        status.set(Status::Saving);
        spawn_local(async move {
            if let Err(e) = snapshot.save(&api).await {
                status.set(Status::Failed(format!("Save failed: {}", e)));
                return;
            }
            if reload {
                let mut fresh = snapshot.clone();
                if let Err(e) = fresh.reload(&api).await {
                    status.set(Status::Failed(format!("Saved, but reload failed: {}", e)));
                    return;
                }
                // Edits made while the request was in flight win over the reload
                let fresh_table = render_table(&fresh);
                let adopted = editor
                    .try_update(|slot| {
                        slot.as_mut()
                            .is_some_and(|current| current.replace_if_unchanged(&snapshot, fresh))
                    })
                    .unwrap_or(false);
                if adopted {
                    table.set(fresh_table);
                }
            }
            status.set(Status::Saved);
            TimeoutFuture::new(SAVED_BANNER_MS).await;
            status.update(|s| {
                if *s == Status::Saved {
                    *s = Status::Idle;
                }
            });
        });
    };

    // The one handler for this page; disposed with it on navigation
    let on_event = Callback::new(move |event: PlannerEvent| {
        let Some(Some(outcome)) = editor.try_update(|slot| slot.as_mut().map(|state| dispatch(state, event)))
        else {
            return;
        };
        editor.with_untracked(|slot| {
            if let Some(state) = slot {
                table.update(|t| t.apply(&outcome.patch, state));
            }
        });

        match outcome.effect {
            Effect::None => {}
            Effect::Save => persist(false),
            Effect::SaveAndReload => persist(true),
            Effect::NavigateToManager => ctx.navigate(Page::Manager),
            Effect::Report(message) => status.set(Status::Failed(message)),
        }
    });

    let title = move || editor.with(|slot| slot.as_ref().map(|s| s.name().to_string()).unwrap_or_default());

    view! {
        <section class="option-bar flex-grid">
            <div class="col">
                <button on:click=move |_| set_show_modal.set(true)>"New Entry"</button>
            </div>
            <div class="col">
                <h1 class="list-title">{title}</h1>
            </div>
            <div class="col">
                <button on:click=move |_| on_event.run(PlannerEvent::Back)>"Back"</button>
            </div>
            <div class="col">
                <button on:click=move |_| on_event.run(PlannerEvent::Save)>"Save"</button>
            </div>
        </section>

        <StatusBanner status=status />

        <div class="flex-grid">
            <QuickItems on_event=on_event />
            <section class="table-section">
                <Show when=move || editor.with(|slot| slot.is_some())>
                    <PackTable table=table on_event=on_event />
                </Show>
            </section>
        </div>

        <NewEntryModal show=show_modal set_show=set_show_modal on_event=on_event />
    }
}
