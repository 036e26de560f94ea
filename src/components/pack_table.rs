//! Pack Table Component
//!
//! Renders a `TableView`. Rows are keyed on everything they display, so a
//! patched `TableView` only re-creates the rows that changed.

use leptos::prelude::*;

use crate::planner::{PlannerEvent, TableView, TABLE_HEADERS};

#[component]
pub fn PackTable(table: RwSignal<TableView>, on_event: Callback<PlannerEvent>) -> impl IntoView {
    view! {
        <table class="items-table">
            <thead>
                <tr>
                    {TABLE_HEADERS.iter().map(|h| view! { <th>{*h}</th> }).collect_view()}
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || table.get().rows
                    key=|row| (row.key.clone(), row.label.clone(), row.ratio.clone(), row.complete)
                    children=move |row| {
                        let check_key = row.key.clone();
                        let delete_key = row.key.clone();
                        view! {
                            <tr class=if row.complete { "item-row complete" } else { "item-row" }>
                                <td class="td-check">
                                    <button on:click=move |_| on_event.run(PlannerEvent::Check(check_key.clone()))>
                                        "Check"
                                    </button>
                                </td>
                                <td>{row.label}</td>
                                <td class="td-packed">{row.ratio}</td>
                                <td class="td-delete">
                                    <button on:click=move |_| on_event.run(PlannerEvent::Delete(delete_key.clone()))>
                                        "delete"
                                    </button>
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
