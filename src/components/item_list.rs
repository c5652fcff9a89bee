//! Item List Component
//!
//! Table of all items with Edit links and Delete actions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::components::ErrorBanner;
use crate::context::use_item_api;
use crate::lifecycle::use_mount_guard;
use crate::models::{Item, ItemId};
use crate::state::{ListAction, ListState, LoadPhase};

#[component]
pub fn ItemList() -> impl IntoView {
    let api = use_item_api();
    let guard = use_mount_guard();
    let state = RwSignal::new(ListState::default());

    // Load items on mount
    {
        let api = api.clone();
        let guard = guard.clone();
        Effect::new(move |_| {
            state.update(|s| s.apply(ListAction::LoadStarted));
            let api = api.clone();
            let guard = guard.clone();
            spawn_local(async move {
                let result = api.list().await;
                if guard.is_mounted() {
                    state.update(|s| s.apply(ListAction::Loaded(result)));
                }
            });
        });
    }

    let on_delete = Callback::new(move |id: ItemId| {
        let started = state.try_update(|s| s.begin_delete(&id)).unwrap_or(false);
        if !started {
            return;
        }
        let api = api.clone();
        let guard = guard.clone();
        spawn_local(async move {
            let result = api.delete(&id).await;
            if guard.is_mounted() {
                state.update(|s| s.apply(ListAction::DeleteFinished(id, result)));
            }
        });
    });

    let error = Signal::derive(move || state.with(|s| s.error.clone()));

    view! {
        <section class="item-list">
            <div class="list-header">
                <h3>"Items"</h3>
                <A href="/items/new">
                    <span class="btn success">"Add Item"</span>
                </A>
            </div>

            <ErrorBanner message=error />

            <Show when=move || state.with(|s| s.phase == LoadPhase::Loading)>
                <p class="loading">"Loading..."</p>
            </Show>

            <table class="items-table">
                <thead>
                    <tr>
                        <th width="30%">"Name"</th>
                        <th width="30%">"Colour"</th>
                        <th width="40%">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || state.with(|s| s.items.clone())
                        key=|item: &Item| item.id.clone()
                        children=move |item| {
                            let id = item.id.clone();
                            let deleting = Signal::derive(move || {
                                id.as_ref().is_some_and(|id| state.with(|s| s.is_deleting(id)))
                            });
                            view! { <ItemRow item=item deleting=deleting on_delete=on_delete /> }
                        }
                    />
                </tbody>
            </table>

            <Show when=move || state.with(ListState::is_empty_and_ready)>
                <p class="empty">"No items yet."</p>
            </Show>
        </section>
    }
}

/// One table row: name, colour, and the row actions
#[component]
pub fn ItemRow(
    item: Item,
    #[prop(into)] deleting: Signal<bool>,
    on_delete: Callback<ItemId>,
) -> impl IntoView {
    // Rows only exist for persisted items
    let actions = item.id.map(|id| {
        let edit_href = format!("/items/{}", id);
        view! {
            <div class="row-actions">
                <A href=edit_href>
                    <span class="btn primary small">"Edit"</span>
                </A>
                <button
                    class="btn danger small"
                    disabled=move || deleting.get()
                    on:click=move |_| on_delete.run(id.clone())
                >
                    {move || if deleting.get() { "Deleting..." } else { "Delete" }}
                </button>
            </div>
        }
    });

    view! {
        <tr>
            <td class="nowrap">{item.name}</td>
            <td>{item.colour}</td>
            <td>{actions}</td>
        </tr>
    }
}
