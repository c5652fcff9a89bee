//! Item Edit Component
//!
//! Create/edit form. `/items/new` starts on an empty draft, `/items/:id`
//! loads the item first. Navigates back to the list only after a successful save.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::params::ParamsMap;

use crate::components::ErrorBanner;
use crate::context::use_item_api;
use crate::lifecycle::use_mount_guard;
use crate::models::ItemField;
use crate::state::{EditAction, EditMode, EditState};

#[component]
pub fn ItemEdit() -> impl IntoView {
    let api = use_item_api();
    let guard = use_mount_guard();
    let params = use_params_map();
    let navigate = use_navigate();
    let state = RwSignal::new(EditState::new(params.with_untracked(route_mode)));

    // Reset and (in edit mode) load whenever the route parameter changes
    {
        let api = api.clone();
        let guard = guard.clone();
        Effect::new(move |_| {
            let fresh = EditState::new(params.with(route_mode));
            let to_load = fresh.id_to_load().cloned();
            state.set(fresh);

            if let Some(id) = to_load {
                let api = api.clone();
                let guard = guard.clone();
                spawn_local(async move {
                    let result = api.get(&id).await;
                    if guard.is_mounted() {
                        state.update(|s| s.apply(EditAction::Loaded(id, result)));
                    }
                });
            }
        });
    }

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(draft) = state.try_update(|s| s.begin_submit()).flatten() else {
            return;
        };
        let api = api.clone();
        let guard = guard.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = api.save(&draft).await;
            if !guard.is_mounted() {
                return;
            }
            state.update(|s| s.apply(EditAction::SubmitFinished(result)));
            if state.with_untracked(EditState::is_saved) {
                navigate("/items", Default::default());
            }
        });
    };

    let on_field = move |field: ItemField| {
        move |ev: web_sys::Event| {
            let value = event_target_value(&ev);
            state.update(|s| s.apply(EditAction::FieldChanged(field, value)));
        }
    };

    let locked = move || !state.with(EditState::can_edit);
    let error = Signal::derive(move || state.with(|s| s.error.clone()));

    view! {
        <section class="item-edit">
            <h2>{move || state.with(EditState::title)}</h2>

            <ErrorBanner message=error />

            <form on:submit=on_submit>
                <div class="form-group">
                    <label for="name" class="bold-label">"Name"</label>
                    <input
                        type="text"
                        name="name"
                        id="name"
                        autocomplete="name"
                        prop:value=move || state.with(|s| s.item.name.clone())
                        prop:disabled=locked
                        on:input=on_field(ItemField::Name)
                    />
                </div>
                <div class="form-group">
                    <label for="colour" class="bold-label">"Colour"</label>
                    <input
                        type="text"
                        name="colour"
                        id="colour"
                        autocomplete="colour"
                        prop:value=move || state.with(|s| s.item.colour.clone())
                        prop:disabled=locked
                        on:input=on_field(ItemField::Colour)
                    />
                </div>
                <div class="form-actions">
                    <button type="submit" class="btn primary" disabled=locked>"Save"</button>
                    <A href="/items">
                        <span class="btn secondary">"Cancel"</span>
                    </A>
                </div>
            </form>
        </section>
    }
}

fn route_mode(params: &ParamsMap) -> EditMode {
    params
        .get("id")
        .map(|raw| EditMode::from_route_param(&raw))
        .unwrap_or(EditMode::Create)
}
