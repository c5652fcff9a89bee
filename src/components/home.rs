//! Landing Page Component

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <section class="home">
            <h3>"Item Manager"</h3>
            <p class="home-intro">
                "List, add, edit and delete items stored by the items service."
            </p>
            <A href="/items">
                <span class="btn primary">"List Items"</span>
            </A>
        </section>
    }
}
