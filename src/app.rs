//! Item Manager App
//!
//! Root component: provides the API client and maps routes to views.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{Home, ItemEdit, ItemList};
use crate::config::ApiConfig;
use crate::context::ApiContext;

#[component]
pub fn App(config: ApiConfig) -> impl IntoView {
    // Each view owns its state; only the stateless client is shared
    provide_context(ApiContext::new(&config));

    view! {
        <Router>
            <main class="container">
                <Routes fallback=|| view! { <p class="not-found">"Not Found"</p> }>
                    <Route path=path!("/") view=Home />
                    <Route path=path!("/items") view=ItemList />
                    <Route path=path!("/items/:id") view=ItemEdit />
                </Routes>
            </main>
        </Router>
    }
}
