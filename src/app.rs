//! NutriSync Frontend App
//!
//! Route table for the recipe detail and member tracker pages.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{MemberTracker, RecipePage};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <p class="status-line">"Page not found."</p> }>
                <Route path=path!("/member/:userid/recipe/:id") view=RecipePage/>
                <Route path=path!("/member/:id/tracker") view=MemberTracker/>
            </Routes>
        </Router>
    }
}
