//! Member Tracker Page
//!
//! Table of a member's tracked recipes with the running calorie total. The
//! two reads are independent and each carries its own alert on failure;
//! removal re-fetches both by bumping the reload trigger.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;

use crate::api;
use crate::generation::LoadGeneration;
use crate::models::TrackedRecipe;

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[component]
pub fn MemberTracker() -> impl IntoView {
    let params = use_params_map();
    let member_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());
    let navigate = use_navigate();

    let (recipes, set_recipes) = signal(Vec::<TrackedRecipe>::new());
    let (total_calories, set_total_calories) = signal(0u32);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // A read resolving after a newer member's load started must not write
    let load_generation = StoredValue::new(LoadGeneration::default());

    // Both reads re-run when the member changes or after any removal
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let id = member_id.get();
        let generation = load_generation.get_value().next();
        load_generation.set_value(generation);
        web_sys::console::log_1(
            &format!("[TRACKER] Loading tracker for member {}, trigger={}", id, trigger).into(),
        );
        let recipes_member = id.clone();
        spawn_local(async move {
            let result = api::fetch_tracked_recipes(&recipes_member).await;
            if !load_generation.get_value().is_current(generation) {
                return;
            }
            match result {
                Ok(loaded) => set_recipes.set(loaded),
                Err(_) => alert("Failed to fetch recipes"),
            }
        });
        spawn_local(async move {
            let result = api::fetch_calorie_total(&id).await;
            if !load_generation.get_value().is_current(generation) {
                return;
            }
            match result {
                Ok(total) => set_total_calories.set(total),
                Err(_) => alert("Failed to fetch user calories"),
            }
        });
    });

    let handle_remove = move |recipe_id: u32| {
        if !confirm("Are you sure you want to remove this recipe?") {
            return;
        }
        let id = member_id.get_untracked();
        spawn_local(async move {
            match api::remove_tracked_recipe(&id, recipe_id).await {
                Ok(()) => set_reload_trigger.update(|v| *v += 1),
                Err(_) => alert("Failed to remove recipe"),
            }
        });
    };

    view! {
        <nav class="top-nav">
            <div class="brand">"NutriSync"</div>
        </nav>

        <div class="page tracker-page">
            <button
                class="nav-btn"
                on:click=move |_| {
                    navigate(
                        &format!("/member/{}", member_id.get_untracked()),
                        NavigateOptions::default(),
                    );
                }
            >
                "← Back to Home"
            </button>

            <div class="tracker-card">
                <h2>"Recipe Tracker"</h2>
                <p class="tracker-total">
                    "Total Calories Consumed: "
                    <span class="tracker-total-value">{move || total_calories.get()}</span>
                </p>

                <table class="tracker-table">
                    <thead>
                        <tr>
                            <th>"Recipe"</th>
                            <th>"Calories"</th>
                            <th>"Modification"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = recipes.get();
                            if rows.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="3" class="empty-row">
                                            "No recipes tracked yet."
                                        </td>
                                    </tr>
                                }
                                .into_any()
                            } else {
                                rows.into_iter()
                                    .map(|recipe| {
                                        let recipe_id = recipe.id;
                                        view! {
                                            <tr>
                                                <td>{recipe.name}</td>
                                                <td>{recipe.calories}</td>
                                                <td>
                                                    <button
                                                        class="remove-btn"
                                                        on:click=move |_| handle_remove(recipe_id)
                                                    >
                                                        "Remove"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
