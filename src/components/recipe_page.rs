//! Recipe Detail Page
//!
//! Loads a recipe plus its ingredients and categories with one all-or-nothing
//! fan-out, and hosts the like / add-to-tracker actions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;
use wasm_bindgen::{JsCast, JsValue};

use crate::api;
use crate::components::NoticeBanner;
use crate::detail::{join_loads, validate_serving_size, DetailData, DetailState};
use crate::generation::LoadGeneration;
use crate::notify::Notifier;

fn format_date(timestamp: &str) -> String {
    let parsed = js_sys::Date::new(&JsValue::from_str(timestamp));
    String::from(parsed.to_locale_date_string("en-US", &JsValue::UNDEFINED))
}

#[component]
pub fn RecipePage() -> impl IntoView {
    let params = use_params_map();
    let recipe_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());
    let member_id = Memo::new(move |_| params.read().get("userid").unwrap_or_default());
    let navigate = use_navigate();

    let (state, set_state) = signal(DetailState::Loading);
    let (serving_size, set_serving_size) = signal(1i32);
    let notifier = Notifier::new();

    // Each load owns a generation; a stale response from a superseded id
    // must not overwrite newer state.
    let load_generation = StoredValue::new(LoadGeneration::default());

    Effect::new(move |_| {
        let id = recipe_id.get();
        let generation = load_generation.get_value().next();
        load_generation.set_value(generation);
        set_state.set(DetailState::Loading);
        web_sys::console::log_1(&format!("[RECIPE] Loading recipe {}", id).into());
        spawn_local(async move {
            let (recipe, ingredients, categories) = futures::join!(
                api::fetch_recipe(&id),
                api::fetch_ingredients(&id),
                api::fetch_categories(&id),
            );
            if !load_generation.get_value().is_current(generation) {
                return;
            }
            set_state.set(join_loads(recipe, ingredients, categories));
        });
    });

    let handle_like = move |_: web_sys::MouseEvent| {
        let id = recipe_id.get_untracked();
        spawn_local(async move {
            match api::like_recipe(&id).await {
                Ok(()) => notifier.success("❤️ Recipe liked!"),
                Err(_) => notifier.error("Error liking recipe"),
            }
        });
    };

    let handle_track = move |_: web_sys::MouseEvent| {
        let serving = match validate_serving_size(serving_size.get_untracked()) {
            Ok(serving) => serving,
            Err(message) => {
                notifier.error(message);
                return;
            }
        };
        let id = recipe_id.get_untracked();
        spawn_local(async move {
            match api::track_recipe(&id, serving).await {
                Ok(()) => notifier.success("📈 Calories added!"),
                Err(_) => notifier.error("Error adding to tracker"),
            }
        });
    };

    view! {
        <nav class="top-nav">
            <div class="brand">"NutriSync"</div>
            <button
                class="nav-btn"
                on:click=move |_| {
                    navigate(
                        &format!("/member/{}/search/", member_id.get_untracked()),
                        NavigateOptions::default(),
                    );
                }
            >
                "← Back to Search"
            </button>
        </nav>

        <div class="page recipe-page">
            {move || match state.get() {
                DetailState::Loading => {
                    view! { <p class="status-line">"Loading recipe…"</p> }.into_any()
                }
                DetailState::Error(message) => {
                    view! { <p class="status-line status-error">{message}</p> }.into_any()
                }
                DetailState::Ready(data) => {
                    let DetailData { recipe, ingredients, categories } = data;
                    let image = recipe.image_url.clone().map(|src| view! {
                        <img src=src alt=recipe.title.clone() class="recipe-image"/>
                    });
                    view! {
                        <div class="recipe-card">
                            {image}
                            <h2>{recipe.title.clone()}</h2>
                            <p class="recipe-date">{format_date(&recipe.timestamp)}</p>

                            <h3>"🍴 Ingredients"</h3>
                            <ul class="ingredient-list">
                                {ingredients.iter().map(|ingredient| view! {
                                    <li>
                                        {format!(
                                            "{} - {} cal [{}]",
                                            ingredient.name, ingredient.calories, ingredient.unit,
                                        )}
                                    </li>
                                }).collect_view()}
                            </ul>

                            <h3>"📋 Instructions"</h3>
                            <p class="recipe-description">{recipe.description.clone()}</p>

                            <p class="recipe-calories">
                                <strong>"Total Calories: "</strong>
                                {recipe.total_calories}
                                " kcal"
                            </p>

                            <p class="recipe-tags">
                                <strong>"Tags: "</strong>
                                {categories.iter().map(|category| view! {
                                    <span class="tag-pill">{category.name.clone()}</span>
                                }).collect_view()}
                            </p>

                            <div class="serving-size-field">
                                <label for="servingSize">"Enter Serving Size"</label>
                                <input
                                    type="number"
                                    id="servingSize"
                                    min="1"
                                    prop:value=move || serving_size.get().to_string()
                                    on:input=move |ev| {
                                        let target = ev.target().unwrap();
                                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                        set_serving_size.set(input.value().parse().unwrap_or(1));
                                    }
                                />
                            </div>

                            <NoticeBanner notifier=notifier/>

                            <div class="action-row">
                                <button class="like-btn" on:click=handle_like>
                                    "❤️ Like"
                                </button>
                                <button class="track-btn" on:click=handle_track>
                                    "➕ Add to Tracker"
                                </button>
                            </div>
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
