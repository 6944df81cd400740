//! Category List Component
//!
//! Left sidebar: the "All" control plus one button per fetched category.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::render::{self, CategoryButton};
use crate::store::{store_select_category, use_app_store};

#[component]
pub fn CategoryList() -> impl IntoView {
    let store = use_app_store();
    let config = use_context::<AppConfig>().expect("AppConfig should be provided");
    let delay_ms = config.filter_delay_ms;

    let panel = Memo::new(move |_| store.with(render::category_panel));

    view! {
        <nav class="category-list">
            <h2 class="panel-title">"Categories"</h2>
            <div id="categories" class="category-buttons">
                <For
                    each=move || panel.get().buttons
                    key=|button| (button.id, button.active)
                    children=move |button: CategoryButton| {
                        let id = button.id;
                        view! {
                            <button
                                class="category-btn"
                                class:active=button.active
                                data-id=id.to_string()
                                on:click=move |_| store_select_category(&store, id, delay_ms)
                            >
                                {button.label}
                            </button>
                        }
                    }
                />
                {move || panel.get().error.map(|message| view! {
                    <p class="panel-error">{message}</p>
                })}
            </div>
        </nav>
    }
}
