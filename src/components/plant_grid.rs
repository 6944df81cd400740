//! Plant Grid Component
//!
//! Center column: loading indicator, error, "no results" or the cards.

use leptos::prelude::*;

use crate::components::PlantCard;
use crate::render::{self, GridView, NO_RESULTS};
use crate::store::use_app_store;

#[component]
pub fn PlantGrid() -> impl IntoView {
    let store = use_app_store();
    let grid = Memo::new(move |_| store.with(render::grid_view));

    view! {
        <section id="tree-list" class="plant-grid">
            {move || match grid.get() {
                GridView::Loading => view! {
                    <div class="loading-spinner">
                        <span class="loading-dots"></span>
                    </div>
                }.into_any(),
                GridView::Failed(message) => view! {
                    <p class="grid-message error">{message}</p>
                }.into_any(),
                GridView::NoResults => view! {
                    <p class="grid-message">{NO_RESULTS}</p>
                }.into_any(),
                GridView::Cards(cards) => cards
                    .into_iter()
                    .map(|card| view! { <PlantCard card=card /> })
                    .collect_view()
                    .into_any(),
            }}
        </section>
    }
}
