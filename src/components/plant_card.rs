use leptos::prelude::*;

use crate::render::PlantCardView;
use crate::store::{store_add_to_cart, use_app_store};

/// A single catalog card. The add button carries only the plant id.
#[component]
pub fn PlantCard(card: PlantCardView) -> impl IntoView {
    let store = use_app_store();
    let id = card.id;

    view! {
        <article class="plant-card">
            <img class="plant-image" src=card.image alt=card.name.clone() />
            <div class="plant-name">{card.name}</div>
            <div class="plant-description">{card.description}</div>
            <div class="plant-meta">
                <span class="category-badge">{card.category}</span>
                <span class="plant-price">{card.price_label}</span>
            </div>
            <button
                class="add-btn"
                data-id=id.to_string()
                on:click=move |_| store_add_to_cart(&store, id)
            >
                "Add to Cart"
            </button>
        </article>
    }
}
