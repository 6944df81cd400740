//! Cart Panel Component
//!
//! Right column: cart lines, running total and the empty-cart placeholder.

use leptos::prelude::*;

use crate::render::{self, CartLineView};
use crate::store::{store_remove_from_cart, use_app_store, AppStateStoreFields};

#[component]
pub fn CartPanel() -> impl IntoView {
    let store = use_app_store();
    let summary = Memo::new(move |_| store.cart().with(render::cart_summary));

    view! {
        <aside class="cart-panel">
            <h2 class="panel-title">"Your Cart"</h2>
            <p id="empty-cart" class="empty-cart" class:hidden=move || !summary.get().show_empty>
                "Your cart is empty."
            </p>
            <div id="cart-items" class="cart-items">
                <For
                    each=move || summary.get().lines
                    key=|line| (line.plant_id, line.unit_label.clone())
                    children=move |line: CartLineView| {
                        let id = line.plant_id;
                        view! {
                            <div class="cart-line">
                                <div class="cart-line-info">
                                    <div class="cart-line-name">{line.name}</div>
                                    <div class="cart-line-qty">{line.unit_label}</div>
                                </div>
                                <button
                                    class="remove-btn"
                                    title="Remove from Cart"
                                    on:click=move |_| store_remove_from_cart(&store, id)
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    }
                />
            </div>
            <div class="cart-total">
                <span>"Total:"</span>
                <span id="cart-total">{move || summary.get().total_label}</span>
            </div>
        </aside>
    }
}
