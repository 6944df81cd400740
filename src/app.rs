//! Plant Shop Frontend App
//!
//! Root component with three-column layout. Categories and plants are
//! fetched independently on mount.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::catalog::CatalogClient;
use crate::components::{CartPanel, CategoryList, PlantGrid};
use crate::config::AppConfig;
use crate::store::{store_load_categories, store_load_plants, AppState};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AppState::new());
    let client = CatalogClient::new(&config);

    // Provide state and config to all children
    provide_context(store);
    provide_context(config);

    // Load categories and plants on mount, neither waits for the other
    Effect::new(move |_| {
        log::info!("[APP] Loading catalog");
        let categories_client = client.clone();
        spawn_local(async move {
            let result = categories_client.fetch_categories().await;
            store_load_categories(&store, result);
        });
        let plants_client = client.clone();
        spawn_local(async move {
            let result = plants_client.fetch_plants().await;
            store_load_plants(&store, result);
        });
    });

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Green Earth"</h1>
            </header>

            // Left: categories
            <CategoryList />

            // Center: catalog grid
            <main class="main-content">
                <PlantGrid />
            </main>

            // Right: cart
            <CartPanel />
        </div>
    }
}
