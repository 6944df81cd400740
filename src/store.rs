//! Global Application State Store
//!
//! `AppState` owns every collection and is mutated only through its
//! methods, so transitions are testable without a DOM. Components reach it
//! through a `reactive_stores::Store` provided via context.

use std::collections::HashSet;
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::cart::Cart;
use crate::error::FetchError;
use crate::filter::{self, ActiveFilter, CategoryFilter, FilterRequest};
use crate::models::{Category, CategoryId, Plant, PlantId, ALL_CATEGORIES};

/// Load status of one remote collection
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// Outcome of a category click
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Visible set already updated
    Immediate,
    /// Apply `FilterRequest` after the artificial delay
    Deferred(FilterRequest),
    /// Unknown category id, nothing changed
    Ignored,
}

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub categories: Vec<Category>,
    pub category_status: LoadState,
    /// Authoritative item collection
    pub plants: Vec<Arc<Plant>>,
    pub plant_status: LoadState,
    pub filter: CategoryFilter,
    /// Items currently shown in the grid
    pub visible: Vec<Arc<Plant>>,
    pub cart: Cart,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the category list, or keep it and mark the panel failed.
    /// Repeated ids keep their first occurrence.
    pub fn load_categories(&mut self, result: Result<Vec<Category>, FetchError>) {
        match result {
            Ok(mut categories) => {
                let mut seen = HashSet::new();
                categories.retain(|c| seen.insert(c.id));
                self.categories = categories;
                self.category_status = LoadState::Ready;
            }
            Err(_) => self.category_status = LoadState::Failed,
        }
    }

    /// Replace the item collection and refresh the grid for the active filter.
    pub fn load_plants(&mut self, result: Result<Vec<Plant>, FetchError>) {
        match result {
            Ok(plants) => {
                self.plants = plants.into_iter().map(Arc::new).collect();
                self.plant_status = LoadState::Ready;
                if !self.filter.is_pending() {
                    self.visible = self.visible_for(self.filter.active());
                }
            }
            Err(_) => self.plant_status = LoadState::Failed,
        }
    }

    pub fn select_category(&mut self, id: CategoryId) -> Selection {
        if id != ALL_CATEGORIES && !self.categories.iter().any(|c| c.id == id) {
            return Selection::Ignored;
        }
        match self.filter.select(id) {
            None => {
                self.visible = self.plants.clone();
                Selection::Immediate
            }
            Some(request) => Selection::Deferred(request),
        }
    }

    /// Apply a delayed filter if it is still the latest request.
    pub fn finish_filter(&mut self, request: FilterRequest) -> bool {
        if !self.filter.settle(request) {
            return false;
        }
        self.visible = self.visible_for(ActiveFilter::Category(request.category));
        true
    }

    /// Add by id, looked up in the item collection. Returns the new quantity.
    pub fn add_to_cart(&mut self, plant_id: PlantId) -> Option<u32> {
        let plant = self.plants.iter().find(|p| p.id == plant_id)?.clone();
        Some(self.cart.add(plant))
    }

    pub fn remove_from_cart(&mut self, plant_id: PlantId) -> bool {
        self.cart.remove(plant_id).is_some()
    }

    fn visible_for(&self, active: ActiveFilter) -> Vec<Arc<Plant>> {
        match active {
            ActiveFilter::All => self.plants.clone(),
            ActiveFilter::Category(id) => match filter::category_label(&self.categories, id) {
                Some(label) => filter::filter_by_label(&self.plants, &label),
                None => Vec::new(),
            },
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_load_categories(store: &AppStore, result: Result<Vec<Category>, FetchError>) {
    match &result {
        Ok(categories) => log::info!("[catalog] Loaded {} categories", categories.len()),
        Err(e) => log::error!("[catalog] Category fetch failed: {}", e),
    }
    store.write().load_categories(result);
}

pub fn store_load_plants(store: &AppStore, result: Result<Vec<Plant>, FetchError>) {
    match &result {
        Ok(plants) => log::info!("[catalog] Loaded {} plants", plants.len()),
        Err(e) => log::error!("[catalog] Plant fetch failed: {}", e),
    }
    store.write().load_plants(result);
}

/// Select a category; non-All selections settle after `delay_ms`.
pub fn store_select_category(store: &AppStore, id: CategoryId, delay_ms: u32) {
    let selection = store.write().select_category(id);
    match selection {
        Selection::Immediate => log::debug!("[filter] Showing all plants"),
        Selection::Ignored => log::warn!("[filter] Ignoring unknown category {}", id),
        Selection::Deferred(request) => {
            let store = *store;
            spawn_local(async move {
                TimeoutFuture::new(delay_ms).await;
                if store.write().finish_filter(request) {
                    log::debug!("[filter] Applied category {}", request.category);
                } else {
                    log::debug!("[filter] Discarded superseded request #{}", request.generation);
                }
            });
        }
    }
}

pub fn store_add_to_cart(store: &AppStore, plant_id: PlantId) {
    let mut state = store.write();
    match state.add_to_cart(plant_id) {
        Some(qty) => log::debug!("[cart] Plant {} qty={}, {} entries", plant_id, qty, state.cart.len()),
        None => log::warn!("[cart] Plant {} not in catalog", plant_id),
    }
}

pub fn store_remove_from_cart(store: &AppStore, plant_id: PlantId) {
    if store.write().remove_from_cart(plant_id) {
        log::debug!("[cart] Removed plant {}", plant_id);
    }
}
