//! View Models
//!
//! Pure projection of `AppState` into what the components draw.

use crate::cart::Cart;
use crate::config::{CURRENCY_SYMBOL, DESCRIPTION_PREVIEW_CHARS};
use crate::filter::ActiveFilter;
use crate::models::{Category, CategoryId, Plant, PlantId, ALL_CATEGORIES};
use crate::store::{AppState, LoadState};

pub const ALL_LABEL: &str = "All Trees";
pub const CATEGORY_ERROR: &str = "Failed to load categories.";
pub const PLANT_ERROR: &str = "Failed to load trees.";
pub const NO_RESULTS: &str = "No trees found.";

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryButton {
    pub id: CategoryId,
    pub label: String,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryPanel {
    /// "All" first, then fetched categories
    pub buttons: Vec<CategoryButton>,
    pub error: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlantCardView {
    pub id: PlantId,
    pub image: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price_label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum GridView {
    Loading,
    Failed(&'static str),
    NoResults,
    Cards(Vec<PlantCardView>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct CartLineView {
    pub plant_id: PlantId,
    pub name: String,
    /// e.g. "৳100 × 2"
    pub unit_label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CartSummary {
    pub lines: Vec<CartLineView>,
    pub total_label: String,
    pub show_empty: bool,
}

/// Amount with currency prefix, rounded to cents; whole numbers print
/// without decimals.
pub fn format_price(amount: f64) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    // -0.0 + 0.0 == +0.0
    format!("{}{}", CURRENCY_SYMBOL, rounded + 0.0)
}

/// Cut to `max_chars` characters, adding an ellipsis when shortened.
pub fn truncate_description(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}…", text[..cut].trim_end()),
        None => text.to_string(),
    }
}

pub fn category_buttons(categories: &[Category], active: ActiveFilter) -> Vec<CategoryButton> {
    let all = CategoryButton {
        id: ALL_CATEGORIES,
        label: ALL_LABEL.to_string(),
        active: active == ActiveFilter::All,
    };
    std::iter::once(all)
        .chain(
            categories
                .iter()
                .filter(|c| c.id != ALL_CATEGORIES)
                .map(|c| CategoryButton {
                    id: c.id,
                    label: c.category_name.clone(),
                    active: active == ActiveFilter::Category(c.id),
                }),
        )
        .collect()
}

pub fn category_panel(state: &AppState) -> CategoryPanel {
    CategoryPanel {
        buttons: category_buttons(&state.categories, state.filter.active()),
        error: (state.category_status == LoadState::Failed).then_some(CATEGORY_ERROR),
    }
}

pub fn plant_card(plant: &Plant) -> PlantCardView {
    PlantCardView {
        id: plant.id,
        image: plant.image.clone(),
        name: plant.name.clone(),
        description: truncate_description(&plant.description, DESCRIPTION_PREVIEW_CHARS),
        category: plant.category.clone(),
        price_label: format_price(plant.price),
    }
}

pub fn grid_view(state: &AppState) -> GridView {
    match state.plant_status {
        LoadState::Loading => return GridView::Loading,
        LoadState::Failed => return GridView::Failed(PLANT_ERROR),
        LoadState::Ready => {}
    }
    if state.filter.is_pending() {
        GridView::Loading
    } else if state.visible.is_empty() {
        GridView::NoResults
    } else {
        GridView::Cards(state.visible.iter().map(|p| plant_card(p)).collect())
    }
}

pub fn cart_summary(cart: &Cart) -> CartSummary {
    CartSummary {
        lines: cart
            .entries()
            .map(|entry| CartLineView {
                plant_id: entry.plant.id,
                name: entry.plant.name.clone(),
                unit_label: format!("{} × {}", format_price(entry.plant.price), entry.qty()),
            })
            .collect(),
        total_label: format_price(cart.total()),
        show_empty: cart.is_empty(),
    }
}
