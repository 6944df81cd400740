//! UI Components
//!
//! Leptos components for the three panels.

mod category_list;
mod plant_grid;
mod plant_card;
mod cart_panel;

pub use category_list::CategoryList;
pub use plant_grid::PlantGrid;
pub use plant_card::PlantCard;
pub use cart_panel::CartPanel;
