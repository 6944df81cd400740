//! Category Filter
//!
//! Active category tracking and the label-based item filter.

use std::sync::Arc;

use crate::models::{Category, CategoryId, Plant, ALL_CATEGORIES};

/// Which category currently controls the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveFilter {
    #[default]
    All,
    Category(CategoryId),
}

impl ActiveFilter {
    pub fn from_id(id: CategoryId) -> Self {
        if id == ALL_CATEGORIES {
            ActiveFilter::All
        } else {
            ActiveFilter::Category(id)
        }
    }
}

/// A delayed filter computation, valid only while its generation is current
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterRequest {
    pub generation: u64,
    pub category: CategoryId,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryFilter {
    active: ActiveFilter,
    generation: u64,
    pending: Option<FilterRequest>,
}

impl CategoryFilter {
    pub fn active(&self) -> ActiveFilter {
        self.active
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Record a selection. Every selection invalidates earlier requests;
    /// only non-All selections produce a new delayed request.
    pub fn select(&mut self, id: CategoryId) -> Option<FilterRequest> {
        self.generation += 1;
        self.active = ActiveFilter::from_id(id);
        self.pending = match self.active {
            ActiveFilter::All => None,
            ActiveFilter::Category(category) => Some(FilterRequest {
                generation: self.generation,
                category,
            }),
        };
        self.pending
    }

    /// Settle a delayed request. Returns false for superseded requests,
    /// which leave the state untouched.
    pub fn settle(&mut self, request: FilterRequest) -> bool {
        if self.pending != Some(request) {
            return false;
        }
        self.pending = None;
        true
    }
}

/// Strip exactly one trailing lowercase "s"
pub fn singular_label(name: &str) -> &str {
    name.strip_suffix('s').unwrap_or(name)
}

/// Singular display label of a category. `None` for unknown ids and for
/// names that reduce to an empty label.
pub fn category_label(categories: &[Category], id: CategoryId) -> Option<String> {
    categories
        .iter()
        .find(|c| c.id == id)
        .map(|c| singular_label(&c.category_name).to_string())
        .filter(|label| !label.is_empty())
}

pub fn matches_label(plant: &Plant, label: &str) -> bool {
    plant.category.to_lowercase().contains(&label.to_lowercase())
}

pub fn filter_by_label(plants: &[Arc<Plant>], label: &str) -> Vec<Arc<Plant>> {
    plants
        .iter()
        .filter(|p| matches_label(p, label))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plant(id: u32, category: &str) -> Arc<Plant> {
        Arc::new(Plant {
            id,
            name: format!("Plant {}", id),
            description: String::new(),
            image: String::new(),
            category: category.to_string(),
            price: 10.0,
        })
    }

    fn category(id: u32, name: &str) -> Category {
        Category {
            id,
            category_name: name.to_string(),
        }
    }

    #[test]
    fn test_singular_label_strips_one_s() {
        assert_eq!(singular_label("Fruit Trees"), "Fruit Tree");
        assert_eq!(singular_label("Grass"), "Gras");
        assert_eq!(singular_label("Bamboo"), "Bamboo");
        assert_eq!(singular_label("Palms"), "Palm");
        assert_eq!(singular_label("HERBS"), "HERBS");
    }

    #[test]
    fn test_category_label_unknown_or_empty() {
        let categories = vec![category(1, "Fruit Trees"), category(2, "s")];
        assert_eq!(category_label(&categories, 1).as_deref(), Some("Fruit Tree"));
        assert_eq!(category_label(&categories, 2), None);
        assert_eq!(category_label(&categories, 99), None);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let plants = vec![plant(5, "Fruit Tree"), plant(6, "Flower"), plant(7, "FRUIT TREE")];
        let visible = filter_by_label(&plants, "fruit");
        let ids: Vec<u32> = visible.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![5, 7]);
    }

    #[test]
    fn test_select_all_has_no_request() {
        let mut filter = CategoryFilter::default();
        assert!(filter.select(1).is_some());
        assert!(filter.select(ALL_CATEGORIES).is_none());
        assert_eq!(filter.active(), ActiveFilter::All);
        assert!(!filter.is_pending());
    }

    #[test]
    fn test_superseded_request_is_discarded() {
        let mut filter = CategoryFilter::default();
        let first = filter.select(1).unwrap();
        let second = filter.select(2).unwrap();

        assert!(!filter.settle(first));
        assert!(filter.is_pending());
        assert!(filter.settle(second));
        assert!(!filter.is_pending());
        assert_eq!(filter.active(), ActiveFilter::Category(2));
    }

    #[test]
    fn test_reselecting_same_category_supersedes() {
        let mut filter = CategoryFilter::default();
        let first = filter.select(3).unwrap();
        let second = filter.select(3).unwrap();
        assert_ne!(first, second);
        assert!(!filter.settle(first));
        assert!(filter.settle(second));
    }

    #[test]
    fn test_all_supersedes_pending_request() {
        let mut filter = CategoryFilter::default();
        let request = filter.select(4).unwrap();
        filter.select(ALL_CATEGORIES);
        assert!(!filter.settle(request));
        assert_eq!(filter.active(), ActiveFilter::All);
    }
}
