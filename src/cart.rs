//! Shopping Cart
//!
//! At most one entry per plant id; quantities are always >= 1.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::models::{Plant, PlantId};

#[derive(Debug, Clone, PartialEq)]
pub struct CartEntry {
    pub plant: Arc<Plant>,
    qty: u32,
}

impl CartEntry {
    pub fn qty(&self) -> u32 {
        self.qty
    }

    pub fn subtotal(&self) -> f64 {
        self.plant.price * f64::from(self.qty)
    }
}

/// Entries keyed by plant id, iterated in ascending id order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    entries: BTreeMap<PlantId, CartEntry>,
}

impl Cart {
    /// Increment-or-insert. Returns the new quantity.
    pub fn add(&mut self, plant: Arc<Plant>) -> u32 {
        let entry = self
            .entries
            .entry(plant.id)
            .or_insert(CartEntry { plant, qty: 0 });
        entry.qty += 1;
        entry.qty
    }

    /// Remove the whole entry. Absent ids are a no-op.
    pub fn remove(&mut self, plant_id: PlantId) -> Option<CartEntry> {
        self.entries.remove(&plant_id)
    }

    pub fn total(&self) -> f64 {
        self.entries.values().fold(0.0, |acc, e| acc + e.subtotal())
    }

    pub fn qty_of(&self, plant_id: PlantId) -> Option<u32> {
        self.entries.get(&plant_id).map(CartEntry::qty)
    }

    pub fn entries(&self) -> impl Iterator<Item = &CartEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::format_price;

    fn plant(id: u32, price: f64) -> Arc<Plant> {
        Arc::new(Plant {
            id,
            name: format!("Plant {}", id),
            description: String::new(),
            image: String::new(),
            category: "Tree".to_string(),
            price,
        })
    }

    #[test]
    fn test_repeated_add_counts_calls() {
        let mut cart = Cart::default();
        let mango = plant(5, 100.0);
        for n in 1..=7 {
            assert_eq!(cart.add(mango.clone()), n);
        }
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.qty_of(5), Some(7));
        assert_eq!(cart.total(), 700.0);
    }

    #[test]
    fn test_total_sums_entries() {
        let mut cart = Cart::default();
        cart.add(plant(5, 100.0));
        cart.add(plant(5, 100.0));
        cart.add(plant(6, 50.0));
        assert_eq!(cart.total(), 250.0);
        let sum: f64 = cart.entries().map(CartEntry::subtotal).sum();
        assert_eq!(sum, cart.total());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut cart = Cart::default();
        cart.add(plant(1, 20.0));
        let before = cart.clone();
        assert!(cart.remove(42).is_none());
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_drops_whole_entry() {
        let mut cart = Cart::default();
        cart.add(plant(1, 20.0));
        cart.add(plant(1, 20.0));
        let removed = cart.remove(1).unwrap();
        assert_eq!(removed.qty(), 2);
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn test_emptied_cart_total_is_positive_zero() {
        let mut cart = Cart::default();
        assert!(cart.total().is_sign_positive());
        assert_eq!(format_price(cart.total()), "৳0");

        cart.add(plant(5, 100.0));
        cart.add(plant(5, 100.0));
        assert_eq!(format_price(cart.total()), "৳200");

        cart.remove(5);
        assert!(cart.total().is_sign_positive());
        assert_eq!(format_price(cart.total()), "৳0");
    }

    #[test]
    fn test_entries_ordered_by_id() {
        let mut cart = Cart::default();
        cart.add(plant(9, 1.0));
        cart.add(plant(3, 1.0));
        cart.add(plant(6, 1.0));
        let ids: Vec<u32> = cart.entries().map(|e| e.plant.id).collect();
        assert_eq!(ids, vec![3, 6, 9]);
    }
}
