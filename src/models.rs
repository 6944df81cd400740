//! Frontend Models
//!
//! Data structures matching the catalog API payloads.

use serde::{Deserialize, Deserializer};

pub type PlantId = u32;
pub type CategoryId = u32;

/// Category id reserved for "show everything"
pub const ALL_CATEGORIES: CategoryId = 0;

/// Catalog item (a plant listing)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Plant {
    #[serde(deserialize_with = "lenient_id")]
    pub id: PlantId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    /// Free-text label, matched against category names
    pub category: String,
    #[serde(deserialize_with = "lenient_price")]
    pub price: f64,
}

/// Category as served by the API
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Category {
    #[serde(deserialize_with = "lenient_id")]
    pub id: CategoryId,
    pub category_name: String,
}

/// `GET /categories` envelope
#[derive(Debug, Deserialize)]
pub struct CategoriesPayload {
    pub categories: Vec<Category>,
}

/// `GET /plants` envelope
#[derive(Debug, Deserialize)]
pub struct PlantsPayload {
    pub plants: Vec<Plant>,
}

// ========================
// Lenient numbers
// ========================

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(serde_json::Number),
    Text(String),
}

impl NumberOrText {
    fn as_f64(&self) -> Option<f64> {
        match self {
            NumberOrText::Number(n) => n.as_f64(),
            NumberOrText::Text(s) => s.trim().parse().ok(),
        }
    }
}

fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let raw = NumberOrText::deserialize(deserializer)?;
    let parsed = match &raw {
        NumberOrText::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        NumberOrText::Text(s) => s.trim().parse().ok(),
    };
    parsed.ok_or_else(|| serde::de::Error::custom("id must be a non-negative integer"))
}

fn lenient_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let raw = NumberOrText::deserialize(deserializer)?;
    match raw.as_f64() {
        Some(price) if price.is_finite() && price >= 0.0 => Ok(price),
        _ => Err(serde::de::Error::custom("price must be a non-negative number")),
    }
}
