//! Catalog API Client
//!
//! Frontend bindings to the remote catalog endpoints. One GET per call,
//! no retry.

use crate::config::AppConfig;
use crate::error::FetchError;
use crate::models::{CategoriesPayload, Category, Plant, PlantsPayload};

#[derive(Clone, Debug)]
pub struct CatalogClient {
    http: reqwest::Client,
    categories_url: String,
    plants_url: String,
}

impl CatalogClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            categories_url: config.categories_url(),
            plants_url: config.plants_url(),
        }
    }

    pub async fn fetch_categories(&self) -> Result<Vec<Category>, FetchError> {
        let body = self.get_text(&self.categories_url).await?;
        decode_categories(&body)
    }

    pub async fn fetch_plants(&self) -> Result<Vec<Plant>, FetchError> {
        let body = self.get_text(&self.plants_url).await?;
        decode_plants(&body)
    }

    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        log::debug!("[catalog] GET {}", url);
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::network(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| FetchError::network(url, e))
    }
}

// ========================
// Payload decoding
// ========================

pub fn decode_categories(body: &str) -> Result<Vec<Category>, FetchError> {
    let payload: CategoriesPayload =
        serde_json::from_str(body).map_err(|e| FetchError::decode("categories", e))?;
    Ok(payload.categories)
}

pub fn decode_plants(body: &str) -> Result<Vec<Plant>, FetchError> {
    let payload: PlantsPayload =
        serde_json::from_str(body).map_err(|e| FetchError::decode("plants", e))?;
    Ok(payload.plants)
}
