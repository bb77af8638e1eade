// demos/storefront_app/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
  /// Base URL of the storefront catalog API.
  pub catalog_base_url: String,
  /// Path of the file standing in for the browser's local storage.
  pub storage_path: String,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let catalog_base_url =
      env::var("CATALOG_BASE_URL").unwrap_or_else(|_| "http://localhost:3333".to_string());
    let storage_path =
      env::var("CART_STORAGE_PATH").unwrap_or_else(|_| "storefront-storage.json".to_string());

    if catalog_base_url.is_empty() {
      return Err(AppError::Config(
        "CATALOG_BASE_URL must not be empty".to_string(),
      ));
    }

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      catalog_base_url,
      storage_path,
    })
  }
}
