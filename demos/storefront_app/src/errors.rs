// demos/storefront_app/src/errors.rs

use rocketshoes_cart::CartError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Usage Error: {0}")]
  Usage(String),

  #[error("Cart Error: {source}")]
  Cart {
    #[from]
    source: CartError,
  },
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
