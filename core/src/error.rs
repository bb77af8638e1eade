// core/src/error.rs

use anyhow::Error as AnyhowError;
use thiserror::Error;

use crate::models::ProductId;

#[derive(Debug, Error)]
pub enum CartError {
  /// The explicit stock-ceiling check failed. Produced before any state
  /// change and never derived from a remote failure.
  #[error("requested amount {requested} for product {product_id} exceeds stock ({available} available)")]
  StockExceeded {
    product_id: ProductId,
    requested: i32,
    available: i32,
  },

  /// A remove/update targeted a product that is not in the cart.
  #[error("product {0} is not in the cart")]
  NotInCart(ProductId),

  /// Catalog or stock lookup failed: transport error, non-success status,
  /// decode failure, or unknown product.
  #[error("catalog lookup failed: {source}")]
  Catalog {
    #[source]
    source: AnyhowError,
  },

  /// Persistence read, write, or (de)serialization failed.
  #[error("cart storage failed: {source}")]
  Storage {
    #[source]
    source: AnyhowError,
  },
}

impl CartError {
  pub fn catalog(source: impl Into<AnyhowError>) -> Self {
    CartError::Catalog { source: source.into() }
  }

  pub fn storage(source: impl Into<AnyhowError>) -> Self {
    CartError::Storage { source: source.into() }
  }
}

pub type CartResult<T, E = CartError> = std::result::Result<T, E>;
