// core/src/models/product.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque catalog identifier. Unique within the cart collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

impl From<u64> for ProductId {
  fn from(raw: u64) -> Self {
    ProductId(raw)
  }
}

/// Catalog record as served by `GET products/{id}`.
///
/// These attributes are copied into the cart when an item is first added
/// and are not refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
  pub id: ProductId,
  pub title: String,
  pub price: Decimal,
  pub image: String,
}
