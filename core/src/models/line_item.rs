// core/src/models/line_item.rs

use serde::{Deserialize, Serialize};

use super::product::Product;

/// One product entry in the cart plus its purchase quantity.
///
/// The product attributes are flattened in serialized form, so a persisted
/// cart is a plain array of `{id, title, price, image, amount}` objects.
/// `amount` is always >= 1 while the item is in the cart; an update to 0
/// is a no-op at the store level, never an implicit removal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
  #[serde(flatten)]
  pub product: Product,
  pub amount: i32,
}

impl LineItem {
  /// A fresh entry for a product that was not in the cart yet.
  pub fn first(product: Product) -> Self {
    LineItem { product, amount: 1 }
  }
}
