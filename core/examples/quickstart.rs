// core/examples/quickstart.rs

use std::sync::Arc;

use rocketshoes_cart::{
  CartError, CartStore, MemoryStorage, Product, ProductId, StaticCatalog, TracingNotifier,
};
use rust_decimal_macros::dec;
use tracing::info;

fn shoe(id: u64, title: &str, price: rust_decimal::Decimal) -> Product {
  Product {
    id: ProductId(id),
    title: title.to_string(),
    price,
    image: format!("https://cdn.example.com/shoes/{id}.jpg"),
  }
}

#[tokio::main]
async fn main() -> Result<(), CartError> {
  // Initialize tracing (optional, for demonstration)
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Cart Store Quickstart ---");

  // 1. Wire the store at the composition root: a catalog, a storage
  //    backend, and a notification sink.
  let catalog = StaticCatalog::new()
    .with_product(shoe(1, "Tenis de Caminhada Leve Confortavel", dec!(179.90)), 3)
    .with_product(shoe(2, "Tenis VR Caminhada Confortavel", dec!(139.90)), 2);

  let store = CartStore::load(
    Arc::new(catalog),
    Arc::new(MemoryStorage::new()),
    Arc::new(TracingNotifier),
  )?;

  // 2. Mutate: adds increment existing entries, updates set an amount.
  store.add_product(ProductId(1)).await;
  store.add_product(ProductId(1)).await;
  store.add_product(ProductId(2)).await;
  store.update_product_amount(ProductId(2), 2).await;

  // Product 1 is capped at 3: the fourth unit is rejected and the
  // notifier (here: a WARN log) carries the only visible failure signal.
  store.add_product(ProductId(1)).await;
  store.add_product(ProductId(1)).await;

  // 3. Read the snapshot.
  for item in store.cart().iter() {
    info!(
      "{} x{} @ {}",
      item.product.title, item.amount, item.product.price
    );
  }

  Ok(())
}
