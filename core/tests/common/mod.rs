// tests/common/mod.rs
#![allow(dead_code)] // Allow unused helpers in this common test module

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use parking_lot::Mutex;
use rocketshoes_cart::{
  CartError, CartResult, CartStorage, CartStore, CatalogService, Notifier, Product, ProductId,
  StockInfo, CART_STORAGE_KEY,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::Level;

// --- Catalog stub with failure injection ---

/// Catalog stub with per-lookup outage switches and a stock-lookup
/// counter, covering the failure paths the in-library `StaticCatalog`
/// does not model.
#[derive(Default)]
pub struct TestCatalog {
  products: Mutex<HashMap<ProductId, Product>>,
  stock: Mutex<HashMap<ProductId, i32>>,
  fail_stock: AtomicBool,
  fail_products: AtomicBool,
  stock_lookups: AtomicUsize,
}

impl TestCatalog {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn insert(&self, product: Product, stock: i32) {
    self.stock.lock().insert(product.id, stock);
    self.products.lock().insert(product.id, product);
  }

  pub fn set_stock(&self, product_id: ProductId, stock: i32) {
    self.stock.lock().insert(product_id, stock);
  }

  /// Makes every stock lookup fail from now on.
  pub fn break_stock(&self) {
    self.fail_stock.store(true, Ordering::SeqCst);
  }

  /// Makes every product lookup fail from now on.
  pub fn break_products(&self) {
    self.fail_products.store(true, Ordering::SeqCst);
  }

  pub fn stock_lookups(&self) -> usize {
    self.stock_lookups.load(Ordering::SeqCst)
  }
}

#[async_trait]
impl CatalogService for TestCatalog {
  async fn fetch_product(&self, product_id: ProductId) -> CartResult<Product> {
    if self.fail_products.load(Ordering::SeqCst) {
      return Err(CartError::catalog(anyhow!("catalog service is down")));
    }
    self
      .products
      .lock()
      .get(&product_id)
      .cloned()
      .ok_or_else(|| CartError::catalog(anyhow!("404: product {product_id}")))
  }

  async fn fetch_stock(&self, product_id: ProductId) -> CartResult<StockInfo> {
    self.stock_lookups.fetch_add(1, Ordering::SeqCst);
    if self.fail_stock.load(Ordering::SeqCst) {
      return Err(CartError::catalog(anyhow!("stock service is down")));
    }
    self
      .stock
      .lock()
      .get(&product_id)
      .map(|amount| StockInfo { amount: *amount })
      .ok_or_else(|| CartError::catalog(anyhow!("404: stock {product_id}")))
  }
}

// --- Notifier that records messages for assertions ---

#[derive(Default)]
pub struct RecordingNotifier {
  messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
  pub fn messages(&self) -> Vec<String> {
    self.messages.lock().clone()
  }
}

impl Notifier for RecordingNotifier {
  fn error(&self, message: &str) {
    self.messages.lock().push(message.to_string());
  }
}

// --- Storage that counts writes, for persistence assertions ---

#[derive(Default)]
pub struct CountingStorage {
  entries: Mutex<HashMap<String, String>>,
  writes: AtomicUsize,
}

impl CountingStorage {
  pub fn writes(&self) -> usize {
    self.writes.load(Ordering::SeqCst)
  }

  pub fn seed(&self, key: &str, value: &str) {
    self.entries.lock().insert(key.to_string(), value.to_string());
  }

  pub fn stored_cart(&self) -> Option<String> {
    self.entries.lock().get(CART_STORAGE_KEY).cloned()
  }
}

impl CartStorage for CountingStorage {
  fn get(&self, key: &str) -> CartResult<Option<String>> {
    Ok(self.entries.lock().get(key).cloned())
  }

  fn set(&self, key: &str, value: &str) -> CartResult<()> {
    self.writes.fetch_add(1, Ordering::SeqCst);
    self.entries.lock().insert(key.to_string(), value.to_string());
    Ok(())
  }
}

// --- Canned products (storefront catalog shapes) ---

pub fn product(id: u64, title: &str, price: Decimal) -> Product {
  Product {
    id: ProductId(id),
    title: title.to_string(),
    price,
    image: format!("https://cdn.example.com/shoes/{id}.jpg"),
  }
}

pub fn sneaker(id: u64) -> Product {
  product(id, "Tenis de Caminhada Leve Confortavel", dec!(179.90))
}

// --- Wired-up store plus handles on its collaborators ---

pub struct Harness {
  pub store: CartStore,
  pub catalog: Arc<TestCatalog>,
  pub notifier: Arc<RecordingNotifier>,
  pub storage: Arc<CountingStorage>,
}

pub fn harness() -> Harness {
  harness_with_storage(Arc::new(CountingStorage::default()))
}

pub fn harness_with_storage(storage: Arc<CountingStorage>) -> Harness {
  setup_tracing();
  let catalog = Arc::new(TestCatalog::new());
  let notifier = Arc::new(RecordingNotifier::default());
  let store = CartStore::load(catalog.clone(), storage.clone(), notifier.clone())
    .expect("stored cart should deserialize");
  Harness {
    store,
    catalog,
    notifier,
    storage,
  }
}

/// Compact (product id, amount) view of the current snapshot.
pub fn amounts(store: &CartStore) -> Vec<(u64, i32)> {
  store
    .cart()
    .iter()
    .map(|item| (item.product.id.0, item.amount))
    .collect()
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
