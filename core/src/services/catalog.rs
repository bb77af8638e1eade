// core/src/services/catalog.rs

//! The catalog/stock lookup seam and its bundled implementations.

use std::collections::HashMap;

use anyhow::anyhow;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::error::{CartError, CartResult};
use crate::models::{Product, ProductId, StockInfo};

/// Remote product/stock source consumed by the cart store.
///
/// Failure of either lookup must surface as `Err`; the store maps it to
/// its notification side-channel and leaves the cart untouched.
#[async_trait]
pub trait CatalogService: Send + Sync {
  /// Display data for a product, fetched when it first enters the cart.
  async fn fetch_product(&self, product_id: ProductId) -> CartResult<Product>;

  /// Current purchasable limit for a product.
  async fn fetch_stock(&self, product_id: ProductId) -> CartResult<StockInfo>;
}

/// Catalog backed by the storefront HTTP API:
/// `GET {base_url}/products/{id}` and `GET {base_url}/stock/{id}`.
///
/// Non-2xx statuses, transport errors, and decode failures all map to
/// [`CartError::Catalog`].
pub struct HttpCatalog {
  client: reqwest::Client,
  base_url: String,
}

impl HttpCatalog {
  pub fn new(base_url: impl Into<String>) -> Self {
    Self::with_client(reqwest::Client::new(), base_url)
  }

  /// Uses a preconfigured client (timeouts, proxies, ...).
  pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
    let base_url = base_url.into().trim_end_matches('/').to_string();
    HttpCatalog { client, base_url }
  }

  #[instrument(skip(self), fields(base_url = %self.base_url))]
  async fn get_json<T: DeserializeOwned>(&self, path: &str) -> CartResult<T> {
    let url = format!("{}/{}", self.base_url, path);
    let response = self
      .client
      .get(&url)
      .send()
      .await
      .map_err(CartError::catalog)?
      .error_for_status()
      .map_err(CartError::catalog)?;
    response.json::<T>().await.map_err(CartError::catalog)
  }
}

#[async_trait]
impl CatalogService for HttpCatalog {
  async fn fetch_product(&self, product_id: ProductId) -> CartResult<Product> {
    self.get_json(&format!("products/{product_id}")).await
  }

  async fn fetch_stock(&self, product_id: ProductId) -> CartResult<StockInfo> {
    self.get_json(&format!("stock/{product_id}")).await
  }
}

/// In-memory catalog for examples, offline development, and tests.
///
/// Unknown ids fail the same way a 404 from [`HttpCatalog`] does.
#[derive(Debug, Default)]
pub struct StaticCatalog {
  products: HashMap<ProductId, Product>,
  stock: HashMap<ProductId, i32>,
}

impl StaticCatalog {
  pub fn new() -> Self {
    Self::default()
  }

  /// Registers a product together with its purchasable limit.
  pub fn with_product(mut self, product: Product, stock: i32) -> Self {
    self.stock.insert(product.id, stock);
    self.products.insert(product.id, product);
    self
  }
}

#[async_trait]
impl CatalogService for StaticCatalog {
  async fn fetch_product(&self, product_id: ProductId) -> CartResult<Product> {
    self
      .products
      .get(&product_id)
      .cloned()
      .ok_or_else(|| CartError::catalog(anyhow!("product {product_id} is not in the catalog")))
  }

  async fn fetch_stock(&self, product_id: ProductId) -> CartResult<StockInfo> {
    self
      .stock
      .get(&product_id)
      .map(|amount| StockInfo { amount: *amount })
      .ok_or_else(|| CartError::catalog(anyhow!("no stock record for product {product_id}")))
  }
}
