// core/src/store.rs

//! The cart store: an ordered, product-unique collection of line items
//! with snapshot reads and three stock-validated mutations.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, instrument, warn};

use crate::error::{CartError, CartResult};
use crate::models::{LineItem, ProductId};
use crate::services::notifier::{messages, Notifier};
use crate::services::CatalogService;
use crate::storage::{CartStorage, CART_STORAGE_KEY};

/// Shared cart state for one storefront session.
///
/// The collection is replaced wholesale on every commit, so readers always
/// observe atomic before/after snapshots. Mutations never return errors:
/// failures are absorbed here and reported through the [`Notifier`] with
/// exactly one message per failed call, leaving the cart untouched.
///
/// Overlapping mutations are resolved last-write-wins. Each operation
/// computes its replacement collection from whatever snapshot is current
/// once its remote lookups resolve; there is no cross-operation locking.
/// Lock guards are internal and never held across await points.
pub struct CartStore {
  cart: RwLock<Arc<Vec<LineItem>>>,
  catalog: Arc<dyn CatalogService>,
  storage: Arc<dyn CartStorage>,
  notifier: Arc<dyn Notifier>,
}

impl CartStore {
  /// Builds a store by restoring the persisted cart, empty when nothing
  /// was stored. Unreadable or corrupt stored state fails here, at the
  /// composition root; a running store never surfaces errors to callers.
  pub fn load(
    catalog: Arc<dyn CatalogService>,
    storage: Arc<dyn CartStorage>,
    notifier: Arc<dyn Notifier>,
  ) -> CartResult<Self> {
    let cart: Vec<LineItem> = match storage.get(CART_STORAGE_KEY)? {
      Some(raw) => serde_json::from_str(&raw).map_err(CartError::storage)?,
      None => Vec::new(),
    };
    info!(items = cart.len(), "cart restored from storage");
    Ok(CartStore {
      cart: RwLock::new(Arc::new(cart)),
      catalog,
      storage,
      notifier,
    })
  }

  /// Current snapshot, in insertion order. Immutable to the caller; all
  /// changes flow through the mutation operations.
  pub fn cart(&self) -> Arc<Vec<LineItem>> {
    Arc::clone(&self.cart.read())
  }

  /// Puts one unit of `product_id` into the cart: increments the existing
  /// line item, or fetches the product and appends a fresh entry with
  /// amount 1. Aborts with a notification when the stock limit would be
  /// exceeded or a catalog lookup fails.
  #[instrument(skip(self))]
  pub async fn add_product(&self, product_id: ProductId) {
    match self.try_add(product_id).await {
      Ok(()) => {}
      Err(err @ CartError::StockExceeded { .. }) => {
        warn!(error = %err, "add rejected by stock limit");
        self.notifier.error(messages::OUT_OF_STOCK);
      }
      Err(err) => {
        warn!(error = %err, "add failed");
        self.notifier.error(messages::ADD_FAILED);
      }
    }
  }

  /// Takes the line item for `product_id` out of the cart. Reports
  /// "error removing product" when it was not there. No remote lookup.
  #[instrument(skip(self))]
  pub fn remove_product(&self, product_id: ProductId) {
    if let Err(err) = self.try_remove(product_id) {
      warn!(error = %err, "remove failed");
      self.notifier.error(messages::REMOVE_FAILED);
    }
  }

  /// Sets the line item for `product_id` to the requested amount.
  ///
  /// `amount <= 0` returns immediately without touching anything: the
  /// guard against decrement-below-one UI actions, not an error. Stock
  /// violations and other failures abort with a notification.
  #[instrument(skip(self))]
  pub async fn update_product_amount(&self, product_id: ProductId, amount: i32) {
    if amount <= 0 {
      debug!("non-positive amount, ignoring");
      return;
    }
    match self.try_update(product_id, amount).await {
      Ok(()) => {}
      Err(err @ CartError::StockExceeded { .. }) => {
        warn!(error = %err, "update rejected by stock limit");
        self.notifier.error(messages::OUT_OF_STOCK);
      }
      Err(err) => {
        warn!(error = %err, "update failed");
        self.notifier.error(messages::UPDATE_FAILED);
      }
    }
  }

  async fn try_add(&self, product_id: ProductId) -> CartResult<()> {
    let stock = self.catalog.fetch_stock(product_id).await?;

    let mut next = self.snapshot_vec();
    match next.iter().position(|item| item.product.id == product_id) {
      Some(index) => {
        let requested = next[index].amount + 1;
        if requested > stock.amount {
          return Err(CartError::StockExceeded {
            product_id,
            requested,
            available: stock.amount,
          });
        }
        next[index].amount = requested;
      }
      None => {
        if stock.amount < 1 {
          return Err(CartError::StockExceeded {
            product_id,
            requested: 1,
            available: stock.amount,
          });
        }
        let product = self.catalog.fetch_product(product_id).await?;
        next.push(LineItem::first(product));
      }
    }
    self.commit(next);
    Ok(())
  }

  fn try_remove(&self, product_id: ProductId) -> CartResult<()> {
    let mut next = self.snapshot_vec();
    let index = next
      .iter()
      .position(|item| item.product.id == product_id)
      .ok_or(CartError::NotInCart(product_id))?;
    next.remove(index);
    self.commit(next);
    Ok(())
  }

  async fn try_update(&self, product_id: ProductId, amount: i32) -> CartResult<()> {
    // Stock is checked before the cart is searched, so an out-of-stock
    // request reports the stock message even for an absent product.
    let stock = self.catalog.fetch_stock(product_id).await?;
    if amount > stock.amount {
      return Err(CartError::StockExceeded {
        product_id,
        requested: amount,
        available: stock.amount,
      });
    }

    let mut next = self.snapshot_vec();
    let item = next
      .iter_mut()
      .find(|item| item.product.id == product_id)
      .ok_or(CartError::NotInCart(product_id))?;
    item.amount = amount;
    self.commit(next);
    Ok(())
  }

  /// Owned copy of the current collection, taken at the point the calling
  /// operation resumes after its remote lookups.
  fn snapshot_vec(&self) -> Vec<LineItem> {
    self.cart.read().as_ref().clone()
  }

  /// Atomically replaces the collection, then writes it back to storage.
  /// A value-identical commit is skipped entirely, so re-committing an
  /// unchanged cart never causes redundant storage I/O.
  fn commit(&self, next: Vec<LineItem>) {
    let next = Arc::new(next);
    {
      let mut current = self.cart.write();
      if *next == **current {
        debug!("commit without changes, skipping persistence");
        return;
      }
      *current = Arc::clone(&next);
    }
    info!(items = next.len(), "cart committed");
    self.persist(&next);
  }

  /// Post-commit write-back. A failure here leaves the in-memory cart as
  /// the source of truth; it is logged and not reported to the user.
  fn persist(&self, cart: &[LineItem]) {
    let raw = match serde_json::to_string(cart) {
      Ok(raw) => raw,
      Err(err) => {
        warn!(error = %err, "failed to serialize cart for persistence");
        return;
      }
    };
    if let Err(err) = self.storage.set(CART_STORAGE_KEY, &raw) {
      warn!(error = %err, "failed to persist cart");
    }
  }
}
