// core/src/services/notifier.rs

//! Fire-and-forget "show this error to the user" side-channel.
//!
//! Success is silent. Every failed cart operation produces exactly one
//! call with one of the literal messages below, and the cart is guaranteed
//! unchanged whenever a message fires.

use tracing::warn;

/// User-visible error messages emitted by the cart store.
pub mod messages {
  /// A mutation would push a line item past the remote stock limit.
  pub const OUT_OF_STOCK: &str = "requested quantity exceeds stock";
  /// `add_product` failed for any non-stock reason.
  pub const ADD_FAILED: &str = "error adding product";
  /// `remove_product` targeted a product that is not in the cart.
  pub const REMOVE_FAILED: &str = "error removing product";
  /// `update_product_amount` failed for any non-stock reason.
  pub const UPDATE_FAILED: &str = "error updating product quantity";
}

/// Notification sink consumed by the cart store.
///
/// Implementations render the message to the user (toast, console, ...);
/// the store never observes the outcome.
pub trait Notifier: Send + Sync {
  fn error(&self, message: &str);
}

/// Notifier that forwards messages to the tracing pipeline at WARN level.
/// A reasonable default sink when no UI is attached.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
  fn error(&self, message: &str) {
    warn!(target: "cart_notifications", "{message}");
  }
}
