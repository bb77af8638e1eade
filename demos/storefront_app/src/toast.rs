// demos/storefront_app/src/toast.rs

use rocketshoes_cart::Notifier;

/// Console stand-in for the storefront's toast notifications. The store
/// fires these on every failed mutation; success stays silent.
#[derive(Debug, Default)]
pub struct ConsoleToast;

impl Notifier for ConsoleToast {
  fn error(&self, message: &str) {
    eprintln!("[toast] {message}");
  }
}
