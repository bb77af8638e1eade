// demos/storefront_app/src/main.rs

// Declare modules for the application
mod config;
mod errors;
mod toast;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::{AppError, Result as AppResult};
use crate::toast::ConsoleToast;

use rocketshoes_cart::{CartStore, FileStorage, HttpCatalog, ProductId};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

const USAGE: &str = "usage: storefront_app <show | add <id> | remove <id> | update <id> <amount>>";

enum Command {
  Show,
  Add(ProductId),
  Remove(ProductId),
  Update(ProductId, i32),
}

fn parse_command(args: &[String]) -> AppResult<Command> {
  let parse_id = |raw: &str| -> AppResult<ProductId> {
    raw
      .parse::<u64>()
      .map(ProductId)
      .map_err(|e| AppError::Usage(format!("invalid product id '{raw}': {e}")))
  };

  match args {
    [cmd] if cmd.as_str() == "show" => Ok(Command::Show),
    [cmd, id] if cmd.as_str() == "add" => Ok(Command::Add(parse_id(id)?)),
    [cmd, id] if cmd.as_str() == "remove" => Ok(Command::Remove(parse_id(id)?)),
    [cmd, id, amount] if cmd.as_str() == "update" => {
      let amount = amount
        .parse::<i32>()
        .map_err(|e| AppError::Usage(format!("invalid amount '{amount}': {e}")))?;
      Ok(Command::Update(parse_id(id)?, amount))
    }
    _ => Err(AppError::Usage(USAGE.to_string())),
  }
}

// Main function
#[tokio::main]
async fn main() {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  if let Err(err) = run().await {
    match &err {
      AppError::Usage(msg) => eprintln!("{msg}"),
      _ => tracing::error!(error = %err, "storefront app failed"),
    }
    std::process::exit(1);
  }
}

async fn run() -> AppResult<()> {
  let args: Vec<String> = std::env::args().skip(1).collect();
  let command = parse_command(&args)?;

  // Load application configuration
  let config = AppConfig::from_env()?;

  // Wire the cart store to its real collaborators: the storefront catalog
  // API, file-backed storage, and the console toast sink.
  let store = CartStore::load(
    Arc::new(HttpCatalog::new(&config.catalog_base_url)),
    Arc::new(FileStorage::new(&config.storage_path)),
    Arc::new(ConsoleToast),
  )?;

  match command {
    Command::Show => {}
    Command::Add(product_id) => store.add_product(product_id).await,
    Command::Remove(product_id) => store.remove_product(product_id),
    Command::Update(product_id, amount) => store.update_product_amount(product_id, amount).await,
  }

  print_cart(&store);
  Ok(())
}

fn print_cart(store: &CartStore) {
  let cart = store.cart();
  if cart.is_empty() {
    println!("cart is empty");
    return;
  }
  for item in cart.iter() {
    println!(
      "{:>3} x {:<42} R$ {}  (product {})",
      item.amount, item.product.title, item.product.price, item.product.id
    );
  }
}
