// core/src/lib.rs

//! RocketShoes cart core: a client-side shopping-cart state store.
//!
//! The store keeps an ordered, product-unique collection of line items,
//! persists it through a key-value seam, and validates every mutation
//! against a remote stock limit before applying it:
//!  - Snapshot reads ([`CartStore::cart`]) that are immutable to the caller.
//!  - Three mutations: add one unit, remove a line item, set an amount.
//!  - Failures absorbed internally and surfaced only as user notifications.
//!  - Write-back persistence that skips value-identical commits.
//!
//! Consumers construct the store once at their composition root
//! ([`CartStore::load`]) with a catalog service, a key-value storage
//! backend, and a notification sink, then share it by reference.

// Declare modules according to the planned structure
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod store;

// --- Re-exports for the Public API ---

// The store itself
pub use crate::store::CartStore;

// Data shapes consumers read from snapshots and catalog payloads
pub use crate::models::{LineItem, Product, ProductId, StockInfo};

// Collaborator seams and their bundled implementations
pub use crate::services::catalog::{CatalogService, HttpCatalog, StaticCatalog};
pub use crate::services::notifier::{messages, Notifier, TracingNotifier};
pub use crate::storage::{CartStorage, FileStorage, MemoryStorage, CART_STORAGE_KEY};

pub use crate::error::{CartError, CartResult};
