// core/src/storage.rs

//! Key-value persistence seam for the cart, plus file-backed and
//! in-memory implementations.
//!
//! The store reads exactly once (at [`CartStore::load`]) and writes after
//! every commit that changed the collection. Values are opaque strings;
//! the cart serializes itself to JSON before handing the value over.
//!
//! [`CartStore::load`]: crate::store::CartStore::load

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use parking_lot::Mutex;

use crate::error::{CartError, CartResult};

/// Storage key under which the serialized cart lives.
pub const CART_STORAGE_KEY: &str = "@RocketShoes:cart";

/// String-valued key-value store.
pub trait CartStorage: Send + Sync {
  fn get(&self, key: &str) -> CartResult<Option<String>>;
  fn set(&self, key: &str, value: &str) -> CartResult<()>;
}

/// In-process storage for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
  entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
  pub fn new() -> Self {
    Self::default()
  }
}

impl CartStorage for MemoryStorage {
  fn get(&self, key: &str) -> CartResult<Option<String>> {
    Ok(self.entries.lock().get(key).cloned())
  }

  fn set(&self, key: &str, value: &str) -> CartResult<()> {
    self.entries.lock().insert(key.to_string(), value.to_string());
    Ok(())
  }
}

/// Single-file storage: one JSON object per file, one entry per key.
/// The native stand-in for the browser's local storage.
#[derive(Debug)]
pub struct FileStorage {
  path: PathBuf,
}

impl FileStorage {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    FileStorage { path: path.into() }
  }

  fn read_entries(&self) -> CartResult<HashMap<String, String>> {
    if !self.path.exists() {
      return Ok(HashMap::new());
    }
    let raw = fs::read_to_string(&self.path).map_err(CartError::storage)?;
    serde_json::from_str(&raw).map_err(CartError::storage)
  }
}

impl CartStorage for FileStorage {
  fn get(&self, key: &str) -> CartResult<Option<String>> {
    Ok(self.read_entries()?.remove(key))
  }

  fn set(&self, key: &str, value: &str) -> CartResult<()> {
    let mut entries = self.read_entries()?;
    entries.insert(key.to_string(), value.to_string());
    let raw = serde_json::to_string_pretty(&entries).map_err(CartError::storage)?;
    fs::write(&self.path, raw).map_err(CartError::storage)
  }
}
