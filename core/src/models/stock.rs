// core/src/models/stock.rs

use serde::{Deserialize, Serialize};

/// Stock fact as served by `GET stock/{id}`: the maximum purchasable
/// amount for a product at the current time.
///
/// Never cached. Every mutating operation that needs the limit re-fetches
/// it, so the check always runs against a fresh value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockInfo {
  pub amount: i32,
}
