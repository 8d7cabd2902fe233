// src/shared/ordering.rs
use serde::{Deserialize, Serialize};

/// One element of a display-order permutation.
///
/// Reorder requests carry the full target permutation (the caller
/// re-enumerates its list 0..n-1); the repositories rewrite each row's
/// `order` column to match, inside a single transaction per table. No
/// validation of the permutation's consistency happens here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub id: String,
    pub order: i32,
}
