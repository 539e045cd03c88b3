use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One inventory record, built fresh for each request and discarded after
/// the response is serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub unit_price: f64,
    /// Fields the swap does not touch pass through unchanged.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}
