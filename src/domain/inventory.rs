use serde::{Deserialize, Serialize};

/// A stocked part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub stock: u32,
    /// Stock below this level triggers a reorder alert.
    pub reorder_level: u32,
    pub unit_cost: f64,
    pub selling_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
}

impl InventoryItem {
    /// Short history line handed to the stock prediction prompt.
    #[must_use]
    pub fn history_line(&self) -> String {
        format!(
            "{} ({}): {} in stock, reorder level {}, unit cost {:.2}, selling price {:.2}",
            self.name, self.category, self.stock, self.reorder_level, self.unit_cost, self.selling_price
        )
    }
}
