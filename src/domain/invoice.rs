use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceStatus {
    Paid,
    Unpaid,
    Overdue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub total: f64,
}

impl LineItem {
    /// Build a line item whose total is `quantity * unit_price`.
    #[must_use]
    pub fn new(description: impl Into<String>, quantity: f64, unit_price: f64) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
            total: quantity * unit_price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub amount: f64,
    pub date: NaiveDate,
    /// One of [`PAYMENT_METHODS`](crate::catalog::PAYMENT_METHODS) in practice; not enforced.
    pub method: String,
    #[serde(default, rename = "ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// A billing record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    pub customer_id: String,
    pub customer_name: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub items: Vec<LineItem>,
    pub subtotal: f64,
    pub tax: f64,
    pub discount: f64,
    pub grand_total: f64,
    pub status: InvoiceStatus,
    #[serde(default)]
    pub payments: Vec<Payment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_reference_is_named_ref() {
        let payment = Payment {
            amount: 100.0,
            date: NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
            method: "Mobile Money".to_string(),
            reference: Some("MM-0091".to_string()),
        };
        let value = serde_json::to_value(&payment).unwrap();
        assert_eq!(value["ref"], "MM-0091");
        assert_eq!(value["date"], "2024-05-20");
    }

    #[test]
    fn test_line_item_total() {
        let item = LineItem::new("Labor", 2.5, 60.0);
        assert!((item.total - 150.0).abs() < f64::EPSILON);
    }
}
