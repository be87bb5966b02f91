use serde::{Deserialize, Serialize};

/// A priced entry on the menu. Built once at startup and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: f64,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// A stored order. The serialized field names are the document layout in the
/// `customers` collection and must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerOrder {
    pub name: String,
    pub phone: String,
    pub ordered_items: Vec<String>,
    pub total_amount: f64,
}

/// Raw `POST /add-customer` body. Fields stay optional so a missing field is
/// reported as a validation error rather than a decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderForm {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub ordered_items: Option<String>,
}

/// Splits the comma-separated item field. Pieces are kept exactly as typed.
pub fn split_ordered_items(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}
