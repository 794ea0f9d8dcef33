use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A fixed catalog entry available for purchase.
///
/// Products are compiled into the binary and never persisted; the serde
/// renames pin the JSON field names the storefront client expects.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Product {
    /// Unique identifier of the product.
    #[serde(rename = "ID")]
    pub id: i32,
    /// Display name of the product.
    #[serde(rename = "NAME")]
    pub name: String,
    /// Studio that developed the product.
    #[serde(rename = "DEV")]
    pub developer: String,
    /// Description shown to users.
    #[serde(rename = "DESC")]
    pub description: String,
    /// Price of the product.
    #[serde(rename = "PRICE")]
    pub price: Decimal,
}
