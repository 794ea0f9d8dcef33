use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of one purchased product/quantity pair.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BasketLine {
    /// Unique identifier of the basket line.
    pub id: i32,
    /// Identifier of the payment the purchase was recorded against.
    pub payment_id: i32,
    /// Identifier of the purchased catalog product.
    pub product_id: i32,
    /// Number of units purchased.
    pub quantity: i32,
    /// Timestamp for when the basket line was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the basket line.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new basket line.
#[derive(Debug, Clone)]
pub struct NewBasketLine {
    /// Identifier of the payment the purchase is recorded against.
    pub payment_id: i32,
    /// Identifier of the purchased catalog product.
    pub product_id: i32,
    /// Number of units purchased.
    pub quantity: i32,
}

impl NewBasketLine {
    /// Build a new basket line payload with the supplied details.
    pub fn new(payment_id: i32, product_id: i32, quantity: i32) -> Self {
        Self {
            payment_id,
            product_id,
            quantity,
        }
    }
}
