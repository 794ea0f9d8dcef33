use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::basket_line::{BasketLine as DomainBasketLine, NewBasketLine as DomainNewBasketLine};
use crate::models::payment::Payment;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::basket_lines)]
#[diesel(belongs_to(Payment, foreign_key = payment_id))]
pub struct BasketLine {
    pub id: i32,
    pub payment_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::basket_lines)]
pub struct NewBasketLine {
    pub payment_id: i32,
    pub product_id: i32,
    pub quantity: i32,
}

impl From<BasketLine> for DomainBasketLine {
    fn from(value: BasketLine) -> Self {
        Self {
            id: value.id,
            payment_id: value.payment_id,
            product_id: value.product_id,
            quantity: value.quantity,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl From<&DomainNewBasketLine> for NewBasketLine {
    fn from(value: &DomainNewBasketLine) -> Self {
        Self {
            payment_id: value.payment_id,
            product_id: value.product_id,
            quantity: value.quantity,
        }
    }
}
