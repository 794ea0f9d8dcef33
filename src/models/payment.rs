use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::payment::{NewPayment as DomainNewPayment, Payment as DomainPayment};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::payments)]
pub struct Payment {
    pub id: i32,
    pub user: String,
    pub method: String,
    pub amount_cents: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::payments)]
pub struct NewPayment<'a> {
    pub user: &'a str,
    pub method: &'a str,
    pub amount_cents: i64,
}

impl From<Payment> for DomainPayment {
    fn from(value: Payment) -> Self {
        Self {
            id: value.id,
            user: value.user,
            method: value.method.as_str().into(),
            amount_cents: value.amount_cents,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewPayment> for NewPayment<'a> {
    fn from(value: &'a DomainNewPayment) -> Self {
        Self {
            user: value.user.as_str(),
            method: value.method.as_str(),
            amount_cents: value.amount_cents,
        }
    }
}
