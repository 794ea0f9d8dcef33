use crate::db::{DbConnection, DbPool};
use crate::domain::basket_line::{BasketLine, NewBasketLine};
use crate::domain::payment::{NewPayment, Payment};
use crate::repository::errors::RepositoryResult;

pub mod errors;

mod basket_line;
mod payment;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over payment records.
pub trait PaymentReader {
    fn get_payment_by_id(&self, id: i32) -> RepositoryResult<Option<Payment>>;
}

/// Write operations over payment records.
pub trait PaymentWriter {
    fn create_payment(&self, new_payment: &NewPayment) -> RepositoryResult<Payment>;
}

/// Read-only operations over basket line records.
pub trait BasketLineReader {
    fn get_basket_line_by_id(&self, id: i32) -> RepositoryResult<Option<BasketLine>>;
    fn list_basket_lines(&self) -> RepositoryResult<Vec<BasketLine>>;
}

/// Write operations over basket line records.
pub trait BasketLineWriter {
    fn create_basket_line(&self, new_basket_line: &NewBasketLine) -> RepositoryResult<BasketLine>;
}
