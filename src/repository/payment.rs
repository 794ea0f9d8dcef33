use diesel::prelude::*;

use crate::domain::payment::{NewPayment as DomainNewPayment, Payment as DomainPayment};
use crate::models::payment::{NewPayment as DbNewPayment, Payment as DbPayment};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, PaymentReader, PaymentWriter};

impl PaymentReader for DieselRepository {
    fn get_payment_by_id(&self, id: i32) -> RepositoryResult<Option<DomainPayment>> {
        use crate::schema::payments;

        let mut conn = self.conn()?;
        let payment = payments::table
            .filter(payments::id.eq(id))
            .filter(payments::deleted_at.is_null())
            .first::<DbPayment>(&mut conn)
            .optional()?;

        Ok(payment.map(Into::into))
    }
}

impl PaymentWriter for DieselRepository {
    fn create_payment(&self, new_payment: &DomainNewPayment) -> RepositoryResult<DomainPayment> {
        use crate::schema::payments;

        let mut conn = self.conn()?;
        let db_new = DbNewPayment::from(new_payment);

        let created = diesel::insert_into(payments::table)
            .values(&db_new)
            .get_result::<DbPayment>(&mut conn)?;

        Ok(created.into())
    }
}
