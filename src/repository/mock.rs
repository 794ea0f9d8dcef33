use mockall::mock;

use super::{BasketLineReader, BasketLineWriter, PaymentReader, PaymentWriter};
use crate::domain::{
    basket_line::{BasketLine, NewBasketLine},
    payment::{NewPayment, Payment},
};
use crate::repository::errors::RepositoryResult;

mock! {
    pub PaymentReader {}

    impl PaymentReader for PaymentReader {
        fn get_payment_by_id(&self, id: i32) -> RepositoryResult<Option<Payment>>;
    }
}

mock! {
    pub PaymentWriter {}

    impl PaymentWriter for PaymentWriter {
        fn create_payment(&self, new_payment: &NewPayment) -> RepositoryResult<Payment>;
    }
}

mock! {
    pub BasketLineReader {}

    impl BasketLineReader for BasketLineReader {
        fn get_basket_line_by_id(&self, id: i32) -> RepositoryResult<Option<BasketLine>>;
        fn list_basket_lines(&self) -> RepositoryResult<Vec<BasketLine>>;
    }
}

mock! {
    pub BasketLineWriter {}

    impl BasketLineWriter for BasketLineWriter {
        fn create_basket_line(&self, new_basket_line: &NewBasketLine) -> RepositoryResult<BasketLine>;
    }
}
