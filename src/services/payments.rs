use crate::domain::payment::Payment;
use crate::forms::payments::AddPaymentForm;
use crate::repository::PaymentWriter;
use crate::services::{ServiceError, ServiceResult};

/// Validates a payment submission and records it.
///
/// Validation accumulates every broken rule into one message; the stored
/// payment is returned so callers can expose its identifier.
pub fn create_payment<R>(repo: &R, form: AddPaymentForm) -> ServiceResult<Payment>
where
    R: PaymentWriter + ?Sized,
{
    let new_payment = form
        .into_new_payment()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_payment(&new_payment).map_err(ServiceError::from)
}
