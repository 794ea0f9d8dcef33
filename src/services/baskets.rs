use crate::catalog::Catalog;
use crate::domain::basket_line::{BasketLine, NewBasketLine};
use crate::forms::baskets::{AddBasketLineForm, BasketRuleViolation};
use crate::repository::{BasketLineWriter, PaymentReader};
use crate::services::{ServiceError, ServiceResult};

/// Validates a basket line submission and records it.
///
/// Checking stops at the first broken rule, and the payment lookup runs
/// before the product and quantity checks; the order decides which single
/// message a malformed submission receives.
pub fn create_basket_line<R>(
    repo: &R,
    catalog: &Catalog,
    form: AddBasketLineForm,
) -> ServiceResult<BasketLine>
where
    R: PaymentReader + BasketLineWriter + ?Sized,
{
    let payment = repo
        .get_payment_by_id(form.payment_id)
        .map_err(ServiceError::from)?;

    let Some(payment) = payment else {
        return Err(ServiceError::Form(
            BasketRuleViolation::UnknownPayment.to_string(),
        ));
    };

    if !catalog.contains(form.product_id) {
        return Err(ServiceError::Form(
            BasketRuleViolation::UnknownProduct.to_string(),
        ));
    }

    if form.quantity < 1 {
        return Err(ServiceError::Form(
            BasketRuleViolation::QuantityBelowOne.to_string(),
        ));
    }

    let new_line = NewBasketLine::new(payment.id, form.product_id, form.quantity);
    repo.create_basket_line(&new_line).map_err(ServiceError::from)
}
