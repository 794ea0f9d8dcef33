use actix_web::{HttpResponse, Responder, post, web};

use crate::forms::payments::AddPaymentForm;
use crate::repository::DieselRepository;
use crate::services::{ServiceError, payments};

/// Message returned when the request body cannot be bound.
const BIND_ERROR: &str = "Problem przy przyjmowaniu danych. Skontaktuj się z obsługą";

#[post("/payment")]
pub async fn add_payment(
    repo: web::Data<DieselRepository>,
    body: web::Bytes,
) -> impl Responder {
    // Bound by hand so a malformed body gets this endpoint's fixed message.
    let form: AddPaymentForm = match serde_json::from_slice(&body) {
        Ok(form) => form,
        Err(err) => {
            log::debug!("Failed to bind a payment submission: {err}");
            return HttpResponse::BadRequest().body(BIND_ERROR);
        }
    };

    match payments::create_payment(repo.get_ref(), form) {
        Ok(created) => HttpResponse::Ok().body(created.id.to_string()),
        Err(ServiceError::Form(message)) => HttpResponse::BadRequest().body(message),
        Err(err) => {
            log::error!("Failed to record a payment: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
