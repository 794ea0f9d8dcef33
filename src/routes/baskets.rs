use actix_web::{HttpResponse, Responder, post, web};

use crate::catalog::Catalog;
use crate::forms::baskets::AddBasketLineForm;
use crate::repository::DieselRepository;
use crate::services::{ServiceError, baskets};

/// Message returned when the request body cannot be bound.
const BIND_ERROR: &str = "Błąd obsługi zakupionych produktów";

/// Confirmation returned after a basket line is recorded. The new
/// identifier is deliberately not included in the response.
const CREATED: &str = "Zakup wprowadzony";

#[post("/basket")]
pub async fn add_basket_line(
    repo: web::Data<DieselRepository>,
    catalog: web::Data<Catalog>,
    body: web::Bytes,
) -> impl Responder {
    let form: AddBasketLineForm = match serde_json::from_slice(&body) {
        Ok(form) => form,
        Err(err) => {
            log::debug!("Failed to bind a basket submission: {err}");
            return HttpResponse::BadRequest().body(BIND_ERROR);
        }
    };

    match baskets::create_basket_line(repo.get_ref(), catalog.get_ref(), form) {
        Ok(_) => HttpResponse::Ok().body(CREATED),
        Err(ServiceError::Form(message)) => HttpResponse::BadRequest().body(message),
        Err(err) => {
            log::error!("Failed to record a basket line: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
