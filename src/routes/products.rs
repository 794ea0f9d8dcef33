use actix_web::{HttpResponse, Responder, get, web};

use crate::catalog::Catalog;

#[get("/products")]
pub async fn show_products(catalog: web::Data<Catalog>) -> impl Responder {
    HttpResponse::Ok().json(catalog.products())
}
