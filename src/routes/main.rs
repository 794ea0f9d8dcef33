use std::sync::Mutex;

use actix_web::dev::ServerHandle;
use actix_web::{HttpResponse, Responder, get, web};

/// Greeting returned from the index route.
const GREETING: &str = "Serwer uruchomiony.";

/// Late-bound handle used to stop the server from a request handler.
///
/// The handle only exists once `HttpServer::run` has been called, which is
/// after the app factory is built, so it is registered separately.
#[derive(Default)]
pub struct StopHandle {
    inner: Mutex<Option<ServerHandle>>,
}

impl StopHandle {
    /// Store the handle of the running server.
    pub fn register(&self, handle: ServerHandle) {
        if let Ok(mut guard) = self.inner.lock() {
            *guard = Some(handle);
        }
    }

    /// Begin a graceful shutdown, draining in-flight connections.
    pub fn stop(&self) {
        if let Ok(guard) = self.inner.lock() {
            if let Some(handle) = guard.as_ref() {
                // The returned future resolves when the drain completes;
                // the stop signal itself is sent eagerly.
                drop(handle.stop(true));
            }
        }
    }
}

#[get("/")]
pub async fn show_index() -> impl Responder {
    HttpResponse::Ok().body(GREETING)
}

#[get("/kill")]
pub async fn kill_server(stop_handle: web::Data<StopHandle>) -> impl Responder {
    log::info!("Shutdown requested; draining connections");
    stop_handle.stop();
    HttpResponse::Ok().finish()
}
