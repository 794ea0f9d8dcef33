use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use storefront::catalog::Catalog;
use storefront::db::establish_connection_pool;
use storefront::repository::DieselRepository;
use storefront::routes::baskets::add_basket_line;
use storefront::routes::main::{StopHandle, kill_server, show_index};
use storefront::routes::payments::add_payment;
use storefront::routes::products::show_products;
use storefront::{ALLOWED_ORIGINS, DATABASE_URL, LISTEN_ADDR, LISTEN_PORT};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let pool = match establish_connection_pool(DATABASE_URL) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    // The service is unusable without its tables; abort if they cannot
    // be created.
    {
        let mut conn = match pool.get() {
            Ok(conn) => conn,
            Err(e) => {
                log::error!("Failed to get a database connection: {e}");
                std::process::exit(1);
            }
        };
        if let Err(e) = conn.run_pending_migrations(MIGRATIONS) {
            log::error!("Failed to create the database schema: {e}");
            std::process::exit(1);
        }
    }

    let repo = DieselRepository::new(pool);
    let catalog = Catalog::new();
    let stop_handle = web::Data::new(StopHandle::default());

    let server = HttpServer::new({
        let stop_handle = stop_handle.clone();
        move || {
            let mut cors = Cors::default()
                .allowed_methods(["GET", "POST"])
                .allow_any_header();
            for origin in ALLOWED_ORIGINS {
                cors = cors.allowed_origin(origin);
            }

            App::new()
                .wrap(middleware::Logger::default())
                .wrap(cors)
                .service(show_index)
                .service(show_products)
                .service(add_payment)
                .service(add_basket_line)
                .service(kill_server)
                .app_data(web::Data::new(repo.clone()))
                .app_data(web::Data::new(catalog.clone()))
                .app_data(stop_handle.clone())
        }
    })
    .bind((LISTEN_ADDR, LISTEN_PORT))?
    .run();

    stop_handle.register(server.handle());

    server.await
}
