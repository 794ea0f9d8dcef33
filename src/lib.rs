pub mod catalog;
pub mod db;
pub mod domain;
pub mod forms;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// Address the HTTP listener binds to.
pub const LISTEN_ADDR: &str = "127.0.0.1";

/// Port the HTTP listener binds to.
pub const LISTEN_PORT: u16 = 22222;

/// SQLite database file backing the store.
pub const DATABASE_URL: &str = "payment.db";

/// Origins allowed by the cross-origin policy.
pub const ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:22222", "http://localhost:3000"];
