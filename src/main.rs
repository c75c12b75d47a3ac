//! Function host binary
//!
//! Serves the two HTTP triggers. Listens on `FUNCTIONS_BIND_ADDR`
//! (default `0.0.0.0:7071`).

use actix_web::{App, HttpServer};

use purview_functions::functions::{pvexport, pvmappings};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .try_init();

    let bind_addr =
        std::env::var("FUNCTIONS_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:7071".to_string());

    tracing::info!(%bind_addr, "starting function host");

    HttpServer::new(|| App::new().service(pvexport).service(pvmappings))
        .bind(bind_addr)?
        .run()
        .await
}
