//! HTTP server wiring for the openvtt backend.
//!
//! Routing, CORS, request logging, dependency wiring, and the startup
//! sequence (env config → database + migration → bucket provisioning →
//! listener). All domain behavior lives in the auth/worlds/assets crates;
//! this crate only connects them to the wire.

mod schema;

pub use schema::migrate;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use std::sync::Arc;
use tokio_postgres::Client;

async fn health(client: web::Data<Arc<Client>>) -> impl Responder {
    match client
        .execute("SELECT 1", &[])
        .await
        .inspect_err(|e| log::error!("health check failed: {}", e))
    {
        Ok(_) => HttpResponse::Ok().body("ok"),
        Err(_) => HttpResponse::ServiceUnavailable().body("database unavailable"),
    }
}

#[rustfmt::skip]
pub async fn run() -> Result<(), std::io::Error> {
    let config = vtt_core::Config::from_env();
    let client = vtt_pg::db().await;
    schema::migrate(&client).await.expect("schema migration failed");
    let store = vtt_storage::ObjectStore::connect(&config).await;
    store.ensure_bucket().await.expect("bucket provisioning failed");
    let bind_addr = config.bind_addr.clone();
    let crypto = web::Data::new(vtt_auth::Crypto::from_config(&config));
    let config = web::Data::new(config);
    let store = web::Data::new(store);
    let client = web::Data::new(client);
    log::info!("starting openvtt server on {}", bind_addr);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(config.clone())
            .app_data(crypto.clone())
            .app_data(store.clone())
            .app_data(client.clone())
            .route("/health", web::get().to(health))
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(vtt_auth::register))
                    .route("/login", web::post().to(vtt_auth::login))
                    .route("/me", web::get().to(vtt_auth::me)),
            )
            .service(
                web::scope("/worlds")
                    .route("/create", web::post().to(vtt_worlds::create))
                    .route("/get-worlds", web::get().to(vtt_worlds::list))
                    .route("/{id}", web::delete().to(vtt_worlds::delete)),
            )
            .service(
                web::scope("/assets")
                    .route("/upload", web::post().to(vtt_assets::upload))
                    .route("/{id}/url", web::get().to(vtt_assets::presign))
                    .route("/{id}", web::get().to(vtt_assets::get_asset)),
            )
    })
    .workers(6)
    .bind(bind_addr)?
    .run()
    .await
}
