//! Unified HTTP server.
//!
//! Thin adapter layer only: every route resolves an identity, hands off
//! to a workflow, and maps the verdict to a status code via the error
//! taxonomy. No validation or authorization logic lives here.

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use cbn_core::Config;
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

/// Install DDL and seed the closed language set. Idempotent.
async fn migrate(client: &Client) {
    cbn_pg::install::<cbn_auth::Member>(client)
        .await
        .expect("users table");
    cbn_pg::install::<cbn_paste::Language>(client)
        .await
        .expect("languages table");
    cbn_pg::install::<cbn_paste::Paste>(client)
        .await
        .expect("pastes table");
    cbn_paste::seed_languages(client).await.expect("language seed");
}

#[rustfmt::skip]
pub async fn run(config: Config) -> Result<(), std::io::Error> {
    let client = cbn_pg::db(&config.db_url).await;
    migrate(&client).await;
    let crypto = web::Data::new(cbn_auth::Crypto::from_config(&config));
    let bind = config.bind.clone();
    let config = web::Data::new(config);
    let client = web::Data::new(client);
    log::info!("starting server on {}", bind);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(crypto.clone())
            .app_data(config.clone())
            .app_data(client.clone())
            .route("/health", web::get().to(health))
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(cbn_auth::register))
                    .route("/login", web::post().to(cbn_auth::login)),
            )
            .service(
                web::scope("/code")
                    .route("/all", web::get().to(cbn_paste::all))
                    .route("/post", web::post().to(cbn_paste::create))
                    .route("/{slug}", web::get().to(cbn_paste::fetch)),
            )
            .service(
                web::scope("/user")
                    .route("/{id}/codes", web::get().to(cbn_paste::by_member))
                    .route("/{id}", web::get().to(cbn_auth::profile))
                    .route("/{id}", web::put().to(cbn_auth::update)),
            )
    })
    .bind(bind)?
    .run()
    .await
}
