use actix_cors::Cors;
use actix_web::{http, middleware::from_fn, web, App, HttpServer};
use log::info;
use std::sync::Arc;

use ahorros_auth::auth::gate::{auth_gate, PublicPaths};
use ahorros_auth::auth::jwt::TokenAuthority;
use ahorros_auth::auth::store::CredentialStore;
use ahorros_auth::config::EnvConfig;
use ahorros_auth::db::postgres_service::PostgresService;
use ahorros_auth::routes::configure_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    // EnvConfig::from_env aborts on a missing JWT_SECRET or POSTGRES_URI,
    // so a misconfigured process never serves a request.
    let config = EnvConfig::from_env();
    let authority = TokenAuthority::new(&config.jwt_secret, config.token_ttl_hours);
    let public_paths = PublicPaths::default();
    let addr = format!("0.0.0.0:{}", config.port);

    let postgres_service = Arc::new(
        PostgresService::new(&config.db_url)
            .await
            .expect("Failed to initialize PostgresService"),
    );

    info!("Starting server on {}", addr);

    let cors_origin = config.cors_origin.clone();
    HttpServer::new(move || {
        let store: Arc<dyn CredentialStore> = Arc::clone(&postgres_service) as Arc<dyn CredentialStore>;

        let cors = if cors_origin == "*" {
            Cors::default().allow_any_origin()
        } else {
            Cors::default().allowed_origin(&cors_origin)
        }
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![http::header::AUTHORIZATION, http::header::CONTENT_TYPE])
        .max_age(3600);

        App::new()
            .app_data(web::Data::new(Arc::clone(&postgres_service)))
            .app_data(web::Data::from(store))
            .app_data(web::Data::new(authority.clone()))
            .app_data(web::Data::new(public_paths.clone()))
            .configure(configure_routes)
            .wrap(from_fn(auth_gate))
            .wrap(cors)
    })
    .bind(addr)?
    .run()
    .await
}
