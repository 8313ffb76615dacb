use actix_web::web;

pub mod health;
pub mod user;

/// Route composition. Authentication is not configured here: the request
/// gate wraps the whole app ahead of dispatch (see `auth::gate`), and the
/// public-path set decides which of these routes skip it.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health::root)
        .service(health::health)
        .service(health::api_healthcheck);

    cfg.service(
        web::scope("/api/users")
            .service(user::login::login)
            .service(user::register::register)
            .service(user::me::me)
            .service(user::list::list)
            .service(user::get::get_user)
            .service(user::update::update)
            .service(user::password::change_password)
            .service(user::status::activate)
            .service(user::status::deactivate),
    );
}
