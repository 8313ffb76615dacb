use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use ahorros_auth::auth::jwt::TokenAuthority;
use ahorros_auth::auth::store::{CredentialRecord, CredentialStore};
use ahorros_auth::types::error::AppError;
use ahorros_auth::utils::password;

pub const TEST_SECRET: &str = "integration-test-secret";

pub fn authority() -> TokenAuthority {
    TokenAuthority::new(TEST_SECRET, 24)
}

/// In-memory stand-in for the user storage collaborator. The gate and the
/// login flow only ever read through the `CredentialStore` seam, so these
/// tests need no database.
pub struct MemoryStore {
    records: Vec<CredentialRecord>,
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn find_credential_by_email(
        &self,
        email: &str,
    ) -> Result<Option<CredentialRecord>, AppError> {
        Ok(self
            .records
            .iter()
            .find(|r| r.email == email)
            .cloned())
    }
}

/// One active account (`a@x.com` / `correct`) and one deactivated account
/// (`dormant@x.com` / `correct`).
pub fn seeded_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore {
        records: vec![
            CredentialRecord {
                user_id: Uuid::new_v4(),
                name: "Ada".to_string(),
                email: "a@x.com".to_string(),
                password_hash: password::hash("correct").expect("hashing failed"),
                active: true,
            },
            CredentialRecord {
                user_id: Uuid::new_v4(),
                name: "Dormant".to_string(),
                email: "dormant@x.com".to_string(),
                password_hash: password::hash("correct").expect("hashing failed"),
                active: false,
            },
        ],
    })
}

/// Renders middleware rejections (`Err`) into the HTTP response a real
/// client would receive, mirroring what the server's dispatcher does in
/// production. `test::call_service` panics on `Err`, so without this the
/// gate's 401s are unobservable from the tests.
pub async fn render_errors(
    req: actix_web::dev::ServiceRequest,
    next: actix_web::middleware::Next<impl actix_web::body::MessageBody + 'static>,
) -> Result<actix_web::dev::ServiceResponse<actix_web::body::BoxBody>, actix_web::Error> {
    match next.call(req).await {
        Ok(res) => Ok(res.map_into_boxed_body()),
        // Routing needs exclusive ownership of the request, so the
        // rejection is rendered against a synthetic one; the tests only
        // inspect the response.
        Err(err) => Ok(actix_web::dev::ServiceResponse::new(
            actix_web::test::TestRequest::default().to_http_request(),
            err.error_response(),
        )),
    }
}

/// Builds the same app composition as `main.rs`, minus the DB and CORS
/// plumbing: routes behind the request gate with a default public-path set.
macro_rules! test_app {
    ($store:expr, $authority:expr) => {{
        let store: std::sync::Arc<dyn ahorros_auth::auth::store::CredentialStore> = $store;
        actix_web::App::new()
            .app_data(actix_web::web::Data::from(store))
            .app_data(actix_web::web::Data::new($authority))
            .app_data(actix_web::web::Data::new(
                ahorros_auth::auth::gate::PublicPaths::default(),
            ))
            .configure(ahorros_auth::routes::configure_routes)
            .wrap(actix_web::middleware::from_fn(
                ahorros_auth::auth::gate::auth_gate,
            ))
            .wrap(actix_web::middleware::from_fn(common::render_errors))
    }};
}
