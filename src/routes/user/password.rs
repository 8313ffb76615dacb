use actix_web::{put, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::RPasswordChange;
use crate::utils::password;

#[put("/{id}/password")]
pub async fn change_password(
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    body: web::Json<RPasswordChange>,
) -> ApiResult<()> {
    if body.password.is_empty() {
        return Err(AppError::Validation("password is required".into()));
    }

    let password_hash = password::hash(&body.password)
        .map_err(|_| AppError::Internal("password hashing failed".into()))?;

    db.change_password(path.into_inner(), password_hash).await?;
    Ok(ApiResponse::EmptyOk)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use sea_orm::{DatabaseBackend, MockDatabase};
    use serde_json::json;

    #[actix_web::test]
    async fn empty_password_is_rejected_before_hashing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let svc = Arc::new(PostgresService { db });
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(svc))
                .service(web::scope("/api/users").service(change_password)),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/users/{}/password", Uuid::new_v4()))
            .set_json(json!({"password": ""}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
