use actix_web::{put, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RUserUpdate, UserSummary};

#[put("/{id}")]
pub async fn update(
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    body: web::Json<RUserUpdate>,
) -> ApiResult<UserSummary> {
    let body = body.into_inner();
    if body.name.trim().is_empty() || body.email.trim().is_empty() {
        return Err(AppError::Validation("name and email are required".into()));
    }

    let user = db
        .update_user(path.into_inner(), body.name, body.email)
        .await?;
    Ok(ApiResponse::Ok(user.into()))
}
