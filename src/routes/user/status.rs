use actix_web::{put, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};

#[put("/{id}/activate")]
pub async fn activate(
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<()> {
    db.set_user_active(path.into_inner(), true).await?;
    Ok(ApiResponse::EmptyOk)
}

/// Deactivated accounts keep their record but can no longer log in;
/// the credential verifier treats them as invalid.
#[put("/{id}/deactivate")]
pub async fn deactivate(
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<()> {
    db.set_user_active(path.into_inner(), false).await?;
    Ok(ApiResponse::EmptyOk)
}
