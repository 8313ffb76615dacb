use actix_web::{post, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RUserRegister, UserSummary};
use crate::utils::password;

#[post("/register")]
pub async fn register(
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RUserRegister>,
) -> ApiResult<UserSummary> {
    let body = body.into_inner();
    if body.name.trim().is_empty() || body.email.trim().is_empty() || body.password.is_empty() {
        return Err(AppError::Validation("name, email and password are required".into()));
    }

    let password_hash = password::hash(&body.password)
        .map_err(|_| AppError::Internal("password hashing failed".into()))?;

    let user = db
        .create_user(DBUserCreate {
            name: body.name,
            email: body.email,
            password_hash,
        })
        .await?;

    Ok(ApiResponse::Created(user.into()))
}
