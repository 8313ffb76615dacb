use actix_web::{get, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserSummary;

#[get("/{id}")]
pub async fn get_user(
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<UserSummary> {
    let user = db.get_user_by_id(&path.into_inner()).await?;
    Ok(ApiResponse::Ok(user.into()))
}
