use actix_web::get;
use serde::{Deserialize, Serialize};

use crate::auth::gate::AuthenticatedUser;
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct MeRes {
    pub email: String,
}

/// Who the gate resolved this request to.
#[get("/me")]
pub async fn me(user: AuthenticatedUser) -> ApiResult<MeRes> {
    Ok(ApiResponse::Ok(MeRes { email: user.email }))
}
