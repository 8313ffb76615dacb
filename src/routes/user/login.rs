use actix_web::{post, web};
use log::{info, warn};

use crate::auth::credentials;
use crate::auth::jwt::TokenAuthority;
use crate::auth::store::CredentialStore;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{LoginRes, RLogin, UserSummary};

/// Login boundary: credentials in, bearer token out. Every failure mode
/// (unknown email, wrong password, inactive account) produces the same
/// rejection.
#[post("/login")]
pub async fn login(
    store: web::Data<dyn CredentialStore>,
    authority: web::Data<TokenAuthority>,
    body: web::Json<RLogin>,
) -> ApiResult<LoginRes> {
    info!("login attempt for {}", body.email);

    if !credentials::verify(store.get_ref(), &body.email, &body.password).await? {
        warn!("login failed for {}", body.email);
        return Err(AppError::InvalidCredentials);
    }

    // Verified above; a record vanishing between the two reads just looks
    // like a failed login.
    let record = store
        .find_credential_by_email(&body.email)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    let token = authority.issue(&record.email)?;
    info!("login successful for {}", record.email);

    Ok(ApiResponse::Ok(LoginRes {
        token,
        user: UserSummary {
            id: record.user_id,
            name: record.name,
            email: record.email,
            active: record.active,
        },
    }))
}
