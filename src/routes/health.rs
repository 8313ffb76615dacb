use actix_web::get;
use chrono::Utc;
use serde::Serialize;

use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize)]
pub struct HealthRes {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: i64,
}

fn up(message: &'static str) -> ApiResult<HealthRes> {
    Ok(ApiResponse::Ok(HealthRes {
        status: "UP",
        message,
        timestamp: Utc::now().timestamp_millis(),
    }))
}

#[get("/")]
pub async fn root() -> ApiResult<HealthRes> {
    up("Cuenta Ahorros API is running")
}

#[get("/health")]
pub async fn health() -> ApiResult<HealthRes> {
    up("Application is healthy")
}

#[get("/api/healthcheck")]
pub async fn api_healthcheck() -> ApiResult<HealthRes> {
    up("API Health Check - Cuenta Ahorros Backend is running")
}
