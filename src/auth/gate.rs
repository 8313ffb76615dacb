use std::collections::HashSet;
use std::future::{ready, Ready};

use actix_web::{
    body::MessageBody,
    dev::{Payload, ServiceRequest, ServiceResponse},
    http::header,
    middleware::Next,
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use log::warn;

use crate::auth::jwt::TokenAuthority;
use crate::types::error::{AppError, AuthError};

/// Routes exempt from authentication: health checks, login, registration.
pub const DEFAULT_PUBLIC_PATHS: &[&str] = &[
    "/",
    "/health",
    "/api/healthcheck",
    "/api/users/login",
    "/api/users/register",
];

/// Path patterns exempt from the gate. A pattern ending in `/*` matches
/// the prefix on segment boundaries, anything else matches exactly.
/// Built once at startup, read-only afterwards.
#[derive(Debug, Clone)]
pub struct PublicPaths {
    exact: HashSet<String>,
    prefixes: Vec<String>,
}

impl PublicPaths {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut exact = HashSet::new();
        let mut prefixes = Vec::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            match pattern.strip_suffix("/*") {
                Some(prefix) => prefixes.push(prefix.to_string()),
                None => {
                    exact.insert(pattern.to_string());
                }
            }
        }
        PublicPaths { exact, prefixes }
    }

    pub fn matches(&self, path: &str) -> bool {
        if self.exact.contains(path) {
            return true;
        }
        self.prefixes.iter().any(|prefix| {
            path == prefix
                || (path.starts_with(prefix.as_str())
                    && path.as_bytes().get(prefix.len()) == Some(&b'/'))
        })
    }
}

impl Default for PublicPaths {
    fn default() -> Self {
        PublicPaths::new(DEFAULT_PUBLIC_PATHS)
    }
}

/// Identity resolved from a valid bearer token, attached to the request by
/// the gate and read by handlers through the extractor below.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub email: String,
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<AuthenticatedUser>()
                .cloned()
                .ok_or_else(|| AppError::Unauthorized.into()),
        )
    }
}

/// Request gate, composed ahead of route dispatch for every request.
/// Public paths pass through untouched; everything else must present a
/// valid bearer token or is rejected before any handler runs. This is the
/// sole enforcement point, handlers do not re-check authentication.
pub async fn auth_gate(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    if let Some(public) = req.app_data::<web::Data<PublicPaths>>() {
        if public.matches(req.path()) {
            return next.call(req).await;
        }
    }

    let Some(authority) = req.app_data::<web::Data<TokenAuthority>>() else {
        return Err(AppError::Internal("token authority not configured".into()).into());
    };

    let validated = match bearer_token(&req) {
        Some(token) => authority.validate(token),
        None => Err(AuthError::MissingToken),
    };

    match validated {
        Ok(claims) => {
            req.extensions_mut()
                .insert(AuthenticatedUser { email: claims.sub });
            next.call(req).await
        }
        Err(reason) => {
            warn!("rejected {} {}: {}", req.method(), req.path(), reason);
            Err(AppError::from(reason).into())
        }
    }
}

fn bearer_token(req: &ServiceRequest) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
