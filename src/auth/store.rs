use async_trait::async_trait;
use uuid::Uuid;

use crate::types::error::AppError;

/// Stored credential material for one identifier, as read from account
/// storage. The verifier consults `password_hash` and `active`; the rest
/// feeds the login response's identity summary.
#[derive(Debug, Clone)]
pub struct CredentialRecord {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub active: bool,
}

/// Read-only collaborator interface to user storage. The auth core never
/// writes through this seam.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_credential_by_email(
        &self,
        email: &str,
    ) -> Result<Option<CredentialRecord>, AppError>;
}
