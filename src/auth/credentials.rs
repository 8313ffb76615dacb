use crate::auth::store::CredentialStore;
use crate::types::error::AppError;
use crate::utils::password;

/// Check a submitted email/password pair against stored credential
/// material. Unknown identifier, inactive account and wrong secret all
/// come back as `Ok(false)` so callers cannot tell them apart.
///
/// Read-only; the presented secret is never logged.
pub async fn verify(
    store: &dyn CredentialStore,
    identifier: &str,
    presented_secret: &str,
) -> Result<bool, AppError> {
    let record = match store.find_credential_by_email(identifier).await? {
        Some(record) => record,
        None => return Ok(false),
    };

    if !record.active {
        return Ok(false);
    }

    password::verify(presented_secret, &record.password_hash)
        .map_err(|_| AppError::Internal("stored credential hash is not a valid PHC string".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::store::CredentialRecord;
    use async_trait::async_trait;
    use uuid::Uuid;

    struct OneUserStore {
        record: CredentialRecord,
    }

    #[async_trait]
    impl CredentialStore for OneUserStore {
        async fn find_credential_by_email(
            &self,
            email: &str,
        ) -> Result<Option<CredentialRecord>, AppError> {
            Ok((email == self.record.email).then(|| self.record.clone()))
        }
    }

    fn store_with(active: bool) -> OneUserStore {
        OneUserStore {
            record: CredentialRecord {
                user_id: Uuid::new_v4(),
                name: "Ada".to_string(),
                email: "a@x.com".to_string(),
                password_hash: password::hash("correct").unwrap(),
                active,
            },
        }
    }

    #[tokio::test]
    async fn correct_secret_on_active_record_verifies() {
        let store = store_with(true);
        assert!(verify(&store, "a@x.com", "correct").await.unwrap());
    }

    #[tokio::test]
    async fn wrong_secret_fails() {
        let store = store_with(true);
        assert!(!verify(&store, "a@x.com", "wrong").await.unwrap());
    }

    #[tokio::test]
    async fn unknown_identifier_fails_without_distinction() {
        let store = store_with(true);
        assert!(!verify(&store, "nobody@x.com", "correct").await.unwrap());
    }

    #[tokio::test]
    async fn inactive_account_fails_even_with_correct_secret() {
        let store = store_with(false);
        assert!(!verify(&store, "a@x.com", "correct").await.unwrap());
    }
}
