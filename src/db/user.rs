use crate::auth::store::{CredentialRecord, CredentialStore};
use crate::db::postgres_service::PostgresService;
use crate::types::{error::AppError, user::DBUserCreate};
use async_trait::async_trait;
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};
use uuid::Uuid;

impl PostgresService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn get_user_by_id(&self, id: &Uuid) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(*id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<UserModel, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn list_users(&self) -> Result<Vec<UserModel>, AppError> {
        Ok(User::find()
            .order_by_asc(entity::user::Column::CreatedAt)
            .all(&self.db)
            .await?)
    }

    /// Signup: create user. The payload carries an already-hashed secret.
    pub async fn create_user(&self, payload: DBUserCreate) -> Result<UserModel, AppError> {
        if self.user_exists_by_email(&payload.email).await? {
            return Err(AppError::AlreadyExists);
        }
        let uid = Uuid::new_v4();
        let now = Utc::now();
        let txn = self.db.begin().await?;

        User::insert(UserActive {
            id: Set(uid),
            name: Set(payload.name),
            email: Set(payload.email),
            password_hash: Set(payload.password_hash),
            active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(&txn)
        .await?;

        txn.commit().await?;
        self.get_user_by_id(&uid).await
    }

    pub async fn update_user(
        &self,
        user_id: Uuid,
        name: String,
        email: String,
    ) -> Result<UserModel, AppError> {
        let current = self.get_user_by_id(&user_id).await?;
        if email != current.email && self.user_exists_by_email(&email).await? {
            return Err(AppError::AlreadyExists);
        }
        let mut am: UserActive = current.into();
        am.name = Set(name);
        am.email = Set(email);
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.db).await?)
    }

    pub async fn change_password(
        &self,
        user_id: Uuid,
        password_hash: String,
    ) -> Result<(), AppError> {
        let mut am: UserActive = self.get_user_by_id(&user_id).await?.into();
        am.password_hash = Set(password_hash);
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.db).await.map(|_| ())?)
    }

    pub async fn set_user_active(&self, user_id: Uuid, active: bool) -> Result<(), AppError> {
        let mut am: UserActive = self.get_user_by_id(&user_id).await?.into();
        am.active = Set(active);
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.db).await.map(|_| ())?)
    }
}

#[async_trait]
impl CredentialStore for PostgresService {
    async fn find_credential_by_email(
        &self,
        email: &str,
    ) -> Result<Option<CredentialRecord>, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(&self.db)
            .await?
            .map(|u| CredentialRecord {
                user_id: u.id,
                name: u.name,
                email: u.email,
                password_hash: u.password_hash,
                active: u.active,
            }))
    }
}
