use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize)]
pub struct RLogin {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct RUserRegister {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct RUserUpdate {
    pub name: String,
    pub email: String,
}

#[derive(Serialize, Deserialize)]
pub struct RPasswordChange {
    pub password: String,
}

/// What a user record looks like on the wire. No hash, ever.
#[derive(Serialize, Deserialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub active: bool,
}

impl From<entity::user::Model> for UserSummary {
    fn from(m: entity::user::Model) -> Self {
        UserSummary {
            id: m.id,
            name: m.name,
            email: m.email,
            active: m.active,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct LoginRes {
    pub token: String,
    pub user: UserSummary,
}

/// Internal payload for user creation; the hash is computed at the route
/// layer, the raw password never reaches the DB module.
pub struct DBUserCreate {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}
