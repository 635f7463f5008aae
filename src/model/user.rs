use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Flat representation of a user.
///
/// Deliberately omits the password column; it must never leave the data
/// layer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub is_active: bool,
    pub subscription_date: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            last_name: user.last_name,
            username: user.username,
            email: user.email,
            is_active: user.is_active,
            subscription_date: user.subscription_date,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Attributes accepted when creating or updating a user.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}
