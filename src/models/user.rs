use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Owner,
    Admin,
}

impl Role {
    /// Organization management (create/patch/upload) is restricted to
    /// owners and admins.
    pub fn can_manage_organization(&self) -> bool {
        matches!(self, Role::Owner | Role::Admin)
    }
}

/// Stored user record. The password hash lives here so the whole record
/// round-trips through Redis; it never leaves the process — responses use
/// [`PublicUser`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub password_hash: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user ID
    pub role: Role,
    pub exp: usize, // expiration time
}
