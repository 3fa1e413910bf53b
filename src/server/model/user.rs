//! User domain model.
//!
//! The password hash stays on the entity; nothing above the service layer sees it.

use crate::model::user::UserDto;

/// Role assigned when registration does not name one.
pub const DEFAULT_ROLE: &str = "user";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub role: String,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            role: entity.role,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            role: self.role,
        }
    }
}

/// Validated registration input.
pub struct RegisterUserParams {
    pub username: String,
    pub password: String,
    pub role: String,
}
