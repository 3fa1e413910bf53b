use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub role: String,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterUserDto {
    pub username: String,
    pub password: String,
    /// Defaults to `"user"` when omitted.
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TokenDto {
    pub token: String,
}
