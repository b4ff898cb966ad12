use super::*;
use cbn_core::Unique;
use serde::Deserialize;
use serde::Serialize;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct UpdateRequest {
    pub username: Option<String>,
    #[serde(rename = "currentPassword")]
    pub current_password: Option<String>,
    #[serde(rename = "newPassword")]
    pub new_password: Option<String>,
}

/// Sanitized profile view. Never carries the password digest.
#[derive(Debug, Serialize)]
pub struct MemberInfo {
    pub id: i64,
    pub username: String,
    pub role: Role,
}

impl From<Member> for MemberInfo {
    fn from(member: Member) -> Self {
        Self {
            id: member.id().inner(),
            username: member.username().to_string(),
            role: member.role(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub id: i64,
    pub token: String,
}
