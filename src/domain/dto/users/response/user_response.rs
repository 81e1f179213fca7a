use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::{User, UserRole};
use crate::domain::models::token::token::TokenPair;

/// 외부로 노출되는 계정 요약 정보
///
/// 비밀번호 해시와 일회용 토큰은 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub role: UserRole,
    pub is_email_verified: bool,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            display_name: user.display_name.clone(),
            role: user.role,
            is_email_verified: user.is_email_verified,
        }
    }
}

/// 인증 응답 DTO (JWT 토큰 쌍 + 계정 요약)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    /// 액세스 토큰 만료 시간 (초)
    pub expires_in: i64,
    pub user: UserSummary,
}

impl AuthResponse {
    pub fn new(tokens: TokenPair, user: &User) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: tokens.expires_in,
            user: UserSummary::from(user),
        }
    }
}

/// 단순 메시지 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::user::OneTimeToken;
    use chrono::{Duration, Utc};

    #[test]
    fn test_summary_never_exposes_secrets() {
        let now = Utc::now();
        let user = User::new_local(
            "alice@example.com".to_string(),
            "Alice".to_string(),
            "$2b$04$secret-hash".to_string(),
            UserRole::Customer,
            OneTimeToken::new("c".repeat(64), now + Duration::hours(24)),
            now,
        );

        let json = serde_json::to_string(&UserSummary::from(&user)).unwrap();

        assert!(json.contains("alice@example.com"));
        assert!(!json.contains("secret-hash"));
        assert!(!json.contains(&"c".repeat(64)));
    }
}
