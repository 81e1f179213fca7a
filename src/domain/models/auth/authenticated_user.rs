use std::future::{ready, Ready};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::UserRole;
use crate::domain::models::token::token::TokenClaims;
use crate::errors::errors::{AppError, AuthError};

/// 액세스 토큰에서 추출된 사용자 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID
    pub user_id: String,

    pub email: String,

    pub role: UserRole,
}

impl AuthenticatedUser {
    /// 특정 역할을 보유하고 있는지 확인
    pub fn has_role(&self, role: UserRole) -> bool {
        self.role == role
    }

    /// 관리자 권한을 보유하고 있는지 확인
    pub fn is_admin(&self) -> bool {
        self.has_role(UserRole::Admin)
    }
}

impl From<TokenClaims> for AuthenticatedUser {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.email,
            role: claims.role,
        }
    }
}

/// ActixWeb FromRequest trait 구현
///
/// [`AuthMiddleware`](crate::middlewares::AuthMiddleware)가 Request Extensions에
/// 넣어 둔 사용자 정보를 꺼냅니다.
impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::Auth(AuthError::InvalidToken))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::token::token::TokenKind;

    #[test]
    fn test_from_claims() {
        let claims = TokenClaims {
            sub: "user-1".to_string(),
            email: "admin@example.com".to_string(),
            role: UserRole::Admin,
            kind: TokenKind::Access,
            jti: "jti".to_string(),
            iat: 0,
            nbf: 0,
            exp: 900,
        };

        let user = AuthenticatedUser::from(claims);

        assert_eq!(user.user_id, "user-1");
        assert!(user.is_admin());
        assert!(!user.has_role(UserRole::Customer));
    }
}
