//! JWT 토큰 관리 서비스 구현
//!
//! 액세스 토큰과 리프레시 토큰의 발급과 검증을 담당합니다.
//! 두 토큰은 같은 클레임 구조와 HMAC-SHA256 서명을 공유하고,
//! 유효 기간과 `kind` 판별자로만 구분됩니다.

use std::sync::Arc;
use chrono::Duration;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;
use crate::config::AuthSettings;
use crate::domain::entities::users::user::User;
use crate::domain::models::token::token::{TokenClaims, TokenKind, TokenPair};
use crate::errors::errors::{AuthError, AuthResult, ErrorContext, TokenValidationError};
use crate::utils::clock::Clock;

/// JWT 토큰 관리 서비스
///
/// 서명 비밀키, 유효 기간, 시계는 생성 후 변경되지 않습니다.
/// 만료 판정은 라이브러리의 시스템 시각이 아니라 주입된 [`Clock`]으로 수행합니다.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl TokenService {
    pub fn new(secret: &str, access_ttl: Duration, refresh_ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_ttl,
            refresh_ttl,
            clock,
        }
    }

    pub fn from_settings(settings: &AuthSettings, clock: Arc<dyn Clock>) -> Self {
        Self::new(
            &settings.jwt_secret,
            settings.access_token_ttl,
            settings.refresh_token_ttl,
            clock,
        )
    }

    /// 액세스 토큰 유효 기간 (초)
    pub fn access_token_expires_in(&self) -> i64 {
        self.access_ttl.num_seconds()
    }

    /// 토큰 쌍 생성 (액세스 + 리프레시)
    ///
    /// # Errors
    ///
    /// * `AuthError::InfrastructureError` - 서명 라이브러리 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token_pair = token_service.issue_pair(&user)?;
    /// println!("Expires in: {} seconds", token_pair.expires_in);
    /// ```
    pub fn issue_pair(&self, user: &User) -> AuthResult<TokenPair> {
        let access_token = self.sign(user, TokenKind::Access, self.access_ttl)?;
        let refresh_token = self.sign(user, TokenKind::Refresh, self.refresh_ttl)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            expires_in: self.access_token_expires_in(),
        })
    }

    fn sign(&self, user: &User, kind: TokenKind, lifetime: Duration) -> AuthResult<String> {
        let now = self.clock.now();

        let claims = TokenClaims {
            sub: user.id.clone(),
            email: user.email.clone(),
            role: user.role,
            kind,
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            exp: (now + lifetime).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .context("JWT 토큰 서명 실패")
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// 액세스/리프레시 토큰이 공유하는 단일 검증 경로입니다.
    ///
    /// # Errors
    ///
    /// * `TokenValidationError::Expired` - 서명은 유효하나 만료됨 (`now >= exp`)
    /// * `TokenValidationError::Invalid` - 서명 불일치, 형식 오류, HS256 이외의 알고리즘, 아직 유효하지 않은 토큰
    pub fn validate(&self, token: &str) -> Result<TokenClaims, TokenValidationError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "nbf", "iat", "sub"]);

        let claims = decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| {
                log::debug!("JWT 디코딩 실패: {:?}", e.kind());
                TokenValidationError::Invalid
            })?;

        let now = self.clock.now().timestamp();
        if now >= claims.exp {
            return Err(TokenValidationError::Expired);
        }
        if now < claims.nbf {
            return Err(TokenValidationError::Invalid);
        }

        Ok(claims)
    }

    /// 특정 종류의 토큰만 허용하는 검증
    ///
    /// 종류가 다른 토큰은 `Invalid`로 분류합니다.
    pub fn validate_kind(&self, token: &str, expected: TokenKind) -> Result<TokenClaims, TokenValidationError> {
        let claims = self.validate(token)?;

        if claims.kind != expected {
            log::debug!("토큰 종류 불일치: expected {:?}, got {:?}", expected, claims.kind);
            return Err(TokenValidationError::Invalid);
        }

        Ok(claims)
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token = TokenService::extract_bearer_token("Bearer eyJhbGciOiJIUzI1NiJ9...")?;
    /// ```
    pub fn extract_bearer_token(auth_header: &str) -> AuthResult<&str> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(AuthError::InvalidToken),
        }
    }
}
