//! JWT 인증 토큰 구조체 및 페어링 된 세트
//!
//! 액세스/리프레시 토큰이 공유하는 클레임 구조와,
//! 함께 발급되는 세션 토큰 쌍을 정의합니다.
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::UserRole;

/// 세션 토큰 종류
///
/// 두 토큰은 같은 클레임 구조와 서명 방식을 쓰므로,
/// 이 판별자로 잘못된 용도의 사용(리프레시 자리에 액세스 토큰 등)을 거부합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// JWT 토큰의 클레임(Payload) 구조체
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (사용자 ID)
/// - `email`, `role`: 발급 시점의 계정 정보
/// - `kind`: 액세스/리프레시 구분
/// - `jti`: 토큰 고유 식별자 (같은 초에 발급된 토큰도 서로 다름)
/// - `iat`, `nbf`, `exp`: 발급/유효 시작/만료 시간 (Unix timestamp)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 토큰의 주체 (사용자 ID)
    pub sub: String,
    pub email: String,
    pub role: UserRole,
    pub kind: TokenKind,
    pub jti: String,
    pub iat: i64,
    pub nbf: i64,
    pub exp: i64,
}

/// JWT 토큰 쌍 구조체
///
/// 클라이언트에게 전달되는 토큰 집합입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// 액세스 토큰 (API 접근용 단기 토큰)
    pub access_token: String,
    /// 리프레시 토큰 (토큰 갱신용 장기 토큰)
    pub refresh_token: String,
    /// 액세스 토큰 만료 시간 (초)
    pub expires_in: i64,
}
