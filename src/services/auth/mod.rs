//! 인증 및 보안 서비스 모듈
//!
//! 계정 인증 흐름을 구성하는 서비스들을 제공합니다.
//!
//! # 구성
//!
//! - [`PasswordService`]: bcrypt 비밀번호 해싱/검증과 강도 정책
//! - [`SecureTokenGenerator`]: 이메일 인증/비밀번호 재설정용 일회용 토큰
//! - [`TokenService`]: HS256 JWT 액세스/리프레시 토큰 발급과 검증
//! - [`AuthService`]: 위 구성 요소와 저장소를 조합한 계정 생명주기 오케스트레이션
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명, 토큰 종류(`kind`) 판별
//! - 256비트 OS 난수 기반 일회용 토큰
//! - 로그인/비밀번호 찾기의 계정 열거 방지
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::AuthService;
//!
//! let auth_service = AuthService::from_settings(store, &settings);
//! let response = auth_service.login(request).await?;
//! ```

pub mod password_service;
pub mod secure_token;
pub mod token_service;
pub mod auth_service;

pub use password_service::*;
pub use secure_token::*;
pub use token_service::*;
pub use auth_service::*;
