//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 인증 서비스의 에러는 세 계층으로 나뉩니다.
//!
//! - [`AuthError`]: 인증/계정 생명주기의 도메인 에러. HTTP를 전혀 모릅니다.
//! - [`StoreError`]: `UserStore` 구현체가 돌려주는 구조화된 저장소 에러
//! - [`AppError`]: 전송 계층(HTTP) 에러. `actix_web::ResponseError`를 구현하여
//!   상태 코드와 JSON 응답으로 변환됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::{AuthError, ErrorContext};
//!
//! let token = generator.generate()?;
//! store.save(&user).await.context("비밀번호 재설정 토큰 저장 실패")?;
//! ```

use thiserror::Error;

/// 인증 도메인 에러
///
/// 전송 계층은 이 값을 그대로 받아 상태 코드로 매핑합니다.
/// `InfrastructureError`는 도메인 의미로 번역하지 않고 컨텍스트만 붙여 전달합니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// 같은 이메일의 계정이 이미 존재함
    #[error("user with this email already exists")]
    AccountAlreadyExists,

    /// 이메일 또는 비밀번호 불일치 (존재 여부를 구분하지 않음)
    #[error("invalid email or password")]
    InvalidCredentials,

    /// 이메일 인증 전 로그인 시도 (`REQUIRE_VERIFIED_EMAIL` 활성화 시)
    #[error("email not verified")]
    EmailNotVerified,

    #[error("invalid token")]
    InvalidToken,

    #[error("token has expired")]
    TokenExpired,

    #[error("email already verified")]
    EmailAlreadyVerified,

    #[error("password must be at least 8 characters long")]
    PasswordTooShort,

    /// bcrypt 입력 한계(72바이트) 초과
    #[error("password must be at most 72 bytes long")]
    PasswordTooLong,

    #[error("password must contain at least one uppercase letter, one lowercase letter, and one number")]
    PasswordTooWeak,

    /// 저장소, 난수원, 서명 라이브러리 등 의존성에서 발생한 실패
    #[error("Infrastructure error: {0}")]
    InfrastructureError(String),
}

impl AuthError {
    /// 클라이언트가 분기할 수 있는 고정 에러 코드
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::AccountAlreadyExists => "ACCOUNT_ALREADY_EXISTS",
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::EmailNotVerified => "EMAIL_NOT_VERIFIED",
            AuthError::InvalidToken => "INVALID_TOKEN",
            AuthError::TokenExpired => "TOKEN_EXPIRED",
            AuthError::EmailAlreadyVerified => "EMAIL_ALREADY_VERIFIED",
            AuthError::PasswordTooShort => "PASSWORD_TOO_SHORT",
            AuthError::PasswordTooLong => "PASSWORD_TOO_LONG",
            AuthError::PasswordTooWeak => "PASSWORD_TOO_WEAK",
            AuthError::InfrastructureError(_) => "INTERNAL_ERROR",
        }
    }
}

/// 저장소 에러
///
/// "사용자 없음"과 "저장소 장애"를 반드시 구분해야 합니다.
/// 메시지 문자열 비교 없이 variant로만 분기합니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("user not found")]
    NotFound,

    /// 이메일 유니크 제약 위반 (insert 시점의 최종 판정)
    #[error("duplicate email")]
    DuplicateEmail,

    #[error("Database error: {0}")]
    Database(String),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound)
    }
}

/// 베어러 토큰 검증 실패 분류
///
/// 서명이 유효하지만 만료된 경우만 `Expired`이고, 나머지는 모두 `Invalid`입니다.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenValidationError {
    #[error("token has expired")]
    Expired,

    /// 서명 불일치, 형식 오류, 알고리즘 불일치, 토큰 종류 불일치
    #[error("invalid token")]
    Invalid,
}

/// 전송 계층 에러 타입
///
/// 핸들러가 반환하며 자동으로 HTTP 응답으로 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 요청 DTO 검증 실패 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 인증 도메인 에러 (상태 코드는 variant별로 결정)
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn http_status(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Auth(err) => match err {
                AuthError::AccountAlreadyExists => StatusCode::CONFLICT,
                AuthError::InvalidCredentials
                | AuthError::EmailNotVerified
                | AuthError::InvalidToken
                | AuthError::TokenExpired => StatusCode::UNAUTHORIZED,
                AuthError::EmailAlreadyVerified
                | AuthError::PasswordTooShort
                | AuthError::PasswordTooLong
                | AuthError::PasswordTooWeak => StatusCode::BAD_REQUEST,
                AuthError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::Auth(err) => err.code(),
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        self.http_status()
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 서버 로그에만 상세 정보를 남기고,
    /// 클라이언트에는 일반 메시지만 전달합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.http_status();

        let message = if status.is_server_error() {
            log::error!("요청 처리 중 내부 오류: {}", self);
            "internal server error".to_string()
        } else {
            self.to_string()
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": message,
                "code": self.code(),
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 인증 도메인 연산의 Result 타입 별칭
pub type AuthResult<T> = Result<T, AuthError>;

/// 외부 에러를 `AuthError::InfrastructureError`로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AuthResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AuthResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AuthResult<T> {
        self.map_err(|e| AuthError::InfrastructureError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AuthResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AuthError::InfrastructureError(format!("{}: {}", f(), e)))
    }
}
