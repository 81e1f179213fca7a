//! # Data Transfer Objects
//!
//! HTTP 경계에서 주고받는 요청/응답 구조체입니다.
//!
//! - 요청 DTO는 `#[derive(Validate)]`로 형식(이메일, 길이, 가입 가능한 역할)을 검증합니다.
//! - 응답 DTO는 비밀번호 해시나 일회용 토큰 같은 민감 정보를 포함하지 않습니다.
//!
//! ```rust,ignore
//! use validator::Validate;
//!
//! let request: RegisterRequest = serde_json::from_str(body)?;
//! request.validate()
//!     .map_err(|e| AppError::ValidationError(e.to_string()))?;
//! ```

pub mod users;

pub use users::*;
