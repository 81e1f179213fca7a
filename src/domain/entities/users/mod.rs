//! Users Entity Module
//!
//! 계정 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 주요 구성 요소
//!
//! - [`User`](user::User): 자격 증명, 역할, 인증 상태를 가진 계정
//! - [`UserRole`](user::UserRole): customer / service_provider / admin
//! - [`OneTimeToken`](user::OneTimeToken): 토큰과 만료 시각 쌍
//!
//! # 상태 전이
//!
//! ```text
//! Unverified --[유효한 인증 토큰]--> Verified
//! NoResetPending --[ForgotPassword]--> ResetPending --[ResetPassword]--> NoResetPending
//! ```

pub mod user;

pub use user::*;
