//! 요청 DTO 모듈
//!
//! | 엔드포인트 | 요청 구조체 |
//! |------------|-------------|
//! | `POST /api/v1/auth/register` | [`RegisterRequest`] |
//! | `POST /api/v1/auth/login` | [`LoginRequest`] |
//! | `POST /api/v1/auth/refresh` | [`RefreshTokenRequest`] |
//! | `POST /api/v1/auth/verify-email` | [`VerifyEmailRequest`] |
//! | `POST /api/v1/auth/forgot-password` | [`ForgotPasswordRequest`] |
//! | `POST /api/v1/auth/reset-password` | [`ResetPasswordRequest`] |

pub mod auth_request;

pub use auth_request::*;
