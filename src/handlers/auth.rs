//! 인증 관련 HTTP 핸들러
//!
//! 요청 DTO를 검증한 뒤 [`AuthService`]를 호출하고,
//! 도메인 에러는 `AppError`를 통해 상태 코드로 변환합니다.

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::domain::dto::users::request::{
    ForgotPasswordRequest, LoginRequest, RefreshTokenRequest, RegisterRequest,
    ResetPasswordRequest, VerifyEmailRequest,
};
use crate::domain::dto::users::response::MessageResponse;
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::errors::errors::AppError;
use crate::middlewares::AuthMiddleware;
use crate::services::auth::AuthService;

/// 계정 존재 여부와 관계없이 동일한 비밀번호 찾기 응답
const FORGOT_PASSWORD_MESSAGE: &str = "if the email exists, a password reset link has been sent";

fn validate<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))
}

#[post("/register")]
pub async fn register(
    auth_service: web::Data<AuthService>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    validate(&payload.0)?;

    let response = auth_service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

#[post("/login")]
pub async fn login(
    auth_service: web::Data<AuthService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    validate(&payload.0)?;

    let response = auth_service.login(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[post("/refresh")]
pub async fn refresh_tokens(
    auth_service: web::Data<AuthService>,
    payload: web::Json<RefreshTokenRequest>,
) -> Result<HttpResponse, AppError> {
    validate(&payload.0)?;

    let response = auth_service.refresh_token(&payload.refresh_token).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[post("/verify-email")]
pub async fn verify_email(
    auth_service: web::Data<AuthService>,
    payload: web::Json<VerifyEmailRequest>,
) -> Result<HttpResponse, AppError> {
    validate(&payload.0)?;

    auth_service.verify_email(&payload.token).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("email verified successfully")))
}

#[post("/forgot-password")]
pub async fn forgot_password(
    auth_service: web::Data<AuthService>,
    payload: web::Json<ForgotPasswordRequest>,
) -> Result<HttpResponse, AppError> {
    validate(&payload.0)?;

    auth_service.forgot_password(&payload.email).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new(FORGOT_PASSWORD_MESSAGE)))
}

#[post("/reset-password")]
pub async fn reset_password(
    auth_service: web::Data<AuthService>,
    payload: web::Json<ResetPasswordRequest>,
) -> Result<HttpResponse, AppError> {
    validate(&payload.0)?;

    auth_service.reset_password(&payload.token, &payload.password).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("password reset successfully")))
}

/// 현재 로그인한 사용자 정보
#[get("/me", wrap = "AuthMiddleware::required()")]
pub async fn get_current_user(
    auth_service: web::Data<AuthService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let summary = auth_service.current_user(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(summary))
}
